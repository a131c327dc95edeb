/**
 * Error Conversion
 *
 * `IntoResponse` for `BackendError`, plus the JSON body parser handlers use
 * so that malformed bodies and missing fields are reported as 400s rather
 * than axum's default 422.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "Chapter not found",
 *   "status": 404
 * }
 * ```
 */

use axum::{
    body::Bytes,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!("[Server] Request failed: {}", message);
        } else {
            tracing::debug!("[Server] Request rejected ({}): {}", status, message);
        }

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}

/// Parse a JSON request body, mapping any decoding failure to
/// `InvalidArgument`.
pub fn parse_json<T: DeserializeOwned>(body: &Bytes) -> Result<T, BackendError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!("[Server] Failed to parse request body: {:?}", e);
        BackendError::invalid_argument(format!("Invalid request body: {}", e))
    })
}
