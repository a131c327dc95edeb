/**
 * Backend Error Types
 *
 * Every handler failure ends up as one of three outcomes:
 *
 * - `InvalidArgument` (400) - malformed identity, missing or empty field,
 *   unparseable body
 * - `NotFound` (404) - no record matched
 * - `Store` / `SerializationError` (500) - store unavailable or any
 *   unexpected fault; the underlying message is surfaced to the caller
 *
 * Store and serialization errors convert through `?`; shared validation
 * errors convert into `InvalidArgument`.
 */

use thiserror::Error;
use axum::http::StatusCode;
use crate::backend::store::StoreError;
use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use translation_hub::backend::error::BackendError;
///
/// let err = BackendError::invalid_argument("Invalid chapter id");
/// assert_eq!(err.status_code().as_u16(), 400);
///
/// let err = BackendError::not_found("Chapter not found");
/// assert_eq!(err.status_code().as_u16(), 404);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Request carried a malformed identity or an invalid body
    #[error("{message}")]
    InvalidArgument {
        /// Human-readable error message
        message: String,
    },

    /// No record matched the request
    #[error("{message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// Document store failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl BackendError {
    /// Create a new invalid-argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// - `InvalidArgument` - 400 Bad Request
    /// - `NotFound` - 404 Not Found
    /// - everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidArgument { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Store(_) | Self::SerializationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<SharedError> for BackendError {
    fn from(err: SharedError) -> Self {
        Self::invalid_argument(err.to_string())
    }
}
