/**
 * Collaboration Publish Handler
 *
 * Implements `POST /api/collab/publish`. The event is queued for every
 * open stream before the response is sent; whether and when each client
 * reads it is not tracked.
 */

use crate::backend::error::{parse_json, BackendError};
use crate::backend::realtime::broadcast::CollabBroadcaster;
use crate::shared::{CollabEvent, StatusResponse};
use axum::{body::Bytes, extract::State, Json};

/// Handle a collaboration event (POST /api/collab/publish)
///
/// # Request Body
///
/// ```json
/// {"chapter_id": "...", "user": "alice", "content": "..."}
/// ```
///
/// # Errors
///
/// * `400 Bad Request` - body is not a complete event
pub async fn handle_collab_publish(
    State(broadcaster): State<CollabBroadcaster>,
    body: Bytes,
) -> Result<Json<StatusResponse>, BackendError> {
    let event: CollabEvent = parse_json(&body)?;

    let delivered = broadcaster.publish(&event)?;
    tracing::info!(
        "[Collab] Event from {} on chapter {} queued for {} subscribers",
        event.user,
        event.chapter_id,
        delivered
    );

    Ok(Json(StatusResponse::ok()))
}
