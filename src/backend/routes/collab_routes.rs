/**
 * Collaboration Route Handlers
 *
 * # Routes
 *
 * - `GET /api/collab/stream` - Server-Sent Events stream of collaboration events
 * - `POST /api/collab/publish` - Fan an event out to every open stream
 */

use axum::routing::{get, post};
use axum::Router;

use crate::backend::realtime::{handle_collab_publish, handle_collab_stream};
use crate::backend::server::state::AppState;

/// Configure collaboration routes
pub fn configure_collab_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/collab/stream", get(handle_collab_stream))
        .route("/api/collab/publish", post(handle_collab_publish))
}
