/**
 * Router Configuration
 *
 * Combines all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Status routes (`/`, `/test`)
 * 2. API routes (books, chapters, translate)
 * 3. Collaboration routes (stream, publish)
 * 4. Fallback handler (404)
 *
 * # Middleware
 *
 * - Permissive CORS: any origin, method and header
 * - Request tracing via `tower_http::trace`
 */

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::collab_routes::configure_collab_routes;
use crate::backend::server::state::AppState;
use crate::backend::status::{diagnostics, root};

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Store, broadcaster and configuration shared by handlers
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new()
        .route("/", get(root))
        .route("/test", get(diagnostics));

    let router = configure_api_routes(router);
    let router = configure_collab_routes(router);

    // Unknown paths get the same JSON error shape as handler failures
    let router = router.fallback(|| async { BackendError::not_found("Not Found") });

    router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
