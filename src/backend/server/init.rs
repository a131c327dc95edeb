/**
 * Server Initialization
 *
 * Builds the application state and router, and provides the shutdown
 * signal used by the binary.
 *
 * # Initialization Process
 *
 * 1. Connect the document store (see `server::config`)
 * 2. Create the collaboration broadcaster
 * 3. Assemble the router with all routes and middleware
 */

use axum::Router;
use tokio::signal;

use crate::backend::realtime::broadcast::CollabBroadcaster;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_store;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Create the application state for `config`
pub async fn create_state(config: AppConfig) -> AppState {
    tracing::info!("Initializing translation platform backend");

    let store = load_store(&config).await;
    let app_state = AppState::new(store, config);

    tracing::info!("Document store and collaboration broadcaster initialized");
    app_state
}

/// Create and configure the Axum application
pub async fn create_app(config: AppConfig) -> (Router<()>, AppState) {
    let app_state = create_state(config).await;
    let app = create_router(app_state.clone());

    tracing::info!("Router configured");
    (app, app_state)
}

/// Resolves on Ctrl-C or SIGTERM, after closing every collaboration stream
///
/// Open streams never finish on their own, so they are ended here to let
/// graceful shutdown complete.
pub async fn shutdown_signal(broadcaster: CollabBroadcaster) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {:?}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {:?}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, closing collaboration streams");
    broadcaster.close();
}
