/**
 * Translation Hub Server Entry Point
 *
 * Loads configuration from the environment, connects the document store
 * and serves the HTTP API until Ctrl-C or SIGTERM.
 */

use translation_hub::backend::server::{create_app, shutdown_signal};
use translation_hub::shared::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=debug"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::info!("[STARTUP] Server initialization started");

    let config = AppConfig::from_env()?;
    let addr = config.bind_addr();

    let (app, app_state) = create_app(config).await;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(app_state.broadcaster.clone()))
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
