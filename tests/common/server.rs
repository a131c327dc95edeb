//! Test server helpers
//!
//! Every helper builds a fresh `AppState`, so tests never share records or
//! subscribers.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum_test::TestServer;
use translation_hub::backend::routes::create_router;
use translation_hub::backend::server::AppState;
use translation_hub::backend::store::{DocumentStore, MemoryStore};
use translation_hub::shared::AppConfig;

/// State over a fresh in-memory store
pub fn memory_state() -> AppState {
    AppState::new(Arc::new(MemoryStore::new()), AppConfig::default())
}

/// State over an arbitrary store
pub fn state_with_store(store: Arc<dyn DocumentStore>) -> AppState {
    AppState::new(store, AppConfig::default())
}

/// In-process server for request/response tests
pub fn create_test_server(app_state: AppState) -> TestServer {
    TestServer::new(create_router(app_state)).expect("Failed to create test server")
}

/// Server over a fresh in-memory store
pub fn memory_server() -> TestServer {
    create_test_server(memory_state())
}

/// Serve the app on an ephemeral localhost port
///
/// Streaming responses need a real socket, so SSE tests use this instead of
/// `TestServer`.
pub async fn spawn_http_server(app_state: AppState) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");
    let app = create_router(app_state);

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server failed");
    });

    addr
}

/// Poll `condition` until it holds or `within` elapses
pub async fn wait_until<F>(within: Duration, mut condition: F) -> bool
where
    F: FnMut() -> bool,
{
    let deadline = tokio::time::Instant::now() + within;
    while tokio::time::Instant::now() < deadline {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    condition()
}
