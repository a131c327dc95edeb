/**
 * Application State Management
 *
 * `AppState` is the single state container handed to the router. It owns
 * the document store, the collaboration broadcaster and the configuration;
 * nothing in the backend reaches for global state.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract only the part they
 * need, e.g. `State(store): State<Arc<dyn DocumentStore>>` or
 * `State(broadcaster): State<CollabBroadcaster>`.
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::backend::realtime::broadcast::CollabBroadcaster;
use crate::backend::store::DocumentStore;
use crate::shared::AppConfig;

/// Shared application state
///
/// Cloned into every request; all fields are reference counted.
#[derive(Clone)]
pub struct AppState {
    /// Document store holding books and chapters
    pub store: Arc<dyn DocumentStore>,

    /// Fan-out of collaboration events to open streams
    pub broadcaster: CollabBroadcaster,

    /// Configuration the server was started with
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Build state around `store` with a fresh broadcaster
    pub fn new(store: Arc<dyn DocumentStore>, config: AppConfig) -> Self {
        Self {
            store,
            broadcaster: CollabBroadcaster::new(),
            config: Arc::new(config),
        }
    }
}

impl FromRef<AppState> for Arc<dyn DocumentStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

impl FromRef<AppState> for CollabBroadcaster {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.broadcaster.clone()
    }
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
