//! Status Endpoints
//!
//! `GET /` answers with a fixed banner; `GET /test` reports whether the
//! document store is reachable. Neither depends on the store being up.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::backend::server::state::AppState;

/// Response of `GET /`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RootResponse {
    pub message: String,
}

/// Response of `GET /test`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiagnosticsResponse {
    pub backend: String,
    pub store: String,
    pub database: String,
    pub database_url: String,
    pub database_name: Option<String>,
    pub connection_status: String,
    pub collections: Vec<String>,
}

/// Root banner (GET /)
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Translation platform backend running".to_string(),
    })
}

/// Store diagnostics (GET /test)
pub async fn diagnostics(State(app_state): State<AppState>) -> Json<DiagnosticsResponse> {
    let status = app_state.store.status().await;

    let database = match (&status.error, status.connected) {
        (None, true) => "Connected & Working".to_string(),
        (Some(error), _) => format!("Error: {}", truncate(error, 50)),
        (None, false) => "Not Available".to_string(),
    };
    let database_url = if app_state.config.database_url.is_some() {
        "Set"
    } else {
        "Not Set"
    };
    let connection_status = if status.connected {
        "Connected"
    } else {
        "Not Connected"
    };

    Json(DiagnosticsResponse {
        backend: "Running".to_string(),
        store: status.backend.to_string(),
        database,
        database_url: database_url.to_string(),
        database_name: status.database_name,
        connection_status: connection_status.to_string(),
        collections: status.collections,
    })
}

fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
