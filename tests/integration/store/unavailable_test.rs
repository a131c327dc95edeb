//! Degraded-mode tests: the configured database could not be reached

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;
use translation_hub::backend::store::UnavailableStore;
use translation_hub::shared::RecordId;

use crate::assert_error_response;
use crate::common::{create_test_server, state_with_store};

fn degraded_server() -> axum_test::TestServer {
    let store = Arc::new(UnavailableStore::new("connection refused"));
    create_test_server(state_with_store(store))
}

#[tokio::test]
async fn test_store_routes_fail_with_internal_error() {
    let server = degraded_server();

    let list = server.get("/api/books").await;
    let body = assert_error_response!(list, StatusCode::INTERNAL_SERVER_ERROR);
    crate::assert_contains!(body["error"].as_str().unwrap_or_default(), "connection refused");

    let create = server
        .post("/api/books")
        .json(&json!({ "title": "Moby Dick" }))
        .await;
    assert_error_response!(create, StatusCode::INTERNAL_SERVER_ERROR);

    let get = server
        .get(&format!("/api/chapters/{}", RecordId::new()))
        .await;
    assert_error_response!(get, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_identity_is_checked_before_store() {
    let server = degraded_server();

    let response = server.get("/api/chapters/xyz").await;

    assert_error_response!(response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_store_independent_routes_keep_working() {
    let server = degraded_server();

    server.get("/").await.assert_status_ok();
    server
        .post("/api/translate")
        .json(&json!({ "text": "abc", "source_language": "en", "target_language": "it" }))
        .await
        .assert_json(&json!({ "translated_text": "[en->it] cba" }));
    server
        .post("/api/collab/publish")
        .json(&json!({ "chapter_id": "c1", "user": "alice", "content": "hi" }))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_diagnostics_reports_store_error() {
    let server = degraded_server();

    let response = server.get("/test").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["backend"], "Running");
    assert_eq!(body["connection_status"], "Not Connected");
    assert_eq!(body["database"], "Error: connection refused");
    assert_eq!(body["collections"], json!([]));
}
