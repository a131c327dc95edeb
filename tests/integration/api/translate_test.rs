//! Translate API integration tests

use axum::http::StatusCode;
use serde_json::json;
use translation_hub::shared::TranslateResponse;

use crate::assert_error_response;
use crate::common::memory_server;

#[tokio::test]
async fn test_translate_hello() {
    let server = memory_server();

    let response = server
        .post("/api/translate")
        .json(&json!({
            "text": "hello",
            "source_language": "en",
            "target_language": "es"
        }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "translated_text": "[en->es] olleh" }));
}

#[tokio::test]
async fn test_translate_empty_text() {
    let server = memory_server();

    let response: TranslateResponse = server
        .post("/api/translate")
        .json(&json!({
            "text": "",
            "source_language": "de",
            "target_language": "fr"
        }))
        .await
        .json();

    assert_eq!(response.translated_text, "[de->fr] ");
}

#[tokio::test]
async fn test_translate_missing_language_is_bad_request() {
    let server = memory_server();

    let response = server
        .post("/api/translate")
        .json(&json!({ "text": "hello" }))
        .await;

    assert_error_response!(response, StatusCode::BAD_REQUEST);
}
