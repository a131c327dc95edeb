//! Book API integration tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use translation_hub::shared::Book;

use crate::assert_error_response;
use crate::common::{create_book, memory_server};

#[tokio::test]
async fn test_create_book_returns_id() {
    let server = memory_server();

    let response = server
        .post("/api/books")
        .json(&json!({
            "title": "Moby Dick",
            "author": "Herman Melville",
            "description": "A whale of a tale"
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let id = body["id"].as_str().expect("id should be a string");
    assert!(uuid::Uuid::parse_str(id).is_ok(), "id is not a uuid: {}", id);
}

#[tokio::test]
async fn test_list_books_includes_created_book() {
    let server = memory_server();
    let id = create_book(&server, "Moby Dick").await;

    let books: Vec<Book> = server.get("/api/books").await.json();

    assert_eq!(books.len(), 1);
    assert_eq!(books[0].id, id);
    assert_eq!(books[0].title, "Moby Dick");
    assert_eq!(books[0].author, None);
    assert!(books[0].created_at.is_some());
}

#[tokio::test]
async fn test_list_books_empty_store() {
    let server = memory_server();

    let response = server.get("/api/books").await;

    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[tokio::test]
async fn test_create_book_missing_title_is_bad_request() {
    let server = memory_server();

    let response = server
        .post("/api/books")
        .json(&json!({ "author": "Anonymous" }))
        .await;

    assert_error_response!(response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_book_blank_title_is_bad_request() {
    let server = memory_server();

    let response = server
        .post("/api/books")
        .json(&json!({ "title": "   " }))
        .await;

    assert_error_response!(response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_book_malformed_json_is_bad_request() {
    let server = memory_server();

    let response = server.post("/api/books").text("{not json").await;

    let body = assert_error_response!(response, StatusCode::BAD_REQUEST);
    crate::assert_contains!(body["error"].as_str().unwrap_or_default(), "Invalid request body");
}
