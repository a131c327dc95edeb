//! Library HTTP Handlers
//!
//! Books and chapters over the document store. Identity tokens are
//! validated for format only; no handler checks that a referenced book
//! exists.

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use super::db;
use crate::backend::error::{parse_json, BackendError};
use crate::backend::store::DocumentStore;
use crate::shared::{
    Book, Chapter, ChapterQuery, CreateBookRequest, CreateChapterRequest, CreatedResponse,
    NewChapter, RecordId, StatusResponse, UpdateChapterRequest,
};

/// Create a book (POST /api/books)
pub async fn create_book(
    State(store): State<Arc<dyn DocumentStore>>,
    body: Bytes,
) -> Result<Json<CreatedResponse>, BackendError> {
    let request: CreateBookRequest = parse_json(&body)?;
    request.validate()?;

    let id = db::create_book(store.as_ref(), &request).await?;
    tracing::info!("Created book {} ({})", id, request.title);

    Ok(Json(CreatedResponse { id }))
}

/// List all books (GET /api/books)
pub async fn list_books(
    State(store): State<Arc<dyn DocumentStore>>,
) -> Result<Json<Vec<Book>>, BackendError> {
    let books = db::list_books(store.as_ref()).await?;
    Ok(Json(books))
}

/// Create a chapter (POST /api/chapters)
///
/// # Errors
///
/// * `400 Bad Request` - `book_id` is not an identity token, or a field is missing
pub async fn create_chapter(
    State(store): State<Arc<dyn DocumentStore>>,
    body: Bytes,
) -> Result<Json<CreatedResponse>, BackendError> {
    let request: CreateChapterRequest = parse_json(&body)?;
    let book_id = request.validate()?;

    let id = db::create_chapter(store.as_ref(), &NewChapter::new(book_id, request)).await?;
    tracing::info!("Created chapter {} for book {}", id, book_id);

    Ok(Json(CreatedResponse { id }))
}

/// List chapters, optionally filtered by book (GET /api/chapters?book_id=)
pub async fn list_chapters(
    State(store): State<Arc<dyn DocumentStore>>,
    Query(query): Query<ChapterQuery>,
) -> Result<Json<Vec<Chapter>>, BackendError> {
    let chapters = db::list_chapters(store.as_ref(), query.book_id().as_deref()).await?;
    Ok(Json(chapters))
}

/// Get one chapter (GET /api/chapters/{id})
///
/// # Errors
///
/// * `400 Bad Request` - malformed id
/// * `404 Not Found` - no such chapter
pub async fn get_chapter(
    State(store): State<Arc<dyn DocumentStore>>,
    Path(chapter_id): Path<String>,
) -> Result<Json<Chapter>, BackendError> {
    let id = parse_chapter_id(&chapter_id)?;

    db::get_chapter(store.as_ref(), id)
        .await?
        .map(Json)
        .ok_or_else(|| BackendError::not_found("Chapter not found"))
}

/// Replace a chapter's translation (PATCH /api/chapters/{id})
///
/// # Errors
///
/// * `400 Bad Request` - malformed id or body
/// * `404 Not Found` - no such chapter
pub async fn update_chapter(
    State(store): State<Arc<dyn DocumentStore>>,
    Path(chapter_id): Path<String>,
    body: Bytes,
) -> Result<Json<StatusResponse>, BackendError> {
    let id = parse_chapter_id(&chapter_id)?;
    let request: UpdateChapterRequest = parse_json(&body)?;

    if !db::update_translation(store.as_ref(), id, &request.translation_text).await? {
        return Err(BackendError::not_found("Chapter not found"));
    }
    tracing::info!("Updated translation of chapter {}", id);

    Ok(Json(StatusResponse::ok()))
}

fn parse_chapter_id(value: &str) -> Result<RecordId, BackendError> {
    RecordId::parse("chapter id", value).map_err(BackendError::from)
}
