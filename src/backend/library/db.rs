//! Typed store operations for books and chapters
//!
//! Maps between the explicit wire types in `shared::library` and the
//! loosely-typed documents the store holds.

use serde_json::Value;

use crate::backend::store::{encode, Document, DocumentStore, Filter, StoreError};
use crate::shared::{Book, Chapter, CreateBookRequest, NewChapter, RecordId};

pub const BOOK_COLLECTION: &str = "book";
pub const CHAPTER_COLLECTION: &str = "chapter";

/// Create a new book
pub async fn create_book(
    store: &dyn DocumentStore,
    book: &CreateBookRequest,
) -> Result<RecordId, StoreError> {
    store.create(BOOK_COLLECTION, encode(book)?).await
}

/// Get all books
pub async fn list_books(store: &dyn DocumentStore) -> Result<Vec<Book>, StoreError> {
    store
        .list(BOOK_COLLECTION, Filter::new())
        .await?
        .into_iter()
        .map(|doc| doc.decode(BOOK_COLLECTION))
        .collect()
}

/// Create a new chapter
pub async fn create_chapter(
    store: &dyn DocumentStore,
    chapter: &NewChapter,
) -> Result<RecordId, StoreError> {
    store.create(CHAPTER_COLLECTION, encode(chapter)?).await
}

/// Get chapters, optionally only those of one book
pub async fn list_chapters(
    store: &dyn DocumentStore,
    book_id: Option<&str>,
) -> Result<Vec<Chapter>, StoreError> {
    let mut filter = Filter::new();
    if let Some(book_id) = book_id {
        filter.insert("book_id".to_string(), Value::String(book_id.to_string()));
    }

    store
        .list(CHAPTER_COLLECTION, filter)
        .await?
        .into_iter()
        .map(|doc| doc.decode(CHAPTER_COLLECTION))
        .collect()
}

/// Get a chapter by ID
pub async fn get_chapter(
    store: &dyn DocumentStore,
    id: RecordId,
) -> Result<Option<Chapter>, StoreError> {
    store
        .find_one(CHAPTER_COLLECTION, id)
        .await?
        .map(|doc| doc.decode(CHAPTER_COLLECTION))
        .transpose()
}

/// Replace a chapter's translation text
///
/// Returns `false` when no chapter has the given ID.
pub async fn update_translation(
    store: &dyn DocumentStore,
    id: RecordId,
    translation_text: &str,
) -> Result<bool, StoreError> {
    let mut changes = Document::new();
    changes.insert(
        "translation_text".to_string(),
        Value::String(translation_text.to_string()),
    );
    store.update_one(CHAPTER_COLLECTION, id, changes).await
}
