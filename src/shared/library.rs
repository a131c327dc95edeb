/**
 * Library Data Structures
 *
 * Wire types for books and chapters. Requests are decoded from request
 * bodies, validated at the boundary, and turned into the record shapes the
 * document store persists. Responses carry the store-assigned identity under
 * the public `id` field.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::shared::error::SharedError;

/// Store-assigned identity token
///
/// Rendered as a canonical hyphenated UUID string on the wire. Parsing is
/// the only validation applied to identities at the API boundary; whether a
/// record with that identity exists is a separate question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Generate a fresh identity
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse the token carried in `field`, mapping failures to
    /// `SharedError::InvalidIdentity`.
    pub fn parse(field: &str, value: &str) -> Result<Self, SharedError> {
        value
            .parse()
            .map_err(|_| SharedError::invalid_identity(field, value))
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for RecordId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl FromStr for RecordId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.hyphenated().fmt(f)
    }
}

/// Response for create endpoints (`{"id": ...}`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedResponse {
    pub id: RecordId,
}

/// Body of `POST /api/books`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateBookRequest {
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl CreateBookRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        if self.title.trim().is_empty() {
            return Err(SharedError::validation("title", "must not be empty"));
        }
        Ok(())
    }
}

/// A stored book
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    pub id: RecordId,
    pub title: String,
    pub author: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of `POST /api/chapters`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateChapterRequest {
    pub book_id: String,
    pub title: String,
    pub source_language: String,
    pub target_language: String,
    pub source_text: String,
}

impl CreateChapterRequest {
    /// Check the `book_id` format. The referenced book is not looked up.
    pub fn validate(&self) -> Result<RecordId, SharedError> {
        RecordId::parse("book_id", &self.book_id)
    }
}

/// Chapter as persisted on creation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewChapter {
    pub book_id: String,
    pub title: String,
    pub source_language: String,
    pub target_language: String,
    pub source_text: String,
    pub translation_text: String,
}

impl NewChapter {
    /// Build the record to persist, storing `book_id` in its canonical form
    pub fn new(book_id: RecordId, request: CreateChapterRequest) -> Self {
        Self {
            book_id: book_id.to_string(),
            title: request.title,
            source_language: request.source_language,
            target_language: request.target_language,
            source_text: request.source_text,
            translation_text: String::new(),
        }
    }
}

/// A stored chapter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chapter {
    pub id: RecordId,
    pub book_id: String,
    pub title: String,
    pub source_language: String,
    pub target_language: String,
    pub source_text: String,
    #[serde(default)]
    pub translation_text: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of `PATCH /api/chapters/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateChapterRequest {
    pub translation_text: String,
}

/// Query string of `GET /api/chapters`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChapterQuery {
    pub book_id: Option<String>,
}

impl ChapterQuery {
    /// The `book_id` filter, treating an empty value as absent
    ///
    /// Tokens that parse as identities are rewritten to the canonical form
    /// chapters are stored under; anything else is matched verbatim.
    pub fn book_id(&self) -> Option<String> {
        let raw = self.book_id.as_deref().filter(|id| !id.is_empty())?;
        Some(match RecordId::parse("book_id", raw) {
            Ok(id) => id.to_string(),
            Err(_) => raw.to_string(),
        })
    }
}
