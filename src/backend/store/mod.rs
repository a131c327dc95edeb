//! Document Store Module
//!
//! Gateway to the schema-flexible document database holding books and
//! chapters. Records are JSON objects grouped into named collections and
//! keyed by a store-assigned [`RecordId`].
//!
//! # Architecture
//!
//! - **`DocumentStore`** - Object-safe async trait implemented by every backend
//! - **`postgres`** - PostgreSQL implementation (JSONB bodies)
//! - **`memory`** - In-process implementation for local runs and tests
//! - **`unavailable`** - Stand-in installed when the database is unreachable
//!
//! # Module Structure
//!
//! ```text
//! store/
//! ├── mod.rs          - Trait, record types, errors
//! ├── postgres.rs     - PgDocumentStore
//! ├── memory.rs       - MemoryStore
//! └── unavailable.rs  - UnavailableStore
//! ```
//!
//! # Timestamps
//!
//! Every backend stamps `created_at` and `updated_at` on `create` and
//! refreshes `updated_at` on `update_one`. Both are RFC 3339 UTC strings
//! inside the document body.

use async_trait::async_trait;
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::shared::RecordId;

/// PostgreSQL document store
pub mod postgres;

/// In-memory document store
pub mod memory;

/// Placeholder store for an unreachable database
pub mod unavailable;

pub use memory::MemoryStore;
pub use postgres::PgDocumentStore;
pub use unavailable::UnavailableStore;

/// Document body: a JSON object
pub type Document = Map<String, Value>;

/// Exact-match filter: every entry must equal the corresponding body field
pub type Filter = Map<String, Value>;

/// A document together with its identity
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: RecordId,
    pub body: Document,
}

impl StoredDocument {
    /// Decode into a typed record, exposing the identity as `id`
    pub fn decode<T: DeserializeOwned>(self, collection: &str) -> Result<T, StoreError> {
        let mut body = self.body;
        body.insert("id".to_string(), Value::String(self.id.to_string()));
        serde_json::from_value(Value::Object(body)).map_err(|e| StoreError::Malformed {
            collection: collection.to_string(),
            id: self.id,
            reason: e.to_string(),
        })
    }

    fn matches(&self, filter: &Filter) -> bool {
        filter
            .iter()
            .all(|(key, expected)| self.body.get(key) == Some(expected))
    }
}

/// Encode a typed record into a document body
pub fn encode<T: Serialize>(record: &T) -> Result<Document, StoreError> {
    match serde_json::to_value(record)? {
        Value::Object(body) => Ok(body),
        other => Err(StoreError::NotAnObject(other.to_string())),
    }
}

/// Connectivity report used by the diagnostics endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreStatus {
    /// Short name of the backend, e.g. `postgres`
    pub backend: &'static str,
    /// Whether the store answered
    pub connected: bool,
    /// Name of the database, when the backend has one
    pub database_name: Option<String>,
    /// Up to ten collection names
    pub collections: Vec<String>,
    /// Error seen while probing, if any
    pub error: Option<String>,
}

/// Maximum number of collections reported by [`DocumentStore::status`]
pub const STATUS_COLLECTION_LIMIT: usize = 10;

/// Document store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database is not reachable
    #[error("document store unavailable: {0}")]
    Unavailable(String),

    /// Query failure reported by the database driver
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Record could not be serialized
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Record encoded to something other than a JSON object
    #[error("record must encode to a JSON object, got {0}")]
    NotAnObject(String),

    /// Stored record does not fit the expected shape
    #[error("malformed {collection} record {id}: {reason}")]
    Malformed {
        collection: String,
        id: RecordId,
        reason: String,
    },
}

/// Gateway to the document database
///
/// Implementations must be safe to share between request tasks.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert `document` into `collection` and return its new identity
    async fn create(&self, collection: &str, document: Document) -> Result<RecordId, StoreError>;

    /// All documents in `collection` matching `filter`, in insertion order
    async fn list(&self, collection: &str, filter: Filter) -> Result<Vec<StoredDocument>, StoreError>;

    /// The document with identity `id`, if any
    async fn find_one(&self, collection: &str, id: RecordId) -> Result<Option<StoredDocument>, StoreError>;

    /// Merge `changes` into the document with identity `id`.
    /// Returns `false` when no document matched.
    async fn update_one(&self, collection: &str, id: RecordId, changes: Document) -> Result<bool, StoreError>;

    /// Probe connectivity for diagnostics
    async fn status(&self) -> StoreStatus;
}

/// Stamp creation timestamps onto a new document
pub(crate) fn stamp_created(document: &mut Document) {
    let now = Value::String(Utc::now().to_rfc3339());
    document.insert("created_at".to_string(), now.clone());
    document.insert("updated_at".to_string(), now);
}

/// Stamp the modification timestamp onto a change set
pub(crate) fn stamp_updated(changes: &mut Document) {
    changes.insert(
        "updated_at".to_string(),
        Value::String(Utc::now().to_rfc3339()),
    );
}
