//! Store installed when the configured database cannot be reached at
//! startup. The server keeps serving; every store call fails with
//! [`StoreError::Unavailable`].

use async_trait::async_trait;

use super::{Document, DocumentStore, Filter, StoreError, StoreStatus, StoredDocument};
use crate::shared::RecordId;

#[derive(Debug, Clone)]
pub struct UnavailableStore {
    reason: String,
}

impl UnavailableStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn error(&self) -> StoreError {
        StoreError::Unavailable(self.reason.clone())
    }
}

#[async_trait]
impl DocumentStore for UnavailableStore {
    async fn create(&self, _collection: &str, _document: Document) -> Result<RecordId, StoreError> {
        Err(self.error())
    }

    async fn list(&self, _collection: &str, _filter: Filter) -> Result<Vec<StoredDocument>, StoreError> {
        Err(self.error())
    }

    async fn find_one(&self, _collection: &str, _id: RecordId) -> Result<Option<StoredDocument>, StoreError> {
        Err(self.error())
    }

    async fn update_one(&self, _collection: &str, _id: RecordId, _changes: Document) -> Result<bool, StoreError> {
        Err(self.error())
    }

    async fn status(&self) -> StoreStatus {
        StoreStatus {
            backend: "postgres",
            connected: false,
            database_name: None,
            collections: Vec::new(),
            error: Some(self.reason.clone()),
        }
    }
}
