/**
 * In-Memory Document Store
 *
 * Keeps every collection in a `Vec` behind a `tokio::sync::RwLock`, so
 * listing returns documents in insertion order. Used when no database URL
 * is configured and by the test suite. Contents are lost on restart.
 */
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::{
    stamp_created, stamp_updated, Document, DocumentStore, Filter, StoreError, StoreStatus,
    StoredDocument, STATUS_COLLECTION_LIMIT,
};
use crate::shared::RecordId;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    collections: Arc<RwLock<HashMap<String, Vec<StoredDocument>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn create(&self, collection: &str, mut document: Document) -> Result<RecordId, StoreError> {
        stamp_created(&mut document);
        let id = RecordId::new();
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(StoredDocument { id, body: document });
        Ok(id)
    }

    async fn list(&self, collection: &str, filter: Filter) -> Result<Vec<StoredDocument>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|docs| docs.iter().filter(|doc| doc.matches(&filter)).cloned().collect())
            .unwrap_or_default())
    }

    async fn find_one(&self, collection: &str, id: RecordId) -> Result<Option<StoredDocument>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| doc.id == id))
            .cloned())
    }

    async fn update_one(&self, collection: &str, id: RecordId, mut changes: Document) -> Result<bool, StoreError> {
        stamp_updated(&mut changes);
        let mut collections = self.collections.write().await;
        let Some(doc) = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|doc| doc.id == id))
        else {
            return Ok(false);
        };
        doc.body.extend(changes);
        Ok(true)
    }

    async fn status(&self) -> StoreStatus {
        let collections = self.collections.read().await;
        let mut names: Vec<String> = collections.keys().cloned().collect();
        names.sort();
        names.truncate(STATUS_COLLECTION_LIMIT);
        StoreStatus {
            backend: "memory",
            connected: true,
            database_name: None,
            collections: names,
            error: None,
        }
    }
}
