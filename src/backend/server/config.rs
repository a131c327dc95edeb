/**
 * Server Configuration
 *
 * Chooses and connects the document store from the application
 * configuration.
 *
 * # Store Selection
 *
 * - `DATABASE_URL` unset: in-memory store (contents lost on restart)
 * - `DATABASE_URL` set and reachable: PostgreSQL store, migrations applied
 * - `DATABASE_URL` set but unreachable: the server still starts, every
 *   store call fails with a 500 and `/test` reports the error
 */

use std::sync::Arc;

use crate::backend::store::{DocumentStore, MemoryStore, PgDocumentStore, UnavailableStore};
use crate::shared::AppConfig;

/// Load the document store described by `config`
pub async fn load_store(config: &AppConfig) -> Arc<dyn DocumentStore> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set. Using in-memory document store.");
        return Arc::new(MemoryStore::new());
    };

    match PgDocumentStore::connect(database_url).await {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::error!("Failed to connect to document database: {:?}", e);
            tracing::warn!("Document store features will be unavailable.");
            Arc::new(UnavailableStore::new(e.to_string()))
        }
    }
}
