/**
 * PostgreSQL Document Store
 *
 * Persists documents in a single `documents` table: one row per record,
 * the body held as JSONB and the collection name as a plain column.
 * Exact-match filters use JSONB containment (`body @> filter`), and
 * updates merge the change set into the stored body (`body || changes`).
 *
 * The schema lives in `migrations/` and is applied on connect.
 */
use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use sqlx::types::Json;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::{
    stamp_created, stamp_updated, Document, DocumentStore, Filter, StoreError, StoreStatus,
    StoredDocument, STATUS_COLLECTION_LIMIT,
};
use crate::shared::RecordId;

#[derive(Debug, Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    /// Connect to `database_url` and apply pending migrations
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        tracing::info!("Connecting to document database...");
        let pool = PgPool::connect(database_url).await?;
        tracing::info!("Database connection pool created successfully");

        sqlx::migrate!()
            .run(&pool)
            .await
            .map_err(|e| StoreError::Database(e.into()))?;
        tracing::info!("Database migrations completed successfully");

        Ok(Self { pool })
    }

    fn row_to_document(row: &sqlx::postgres::PgRow) -> Result<StoredDocument, StoreError> {
        let id: Uuid = row.try_get("id")?;
        let Json(body): Json<Value> = row.try_get("body")?;
        match body {
            Value::Object(body) => Ok(StoredDocument {
                id: RecordId::from(id),
                body,
            }),
            other => Err(StoreError::NotAnObject(other.to_string())),
        }
    }

    async fn probe(&self) -> Result<(String, Vec<String>), sqlx::Error> {
        let database_name: String = sqlx::query_scalar("SELECT current_database()::text")
            .fetch_one(&self.pool)
            .await?;

        let collections: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT DISTINCT collection
            FROM documents
            ORDER BY collection
            LIMIT $1
            "#,
        )
        .bind(STATUS_COLLECTION_LIMIT as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok((database_name, collections))
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn create(&self, collection: &str, mut document: Document) -> Result<RecordId, StoreError> {
        stamp_created(&mut document);
        let id = RecordId::new();

        sqlx::query(
            r#"
            INSERT INTO documents (id, collection, body, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(id.as_uuid())
        .bind(collection)
        .bind(Json(Value::Object(document)))
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(id)
    }

    async fn list(&self, collection: &str, filter: Filter) -> Result<Vec<StoredDocument>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, body
            FROM documents
            WHERE collection = $1 AND body @> $2
            ORDER BY created_at, id
            "#,
        )
        .bind(collection)
        .bind(Json(Value::Object(filter)))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_document).collect()
    }

    async fn find_one(&self, collection: &str, id: RecordId) -> Result<Option<StoredDocument>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, body
            FROM documents
            WHERE collection = $1 AND id = $2
            "#,
        )
        .bind(collection)
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::row_to_document).transpose()
    }

    async fn update_one(&self, collection: &str, id: RecordId, mut changes: Document) -> Result<bool, StoreError> {
        stamp_updated(&mut changes);

        let result = sqlx::query(
            r#"
            UPDATE documents
            SET body = body || $3
            WHERE collection = $1 AND id = $2
            "#,
        )
        .bind(collection)
        .bind(id.as_uuid())
        .bind(Json(Value::Object(changes)))
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn status(&self) -> StoreStatus {
        match self.probe().await {
            Ok((database_name, collections)) => StoreStatus {
                backend: "postgres",
                connected: true,
                database_name: Some(database_name),
                collections,
                error: None,
            },
            Err(e) => {
                tracing::warn!("Document store probe failed: {:?}", e);
                StoreStatus {
                    backend: "postgres",
                    connected: false,
                    database_name: None,
                    collections: Vec::new(),
                    error: Some(e.to_string()),
                }
            }
        }
    }
}
