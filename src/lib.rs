//! Translation Hub - Main Library
//!
//! Backend for a book translation platform. Translators keep books and
//! their chapters in a document store, request placeholder machine
//! translations, and see each other's edits live through a Server-Sent
//! Events channel.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types, validation and configuration
//!   - Book, chapter, translation and collaboration payloads
//!   - `RecordId` identity tokens
//!   - `AppConfig` loaded from the environment
//!
//! - **`backend`** - Axum server
//!   - Document store backends (PostgreSQL, in-memory)
//!   - Book, chapter and translate handlers
//!   - Collaboration broadcaster and SSE stream
//!
//! # Usage
//!
//! ```rust,no_run
//! use translation_hub::backend::server::create_app;
//! use translation_hub::shared::AppConfig;
//!
//! # async fn example() {
//! let (app, _state) = create_app(AppConfig::default()).await;
//! // Serve `app` with axum::serve
//! # }
//! ```
//!
//! # Thread Safety
//!
//! - The store is shared as `Arc<dyn DocumentStore>`; backends are `Send + Sync`
//! - The broadcaster guards its subscriber map with a mutex and never holds
//!   it across an await point
//!
//! # Error Handling
//!
//! - `shared::SharedError` for validation and parse failures
//! - `backend::store::StoreError` for persistence failures
//! - `backend::BackendError` for everything that becomes an HTTP response

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
