//! Backend Module
//!
//! All server-side code for the translation platform: an Axum HTTP server
//! exposing book and chapter records, a placeholder translation endpoint
//! and a Server-Sent Events channel for live collaboration.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, store selection
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`store`** - Schemaless document store (PostgreSQL, memory, unavailable)
//! - **`library`** - Book and chapter handlers on top of the store
//! - **`translate`** - Placeholder machine translation
//! - **`realtime`** - Collaboration broadcaster and SSE stream
//! - **`status`** - Root banner and store diagnostics
//! - **`error`** - Backend error type and HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Initialization and state
//! ├── routes/         - Route configuration
//! ├── store/          - Document store backends
//! ├── library/        - Books and chapters
//! ├── translate/      - Translation stub
//! ├── realtime/       - Collaboration fan-out
//! ├── status/         - `/` and `/test`
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the store as `Arc<dyn DocumentStore>`, the
//! `CollabBroadcaster` and the `AppConfig`. Handlers extract just the piece
//! they need through `FromRef`.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`. Client mistakes map to 400,
//! missing records to 404 and store failures to 500, always with a JSON
//! body `{"error": ..., "status": ...}`.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Document store abstraction and backends
pub mod store;

/// Book and chapter endpoints
pub mod library;

/// Translation stub
pub mod translate;

/// Real-time collaboration
pub mod realtime;

/// Status and diagnostics endpoints
pub mod status;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use server::{create_app, AppState};
pub use store::{DocumentStore, StoreError};
pub use realtime::{CollabBroadcaster, Subscription};
pub use error::BackendError;
