//! Backend Error Module
//!
//! Error types returned by HTTP handlers and their conversion into HTTP
//! responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - BackendError and its status mapping
//! └── conversion.rs - IntoResponse and request body parsing
//! ```
//!
//! Handlers return `Result<_, BackendError>` and propagate store, shared and
//! serialization errors with `?`.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
pub use conversion::parse_json;
