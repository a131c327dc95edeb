//! Route Configuration Module
//!
//! Configures all HTTP routes for the backend server, grouped by
//! functionality into focused submodules.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs            - Module exports and documentation
//! ├── router.rs         - Main router creation and middleware
//! ├── api_routes.rs     - Books, chapters, translate
//! └── collab_routes.rs  - Collaboration stream and publish
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use translation_hub::backend::routes::create_router;
//! use translation_hub::backend::server::AppState;
//! use translation_hub::backend::store::MemoryStore;
//! use translation_hub::shared::AppConfig;
//!
//! let app_state = AppState::new(Arc::new(MemoryStore::new()), AppConfig::default());
//! let router = create_router(app_state);
//! ```

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

/// Collaboration routes
pub mod collab_routes;

// Re-export commonly used functions
pub use router::create_router;
