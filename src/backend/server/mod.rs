//! Server Module
//!
//! Initialization and configuration of the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Document store selection
//! └── init.rs         - State/app creation and shutdown signal
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `AppConfig::from_env()` in the binary
//! 2. **Store Connection**: PostgreSQL, in-memory, or unavailable stand-in
//! 3. **State Creation**: store + broadcaster + config in `AppState`
//! 4. **Router Creation**: routes, CORS and request tracing
//!
//! # Example
//!
//! ```rust,no_run
//! use translation_hub::backend::server::{create_app, shutdown_signal};
//! use translation_hub::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let addr = config.bind_addr();
//! let (app, state) = create_app(config).await;
//! let listener = tokio::net::TcpListener::bind(addr).await?;
//! axum::serve(listener, app)
//!     .with_graceful_shutdown(shutdown_signal(state.broadcaster.clone()))
//!     .await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Document store selection
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use state::AppState;
pub use init::{create_app, create_state, shutdown_signal};
