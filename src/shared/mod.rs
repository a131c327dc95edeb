//! Shared Module
//!
//! Wire types exchanged with clients over HTTP and the collaboration
//! stream. Nothing in here touches the network or the document store, so
//! every type can be built and checked in isolation.

/// Book and chapter types
pub mod library;

/// Collaboration event types
pub mod event;

/// Translation request/response types
pub mod translate;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use library::{
    Book, Chapter, ChapterQuery, CreateBookRequest, CreateChapterRequest, CreatedResponse,
    NewChapter, RecordId, UpdateChapterRequest,
};
pub use event::{CollabEvent, StatusResponse};
pub use translate::{TranslateRequest, TranslateResponse};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
