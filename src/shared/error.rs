//! Shared Error Types
//!
//! This module defines error types raised while validating wire data,
//! before any handler or store logic runs.
//!
//! # Error Categories
//!
//! - `ValidationError` - A field is missing, empty, or badly formed
//! - `InvalidIdentity` - An identity token does not parse
//!
//! # Usage
//!
//! ```rust
//! use translation_hub::shared::error::SharedError;
//!
//! let error = SharedError::validation("title", "must not be empty");
//! ```
use thiserror::Error;

/// Errors raised while validating wire data
#[derive(Debug, Error, Clone)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// Identity token that is not in the store's identity format
    #[error("Invalid {field}")]
    InvalidIdentity {
        /// Name of the field carrying the token, e.g. `book_id`
        field: String,
        /// The rejected token
        value: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new identity error for `field`
    pub fn invalid_identity(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidIdentity {
            field: field.into(),
            value: value.into(),
        }
    }
}
