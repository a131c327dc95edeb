//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - In-process test servers over the in-memory store
//! - Fixtures for books and chapters
//! - Custom assertion macros

pub mod assertions;
pub mod server;

// Re-export commonly used utilities
pub use fixtures::*;
pub use server::*;
