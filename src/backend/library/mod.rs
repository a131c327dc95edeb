//! Library Module
//!
//! Book and chapter endpoints.
//!
//! - **`handlers`** - HTTP handlers
//! - **`db`** - Typed operations on the document store

pub mod handlers;
pub mod db;
