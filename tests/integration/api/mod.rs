//! API integration tests
//!
//! Integration tests for all API endpoints

mod books_test;
mod translate_test;
