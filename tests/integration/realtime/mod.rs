//! Collaboration stream tests

mod stream_test;
