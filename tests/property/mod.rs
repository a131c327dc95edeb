//! Property-based tests

mod broadcast_proptest;
mod translate_proptest;
