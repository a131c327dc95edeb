//! Store backend tests

mod unavailable_test;
