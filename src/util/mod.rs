//! Shared helpers for tests

pub mod testing;
