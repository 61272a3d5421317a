//! Integration tests for gray-rs crates.
//!
//! End-to-end checks that decode a file, run operations from `gray-ops`
//! and encode the result again.
