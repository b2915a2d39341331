//! codeset End-to-End Test Infrastructure
//!
//! This crate provides integration tests that cross crate boundaries:
//!
//! - Expansion: universe files -> expressions -> concrete codes
//! - Rows: CSV tables -> code queries -> row masks
//! - **Properties**: notation invariants over generated inputs
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p codeset-tests
//! cargo test -p codeset-tests --test proptest_notation
//! ```

pub mod fixtures;
