//! Common test infrastructure for Z compiler tests
//!
//! This module provides shared utilities, helpers, and fixtures
//! used across the test suite.

#![allow(dead_code)]

pub mod fixtures;
pub mod harness;

// Re-export commonly used items
pub use harness::*;
