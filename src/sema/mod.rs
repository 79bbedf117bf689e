//! Semantic analysis
//!
//! This module is responsible for:
//! - Type resolution of arithmetic operations
//! - Insertion of implicit casts

mod binop;

pub use binop::{BINOP_PATTERNS, BinopPattern, resolve_binop, result_type};
