//! Abstract Syntax Tree (AST) for the Z language
//!
//! Nodes are a closed set: unresolved tokens, bracket groups and typed
//! expressions. Every node owns its children.

mod expr;
mod node;
mod span;
mod types;

// Re-export all public types
pub use expr::{BinaryOp, Expr, ExprKind};
pub use node::{Bracket, Group, Node};
pub use span::Position;
pub use types::ExprType;
