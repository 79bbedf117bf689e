//! Evaluation types of expressions

use std::fmt;

/// The type an expression evaluates to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExprType {
    /// Not known yet (identifiers, until declarations exist)
    Unknown,
    /// 32-bit signed integer
    Int,
    /// 32-bit float
    Float,
    /// Boolean (one byte: 0 or 1)
    Bool,
    /// 8-bit character
    Char,
}

impl ExprType {
    pub fn name(self) -> &'static str {
        match self {
            ExprType::Unknown => "Unknown",
            ExprType::Int => "Int",
            ExprType::Float => "Float",
            ExprType::Bool => "Bool",
            ExprType::Char => "Char",
        }
    }
}

impl fmt::Display for ExprType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
