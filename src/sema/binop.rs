//! Binary operation type resolution
//!
//! The result type of an arithmetic operation comes from a fixed, ordered
//! table of operand-type pairs. Pairs match in either order and the first
//! match wins. Operands of another type than the result get an implicit cast.

use crate::ast::{BinaryOp, Expr, ExprType, Position};
use crate::error::{CompileError, CompileResult, ErrorKind};

/// One entry of the binop table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinopPattern {
    pub operands: (ExprType, ExprType),
    pub result: ExprType,
}

impl BinopPattern {
    const fn new(a: ExprType, b: ExprType, result: ExprType) -> Self {
        Self {
            operands: (a, b),
            result,
        }
    }

    /// Whether the operand types match this entry, in either order
    pub fn matches(&self, left: ExprType, right: ExprType) -> bool {
        let (a, b) = self.operands;
        (left == a && right == b) || (left == b && right == a)
    }
}

/// The binop table, in match order
pub const BINOP_PATTERNS: [BinopPattern; 10] = [
    BinopPattern::new(ExprType::Int, ExprType::Int, ExprType::Int),
    BinopPattern::new(ExprType::Float, ExprType::Float, ExprType::Float),
    BinopPattern::new(ExprType::Char, ExprType::Char, ExprType::Char),
    BinopPattern::new(ExprType::Float, ExprType::Int, ExprType::Float),
    BinopPattern::new(ExprType::Float, ExprType::Char, ExprType::Float),
    BinopPattern::new(ExprType::Float, ExprType::Bool, ExprType::Float),
    BinopPattern::new(ExprType::Int, ExprType::Char, ExprType::Int),
    BinopPattern::new(ExprType::Int, ExprType::Bool, ExprType::Int),
    BinopPattern::new(ExprType::Char, ExprType::Bool, ExprType::Char),
    // Arithmetic on two booleans is carried out on ints
    BinopPattern::new(ExprType::Bool, ExprType::Bool, ExprType::Int),
];

/// Result type of an arithmetic operation on these operand types
pub fn result_type(left: ExprType, right: ExprType) -> Option<ExprType> {
    BINOP_PATTERNS
        .iter()
        .find(|pattern| pattern.matches(left, right))
        .map(|pattern| pattern.result)
}

/// Build the binary node for `left op right`, casting operands as needed.
///
/// `pos` is the position of the operator; the node is placed there.
pub fn resolve_binop(op: BinaryOp, left: Expr, right: Expr, pos: Position) -> CompileResult<Expr> {
    let ty = result_type(left.ty, right.ty).ok_or_else(|| {
        CompileError::with_detail(
            ErrorKind::BinopIllegalPattern,
            pos,
            format!("{} {} {}", left.ty, op.name(), right.ty),
        )
    })?;

    Ok(Expr::binary(
        op,
        coerce(left, ty),
        coerce(right, ty),
        ty,
        pos,
    ))
}

fn coerce(expr: Expr, ty: ExprType) -> Expr {
    if expr.ty == ty {
        expr
    } else {
        Expr::cast(expr, ty)
    }
}
