//! Expression Code Generation
//!
//! Compiles an expression tree post-order. Every expression leaves its value
//! in a freshly acquired register; the caller releases it once consumed.
//!
//! The walk keeps its own work stack instead of recursing, so long operator
//! chains compile in constant call depth.

use crate::ast::{BinaryOp, Expr, ExprKind};
use crate::codegen::Emitter;
use crate::codegen::regalloc::{Reg, RegKind};
use crate::error::{CompileError, CompileResult, ErrorKind};

// Submodules
mod binary;
mod cast;
mod literal;

use binary::generate_binary;
use cast::generate_cast;
use literal::{generate_byte_literal, generate_float_literal, generate_int_literal};

enum Step<'a> {
    /// Compile an expression, pushing its register
    Visit(&'a Expr),
    /// Convert the top register to the cast's type
    Cast(&'a Expr, &'a Expr),
    /// Combine the top two registers
    Binary(&'a Expr, BinaryOp),
}

pub fn generate_expr(expr: &Expr, emitter: &mut Emitter) -> CompileResult<Reg> {
    let mut steps = vec![Step::Visit(expr)];
    let mut values: Vec<Reg> = Vec::new();

    while let Some(step) = steps.pop() {
        match step {
            Step::Visit(expr) => match &expr.kind {
                ExprKind::Int(value) => values.push(generate_int_literal(expr, *value, emitter)?),
                ExprKind::Float(value) => values.push(generate_float_literal(expr, *value, emitter)?),
                ExprKind::Bool(value) => values.push(generate_byte_literal(expr, u8::from(*value), emitter)?),
                ExprKind::Char(value) => values.push(generate_byte_literal(expr, *value, emitter)?),

                // Nothing gives identifiers storage yet
                ExprKind::Ident(name) => {
                    return Err(CompileError::with_detail(
                        ErrorKind::Unknown,
                        expr.pos,
                        format!("identifier `{}` cannot be evaluated", name),
                    ));
                }

                ExprKind::Cast(source) => {
                    steps.push(Step::Cast(expr, source));
                    steps.push(Step::Visit(source));
                }
                // Left operand first
                ExprKind::Binary { op, left, right } => {
                    steps.push(Step::Binary(expr, *op));
                    steps.push(Step::Visit(right));
                    steps.push(Step::Visit(left));
                }
            },
            Step::Cast(expr, source) => {
                let src = operand(&mut values, expr)?;
                values.push(generate_cast(expr, source, src, emitter)?);
            }
            Step::Binary(expr, op) => {
                let rhs = operand(&mut values, expr)?;
                let lhs = operand(&mut values, expr)?;
                values.push(generate_binary(expr, op, lhs, rhs, emitter)?);
            }
        }
    }

    operand(&mut values, expr)
}

fn operand(values: &mut Vec<Reg>, expr: &Expr) -> CompileResult<Reg> {
    values.pop().ok_or_else(|| {
        CompileError::with_detail(ErrorKind::Unknown, expr.pos, "operand register missing")
    })
}

/// Acquire the register an expression's value is written to
fn destination(expr: &Expr, emitter: &mut Emitter) -> CompileResult<Reg> {
    let kind = RegKind::for_type(expr.ty).ok_or_else(|| {
        CompileError::with_detail(
            ErrorKind::Unknown,
            expr.pos,
            format!("no register holds a value of type {}", expr.ty),
        )
    })?;
    emitter.regs.acquire(kind, expr.pos)
}
