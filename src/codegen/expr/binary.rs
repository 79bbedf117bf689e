//! Binary operation code generation
//!
//! Both operands already sit in registers and have the operation's type;
//! the resolver inserted any casts. Emits `{op} dst lhs rhs`.

use super::destination;
use crate::ast::{BinaryOp, Expr};
use crate::codegen::Emitter;
use crate::codegen::opcode::Opcode;
use crate::codegen::regalloc::Reg;
use crate::error::{CompileError, CompileResult, ErrorKind};

pub(super) fn generate_binary(
    expr: &Expr,
    op: BinaryOp,
    lhs: Reg,
    rhs: Reg,
    emitter: &mut Emitter,
) -> CompileResult<Reg> {
    let opcode = Opcode::binary(op, expr.ty).ok_or_else(|| {
        CompileError::with_detail(
            ErrorKind::Unknown,
            expr.pos,
            format!("no {} instruction for type {}", op.name(), expr.ty),
        )
    })?;

    // Operands stay live until the record is written
    let dst = destination(expr, emitter)?;
    emitter.emit_op(opcode);
    emitter.emit_reg(dst);
    emitter.emit_reg(lhs);
    emitter.emit_reg(rhs);

    emitter.regs.release(lhs);
    emitter.regs.release(rhs);
    Ok(dst)
}
