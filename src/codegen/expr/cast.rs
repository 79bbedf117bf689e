//! Implicit conversion code generation
//!
//! Casts only come from binop resolution, so the source is always one of
//! the narrower types of a binop table row: `{op} dst src`.

use super::destination;
use crate::ast::Expr;
use crate::codegen::Emitter;
use crate::codegen::opcode::Opcode;
use crate::codegen::regalloc::Reg;
use crate::error::{CompileError, CompileResult, ErrorKind};

/// `src` holds the already compiled `source`
pub(super) fn generate_cast(expr: &Expr, source: &Expr, src: Reg, emitter: &mut Emitter) -> CompileResult<Reg> {
    let op = Opcode::cast(source.ty, expr.ty).ok_or_else(|| {
        CompileError::with_detail(
            ErrorKind::Unknown,
            expr.pos,
            format!("no conversion from {} to {}", source.ty, expr.ty),
        )
    })?;

    let dst = destination(expr, emitter)?;
    emitter.emit_op(op);
    emitter.emit_reg(dst);
    emitter.emit_reg(src);
    emitter.regs.release(src);
    Ok(dst)
}
