//! Literal loading
//!
//! - Integers: `MOVW dst imm32`
//! - Floats: `MOVF dst imm32` (IEEE-754 bits)
//! - Booleans and characters: `MOVB dst imm8`

use super::destination;
use crate::ast::Expr;
use crate::codegen::Emitter;
use crate::codegen::opcode::Opcode;
use crate::codegen::regalloc::Reg;
use crate::error::CompileResult;

pub(super) fn generate_int_literal(expr: &Expr, value: i32, emitter: &mut Emitter) -> CompileResult<Reg> {
    let dst = destination(expr, emitter)?;
    emitter.emit_op(Opcode::MovW);
    emitter.emit_reg(dst);
    emitter.emit_i32(value);
    Ok(dst)
}

pub(super) fn generate_float_literal(expr: &Expr, value: f32, emitter: &mut Emitter) -> CompileResult<Reg> {
    let dst = destination(expr, emitter)?;
    emitter.emit_op(Opcode::MovF);
    emitter.emit_reg(dst);
    emitter.emit_f32(value);
    Ok(dst)
}

pub(super) fn generate_byte_literal(expr: &Expr, value: u8, emitter: &mut Emitter) -> CompileResult<Reg> {
    let dst = destination(expr, emitter)?;
    emitter.emit_op(Opcode::MovB);
    emitter.emit_reg(dst);
    emitter.emit_u8(value);
    Ok(dst)
}
