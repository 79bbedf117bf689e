//! Bytecode Emitter
//!
//! Appends records to the output buffer and owns the register pools the
//! records refer to.

use super::opcode::Opcode;
use super::regalloc::{Reg, RegisterPool};
use crate::config::RegisterConfig;

pub struct Emitter {
    output: Vec<u8>,
    pub regs: RegisterPool,
}

impl Emitter {
    pub fn new(registers: &RegisterConfig) -> Self {
        Self {
            output: Vec::new(),
            regs: RegisterPool::new(registers),
        }
    }

    pub fn emit_op(&mut self, op: Opcode) {
        self.output.push(op.byte());
    }

    pub fn emit_reg(&mut self, reg: Reg) {
        self.output.push(reg.id);
    }

    pub fn emit_u8(&mut self, value: u8) {
        self.output.push(value);
    }

    pub fn emit_i32(&mut self, value: i32) {
        self.output.extend_from_slice(&value.to_le_bytes());
    }

    pub fn emit_f32(&mut self, value: f32) {
        self.output.extend_from_slice(&value.to_le_bytes());
    }

    /// Bytes written so far
    pub fn bytes_emitted(&self) -> usize {
        self.output.len()
    }

    pub fn finish(self) -> Vec<u8> {
        self.output
    }
}
