//! Register Allocation
//!
//! Two independent pools of virtual registers: word registers for 4-byte
//! values and byte registers for 1-byte values. Each pool hands out its
//! lowest free slot.
//!
//! On the wire, word registers are numbered from 0 and byte registers
//! continue after the last word register.

use crate::ast::{ExprType, Position};
use crate::config::RegisterConfig;
use crate::error::{CompileError, CompileResult, ErrorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegKind {
    Word,
    Byte,
}

impl RegKind {
    /// The pool holding values of this type
    pub fn for_type(ty: ExprType) -> Option<RegKind> {
        match ty {
            ExprType::Int | ExprType::Float => Some(RegKind::Word),
            ExprType::Bool | ExprType::Char => Some(RegKind::Byte),
            ExprType::Unknown => None,
        }
    }
}

/// An allocated register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reg {
    pub kind: RegKind,
    /// Slot within its pool
    pub index: usize,
    /// Register operand as written to the bytecode
    pub id: u8,
}

#[derive(Debug, Clone)]
pub struct RegisterPool {
    words: Vec<bool>,
    bytes: Vec<bool>,
}

impl RegisterPool {
    pub fn new(config: &RegisterConfig) -> Self {
        Self {
            words: vec![false; config.word],
            bytes: vec![false; config.byte],
        }
    }

    fn slots(&self, kind: RegKind) -> &[bool] {
        match kind {
            RegKind::Word => &self.words,
            RegKind::Byte => &self.bytes,
        }
    }

    fn slots_mut(&mut self, kind: RegKind) -> &mut [bool] {
        match kind {
            RegKind::Word => &mut self.words,
            RegKind::Byte => &mut self.bytes,
        }
    }

    fn base(&self, kind: RegKind) -> usize {
        match kind {
            RegKind::Word => 0,
            RegKind::Byte => self.words.len(),
        }
    }

    /// Take the lowest free register of a pool.
    ///
    /// `pos` is the position of the expression that needs it.
    pub fn acquire(&mut self, kind: RegKind, pos: Position) -> CompileResult<Reg> {
        let index = self
            .slots(kind)
            .iter()
            .position(|used| !used)
            .ok_or_else(|| CompileError::new(ErrorKind::OutOfRegisters, pos))?;

        let id = u8::try_from(self.base(kind) + index).map_err(|_| {
            CompileError::with_detail(ErrorKind::OutOfRegisters, pos, "register id exceeds one byte")
        })?;

        self.slots_mut(kind)[index] = true;
        Ok(Reg { kind, index, id })
    }

    /// Free a register. Ownership is not checked.
    pub fn release(&mut self, reg: Reg) {
        if let Some(slot) = self.slots_mut(reg.kind).get_mut(reg.index) {
            *slot = false;
        }
    }

    /// Number of registers of a pool currently in use
    pub fn occupied(&self, kind: RegKind) -> usize {
        self.slots(kind).iter().filter(|used| **used).count()
    }
}
