//! Code Generation module
//!
//! Responsible for converting the built AST into register bytecode.

mod emitter;
mod expr;
pub mod opcode;
pub mod regalloc;

pub use emitter::Emitter;
pub use expr::generate_expr;
pub use opcode::{Opcode, Operands};
pub use regalloc::{Reg, RegKind, RegisterPool};

use crate::ast::Node;
use crate::config::Settings;
use crate::error::CompileResult;

/// A compiled program
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bytecode {
    code: Vec<u8>,
}

impl Bytecode {
    pub fn new(code: Vec<u8>) -> Self {
        Self { code }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.code
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.code
    }

    /// Number of bytes emitted
    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }
}

/// Emit every top-level expression in order. Other top-level nodes produce
/// no code.
pub fn generate(nodes: &[Node], settings: &Settings) -> CompileResult<Bytecode> {
    let mut emitter = Emitter::new(&settings.registers);

    for node in nodes {
        if let Node::Expr(expr) = node {
            let result = generate_expr(expr, &mut emitter)?;
            emitter.regs.release(result);
        }
    }

    Ok(Bytecode::new(emitter.finish()))
}
