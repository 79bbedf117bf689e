//! Bytecode opcodes
//!
//! Every record starts with one opcode byte followed by its operands.
//! Register operands are one byte; immediates are little-endian.

use crate::ast::{BinaryOp, ExprType};

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    Nop = 0x00,

    /// Load an i32 immediate into a word register
    MovW = 0x01,
    /// Load an f32 immediate into a word register
    MovF = 0x02,
    /// Load a u8 immediate into a byte register
    MovB = 0x03,

    AddW = 0x10,
    SubW = 0x11,
    MulW = 0x12,
    DivW = 0x13,

    AddF = 0x14,
    SubF = 0x15,
    MulF = 0x16,
    DivF = 0x17,

    AddB = 0x18,
    SubB = 0x19,
    MulB = 0x1A,
    DivB = 0x1B,

    /// int -> float
    IToF = 0x20,
    /// char -> float
    CToF = 0x21,
    /// bool -> float
    BToF = 0x22,
    /// char -> int
    CToI = 0x23,
    /// bool -> int
    BToI = 0x24,
    /// bool -> char
    BToC = 0x25,
}

/// Operand layout following an opcode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operands {
    None,
    /// dst, 4-byte immediate
    RegImm32,
    /// dst, 1-byte immediate
    RegImm8,
    /// dst, src
    RegReg,
    /// dst, lhs, rhs
    RegRegReg,
}

impl Operands {
    /// Operand bytes following the opcode
    pub fn byte_len(self) -> usize {
        match self {
            Operands::None => 0,
            Operands::RegImm32 => 5,
            Operands::RegImm8 => 2,
            Operands::RegReg => 2,
            Operands::RegRegReg => 3,
        }
    }
}

impl Opcode {
    /// Convert a raw byte to an opcode.
    pub fn from_byte(byte: u8) -> Option<Opcode> {
        let op = match byte {
            0x00 => Self::Nop,
            0x01 => Self::MovW,
            0x02 => Self::MovF,
            0x03 => Self::MovB,
            0x10 => Self::AddW,
            0x11 => Self::SubW,
            0x12 => Self::MulW,
            0x13 => Self::DivW,
            0x14 => Self::AddF,
            0x15 => Self::SubF,
            0x16 => Self::MulF,
            0x17 => Self::DivF,
            0x18 => Self::AddB,
            0x19 => Self::SubB,
            0x1A => Self::MulB,
            0x1B => Self::DivB,
            0x20 => Self::IToF,
            0x21 => Self::CToF,
            0x22 => Self::BToF,
            0x23 => Self::CToI,
            0x24 => Self::BToI,
            0x25 => Self::BToC,
            _ => return None,
        };
        Some(op)
    }

    pub fn byte(self) -> u8 {
        self as u8
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Nop => "NOP",
            Opcode::MovW => "MOVW",
            Opcode::MovF => "MOVF",
            Opcode::MovB => "MOVB",
            Opcode::AddW => "ADDW",
            Opcode::SubW => "SUBW",
            Opcode::MulW => "MULW",
            Opcode::DivW => "DIVW",
            Opcode::AddF => "ADDF",
            Opcode::SubF => "SUBF",
            Opcode::MulF => "MULF",
            Opcode::DivF => "DIVF",
            Opcode::AddB => "ADDB",
            Opcode::SubB => "SUBB",
            Opcode::MulB => "MULB",
            Opcode::DivB => "DIVB",
            Opcode::IToF => "ITOF",
            Opcode::CToF => "CTOF",
            Opcode::BToF => "BTOF",
            Opcode::CToI => "CTOI",
            Opcode::BToI => "BTOI",
            Opcode::BToC => "BTOC",
        }
    }

    pub fn operands(self) -> Operands {
        match self {
            Opcode::Nop => Operands::None,
            Opcode::MovW | Opcode::MovF => Operands::RegImm32,
            Opcode::MovB => Operands::RegImm8,
            Opcode::IToF
            | Opcode::CToF
            | Opcode::BToF
            | Opcode::CToI
            | Opcode::BToI
            | Opcode::BToC => Operands::RegReg,
            _ => Operands::RegRegReg,
        }
    }

    /// Total record length, opcode included
    pub fn record_len(self) -> usize {
        1 + self.operands().byte_len()
    }

    /// The arithmetic opcode for `op` carried out on values of type `ty`
    pub fn binary(op: BinaryOp, ty: ExprType) -> Option<Opcode> {
        let op = match (ty, op) {
            (ExprType::Int, BinaryOp::Add) => Self::AddW,
            (ExprType::Int, BinaryOp::Sub) => Self::SubW,
            (ExprType::Int, BinaryOp::Mul) => Self::MulW,
            (ExprType::Int, BinaryOp::Div) => Self::DivW,
            (ExprType::Float, BinaryOp::Add) => Self::AddF,
            (ExprType::Float, BinaryOp::Sub) => Self::SubF,
            (ExprType::Float, BinaryOp::Mul) => Self::MulF,
            (ExprType::Float, BinaryOp::Div) => Self::DivF,
            (ExprType::Char, BinaryOp::Add) => Self::AddB,
            (ExprType::Char, BinaryOp::Sub) => Self::SubB,
            (ExprType::Char, BinaryOp::Mul) => Self::MulB,
            (ExprType::Char, BinaryOp::Div) => Self::DivB,
            _ => return None,
        };
        Some(op)
    }

    /// The conversion opcode from one type to another
    pub fn cast(from: ExprType, to: ExprType) -> Option<Opcode> {
        let op = match (from, to) {
            (ExprType::Int, ExprType::Float) => Self::IToF,
            (ExprType::Char, ExprType::Float) => Self::CToF,
            (ExprType::Bool, ExprType::Float) => Self::BToF,
            (ExprType::Char, ExprType::Int) => Self::CToI,
            (ExprType::Bool, ExprType::Int) => Self::BToI,
            (ExprType::Bool, ExprType::Char) => Self::BToC,
            _ => return None,
        };
        Some(op)
    }
}
