//! Expression AST nodes for the Z language

use std::mem;

use super::span::Position;
use super::types::ExprType;
use crate::lexer::Punct;

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// The operator spelled by a punctuation token
    pub fn from_punct(punct: Punct) -> Option<BinaryOp> {
        match punct {
            Punct::Plus => Some(BinaryOp::Add),
            Punct::Minus => Some(BinaryOp::Sub),
            Punct::Star => Some(BinaryOp::Mul),
            Punct::Slash => Some(BinaryOp::Div),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BinaryOp::Add => "Add",
            BinaryOp::Sub => "Sub",
            BinaryOp::Mul => "Mul",
            BinaryOp::Div => "Div",
        }
    }
}

/// The shape of an expression
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    Int(i32),
    Float(f32),
    Bool(bool),
    Char(u8),

    /// Identifier reference: x
    Ident(String),

    /// Implicit conversion of `source` to the enclosing expression's type
    Cast(Box<Expr>),

    /// Binary operation: a + b
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

/// An expression with its evaluation type and position
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub ty: ExprType,
    pub pos: Position,
}

impl Expr {
    /// Create an integer literal expression
    pub fn int(value: i32, pos: Position) -> Self {
        Self {
            kind: ExprKind::Int(value),
            ty: ExprType::Int,
            pos,
        }
    }

    /// Create a float literal expression
    pub fn float(value: f32, pos: Position) -> Self {
        Self {
            kind: ExprKind::Float(value),
            ty: ExprType::Float,
            pos,
        }
    }

    /// Create a boolean literal expression
    pub fn bool(value: bool, pos: Position) -> Self {
        Self {
            kind: ExprKind::Bool(value),
            ty: ExprType::Bool,
            pos,
        }
    }

    /// Create a character literal expression
    pub fn char(value: u8, pos: Position) -> Self {
        Self {
            kind: ExprKind::Char(value),
            ty: ExprType::Char,
            pos,
        }
    }

    /// Create an identifier expression; its type is unknown until declared
    pub fn ident(name: impl Into<String>, pos: Position) -> Self {
        Self {
            kind: ExprKind::Ident(name.into()),
            ty: ExprType::Unknown,
            pos,
        }
    }

    /// Wrap `source` in a cast to `ty`, positioned at the source
    pub fn cast(source: Expr, ty: ExprType) -> Self {
        let pos = source.pos;
        Self {
            kind: ExprKind::Cast(Box::new(source)),
            ty,
            pos,
        }
    }

    /// Create a binary expression
    pub fn binary(op: BinaryOp, left: Expr, right: Expr, ty: ExprType, pos: Position) -> Self {
        Self {
            kind: ExprKind::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            ty,
            pos,
        }
    }
}

impl ExprKind {
    /// Move child expressions out, leaving a leaf behind
    fn detach_children(&mut self, into: &mut Vec<Box<Expr>>) {
        if !matches!(self, ExprKind::Cast(_) | ExprKind::Binary { .. }) {
            return;
        }
        match mem::replace(self, ExprKind::Int(0)) {
            ExprKind::Cast(source) => into.push(source),
            ExprKind::Binary { left, right, .. } => into.extend([left, right]),
            _ => {}
        }
    }
}

// Long operator chains nest as deep as they are long
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.kind.detach_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.kind.detach_children(&mut pending);
        }
    }
}
