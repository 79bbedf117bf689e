//! Compiler errors
//!
//! Every stage reports failures through [`CompileError`]. Nothing is
//! recovered: the first error aborts the whole compilation and reaches the
//! caller unchanged.

use std::fmt;

use crate::ast::Position;

/// The kind of compile error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An internal invariant was broken
    Unknown,
    /// A string or identifier exceeded [`crate::lexer::MAX_STR_LEN`]
    StringTooLong,
    /// End of input inside a string literal
    UnterminatedString,
    /// A numeral could not be resolved to an int or a float
    InvalidNumber,
    InvalidClosingParen,
    InvalidClosingSquare,
    InvalidClosingCurly,
    MissingClosingParen,
    MissingClosingSquare,
    MissingClosingCurly,
    /// An arithmetic operator without an expression on one or both sides
    BinopMissingExpression,
    /// No entry of the binop table matches the operand types
    BinopIllegalPattern,
    /// A register pool is exhausted
    OutOfRegisters,
}

impl ErrorKind {
    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::Unknown => "the compiler reached a state it should never be in",
            ErrorKind::StringTooLong => "string too long",
            ErrorKind::UnterminatedString => "unterminated string",
            ErrorKind::InvalidNumber => "invalid number",
            ErrorKind::InvalidClosingParen => "invalid closing parenthesis",
            ErrorKind::InvalidClosingSquare => "invalid closing square bracket",
            ErrorKind::InvalidClosingCurly => "invalid closing curly bracket",
            ErrorKind::MissingClosingParen => "missing a closing parenthesis",
            ErrorKind::MissingClosingSquare => "missing a closing square bracket",
            ErrorKind::MissingClosingCurly => "missing a closing curly bracket",
            ErrorKind::BinopMissingExpression => {
                "binop is missing an expression on one or both sides"
            }
            ErrorKind::BinopIllegalPattern => "no binop pattern exists for the given operand types",
            ErrorKind::OutOfRegisters => "more registers are required than are available",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A compile error: what went wrong, where, and optionally some detail
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{kind}{}", detail_suffix(.detail))]
pub struct CompileError {
    pub kind: ErrorKind,
    pub pos: Position,
    pub detail: Option<String>,
}

fn detail_suffix(detail: &Option<String>) -> String {
    match detail {
        Some(detail) => format!(" : {}", detail),
        None => String::new(),
    }
}

impl CompileError {
    pub fn new(kind: ErrorKind, pos: Position) -> Self {
        Self {
            kind,
            pos,
            detail: None,
        }
    }

    pub fn with_detail(kind: ErrorKind, pos: Position, detail: impl Into<String>) -> Self {
        Self {
            kind,
            pos,
            detail: Some(detail.into()),
        }
    }

    /// Format as the driver reports it: `... at LINE l, COLUMN c : message`
    pub fn report(&self) -> String {
        format!(
            "Error during compilation at LINE {}, COLUMN {} : {}",
            self.pos.line, self.pos.column, self
        )
    }
}

pub type CompileResult<T> = Result<T, CompileError>;
