//! Numeral resolution
//!
//! Turns the raw text of a numeral token into an `i32` or an `f32`.
//!
//! - `0x` selects base 16, `0b` base 2, `0d` or no prefix base 10
//! - digits past 9 are letters, case-insensitive (`A` = 10 ... `Z` = 35)
//! - a single `.` switches to the fractional part

use super::token::{Token, TokenKind};

/// A resolved numeral
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i32),
    Float(f32),
}

/// Resolve the text of a numeral, selecting the base from its prefix
pub fn parse_number(text: &str) -> Option<Number> {
    let (base, digits) = match text.as_bytes() {
        [] => return None,
        [b'0', prefix, ..] if !prefix.is_ascii_digit() => match prefix {
            b'x' => (16, &text[2..]),
            b'b' => (2, &text[2..]),
            b'd' => (10, &text[2..]),
            // A bare leading zero: the prefix is not consumed
            b'.' => (10, &text[1..]),
            _ => return None,
        },
        _ => (10, text),
    };
    parse_in_base(digits, base)
}

/// Fold `digits` as a base-`base` number, with at most one `.`
pub fn parse_in_base(digits: &str, base: u32) -> Option<Number> {
    let mut whole: i32 = 0;
    let mut chars = digits.chars();

    while let Some(c) = chars.next() {
        if c == '.' {
            return parse_fraction(whole, chars.as_str(), base).map(Number::Float);
        }
        let digit = digit_value(c, base)?;
        whole = whole
            .checked_mul(base as i32)?
            .checked_add(digit as i32)?;
    }

    Some(Number::Int(whole))
}

fn parse_fraction(whole: i32, digits: &str, base: u32) -> Option<f32> {
    let mut value = whole as f32;
    let mut factor = 1.0f32;

    for c in digits.chars() {
        factor *= base as f32;
        value += digit_value(c, base)? as f32 / factor;
    }

    Some(value)
}

fn digit_value(c: char, base: u32) -> Option<u32> {
    c.to_digit(36).filter(|digit| *digit < base)
}

impl Token {
    /// Rewrite an unresolved numeral in place into an int or float literal.
    ///
    /// Returns false, leaving the token untouched, when it is not a numeral
    /// or its text does not resolve.
    pub fn resolve_numeral(&mut self) -> bool {
        let TokenKind::Numeral(text) = &self.kind else {
            return false;
        };

        match parse_number(text) {
            Some(Number::Int(value)) => self.kind = TokenKind::Int(value),
            Some(Number::Float(value)) => self.kind = TokenKind::Float(value),
            None => return false,
        }
        true
    }
}
