//! Token types produced by the lexer

use crate::ast::Position;

/// One- and two-character punctuation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Punct {
    // === One character ===
    Tilde,
    Backtick,
    Bang,
    At,
    Hash,
    Dollar,
    Percent,
    Caret,
    Amp,
    Star,
    Underscore,
    Minus,
    Plus,
    Eq,
    Pipe,
    Backslash,
    Colon,
    Semi,
    Quote,
    Comma,
    Dot,
    Question,
    Slash,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Lt,
    Gt,

    // === Two characters ===
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    PercentEq,
    EqEq,
    Le,
    Ge,
    PlusPlus,
    MinusMinus,
    StarSlash,
}

impl Punct {
    /// Source text of the punctuation
    pub fn as_str(self) -> &'static str {
        match self {
            Punct::Tilde => "~",
            Punct::Backtick => "`",
            Punct::Bang => "!",
            Punct::At => "@",
            Punct::Hash => "#",
            Punct::Dollar => "$",
            Punct::Percent => "%",
            Punct::Caret => "^",
            Punct::Amp => "&",
            Punct::Star => "*",
            Punct::Underscore => "_",
            Punct::Minus => "-",
            Punct::Plus => "+",
            Punct::Eq => "=",
            Punct::Pipe => "|",
            Punct::Backslash => "\\",
            Punct::Colon => ":",
            Punct::Semi => ";",
            Punct::Quote => "'",
            Punct::Comma => ",",
            Punct::Dot => ".",
            Punct::Question => "?",
            Punct::Slash => "/",
            Punct::LParen => "(",
            Punct::RParen => ")",
            Punct::LBracket => "[",
            Punct::RBracket => "]",
            Punct::LBrace => "{",
            Punct::RBrace => "}",
            Punct::Lt => "<",
            Punct::Gt => ">",
            Punct::PlusEq => "+=",
            Punct::MinusEq => "-=",
            Punct::StarEq => "*=",
            Punct::SlashEq => "/=",
            Punct::PercentEq => "%=",
            Punct::EqEq => "==",
            Punct::Le => "<=",
            Punct::Ge => ">=",
            Punct::PlusPlus => "++",
            Punct::MinusMinus => "--",
            Punct::StarSlash => "*/",
        }
    }
}

/// Reserved words, matched exactly and case-sensitively
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Int,
    Float,
    Bool,
    Char,
    Return,
    While,
    For,
    If,
    Else,
    Elif,
    And,
    Or,
    True,
    False,
}

/// The keyword table
pub const KEYWORDS: [(&str, Keyword); 14] = [
    ("int", Keyword::Int),
    ("float", Keyword::Float),
    ("bool", Keyword::Bool),
    ("char", Keyword::Char),
    ("return", Keyword::Return),
    ("while", Keyword::While),
    ("for", Keyword::For),
    ("if", Keyword::If),
    ("else", Keyword::Else),
    ("elif", Keyword::Elif),
    ("and", Keyword::And),
    ("or", Keyword::Or),
    ("true", Keyword::True),
    ("false", Keyword::False),
];

impl Keyword {
    /// Look up a whole word in the keyword table
    pub fn from_word(word: &str) -> Option<Keyword> {
        KEYWORDS
            .iter()
            .find(|(text, _)| *text == word)
            .map(|(_, keyword)| *keyword)
    }

    pub fn as_str(self) -> &'static str {
        KEYWORDS
            .iter()
            .find(|(_, keyword)| *keyword == self)
            .map_or("", |(text, _)| text)
    }
}

/// What a token is, together with the payload it owns
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Punct(Punct),
    Keyword(Keyword),
    /// Resolved integer literal
    Int(i32),
    /// Resolved floating literal
    Float(f32),
    /// String literal with escapes already applied
    Str(String),
    Ident(String),
    /// A numeral that has not been resolved yet
    Numeral(String),
}

/// A token with its position in the source
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: Position,
}

impl Token {
    pub fn new(kind: TokenKind, pos: Position) -> Self {
        Self { kind, pos }
    }

    /// The punctuation this token is, if any
    pub fn punct(&self) -> Option<Punct> {
        match self.kind {
            TokenKind::Punct(punct) => Some(punct),
            _ => None,
        }
    }

    /// Source-like rendering of the token, used in dumps and error details
    pub fn text(&self) -> String {
        match &self.kind {
            TokenKind::Punct(punct) => punct.as_str().to_string(),
            TokenKind::Keyword(keyword) => keyword.as_str().to_string(),
            TokenKind::Int(value) => value.to_string(),
            TokenKind::Float(value) => value.to_string(),
            TokenKind::Str(text) => format!("{:?}", text),
            TokenKind::Ident(name) | TokenKind::Numeral(name) => name.clone(),
        }
    }
}
