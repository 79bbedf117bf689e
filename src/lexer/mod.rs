//! Lexer for the Z language
//!
//! Uses logos for tokenization. String literals and block comments are
//! scanned by callbacks, which keep the line/column cursor in the lexer's
//! extras up to date across the newlines they swallow.

mod number;
mod token;

pub use number::{Number, parse_in_base, parse_number};
pub use token::{KEYWORDS, Keyword, Punct, Token, TokenKind};

use logos::{Lexer, Logos, Skip};

use crate::ast::Position;
use crate::error::{CompileError, CompileResult, ErrorKind};

/// Longest string literal, identifier or numeral accepted, in characters
pub const MAX_STR_LEN: usize = 1024;

/// Line tracking carried through the logos lexer
#[derive(Debug, Clone, Copy)]
struct Cursor {
    line: usize,
    /// Byte offset of column 1 on the current line
    line_start: usize,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            line: 1,
            line_start: 0,
        }
    }
}

impl Cursor {
    fn position(&self, source: &str, offset: usize) -> Position {
        let column = source
            .get(self.line_start..offset)
            .map_or(0, |prefix| prefix.chars().count());
        Position::new(self.line, column + 1)
    }

    fn newline(&mut self, next_line_start: usize) {
        self.line += 1;
        self.line_start = next_line_start;
    }
}

/// Failures raised from inside the lexer
#[derive(Debug, Clone, PartialEq, Default)]
enum LexFault {
    /// No pattern matched
    #[default]
    Unrecognized,
    At(ErrorKind, Position),
}

/// A string literal and the position of its opening quote
#[derive(Debug, Clone, PartialEq)]
struct StrLit {
    text: String,
    pos: Position,
}

/// Raw lexemes; comments and newlines never leave the lexer
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(extras = Cursor)]
#[logos(error = LexFault)]
#[logos(skip r"[ \t\r\f]+")]
enum Lexeme {
    #[token("\n", newline)]
    Newline,

    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    LineComment,

    #[token("/*", block_comment)]
    BlockComment,

    #[token("\"", string)]
    Str(StrLit),

    #[regex(r"[0-9][0-9A-Za-z]*(\.[0-9A-Za-z]*)?", |lex| lex.slice().to_string())]
    Numeral(String),

    /// Anything that is not whitespace, punctuation, a digit or a quote
    #[regex(r#"[^ \t\r\n\f0-9~`!@#$%^&*_+=|\\:;"',.?/()\[\]{}<>-]+"#, |lex| lex.slice().to_string())]
    Word(String),

    // === One character ===
    #[token("~", |_| Punct::Tilde)]
    #[token("`", |_| Punct::Backtick)]
    #[token("!", |_| Punct::Bang)]
    #[token("@", |_| Punct::At)]
    #[token("#", |_| Punct::Hash)]
    #[token("$", |_| Punct::Dollar)]
    #[token("%", |_| Punct::Percent)]
    #[token("^", |_| Punct::Caret)]
    #[token("&", |_| Punct::Amp)]
    #[token("*", |_| Punct::Star)]
    #[token("_", |_| Punct::Underscore)]
    #[token("-", |_| Punct::Minus)]
    #[token("+", |_| Punct::Plus)]
    #[token("=", |_| Punct::Eq)]
    #[token("|", |_| Punct::Pipe)]
    #[token("\\", |_| Punct::Backslash)]
    #[token(":", |_| Punct::Colon)]
    #[token(";", |_| Punct::Semi)]
    #[token("'", |_| Punct::Quote)]
    #[token(",", |_| Punct::Comma)]
    #[token(".", |_| Punct::Dot)]
    #[token("?", |_| Punct::Question)]
    #[token("/", |_| Punct::Slash)]
    #[token("(", |_| Punct::LParen)]
    #[token(")", |_| Punct::RParen)]
    #[token("[", |_| Punct::LBracket)]
    #[token("]", |_| Punct::RBracket)]
    #[token("{", |_| Punct::LBrace)]
    #[token("}", |_| Punct::RBrace)]
    #[token("<", |_| Punct::Lt)]
    #[token(">", |_| Punct::Gt)]
    // === Two characters (`//` and `/*` open comments instead) ===
    #[token("+=", |_| Punct::PlusEq)]
    #[token("-=", |_| Punct::MinusEq)]
    #[token("*=", |_| Punct::StarEq)]
    #[token("/=", |_| Punct::SlashEq)]
    #[token("%=", |_| Punct::PercentEq)]
    #[token("==", |_| Punct::EqEq)]
    #[token("<=", |_| Punct::Le)]
    #[token(">=", |_| Punct::Ge)]
    #[token("++", |_| Punct::PlusPlus)]
    #[token("--", |_| Punct::MinusMinus)]
    #[token("*/", |_| Punct::StarSlash)]
    Punct(Punct),
}

fn newline(lex: &mut Lexer<Lexeme>) -> Skip {
    let next_line_start = lex.span().end;
    lex.extras.newline(next_line_start);
    Skip
}

/// Skip to the first `*/`, or to the end of input if there is none
fn block_comment(lex: &mut Lexer<Lexeme>) -> Skip {
    let start = lex.span().end;
    let rest = lex.remainder();
    let len = rest.find("*/").map_or(rest.len(), |end| end + 2);

    for (i, _) in rest[..len].match_indices('\n') {
        lex.extras.newline(start + i + 1);
    }
    lex.bump(len);
    Skip
}

/// Scan a string literal after its opening quote, applying escapes
fn string(lex: &mut Lexer<Lexeme>) -> Result<StrLit, LexFault> {
    let pos = lex.extras.position(lex.source(), lex.span().start);
    let start = lex.span().end;
    let rest = lex.remainder();

    let mut text = String::new();
    let mut len = 0;
    let mut escaped = false;

    for (i, c) in rest.char_indices() {
        let next = start + i + c.len_utf8();
        let c = if escaped {
            escaped = false;
            match c {
                // The line count does not move, but the column starts over
                'n' => {
                    lex.extras.line_start = next;
                    '\n'
                }
                'c' => '\x1b',
                '0' => '\0',
                't' => '\t',
                '\n' => {
                    lex.extras.newline(next);
                    '\n'
                }
                other => other,
            }
        } else {
            match c {
                '"' => {
                    lex.bump(i + 1);
                    return Ok(StrLit { text, pos });
                }
                '\\' => {
                    escaped = true;
                    continue;
                }
                '\n' => {
                    lex.extras.newline(next);
                    '\n'
                }
                other => other,
            }
        };

        if len >= MAX_STR_LEN {
            return Err(LexFault::At(ErrorKind::StringTooLong, pos));
        }
        text.push(c);
        len += 1;
    }

    lex.bump(rest.len());
    Err(LexFault::At(ErrorKind::UnterminatedString, pos))
}

fn check_len(text: &str, pos: Position) -> CompileResult<()> {
    if text.chars().count() > MAX_STR_LEN {
        return Err(CompileError::new(ErrorKind::StringTooLong, pos));
    }
    Ok(())
}

/// Lex source code into tokens, resolving numerals as they are found
pub fn lex(source: &str) -> CompileResult<Vec<Token>> {
    let mut lexer = Lexeme::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let pos = lexer.extras.position(source, lexer.span().start);

        let token = match result {
            Ok(Lexeme::Str(lit)) => Token::new(TokenKind::Str(lit.text), lit.pos),
            Ok(Lexeme::Numeral(text)) => {
                check_len(&text, pos)?;
                let mut token = Token::new(TokenKind::Numeral(text), pos);
                if !token.resolve_numeral() {
                    return Err(CompileError::with_detail(
                        ErrorKind::InvalidNumber,
                        pos,
                        token.text(),
                    ));
                }
                token
            }
            Ok(Lexeme::Word(word)) => {
                check_len(&word, pos)?;
                let kind = match Keyword::from_word(&word) {
                    Some(keyword) => TokenKind::Keyword(keyword),
                    None => TokenKind::Ident(word),
                };
                Token::new(kind, pos)
            }
            Ok(Lexeme::Punct(punct)) => Token::new(TokenKind::Punct(punct), pos),
            // Their callbacks always skip
            Ok(Lexeme::Newline | Lexeme::LineComment | Lexeme::BlockComment) => continue,
            Err(LexFault::At(kind, pos)) => return Err(CompileError::new(kind, pos)),
            Err(LexFault::Unrecognized) => {
                return Err(CompileError::with_detail(
                    ErrorKind::Unknown,
                    pos,
                    format!("unexpected character: {:?}", lexer.slice()),
                ));
            }
        };
        tokens.push(token);
    }

    Ok(tokens)
}
