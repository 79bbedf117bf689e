//! Structural AST nodes: bracket groups and unresolved tokens

use std::mem;

use super::expr::Expr;
use super::span::Position;
use crate::lexer::{Punct, Token};

/// Bracket kinds that delimit groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bracket {
    Paren,
    Square,
    Curly,
}

impl Bracket {
    /// The bracket opened by a punctuation token
    pub fn opened_by(punct: Punct) -> Option<Bracket> {
        match punct {
            Punct::LParen => Some(Bracket::Paren),
            Punct::LBracket => Some(Bracket::Square),
            Punct::LBrace => Some(Bracket::Curly),
            _ => None,
        }
    }

    /// The bracket closed by a punctuation token
    pub fn closed_by(punct: Punct) -> Option<Bracket> {
        match punct {
            Punct::RParen => Some(Bracket::Paren),
            Punct::RBracket => Some(Bracket::Square),
            Punct::RBrace => Some(Bracket::Curly),
            _ => None,
        }
    }

    pub fn open(self) -> char {
        match self {
            Bracket::Paren => '(',
            Bracket::Square => '[',
            Bracket::Curly => '{',
        }
    }

    pub fn close(self) -> char {
        match self {
            Bracket::Paren => ')',
            Bracket::Square => ']',
            Bracket::Curly => '}',
        }
    }
}

/// A bracket-delimited sequence of nodes
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub bracket: Bracket,
    pub nodes: Vec<Node>,
    /// Position of the opening bracket
    pub pos: Position,
}

impl Drop for Group {
    fn drop(&mut self) {
        let mut pending = mem::take(&mut self.nodes);
        while let Some(node) = pending.pop() {
            if let Node::Group(mut group) = node {
                pending.append(&mut group.nodes);
            }
        }
    }
}

/// A node of the AST
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A token not (yet) resolved into structure
    Token(Token),
    Group(Group),
    Expr(Expr),
}

impl Node {
    pub fn pos(&self) -> Position {
        match self {
            Node::Token(token) => token.pos,
            Node::Group(group) => group.pos,
            Node::Expr(expr) => expr.pos,
        }
    }

    /// Whether the node evaluates to a value
    pub fn is_expr(&self) -> bool {
        matches!(self, Node::Expr(_))
    }

    /// The punctuation this node wraps, if it is a punctuation token
    pub fn punct(&self) -> Option<Punct> {
        match self {
            Node::Token(token) => token.punct(),
            _ => None,
        }
    }

    pub fn as_expr(&self) -> Option<&Expr> {
        match self {
            Node::Expr(expr) => Some(expr),
            _ => None,
        }
    }
}
