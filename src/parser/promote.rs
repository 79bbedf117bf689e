//! Leaf promotion: turn value tokens into typed expression leaves

use crate::ast::{Expr, Node};
use crate::lexer::{Keyword, Token, TokenKind};

/// Promote every value token to an [`Expr`] leaf and wrap the rest as
/// [`Node::Token`]. Payloads are moved out of the tokens.
pub fn promote(tokens: Vec<Token>) -> Vec<Node> {
    tokens.into_iter().map(promote_token).collect()
}

fn promote_token(token: Token) -> Node {
    let pos = token.pos;
    match token.kind {
        TokenKind::Int(value) => Node::Expr(Expr::int(value, pos)),
        TokenKind::Float(value) => Node::Expr(Expr::float(value, pos)),
        TokenKind::Keyword(Keyword::True) => Node::Expr(Expr::bool(true, pos)),
        TokenKind::Keyword(Keyword::False) => Node::Expr(Expr::bool(false, pos)),
        TokenKind::Ident(name) => Node::Expr(Expr::ident(name, pos)),
        kind => Node::Token(Token::new(kind, pos)),
    }
}
