//! Bracket grouping
//!
//! Each bracket level is collected, precedence-resolved when its closer
//! arrives, and replaced by a single [`Group`] node positioned at its opener.
//! Open levels are kept on an explicit stack, so nesting depth is bounded
//! only by memory.

use std::mem;

use super::precedence::resolve_precedence;
use crate::ast::{Bracket, Group, Node, Position};
use crate::error::{CompileError, CompileResult, ErrorKind};

/// A bracket level waiting for its closer
struct OpenLevel {
    bracket: Bracket,
    /// Position of the opener
    pos: Position,
    /// The enclosing level's nodes collected so far
    outer: Vec<Node>,
}

/// Group a promoted node list into its bracket structure
pub fn group(nodes: Vec<Node>) -> CompileResult<Vec<Node>> {
    let mut open: Vec<OpenLevel> = Vec::new();
    let mut level = Vec::new();

    for node in nodes {
        if let Some(punct) = node.punct() {
            if let Some(bracket) = Bracket::opened_by(punct) {
                open.push(OpenLevel {
                    bracket,
                    pos: node.pos(),
                    outer: mem::take(&mut level),
                });
                continue;
            }
            if let Some(bracket) = Bracket::closed_by(punct) {
                let Some(closed) = open.pop().filter(|closed| closed.bracket == bracket) else {
                    return Err(CompileError::new(invalid_closing(bracket), node.pos()));
                };
                let inner = resolve_precedence(mem::replace(&mut level, closed.outer))?;
                level.push(close_group(bracket, inner, closed.pos));
                continue;
            }
        }
        level.push(node);
    }

    match open.pop() {
        // Reported at the last node of the innermost open level, which is
        // the last node of the input once inner levels are folded
        Some(unclosed) => {
            let pos = level.last().map_or(unclosed.pos, Node::pos);
            Err(CompileError::new(missing_closing(unclosed.bracket), pos))
        }
        None => resolve_precedence(level),
    }
}

/// Parentheses around a single expression vanish
fn close_group(bracket: Bracket, mut nodes: Vec<Node>, pos: Position) -> Node {
    if bracket == Bracket::Paren && matches!(nodes.as_slice(), [Node::Expr(_)]) {
        if let Some(node) = nodes.pop() {
            return node;
        }
    }
    Node::Group(Group {
        bracket,
        nodes,
        pos,
    })
}

fn invalid_closing(bracket: Bracket) -> ErrorKind {
    match bracket {
        Bracket::Paren => ErrorKind::InvalidClosingParen,
        Bracket::Square => ErrorKind::InvalidClosingSquare,
        Bracket::Curly => ErrorKind::InvalidClosingCurly,
    }
}

fn missing_closing(bracket: Bracket) -> ErrorKind {
    match bracket {
        Bracket::Paren => ErrorKind::MissingClosingParen,
        Bracket::Square => ErrorKind::MissingClosingSquare,
        Bracket::Curly => ErrorKind::MissingClosingCurly,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Expr, ExprKind};
    use crate::lexer::{Punct, Token, TokenKind};

    fn int(value: i32, column: usize) -> Node {
        Node::Expr(Expr::int(value, Position::new(1, column)))
    }

    fn punct(punct: Punct, column: usize) -> Node {
        Node::Token(Token::new(TokenKind::Punct(punct), Position::new(1, column)))
    }

    #[test]
    fn test_single_expression_paren_collapses() {
        let nodes = group(vec![punct(Punct::LParen, 1), int(3, 2), punct(Punct::RParen, 3)]).unwrap();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].as_expr().map(|e| &e.kind), Some(&ExprKind::Int(3)));
    }

    #[test]
    fn test_square_group_is_kept() {
        let nodes = group(vec![punct(Punct::LBracket, 1), int(3, 2), punct(Punct::RBracket, 3)]).unwrap();
        let Node::Group(group) = &nodes[0] else {
            panic!("expected group, got {:?}", nodes[0]);
        };
        assert_eq!(group.bracket, Bracket::Square);
        assert_eq!(group.pos, Position::new(1, 1));
        assert_eq!(group.nodes.len(), 1);
    }

    #[test]
    fn test_empty_paren_is_kept() {
        let nodes = group(vec![punct(Punct::LParen, 1), punct(Punct::RParen, 2)]).unwrap();
        assert!(matches!(&nodes[0], Node::Group(g) if g.nodes.is_empty()));
    }

    #[test]
    fn test_mismatched_closer_names_the_closer() {
        let err = group(vec![punct(Punct::LParen, 1), int(1, 2), punct(Punct::RBracket, 3)]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidClosingSquare);
        assert_eq!(err.pos, Position::new(1, 3));
    }

    #[test]
    fn test_closer_at_top_level() {
        let err = group(vec![int(1, 1), punct(Punct::RBrace, 2)]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidClosingCurly);
        assert_eq!(err.pos, Position::new(1, 2));
    }

    #[test]
    fn test_missing_closer_reported_at_last_node() {
        let err = group(vec![
            punct(Punct::LBrace, 1),
            punct(Punct::LParen, 2),
            int(1, 3),
            punct(Punct::RParen, 4),
            int(2, 6),
        ])
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::MissingClosingCurly);
        assert_eq!(err.pos, Position::new(1, 6));
    }

    #[test]
    fn test_missing_closer_reported_at_folded_node() {
        // ((1) reports at the collapsed `1`, not the `)` after it
        let err = group(vec![
            punct(Punct::LParen, 1),
            punct(Punct::LParen, 2),
            int(1, 3),
            punct(Punct::RParen, 4),
        ])
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::MissingClosingParen);
        assert_eq!(err.pos, Position::new(1, 3));
    }

    #[test]
    fn test_missing_closer_after_bare_opener() {
        let err = group(vec![int(1, 1), punct(Punct::LBracket, 3)]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MissingClosingSquare);
        assert_eq!(err.pos, Position::new(1, 3));
    }

    #[test]
    fn test_deep_nesting() {
        let depth = 10_000;
        let mut nodes = Vec::with_capacity(2 * depth + 1);
        nodes.extend((0..depth).map(|i| punct(Punct::LParen, i + 1)));
        nodes.push(int(7, depth + 1));
        nodes.extend((0..depth).map(|i| punct(Punct::RParen, depth + 2 + i)));

        let nodes = group(nodes).unwrap();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].as_expr().map(|e| &e.kind), Some(&ExprKind::Int(7)));
    }

    #[test]
    fn test_empty_input() {
        assert!(group(Vec::new()).unwrap().is_empty());
    }
}
