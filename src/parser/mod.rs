//! AST builder for the Z language
//!
//! Turns the token stream into a forest of nodes in three stages: leaf
//! promotion, bracket grouping, and per-level precedence resolution.
//! Arithmetic is typed as it is folded, so the result is ready for codegen.

mod group;
mod precedence;
mod promote;

pub use group::group;
pub use precedence::resolve_precedence;
pub use promote::promote;

use crate::ast::Node;
use crate::error::CompileResult;
use crate::lexer::Token;

/// Build the top-level node list from a token stream
pub fn build_ast(tokens: Vec<Token>) -> CompileResult<Vec<Node>> {
    group(promote(tokens))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{BinaryOp, Bracket, ExprKind, ExprType, Position};
    use crate::error::{CompileError, ErrorKind};
    use crate::lexer::lex;

    fn parse(source: &str) -> CompileResult<Vec<Node>> {
        build_ast(lex(source).expect("lexer error"))
    }

    fn parse_err(source: &str) -> CompileError {
        parse(source).expect_err("expected a compile error")
    }

    #[test]
    fn test_parse_single_literal() {
        let nodes = parse("42").expect("parse error");
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].as_expr().map(|e| &e.kind), Some(&ExprKind::Int(42)));
    }

    #[test]
    fn test_parse_left_associative_chain() {
        // (8 - 3) - 2
        let nodes = parse("8 - 3 - 2").expect("parse error");
        let expr = nodes[0].as_expr().unwrap();
        let ExprKind::Binary { op, left, right } = &expr.kind else {
            panic!("expected binary, got {:?}", expr);
        };
        assert_eq!(*op, BinaryOp::Sub);
        assert_eq!(expr.pos, Position::new(1, 7));
        assert_eq!(right.kind, ExprKind::Int(2));
        assert!(matches!(left.kind, ExprKind::Binary { op: BinaryOp::Sub, .. }));
    }

    #[test]
    fn test_parse_parens_override_precedence() {
        let nodes = parse("(2 + 3) * 4").expect("parse error");
        let ExprKind::Binary { op, left, .. } = &nodes[0].as_expr().unwrap().kind else {
            panic!("expected binary");
        };
        assert_eq!(*op, BinaryOp::Mul);
        assert!(matches!(left.kind, ExprKind::Binary { op: BinaryOp::Add, .. }));
    }

    #[test]
    fn test_parse_mixed_types_insert_cast() {
        let nodes = parse("1 + 2.5").expect("parse error");
        let expr = nodes[0].as_expr().unwrap();
        assert_eq!(expr.ty, ExprType::Float);
        let ExprKind::Binary { left, .. } = &expr.kind else {
            panic!("expected binary");
        };
        assert!(matches!(left.kind, ExprKind::Cast(_)));
    }

    #[test]
    fn test_parse_curly_group_holds_statements() {
        let nodes = parse("{ 1 + 1; 2 }").expect("parse error");
        let Node::Group(group) = &nodes[0] else {
            panic!("expected group");
        };
        assert_eq!(group.bracket, Bracket::Curly);
        assert_eq!(group.nodes.len(), 3);
        assert!(group.nodes[0].is_expr());
    }

    #[test]
    fn test_parse_identifier_in_arithmetic_fails() {
        let err = parse_err("x + 1");
        assert_eq!(err.kind, ErrorKind::BinopIllegalPattern);
        assert_eq!(err.pos, Position::new(1, 3));
    }

    #[test]
    fn test_parse_nested_missing_closer() {
        let err = parse_err("((1 + 2)");
        assert_eq!(err.kind, ErrorKind::MissingClosingParen);
        assert_eq!(err.pos, Position::new(1, 8));
    }
}
