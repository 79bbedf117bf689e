//! Operator precedence resolution within one bracket level
//!
//! Two left-to-right passes: `*` and `/` first, then `+` and `-`. Each pass
//! streams the level into a fresh vector; an operator pops its left operand
//! off that vector and takes its right operand from the input, so chains of
//! equal precedence fold to the left.

use crate::ast::{BinaryOp, Node};
use crate::error::{CompileError, CompileResult, ErrorKind};
use crate::sema::resolve_binop;

const MULTIPLICATIVE: [BinaryOp; 2] = [BinaryOp::Mul, BinaryOp::Div];
const ADDITIVE: [BinaryOp; 2] = [BinaryOp::Add, BinaryOp::Sub];

/// Fold every arithmetic operator of a level into binary expressions
pub fn resolve_precedence(nodes: Vec<Node>) -> CompileResult<Vec<Node>> {
    let nodes = fold_pass(nodes, &MULTIPLICATIVE)?;
    fold_pass(nodes, &ADDITIVE)
}

fn fold_pass(nodes: Vec<Node>, ops: &[BinaryOp]) -> CompileResult<Vec<Node>> {
    let mut folded = Vec::with_capacity(nodes.len());
    let mut rest = nodes.into_iter();

    while let Some(node) = rest.next() {
        let Some(op) = node
            .punct()
            .and_then(BinaryOp::from_punct)
            .filter(|op| ops.contains(op))
        else {
            folded.push(node);
            continue;
        };

        let pos = node.pos();
        let missing = || CompileError::with_detail(ErrorKind::BinopMissingExpression, pos, op.name());

        let left = match folded.pop() {
            Some(Node::Expr(expr)) => expr,
            _ => return Err(missing()),
        };
        let right = match rest.next() {
            Some(Node::Expr(expr)) => expr,
            _ => return Err(missing()),
        };

        folded.push(Node::Expr(resolve_binop(op, left, right, pos)?));
    }

    Ok(folded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Expr, ExprKind, Position};
    use crate::lexer::{Punct, Token, TokenKind};

    fn int(value: i32, column: usize) -> Node {
        Node::Expr(Expr::int(value, Position::new(1, column)))
    }

    fn op(punct: Punct, column: usize) -> Node {
        Node::Token(Token::new(TokenKind::Punct(punct), Position::new(1, column)))
    }

    fn binary_op(node: &Node) -> Option<BinaryOp> {
        match node.as_expr().map(|e| &e.kind) {
            Some(ExprKind::Binary { op, .. }) => Some(*op),
            _ => None,
        }
    }

    #[test]
    fn test_multiplication_binds_tighter() {
        // 2 + 3 * 4
        let nodes = resolve_precedence(vec![
            int(2, 1),
            op(Punct::Plus, 3),
            int(3, 5),
            op(Punct::Star, 7),
            int(4, 9),
        ])
        .unwrap();

        assert_eq!(nodes.len(), 1);
        assert_eq!(binary_op(&nodes[0]), Some(BinaryOp::Add));
        assert_eq!(nodes[0].pos(), Position::new(1, 3));
        let Some(ExprKind::Binary { right, .. }) = nodes[0].as_expr().map(|e| &e.kind) else {
            panic!("expected binary");
        };
        assert!(matches!(right.kind, ExprKind::Binary { op: BinaryOp::Mul, .. }));
    }

    #[test]
    fn test_other_tokens_pass_through() {
        let nodes = resolve_precedence(vec![
            int(1, 1),
            op(Punct::Semi, 2),
            int(2, 4),
            op(Punct::Minus, 6),
            int(1, 8),
        ])
        .unwrap();

        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[1].punct(), Some(Punct::Semi));
        assert_eq!(binary_op(&nodes[2]), Some(BinaryOp::Sub));
    }

    #[test]
    fn test_leading_operator_is_missing_left() {
        let err = resolve_precedence(vec![op(Punct::Minus, 1), int(5, 2)]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::BinopMissingExpression);
        assert_eq!(err.pos, Position::new(1, 1));
    }

    #[test]
    fn test_trailing_operator_is_missing_right() {
        let err = resolve_precedence(vec![int(5, 1), op(Punct::Slash, 3)]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::BinopMissingExpression);
        assert_eq!(err.pos, Position::new(1, 3));
    }

    #[test]
    fn test_operator_next_to_token_is_missing_expression() {
        let err = resolve_precedence(vec![
            int(5, 1),
            op(Punct::Plus, 3),
            op(Punct::Semi, 4),
        ])
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::BinopMissingExpression);
        assert_eq!(err.pos, Position::new(1, 3));
    }
}
