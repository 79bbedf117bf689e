//! Debug renderings of the compiler's intermediate forms
//!
//! Written to whatever sink the caller passes; nothing here affects the
//! compiled output.

use std::io::{self, Write};

use crate::ast::{Bracket, Expr, ExprKind, Node};
use crate::codegen::{Bytecode, Opcode, Operands};
use crate::lexer::{Token, TokenKind};

/// One line per token: position, kind and payload
pub fn write_tokens(out: &mut impl Write, tokens: &[Token]) -> io::Result<()> {
    for token in tokens {
        write!(out, "{:>3}  {:>3}", token.pos.line, token.pos.column)?;
        match &token.kind {
            TokenKind::Numeral(text) => writeln!(out, "{:>10}: {}", "#", text)?,
            TokenKind::Int(value) => writeln!(out, "{:>10}: {}", "Int", value)?,
            TokenKind::Float(value) => writeln!(out, "{:>10}: {}", "Float", value)?,
            TokenKind::Str(text) => writeln!(out, "{:>10}: {}", "String", text)?,
            TokenKind::Ident(name) => writeln!(out, "{:>10}: {}", "ID", name)?,
            TokenKind::Punct(_) | TokenKind::Keyword(_) => writeln!(out, "{:>10}", token.text())?,
        }
    }
    Ok(())
}

/// One line of the AST dump still to be written
enum Line<'a> {
    Node(&'a Node, usize),
    Expr(&'a Expr, usize),
    Close(Bracket, usize),
    Separator(usize),
}

/// Tab-indented tree of the top-level nodes
pub fn write_ast(out: &mut impl Write, nodes: &[Node]) -> io::Result<()> {
    let mut lines: Vec<Line> = nodes.iter().rev().map(|node| Line::Node(node, 0)).collect();

    while let Some(line) = lines.pop() {
        match line {
            Line::Node(Node::Token(token), indent) => writeln!(out, "{}Token: {}", tabs(indent), token.text())?,
            Line::Node(Node::Group(group), indent) => {
                writeln!(out, "{}{}", tabs(indent), group.bracket.open())?;
                lines.push(Line::Close(group.bracket, indent));
                lines.extend(group.nodes.iter().rev().map(|child| Line::Node(child, indent + 1)));
            }
            Line::Node(Node::Expr(expr), indent) => lines.push(Line::Expr(expr, indent)),
            Line::Expr(expr, indent) => write_expr(out, expr, indent, &mut lines)?,
            Line::Close(bracket, indent) => writeln!(out, "{}{}", tabs(indent), bracket.close())?,
            Line::Separator(indent) => writeln!(out, "{}\t------", tabs(indent))?,
        }
    }
    Ok(())
}

/// Write the head line of an expression and queue its children
fn write_expr<'a>(out: &mut impl Write, expr: &'a Expr, indent: usize, lines: &mut Vec<Line<'a>>) -> io::Result<()> {
    let tabs = tabs(indent);
    let ty = expr.ty;
    match &expr.kind {
        ExprKind::Int(value) => writeln!(out, "{}[{}] {}", tabs, ty, value),
        ExprKind::Float(value) => writeln!(out, "{}[{}] {}", tabs, ty, value),
        ExprKind::Bool(value) => writeln!(out, "{}[{}] {}", tabs, ty, u8::from(*value)),
        ExprKind::Char(value) => writeln!(out, "{}[{}] {}", tabs, ty, char::from(*value)),
        ExprKind::Ident(name) => writeln!(out, "{}[{}] ID: {}", tabs, ty, name),
        ExprKind::Cast(source) => {
            lines.push(Line::Expr(source, indent + 1));
            writeln!(out, "{}[{}] Cast from", tabs, ty)
        }
        ExprKind::Binary { op, left, right } => {
            lines.push(Line::Expr(right, indent + 1));
            lines.push(Line::Separator(indent));
            lines.push(Line::Expr(left, indent + 1));
            writeln!(out, "{}[{}] Binop {}", tabs, ty, op.name())
        }
    }
}

fn tabs(indent: usize) -> String {
    "\t".repeat(indent)
}

/// Disassembly, one record per line. Stops at the first byte that does not
/// start a complete record.
pub fn write_bytecode(out: &mut impl Write, bytecode: &Bytecode) -> io::Result<()> {
    let code = bytecode.as_bytes();
    let mut offset = 0;

    while offset < code.len() {
        let record = Opcode::from_byte(code[offset])
            .and_then(|op| code.get(offset..offset + op.record_len()).map(|bytes| (op, bytes)));
        let Some((op, bytes)) = record else {
            writeln!(out, "{:04X}  ??    {:02X}", offset, code[offset])?;
            break;
        };

        write!(out, "{:04X}  {:<5}", offset, op.mnemonic())?;
        match op.operands() {
            Operands::None => writeln!(out)?,
            Operands::RegImm32 => {
                let imm = [bytes[2], bytes[3], bytes[4], bytes[5]];
                if op == Opcode::MovF {
                    writeln!(out, " r{}, {}", bytes[1], f32::from_le_bytes(imm))?;
                } else {
                    writeln!(out, " r{}, {}", bytes[1], i32::from_le_bytes(imm))?;
                }
            }
            Operands::RegImm8 => writeln!(out, " r{}, {}", bytes[1], bytes[2])?,
            Operands::RegReg => writeln!(out, " r{}, r{}", bytes[1], bytes[2])?,
            Operands::RegRegReg => writeln!(out, " r{}, r{}, r{}", bytes[1], bytes[2], bytes[3])?,
        }
        offset += bytes.len();
    }
    Ok(())
}
