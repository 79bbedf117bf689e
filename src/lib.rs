//! Z - a small expression language compiled to register bytecode
//!
//! This crate provides the compiler front end (lexer and AST builder) and
//! the bytecode generator for the Z language.

pub mod ast;
pub mod codegen;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod sema;

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::Context;

// Re-export commonly used types
pub use ast::{Node, Position};
pub use codegen::Bytecode;
pub use config::Settings;
pub use error::{CompileError, CompileResult, ErrorKind};
pub use lexer::lex;
pub use parser::build_ast;

/// Compile source text to bytecode.
///
/// With `settings.debug` set, the token list, the AST and a disassembly of
/// the result are written to `diag`.
pub fn compile(source: &str, settings: &Settings, diag: &mut impl Write) -> CompileResult<Bytecode> {
    let tokens = lex(source)?;
    if settings.debug {
        dump(diag, |out| diagnostics::write_tokens(out, &tokens));
    }

    let nodes = build_ast(tokens)?;
    if settings.debug {
        dump(diag, |out| {
            diagnostics::write_ast(out, &nodes)?;
            for node in nodes.iter().filter(|node| !node.is_expr()) {
                writeln!(out, "skipping non-expression node at {}", node.pos())?;
            }
            Ok(())
        });
    }

    let bytecode = codegen::generate(&nodes, settings)?;
    if settings.debug {
        dump(diag, |out| {
            diagnostics::write_bytecode(out, &bytecode)?;
            writeln!(out, "{} bytes emitted", bytecode.len())
        });
    }

    Ok(bytecode)
}

/// Compile `input` and write the bytecode to `output`.
///
/// A compile error is reported to `diag` before it is returned.
pub fn compile_file(input: &Path, output: &Path, settings: &Settings, diag: &mut impl Write) -> anyhow::Result<()> {
    let source = fs::read_to_string(input)
        .with_context(|| format!("could not read {}", input.display()))?;

    let bytecode = match compile(&source, settings, diag) {
        Ok(bytecode) => bytecode,
        Err(err) => {
            dump(diag, |out| writeln!(out, "{}", err.report()));
            return Err(err.into());
        }
    };

    fs::write(output, bytecode.as_bytes())
        .with_context(|| format!("could not write {}", output.display()))?;
    Ok(())
}

// A failing diagnostics sink does not fail the compilation
fn dump<W, F>(diag: &mut W, write: F)
where
    W: Write,
    F: FnOnce(&mut W) -> io::Result<()>,
{
    let _ = write(diag);
}
