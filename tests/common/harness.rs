//! Test harness for compiling Z programs
//!
//! Provides functions to run the pipeline to a given stage and to assert on
//! the outcome.

use std::io;

use zc::ast::Node;
use zc::config::RegisterConfig;
use zc::{CompileError, CompileResult, ErrorKind, Position, Settings, build_ast, lex};

/// Compile with default settings, discarding diagnostics
pub fn compile(source: &str) -> CompileResult<Vec<u8>> {
    compile_with(source, &Settings::default())
}

pub fn compile_with(source: &str, settings: &Settings) -> CompileResult<Vec<u8>> {
    zc::compile(source, settings, &mut io::sink()).map(|bytecode| bytecode.into_bytes())
}

/// Lex and build the AST
pub fn parse(source: &str) -> CompileResult<Vec<Node>> {
    build_ast(lex(source)?)
}

/// Settings with the given register pool sizes
pub fn pools(word: usize, byte: usize) -> Settings {
    Settings {
        registers: RegisterConfig { word, byte },
        ..Settings::default()
    }
}

/// Compile with debug output enabled and return what was written
pub fn debug_output(source: &str) -> (CompileResult<Vec<u8>>, String) {
    let settings = Settings {
        debug: true,
        ..Settings::default()
    };
    let mut diag = Vec::new();
    let result = zc::compile(source, &settings, &mut diag).map(|bytecode| bytecode.into_bytes());
    (result, String::from_utf8_lossy(&diag).into_owned())
}

/// Assert that source compiles successfully
pub fn assert_compiles(source: &str) -> Vec<u8> {
    match compile(source) {
        Ok(code) => code,
        Err(e) => panic!("compile error at {}: {}", e.pos, e),
    }
}

/// Assert that source fails with a specific error kind
pub fn assert_fails_with(source: &str, kind: ErrorKind) -> CompileError {
    match compile(source) {
        Ok(code) => panic!("expected {:?} but compiled to {:02X?}", kind, code),
        Err(e) => {
            assert_eq!(e.kind, kind, "unexpected error: {}", e);
            e
        }
    }
}

/// Assert that source fails with a specific error kind at a position
pub fn assert_fails_at(source: &str, kind: ErrorKind, line: usize, column: usize) {
    let err = assert_fails_with(source, kind);
    assert_eq!(err.pos, Position::new(line, column), "wrong position for {:?}", kind);
}
