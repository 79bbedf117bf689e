//! Pipeline tests - settings, file entry point and debug output

mod common;
use common::*;

use std::fs;
use std::path::PathBuf;

use zc::{CompileError, Settings, compile_file};

/// A fresh scratch directory per test
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("zc-test-{}-{}", std::process::id(), name));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("failed to create scratch dir");
    dir
}

#[test]
fn test_compile_file_writes_bytecode() {
    let dir = scratch_dir("writes");
    let input = dir.join("answer.z");
    let output = dir.join("answer.zbc");
    fs::write(&input, "42").unwrap();

    let mut diag = Vec::new();
    compile_file(&input, &output, &Settings::default(), &mut diag).expect("compile failed");

    assert_eq!(fs::read(&output).unwrap(), vec![0x01, 0x00, 0x2A, 0x00, 0x00, 0x00]);
    assert!(diag.is_empty());
}

#[test]
fn test_compile_file_reports_compile_errors() {
    let dir = scratch_dir("reports");
    let input = dir.join("broken.z");
    let output = dir.join("broken.zbc");
    fs::write(&input, "1 +\n(2").unwrap();

    let mut diag = Vec::new();
    let err = compile_file(&input, &output, &Settings::default(), &mut diag).unwrap_err();

    assert!(err.downcast_ref::<CompileError>().is_some());
    assert_eq!(
        String::from_utf8(diag).unwrap(),
        "Error during compilation at LINE 2, COLUMN 2 : missing a closing parenthesis\n"
    );
    assert!(!output.exists());
}

#[test]
fn test_compile_file_missing_input() {
    let dir = scratch_dir("missing");
    let mut diag = Vec::new();
    let err = compile_file(&dir.join("nope.z"), &dir.join("nope.zbc"), &Settings::default(), &mut diag)
        .unwrap_err();

    assert!(err.downcast_ref::<CompileError>().is_none());
    assert!(err.to_string().contains("could not read"));
}

#[test]
fn test_settings_file() {
    let dir = scratch_dir("settings");
    let path = dir.join("zc.toml");
    fs::write(&path, "debug = true\n\n[registers]\nword = 3\nbyte = 1\n").unwrap();

    let settings = Settings::load(&path).expect("bad settings");
    assert!(settings.debug);
    assert_eq!(settings.registers.word, 3);
    assert!(compile_with("1 + 2", &settings).is_ok());
    assert!(compile_with("1 + (2 + 3)", &settings).is_err());
}

#[test]
fn test_debug_output_sections() {
    let (result, diag) = debug_output("2 * 1.5");
    result.expect("compile error");

    let lines: Vec<&str> = diag.lines().collect();
    assert_eq!(lines[0], "  1    1       Int: 2");
    assert_eq!(lines[1], "  1    3         *");
    assert_eq!(lines[2], "  1    5     Float: 1.5");
    assert_eq!(lines[3], "[Float] Binop Mul");
    assert!(diag.contains("ITOF  r1, r0"));
    assert!(diag.ends_with("bytes emitted\n"));
}

#[test]
fn test_debug_output_is_silent_without_debug() {
    let mut diag = Vec::new();
    zc::compile("1 + 1", &Settings::default(), &mut diag).expect("compile error");
    assert!(diag.is_empty());
}

#[test]
fn test_debug_dump_of_long_sum() {
    let source = format!("{}2", "1 * ".repeat(9_999));
    let (result, text) = debug_output(&source);
    let code = result.expect("compile error");

    assert_eq!(code.len(), 10_000 * 6 + 9_999 * 4);
    assert_eq!(text.matches("Binop Mul").count(), 9_999);
    assert!(text.ends_with(&format!("{} bytes emitted\n", code.len())));
}
