//! Common test fixtures and example programs

/// Integer literal only
pub const SINGLE_INT: &str = "42";

/// Precedence and associativity in one expression
pub const MIXED_PRECEDENCE: &str = "1 + 2 * 3 - 4 / 2";

/// Every implicit cast the binop table can produce
pub const ALL_CASTS: &str = r#"
1 + 1.5
true + 2.0
true + 1
true * false
"#;

/// Comments and strings around expressions
pub const WITH_COMMENTS: &str = r#"
// line comment
/* block
   comment */ 7 * (2 + 1)
"skipped string"
"#;
