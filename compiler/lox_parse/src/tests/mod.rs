//! Parser tests.
//!
//! - `parser`: expressions, statements, desugaring
//! - `control`: label, `break`, `continue` and `return` validation
//! - `recovery`: error reporting and synchronization

#![allow(clippy::unwrap_used, clippy::expect_used)]


use lox_diagnostic::BufferReporter;
use lox_ir::printer::print_stmts;

use crate::{parse, ParseOutput};

/// Scan and parse `source`, returning the output and rendered diagnostics.
pub(super) fn parse_source(source: &str, expression_only: bool) -> (ParseOutput, Vec<String>) {
    let reporter = BufferReporter::new();
    let tokens = lox_lexer::scan(source, &reporter);
    let output = parse(&tokens, expression_only, &reporter);
    (output, reporter.messages())
}

/// Parse error-free `source` and render it as s-expressions.
pub(super) fn sexpr(source: &str) -> String {
    let (output, errors) = parse_source(source, false);
    assert!(errors.is_empty(), "unexpected errors for {source:?}: {errors:?}");
    assert!(!output.has_errors());
    print_stmts(&output.statements)
}

/// Parse `source` expecting syntax errors; return the rendered messages.
pub(super) fn errors(source: &str) -> Vec<String> {
    let (output, errors) = parse_source(source, false);
    assert!(output.has_errors(), "expected errors for {source:?}");
    errors
}
