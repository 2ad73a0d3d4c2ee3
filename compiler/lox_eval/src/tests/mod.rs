//! Evaluator tests over real source text.
//!
//! - `programs`: expressions, variables, functions and closures
//! - `control_flow`: loops, labels, `break`, `continue`, `return`
//! - `runtime_errors`: error kinds, messages and lines

#![allow(clippy::unwrap_used, clippy::expect_used)]


use std::sync::Arc;

use lox_diagnostic::{BufferReporter, Reporter};

use crate::{EvalError, Interpreter, InterpreterBuilder};

/// Everything observable about one run.
pub(crate) struct Run {
    pub output: Vec<String>,
    pub errors: Vec<String>,
    pub result: Result<(), EvalError>,
}

/// Parse `source` (which must be free of syntax errors) into statements.
pub(crate) fn parse_program(source: &str, reporter: &dyn Reporter) -> Vec<lox_ir::Stmt> {
    let tokens = lox_lexer::scan(source, reporter);
    let parsed = lox_parse::parse(&tokens, false, reporter);
    assert!(
        !parsed.has_errors() && !reporter.had_syntax_error(),
        "syntax errors in {source:?}"
    );
    parsed.statements
}

pub(crate) fn run_with(builder: InterpreterBuilder, source: &str) -> Run {
    let reporter = Arc::new(BufferReporter::new());
    let statements = parse_program(source, &*reporter);
    let mut interpreter = builder.reporter(reporter.clone()).build();
    let result = interpreter.interpret(&statements);
    Run {
        output: reporter.output_lines(),
        errors: reporter.messages(),
        result,
    }
}

pub(crate) fn run(source: &str) -> Run {
    run_with(Interpreter::builder(), source)
}

/// Run `source` expecting success; return its output lines.
pub(crate) fn output(source: &str) -> Vec<String> {
    let run = run(source);
    assert!(run.errors.is_empty(), "unexpected errors: {:?}", run.errors);
    assert!(run.result.is_ok());
    run.output
}

/// Run `source` expecting a runtime error; return the rendered message.
pub(crate) fn runtime_error(source: &str) -> String {
    let run = run(source);
    let err = run.result.expect_err("expected a runtime error");
    assert_eq!(run.errors, vec![err.to_string()]);
    err.to_string()
}
