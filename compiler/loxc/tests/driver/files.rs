use pretty_assertions::assert_eq;

use loxc::{lex_file, parse_file, run_file, DriverError, RunStatus};

use crate::common::{buffer, path_of, source_file};

#[test]
fn run_prints_program_output() {
    let file = source_file("var greeting = \"hi\";\nprint greeting + \" there\";\nprint 1 + 2 * 3;\n");
    let reporter = buffer();
    let status = run_file(path_of(&file), reporter.clone()).unwrap();
    assert_eq!(status, RunStatus::Ok);
    assert_eq!(reporter.output_lines(), vec!["hi there", "7"]);
    assert!(reporter.messages().is_empty());
}

#[test]
fn syntax_errors_prevent_execution() {
    let file = source_file("print 1;\nprint ;\nvar = 2;\n");
    let reporter = buffer();
    let status = run_file(path_of(&file), reporter.clone()).unwrap();
    assert_eq!(status, RunStatus::SyntaxError);
    assert!(reporter.output_lines().is_empty());
    assert_eq!(
        reporter.messages(),
        vec![
            "[line 2] Error at ';': Expect expression.",
            "[line 3] Error at '=': Expect variable name.",
        ]
    );
}

#[test]
fn runtime_error_stops_the_program() {
    let file = source_file("print \"before\";\nprint nil - 1;\nprint \"after\";\n");
    let reporter = buffer();
    let status = run_file(path_of(&file), reporter.clone()).unwrap();
    assert_eq!(status, RunStatus::RuntimeError);
    assert_eq!(status.exit_code(), 70);
    assert_eq!(reporter.output_lines(), vec!["before"]);
    assert_eq!(
        reporter.messages(),
        vec!["Operands of '-' must be numbers, got nil and number.\n[line 2]"]
    );
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.lox");
    let err = run_file(path.to_str().unwrap(), buffer()).unwrap_err();
    assert!(matches!(err, DriverError::NotFound { .. }));
    assert_eq!(err.exit_code(), 74);
}

#[test]
fn lex_prints_tokens() {
    let file = source_file("print 1;");
    let reporter = buffer();
    let status = lex_file(path_of(&file), reporter.clone()).unwrap();
    assert_eq!(status, RunStatus::Ok);
    assert_eq!(
        reporter.output_lines(),
        vec!["Print @1", "Number(1) @1", "Semicolon @1", "Eof @1"]
    );
}

#[test]
fn parse_prints_sexpressions() {
    let file = source_file("print 1 + 2 * 3;\nvar x;");
    let reporter = buffer();
    let status = parse_file(path_of(&file), reporter.clone()).unwrap();
    assert_eq!(status, RunStatus::Ok);
    assert_eq!(
        reporter.output_lines(),
        vec!["(print (+ 1 (* 2 3)))", "(var x)"]
    );
}

#[test]
fn parse_reports_syntax_errors() {
    let file = source_file("print (1;");
    let reporter = buffer();
    let status = parse_file(path_of(&file), reporter.clone()).unwrap();
    assert_eq!(status, RunStatus::SyntaxError);
    assert!(reporter.output_lines().is_empty());
    assert_eq!(
        reporter.messages(),
        vec!["[line 1] Error at ';': Expect ')' after expression."]
    );
}
