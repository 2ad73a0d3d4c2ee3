//! Debug commands: `lex` and `parse` for inspecting the front end.

use lox_diagnostic::{Reporter, SharedReporter};
use lox_ir::printer::print_stmts;

use super::read_file;
use crate::error::{DriverError, RunStatus};

/// One line per token, `KIND(lexeme) @line`.
pub fn lex_source(source: &str, reporter: &dyn Reporter) -> Vec<String> {
    lox_lexer::scan(source, reporter)
        .iter()
        .map(|token| format!("{token:?}"))
        .collect()
}

/// The parsed program as s-expressions, or `None` on syntax errors.
pub fn parse_source(source: &str, reporter: &dyn Reporter) -> Option<String> {
    let tokens = lox_lexer::scan(source, reporter);
    let parsed = lox_parse::parse(&tokens, false, reporter);
    if parsed.has_errors() || reporter.had_syntax_error() {
        return None;
    }
    Some(print_stmts(&parsed.statements))
}

/// Lex a file and print its token stream.
pub fn lex_file(path: &str, reporter: SharedReporter) -> Result<RunStatus, DriverError> {
    let source = read_file(path)?;
    for line in lex_source(&source, &*reporter) {
        reporter.print(&line);
    }
    Ok(if reporter.had_syntax_error() {
        RunStatus::SyntaxError
    } else {
        RunStatus::Ok
    })
}

/// Parse a file and print the program as s-expressions.
pub fn parse_file(path: &str, reporter: SharedReporter) -> Result<RunStatus, DriverError> {
    let source = read_file(path)?;
    match parse_source(&source, &*reporter) {
        Some(tree) => {
            for line in tree.lines() {
                reporter.print(line);
            }
            Ok(RunStatus::Ok)
        }
        None => Ok(RunStatus::SyntaxError),
    }
}
