//! Recursive descent parser for Lox.
//!
//! Turns the scanner's token list into statements. Syntax errors are reported
//! through the [`Reporter`] as they are found; the parser synchronizes to the
//! next statement boundary and keeps going, so every error in the input is
//! reported in one pass. If any were reported the statements must not be run.

mod context;
mod cursor;
mod error;
mod grammar;
mod recovery;

pub use context::{LabelScope, ParseContext};
pub use cursor::Cursor;
pub use recovery::{synchronize, TokenSet, STATEMENT_START};

use error::{ParseError, ParseResult};
use lox_diagnostic::{Diagnostic, Reporter};
use lox_ir::{Stmt, Token, TokenKind};
use tracing::debug;

/// Parser output.
#[derive(Debug, Default)]
pub struct ParseOutput {
    pub statements: Vec<Stmt>,
    /// Number of syntax errors reported while parsing.
    pub error_count: usize,
}

impl ParseOutput {
    #[inline]
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }
}

/// Parse a token list.
///
/// With `expression_only` set (the REPL), input that is exactly one
/// expression becomes `[Print(expr)]`; anything else is parsed as statements.
pub fn parse(tokens: &[Token], expression_only: bool, reporter: &dyn Reporter) -> ParseOutput {
    let mut parser = Parser::new(tokens, reporter);
    if expression_only {
        if let Some(stmt) = parser.try_expression() {
            return ParseOutput {
                statements: vec![stmt],
                error_count: 0,
            };
        }
    }
    parser.parse_program()
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    reporter: &'a dyn Reporter,
    context: ParseContext,
    labels: LabelScope,
    /// Label read by `:name` that the next `for`/`while` takes as its
    /// continue target.
    pending_loop_label: Option<Token>,
    /// Cleared while trying the expression-only parse.
    report_errors: bool,
    error_count: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token], reporter: &'a dyn Reporter) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            reporter,
            context: ParseContext::NONE,
            labels: LabelScope::default(),
            pending_loop_label: None,
            report_errors: true,
            error_count: 0,
        }
    }

    /// Parse declarations until `Eof`.
    pub fn parse_program(mut self) -> ParseOutput {
        let mut statements = Vec::new();
        while !self.is_at_end() {
            if let Some(stmt) = self.declaration() {
                statements.push(stmt);
            }
        }
        debug!(
            statements = statements.len(),
            errors = self.error_count,
            "parsed program"
        );
        ParseOutput {
            statements,
            error_count: self.error_count,
        }
    }

    /// Try the whole input as a single expression with reporting turned off.
    ///
    /// On failure the cursor is rewound so statement parsing starts clean.
    fn try_expression(&mut self) -> Option<Stmt> {
        self.report_errors = false;
        let result = self.expression();
        self.report_errors = true;

        let clean = self.error_count == 0 && self.is_at_end();
        match result {
            Ok(expr) if clean => Some(Stmt::Print(expr)),
            _ => {
                debug!("not a bare expression, parsing as statements");
                self.cursor.set_position(0);
                self.error_count = 0;
                None
            }
        }
    }

    // Cursor delegation

    #[inline]
    fn current(&self) -> &'a Token {
        self.cursor.current()
    }

    #[inline]
    fn previous(&self) -> &'a Token {
        self.cursor.previous()
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    #[inline]
    fn check(&self, kind: TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn advance(&mut self) -> &'a Token {
        self.cursor.advance()
    }

    #[inline]
    fn eat(&mut self, kind: TokenKind) -> bool {
        self.cursor.eat(kind)
    }

    #[inline]
    fn eat_any(&mut self, kinds: &[TokenKind]) -> Option<&'a Token> {
        self.cursor.eat_any(kinds)
    }

    /// Consume a token of `kind` or fail with `message` at the current token.
    fn expect(&mut self, kind: TokenKind, message: &str) -> ParseResult<&'a Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error_at(self.current(), message))
        }
    }

    // Error reporting

    /// Report an error without unwinding.
    fn report(&mut self, token: &Token, message: &str) {
        self.error_count += 1;
        if self.report_errors {
            self.reporter.emit(Diagnostic::syntax_at(token, message));
        }
    }

    /// Report an error and return the marker to unwind with.
    fn error_at(&mut self, token: &Token, message: &str) -> ParseError {
        self.report(token, message);
        ParseError
    }

    fn synchronize(&mut self) {
        let from = self.cursor.position();
        synchronize(&mut self.cursor);
        debug!(from, to = self.cursor.position(), "synchronized");
    }

    // Context

    /// Run `f` with extra context flags, restoring the old flags afterwards.
    fn with_context<T>(&mut self, flags: ParseContext, f: impl FnOnce(&mut Self) -> T) -> T {
        let saved = self.context;
        self.context = saved.with(flags);
        let result = f(self);
        self.context = saved;
        result
    }

    /// Run `f` for a function body: only `IN_FUNCTION` set, no labels visible.
    fn in_function_body<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let saved_context = self.context;
        let saved_labels = std::mem::take(&mut self.labels);
        let saved_pending = self.pending_loop_label.take();
        self.context = ParseContext::IN_FUNCTION;

        let result = f(self);

        self.context = saved_context;
        self.labels = saved_labels;
        self.pending_loop_label = saved_pending;
        result
    }

    /// Run `f` with `name` pushed on the label stacks.
    fn with_label<T>(&mut self, name: &str, is_loop: bool, f: impl FnOnce(&mut Self) -> T) -> T {
        self.labels.push(name, is_loop);
        let result = f(self);
        self.labels.pop(is_loop);
        result
    }
}

#[cfg(test)]
mod tests;
