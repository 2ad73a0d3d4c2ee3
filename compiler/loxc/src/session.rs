//! Running source text against an interpreter.

use lox_diagnostic::SharedReporter;
use lox_eval::{Environment, Interpreter, InterpreterBuilder};
use lox_ir::Stmt;
use tracing::debug;

use crate::error::RunStatus;

/// Scan and parse `source`, returning `None` if there were syntax errors.
fn front_end(source: &str, expression_only: bool, reporter: &SharedReporter) -> Option<Vec<Stmt>> {
    let tokens = lox_lexer::scan(source, &**reporter);
    let parsed = lox_parse::parse(&tokens, expression_only, &**reporter);
    if parsed.has_errors() || reporter.had_syntax_error() {
        debug!(errors = parsed.error_count, "not running: syntax errors");
        return None;
    }
    Some(parsed.statements)
}

/// Run a whole program with a fresh interpreter.
pub fn run_source(source: &str, reporter: SharedReporter) -> RunStatus {
    let Some(statements) = front_end(source, false, &reporter) else {
        return RunStatus::SyntaxError;
    };
    let mut interpreter = Interpreter::builder().reporter(reporter).build();
    match interpreter.interpret(&statements) {
        Ok(()) => RunStatus::Ok,
        Err(_) => RunStatus::RuntimeError,
    }
}

/// An interactive session: one interpreter and one frame that collects
/// every definition entered so far.
pub struct Session {
    interpreter: Interpreter,
    env: Environment,
    reporter: SharedReporter,
}

impl Session {
    pub fn new(reporter: SharedReporter) -> Self {
        Self::with_builder(Interpreter::builder(), reporter)
    }

    /// A session whose interpreter comes from `builder`. The reporter
    /// overrides any set on the builder.
    pub fn with_builder(builder: InterpreterBuilder, reporter: SharedReporter) -> Self {
        let interpreter = builder.reporter(reporter.clone()).build();
        let env = interpreter.globals().child();
        Self {
            interpreter,
            env,
            reporter,
        }
    }

    /// Run one line of input. A bare expression prints its value.
    ///
    /// Error flags are cleared first, so a failed line does not poison the
    /// next one.
    pub fn run_line(&mut self, line: &str) -> RunStatus {
        self.reporter.reset();
        let Some(statements) = front_end(line, true, &self.reporter) else {
            return RunStatus::SyntaxError;
        };
        match self.interpreter.execute_in(&statements, &self.env) {
            Ok(()) => RunStatus::Ok,
            Err(_) => RunStatus::RuntimeError,
        }
    }

    /// The frame holding this session's definitions.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn globals(&self) -> &Environment {
        self.interpreter.globals()
    }

    pub fn reporter(&self) -> &SharedReporter {
        &self.reporter
    }
}
