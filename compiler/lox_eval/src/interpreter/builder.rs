//! `InterpreterBuilder` for creating configured interpreters.

use lox_diagnostic::{console_reporter, SharedReporter};

use super::Interpreter;
use crate::environment::Environment;
use crate::natives;
use crate::value::NativeFn;

/// Calls nested deeper than this fail with a stack overflow error.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 4096;

/// Builder for [`Interpreter`].
///
/// Defaults: console reporter, the standard natives, and
/// [`DEFAULT_MAX_CALL_DEPTH`].
pub struct InterpreterBuilder {
    reporter: Option<SharedReporter>,
    max_call_depth: usize,
    natives: Vec<(String, usize, NativeFn)>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self {
            reporter: None,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            natives: Vec::new(),
        }
    }

    /// Where `print` output and runtime errors go.
    #[must_use]
    pub fn reporter(mut self, reporter: SharedReporter) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// Limit on nested user function calls.
    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    /// Register an extra native function in the globals.
    ///
    /// A native with the same name as a standard one replaces it.
    #[must_use]
    pub fn native(mut self, name: &str, arity: usize, func: NativeFn) -> Self {
        self.natives.push((name.to_string(), arity, func));
        self
    }

    pub fn build(self) -> Interpreter {
        let globals = Environment::new();
        for (name, value) in natives::standard() {
            globals.define(name, Some(value));
        }
        for (name, arity, func) in self.natives {
            globals.define(&name, Some(natives::native(&name, arity, func)));
        }

        Interpreter {
            globals,
            reporter: self.reporter.unwrap_or_else(console_reporter),
            max_call_depth: self.max_call_depth,
            call_depth: 0,
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
