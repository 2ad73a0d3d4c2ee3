//! The interpreter: statement execution and expression evaluation.
//!
//! Non-local exits are ordinary values. Executing a statement yields a
//! [`ControlFlow`]; loops, labels and continue points consume the signals
//! addressed to them and pass everything else outward. Only the call
//! machinery consumes `Return`.

mod builder;
mod exec;
mod function_call;

pub use builder::{InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};

use lox_diagnostic::SharedReporter;
use lox_ir::{Expr, LogicalOp, Stmt};
use lox_stack::ensure_sufficient_stack;
use tracing::error;

use crate::environment::Environment;
use crate::errors::{escaped_signal, lookup_failed, EvalError, EvalResult};
use crate::operators::{evaluate_binary, evaluate_unary};
use crate::value::Value;

/// A `break` or `continue` in flight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signal {
    pub label: Option<String>,
    /// Line of the `break`/`continue` keyword.
    pub line: u32,
}

impl Signal {
    /// Whether this signal is addressed to `label` (`None` for unlabeled).
    #[inline]
    pub fn targets(&self, label: Option<&str>) -> bool {
        self.label.as_deref() == label
    }

    /// The error for this signal reaching a boundary it cannot cross.
    pub(crate) fn escape_error(&self, keyword: &str) -> EvalError {
        error!(keyword, label = ?self.label, line = self.line, "control signal escaped");
        let text = match &self.label {
            Some(label) => format!("{keyword} {label}"),
            None => keyword.to_string(),
        };
        escaped_signal(text, self.line)
    }
}

/// How a statement finished.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlFlow {
    Normal,
    Break(Signal),
    Continue(Signal),
    Return { value: Value, line: u32 },
}

pub type ExecResult = Result<ControlFlow, EvalError>;

/// Tree-walking interpreter.
///
/// Owns the global environment and reports output and runtime errors
/// through its reporter.
pub struct Interpreter {
    globals: Environment,
    reporter: SharedReporter,
    max_call_depth: usize,
    call_depth: usize,
}

impl Interpreter {
    /// An interpreter with the standard natives and a console reporter.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    pub fn globals(&self) -> &Environment {
        &self.globals
    }

    pub fn reporter(&self) -> &SharedReporter {
        &self.reporter
    }

    /// Run a program in a fresh child of the globals.
    ///
    /// A runtime error is reported and stops the run; it is also returned.
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), EvalError> {
        let env = self.globals.child();
        self.execute_in(statements, &env)
    }

    /// Run statements directly in `env`, keeping their definitions there.
    ///
    /// This is how a REPL session accumulates state across lines.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = statements.len()))]
    pub fn execute_in(&mut self, statements: &[Stmt], env: &Environment) -> Result<(), EvalError> {
        self.call_depth = 0;
        let result = self.run_top_level(statements, env);
        if let Err(err) = &result {
            self.reporter.emit(err.to_diagnostic());
        }
        result
    }

    fn run_top_level(&mut self, statements: &[Stmt], env: &Environment) -> Result<(), EvalError> {
        for stmt in statements {
            match self.execute(stmt, env)? {
                ControlFlow::Normal => {}
                ControlFlow::Break(signal) => return Err(signal.escape_error("break")),
                ControlFlow::Continue(signal) => return Err(signal.escape_error("continue")),
                ControlFlow::Return { line, .. } => {
                    error!(line, "return escaped to top level");
                    return Err(escaped_signal("return", line));
                }
            }
        }
        Ok(())
    }

    /// Evaluate an expression in `env`.
    pub fn evaluate(&mut self, expr: &Expr, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| self.evaluate_inner(expr, env))
    }

    fn evaluate_inner(&mut self, expr: &Expr, env: &Environment) -> EvalResult {
        match expr {
            Expr::Literal(literal) => Ok(Value::from(literal)),
            Expr::Grouping(inner) => self.evaluate(inner, env),
            Expr::Unary { op, line, expr } => {
                let operand = self.evaluate(expr, env)?;
                evaluate_unary(*op, &operand, *line)
            }
            Expr::Binary {
                left,
                op,
                line,
                right,
            } => {
                let left = self.evaluate(left, env)?;
                let right = self.evaluate(right, env)?;
                evaluate_binary(&left, *op, &right, *line)
            }
            Expr::Logical { left, op, right } => {
                let left = self.evaluate(left, env)?;
                let short_circuit = match op {
                    LogicalOp::Or => left.is_truthy(),
                    LogicalOp::And => !left.is_truthy(),
                };
                if short_circuit {
                    Ok(left)
                } else {
                    self.evaluate(right, env)
                }
            }
            Expr::Variable(name) => env.get(&name.lexeme).map_err(|e| lookup_failed(e, name)),
            Expr::Assign { name, value } => {
                let value = self.evaluate(value, env)?;
                env.assign(&name.lexeme, value.clone())
                    .map_err(|e| lookup_failed(e, name))?;
                Ok(value)
            }
            Expr::Call {
                callee,
                args,
                paren,
            } => {
                let callee = self.evaluate(callee, env)?;
                let args = args
                    .iter()
                    .map(|arg| self.evaluate(arg, env))
                    .collect::<EvalResult<Vec<_>>>()?;
                self.call(&callee, args, paren)
            }
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
