//! Tree-walking evaluator for Lox.
//!
//! # Architecture
//!
//! - [`Value`]: runtime values; functions are [`Callable`]s sharing their
//!   declaration and captured [`Environment`]
//! - [`Environment`]: a chain of scopes, one per block or call
//! - [`Interpreter`]: executes statements; `break`, `continue` and `return`
//!   travel as [`ControlFlow`] values, errors as [`EvalError`]
//! - [`errors`]: constructors for every runtime error
//!
//! Runtime errors are reported through the session's
//! [`Reporter`](lox_diagnostic::Reporter) and abort the rest of the run.

mod environment;
pub mod errors;
pub mod interpreter;
mod natives;
mod operators;
mod value;

pub use environment::{Environment, LocalScope, LookupError, Scope};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{
    ControlFlow, ExecResult, Interpreter, InterpreterBuilder, Signal, DEFAULT_MAX_CALL_DEPTH,
};
pub use operators::{evaluate_binary, evaluate_unary};
pub use value::{Callable, NativeFn, NativeFunction, UserFunction, Value};

#[cfg(test)]
mod tests;
