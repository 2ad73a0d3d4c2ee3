//! Function call evaluation.

use lox_ir::Token;
use tracing::debug;

use super::{ControlFlow, Interpreter};
use crate::errors::{arity_mismatch, not_callable, stack_overflow, EvalError, EvalResult};
use crate::value::{Callable, UserFunction, Value};

impl Interpreter {
    /// Call `callee` with already-evaluated arguments.
    ///
    /// Errors are reported at the line of the call's closing `)`.
    pub(super) fn call(&mut self, callee: &Value, args: Vec<Value>, paren: &Token) -> EvalResult {
        let Value::Callable(callable) = callee else {
            return Err(not_callable(callee, paren.line));
        };

        if args.len() != callable.arity() {
            return Err(arity_mismatch(callable.arity(), args.len(), paren.line));
        }

        match callable {
            Callable::Native(native) => {
                (native.func)(&args).map_err(|kind| EvalError::new(kind, paren.line))
            }
            Callable::User(function) => self.call_function(function, args, paren.line),
        }
    }

    #[tracing::instrument(level = "debug", skip_all, fields(name = %function.decl.name.lexeme))]
    fn call_function(
        &mut self,
        function: &UserFunction,
        args: Vec<Value>,
        line: u32,
    ) -> EvalResult {
        if self.call_depth >= self.max_call_depth {
            debug!(depth = self.call_depth, "call depth limit reached");
            return Err(stack_overflow(self.max_call_depth, line));
        }

        let env = function.closure.child();
        for (param, arg) in function.decl.params.iter().zip(args) {
            env.define(&param.lexeme, Some(arg));
        }

        self.call_depth += 1;
        let result = self.execute_block(&function.decl.body, &env);
        self.call_depth -= 1;

        match result? {
            ControlFlow::Normal => Ok(Value::Nil),
            ControlFlow::Return { value, .. } => Ok(value),
            ControlFlow::Break(signal) => Err(signal.escape_error("break")),
            ControlFlow::Continue(signal) => Err(signal.escape_error("continue")),
        }
    }
}
