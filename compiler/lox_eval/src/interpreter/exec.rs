//! Statement execution.

use std::rc::Rc;

use lox_ir::{Expr, Stmt, Token};
use lox_stack::ensure_sufficient_stack;

use super::{ControlFlow, ExecResult, Interpreter, Signal};
use crate::environment::Environment;
use crate::value::{Callable, UserFunction, Value};

fn label_name(label: Option<&Token>) -> Option<&str> {
    label.map(|token| token.lexeme.as_str())
}

impl Interpreter {
    /// Execute one statement in `env`.
    pub fn execute(&mut self, stmt: &Stmt, env: &Environment) -> ExecResult {
        ensure_sufficient_stack(|| self.execute_inner(stmt, env))
    }

    fn execute_inner(&mut self, stmt: &Stmt, env: &Environment) -> ExecResult {
        match stmt {
            Stmt::Expression(expr) => {
                self.evaluate(expr, env)?;
                Ok(ControlFlow::Normal)
            }
            Stmt::Print(expr) => {
                let value = self.evaluate(expr, env)?;
                self.reporter.print(&value.to_string());
                Ok(ControlFlow::Normal)
            }
            Stmt::Var { name, initializer } => {
                let value = initializer
                    .as_ref()
                    .map(|init| self.evaluate(init, env))
                    .transpose()?;
                env.define(&name.lexeme, value);
                Ok(ControlFlow::Normal)
            }
            Stmt::Block(statements) => self.execute_block(statements, &env.child()),
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.evaluate(condition, env)?.is_truthy() {
                    self.execute(then_branch, env)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch, env)
                } else {
                    Ok(ControlFlow::Normal)
                }
            }
            Stmt::While { condition, body } => self.execute_while(condition, body, env),
            Stmt::Break { keyword, label } => Ok(ControlFlow::Break(Signal {
                label: label.as_ref().map(|l| l.lexeme.clone()),
                line: keyword.line,
            })),
            Stmt::Continue { keyword, label } => Ok(ControlFlow::Continue(Signal {
                label: label.as_ref().map(|l| l.lexeme.clone()),
                line: keyword.line,
            })),
            Stmt::Label { label, body } => match self.execute(body, env)? {
                ControlFlow::Break(signal) if signal.targets(Some(label.lexeme.as_str())) => {
                    Ok(ControlFlow::Normal)
                }
                flow => Ok(flow),
            },
            Stmt::ContinuePoint { label, body } => match self.execute(body, env)? {
                ControlFlow::Continue(signal)
                    if signal.label.is_none() || signal.targets(label_name(label.as_ref())) =>
                {
                    Ok(ControlFlow::Normal)
                }
                flow => Ok(flow),
            },
            Stmt::Function(decl) => {
                let function = UserFunction {
                    decl: Rc::clone(decl),
                    closure: env.clone(),
                };
                let value = Value::Callable(Callable::User(Rc::new(function)));
                env.define(&decl.name.lexeme, Some(value));
                Ok(ControlFlow::Normal)
            }
            Stmt::Return { keyword, value } => {
                let value = self.evaluate(value, env)?;
                Ok(ControlFlow::Return {
                    value,
                    line: keyword.line,
                })
            }
        }
    }

    /// Run `statements` in `env`, stopping at the first non-`Normal` flow.
    pub(crate) fn execute_block(&mut self, statements: &[Stmt], env: &Environment) -> ExecResult {
        for stmt in statements {
            match self.execute(stmt, env)? {
                ControlFlow::Normal => {}
                flow => return Ok(flow),
            }
        }
        Ok(ControlFlow::Normal)
    }

    /// An unlabeled `break` ends the loop; any other signal leaves it.
    fn execute_while(
        &mut self,
        condition: &Expr,
        body: &Stmt,
        env: &Environment,
    ) -> ExecResult {
        while self.evaluate(condition, env)?.is_truthy() {
            match self.execute(body, env)? {
                ControlFlow::Normal => {}
                ControlFlow::Break(signal) if signal.label.is_none() => break,
                flow => return Ok(flow),
            }
        }
        Ok(ControlFlow::Normal)
    }
}
