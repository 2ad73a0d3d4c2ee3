//! Runtime errors and their constructors.
//!
//! Every runtime error is built here, so message wording lives in one place.
//! Each carries the source line of the token that caused it.

use lox_diagnostic::Diagnostic;
use lox_ir::{BinaryOp, Token, UnaryOp};

use crate::environment::LookupError;
use crate::value::Value;

pub type EvalResult<T = Value> = Result<T, EvalError>;

/// What went wrong.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    #[error("Undefined variable '{name}'.")]
    UndefinedVariable { name: String },

    #[error("Uninitialized variable '{name}'.")]
    UninitializedVariable { name: String },

    /// An operator applied to operands of the wrong kind.
    #[error("{subject} of '{op}' must be {expected}, got {got}.")]
    TypeError {
        subject: &'static str,
        op: &'static str,
        expected: &'static str,
        got: String,
    },

    #[error("Divide by zero error.")]
    DivideByZero,

    #[error("Can only call functions, got {type_name}.")]
    NotCallable { type_name: &'static str },

    #[error("Expected {expected} arguments but got {got}.")]
    ArityMismatch { expected: usize, got: usize },

    #[error("Stack overflow: call depth exceeded {limit}.")]
    StackOverflow { limit: usize },

    /// `break`/`continue`/`return` reached a boundary that cannot consume it.
    #[error("'{signal}' escaped its enclosing statement.")]
    EscapedSignal { signal: String },
}

/// A runtime error at a source line.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}\n[line {line}]")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub line: u32,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind, line: u32) -> Self {
        EvalError { kind, line }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::runtime(self.line, self.kind.to_string())
    }
}

// Variables

#[cold]
pub fn undefined_variable(name: &Token) -> EvalError {
    EvalError::new(
        EvalErrorKind::UndefinedVariable {
            name: name.lexeme.clone(),
        },
        name.line,
    )
}

#[cold]
pub fn uninitialized_variable(name: &Token) -> EvalError {
    EvalError::new(
        EvalErrorKind::UninitializedVariable {
            name: name.lexeme.clone(),
        },
        name.line,
    )
}

/// Map an environment lookup failure to the error for `name`.
#[cold]
pub fn lookup_failed(error: LookupError, name: &Token) -> EvalError {
    match error {
        LookupError::Undefined => undefined_variable(name),
        LookupError::Uninitialized => uninitialized_variable(name),
    }
}

// Operators

#[cold]
pub fn operand_not_number(op: UnaryOp, operand: &Value, line: u32) -> EvalError {
    EvalError::new(
        EvalErrorKind::TypeError {
            subject: "Operand",
            op: op.as_symbol(),
            expected: "a number",
            got: operand.type_name().to_string(),
        },
        line,
    )
}

#[cold]
pub fn operands_not_numbers(op: BinaryOp, left: &Value, right: &Value, line: u32) -> EvalError {
    EvalError::new(
        EvalErrorKind::TypeError {
            subject: "Operands",
            op: op.as_symbol(),
            expected: "numbers",
            got: format!("{} and {}", left.type_name(), right.type_name()),
        },
        line,
    )
}

#[cold]
pub fn invalid_addition(left: &Value, right: &Value, line: u32) -> EvalError {
    EvalError::new(
        EvalErrorKind::TypeError {
            subject: "Operands",
            op: "+",
            expected: "two numbers or include a string",
            got: format!("{} and {}", left.type_name(), right.type_name()),
        },
        line,
    )
}

#[cold]
pub fn division_by_zero(line: u32) -> EvalError {
    EvalError::new(EvalErrorKind::DivideByZero, line)
}

// Calls

#[cold]
pub fn not_callable(callee: &Value, line: u32) -> EvalError {
    EvalError::new(
        EvalErrorKind::NotCallable {
            type_name: callee.type_name(),
        },
        line,
    )
}

#[cold]
pub fn arity_mismatch(expected: usize, got: usize, line: u32) -> EvalError {
    EvalError::new(EvalErrorKind::ArityMismatch { expected, got }, line)
}

#[cold]
pub fn stack_overflow(limit: usize, line: u32) -> EvalError {
    EvalError::new(EvalErrorKind::StackOverflow { limit }, line)
}

// Control flow

#[cold]
pub fn escaped_signal(signal: impl Into<String>, line: u32) -> EvalError {
    EvalError::new(
        EvalErrorKind::EscapedSignal {
            signal: signal.into(),
        },
        line,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_like_a_runtime_diagnostic() {
        let err = division_by_zero(3);
        assert_eq!(err.to_string(), "Divide by zero error.\n[line 3]");
        assert_eq!(err.to_diagnostic().to_string(), err.to_string());
    }

    #[test]
    fn type_errors_name_operator_and_operands() {
        let err = operands_not_numbers(BinaryOp::Less, &Value::Number(1.0), &Value::string("a"), 1);
        assert_eq!(
            err.kind.to_string(),
            "Operands of '<' must be numbers, got number and string."
        );

        let err = operand_not_number(UnaryOp::Negate, &Value::Nil, 1);
        assert_eq!(
            err.kind.to_string(),
            "Operand of '-' must be a number, got nil."
        );
    }

    #[test]
    fn lookup_failures_keep_the_name_line() {
        let name = Token::ident("x", 7);
        let err = lookup_failed(LookupError::Uninitialized, &name);
        assert_eq!(err.line, 7);
        assert_eq!(err.kind.to_string(), "Uninitialized variable 'x'.");
    }
}
