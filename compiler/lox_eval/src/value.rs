//! Runtime values.

use std::fmt;
use std::rc::Rc;

use lox_ir::{FunctionDecl, LiteralValue};

use crate::environment::Environment;
use crate::errors::EvalErrorKind;

/// A Lox value.
///
/// Cheap to clone: strings and functions are reference counted.
#[derive(Clone)]
pub enum Value {
    Nil,
    Bool(bool),
    Number(f64),
    Str(Rc<str>),
    Callable(Callable),
}

impl Value {
    /// `nil` and `false` are falsy; everything else is truthy.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }

    /// Name of the value's kind, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Callable(_) => "function",
        }
    }

    #[inline]
    pub fn string(s: &str) -> Self {
        Value::Str(Rc::from(s))
    }
}

/// Strict equality: no coercion, `NaN != NaN`, functions by identity.
impl PartialEq for Value {
    #[allow(clippy::float_cmp, reason = "Lox numbers compare with IEEE equality")]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Callable(a), Value::Callable(b)) => a.same(b),
            _ => false,
        }
    }
}

/// Print formatting.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::Callable(c) => write!(f, "{c}"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{s:?}"),
            other => write!(f, "{other}"),
        }
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Nil => Value::Nil,
            LiteralValue::Bool(b) => Value::Bool(*b),
            LiteralValue::Number(n) => Value::Number(*n),
            LiteralValue::Str(s) => Value::Str(Rc::clone(s)),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// Native function body. Errors are stamped with the call site's line.
pub type NativeFn = fn(&[Value]) -> Result<Value, EvalErrorKind>;

/// A host function exposed to Lox code.
pub struct NativeFunction {
    pub name: String,
    pub arity: usize,
    pub func: NativeFn,
}

/// A `fun` declaration closed over the environment it was declared in.
pub struct UserFunction {
    pub decl: Rc<FunctionDecl>,
    pub closure: Environment,
}

/// Anything that can be called.
#[derive(Clone)]
pub enum Callable {
    User(Rc<UserFunction>),
    Native(Rc<NativeFunction>),
}

impl Callable {
    pub fn name(&self) -> &str {
        match self {
            Callable::User(f) => &f.decl.name.lexeme,
            Callable::Native(f) => &f.name,
        }
    }

    pub fn arity(&self) -> usize {
        match self {
            Callable::User(f) => f.decl.params.len(),
            Callable::Native(f) => f.arity,
        }
    }

    /// Identity comparison.
    pub fn same(&self, other: &Callable) -> bool {
        match (self, other) {
            (Callable::User(a), Callable::User(b)) => Rc::ptr_eq(a, b),
            (Callable::Native(a), Callable::Native(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Callable::User(func) => write!(f, "<fn {}>", func.decl.name.lexeme),
            Callable::Native(func) => write!(f, "<native fn {}>", func.name),
        }
    }
}
