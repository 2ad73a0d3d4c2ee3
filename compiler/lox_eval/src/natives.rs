//! Built-in functions registered in every interpreter's globals.

use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::errors::EvalErrorKind;
use crate::value::{Callable, NativeFn, NativeFunction, Value};

/// `clock()`: seconds since the Unix epoch.
fn clock(_args: &[Value]) -> Result<Value, EvalErrorKind> {
    let seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0.0, |elapsed| elapsed.as_secs_f64());
    Ok(Value::Number(seconds))
}

pub(crate) fn native(name: &str, arity: usize, func: NativeFn) -> Value {
    Value::Callable(Callable::Native(Rc::new(NativeFunction {
        name: name.to_string(),
        arity,
        func,
    })))
}

/// The standard natives, as `(name, value)` pairs.
pub(crate) fn standard() -> Vec<(&'static str, Value)> {
    vec![("clock", native("clock", 0, clock))]
}
