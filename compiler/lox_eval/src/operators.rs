//! Unary and binary operator semantics.
//!
//! Direct enum dispatch over the operator and operand variants. `line` is
//! the operator token's line, used for any error.

use std::rc::Rc;

use lox_ir::{BinaryOp, UnaryOp};

use crate::errors::{
    division_by_zero, invalid_addition, operand_not_number, operands_not_numbers, EvalResult,
};
use crate::value::Value;

/// Evaluate a prefix operator.
pub fn evaluate_unary(op: UnaryOp, operand: &Value, line: u32) -> EvalResult {
    match op {
        UnaryOp::Not => Ok(Value::Bool(!operand.is_truthy())),
        UnaryOp::Negate => match operand {
            Value::Number(n) => Ok(Value::Number(-n)),
            other => Err(operand_not_number(op, other, line)),
        },
    }
}

/// Evaluate an arithmetic, comparison or equality operator.
pub fn evaluate_binary(left: &Value, op: BinaryOp, right: &Value, line: u32) -> EvalResult {
    match op {
        BinaryOp::Equal => Ok(Value::Bool(left == right)),
        BinaryOp::NotEqual => Ok(Value::Bool(left != right)),
        BinaryOp::Add => add(left, right, line),
        _ => {
            let (Value::Number(a), Value::Number(b)) = (left, right) else {
                return Err(operands_not_numbers(op, left, right, line));
            };
            numeric(*a, op, *b, line)
        }
    }
}

/// `+` sums numbers; with a string on either side it concatenates the
/// printed form of both operands.
fn add(left: &Value, right: &Value, line: u32) -> EvalResult {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::Str(_), _) | (_, Value::Str(_)) => {
            Ok(Value::Str(Rc::from(format!("{left}{right}"))))
        }
        _ => Err(invalid_addition(left, right, line)),
    }
}

#[allow(clippy::float_cmp, reason = "division checks for exact zero")]
fn numeric(a: f64, op: BinaryOp, b: f64, line: u32) -> EvalResult {
    let value = match op {
        BinaryOp::Subtract => Value::Number(a - b),
        BinaryOp::Multiply => Value::Number(a * b),
        BinaryOp::Divide => {
            if b == 0.0 {
                return Err(division_by_zero(line));
            }
            Value::Number(a / b)
        }
        BinaryOp::Greater => Value::Bool(a > b),
        BinaryOp::GreaterEqual => Value::Bool(a >= b),
        BinaryOp::Less => Value::Bool(a < b),
        BinaryOp::LessEqual => Value::Bool(a <= b),
        BinaryOp::Add => Value::Number(a + b),
        BinaryOp::Equal => Value::Bool(a == b),
        BinaryOp::NotEqual => Value::Bool(a != b),
    };
    Ok(value)
}
