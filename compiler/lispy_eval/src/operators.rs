//! Binary operator implementations.
//!
//! The operator set is fixed, so dispatch is a plain `match` on
//! [`BinaryOp`] per numeric domain. Operands are coerced one way only: if
//! either side is a float, both are treated as floats.
//!
//! Integer arithmetic wraps on overflow. Division and remainder check the
//! divisor before dividing, so a zero divisor is always an
//! `ErrorKind::DivisionByZero` value and never a panic.

use std::fmt;

use tracing::debug;

use crate::{ErrorKind, Value};

/// Operators understood by the evaluator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    Min,
    Max,
}

impl BinaryOp {
    /// Resolve an operator token. Unknown tokens return `None`.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Some(match symbol {
            "+" => BinaryOp::Add,
            "-" => BinaryOp::Sub,
            "*" => BinaryOp::Mul,
            "/" => BinaryOp::Div,
            "%" => BinaryOp::Mod,
            "^" => BinaryOp::Pow,
            "min" => BinaryOp::Min,
            "max" => BinaryOp::Max,
            _ => return None,
        })
    }

    pub const fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Pow => "^",
            BinaryOp::Min => "min",
            BinaryOp::Max => "max",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Apply the operator spelled `op` to `x` and `y`.
///
/// An error operand is returned unchanged, the left one first, before the
/// operator token is even looked at.
pub fn apply(x: Value, op: &str, y: Value) -> Value {
    if x.is_error() {
        return x;
    }
    if y.is_error() {
        return y;
    }
    match BinaryOp::from_symbol(op) {
        Some(op) => apply_op(x, op, y),
        None => {
            debug!(op, "unknown operator");
            Value::Error(ErrorKind::UnknownOperator)
        }
    }
}

/// Apply an already-resolved operator.
pub fn apply_op(x: Value, op: BinaryOp, y: Value) -> Value {
    match (x, y) {
        (Value::Error(_), _) => x,
        (_, Value::Error(_)) => y,
        (Value::Int(a), Value::Int(b)) => eval_int_binary(a, b, op),
        (Value::Int(a), Value::Float(b)) => eval_float_binary(widen(a), b, op),
        (Value::Float(a), Value::Int(b)) => eval_float_binary(a, widen(b), op),
        (Value::Float(a), Value::Float(b)) => eval_float_binary(a, b, op),
    }
}

/// Arithmetic negation, used for `-` with a single operand.
pub fn negate(v: Value) -> Value {
    match v {
        Value::Int(n) => Value::Int(n.wrapping_neg()),
        Value::Float(n) => Value::Float(-n),
        Value::Error(_) => v,
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "integers above 2^53 lose precision when mixed with floats"
)]
#[inline]
fn widen(n: i64) -> f64 {
    n as f64
}

/// Division-like operation with a zero guard ahead of the actual division.
#[inline]
fn checked_div<T>(is_zero: bool, op: impl FnOnce() -> T, wrap: fn(T) -> Value) -> Value {
    if is_zero {
        debug!("division by zero");
        Value::Error(ErrorKind::DivisionByZero)
    } else {
        wrap(op())
    }
}

fn eval_int_binary(a: i64, b: i64, op: BinaryOp) -> Value {
    match op {
        BinaryOp::Add => Value::Int(a.wrapping_add(b)),
        BinaryOp::Sub => Value::Int(a.wrapping_sub(b)),
        BinaryOp::Mul => Value::Int(a.wrapping_mul(b)),
        // Truncates toward zero; `i64::MIN / -1` wraps to `i64::MIN`.
        BinaryOp::Div => checked_div(b == 0, || a.wrapping_div(b), Value::Int),
        BinaryOp::Mod => checked_div(b == 0, || a.wrapping_rem(b), Value::Int),
        BinaryOp::Pow => Value::Int(int_pow(a, b)),
        BinaryOp::Min => Value::Int(a.min(b)),
        BinaryOp::Max => Value::Int(a.max(b)),
    }
}

fn eval_float_binary(a: f64, b: f64, op: BinaryOp) -> Value {
    match op {
        BinaryOp::Add => Value::Float(a + b),
        BinaryOp::Sub => Value::Float(a - b),
        BinaryOp::Mul => Value::Float(a * b),
        BinaryOp::Div => checked_div(b == 0.0, || a / b, Value::Float),
        BinaryOp::Pow => Value::Float(a.powf(b)),
        // Remainder and min/max are only defined over integers.
        BinaryOp::Mod | BinaryOp::Min | BinaryOp::Max => {
            debug!(op = op.as_symbol(), "operator not defined for floats");
            Value::Error(ErrorKind::UnknownOperator)
        }
    }
}

/// Integer power through `f64::powf`.
///
/// The cast back saturates at the `i64` bounds and maps NaN to zero, so large
/// exponents lose precision instead of failing. Negative exponents truncate
/// toward zero (`2 ^ -1` is `0`).
#[expect(
    clippy::cast_possible_truncation,
    reason = "saturating float-to-int cast is the intended integer power result"
)]
fn int_pow(a: i64, b: i64) -> i64 {
    widen(a).powf(widen(b)) as i64
}
