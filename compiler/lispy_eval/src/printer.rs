//! Text rendering of values.

use crate::Value;

/// Render a value: integers in decimal, floats in fixed-point with six
/// fractional digits, errors as their message sentence.
pub fn render(v: Value) -> String {
    match v {
        Value::Int(n) => n.to_string(),
        Value::Float(n) => format!("{n:.6}"),
        Value::Error(kind) => kind.message().to_string(),
    }
}

/// The line written for one evaluated input: a leading space, the rendered
/// value, and a newline.
pub fn render_line(v: Value) -> String {
    format!(" {}\n", render(v))
}
