#![deny(clippy::arithmetic_side_effects)]
//! Lispy Eval - evaluator for prefix arithmetic expressions.
//!
//! # Architecture
//!
//! - `Value`: tagged result of every evaluation step (`Int`, `Float`, `Error`)
//! - `apply` / `apply_op`: binary operator semantics and numeric coercion
//! - `evaluate`: recursive walk over a borrowed [`lispy_ir::ParseNode`]
//! - `render`: text form of a `Value`
//!
//! Errors are values. Division by zero, unknown operators and malformed
//! literals produce `Value::Error`, which every later step passes through
//! unchanged, so an error anywhere in a sub-expression becomes the result of
//! the whole expression. Nothing in this crate panics or returns `Result`.

mod evaluator;
mod operators;
mod printer;
mod value;

pub use evaluator::evaluate;
pub use operators::{apply, apply_op, negate, BinaryOp};
pub use printer::{render, render_line};
pub use value::{ErrorKind, Value};

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    clippy::arithmetic_side_effects,
    reason = "Tests use unwrap and unchecked arithmetic for brevity"
)]
mod tests;
