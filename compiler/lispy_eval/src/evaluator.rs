//! Recursive evaluation of a parse tree.
//!
//! An interior node's children are `Open Operator operand+ Close`. The first
//! operand seeds an accumulator and every following operand is folded into
//! it left to right with [`apply`]. Every operand is evaluated, even after
//! the accumulator has become an error.

use lispy_ir::{NodeKind, ParseNode};
use lispy_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use crate::{apply, negate, ErrorKind, Value};

/// Evaluate a borrowed parse tree to a single value.
pub fn evaluate(node: &ParseNode) -> Value {
    ensure_sufficient_stack(|| match node.kind {
        NodeKind::Number => eval_number(&node.contents),
        NodeKind::Root | NodeKind::Expr => eval_expr(node),
        NodeKind::Operator | NodeKind::Open | NodeKind::Close => {
            debug!(kind = node.kind.name(), "node is not an expression");
            Value::Error(ErrorKind::UnknownOperator)
        }
    })
}

/// Parse a number literal. A `.` selects float parsing.
fn eval_number(text: &str) -> Value {
    let parsed = if text.contains('.') {
        text.parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(Value::Float)
    } else {
        text.parse::<i64>().ok().map(Value::Int)
    };
    parsed.unwrap_or_else(|| {
        debug!(text, "malformed number literal");
        Value::Error(ErrorKind::MalformedNumber)
    })
}

fn eval_expr(node: &ParseNode) -> Value {
    let Some(op) = node
        .children
        .get(1)
        .filter(|child| child.kind == NodeKind::Operator)
    else {
        debug!(span = %node.span, "expression has no operator");
        return Value::Error(ErrorKind::UnknownOperator);
    };
    let op = op.contents.as_str();

    let mut operands = node
        .children
        .iter()
        .skip(2)
        .filter(|child| child.kind.is_expr())
        .peekable();

    let Some(first) = operands.next() else {
        debug!(op, span = %node.span, "expression has no operands");
        return Value::Error(ErrorKind::UnknownOperator);
    };
    let mut acc = evaluate(first);

    if op == "-" && operands.peek().is_none() {
        trace!(operand = acc.type_name(), "unary minus");
        return negate(acc);
    }

    for operand in operands {
        let rhs = evaluate(operand);
        let result = apply(acc, op, rhs);
        trace!(op, lhs = ?acc, rhs = ?rhs, result = ?result, "fold");
        acc = result;
    }
    acc
}
