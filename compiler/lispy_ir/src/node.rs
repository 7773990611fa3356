//! Parse tree nodes.
//!
//! Interior nodes (`Root`, `Expr`) always carry their children in the layout
//!
//! ```text
//! Open  Operator  operand1  operand2 ... operandN  Close
//! ```
//!
//! with `N >= 1`. For a parenthesized expression `Open`/`Close` are the
//! parentheses; for a root in polish form (`+ 1 2`) they are zero-width
//! anchors at the start and end of the input. Operands are either `Number`
//! leaves or nested `Expr` nodes.

use std::fmt;

use crate::Span;

/// Grammar rule a [`ParseNode`] matched.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Whole input line.
    Root,
    /// Parenthesized sub-expression.
    Expr,
    /// Number literal (`-?[0-9]+(\.[0-9]+)?`).
    Number,
    /// Operator symbol in second position.
    Operator,
    /// `(` or the start-of-input anchor.
    Open,
    /// `)` or the end-of-input anchor.
    Close,
}

impl NodeKind {
    /// Whether a node of this kind is an operand.
    ///
    /// A number literal standing in operand position is an expression in
    /// its own right, so both `Number` and `Expr` qualify.
    #[inline]
    pub const fn is_expr(self) -> bool {
        matches!(self, NodeKind::Expr | NodeKind::Number)
    }

    pub const fn name(self) -> &'static str {
        match self {
            NodeKind::Root => "root",
            NodeKind::Expr => "expr",
            NodeKind::Number => "number",
            NodeKind::Operator => "operator",
            NodeKind::Open => "open",
            NodeKind::Close => "close",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One node of the parse tree for a single input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseNode {
    pub kind: NodeKind,
    /// Literal text for leaves; empty for interior nodes and anchors.
    pub contents: String,
    pub span: Span,
    pub children: Vec<ParseNode>,
}

impl ParseNode {
    /// Create a leaf node.
    pub fn leaf(kind: NodeKind, contents: impl Into<String>, span: Span) -> Self {
        ParseNode {
            kind,
            contents: contents.into(),
            span,
            children: Vec::new(),
        }
    }

    /// Create an interior node whose span covers all of its children.
    pub fn interior(kind: NodeKind, children: Vec<ParseNode>) -> Self {
        let span = match (children.first(), children.last()) {
            (Some(first), Some(last)) => first.span.merge(last.span),
            _ => Span::DUMMY,
        };
        ParseNode {
            kind,
            contents: String::new(),
            span,
            children,
        }
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(&node.children);
        }
        count
    }

    /// Render the subtree as an indented outline, one node per line.
    ///
    /// Indentation stops growing after `MAX_OUTLINE_INDENT` levels; deeper
    /// lines carry their depth as a `[depth]` prefix instead.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        let mut pending = vec![(self, 0usize)];
        while let Some((node, depth)) = pending.pop() {
            node.write_outline_line(&mut out, depth);
            pending.extend(node.children.iter().rev().map(|child| (child, depth + 1)));
        }
        out
    }

    fn write_outline_line(&self, out: &mut String, depth: usize) {
        for _ in 0..depth.min(MAX_OUTLINE_INDENT) {
            out.push_str("  ");
        }
        if depth > MAX_OUTLINE_INDENT {
            out.push_str(&format!("[{depth}] "));
        }
        out.push_str(self.kind.name());
        if !self.contents.is_empty() {
            out.push_str(" '");
            out.push_str(&self.contents);
            out.push('\'');
        }
        out.push_str(&format!(" @{}\n", self.span));
    }
}

const MAX_OUTLINE_INDENT: usize = 32;

/// Nesting depth of a line is unbounded, so the tree is torn down from a heap
/// work list instead of recursing once per level.
impl Drop for ParseNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
