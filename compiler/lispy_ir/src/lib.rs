//! Lispy IR - parse tree types.
//!
//! This crate holds the data handed from the parser to the evaluator:
//! - `Span` for byte ranges inside one input line
//! - `NodeKind` classifying the grammar rule a node matched
//! - `ParseNode`, the read-only tree the evaluator walks
//!
//! The parser owns construction of the tree. Everything downstream only
//! borrows it.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod node;
mod span;

pub use node::{NodeKind, ParseNode};
pub use span::{Span, SpanError};
