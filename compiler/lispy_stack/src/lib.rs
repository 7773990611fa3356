//! Stack growth for the recursive parser and evaluator.
//!
//! Nesting depth of an input line is unbounded (`(+ 1 (+ 1 (+ 1 ...)))`),
//! and both the parser and the evaluator recurse once per parenthesis.
//! Wrapping each recursive step in [`ensure_sufficient_stack`] lets the
//! native stack grow on demand instead of overflowing.
//!
//! On `wasm32` the closure is called directly.

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    /// Remaining stack below which a new segment is allocated (100KB).
    const RED_ZONE: usize = 100 * 1024;

    /// Size of each newly allocated stack segment (1MB).
    const STACK_PER_RECURSION: usize = 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
