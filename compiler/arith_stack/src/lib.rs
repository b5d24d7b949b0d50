//! Stack growth guard for recursion that follows expression nesting.
//!
//! The parser, the evaluator and the tree walks in `arith_ir` all recurse
//! once per level of parenthesization, so a line like `a = ((((...1...))))`
//! recurses as deep as it is nested. [`ensure_sufficient_stack`] grows the stack on demand on
//! native targets; on WASM it is a plain call.

/// Remaining stack below which we grow (64KB).
const RED_ZONE: usize = 64 * 1024;

/// Size of each new stack segment (1MB).
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, growing the stack first if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
