//! Stack growth for deeply nested programs.
//!
//! The parser and evaluator recurse once per syntax-tree level, so input like
//! `((((...))))` or a long chain of nested blocks can exhaust the host stack
//! long before it exhausts memory. Every recursive entry point in those
//! crates goes through [`ensure_sufficient_stack`], which moves onto a freshly
//! allocated segment when the current one runs low.
//!
//! This does not bound user recursion: a runaway Lox function is stopped by
//! the interpreter's call-depth limit, not here.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack; call through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
