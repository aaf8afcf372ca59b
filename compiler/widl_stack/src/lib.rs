//! Stack growth for recursive descent.
//!
//! Type expressions, sequence literals and annotation groups nest without a
//! grammar limit (`sequence<sequence<...>>`, `[[[]]]`, `[A([B(...) long x])]`),
//! and the parser, the tree walks and the printers descend once per level.
//! Wrapping each recursive entry point in [`ensure_sufficient_stack`] moves
//! the descent onto a freshly allocated segment whenever the current one runs
//! low.
//!
//! On `wasm32` the guard is a plain call.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 64 * 1024;

/// Size of each newly allocated segment.
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first switching to a new stack segment if the current one has
/// less than the red zone left.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
