//! The four primitive operations as free functions.
//!
//! These work the same for every backend. `front` and `pop_front` check their
//! precondition in debug builds only: calling them on an empty sequence is a
//! bug in the caller, not something to recover from.
use crate::dispatch::{Before, Sequence};

/// Check whether `sequence` is exhausted.
#[inline]
pub fn empty<S: Sequence>(sequence: &S) -> bool {
    sequence.is_empty()
}

/// Read the front of a non-empty `sequence`.
#[inline]
pub fn front<S: Sequence>(sequence: &S) -> S::Reference {
    debug_assert!(!sequence.is_empty(), "front of an empty sequence");
    sequence.front()
}

/// Drop the front of a non-empty `sequence`.
#[inline]
pub fn pop_front<S: Sequence>(sequence: &mut S) {
    debug_assert!(!sequence.is_empty(), "pop_front of an empty sequence");
    sequence.pop_front()
}

/// The prefix of `whole` that was dropped to arrive at `part`.
///
/// `part` must have been derived from `whole` through [`pop_front`].
#[inline]
pub fn before<S: Before>(whole: &S, part: &S) -> S {
    whole.before(part)
}
