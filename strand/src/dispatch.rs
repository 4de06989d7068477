// The dispatch layer. Every sequence shape ends up here, and everything
// downstream only ever sees `Sequence`. There is no dynamic dispatch: each
// backend gets its own blanket implementation, and coherence guarantees a type
// resolves to at most one of them.

use strum::EnumMessage;
use strum_macros::{Display, EnumMessage};

use crate::capability::{NativeBefore, NativeSequence};
use crate::position::Position;

/// Which backend a sequence type is served by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumMessage)]
#[strum(serialize_all = "kebab-case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Backend {
    /// The type implements [`NativeSequence`] itself.
    #[strum(message = "the type implements the sequence methods itself")]
    Native,
    /// The type is a pair of positions bounding a linear structure.
    #[strum(message = "a pair of positions; the first is advanced towards the second")]
    PositionPair,
}

impl Backend {
    /// A human readable description of the backend.
    pub fn description(&self) -> &'static str {
        self.get_message().unwrap_or_default()
    }
}

/// The uniform sequence surface.
///
/// You don't implement this directly: implement [`NativeSequence`] or
/// [`Position`] and the matching implementation here is selected at compile
/// time. A type that is neither is not a sequence, and using it as one is a
/// compile error.
pub trait Sequence {
    /// The element type.
    type Value;
    /// What [`Sequence::front`] hands out.
    type Reference;

    /// The backend this implementation was resolved to.
    const BACKEND: Backend;

    /// Check whether the sequence is exhausted.
    fn is_empty(&self) -> bool;

    /// Read the front element. Only defined when the sequence is not empty.
    fn front(&self) -> Self::Reference;

    /// Drop the front element. Only defined when the sequence is not empty.
    fn pop_front(&mut self);
}

/// Sequences that can reconstruct the prefix between two of their states.
pub trait Before: Sequence + Sized {
    /// The part of `self` that was dropped to arrive at `part`.
    fn before(&self, part: &Self) -> Self;
}

/// The element type of a sequence.
pub type Value<S> = <S as Sequence>::Value;

/// The type a sequence hands out from its front.
pub type Reference<S> = <S as Sequence>::Reference;

/// A sequence whose element type is exactly `V`.
pub trait SequenceOf<V>: Sequence<Value = V> {}

impl<S, V> SequenceOf<V> for S where S: Sequence<Value = V> {}

/// Whether `S` is served by the native backend.
pub const fn is_native<S: Sequence>() -> bool {
    matches!(S::BACKEND, Backend::Native)
}

impl<S: NativeSequence> Sequence for S {
    type Value = S::Value;
    type Reference = S::Reference;

    const BACKEND: Backend = Backend::Native;

    #[inline]
    fn is_empty(&self) -> bool {
        NativeSequence::is_empty(self)
    }

    #[inline]
    fn front(&self) -> Self::Reference {
        NativeSequence::front(self)
    }

    #[inline]
    fn pop_front(&mut self) {
        NativeSequence::pop_front(self)
    }
}

impl<S: NativeBefore> Before for S {
    #[inline]
    fn before(&self, part: &Self) -> Self {
        NativeBefore::before(self, part)
    }
}

// A pair of positions (begin, end). The first position walks towards the
// second; the sequence is empty once they meet.
impl<P: Position> Sequence for (P, P) {
    type Value = P::Value;
    type Reference = P::Reference;

    const BACKEND: Backend = Backend::PositionPair;

    #[inline]
    fn is_empty(&self) -> bool {
        self.0 == self.1
    }

    #[inline]
    fn front(&self) -> Self::Reference {
        self.0.get()
    }

    #[inline]
    fn pop_front(&mut self) {
        self.0.advance()
    }
}

impl<P: Position> Before for (P, P) {
    #[inline]
    fn before(&self, part: &Self) -> Self {
        // popping never moves the end position
        debug_assert!(self.1 == part.1, "part was not derived from whole");
        (self.0.clone(), part.0.clone())
    }
}
