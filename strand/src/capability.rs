use crate::dispatch::Sequence;

/// The native sequence shape: a type that knows how to be a sequence by
/// itself.
///
/// Implementing this trait is all it takes for a type to become a
/// [`Sequence`]; the dispatch layer picks it up through a blanket
/// implementation. Consumers should not call these methods directly but go
/// through [`Sequence`] or the free functions in [`crate::ops`], which work for
/// every backend.
pub trait NativeSequence {
    /// The element type.
    type Value;
    /// What [`NativeSequence::front`] hands out.
    ///
    /// This need not be a real reference. A sequence that produces fresh
    /// values on demand can hand out owned copies.
    type Reference;

    /// Check whether the sequence is exhausted.
    ///
    /// This must be a pure query.
    fn is_empty(&self) -> bool;

    /// Read the front element. Only defined when the sequence is not empty.
    fn front(&self) -> Self::Reference;

    /// Drop the front element. Only defined when the sequence is not empty.
    fn pop_front(&mut self);
}

/// Native sequences that can reconstruct the prefix consumed between two of
/// their states.
///
/// This is a separate capability as not every sequence can go back in time:
/// a generator that pulled values out of a function has nothing to replay.
pub trait NativeBefore: NativeSequence + Sized {
    /// The part of `self` that was dropped to arrive at `part`.
    ///
    /// `part` must have been derived from `self` by zero or more
    /// [`NativeSequence::pop_front`] calls.
    fn before(&self, part: &Self) -> Self;
}

// Lending a sequence out mutably produces a reference-like sequence: the
// borrower advances the original, so it is observed drained afterwards.
impl<S: Sequence> NativeSequence for &mut S {
    type Value = S::Value;
    type Reference = S::Reference;

    #[inline]
    fn is_empty(&self) -> bool {
        Sequence::is_empty(&**self)
    }

    #[inline]
    fn front(&self) -> Self::Reference {
        Sequence::front(&**self)
    }

    #[inline]
    fn pop_front(&mut self) {
        Sequence::pop_front(&mut **self)
    }
}
