// A minimal iterator over any sequence, so code that expects `Iterator` can
// drive one. It deliberately supports nothing but "run until exhausted":
// cursors only know whether they're at the end, not where they are.

use std::iter::FusedIterator;

use arrayvec::ArrayVec;
use tracing::{debug, trace};

use crate::decay::Decay;
use crate::dispatch::Sequence;
use crate::error::{Error, Result};
use crate::ops;

/// A cursor owning a sequence.
///
/// A cursor is at the end when it holds no sequence or holds an empty one.
/// Two cursors compare equal only when both are at the end; there is no
/// notion of two cursors being at the same position otherwise, so `Cursor`
/// is deliberately not `Eq`.
#[derive(Debug, Clone)]
pub struct Cursor<S> {
    sequence: Option<S>,
}

/// A cursor at the front of `sequence`.
///
/// If the sequence is empty the cursor is equal to [`end`].
pub fn begin<S: Sequence>(sequence: S) -> Cursor<S> {
    Cursor {
        sequence: Some(sequence),
    }
}

/// The end cursor.
pub fn end<S: Sequence>() -> Cursor<S> {
    Cursor { sequence: None }
}

/// The `(begin, end)` cursor pair for `sequence`.
pub fn range<S: Sequence>(sequence: S) -> (Cursor<S>, Cursor<S>) {
    (begin(sequence), end())
}

impl<S: Sequence> Cursor<S> {
    /// Check whether this is an end cursor.
    pub fn is_end(&self) -> bool {
        self.sequence
            .as_ref()
            .map_or(true, |sequence| sequence.is_empty())
    }

    /// Read the element under a cursor that is not at the end.
    pub fn get(&self) -> S::Reference {
        match &self.sequence {
            Some(sequence) => ops::front(sequence),
            None => panic!("get of an end cursor"),
        }
    }

    /// Move a cursor that is not at the end to the next element.
    pub fn advance(&mut self) -> &mut Self {
        match &mut self.sequence {
            Some(sequence) => ops::pop_front(sequence),
            None => panic!("advance of an end cursor"),
        }
        self
    }

    /// Move to the next element, returning the cursor as it was before.
    pub fn advance_post(&mut self) -> Self
    where
        S: Clone,
    {
        let previous = self.clone();
        self.advance();
        previous
    }

    /// Give back the sequence, in whatever state the cursor left it.
    pub fn into_inner(self) -> Option<S> {
        self.sequence
    }
}

impl<S: Sequence> PartialEq for Cursor<S> {
    fn eq(&self, other: &Self) -> bool {
        self.is_end() && other.is_end()
    }
}

impl<S: Sequence> Iterator for Cursor<S> {
    type Item = S::Reference;

    fn next(&mut self) -> Option<S::Reference> {
        let sequence = self.sequence.as_mut()?;
        if sequence.is_empty() {
            self.sequence = None;
            return None;
        }
        let item = sequence.front();
        sequence.pop_front();
        Some(item)
    }
}

impl<S: Sequence> FusedIterator for Cursor<S> {}

/// Drain `sequence` into a container.
///
/// Pass `&mut sequence` to keep hold of the sequence; it is left empty.
pub fn materialize<C, S>(sequence: S) -> C
where
    S: Sequence,
    C: FromIterator<S::Reference>,
{
    let mut drained = 0usize;
    let container: C = begin(sequence).inspect(|_| drained += 1).collect();
    trace!(drained, "materialized sequence");
    container
}

/// Drain `sequence` into a container of its element type.
///
/// For sequences handing out borrows, the borrowed elements are cloned into
/// the container.
pub fn materialize_values<C, S>(sequence: S) -> C
where
    S: Sequence,
    S::Reference: Decay<S::Value>,
    C: FromIterator<S::Value>,
{
    begin(sequence)
        .map(<S::Reference as Decay<S::Value>>::decay)
        .collect()
}

/// Drain `sequence` into a fixed capacity array.
///
/// Fails if the sequence holds more than `N` elements. The element that did
/// not fit is not consumed, so a borrowed sequence can be picked up from
/// there.
pub fn try_materialize<const N: usize, S>(sequence: S) -> Result<ArrayVec<S::Value, N>>
where
    S: Sequence,
    S::Reference: Decay<S::Value>,
{
    let mut array = ArrayVec::new();
    let mut cursor = begin(sequence);
    while !cursor.is_end() {
        if array.is_full() {
            debug!(capacity = N, "sequence overflows array");
            return Err(Error::CapacityExceeded { capacity: N });
        }
        array.push(<S::Reference as Decay<S::Value>>::decay(cursor.get()));
        cursor.advance();
    }
    Ok(array)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generate, generate_from, positions};

    #[test]
    fn test_end_cursors_are_equal() {
        let empty = begin((7u8, 7u8));
        assert_eq!(empty, end());
        assert_eq!(end::<(u8, u8)>(), end());
    }

    #[test]
    fn test_non_end_cursor_equals_nothing() {
        let cursor = begin((0u8, 1u8));
        assert_ne!(cursor, end());
        assert_ne!(cursor, cursor.clone());
    }

    #[test]
    fn test_cursor_walk() {
        let items = [1, 2, 3];
        let (mut cursor, stop) = range(positions(&items));
        let mut seen = Vec::new();
        while cursor != stop {
            seen.push(*cursor.get());
            cursor.advance();
        }
        assert_eq!(seen, vec![1, 2, 3]);
        assert!(cursor.is_end());
    }

    #[test]
    fn test_advance_post() {
        let mut cursor = begin((5u32, 8u32));
        let previous = cursor.advance_post();
        assert_eq!(previous.get(), 5);
        assert_eq!(cursor.get(), 6);
    }

    #[test]
    fn test_materialize_leaves_sequence_empty() {
        let items = ['x', 'y', 'z'];
        let mut sequence = positions(&items);
        let collected: Vec<&char> = materialize(&mut sequence);
        assert_eq!(collected, vec![&'x', &'y', &'z']);
        assert!(ops::empty(&sequence));
    }

    #[test]
    fn test_materialize_into_string() {
        let text: String = materialize(generate_from("abc".chars()));
        assert_eq!(text, "abc");
    }

    #[test]
    fn test_materialize_values() {
        let items = vec!["one".to_string(), "two".to_string()];
        let owned: Vec<String> = materialize_values(positions(&items));
        assert_eq!(owned, items);
    }

    #[test]
    fn test_try_materialize_fits() {
        let array = try_materialize::<4, _>((1u8, 4u8)).unwrap();
        assert_eq!(array.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_try_materialize_overflow_keeps_element() {
        let mut sequence = (0u16, 10u16);
        let error = try_materialize::<3, _>(&mut sequence).unwrap_err();
        assert_eq!(error, Error::CapacityExceeded { capacity: 3 });
        assert_eq!(ops::front(&sequence), 3);
    }

    #[test]
    fn test_iterator_is_fused() {
        let mut n = 0;
        let mut cursor = begin(generate(move || {
            n += 1;
            (n == 1).then_some(n)
        }));
        assert_eq!(cursor.next(), Some(1));
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.next(), None);
        assert!(cursor.into_inner().is_none());
    }
}
