use std::fmt;

/// A position inside some linear structure.
///
/// Two positions of the same structure, `(begin, end)`, form a sequence: the
/// first is read and advanced until it equals the second. This lets
/// structures that can't grow sequence methods of their own take part anyway.
pub trait Position: Clone + PartialEq {
    /// The element type at this position.
    type Value;
    /// What reading this position hands out.
    type Reference;

    /// Read the element at this position.
    fn get(&self) -> Self::Reference;

    /// Move to the next position.
    fn advance(&mut self);
}

/// A position inside a slice.
///
/// Positions compare equal when they point into the same slice at the same
/// index.
pub struct SlicePosition<'a, T> {
    slice: &'a [T],
    index: usize,
}

impl<'a, T> SlicePosition<'a, T> {
    /// A position at `index` in `slice`. `index` may be one past the end.
    pub fn new(slice: &'a [T], index: usize) -> Self {
        debug_assert!(index <= slice.len());
        Self { slice, index }
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl<T> Clone for SlicePosition<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SlicePosition<'_, T> {}

impl<T> PartialEq for SlicePosition<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.slice, other.slice) && self.index == other.index
    }
}

impl<T> Eq for SlicePosition<'_, T> {}

impl<T> fmt::Debug for SlicePosition<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlicePosition")
            .field("index", &self.index)
            .field("len", &self.slice.len())
            .finish()
    }
}

impl<'a, T> Position for SlicePosition<'a, T> {
    type Value = T;
    type Reference = &'a T;

    #[inline]
    fn get(&self) -> &'a T {
        &self.slice[self.index]
    }

    #[inline]
    fn advance(&mut self) {
        self.index += 1;
    }
}

/// The position pair spanning a whole slice.
pub fn positions<T>(slice: &[T]) -> (SlicePosition<'_, T>, SlicePosition<'_, T>) {
    (
        SlicePosition::new(slice, 0),
        SlicePosition::new(slice, slice.len()),
    )
}

// Integers are counting positions: `(3, 6)` is the sequence 3, 4, 5.
macro_rules! counting_position {
    ($($t:ty),*) => {
        $(
            impl Position for $t {
                type Value = $t;
                type Reference = $t;

                #[inline]
                fn get(&self) -> $t {
                    *self
                }

                #[inline]
                fn advance(&mut self) {
                    *self += 1;
                }
            }
        )*
    };
}

counting_position!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
