//! A structural sequence protocol.
//!
//! A sequence is anything that can be asked whether it is empty, read at its
//! front and advanced. Types get there in one of two ways: by implementing
//! [`NativeSequence`] themselves, or by being a pair of [`Position`]s. The
//! [`Sequence`] trait unifies both, and everything downstream (the free
//! operations in [`ops`], [`Generator`], [`Cursor`] and the `materialize`
//! family) only ever talks to [`Sequence`].
mod adapter;
mod capability;
mod decay;
mod dispatch;
pub mod error;
mod generator;
pub mod ops;
mod position;

pub use adapter::{
    begin, end, materialize, materialize_values, range, try_materialize, Cursor,
};
pub use capability::{NativeBefore, NativeSequence};
pub use decay::Decay;
pub use dispatch::{is_native, Backend, Before, Reference, Sequence, SequenceOf, Value};
pub use error::{Error, Result};
pub use generator::{generate, generate_fallible, generate_from, Generator};
pub use ops::{before, empty, front, pop_front};
pub use position::{positions, Position, SlicePosition};

#[doc(hidden)]
pub use static_assertions as __static_assertions;

/// Assert at compile time that a type is a sequence.
///
/// ```
/// strand::assert_sequence!((u8, u8));
/// ```
#[macro_export]
macro_rules! assert_sequence {
    ($type:ty) => {
        $crate::__static_assertions::assert_impl_all!($type: $crate::Sequence);
    };
    ($type:ty, $value:ty) => {
        $crate::__static_assertions::assert_impl_all!($type: $crate::SequenceOf<$value>);
    };
}

/// Assert at compile time that a type is not a sequence.
///
/// ```
/// strand::assert_not_sequence!(String);
/// ```
#[macro_export]
macro_rules! assert_not_sequence {
    ($type:ty) => {
        $crate::__static_assertions::assert_not_impl_any!($type: $crate::Sequence);
    };
}
