use std::fmt;

use tracing::trace;

use crate::capability::NativeSequence;

/// A sequence pulling its elements out of a function.
///
/// The function is called once on construction and once on every
/// [`NativeSequence::pop_front`]; the result is cached so that checking for
/// emptiness and reading the front never call it. Returning `None` ends the
/// sequence.
///
/// If the function panics the panic propagates to whoever triggered the call,
/// and the generator must not be used any further.
#[derive(Clone)]
pub struct Generator<F, T> {
    fun: F,
    current: Option<T>,
}

impl<F, T> Generator<F, T>
where
    F: FnMut() -> Option<T>,
{
    /// Build a generator. This calls `fun` once to find the first element.
    pub fn new(mut fun: F) -> Self {
        let current = fun();
        Self { fun, current }
    }

    /// Borrow the cached front element, if any.
    pub fn peek(&self) -> Option<&T> {
        self.current.as_ref()
    }
}

impl<F, T> NativeSequence for Generator<F, T>
where
    F: FnMut() -> Option<T>,
    T: Clone,
{
    type Value = T;
    // the values are freshly produced, so there is nothing to borrow from
    type Reference = T;

    #[inline]
    fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    #[inline]
    fn front(&self) -> T {
        match &self.current {
            Some(value) => value.clone(),
            None => panic!("front of an exhausted generator"),
        }
    }

    fn pop_front(&mut self) {
        debug_assert!(self.current.is_some(), "pop_front of an exhausted generator");
        self.current = (self.fun)();
        if self.current.is_none() {
            trace!("generator exhausted");
        }
    }
}

impl<F, T: fmt::Debug> fmt::Debug for Generator<F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

/// Build a sequence out of a function producing `Some` value until it's done.
pub fn generate<F, T>(fun: F) -> Generator<F, T>
where
    F: FnMut() -> Option<T>,
{
    Generator::new(fun)
}

/// Build a sequence out of an iterator.
pub fn generate_from<I>(iter: I) -> Generator<impl FnMut() -> Option<I::Item>, I::Item>
where
    I: IntoIterator,
{
    let mut iter = iter.into_iter();
    generate(move || iter.next())
}

/// Build a sequence out of a function that can fail.
///
/// Errors become elements of the sequence. The first error poisons it: the
/// error is the last element and `fun` is never called again.
pub fn generate_fallible<F, T, E>(
    mut fun: F,
) -> Generator<impl FnMut() -> Option<Result<T, E>>, Result<T, E>>
where
    F: FnMut() -> Result<Option<T>, E>,
{
    let mut poisoned = false;
    generate(move || {
        if poisoned {
            return None;
        }
        match fun() {
            Ok(value) => value.map(Ok),
            Err(error) => {
                trace!("generator poisoned by a production error");
                poisoned = true;
                Some(Err(error))
            }
        }
    })
}
