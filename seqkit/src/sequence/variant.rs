use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use super::traits::{IntoItems, Sequence};

// Stored collections are restartable for free: every traversal is a new
// iterator over the same storage, cloning items out of it.

impl<T: Clone> Sequence for [T] {
    type Item = T;
    type Items<'a>
        = std::iter::Cloned<std::slice::Iter<'a, T>>
    where
        Self: 'a;

    #[inline]
    fn items(&self) -> Self::Items<'_> {
        <[T]>::iter(self).cloned()
    }
}

impl<T: Clone, const N: usize> Sequence for [T; N] {
    type Item = T;
    type Items<'a>
        = std::iter::Cloned<std::slice::Iter<'a, T>>
    where
        Self: 'a;

    #[inline]
    fn items(&self) -> Self::Items<'_> {
        <[T]>::iter(self.as_slice()).cloned()
    }
}

impl<T: Clone> Sequence for Vec<T> {
    type Item = T;
    type Items<'a>
        = std::iter::Cloned<std::slice::Iter<'a, T>>
    where
        Self: 'a;

    #[inline]
    fn items(&self) -> Self::Items<'_> {
        <[T]>::iter(self.as_slice()).cloned()
    }
}

impl<T: Clone> Sequence for VecDeque<T> {
    type Item = T;
    type Items<'a>
        = std::iter::Cloned<std::collections::vec_deque::Iter<'a, T>>
    where
        Self: 'a;

    #[inline]
    fn items(&self) -> Self::Items<'_> {
        VecDeque::iter(self).cloned()
    }
}

impl<T: Clone> Sequence for Rc<[T]> {
    type Item = T;
    type Items<'a>
        = std::iter::Cloned<std::slice::Iter<'a, T>>
    where
        Self: 'a;

    #[inline]
    fn items(&self) -> Self::Items<'_> {
        <[T]>::iter(&**self).cloned()
    }
}

impl<S> Sequence for &S
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;
    type Items<'a>
        = S::Items<'a>
    where
        Self: 'a;

    #[inline]
    fn items(&self) -> Self::Items<'_> {
        S::items(&**self)
    }
}

impl<T: Clone> IntoItems for Vec<T> {
    type IntoItems = std::vec::IntoIter<T>;

    fn into_items(self) -> Self::IntoItems {
        self.into_iter()
    }
}

impl<T: Clone, const N: usize> IntoItems for [T; N] {
    type IntoItems = std::array::IntoIter<T, N>;

    fn into_items(self) -> Self::IntoItems {
        self.into_iter()
    }
}

impl<T: Clone> IntoItems for VecDeque<T> {
    type IntoItems = std::collections::vec_deque::IntoIter<T>;

    fn into_items(self) -> Self::IntoItems {
        self.into_iter()
    }
}

impl<'a, S> IntoItems for &'a S
where
    S: Sequence + ?Sized,
{
    type IntoItems = S::Items<'a>;

    fn into_items(self) -> Self::IntoItems {
        S::items(self)
    }
}

/// A sequence that calls a producer for every traversal.
///
/// Created with [`from_fn`]. Whether two traversals see the same items is
/// up to the producer.
#[derive(Clone)]
pub struct FromFn<F> {
    producer: F,
}

/// Make a restartable sequence out of a function producing iterators.
///
/// This is the way to build computed or infinite sequences:
///
/// ```
/// use seqkit::{from_fn, SequenceExt};
///
/// let naturals = from_fn(|| 1..);
/// assert_eq!(naturals.limit(3).to_display_string(), "[1, 2, 3]");
/// ```
pub fn from_fn<F, I>(producer: F) -> FromFn<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    FromFn { producer }
}

impl<F, I> Sequence for FromFn<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    type Item = I::Item;
    type Items<'a>
        = I::IntoIter
    where
        Self: 'a;

    #[inline]
    fn items(&self) -> Self::Items<'_> {
        (self.producer)().into_iter()
    }
}

impl<F, I> IntoItems for FromFn<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    type IntoItems = I::IntoIter;

    fn into_items(self) -> Self::IntoItems {
        (self.producer)().into_iter()
    }
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}
