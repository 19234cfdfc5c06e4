use std::fmt;

use super::display::write_items;
use super::iter::ConcatItems;
use super::traits::{IntoItems, Sequence};

/// A lazy concatenation of sequences.
///
/// Created by [`concat`](crate::iterables::concat). It wraps the outer
/// sequence of parts; a traversal takes one part at a time from it, so
/// neither a part nor any of its items is produced before the traversal
/// reaches it. The outer sequence may be infinite.
#[derive(Debug, Clone)]
pub struct Concat<O> {
    parts: O,
}

impl<O> Concat<O> {
    pub(crate) fn new(parts: O) -> Self {
        Self { parts }
    }

    /// The sequence of constituent sequences
    pub fn parts(&self) -> &O {
        &self.parts
    }
}

impl<O> Sequence for Concat<O>
where
    O: Sequence,
    O::Item: IntoItems,
{
    type Item = <O::Item as Sequence>::Item;
    type Items<'a>
        = ConcatItems<O::Items<'a>, O::Item>
    where
        Self: 'a;

    fn items(&self) -> Self::Items<'_> {
        ConcatItems::new(self.parts.items())
    }
}

impl<O> IntoItems for Concat<O>
where
    O: IntoItems,
    O::Item: IntoItems,
{
    type IntoItems = ConcatItems<O::IntoItems, O::Item>;

    fn into_items(self) -> Self::IntoItems {
        ConcatItems::new(self.parts.into_items())
    }
}

impl<O> fmt::Display for Concat<O>
where
    O: Sequence,
    O::Item: IntoItems,
    <O::Item as Sequence>::Item: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_items(f, self.items())
    }
}

/// A lazy view over the front of a sequence.
///
/// Created by [`limit`](crate::iterables::limit). A traversal stops asking
/// the underlying cursor for items once `max` of them have been produced.
#[derive(Debug, Clone)]
pub struct Limit<S> {
    inner: S,
    max: usize,
}

impl<S> Limit<S> {
    pub(crate) fn new(inner: S, max: usize) -> Self {
        Self { inner, max }
    }

    /// The maximum number of items this view produces
    pub fn max(&self) -> usize {
        self.max
    }
}

impl<S> Sequence for Limit<S>
where
    S: Sequence,
{
    type Item = S::Item;
    type Items<'a>
        = std::iter::Take<S::Items<'a>>
    where
        Self: 'a;

    #[inline]
    fn items(&self) -> Self::Items<'_> {
        self.inner.items().take(self.max)
    }
}

impl<S> IntoItems for Limit<S>
where
    S: IntoItems,
{
    type IntoItems = std::iter::Take<S::IntoItems>;

    fn into_items(self) -> Self::IntoItems {
        self.inner.into_items().take(self.max)
    }
}

impl<S> fmt::Display for Limit<S>
where
    S: Sequence,
    S::Item: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_items(f, self.items())
    }
}
