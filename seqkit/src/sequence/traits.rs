use std::fmt;

use crate::{error, iterables};

use super::view::Limit;

/// The core sequence interface: a sequence must implement this to function.
///
/// Every call to [`Sequence::items`] starts a new traversal with its own
/// cursor. Sequences backed by stored collections yield clones of their
/// items; a sequence made with [`from_fn`](super::from_fn) asks its
/// producer for a new iterator each time. A sequence may be infinite.
///
/// If you implement this, [`SequenceExt`] provides the rest of the API on
/// top of it.
pub trait Sequence {
    /// The type of the items produced by a traversal
    type Item;

    /// The cursor type of a single traversal
    type Items<'a>: Iterator<Item = Self::Item>
    where
        Self: 'a;

    /// Start a new traversal over the items of the sequence
    fn items(&self) -> Self::Items<'_>;
}

/// A sequence that can start a traversal which takes the sequence along.
///
/// The parts of a [`Concat`](super::Concat) come out of the outer sequence
/// one at a time and only live as long as their own traversal, so they
/// need this. Borrowed sequences implement it by borrowing, stored
/// collections by consuming themselves.
pub trait IntoItems: Sequence + Sized {
    /// The cursor type of the traversal
    type IntoItems: Iterator<Item = Self::Item>;

    /// Start a traversal that owns the sequence
    fn into_items(self) -> Self::IntoItems;
}

/// Method syntax for the operations in [`iterables`].
///
/// Implemented for every [`Sequence`]. The method names avoid the ones
/// slices already use, so `v.get_first(0)` on a `Vec` always means the
/// sequence operation.
pub trait SequenceExt: Sequence {
    /// The number of items in the sequence
    fn size(&self) -> usize {
        iterables::size(self)
    }

    /// How often `target` occurs in the sequence
    fn frequency(&self, target: &Self::Item) -> usize
    where
        Self::Item: PartialEq,
    {
        iterables::frequency(self, target)
    }

    /// Check whether the sequence holds `value`
    fn contains_value(&self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        iterables::contains_value(self, value)
    }

    /// The first item, or `default` if the sequence is empty
    fn get_first(&self, default: Self::Item) -> Self::Item {
        iterables::get_first(self, default)
    }

    /// The last item
    fn get_last(&self) -> error::Result<Self::Item> {
        iterables::get_last(self)
    }

    /// The item at `index`
    fn element_at(&self, index: usize) -> error::Result<Self::Item> {
        iterables::get(self, index)
    }

    /// Get a single item from the sequence, if it only contains one item
    fn get_only_element(&self) -> error::Result<Self::Item> {
        iterables::get_only_element(self)
    }

    /// Compare with another sequence item by item
    fn elements_equal<B>(&self, other: B) -> bool
    where
        B: Sequence,
        Self::Item: PartialEq<B::Item>,
    {
        iterables::elements_equal(self, other)
    }

    /// A lazy view over at most `max` items from the front
    fn limit(self, max: usize) -> Limit<Self>
    where
        Self: Sized,
    {
        iterables::limit(self, max)
    }

    /// Materialize the sequence
    fn to_array(&self) -> Box<[Self::Item]> {
        iterables::to_array(self)
    }

    /// Render as `[a, b, c]`
    fn to_display_string(&self) -> String
    where
        Self::Item: fmt::Display,
    {
        iterables::to_display_string(self)
    }
}

impl<S> SequenceExt for S where S: Sequence + ?Sized {}
