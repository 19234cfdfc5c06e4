//! Views over slices.
//!
//! Unlike the operations in [`iterables`](crate::iterables), these know the
//! length of their input up front, so the views they return support
//! indexing as well as traversal.

use std::fmt;

use crate::error;
use crate::sequence::{write_items, DisplaySlice, IntoItems, Sequence};

/// A view presenting a slice in reverse order.
///
/// Created by [`reverse`]. The slice itself is never touched.
#[derive(Debug)]
pub struct Reversed<'a, T> {
    items: &'a [T],
}

/// Reverse a list without copying or mutating it.
pub fn reverse<T>(items: &[T]) -> Reversed<'_, T> {
    Reversed { items }
}

impl<'a, T> Reversed<'a, T> {
    /// The number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the item at `index` in reversed order, if it exists
    pub fn get(&self, index: usize) -> Option<&'a T> {
        let len = self.items.len();
        if index < len {
            Some(&self.items[len - 1 - index])
        } else {
            None
        }
    }

    /// The list in its original order
    pub fn original(&self) -> &'a [T] {
        self.items
    }
}

impl<T> Clone for Reversed<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Reversed<'_, T> {}

impl<'a, T: Clone> Sequence for Reversed<'a, T> {
    type Item = T;
    type Items<'b>
        = std::iter::Cloned<std::iter::Rev<std::slice::Iter<'a, T>>>
    where
        Self: 'b;

    #[inline]
    fn items(&self) -> Self::Items<'_> {
        self.items.iter().rev().cloned()
    }
}

impl<'a, T: Clone> IntoItems for Reversed<'a, T> {
    type IntoItems = std::iter::Cloned<std::iter::Rev<std::slice::Iter<'a, T>>>;

    fn into_items(self) -> Self::IntoItems {
        self.items.iter().rev().cloned()
    }
}

impl<T: fmt::Display> fmt::Display for Reversed<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_items(f, self.items.iter().rev())
    }
}

/// A slice split into consecutive sub-slices of a fixed size.
///
/// Created by [`partition_list`]. Chunks are computed on access and borrow
/// from the original slice.
#[derive(Debug)]
pub struct ListPartition<'a, T> {
    items: &'a [T],
    size: usize,
}

/// Split a list into consecutive sub-lists of `size` items, lazily.
///
/// The last sub-list holds the remainder. A `size` of zero is an
/// [`InvalidArgument`](error::Error::InvalidArgument) error.
pub fn partition_list<T>(items: &[T], size: usize) -> error::Result<ListPartition<'_, T>> {
    if size == 0 {
        return Err(error::Error::InvalidArgument(
            "partition size must be greater than zero".to_string(),
        ));
    }
    Ok(ListPartition { items, size })
}

impl<'a, T> ListPartition<'a, T> {
    /// The number of sub-lists
    pub fn len(&self) -> usize {
        self.items.len().div_ceil(self.size)
    }

    /// Check whether there are no sub-lists
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the sub-list at `index`, if it exists
    pub fn get(&self, index: usize) -> Option<&'a [T]> {
        let start = index.checked_mul(self.size)?;
        if start >= self.items.len() {
            return None;
        }
        let end = start.saturating_add(self.size).min(self.items.len());
        Some(&self.items[start..end])
    }
}

impl<T> Clone for ListPartition<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ListPartition<'_, T> {}

impl<'a, T> Sequence for ListPartition<'a, T> {
    type Item = &'a [T];
    type Items<'b>
        = std::slice::Chunks<'a, T>
    where
        Self: 'b;

    #[inline]
    fn items(&self) -> Self::Items<'_> {
        self.items.chunks(self.size)
    }
}

impl<'a, T> IntoItems for ListPartition<'a, T> {
    type IntoItems = std::slice::Chunks<'a, T>;

    fn into_items(self) -> Self::IntoItems {
        self.items.chunks(self.size)
    }
}

impl<T: fmt::Display> fmt::Display for ListPartition<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_items(f, self.items.chunks(self.size).map(DisplaySlice))
    }
}
