use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use crate::sequence::{write_items, IntoItems, Sequence};

/// A sequence split into consecutive chunks of a fixed size.
///
/// Created by [`partition`](crate::iterables::partition). The items are
/// materialized once; every chunk is an immutable view into that storage.
/// All chunks hold `chunk_size` items, except the last one which holds the
/// remainder.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition<T> {
    storage: Rc<[T]>,
    chunk_size: usize,
}

impl<T> Partition<T> {
    /// `chunk_size` must be non-zero; `partition` checks this.
    pub(crate) fn new(storage: Rc<[T]>, chunk_size: usize) -> Self {
        debug_assert!(chunk_size > 0);
        Self {
            storage,
            chunk_size,
        }
    }

    /// The number of chunks
    pub fn len(&self) -> usize {
        self.storage.len().div_ceil(self.chunk_size)
    }

    /// Check whether there are no chunks at all
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// The size of every chunk but the last
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Get the chunk at `index`, if it exists
    pub fn get(&self, index: usize) -> Option<Chunk<T>> {
        let start = index.checked_mul(self.chunk_size)?;
        if start >= self.storage.len() {
            return None;
        }
        Some(self.chunk_at(start))
    }

    fn chunk_at(&self, start: usize) -> Chunk<T> {
        let end = start.saturating_add(self.chunk_size).min(self.storage.len());
        Chunk {
            storage: Rc::clone(&self.storage),
            start,
            end,
        }
    }
}

impl<T> Sequence for Partition<T> {
    type Item = Chunk<T>;
    type Items<'a>
        = PartitionItems<'a, T>
    where
        Self: 'a;

    fn items(&self) -> Self::Items<'_> {
        PartitionItems {
            partition: self,
            start: 0,
        }
    }
}

impl<T> fmt::Display for Partition<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_items(f, self.items())
    }
}

/// An iterator over the chunks of a [`Partition`].
pub struct PartitionItems<'a, T> {
    partition: &'a Partition<T>,
    start: usize,
}

impl<T> Iterator for PartitionItems<'_, T> {
    type Item = Chunk<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start >= self.partition.storage.len() {
            return None;
        }
        let chunk = self.partition.chunk_at(self.start);
        self.start = chunk.end;
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .partition
            .storage
            .len()
            .saturating_sub(self.start)
            .div_ceil(self.partition.chunk_size);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for PartitionItems<'_, T> {}

/// One chunk of a [`Partition`].
///
/// A chunk only gives shared access to its items: it derefs to a slice and
/// has no mutating methods. Cloning a chunk is cheap, it shares the
/// partition's storage.
pub struct Chunk<T> {
    storage: Rc<[T]>,
    start: usize,
    end: usize,
}

impl<T> Clone for Chunk<T> {
    fn clone(&self) -> Self {
        Self {
            storage: Rc::clone(&self.storage),
            start: self.start,
            end: self.end,
        }
    }
}

impl<T> Deref for Chunk<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.storage[self.start..self.end]
    }
}

impl<T: Clone> Sequence for Chunk<T> {
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

impl<T: Clone> IntoItems for Chunk<T> {
    type IntoItems = ChunkItems<T>;

    fn into_items(self) -> Self::IntoItems {
        ChunkItems {
            storage: self.storage,
            next: self.start,
            end: self.end,
        }
    }
}

/// An iterator that owns a [`Chunk`] and clones its items out.
pub struct ChunkItems<T> {
    storage: Rc<[T]>,
    next: usize,
    end: usize,
}

impl<T: Clone> Iterator for ChunkItems<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let item = self.storage[self.next].clone();
        self.next += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for ChunkItems<T> {}

impl<T: fmt::Debug> fmt::Debug for Chunk<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.deref()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Chunk<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_items(f, self.deref())
    }
}

impl<T: PartialEq> PartialEq for Chunk<T> {
    fn eq(&self, other: &Self) -> bool {
        self.deref() == other.deref()
    }
}

impl<T: Eq> Eq for Chunk<T> {}

impl<T: PartialEq> PartialEq<[T]> for Chunk<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.deref() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Chunk<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.deref() == other.as_slice()
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for Chunk<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.deref() == other.as_slice()
    }
}
