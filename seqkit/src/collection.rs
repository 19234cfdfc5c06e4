use std::collections::{HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

/// A caller-owned container that bulk operations can mutate.
///
/// [`add_all_into`](crate::iterables::add_all_into),
/// [`remove_all_matching`](crate::iterables::remove_all_matching) and
/// [`retain_all_matching`](crate::iterables::retain_all_matching) report a
/// change by comparing `len` before and after, so `push` may ignore an item
/// (as a set does with a duplicate).
pub trait MutableCollection<T> {
    /// The number of items held
    fn len(&self) -> usize;

    /// Check whether the collection holds nothing
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add an item at the end, or wherever the collection keeps it
    fn push(&mut self, item: T);

    /// Keep only the items for which `keep` returns true
    fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&T) -> bool;
}

impl<T> MutableCollection<T> for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn push(&mut self, item: T) {
        Vec::push(self, item)
    }

    #[inline]
    fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        Vec::retain(self, keep)
    }
}

impl<T> MutableCollection<T> for VecDeque<T> {
    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn push(&mut self, item: T) {
        self.push_back(item)
    }

    #[inline]
    fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        VecDeque::retain(self, keep)
    }
}

// This covers ahash::HashSet as well, which is a std HashSet with another
// hasher.
impl<T, S> MutableCollection<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    #[inline]
    fn len(&self) -> usize {
        HashSet::len(self)
    }

    #[inline]
    fn push(&mut self, item: T) {
        self.insert(item);
    }

    #[inline]
    fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        HashSet::retain(self, keep)
    }
}
