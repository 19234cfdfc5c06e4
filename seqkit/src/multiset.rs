//! A counting bag.

use std::fmt;
use std::hash::Hash;

use ahash::{HashMap, HashMapExt};

use crate::sequence::Sequence;

/// A collection that counts how often each distinct item was added.
///
/// As a [`Sequence`] a multiset yields every distinct item as many times as
/// it was counted, with copies of one item next to each other. The order of
/// distinct items is unspecified.
#[derive(Clone)]
pub struct Multiset<T> {
    counts: HashMap<T, usize>,
    len: usize,
}

impl<T> Multiset<T>
where
    T: Eq + Hash,
{
    /// Create an empty multiset
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
            len: 0,
        }
    }

    /// Add one occurrence of `item`, returning the count it had before
    pub fn add(&mut self, item: T) -> usize {
        self.add_count(item, 1)
    }

    /// Add `n` occurrences of `item`, returning the count it had before
    ///
    /// # Panics
    ///
    /// Panics if the total number of occurrences would overflow `usize`.
    pub fn add_count(&mut self, item: T, n: usize) -> usize {
        if n == 0 {
            return self.count(&item);
        }
        // a single count never exceeds the total, so checking the total
        // covers both
        let len = grow(self.len, n);
        let count = self.counts.entry(item).or_insert(0);
        let previous = *count;
        *count += n;
        self.len = len;
        previous
    }

    /// Remove one occurrence of `item`, returning the count it had before
    pub fn remove(&mut self, item: &T) -> usize {
        self.remove_count(item, 1)
    }

    /// Remove up to `n` occurrences of `item`, returning the count it had
    /// before
    pub fn remove_count(&mut self, item: &T, n: usize) -> usize {
        let Some(count) = self.counts.get_mut(item) else {
            return 0;
        };
        let previous = *count;
        if n >= previous {
            self.counts.remove(item);
            self.len -= previous;
        } else {
            *count -= n;
            self.len -= n;
        }
        previous
    }

    /// Set the count of `item`, returning the count it had before
    ///
    /// # Panics
    ///
    /// Panics if the total number of occurrences would overflow `usize`.
    pub fn set_count(&mut self, item: T, n: usize) -> usize {
        let previous = self.count(&item);
        let len = grow(self.len - previous, n);
        if n == 0 {
            self.counts.remove(&item);
        } else {
            self.counts.insert(item, n);
        }
        self.len = len;
        previous
    }

    /// How often `item` occurs
    pub fn count(&self, item: &T) -> usize {
        self.counts.get(item).copied().unwrap_or(0)
    }

    /// Check whether `item` occurs at least once
    pub fn contains(&self, item: &T) -> bool {
        self.counts.contains_key(item)
    }

    /// The distinct items with their counts
    pub fn entries(&self) -> impl Iterator<Item = (&T, usize)> {
        self.counts.iter().map(|(item, count)| (item, *count))
    }
}

fn grow(total: usize, n: usize) -> usize {
    match total.checked_add(n) {
        Some(total) => total,
        None => panic!("multiset size overflows usize"),
    }
}

impl<T> Multiset<T> {
    /// The total number of occurrences
    pub fn len(&self) -> usize {
        self.len
    }

    /// The number of distinct items
    pub fn distinct_len(&self) -> usize {
        self.counts.len()
    }

    /// Check whether nothing was counted
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T> Default for Multiset<T> {
    fn default() -> Self {
        Self {
            counts: HashMap::default(),
            len: 0,
        }
    }
}

impl<T> PartialEq for Multiset<T>
where
    T: Eq + Hash,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.counts == other.counts
    }
}

impl<T> Eq for Multiset<T> where T: Eq + Hash {}

impl<T> fmt::Debug for Multiset<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.counts.iter()).finish()
    }
}

// renders as `[a x 2, b]`; distinct items come in the map's iteration
// order, which is unspecified
impl<T> fmt::Display for Multiset<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, (item, count)) in self.counts.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            if *count == 1 {
                write!(f, "{}", item)?;
            } else {
                write!(f, "{} x {}", item, count)?;
            }
        }
        f.write_str("]")
    }
}

impl<T> FromIterator<T> for Multiset<T>
where
    T: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut multiset = Self::new();
        multiset.extend(iter);
        multiset
    }
}

impl<T> Extend<T> for Multiset<T>
where
    T: Eq + Hash,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T> Sequence for Multiset<T>
where
    T: Clone,
{
    type Item = T;
    type Items<'a>
        = MultisetItems<'a, T>
    where
        Self: 'a;

    fn items(&self) -> Self::Items<'_> {
        MultisetItems {
            entries: self.counts.iter(),
            current: None,
            remaining: self.len,
        }
    }
}

/// An iterator over every occurrence in a [`Multiset`].
pub struct MultisetItems<'a, T> {
    entries: std::collections::hash_map::Iter<'a, T, usize>,
    current: Option<(&'a T, usize)>,
    remaining: usize,
}

impl<T> Iterator for MultisetItems<'_, T>
where
    T: Clone,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((item, left)) = self.current {
                if left > 0 {
                    self.current = Some((item, left - 1));
                    self.remaining -= 1;
                    return Some(item.clone());
                }
            }
            let (item, count) = self.entries.next()?;
            self.current = Some((item, *count));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for MultisetItems<'_, T> where T: Clone {}
