//! Constructors that size collections for an expected number of items.
//!
//! The name says what the number means: `with_capacity` on its own doesn't
//! tell a reader whether the caller expects exactly that many items or
//! roughly that many.

use ahash::{HashMap, HashMapExt, HashSet, HashSetExt};

/// A vector with room for about `expected` items, plus some slack.
pub fn vec_with_expected_size<T>(expected: usize) -> Vec<T> {
    Vec::with_capacity(list_capacity(expected))
}

/// A hash set that holds `expected` items without growing.
pub fn hash_set_with_expected_size<T>(expected: usize) -> HashSet<T> {
    HashSet::with_capacity(hash_capacity(expected))
}

/// A hash map that holds `expected` entries without growing.
pub fn hash_map_with_expected_size<K, V>(expected: usize) -> HashMap<K, V> {
    HashMap::with_capacity(hash_capacity(expected))
}

/// Collect the items of any iterator into a vector.
pub fn vec_from_iter<I: IntoIterator>(items: I) -> Vec<I::Item> {
    let items = items.into_iter();
    let mut result = Vec::with_capacity(items.size_hint().0);
    result.extend(items);
    result
}

fn list_capacity(expected: usize) -> usize {
    5usize
        .saturating_add(expected)
        .saturating_add(expected / 10)
}

// assume a load factor of 3/4
fn hash_capacity(expected: usize) -> usize {
    if expected < 3 {
        expected + 1
    } else {
        expected.saturating_add(expected / 3).saturating_add(1)
    }
}
