//! Operations over any [`Sequence`].
//!
//! Functions take their sequence by value; pass a reference (`&v`) to keep
//! using a stored collection afterwards. Lazy views ([`concat`],
//! [`limit`]) do no work until they are traversed. Everything else
//! traverses its input right away, at most once, and never mutates it.
//! Only the `*_into` and `*_matching` functions mutate, and only the host
//! collection they are given.

use std::fmt;
use std::rc::Rc;

use crate::collection::MutableCollection;
use crate::error;
use crate::partition::Partition;
use crate::sequence::{Concat, DisplaySequence, IntoItems, Limit, Sequence};

/// Concatenate a sequence of sequences into one lazy sequence.
///
/// The result yields all items of the first part, then of the second, and
/// so on. Parts are taken from `parts` one at a time as the traversal
/// reaches them, so `parts` may be lazy or even infinite. Concatenating
/// nothing gives an empty sequence.
///
/// Parts are passed either by reference (`[&a, &b]`) or owned; owned parts
/// in a stored collection are cloned for every traversal.
pub fn concat<O>(parts: O) -> Concat<O>
where
    O: Sequence,
    O::Item: IntoItems,
{
    Concat::new(parts)
}

/// Count the items equal to `target`.
pub fn frequency<S>(seq: S, target: &S::Item) -> usize
where
    S: Sequence,
    S::Item: PartialEq,
{
    seq.items().filter(|item| item == target).count()
}

/// Split a sequence into consecutive chunks of `size` items.
///
/// The sequence is traversed once, eagerly. The last chunk holds the
/// remainder if the length is not a multiple of `size`. A `size` of zero
/// is an [`InvalidArgument`](error::Error::InvalidArgument) error.
///
/// Since the whole input is read up front, an infinite sequence never
/// finishes partitioning.
pub fn partition<S>(seq: S, size: usize) -> error::Result<Partition<S::Item>>
where
    S: Sequence,
{
    if size == 0 {
        return Err(error::Error::InvalidArgument(
            "partition size must be greater than zero".to_string(),
        ));
    }
    let storage: Rc<[S::Item]> = seq.items().collect();
    tracing::trace!(size, items = storage.len(), "partitioned sequence");
    Ok(Partition::new(storage, size))
}

/// Get the first item, or `default` if the sequence is empty.
pub fn get_first<S>(seq: S, default: S::Item) -> S::Item
where
    S: Sequence,
{
    seq.items().next().unwrap_or(default)
}

/// Get the last item.
///
/// Traverses the whole sequence. Fails with
/// [`NoSuchElement`](error::Error::NoSuchElement) if it is empty.
pub fn get_last<S>(seq: S) -> error::Result<S::Item>
where
    S: Sequence,
{
    seq.items().last().ok_or(error::Error::NoSuchElement)
}

/// Get the last item, or `default` if the sequence is empty.
pub fn get_last_or<S>(seq: S, default: S::Item) -> S::Item
where
    S: Sequence,
{
    seq.items().last().unwrap_or(default)
}

/// Check whether two sequences hold equal items in the same order.
///
/// Both are traversed in lockstep; the first differing item or the end of
/// only one of them decides the answer without looking further.
pub fn elements_equal<A, B>(a: A, b: B) -> bool
where
    A: Sequence,
    B: Sequence,
    A::Item: PartialEq<B::Item>,
{
    let mut a = a.items();
    let mut b = b.items();
    loop {
        match (a.next(), b.next()) {
            (Some(x), Some(y)) => {
                if x != y {
                    return false;
                }
            }
            (None, None) => return true,
            _ => return false,
        }
    }
}

/// A lazy view of at most `max` items from the front of `seq`.
///
/// Safe to use on infinite sequences: the underlying cursor is not
/// advanced past the `max`th item.
pub fn limit<S>(seq: S, max: usize) -> Limit<S>
where
    S: Sequence,
{
    Limit::new(seq, max)
}

/// Get a single item from the sequence, if it only contains one item.
///
/// An empty sequence or one with more than one item is an
/// [`InvalidArgument`](error::Error::InvalidArgument) error. Always tries
/// to advance past the first item to make sure there is no second one.
pub fn get_only_element<S>(seq: S) -> error::Result<S::Item>
where
    S: Sequence,
{
    let mut items = seq.items();
    if let Some(one) = items.next() {
        if items.next().is_none() {
            Ok(one)
        } else {
            Err(more_than_one())
        }
    } else {
        Err(error::Error::InvalidArgument(
            "expected exactly one element, got none".to_string(),
        ))
    }
}

/// Like [`get_only_element`], but an empty sequence gives `default`.
///
/// More than one item is still an error.
pub fn get_only_element_or<S>(seq: S, default: S::Item) -> error::Result<S::Item>
where
    S: Sequence,
{
    let mut items = seq.items();
    if let Some(one) = items.next() {
        if items.next().is_none() {
            Ok(one)
        } else {
            Err(more_than_one())
        }
    } else {
        Ok(default)
    }
}

fn more_than_one() -> error::Error {
    error::Error::InvalidArgument("expected exactly one element, got more than one".to_string())
}

/// Append every item of `source` to `target`, in order.
///
/// Returns whether `target` changed size.
pub fn add_all_into<C, S>(target: &mut C, source: S) -> bool
where
    C: MutableCollection<S::Item> + ?Sized,
    S: Sequence,
{
    let before = target.len();
    for item in source.items() {
        target.push(item);
    }
    let after = target.len();
    tracing::trace!(before, after, "added sequence into collection");
    after != before
}

/// Check whether the sequence holds an item equal to `value`.
///
/// Stops at the first match.
pub fn contains_value<S>(seq: S, value: &S::Item) -> bool
where
    S: Sequence,
    S::Item: PartialEq,
{
    seq.items().any(|item| &item == value)
}

/// Remove every item of `target` equal to some item of `candidates`.
///
/// Returns whether `target` changed.
pub fn remove_all_matching<T, C, S>(target: &mut C, candidates: S) -> bool
where
    T: PartialEq,
    C: MutableCollection<T> + ?Sized,
    S: Sequence<Item = T>,
{
    let before = target.len();
    target.retain(|item| !contains_value(&candidates, item));
    let after = target.len();
    tracing::trace!(before, after, "removed matching items");
    after != before
}

/// Keep only the items of `target` equal to some item of `candidates`.
///
/// Returns whether `target` changed.
pub fn retain_all_matching<T, C, S>(target: &mut C, candidates: S) -> bool
where
    T: PartialEq,
    C: MutableCollection<T> + ?Sized,
    S: Sequence<Item = T>,
{
    let before = target.len();
    target.retain(|item| contains_value(&candidates, item));
    let after = target.len();
    tracing::trace!(before, after, "retained matching items");
    after != before
}

/// The number of items in the sequence.
pub fn size<S>(seq: S) -> usize
where
    S: Sequence,
{
    seq.items().count()
}

/// Check whether the sequence is empty.
///
/// Advances a cursor at most once.
pub fn is_empty<S>(seq: S) -> bool
where
    S: Sequence,
{
    seq.items().next().is_none()
}

/// Get the item at `index`.
///
/// Fails with [`IndexOutOfRange`](error::Error::IndexOutOfRange) if the
/// sequence ends before reaching it.
pub fn get<S>(seq: S, index: usize) -> error::Result<S::Item>
where
    S: Sequence,
{
    let mut size = 0;
    for item in seq.items() {
        if size == index {
            return Ok(item);
        }
        size += 1;
    }
    Err(error::Error::IndexOutOfRange { index, size })
}

/// Materialize the sequence into a fixed-size array.
pub fn to_array<S>(seq: S) -> Box<[S::Item]>
where
    S: Sequence,
{
    seq.items().collect()
}

/// Render the sequence as `[a, b, c]`; an empty sequence renders as `[]`.
pub fn to_display_string<S>(seq: S) -> String
where
    S: Sequence,
    S::Item: fmt::Display,
{
    DisplaySequence(seq).to_string()
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::collections::VecDeque;

    use ahash::{HashSet, HashSetExt};

    use super::*;
    use crate::error::Error;
    use crate::sequence::from_fn;

    #[test]
    fn test_concat_nothing() {
        let empty = concat(Vec::<Vec<i32>>::new());
        assert_eq!(size(&empty), 0);
        assert_eq!(to_display_string(&empty), "[]");
    }

    #[test]
    fn test_concat_keeps_duplicates() {
        let joined = concat([vec![1, 1], vec![], vec![1, 2]]);
        assert_eq!(to_array(&joined), vec![1, 1, 1, 2].into_boxed_slice());
        assert_eq!(frequency(&joined, &1), 3);
    }

    #[test]
    fn test_concat_borrowed_parts() {
        let a = vec!["x", "y"];
        let b = vec!["z"];
        let joined = concat([&a, &b]);
        assert_eq!(to_display_string(&joined), "[x, y, z]");
        // traversing again starts from the beginning
        assert_eq!(get_first(&joined, ""), "x");
    }

    #[test]
    fn test_concat_takes_parts_on_demand() {
        let made = Cell::new(0);
        let counter = &made;
        let parts = from_fn(move || {
            (0..5).map(move |n| {
                counter.set(counter.get() + 1);
                vec![n, n]
            })
        });
        let joined = concat(parts);
        assert_eq!(made.get(), 0);

        assert_eq!(get_first(&joined, -1), 0);
        assert_eq!(made.get(), 1);

        made.set(0);
        assert_eq!(to_array(limit(&joined, 3)), vec![0, 0, 1].into_boxed_slice());
        assert_eq!(made.get(), 2);
    }

    #[test]
    fn test_concat_infinite_parts() {
        let parts = from_fn(|| (0..).map(|n| vec![n]));
        let joined = concat(parts);
        assert_eq!(to_display_string(limit(&joined, 3)), "[0, 1, 2]");
        assert_eq!(get(&joined, 10), Ok(10));
    }

    #[test]
    fn test_frequency() {
        assert_eq!(frequency([1, 2, 3, 1], &1), 2);
        assert_eq!(frequency(Vec::<i32>::new(), &5), 0);
        assert_eq!(frequency(["a", "b"], &"c"), 0);
    }

    #[test]
    fn test_partition_zero_size() {
        assert_eq!(
            partition(&[1, 2, 3], 0),
            Err(Error::InvalidArgument(
                "partition size must be greater than zero".to_string()
            ))
        );
    }

    #[test]
    fn test_partition_larger_than_input() {
        let parts = partition(vec![1, 2], 5).unwrap();
        assert_eq!(parts.len(), 1);
        assert_eq!(parts.get(0).unwrap(), [1, 2]);
    }

    #[test]
    fn test_get_first() {
        assert_eq!(get_first([7, 8], 0), 7);
        assert_eq!(get_first(Vec::<i32>::new(), 0), 0);
    }

    #[test]
    fn test_get_last() {
        assert_eq!(get_last([7, 8]), Ok(8));
        assert_eq!(get_last(Vec::<i32>::new()), Err(Error::NoSuchElement));
        assert_eq!(get_last_or(Vec::<i32>::new(), -1), -1);
        assert_eq!(get_last_or([3], -1), 3);
    }

    #[test]
    fn test_elements_equal() {
        assert!(elements_equal([1, 2, 3], vec![1, 2, 3]));
        assert!(!elements_equal([1, 2, 3], [1, 2]));
        assert!(!elements_equal([1, 2], [1, 2, 3]));
        assert!(!elements_equal([1, 2, 3], [1, 5, 3]));
        assert!(elements_equal(Vec::<i32>::new(), VecDeque::<i32>::new()));
    }

    #[test]
    fn test_elements_equal_short_circuits() {
        // an infinite sequence still compares unequal on the first mismatch
        let naturals = from_fn(|| 0..);
        assert!(!elements_equal(&naturals, [0, 1, 7]));
        assert!(!elements_equal([0, 1], &naturals));
    }

    #[test]
    fn test_limit_stops_polling() {
        let polled = Cell::new(0);
        let counter = &polled;
        let naturals = from_fn(move || (0..).inspect(move |_| counter.set(counter.get() + 1)));
        let limited = limit(&naturals, 3);
        assert_eq!(polled.get(), 0);
        assert_eq!(to_array(&limited), vec![0, 1, 2].into_boxed_slice());
        assert_eq!(polled.get(), 3);
    }

    #[test]
    fn test_limit_zero() {
        assert!(is_empty(limit([1, 2], 0)));
    }

    #[test]
    fn test_get_only_element() {
        assert_eq!(get_only_element([1]), Ok(1));
        assert_eq!(
            get_only_element(Vec::<i32>::new()),
            Err(Error::InvalidArgument(
                "expected exactly one element, got none".to_string()
            ))
        );
        assert_eq!(
            get_only_element([1, 2]),
            Err(Error::InvalidArgument(
                "expected exactly one element, got more than one".to_string()
            ))
        );
    }

    #[test]
    fn test_get_only_element_advances_twice() {
        let advanced = Cell::new(false);
        let flag = &advanced;
        let seq = from_fn(move || {
            std::iter::once(5).chain(std::iter::from_fn(move || {
                flag.set(true);
                None
            }))
        });
        assert_eq!(get_only_element(&seq), Ok(5));
        assert!(advanced.get());
        // an infinite sequence is rejected after looking at two items
        let infinite = from_fn(|| 0..);
        assert!(get_only_element(&infinite).is_err());
    }

    #[test]
    fn test_get_only_element_or() {
        assert_eq!(get_only_element_or(Vec::<i32>::new(), 9), Ok(9));
        assert_eq!(get_only_element_or([4], 9), Ok(4));
        assert!(get_only_element_or([4, 5], 9).is_err());
    }

    #[test]
    fn test_add_all_into() {
        let mut numbers = vec![-1, 0];
        assert!(add_all_into(&mut numbers, [1, 2]));
        assert_eq!(numbers, vec![-1, 0, 1, 2]);
        assert!(!add_all_into(&mut numbers, Vec::<i32>::new()));
        assert_eq!(numbers, vec![-1, 0, 1, 2]);
    }

    #[test]
    fn test_add_all_into_set_without_growth() {
        let mut set = HashSet::new();
        set.insert(1);
        assert!(!add_all_into(&mut set, [1, 1]));
        assert!(add_all_into(&mut set, [1, 2]));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_add_all_into_deque() {
        let mut deque = VecDeque::from(vec![0]);
        assert!(add_all_into(&mut deque, [1, 2]));
        assert_eq!(deque, VecDeque::from(vec![0, 1, 2]));
    }

    #[test]
    fn test_contains_value() {
        assert!(contains_value([1, 2, 3], &2));
        assert!(!contains_value([1, 2, 3], &4));
        assert!(contains_value(from_fn(|| 0..), &1000));
    }

    #[test]
    fn test_remove_all_matching() {
        let mut numbers = vec![-1, 0, 1, 2, 3, 4, 5, 6];
        assert!(remove_all_matching(&mut numbers, [6, 9]));
        assert_eq!(numbers, vec![-1, 0, 1, 2, 3, 4, 5]);
        assert!(!remove_all_matching(&mut numbers, [9]));
    }

    #[test]
    fn test_remove_all_matching_removes_every_copy() {
        let mut numbers = vec![1, 2, 1, 3, 1];
        assert!(remove_all_matching(&mut numbers, [1]));
        assert_eq!(numbers, vec![2, 3]);
    }

    #[test]
    fn test_retain_all_matching() {
        let mut numbers = vec![-1, 0];
        assert!(retain_all_matching(&mut numbers, [0]));
        assert_eq!(numbers, vec![0]);
        assert!(!retain_all_matching(&mut numbers, [0, 1]));
        assert!(retain_all_matching(&mut numbers, Vec::<i32>::new()));
        assert!(numbers.is_empty());
    }

    #[test]
    fn test_size_and_is_empty() {
        assert_eq!(size([1, 2, 3]), 3);
        assert_eq!(size(Vec::<i32>::new()), 0);
        assert!(is_empty(Vec::<i32>::new()));
        assert!(!is_empty(from_fn(|| 0..)));
    }

    #[test]
    fn test_get() {
        assert_eq!(get([1, 2, 3], 1), Ok(2));
        assert_eq!(
            get([1, 2, 3], 3),
            Err(Error::IndexOutOfRange { index: 3, size: 3 })
        );
        assert_eq!(
            get(Vec::<i32>::new(), 0),
            Err(Error::IndexOutOfRange { index: 0, size: 0 })
        );
        assert_eq!(get(from_fn(|| 0..), 10), Ok(10));
    }

    #[test]
    fn test_to_display_string() {
        assert_eq!(to_display_string([1, 2, 3]), "[1, 2, 3]");
        assert_eq!(to_display_string(Vec::<i32>::new()), "[]");
        assert_eq!(to_display_string(["only"]), "[only]");
    }
}
