use insta::assert_snapshot;

use seqkit::iterables::{
    add_all_into, concat, contains_value, elements_equal, frequency, get, get_first, get_last,
    get_last_or, get_only_element, is_empty, limit, partition, remove_all_matching,
    retain_all_matching, size, to_array, to_display_string,
};
use seqkit::lists::{partition_list, reverse};
use seqkit::{Error, Multiset, SequenceExt};

fn concatenated() -> seqkit::Concat<[Vec<i32>; 2]> {
    concat([vec![1, 2, 3], vec![4, 5, 6]])
}

#[test]
fn test_concat() {
    assert_snapshot!(to_display_string(concatenated()), @"[1, 2, 3, 4, 5, 6]");
}

#[test]
fn test_frequency_in_concatenation() {
    assert_eq!(frequency(concatenated(), &1), 1);
}

#[test]
fn test_partition_concatenation() {
    let parts = partition(concatenated(), 2).unwrap();
    assert_snapshot!(parts.to_string(), @"[[1, 2], [3, 4], [5, 6]]");
}

#[test]
fn test_first_and_last() {
    let joined = concatenated();
    assert_eq!(get_first(&joined, 0), 1);
    assert_eq!(get_last(&joined), Ok(6));
    assert_eq!(get_last_or(&joined, 0), 6);
}

#[test]
fn test_elements_equal_depends_on_order() {
    let other = concat([vec![4, 5, 6], vec![1, 2, 3]]);
    assert_snapshot!(other.to_string(), @"[4, 5, 6, 1, 2, 3]");
    assert!(!elements_equal(&concatenated(), &other));
}

#[test]
fn test_limit_then_only_element() {
    let limited = limit(concatenated(), 1);
    assert_snapshot!(limited.to_string(), @"[1]");
    assert_eq!(get_only_element(&limited), Ok(1));
}

#[test]
fn test_bulk_operations() {
    let joined = concatenated();
    let mut numbers = vec![-1, 0];
    assert!(add_all_into(&mut numbers, &joined));
    assert_snapshot!(to_display_string(&numbers), @"[-1, 0, 1, 2, 3, 4, 5, 6]");

    assert!(contains_value(&joined, &1));

    assert!(remove_all_matching(&mut numbers, [6, 9]));
    assert_snapshot!(to_display_string(&numbers), @"[-1, 0, 1, 2, 3, 4, 5]");

    let mut numbers = vec![-1, 0];
    assert!(retain_all_matching(&mut numbers, [0]));
    assert_snapshot!(to_display_string(&numbers), @"[0]");
}

#[test]
fn test_inspection() {
    let joined = concatenated();
    assert_eq!(size(&joined), 6);
    assert_eq!(&*to_array(&joined), &[1, 2, 3, 4, 5, 6]);
    assert!(is_empty(Vec::<i32>::new()));
    assert_eq!(get(&joined, 1), Ok(2));
    assert_eq!(
        get(&joined, 6),
        Err(Error::IndexOutOfRange { index: 6, size: 6 })
    );
}

#[test]
fn test_lists() {
    let count_up = [1, 2, 3, 4, 5];
    assert_snapshot!(reverse(&count_up).to_string(), @"[5, 4, 3, 2, 1]");
    let parts = partition_list(&count_up, 2).unwrap();
    assert_snapshot!(parts.to_string(), @"[[1, 2], [3, 4], [5]]");
}

#[test]
fn test_method_syntax() {
    let joined = concatenated();
    assert_eq!(joined.size(), 6);
    assert_eq!(joined.frequency(&4), 1);
    assert_eq!(joined.get_first(0), 1);
    assert_eq!(joined.get_last(), Ok(6));
    assert_eq!(joined.element_at(2), Ok(3));
    assert!(joined.contains_value(&5));
    assert!(joined.elements_equal([1, 2, 3, 4, 5, 6]));
    assert_snapshot!((&joined).limit(2).to_display_string(), @"[1, 2]");

    let numbers = vec![9];
    assert_eq!(numbers.get_only_element(), Ok(9));
    assert_eq!(numbers.to_array().len(), 1);
}

#[test]
fn test_error_messages() {
    assert_snapshot!(
        get_only_element(Vec::<i32>::new()).unwrap_err().to_string(),
        @"invalid argument: expected exactly one element, got none"
    );
    assert_snapshot!(
        get_only_element([1, 2]).unwrap_err().to_string(),
        @"invalid argument: expected exactly one element, got more than one"
    );
    assert_snapshot!(
        partition([1], 0).unwrap_err().to_string(),
        @"invalid argument: partition size must be greater than zero"
    );
    assert_snapshot!(get_last(Vec::<i32>::new()).unwrap_err().to_string(), @"no such element");
    assert_snapshot!(
        get([1], 4).unwrap_err().to_string(),
        @"index 4 out of range for sequence of size 1"
    );
}

#[test]
fn test_multiset_counts_match_frequency() {
    let words = ["alpha", "beta", "alpha", "gamma", "alpha"];
    let multiset: Multiset<_> = words.into_iter().collect();
    for word in words {
        assert_eq!(multiset.count(&word), frequency(words, &word));
    }
    assert_eq!(size(&multiset), words.len());
}
