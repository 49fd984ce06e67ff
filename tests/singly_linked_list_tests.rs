//! Unit tests for SinglyLinkedList.
//!
//! These tests cover construction, boundary and value-relative insertion,
//! removal, concatenation and the empty-container error surface.

use chainkit::error::ContainerError;
use chainkit::list::SinglyLinkedList;
use chainkit::singly;
use rstest::rstest;

fn collect<T: Clone>(list: &SinglyLinkedList<T>) -> Vec<T> {
    list.iter().cloned().collect()
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_new_creates_empty_list() {
    let list: SinglyLinkedList<i32> = SinglyLinkedList::new();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert_eq!(list.iter().next(), None);
}

#[rstest]
fn test_from_literal_keeps_order() {
    let list = singly![1, 2, 3, 4, 5];
    assert_eq!(collect(&list), vec![1, 2, 3, 4, 5]);
    assert_eq!(list.len(), 5);
}

#[rstest]
fn test_from_collection_keeps_order() {
    let source = vec![6, 7, 8, 9, 10];
    let list = SinglyLinkedList::from(source.clone());
    assert_eq!(collect(&list), source);
}

#[rstest]
fn test_collect_from_iterator() {
    let list: SinglyLinkedList<i32> = (1..=4).collect();
    assert_eq!(collect(&list), vec![1, 2, 3, 4]);
}

#[rstest]
fn test_default_is_empty() {
    let list: SinglyLinkedList<String> = SinglyLinkedList::default();
    assert!(list.is_empty());
}

// =============================================================================
// Boundary insertion
// =============================================================================

#[rstest]
fn test_add_first_prepends() {
    let mut list = singly![2, 3];
    list.add_first(1);
    assert_eq!(collect(&list), vec![1, 2, 3]);
    assert_eq!(list.first(), Ok(&1));
}

#[rstest]
fn test_add_last_appends() {
    let mut list = singly![1, 2];
    list.add_last(3);
    assert_eq!(collect(&list), vec![1, 2, 3]);
    assert_eq!(list.last(), Ok(&3));
}

#[rstest]
fn test_first_insertion_is_both_ends() {
    let mut list = SinglyLinkedList::new();
    list.add_last(42);
    assert_eq!(list.first(), Ok(&42));
    assert_eq!(list.last(), Ok(&42));
}

#[rstest]
fn test_len_counts_insertions() {
    let mut list = SinglyLinkedList::new();
    for value in 0..25 {
        if value % 2 == 0 {
            list.add_last(value);
        } else {
            list.add_first(value);
        }
    }
    assert_eq!(list.len(), 25);
    assert_eq!(list.iter().count(), 25);
}

// =============================================================================
// Value-relative insertion
// =============================================================================

#[rstest]
fn test_add_before_middle() {
    let mut list = singly![1, 3];
    assert!(list.add_before(&3, 2));
    assert_eq!(collect(&list), vec![1, 2, 3]);
    assert_eq!(list.len(), 3);
}

#[rstest]
fn test_add_before_head() {
    let mut list = singly![2, 3];
    assert!(list.add_before(&2, 1));
    assert_eq!(list.first(), Ok(&1));
    assert_eq!(collect(&list), vec![1, 2, 3]);
}

#[rstest]
fn test_add_after_middle() {
    let mut list = singly![1, 3];
    assert!(list.add_after(&1, 2));
    assert_eq!(collect(&list), vec![1, 2, 3]);
}

#[rstest]
fn test_add_after_tail_then_add_last() {
    let mut list = singly![1, 2];
    assert!(list.add_after(&2, 3));
    list.add_last(4);
    assert_eq!(collect(&list), vec![1, 2, 3, 4]);
    assert_eq!(list.last(), Ok(&4));
}

#[rstest]
#[case::before(true)]
#[case::after(false)]
fn test_relative_insert_without_match_is_noop(#[case] before: bool) {
    let mut list = singly![1, 2, 3];
    let inserted = if before {
        list.add_before(&10, 0)
    } else {
        list.add_after(&10, 0)
    };
    assert!(!inserted);
    assert_eq!(collect(&list), vec![1, 2, 3]);
    assert_eq!(list.len(), 3);
}

#[rstest]
fn test_relative_insert_on_empty_is_noop() {
    let mut list: SinglyLinkedList<i32> = SinglyLinkedList::new();
    assert!(!list.add_before(&1, 0));
    assert!(!list.add_after(&1, 0));
    assert!(list.is_empty());
}

#[rstest]
fn test_add_after_uses_first_match() {
    let mut list = singly!["a", "b", "a"];
    list.add_after(&"a", "x");
    assert_eq!(collect(&list), vec!["a", "x", "b", "a"]);
}

// =============================================================================
// Removal
// =============================================================================

#[rstest]
fn test_remove_first_returns_head() {
    let mut list = singly![1, 2, 3];
    assert_eq!(list.remove_first(), Ok(1));
    assert_eq!(collect(&list), vec![2, 3]);
}

#[rstest]
fn test_remove_last_returns_tail() {
    let mut list = singly![1, 2, 3];
    assert_eq!(list.remove_last(), Ok(3));
    assert_eq!(collect(&list), vec![1, 2]);
    assert_eq!(list.last(), Ok(&2));
}

#[rstest]
fn test_remove_first_on_single_element_empties() {
    let mut list = singly![1];
    assert_eq!(list.remove_first(), Ok(1));
    assert!(list.is_empty());
    assert!(list.first().is_err());
    assert!(list.last().is_err());
}

#[rstest]
fn test_remove_on_empty_is_error() {
    let mut list: SinglyLinkedList<i32> = SinglyLinkedList::new();
    assert_eq!(
        list.remove_first(),
        Err(ContainerError::EmptyContainer {
            operation: "SinglyLinkedList::remove_first"
        })
    );
    assert!(matches!(
        list.remove_last(),
        Err(ContainerError::EmptyContainer { .. })
    ));
}

#[rstest]
#[case(1, vec![2, 3])]
#[case(2, vec![1, 3])]
#[case(3, vec![1, 2])]
fn test_remove_by_value(#[case] target: i32, #[case] expected: Vec<i32>) {
    let mut list = singly![1, 2, 3];
    assert!(list.remove(&target));
    assert_eq!(collect(&list), expected);
    assert_eq!(list.len(), 2);
}

#[rstest]
fn test_remove_by_value_missing_is_noop() {
    let mut list = singly![1, 2, 3];
    assert!(!list.remove(&4));
    assert_eq!(collect(&list), vec![1, 2, 3]);
}

#[rstest]
fn test_remove_tail_by_value_then_append() {
    let mut list = singly![1, 2];
    list.remove(&2);
    list.add_last(3);
    assert_eq!(collect(&list), vec![1, 3]);
}

#[rstest]
fn test_contains() {
    let list = singly!["red", "green"];
    assert!(list.contains(&"green"));
    assert!(!list.contains(&"blue"));
}

// =============================================================================
// Clear
// =============================================================================

#[rstest]
fn test_clear_empties_list() {
    let mut list = singly![1, 2, 3];
    list.clear();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert!(list.remove_first().is_err());
}

#[rstest]
fn test_clear_twice_is_same_as_once() {
    let mut list = singly![1, 2, 3];
    list.clear();
    list.clear();
    assert!(list.is_empty());
    assert_eq!(list, SinglyLinkedList::new());
}

#[rstest]
fn test_reuse_after_clear() {
    let mut list = singly![1, 2, 3];
    list.clear();
    list.add_last(9);
    assert_eq!(collect(&list), vec![9]);
}

// =============================================================================
// Concat
// =============================================================================

#[rstest]
fn test_concat_joins_in_order() {
    let first = singly![1, 2, 3];
    let second = singly![4, 5, 6];
    let joined = SinglyLinkedList::concat(&first, &second);
    assert_eq!(collect(&joined), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(collect(&first), vec![1, 2, 3]);
    assert_eq!(collect(&second), vec![4, 5, 6]);
}

#[rstest]
fn test_concat_with_empty() {
    let empty: SinglyLinkedList<i32> = SinglyLinkedList::new();
    let list = singly![1, 2];
    assert_eq!(SinglyLinkedList::concat(&empty, &list), list);
    assert_eq!(SinglyLinkedList::concat(&list, &empty), list);
    assert!(SinglyLinkedList::concat(&empty, &empty).is_empty());
}

#[rstest]
fn test_concat_is_independent_of_inputs() {
    let mut first = singly![String::from("a")];
    let second = singly![String::from("b")];
    let joined = SinglyLinkedList::concat(&first, &second);
    first.add_last(String::from("c"));
    assert_eq!(collect(&joined), vec!["a".to_string(), "b".to_string()]);
}

// =============================================================================
// Iteration and traits
// =============================================================================

#[rstest]
fn test_iteration_is_restartable() {
    let list = singly![1, 2, 3];
    let first_pass: Vec<i32> = list.iter().copied().collect();
    let second_pass: Vec<i32> = list.iter().copied().collect();
    assert_eq!(first_pass, second_pass);
}

#[rstest]
fn test_for_loop_over_reference() {
    let list = singly![1, 2, 3];
    let mut total = 0;
    for value in &list {
        total += value;
    }
    assert_eq!(total, 6);
}

#[rstest]
fn test_into_iter_consumes_in_order() {
    let list = singly![1, 2, 3];
    let values: Vec<i32> = list.into_iter().collect();
    assert_eq!(values, vec![1, 2, 3]);
}

#[rstest]
fn test_extend_appends() {
    let mut list = singly![1];
    list.extend([2, 3]);
    assert_eq!(collect(&list), vec![1, 2, 3]);
}

#[rstest]
fn test_equality_compares_elements() {
    assert_eq!(singly![1, 2, 3], singly![1, 2, 3]);
    assert_ne!(singly![1, 2, 3], singly![1, 2]);
    assert_ne!(singly![1, 2, 3], singly![3, 2, 1]);
}

#[rstest]
fn test_clone_is_deep() {
    let original = singly![1, 2];
    let mut copy = original.clone();
    copy.add_last(3);
    assert_eq!(original.len(), 2);
    assert_eq!(copy.len(), 3);
}

#[rstest]
fn test_display_and_debug() {
    let list = singly![1, 2, 3];
    assert_eq!(format!("{list}"), "[1, 2, 3]");
    assert_eq!(format!("{list:?}"), "[1, 2, 3]");
    let empty: SinglyLinkedList<i32> = singly![];
    assert_eq!(format!("{empty}"), "[]");
}
