//! Unit tests for PersistentHeap.
//!
//! These tests verify the correctness of the PersistentHeap implementation:
//! construction, ordering, persistence of every operation, and iteration.

#![cfg(feature = "persistent")]

use permafrost::persistent::{HeapOrder, PersistentHeap};
use rstest::rstest;

// =============================================================================
// Basic Construction Tests
// =============================================================================

#[rstest]
fn test_min_creates_empty_heap() {
    let heap: PersistentHeap<i32> = PersistentHeap::min();
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.peek(), None);
}

#[rstest]
fn test_max_creates_empty_heap() {
    let heap: PersistentHeap<i32> = PersistentHeap::max();
    assert!(heap.is_empty());
    assert_eq!(heap.peek(), None);
}

#[rstest]
fn test_default_is_a_min_heap() {
    let heap: PersistentHeap<i32> = PersistentHeap::default();
    let grown = heap.add(3).add(1).add(2);
    assert_eq!(grown.peek(), Some(&1));
}

#[rstest]
fn test_with_order_selects_the_ordering() {
    let min_heap: PersistentHeap<i32> = PersistentHeap::with_order(HeapOrder::Min);
    let max_heap: PersistentHeap<i32> = PersistentHeap::with_order(HeapOrder::Max);

    assert_eq!(min_heap.add(4).add(9).add(2).peek(), Some(&2));
    assert_eq!(max_heap.add(4).add(9).add(2).peek(), Some(&9));
}

#[rstest]
fn test_min_from_surfaces_the_smallest_element() {
    let heap = PersistentHeap::min_from(vec![5, 3, 7, 1, 4]);
    assert_eq!(heap.len(), 5);
    assert_eq!(heap.peek(), Some(&1));
}

#[rstest]
fn test_max_from_surfaces_the_largest_element() {
    let heap = PersistentHeap::max_from(vec![5, 3, 7, 1, 4]);
    assert_eq!(heap.peek(), Some(&7));
}

#[rstest]
fn test_from_empty_vec_creates_empty_heap() {
    let heap: PersistentHeap<i32> = PersistentHeap::min_from(Vec::new());
    assert!(heap.is_empty());
}

#[rstest]
fn test_from_vec_with_order_matches_dedicated_constructors() {
    let elements = vec![8, 6, 7, 5, 3, 0, 9];

    let min_heap = PersistentHeap::from_vec_with_order(elements.clone(), HeapOrder::Min);
    let max_heap = PersistentHeap::from_vec_with_order(elements, HeapOrder::Max);

    assert_eq!(min_heap.peek(), Some(&0));
    assert_eq!(max_heap.peek(), Some(&9));
}

// =============================================================================
// Add Tests
// =============================================================================

#[rstest]
fn test_add_increases_length_by_one() {
    let heap: PersistentHeap<i32> = PersistentHeap::min();
    let grown = heap.add(42);

    assert_eq!(grown.len(), 1);
    assert_eq!(grown.peek(), Some(&42));
}

#[rstest]
fn test_add_does_not_modify_original() {
    let heap = PersistentHeap::min_from(vec![3, 1, 2]);
    let grown = heap.add(0);

    // Original heap is unchanged
    assert_eq!(heap.len(), 3);
    assert_eq!(heap.peek(), Some(&1));
    // New heap has the new minimum
    assert_eq!(grown.len(), 4);
    assert_eq!(grown.peek(), Some(&0));
}

#[rstest]
fn test_add_smaller_element_becomes_new_root() {
    let heap = PersistentHeap::min_from(vec![5, 7, 9]);
    let grown = heap.add(1);
    assert_eq!(grown.peek(), Some(&1));
}

#[rstest]
fn test_add_larger_element_keeps_existing_root() {
    let heap = PersistentHeap::min_from(vec![5, 7, 9]);
    let grown = heap.add(100);
    assert_eq!(grown.peek(), Some(&5));
}

#[rstest]
fn test_add_duplicate_elements_are_kept() {
    let heap = PersistentHeap::min_from(vec![2, 1]);
    let grown = heap.add(1).add(2);

    assert_eq!(grown.len(), 4);
    let drained: Vec<i32> = grown.iter().collect();
    assert_eq!(drained, vec![1, 1, 2, 2]);
}

// =============================================================================
// Remove Tests
// =============================================================================

#[rstest]
fn test_remove_returns_root_and_remaining_heap() {
    let heap = PersistentHeap::min_from(vec![1, 3, 2]);
    let (smallest, rest) = heap.remove().unwrap();

    assert_eq!(smallest, 1);
    assert_eq!(rest.len(), 2);
    assert_eq!(rest.peek(), Some(&2));
}

#[rstest]
fn test_remove_does_not_modify_original() {
    let heap = PersistentHeap::min_from(vec![1, 3, 2]);
    let (_, rest) = heap.remove().unwrap();

    assert_eq!(heap.len(), 3);
    assert_eq!(heap.peek(), Some(&1));
    assert_eq!(rest.len(), 2);
}

#[rstest]
fn test_remove_on_empty_heap_returns_none() {
    let heap: PersistentHeap<i32> = PersistentHeap::min();
    assert!(heap.remove().is_none());
}

#[rstest]
fn test_remove_on_singleton_leaves_empty_heap() {
    let heap = PersistentHeap::min_from(vec![7]);
    let (element, rest) = heap.remove().unwrap();

    assert_eq!(element, 7);
    assert!(rest.is_empty());
}

#[rstest]
fn test_remove_drains_duplicates_one_at_a_time() {
    let heap = PersistentHeap::min_from(vec![4, 4, 4]);

    let (first, rest) = heap.remove().unwrap();
    let (second, rest) = rest.remove().unwrap();
    let (third, rest) = rest.remove().unwrap();

    assert_eq!((first, second, third), (4, 4, 4));
    assert!(rest.is_empty());
    assert!(rest.remove().is_none());
}

#[rstest]
fn test_repeated_remove_yields_ascending_order() {
    let mut current = PersistentHeap::min_from(vec![9, 4, 8, 1, 7, 2]);
    let mut drained = Vec::new();

    while let Some((element, rest)) = current.remove() {
        drained.push(element);
        current = rest;
    }

    assert_eq!(drained, vec![1, 2, 4, 7, 8, 9]);
}

// =============================================================================
// Clear Tests
// =============================================================================

#[rstest]
fn test_clear_empties_the_heap() {
    let heap = PersistentHeap::min_from(vec![1, 2, 3]);
    let emptied = heap.clear();

    assert!(emptied.is_empty());
    assert_eq!(heap.len(), 3);
}

#[rstest]
fn test_clear_preserves_the_comparator() {
    let heap = PersistentHeap::max_from(vec![1, 2, 3]);
    let refilled = heap.clear().add(4).add(9).add(6);

    assert_eq!(refilled.peek(), Some(&9));
}

// =============================================================================
// Custom Comparator Tests
// =============================================================================

#[rstest]
fn test_with_comparator_orders_by_the_given_relation() {
    let heap = PersistentHeap::with_comparator(|a: &i32, b: &i32| b.cmp(a))
        .add(3)
        .add(8)
        .add(5);

    assert_eq!(heap.peek(), Some(&8));
}

#[rstest]
fn test_from_vec_with_comparator_orders_tuples_by_key() {
    let heap = PersistentHeap::from_vec_with_comparator(
        vec![(2, "deploy"), (1, "build"), (3, "notify")],
        |a: &(i32, &str), b: &(i32, &str)| a.0.cmp(&b.0),
    );

    assert_eq!(heap.peek(), Some(&(1, "build")));
}

#[rstest]
fn test_comparator_survives_add_and_remove() {
    let heap = PersistentHeap::with_comparator(|a: &String, b: &String| a.len().cmp(&b.len()))
        .add("persistent".to_string())
        .add("heap".to_string())
        .add("of".to_string());

    let (shortest, rest) = heap.remove().unwrap();

    assert_eq!(shortest, "of");
    assert_eq!(rest.peek().map(String::as_str), Some("heap"));
}

// =============================================================================
// Iteration Tests
// =============================================================================

#[rstest]
fn test_iter_yields_ascending_order_for_min_heap() {
    let heap = PersistentHeap::min_from(vec![5, 3, 7, 1, 4]);
    let drained: Vec<i32> = heap.iter().collect();

    assert_eq!(drained, vec![1, 3, 4, 5, 7]);
}

#[rstest]
fn test_iter_yields_descending_order_for_max_heap() {
    let heap = PersistentHeap::max_from(vec![5, 3, 7, 1, 4]);
    let drained: Vec<i32> = heap.iter().collect();

    assert_eq!(drained, vec![7, 5, 4, 3, 1]);
}

#[rstest]
fn test_iter_does_not_consume_the_heap() {
    let heap = PersistentHeap::min_from(vec![2, 1, 3]);

    let first_pass: Vec<i32> = heap.iter().collect();
    let second_pass: Vec<i32> = heap.iter().collect();

    assert_eq!(first_pass, second_pass);
    assert_eq!(heap.len(), 3);
}

#[rstest]
fn test_iter_reports_exact_length() {
    let heap = PersistentHeap::min_from(vec![4, 2, 6, 8]);
    let mut iterator = heap.iter();

    assert_eq!(iterator.len(), 4);
    iterator.next();
    assert_eq!(iterator.len(), 3);
}

#[rstest]
fn test_into_iterator_drains_owned_heap() {
    let heap = PersistentHeap::min_from(vec![3, 1, 2]);
    let drained: Vec<i32> = heap.into_iter().collect();

    assert_eq!(drained, vec![1, 2, 3]);
}

#[rstest]
fn test_borrowed_into_iterator_supports_for_loops() {
    let heap = PersistentHeap::min_from(vec![3, 1, 2]);
    let mut drained = Vec::new();

    for element in &heap {
        drained.push(element);
    }

    assert_eq!(drained, vec![1, 2, 3]);
    assert_eq!(heap.len(), 3);
}

#[rstest]
fn test_into_sorted_vec_matches_comparator_order() {
    let min_sorted = PersistentHeap::min_from(vec![2, 9, 4]).into_sorted_vec();
    let max_sorted = PersistentHeap::max_from(vec![2, 9, 4]).into_sorted_vec();

    assert_eq!(min_sorted, vec![2, 4, 9]);
    assert_eq!(max_sorted, vec![9, 4, 2]);
}

// =============================================================================
// FromIterator Tests
// =============================================================================

#[rstest]
fn test_collect_builds_a_min_heap() {
    let heap: PersistentHeap<i32> = vec![6, 2, 8, 4].into_iter().collect();

    assert_eq!(heap.len(), 4);
    assert_eq!(heap.peek(), Some(&2));
}

#[rstest]
fn test_collect_from_range() {
    let heap: PersistentHeap<i32> = (1..=100).rev().collect();
    assert_eq!(heap.peek(), Some(&1));
}

// =============================================================================
// Formatting Tests
// =============================================================================

#[rstest]
fn test_display_lists_elements_in_comparator_order() {
    let heap = PersistentHeap::min_from(vec![3, 1, 2]);
    assert_eq!(format!("{heap}"), "[1, 2, 3]");
}

#[rstest]
fn test_display_of_empty_heap() {
    let heap: PersistentHeap<i32> = PersistentHeap::min();
    assert_eq!(format!("{heap}"), "[]");
}

#[rstest]
fn test_debug_of_empty_heap() {
    let heap: PersistentHeap<i32> = PersistentHeap::min();
    assert_eq!(format!("{heap:?}"), "[]");
}

// =============================================================================
// Persistence Chain Tests
// =============================================================================

#[rstest]
fn test_every_version_remains_usable() {
    let empty: PersistentHeap<i32> = PersistentHeap::min();
    let one = empty.add(5);
    let two = one.add(3);
    let three = two.add(7);

    assert_eq!(empty.len(), 0);
    assert_eq!(one.peek(), Some(&5));
    assert_eq!(two.peek(), Some(&3));
    assert_eq!(three.peek(), Some(&3));
    assert_eq!(three.len(), 3);
}

#[rstest]
fn test_clone_shares_nothing_observable() {
    let heap = PersistentHeap::min_from(vec![2, 1]);
    let cloned = heap.clone();

    let grown = cloned.add(0);

    assert_eq!(heap.peek(), Some(&1));
    assert_eq!(grown.peek(), Some(&0));
}

#[rstest]
fn test_heap_of_strings() {
    let heap = PersistentHeap::min_from(vec![
        "pear".to_string(),
        "apple".to_string(),
        "quince".to_string(),
    ]);

    assert_eq!(heap.peek().map(String::as_str), Some("apple"));

    let drained: Vec<String> = heap.iter().collect();
    assert_eq!(drained, vec!["apple", "pear", "quince"]);
}
