//! Unit tests for PersistentGeneralTree.
//!
//! These tests verify parent addressing, subtree removal, both traversal
//! orders, and persistence across versions.

#![cfg(feature = "persistent")]

use permafrost::persistent::PersistentGeneralTree;
use rstest::rstest;

/// Builds the tree `1 -> (2 -> (4, 5), 3)`.
fn sample_tree() -> PersistentGeneralTree<i32> {
    PersistentGeneralTree::with_root(1)
        .insert_below(&1, 2)
        .unwrap()
        .insert_below(&1, 3)
        .unwrap()
        .insert_below(&2, 4)
        .unwrap()
        .insert_below(&2, 5)
        .unwrap()
}

// =============================================================================
// Basic Construction Tests
// =============================================================================

#[rstest]
fn test_new_creates_empty_tree() {
    let tree: PersistentGeneralTree<i32> = PersistentGeneralTree::new();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
}

#[rstest]
fn test_default_creates_empty_tree() {
    let tree: PersistentGeneralTree<i32> = PersistentGeneralTree::default();
    assert!(tree.is_empty());
}

#[rstest]
fn test_with_root_creates_tree_of_one() {
    let tree = PersistentGeneralTree::with_root(1);
    assert_eq!(tree.len(), 1);
    assert!(tree.contains(&1));
}

// =============================================================================
// insert_below Tests
// =============================================================================

#[rstest]
fn test_insert_below_root() {
    let tree = PersistentGeneralTree::with_root(1).insert_below(&1, 2).unwrap();

    assert_eq!(tree.len(), 2);
    assert!(tree.contains(&2));
}

#[rstest]
fn test_insert_below_nested_child() {
    let tree = sample_tree().insert_below(&4, 6).unwrap();

    assert_eq!(tree.len(), 6);
    let pre_order: Vec<&i32> = tree.iter().collect();
    assert_eq!(pre_order, vec![&1, &2, &4, &6, &5, &3]);
}

#[rstest]
fn test_insert_below_absent_parent_returns_none() {
    assert!(sample_tree().insert_below(&99, 6).is_none());
}

#[rstest]
fn test_insert_below_on_empty_tree_returns_none() {
    let tree: PersistentGeneralTree<i32> = PersistentGeneralTree::new();
    assert!(tree.insert_below(&1, 2).is_none());
}

#[rstest]
fn test_insert_below_first_match_in_pre_order_wins() {
    // Two nodes are valued 2: the root's child and the grandchild below it.
    let tree = PersistentGeneralTree::with_root(1)
        .insert_below(&1, 2)
        .unwrap()
        .insert_below(&2, 2)
        .unwrap();

    let grown = tree.insert_below(&2, 9).unwrap();
    let pre_order: Vec<&i32> = grown.iter().collect();

    assert_eq!(pre_order, vec![&1, &2, &2, &9]);
}

#[rstest]
fn test_insert_below_does_not_modify_original() {
    let tree = sample_tree();
    let _grown = tree.insert_below(&3, 6).unwrap();

    assert_eq!(tree.len(), 5);
    assert!(!tree.contains(&6));
}

// =============================================================================
// Traversal Tests
// =============================================================================

#[rstest]
fn test_iter_yields_pre_order() {
    let tree = sample_tree();
    let pre_order: Vec<&i32> = tree.iter().collect();
    assert_eq!(pre_order, vec![&1, &2, &4, &5, &3]);
}

#[rstest]
fn test_breadth_first_yields_level_order() {
    let tree = sample_tree();
    let level_order: Vec<&i32> = tree.breadth_first().collect();
    assert_eq!(level_order, vec![&1, &2, &3, &4, &5]);
}

#[rstest]
fn test_traversals_of_empty_tree_are_empty() {
    let tree: PersistentGeneralTree<i32> = PersistentGeneralTree::new();
    assert_eq!(tree.iter().count(), 0);
    assert_eq!(tree.breadth_first().count(), 0);
}

#[rstest]
fn test_iter_reports_exact_length() {
    let tree = sample_tree();
    let mut iterator = tree.iter();

    assert_eq!(iterator.len(), 5);
    iterator.next();
    assert_eq!(iterator.len(), 4);
}

#[rstest]
fn test_contains_visits_the_whole_tree() {
    let tree = sample_tree();

    for present in [1, 2, 3, 4, 5] {
        assert!(tree.contains(&present));
    }
    assert!(!tree.contains(&6));
}

// =============================================================================
// Remove Tests
// =============================================================================

#[rstest]
fn test_remove_leaf_node() {
    let tree = sample_tree().remove(&5).unwrap();

    assert_eq!(tree.len(), 4);
    let pre_order: Vec<&i32> = tree.iter().collect();
    assert_eq!(pre_order, vec![&1, &2, &4, &3]);
}

#[rstest]
fn test_remove_takes_the_whole_subtree() {
    let tree = sample_tree().remove(&2).unwrap();

    assert_eq!(tree.len(), 2);
    assert!(!tree.contains(&4));
    assert!(!tree.contains(&5));
    let pre_order: Vec<&i32> = tree.iter().collect();
    assert_eq!(pre_order, vec![&1, &3]);
}

#[rstest]
fn test_remove_root_empties_the_tree() {
    let tree = sample_tree().remove(&1).unwrap();
    assert!(tree.is_empty());
}

#[rstest]
fn test_remove_absent_value_returns_none() {
    assert!(sample_tree().remove(&99).is_none());
}

#[rstest]
fn test_remove_does_not_modify_original() {
    let tree = sample_tree();
    let _pruned = tree.remove(&2);

    assert_eq!(tree.len(), 5);
    assert!(tree.contains(&4));
}

// =============================================================================
// Equality Tests
// =============================================================================

#[rstest]
fn test_trees_with_same_structure_are_equal() {
    assert_eq!(sample_tree(), sample_tree());
}

#[rstest]
fn test_structure_matters_for_equality() {
    // Same values, different shapes: a chain versus a star.
    let chain = PersistentGeneralTree::with_root(1)
        .insert_below(&1, 2)
        .unwrap()
        .insert_below(&2, 3)
        .unwrap();
    let star = PersistentGeneralTree::with_root(1)
        .insert_below(&1, 2)
        .unwrap()
        .insert_below(&1, 3)
        .unwrap();

    assert_ne!(chain, star);
}

#[rstest]
fn test_child_order_matters_for_equality() {
    let left_first = PersistentGeneralTree::with_root(1)
        .insert_below(&1, 2)
        .unwrap()
        .insert_below(&1, 3)
        .unwrap();
    let right_first = PersistentGeneralTree::with_root(1)
        .insert_below(&1, 3)
        .unwrap()
        .insert_below(&1, 2)
        .unwrap();

    assert_ne!(left_first, right_first);
}

#[rstest]
fn test_empty_trees_are_equal() {
    let tree1: PersistentGeneralTree<i32> = PersistentGeneralTree::new();
    let tree2: PersistentGeneralTree<i32> = PersistentGeneralTree::new();
    assert_eq!(tree1, tree2);
}

// =============================================================================
// Formatting Tests
// =============================================================================

#[rstest]
fn test_debug_lists_values_in_pre_order() {
    assert_eq!(format!("{:?}", sample_tree()), "[1, 2, 4, 5, 3]");
}

// =============================================================================
// Ownership Tests
// =============================================================================

#[rstest]
fn test_tree_of_strings() {
    let tree = PersistentGeneralTree::with_root("root".to_string())
        .insert_below(&"root".to_string(), "left".to_string())
        .unwrap()
        .insert_below(&"root".to_string(), "right".to_string())
        .unwrap();

    assert_eq!(tree.len(), 3);
    assert!(tree.contains(&"left".to_string()));

    let level_order: Vec<&String> = tree.breadth_first().collect();
    assert_eq!(level_order, vec!["root", "left", "right"]);
}
