//! Integration tests for thread-safe persistent data structures.
//!
//! These tests verify that the persistent structures work correctly with
//! the `arc` feature enabled, sharing immutable data across threads and
//! deriving independent versions concurrently.

#![cfg(all(feature = "persistent", feature = "arc"))]

use permafrost::persistent::{
    PersistentGeneralTree, PersistentHeap, PersistentList, PersistentSearchTree, PersistentTrie,
    PriorityQueue,
};
use rstest::rstest;
use std::sync::Arc;
use std::thread;

// =============================================================================
// PersistentHeap Integration Tests
// =============================================================================

#[rstest]
fn test_heap_cross_thread_versioning() {
    let original = Arc::new(PersistentHeap::min_from(vec![5, 3, 7]));

    let handles: Vec<_> = (0..4)
        .map(|index| {
            let heap = Arc::clone(&original);
            thread::spawn(move || {
                // Each thread derives its own version
                let grown = heap.add(index);
                assert_eq!(grown.len(), 4);
                // Original should be unchanged
                assert_eq!(heap.len(), 3);
                assert_eq!(heap.peek(), Some(&3));
                grown.peek().copied()
            })
        })
        .collect();

    let minima: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().expect("Thread panicked"))
        .collect();

    assert_eq!(minima, vec![Some(0), Some(1), Some(2), Some(3)]);
    assert_eq!(original.len(), 3);
}

#[rstest]
fn test_heap_concurrent_draining() {
    let shared: Arc<PersistentHeap<i32>> = Arc::new((0..100).rev().collect());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let heap = Arc::clone(&shared);
            thread::spawn(move || {
                let drained: Vec<i32> = heap.iter().collect();
                drained
            })
        })
        .collect();

    let expected: Vec<i32> = (0..100).collect();
    for handle in handles {
        assert_eq!(handle.join().expect("Thread panicked"), expected);
    }
}

// =============================================================================
// PriorityQueue Integration Tests
// =============================================================================

#[rstest]
fn test_queue_cross_thread_enqueue() {
    let original = Arc::new(PriorityQueue::from_vec(vec![50, 30, 70]));

    let handles: Vec<_> = (0..4)
        .map(|index| {
            let queue = Arc::clone(&original);
            thread::spawn(move || {
                let grown = queue.enqueue(index);
                let (front, _) = grown.dequeue().expect("queue cannot be empty");
                front
            })
        })
        .collect();

    let fronts: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().expect("Thread panicked"))
        .collect();

    assert_eq!(fronts, vec![0, 1, 2, 3]);
    assert_eq!(original.peek(), Some(&30));
}

// =============================================================================
// PersistentList Integration Tests
// =============================================================================

#[rstest]
fn test_list_cross_thread_structural_sharing() {
    let original = Arc::new(PersistentList::from_slice(&[1, 2, 3]));

    let handles: Vec<_> = (0..4)
        .map(|index| {
            let list = Arc::clone(&original);
            thread::spawn(move || {
                // Each thread creates a new version by prepending
                let extended = list.push_front(index * 10);
                assert_eq!(extended.front(), Some(&(index * 10)));
                assert_eq!(extended.len(), 4);
                // Original should be unchanged
                assert_eq!(list.len(), 3);
                extended
            })
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().expect("Thread panicked"))
        .collect();

    // Verify each thread created an independent list
    for (index, list) in results.iter().enumerate() {
        assert_eq!(list.front(), Some(&(i32::try_from(index).unwrap() * 10)));
    }

    // Original should still be unchanged
    assert_eq!(original.len(), 3);
    assert_eq!(original.front(), Some(&1));
}

// =============================================================================
// PersistentSearchTree Integration Tests
// =============================================================================

#[rstest]
fn test_search_tree_cross_thread_inserts() {
    let original = Arc::new(PersistentSearchTree::from_slice(&[50, 25, 75]));

    let handles: Vec<_> = (0..4)
        .map(|index| {
            let tree = Arc::clone(&original);
            thread::spawn(move || {
                let grown = tree.insert(index);
                assert!(grown.contains(&index));
                assert_eq!(tree.len(), 3);
                grown.len()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("Thread panicked"), 4);
    }

    assert!(!original.contains(&0));
}

// =============================================================================
// PersistentTrie Integration Tests
// =============================================================================

#[rstest]
fn test_trie_cross_thread_inserts() {
    let original = Arc::new(PersistentTrie::new().insert("shared"));

    let words = ["alpha", "beta", "gamma", "delta"];
    let handles: Vec<_> = words
        .iter()
        .map(|&word| {
            let trie = Arc::clone(&original);
            thread::spawn(move || {
                let grown = trie.insert(word);
                assert!(grown.contains(word));
                assert!(grown.contains("shared"));
                assert_eq!(trie.len(), 1);
                grown.len()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("Thread panicked"), 2);
    }
}

// =============================================================================
// PersistentGeneralTree Integration Tests
// =============================================================================

#[rstest]
fn test_general_tree_cross_thread_growth() {
    let original = Arc::new(
        PersistentGeneralTree::with_root(0)
            .insert_below(&0, 1)
            .unwrap(),
    );

    let handles: Vec<_> = (10..14)
        .map(|value| {
            let tree = Arc::clone(&original);
            thread::spawn(move || {
                let grown = tree.insert_below(&1, value).expect("parent must exist");
                assert_eq!(grown.len(), 3);
                assert_eq!(tree.len(), 2);
                grown.contains(&value)
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().expect("Thread panicked"));
    }

    assert_eq!(original.len(), 2);
}
