//! # permafrost
//!
//! Persistent (immutable) data structures and adaptive sorting/searching
//! suites with value semantics.
//!
//! ## Overview
//!
//! Every structure in this library is a value: a "mutating" operation returns
//! a new, independent instance and leaves the receiver untouched. On top of
//! the structures, the crate ships classic comparison-based algorithms and
//! adaptive dispatchers that pick an algorithm from the shape of the input.
//! It includes:
//!
//! - **Heap family**: a comparator-parameterized persistent binary heap with
//!   min/max/custom orderings
//! - **Priority queues**: [`PriorityQueue`](persistent::PriorityQueue) and
//!   [`MaxPriorityQueue`](persistent::MaxPriorityQueue) with
//!   enqueue/dequeue vocabulary
//! - **Persistent containers**: singly-linked list, binary search tree,
//!   prefix trie, and n-ary tree, all with structural sharing
//! - **Sorting suite**: quick, merge, heap, insertion, and counting sorts,
//!   plus an adaptive [`sort`](sorting::sort) dispatcher
//! - **Searching suite**: linear, binary, jump, interpolation, and
//!   exponential searches with comparison counting, plus adaptive
//!   [`search`](searching::search) dispatchers
//!
//! ## Feature Flags
//!
//! - `persistent`: Persistent data structures (heap, queues, list, trees)
//! - `sorting`: Sorting algorithms and the adaptive `sort` dispatcher
//! - `searching`: Searching algorithms and the adaptive `search` dispatchers
//!   (implies `sorting`)
//! - `arc`: Use `Arc` instead of `Rc` for internal sharing, making the
//!   structures `Send`/`Sync` when their elements are
//!
//! ## Example
//!
//! ```rust
//! use permafrost::prelude::*;
//!
//! let heap = PersistentHeap::min_from(vec![5, 3, 7, 1, 4]);
//! let drained: Vec<i32> = heap.iter().collect();
//! assert_eq!(drained, vec![1, 3, 4, 5, 7]);
//!
//! // The original heap is unchanged by iteration and by add
//! let bigger = heap.add(0);
//! assert_eq!(heap.len(), 5);
//! assert_eq!(bigger.peek(), Some(&0));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use permafrost::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;

    #[cfg(feature = "sorting")]
    pub use crate::sorting::*;

    #[cfg(feature = "searching")]
    pub use crate::searching::*;
}

#[cfg(feature = "persistent")]
pub mod persistent;

#[cfg(feature = "sorting")]
pub mod sorting;

#[cfg(feature = "searching")]
pub mod searching;
