//! Persistent (immutable) collection types.
//!
//! Every structure in this module follows the same contract: a value is never
//! mutated after construction, and every "mutating" operation returns a new
//! structure while leaving the receiver untouched. Structures that are cheap
//! to share structurally (lists and trees) share unchanged interior nodes
//! between versions through reference counting; the array-backed structures
//! (heaps and priority queues) copy their backing storage on write instead,
//! which keeps element access contiguous and cache friendly.
//!
//! # Provided structures
//!
//! - [`PersistentHeap`]: comparator-parameterized binary heap.
//! - [`PriorityQueue`] / [`MaxPriorityQueue`]: queue fronts over a binary
//!   heap layout.
//! - [`PersistentList`]: singly linked list with O(1) front operations.
//! - [`PersistentSearchTree`]: binary search tree with path copying.
//! - [`PersistentTrie`]: prefix tree over string keys.
//! - [`PersistentGeneralTree`]: n-ary tree with pre-order and level-order
//!   traversal.
//!
//! # Thread safety
//!
//! With the `arc` feature enabled the shared interior pointers switch from
//! [`std::rc::Rc`] to [`std::sync::Arc`], and stored comparators are required
//! to be `Send + Sync`, so whole structures can be handed to other threads.
//!
//! # Examples
//!
//! ```rust
//! use permafrost::persistent::PersistentHeap;
//!
//! let heap = PersistentHeap::min_from(vec![5, 3, 7]);
//! let grown = heap.add(1);
//!
//! assert_eq!(heap.peek(), Some(&3));
//! assert_eq!(grown.peek(), Some(&1));
//! ```

use core::cmp::Ordering;

// =============================================================================
// Shared Pointer Alias
// =============================================================================

/// Reference-counted pointer used for interior sharing.
///
/// Resolves to [`std::sync::Arc`] when the `arc` feature is enabled.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

/// Reference-counted pointer used for interior sharing.
///
/// Resolves to [`std::rc::Rc`] by default.
#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

// =============================================================================
// Comparator Contract
// =============================================================================

/// Comparison function bound accepted by comparator-parameterized structures.
///
/// A comparator is any function or closure that realizes a total order by
/// mapping a pair of element references to an [`Ordering`]. The bound is
/// blanket-implemented, so ordinary closures satisfy it without ceremony:
///
/// ```rust
/// use permafrost::persistent::PersistentHeap;
///
/// let by_length = PersistentHeap::with_comparator(|a: &String, b: &String| {
///     a.len().cmp(&b.len())
/// });
/// assert!(by_length.is_empty());
/// ```
///
/// With the `arc` feature enabled the structure holding the comparator may
/// cross thread boundaries, so `Send + Sync` become part of the bound.
#[cfg(feature = "arc")]
pub trait ComparatorFn<T>: Fn(&T, &T) -> Ordering + Send + Sync + 'static {}

#[cfg(feature = "arc")]
impl<T, F> ComparatorFn<T> for F where F: Fn(&T, &T) -> Ordering + Send + Sync + 'static {}

/// Comparison function bound accepted by comparator-parameterized structures.
///
/// A comparator is any function or closure that realizes a total order by
/// mapping a pair of element references to an [`Ordering`]. The bound is
/// blanket-implemented, so ordinary closures satisfy it without ceremony:
///
/// ```rust
/// use permafrost::persistent::PersistentHeap;
///
/// let by_length = PersistentHeap::with_comparator(|a: &String, b: &String| {
///     a.len().cmp(&b.len())
/// });
/// assert!(by_length.is_empty());
/// ```
#[cfg(not(feature = "arc"))]
pub trait ComparatorFn<T>: Fn(&T, &T) -> Ordering + 'static {}

#[cfg(not(feature = "arc"))]
impl<T, F> ComparatorFn<T> for F where F: Fn(&T, &T) -> Ordering + 'static {}

/// Shared handle to an erased comparator.
#[cfg(feature = "arc")]
pub(crate) type Comparator<T> = ReferenceCounter<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// Shared handle to an erased comparator.
#[cfg(not(feature = "arc"))]
pub(crate) type Comparator<T> = ReferenceCounter<dyn Fn(&T, &T) -> Ordering>;

// =============================================================================
// Modules
// =============================================================================

mod general_tree;
mod heap;
mod list;
mod priority_queue;
mod search_tree;
mod trie;

pub use general_tree::{
    PersistentGeneralTree, PersistentGeneralTreeBreadthFirstIterator,
    PersistentGeneralTreeIterator,
};
pub use heap::{HeapOrder, PersistentHeap, PersistentHeapIterator};
pub use list::{PersistentList, PersistentListIntoIterator, PersistentListIterator};
pub use priority_queue::{
    MaxPriorityQueue, MaxPriorityQueueIterator, PriorityQueue, PriorityQueueIterator,
};
pub use search_tree::{PersistentSearchTree, PersistentSearchTreeIterator};
pub use trie::PersistentTrie;

// =============================================================================
// Thread-Safety Assertions
// =============================================================================

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(PersistentHeap<i32>: Send, Sync);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(PriorityQueue<String>: Send, Sync);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(PersistentList<i32>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(PersistentHeap<i32>: Send, Sync);
#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(PersistentList<i32>: Send, Sync);
