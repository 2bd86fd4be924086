//! Persistent (immutable) n-ary tree.
//!
//! This module provides [`PersistentGeneralTree`], an immutable rose tree
//! where every node may carry any number of children.
//!
//! # Overview
//!
//! Mutating operations locate their target by value in pre-order and copy
//! only the nodes on the path from the root to that target; all other
//! subtrees are shared with the previous version. Two traversal orders are
//! offered: depth-first pre-order ([`iter`]) and level-order
//! ([`breadth_first`]).
//!
//! [`iter`]: PersistentGeneralTree::iter
//! [`breadth_first`]: PersistentGeneralTree::breadth_first
//!
//! # Examples
//!
//! ```rust
//! use permafrost::persistent::PersistentGeneralTree;
//!
//! let tree = PersistentGeneralTree::with_root("root")
//!     .insert_below(&"root", "left")
//!     .and_then(|tree| tree.insert_below(&"root", "right"))
//!     .and_then(|tree| tree.insert_below(&"left", "leaf"))
//!     .unwrap();
//!
//! let pre_order: Vec<&&str> = tree.iter().collect();
//! assert_eq!(pre_order, vec![&"root", &"left", &"leaf", &"right"]);
//!
//! let level_order: Vec<&&str> = tree.breadth_first().collect();
//! assert_eq!(level_order, vec![&"root", &"left", &"right", &"leaf"]);
//! ```

use std::collections::VecDeque;
use std::fmt;

use super::ReferenceCounter;

// =============================================================================
// Node Definition
// =============================================================================

/// Internal node structure for the general tree.
#[derive(Clone)]
struct Node<T> {
    value: T,
    children: Vec<ReferenceCounter<Self>>,
}

impl<T> Node<T> {
    /// Creates a new node with no children.
    const fn leaf(value: T) -> Self {
        Self {
            value,
            children: Vec::new(),
        }
    }
}

/// Helper function to compare two subtrees structurally.
fn nodes_equal<T: PartialEq>(a: &Node<T>, b: &Node<T>) -> bool {
    a.value == b.value
        && a.children.len() == b.children.len()
        && a.children
            .iter()
            .zip(b.children.iter())
            .all(|(left, right)| nodes_equal(left.as_ref(), right.as_ref()))
}

/// Helper function to count the nodes of a subtree.
fn subtree_size<T>(node: &Node<T>) -> usize {
    1 + node
        .children
        .iter()
        .map(|child| subtree_size(child.as_ref()))
        .sum::<usize>()
}

/// Helper function to search a subtree in pre-order.
fn node_contains<T: PartialEq>(node: &Node<T>, value: &T) -> bool {
    node.value == *value
        || node
            .children
            .iter()
            .any(|child| node_contains(child.as_ref(), value))
}

/// Helper function to collect a subtree's values in pre-order.
fn collect_pre_order<'a, T>(node: &'a Node<T>, values: &mut Vec<&'a T>) {
    values.push(&node.value);
    for child in &node.children {
        collect_pre_order(child.as_ref(), values);
    }
}

// =============================================================================
// PersistentGeneralTree Definition
// =============================================================================

/// A persistent (immutable) n-ary tree.
///
/// `PersistentGeneralTree` is an immutable data structure that uses
/// structural sharing to efficiently support functional programming
/// patterns. Nodes are addressed by value; when several nodes carry the same
/// value, the first one in pre-order is the one addressed.
///
/// # Time Complexity
///
/// | Operation      | Complexity |
/// |----------------|------------|
/// | `new`          | O(1)       |
/// | `with_root`    | O(1)       |
/// | `insert_below` | O(n)       |
/// | `remove`       | O(n)       |
/// | `contains`     | O(n)       |
/// | `len`          | O(1)       |
/// | `is_empty`     | O(1)       |
///
/// # Examples
///
/// ```rust
/// use permafrost::persistent::PersistentGeneralTree;
///
/// let tree = PersistentGeneralTree::with_root(1);
/// let grown = tree.insert_below(&1, 2).unwrap();
///
/// assert_eq!(tree.len(), 1);  // Original unchanged
/// assert_eq!(grown.len(), 2); // New version
/// ```
#[derive(Clone)]
pub struct PersistentGeneralTree<T> {
    /// Root node of the tree.
    root: Option<ReferenceCounter<Node<T>>>,
    /// Cached node count.
    length: usize,
}

impl<T> PersistentGeneralTree<T> {
    /// Creates a new empty tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentGeneralTree;
    ///
    /// let tree: PersistentGeneralTree<i32> = PersistentGeneralTree::new();
    /// assert!(tree.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            root: None,
            length: 0,
        }
    }

    /// Creates a tree containing a single root node.
    ///
    /// # Arguments
    ///
    /// * `value` - The value of the root node
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentGeneralTree;
    ///
    /// let tree = PersistentGeneralTree::with_root(1);
    /// assert_eq!(tree.len(), 1);
    /// assert!(tree.contains(&1));
    /// ```
    #[must_use]
    pub fn with_root(value: T) -> Self {
        Self {
            root: Some(ReferenceCounter::new(Node::leaf(value))),
            length: 1,
        }
    }

    /// Returns the number of nodes in the tree.
    ///
    /// # Complexity
    ///
    /// O(1) - the count is cached
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentGeneralTree;
    ///
    /// let tree = PersistentGeneralTree::with_root(1)
    ///     .insert_below(&1, 2)
    ///     .unwrap();
    /// assert_eq!(tree.len(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the tree contains no nodes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentGeneralTree;
    ///
    /// let empty: PersistentGeneralTree<i32> = PersistentGeneralTree::new();
    /// assert!(empty.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns `true` if any node carries the given value.
    ///
    /// # Arguments
    ///
    /// * `value` - The value to look for
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentGeneralTree;
    ///
    /// let tree = PersistentGeneralTree::with_root(1)
    ///     .insert_below(&1, 2)
    ///     .unwrap();
    /// assert!(tree.contains(&2));
    /// assert!(!tree.contains(&3));
    /// ```
    #[must_use]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.root
            .as_ref()
            .is_some_and(|root| node_contains(root.as_ref(), value))
    }

    /// Returns an iterator over references to the values in pre-order.
    ///
    /// Each node is visited before its children; children are visited left
    /// to right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentGeneralTree;
    ///
    /// let tree = PersistentGeneralTree::with_root(1)
    ///     .insert_below(&1, 2)
    ///     .and_then(|tree| tree.insert_below(&1, 3))
    ///     .unwrap();
    ///
    /// let pre_order: Vec<&i32> = tree.iter().collect();
    /// assert_eq!(pre_order, vec![&1, &2, &3]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> PersistentGeneralTreeIterator<'_, T> {
        let mut values = Vec::with_capacity(self.length);
        if let Some(root) = self.root.as_ref() {
            collect_pre_order(root.as_ref(), &mut values);
        }
        PersistentGeneralTreeIterator {
            values,
            current_index: 0,
        }
    }

    /// Returns an iterator over references to the values in level order.
    ///
    /// Nodes are visited top to bottom, left to right within each level.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentGeneralTree;
    ///
    /// let tree = PersistentGeneralTree::with_root(1)
    ///     .insert_below(&1, 2)
    ///     .and_then(|tree| tree.insert_below(&1, 3))
    ///     .and_then(|tree| tree.insert_below(&2, 4))
    ///     .unwrap();
    ///
    /// let level_order: Vec<&i32> = tree.breadth_first().collect();
    /// assert_eq!(level_order, vec![&1, &2, &3, &4]);
    /// ```
    #[must_use]
    pub fn breadth_first(&self) -> PersistentGeneralTreeBreadthFirstIterator<'_, T> {
        let mut values = Vec::with_capacity(self.length);
        let mut queue: VecDeque<&Node<T>> = VecDeque::new();
        if let Some(root) = self.root.as_ref() {
            queue.push_back(root.as_ref());
        }

        while let Some(node) = queue.pop_front() {
            values.push(&node.value);
            for child in &node.children {
                queue.push_back(child.as_ref());
            }
        }

        PersistentGeneralTreeBreadthFirstIterator {
            values,
            current_index: 0,
        }
    }
}

impl<T: Clone + PartialEq> PersistentGeneralTree<T> {
    /// Returns a new tree with a leaf holding `value` appended below the
    /// first node (in pre-order) that carries `parent`.
    ///
    /// Returns `None` when no node carries `parent`, including on an empty
    /// tree.
    ///
    /// # Arguments
    ///
    /// * `parent` - The value of the node to insert below
    /// * `value` - The value of the new leaf
    ///
    /// # Complexity
    ///
    /// O(n) time, new nodes only on the copied path
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentGeneralTree;
    ///
    /// let tree = PersistentGeneralTree::with_root(1);
    /// let grown = tree.insert_below(&1, 2).unwrap();
    /// assert_eq!(grown.len(), 2);
    ///
    /// assert!(tree.insert_below(&9, 2).is_none());
    /// ```
    #[must_use]
    pub fn insert_below(&self, parent: &T, value: T) -> Option<Self> {
        let root = self.root.as_ref()?;
        let new_root = Self::insert_below_node(root.as_ref(), parent, &value)?;
        Some(Self {
            root: Some(ReferenceCounter::new(new_root)),
            length: self.length + 1,
        })
    }

    /// Recursive helper for `insert_below`.
    /// Returns `None` when the subtree holds no node carrying `parent`.
    fn insert_below_node(node: &Node<T>, parent: &T, value: &T) -> Option<Node<T>> {
        if node.value == *parent {
            let mut children = node.children.clone();
            children.push(ReferenceCounter::new(Node::leaf(value.clone())));
            return Some(Node {
                value: node.value.clone(),
                children,
            });
        }

        for (position, child) in node.children.iter().enumerate() {
            if let Some(new_child) = Self::insert_below_node(child.as_ref(), parent, value) {
                let mut children = node.children.clone();
                children[position] = ReferenceCounter::new(new_child);
                return Some(Node {
                    value: node.value.clone(),
                    children,
                });
            }
        }
        None
    }

    /// Returns a new tree with the first node (in pre-order) carrying
    /// `value` removed together with its whole subtree.
    ///
    /// Removing the root empties the tree. Returns `None` when no node
    /// carries `value`.
    ///
    /// # Arguments
    ///
    /// * `value` - The value of the node to remove
    ///
    /// # Complexity
    ///
    /// O(n) time, new nodes only on the copied path
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentGeneralTree;
    ///
    /// let tree = PersistentGeneralTree::with_root(1)
    ///     .insert_below(&1, 2)
    ///     .and_then(|tree| tree.insert_below(&2, 3))
    ///     .unwrap();
    ///
    /// let pruned = tree.remove(&2).unwrap();
    /// assert_eq!(pruned.len(), 1); // Node 2 and its subtree are gone
    /// assert!(!pruned.contains(&3));
    ///
    /// assert!(tree.remove(&9).is_none());
    /// ```
    #[must_use]
    pub fn remove(&self, value: &T) -> Option<Self> {
        let root = self.root.as_ref()?;
        if root.value == *value {
            return Some(Self::new());
        }

        let (new_root, removed) = Self::remove_from_node(root.as_ref(), value)?;
        Some(Self {
            root: Some(ReferenceCounter::new(new_root)),
            length: self.length.saturating_sub(removed),
        })
    }

    /// Recursive helper for remove.
    /// Returns (`new_node`, `removed_count`), or `None` when the subtree
    /// holds no node carrying `value`.
    fn remove_from_node(node: &Node<T>, value: &T) -> Option<(Node<T>, usize)> {
        for (position, child) in node.children.iter().enumerate() {
            if child.value == *value {
                let removed = subtree_size(child.as_ref());
                let mut children = node.children.clone();
                children.remove(position);
                return Some((
                    Node {
                        value: node.value.clone(),
                        children,
                    },
                    removed,
                ));
            }

            if let Some((new_child, removed)) = Self::remove_from_node(child.as_ref(), value) {
                let mut children = node.children.clone();
                children[position] = ReferenceCounter::new(new_child);
                return Some((
                    Node {
                        value: node.value.clone(),
                        children,
                    },
                    removed,
                ));
            }
        }
        None
    }
}

// =============================================================================
// Iterator Implementations
// =============================================================================

/// A pre-order iterator over references to values of a
/// [`PersistentGeneralTree`].
pub struct PersistentGeneralTreeIterator<'a, T> {
    values: Vec<&'a T>,
    current_index: usize,
}

impl<'a, T> Iterator for PersistentGeneralTreeIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_index >= self.values.len() {
            None
        } else {
            let value = self.values[self.current_index];
            self.current_index += 1;
            Some(value)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.values.len().saturating_sub(self.current_index);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for PersistentGeneralTreeIterator<'_, T> {
    fn len(&self) -> usize {
        self.values.len().saturating_sub(self.current_index)
    }
}

/// A level-order iterator over references to values of a
/// [`PersistentGeneralTree`].
pub struct PersistentGeneralTreeBreadthFirstIterator<'a, T> {
    values: Vec<&'a T>,
    current_index: usize,
}

impl<'a, T> Iterator for PersistentGeneralTreeBreadthFirstIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_index >= self.values.len() {
            None
        } else {
            let value = self.values[self.current_index];
            self.current_index += 1;
            Some(value)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.values.len().saturating_sub(self.current_index);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for PersistentGeneralTreeBreadthFirstIterator<'_, T> {
    fn len(&self) -> usize {
        self.values.len().saturating_sub(self.current_index)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for PersistentGeneralTree<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Compares trees structurally: values, arity and child order all matter.
impl<T: PartialEq> PartialEq for PersistentGeneralTree<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.length != other.length {
            return false;
        }
        match (self.root.as_ref(), other.root.as_ref()) {
            (None, None) => true,
            (Some(a), Some(b)) => nodes_equal(a.as_ref(), b.as_ref()),
            _ => false,
        }
    }
}

impl<T: Eq> Eq for PersistentGeneralTree<T> {}

impl<T: fmt::Debug> fmt::Debug for PersistentGeneralTree<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
