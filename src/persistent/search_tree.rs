//! Persistent (immutable) binary search tree.
//!
//! This module provides [`PersistentSearchTree`], an immutable ordered set
//! backed by an unbalanced binary search tree with path copying.
//!
//! # Overview
//!
//! Every mutating operation copies only the nodes on the path from the root
//! to the affected position and shares the rest of the tree with the
//! previous version. Elements are kept in comparator order given by their
//! [`Ord`] implementation, so iteration is always ascending.
//!
//! The tree is not rebalanced. Operations cost O(h) where h is the current
//! tree height: O(log n) for well-mixed insertion orders, O(n) when elements
//! arrive already sorted.
//!
//! # Examples
//!
//! ```rust
//! use permafrost::persistent::PersistentSearchTree;
//!
//! let tree = PersistentSearchTree::from_slice(&[5, 3, 8, 1]);
//! let extended = tree.insert(4);
//!
//! assert!(!tree.contains(&4));     // Original unchanged
//! assert!(extended.contains(&4));  // New version sees the insert
//!
//! let ascending: Vec<&i32> = extended.iter().collect();
//! assert_eq!(ascending, vec![&1, &3, &4, &5, &8]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::ReferenceCounter;

// =============================================================================
// Node Definition
// =============================================================================

/// Internal node structure for the search tree.
#[derive(Clone)]
struct Node<T> {
    element: T,
    left: Option<ReferenceCounter<Self>>,
    right: Option<ReferenceCounter<Self>>,
}

impl<T> Node<T> {
    /// Creates a new node with no children.
    const fn leaf(element: T) -> Self {
        Self {
            element,
            left: None,
            right: None,
        }
    }

    /// Creates a copy of this node with new children.
    fn with_children(
        &self,
        left: Option<ReferenceCounter<Self>>,
        right: Option<ReferenceCounter<Self>>,
    ) -> Self
    where
        T: Clone,
    {
        Self {
            element: self.element.clone(),
            left,
            right,
        }
    }
}

// =============================================================================
// PersistentSearchTree Definition
// =============================================================================

/// A persistent (immutable) ordered set based on a binary search tree.
///
/// `PersistentSearchTree` is an immutable data structure that uses structural
/// sharing to efficiently support functional programming patterns. Inserting
/// an element that is already present returns an equal tree (set semantics).
///
/// # Time Complexity
///
/// | Operation  | Complexity |
/// |------------|------------|
/// | `new`      | O(1)       |
/// | `insert`   | O(h)       |
/// | `remove`   | O(h)       |
/// | `contains` | O(h)       |
/// | `min`/`max`| O(h)       |
/// | `len`      | O(1)       |
/// | `is_empty` | O(1)       |
///
/// h is the tree height; the tree is not rebalanced.
///
/// # Examples
///
/// ```rust
/// use permafrost::persistent::PersistentSearchTree;
///
/// let tree = PersistentSearchTree::singleton(42);
/// assert!(tree.contains(&42));
/// assert_eq!(tree.len(), 1);
/// ```
#[derive(Clone)]
pub struct PersistentSearchTree<T> {
    /// Root node of the tree.
    root: Option<ReferenceCounter<Node<T>>>,
    /// Cached element count.
    length: usize,
}

impl<T> PersistentSearchTree<T> {
    /// Creates a new empty tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentSearchTree;
    ///
    /// let tree: PersistentSearchTree<i32> = PersistentSearchTree::new();
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

    /// Returns the number of elements in the tree.
    ///
    /// # Complexity
    ///
    /// O(1) - the count is cached
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentSearchTree;
    ///
    /// let tree = PersistentSearchTree::from_slice(&[2, 1, 3]);
    /// assert_eq!(tree.len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the tree contains no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentSearchTree;
    ///
    /// let empty: PersistentSearchTree<i32> = PersistentSearchTree::new();
    /// assert!(empty.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}

impl<T: Clone + Ord> PersistentSearchTree<T> {
    /// Creates a tree containing a single element.
    ///
    /// # Arguments
    ///
    /// * `element` - The element to store in the tree
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentSearchTree;
    ///
    /// let tree = PersistentSearchTree::singleton(42);
    /// assert_eq!(tree.len(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::new().insert(element)
    }

    /// Creates a tree from a slice.
    ///
    /// Elements are inserted in slice order; duplicates collapse into a
    /// single entry.
    ///
    /// # Arguments
    ///
    /// * `slice` - The slice to build the tree from
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentSearchTree;
    ///
    /// let tree = PersistentSearchTree::from_slice(&[3, 1, 2, 1]);
    /// assert_eq!(tree.len(), 3);
    /// ```
    #[must_use]
    pub fn from_slice(slice: &[T]) -> Self {
        let mut tree = Self::new();
        for element in slice {
            tree = tree.insert(element.clone());
        }
        tree
    }

    /// Returns a new tree with the element inserted.
    ///
    /// Inserting an element that is already present is idempotent: the
    /// returned tree equals the original and the count is unchanged.
    ///
    /// # Arguments
    ///
    /// * `element` - The element to insert
    ///
    /// # Complexity
    ///
    /// O(h) time, O(h) new nodes on the copied path
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentSearchTree;
    ///
    /// let tree = PersistentSearchTree::new().insert(2).insert(1);
    /// assert_eq!(tree.len(), 2);
    ///
    /// let same = tree.insert(2);
    /// assert_eq!(same.len(), 2);
    /// ```
    #[must_use]
    pub fn insert(&self, element: T) -> Self {
        let (new_root, added) = Self::insert_into_node(self.root.as_ref(), element);
        Self {
            root: new_root,
            length: if added { self.length + 1 } else { self.length },
        }
    }

    /// Recursive helper for insert.
    /// Returns (`new_node`, `was_added`) where `was_added` is false for duplicates.
    fn insert_into_node(
        node: Option<&ReferenceCounter<Node<T>>>,
        element: T,
    ) -> (Option<ReferenceCounter<Node<T>>>, bool) {
        match node {
            None => (Some(ReferenceCounter::new(Node::leaf(element))), true),
            Some(node_ref) => match element.cmp(&node_ref.element) {
                Ordering::Less => {
                    let (new_left, added) =
                        Self::insert_into_node(node_ref.left.as_ref(), element);
                    let new_node = node_ref.with_children(new_left, node_ref.right.clone());
                    (Some(ReferenceCounter::new(new_node)), added)
                }
                Ordering::Greater => {
                    let (new_right, added) =
                        Self::insert_into_node(node_ref.right.as_ref(), element);
                    let new_node = node_ref.with_children(node_ref.left.clone(), new_right);
                    (Some(ReferenceCounter::new(new_node)), added)
                }
                Ordering::Equal => (Some(ReferenceCounter::clone(node_ref)), false),
            },
        }
    }

    /// Returns a new tree with the element removed.
    ///
    /// Removing an absent element returns an equal tree. A node with two
    /// children is replaced by its in-order successor, the minimum of its
    /// right subtree.
    ///
    /// # Arguments
    ///
    /// * `element` - The element to remove
    ///
    /// # Complexity
    ///
    /// O(h) time, O(h) new nodes on the copied path
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentSearchTree;
    ///
    /// let tree = PersistentSearchTree::from_slice(&[2, 1, 3]);
    /// let removed = tree.remove(&2);
    ///
    /// assert_eq!(tree.len(), 3);    // Original unchanged
    /// assert_eq!(removed.len(), 2); // New version
    /// assert!(!removed.contains(&2));
    /// ```
    #[must_use]
    pub fn remove(&self, element: &T) -> Self {
        if !self.contains(element) {
            return self.clone();
        }

        let new_root = Self::remove_from_node(self.root.as_ref(), element);
        Self {
            root: new_root,
            length: self.length.saturating_sub(1),
        }
    }

    /// Recursive helper for remove.
    fn remove_from_node(
        node: Option<&ReferenceCounter<Node<T>>>,
        element: &T,
    ) -> Option<ReferenceCounter<Node<T>>> {
        node.and_then(|node_ref| match element.cmp(&node_ref.element) {
            Ordering::Less => {
                let new_left = Self::remove_from_node(node_ref.left.as_ref(), element);
                let new_node = node_ref.with_children(new_left, node_ref.right.clone());
                Some(ReferenceCounter::new(new_node))
            }
            Ordering::Greater => {
                let new_right = Self::remove_from_node(node_ref.right.as_ref(), element);
                let new_node = node_ref.with_children(node_ref.left.clone(), new_right);
                Some(ReferenceCounter::new(new_node))
            }
            Ordering::Equal => match (&node_ref.left, &node_ref.right) {
                (None, None) => None,
                (Some(left), None) => Some(left.clone()),
                (None, Some(right)) => Some(right.clone()),
                (Some(_), Some(right)) => {
                    // Replace with the in-order successor and remove it from
                    // the right subtree.
                    let successor = Self::find_min_element(right);
                    let new_right =
                        Self::remove_from_node(node_ref.right.as_ref(), &successor);
                    let new_node = Node {
                        element: successor,
                        left: node_ref.left.clone(),
                        right: new_right,
                    };
                    Some(ReferenceCounter::new(new_node))
                }
            },
        })
    }

    /// Finds the minimum element in a subtree.
    fn find_min_element(node: &ReferenceCounter<Node<T>>) -> T {
        node.left.as_ref().map_or_else(
            || node.element.clone(),
            |left| Self::find_min_element(left),
        )
    }

    /// Returns `true` if the tree contains the given element.
    ///
    /// # Arguments
    ///
    /// * `element` - The element to look for
    ///
    /// # Complexity
    ///
    /// O(h)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentSearchTree;
    ///
    /// let tree = PersistentSearchTree::from_slice(&[2, 1, 3]);
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&4));
    /// ```
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        Self::contains_in_node(self.root.as_ref(), element)
    }

    /// Recursive helper for contains.
    fn contains_in_node(node: Option<&ReferenceCounter<Node<T>>>, element: &T) -> bool {
        node.is_some_and(|node_ref| match element.cmp(&node_ref.element) {
            Ordering::Less => Self::contains_in_node(node_ref.left.as_ref(), element),
            Ordering::Greater => Self::contains_in_node(node_ref.right.as_ref(), element),
            Ordering::Equal => true,
        })
    }

    /// Returns a reference to the minimum element.
    ///
    /// Returns `None` if the tree is empty.
    ///
    /// # Complexity
    ///
    /// O(h)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentSearchTree;
    ///
    /// let tree = PersistentSearchTree::from_slice(&[3, 1, 2]);
    /// assert_eq!(tree.min(), Some(&1));
    /// ```
    #[must_use]
    pub fn min(&self) -> Option<&T> {
        let mut current = self.root.as_ref()?;
        while let Some(left) = current.left.as_ref() {
            current = left;
        }
        Some(&current.element)
    }

    /// Returns a reference to the maximum element.
    ///
    /// Returns `None` if the tree is empty.
    ///
    /// # Complexity
    ///
    /// O(h)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentSearchTree;
    ///
    /// let tree = PersistentSearchTree::from_slice(&[3, 1, 2]);
    /// assert_eq!(tree.max(), Some(&3));
    /// ```
    #[must_use]
    pub fn max(&self) -> Option<&T> {
        let mut current = self.root.as_ref()?;
        while let Some(right) = current.right.as_ref() {
            current = right;
        }
        Some(&current.element)
    }

    /// Returns an iterator over references to the elements in ascending
    /// order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentSearchTree;
    ///
    /// let tree = PersistentSearchTree::from_slice(&[3, 1, 2]);
    /// let ascending: Vec<&i32> = tree.iter().collect();
    /// assert_eq!(ascending, vec![&1, &2, &3]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> PersistentSearchTreeIterator<'_, T> {
        let mut elements = Vec::with_capacity(self.length);
        Self::collect_in_order(self.root.as_ref(), &mut elements);
        PersistentSearchTreeIterator {
            elements,
            current_index: 0,
        }
    }

    /// Collects all elements in ascending order (in-order traversal).
    fn collect_in_order<'a>(
        node: Option<&'a ReferenceCounter<Node<T>>>,
        elements: &mut Vec<&'a T>,
    ) {
        if let Some(node_ref) = node {
            Self::collect_in_order(node_ref.left.as_ref(), elements);
            elements.push(&node_ref.element);
            Self::collect_in_order(node_ref.right.as_ref(), elements);
        }
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to elements of a [`PersistentSearchTree`] in
/// ascending order.
pub struct PersistentSearchTreeIterator<'a, T> {
    elements: Vec<&'a T>,
    current_index: usize,
}

impl<'a, T> Iterator for PersistentSearchTreeIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_index >= self.elements.len() {
            None
        } else {
            let element = self.elements[self.current_index];
            self.current_index += 1;
            Some(element)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.elements.len().saturating_sub(self.current_index);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for PersistentSearchTreeIterator<'_, T> {
    fn len(&self) -> usize {
        self.elements.len().saturating_sub(self.current_index)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for PersistentSearchTree<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Ord> FromIterator<T> for PersistentSearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        for element in iter {
            tree = tree.insert(element);
        }
        tree
    }
}

impl<T: Clone + Ord> IntoIterator for PersistentSearchTree<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let elements: Vec<T> = self.iter().cloned().collect();
        elements.into_iter()
    }
}

impl<'a, T: Clone + Ord> IntoIterator for &'a PersistentSearchTree<T> {
    type Item = &'a T;
    type IntoIter = PersistentSearchTreeIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone + Ord> PartialEq for PersistentSearchTree<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.length != other.length {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Clone + Ord> Eq for PersistentSearchTree<T> {}

/// Hashes the length first, then each element in ascending order, so equal
/// sets produce equal hash values regardless of insertion order.
impl<T: Clone + Ord + Hash> Hash for PersistentSearchTree<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: Clone + Ord + fmt::Debug> fmt::Debug for PersistentSearchTree<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Clone + Ord + fmt::Display> fmt::Display for PersistentSearchTree<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Tests
// =============================================================================
