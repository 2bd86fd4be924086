//! Persistent (immutable) singly-linked list.
//!
//! This module provides [`PersistentList`], an immutable singly-linked list
//! that uses structural sharing for efficient operations.
//!
//! # Overview
//!
//! `PersistentList` keeps its elements in a chain of reference-counted nodes
//! and caches the chain length. It provides:
//!
//! - O(1) prepend (`push_front`)
//! - O(1) front access
//! - O(1) front removal (`pop_front`)
//! - O(n) index access
//! - O(n) back access, append and reverse
//!
//! All operations return new lists without modifying the original,
//! and structural sharing ensures memory efficiency.
//!
//! # Examples
//!
//! ```rust
//! use permafrost::persistent::PersistentList;
//!
//! // Build a list front-first
//! let list = PersistentList::new().push_front(3).push_front(2).push_front(1);
//! assert_eq!(list.front(), Some(&1));
//! assert_eq!(list.len(), 3);
//!
//! // Structural sharing: the original list is preserved
//! let extended = list.push_front(0);
//! assert_eq!(list.len(), 3);     // Original unchanged
//! assert_eq!(extended.len(), 4); // New list with prepended element
//!
//! // Build from an iterator
//! let list: PersistentList<i32> = (1..=5).collect();
//! assert_eq!(list.iter().sum::<i32>(), 15);
//! ```
//!
//! # Structural Sharing
//!
//! When you create a new list by prepending an element with `push_front`, the
//! new list shares all nodes with the original list:
//!
//! ```text
//! list1: 1 -> 2 -> 3 -> nil
//! list2 = list1.push_front(0): 0 -> [1 -> 2 -> 3 -> nil]  // shares [1, 2, 3] with list1
//! ```
//!
//! This makes `push_front` an O(1) operation both in time and additional
//! space. `pop_front` shares the same way in the other direction: the
//! returned tail is the original list's second node onward.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::ReferenceCounter;

/// Internal node structure for the persistent list.
///
/// Each node contains an element and an optional reference to the next node.
/// Reference counting enables structural sharing between lists.
struct Node<T> {
    /// The element stored in this node.
    element: T,
    /// Reference to the next node (if any).
    next: Option<ReferenceCounter<Self>>,
}

/// A persistent (immutable) singly-linked list.
///
/// `PersistentList` is an immutable data structure that uses structural
/// sharing to efficiently support functional programming patterns.
///
/// # Time Complexity
///
/// | Operation    | Complexity |
/// |--------------|------------|
/// | `new`        | O(1)       |
/// | `push_front` | O(1)       |
/// | `pop_front`  | O(1)       |
/// | `front`      | O(1)       |
/// | `len`        | O(1)       |
/// | `get`        | O(n)       |
/// | `back`       | O(n)       |
/// | `push_back`  | O(n)       |
/// | `reverse`    | O(n)       |
///
/// # Examples
///
/// ```rust
/// use permafrost::persistent::PersistentList;
///
/// let list = PersistentList::singleton(42);
/// assert_eq!(list.front(), Some(&42));
/// ```
#[derive(Clone)]
pub struct PersistentList<T> {
    /// Reference to the head node (if any).
    head: Option<ReferenceCounter<Node<T>>>,
    /// Cached length for O(1) access.
    length: usize,
}

impl<T> PersistentList<T> {
    /// Creates a new empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentList;
    ///
    /// let list: PersistentList<i32> = PersistentList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    /// Creates a list containing a single element.
    ///
    /// # Arguments
    ///
    /// * `element` - The element to store in the list
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentList;
    ///
    /// let list = PersistentList::singleton(1);
    /// assert_eq!(list.len(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::new().push_front(element)
    }

    /// Returns a new list with the element prepended to the front.
    ///
    /// The original list is unchanged and shares all of its nodes with the
    /// new list.
    ///
    /// # Arguments
    ///
    /// * `element` - The element to prepend
    ///
    /// # Complexity
    ///
    /// O(1) time and additional space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentList;
    ///
    /// let list = PersistentList::new().push_front(2).push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// assert_eq!(list.len(), 2);
    /// ```
    #[must_use]
    pub fn push_front(&self, element: T) -> Self {
        Self {
            head: Some(ReferenceCounter::new(Node {
                element,
                next: self.head.clone(),
            })),
            length: self.length + 1,
        }
    }

    /// Returns a reference to the first element.
    ///
    /// Returns `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentList;
    ///
    /// let list = PersistentList::new().push_front(2).push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    ///
    /// let empty: PersistentList<i32> = PersistentList::new();
    /// assert_eq!(empty.front(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.element)
    }

    /// Returns a reference to the last element.
    ///
    /// Returns `None` if the list is empty.
    ///
    /// # Complexity
    ///
    /// O(n) - the whole chain is traversed
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentList;
    ///
    /// let list = PersistentList::new().push_front(2).push_front(1);
    /// assert_eq!(list.back(), Some(&2));
    /// ```
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        let mut current = self.head.as_ref()?;
        while let Some(next) = current.next.as_ref() {
            current = next;
        }
        Some(&current.element)
    }

    /// Returns a reference to the element at the given index.
    ///
    /// Returns `None` if the index is out of bounds.
    ///
    /// # Arguments
    ///
    /// * `index` - The zero-based index of the element
    ///
    /// # Complexity
    ///
    /// O(n) where n = index
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentList;
    ///
    /// let list = PersistentList::new().push_front(3).push_front(2).push_front(1);
    /// assert_eq!(list.get(0), Some(&1));
    /// assert_eq!(list.get(2), Some(&3));
    /// assert_eq!(list.get(10), None);
    /// ```
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        let mut current = &self.head;
        let mut remaining = index;

        while let Some(node) = current {
            if remaining == 0 {
                return Some(&node.element);
            }
            remaining -= 1;
            current = &node.next;
        }
        None
    }

    /// Returns `true` if the list contains the given element.
    ///
    /// # Arguments
    ///
    /// * `target` - The element to look for
    ///
    /// # Complexity
    ///
    /// O(n) worst case, O(k) where k is the index of the first match
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentList;
    ///
    /// let list: PersistentList<i32> = (1..=5).collect();
    /// assert!(list.contains(&3));
    /// assert!(!list.contains(&10));
    /// ```
    #[must_use]
    pub fn contains(&self, target: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|element| element == target)
    }

    /// Returns the number of elements in the list.
    ///
    /// # Complexity
    ///
    /// O(1) - the length is cached
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentList;
    ///
    /// let list = PersistentList::new().push_front(3).push_front(2).push_front(1);
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the list contains no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentList;
    ///
    /// let empty: PersistentList<i32> = PersistentList::new();
    /// assert!(empty.is_empty());
    ///
    /// let non_empty = empty.push_front(1);
    /// assert!(!non_empty.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns an iterator over references to the elements.
    ///
    /// The iterator yields elements from front to back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentList;
    ///
    /// let list = PersistentList::new().push_front(3).push_front(2).push_front(1);
    /// let collected: Vec<&i32> = list.iter().collect();
    /// assert_eq!(collected, vec![&1, &2, &3]);
    /// ```
    #[inline]
    #[must_use]
    pub const fn iter(&self) -> PersistentListIterator<'_, T> {
        PersistentListIterator {
            current: self.head.as_ref(),
        }
    }

    /// Builds a list from a vector, consuming it back to front.
    fn build_from_vec(mut elements: Vec<T>) -> Self {
        let length = elements.len();
        let mut head = None;

        while let Some(element) = elements.pop() {
            head = Some(ReferenceCounter::new(Node {
                element,
                next: head,
            }));
        }

        Self { head, length }
    }
}

impl<T: Clone> PersistentList<T> {
    /// Creates a list from a slice.
    ///
    /// The first element of the slice becomes the first element of the list.
    ///
    /// # Arguments
    ///
    /// * `slice` - The slice to build the list from
    ///
    /// # Complexity
    ///
    /// O(n) where n = `slice.len()`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentList;
    ///
    /// let list = PersistentList::from_slice(&[1, 2, 3]);
    /// assert_eq!(list.front(), Some(&1));
    /// assert_eq!(list.len(), 3);
    /// ```
    #[must_use]
    pub fn from_slice(slice: &[T]) -> Self {
        let length = slice.len();
        if length == 0 {
            return Self::new();
        }

        // Iterate the slice in reverse so each node links to the one built before it.
        let mut head: Option<ReferenceCounter<Node<T>>> = None;
        for element in slice.iter().rev() {
            head = Some(ReferenceCounter::new(Node {
                element: element.clone(),
                next: head,
            }));
        }

        Self { head, length }
    }

    /// Removes the front element, returning it together with the remaining
    /// list.
    ///
    /// Returns `None` if the list is empty. The returned tail shares every
    /// node with the original list.
    ///
    /// # Returns
    ///
    /// `Some((front, rest))` if the list is non-empty, `None` otherwise
    ///
    /// # Complexity
    ///
    /// O(1) plus one element clone
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentList;
    ///
    /// let list = PersistentList::new().push_front(2).push_front(1);
    /// if let Some((front, rest)) = list.pop_front() {
    ///     assert_eq!(front, 1);
    ///     assert_eq!(rest.front(), Some(&2));
    /// }
    /// assert_eq!(list.len(), 2); // Original unchanged
    /// ```
    #[must_use]
    pub fn pop_front(&self) -> Option<(T, Self)> {
        self.head.as_ref().map(|node| {
            let rest = Self {
                head: node.next.clone(),
                length: self.length.saturating_sub(1),
            };
            (node.element.clone(), rest)
        })
    }

    /// Returns a new list with the element appended to the back.
    ///
    /// The chain up to the new node cannot be shared, so the whole list is
    /// rebuilt.
    ///
    /// # Arguments
    ///
    /// * `element` - The element to append
    ///
    /// # Complexity
    ///
    /// O(n) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentList;
    ///
    /// let list = PersistentList::from_slice(&[1, 2]);
    /// let extended = list.push_back(3);
    ///
    /// let collected: Vec<&i32> = extended.iter().collect();
    /// assert_eq!(collected, vec![&1, &2, &3]);
    /// assert_eq!(list.len(), 2); // Original unchanged
    /// ```
    #[must_use]
    pub fn push_back(&self, element: T) -> Self {
        let mut elements: Vec<T> = self.iter().cloned().collect();
        elements.push(element);
        Self::build_from_vec(elements)
    }

    /// Returns a new list with elements in reverse order.
    ///
    /// # Complexity
    ///
    /// O(n) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentList;
    ///
    /// let list = PersistentList::from_slice(&[1, 2, 3]);
    /// let reversed = list.reverse();
    ///
    /// let collected: Vec<&i32> = reversed.iter().collect();
    /// assert_eq!(collected, vec![&3, &2, &1]);
    /// ```
    #[must_use]
    pub fn reverse(&self) -> Self {
        let mut result = Self::new();
        for element in self {
            result = result.push_front(element.clone());
        }
        result
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to elements of a [`PersistentList`].
pub struct PersistentListIterator<'a, T> {
    current: Option<&'a ReferenceCounter<Node<T>>>,
}

impl<'a, T> Iterator for PersistentListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_ref();
            &node.element
        })
    }
}

/// An owning iterator over elements of a [`PersistentList`].
pub struct PersistentListIntoIterator<T> {
    list: PersistentList<T>,
}

impl<T: Clone> Iterator for PersistentListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let (element, rest) = self.list.pop_front()?;
        self.list = rest;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.length, Some(self.list.length))
    }
}

impl<T: Clone> ExactSizeIterator for PersistentListIntoIterator<T> {
    fn len(&self) -> usize {
        self.list.length
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for PersistentList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for PersistentList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let elements: Vec<T> = iter.into_iter().collect();
        Self::build_from_vec(elements)
    }
}

impl<T: Clone> IntoIterator for PersistentList<T> {
    type Item = T;
    type IntoIter = PersistentListIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        PersistentListIntoIterator { list: self }
    }
}

impl<'a, T> IntoIterator for &'a PersistentList<T> {
    type Item = &'a T;
    type IntoIter = PersistentListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for PersistentList<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.length != other.length {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for PersistentList<T> {}

/// Hashes the length first, then each element in order, so equal lists
/// produce equal hash values and prefixes do not collide with their
/// extensions.
impl<T: Hash> Hash for PersistentList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistentList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for PersistentList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Tests
// =============================================================================
