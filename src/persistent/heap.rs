//! Persistent binary heap parameterized by a comparator.
//!
//! [`PersistentHeap`] keeps its elements in the classic array-backed binary
//! heap layout: the children of the element at index `i` live at `2 * i + 1`
//! and `2 * i + 2`. The heap property is defined entirely by the stored
//! comparator, so the same type serves as a min-heap, a max-heap, or a heap
//! over any caller-supplied total order.
//!
//! Every mutating operation clones the backing storage, restores the heap
//! property on the copy, and returns a new heap. The receiver is never
//! touched, so arbitrarily many versions can coexist:
//!
//! ```rust
//! use permafrost::persistent::PersistentHeap;
//!
//! let original = PersistentHeap::min_from(vec![5, 3, 7, 1, 4]);
//! let grown = original.add(0);
//!
//! assert_eq!(original.peek(), Some(&1));
//! assert_eq!(grown.peek(), Some(&0));
//! assert_eq!(original.len(), 5);
//! ```
//!
//! # Complexity
//!
//! | Operation | Time |
//! |-----------|------|
//! | `peek` | O(1) |
//! | `add` | O(n) copy + O(log n) sift |
//! | `remove` | O(n) copy + O(log n) sift |
//! | `min_from` / `max_from` | O(n) |
//! | `iter` | O(n log n) over the whole sequence |

use core::cmp::Ordering;
use core::fmt;
use core::iter::FusedIterator;

use super::{Comparator, ComparatorFn, ReferenceCounter};

// =============================================================================
// Heap Order
// =============================================================================

/// Ready-made orderings for heaps over [`Ord`] element types.
///
/// # Examples
///
/// ```rust
/// use permafrost::persistent::{HeapOrder, PersistentHeap};
///
/// let max = PersistentHeap::from_vec_with_order(vec![2, 9, 4], HeapOrder::Max);
/// assert_eq!(max.peek(), Some(&9));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeapOrder {
    /// The smallest element (per [`Ord`]) sits at the root.
    Min,
    /// The largest element (per [`Ord`]) sits at the root.
    Max,
}

// =============================================================================
// Sift Primitives
// =============================================================================

/// Moves the element at `start` toward the root until its parent no longer
/// compares greater than it. Elements that compare equal do not move, so
/// insertion keeps existing equals above the newcomer.
fn sift_up<T>(elements: &mut [T], start: usize, compare: &dyn Fn(&T, &T) -> Ordering) {
    let mut current = start;

    while current > 0 {
        let parent = (current - 1) / 2;

        if compare(&elements[current], &elements[parent]) != Ordering::Less {
            break;
        }

        elements.swap(current, parent);
        current = parent;
    }
}

/// Moves the element at `start` toward the leaves, always descending into the
/// favored child. The left child wins ties, so equal elements never swap.
fn sift_down<T>(elements: &mut [T], start: usize, compare: &dyn Fn(&T, &T) -> Ordering) {
    let mut current = start;

    loop {
        let left = 2 * current + 1;
        let right = left + 1;

        if left >= elements.len() {
            break;
        }

        let favored = if right < elements.len()
            && compare(&elements[right], &elements[left]) == Ordering::Less
        {
            right
        } else {
            left
        };

        if compare(&elements[favored], &elements[current]) != Ordering::Less {
            break;
        }

        elements.swap(current, favored);
        current = favored;
    }
}

fn ascending<T: Ord + 'static>() -> Comparator<T> {
    ReferenceCounter::new(|a: &T, b: &T| a.cmp(b))
}

fn descending<T: Ord + 'static>() -> Comparator<T> {
    ReferenceCounter::new(|a: &T, b: &T| b.cmp(a))
}

// =============================================================================
// PersistentHeap
// =============================================================================

/// Persistent binary heap over an arbitrary total order.
///
/// The root (exposed by [`peek`](Self::peek)) is always an element that
/// compares less than or equal to every other element under the stored
/// comparator. [`add`](Self::add) and [`remove`](Self::remove) return new
/// heaps and leave the receiver unchanged.
///
/// # Examples
///
/// Natural ascending order:
///
/// ```rust
/// use permafrost::persistent::PersistentHeap;
///
/// let heap = PersistentHeap::min().add(5).add(1).add(3);
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.into_sorted_vec(), vec![1, 3, 5]);
/// ```
///
/// A custom order, here by string length:
///
/// ```rust
/// use permafrost::persistent::PersistentHeap;
///
/// let heap = PersistentHeap::with_comparator(|a: &&str, b: &&str| a.len().cmp(&b.len()))
///     .add("three")
///     .add("a")
///     .add("to");
///
/// assert_eq!(heap.peek(), Some(&"a"));
/// ```
pub struct PersistentHeap<T> {
    elements: Vec<T>,
    comparator: Comparator<T>,
}

impl<T> PersistentHeap<T> {
    /// Creates an empty min-heap ordered by [`Ord`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentHeap;
    ///
    /// let heap: PersistentHeap<i32> = PersistentHeap::min();
    /// assert!(heap.is_empty());
    /// ```
    #[must_use]
    pub fn min() -> Self
    where
        T: Ord + 'static,
    {
        Self {
            elements: Vec::new(),
            comparator: ascending(),
        }
    }

    /// Creates an empty max-heap ordered by [`Ord`] reversed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentHeap;
    ///
    /// let heap = PersistentHeap::max().add(2).add(9).add(4);
    /// assert_eq!(heap.peek(), Some(&9));
    /// ```
    #[must_use]
    pub fn max() -> Self
    where
        T: Ord + 'static,
    {
        Self {
            elements: Vec::new(),
            comparator: descending(),
        }
    }

    /// Creates an empty heap with the given [`HeapOrder`].
    #[must_use]
    pub fn with_order(order: HeapOrder) -> Self
    where
        T: Ord + 'static,
    {
        match order {
            HeapOrder::Min => Self::min(),
            HeapOrder::Max => Self::max(),
        }
    }

    /// Creates an empty heap ordered by an arbitrary comparator.
    ///
    /// The comparator must realize a total order; the element that compares
    /// `Less` than all others becomes the root.
    ///
    /// # Arguments
    ///
    /// * `comparator` - Total order over `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentHeap;
    ///
    /// let by_absolute = PersistentHeap::with_comparator(|a: &i32, b: &i32| {
    ///     a.abs().cmp(&b.abs())
    /// });
    /// let heap = by_absolute.add(-7).add(2).add(5);
    ///
    /// assert_eq!(heap.peek(), Some(&2));
    /// ```
    #[must_use]
    pub fn with_comparator<F>(comparator: F) -> Self
    where
        F: ComparatorFn<T>,
    {
        Self {
            elements: Vec::new(),
            comparator: ReferenceCounter::new(comparator),
        }
    }

    /// Builds a min-heap from a vector in O(n).
    ///
    /// Uses bottom-up heap construction, sifting down every interior node
    /// from the last parent toward the root.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentHeap;
    ///
    /// let heap = PersistentHeap::min_from(vec![5, 3, 7, 1, 4]);
    /// assert_eq!(heap.peek(), Some(&1));
    /// ```
    #[must_use]
    pub fn min_from(elements: Vec<T>) -> Self
    where
        T: Ord + 'static,
    {
        Self::heapify(elements, ascending())
    }

    /// Builds a max-heap from a vector in O(n).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentHeap;
    ///
    /// let heap = PersistentHeap::max_from(vec![5, 3, 7, 1, 4]);
    /// assert_eq!(heap.peek(), Some(&7));
    /// ```
    #[must_use]
    pub fn max_from(elements: Vec<T>) -> Self
    where
        T: Ord + 'static,
    {
        Self::heapify(elements, descending())
    }

    /// Builds a heap from a vector with the given [`HeapOrder`] in O(n).
    #[must_use]
    pub fn from_vec_with_order(elements: Vec<T>, order: HeapOrder) -> Self
    where
        T: Ord + 'static,
    {
        match order {
            HeapOrder::Min => Self::min_from(elements),
            HeapOrder::Max => Self::max_from(elements),
        }
    }

    /// Builds a heap from a vector with an arbitrary comparator in O(n).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentHeap;
    ///
    /// let heap = PersistentHeap::from_vec_with_comparator(
    ///     vec![(1, 'a'), (3, 'b'), (2, 'c')],
    ///     |a: &(i32, char), b: &(i32, char)| b.0.cmp(&a.0),
    /// );
    ///
    /// assert_eq!(heap.peek(), Some(&(3, 'b')));
    /// ```
    #[must_use]
    pub fn from_vec_with_comparator<F>(elements: Vec<T>, comparator: F) -> Self
    where
        F: ComparatorFn<T>,
    {
        Self::heapify(elements, ReferenceCounter::new(comparator))
    }

    fn heapify(mut elements: Vec<T>, comparator: Comparator<T>) -> Self {
        let length = elements.len();

        for index in (0..length / 2).rev() {
            sift_down(&mut elements, index, comparator.as_ref());
        }

        Self {
            elements,
            comparator,
        }
    }

    /// Returns the number of elements in the heap.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the heap contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns a reference to the root element without removing it.
    ///
    /// Returns [`None`] on an empty heap.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Returns a new heap containing `element` in addition to everything the
    /// receiver holds.
    ///
    /// The new element starts at the end of the backing storage and sifts up
    /// until its parent no longer compares greater. Elements that compare
    /// equal to the newcomer stay where they are.
    ///
    /// # Complexity
    ///
    /// O(n) for the copy plus O(log n) for the sift.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentHeap;
    ///
    /// let heap = PersistentHeap::min_from(vec![1, 3, 2]);
    /// let grown = heap.add(0);
    ///
    /// assert_eq!(grown.peek(), Some(&0));
    /// assert_eq!(heap.peek(), Some(&1));
    /// ```
    #[must_use]
    pub fn add(&self, element: T) -> Self
    where
        T: Clone,
    {
        let mut elements = self.elements.clone();
        elements.push(element);
        let last = elements.len() - 1;
        sift_up(&mut elements, last, self.comparator.as_ref());

        Self {
            elements,
            comparator: ReferenceCounter::clone(&self.comparator),
        }
    }

    /// Removes the root, returning it together with the remaining heap.
    ///
    /// The last element moves into the vacated root slot and sifts down,
    /// descending into the smaller child and preferring the left child on
    /// ties. Returns [`None`] on an empty heap.
    ///
    /// # Complexity
    ///
    /// O(n) for the copy plus O(log n) for the sift.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentHeap;
    ///
    /// let heap = PersistentHeap::min_from(vec![1, 3, 2]);
    /// let (smallest, rest) = heap.remove().unwrap();
    ///
    /// assert_eq!(smallest, 1);
    /// assert_eq!(rest.peek(), Some(&2));
    /// assert_eq!(heap.len(), 3);
    /// ```
    #[must_use]
    pub fn remove(&self) -> Option<(T, Self)>
    where
        T: Clone,
    {
        if self.elements.is_empty() {
            return None;
        }

        let mut elements = self.elements.clone();
        let last = elements.len() - 1;
        elements.swap(0, last);
        let removed = elements.pop()?;

        if !elements.is_empty() {
            sift_down(&mut elements, 0, self.comparator.as_ref());
        }

        Some((
            removed,
            Self {
                elements,
                comparator: ReferenceCounter::clone(&self.comparator),
            },
        ))
    }

    /// Returns an empty heap that keeps the receiver's comparator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentHeap;
    ///
    /// let heap = PersistentHeap::max_from(vec![1, 2, 3]);
    /// let emptied = heap.clear();
    ///
    /// assert!(emptied.is_empty());
    /// assert_eq!(emptied.add(4).add(9).peek(), Some(&9));
    /// ```
    #[must_use]
    pub fn clear(&self) -> Self {
        Self {
            elements: Vec::new(),
            comparator: ReferenceCounter::clone(&self.comparator),
        }
    }

    /// Returns an iterator that yields owned elements in comparator order.
    ///
    /// The iterator drains a private copy of the heap, so it observes a
    /// snapshot: the heap itself is not modified, and versions created after
    /// the call do not affect the iteration.
    ///
    /// # Complexity
    ///
    /// O(n log n) over the whole sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentHeap;
    ///
    /// let heap = PersistentHeap::min_from(vec![5, 3, 7, 1, 4]);
    /// let sorted: Vec<i32> = heap.iter().collect();
    ///
    /// assert_eq!(sorted, vec![1, 3, 4, 5, 7]);
    /// assert_eq!(heap.len(), 5);
    /// ```
    #[must_use]
    pub fn iter(&self) -> PersistentHeapIterator<T>
    where
        T: Clone,
    {
        PersistentHeapIterator {
            elements: self.elements.clone(),
            comparator: ReferenceCounter::clone(&self.comparator),
        }
    }

    /// Consumes the heap and returns its elements sorted in comparator order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PersistentHeap;
    ///
    /// let heap = PersistentHeap::max_from(vec![2, 9, 4]);
    /// assert_eq!(heap.into_sorted_vec(), vec![9, 4, 2]);
    /// ```
    #[must_use]
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T: Clone> Clone for PersistentHeap<T> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            comparator: ReferenceCounter::clone(&self.comparator),
        }
    }
}

impl<T: Ord + 'static> Default for PersistentHeap<T> {
    fn default() -> Self {
        Self::min()
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistentHeap<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.elements.iter()).finish()
    }
}

impl<T: Clone + fmt::Display> fmt::Display for PersistentHeap<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self.iter() {
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

impl<T: Ord + 'static> FromIterator<T> for PersistentHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterable: I) -> Self {
        Self::min_from(iterable.into_iter().collect())
    }
}

impl<T> IntoIterator for PersistentHeap<T> {
    type Item = T;
    type IntoIter = PersistentHeapIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        PersistentHeapIterator {
            elements: self.elements,
            comparator: self.comparator,
        }
    }
}

impl<T: Clone> IntoIterator for &PersistentHeap<T> {
    type Item = T;
    type IntoIter = PersistentHeapIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Iterator
// =============================================================================

/// Draining iterator over a snapshot of a [`PersistentHeap`].
///
/// Yields owned elements in comparator order by repeatedly removing the root
/// of its private copy. Each step costs O(log n).
pub struct PersistentHeapIterator<T> {
    elements: Vec<T>,
    comparator: Comparator<T>,
}

impl<T> Iterator for PersistentHeapIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.elements.is_empty() {
            return None;
        }

        let last = self.elements.len() - 1;
        self.elements.swap(0, last);
        let removed = self.elements.pop();

        if !self.elements.is_empty() {
            sift_down(&mut self.elements, 0, self.comparator.as_ref());
        }

        removed
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.elements.len();
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for PersistentHeapIterator<T> {}

impl<T> FusedIterator for PersistentHeapIterator<T> {}
