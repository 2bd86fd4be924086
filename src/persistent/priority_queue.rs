//! Persistent priority queues.
//!
//! [`PriorityQueue`] serves elements smallest-first under its comparator;
//! [`MaxPriorityQueue`] is the same structure with the comparison operands
//! swapped, so it serves largest-first. Both use the array-backed binary
//! heap layout (see [`PersistentHeap`](super::PersistentHeap) for the layout
//! itself) and both are persistent: [`enqueue`](PriorityQueue::enqueue) and
//! [`dequeue`](PriorityQueue::dequeue) return new queues and never touch the
//! receiver.
//!
//! ```rust
//! use permafrost::persistent::PriorityQueue;
//!
//! let queue = PriorityQueue::new().enqueue(5).enqueue(1).enqueue(3);
//! let (first, rest) = queue.dequeue().unwrap();
//!
//! assert_eq!(first, 1);
//! assert_eq!(rest.peek(), Some(&3));
//! assert_eq!(queue.len(), 3);
//! ```

use core::cmp::Ordering;
use core::fmt;
use core::iter::FusedIterator;

use super::{Comparator, ComparatorFn, ReferenceCounter};

// =============================================================================
// Bubble Primitives
// =============================================================================

/// Bubbles the element at `start` toward the front while it compares `Less`
/// than its parent. Equal elements stay put.
fn bubble_up<T>(elements: &mut [T], start: usize, compare: &dyn Fn(&T, &T) -> Ordering) {
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

/// Bubbles the element at `start` toward the back, descending into the child
/// that compares smaller and preferring the left child on ties.
fn bubble_down<T>(elements: &mut [T], start: usize, compare: &dyn Fn(&T, &T) -> Ordering) {
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

// =============================================================================
// PriorityQueue
// =============================================================================

/// Persistent queue that always dequeues the element comparing smallest.
///
/// # Examples
///
/// ```rust
/// use permafrost::persistent::PriorityQueue;
///
/// let queue = PriorityQueue::from_vec(vec![4, 2, 8]);
/// let (first, rest) = queue.dequeue().unwrap();
///
/// assert_eq!(first, 2);
/// assert_eq!(rest.len(), 2);
/// ```
pub struct PriorityQueue<T> {
    elements: Vec<T>,
    comparator: Comparator<T>,
}

impl<T> PriorityQueue<T> {
    /// Creates an empty queue over the natural ascending order.
    #[must_use]
    pub fn new() -> Self
    where
        T: Ord + 'static,
    {
        Self {
            elements: Vec::new(),
            comparator: ReferenceCounter::new(|a: &T, b: &T| a.cmp(b)),
        }
    }

    /// Creates an empty queue over a caller-supplied total order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PriorityQueue;
    ///
    /// let queue = PriorityQueue::with_comparator(|a: &(&str, u8), b: &(&str, u8)| {
    ///     a.1.cmp(&b.1)
    /// });
    /// let queue = queue.enqueue(("low", 1)).enqueue(("high", 9));
    ///
    /// assert_eq!(queue.peek(), Some(&("low", 1)));
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

    /// Builds a queue from a vector in O(n) under the natural order.
    #[must_use]
    pub fn from_vec(elements: Vec<T>) -> Self
    where
        T: Ord + 'static,
    {
        Self::heapify(elements, ReferenceCounter::new(|a: &T, b: &T| a.cmp(b)))
    }

    /// Builds a queue from a vector in O(n) under a caller-supplied order.
    #[must_use]
    pub fn from_vec_with_comparator<F>(elements: Vec<T>, comparator: F) -> Self
    where
        F: ComparatorFn<T>,
    {
        Self::heapify(elements, ReferenceCounter::new(comparator))
    }

    fn heapify(mut elements: Vec<T>, comparator: Comparator<T>) -> Self {
        for index in (0..elements.len() / 2).rev() {
            bubble_down(&mut elements, index, comparator.as_ref());
        }

        Self {
            elements,
            comparator,
        }
    }

    /// Returns the number of queued elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the queue holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns a reference to the element that would dequeue next.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Returns a new queue with `element` added.
    ///
    /// # Complexity
    ///
    /// O(n) copy + O(log n) bubble.
    #[must_use]
    pub fn enqueue(&self, element: T) -> Self
    where
        T: Clone,
    {
        let mut elements = self.elements.clone();
        elements.push(element);
        let last = elements.len() - 1;
        bubble_up(&mut elements, last, self.comparator.as_ref());

        Self {
            elements,
            comparator: ReferenceCounter::clone(&self.comparator),
        }
    }

    /// Removes the front element, returning it with the remaining queue.
    ///
    /// Returns [`None`] on an empty queue.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::PriorityQueue;
    ///
    /// let queue = PriorityQueue::from_vec(vec![3, 1, 2]);
    /// let (front, rest) = queue.dequeue().unwrap();
    ///
    /// assert_eq!(front, 1);
    /// assert_eq!(rest.peek(), Some(&2));
    /// ```
    #[must_use]
    pub fn dequeue(&self) -> Option<(T, Self)>
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
            bubble_down(&mut elements, 0, self.comparator.as_ref());
        }

        Some((
            removed,
            Self {
                elements,
                comparator: ReferenceCounter::clone(&self.comparator),
            },
        ))
    }

    /// Returns an empty queue that keeps the receiver's comparator.
    #[must_use]
    pub fn clear(&self) -> Self {
        Self {
            elements: Vec::new(),
            comparator: ReferenceCounter::clone(&self.comparator),
        }
    }

    /// Returns an iterator yielding owned elements in dequeue order.
    ///
    /// Drains a private snapshot; the queue itself is unaffected.
    #[must_use]
    pub fn iter(&self) -> PriorityQueueIterator<T>
    where
        T: Clone,
    {
        PriorityQueueIterator {
            elements: self.elements.clone(),
            comparator: ReferenceCounter::clone(&self.comparator),
        }
    }
}

impl<T: Clone> Clone for PriorityQueue<T> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            comparator: ReferenceCounter::clone(&self.comparator),
        }
    }
}

impl<T: Ord + 'static> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for PriorityQueue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.elements.iter()).finish()
    }
}

impl<T: Clone + fmt::Display> fmt::Display for PriorityQueue<T> {
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

impl<T: Ord + 'static> FromIterator<T> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterable: I) -> Self {
        Self::from_vec(iterable.into_iter().collect())
    }
}

impl<T> IntoIterator for PriorityQueue<T> {
    type Item = T;
    type IntoIter = PriorityQueueIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        PriorityQueueIterator {
            elements: self.elements,
            comparator: self.comparator,
        }
    }
}

impl<T: Clone> IntoIterator for &PriorityQueue<T> {
    type Item = T;
    type IntoIter = PriorityQueueIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Draining iterator over a snapshot of a [`PriorityQueue`].
pub struct PriorityQueueIterator<T> {
    elements: Vec<T>,
    comparator: Comparator<T>,
}

impl<T> Iterator for PriorityQueueIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.elements.is_empty() {
            return None;
        }

        let last = self.elements.len() - 1;
        self.elements.swap(0, last);
        let removed = self.elements.pop();

        if !self.elements.is_empty() {
            bubble_down(&mut self.elements, 0, self.comparator.as_ref());
        }

        removed
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.elements.len();
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for PriorityQueueIterator<T> {}

impl<T> FusedIterator for PriorityQueueIterator<T> {}

// =============================================================================
// MaxPriorityQueue
// =============================================================================

/// Persistent queue that always dequeues the element comparing largest.
///
/// Wraps a [`PriorityQueue`] whose comparator has its operands swapped, so
/// every queue operation is a direct delegation.
///
/// # Examples
///
/// ```rust
/// use permafrost::persistent::MaxPriorityQueue;
///
/// let queue = MaxPriorityQueue::new().enqueue(5).enqueue(1).enqueue(9);
/// let (first, _) = queue.dequeue().unwrap();
///
/// assert_eq!(first, 9);
/// ```
pub struct MaxPriorityQueue<T> {
    inner: PriorityQueue<T>,
}

impl<T> MaxPriorityQueue<T> {
    /// Creates an empty queue over the natural descending order.
    #[must_use]
    pub fn new() -> Self
    where
        T: Ord + 'static,
    {
        Self {
            inner: PriorityQueue::with_comparator(|a: &T, b: &T| b.cmp(a)),
        }
    }

    /// Creates an empty queue that dequeues largest-first under the given
    /// comparator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use permafrost::persistent::MaxPriorityQueue;
    ///
    /// let queue = MaxPriorityQueue::with_comparator(|a: &&str, b: &&str| {
    ///     a.len().cmp(&b.len())
    /// });
    /// let queue = queue.enqueue("to").enqueue("three").enqueue("a");
    ///
    /// assert_eq!(queue.peek(), Some(&"three"));
    /// ```
    #[must_use]
    pub fn with_comparator<F>(comparator: F) -> Self
    where
        T: 'static,
        F: ComparatorFn<T>,
    {
        Self {
            inner: PriorityQueue::with_comparator(move |a: &T, b: &T| comparator(b, a)),
        }
    }

    /// Builds a queue from a vector in O(n) under the natural descending
    /// order.
    #[must_use]
    pub fn from_vec(elements: Vec<T>) -> Self
    where
        T: Ord + 'static,
    {
        Self {
            inner: PriorityQueue::from_vec_with_comparator(elements, |a: &T, b: &T| b.cmp(a)),
        }
    }

    /// Returns the number of queued elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the queue holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns a reference to the element that would dequeue next.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.inner.peek()
    }

    /// Returns a new queue with `element` added.
    #[must_use]
    pub fn enqueue(&self, element: T) -> Self
    where
        T: Clone,
    {
        Self {
            inner: self.inner.enqueue(element),
        }
    }

    /// Removes the largest element, returning it with the remaining queue.
    ///
    /// Returns [`None`] on an empty queue.
    #[must_use]
    pub fn dequeue(&self) -> Option<(T, Self)>
    where
        T: Clone,
    {
        self.inner
            .dequeue()
            .map(|(element, rest)| (element, Self { inner: rest }))
    }

    /// Returns an empty queue that keeps the receiver's comparator.
    #[must_use]
    pub fn clear(&self) -> Self {
        Self {
            inner: self.inner.clear(),
        }
    }

    /// Returns an iterator yielding owned elements largest-first.
    #[must_use]
    pub fn iter(&self) -> MaxPriorityQueueIterator<T>
    where
        T: Clone,
    {
        MaxPriorityQueueIterator {
            inner: self.inner.iter(),
        }
    }
}

impl<T: Clone> Clone for MaxPriorityQueue<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Ord + 'static> Default for MaxPriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for MaxPriorityQueue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, formatter)
    }
}

impl<T: Clone + fmt::Display> fmt::Display for MaxPriorityQueue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, formatter)
    }
}

impl<T: Ord + 'static> FromIterator<T> for MaxPriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterable: I) -> Self {
        Self::from_vec(iterable.into_iter().collect())
    }
}

impl<T> IntoIterator for MaxPriorityQueue<T> {
    type Item = T;
    type IntoIter = MaxPriorityQueueIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        MaxPriorityQueueIterator {
            inner: self.inner.into_iter(),
        }
    }
}

impl<T: Clone> IntoIterator for &MaxPriorityQueue<T> {
    type Item = T;
    type IntoIter = MaxPriorityQueueIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Draining iterator over a snapshot of a [`MaxPriorityQueue`].
pub struct MaxPriorityQueueIterator<T> {
    inner: PriorityQueueIterator<T>,
}

impl<T> Iterator for MaxPriorityQueueIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for MaxPriorityQueueIterator<T> {}

impl<T> FusedIterator for MaxPriorityQueueIterator<T> {}
