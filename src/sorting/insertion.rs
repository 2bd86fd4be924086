//! Insertion sort.

use core::cmp::Ordering;

/// Sorts a slice into a new vector using insertion sort and the natural
/// order.
///
/// Walks the copy left to right, holding the current element while strictly
/// greater predecessors shift one slot right, then drops it into the gap.
/// Stable, and O(n) when the input is already sorted, which is why the
/// adaptive [`sort`](crate::sorting::sort) uses it for short inputs.
///
/// # Complexity
///
/// O(n^2) worst case, O(n) best case.
///
/// # Examples
///
/// ```rust
/// use permafrost::sorting::insertion_sort;
///
/// let sorted = insertion_sort(&[12, 11, 13, 5, 6]);
/// assert_eq!(sorted, vec![5, 6, 11, 12, 13]);
/// ```
#[must_use]
pub fn insertion_sort<T: Ord + Clone>(elements: &[T]) -> Vec<T> {
    insertion_sort_by(elements, T::cmp)
}

/// Sorts a slice into a new vector using insertion sort and a caller-supplied
/// comparator.
///
/// Only strictly greater predecessors shift, so equal elements keep their
/// input order under any comparator.
///
/// # Examples
///
/// ```rust
/// use permafrost::sorting::insertion_sort_by;
///
/// let sorted = insertion_sort_by(&["fig", "banana", "kiwi"], |a, b| {
///     a.len().cmp(&b.len())
/// });
/// assert_eq!(sorted, vec!["fig", "kiwi", "banana"]);
/// ```
#[must_use]
pub fn insertion_sort_by<T, F>(elements: &[T], comparator: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let mut sorted = elements.to_vec();

    for index in 1..sorted.len() {
        let current = sorted[index].clone();
        let mut position = index;

        while position > 0 && comparator(&sorted[position - 1], &current) == Ordering::Greater {
            sorted[position] = sorted[position - 1].clone();
            position -= 1;
        }

        sorted[position] = current;
    }

    sorted
}
