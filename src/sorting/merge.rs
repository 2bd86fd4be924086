//! Top-down merge sort.

use core::cmp::Ordering;

/// Sorts a slice into a new vector using merge sort and the natural order.
///
/// Splits at the midpoint, sorts both halves, and merges. The merge takes
/// from the left run while its front compares less than or equal to the
/// right's, so the sort is stable: elements that compare equal keep their
/// input order.
///
/// # Complexity
///
/// O(n log n) with O(n) auxiliary storage.
///
/// # Examples
///
/// ```rust
/// use permafrost::sorting::merge_sort;
///
/// let sorted = merge_sort(&[5, 2, 8, 1, 9]);
/// assert_eq!(sorted, vec![1, 2, 5, 8, 9]);
/// ```
#[must_use]
pub fn merge_sort<T: Ord + Clone>(elements: &[T]) -> Vec<T> {
    merge_sort_by(elements, T::cmp)
}

/// Sorts a slice into a new vector using merge sort and a caller-supplied
/// comparator.
///
/// Stability holds under any comparator: ties resolve in favor of the left
/// run.
///
/// # Examples
///
/// ```rust
/// use permafrost::sorting::merge_sort_by;
///
/// let pairs = [(2, 'a'), (1, 'b'), (2, 'c')];
/// let sorted = merge_sort_by(&pairs, |a, b| a.0.cmp(&b.0));
/// assert_eq!(sorted, vec![(1, 'b'), (2, 'a'), (2, 'c')]);
/// ```
#[must_use]
pub fn merge_sort_by<T, F>(elements: &[T], comparator: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    sort_slice(elements, &comparator)
}

fn sort_slice<T, F>(elements: &[T], comparator: &F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    if elements.len() <= 1 {
        return elements.to_vec();
    }

    let middle = elements.len() / 2;
    let left = sort_slice(&elements[..middle], comparator);
    let right = sort_slice(&elements[middle..], comparator);

    merge(&left, &right, comparator)
}

fn merge<T, F>(left: &[T], right: &[T], comparator: &F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left_index = 0;
    let mut right_index = 0;

    while left_index < left.len() && right_index < right.len() {
        if comparator(&left[left_index], &right[right_index]) != Ordering::Greater {
            merged.push(left[left_index].clone());
            left_index += 1;
        } else {
            merged.push(right[right_index].clone());
            right_index += 1;
        }
    }

    merged.extend_from_slice(&left[left_index..]);
    merged.extend_from_slice(&right[right_index..]);
    merged
}
