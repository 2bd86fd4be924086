//! Quicksort with Hoare partitioning.

use core::cmp::Ordering;

/// Sorts a slice into a new vector using quicksort and the natural order.
///
/// The input is copied once and sorted in place on the copy; the original
/// slice is never modified. Partitioning is Hoare's scheme with the middle
/// element of the current range as the pivot. Not stable: elements that
/// compare equal may change relative order.
///
/// # Complexity
///
/// O(n log n) on average, O(n^2) for adversarial inputs (no pivot
/// randomization is performed).
///
/// # Examples
///
/// ```rust
/// use permafrost::sorting::quick_sort;
///
/// let sorted = quick_sort(&[3, 1, 4, 1, 5, 9, 2, 6]);
/// assert_eq!(sorted, vec![1, 1, 2, 3, 4, 5, 6, 9]);
/// ```
#[must_use]
pub fn quick_sort<T: Ord + Clone>(elements: &[T]) -> Vec<T> {
    quick_sort_by(elements, T::cmp)
}

/// Sorts a slice into a new vector using quicksort and a caller-supplied
/// comparator.
///
/// # Arguments
///
/// * `elements` - Slice to sort; left untouched.
/// * `comparator` - Total order over `T`.
///
/// # Examples
///
/// ```rust
/// use permafrost::sorting::quick_sort_by;
///
/// let descending = quick_sort_by(&[3, 1, 4], |a, b| b.cmp(a));
/// assert_eq!(descending, vec![4, 3, 1]);
/// ```
#[must_use]
pub fn quick_sort_by<T, F>(elements: &[T], comparator: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let mut sorted = elements.to_vec();

    if sorted.len() > 1 {
        sort_range(&mut sorted, 0, elements.len() - 1, &comparator);
    }

    sorted
}

fn sort_range<T, F>(elements: &mut [T], low: usize, high: usize, comparator: &F)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    if low >= high {
        return;
    }

    let boundary = partition(elements, low, high, comparator);
    sort_range(elements, low, boundary, comparator);
    sort_range(elements, boundary + 1, high, comparator);
}

/// Hoare partition over `elements[low..=high]`.
///
/// Returns a boundary index in `[low, high)`; everything at or left of the
/// boundary compares `<=` the pivot under the comparator, everything right of
/// it compares `>=`.
fn partition<T, F>(elements: &mut [T], low: usize, high: usize, comparator: &F) -> usize
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let pivot = elements[low + (high - low) / 2].clone();
    let mut left = low;
    let mut right = high;

    loop {
        while comparator(&elements[left], &pivot) == Ordering::Less {
            left += 1;
        }

        while comparator(&elements[right], &pivot) == Ordering::Greater {
            right -= 1;
        }

        if left >= right {
            return right;
        }

        elements.swap(left, right);
        left += 1;
        right -= 1;
    }
}
