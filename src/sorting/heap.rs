//! Heapsort over a private copy of the input.

use core::cmp::Ordering;

/// Sorts a slice into a new vector using heapsort and the natural order.
///
/// Builds a max-heap on the copy bottom-up, then repeatedly swaps the root
/// with the last element of the shrinking unsorted prefix and sifts the new
/// root down. Ascending output, not stable.
///
/// # Complexity
///
/// O(n log n) worst case, in place on the copy.
///
/// # Examples
///
/// ```rust
/// use permafrost::sorting::heap_sort;
///
/// let sorted = heap_sort(&[4, 10, 3, 5, 1]);
/// assert_eq!(sorted, vec![1, 3, 4, 5, 10]);
/// ```
#[must_use]
pub fn heap_sort<T: Ord + Clone>(elements: &[T]) -> Vec<T> {
    heap_sort_by(elements, T::cmp)
}

/// Sorts a slice into a new vector using heapsort and a caller-supplied
/// comparator.
///
/// # Examples
///
/// ```rust
/// use permafrost::sorting::heap_sort_by;
///
/// let sorted = heap_sort_by(&[4, 10, 3], |a, b| b.cmp(a));
/// assert_eq!(sorted, vec![10, 4, 3]);
/// ```
#[must_use]
pub fn heap_sort_by<T, F>(elements: &[T], comparator: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let mut sorted = elements.to_vec();
    let length = sorted.len();

    if length <= 1 {
        return sorted;
    }

    for index in (0..length / 2).rev() {
        sift_down(&mut sorted, index, length, &comparator);
    }

    for end in (1..length).rev() {
        sorted.swap(0, end);
        sift_down(&mut sorted, 0, end, &comparator);
    }

    sorted
}

/// Restores the max-heap property for `elements[..end]` starting at `start`.
///
/// The maximum under the comparator bubbles toward the root so that each
/// round of the sort can move it to the end of the unsorted prefix.
fn sift_down<T, F>(elements: &mut [T], start: usize, end: usize, comparator: &F)
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut current = start;

    loop {
        let left = 2 * current + 1;
        let right = left + 1;

        if left >= end {
            break;
        }

        let favored = if right < end
            && comparator(&elements[right], &elements[left]) == Ordering::Greater
        {
            right
        } else {
            left
        };

        if comparator(&elements[favored], &elements[current]) != Ordering::Greater {
            break;
        }

        elements.swap(current, favored);
        current = favored;
    }
}
