//! Pure sorting functions.
//!
//! Every function in this module takes a borrowed slice and returns a fresh
//! sorted [`Vec`]; the input is never modified. Comparison-based algorithms
//! come in pairs: a plain entry for `T: Ord` and a `_by` entry accepting any
//! total-order comparator.
//!
//! | Function | Strategy | Stable |
//! |----------|----------|--------|
//! | [`quick_sort`] | Hoare partition, middle pivot | no |
//! | [`merge_sort`] | top-down split and merge | yes |
//! | [`heap_sort`] | in-place max-heap | no |
//! | [`insertion_sort`] | shift and drop | yes |
//! | [`counting_sort`] | value counting (`i64`, non-negative) | yes |
//! | [`sort`] | adaptive: insertion below 11 elements, else quick | no |
//!
//! ```rust
//! use permafrost::sorting::{is_sorted, sort};
//!
//! let sorted = sort(&[64, 34, 25, 12, 22, 11, 90]);
//! assert!(is_sorted(&sorted));
//! ```

use core::cmp::Ordering;

mod counting;
mod error;
mod heap;
mod insertion;
mod merge;
mod quick;

pub use counting::counting_sort;
pub use error::{NegativeElementError, SortError};
pub use heap::{heap_sort, heap_sort_by};
pub use insertion::{insertion_sort, insertion_sort_by};
pub use merge::{merge_sort, merge_sort_by};
pub use quick::{quick_sort, quick_sort_by};

/// Inputs at or below this length go to insertion sort in [`sort`].
const INSERTION_SORT_THRESHOLD: usize = 10;

/// Sorts a slice into a new vector, choosing the algorithm by input length.
///
/// Short inputs (at most 10 elements) use [`insertion_sort`]; everything
/// longer uses [`quick_sort`]. No other heuristics are applied, so the
/// result is not guaranteed to be stable.
///
/// # Examples
///
/// ```rust
/// use permafrost::sorting::sort;
///
/// assert_eq!(sort(&[3, 1, 2]), vec![1, 2, 3]);
/// ```
#[must_use]
pub fn sort<T: Ord + Clone>(elements: &[T]) -> Vec<T> {
    sort_by(elements, T::cmp)
}

/// Sorts a slice into a new vector under a caller-supplied comparator,
/// choosing the algorithm by input length.
///
/// # Examples
///
/// ```rust
/// use permafrost::sorting::sort_by;
///
/// let sorted = sort_by(&[1, 3, 2], |a, b| b.cmp(a));
/// assert_eq!(sorted, vec![3, 2, 1]);
/// ```
#[must_use]
pub fn sort_by<T, F>(elements: &[T], comparator: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    if elements.len() <= INSERTION_SORT_THRESHOLD {
        insertion_sort_by(elements, comparator)
    } else {
        quick_sort_by(elements, comparator)
    }
}

/// Returns `true` if every adjacent pair is in non-decreasing natural order.
///
/// Slices shorter than two elements are vacuously sorted.
///
/// # Examples
///
/// ```rust
/// use permafrost::sorting::is_sorted;
///
/// assert!(is_sorted(&[1, 2, 2, 3]));
/// assert!(!is_sorted(&[2, 1]));
/// assert!(is_sorted::<i32>(&[]));
/// ```
#[must_use]
pub fn is_sorted<T: Ord>(elements: &[T]) -> bool {
    is_sorted_by(elements, T::cmp)
}

/// Returns `true` if every adjacent pair is non-decreasing under the given
/// comparator.
#[must_use]
pub fn is_sorted_by<T, F>(elements: &[T], comparator: F) -> bool
where
    F: Fn(&T, &T) -> Ordering,
{
    elements
        .windows(2)
        .all(|pair| comparator(&pair[0], &pair[1]) != Ordering::Greater)
}
