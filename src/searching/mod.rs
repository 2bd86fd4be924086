//! Searching functions with counted comparisons.
//!
//! Every algorithm reports a [`SearchResult`] carrying the found element, its
//! index, and the number of comparator invocations the algorithm itself made.
//! The count is part of each function's contract, documented per algorithm;
//! precondition validation scans are never counted.
//!
//! | Function | Input requirement | Validated |
//! |----------|-------------------|-----------|
//! | [`linear_search`] | none | - |
//! | [`binary_search`] | sorted | yes, `Err` on violation |
//! | [`jump_search`] | sorted | yes, `Err` on violation |
//! | [`interpolation_search`] | sorted ascending, numeric keys | no |
//! | [`exponential_search`] | sorted | no |
//! | [`search`] / [`search_numeric`] | none | routing only |
//!
//! The dispatchers never fail: [`search`] routes short or unsorted input to
//! linear search and sorted input to binary search, and [`search_numeric`]
//! additionally routes uniformly distributed numeric data to interpolation
//! search.
//!
//! ```rust
//! use permafrost::searching::search;
//!
//! let result = search(&[5, 3, 7, 1, 9], &7);
//!
//! assert_eq!(result.element, Some(7));
//! assert_eq!(result.index, Some(2));
//! ```

use core::cmp::Ordering;

mod binary;
mod error;
mod exponential;
mod interpolation;
mod jump;
mod linear;

pub use binary::{binary_search, binary_search_by};
pub use error::{SearchError, UnsortedInputError};
pub use exponential::{exponential_search, exponential_search_by};
pub use interpolation::{interpolation_search, InterpolationKey};
pub use jump::{jump_search, jump_search_by};
pub use linear::{linear_search, linear_search_by};

use binary::search_sorted_window;
use crate::sorting::{is_sorted, is_sorted_by};

/// Inputs at or below this length go straight to linear search in the
/// dispatchers.
const LINEAR_SEARCH_THRESHOLD: usize = 10;

/// Uniformity checks need at least this many elements to be meaningful.
const UNIFORMITY_MINIMUM_LENGTH: usize = 4;

// =============================================================================
// SearchResult
// =============================================================================

/// Outcome of a search: what was found, where, and at what cost.
///
/// `element` and `index` are both [`None`] on a miss and both set on a hit.
/// `comparisons` counts the comparator invocations the algorithm made for
/// this call; each algorithm documents its own counting rules.
///
/// # Examples
///
/// ```rust
/// use permafrost::searching::{linear_search, SearchResult};
///
/// let hit = linear_search(&[4, 8, 15], &8);
/// let miss = linear_search(&[4, 8, 15], &9);
///
/// assert_eq!(hit, SearchResult::found(8, 1, 2));
/// assert_eq!(miss, SearchResult::not_found(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<T> {
    /// The matching element, if one was found.
    pub element: Option<T>,
    /// Position of the match in the input slice, if one was found.
    pub index: Option<usize>,
    /// Number of counted comparator invocations.
    pub comparisons: usize,
}

impl<T> SearchResult<T> {
    /// Creates a hit result.
    #[must_use]
    pub const fn found(element: T, index: usize, comparisons: usize) -> Self {
        Self {
            element: Some(element),
            index: Some(index),
            comparisons,
        }
    }

    /// Creates a miss result.
    #[must_use]
    pub const fn not_found(comparisons: usize) -> Self {
        Self {
            element: None,
            index: None,
            comparisons,
        }
    }

    /// Returns `true` if the search located the target.
    #[inline]
    #[must_use]
    pub const fn is_found(&self) -> bool {
        self.index.is_some()
    }
}

// =============================================================================
// Adaptive Dispatchers
// =============================================================================

/// Searches a slice, choosing the algorithm from the input's size and shape.
///
/// Inputs of at most 10 elements use [`linear_search`]. Longer inputs are
/// scanned once for sortedness; the scan decides routing only and is not
/// counted. Unsorted input falls back to [`linear_search`], sorted input is
/// bisected directly without a second validation scan.
///
/// # Examples
///
/// ```rust
/// use permafrost::searching::search;
///
/// let short_and_unsorted = search(&[5, 3, 7, 1, 9], &7);
/// assert_eq!(short_and_unsorted.index, Some(2));
///
/// let long_and_sorted: Vec<i32> = (0..100).collect();
/// assert_eq!(search(&long_and_sorted, &37).index, Some(37));
/// ```
#[must_use]
pub fn search<T: Ord + Clone>(elements: &[T], target: &T) -> SearchResult<T> {
    search_by(elements, target, T::cmp)
}

/// Searches a slice under a caller-supplied comparator, choosing the
/// algorithm from the input's size and shape.
///
/// # Examples
///
/// ```rust
/// use permafrost::searching::search_by;
///
/// let descending: Vec<i32> = (0..50).rev().collect();
/// let result = search_by(&descending, &12, |a, b| b.cmp(a));
///
/// assert_eq!(result.index, Some(37));
/// ```
#[must_use]
pub fn search_by<T, F>(elements: &[T], target: &T, comparator: F) -> SearchResult<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    if elements.len() <= LINEAR_SEARCH_THRESHOLD {
        return linear_search_by(elements, target, &comparator);
    }

    if !is_sorted_by(elements, &comparator) {
        return linear_search_by(elements, target, &comparator);
    }

    search_sorted_window(elements, target, &comparator, 0, elements.len() - 1)
}

/// Searches a slice of numeric keys, choosing among linear, binary, and
/// interpolation search.
///
/// The routing policy extends [`search`]: sorted inputs whose consecutive
/// differences look uniform go to [`interpolation_search`], other sorted
/// inputs go to binary search, and short or unsorted inputs go to
/// [`linear_search`]. Uniformity is a heuristic, not a guarantee: it
/// requires at least 4 elements and accepts the data when the population
/// variance of the consecutive differences is below half their mean. Data
/// near that threshold may be routed either way.
///
/// # Examples
///
/// ```rust
/// use permafrost::searching::search_numeric;
///
/// let uniform: Vec<i64> = (0..100).map(|n| n * 10).collect();
/// let result = search_numeric(&uniform, &640);
///
/// assert_eq!(result.index, Some(64));
/// ```
#[must_use]
pub fn search_numeric<T>(elements: &[T], target: &T) -> SearchResult<T>
where
    T: InterpolationKey + Clone,
{
    if elements.len() <= LINEAR_SEARCH_THRESHOLD {
        return linear_search(elements, target);
    }

    if !is_sorted(elements) {
        return linear_search(elements, target);
    }

    if is_uniformly_distributed(elements) {
        return interpolation_search(elements, target);
    }

    search_sorted_window(elements, target, &T::cmp, 0, elements.len() - 1)
}

/// Decides whether consecutive differences are even enough for
/// interpolation to probe well.
#[allow(clippy::cast_precision_loss)]
fn is_uniformly_distributed<T: InterpolationKey>(elements: &[T]) -> bool {
    if elements.len() < UNIFORMITY_MINIMUM_LENGTH {
        return false;
    }

    let differences: Vec<f64> = elements
        .windows(2)
        .map(|pair| pair[1].interpolation_value() - pair[0].interpolation_value())
        .collect();

    let count = differences.len() as f64;
    let mean = differences.iter().sum::<f64>() / count;
    let variance = differences
        .iter()
        .map(|difference| (difference - mean).powi(2))
        .sum::<f64>()
        / count;

    variance < mean / 2.0
}
