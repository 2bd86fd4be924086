//! Binary search with an explicit sortedness precondition.

use core::cmp::Ordering;

use super::error::{SearchError, UnsortedInputError};
use super::SearchResult;
use crate::sorting::is_sorted_by;

/// Binary search over a sorted slice under the natural order.
///
/// The input is validated first by scanning every adjacent pair; that scan
/// is a precondition check and contributes nothing to the reported
/// comparison count. Each probe afterwards costs exactly one counted
/// three-way comparison, so a slice of `n` elements is resolved in at most
/// `ceil(log2(n + 1))` counted comparisons.
///
/// # Errors
///
/// Returns [`SearchError::UnsortedInput`] when the slice is not sorted in
/// ascending order.
///
/// # Examples
///
/// ```rust
/// use permafrost::searching::binary_search;
///
/// let result = binary_search(&[1, 2, 3, 4, 5], &4)?;
///
/// assert_eq!(result.element, Some(4));
/// assert_eq!(result.index, Some(3));
/// assert!(result.comparisons <= 3);
/// # Ok::<(), permafrost::searching::SearchError>(())
/// ```
///
/// Unsorted input is refused before any probing:
///
/// ```rust
/// use permafrost::searching::binary_search;
///
/// assert!(binary_search(&[5, 2, 3, 1, 4], &3).is_err());
/// ```
pub fn binary_search<T: Ord + Clone>(
    elements: &[T],
    target: &T,
) -> Result<SearchResult<T>, SearchError> {
    binary_search_by(elements, target, T::cmp)
}

/// Binary search over a slice sorted under the given comparator.
///
/// The comparator must be the same total order the slice is sorted by.
///
/// # Errors
///
/// Returns [`SearchError::UnsortedInput`] when the slice is not sorted under
/// `comparator`.
///
/// # Examples
///
/// ```rust
/// use permafrost::searching::binary_search_by;
///
/// let descending = [9, 7, 5, 3, 1];
/// let result = binary_search_by(&descending, &3, |a, b| b.cmp(a))?;
///
/// assert_eq!(result.index, Some(3));
/// # Ok::<(), permafrost::searching::SearchError>(())
/// ```
pub fn binary_search_by<T, F>(
    elements: &[T],
    target: &T,
    comparator: F,
) -> Result<SearchResult<T>, SearchError>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    if !is_sorted_by(elements, &comparator) {
        return Err(SearchError::UnsortedInput(UnsortedInputError {
            algorithm: "binary_search",
        }));
    }

    if elements.is_empty() {
        return Ok(SearchResult::not_found(0));
    }

    Ok(search_sorted_window(
        elements,
        target,
        &comparator,
        0,
        elements.len() - 1,
    ))
}

/// Midpoint bisection over `elements[low..=high]`, which the caller
/// guarantees is sorted under `comparator`.
///
/// Indices in the returned result are absolute positions in `elements`.
/// Performs no validation scan; exponential search and the dispatchers call
/// this directly so precondition work is never double-counted.
pub(crate) fn search_sorted_window<T, F>(
    elements: &[T],
    target: &T,
    comparator: &F,
    low: usize,
    high: usize,
) -> SearchResult<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let mut comparisons = 0;
    let mut low_bound = low;
    let mut high_bound = high + 1;

    while low_bound < high_bound {
        let middle = low_bound + (high_bound - low_bound) / 2;
        comparisons += 1;

        match comparator(&elements[middle], target) {
            Ordering::Equal => {
                return SearchResult::found(elements[middle].clone(), middle, comparisons);
            }
            Ordering::Less => low_bound = middle + 1,
            Ordering::Greater => high_bound = middle,
        }
    }

    SearchResult::not_found(comparisons)
}
