//! Linear search.

use core::cmp::Ordering;

use super::SearchResult;

/// Scans left to right for the first element equal to `target`.
///
/// Works on unsorted input. Every visited element costs exactly one counted
/// comparison, including the matching one, so a hit at index `k` reports
/// `k + 1` comparisons and a miss reports the input length.
///
/// # Examples
///
/// ```rust
/// use permafrost::searching::linear_search;
///
/// let result = linear_search(&[5, 3, 7, 1, 9], &7);
///
/// assert_eq!(result.element, Some(7));
/// assert_eq!(result.index, Some(2));
/// assert_eq!(result.comparisons, 3);
/// ```
#[must_use]
pub fn linear_search<T: Ord + Clone>(elements: &[T], target: &T) -> SearchResult<T> {
    linear_search_by(elements, target, T::cmp)
}

/// Scans left to right for the first element the comparator places equal to
/// `target`.
///
/// # Examples
///
/// ```rust
/// use permafrost::searching::linear_search_by;
///
/// let words = ["kiwi", "fig", "banana"];
/// let result = linear_search_by(&words, &"pear", |a, b| a.len().cmp(&b.len()));
///
/// assert_eq!(result.element, Some("kiwi"));
/// assert_eq!(result.index, Some(0));
/// ```
#[must_use]
pub fn linear_search_by<T, F>(elements: &[T], target: &T, comparator: F) -> SearchResult<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let mut comparisons = 0;

    for (index, element) in elements.iter().enumerate() {
        comparisons += 1;

        if comparator(element, target) == Ordering::Equal {
            return SearchResult::found(element.clone(), index, comparisons);
        }
    }

    SearchResult::not_found(comparisons)
}
