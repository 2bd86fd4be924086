//! Exponential search over sorted input.

use core::cmp::Ordering;

use super::binary::search_sorted_window;
use super::SearchResult;

/// Exponential search over an ascending slice under the natural order.
///
/// Checks index 0, then doubles a bound (1, 2, 4, ...) while the element
/// there still compares at or below the target, and finishes with a binary
/// search over the window `[bound / 2, min(bound, n - 1)]`. The input is
/// assumed sorted; no validation scan runs, and the delegated binary step
/// performs none either, so the reported count is exactly the doubling
/// checks plus the binary probes.
///
/// # Examples
///
/// ```rust
/// use permafrost::searching::exponential_search;
///
/// let elements = [2, 4, 6, 8, 10, 12, 14, 16];
/// let result = exponential_search(&elements, &12);
///
/// assert_eq!(result.element, Some(12));
/// assert_eq!(result.index, Some(5));
/// ```
#[must_use]
pub fn exponential_search<T: Ord + Clone>(elements: &[T], target: &T) -> SearchResult<T> {
    exponential_search_by(elements, target, T::cmp)
}

/// Exponential search over a slice sorted under the given comparator.
///
/// # Examples
///
/// ```rust
/// use permafrost::searching::exponential_search_by;
///
/// let descending = [16, 8, 4, 2];
/// let result = exponential_search_by(&descending, &4, |a, b| b.cmp(a));
///
/// assert_eq!(result.index, Some(2));
/// ```
#[must_use]
pub fn exponential_search_by<T, F>(elements: &[T], target: &T, comparator: F) -> SearchResult<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    if elements.is_empty() {
        return SearchResult::not_found(0);
    }

    let mut comparisons = 1;

    if comparator(&elements[0], target) == Ordering::Equal {
        return SearchResult::found(elements[0].clone(), 0, comparisons);
    }

    let length = elements.len();
    let mut bound = 1;

    while bound < length {
        comparisons += 1;

        if comparator(&elements[bound], target) == Ordering::Greater {
            break;
        }

        bound *= 2;
    }

    let low = bound / 2;
    let high = (length - 1).min(bound);
    let mut result = search_sorted_window(elements, target, &comparator, low, high);
    result.comparisons += comparisons;

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(&[2, 4, 6, 8, 10, 12, 14, 16], 2, Some(0))]
    #[case(&[2, 4, 6, 8, 10, 12, 14, 16], 12, Some(5))]
    #[case(&[2, 4, 6, 8, 10, 12, 14, 16], 16, Some(7))]
    #[case(&[2, 4, 6, 8, 10, 12, 14, 16], 7, None)]
    #[case(&[2, 4, 6, 8, 10, 12, 14, 16], 100, None)]
    #[case(&[2, 4, 6, 8, 10, 12, 14, 16], 1, None)]
    fn test_exponential_search_locates_targets(
        #[case] elements: &[i32],
        #[case] target: i32,
        #[case] expected_index: Option<usize>,
    ) {
        let result = exponential_search(elements, &target);

        assert_eq!(result.index, expected_index);
        assert_eq!(result.element, expected_index.map(|index| elements[index]));
    }

    #[rstest]
    fn test_exponential_search_empty_input() {
        let result = exponential_search::<i32>(&[], &1);

        assert_eq!(result.index, None);
        assert_eq!(result.comparisons, 0);
    }

    #[rstest]
    fn test_exponential_search_first_element_costs_one_comparison() {
        let result = exponential_search(&[3, 5, 7], &3);

        assert_eq!(result.index, Some(0));
        assert_eq!(result.comparisons, 1);
    }

    #[rstest]
    fn test_exponential_search_sums_doubling_and_binary_probes() {
        let elements = [2, 4, 6, 8, 10, 12, 14, 16];
        let result = exponential_search(&elements, &12);

        // One check at index 0, three doubling checks (indices 1, 2, 4),
        // then two binary probes inside the window [4, 7].
        assert_eq!(result.comparisons, 6);
    }

    #[rstest]
    fn test_exponential_search_singleton() {
        let hit = exponential_search(&[9], &9);
        let miss = exponential_search(&[9], &4);

        assert_eq!(hit.index, Some(0));
        assert_eq!(hit.comparisons, 1);
        assert_eq!(miss.index, None);
    }

    #[rstest]
    fn test_exponential_search_by_descending_comparator() {
        let descending = [100, 50, 25, 10, 5, 1];
        let result = exponential_search_by(&descending, &10, |a, b| b.cmp(a));

        assert_eq!(result.element, Some(10));
        assert_eq!(result.index, Some(3));
    }

    #[rstest]
    fn test_exponential_search_every_position_in_long_input() {
        let elements: Vec<i64> = (0..64).map(|n| n * 3).collect();

        for (index, element) in elements.iter().enumerate() {
            let result = exponential_search(&elements, element);
            assert_eq!(result.index, Some(index), "failed to locate {element}");
        }
    }
}
