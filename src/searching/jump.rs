//! Jump search over sorted input.

use core::cmp::Ordering;

use super::error::{SearchError, UnsortedInputError};
use super::SearchResult;
use crate::sorting::is_sorted_by;

/// Jump search over a sorted slice under the natural order.
///
/// Probes the last element of each `floor(sqrt(n))`-sized block until a block
/// that could contain the target is located, then scans that block linearly.
/// Sortedness is validated upfront like
/// [`binary_search`](crate::searching::binary_search); the validation scan is
/// not counted. Counted comparisons are the block-boundary probes, the linear
/// steps inside the located block, and one final equality check.
///
/// # Errors
///
/// Returns [`SearchError::UnsortedInput`] when the slice is not sorted in
/// ascending order.
///
/// # Examples
///
/// ```rust
/// use permafrost::searching::jump_search;
///
/// let elements = [1, 3, 5, 7, 9, 11, 13, 15, 17];
/// let result = jump_search(&elements, &15)?;
///
/// assert_eq!(result.element, Some(15));
/// assert_eq!(result.index, Some(7));
/// # Ok::<(), permafrost::searching::SearchError>(())
/// ```
pub fn jump_search<T: Ord + Clone>(
    elements: &[T],
    target: &T,
) -> Result<SearchResult<T>, SearchError> {
    jump_search_by(elements, target, T::cmp)
}

/// Jump search over a slice sorted under the given comparator.
///
/// # Errors
///
/// Returns [`SearchError::UnsortedInput`] when the slice is not sorted under
/// `comparator`.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn jump_search_by<T, F>(
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
            algorithm: "jump_search",
        }));
    }

    let length = elements.len();

    if length == 0 {
        return Ok(SearchResult::not_found(0));
    }

    let block_size = (length as f64).sqrt().floor() as usize;
    let mut comparisons = 0;
    let mut step = block_size;
    let mut previous = 0;

    // Probe the last element of each block until the target could lie inside.
    loop {
        let boundary = step.min(length) - 1;
        comparisons += 1;

        if comparator(&elements[boundary], target) != Ordering::Less {
            break;
        }

        previous = step;
        step += block_size;

        if previous >= length {
            return Ok(SearchResult::not_found(comparisons));
        }
    }

    // Walk the located block until the target position is reached or passed.
    loop {
        comparisons += 1;

        if comparator(&elements[previous], target) != Ordering::Less {
            break;
        }

        previous += 1;

        if previous == step.min(length) {
            return Ok(SearchResult::not_found(comparisons));
        }
    }

    comparisons += 1;

    if comparator(&elements[previous], target) == Ordering::Equal {
        Ok(SearchResult::found(
            elements[previous].clone(),
            previous,
            comparisons,
        ))
    } else {
        Ok(SearchResult::not_found(comparisons))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(&[1, 3, 5, 7, 9, 11, 13, 15, 17], 15, Some(7))]
    #[case(&[1, 3, 5, 7, 9, 11, 13, 15, 17], 1, Some(0))]
    #[case(&[1, 3, 5, 7, 9, 11, 13, 15, 17], 17, Some(8))]
    #[case(&[1, 3, 5, 7, 9, 11, 13, 15, 17], 8, None)]
    #[case(&[1, 3, 5, 7, 9, 11, 13, 15, 17], 100, None)]
    #[case(&[1, 3, 5, 7, 9, 11, 13, 15, 17], 0, None)]
    fn test_jump_search_locates_targets(
        #[case] elements: &[i32],
        #[case] target: i32,
        #[case] expected_index: Option<usize>,
    ) {
        let result = jump_search(elements, &target).unwrap();

        assert_eq!(result.index, expected_index);
        assert_eq!(result.element, expected_index.map(|index| elements[index]));
    }

    #[rstest]
    fn test_jump_search_rejects_unsorted_input() {
        let result = jump_search(&[4, 1, 3], &3);

        assert_eq!(
            result,
            Err(SearchError::UnsortedInput(UnsortedInputError {
                algorithm: "jump_search",
            }))
        );
    }

    #[rstest]
    fn test_jump_search_empty_input_is_a_miss() {
        let result = jump_search::<i32>(&[], &5).unwrap();

        assert_eq!(result.index, None);
        assert_eq!(result.comparisons, 0);
    }

    #[rstest]
    fn test_jump_search_counts_block_and_linear_probes() {
        let elements = [1, 3, 5, 7, 9, 11, 13, 15, 17];
        let result = jump_search(&elements, &15).unwrap();

        // Three block probes (indices 2, 5, 8), two linear steps (indices
        // 6, 7), one final equality check.
        assert_eq!(result.comparisons, 6);
    }

    #[rstest]
    fn test_jump_search_overrun_reports_block_probes_only() {
        let elements = [1, 3, 5, 7, 9, 11, 13, 15, 17];
        let result = jump_search(&elements, &100).unwrap();

        assert_eq!(result.index, None);
        assert_eq!(result.comparisons, 3);
    }

    #[rstest]
    fn test_jump_search_singleton_hit_and_miss() {
        let hit = jump_search(&[42], &42).unwrap();
        let miss = jump_search(&[42], &41).unwrap();

        assert_eq!(hit.index, Some(0));
        assert_eq!(miss.index, None);
    }

    #[rstest]
    fn test_jump_search_by_descending_comparator() {
        let descending = [17, 13, 9, 5, 1];
        let result = jump_search_by(&descending, &9, |a, b| b.cmp(a)).unwrap();

        assert_eq!(result.element, Some(9));
        assert_eq!(result.index, Some(2));
    }

    #[rstest]
    fn test_jump_search_duplicates_report_a_matching_index() {
        let elements = [1, 2, 2, 2, 3, 4, 5, 6, 7];
        let result = jump_search(&elements, &2).unwrap();

        assert_eq!(result.element, Some(2));
        assert_eq!(elements[result.index.unwrap()], 2);
    }
}
