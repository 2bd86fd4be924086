//! Counting sort for non-negative integers.

use super::error::{NegativeElementError, SortError};

/// Sorts non-negative integers into a new vector by counting occurrences.
///
/// Builds a cumulative count table indexed by element value and places
/// elements back to front, so runs of equal values keep their input order.
/// The whole input is validated first: a negative element anywhere fails the
/// call before any sorting work happens.
///
/// # Complexity
///
/// O(n + k) time and space, where `k` is the maximum value in the input.
///
/// # Errors
///
/// Returns [`SortError::NegativeElement`] naming the first offending index
/// and value when the input contains a negative integer.
///
/// # Examples
///
/// ```rust
/// use permafrost::sorting::counting_sort;
///
/// let sorted = counting_sort(&[4, 2, 2, 8, 3, 3, 1])?;
/// assert_eq!(sorted, vec![1, 2, 2, 3, 3, 4, 8]);
/// # Ok::<(), permafrost::sorting::SortError>(())
/// ```
///
/// A negative element is reported, not sorted:
///
/// ```rust
/// use permafrost::sorting::{counting_sort, NegativeElementError, SortError};
///
/// let result = counting_sort(&[3, -1, 2]);
/// assert_eq!(
///     result,
///     Err(SortError::NegativeElement(NegativeElementError {
///         index: 1,
///         value: -1,
///     }))
/// );
/// ```
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub fn counting_sort(elements: &[i64]) -> Result<Vec<i64>, SortError> {
    for (index, &value) in elements.iter().enumerate() {
        if value < 0 {
            return Err(SortError::NegativeElement(NegativeElementError {
                index,
                value,
            }));
        }
    }

    if elements.is_empty() {
        return Ok(Vec::new());
    }

    let maximum = elements.iter().copied().max().unwrap_or(0) as usize;
    let mut counts = vec![0_usize; maximum + 1];

    for &value in elements {
        counts[value as usize] += 1;
    }

    for index in 1..counts.len() {
        counts[index] += counts[index - 1];
    }

    let mut sorted = vec![0_i64; elements.len()];

    for &value in elements.iter().rev() {
        let slot = counts[value as usize] - 1;
        sorted[slot] = value;
        counts[value as usize] = slot;
    }

    Ok(sorted)
}
