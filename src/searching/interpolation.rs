//! Interpolation search for numeric keys.

use core::cmp::Ordering;

use super::SearchResult;

/// Key types interpolation search can project onto the number line.
///
/// [`interpolation_search`] estimates a probe position from the numeric
/// distance between the target and the window bounds, so its elements must
/// map into `f64`. The projection must be monotone with respect to the
/// [`Ord`] order: `a <= b` implies
/// `a.interpolation_value() <= b.interpolation_value()`.
///
/// Implementations are provided for the primitive integers. Floating-point
/// types are deliberately absent: they are not [`Ord`].
pub trait InterpolationKey: Ord {
    /// Projects the key onto the number line.
    fn interpolation_value(&self) -> f64;
}

macro_rules! impl_interpolation_key {
    ($($integer:ty),* $(,)?) => {
        $(
            impl InterpolationKey for $integer {
                #[allow(clippy::cast_lossless, clippy::cast_precision_loss)]
                fn interpolation_value(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_interpolation_key!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Interpolation search over an ascending slice of numeric keys.
///
/// Instead of bisecting, each iteration probes where the target *should* sit
/// if the values were evenly spread across the active window:
/// `low + floor((high - low) * (target - arr[low]) / (arr[high] - arr[low]))`.
/// On evenly distributed data this resolves in O(log log n) probes; on
/// skewed data it degrades toward O(n). The input is assumed to be sorted
/// ascending; no validation scan is performed.
///
/// Counted comparisons: one per probe, one for a singleton window, and one
/// per element scanned when the window has collapsed to a single repeated
/// value (the probe formula's denominator would be zero there, so the window
/// is scanned linearly instead).
///
/// The loop ends as soon as the target falls outside the window's value
/// range, so a target smaller than the first element or larger than the last
/// reports a miss with zero comparisons.
///
/// # Examples
///
/// ```rust
/// use permafrost::searching::interpolation_search;
///
/// let elements = [10, 20, 30, 40, 50, 60, 70, 80, 90, 100];
/// let result = interpolation_search(&elements, &70);
///
/// assert_eq!(result.element, Some(70));
/// assert_eq!(result.index, Some(6));
/// assert_eq!(result.comparisons, 1);
/// ```
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn interpolation_search<T>(elements: &[T], target: &T) -> SearchResult<T>
where
    T: InterpolationKey + Clone,
{
    if elements.is_empty() {
        return SearchResult::not_found(0);
    }

    let mut comparisons = 0;
    let mut low = 0;
    let mut high = elements.len() - 1;

    while low <= high && *target >= elements[low] && *target <= elements[high] {
        if low == high {
            comparisons += 1;

            if elements[low] == *target {
                return SearchResult::found(elements[low].clone(), low, comparisons);
            }

            return SearchResult::not_found(comparisons);
        }

        // A window whose bounds are equal is one repeated value; the probe
        // denominator would be zero, so scan it linearly.
        if elements[low] == elements[high] {
            for index in low..=high {
                comparisons += 1;

                if elements[index] == *target {
                    return SearchResult::found(elements[index].clone(), index, comparisons);
                }
            }

            return SearchResult::not_found(comparisons);
        }

        let low_value = elements[low].interpolation_value();
        let high_value = elements[high].interpolation_value();
        let target_value = target.interpolation_value();
        let span = (high - low) as f64;
        let offset = (span * (target_value - low_value) / (high_value - low_value)).floor();
        let position = (low + offset as usize).min(high);

        comparisons += 1;

        match elements[position].cmp(target) {
            Ordering::Equal => {
                return SearchResult::found(elements[position].clone(), position, comparisons);
            }
            Ordering::Less => low = position + 1,
            Ordering::Greater if position == 0 => break,
            Ordering::Greater => high = position - 1,
        }
    }

    SearchResult::not_found(comparisons)
}
