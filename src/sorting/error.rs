//! Error types for the sorting algorithms.
//!
//! Only one condition in this module is an error: handing
//! [`counting_sort`](crate::sorting::counting_sort) an input containing a
//! negative element. Everything else the sorting functions accept (empty
//! input, duplicates, already-sorted input) is a normal case.

/// Represents a negative element encountered by counting sort.
///
/// Counting sort indexes a table by element value, so its domain is the
/// non-negative integers. The error carries the offending value and where it
/// was found.
///
/// # Examples
///
/// ```rust
/// use permafrost::sorting::NegativeElementError;
///
/// let error = NegativeElementError {
///     index: 2,
///     value: -7,
/// };
/// assert_eq!(
///     format!("{}", error),
///     "counting_sort: negative element -7 at index 2. Counting sort accepts non-negative integers only."
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NegativeElementError {
    /// Position of the offending element in the input slice.
    pub index: usize,
    /// The offending element itself.
    pub value: i64,
}

impl std::fmt::Display for NegativeElementError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "counting_sort: negative element {} at index {}. Counting sort accepts non-negative integers only.",
            self.value, self.index
        )
    }
}

impl std::error::Error for NegativeElementError {}

/// Represents errors that can occur while sorting.
///
/// Currently the only source is counting sort's domain check; the enum keeps
/// the door open for further variants.
///
/// # Examples
///
/// ```rust
/// use permafrost::sorting::{NegativeElementError, SortError};
///
/// let error = SortError::NegativeElement(NegativeElementError {
///     index: 0,
///     value: -1,
/// });
/// println!("{}", error);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    /// Counting sort received an element outside its non-negative domain.
    NegativeElement(NegativeElementError),
}

impl std::fmt::Display for SortError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeElement(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for SortError {}
