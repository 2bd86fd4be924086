//! Error types for the searching algorithms.
//!
//! The sorted-input algorithms ([`binary_search`](crate::searching::binary_search)
//! and [`jump_search`](crate::searching::jump_search)) validate their
//! precondition with a full scan before probing and refuse unsorted input. A
//! missing target is never an error; it is a not-found
//! [`SearchResult`](crate::searching::SearchResult).

/// Represents unsorted input handed to an algorithm that requires sorted
/// input.
///
/// The payload names the algorithm whose precondition failed.
///
/// # Examples
///
/// ```rust
/// use permafrost::searching::UnsortedInputError;
///
/// let error = UnsortedInputError {
///     algorithm: "binary_search",
/// };
/// assert_eq!(
///     format!("{}", error),
///     "binary_search: input must be sorted in ascending comparator order."
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsortedInputError {
    /// Name of the algorithm whose sortedness precondition failed.
    pub algorithm: &'static str,
}

impl std::fmt::Display for UnsortedInputError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}: input must be sorted in ascending comparator order.",
            self.algorithm
        )
    }
}

impl std::error::Error for UnsortedInputError {}

/// Represents errors that can occur while searching.
///
/// Currently the only source is the sortedness precondition; the enum keeps
/// the door open for further variants.
///
/// # Examples
///
/// ```rust
/// use permafrost::searching::{SearchError, UnsortedInputError};
///
/// let error = SearchError::UnsortedInput(UnsortedInputError {
///     algorithm: "jump_search",
/// });
/// println!("{}", error);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// A sorted-input algorithm received unsorted input.
    UnsortedInput(UnsortedInputError),
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsortedInput(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for SearchError {}
