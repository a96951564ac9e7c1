//! Error types for sequence operations.
//!
//! Fallible sequence operations report failures through [`SequenceError`]
//! and propagate them to the caller unchanged: no operation retries or
//! suppresses an error internally, and there are no partial results.

/// Represents a failure of a sequence operation.
///
/// Two failure kinds exist:
///
/// - [`EmptyAccess`](Self::EmptyAccess): an operation that requires at least
///   one element was invoked on the empty sequence (`head`, `tail`,
///   `run_length_encode`, `sample` with a positive count).
/// - [`IndexOutOfRange`](Self::IndexOutOfRange): a position was requested
///   that cannot exist given the sequence's length.
///
/// # Examples
///
/// ```rust
/// use catena::sequence::{Sequence, SequenceError};
///
/// let empty: Sequence<i32> = Sequence::new();
/// assert_eq!(
///     empty.head(),
///     Err(SequenceError::EmptyAccess { operation: "head" })
/// );
///
/// let sequence = Sequence::singleton(1);
/// assert_eq!(
///     sequence.get(3),
///     Err(SequenceError::IndexOutOfRange { index: 3, length: 1 })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// An element-consuming operation was invoked on the empty sequence.
    EmptyAccess {
        /// The name of the operation that required a non-empty sequence.
        operation: &'static str,
    },
    /// The requested position does not exist in the sequence.
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// The length of the sequence at the time of the request.
        length: usize,
    },
}

impl std::fmt::Display for SequenceError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyAccess { operation } => {
                write!(formatter, "{operation}: the sequence is empty")
            }
            Self::IndexOutOfRange { index, length } => {
                write!(
                    formatter,
                    "index {index} out of range for sequence of length {length}"
                )
            }
        }
    }
}

impl std::error::Error for SequenceError {}
