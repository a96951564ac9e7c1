//! Persistent (immutable) singly-linked sequence.
//!
//! This module provides [`Sequence`], an immutable singly-linked sequence
//! that uses structural sharing, together with its transformation and
//! sorting operations:
//!
//! - **Core primitives**: construction, `cons`, `head`/`tail`, indexed
//!   access, `reverse`, `append`, single-element removal.
//! - **Transformations**: `map`, `filter`, `flat_map` (and its linear-time
//!   variant), run-length encoding, per-element duplication, rotation, and
//!   random sampling.
//! - **Sorting**: insertion sort, bottom-up merge sort, and work-list
//!   quicksort, each driven by a caller-supplied comparison.
//!
//! # Structural Sharing
//!
//! Every operation that "modifies" a sequence returns a new sequence that
//! shares unmodified suffixes with its input. A tail may be referenced by
//! any number of sequences at once; nothing is ever mutated after
//! construction.
//!
//! ```text
//! first:  1 -> 2 -> 3 -> nil
//! second = first.cons(0): 0 -> [1 -> 2 -> 3 -> nil]  // shares [1, 2, 3]
//! ```
//!
//! # Stack Safety
//!
//! Rust does not guarantee tail call optimization, so the classic
//! "process head, recurse on tail" formulation of these operations would
//! overflow the native stack on long inputs. Every operation in this module
//! is instead written as a loop over an explicit accumulator (linear passes)
//! or an explicit work-list (divide-and-conquer), so stack usage stays
//! bounded regardless of input size. Sequences of tens of thousands of
//! elements are routine; see the test suites for the exercises.
//!
//! # Examples
//!
//! ```rust
//! use catena::sequence::Sequence;
//!
//! let sequence = Sequence::new().cons(3).cons(2).cons(1);
//! assert_eq!(sequence.head(), Ok(&1));
//! assert_eq!(sequence.len(), 3);
//!
//! // The original is preserved
//! let extended = sequence.cons(0);
//! assert_eq!(sequence.len(), 3);
//! assert_eq!(extended.len(), 4);
//!
//! // Build from an iterator, transform, and sort
//! let sequence: Sequence<i32> = vec![3, 1, 2].into_iter().collect();
//! let doubled = sequence.map(|x| x * 2);
//! let sorted = doubled.merge_sort_by(|a, b| a.cmp(b));
//! let collected: Vec<i32> = sorted.into_iter().collect();
//! assert_eq!(collected, vec![2, 4, 6]);
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod error;
mod primitives;
mod sort;
mod transform;

pub use error::SequenceError;
pub use primitives::Sequence;
pub use primitives::SequenceIntoIterator;
pub use primitives::SequenceIterator;

// =============================================================================
// Tests
// =============================================================================
