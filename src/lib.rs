//! # catena
//!
//! A persistent (immutable) singly-linked sequence with structural sharing,
//! stack-safe transformations, and comparator-driven sorting.
//!
//! ## Overview
//!
//! The crate provides a single data structure, [`Sequence`], and builds
//! everything else on its public primitives:
//!
//! - **Core primitives**: O(1) `cons`/`head`/`tail`, indexed access,
//!   `reverse`, `append`, single-element removal - every "modification"
//!   returns a new sequence sharing unmodified suffixes with its input.
//! - **Transformations**: order-preserving `map`/`filter`/`flat_map`
//!   (quadratic baseline and linear variant), run-length encoding,
//!   per-element duplication, rotation with wraparound, and random
//!   sampling with replacement.
//! - **Sorting**: insertion sort, bottom-up merge sort, and work-list
//!   quicksort, each taking a caller-supplied comparison.
//!
//! Every operation is written with explicit accumulators or work-lists
//! instead of per-element native recursion, so sequences of tens of
//! thousands of elements never exhaust the call stack.
//!
//! ## Feature Flags
//!
//! - `arc`: share nodes with `Arc` instead of `Rc` (thread-safe sequences)
//! - `serde`: `Serialize`/`Deserialize` implementations for [`Sequence`]
//!
//! ## Example
//!
//! ```rust
//! use catena::prelude::*;
//!
//! let sequence: Sequence<i32> = vec![3, 1, 2, 4, 5].into_iter().collect();
//! let sorted = sequence.merge_sort_by(|a, b| a.cmp(b));
//! let collected: Vec<i32> = sorted.into_iter().collect();
//! assert_eq!(collected, vec![1, 2, 3, 4, 5]);
//! ```
//!
//! [`Sequence`]: sequence::Sequence

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the sequence type and its error type.
///
/// # Usage
///
/// ```rust
/// use catena::prelude::*;
/// ```
pub mod prelude {
    pub use crate::sequence::Sequence;
    pub use crate::sequence::SequenceError;
}

pub mod sequence;
