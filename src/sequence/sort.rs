//! Comparator-driven sorting over [`Sequence`].
//!
//! Three algorithms with distinct complexity contracts, all parameterized
//! by a caller-supplied total order so the sequence type itself stays
//! ordering-agnostic. None of them use native call recursion: insertion
//! sort folds into a sorted accumulator, merge sort works bottom-up over
//! generations of runs, and quicksort drives an explicit work-list of
//! pending sublists.

use std::cmp::Ordering;

use super::Sequence;

impl<T: Clone> Sequence<T> {
    /// Sorts the sequence by repeated ordered insertion.
    ///
    /// Each element is inserted into a sorted accumulator by walking it
    /// from the front until an element compares `Greater`; ties keep the
    /// earlier-inserted element first, so the sort is stable.
    ///
    /// # Complexity
    ///
    /// O(n²)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::sequence::Sequence;
    ///
    /// let sequence: Sequence<i32> = vec![3, 1, 2, 4, 5].into_iter().collect();
    /// let sorted = sequence.insertion_sort_by(|a, b| a.cmp(b));
    /// let collected: Vec<i32> = sorted.into_iter().collect();
    /// assert_eq!(collected, vec![1, 2, 3, 4, 5]);
    /// ```
    #[must_use]
    pub fn insertion_sort_by<F>(&self, compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering,
    {
        let mut sorted = Self::new();
        for item in self {
            sorted = insert_ordered(&sorted, item.clone(), &compare);
        }
        sorted
    }

    /// Sorts the sequence with the element type's intrinsic order, by
    /// repeated ordered insertion.
    #[must_use]
    pub fn insertion_sort(&self) -> Self
    where
        T: Ord,
    {
        self.insertion_sort_by(T::cmp)
    }

    /// Sorts the sequence with a bottom-up merge sort.
    ///
    /// Starts from one singleton run per element, then merges runs
    /// pairwise, left to right, generation after generation until a single
    /// run remains. The pairwise merge takes from the first run on ties;
    /// because the first run always sits earlier in the current generation
    /// and singleton runs start in input order, equal elements keep their
    /// original relative order (the sort is stable).
    ///
    /// # Complexity
    ///
    /// O(n log n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::sequence::Sequence;
    ///
    /// let sequence: Sequence<i32> = vec![3, 1, 2, 4, 5].into_iter().collect();
    /// let sorted = sequence.merge_sort_by(|a, b| a.cmp(b));
    /// let collected: Vec<i32> = sorted.into_iter().collect();
    /// assert_eq!(collected, vec![1, 2, 3, 4, 5]);
    /// ```
    #[must_use]
    pub fn merge_sort_by<F>(&self, compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering,
    {
        let mut runs: Vec<Self> = self
            .iter()
            .map(|item| Self::singleton(item.clone()))
            .collect();

        while runs.len() > 1 {
            let mut next_generation = Vec::with_capacity(runs.len().div_ceil(2));
            let mut pending = runs.into_iter();
            while let Some(first) = pending.next() {
                match pending.next() {
                    Some(second) => next_generation.push(merge_runs(&first, &second, &compare)),
                    None => next_generation.push(first),
                }
            }
            runs = next_generation;
        }

        runs.pop().unwrap_or_default()
    }

    /// Sorts the sequence with the element type's intrinsic order, using
    /// a bottom-up merge sort.
    #[must_use]
    pub fn merge_sort(&self) -> Self
    where
        T: Ord,
    {
        self.merge_sort_by(T::cmp)
    }

    /// Sorts the sequence with a work-list quicksort.
    ///
    /// The pivot is always the first element of the sublist being
    /// partitioned, so already-sorted or reverse-sorted input degrades to
    /// the quadratic worst case; average cost is O(n log n). Instead of
    /// recursing, pending sublists live on an explicit stack: each popped
    /// sublist is either finalized (empty or singleton) onto the front of
    /// the output, or partitioned around its head into a less-or-equal
    /// group and a greater group - relative order within each group is
    /// preserved - which are pushed back as less-or-equal, singleton
    /// pivot, greater, in that order.
    ///
    /// # Complexity
    ///
    /// Average O(n log n), worst case O(n²)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::sequence::Sequence;
    ///
    /// let sequence: Sequence<i32> = vec![3, 1, 2, 4, 5].into_iter().collect();
    /// let sorted = sequence.quick_sort_by(|a, b| a.cmp(b));
    /// let collected: Vec<i32> = sorted.into_iter().collect();
    /// assert_eq!(collected, vec![1, 2, 3, 4, 5]);
    /// ```
    #[must_use]
    pub fn quick_sort_by<F>(&self, compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering,
    {
        let mut pending: Vec<Self> = vec![self.clone()];
        let mut sorted = Self::new();

        while let Some(sublist) = pending.pop() {
            if sublist.len() <= 1 {
                if let Some((item, _)) = sublist.uncons() {
                    sorted = sorted.cons(item.clone());
                }
                continue;
            }

            let Some((pivot, rest)) = sublist.uncons() else {
                continue;
            };
            let (not_greater, greater) =
                rest.partition(|item| compare(item, pivot) != Ordering::Greater);

            // The greater group ends up on top of the stack, so its
            // elements are finalized (and prepended) first.
            pending.push(not_greater);
            pending.push(Self::singleton(pivot.clone()));
            pending.push(greater);
        }

        sorted
    }

    /// Sorts the sequence with the element type's intrinsic order, using
    /// a work-list quicksort.
    #[must_use]
    pub fn quick_sort(&self) -> Self
    where
        T: Ord,
    {
        self.quick_sort_by(T::cmp)
    }
}

/// Inserts `item` into an already sorted sequence, after any elements that
/// compare less-or-equal to it.
fn insert_ordered<T: Clone, F>(sorted: &Sequence<T>, item: T, compare: &F) -> Sequence<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut prefix: Vec<T> = Vec::new();
    let mut rest = sorted.clone();
    while let Some((existing, next)) = rest.uncons() {
        if compare(existing, &item) == Ordering::Greater {
            break;
        }
        prefix.push(existing.clone());
        rest = next;
    }

    let mut inserted = rest.cons(item);
    while let Some(previous) = prefix.pop() {
        inserted = inserted.cons(previous);
    }
    inserted
}

/// Merges two sorted runs with a two-pointer walk, taking from the first
/// run on ties.
fn merge_runs<T: Clone, F>(first: &Sequence<T>, second: &Sequence<T>, compare: &F) -> Sequence<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(first.len() + second.len());
    let mut left = first.iter().peekable();
    let mut right = second.iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(&left_item), Some(&right_item)) => {
                compare(left_item, right_item) != Ordering::Greater
            }
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };

        if take_left {
            if let Some(item) = left.next() {
                merged.push(item.clone());
            }
        } else if let Some(item) = right.next() {
            merged.push(item.clone());
        }
    }

    Sequence::build_from_vec(merged)
}

// =============================================================================
// Tests
// =============================================================================
