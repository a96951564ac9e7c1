//! Structural transformations over [`Sequence`].
//!
//! Every operation here is order-preserving, builds its result exclusively
//! through the core primitives, and leaves the input untouched. Linear
//! passes accumulate into scratch buffers or prepend chains; nothing
//! recurses per element.

use rand::Rng;

use super::Sequence;
use super::error::SequenceError;

impl<T: Clone> Sequence<T> {
    /// Applies a function to each element, preserving order.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::sequence::Sequence;
    ///
    /// let sequence: Sequence<i32> = vec![1, 2, 3].into_iter().collect();
    /// let doubled = sequence.map(|x| x * 2);
    /// let collected: Vec<i32> = doubled.into_iter().collect();
    /// assert_eq!(collected, vec![2, 4, 6]);
    /// ```
    #[must_use]
    pub fn map<B, F>(&self, function: F) -> Sequence<B>
    where
        F: Fn(&T) -> B,
    {
        let mut mapped = Vec::with_capacity(self.len());
        for item in self {
            mapped.push(function(item));
        }
        Sequence::build_from_vec(mapped)
    }

    /// Keeps only the elements for which the predicate holds.
    ///
    /// Relative order of the kept elements is preserved.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::sequence::Sequence;
    ///
    /// let sequence: Sequence<i32> = (1..=6).collect();
    /// let evens = sequence.filter(|x| x % 2 == 0);
    /// let collected: Vec<i32> = evens.into_iter().collect();
    /// assert_eq!(collected, vec![2, 4, 6]);
    /// ```
    #[must_use]
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool,
    {
        let mut kept = Vec::new();
        for item in self {
            if predicate(item) {
                kept.push(item.clone());
            }
        }
        Self::build_from_vec(kept)
    }

    /// Splits the sequence into elements that satisfy the predicate and
    /// elements that do not, preserving order in both halves.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::sequence::Sequence;
    ///
    /// let sequence: Sequence<i32> = (1..=6).collect();
    /// let (evens, odds) = sequence.partition(|x| x % 2 == 0);
    /// assert_eq!(evens.len(), 3);
    /// assert_eq!(odds.len(), 3);
    /// ```
    #[must_use]
    pub fn partition<P>(&self, predicate: P) -> (Self, Self)
    where
        P: Fn(&T) -> bool,
    {
        let mut pass = Vec::new();
        let mut fail = Vec::new();

        for item in self {
            if predicate(item) {
                pass.push(item.clone());
            } else {
                fail.push(item.clone());
            }
        }

        (Self::build_from_vec(pass), Self::build_from_vec(fail))
    }

    /// Applies a sequence-producing function to each element and
    /// concatenates the results left to right.
    ///
    /// This is the reference formulation: each per-element result is joined
    /// onto the accumulated output with [`append`](Sequence::append), which
    /// re-walks the accumulator every time. Worst-case cost is quadratic in
    /// the total output size; prefer
    /// [`flat_map_linear`](Sequence::flat_map_linear) for long outputs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::sequence::Sequence;
    ///
    /// let sequence: Sequence<i32> = vec![1, 2, 3].into_iter().collect();
    /// let result = sequence.flat_map(|x| Sequence::new().cons(x * 10).cons(*x));
    /// let collected: Vec<i32> = result.into_iter().collect();
    /// assert_eq!(collected, vec![1, 10, 2, 20, 3, 30]);
    /// ```
    #[must_use]
    pub fn flat_map<B: Clone, F>(&self, function: F) -> Sequence<B>
    where
        F: Fn(&T) -> Sequence<B>,
    {
        let mut flattened = Sequence::new();
        for item in self {
            flattened = flattened.append(&function(item));
        }
        flattened
    }

    /// Applies a sequence-producing function to each element and
    /// concatenates the results left to right, in linear time.
    ///
    /// Produces exactly the same output as [`flat_map`](Sequence::flat_map)
    /// in O(n + total output size), in two phases and without any call to
    /// `append`: the first pass prepends each per-element result, reversed,
    /// onto an outer accumulator; the second pass walks that outer sequence
    /// and prepends every inner element onto a single running accumulator,
    /// which lands each element in its final position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::sequence::Sequence;
    ///
    /// let sequence: Sequence<i32> = vec![1, 2, 3].into_iter().collect();
    /// let result = sequence.flat_map_linear(|x| Sequence::new().cons(x * 10).cons(*x));
    /// let collected: Vec<i32> = result.into_iter().collect();
    /// assert_eq!(collected, vec![1, 10, 2, 20, 3, 30]);
    /// ```
    #[must_use]
    pub fn flat_map_linear<B: Clone, F>(&self, function: F) -> Sequence<B>
    where
        F: Fn(&T) -> Sequence<B>,
    {
        // Phase one: per-element results, each reversed, newest in front.
        let mut reversed_results: Sequence<Sequence<B>> = Sequence::new();
        for item in self {
            reversed_results = reversed_results.cons(function(item).reverse());
        }

        // Phase two: prepending from the double-reversed layout restores
        // the original left-to-right order.
        let mut flattened = Sequence::new();
        for inner in &reversed_results {
            for item in inner {
                flattened = flattened.cons(item.clone());
            }
        }
        flattened
    }

    /// Compresses the sequence into (element, run length) pairs.
    ///
    /// A run is a maximal stretch of consecutive equal elements. Adjacent
    /// equal elements merge into one pair; equal elements separated by a
    /// different element produce separate pairs. Output order matches input
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptyAccess`] on the empty sequence, which
    /// has no run to seed the encoder with.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::sequence::Sequence;
    ///
    /// let sequence: Sequence<i32> = vec![1, 1, 2, 3, 3, 3].into_iter().collect();
    /// let encoded = sequence.run_length_encode().unwrap();
    /// let collected: Vec<(i32, usize)> = encoded.into_iter().collect();
    /// assert_eq!(collected, vec![(1, 2), (2, 1), (3, 3)]);
    /// ```
    pub fn run_length_encode(&self) -> Result<Sequence<(T, usize)>, SequenceError>
    where
        T: PartialEq,
    {
        let Some((first, rest)) = self.uncons() else {
            return Err(SequenceError::EmptyAccess {
                operation: "run_length_encode",
            });
        };

        let mut runs: Vec<(T, usize)> = Vec::new();
        let mut current = first.clone();
        let mut count = 1usize;

        for item in &rest {
            if *item == current {
                count += 1;
            } else {
                runs.push((current, count));
                current = item.clone();
                count = 1;
            }
        }
        runs.push((current, count));

        Ok(Sequence::build_from_vec(runs))
    }

    /// Replaces every element with `count` consecutive copies of itself.
    ///
    /// A `count` of zero therefore produces the empty sequence: each
    /// element is replaced by zero copies. This input-dependent collapse is
    /// intentional behavior, not an error.
    ///
    /// # Complexity
    ///
    /// O(n * count)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::sequence::Sequence;
    ///
    /// let sequence: Sequence<i32> = vec![1, 2, 3].into_iter().collect();
    /// let doubled = sequence.duplicate_each(2);
    /// let collected: Vec<i32> = doubled.into_iter().collect();
    /// assert_eq!(collected, vec![1, 1, 2, 2, 3, 3]);
    ///
    /// assert!(sequence.duplicate_each(0).is_empty());
    /// ```
    #[must_use]
    pub fn duplicate_each(&self, count: usize) -> Self {
        let mut items = Vec::with_capacity(self.len() * count);
        for item in self {
            for _ in 0..count {
                items.push(item.clone());
            }
        }
        Self::build_from_vec(items)
    }

    /// Rotates the sequence left by `count` positions with wraparound.
    ///
    /// The cursor literally walks `count` steps, re-entering the sequence
    /// each time it falls off the end, so `rotate(len)` and `rotate(0)`
    /// are both the identity and counts far beyond the length simply wrap
    /// around again.
    ///
    /// # Complexity
    ///
    /// O(max(n, count)) - the walk is not reduced modulo n first
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::sequence::Sequence;
    ///
    /// let sequence: Sequence<i32> = vec![1, 2, 3].into_iter().collect();
    /// let rotated = sequence.rotate(2);
    /// let collected: Vec<i32> = rotated.into_iter().collect();
    /// assert_eq!(collected, vec![3, 1, 2]);
    ///
    /// assert_eq!(sequence.rotate(3), sequence);
    /// assert_eq!(sequence.rotate(6), sequence);
    /// ```
    #[must_use]
    pub fn rotate(&self, count: usize) -> Self {
        if self.is_empty() {
            return Self::new();
        }

        let mut offset = 0;
        let mut cursor = self.clone();
        for _ in 0..count {
            cursor = cursor.uncons().map_or_else(Self::new, |(_, rest)| rest);
            offset += 1;
            if cursor.is_empty() {
                cursor = self.clone();
                offset = 0;
            }
        }

        let (front, back) = self.split_at(offset);
        back.append(&front)
    }

    /// Draws `count` elements uniformly at random, with replacement, using
    /// the thread-local random number generator.
    ///
    /// See [`sample_with`](Sequence::sample_with) for the generator-driven
    /// form and the full contract.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptyAccess`] when the sequence is empty
    /// and `count` is positive.
    pub fn sample(&self, count: isize) -> Result<Self, SequenceError> {
        self.sample_with(&mut rand::rng(), count)
    }

    /// Draws `count` elements uniformly at random, with replacement, using
    /// the supplied random number generator.
    ///
    /// Each draw generates an index in `[0, len)` and resolves it with an
    /// indexed walk, so the cost is O(n * count). A negative `count` yields
    /// the empty sequence. Passing a seeded generator makes the draw
    /// reproducible.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptyAccess`] when the sequence is empty
    /// and `count` is positive: there is no index space to draw from.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::sequence::Sequence;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let sequence: Sequence<i32> = (1..=100).collect();
    /// let mut generator = StdRng::seed_from_u64(7);
    /// let drawn = sequence.sample_with(&mut generator, 5).unwrap();
    /// assert_eq!(drawn.len(), 5);
    /// ```
    pub fn sample_with<R>(&self, generator: &mut R, count: isize) -> Result<Self, SequenceError>
    where
        R: Rng + ?Sized,
    {
        let Ok(count) = usize::try_from(count) else {
            return Ok(Self::new());
        };
        if count == 0 {
            return Ok(Self::new());
        }
        if self.is_empty() {
            return Err(SequenceError::EmptyAccess {
                operation: "sample",
            });
        }

        let mut drawn = Vec::with_capacity(count);
        for _ in 0..count {
            let index = generator.random_range(0..self.len());
            drawn.push(self.get(index)?.clone());
        }
        Ok(Self::build_from_vec(drawn))
    }
}

// =============================================================================
// Tests
// =============================================================================
