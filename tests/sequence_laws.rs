//! Property tests verifying the sequence's functional laws: immutability,
//! order preservation, transformation equivalences, and sorting contracts.

use catena::sequence::Sequence;
use proptest::prelude::*;

proptest! {
    /// Reversing twice restores the original sequence.
    #[test]
    fn prop_reverse_involution(elements in prop::collection::vec(any::<i32>(), 0..200)) {
        let sequence: Sequence<i32> = elements.iter().copied().collect();
        prop_assert_eq!(sequence.reverse().reverse(), sequence);
    }

    /// Reversal never modifies the original sequence.
    #[test]
    fn prop_reverse_immutability(elements in prop::collection::vec(any::<i32>(), 0..200)) {
        let sequence: Sequence<i32> = elements.iter().copied().collect();
        let _reversed = sequence.reverse();
        let collected: Vec<i32> = sequence.iter().copied().collect();
        prop_assert_eq!(collected, elements);
    }

    /// Appending adds lengths and keeps both operands' elements in order.
    #[test]
    fn prop_append_length_and_order(
        left_elements in prop::collection::vec(any::<i32>(), 0..100),
        right_elements in prop::collection::vec(any::<i32>(), 0..100)
    ) {
        let left: Sequence<i32> = left_elements.iter().copied().collect();
        let right: Sequence<i32> = right_elements.iter().copied().collect();
        let combined = left.append(&right);

        prop_assert_eq!(combined.len(), left.len() + right.len());

        let collected: Vec<i32> = combined.into_iter().collect();
        let mut expected = left_elements.clone();
        expected.extend(right_elements.iter().copied());
        prop_assert_eq!(collected, expected);
    }

    /// Every kept element satisfies the predicate, and the kept elements
    /// appear in their original relative order.
    #[test]
    fn prop_filter_sound_and_order_preserving(
        elements in prop::collection::vec(any::<i32>(), 0..200)
    ) {
        let sequence: Sequence<i32> = elements.iter().copied().collect();
        let kept = sequence.filter(|x| x % 2 == 0);

        for item in &kept {
            prop_assert_eq!(item % 2, 0, "filter kept a non-matching element");
        }

        let collected: Vec<i32> = kept.into_iter().collect();
        let expected: Vec<i32> = elements.iter().copied().filter(|x| x % 2 == 0).collect();
        prop_assert_eq!(collected, expected);
    }

    /// The quadratic and linear flat_map formulations agree everywhere.
    #[test]
    fn prop_flat_map_linear_equivalence(
        elements in prop::collection::vec(-50i32..50, 0..60)
    ) {
        let sequence: Sequence<i32> = elements.iter().copied().collect();
        let function = |x: &i32| {
            // Per-element results of varying length, including empty
            match x.rem_euclid(3) {
                0 => Sequence::new(),
                1 => Sequence::singleton(*x),
                _ => Sequence::new().cons(x + 1).cons(*x),
            }
        };
        prop_assert_eq!(
            sequence.flat_map(function),
            sequence.flat_map_linear(function)
        );
    }

    /// All three sorts produce the same sequence: non-decreasing under the
    /// comparison, and a permutation of the input.
    #[test]
    fn prop_sorts_agree_and_sort(elements in prop::collection::vec(any::<i32>(), 0..100)) {
        let sequence: Sequence<i32> = elements.iter().copied().collect();
        let compare = |a: &i32, b: &i32| a.cmp(b);

        let merge_sorted = sequence.merge_sort_by(compare);
        let quick_sorted = sequence.quick_sort_by(compare);
        let insertion_sorted = sequence.insertion_sort_by(compare);

        prop_assert_eq!(&merge_sorted, &quick_sorted);
        prop_assert_eq!(&merge_sorted, &insertion_sorted);

        let collected: Vec<i32> = merge_sorted.into_iter().collect();
        for window in collected.windows(2) {
            prop_assert!(window[0] <= window[1], "output is not non-decreasing");
        }

        let mut expected = elements.clone();
        expected.sort_unstable();
        prop_assert_eq!(collected, expected, "output is not a permutation of the input");
    }

    /// Merge and insertion sort keep equal keys in their original relative
    /// order.
    #[test]
    fn prop_merge_and_insertion_sorts_are_stable(
        keys in prop::collection::vec(0i32..8, 0..80)
    ) {
        // Tag every key with its input position; compare by key only.
        let tagged: Vec<(i32, usize)> =
            keys.iter().copied().enumerate().map(|(tag, key)| (key, tag)).collect();
        let sequence: Sequence<(i32, usize)> = tagged.iter().copied().collect();
        let by_key = |a: &(i32, usize), b: &(i32, usize)| a.0.cmp(&b.0);

        let mut expected = tagged;
        expected.sort_by_key(|(key, _)| *key); // Vec::sort_by_key is stable

        let merge_collected: Vec<(i32, usize)> =
            sequence.merge_sort_by(by_key).into_iter().collect();
        prop_assert_eq!(&merge_collected, &expected, "merge sort reordered equal keys");

        let insertion_collected: Vec<(i32, usize)> =
            sequence.insertion_sort_by(by_key).into_iter().collect();
        prop_assert_eq!(&insertion_collected, &expected, "insertion sort reordered equal keys");
    }

    /// Rotating by zero or by the full length is the identity, and any
    /// count is equivalent to that count modulo the length.
    #[test]
    fn prop_rotate_identities(
        elements in prop::collection::vec(any::<i32>(), 1..80),
        count in 0usize..500
    ) {
        let sequence: Sequence<i32> = elements.iter().copied().collect();
        prop_assert_eq!(sequence.rotate(0), sequence.clone());
        prop_assert_eq!(sequence.rotate(sequence.len()), sequence.clone());
        prop_assert_eq!(
            sequence.rotate(count),
            sequence.rotate(count % sequence.len())
        );
    }

    /// Duplication multiplies the length, and a count of zero empties the
    /// sequence.
    #[test]
    fn prop_duplicate_each_length(
        elements in prop::collection::vec(any::<i32>(), 0..60),
        count in 0usize..5
    ) {
        let sequence: Sequence<i32> = elements.iter().copied().collect();
        let duplicated = sequence.duplicate_each(count);
        prop_assert_eq!(duplicated.len(), sequence.len() * count);
        if count == 0 {
            prop_assert!(duplicated.is_empty());
        }
    }

    /// Run-length encoding yields counts that sum to the input length,
    /// never produces adjacent pairs with equal values, and expands back
    /// to the input.
    #[test]
    fn prop_run_length_encode_invariants(
        elements in prop::collection::vec(0i32..4, 1..120)
    ) {
        let sequence: Sequence<i32> = elements.iter().copied().collect();
        let encoded = sequence.run_length_encode().unwrap();

        let pairs: Vec<(i32, usize)> = encoded.iter().copied().collect();

        let total: usize = pairs.iter().map(|(_, count)| count).sum();
        prop_assert_eq!(total, sequence.len(), "run lengths do not sum to input length");

        for window in pairs.windows(2) {
            prop_assert_ne!(window[0].0, window[1].0, "adjacent runs hold equal values");
        }

        for (_, count) in &pairs {
            prop_assert!(*count >= 1, "a run must contain at least one element");
        }

        let expanded: Vec<i32> = pairs
            .iter()
            .flat_map(|(value, count)| std::iter::repeat_n(*value, *count))
            .collect();
        prop_assert_eq!(expanded, elements, "expansion does not restore the input");
    }

    /// Removing a valid position shortens the sequence by one and deletes
    /// exactly that element.
    #[test]
    fn prop_remove_at_excises_one_element(
        elements in prop::collection::vec(any::<i32>(), 1..100)
    ) {
        let sequence: Sequence<i32> = elements.iter().copied().collect();
        let index = elements.len() / 2;
        let removed = sequence.remove_at(isize::try_from(index).unwrap()).unwrap();

        prop_assert_eq!(removed.len(), sequence.len() - 1);

        let collected: Vec<i32> = removed.into_iter().collect();
        let mut expected = elements.clone();
        expected.remove(index);
        prop_assert_eq!(collected, expected);
    }
}
