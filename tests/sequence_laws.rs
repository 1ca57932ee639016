//! Property-based tests for sequence pipelines.
//!
//! The `std::iter` adapters serve as an independent model: each property
//! checks a sequence computation against the equivalent iterator
//! computation over the same data.
//!
//! - **Range law**: `range(min, max)` agrees with `min..=max`
//! - **Composition law**: mapping `f` then `g` equals mapping `g(f(x))`
//! - **Model laws**: `map`/`filter`/`concat`/`flatten` agree with their
//!   iterator counterparts
//! - **Prefix law**: `take(n)` is a prefix of the full traversal
//! - **Product law**: `combine` has product cardinality in odometer order

use proptest::prelude::*;
use pullseq::combinator::{combine, concat, copy, filter, filter_map, flatten, map};
use pullseq::consumer::{take, to_vec};
use pullseq::source::{from_vec, range};

// =============================================================================
// Sources
// =============================================================================

proptest! {
    /// range(min, max) yields exactly the inclusive integer interval
    #[test]
    fn prop_range_matches_inclusive_interval(min in -1000i64..1000, length in 0i64..100) {
        let max = min + length - 1;
        let expected: Vec<i64> = (min..=max).collect();
        prop_assert_eq!(to_vec(range(min, max)), expected);
    }

    /// from_vec yields its input unchanged
    #[test]
    fn prop_from_vec_is_the_identity_source(values in prop::collection::vec(any::<i64>(), 0..100)) {
        prop_assert_eq!(to_vec(from_vec(values.clone())), values);
    }
}

// =============================================================================
// Transformer Laws
// =============================================================================

proptest! {
    /// Mapping the identity function changes nothing
    #[test]
    fn prop_map_identity_law(values in prop::collection::vec(any::<i64>(), 0..100)) {
        let mapped = to_vec(map(from_vec(values.clone()), |value| value));
        prop_assert_eq!(mapped, values);
    }

    /// Mapping f then g equals mapping the composition
    #[test]
    fn prop_map_composition_law(values in prop::collection::vec(any::<i64>(), 0..100)) {
        let function1 = |n: i64| n.wrapping_add(1);
        let function2 = |n: i64| n.wrapping_mul(2);

        let stepwise = to_vec(map(map(from_vec(values.clone()), function1), function2));
        let composed = to_vec(map(from_vec(values), |value| function2(function1(value))));
        prop_assert_eq!(stepwise, composed);
    }

    /// map agrees with Iterator::map
    #[test]
    fn prop_map_matches_iterator_model(values in prop::collection::vec(any::<i64>(), 0..100)) {
        let via_sequence = to_vec(map(from_vec(values.clone()), |value| value.wrapping_mul(3)));
        let via_iterator: Vec<i64> = values.into_iter().map(|value| value.wrapping_mul(3)).collect();
        prop_assert_eq!(via_sequence, via_iterator);
    }

    /// filter agrees with Iterator::filter
    #[test]
    fn prop_filter_matches_iterator_model(values in prop::collection::vec(any::<i64>(), 0..100)) {
        let via_sequence = to_vec(filter(from_vec(values.clone()), |value| value % 2 == 0));
        let via_iterator: Vec<i64> = values.into_iter().filter(|value| value % 2 == 0).collect();
        prop_assert_eq!(via_sequence, via_iterator);
    }

    /// filter_map with a marking transform equals filter followed by map
    #[test]
    fn prop_filter_map_collapses_filter_then_map(values in prop::collection::vec(any::<i64>(), 0..100)) {
        let one_step = to_vec(filter_map(from_vec(values.clone()), |value, skip| {
            if value % 3 == 0 {
                Some(value.wrapping_mul(2))
            } else {
                skip.mark();
                None
            }
        }));
        let two_steps = to_vec(map(
            filter(from_vec(values), |value| value % 3 == 0),
            |value| value.wrapping_mul(2),
        ));
        prop_assert_eq!(one_step, two_steps);
    }

    /// concat agrees with Iterator::chain
    #[test]
    fn prop_concat_matches_chain_model(
        left in prop::collection::vec(any::<i64>(), 0..50),
        right in prop::collection::vec(any::<i64>(), 0..50),
    ) {
        let via_sequence = to_vec(concat(vec![from_vec(left.clone()), from_vec(right.clone())]));
        let via_iterator: Vec<i64> = left.into_iter().chain(right).collect();
        prop_assert_eq!(via_sequence, via_iterator);
    }

    /// flatten agrees with Iterator::flatten
    #[test]
    fn prop_flatten_matches_iterator_model(
        nested in prop::collection::vec(prop::collection::vec(any::<i64>(), 0..10), 0..10),
    ) {
        let inner_sequences = nested.clone().into_iter().map(from_vec).collect::<Vec<_>>();
        let via_sequence = to_vec(flatten(from_vec(inner_sequences)));
        let via_iterator: Vec<i64> = nested.into_iter().flatten().collect();
        prop_assert_eq!(via_sequence, via_iterator);
    }
}

// =============================================================================
// Consumer Laws
// =============================================================================

proptest! {
    /// take(n) is exactly the n-element prefix of the full traversal
    #[test]
    fn prop_take_is_a_prefix(
        values in prop::collection::vec(any::<i64>(), 0..100),
        count in 0usize..150,
    ) {
        let full = to_vec(from_vec(values.clone()));
        let prefix = take(from_vec(values), count);

        prop_assert_eq!(prefix.len(), count.min(full.len()));
        prop_assert_eq!(&prefix[..], &full[..prefix.len()]);
    }
}

// =============================================================================
// Product Laws
// =============================================================================

proptest! {
    /// The number of combinations is the product of the member lengths
    #[test]
    fn prop_combine_cardinality_is_the_product(
        members in prop::collection::vec(prop::collection::vec(any::<i64>(), 0..4), 0..4),
    ) {
        let expected = if members.is_empty() {
            0
        } else {
            members.iter().map(Vec::len).product()
        };

        let product = to_vec(combine(members.into_iter().map(from_vec).collect()));
        prop_assert_eq!(product.len(), expected);
    }

    /// Two-member products enumerate exactly like nested loops
    #[test]
    fn prop_combine_two_members_matches_nested_loops(
        left in prop::collection::vec(any::<i64>(), 0..6),
        right in prop::collection::vec(any::<i64>(), 0..6),
    ) {
        let product = to_vec(combine(vec![from_vec(left.clone()), from_vec(right.clone())]));

        let mut expected = Vec::new();
        for first in &left {
            for second in &right {
                expected.push(vec![*first, *second]);
            }
        }
        prop_assert_eq!(product, expected);
    }

    /// Three-member products enumerate exactly like nested loops
    #[test]
    fn prop_combine_three_members_matches_nested_loops(
        first in prop::collection::vec(any::<i64>(), 0..4),
        second in prop::collection::vec(any::<i64>(), 0..4),
        third in prop::collection::vec(any::<i64>(), 0..4),
    ) {
        let product = to_vec(combine(vec![
            from_vec(first.clone()),
            from_vec(second.clone()),
            from_vec(third.clone()),
        ]));

        let mut expected = Vec::new();
        for a in &first {
            for b in &second {
                for c in &third {
                    expected.push(vec![*a, *b, *c]);
                }
            }
        }
        prop_assert_eq!(product, expected);
    }
}

// =============================================================================
// Replay Laws
// =============================================================================

proptest! {
    /// Every cursor of a copied sequence observes the same elements
    #[test]
    fn prop_replay_cursors_agree(values in prop::collection::vec(any::<i64>(), 0..100)) {
        let view = copy(from_vec(values.clone()));
        let second = view.replay();

        prop_assert_eq!(to_vec(view), values.clone());
        prop_assert_eq!(to_vec(second), values);
    }
}
