//! Accessor properties: round-trip, ordering, iteration parity, and
//! out-of-range behavior under arbitrary mixed insertion sequences.

use crate::common::{build_vec, sequence_strategy};
use multivec::AccessError;
use proptest::prelude::*;

proptest! {
    /// Property: every inserted value reads back with the same active
    /// type and value, at the position it was inserted.
    #[test]
    fn prop_values_round_trip_in_order(values in sequence_strategy(128)) {
        let vec = build_vec(&values);

        for (i, expected) in values.iter().enumerate() {
            let got = vec.at(i);
            prop_assert_eq!(got.as_ref(), Ok(expected));
        }
    }

    /// Property: full iteration yields exactly the `at(i)` sequence.
    #[test]
    fn prop_iteration_matches_indexed_access(values in sequence_strategy(128)) {
        let vec = build_vec(&values);

        let iterated: Vec<_> = vec.iter().collect();
        let indexed: Vec<_> = (0..vec.len()).map(|i| vec.at(i).unwrap()).collect();
        prop_assert_eq!(iterated, indexed);
    }

    /// Property: two independent iterations yield the same sequence.
    #[test]
    fn prop_iteration_is_repeatable(values in sequence_strategy(64)) {
        let vec = build_vec(&values);

        let first: Vec<_> = vec.iter().collect();
        let second: Vec<_> = vec.iter().collect();
        prop_assert_eq!(first, second);
    }

    /// Property: access at or past the logical length fails with the
    /// exact out-of-range error, and mutates nothing.
    #[test]
    fn prop_out_of_range_is_an_error(values in sequence_strategy(64), past in 0usize..8) {
        let vec = build_vec(&values);
        let len = vec.len();

        prop_assert_eq!(
            vec.at(len + past),
            Err(AccessError::OutOfRange { index: len + past, len })
        );
        prop_assert_eq!(vec.len(), len);
    }

    /// Property: wherever the checked accessor succeeds, the fast
    /// accessor returns the same value.
    #[test]
    fn prop_checked_and_fast_accessors_agree(values in sequence_strategy(128)) {
        let vec = build_vec(&values);

        for i in 0..vec.len() {
            prop_assert_eq!(vec.at(i).unwrap(), vec.fetch(i));
        }
    }
}
