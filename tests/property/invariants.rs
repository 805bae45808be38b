//! Structural invariants: size accounting, column partitioning, and
//! the debug contracts, under arbitrary mixed insertion sequences.

use crate::common::{build_vec, sequence_strategy, Sample};
use multivec::MultiVec;
use proptest::prelude::*;

/// Insert via `push` and `push_as` alternately; both routes must be
/// indistinguishable from the outside.
fn build_vec_mixed_routes(values: &[Sample]) -> MultiVec<Sample> {
    let mut vec = MultiVec::new();
    for (i, value) in values.iter().enumerate() {
        if i % 2 == 0 {
            vec.push(value.clone());
        } else {
            match value.clone() {
                Sample::Int(v) => vec.push_as(v),
                Sample::Real(v) => vec.push_as(v),
                Sample::Text(v) => vec.push_as(v),
            }
        }
    }
    vec
}

proptest! {
    /// Property: after k insertions, len() == k and is_empty() agrees.
    #[test]
    fn prop_size_counts_insertions(values in sequence_strategy(128)) {
        let vec = build_vec_mixed_routes(&values);

        prop_assert_eq!(vec.len(), values.len());
        prop_assert_eq!(vec.is_empty(), values.is_empty());
    }

    /// Property: the typed-insert route and the union route agree
    /// element for element.
    #[test]
    fn prop_insert_routes_are_equivalent(values in sequence_strategy(64)) {
        let via_union = build_vec(&values);
        let via_mixed = build_vec_mixed_routes(&values);

        prop_assert_eq!(via_union.len(), via_mixed.len());
        for i in 0..via_union.len() {
            prop_assert_eq!(via_union.at(i), via_mixed.at(i));
        }
    }

    /// Property: the columns partition the logical sequence - every
    /// insertion landed in exactly one column (checked by the debug
    /// contracts) and per-type counts are conserved.
    #[test]
    fn prop_columns_partition_the_sequence(values in sequence_strategy(128)) {
        let vec = build_vec(&values);
        vec.check_invariants();

        let count = |pred: fn(&Sample) -> bool| values.iter().filter(|v| pred(v)).count();
        let out_count = |pred: fn(&Sample) -> bool| vec.iter().filter(pred).count();

        prop_assert_eq!(out_count(|v| matches!(v, Sample::Int(_))), count(|v| matches!(v, Sample::Int(_))));
        prop_assert_eq!(out_count(|v| matches!(v, Sample::Real(_))), count(|v| matches!(v, Sample::Real(_))));
        prop_assert_eq!(out_count(|v| matches!(v, Sample::Text(_))), count(|v| matches!(v, Sample::Text(_))));
    }
}
