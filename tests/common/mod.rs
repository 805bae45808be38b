//! Shared test utilities and fixtures.

#![allow(dead_code)]

use multivec::MultiVec;
use proptest::prelude::*;

// Re-export canonical fixtures from multivec::testing
pub use multivec::testing::{mixed_values, Sample};

/// Strategy producing one value of any declared type.
///
/// Reals are drawn from a finite range so `PartialEq` round-trip
/// comparisons stay meaningful (NaN never equals itself).
pub fn sample_strategy() -> impl Strategy<Value = Sample> {
    prop_oneof![
        any::<i64>().prop_map(Sample::Int),
        (-1.0e9..1.0e9f64).prop_map(Sample::Real),
        "[a-z]{0,8}".prop_map(Sample::Text),
    ]
}

/// Strategy producing a whole mixed-type insertion sequence.
pub fn sequence_strategy(max_len: usize) -> impl Strategy<Value = Vec<Sample>> {
    proptest::collection::vec(sample_strategy(), 0..max_len)
}

/// Build a container from a value sequence via `push`.
pub fn build_vec(values: &[Sample]) -> MultiVec<Sample> {
    let mut vec = MultiVec::new();
    for value in values {
        vec.push(value.clone());
    }
    vec
}
