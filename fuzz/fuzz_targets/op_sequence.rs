//! Fuzz target for arbitrary operation sequences.
//!
//! Drives the container with interleaved typed pushes and accessor
//! calls, mirrored against a plain `Vec` oracle. Any divergence in
//! length, value, or error shape is a bug; the debug contracts run at
//! the end of every input.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use multivec::testing::Sample;
use multivec::{AccessError, MultiVec};

#[derive(Debug, Arbitrary)]
enum Op {
    PushInt(i64),
    PushReal(f64),
    PushText(String),
    At(u16),
    Iterate,
}

/// Bit-exact comparison: the fuzzer will produce NaN reals, which
/// `PartialEq` treats as unequal to themselves.
fn same(a: &Sample, b: &Sample) -> bool {
    match (a, b) {
        (Sample::Real(x), Sample::Real(y)) => x.to_bits() == y.to_bits(),
        _ => a == b,
    }
}

fuzz_target!(|ops: Vec<Op>| {
    let mut vec: MultiVec<Sample> = MultiVec::new();
    let mut oracle: Vec<Sample> = Vec::new();

    for op in ops {
        match op {
            Op::PushInt(v) => {
                vec.push_as(v);
                oracle.push(Sample::Int(v));
            }
            Op::PushReal(v) => {
                vec.push(Sample::Real(v));
                oracle.push(Sample::Real(v));
            }
            Op::PushText(s) => {
                vec.push_as(s.clone());
                oracle.push(Sample::Text(s));
            }
            Op::At(i) => {
                let i = usize::from(i);
                match vec.at(i) {
                    Ok(value) => {
                        assert!(same(&value, &oracle[i]));
                        assert!(same(&value, &vec.fetch(i)));
                    }
                    Err(err) => {
                        assert!(i >= oracle.len());
                        assert_eq!(
                            err,
                            AccessError::OutOfRange {
                                index: i,
                                len: oracle.len()
                            }
                        );
                    }
                }
            }
            Op::Iterate => {
                assert_eq!(vec.iter().count(), oracle.len());
                for (got, expected) in vec.iter().zip(oracle.iter()) {
                    assert!(same(&got, expected));
                }
            }
        }
    }

    assert_eq!(vec.len(), oracle.len());
    assert_eq!(vec.is_empty(), oracle.is_empty());
    vec.check_invariants();
});
