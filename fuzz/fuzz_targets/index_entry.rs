//! Fuzz target for the packed index entry.
//!
//! Any in-ceiling tag/slot pair must survive packing untouched, and no
//! input may panic the pack path.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use multivec::IndexEntry;

/// The fuzzer generates arbitrary tag/slot pairs.
///
/// `raw_slot` covers the full `u32` range and is reduced into the
/// 24-bit ceiling, so the boundary values get hit from both sides.
#[derive(Debug, Arbitrary)]
struct EntryInput {
    tag: u8,
    raw_slot: u32,
}

fuzz_target!(|input: EntryInput| {
    let slot = input.raw_slot as usize % IndexEntry::MAX_SLOTS;

    let entry = IndexEntry::new(input.tag, slot);
    assert_eq!(entry.tag(), input.tag);
    assert_eq!(entry.slot(), slot);
});
