//! Runtime contracts for the container invariants.
//!
//! This module provides debug-mode assertions that verify the structural
//! invariants of the container. These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function            | Invariant                                  |
//! |------------------------------|--------------------------------------------|
//! | `check_entry_valid`          | `tag < TYPE_COUNT ∧ slot < column_len(tag)`|
//! | `check_all_entries_valid`    | the above, for every index entry           |
//! | `check_length_conserved`     | `index.len() == Σ column_len(t)`           |
//! | `check_slot_within_ceiling`  | `slot < IndexEntry::MAX_SLOTS`             |
//!
//! # Usage
//!
//! ```ignore
//! // In debug builds, this panics if an entry points outside its column
//! check_entry_valid::<Sample>(entry, &columns);
//!
//! // In release builds, this is a no-op
//! ```

use crate::types::IndexEntry;
use crate::variant::VariantSet;

// ============================================================================
// ENTRY CONTRACTS
// ============================================================================

/// Check that one index entry points at an occupied cell of a declared
/// column.
#[inline]
pub fn check_entry_valid<V: VariantSet>(entry: IndexEntry, columns: &V::Columns) {
    debug_assert!(
        usize::from(entry.tag()) < V::TYPE_COUNT,
        "Contract violation: tag {} >= TYPE_COUNT {}",
        entry.tag(),
        V::TYPE_COUNT
    );

    if usize::from(entry.tag()) < V::TYPE_COUNT {
        debug_assert!(
            entry.slot() < V::column_len(columns, entry.tag()),
            "Contract violation: slot {} >= column[{}].len() {}",
            entry.slot(),
            entry.tag(),
            V::column_len(columns, entry.tag())
        );
    }
}

/// Check that every index entry is valid.
#[inline]
pub fn check_all_entries_valid<V: VariantSet>(index: &[IndexEntry], columns: &V::Columns) {
    for entry in index {
        check_entry_valid::<V>(*entry, columns);
    }
}

// ============================================================================
// WHOLE-CONTAINER CONTRACTS
// ============================================================================

/// Check that every insertion grew exactly one column: the logical
/// length must equal the sum of all column lengths.
#[inline]
pub fn check_length_conserved<V: VariantSet>(index: &[IndexEntry], columns: &V::Columns) {
    let column_total: usize = (0..V::TYPE_COUNT)
        .map(|tag| V::column_len(columns, tag as u8))
        .sum();
    debug_assert!(
        index.len() == column_total,
        "Contract violation: index.len() {} != sum of column lengths {}",
        index.len(),
        column_total
    );
}

/// Check that a slot fits in the 24-bit field before packing.
///
/// Exceeding the ceiling is unsupported, not a runtime error; this is
/// where the violation surfaces during development.
#[inline]
pub fn check_slot_within_ceiling(slot: usize) {
    debug_assert!(
        slot < IndexEntry::MAX_SLOTS,
        "Contract violation: slot {} >= MAX_SLOTS {}",
        slot,
        IndexEntry::MAX_SLOTS
    );
}
