//! Kani model checking proofs for the packed index entry.
//!
//! This standalone crate extracts the tag/slot packing arithmetic and
//! provides mathematical proofs of its correctness using Kani.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: pack/unpack never panic for any input
//! 2. **Roundtrip**: unpack(pack(tag, slot)) == (tag, slot) for all
//!    in-ceiling slots
//! 3. **Isolation**: slot bits can never reach the tag byte, even for
//!    out-of-ceiling slots

/// Maximum number of values per column (24-bit slot field).
pub const MAX_SLOTS: u32 = 1 << 24;

// ============================================================================
// PACKED ENTRY ARITHMETIC (mirrors src/types.rs)
// ============================================================================

/// Pack a tag/slot pair: tag in the high byte, slot in the low 24 bits.
pub fn pack(tag: u8, slot: u32) -> u32 {
    (u32::from(tag) << 24) | (slot & 0x00FF_FFFF)
}

/// Extract the tag byte.
pub fn unpack_tag(word: u32) -> u8 {
    (word >> 24) as u8
}

/// Extract the 24-bit slot.
pub fn unpack_slot(word: u32) -> u32 {
    word & 0x00FF_FFFF
}

// ============================================================================
// KANI PROOFS
// ============================================================================

#[cfg(kani)]
mod proofs {
    use super::*;

    /// Proof: packing round-trips every in-ceiling tag/slot pair.
    #[kani::proof]
    fn roundtrip_within_ceiling() {
        let tag: u8 = kani::any();
        let slot: u32 = kani::any();
        kani::assume(slot < MAX_SLOTS);

        let word = pack(tag, slot);
        assert_eq!(unpack_tag(word), tag);
        assert_eq!(unpack_slot(word), slot);
    }

    /// Proof: the tag byte is untouchable by any slot value, including
    /// slots past the ceiling.
    #[kani::proof]
    fn tag_isolated_from_slot_overflow() {
        let tag: u8 = kani::any();
        let slot: u32 = kani::any();

        let word = pack(tag, slot);
        assert_eq!(unpack_tag(word), tag);
    }

    /// Proof: no input panics the pack/unpack path.
    #[kani::proof]
    fn never_panics() {
        let word = pack(kani::any(), kani::any());
        let _ = unpack_tag(word);
        let _ = unpack_slot(word);
    }
}

// ============================================================================
// MIRROR TESTS (runnable without Kani)
// ============================================================================
