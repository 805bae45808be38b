//! The building blocks of the container: the packed index entry and the
//! error type for checked access.
//!
//! Every logical element is described by one [`IndexEntry`]: which typed
//! column holds the value (8-bit tag) and where in that column it sits
//! (24-bit slot). Packing both into one `u32` keeps the index array at
//! 4 bytes per element regardless of how large the payload types are.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **IndexEntry**: `tag < TYPE_COUNT ∧ slot < column_len(tag)`
//!   Every entry points at an occupied cell of exactly one column.
//! - **Ceilings**: at most [`IndexEntry::MAX_TYPES`] types per set and
//!   [`IndexEntry::MAX_SLOTS`] values per column. The tag ceiling is
//!   enforced by the `u8` type; the slot ceiling by a debug contract
//!   at pack time (see [`crate::contracts::check_slot_within_ceiling`]).

use std::fmt;

/// A packed pointer from a logical position into typed storage.
///
/// Layout: `tag` in the high 8 bits, `slot` in the low 24 bits.
/// Columns are append-only, so an entry never changes meaning after
/// it is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct IndexEntry(u32);

impl IndexEntry {
    /// Maximum number of distinct types in one set (8-bit tag).
    pub const MAX_TYPES: usize = 256;

    /// Maximum number of values in one typed column (24-bit slot).
    pub const MAX_SLOTS: usize = 1 << 24;

    /// Pack a tag/slot pair.
    ///
    /// `slot` must be below [`Self::MAX_SLOTS`]; checked in debug builds.
    /// The slot bits are masked regardless, so a release-build overflow
    /// cannot bleed into the tag byte.
    #[inline]
    pub fn new(tag: u8, slot: usize) -> Self {
        crate::contracts::check_slot_within_ceiling(slot);
        IndexEntry((u32::from(tag) << 24) | (slot as u32 & 0x00FF_FFFF))
    }

    /// Which typed column holds the value.
    #[inline]
    pub fn tag(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Offset of the value within its typed column.
    #[inline]
    pub fn slot(self) -> usize {
        (self.0 & 0x00FF_FFFF) as usize
    }
}

/// Error type for checked access.
///
/// `OutOfRange` is the caller-visible failure of [`crate::MultiVec::at`].
/// `SlotOutOfRange` is defensive: it cannot occur while the container
/// invariants hold, but the decode path is total rather than trusting
/// them silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessError {
    /// Logical index is past the end of the container.
    OutOfRange { index: usize, len: usize },
    /// Index entry points past the end of its typed column.
    SlotOutOfRange {
        tag: u8,
        slot: usize,
        column_len: usize,
    },
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessError::OutOfRange { index, len } => {
                write!(f, "index {} >= len() {}", index, len)
            }
            AccessError::SlotOutOfRange {
                tag,
                slot,
                column_len,
            } => {
                write!(f, "slot {} >= column[{}].len() {}", slot, tag, column_len)
            }
        }
    }
}

impl std::error::Error for AccessError {}
