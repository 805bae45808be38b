//! The container: one logical insertion-ordered sequence backed by
//! per-type contiguous columns plus a packed index array.
//!
//! ```text
//! push(Real(2.5))        columns.reals: [2.5]           index: [{1,0}]
//! push_as::<i64>(7)      columns.ints:  [7]             index: [{1,0},{0,0}]
//! push(Real(9.0))        columns.reals: [2.5, 9.0]      index: [{1,0},{0,0},{1,1}]
//! ```
//!
//! Access comes in two tiers, deliberately kept apart:
//!
//! - [`MultiVec::at`] checks the logical bounds and returns a
//!   `Result` - use it where an index might be wrong.
//! - [`MultiVec::fetch`] skips the check for hot loops where the caller
//!   already guarantees validity, and panics on misuse.
//!
//! Not thread-safe. Share behind external synchronization, the same
//! discipline as any `Vec`.

use crate::contracts;
use crate::types::{AccessError, IndexEntry};
use crate::variant::{Member, VariantSet};

/// Heterogeneous vector over a fixed type set `V`.
///
/// Values of each declared type are packed in their own contiguous
/// column, in push order; a flattened index records, per logical
/// position, which column holds the value and at what slot. The result
/// reads like a `Vec<V>` but without paying the widest variant's
/// footprint for every element.
///
/// Columns are append-only: no operation removes, reorders, or mutates
/// a stored value, so slots never change meaning.
#[derive(Debug)]
pub struct MultiVec<V: VariantSet> {
    /// One growable array per declared type (TypedStorage).
    columns: V::Columns,
    /// One packed entry per logical element, in insertion order.
    index: Vec<IndexEntry>,
}

impl<V: VariantSet> MultiVec<V> {
    /// Create an empty container: all columns empty, index empty.
    pub fn new() -> Self {
        MultiVec {
            columns: V::Columns::default(),
            index: Vec::new(),
        }
    }

    /// Append a value already wrapped in the set's tagged union.
    ///
    /// Grows exactly one column by one value and the index by one entry.
    pub fn push(&mut self, value: V) {
        let (tag, slot) = value.push_into(&mut self.columns);
        let entry = IndexEntry::new(tag, slot);
        self.index.push(entry);
        contracts::check_entry_valid::<V>(entry, &self.columns);
    }

    /// Append a raw value of one declared type, skipping the union.
    ///
    /// Membership is a compile-time check: a `T` outside the declared
    /// set has no [`Member`] impl and the call does not compile. There
    /// is no runtime error path.
    pub fn push_as<T: Member<V>>(&mut self, value: T) {
        let (tag, slot) = value.push_value(&mut self.columns);
        let entry = IndexEntry::new(tag, slot);
        self.index.push(entry);
        contracts::check_entry_valid::<V>(entry, &self.columns);
    }

    /// Checked access: copy out the logical element at `index`.
    ///
    /// Fails with [`AccessError::OutOfRange`] when `index >= len()`.
    /// The check happens before any decode work, so no partial state
    /// is ever observed.
    pub fn at(&self, index: usize) -> Result<V, AccessError> {
        let entry = self.index.get(index).ok_or(AccessError::OutOfRange {
            index,
            len: self.index.len(),
        })?;
        V::read(&self.columns, entry.tag(), entry.slot())
    }

    /// Fast-path access: like [`Self::at`] without the logical bounds
    /// check or error path.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`. Intended for hot loops where the
    /// caller already guarantees validity; use [`Self::at`] everywhere
    /// correctness is in question.
    pub fn fetch(&self, index: usize) -> V {
        let entry = self.index[index];
        match V::read(&self.columns, entry.tag(), entry.slot()) {
            Ok(value) => value,
            // Unreachable while the append-only invariants hold.
            Err(err) => unreachable!("corrupt index entry: {}", err),
        }
    }

    /// Number of logical elements (across all columns).
    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the container holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Run the debug contracts over the whole container.
    ///
    /// No-op in release builds. Meant for the tail end of a test or
    /// fuzz run, not for production call sites.
    pub fn check_invariants(&self) {
        contracts::check_all_entries_valid::<V>(&self.index, &self.columns);
        contracts::check_length_conserved::<V>(&self.index, &self.columns);
    }

    /// Lazy forward iteration over `[0, len())` in insertion order.
    ///
    /// The end position is captured here, not re-validated against
    /// later pushes; element decode goes through the fast path. Two
    /// independent iterations yield the same values provided nothing
    /// was pushed in between.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            vec: self,
            front: 0,
            end: self.index.len(),
        }
    }
}

impl<V: VariantSet> Default for MultiVec<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, V: VariantSet> IntoIterator for &'a MultiVec<V> {
    type Item = V;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Iter<'a, V> {
        self.iter()
    }
}

/// Forward iterator over a [`MultiVec`], yielding copies.
#[derive(Debug, Clone)]
pub struct Iter<'a, V: VariantSet> {
    vec: &'a MultiVec<V>,
    front: usize,
    /// Fixed at construction; pushes during iteration are not observed.
    end: usize,
}

impl<V: VariantSet> Iterator for Iter<'_, V> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        if self.front == self.end {
            return None;
        }
        let value = self.vec.fetch(self.front);
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.front;
        (remaining, Some(remaining))
    }
}

impl<V: VariantSet> ExactSizeIterator for Iter<'_, V> {}

impl<V: VariantSet> std::iter::FusedIterator for Iter<'_, V> {}
