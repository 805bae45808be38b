//! Heterogeneous vector with per-type contiguous storage.
//!
//! This crate provides [`MultiVec`]: a container that stores values of
//! several fixed, known types in one logical insertion-ordered sequence
//! while keeping each type's values packed in its own contiguous column.
//! It reads like a `Vec<Enum>` but avoids paying the widest variant's
//! footprint (plus padding) for every element - the per-element cost in
//! the shared index is a single packed `u32`.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────┐     ┌───────────────┐
//! │  variant.rs  │────▶│  multivec.rs  │────▶│   types.rs    │
//! │ (VariantSet, │     │  (MultiVec,   │     │ (IndexEntry,  │
//! │ variant_set!)│     │     Iter)     │     │  AccessError) │
//! └──────────────┘     └───────────────┘     └───────────────┘
//!         │                    │                     │
//!         ▼                    ▼                     ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                      contracts.rs                       │
//! │   (debug-mode invariant checks, zero-cost in release)   │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use multivec::{variant_set, MultiVec};
//!
//! variant_set! {
//!     pub enum Value, columns = ValueColumns {
//!         Int(i64) => ints,
//!         Real(f64) => reals,
//!     }
//! }
//!
//! let mut values: MultiVec<Value> = MultiVec::new();
//! values.push_as(10i64);
//! values.push(Value::Real(20.0));
//! values.push_as(30i64);
//!
//! assert_eq!(values.len(), 3);
//! assert_eq!(values.at(0), Ok(Value::Int(10)));
//! assert_eq!(values.at(1), Ok(Value::Real(20.0)));
//! assert!(values.at(3).is_err());
//!
//! let collected: Vec<Value> = values.iter().collect();
//! assert_eq!(collected[2], Value::Int(30));
//! ```
//!
//! # Two-tier access
//!
//! [`MultiVec::at`] is the checked accessor (`Result`, no panic);
//! [`MultiVec::fetch`] and iteration are the fast path, skipping the
//! logical bounds check for call sites that already guarantee validity.
//! The tiers are deliberately kept apart rather than unified.
//!
//! # Limits
//!
//! The packed index holds an 8-bit type tag and a 24-bit slot: at most
//! 256 types per set, at most 16M values per single type. Both
//! ceilings are enforced (compile-time assert and debug contract
//! respectively) rather than silently wrapped.

// Module declarations
pub mod contracts;
mod multivec;
pub mod testing;
mod types;
mod variant;

// Re-exports for public API
pub use multivec::{Iter, MultiVec};
pub use types::{AccessError, IndexEntry};
pub use variant::{Member, VariantSet};
