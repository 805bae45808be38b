//! The type-set seam: traits connecting a tagged-union enum to its
//! per-type backing columns, plus the [`variant_set!`] macro that
//! implements them.
//!
//! Rust has no variadic generics, so the fixed ordered type set is
//! declared once through [`variant_set!`]. The macro assigns each
//! payload type a tag in declaration order and unrolls the runtime-tag
//! to compile-time-type dispatch into a chain of constant comparisons,
//! one per declared type. Membership is a trait bound: a type outside
//! the set has no [`Member`] impl, so inserting it does not compile.
//!
//! # Requirements on payload types
//!
//! - Distinct within one set (each payload type identifies its column).
//! - `Clone` (accessors copy values out of the columns).

use crate::types::AccessError;

/// A tagged-union enum whose values live in per-type contiguous columns.
///
/// Implemented by [`variant_set!`]; not meant to be written by hand.
pub trait VariantSet: Sized {
    /// One growable array per declared type, all empty by default.
    ///
    /// `Debug` is part of the contract so containers over the set stay
    /// debuggable; the macro derives it on the generated struct.
    type Columns: Default + std::fmt::Debug;

    /// Number of declared types. At most [`crate::IndexEntry::MAX_TYPES`].
    const TYPE_COUNT: usize;

    /// Append this value to its type's column.
    ///
    /// Returns the `(tag, slot)` pair identifying where it landed.
    fn push_into(self, columns: &mut Self::Columns) -> (u8, usize);

    /// Reconstruct the variant stored at `(tag, slot)`.
    ///
    /// A `tag` outside `0..TYPE_COUNT` is a contract violation and
    /// panics; a `slot` past the column end is reported as
    /// [`AccessError::SlotOutOfRange`] so the decode path stays total.
    fn read(columns: &Self::Columns, tag: u8, slot: usize) -> Result<Self, AccessError>;

    /// Current length of the column identified by `tag`.
    ///
    /// Panics if `tag >= TYPE_COUNT` (contract violation, as for `read`).
    fn column_len(columns: &Self::Columns, tag: u8) -> usize;
}

/// Marker connecting one payload type to its column within a set.
///
/// The existence of this impl is what makes typed insertion a
/// compile-time membership check.
pub trait Member<S: VariantSet>: Sized {
    /// Position of this type in the declared set, in declaration order.
    const TAG: u8;

    /// Append a raw value to this type's column; returns `(TAG, slot)`.
    fn push_value(self, columns: &mut S::Columns) -> (u8, usize);
}

/// Declare a variant set: the enum, its columns struct, and all trait
/// impls wiring the two together.
///
/// ```
/// use multivec::{variant_set, MultiVec};
///
/// variant_set! {
///     /// Values a config entry can take.
///     pub enum Setting, columns = SettingColumns {
///         Flag(bool) => flags,
///         Count(u64) => counts,
///         Name(String) => names,
///     }
/// }
///
/// let mut vec: MultiVec<Setting> = MultiVec::new();
/// vec.push_as(true);
/// vec.push(Setting::Count(3));
/// assert_eq!(vec.at(0), Ok(Setting::Flag(true)));
/// ```
///
/// Tags are assigned in declaration order starting at zero. Payload
/// types must be distinct and `Clone`.
#[macro_export]
macro_rules! variant_set {
    (
        $(#[$meta:meta])*
        $vis:vis enum $set:ident, columns = $cols:ident {
            $( $(#[$vmeta:meta])* $variant:ident($ty:ty) => $field:ident ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $set {
            $( $(#[$vmeta])* $variant($ty), )+
        }

        #[doc = concat!("Per-type backing storage for [`", stringify!($set), "`].")]
        #[derive(Debug, Default)]
        $vis struct $cols {
            $( $field: ::std::vec::Vec<$ty>, )+
        }

        impl $crate::VariantSet for $set {
            type Columns = $cols;

            const TYPE_COUNT: usize = [$(stringify!($variant)),+].len();

            #[inline]
            fn push_into(self, columns: &mut $cols) -> (u8, usize) {
                match self {
                    $(
                        $set::$variant(value) => {
                            <$ty as $crate::Member<$set>>::push_value(value, columns)
                        }
                    )+
                }
            }

            fn read(
                columns: &$cols,
                tag: u8,
                slot: usize,
            ) -> ::std::result::Result<Self, $crate::AccessError> {
                $crate::variant_set!(@read $set, columns, tag, slot; 0u8; $( $variant $field; )+)
            }

            fn column_len(columns: &$cols, tag: u8) -> usize {
                $crate::variant_set!(@len columns, tag; 0u8; $( $field; )+)
            }
        }

        $crate::variant_set!(@members $set, $cols; 0u8; $( $variant $field ($ty); )+);

        const _: () = ::std::assert!(
            <$set as $crate::VariantSet>::TYPE_COUNT <= $crate::IndexEntry::MAX_TYPES,
        );
    };

    // One Member impl per declared type, tags counted up from zero.
    (@members $set:ident, $cols:ident; $tag:expr; ) => {};
    (@members $set:ident, $cols:ident; $tag:expr;
     $variant:ident $field:ident ($ty:ty); $($rest:tt)*) => {
        impl $crate::Member<$set> for $ty {
            const TAG: u8 = $tag;

            #[inline]
            fn push_value(self, columns: &mut $cols) -> (u8, usize) {
                columns.$field.push(self);
                (<Self as $crate::Member<$set>>::TAG, columns.$field.len() - 1)
            }
        }

        $crate::variant_set!(@members $set, $cols; $tag + 1; $($rest)*);
    };

    // Unrolled tag dispatch: one constant comparison per declared type,
    // executed in tag order. Falling off the end means the tag was
    // outside the declared set, which no well-formed entry can hold.
    (@read $set:ident, $columns:ident, $tag:ident, $slot:ident; $n:expr; ) => {
        ::std::unreachable!("type tag {} outside the declared set", $tag)
    };
    (@read $set:ident, $columns:ident, $tag:ident, $slot:ident; $n:expr;
     $variant:ident $field:ident; $($rest:tt)*) => {{
        if $tag == $n {
            return match $columns.$field.get($slot) {
                ::std::option::Option::Some(value) => {
                    ::std::result::Result::Ok($set::$variant(value.clone()))
                }
                ::std::option::Option::None => {
                    ::std::result::Result::Err($crate::AccessError::SlotOutOfRange {
                        tag: $tag,
                        slot: $slot,
                        column_len: $columns.$field.len(),
                    })
                }
            };
        }
        $crate::variant_set!(@read $set, $columns, $tag, $slot; $n + 1; $($rest)*)
    }};

    (@len $columns:ident, $tag:ident; $n:expr; ) => {
        ::std::unreachable!("type tag {} outside the declared set", $tag)
    };
    (@len $columns:ident, $tag:ident; $n:expr; $field:ident; $($rest:tt)*) => {{
        if $tag == $n {
            return $columns.$field.len();
        }
        $crate::variant_set!(@len $columns, $tag; $n + 1; $($rest)*)
    }};
}
