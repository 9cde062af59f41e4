use core::cmp::Ordering;

use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// Identity of a runtime value variant.
///
/// Variants are listed in rank order; the derived `Ord` is the rank table.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
pub enum Type {
    /// The absence value.
    None = 0,

    Boolean = 1,

    Int = 2,

    Float = 3,

    String = 4,

    /// Ordered, growable sequence of values.
    Array = 5,

    /// Keyed collection of values.
    Object = 6,
}

impl Type {
    /// Position of this type in the universal rank table.
    #[inline]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Stable, lowercase name used by printers and error messages.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Whether this is one of the scalar types (everything ranked below `Array`).
    pub const fn is_scalar(self) -> bool {
        self.rank() < Type::Array.rank()
    }

    /// Compare two type identities by rank.
    #[inline]
    pub fn compare_rank(self, other: Type) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}
