//! [`RouteOptions`] — flags controlling how routes are scored.

use std::ops::{BitAnd, BitOr};

/// Bitmask of route scoring options.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteOptions(pub u8);

impl RouteOptions {
    pub const NONE: Self = Self(0);
    /// Score each leg as `d(a, b) + d(b, a)`.
    pub const BOTH_DIRECTIONS: Self = Self(1 << 0);
    /// Close the tour back to the first stop (longest-route query only).
    pub const LOOPS_TO_START: Self = Self(1 << 1);
    /// Never fall back to the reverse edge when `d(a, b)` is missing.
    pub const UNI_DIRECTIONAL: Self = Self(1 << 2);

    /// Whether this mask contains all the bits from `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Whether the mask is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for RouteOptions {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for RouteOptions {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}
