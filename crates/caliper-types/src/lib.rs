//! # caliper-types: Width ladder and size-hint resolution
//!
//! This crate contains the foundation types for `Caliper`:
//! - The width ladder ([`Width`]) — the four standard signed integer widths
//! - Byte-size hints ([`SizeHint`])
//! - The resolution cascade ([`resolve_width`])
//! - Bit-count parsing errors ([`WidthError`])
//!
//! Resolution is a pure, total mapping: every hint resolves to exactly one
//! ladder entry, the smallest whose byte width covers the hint. Hints above
//! 4 bytes clamp to the 64-bit entry — the ladder has no 128-bit rung.
//!
//! # Example
//!
//! ```
//! use caliper_types::{resolve_width, SizeHint, Width};
//!
//! assert_eq!(resolve_width(SizeHint::new(1)), Width::W8);
//! assert_eq!(resolve_width(SizeHint::new(3)), Width::W32);
//! assert_eq!(resolve_width(SizeHint::new(9)), Width::W64);
//! ```

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

// ============================================================================
// Width - Copy (fieldless enum, discriminant is the bit count)
// ============================================================================

/// A rung of the width ladder: one of the four standard signed integer widths.
///
/// Variants are declared in ascending width order so the derived `Ord`
/// agrees with "wider is greater". The discriminant of each variant is its
/// bit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Width {
    /// 8 bits — `i8`.
    W8 = 8,
    /// 16 bits — `i16`.
    W16 = 16,
    /// 32 bits — `i32`.
    W32 = 32,
    /// 64 bits — `i64`.
    W64 = 64,
}

impl Width {
    /// The width ladder in ascending order.
    pub const LADDER: [Width; 4] = [Width::W8, Width::W16, Width::W32, Width::W64];

    /// Returns the width in bits.
    pub const fn bits(self) -> u16 {
        self as u16
    }

    /// Returns the width in bytes.
    pub const fn bytes(self) -> u32 {
        (self as u32) / 8
    }

    /// Returns the name of the signed integer type with this width.
    pub const fn type_name(self) -> &'static str {
        match self {
            Width::W8 => "i8",
            Width::W16 => "i16",
            Width::W32 => "i32",
            Width::W64 => "i64",
        }
    }

    /// Resolves the smallest ladder entry whose byte width covers `hint`.
    ///
    /// The cascade is strictly ordered: `hint <= 1` selects [`Width::W8`],
    /// `hint <= 2` selects [`Width::W16`], `hint <= 4` selects
    /// [`Width::W32`], and everything else selects [`Width::W64`]. A hint
    /// of zero still selects the narrowest entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use caliper_types::Width;
    ///
    /// assert_eq!(Width::for_bytes(0), Width::W8);
    /// assert_eq!(Width::for_bytes(2), Width::W16);
    /// assert_eq!(Width::for_bytes(100), Width::W64);
    /// ```
    pub const fn for_bytes(hint: u32) -> Width {
        if hint <= 1 {
            Width::W8
        } else if hint <= 2 {
            Width::W16
        } else if hint <= 4 {
            Width::W32
        } else {
            Width::W64
        }
    }

    /// Creates a `Width` from its bit count.
    ///
    /// Returns `None` for anything that is not a ladder entry.
    pub const fn from_bits(bits: u16) -> Option<Width> {
        match bits {
            8 => Some(Width::W8),
            16 => Some(Width::W16),
            32 => Some(Width::W32),
            64 => Some(Width::W64),
            _ => None,
        }
    }
}

impl Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

impl From<Width> for u16 {
    fn from(width: Width) -> Self {
        width.bits()
    }
}

impl TryFrom<u16> for Width {
    type Error = WidthError;

    fn try_from(bits: u16) -> Result<Self, Self::Error> {
        Width::from_bits(bits).ok_or(WidthError::UnknownBits(bits))
    }
}

// ============================================================================
// SizeHint - Copy (requested minimum byte width)
// ============================================================================

/// The requested minimum byte width supplied to the selector.
///
/// Hints are plain non-negative integers; the domain is unrestricted.
/// Hints above 4 all resolve to the widest ladder entry, and a hint of
/// zero resolves to the narrowest one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct SizeHint(u32);

impl SizeHint {
    /// A hint requesting no particular width.
    pub const ZERO: SizeHint = SizeHint(0);

    /// Creates a hint for the given byte count.
    pub const fn new(bytes: u32) -> Self {
        Self(bytes)
    }

    /// Returns the hint as a `u32`.
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl Display for SizeHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SizeHint {
    fn from(bytes: u32) -> Self {
        Self(bytes)
    }
}

impl From<SizeHint> for u32 {
    fn from(hint: SizeHint) -> Self {
        hint.0
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolves a size hint to its ladder entry.
///
/// Pure and total: every hint maps to exactly one [`Width`], and resolving
/// the same hint twice always yields the same entry.
///
/// # Examples
///
/// ```
/// use caliper_types::{resolve_width, SizeHint, Width};
///
/// assert_eq!(resolve_width(SizeHint::ZERO), Width::W8);
/// assert_eq!(resolve_width(SizeHint::new(4)), Width::W32);
/// assert_eq!(resolve_width(SizeHint::new(5)), Width::W64);
/// ```
pub const fn resolve_width(hint: SizeHint) -> Width {
    Width::for_bytes(hint.as_u32())
}

// ============================================================================
// Errors
// ============================================================================

/// Errors that can occur when constructing widths from raw bit counts.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthError {
    /// The bit count is not a ladder entry.
    #[error("unknown width: {0} bits")]
    UnknownBits(u16),
}

// The cascade must agree with the ladder for every sample hint; a mismatch
// here is a broken selector and fails the build.
const _: () = {
    assert!(resolve_width(SizeHint::new(0)).bytes() == 1);
    assert!(resolve_width(SizeHint::new(1)).bytes() == 1);
    assert!(resolve_width(SizeHint::new(2)).bytes() == 2);
    assert!(resolve_width(SizeHint::new(3)).bytes() == 4);
    assert!(resolve_width(SizeHint::new(4)).bytes() == 4);
    assert!(resolve_width(SizeHint::new(5)).bytes() == 8);
    assert!(resolve_width(SizeHint::new(6)).bytes() == 8);
    assert!(resolve_width(SizeHint::new(7)).bytes() == 8);
    assert!(resolve_width(SizeHint::new(8)).bytes() == 8);
    assert!(resolve_width(SizeHint::new(9)).bytes() == 8);
};
