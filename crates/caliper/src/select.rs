//! Compile-time integer type selection.
//!
//! [`Int<N>`](Int) resolves a const-generic byte hint to the matching
//! fixed-width signed integer type, mirroring the runtime cascade in
//! [`caliper_types::resolve_width`]. The mapping is a trait-impl table over
//! the hint range `0..=16`; hints outside the table are served by the
//! runtime selector, which is total. Each table row carries a const
//! assertion that its type's size equals what the cascade resolves, so the
//! two can never drift apart without failing the build.
//!
//! # Example
//!
//! ```
//! use caliper::select::{Int, NativeInt};
//!
//! let narrow: Int<1> = 42;
//! let wide: Int<5> = 42;
//! assert_eq!(size_of_val(&narrow), 1);
//! assert_eq!(size_of_val(&wide), 8);
//!
//! let native = NativeInt::from(42u8);
//! assert_eq!(size_of_val(&native), size_of::<usize>());
//! ```

use caliper_types::Width;

/// Marker carrying a byte-size hint as a const generic.
///
/// This is the anchor for the [`SelectWidth`] impl table; user code goes
/// through the [`Int`] alias instead of naming it directly.
pub struct ByteHint<const N: u32>;

/// Maps a byte hint to its resolved signed integer type.
pub trait SelectWidth {
    /// The fixed-width signed integer selected for this hint.
    type Int;
}

/// The signed integer type resolved for byte hint `N`.
///
/// `Int<0>` and `Int<1>` are `i8`, `Int<2>` is `i16`, `Int<3>` and
/// `Int<4>` are `i32`, and every hint from 5 through 16 is `i64`.
pub type Int<const N: u32> = <ByteHint<N> as SelectWidth>::Int;

/// A signed integer sized by the platform pointer width: `i64` on 64-bit
/// targets and `i32` everywhere else.
#[cfg(target_pointer_width = "64")]
pub type NativeInt = i64;

/// A signed integer sized by the platform pointer width: `i64` on 64-bit
/// targets and `i32` everywhere else.
#[cfg(not(target_pointer_width = "64"))]
pub type NativeInt = i32;

macro_rules! select_width {
    ($($hint:literal => $int:ty),+ $(,)?) => {
        $(
            impl SelectWidth for ByteHint<$hint> {
                type Int = $int;
            }

            const _: () = assert!(
                size_of::<$int>() == Width::for_bytes($hint).bytes() as usize,
                "type table disagrees with the runtime cascade",
            );
        )+
    };
}

select_width! {
    0 => i8,
    1 => i8,
    2 => i16,
    3 => i32,
    4 => i32,
    5 => i64,
    6 => i64,
    7 => i64,
    8 => i64,
    9 => i64,
    10 => i64,
    11 => i64,
    12 => i64,
    13 => i64,
    14 => i64,
    15 => i64,
    16 => i64,
}

// Storage widths for the sample hints 1 through 9, asserted explicitly:
// a wrong entry is a broken selector and must fail the build.
const _: () = {
    assert!(size_of::<Int<1>>() == 1);
    assert!(size_of::<Int<2>>() == 2);
    assert!(size_of::<Int<3>>() == 4);
    assert!(size_of::<Int<4>>() == 4);
    assert!(size_of::<Int<5>>() == 8);
    assert!(size_of::<Int<6>>() == 8);
    assert!(size_of::<Int<7>>() == 8);
    assert!(size_of::<Int<8>>() == 8);
    assert!(size_of::<Int<9>>() == 8);
};
