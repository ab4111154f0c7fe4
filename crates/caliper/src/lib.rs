//! # Caliper
//!
//! Deterministic integer-width selection: given a byte-size hint, pick the
//! smallest standard signed integer width from the ladder {8, 16, 32, 64}
//! bits that covers it, clamping to 64 bits for anything above 4 bytes.
//!
//! Resolution is available two ways:
//!
//! - **At runtime** (total over all hints): [`resolve_width`] maps any
//!   [`SizeHint`] to a [`Width`].
//! - **At compile time**: [`select::Int`] resolves a const-generic byte
//!   hint directly to `i8`/`i16`/`i32`/`i64`, with const assertions tying
//!   the type table to the runtime cascade.
//!
//! Around the selector sit two small utility modules:
//!
//! - [`reduce`] — variadic reduction macros ([`sum_of!`], [`min_of!`],
//!   [`all_of!`], [`any_of!`]) that fold over call-site argument lists.
//! - [`sample`] — uniform random vectors where the element type implies
//!   the distribution (integer or real), with a caller-supplied RNG
//!   variant for deterministic use.
//!
//! # Quick Start
//!
//! ```
//! use caliper::select::Int;
//! use caliper::{resolve_width, SizeHint, Width};
//!
//! // Runtime resolution
//! assert_eq!(resolve_width(SizeHint::new(3)), Width::W32);
//!
//! // Compile-time resolution: `Int<3>` *is* `i32`
//! let n: Int<3> = 42;
//! assert_eq!(size_of_val(&n), 4);
//!
//! // Variadic folds
//! assert_eq!(caliper::sum_of!(1, 2, 3, 4, 5), 15);
//! assert_eq!(caliper::min_of!(10, 2, 3, 4, 5), 2);
//! ```

pub mod reduce;
pub mod sample;
pub mod select;

pub use caliper_types::{SizeHint, Width, WidthError, resolve_width};

#[cfg(test)]
mod tests;
