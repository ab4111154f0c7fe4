//! Uniform random vectors with the distribution implied by the element type.
//!
//! The element type picks the sampler: integer types draw from a uniform
//! integer distribution, floating-point types from a uniform real one —
//! rand's [`SampleUniform`] carries that selection, so one generic entry
//! point covers both. Bounds are inclusive on both ends.
//!
//! [`generate_uniform`] seeds from the thread-local RNG;
//! [`generate_uniform_with`] takes the RNG from the caller so tests and
//! simulations can stay deterministic.
//!
//! # Example
//!
//! ```
//! use caliper::sample::generate_uniform;
//!
//! let ints = generate_uniform(1, 10, 10)?;
//! assert_eq!(ints.len(), 10);
//! assert!(ints.iter().all(|&n| (1..=10).contains(&n)));
//!
//! let reals = generate_uniform(1.0, 10.0, 10)?;
//! assert!(reals.iter().all(|&x| (1.0..=10.0).contains(&x)));
//! # Ok::<(), caliper::sample::SampleError>(())
//! ```

use std::cmp::Ordering;

use rand::Rng;
use rand::distributions::Uniform;
use rand::distributions::uniform::SampleUniform;
use tracing::trace;

/// Errors that can occur when generating samples.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleError {
    /// The bounds are not an ordered range: `min` exceeds `max`, or the
    /// two do not compare (e.g. a NaN bound).
    #[error("inverted sample range: min must not exceed max")]
    InvertedRange,
}

/// Generates `len` values drawn uniformly from `min..=max`.
///
/// Uses the thread-local RNG; see [`generate_uniform_with`] for a
/// deterministic variant.
///
/// # Errors
///
/// Returns [`SampleError::InvertedRange`] if the bounds are inverted or
/// unordered.
pub fn generate_uniform<T>(min: T, max: T, len: usize) -> Result<Vec<T>, SampleError>
where
    T: SampleUniform + PartialOrd + Copy,
{
    generate_uniform_with(&mut rand::thread_rng(), min, max, len)
}

/// Generates `len` values drawn uniformly from `min..=max` using the
/// caller's RNG.
///
/// Same RNG state in, same vector out — the sampling itself introduces no
/// hidden state.
///
/// # Errors
///
/// Returns [`SampleError::InvertedRange`] if the bounds are inverted or
/// unordered.
///
/// # Example
///
/// ```
/// use caliper::sample::generate_uniform_with;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let a = generate_uniform_with(&mut StdRng::seed_from_u64(7), 0, 100, 5)?;
/// let b = generate_uniform_with(&mut StdRng::seed_from_u64(7), 0, 100, 5)?;
/// assert_eq!(a, b);
/// # Ok::<(), caliper::sample::SampleError>(())
/// ```
pub fn generate_uniform_with<T, R>(
    rng: &mut R,
    min: T,
    max: T,
    len: usize,
) -> Result<Vec<T>, SampleError>
where
    T: SampleUniform + PartialOrd + Copy,
    R: Rng + ?Sized,
{
    match min.partial_cmp(&max) {
        Some(Ordering::Less | Ordering::Equal) => {}
        _ => return Err(SampleError::InvertedRange),
    }

    let dist = Uniform::new_inclusive(min, max);
    let samples = (0..len).map(|_| rng.sample(&dist)).collect();
    trace!(len, "generated uniform samples");
    Ok(samples)
}
