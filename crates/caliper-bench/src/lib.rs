//! Shared fixtures for Caliper benchmarks.

/// Hint values swept by the resolution benchmarks: the full sample range
/// of the ladder, zero through nine bytes.
pub const HINT_SWEEP: [u32; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
