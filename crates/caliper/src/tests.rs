//! Unit tests for caliper

use rand::SeedableRng;
use rand::rngs::StdRng;
use test_case::test_case;

use crate::sample::{SampleError, generate_uniform, generate_uniform_with};
use crate::select::{Int, NativeInt};
use crate::{SizeHint, all_of, any_of, min_of, resolve_width, sum_of};

// ============================================================================
// Compile-Time Selection Tests
// ============================================================================

#[test]
fn selected_types_have_ladder_sizes() {
    assert_eq!(size_of::<Int<0>>(), 1);
    assert_eq!(size_of::<Int<1>>(), 1);
    assert_eq!(size_of::<Int<2>>(), 2);
    assert_eq!(size_of::<Int<3>>(), 4);
    assert_eq!(size_of::<Int<4>>(), 4);
    assert_eq!(size_of::<Int<5>>(), 8);
    assert_eq!(size_of::<Int<9>>(), 8);
    assert_eq!(size_of::<Int<16>>(), 8);
}

#[test]
fn type_table_matches_runtime_cascade() {
    assert_eq!(size_of::<Int<0>>() as u32, resolve_width(SizeHint::new(0)).bytes());
    assert_eq!(size_of::<Int<2>>() as u32, resolve_width(SizeHint::new(2)).bytes());
    assert_eq!(size_of::<Int<4>>() as u32, resolve_width(SizeHint::new(4)).bytes());
    assert_eq!(size_of::<Int<7>>() as u32, resolve_width(SizeHint::new(7)).bytes());
}

#[test]
fn selected_values_behave_like_plain_integers() {
    let narrow: Int<1> = 42;
    let wide: Int<8> = 42;
    assert_eq!(i64::from(narrow), wide);
}

#[test]
fn native_int_tracks_pointer_width() {
    assert_eq!(size_of::<NativeInt>(), size_of::<usize>());
}

// ============================================================================
// Reduction Macro Tests
// ============================================================================

#[test]
fn sum_folds_its_arguments() {
    assert_eq!(sum_of!(1, 2, 3, 4, 5), 15);
    assert_eq!(sum_of!(7), 7);
    assert_eq!(sum_of!(), 0);
    assert_eq!(sum_of!(1.5, 2.5), 4.0);
}

#[test]
fn min_folds_its_arguments() {
    assert_eq!(min_of!(10, 2, 3, 4, 5), 2);
    assert_eq!(min_of!(7), 7);
    assert_eq!(min_of!("pear", "apple", "quince"), "apple");
}

#[test_case(true, true, true => true)]
#[test_case(false, false, false => false)]
#[test_case(true, false, true => false)]
fn all_folds_its_arguments(a: bool, b: bool, c: bool) -> bool {
    all_of!(a, b, c)
}

#[test_case(true, true, true => true)]
#[test_case(false, false, false => false)]
#[test_case(true, false, true => true)]
fn any_folds_its_arguments(a: bool, b: bool, c: bool) -> bool {
    any_of!(a, b, c)
}

#[test]
fn empty_boolean_folds_yield_identities() {
    assert!(all_of!());
    assert!(!any_of!());
}

#[test]
fn boolean_folds_short_circuit_left_to_right() {
    let mut visited = 0;
    let mut visit = |value: bool| {
        visited += 1;
        value
    };

    assert!(!all_of!(false, visit(true)));
    assert!(any_of!(true, visit(false)));
    assert_eq!(visited, 0);
}

// ============================================================================
// Sampling Tests
// ============================================================================

#[test]
fn samples_have_requested_length_and_stay_in_bounds() {
    let mut rng = StdRng::seed_from_u64(1);
    let values = generate_uniform_with(&mut rng, 1, 10, 100).unwrap();

    assert_eq!(values.len(), 100);
    assert!(values.iter().all(|&n| (1..=10).contains(&n)));
}

#[test]
fn real_samples_use_the_float_sampler() {
    let mut rng = StdRng::seed_from_u64(2);
    let values = generate_uniform_with(&mut rng, 1.0, 10.0, 100).unwrap();

    assert_eq!(values.len(), 100);
    assert!(values.iter().all(|&x| (1.0..=10.0).contains(&x)));
}

#[test]
fn seeded_sampling_is_reproducible() {
    let a = generate_uniform_with(&mut StdRng::seed_from_u64(42), 0, 1_000, 32).unwrap();
    let b = generate_uniform_with(&mut StdRng::seed_from_u64(42), 0, 1_000, 32).unwrap();
    assert_eq!(a, b);
}

#[test]
fn degenerate_range_yields_constant_samples() {
    let mut rng = StdRng::seed_from_u64(3);
    let values = generate_uniform_with(&mut rng, 5, 5, 8).unwrap();
    assert_eq!(values, vec![5; 8]);
}

#[test]
fn zero_length_yields_empty_vector() {
    let values = generate_uniform(0, 10, 0).unwrap();
    assert!(values.is_empty());
}

#[test]
fn inverted_bounds_are_rejected() {
    let mut rng = StdRng::seed_from_u64(4);
    let result = generate_uniform_with(&mut rng, 10, 1, 3);
    assert_eq!(result, Err(SampleError::InvertedRange));
}

#[test]
fn unordered_bounds_are_rejected() {
    let mut rng = StdRng::seed_from_u64(5);
    let result = generate_uniform_with(&mut rng, f64::NAN, 1.0, 3);
    assert_eq!(result, Err(SampleError::InvertedRange));
}

// ============================================================================
// Property-Based Tests
// ============================================================================

use proptest::prelude::*;

proptest! {
    /// Property: every sample lands inside the inclusive bounds.
    #[test]
    fn prop_samples_stay_in_bounds(
        seed in any::<u64>(),
        lo in -1_000i64..1_000,
        span in 0i64..1_000,
        len in 0usize..64,
    ) {
        let hi = lo + span;
        let mut rng = StdRng::seed_from_u64(seed);
        let values = generate_uniform_with(&mut rng, lo, hi, len).unwrap();

        prop_assert_eq!(values.len(), len);
        prop_assert!(values.iter().all(|&n| lo <= n && n <= hi));
    }

    /// Property: the same seed always reproduces the same vector.
    #[test]
    fn prop_sampling_is_deterministic_per_seed(seed in any::<u64>(), len in 0usize..32) {
        let a = generate_uniform_with(&mut StdRng::seed_from_u64(seed), 0u32, 100, len).unwrap();
        let b = generate_uniform_with(&mut StdRng::seed_from_u64(seed), 0u32, 100, len).unwrap();
        prop_assert_eq!(a, b);
    }
}
