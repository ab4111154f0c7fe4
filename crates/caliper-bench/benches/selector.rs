//! Width resolution and sampling benchmarks.

use caliper::sample::generate_uniform_with;
use caliper::{SizeHint, resolve_width};
use caliper_bench::HINT_SWEEP;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

// ============================================================================
// Resolution Benchmarks
// ============================================================================

fn bench_resolve_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_width");

    group.bench_function("hint_sweep", |b| {
        b.iter(|| {
            for hint in HINT_SWEEP {
                let width = resolve_width(SizeHint::new(black_box(hint)));
                let _ = black_box(width);
            }
        });
    });

    group.finish();
}

// ============================================================================
// Sampling Benchmarks
// ============================================================================

fn bench_generate_uniform(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_uniform");

    for len in [16, 256, 4096] {
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| {
                generate_uniform_with(&mut rng, black_box(0i64), black_box(1 << 20), len).unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_resolve_width, bench_generate_uniform);
criterion_main!(benches);
