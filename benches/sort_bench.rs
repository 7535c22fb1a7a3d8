//! Benchmarks for the five sorting routines.
//!
//! Inputs mirror what the CLI produces (a seeded shuffle of `1..=n`) plus the
//! two orders that separate the algorithms: already sorted and reversed.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sortlab::{shuffled_sequence, sort_with, SortMethod};
use std::time::Duration;

// ============================================================================
// INPUTS
// ============================================================================

/// Sizes small enough that the quadratic sorts finish in reasonable time.
const SIZES: &[usize] = &[64, 512, 2048];

/// Larger sizes, only for merge and quick sort.
const LARGE_SIZES: &[usize] = &[16_384, 131_072];

const SEED: u64 = 0x5eed;

struct Input {
    name: &'static str,
    build: fn(usize) -> Vec<i32>,
}

fn shuffled(n: usize) -> Vec<i32> {
    shuffled_sequence(n, SEED)
}

fn sorted(n: usize) -> Vec<i32> {
    (1..=n as i32).collect()
}

fn reversed(n: usize) -> Vec<i32> {
    (1..=n as i32).rev().collect()
}

const INPUTS: &[Input] = &[
    Input {
        name: "shuffled",
        build: shuffled,
    },
    Input {
        name: "sorted",
        build: sorted,
    },
    Input {
        name: "reversed",
        build: reversed,
    },
];

fn tight_confidence() -> Criterion {
    Criterion::default()
        .measurement_time(Duration::from_secs(3))
        .warm_up_time(Duration::from_millis(500))
        .sample_size(30)
}

// ============================================================================
// BENCHMARKS
// ============================================================================

fn bench_all_methods(c: &mut Criterion) {
    for input in INPUTS {
        let mut group = c.benchmark_group(format!("sort_{}", input.name));

        for &size in SIZES {
            let vals = (input.build)(size);
            group.throughput(Throughput::Elements(size as u64));

            for method in SortMethod::ALL {
                group.bench_with_input(BenchmarkId::new(method.name(), size), &vals, |b, vals| {
                    b.iter(|| {
                        let mut copy = vals.clone();
                        black_box(sort_with(method, black_box(&mut copy)))
                    });
                });
            }
        }

        group.finish();
    }
}

fn bench_large_inputs(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_large_shuffled");

    for &size in LARGE_SIZES {
        let vals = shuffled_sequence(size, SEED);
        group.throughput(Throughput::Elements(size as u64));

        for method in [SortMethod::Merge, SortMethod::Quick] {
            group.bench_with_input(BenchmarkId::new(method.name(), size), &vals, |b, vals| {
                b.iter(|| {
                    let mut copy = vals.clone();
                    black_box(sort_with(method, black_box(&mut copy)))
                });
            });
        }
    }

    group.finish();
}

criterion_group!(
    name = benches;
    config = tight_confidence();
    targets = bench_all_methods, bench_large_inputs
);

criterion_main!(benches);
