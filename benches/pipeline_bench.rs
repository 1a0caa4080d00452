//! Benchmark for fused pipelines vs staged evaluation and std iterators.
//!
//! Compares pipars' single-pass pipelines against running each operation as a
//! separate pass, and against the equivalent standard iterator chains.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pipars::prelude::*;
use std::collections::HashSet;
use std::hint::black_box;

// =============================================================================
// map + filter Benchmark
// =============================================================================

fn benchmark_map_filter(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map_filter");

    for size in [100, 1000, 10000] {
        let data: Vec<i64> = (0..size).collect();

        // Fused pipeline (one pass, no intermediate Vec)
        group.bench_with_input(BenchmarkId::new("fused", size), &data, |bencher, data| {
            bencher.iter(|| {
                let result = pipe!(
                    black_box(data.as_slice()),
                    map(|value: i64| value * 3),
                    filter(|value: &i64| value % 2 == 0),
                );
                black_box(result)
            });
        });

        // Staged evaluation (intermediate Vec between operations)
        group.bench_with_input(BenchmarkId::new("staged", size), &data, |bencher, data| {
            bencher.iter(|| {
                let mapped = map(|value: i64| value * 3).transform(black_box(data.as_slice()));
                let result = filter(|value: &i64| value % 2 == 0).transform(mapped);
                black_box(result)
            });
        });

        // Standard iterator chain
        group.bench_with_input(BenchmarkId::new("std_iter", size), &data, |bencher, data| {
            bencher.iter(|| {
                let result: Vec<i64> = black_box(data.as_slice())
                    .iter()
                    .map(|value| value * 3)
                    .filter(|value| value % 2 == 0)
                    .collect();
                black_box(result)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Short-Circuit Benchmark (take out of a large input)
// =============================================================================

fn benchmark_short_circuit(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("short_circuit");

    for size in [1000, 10000, 100000] {
        let data: Vec<i64> = (0..size).collect();

        // Fused pipeline abandons the source after ten matches
        group.bench_with_input(BenchmarkId::new("fused", size), &data, |bencher, data| {
            bencher.iter(|| {
                let result = pipe!(
                    black_box(data.as_slice()),
                    map(|value: i64| value * 2),
                    take(10),
                );
                black_box(result)
            });
        });

        // Standard iterator take
        group.bench_with_input(BenchmarkId::new("std_iter", size), &data, |bencher, data| {
            bencher.iter(|| {
                let result: Vec<i64> = black_box(data.as_slice())
                    .iter()
                    .map(|value| value * 2)
                    .take(10)
                    .collect();
                black_box(result)
            });
        });
    }

    group.finish();
}

// =============================================================================
// unique Benchmark
// =============================================================================

fn benchmark_unique(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("unique");

    for size in [100, 1000, 10000] {
        // Half of the items repeat, so the seen-set does real work.
        let data: Vec<i64> = (0..size).map(|value| value % (size / 2).max(1)).collect();

        group.bench_with_input(BenchmarkId::new("pipars", size), &data, |bencher, data| {
            bencher.iter(|| {
                let result = pipe!(black_box(data.as_slice()), unique());
                black_box(result)
            });
        });

        // Manual HashSet loop
        group.bench_with_input(BenchmarkId::new("manual", size), &data, |bencher, data| {
            bencher.iter(|| {
                let mut seen = HashSet::new();
                let mut result = Vec::new();
                for &value in black_box(data.as_slice()) {
                    if seen.insert(value) {
                        result.push(value);
                    }
                }
                black_box(result)
            });
        });
    }

    group.finish();
}

// =============================================================================
// flat_map Benchmark
// =============================================================================

fn benchmark_flat_map(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("flat_map");

    for size in [100, 1000, 10000] {
        let data: Vec<i64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("pipars", size), &data, |bencher, data| {
            bencher.iter(|| {
                let result = pipe!(
                    black_box(data.as_slice()),
                    flat_map(|value: i64| vec![value, value + 1]),
                );
                black_box(result)
            });
        });

        group.bench_with_input(BenchmarkId::new("std_iter", size), &data, |bencher, data| {
            bencher.iter(|| {
                let result: Vec<i64> = black_box(data.as_slice())
                    .iter()
                    .flat_map(|&value| vec![value, value + 1])
                    .collect();
                black_box(result)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(
    benches,
    benchmark_map_filter,
    benchmark_short_circuit,
    benchmark_unique,
    benchmark_flat_map
);

criterion_main!(benches);
