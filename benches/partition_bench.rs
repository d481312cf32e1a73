//! Benchmark for partition and filter-map against the iterator equivalents.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use focal::control::Either;
use focal::partition::{filter_map, filter_map_values, partition_map};
use std::collections::BTreeMap;
use std::hint::black_box;

fn classify(value: u64) -> Either<u64, u64> {
    if value % 2 == 0 {
        Either::Left(value)
    } else {
        Either::Right(value)
    }
}

// =============================================================================
// Sequence Benchmarks
// =============================================================================

fn benchmark_partition_map(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("partition_map");

    for size in [100, 1000, 10000] {
        let values: Vec<u64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("focal", size), &values, |bencher, values| {
            bencher.iter(|| black_box(partition_map(values.iter().copied(), classify)));
        });

        group.bench_with_input(BenchmarkId::new("iterator_partition", size), &values, |bencher, values| {
            bencher.iter(|| {
                let (lefts, rights): (Vec<u64>, Vec<u64>) =
                    values.iter().copied().partition(|value| value % 2 == 0);
                black_box((lefts, rights))
            });
        });
    }

    group.finish();
}

fn benchmark_filter_map(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("filter_map");

    for size in [100, 1000, 10000] {
        let values: Vec<u64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("focal", size), &values, |bencher, values| {
            bencher.iter(|| black_box(filter_map(values.iter().copied(), |value| value.checked_sub(size / 2))));
        });

        group.bench_with_input(BenchmarkId::new("iterator", size), &values, |bencher, values| {
            bencher.iter(|| {
                let kept: Vec<u64> = values
                    .iter()
                    .copied()
                    .filter_map(|value| value.checked_sub(size / 2))
                    .collect();
                black_box(kept)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Keyed Benchmarks
// =============================================================================

fn benchmark_filter_map_values(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("filter_map_values");

    for size in [100, 1000] {
        let map: BTreeMap<u64, u64> = (0..size).map(|key| (key, key * 3)).collect();

        group.bench_with_input(BenchmarkId::new("btree_map", size), &map, |bencher, map| {
            bencher.iter(|| black_box(filter_map_values(map.clone(), |value| (value % 2 == 0).then_some(value))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_partition_map,
    benchmark_filter_map,
    benchmark_filter_map_values
);
criterion_main!(benches);
