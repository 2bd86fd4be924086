//! Benchmark for the sorting module.
//!
//! Compares every algorithm against `slice::sort_unstable` on scrambled,
//! presorted, and reversed input. Insertion sort is only run on the small
//! sizes where its quadratic behavior is tolerable.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use permafrost::sorting::{
    counting_sort, heap_sort, insertion_sort, merge_sort, quick_sort, sort,
};
use std::hint::black_box;

fn scrambled(size: i32) -> Vec<i32> {
    (0..size).map(|n| (n * 37) % size).collect()
}

fn standard_sorted(elements: &[i32]) -> Vec<i32> {
    let mut sorted = elements.to_vec();
    sorted.sort_unstable();
    sorted
}

// =============================================================================
// Scrambled Input Benchmark
// =============================================================================

fn benchmark_scrambled_input(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("scrambled_input");

    for size in [100, 1000, 10000] {
        let elements = scrambled(size);

        group.bench_with_input(
            BenchmarkId::new("quick_sort", size),
            &elements,
            |bencher, elements| {
                bencher.iter(|| black_box(quick_sort(elements)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("merge_sort", size),
            &elements,
            |bencher, elements| {
                bencher.iter(|| black_box(merge_sort(elements)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("heap_sort", size),
            &elements,
            |bencher, elements| {
                bencher.iter(|| black_box(heap_sort(elements)));
            },
        );

        // Quadratic, so only the small sizes
        if size <= 1000 {
            group.bench_with_input(
                BenchmarkId::new("insertion_sort", size),
                &elements,
                |bencher, elements| {
                    bencher.iter(|| black_box(insertion_sort(elements)));
                },
            );
        }

        // slice::sort_unstable (clones first, the standard sort mutates)
        group.bench_with_input(
            BenchmarkId::new("std_sort_unstable", size),
            &elements,
            |bencher, elements| {
                bencher.iter(|| black_box(standard_sorted(elements)));
            },
        );
    }

    group.finish();
}

// =============================================================================
// Presorted Input Benchmark
// =============================================================================

fn benchmark_presorted_input(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("presorted_input");

    for size in [1000, 10000] {
        let ascending: Vec<i32> = (0..size).collect();

        group.bench_with_input(
            BenchmarkId::new("quick_sort", size),
            &ascending,
            |bencher, elements| {
                bencher.iter(|| black_box(quick_sort(elements)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("merge_sort", size),
            &ascending,
            |bencher, elements| {
                bencher.iter(|| black_box(merge_sort(elements)));
            },
        );

        // Presorted input is insertion sort's linear best case
        if size <= 1000 {
            group.bench_with_input(
                BenchmarkId::new("insertion_sort", size),
                &ascending,
                |bencher, elements| {
                    bencher.iter(|| black_box(insertion_sort(elements)));
                },
            );
        }

        group.bench_with_input(
            BenchmarkId::new("std_sort_unstable", size),
            &ascending,
            |bencher, elements| {
                bencher.iter(|| black_box(standard_sorted(elements)));
            },
        );
    }

    group.finish();
}

// =============================================================================
// Reversed Input Benchmark
// =============================================================================

fn benchmark_reversed_input(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("reversed_input");

    for size in [1000, 10000] {
        let descending: Vec<i32> = (0..size).rev().collect();

        group.bench_with_input(
            BenchmarkId::new("quick_sort", size),
            &descending,
            |bencher, elements| {
                bencher.iter(|| black_box(quick_sort(elements)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("heap_sort", size),
            &descending,
            |bencher, elements| {
                bencher.iter(|| black_box(heap_sort(elements)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("std_sort_unstable", size),
            &descending,
            |bencher, elements| {
                bencher.iter(|| black_box(standard_sorted(elements)));
            },
        );
    }

    group.finish();
}

// =============================================================================
// Counting Sort Benchmark (narrow value range)
// =============================================================================

fn benchmark_counting_sort(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("counting_sort");

    for size in [100, 1000, 10000] {
        let elements: Vec<i64> = (0..i64::from(size)).map(|n| (n * 37) % 1000).collect();

        group.bench_with_input(
            BenchmarkId::new("counting_sort", size),
            &elements,
            |bencher, elements| {
                bencher.iter(|| black_box(counting_sort(elements)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("std_sort_unstable", size),
            &elements,
            |bencher, elements| {
                bencher.iter(|| {
                    let mut sorted = elements.clone();
                    sorted.sort_unstable();
                    black_box(sorted)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Adaptive Dispatcher Benchmark (around the threshold)
// =============================================================================

fn benchmark_adaptive_sort(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("adaptive_sort");

    for size in [10, 11, 100, 1000] {
        let elements = scrambled(size);

        group.bench_with_input(
            BenchmarkId::new("sort", size),
            &elements,
            |bencher, elements| {
                bencher.iter(|| black_box(sort(elements)));
            },
        );
    }

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(
    benches,
    benchmark_scrambled_input,
    benchmark_presorted_input,
    benchmark_reversed_input,
    benchmark_counting_sort,
    benchmark_adaptive_sort
);

criterion_main!(benches);
