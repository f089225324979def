// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};

use palisade_vec::DynamicArray;

// Fast mode: FAST_BENCH=1 cargo bench -p benchmarks --bench dynamic_array
fn is_fast_mode() -> bool {
    std::env::var("FAST_BENCH")
        .map(|v| v == "1")
        .unwrap_or(false)
}

fn configure_group(group: &mut criterion::BenchmarkGroup<criterion::measurement::WallTime>) {
    if is_fast_mode() {
        group.measurement_time(std::time::Duration::from_millis(500));
        group.sample_size(10);
    } else {
        group.measurement_time(std::time::Duration::from_secs(3));
        group.sample_size(50);
    }
}

// =============================================================================
// Vec vs DynamicArray
// =============================================================================

fn bench_push_individual(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_individual");
    configure_group(&mut group);

    for size in [100, 1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            b.iter(|| {
                let mut vec = Vec::new();
                for i in 0..s {
                    vec.push(i as u32);
                }
                black_box(vec)
            });
        });

        group.bench_with_input(BenchmarkId::new("DynamicArray", size), &size, |b, &s| {
            b.iter(|| {
                let mut array = DynamicArray::new();
                for i in 0..s {
                    array.push_back(i as u32).expect("Failed to push_back(..)");
                }
                black_box(array)
            });
        });
    }

    group.finish();
}

fn bench_push_reserved(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_reserved");
    configure_group(&mut group);

    for size in [100, 1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            let mut vec = Vec::<u32>::with_capacity(s);
            b.iter(|| {
                vec.clear();
                for i in 0..s {
                    vec.push(i as u32);
                }
                black_box(&vec);
            });
        });

        group.bench_with_input(BenchmarkId::new("DynamicArray", size), &size, |b, &s| {
            let mut array =
                DynamicArray::<u32>::with_capacity(s).expect("Failed to with_capacity(..)");
            b.iter(|| {
                array.clear();
                for i in 0..s {
                    array.push_back(i as u32).expect("Failed to push_back(..)");
                }
                black_box(&array);
            });
        });
    }

    group.finish();
}

fn bench_clone(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone");
    configure_group(&mut group);

    for size in [100, 1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        let source: Vec<u64> = (0..size as u64).collect();
        let array = DynamicArray::try_from_slice(&source).expect("Failed to try_from_slice(..)");

        group.bench_with_input(BenchmarkId::new("Vec", size), &source, |b, source| {
            b.iter(|| black_box(source.clone()));
        });

        group.bench_with_input(BenchmarkId::new("DynamicArray", size), &array, |b, array| {
            b.iter(|| black_box(array.clone()));
        });
    }

    group.finish();
}

fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("resize");
    configure_group(&mut group);

    for size in [100, 1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("DynamicArray", size), &size, |b, &s| {
            b.iter_batched(
                DynamicArray::<u64>::new,
                |mut array| {
                    array.resize(s, 7).expect("Failed to resize(..)");
                    black_box(array)
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_push_individual,
    bench_push_reserved,
    bench_clone,
    bench_resize,
);
criterion_main!(benches);
