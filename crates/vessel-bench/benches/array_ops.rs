//! Criterion micro-benchmarks for DynArray push, insert, erase, and copy,
//! with `Vec` as the baseline for each.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use vessel::DynArray;
use vessel_bench::{presized, sequential, SIZES};
use vessel_test_utils::TestNode;

/// Benchmark: push `n` integers into an empty container.
fn bench_push_back(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_back");
    for n in SIZES {
        group.bench_with_input(BenchmarkId::new("dyn_array", n), &n, |b, &n| {
            b.iter(|| {
                let mut v = DynArray::new();
                for i in 0..n {
                    v.push_back(black_box(i));
                }
                v
            });
        });
        group.bench_with_input(BenchmarkId::new("std_vec", n), &n, |b, &n| {
            b.iter(|| {
                let mut v = Vec::new();
                for i in 0..n {
                    v.push(black_box(i));
                }
                v
            });
        });
    }
    group.finish();
}

/// Benchmark: push default-constructed structs (non-trivial `Default`).
fn bench_push_back_struct(c: &mut Criterion) {
    c.bench_function("push_back_test_node_1k", |b| {
        b.iter(|| {
            let mut v = DynArray::new();
            for i in 0..1_000 {
                v.push_back(TestNode::new(black_box(i)));
            }
            v
        });
    });
}

/// Benchmark: worst-case insert at index 0, then erase it again.
fn bench_insert_erase_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_erase_front");
    for n in SIZES {
        let mut v = sequential(n);
        group.bench_with_input(BenchmarkId::new("dyn_array", n), &n, |b, _| {
            b.iter(|| {
                v.insert(0, black_box(7));
                black_box(v.erase(0).unwrap());
            });
        });
        let mut baseline: Vec<u64> = (0..n as u64).collect();
        group.bench_with_input(BenchmarkId::new("std_vec", n), &n, |b, _| {
            b.iter(|| {
                baseline.insert(0, black_box(7));
                black_box(baseline.remove(0));
            });
        });
    }
    group.finish();
}

/// Benchmark: copy construction, which clones only the occupied prefix.
fn bench_clone(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone");
    for n in SIZES {
        let pushed = sequential(n);
        group.bench_with_input(BenchmarkId::new("pushed", n), &pushed, |b, v| {
            b.iter(|| black_box(v.clone()));
        });
        let sized = presized(n);
        group.bench_with_input(BenchmarkId::new("presized", n), &sized, |b, v| {
            b.iter(|| black_box(v.clone()));
        });
    }
    group.finish();
}

/// Benchmark: checked vs. indexed reads over a 10K array.
fn bench_access(c: &mut Criterion) {
    let v = sequential(10_000);
    c.bench_function("read_index_10k", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for i in 0..v.len() {
                sum = sum.wrapping_add(v[i]);
            }
            black_box(sum)
        });
    });
    c.bench_function("read_at_10k", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for i in 0..v.len() {
                sum = sum.wrapping_add(*v.at(i).unwrap());
            }
            black_box(sum)
        });
    });
}

criterion_group!(
    benches,
    bench_push_back,
    bench_push_back_struct,
    bench_insert_erase_front,
    bench_clone,
    bench_access
);
criterion_main!(benches);
