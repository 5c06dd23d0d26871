//! Benchmarks for table construction and backtracking.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lcs_rs::{backtrack_lcs, compute_lcs, compute_lcs_matrix};

fn make_seq(len: usize, stride: usize) -> Vec<u8> {
    (0..len).map(|i| b"ACGT"[(i / stride) % 4]).collect()
}

fn mutate(s: &[u8], every: usize) -> Vec<u8> {
    s.iter()
        .enumerate()
        .map(|(i, &c)| if i % every == 0 { b'N' } else { c })
        .collect()
}

fn bench_compute_lcs(c: &mut Criterion) {
    let mut group = c.benchmark_group("lcs/compute_lcs");

    for len in [64usize, 256, 1024] {
        let a = make_seq(len, 3);
        let b = mutate(&a, 7);
        group.throughput(Throughput::Elements((len * len) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |bench, _| {
            bench.iter(|| compute_lcs(black_box(&a), black_box(&b), |x, y| x == y))
        });
    }

    group.finish();
}

fn bench_backtrack_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("lcs/backtrack");

    for len in [256usize, 1024] {
        let a = make_seq(len, 5);
        let b = mutate(&a, 11);
        let table = compute_lcs_matrix(&a, &b, |x, y| x == y);
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |bench, _| {
            bench.iter(|| backtrack_lcs(black_box(&a), black_box(&b), &table, |x, y| x == y))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compute_lcs, bench_backtrack_only);
criterion_main!(benches);
