// Benchmarks for constellation expansion and pivot lookup on CC1.
//
// Run with: cargo bench -p baca_constellation

use baca_constellation::{CircuitConfig, Constellation};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_constellation_expansion(c: &mut Criterion) {
    let config = CircuitConfig::circuit_1();
    let mut group = c.benchmark_group("constellation_expansion");

    for (i, partition) in config.partitions.iter().enumerate() {
        group.bench_with_input(BenchmarkId::from_parameter(i + 1), partition, |b, partition| {
            b.iter(|| Constellation::new(black_box(partition.clone()), config.pitch_range))
        });
    }

    group.finish();
}

fn bench_circuit_build(c: &mut Criterion) {
    let config = CircuitConfig::circuit_1();
    c.bench_function("circuit_1_build", |b| {
        b.iter(|| black_box(&config).build())
    });
}

fn bench_pivot_segments(c: &mut Criterion) {
    let circuit = CircuitConfig::circuit_1()
        .build()
        .expect("CC1 builds");
    c.bench_function("circuit_1_pivots", |b| {
        b.iter(|| black_box(&circuit).pivot_segments().map(|p| p.len()))
    });
}

criterion_group!(
    benches,
    bench_constellation_expansion,
    bench_circuit_build,
    bench_pivot_segments
);
criterion_main!(benches);
