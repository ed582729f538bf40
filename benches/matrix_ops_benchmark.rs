use criterion::measurement::Measurement;
use criterion::{criterion_group, criterion_main, BenchmarkGroup, BenchmarkId, Criterion};
use linalg::{identity, matmul, transpose};
use rand::distr::{Distribution, Uniform};
use rand::{rngs::StdRng, SeedableRng};
use std::time::Duration;

#[derive(Clone)]
pub struct MatrixBenchConfig {
    seed: u64,
    sizes: Vec<usize>,
    measurement_time: u64,
    sample_size: usize,
}

impl Default for MatrixBenchConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            sizes: vec![16, 64, 256],
            measurement_time: 10,
            sample_size: 10,
        }
    }
}

fn create_test_matrix(rows: usize, cols: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Uniform::try_from(-1.0..1.0).unwrap();
    (0..rows)
        .map(|_| (0..cols).map(|_| dist.sample(&mut rng)).collect())
        .collect()
}

fn configure_group<'a, M: Measurement>(
    c: &'a mut Criterion<M>,
    name: &str,
    config: &MatrixBenchConfig,
) -> BenchmarkGroup<'a, M> {
    let mut group = c.benchmark_group(name);
    group.measurement_time(Duration::from_secs(config.measurement_time));
    group.sample_size(config.sample_size);
    group
}

pub fn bench_matrix_construction(c: &mut Criterion) {
    let config = MatrixBenchConfig::default();
    let mut group = configure_group(c, "Matrix_Construction", &config);

    for &size in config.sizes.iter() {
        group.bench_with_input(BenchmarkId::new("identity", size), &size, |b, &n| {
            b.iter(|| identity(n).unwrap());
        });
    }
    group.finish();
}

pub fn bench_matrix_transform(c: &mut Criterion) {
    let config = MatrixBenchConfig::default();
    let mut group = configure_group(c, "Matrix_Transform", &config);

    for &size in config.sizes.iter() {
        let left = create_test_matrix(size, size, config.seed);
        let right = create_test_matrix(size, size, config.seed + 1);

        group.bench_with_input(BenchmarkId::new("transpose", size), &size, |b, _| {
            b.iter(|| transpose(&left).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("matmul", size), &size, |b, _| {
            b.iter(|| matmul(&left, &right).unwrap());
        });
    }
    group.finish();
}

criterion_group!(matrix_benches, bench_matrix_construction, bench_matrix_transform);
criterion_main!(matrix_benches);
