use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use densegrid::{Axis, Backend, Matrix};

fn test_matrix(rows: usize, cols: usize, stride: usize) -> Matrix<f64> {
    Matrix::from_vec(
        rows,
        cols,
        (0..rows * cols).map(|i| ((i * stride) % 100) as f64).collect(),
    )
    .unwrap()
}

fn bench_multiply_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");

    let sizes = vec![(16, 16, 16), (64, 64, 64), (128, 128, 128), (256, 256, 256)];

    for (m, n, p) in sizes {
        let id = format!("{}x{}_x_{}x{}", m, n, n, p);
        let a = test_matrix(m, n, 1);
        let b = test_matrix(n, p, 2);

        group.bench_with_input(
            BenchmarkId::from_parameter(&id),
            &(&a, &b),
            |bench, (a, b)| {
                bench.iter(|| {
                    let result = black_box(a).multiply(black_box(b)).unwrap();
                    black_box(result);
                });
            },
        );
    }

    group.finish();
}

fn bench_multiply_backends(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply_backend");

    let a = test_matrix(256, 256, 1);
    let b = test_matrix(256, 256, 3);

    for backend in [Backend::Scalar, Backend::Parallel] {
        let a = a.clone().with_backend(backend);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}", backend)),
            &(&a, &b),
            |bench, (a, b)| {
                bench.iter(|| black_box(black_box(a).multiply(black_box(b)).unwrap()));
            },
        );
    }

    group.finish();
}

fn bench_transpose(c: &mut Criterion) {
    let mut group = c.benchmark_group("transpose");

    let sizes = vec![(64, 64), (256, 256), (128, 256)];

    for (rows, cols) in sizes {
        let id = format!("{}x{}", rows, cols);
        let m = test_matrix(rows, cols, 1);

        group.bench_with_input(BenchmarkId::from_parameter(&id), &m, |bench, m| {
            bench.iter(|| black_box(black_box(m).transpose()));
        });
    }

    group.finish();
}

fn bench_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("inverse");

    for n in [8, 32, 128] {
        // Diagonal boost keeps every size well conditioned
        let mut m = test_matrix(n, n, 7);
        for i in 0..n {
            m.set(i, i, 100.0 * n as f64).unwrap();
        }

        group.bench_with_input(BenchmarkId::from_parameter(n), &m, |bench, m| {
            bench.iter(|| black_box(black_box(m).inverse().unwrap()));
        });
    }

    group.finish();
}

fn bench_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum");
    let m = test_matrix(512, 512, 1);

    for axis in [Axis::Row, Axis::Column] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}", axis)),
            &m,
            |bench, m| {
                bench.iter(|| black_box(black_box(m).sum(axis)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_multiply_sizes,
    bench_multiply_backends,
    bench_transpose,
    bench_inverse,
    bench_sum
);
criterion_main!(benches);
