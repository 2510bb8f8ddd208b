// benches/eigen_bench.rs
// Symmetric eigendecomposition of a reduced-size Gram matrix.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use grambench::{symmetric_eigenvalues, BenchMatrices, MatrixDims};

fn bench_symmetric_eigen(c: &mut Criterion) {
    let m = BenchMatrices::generate_seeded(MatrixDims::new(2_000, 200), 42);

    c.bench_function("symmetric eigen 200×200", |bencher| {
        bencher.iter(|| black_box(symmetric_eigenvalues(black_box(&m.gram))))
    });
}

criterion_group!(eigen_benches, bench_symmetric_eigen);
criterion_main!(eigen_benches);
