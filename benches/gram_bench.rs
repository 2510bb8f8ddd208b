// benches/gram_bench.rs
// Gram product XᵀX at a reduced shape (the full 100000×1000 workload
// belongs to the binary, not CI).

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use grambench::{gram_matrix, BenchMatrices, MatrixDims};

fn bench_gram_product(c: &mut Criterion) {
    let m = BenchMatrices::generate_seeded(MatrixDims::new(2_000, 200), 42);

    c.bench_function("gram product 2000×200", |bencher| {
        bencher.iter(|| black_box(gram_matrix(black_box(&m.x))))
    });
}

criterion_group!(gram_benches, bench_gram_product);
criterion_main!(gram_benches);
