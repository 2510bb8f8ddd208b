//! End-to-end pipeline at a miniature shape: setup once, run both
//! benchmarks, check every report invariant.

use std::time::Duration;

use grambench::prelude::*;

#[test]
fn two_benchmarks_with_valid_statistics() {
    let dims = MatrixDims::new(200, 30);
    let m = BenchMatrices::generate_seeded(dims, 11);

    let config = BenchConfig {
        values: 4,
        warmups: 1,
        min_sample_time: Duration::from_micros(500),
        quiet: true,
    };
    let mut runner = Runner::new(config);

    let gram = runner.bench("matmul", || {
        std::hint::black_box(gram_matrix(&m.x));
    });
    let eigen = runner.bench("eigendecomposition", || {
        std::hint::black_box(symmetric_eigenvalues(&m.gram));
    });

    let results = [gram, eigen];
    assert_eq!(results.len(), 2);
    for result in &results {
        assert_eq!(result.values.len(), 4);
        let stats = result.stats().unwrap();
        assert!(stats.min >= 0.0);
        assert!(stats.min <= stats.mean && stats.mean <= stats.max);
        assert!(stats.min <= stats.median && stats.median <= stats.max);
    }

    // The derived matrix drives the second benchmark: square, side = cols,
    // full real spectrum.
    assert_eq!(m.gram.dim(), (30, 30));
    assert_eq!(symmetric_eigenvalues(&m.gram).len(), 30);
}
