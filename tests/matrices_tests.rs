use grambench::{BenchMatrices, MatrixDims};

const EPS: f64 = 1e-9;

#[test]
fn gram_is_square_with_side_cols() {
    let m = BenchMatrices::generate_seeded(MatrixDims::new(300, 40), 1);
    assert_eq!(m.x.dim(), (300, 40));
    assert_eq!(m.gram.dim(), (40, 40));
}

#[test]
fn gram_is_symmetric() {
    let m = BenchMatrices::generate_seeded(MatrixDims::new(500, 30), 2);
    for i in 0..30 {
        for j in 0..30 {
            let diff = (m.gram[(i, j)] - m.gram[(j, i)]).abs();
            assert!(diff < EPS, "asymmetry {diff} at ({i}, {j})");
        }
    }
}

#[test]
fn seeded_generation_is_reproducible() {
    let a = BenchMatrices::generate_seeded(MatrixDims::new(50, 10), 7);
    let b = BenchMatrices::generate_seeded(MatrixDims::new(50, 10), 7);
    assert_eq!(a.x, b.x);
    assert_eq!(a.gram, b.gram);
}

#[test]
fn different_seeds_differ() {
    let a = BenchMatrices::generate_seeded(MatrixDims::new(50, 10), 7);
    let b = BenchMatrices::generate_seeded(MatrixDims::new(50, 10), 8);
    assert_ne!(a.x, b.x);
}

#[test]
fn dims_reports_input_shape() {
    let m = BenchMatrices::generate_seeded(MatrixDims::new(64, 8), 0);
    assert_eq!(m.dims(), MatrixDims::new(64, 8));
}

#[test]
fn default_dims_match_reference_workload() {
    let dims = MatrixDims::default();
    assert_eq!(dims.rows, 100_000);
    assert_eq!(dims.cols, 1_000);
}
