//! The two timed operations. Both delegate to library kernels; nothing
//! numeric is implemented here.

use nalgebra::DMatrix;
use ndarray::linalg::general_mat_mul;
use ndarray::Array2;

/// Gram product `xᵀ·x` through ndarray's gemm (matrixmultiply backend).
///
/// For an m×n input the result is n×n and symmetric by construction.
pub fn gram_matrix(x: &Array2<f64>) -> Array2<f64> {
    let (_, cols) = x.dim();
    let mut c = Array2::<f64>::zeros((cols, cols));
    general_mat_mul(1.0, &x.t(), x, 0.0, &mut c);
    c
}

/// Full symmetric eigendecomposition of `c`, returning the eigenvalues.
///
/// The decomposition (values and vectors) is what gets timed; callers that
/// only need the spectrum read the returned vector. All eigenvalues of a
/// symmetric real matrix are real, so the output length equals the side of
/// `c`. Order is unspecified.
pub fn symmetric_eigenvalues(c: &Array2<f64>) -> Vec<f64> {
    let (n, m) = c.dim();
    assert_eq!(n, m, "eigendecomposition needs a square matrix");
    let mat = DMatrix::from_iterator(n, m, c.t().iter().cloned());
    let eigen = mat.symmetric_eigen();
    eigen.eigenvalues.iter().cloned().collect()
}
