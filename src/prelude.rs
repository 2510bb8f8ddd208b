//! Convenience re-exports for callers that want the whole pipeline.

pub use crate::error::BenchError;
pub use crate::kernels::{gram_matrix, symmetric_eigenvalues};
pub use crate::matrices::{BenchMatrices, MatrixDims};
pub use crate::runner::{BenchConfig, BenchResult, Runner};
pub use crate::stats::SampleStats;
