//! # grambench
//!
//! Wall-clock benchmarks for two dense linear-algebra operations on a tall
//! random matrix `X`:
//!
//! 1. the Gram product `C = XᵀX`, and
//! 2. the symmetric eigendecomposition of `C`.
//!
//! The numeric kernels are owned by the ecosystem (`ndarray`'s
//! matrixmultiply-backed gemm, `nalgebra`'s symmetric eigensolver); this
//! crate only allocates the matrices once, drives a calibrated
//! warmup-then-sample timing loop, and reduces the samples to statistics.
//!
//! ```rust
//! use grambench::prelude::*;
//!
//! let m = BenchMatrices::generate_seeded(MatrixDims::new(64, 8), 7);
//! let mut runner = Runner::new(BenchConfig::quick());
//! let result = runner.bench("gram", || {
//!     std::hint::black_box(gram_matrix(&m.x));
//! });
//! let stats = result.stats().unwrap();
//! assert!(stats.min <= stats.mean && stats.mean <= stats.max);
//! ```

#![doc = include_str!("../README.md")]

pub mod config;
pub mod error;
pub mod kernels;
pub mod matrices;
pub mod report;
pub mod runner;
pub mod stats;

pub mod prelude;

pub use error::BenchError;
pub use kernels::{gram_matrix, symmetric_eigenvalues};
pub use matrices::{BenchMatrices, MatrixDims};
pub use runner::{BenchConfig, BenchResult, Runner};
pub use stats::SampleStats;
