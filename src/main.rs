//! Benchmark binary: setup once, time the Gram product, time the
//! eigendecomposition, print the reports.
//!
//! Run with:
//! ```bash
//! cargo run --release -- --quick --rows 10000 --cols 300
//! ```
//!
//! The gemm backend's thread count is controlled through its own
//! environment (matrixmultiply threading), not by this binary.

use std::hint::black_box;
use std::time::Instant;

use clap::Parser;

use grambench::config::Cli;
use grambench::error::BenchError;
use grambench::kernels::{gram_matrix, symmetric_eigenvalues};
use grambench::matrices::BenchMatrices;
use grambench::report;
use grambench::runner::Runner;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), BenchError> {
    let config = cli.bench_config()?;
    let dims = cli.dims();

    if !config.quiet {
        report::print_title("Matrix Multiplication and Eigendecomposition Benchmark");
        println!(
            "generating X ({} × {}) and C = XᵀX ...",
            dims.rows, dims.cols
        );
    }

    // Setup runs exactly once; its cost is reported but never sampled.
    let t0 = Instant::now();
    let m = match cli.seed {
        Some(seed) => BenchMatrices::generate_seeded(dims, seed),
        None => BenchMatrices::generate(dims),
    };
    if !config.quiet {
        println!(
            "setup done in {}\n",
            report::format_seconds(t0.elapsed().as_secs_f64())
        );
    }

    let mut runner = Runner::new(config);
    let gram = runner.bench("matmul", || {
        black_box(gram_matrix(&m.x));
    });
    let eigen = runner.bench("eigendecomposition", || {
        black_box(symmetric_eigenvalues(&m.gram));
    });

    if !config.quiet {
        report::print_benchmark_block(
            1,
            "Matrix Multiplication (XᵀX)",
            &[format!("Matrix X shape: ({}, {})", dims.rows, dims.cols)],
            &gram,
            config.warmups,
        )?;
        report::print_benchmark_block(
            2,
            "Eigendecomposition of C",
            &[format!("Matrix C shape: ({}, {})", dims.cols, dims.cols)],
            &eigen,
            config.warmups,
        )?;
    }

    let results = [gram, eigen];
    report::print_summary(&results)?;

    if let Some(path) = &cli.json {
        report::write_json(path, &results)?;
    }
    Ok(())
}
