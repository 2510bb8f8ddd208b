//! Command-line surface. Thin pass-throughs to `BenchConfig` and
//! `MatrixDims`; clap does the argument validation.

use std::path::PathBuf;

use clap::Parser;

use crate::error::BenchError;
use crate::matrices::MatrixDims;
use crate::runner::BenchConfig;

#[derive(Parser, Debug)]
#[command(
    name = "grambench",
    version,
    about = "Benchmark a large Gram-matrix product and its symmetric eigendecomposition"
)]
pub struct Cli {
    /// Quick preset: fewer samples, short calibration target
    #[arg(long, conflicts_with = "rigorous")]
    pub quick: bool,

    /// Rigorous preset: more samples and warmups
    #[arg(long)]
    pub rigorous: bool,

    /// Print only the summary block
    #[arg(long)]
    pub quiet: bool,

    /// Timed values per benchmark (overrides the preset)
    #[arg(long, value_name = "N")]
    pub values: Option<usize>,

    /// Warmup samples discarded per benchmark (overrides the preset)
    #[arg(long, value_name = "N")]
    pub warmups: Option<usize>,

    /// Rows of the input matrix X
    #[arg(long, default_value_t = 100_000)]
    pub rows: usize,

    /// Columns of the input matrix X (side of the Gram matrix)
    #[arg(long, default_value_t = 1_000)]
    pub cols: usize,

    /// Seed the matrix values for reproducibility (default: unseeded)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write a JSON export of raw values and statistics to this path
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,
}

impl Cli {
    pub fn bench_config(&self) -> Result<BenchConfig, BenchError> {
        let mut config = if self.quick {
            BenchConfig::quick()
        } else if self.rigorous {
            BenchConfig::rigorous()
        } else {
            BenchConfig::default()
        };
        if let Some(values) = self.values {
            if values == 0 {
                return Err(BenchError::InvalidConfig(
                    "--values must be at least 1".to_string(),
                ));
            }
            config.values = values;
        }
        if let Some(warmups) = self.warmups {
            config.warmups = warmups;
        }
        config.quiet = self.quiet;
        Ok(config)
    }

    pub fn dims(&self) -> MatrixDims {
        MatrixDims::new(self.rows, self.cols)
    }
}
