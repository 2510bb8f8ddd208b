//! Error taxonomy for the benchmark pipeline.
//!
//! Deliberately small: allocation failure aborts via the global allocator,
//! and unstable benchmarks are a reported warning rather than an error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    /// Statistics were requested for an empty sample set.
    #[error("no timing values to reduce")]
    EmptySamples,

    /// A configuration value the runner cannot work with.
    #[error("invalid benchmark configuration: {0}")]
    InvalidConfig(String),

    /// Writing the JSON export failed.
    #[error("failed to write JSON export to {path}: {source}")]
    JsonExport {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
