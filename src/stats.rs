//! Reduction of raw timing values to summary statistics.

use serde::Serialize;

use crate::error::BenchError;

/// Threshold on relative standard deviation above which a benchmark is
/// reported as unstable.
pub const UNSTABLE_REL_STD_DEV: f64 = 0.10;

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct SampleStats {
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub median: f64,
}

impl SampleStats {
    /// Reduce a non-empty value slice. Sample (n−1) standard deviation,
    /// zero for a single value.
    pub fn from_values(values: &[f64]) -> Result<Self, BenchError> {
        if values.is_empty() {
            return Err(BenchError::EmptySamples);
        }
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let std_dev = if values.len() > 1 {
            let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
            var.sqrt()
        } else {
            0.0
        };

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let mid = sorted.len() / 2;
        let median = if sorted.len() % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        };

        Ok(Self {
            mean,
            std_dev,
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            median,
        })
    }

    /// Standard deviation as a fraction of the mean (zero-mean guarded).
    pub fn rel_std_dev(&self) -> f64 {
        if self.mean == 0.0 {
            0.0
        } else {
            self.std_dev / self.mean
        }
    }

    /// High sample-to-sample variance; surfaced as a warning, never a failure.
    pub fn is_unstable(&self) -> bool {
        self.rel_std_dev() > UNSTABLE_REL_STD_DEV
    }
}
