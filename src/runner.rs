//! In-process benchmark runner: calibrated loop count, discarded warmup
//! samples, then a fixed number of timed values.
//!
//! Each value is seconds-per-loop over `loops` invocations of the target
//! closure, so the timed region covers only the operation itself; setup
//! and result consumption stay outside.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::error::BenchError;
use crate::stats::SampleStats;

/// Calibration stops doubling here even if `min_sample_time` was not hit.
const MAX_LOOPS: u32 = 1 << 20;

#[derive(Copy, Clone, Debug)]
pub struct BenchConfig {
    /// Timed samples collected per benchmark.
    pub values: usize,
    /// Samples run and discarded before timing starts.
    pub warmups: usize,
    /// Target duration of one sample; the inner loop count is doubled
    /// during calibration until a sample takes at least this long.
    pub min_sample_time: Duration,
    /// Suppress per-benchmark progress on stdout.
    pub quiet: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            values: 20,
            warmups: 1,
            min_sample_time: Duration::from_millis(100),
            quiet: false,
        }
    }
}

impl BenchConfig {
    /// Explicit sample counts; zero values is rejected.
    pub fn new(values: usize, warmups: usize) -> Result<Self, BenchError> {
        if values == 0 {
            return Err(BenchError::InvalidConfig(
                "at least one timed value is required".to_string(),
            ));
        }
        Ok(Self {
            values,
            warmups,
            ..Self::default()
        })
    }

    /// Fast preset: few samples, short calibration target.
    pub fn quick() -> Self {
        Self {
            values: 5,
            warmups: 1,
            min_sample_time: Duration::from_millis(10),
            ..Self::default()
        }
    }

    /// Slow preset: more samples and warmups for tighter statistics.
    pub fn rigorous() -> Self {
        Self {
            values: 60,
            warmups: 3,
            ..Self::default()
        }
    }
}

/// Raw outcome of one benchmark: the calibrated loop count and the ordered
/// timed values, each in seconds per loop iteration.
#[derive(Clone, Debug, Serialize)]
pub struct BenchResult {
    pub name: String,
    pub loops: u32,
    pub values: Vec<f64>,
}

impl BenchResult {
    pub fn stats(&self) -> Result<SampleStats, BenchError> {
        SampleStats::from_values(&self.values)
    }
}

pub struct Runner {
    config: BenchConfig,
}

impl Runner {
    pub fn new(config: BenchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Run one benchmark target to completion: calibrate, warm up, sample.
    pub fn bench<F: FnMut()>(&mut self, name: &str, mut f: F) -> BenchResult {
        let loops = self.calibrate(&mut f);
        for _ in 0..self.config.warmups {
            sample(&mut f, loops);
        }
        let values = (0..self.config.values)
            .map(|_| sample(&mut f, loops))
            .collect();
        BenchResult {
            name: name.to_string(),
            loops,
            values,
        }
    }

    /// Double the inner loop count until one sample reaches the target
    /// duration. The calibration samples are discarded.
    fn calibrate<F: FnMut()>(&self, f: &mut F) -> u32 {
        let mut loops = 1u32;
        loop {
            let t0 = Instant::now();
            for _ in 0..loops {
                f();
            }
            if t0.elapsed() >= self.config.min_sample_time || loops >= MAX_LOOPS {
                return loops;
            }
            loops *= 2;
        }
    }
}

fn sample<F: FnMut()>(f: &mut F, loops: u32) -> f64 {
    let t0 = Instant::now();
    for _ in 0..loops {
        f();
    }
    t0.elapsed().as_secs_f64() / loops as f64
}
