//! Human-readable report blocks on stdout, plus the optional JSON export.
//!
//! The text output is informational only; the JSON file is the one
//! machine-readable surface.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::BenchError;
use crate::runner::BenchResult;
use crate::stats::SampleStats;

const RULE_WIDTH: usize = 70;

pub fn print_title(title: &str) {
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("{title}");
    println!("{}", "=".repeat(RULE_WIDTH));
    println!();
}

/// One `BENCHMARK n: ...` block: banner, context lines, statistics.
pub fn print_benchmark_block(
    index: usize,
    title: &str,
    context: &[String],
    result: &BenchResult,
    warmups: usize,
) -> Result<(), BenchError> {
    let stats = result.stats()?;

    println!("{}", "-".repeat(RULE_WIDTH));
    println!("BENCHMARK {index}: {title}");
    for line in context {
        println!("{line}");
    }
    println!("{}", "-".repeat(RULE_WIDTH));
    println!("loops per value: {}", result.loops);
    println!(
        "values: {} ({} warmup{} discarded)",
        result.values.len(),
        warmups,
        if warmups == 1 { "" } else { "s" }
    );
    print_stats_lines(&stats);
    println!();
    Ok(())
}

pub fn print_summary(results: &[BenchResult]) -> Result<(), BenchError> {
    println!("{}", "-".repeat(RULE_WIDTH));
    println!("SUMMARY");
    println!("{}", "-".repeat(RULE_WIDTH));
    for result in results {
        let stats = result.stats()?;
        let flag = if stats.is_unstable() { " (unstable!)" } else { "" };
        println!(
            "{}: {} ± {}{}",
            result.name,
            format_seconds(stats.mean),
            format_seconds(stats.std_dev),
            flag
        );
    }
    Ok(())
}

fn print_stats_lines(stats: &SampleStats) {
    println!(
        "mean:   {} ± {}",
        format_seconds(stats.mean),
        format_seconds(stats.std_dev)
    );
    println!("median: {}", format_seconds(stats.median));
    println!("min:    {}", format_seconds(stats.min));
    println!("max:    {}", format_seconds(stats.max));
    if stats.is_unstable() {
        println!(
            "WARNING: the benchmark seems unstable (rel std dev {:.1}%)",
            stats.rel_std_dev() * 100.0
        );
    }
}

/// Scale a seconds value into the unit that keeps it readable.
pub fn format_seconds(secs: f64) -> String {
    if secs >= 1.0 {
        format!("{secs:.3} s")
    } else if secs >= 1e-3 {
        format!("{:.3} ms", secs * 1e3)
    } else if secs >= 1e-6 {
        format!("{:.3} µs", secs * 1e6)
    } else {
        format!("{:.1} ns", secs * 1e9)
    }
}

/// What lands in the JSON export, per benchmark.
#[derive(Serialize)]
struct JsonEntry<'a> {
    name: &'a str,
    loops: u32,
    values: &'a [f64],
    stats: SampleStats,
    unstable: bool,
}

/// Serialize all results (raw values plus reduced statistics) to `path`.
pub fn write_json<P: AsRef<Path>>(path: P, results: &[BenchResult]) -> Result<(), BenchError> {
    let path = path.as_ref();
    let mut entries = Vec::with_capacity(results.len());
    for result in results {
        let stats = result.stats()?;
        entries.push(JsonEntry {
            name: &result.name,
            loops: result.loops,
            values: &result.values,
            stats,
            unstable: stats.is_unstable(),
        });
    }
    let json = serde_json::to_string_pretty(&entries).map_err(|e| BenchError::JsonExport {
        path: path.display().to_string(),
        source: e.into(),
    })?;
    fs::write(path, json).map_err(|e| BenchError::JsonExport {
        path: path.display().to_string(),
        source: e,
    })
}
