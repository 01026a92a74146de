//! Console and file presentation for generated samples.
//!
//! This is the presentation collaborator of the sampling engine: it
//! consumes generated sample collections plus distribution parameters and
//! produces textual output (preview, summary table, histogram) or exported
//! files (CSV samples, CSV curves, JSON summaries). Nothing here affects
//! the correctness of the sampling algorithms.

use sampler_core::types::TheoreticalCurve;
use sampler_engine::stats::SampleSummary;

use crate::commands::RunOptions;
use crate::{CliError, Result};

/// Width of the histogram bars in characters.
const BAR_WIDTH: usize = 50;

/// Everything the presentation layer needs to describe one generation run.
pub struct DistributionReport<'a> {
    /// Human-readable distribution title.
    pub title: &'a str,
    /// Generated samples (possibly empty for acceptance-rejection).
    pub samples: &'a [f64],
    /// Requested sample or proposal count.
    pub requested: usize,
    /// Closed-form mean, when it exists.
    pub theoretical_mean: Option<f64>,
    /// Closed-form variance, when it exists.
    pub theoretical_variance: Option<f64>,
    /// Observed acceptance rate (acceptance-rejection only).
    pub acceptance_rate: Option<f64>,
}

/// Renders the report in the requested format.
pub fn emit(report: &DistributionReport<'_>, options: &RunOptions) -> Result<()> {
    match options.format.as_str() {
        "table" => print_table(report, options.bins),
        "json" => print_json(report)?,
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: table, json",
                other
            )))
        }
    }
    Ok(())
}

/// Writes the optional CSV outputs requested on the command line.
pub fn export(
    options: &RunOptions,
    samples: &[f64],
    curve: Option<&TheoreticalCurve>,
) -> Result<()> {
    if let Some(path) = &options.samples_out {
        write_samples_csv(path, samples)?;
    }
    if let Some(path) = &options.curve_out {
        match curve {
            Some(curve) => write_curve_csv(path, curve)?,
            None => {
                return Err(CliError::InvalidArgument(
                    "no theoretical curve available to export (empty sample set)".to_string(),
                ))
            }
        }
    }
    Ok(())
}

/// Formats the first five samples, the console preview the demo prints.
pub fn preview(samples: &[f64]) -> String {
    let shown: Vec<String> = samples.iter().take(5).map(|x| format!("{:.4}", x)).collect();
    format!("[{}]", shown.join(", "))
}

fn print_table(report: &DistributionReport<'_>, bins: usize) {
    println!();
    println!("=== {} ===", report.title);
    println!("First five samples: {}", preview(report.samples));

    let Some(summary) = SampleSummary::from_samples(report.samples) else {
        // Zero acceptances is a legal outcome of rejection sampling; make
        // it explicit instead of printing NaN statistics.
        println!(
            "No samples accepted ({} of {} proposals)",
            report.samples.len(),
            report.requested
        );
        if let Some(rate) = report.acceptance_rate {
            println!("Acceptance rate: {:.2}", rate);
        }
        return;
    };

    println!("Returned {} of {} requested", summary.count, report.requested);
    if let Some(rate) = report.acceptance_rate {
        println!("Acceptance rate: {:.2}", rate);
    }

    println!();
    println!("{:<12} {:>14} {:>14}", "", "Sampled", "Theoretical");
    println!("{:-<42}", "");
    println!(
        "{:<12} {:>14.4} {:>14}",
        "Mean",
        summary.mean,
        format_optional(report.theoretical_mean)
    );
    println!(
        "{:<12} {:>14.4} {:>14}",
        "Variance",
        summary.variance,
        format_optional(report.theoretical_variance)
    );
    println!("{:<12} {:>14.4}", "Min", summary.min);
    println!("{:<12} {:>14.4}", "Max", summary.max);

    let lines = histogram_lines(report.samples, bins);
    if !lines.is_empty() {
        println!();
        println!("Histogram ({} bins, density):", bins);
        for line in lines {
            println!("{}", line);
        }
    }
}

fn print_json(report: &DistributionReport<'_>) -> Result<()> {
    let summary = SampleSummary::from_samples(report.samples);
    let value = serde_json::json!({
        "distribution": report.title,
        "requested": report.requested,
        "returned": report.samples.len(),
        "acceptance_rate": report.acceptance_rate,
        "first_five": report.samples.iter().take(5).collect::<Vec<_>>(),
        "summary": summary,
        "theoretical": {
            "mean": report.theoretical_mean,
            "variance": report.theoretical_variance,
        },
    });
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn format_optional(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.4}", v),
        None => "n/a".to_string(),
    }
}

/// Density-normalised text histogram, one line per bin.
fn histogram_lines(samples: &[f64], bins: usize) -> Vec<String> {
    if samples.is_empty() || bins == 0 {
        return Vec::new();
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &x in samples {
        min = min.min(x);
        max = max.max(x);
    }
    if !(max > min) {
        return vec![format!("all {} samples equal {:.4}", samples.len(), min)];
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for &x in samples {
        // The maximum lands in the final bin.
        let idx = (((x - min) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    let n = samples.len() as f64;
    let densities: Vec<f64> = counts.iter().map(|&c| c as f64 / (n * width)).collect();
    let peak = densities.iter().cloned().fold(0.0f64, f64::max);

    densities
        .iter()
        .enumerate()
        .map(|(i, &d)| {
            let edge = min + i as f64 * width;
            let bar_len = if peak > 0.0 {
                (d / peak * BAR_WIDTH as f64).round() as usize
            } else {
                0
            };
            format!("{:>10.4} | {:<width$} {:.4}", edge, "#".repeat(bar_len), d, width = BAR_WIDTH)
        })
        .collect()
}

/// Writes one sample per row under a `value` header.
pub fn write_samples_csv(path: &str, samples: &[f64]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["value"])?;
    for &x in samples {
        writer.write_record([x.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the theoretical curve as `x,density` rows.
pub fn write_curve_csv(path: &str, curve: &TheoreticalCurve) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["x", "density"])?;
    for (x, density) in curve.x.iter().zip(&curve.density) {
        writer.write_record([x.to_string(), density.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}
