//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. The options shared by
//! the three single-distribution commands live here.

use clap::Args;

pub mod demo;
pub mod gamma;
pub mod pareto;
pub mod triangular;

/// Options shared by the triangular, pareto, and gamma commands.
#[derive(Args, Debug)]
pub struct RunOptions {
    /// Seed for the uniform stream
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Output format (table, json)
    #[arg(long, default_value = "table")]
    pub format: String,

    /// Write generated samples to a CSV file
    #[arg(long)]
    pub samples_out: Option<String>,

    /// Write the theoretical density curve to a CSV file
    #[arg(long)]
    pub curve_out: Option<String>,

    /// Number of histogram bins in table output
    #[arg(long, default_value_t = 40)]
    pub bins: usize,

    /// Number of theoretical-curve grid points
    #[arg(long, default_value_t = 1_000)]
    pub curve_points: usize,
}
