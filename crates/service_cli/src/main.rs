//! Variate CLI - Random Variate Generation and Validation
//!
//! Operational entry point for the sampling engine.
//!
//! # Commands
//!
//! - `variate triangular` - Inverse-transform samples from a triangular distribution
//! - `variate pareto` - Inverse-transform samples from a Pareto distribution
//! - `variate gamma` - Acceptance-rejection samples from the fixed Gamma(2, 1.5) target
//! - `variate demo` - All three generators from one shared seeded stream
//!
//! # Architecture
//!
//! As the service layer of the workspace, this crate orchestrates the core
//! and engine layers behind a unified command-line interface; everything
//! here is presentation: sample previews, empirical-vs-theoretical
//! summaries, histograms, CSV/JSON export.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sampler_core::types::{ParetoParams, TriangularParams};
use sampler_engine::generate::DEFAULT_GAMMA_PROPOSALS;

mod commands;
mod error;
mod report;

pub use error::{CliError, Result};

use commands::RunOptions;

/// Random variate generation and validation CLI
#[derive(Parser)]
#[command(name = "variate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample a triangular distribution via its piecewise inverse CDF
    Triangular {
        /// Number of samples to generate
        #[arg(short = 'n', long, default_value_t = 10_000)]
        samples: usize,

        /// Lower bound a
        #[arg(long, default_value_t = 1.0)]
        lower: f64,

        /// Upper bound b
        #[arg(long, default_value_t = 7.0)]
        upper: f64,

        /// Mode c (a < c < b)
        #[arg(long, default_value_t = 2.0)]
        mode: f64,

        #[command(flatten)]
        options: RunOptions,
    },

    /// Sample a Pareto distribution via its closed-form inverse CDF
    Pareto {
        /// Number of samples to generate
        #[arg(short = 'n', long, default_value_t = 10_000)]
        samples: usize,

        /// Scale parameter xm (minimum possible value)
        #[arg(long, default_value_t = 3.0)]
        scale: f64,

        /// Shape parameter alpha (tail index, any positive real)
        #[arg(long, default_value_t = 2.0)]
        shape: f64,

        #[command(flatten)]
        options: RunOptions,
    },

    /// Sample the fixed Gamma(2, 1.5) target by acceptance-rejection
    Gamma {
        /// Number of exponential proposals (accepted output is smaller)
        #[arg(short = 'n', long, default_value_t = DEFAULT_GAMMA_PROPOSALS)]
        proposals: usize,

        #[command(flatten)]
        options: RunOptions,
    },

    /// Run all three generators from one shared seeded stream
    Demo {
        /// Number of samples (and Gamma proposals) per distribution
        #[arg(short = 'n', long, default_value_t = 10_000)]
        samples: usize,

        /// Seed for the shared uniform stream
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Triangular {
            samples,
            lower,
            upper,
            mode,
            options,
        } => {
            commands::triangular::run(samples, &TriangularParams::new(lower, upper, mode), &options)
        }
        Commands::Pareto {
            samples,
            scale,
            shape,
            options,
        } => commands::pareto::run(samples, &ParetoParams::new(scale, shape), &options),
        Commands::Gamma { proposals, options } => commands::gamma::run(proposals, &options),
        Commands::Demo { samples, seed } => commands::demo::run(samples, seed),
    }
}
