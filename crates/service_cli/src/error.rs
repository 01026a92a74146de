//! CLI error type.

use sampler_core::types::SamplingError;
use thiserror::Error;

/// Errors surfaced by the command-line interface.
#[derive(Error, Debug)]
pub enum CliError {
    /// Parameter contract violated by the requested generation.
    #[error("Sampling error: {0}")]
    Sampling(#[from] SamplingError),

    /// Unsupported or malformed command-line argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Failure writing an output file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure writing CSV output.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Failure serialising JSON output.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
