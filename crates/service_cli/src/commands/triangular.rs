//! Triangular command implementation.

use tracing::info;

use sampler_core::density::triangular_curve;
use sampler_core::types::TriangularParams;
use sampler_engine::generate::generate_triangular;
use sampler_engine::rng::SamplerRng;

use crate::commands::RunOptions;
use crate::report::{self, DistributionReport};
use crate::Result;

/// Run the triangular command
pub fn run(n_samples: usize, params: &TriangularParams, options: &RunOptions) -> Result<()> {
    info!(
        "Generating {} triangular samples on [{}, {}] with mode {} (seed {})",
        n_samples, params.lower, params.upper, params.mode, options.seed
    );

    let mut rng = SamplerRng::from_seed(options.seed);
    let samples = generate_triangular(&mut rng, n_samples, params)?;
    let curve = triangular_curve(params, options.curve_points)?;

    report::emit(
        &DistributionReport {
            title: "Triangular (inverse transform)",
            samples: &samples,
            requested: n_samples,
            theoretical_mean: Some(params.mean()),
            theoretical_variance: Some(params.variance()),
            acceptance_rate: None,
        },
        options,
    )?;
    report::export(options, &samples, Some(&curve))?;

    info!("Triangular generation complete");
    Ok(())
}
