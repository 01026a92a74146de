//! Gamma generator: acceptance-rejection with an exponential proposal.

use sampler_core::density::{exponential_pdf, gamma_pdf, MAJORIZING_CONSTANT, PROPOSAL_RATE};
use sampler_core::types::SamplingError;
use sampler_core::validation;

use crate::rng::SamplerRng;

/// Conventional proposal count when the caller does not specify one.
pub const DEFAULT_GAMMA_PROPOSALS: usize = 10_000;

/// Generates samples approximating Gamma(k = 2, λ = 1.5) by
/// acceptance-rejection over `n_proposals` Exponential(λ₂ = 0.75) draws.
///
/// # Algorithm
///
/// 1. Draw `n_proposals` uniforms in one batch and transform each through
///    the exponential inverse CDF, `y = −ln(1 − U) / λ₂`.
/// 2. For each proposal `y`, draw one further independent uniform `V`.
/// 3. Accept `y` iff `V ≤ gamma_pdf(y) / (M · exponential_pdf(y))` with
///    the fixed majorizing constant `M = 4/e`.
/// 4. Discard rejected proposals without replacement.
///
/// The draw order (full proposal batch first, then one acceptance draw
/// per proposal) is part of the reproducibility contract.
///
/// # Returns
///
/// The accepted values in proposal order: between `0` and `n_proposals`
/// samples, each `≥ 0` (exponential proposals are never negative). The
/// expected acceptance rate is `1/M = e/4 ≈ 0.68` in the large-n limit,
/// but for small counts *zero* acceptances are possible; callers computing
/// statistics must handle the empty case explicitly.
///
/// # Errors
///
/// [`SamplingError::InvalidParameters`] when `n_proposals` is zero.
///
/// # Examples
///
/// ```rust
/// use sampler_engine::generate::generate_gamma;
/// use sampler_engine::rng::SamplerRng;
///
/// let mut rng = SamplerRng::from_seed(42);
/// let samples = generate_gamma(&mut rng, 1_000).unwrap();
///
/// assert!(samples.len() <= 1_000);
/// assert!(samples.iter().all(|&x| x >= 0.0));
/// ```
pub fn generate_gamma(
    rng: &mut SamplerRng,
    n_proposals: usize,
) -> Result<Vec<f64>, SamplingError> {
    validation::sample_count(n_proposals)?;

    let mut uniforms = vec![0.0; n_proposals];
    rng.fill_uniform(&mut uniforms);

    let mut accepted = Vec::with_capacity(n_proposals);
    for u in uniforms {
        let proposal = -(1.0 - u).ln() / PROPOSAL_RATE;
        let threshold = gamma_pdf(proposal) / (MAJORIZING_CONSTANT * exponential_pdf(proposal));
        if rng.gen_uniform() <= threshold {
            accepted.push(proposal);
        }
    }
    Ok(accepted)
}
