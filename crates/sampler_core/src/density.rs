//! Closed-form probability density evaluators and theoretical curves.
//!
//! The pointwise evaluators serve two roles: the Gamma generator weighs
//! proposals with [`gamma_pdf`] and [`exponential_pdf`] inside its
//! acceptance-rejection loop, and the presentation layer overlays
//! theoretical curves on sampled histograms. All evaluators are total over
//! `f64` and return `0.0` outside the distribution's support.
//!
//! The Gamma target and its exponential proposal are fixed, not
//! user-configurable: shape k = 2 and rate λ = 1.5 for the target,
//! rate λ₂ = 0.75 for the proposal, with the analytically tightest
//! majorizing constant M = 4/e.

use crate::types::curve::TheoreticalCurve;
use crate::types::error::SamplingError;
use crate::types::params::{ParetoParams, TriangularParams};
use crate::validation;

/// Shape parameter k of the fixed Gamma target distribution.
pub const GAMMA_SHAPE: f64 = 2.0;

/// Rate parameter λ of the fixed Gamma target distribution.
pub const GAMMA_RATE: f64 = 1.5;

/// Rate parameter λ₂ of the exponential proposal distribution.
pub const PROPOSAL_RATE: f64 = 0.75;

/// Majorizing constant M = 4/e.
///
/// The tightest constant such that `M · exponential_pdf(x)` dominates
/// [`gamma_pdf`] everywhere, obtained by maximising the density ratio
/// `gamma_pdf(x) / exponential_pdf(x) = 3x·e^(−0.75x)` at `x = 4/3`.
pub const MAJORIZING_CONSTANT: f64 = 4.0 / std::f64::consts::E;

/// Expected acceptance rate of the Gamma sampler in the large-n limit,
/// `1/M = e/4 ≈ 0.68`.
pub const EXPECTED_ACCEPTANCE_RATE: f64 = std::f64::consts::E / 4.0;

/// Theoretical mean of the Gamma target, `k/λ = 4/3`.
pub const GAMMA_MEAN: f64 = GAMMA_SHAPE / GAMMA_RATE;

/// Theoretical variance of the Gamma target, `k/λ² = 8/9`.
pub const GAMMA_VARIANCE: f64 = GAMMA_SHAPE / (GAMMA_RATE * GAMMA_RATE);

/// Triangular density at `x`.
///
/// Piecewise linear on `[a, b]` with peak `2/(b−a)` at the mode; `0.0`
/// outside the support. The caller is expected to hold validated
/// parameters; for unvalidated ones the result is unspecified.
#[inline]
pub fn triangular_pdf(x: f64, params: &TriangularParams) -> f64 {
    let TriangularParams { lower: a, upper: b, mode: c } = *params;
    if x < a || x > b {
        return 0.0;
    }
    if x < c {
        2.0 * (x - a) / ((b - a) * (c - a))
    } else {
        2.0 * (b - x) / ((b - a) * (b - c))
    }
}

/// Pareto density at `x`, `α·xmᵅ / x^(α+1)` for `x ≥ xm`; `0.0` below the
/// scale.
#[inline]
pub fn pareto_pdf(x: f64, params: &ParetoParams) -> f64 {
    if x < params.scale {
        return 0.0;
    }
    params.shape * params.scale.powf(params.shape) / x.powf(params.shape + 1.0)
}

/// Gamma(k = 2, λ = 1.5) density at `x`: `λ²·x·e^(−λx) = 2.25·x·e^(−1.5x)`
/// for `x ≥ 0`; `0.0` for negative `x`.
///
/// For integer shape k = 2 the normalising `Γ(k)` is 1, which is why the
/// density reduces to the bare `λ²·x·e^(−λx)` product.
///
/// # Examples
///
/// ```rust
/// use sampler_core::density::gamma_pdf;
///
/// assert_eq!(gamma_pdf(0.0), 0.0);
/// assert_eq!(gamma_pdf(-1.0), 0.0);
/// assert!(gamma_pdf(1.0) > 0.0);
/// ```
#[inline]
pub fn gamma_pdf(x: f64) -> f64 {
    if x < 0.0 {
        return 0.0;
    }
    GAMMA_RATE * GAMMA_RATE * x * (-GAMMA_RATE * x).exp()
}

/// Exponential(λ₂ = 0.75) density at `x`: `0.75·e^(−0.75x)` for `x ≥ 0`;
/// `0.0` for negative `x`.
///
/// # Examples
///
/// ```rust
/// use sampler_core::density::exponential_pdf;
///
/// assert_eq!(exponential_pdf(0.0), 0.75);
/// assert_eq!(exponential_pdf(-0.5), 0.0);
/// ```
#[inline]
pub fn exponential_pdf(x: f64) -> f64 {
    if x < 0.0 {
        return 0.0;
    }
    PROPOSAL_RATE * (-PROPOSAL_RATE * x).exp()
}

/// Evaluates the triangular density on `n_points` equally spaced points
/// covering `[a, b]` inclusive.
///
/// # Errors
///
/// [`SamplingError::InvalidParameters`] when the parameters violate
/// `a < c < b` or `n_points` is zero.
pub fn triangular_curve(
    params: &TriangularParams,
    n_points: usize,
) -> Result<TheoreticalCurve, SamplingError> {
    params.validate()?;
    validation::curve_points(n_points)?;

    let x = linspace(params.lower, params.upper, n_points);
    let density = x.iter().map(|&v| triangular_pdf(v, params)).collect();
    Ok(TheoreticalCurve { x, density })
}

/// Evaluates the Pareto density on `n_points` equally spaced points
/// covering `[xm, 10·xm]` inclusive.
///
/// The upper limit of `10·xm` is a display convention: the support itself
/// is unbounded, but the bulk of the density sits near the scale.
///
/// # Errors
///
/// [`SamplingError::InvalidParameters`] when the parameters violate
/// `xm > 0, α > 0` or `n_points` is zero.
pub fn pareto_curve(
    params: &ParetoParams,
    n_points: usize,
) -> Result<TheoreticalCurve, SamplingError> {
    params.validate()?;
    validation::curve_points(n_points)?;

    let x = linspace(params.scale, 10.0 * params.scale, n_points);
    let density = x.iter().map(|&v| pareto_pdf(v, params)).collect();
    Ok(TheoreticalCurve { x, density })
}

/// Evaluates the fixed Gamma density on `n_points` equally spaced points
/// covering `[0, x_max]` inclusive.
///
/// Callers typically pass the maximum accepted sample as `x_max` so the
/// curve spans the sampled range.
///
/// # Errors
///
/// [`SamplingError::InvalidParameters`] when `x_max` is not a positive
/// finite number or `n_points` is zero.
pub fn gamma_curve(x_max: f64, n_points: usize) -> Result<TheoreticalCurve, SamplingError> {
    if !x_max.is_finite() || x_max <= 0.0 {
        return Err(SamplingError::invalid_parameters(format!(
            "x_max must be a positive finite number: x_max = {}",
            x_max
        )));
    }
    validation::curve_points(n_points)?;

    let x = linspace(0.0, x_max, n_points);
    let density = x.iter().map(|&v| gamma_pdf(v)).collect();
    Ok(TheoreticalCurve { x, density })
}

// Inclusive endpoints; a single point collapses to the start.
fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![start];
    }
    let step = (end - start) / (n - 1) as f64;
    (0..n).map(|i| start + step * i as f64).collect()
}
