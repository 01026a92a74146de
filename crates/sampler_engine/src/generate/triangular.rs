//! Triangular generator: inverse-transform sampling over a piecewise CDF.

use sampler_core::types::{SamplingError, TriangularParams};
use sampler_core::validation;

use crate::rng::SamplerRng;

/// Generates `n_samples` values from the triangular distribution on
/// `[a, b]` with mode `c`.
///
/// # Algorithm
///
/// Draws `n_samples` uniforms in one batch, then applies the piecewise
/// inverse CDF with split point `F(c) = (c − a)/(b − a)`:
///
/// ```text
/// U < F(c):  x = a + sqrt(U · (b − a) · (c − a))
/// U ≥ F(c):  x = b − sqrt((1 − U) · (b − a) · (b − c))
/// ```
///
/// The transform is total over valid parameters and `U ∈ [0, 1)`, so the
/// only failure mode is parameter validation.
///
/// # Returns
///
/// Exactly `n_samples` values, each in `[a, b]`.
///
/// # Errors
///
/// [`SamplingError::InvalidParameters`] when `a < c < b` fails, a
/// parameter is not finite, or `n_samples` is zero. Validation runs before
/// the first draw, so a failed call consumes no entropy.
///
/// # Examples
///
/// ```rust
/// use sampler_core::types::TriangularParams;
/// use sampler_engine::generate::generate_triangular;
/// use sampler_engine::rng::SamplerRng;
///
/// let mut rng = SamplerRng::from_seed(42);
/// let params = TriangularParams::new(1.0, 7.0, 2.0);
/// let samples = generate_triangular(&mut rng, 100, &params).unwrap();
///
/// assert_eq!(samples.len(), 100);
/// assert!(samples.iter().all(|&x| (1.0..=7.0).contains(&x)));
/// ```
pub fn generate_triangular(
    rng: &mut SamplerRng,
    n_samples: usize,
    params: &TriangularParams,
) -> Result<Vec<f64>, SamplingError> {
    params.validate()?;
    validation::sample_count(n_samples)?;

    let mut uniforms = vec![0.0; n_samples];
    rng.fill_uniform(&mut uniforms);

    let cdf_at_mode = params.cdf_at_mode();
    Ok(uniforms
        .iter()
        .map(|&u| invert_cdf(u, params, cdf_at_mode))
        .collect())
}

/// Maps a single uniform draw through the piecewise inverse CDF.
#[inline]
fn invert_cdf(u: f64, params: &TriangularParams, cdf_at_mode: f64) -> f64 {
    let TriangularParams { lower: a, upper: b, mode: c } = *params;
    if u < cdf_at_mode {
        a + (u * (b - a) * (c - a)).sqrt()
    } else {
        b - ((1.0 - u) * (b - a) * (b - c)).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_exact_count_within_bounds() {
        let mut rng = SamplerRng::from_seed(42);
        let params = TriangularParams::new(1.0, 7.0, 2.0);
        let samples = generate_triangular(&mut rng, 10_000, &params).unwrap();

        assert_eq!(samples.len(), 10_000);
        for &x in &samples {
            assert!((1.0..=7.0).contains(&x), "sample {} outside [1, 7]", x);
        }
    }

    #[test]
    fn test_inverse_cdf_branch_values() {
        let params = TriangularParams::new(1.0, 7.0, 2.0);
        let f_c = params.cdf_at_mode();

        // U = 0 maps to the lower bound, U -> 1 approaches the upper bound.
        assert_eq!(invert_cdf(0.0, &params, f_c), 1.0);
        assert!(invert_cdf(0.999_999, &params, f_c) < 7.0);

        // At the split point the two branches meet at the mode.
        let at_split = invert_cdf(f_c, &params, f_c);
        assert!((at_split - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_invalid_parameters() {
        let mut rng = SamplerRng::from_seed(42);

        // a > b
        let err = generate_triangular(&mut rng, 100, &TriangularParams::new(5.0, 1.0, 3.0))
            .unwrap_err();
        assert!(err.to_string().contains("a < c < b"));

        // NaN stands in for the source's "wrong type" case: not a usable real.
        assert!(
            generate_triangular(&mut rng, 100, &TriangularParams::new(1.0, 7.0, f64::NAN))
                .is_err()
        );

        // zero count
        assert!(generate_triangular(&mut rng, 0, &TriangularParams::default()).is_err());
    }

    #[test]
    fn test_failed_call_consumes_no_entropy() {
        let mut rng = SamplerRng::from_seed(99);
        let bad = TriangularParams::new(5.0, 1.0, 3.0);
        assert!(generate_triangular(&mut rng, 100, &bad).is_err());

        // The stream is exactly where a fresh generator starts.
        let mut fresh = SamplerRng::from_seed(99);
        assert_eq!(rng.gen_uniform(), fresh.gen_uniform());
    }
}
