//! Parameter-contract checks shared by the generators.
//!
//! Counts are `usize` throughout the workspace, so negative values are
//! unrepresentable; the remaining contract is strict positivity. Every
//! check here runs before any random draw so that failures are
//! deterministic and consume no entropy from the uniform stream.

use crate::types::error::SamplingError;

/// Validates a requested sample (or proposal) count.
///
/// # Returns
///
/// `Ok(())` for `n >= 1`, otherwise [`SamplingError::InvalidParameters`].
///
/// # Examples
///
/// ```rust
/// use sampler_core::validation;
///
/// assert!(validation::sample_count(10_000).is_ok());
/// assert!(validation::sample_count(0).is_err());
/// ```
pub fn sample_count(n: usize) -> Result<(), SamplingError> {
    if n == 0 {
        return Err(SamplingError::invalid_parameters(
            "n_samples must be greater than 0",
        ));
    }
    Ok(())
}

/// Validates a theoretical-curve grid size.
pub fn curve_points(n: usize) -> Result<(), SamplingError> {
    if n == 0 {
        return Err(SamplingError::invalid_parameters(
            "n_points must be greater than 0",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_count_rejects_zero() {
        let err = sample_count(0).unwrap_err();
        assert!(err.to_string().contains("n_samples"));
        assert!(sample_count(1).is_ok());
    }

    #[test]
    fn test_curve_points_rejects_zero() {
        assert!(curve_points(0).is_err());
        assert!(curve_points(1000).is_ok());
    }
}
