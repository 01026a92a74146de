//! Distribution parameter sets.
//!
//! Parameters are plain value types with public fields, validated explicitly
//! via `validate()` before any sampling takes place. Construction itself
//! never fails; the generators run validation as their first step so that
//! failures are deterministic and draw no entropy from the uniform stream.

use crate::types::error::SamplingError;

/// Parameters of a triangular distribution on `[lower, upper]` with the
/// given mode.
///
/// # Invariant
///
/// `lower < mode < upper`, all finite. Checked by [`validate`](Self::validate).
///
/// # Examples
///
/// ```rust
/// use sampler_core::types::TriangularParams;
///
/// let params = TriangularParams::new(1.0, 7.0, 2.0);
/// assert!(params.validate().is_ok());
/// assert!(TriangularParams::new(5.0, 1.0, 3.0).validate().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriangularParams {
    /// Lower bound of the support (a).
    pub lower: f64,
    /// Upper bound of the support (b).
    pub upper: f64,
    /// Mode of the distribution (c).
    pub mode: f64,
}

impl TriangularParams {
    /// Creates new triangular parameters.
    ///
    /// # Arguments
    ///
    /// * `lower` - Lower bound of the support
    /// * `upper` - Upper bound of the support
    /// * `mode` - Mode, strictly between the bounds
    #[inline]
    pub fn new(lower: f64, upper: f64, mode: f64) -> Self {
        Self { lower, upper, mode }
    }

    /// Validates the parameter contract.
    ///
    /// # Returns
    ///
    /// `Ok(())` when all parameters are finite and `lower < mode < upper`,
    /// otherwise an [`SamplingError::InvalidParameters`] naming the violated
    /// constraint.
    pub fn validate(&self) -> Result<(), SamplingError> {
        if !self.lower.is_finite() || !self.upper.is_finite() || !self.mode.is_finite() {
            return Err(SamplingError::invalid_parameters(format!(
                "a, b, and c must be finite numbers: a = {}, b = {}, c = {}",
                self.lower, self.upper, self.mode
            )));
        }
        if !(self.lower < self.mode && self.mode < self.upper) {
            return Err(SamplingError::invalid_parameters(format!(
                "a < c < b must be satisfied: a = {}, c = {}, b = {}",
                self.lower, self.mode, self.upper
            )));
        }
        Ok(())
    }

    /// Theoretical mean, `(a + b + c) / 3`.
    #[inline]
    pub fn mean(&self) -> f64 {
        (self.lower + self.upper + self.mode) / 3.0
    }

    /// Theoretical variance, `(a² + b² + c² − ab − ac − bc) / 18`.
    #[inline]
    pub fn variance(&self) -> f64 {
        let (a, b, c) = (self.lower, self.upper, self.mode);
        (a * a + b * b + c * c - a * b - a * c - b * c) / 18.0
    }

    /// Value of the CDF at the mode, `F(c) = (c − a) / (b − a)`.
    ///
    /// This is the split point of the piecewise inverse CDF used by the
    /// triangular generator.
    #[inline]
    pub fn cdf_at_mode(&self) -> f64 {
        (self.mode - self.lower) / (self.upper - self.lower)
    }
}

impl Default for TriangularParams {
    /// The demonstration parameters: `a = 1, b = 7, c = 2`.
    fn default() -> Self {
        Self {
            lower: 1.0,
            upper: 7.0,
            mode: 2.0,
        }
    }
}

/// Parameters of a Pareto distribution.
///
/// # Invariant
///
/// `scale > 0` and `shape > 0`, both finite. The shape is any positive
/// real; the inverse CDF `xm / (1 − U)^(1/α)` places no integrality
/// requirement on α.
///
/// # Heavy Tail
///
/// Samples are unbounded above: as `U → 1` the transform diverges. The
/// uniform source's half-open interval `[0, 1)` keeps every sample finite,
/// but arbitrarily large values are an intrinsic property of the
/// distribution, not an error. The mean only exists for `shape > 1` and the
/// variance for `shape > 2`, hence the `Option` returns below.
///
/// # Examples
///
/// ```rust
/// use sampler_core::types::ParetoParams;
///
/// let params = ParetoParams::new(3.0, 2.0);
/// assert!(params.validate().is_ok());
/// assert_eq!(params.mean(), Some(6.0));
/// assert_eq!(params.variance(), None); // infinite for shape <= 2
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParetoParams {
    /// Scale parameter (xm), the minimum possible value.
    pub scale: f64,
    /// Shape parameter (α), the tail index.
    pub shape: f64,
}

impl ParetoParams {
    /// Creates new Pareto parameters.
    ///
    /// # Arguments
    ///
    /// * `scale` - Scale parameter xm, the minimum possible value
    /// * `shape` - Shape parameter α, the tail index
    #[inline]
    pub fn new(scale: f64, shape: f64) -> Self {
        Self { scale, shape }
    }

    /// Validates the parameter contract.
    ///
    /// # Returns
    ///
    /// `Ok(())` when both parameters are finite and strictly positive,
    /// otherwise an [`SamplingError::InvalidParameters`] naming the violated
    /// constraint.
    pub fn validate(&self) -> Result<(), SamplingError> {
        if !self.scale.is_finite() || !self.shape.is_finite() {
            return Err(SamplingError::invalid_parameters(format!(
                "xm and alpha must be finite numbers: xm = {}, alpha = {}",
                self.scale, self.shape
            )));
        }
        if self.scale <= 0.0 {
            return Err(SamplingError::invalid_parameters(format!(
                "xm must be greater than 0: xm = {}",
                self.scale
            )));
        }
        if self.shape <= 0.0 {
            return Err(SamplingError::invalid_parameters(format!(
                "alpha must be greater than 0: alpha = {}",
                self.shape
            )));
        }
        Ok(())
    }

    /// Theoretical mean, `α·xm / (α − 1)`.
    ///
    /// `None` for `shape <= 1`, where the mean diverges.
    #[inline]
    pub fn mean(&self) -> Option<f64> {
        if self.shape > 1.0 {
            Some(self.shape * self.scale / (self.shape - 1.0))
        } else {
            None
        }
    }

    /// Theoretical variance, `xm²·α / ((α − 1)²·(α − 2))`.
    ///
    /// `None` for `shape <= 2`, where the variance diverges.
    #[inline]
    pub fn variance(&self) -> Option<f64> {
        if self.shape > 2.0 {
            let excess = self.shape - 1.0;
            Some(self.scale * self.scale * self.shape / (excess * excess * (self.shape - 2.0)))
        } else {
            None
        }
    }
}

impl Default for ParetoParams {
    /// The demonstration parameters: `xm = 3, α = 2`.
    fn default() -> Self {
        Self {
            scale: 3.0,
            shape: 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_triangular_valid_params() {
        assert!(TriangularParams::new(1.0, 7.0, 2.0).validate().is_ok());
        assert!(TriangularParams::new(-5.0, 5.0, 0.0).validate().is_ok());
    }

    #[test]
    fn test_triangular_rejects_bad_ordering() {
        // a > b
        let err = TriangularParams::new(5.0, 1.0, 3.0).validate().unwrap_err();
        assert!(err.to_string().contains("a < c < b"));

        // mode outside the bounds
        assert!(TriangularParams::new(1.0, 7.0, 0.5).validate().is_err());
        assert!(TriangularParams::new(1.0, 7.0, 7.5).validate().is_err());

        // mode on a bound (strict inequality required)
        assert!(TriangularParams::new(1.0, 7.0, 1.0).validate().is_err());
        assert!(TriangularParams::new(1.0, 7.0, 7.0).validate().is_err());
    }

    #[test]
    fn test_triangular_rejects_non_finite() {
        assert!(TriangularParams::new(f64::NAN, 7.0, 2.0).validate().is_err());
        assert!(TriangularParams::new(1.0, f64::INFINITY, 2.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_triangular_moments() {
        let params = TriangularParams::new(1.0, 7.0, 2.0);
        assert_relative_eq!(params.mean(), 10.0 / 3.0);
        assert_relative_eq!(params.variance(), 31.0 / 18.0);
        assert_relative_eq!(params.cdf_at_mode(), 1.0 / 6.0);
    }

    #[test]
    fn test_pareto_valid_params() {
        assert!(ParetoParams::new(3.0, 2.0).validate().is_ok());
        // Non-integer shape is legal: the inverse CDF is defined for any
        // positive real tail index.
        assert!(ParetoParams::new(0.5, 2.5).validate().is_ok());
    }

    #[test]
    fn test_pareto_rejects_non_positive() {
        assert!(ParetoParams::new(0.0, 2.0).validate().is_err());
        assert!(ParetoParams::new(-3.0, 2.0).validate().is_err());
        let err = ParetoParams::new(3.0, 0.0).validate().unwrap_err();
        assert!(err.to_string().contains("alpha"));
    }

    #[test]
    fn test_pareto_moments() {
        let params = ParetoParams::new(3.0, 2.0);
        assert_eq!(params.mean(), Some(6.0));
        assert_eq!(params.variance(), None);

        let finite_var = ParetoParams::new(2.0, 3.0);
        assert_eq!(finite_var.mean(), Some(3.0));
        assert_relative_eq!(finite_var.variance().unwrap(), 3.0);

        let heavy = ParetoParams::new(3.0, 1.0);
        assert_eq!(heavy.mean(), None);
    }

    #[test]
    fn test_default_params_match_demo_values() {
        let tri = TriangularParams::default();
        assert_eq!((tri.lower, tri.upper, tri.mode), (1.0, 7.0, 2.0));
        let par = ParetoParams::default();
        assert_eq!((par.scale, par.shape), (3.0, 2.0));
    }
}
