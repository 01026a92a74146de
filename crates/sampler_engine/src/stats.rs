//! Summary statistics over generated sample collections.
//!
//! The acceptance-rejection Gamma sampler can legitimately return an empty
//! collection, and the mean of nothing is undefined, so the summary
//! constructor returns `Option` and the empty case must be handled by the
//! caller rather than surfacing as `NaN`.

use serde::Serialize;

/// Empirical summary of a sample collection.
///
/// Variance is the population variance (denominator `n`), matching the
/// convention of the theoretical formulas it is compared against.
///
/// # Examples
///
/// ```rust
/// use sampler_engine::stats::SampleSummary;
///
/// let summary = SampleSummary::from_samples(&[1.0, 2.0, 3.0]).unwrap();
/// assert_eq!(summary.count, 3);
/// assert!((summary.mean - 2.0).abs() < 1e-12);
/// assert!((summary.variance - 2.0 / 3.0).abs() < 1e-12);
///
/// assert!(SampleSummary::from_samples(&[]).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SampleSummary {
    /// Number of samples.
    pub count: usize,
    /// Sample mean.
    pub mean: f64,
    /// Population variance (denominator `n`).
    pub variance: f64,
    /// Smallest sample.
    pub min: f64,
    /// Largest sample.
    pub max: f64,
}

impl SampleSummary {
    /// Computes the summary of a sample collection.
    ///
    /// # Returns
    ///
    /// `None` for an empty slice; statistics on nothing are undefined and
    /// must not silently propagate as `NaN`.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let count = samples.len();
        let mean = samples.iter().sum::<f64>() / count as f64;
        let variance = samples
            .iter()
            .map(|&x| {
                let d = x - mean;
                d * d
            })
            .sum::<f64>()
            / count as f64;

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &x in samples {
            min = min.min(x);
            max = max.max(x);
        }

        Some(Self {
            count,
            mean,
            variance,
            min,
            max,
        })
    }

    /// Standard deviation, `sqrt(variance)`.
    #[inline]
    pub fn std_dev(&self) -> f64 {
        self.variance.sqrt()
    }
}
