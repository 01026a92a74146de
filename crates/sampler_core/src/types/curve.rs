//! Theoretical density curves.
//!
//! A curve is a pair of equal-length grids: x-coordinates and the
//! closed-form density evaluated at each. Curves are consumed only by the
//! presentation layer (overlay output, CSV export); nothing in the sampling
//! path depends on them.

use serde::Serialize;

/// A closed-form PDF evaluated on a grid.
///
/// Built by the curve constructors in [`crate::density`]; the two vectors
/// always have the same length.
///
/// # Examples
///
/// ```rust
/// use sampler_core::density::triangular_curve;
/// use sampler_core::types::TriangularParams;
///
/// let curve = triangular_curve(&TriangularParams::new(1.0, 7.0, 2.0), 50).unwrap();
/// assert_eq!(curve.x.len(), curve.density.len());
/// assert_eq!(curve.len(), 50);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TheoreticalCurve {
    /// Grid of x-coordinates, equally spaced and ordered ascending.
    pub x: Vec<f64>,
    /// Density value at each grid point.
    pub density: Vec<f64>,
}

impl TheoreticalCurve {
    /// Number of grid points.
    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// `true` when the curve holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}
