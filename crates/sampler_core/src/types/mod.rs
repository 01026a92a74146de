//! Core parameter, curve, and error types.
//!
//! This module provides:
//! - `params`: Immutable distribution parameter sets with validation
//! - `curve`: Theoretical density curves evaluated on a grid
//! - `error`: Structured error type for parameter-contract violations
//!
//! # Re-exports
//!
//! Commonly used types are re-exported at this module level:
//! - [`TriangularParams`], [`ParetoParams`] from `params`
//! - [`TheoreticalCurve`] from `curve`
//! - [`SamplingError`] from `error`

pub mod curve;
pub mod error;
pub mod params;

// Re-export commonly used types at module level
pub use curve::TheoreticalCurve;
pub use error::SamplingError;
pub use params::{ParetoParams, TriangularParams};
