//! # sampler_core: Distribution Foundation for Random Variate Generation
//!
//! ## Core Layer Role
//!
//! sampler_core is the bottom layer of the workspace, providing:
//! - Distribution parameter types with validation (`types::params`)
//! - Closed-form probability density evaluators (`density`)
//! - Theoretical curve grids for overlay output (`types::curve`)
//! - Error types: `SamplingError` (`types::error`)
//! - Shared parameter-contract checks (`validation`)
//!
//! ## Zero Dependency Principle
//!
//! The core layer has no dependency on the engine or service crates and a
//! minimal external footprint:
//! - thiserror: Structured error types
//! - serde: Serialisation of exported curves and summaries
//!
//! Notably, this crate draws no random numbers: everything here is a pure
//! function of its inputs, so parameter failures are deterministic and
//! consume no entropy from the uniform stream.
//!
//! ## Usage Examples
//!
//! ```rust
//! use sampler_core::density::{gamma_pdf, triangular_curve};
//! use sampler_core::types::TriangularParams;
//!
//! let params = TriangularParams::new(1.0, 7.0, 2.0);
//! params.validate().unwrap();
//! assert!((params.mean() - 10.0 / 3.0).abs() < 1e-12);
//!
//! let curve = triangular_curve(&params, 100).unwrap();
//! assert_eq!(curve.len(), 100);
//!
//! // The Gamma(2, 1.5) density vanishes at the origin.
//! assert_eq!(gamma_pdf(0.0), 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod density;
pub mod types;
pub mod validation;
