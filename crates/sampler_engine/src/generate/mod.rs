//! Sampling algorithms.
//!
//! Two classical techniques cover the three target distributions:
//!
//! - **Inverse-transform sampling** ([`generate_triangular`],
//!   [`generate_pareto`]): apply the closed-form inverse CDF to uniform
//!   draws. Output length equals the requested count.
//! - **Acceptance-rejection sampling** ([`generate_gamma`]): draw from an
//!   exponential proposal and probabilistically accept against the scaled
//!   target density. Rejected proposals are discarded, not replaced, so the
//!   output length is a runtime value in `[0, n]`; callers must not assume
//!   length `n`.
//!
//! Every generator validates its parameter contract before the first draw;
//! a failed call returns [`SamplingError::InvalidParameters`]
//! (sampler_core) and leaves the uniform stream untouched.
//!
//! [`SamplingError::InvalidParameters`]: sampler_core::types::SamplingError

mod gamma;
mod pareto;
mod triangular;

pub use gamma::{generate_gamma, DEFAULT_GAMMA_PROPOSALS};
pub use pareto::generate_pareto;
pub use triangular::generate_triangular;
