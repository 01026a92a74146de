//! # sampler_engine: Random Variate Generation Engine
//!
//! ## Engine Layer Role
//!
//! sampler_engine sits between the core types and the service layer,
//! providing:
//! - A seeded, reproducible uniform source (`rng`)
//! - The three sampling algorithms (`generate`): inverse-transform
//!   triangular and Pareto, acceptance-rejection Gamma
//! - Summary statistics over generated sample collections (`stats`)
//!
//! ## Determinism Contract
//!
//! A single [`rng::SamplerRng`] is passed `&mut` into every generation
//! call. Fixing the seed and issuing calls in the same order reproduces
//! identical output sequences; the generators validate their parameters
//! *before* the first draw, so a failed call consumes no entropy and does
//! not perturb subsequent output.
//!
//! All generation is single-threaded and synchronous: each call is bounded
//! by its input count and runs to completion with no suspension points.
//!
//! ## Usage Example
//!
//! ```rust
//! use sampler_core::types::TriangularParams;
//! use sampler_engine::generate::generate_triangular;
//! use sampler_engine::rng::SamplerRng;
//!
//! let mut rng = SamplerRng::from_seed(42);
//! let params = TriangularParams::new(1.0, 7.0, 2.0);
//! let samples = generate_triangular(&mut rng, 1_000, &params).unwrap();
//!
//! assert_eq!(samples.len(), 1_000);
//! assert!(samples.iter().all(|&x| (1.0..=7.0).contains(&x)));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod generate;
pub mod rng;
pub mod stats;
