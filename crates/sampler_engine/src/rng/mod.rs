//! Uniform random source.
//!
//! This module provides the single seedable uniform stream shared by all
//! generators. Design principles:
//!
//! - **Reproducibility**: the generator is seeded explicitly and passed by
//!   mutable reference into every sampling function; there is no hidden
//!   global stream.
//! - **Draw-order stability**: the internal cursor advances once per draw,
//!   so preserving call order preserves output. The generators batch-fill
//!   their uniforms through [`SamplerRng::fill_uniform`] and interleave
//!   acceptance draws through [`SamplerRng::gen_uniform`] in a fixed order.
//! - **Efficiency**: zero-allocation batch fills via `&mut [f64]` slices.
//!
//! If generation is ever parallelised, each worker must receive an
//! independently seeded `SamplerRng`; splitting one stream across threads
//! would break both determinism and statistical independence.

mod prng;

pub use prng::SamplerRng;
