//! Statistical convergence tests for the three generators.
//!
//! These tests verify that large seeded runs reproduce the closed-form
//! moments of each target distribution within explicit tolerances, and that
//! our samplers agree with the ecosystem's reference implementations in
//! `rand_distr`.
//!
//! All runs are seeded: the assertions are deterministic, and the
//! tolerances are many standard errors wide at n = 100_000.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::Distribution;

use sampler_core::density::{EXPECTED_ACCEPTANCE_RATE, GAMMA_MEAN, GAMMA_VARIANCE};
use sampler_core::types::{ParetoParams, TriangularParams};
use sampler_engine::generate::{generate_gamma, generate_pareto, generate_triangular};
use sampler_engine::rng::SamplerRng;
use sampler_engine::stats::SampleSummary;

const N: usize = 100_000;
const SEED: u64 = 42;

#[test]
fn triangular_moments_converge() {
    let mut rng = SamplerRng::from_seed(SEED);
    let params = TriangularParams::new(1.0, 7.0, 2.0);
    let samples = generate_triangular(&mut rng, N, &params).unwrap();
    let summary = SampleSummary::from_samples(&samples).unwrap();

    assert!(
        (summary.mean - params.mean()).abs() < 0.05,
        "Triangular mean: sampled = {:.4}, theoretical = {:.4}",
        summary.mean,
        params.mean()
    );
    assert!(
        (summary.variance - params.variance()).abs() < 0.1,
        "Triangular variance: sampled = {:.4}, theoretical = {:.4}",
        summary.variance,
        params.variance()
    );
}

#[test]
fn pareto_mean_converges_for_finite_variance_shape() {
    // Shape 3 keeps the variance finite, so the sample mean obeys the CLT;
    // the demo's shape 2 has an infinite-variance tail and is covered by
    // the support checks instead.
    let mut rng = SamplerRng::from_seed(SEED);
    let params = ParetoParams::new(2.0, 3.0);
    let samples = generate_pareto(&mut rng, N, &params).unwrap();
    let summary = SampleSummary::from_samples(&samples).unwrap();

    let theoretical = params.mean().unwrap();
    assert!(
        (summary.mean - theoretical).abs() < 0.1,
        "Pareto mean: sampled = {:.4}, theoretical = {:.4}",
        summary.mean,
        theoretical
    );
    assert!(summary.min >= params.scale);
}

#[test]
fn gamma_moments_and_acceptance_rate_converge() {
    let mut rng = SamplerRng::from_seed(SEED);
    let samples = generate_gamma(&mut rng, N).unwrap();
    let summary = SampleSummary::from_samples(&samples).unwrap();

    assert!(
        (summary.mean - GAMMA_MEAN).abs() < 0.05,
        "Gamma mean: sampled = {:.4}, theoretical = {:.4}",
        summary.mean,
        GAMMA_MEAN
    );
    assert!(
        (summary.variance - GAMMA_VARIANCE).abs() < 0.1,
        "Gamma variance: sampled = {:.4}, theoretical = {:.4}",
        summary.variance,
        GAMMA_VARIANCE
    );

    let acceptance_rate = samples.len() as f64 / N as f64;
    assert!(
        (acceptance_rate - EXPECTED_ACCEPTANCE_RATE).abs() < 0.02,
        "Acceptance rate: observed = {:.4}, expected = {:.4}",
        acceptance_rate,
        EXPECTED_ACCEPTANCE_RATE
    );
    assert!(summary.min >= 0.0);
}

#[test]
fn triangular_agrees_with_rand_distr_reference() {
    let mut rng = SamplerRng::from_seed(SEED);
    let params = TriangularParams::new(1.0, 7.0, 2.0);
    let ours = generate_triangular(&mut rng, N, &params).unwrap();
    let our_mean = SampleSummary::from_samples(&ours).unwrap().mean;

    let reference = rand_distr::Triangular::new(1.0, 7.0, 2.0).unwrap();
    let mut ref_rng = StdRng::seed_from_u64(SEED + 1);
    let ref_mean =
        (0..N).map(|_| reference.sample(&mut ref_rng)).sum::<f64>() / N as f64;

    assert!(
        (our_mean - ref_mean).abs() < 0.05,
        "Triangular vs rand_distr: ours = {:.4}, reference = {:.4}",
        our_mean,
        ref_mean
    );
}

#[test]
fn pareto_agrees_with_rand_distr_reference() {
    let mut rng = SamplerRng::from_seed(SEED);
    let params = ParetoParams::new(2.0, 3.0);
    let ours = generate_pareto(&mut rng, N, &params).unwrap();
    let our_mean = SampleSummary::from_samples(&ours).unwrap().mean;

    let reference = rand_distr::Pareto::new(2.0, 3.0).unwrap();
    let mut ref_rng = StdRng::seed_from_u64(SEED + 1);
    let ref_mean =
        (0..N).map(|_| reference.sample(&mut ref_rng)).sum::<f64>() / N as f64;

    assert!(
        (our_mean - ref_mean).abs() < 0.1,
        "Pareto vs rand_distr: ours = {:.4}, reference = {:.4}",
        our_mean,
        ref_mean
    );
}

#[test]
fn gamma_agrees_with_rand_distr_reference() {
    let mut rng = SamplerRng::from_seed(SEED);
    let ours = generate_gamma(&mut rng, N).unwrap();
    let our_mean = SampleSummary::from_samples(&ours).unwrap().mean;

    // rand_distr parameterises Gamma by shape and scale; our fixed target
    // is shape k = 2 with rate 1.5, i.e. scale 1/1.5.
    let reference = rand_distr::Gamma::new(2.0, 1.0 / 1.5).unwrap();
    let mut ref_rng = StdRng::seed_from_u64(SEED + 1);
    let ref_mean =
        (0..N).map(|_| reference.sample(&mut ref_rng)).sum::<f64>() / N as f64;

    assert!(
        (our_mean - ref_mean).abs() < 0.05,
        "Gamma vs rand_distr: ours = {:.4}, reference = {:.4}",
        our_mean,
        ref_mean
    );
}
