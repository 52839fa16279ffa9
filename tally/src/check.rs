//! Verification procedures.
//!
//! Every procedure is one linear pass: generate the workload, apply it to the
//! instrument in order, call the readback closure exactly once, compare, and return
//! an [`Outcome`]. The expected value is always derived from the workload (or, for
//! histograms, from the distribution parameters), never from the instrument.
//!
//! The `verify_*` functions take an explicit workload; [`counter`], [`gauge`] and
//! [`histogram`] validate the config, draw a workload from a seeded generator and
//! delegate to them.

use rand::{SeedableRng, rngs::StdRng};

use crate::{
    config::HarnessConfig,
    error::Result,
    instrument::{Counter, Gauge, Histogram},
    outcome::{CheckKind, Outcome, Quantity},
    quantile::Quantiles,
    sampler,
    tolerance::{exact, matches},
};

/// Adds every value to `counter` and checks the readback equals their sum exactly.
pub fn verify_counter<C, F>(workload: &[f64], counter: &C, read: F) -> Outcome
where
    C: Counter + ?Sized,
    F: FnOnce() -> f64,
{
    tracing::debug!(observations = workload.len(), "applying counter workload");
    let mut want = 0.0;
    for &value in workload {
        counter.add(value);
        want += value;
    }

    let mut outcome = Outcome::new(CheckKind::Counter, workload.len());
    let have = read();
    if !exact(want, have) {
        outcome.push(Quantity::Total, want, have);
    }
    outcome
}

/// Sets every value on `gauge` and checks the readback equals the last one exactly.
///
/// An empty workload never sets the gauge, so there is nothing to compare: the
/// readback is not called and the outcome is a success with zero observations.
pub fn verify_gauge<G, F>(workload: &[f64], gauge: &G, read: F) -> Outcome
where
    G: Gauge + ?Sized,
    F: FnOnce() -> f64,
{
    let mut outcome = Outcome::new(CheckKind::Gauge, workload.len());
    let Some(&want) = workload.last() else {
        tracing::warn!("empty gauge workload, nothing to verify");
        return outcome;
    };

    tracing::debug!(observations = workload.len(), "applying gauge workload");
    for &value in workload {
        gauge.set(value);
    }

    let have = read();
    if !exact(want, have) {
        outcome.push(Quantity::Value, want, have);
    }
    outcome
}

/// Observes every value and compares the reported quantiles against the analytic
/// quantiles of N(mean, stdev²) under a relative `tolerance`.
///
/// All four quantiles are compared; each one outside tolerance adds a failure.
pub fn verify_histogram<H, F, Q>(
    workload: &[f64],
    mean: f64,
    stdev: f64,
    histogram: &H,
    read: F,
    tolerance: f64,
) -> Outcome
where
    H: Histogram + ?Sized,
    F: FnOnce() -> Q,
    Q: Into<Quantiles>,
{
    tracing::debug!(
        observations = workload.len(),
        mean,
        stdev,
        tolerance,
        "applying histogram workload"
    );
    for &value in workload {
        histogram.observe(value);
    }

    let expected = Quantiles::normal(mean, stdev);
    let reported: Quantiles = read().into();

    let mut outcome = Outcome::new(CheckKind::Histogram, workload.len());
    for ((quantity, want), (_, have)) in expected.iter().zip(reported.iter()) {
        if !matches(want, have, tolerance) {
            outcome.push(quantity, want, have);
        }
    }
    outcome
}

/// Counter check on up to `population - 1` distinct integers from `0..population`.
/// The workload may be empty, in which case the expected total is zero.
pub fn counter<C, F>(seed: u64, config: &HarnessConfig, counter: &C, read: F) -> Result<Outcome>
where
    C: Counter + ?Sized,
    F: FnOnce() -> f64,
{
    config.validate()?;
    let mut rng = StdRng::seed_from_u64(seed);
    let workload = sampler::uniform_permutation(&mut rng, config.population, 0);
    Ok(verify_counter(&workload, counter, read).with_seed(seed))
}

/// Gauge check on between 1 and `population - 1` distinct integers.
pub fn gauge<G, F>(seed: u64, config: &HarnessConfig, gauge: &G, read: F) -> Result<Outcome>
where
    G: Gauge + ?Sized,
    F: FnOnce() -> f64,
{
    config.validate()?;
    let mut rng = StdRng::seed_from_u64(seed);
    let workload = sampler::uniform_permutation(&mut rng, config.population, 1);
    Ok(verify_gauge(&workload, gauge, read).with_seed(seed))
}

/// Histogram check on `config.samples` draws from N(config.mean, config.stdev²).
pub fn histogram<H, F, Q>(
    seed: u64,
    config: &HarnessConfig,
    histogram: &H,
    read: F,
    tolerance: f64,
) -> Result<Outcome>
where
    H: Histogram + ?Sized,
    F: FnOnce() -> Q,
    Q: Into<Quantiles>,
{
    config.validate()?;
    let mut rng = StdRng::seed_from_u64(seed);
    let workload = sampler::normal_workload(&mut rng, config.mean, config.stdev, config.samples);
    let outcome = verify_histogram(
        &workload,
        config.mean,
        config.stdev,
        histogram,
        read,
        tolerance,
    );
    Ok(outcome.with_seed(seed))
}
