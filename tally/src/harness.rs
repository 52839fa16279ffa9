use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    check,
    config::HarnessConfig,
    error::Result,
    instrument::{Counter, Gauge, Histogram},
    outcome::Outcome,
    quantile::Quantiles,
    report::Summary,
};

/// Runs checks against a shared configuration and keeps their outcomes.
///
/// Each check gets its own seed drawn from the harness generator and recorded on
/// its [`Outcome`], so a failing check can be replayed on its own with the free
/// functions in [`check`].
///
/// ```rust
/// use std::cell::Cell;
///
/// use tally::{Harness, HarnessConfig, instrument::Gauge};
///
/// struct CellGauge(Cell<f64>);
///
/// impl Gauge for CellGauge {
///     fn set(&self, value: f64) {
///         self.0.set(value);
///     }
/// }
///
/// let mut harness = Harness::new(HarnessConfig::builder().seed(1).build()).unwrap();
/// let gauge = CellGauge(Cell::new(0.0));
/// harness.check_gauge(&gauge, || gauge.0.get()).unwrap();
/// assert_eq!(harness.summary().passed, 1);
/// ```
pub struct Harness {
    config: HarnessConfig,
    rng: StdRng,
    history: Vec<Outcome>,
}

impl Default for Harness {
    fn default() -> Self {
        Self::seeded(HarnessConfig::default())
    }
}

impl Harness {
    pub fn new(config: HarnessConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::seeded(config))
    }

    fn seeded(config: HarnessConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        tracing::info!(seed, "seeding harness");
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
            history: Vec::new(),
        }
    }

    pub fn check_counter<C, F>(&mut self, counter: &C, read: F) -> Result<Outcome>
    where
        C: Counter + ?Sized,
        F: FnOnce() -> f64,
    {
        let seed = self.rng.r#gen();
        let outcome = check::counter(seed, &self.config, counter, read)?;
        self.record(outcome)
    }

    pub fn check_gauge<G, F>(&mut self, gauge: &G, read: F) -> Result<Outcome>
    where
        G: Gauge + ?Sized,
        F: FnOnce() -> f64,
    {
        let seed = self.rng.r#gen();
        let outcome = check::gauge(seed, &self.config, gauge, read)?;
        self.record(outcome)
    }

    pub fn check_histogram<H, F, Q>(
        &mut self,
        histogram: &H,
        read: F,
        tolerance: f64,
    ) -> Result<Outcome>
    where
        H: Histogram + ?Sized,
        F: FnOnce() -> Q,
        Q: Into<Quantiles>,
    {
        let seed = self.rng.r#gen();
        let outcome = check::histogram(seed, &self.config, histogram, read, tolerance)?;
        self.record(outcome)
    }

    /// Every outcome so far, in the order the checks ran.
    pub fn history(&self) -> &[Outcome] {
        &self.history
    }

    pub fn summary(&self) -> Summary {
        Summary::from(self.history.clone())
    }

    fn record(&mut self, outcome: Outcome) -> Result<Outcome> {
        if outcome.is_success() {
            tracing::info!(check = %outcome.check, seed = ?outcome.seed, "check passed");
        } else {
            tracing::warn!(check = %outcome.check, seed = ?outcome.seed, "check failed: {outcome}");
        }
        self.history.push(outcome.clone());
        outcome.into_result()
    }
}
