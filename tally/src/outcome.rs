//! Result of one verification run.
//!
//! A run is successful exactly when it carries no [`Failure`]s. Every violated check
//! gets its own record, so a histogram whose p90 and p99 are both off reports both.

use std::fmt;

use crate::{
    Record,
    error::{Error, Result},
    macros::record,
};

/// Which verification procedure produced an outcome.
#[record]
#[derive(Copy, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CheckKind {
    Counter,
    Gauge,
    Histogram,
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CheckKind::Counter => "counter",
            CheckKind::Gauge => "gauge",
            CheckKind::Histogram => "histogram",
        })
    }
}

/// The value a single comparison is about.
#[record]
#[derive(Copy, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Quantity {
    /// Final counter total.
    Total,
    /// Final gauge value.
    Value,
    P50,
    P90,
    P95,
    P99,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Quantity::Total => "total",
            Quantity::Value => "value",
            Quantity::P50 => "p50",
            Quantity::P90 => "p90",
            Quantity::P95 => "p95",
            Quantity::P99 => "p99",
        })
    }
}

/// One violated check.
#[record]
pub struct Failure {
    pub quantity: Quantity,
    pub want: f64,
    pub have: f64,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: want {:.6}, have {:.6}",
            self.quantity, self.want, self.have
        )
    }
}

#[record]
pub struct Outcome {
    pub check: CheckKind,
    /// Seed the workload was drawn with. `None` when the caller supplied the workload.
    pub seed: Option<u64>,
    /// Number of values applied to the instrument.
    pub observations: usize,
    pub failures: Vec<Failure>,
}

impl Outcome {
    pub fn new(check: CheckKind, observations: usize) -> Self {
        Self {
            check,
            seed: None,
            observations,
            failures: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn push(&mut self, quantity: Quantity, want: f64, have: f64) {
        self.failures.push(Failure {
            quantity,
            want,
            have,
        });
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    pub fn failed(&self, quantity: Quantity) -> bool {
        self.failures.iter().any(|f| f.quantity == quantity)
    }

    /// `Ok(self)` on success, [`Error::Mismatch`] otherwise.
    pub fn into_result(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(Error::Mismatch(self))
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_success() {
            return write!(
                f,
                "{} check passed ({} observations)",
                self.check, self.observations
            );
        }
        for (i, failure) in self.failures.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{failure}")?;
        }
        Ok(())
    }
}
