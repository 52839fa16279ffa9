//! Tally — a conformance harness for metric instruments.
//!
//! Tally checks that a counter, gauge or histogram implementation accounts for what
//! it is fed. It drives the instrument with a randomized workload, reads the
//! instrument's state back through a closure you provide, and compares that against
//! a value it computed independently.
//!
//! Counters and gauges are plain bookkeeping: the readback must equal the sum (or the
//! last value) of the workload exactly. Histograms are where the numbers get
//! interesting: the harness feeds thousands of draws from a normal distribution and
//! checks the reported p50/p90/p95/p99 against the closed-form quantiles of that
//! distribution, under a relative tolerance you choose.
//!
//! # Architecture
//!
//! - [`instrument`]: the capability traits ([`Counter`], [`Gauge`], [`Histogram`]) an
//!   instrument implements to be checked. One write method each, nothing else.
//! - [`sampler`]: workload generators. Randomness is always passed in explicitly.
//! - [`quantile`]: the probit function and the analytic [`Quantiles`] of a normal
//!   distribution.
//! - [`tolerance`]: relative-error and exact comparison.
//! - [`check`]: the verification procedures, producing an [`Outcome`].
//! - [`Harness`]: a seeded driver with a shared [`HarnessConfig`] that remembers every
//!   outcome and turns them into a [`Summary`].
//! - [`report`]: [`Reporter`]s that send outcomes and summaries somewhere.
//!
//! The harness never looks inside an instrument. Labels, snapshots, locks and the
//! quantile sketch it uses are reachable only through the readback closure.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Mutex;
//!
//! use tally::{Harness, HarnessConfig, Quantiles, instrument::Histogram};
//!
//! /// Keeps every observation; good enough as a reference.
//! #[derive(Default)]
//! struct Samples(Mutex<Vec<f64>>);
//!
//! impl Histogram for Samples {
//!     fn observe(&self, value: f64) {
//!         self.0.lock().unwrap().push(value);
//!     }
//! }
//!
//! impl Samples {
//!     fn quantile(&self, p: f64) -> f64 {
//!         let mut values = self.0.lock().unwrap().clone();
//!         values.sort_by(f64::total_cmp);
//!         values[((p * values.len() as f64) as usize).min(values.len() - 1)]
//!     }
//! }
//!
//! let mut harness = Harness::new(HarnessConfig::builder().seed(42).build()).unwrap();
//! let histogram = Samples::default();
//! harness
//!     .check_histogram(
//!         &histogram,
//!         || Quantiles::from([0.50, 0.90, 0.95, 0.99].map(|p| histogram.quantile(p))),
//!         0.02,
//!     )
//!     .unwrap();
//! ```
//!
//! # Feature flags
//!
//! - `builtins`: the [`StdoutReporter`] and [`JsonReporter`]. (Enabled by default)

/// Verification procedures
pub mod check;
/// Harness configuration
pub mod config;
/// Error type
pub mod error;
/// Seeded driver
pub mod harness;
/// Capability contracts
pub mod instrument;
/// Verification results
pub mod outcome;
/// Analytic quantiles
pub mod quantile;
/// Marker for reportable values
pub mod record;
/// Summaries and reporters
pub mod report;
/// Workload generators
pub mod sampler;
/// Value comparison
pub mod tolerance;

pub use config::HarnessConfig;
pub use error::{Error, Result};
pub use harness::Harness;
pub use instrument::{Counter, Gauge, Histogram};
pub use outcome::{CheckKind, Failure, Outcome, Quantity};
pub use quantile::Quantiles;
pub use record::Record;
#[cfg(feature = "builtins")]
pub use report::{JsonReporter, StdoutReporter};
pub use report::{Reporter, Summary};

/// Procedural macros to reduce boilerplate
pub mod macros {
    pub use tally_macros::*;
}
