//! Drives thread-safe reference instruments through the public API, the way a
//! metrics backend would test itself.

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicU64, Ordering},
};

use rand::{SeedableRng, rngs::StdRng};
use tally::{
    CheckKind, Error, Harness, HarnessConfig, JsonReporter, Quantiles, Quantity, Reporter,
    Summary, check,
    instrument::{Counter, Gauge, Histogram},
    sampler,
};

/// f64 accumulator stored as bits in an `AtomicU64`.
#[derive(Default)]
struct AtomicCounter(AtomicU64);

impl Counter for AtomicCounter {
    fn add(&self, delta: f64) {
        let _ = self
            .0
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |bits| {
                Some((f64::from_bits(bits) + delta).to_bits())
            });
    }
}

impl AtomicCounter {
    fn value(&self) -> f64 {
        f64::from_bits(self.0.load(Ordering::Relaxed))
    }
}

#[derive(Default)]
struct AtomicGauge(AtomicU64);

impl Gauge for AtomicGauge {
    fn set(&self, value: f64) {
        self.0.store(value.to_bits(), Ordering::Relaxed);
    }
}

impl AtomicGauge {
    fn value(&self) -> f64 {
        f64::from_bits(self.0.load(Ordering::Relaxed))
    }
}

/// Unit-width buckets over `[0, 1000)`, answering quantiles with bucket midpoints.
struct Buckets(Mutex<Vec<u64>>);

impl Default for Buckets {
    fn default() -> Self {
        Self(Mutex::new(vec![0; 1000]))
    }
}

impl Histogram for Buckets {
    fn observe(&self, value: f64) {
        let idx = (value.max(0.0) as usize).min(999);
        self.0.lock().unwrap()[idx] += 1;
    }
}

impl Buckets {
    fn quantile(&self, p: f64) -> f64 {
        let buckets = self.0.lock().unwrap();
        let total: u64 = buckets.iter().sum();
        let rank = (p * total as f64).ceil() as u64;
        let mut seen = 0;
        for (idx, count) in buckets.iter().enumerate() {
            seen += count;
            if seen >= rank.max(1) {
                return idx as f64 + 0.5;
            }
        }
        999.5
    }

    fn quantiles(&self) -> Quantiles {
        Quantiles::from([0.50, 0.90, 0.95, 0.99].map(|p| self.quantile(p)))
    }
}

/// Loses every delta.
struct DeadCounter;

impl Counter for DeadCounter {
    fn add(&self, _: f64) {}
}

fn seeded(seed: u64) -> Harness {
    Harness::new(HarnessConfig::builder().seed(seed).build()).unwrap()
}

#[test]
fn reference_instruments_pass_every_check() {
    let mut harness = seeded(2016);
    for _ in 0..10 {
        let counter = AtomicCounter::default();
        harness.check_counter(&counter, || counter.value()).unwrap();

        let gauge = AtomicGauge::default();
        harness.check_gauge(&gauge, || gauge.value()).unwrap();
    }

    let histogram = Buckets::default();
    let outcome = harness
        .check_histogram(&histogram, || histogram.quantiles(), 0.02)
        .unwrap();
    assert_eq!(outcome.observations, 5_000);

    let summary = harness.summary();
    assert_eq!(summary.total, 21);
    assert!(summary.is_success());
}

#[test]
fn shared_instrument_behind_arc() {
    let counter = Arc::new(AtomicCounter::default());
    let outcome = check::verify_counter(&[3.0, 41.0, 7.0], &counter, || counter.value());
    assert!(outcome.is_success(), "{outcome}");
    assert_eq!(counter.value(), 51.0);

    let gauge = Arc::new(AtomicGauge::default());
    let outcome = check::verify_gauge(&[10.0, -4.0, 99.0], &gauge, || gauge.value());
    assert!(outcome.is_success(), "{outcome}");
}

#[test]
fn dead_counter_is_caught() {
    let outcome = check::verify_counter(&[3.0, 41.0, 7.0], &DeadCounter, || 0.0);
    assert_eq!(outcome.failures().len(), 1);
    assert_eq!(outcome.failures()[0].quantity, Quantity::Total);

    let mut harness = seeded(7);
    let failures = (0..20)
        .filter(|_| harness.check_counter(&DeadCounter, || 0.0).is_err())
        .count();
    assert!(failures > 0);
    assert_eq!(harness.summary().failed, failures);
}

#[test]
fn wrong_distribution_fails_all_quantiles() {
    // The instrument sees N(500, 25²) but the checker expects N(400, 25²).
    let config = HarnessConfig::default();
    let histogram = Buckets::default();
    let mut rng = StdRng::seed_from_u64(11);
    let workload = sampler::normal_workload(&mut rng, config.mean, config.stdev, config.samples);
    let outcome = check::verify_histogram(
        &workload,
        400.0,
        25.0,
        &histogram,
        || histogram.quantiles(),
        0.05,
    );
    assert_eq!(outcome.check, CheckKind::Histogram);
    assert_eq!(outcome.failures().len(), 4, "{outcome}");
}

#[test]
fn mismatch_error_message_lists_failures() {
    let mut harness = seeded(1);
    let histogram = Buckets::default();
    let err = harness
        .check_histogram(
            &histogram,
            || {
                let q = histogram.quantiles();
                (q.p50, q.p90 * 2.0, q.p95, q.p99 * 2.0)
            },
            0.02,
        )
        .unwrap_err();

    assert!(matches!(err, Error::Mismatch(_)));
    let message = err.to_string();
    assert!(message.starts_with("p90: want"), "{message}");
    assert!(message.contains("; p99: want"), "{message}");
    assert!(!message.contains("p50") && !message.contains("p95"), "{message}");
}

#[test]
fn summary_round_trips_through_json_reporter() {
    let mut harness = seeded(3);
    let counter = AtomicCounter::default();
    harness.check_counter(&counter, || counter.value()).unwrap();
    let _ = harness.check_counter(&DeadCounter, || -1.0);

    let summary = harness.summary();
    let json = JsonReporter::default().render(&summary).unwrap();
    let back: Summary = serde_json::from_str(&json).unwrap();
    assert_eq!(back, summary);
    assert_eq!(back.failed, 1);
    JsonReporter { pretty: true }.report(&summary).unwrap();
}
