use std::sync::{
    Mutex,
    atomic::{AtomicU64, Ordering},
};

use tally::{
    Harness, HarnessConfig, JsonReporter, Quantiles, Reporter,
    instrument::{Counter, Gauge, Histogram},
};

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

#[derive(Default)]
struct AtomicGauge(AtomicU64);

impl Gauge for AtomicGauge {
    fn set(&self, value: f64) {
        self.0.store(value.to_bits(), Ordering::Relaxed);
    }
}

#[derive(Default)]
struct Reservoir(Mutex<Vec<f64>>);

impl Histogram for Reservoir {
    fn observe(&self, value: f64) {
        self.0.lock().unwrap().push(value);
    }
}

impl Reservoir {
    fn quantiles(&self) -> Quantiles {
        let mut values = self.0.lock().unwrap().clone();
        values.sort_by(f64::total_cmp);
        let at = |p: f64| values[((p * values.len() as f64) as usize).min(values.len() - 1)];
        Quantiles::from((at(0.50), at(0.90), at(0.95), at(0.99)))
    }
}

fn main() -> tally::Result<()> {
    // Pass a path to a JSON config to override the defaults
    let config = match std::env::args().nth(1) {
        Some(path) => HarnessConfig::load(path)?,
        None => HarnessConfig::default(),
    };
    let mut harness = Harness::new(config)?;

    let counter = AtomicCounter::default();
    harness.check_counter(&counter, || f64::from_bits(counter.0.load(Ordering::Relaxed)))?;

    let gauge = AtomicGauge::default();
    harness.check_gauge(&gauge, || f64::from_bits(gauge.0.load(Ordering::Relaxed)))?;

    let histogram = Reservoir::default();
    harness.check_histogram(&histogram, || histogram.quantiles(), 0.01)?;

    JsonReporter { pretty: true }.report(&harness.summary())
}
