//! Closed-form quantiles of the normal distribution.
//!
//! The histogram check compares what an instrument reports against
//! `mean + stdev * Φ⁻¹(p)`, where Φ⁻¹ is the probit function. It is computed with
//! Acklam's rational approximation, which is accurate to a relative error of about
//! 1.15e-9 over the whole open interval (0, 1), far below any tolerance a quantile
//! sketch is checked against.

use crate::{
    Record,
    error::{Error, Result},
    macros::record,
    outcome::Quantity,
};

/// Probabilities of the four quantiles the histogram check verifies.
pub const PROBABILITIES: [(Quantity, f64); 4] = [
    (Quantity::P50, 0.50),
    (Quantity::P90, 0.90),
    (Quantity::P95, 0.95),
    (Quantity::P99, 0.99),
];

/// Inverse CDF of the standard normal distribution.
///
/// Defined on the open interval (0, 1); anything else, NaN included, is rejected.
/// `probit(0.5)` is exactly `0.0`.
pub fn probit(p: f64) -> Result<f64> {
    if p > 0.0 && p < 1.0 {
        Ok(acklam(p))
    } else {
        Err(Error::Probability(p))
    }
}

/// The `p`-quantile of N(mean, stdev²).
pub fn normal_quantile(mean: f64, stdev: f64, p: f64) -> Result<f64> {
    Ok(mean + stdev * probit(p)?)
}

/// Caller must guarantee `0 < p < 1`.
#[allow(clippy::excessive_precision)]
fn acklam(p: f64) -> f64 {
    const A: [f64; 6] = [
        -3.969_683_028_665_376e1,
        2.209_460_984_245_205e2,
        -2.759_285_104_469_687e2,
        1.383_577_518_672_690e2,
        -3.066_479_806_614_716e1,
        2.506_628_277_459_239,
    ];
    const B: [f64; 5] = [
        -5.447_609_879_822_406e1,
        1.615_858_368_580_409e2,
        -1.556_989_798_598_866e2,
        6.680_131_188_771_972e1,
        -1.328_068_155_288_572e1,
    ];
    const C: [f64; 6] = [
        -7.784_894_002_430_293e-3,
        -3.223_964_580_411_365e-1,
        -2.400_758_277_161_838,
        -2.549_732_539_343_734,
        4.374_664_141_464_968,
        2.938_163_982_698_783,
    ];
    const D: [f64; 4] = [
        7.784_695_709_041_462e-3,
        3.224_671_290_700_398e-1,
        2.445_134_137_142_996,
        3.754_408_661_907_416,
    ];
    const P_LOW: f64 = 0.02425;
    const P_HIGH: f64 = 1.0 - P_LOW;

    let tail = |q: f64| {
        (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    };

    if p < P_LOW {
        tail((-2.0 * p.ln()).sqrt())
    } else if p <= P_HIGH {
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    } else {
        -tail((-2.0 * (1.0 - p).ln()).sqrt())
    }
}

/// The four quantiles a histogram check compares.
///
/// Readback closures may return a plain `(p50, p90, p95, p99)` tuple; it converts
/// into this.
#[record]
#[derive(Copy)]
pub struct Quantiles {
    pub p50: f64,
    pub p90: f64,
    pub p95: f64,
    pub p99: f64,
}

impl Quantiles {
    /// Analytic quantiles of N(mean, stdev²).
    pub fn normal(mean: f64, stdev: f64) -> Self {
        let [p50, p90, p95, p99] = PROBABILITIES.map(|(_, p)| mean + stdev * acklam(p));
        Self { p50, p90, p95, p99 }
    }

    pub fn get(&self, quantity: Quantity) -> Option<f64> {
        match quantity {
            Quantity::P50 => Some(self.p50),
            Quantity::P90 => Some(self.p90),
            Quantity::P95 => Some(self.p95),
            Quantity::P99 => Some(self.p99),
            Quantity::Total | Quantity::Value => None,
        }
    }

    /// `(quantity, value)` pairs in ascending probability order.
    pub fn iter(&self) -> impl Iterator<Item = (Quantity, f64)> {
        PROBABILITIES
            .into_iter()
            .filter_map(|(quantity, _)| self.get(quantity).map(|value| (quantity, value)))
    }
}

impl From<(f64, f64, f64, f64)> for Quantiles {
    fn from((p50, p90, p95, p99): (f64, f64, f64, f64)) -> Self {
        Self { p50, p90, p95, p99 }
    }
}

impl From<[f64; 4]> for Quantiles {
    fn from([p50, p90, p95, p99]: [f64; 4]) -> Self {
        Self { p50, p90, p95, p99 }
    }
}
