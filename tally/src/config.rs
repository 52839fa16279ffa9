use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::error::{Error, Result};

/// Workload parameters shared by all checks.
///
/// Every field has a default, both in the builder and when deserializing, so a
/// config file only needs the fields it changes:
///
/// ```rust
/// use tally::HarnessConfig;
///
/// let config = HarnessConfig::from_json(r#"{ "samples": 10000, "seed": 42 }"#).unwrap();
/// assert_eq!(config.samples, 10_000);
/// assert_eq!(config.mean, 500.0);
///
/// let same = HarnessConfig::builder().samples(10_000).seed(42).build();
/// assert_eq!(config, same);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[serde(default)]
pub struct HarnessConfig {
    /// Counter and gauge workloads are prefixes of a permutation of `0..population`.
    #[builder(default = 100)]
    pub population: usize,
    /// Mean of the normal distribution fed to histograms.
    #[builder(default = 500.0)]
    pub mean: f64,
    /// Standard deviation of the normal distribution fed to histograms.
    #[builder(default = 25.0)]
    pub stdev: f64,
    /// Observations per histogram check. Empirical quantiles need a few thousand
    /// samples before they settle within a percent of the analytic ones.
    #[builder(default = 5_000)]
    pub samples: usize,
    /// Base seed. `None` seeds from OS entropy.
    #[builder(default, setter(strip_option))]
    pub seed: Option<u64>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl HarnessConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> Result<()> {
        // gauge workloads need at least one value, drawn from 1..population
        if self.population < 2 {
            return Err(Error::Config(format!(
                "population must be at least 2, got {}",
                self.population
            )));
        }
        if self.samples == 0 {
            return Err(Error::Config("samples must be positive".into()));
        }
        if !self.mean.is_finite() {
            return Err(Error::Config(format!("mean must be finite, got {}", self.mean)));
        }
        if !(self.stdev.is_finite() && self.stdev > 0.0) {
            return Err(Error::Config(format!(
                "stdev must be finite and positive, got {}",
                self.stdev
            )));
        }
        Ok(())
    }
}
