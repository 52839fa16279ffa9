use thiserror::Error;

use crate::outcome::Outcome;

/// Result type alias using the harness error type.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The instrument reported something other than what the workload implies.
    /// The outcome keeps one record per violated check.
    #[error("{0}")]
    Mismatch(Outcome),

    #[error("probability {0} is outside the open interval (0, 1)")]
    Probability(f64),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
