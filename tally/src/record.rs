use std::fmt::Debug;

use serde::{Serialize, de::DeserializeOwned};

/// Values the harness hands to a [`Reporter`](crate::Reporter): outcomes, quantiles
/// and summaries. Use `#[record]` instead of implementing this by hand.
pub trait Record
where
    Self: Serialize + DeserializeOwned + PartialOrd + PartialEq + Send + Sync + Debug + Clone,
{
}
