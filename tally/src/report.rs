use crate::{Record, error::Result, macros::record, outcome::Outcome};

/// Pass/fail tally over a batch of outcomes.
#[record]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub outcomes: Vec<Outcome>,
}

impl From<Vec<Outcome>> for Summary {
    fn from(outcomes: Vec<Outcome>) -> Self {
        let passed = outcomes.iter().filter(|o| o.is_success()).count();
        Self {
            total: outcomes.len(),
            passed,
            failed: outcomes.len() - passed,
            outcomes,
        }
    }
}

impl Summary {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Sends a record somewhere: stdout, a file, a CI annotation.
pub trait Reporter<R: Record> {
    fn report(&self, record: &R) -> Result<()>;
}

#[cfg(feature = "builtins")]
pub use builtins::*;

#[cfg(feature = "builtins")]
mod builtins {
    use super::*;

    /// Pretty `Debug` output on stdout.
    pub struct StdoutReporter;

    impl<R: Record> Reporter<R> for StdoutReporter {
        fn report(&self, record: &R) -> Result<()> {
            println!("{record:#?}");
            Ok(())
        }
    }

    /// JSON on stdout, one document per record.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct JsonReporter {
        pub pretty: bool,
    }

    impl JsonReporter {
        pub fn render<R: Record>(&self, record: &R) -> Result<String> {
            let json = if self.pretty {
                serde_json::to_string_pretty(record)?
            } else {
                serde_json::to_string(record)?
            };
            Ok(json)
        }
    }

    impl<R: Record> Reporter<R> for JsonReporter {
        fn report(&self, record: &R) -> Result<()> {
            println!("{}", self.render(record)?);
            Ok(())
        }
    }
}
