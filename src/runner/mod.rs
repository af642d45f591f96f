//! Collection runners
//!
//! A runner takes fully assembled [`RunOptions`] and executes the collection.
//! The orchestrator never executes requests itself; it awaits exactly one
//! [`RunOutcome`] from whichever runner it was handed.

mod newman;

pub use newman::NewmanRunner;

use async_trait::async_trait;
use serde_json::Value;

use crate::orchestrator::RunOptions;

/// Trait for collection runners
#[async_trait]
pub trait CollectionRunner: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Execute the collection once and resolve with its outcome
    ///
    /// Execution problems (runner missing, network failure, malformed
    /// collection) are reported through [`RunOutcome::error`], never panics.
    async fn run(&self, options: &RunOptions) -> RunOutcome;
}

/// Result of a single collection run
#[derive(Debug, Clone, Default)]
pub struct RunOutcome {
    /// Execution error reported by the runner, if any
    pub error: Option<String>,
    /// Run summary, when the runner produced one
    pub summary: Option<RunSummary>,
}

impl RunOutcome {
    /// Outcome of a run that did not complete
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            summary: None,
        }
    }

    /// Outcome of a run that produced a summary
    ///
    /// An error recorded inside the summary is lifted into `error`.
    pub fn from_summary(summary: RunSummary) -> Self {
        Self {
            error: summary.run_error(),
            summary: Some(summary),
        }
    }

    /// Number of failed assertions, zero when no summary is available
    pub fn failure_count(&self) -> usize {
        self.summary.as_ref().map_or(0, RunSummary::failure_count)
    }
}

/// Summary document produced by a runner
///
/// Kept as an untyped document because its shape belongs to the runner.
/// Accessors read it defensively and never fail on missing structure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary(Value);

impl RunSummary {
    pub fn new(document: Value) -> Self {
        Self(document)
    }

    /// Parse a summary from its JSON text
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content).map(Self)
    }

    /// Length of `run.failures`, or 0 if that list is absent or not a list
    pub fn failure_count(&self) -> usize {
        self.0
            .get("run")
            .and_then(|run| run.get("failures"))
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }

    /// Error recorded at `run.error`, if it is present and not null
    pub fn run_error(&self) -> Option<String> {
        let error = self.0.get("run")?.get("error")?;
        match error {
            Value::Null => None,
            Value::String(message) => Some(message.clone()),
            Value::Object(fields) => Some(match fields.get("message").and_then(Value::as_str) {
                Some(message) => message.to_string(),
                None => error.to_string(),
            }),
            other => Some(other.to_string()),
        }
    }
}
