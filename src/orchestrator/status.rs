//! Run outcome classification

use std::fmt;

use colored::Colorize;

use crate::common::exit;
use crate::runner::RunOutcome;

/// Final status of a completed orchestration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    /// No error and no failed assertions
    Passed,
    /// The run finished but assertions failed
    Failed { failures: usize },
    /// The runner reported an execution error
    Errored { message: String },
}

impl RunStatus {
    /// Classify a runner outcome. An error wins over any summary content.
    pub fn from_outcome(outcome: &RunOutcome) -> Self {
        if let Some(message) = &outcome.error {
            return RunStatus::Errored {
                message: message.clone(),
            };
        }

        match outcome.failure_count() {
            0 => RunStatus::Passed,
            failures => RunStatus::Failed { failures },
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            RunStatus::Passed => exit::SUCCESS,
            RunStatus::Failed { .. } => exit::ASSERTION_FAILURES,
            RunStatus::Errored { .. } => exit::RUN_ERROR,
        }
    }

    /// Print the final diagnostic. Only success goes to stdout.
    pub fn report(&self) {
        match self {
            RunStatus::Passed => println!("{}", self.to_string().green()),
            RunStatus::Failed { .. } | RunStatus::Errored { .. } => {
                eprintln!("{}", self.to_string().red())
            }
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunStatus::Passed => write!(f, "Collection run completed successfully"),
            RunStatus::Failed { failures } => write!(f, "Failures: {}", failures),
            RunStatus::Errored { message } => write!(f, "Collection run failed: {}", message),
        }
    }
}
