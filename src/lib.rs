//! Collection Runner - run API request collections from CI
//!
//! Resolves a collection, an optional environment and an optional iteration
//! dataset, delegates the run to an external collection runner (newman) and
//! maps the outcome to a process exit code.

pub mod commands;
pub mod common;
pub mod orchestrator;
pub mod runner;

// Re-export commonly used types for tests
pub use common::{Error, Result};
pub use orchestrator::{orchestrate, orchestrate_with, InvocationConfig, RunOptions, RunStatus};
pub use runner::{CollectionRunner, NewmanRunner, RunOutcome, RunSummary};
