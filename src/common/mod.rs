//! Common utilities shared by the orchestrator and the runners

pub mod config;
pub mod error;
pub mod exit;
pub mod logging;
pub mod paths;

pub use error::{Error, Result};
