//! Error types for the collection runner
//!
//! Every error maps to exactly one process exit code. Execution errors
//! reported by the runner itself are not errors here: they travel as data
//! in [`crate::runner::RunOutcome`].

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::exit;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the collection runner
#[derive(Error, Debug)]
pub enum Error {
    // === Input Errors ===
    #[error("Collection not found: {}", .path.display())]
    MissingCollectionFile { path: PathBuf },

    #[error("Failed to read file '{}': {error}", .path.display())]
    FileRead { path: PathBuf, error: String },

    #[error("Invalid JSON document '{}': {source}", .path.display())]
    InvalidDocument {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // === Runner Errors ===
    #[error("Collection runner '{0}' not found in PATH")]
    RunnerNotFound(String),

    // === Configuration Errors ===
    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Internal Errors ===
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a file read error for the given path
    pub fn file_read(path: &Path, error: impl ToString) -> Self {
        Self::FileRead {
            path: path.to_path_buf(),
            error: error.to_string(),
        }
    }

    /// Exit code the process terminates with when this error ends a run
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::MissingCollectionFile { .. } => exit::MISSING_COLLECTION,
            Error::FileRead { .. } | Error::InvalidDocument { .. } | Error::ConfigParse(_) => {
                exit::INVALID_INPUT
            }
            Error::RunnerNotFound(_) | Error::Io(_) | Error::Json(_) | Error::Internal(_) => {
                exit::RUN_ERROR
            }
        }
    }
}
