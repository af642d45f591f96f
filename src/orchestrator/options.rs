//! Run options assembly
//!
//! Turns resolved paths into the configuration handed to a runner. Only the
//! collection is required; a missing environment or dataset simply leaves
//! its field out.

use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::common::{Error, Result};

use super::InvocationConfig;

/// Console reporting mode
///
/// The human-readable console reporter is the only supported mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Reporter {
    #[default]
    Cli,
}

impl Reporter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Reporter::Cli => "cli",
        }
    }
}

/// Configuration passed once to a runner
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunOptions {
    /// Parsed collection document
    pub collection: Value,

    /// Parsed environment document, if the environment file exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<Value>,

    /// Dataset path, if the file exists. Loaded by the runner, not here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iteration_data: Option<PathBuf>,

    #[serde(rename = "reporters")]
    pub reporter: Reporter,
}

impl RunOptions {
    /// Validate inputs and assemble the options for a run
    pub fn assemble(invocation: &InvocationConfig) -> Result<Self> {
        let collection_path = &invocation.collection_path;
        if !collection_path.exists() {
            return Err(Error::MissingCollectionFile {
                path: collection_path.clone(),
            });
        }

        let collection = load_document(collection_path)?;

        let environment = if invocation.environment_path.exists() {
            Some(load_document(&invocation.environment_path)?)
        } else {
            tracing::debug!(path = %invocation.environment_path.display(), "No environment file");
            None
        };

        let iteration_data = if invocation.data_path.exists() {
            Some(invocation.data_path.clone())
        } else {
            tracing::debug!(path = %invocation.data_path.display(), "No iteration data file");
            None
        };

        Ok(Self {
            collection,
            environment,
            iteration_data,
            reporter: Reporter::Cli,
        })
    }
}

/// Read and parse a JSON document
fn load_document(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::file_read(path, e))?;
    serde_json::from_str(&content).map_err(|source| Error::InvalidDocument {
        path: path.to_path_buf(),
        source,
    })
}
