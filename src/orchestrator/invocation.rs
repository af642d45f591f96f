//! Input path resolution

use std::path::PathBuf;

/// Collection used when `--collection` is not given
pub const DEFAULT_COLLECTION_PATH: &str = "./collection.json";

/// Environment used when `--env` is not given
pub const DEFAULT_ENVIRONMENT_PATH: &str = "./env.json";

/// Iteration dataset used when `--data` is not given
pub const DEFAULT_DATA_PATH: &str = "./dataset.json";

/// Resolved input paths for a single run
///
/// Paths are taken as given: no normalization and no symlink resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationConfig {
    pub collection_path: PathBuf,
    pub environment_path: PathBuf,
    pub data_path: PathBuf,
}

impl InvocationConfig {
    /// Resolve paths, falling back to the defaults for any that are absent
    pub fn new(
        collection: Option<PathBuf>,
        environment: Option<PathBuf>,
        data: Option<PathBuf>,
    ) -> Self {
        Self {
            collection_path: collection.unwrap_or_else(|| PathBuf::from(DEFAULT_COLLECTION_PATH)),
            environment_path: environment
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ENVIRONMENT_PATH)),
            data_path: data.unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH)),
        }
    }
}

impl Default for InvocationConfig {
    fn default() -> Self {
        Self::new(None, None, None)
    }
}
