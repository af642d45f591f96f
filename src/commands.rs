//! CLI argument definitions

use clap::Args;
use std::path::PathBuf;

use crate::orchestrator::InvocationConfig;

/// Inputs for a collection run
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Collection definition to run [default: ./collection.json]
    #[arg(long, value_name = "PATH")]
    pub collection: Option<PathBuf>,

    /// Environment variables file, skipped if it does not exist [default: ./env.json]
    #[arg(long, value_name = "PATH")]
    pub env: Option<PathBuf>,

    /// Iteration dataset (JSON or CSV), skipped if it does not exist [default: ./dataset.json]
    #[arg(long, value_name = "PATH")]
    pub data: Option<PathBuf>,
}

impl From<RunArgs> for InvocationConfig {
    fn from(args: RunArgs) -> Self {
        InvocationConfig::new(args.collection, args.env, args.data)
    }
}
