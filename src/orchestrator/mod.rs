//! Run orchestration
//!
//! Resolves inputs, assembles [`RunOptions`], hands them to a
//! [`CollectionRunner`] exactly once and classifies what comes back.
//! Nothing in here terminates the process; `main` owns that.

mod invocation;
mod options;
mod status;

pub use invocation::{
    InvocationConfig, DEFAULT_COLLECTION_PATH, DEFAULT_DATA_PATH, DEFAULT_ENVIRONMENT_PATH,
};
pub use options::{Reporter, RunOptions};
pub use status::RunStatus;

use crate::common::Result;
use crate::runner::CollectionRunner;

/// Run one collection and classify the result
///
/// Input problems (missing collection, unreadable or malformed documents)
/// are returned as errors before the runner is touched.
pub async fn orchestrate(
    invocation: &InvocationConfig,
    runner: &dyn CollectionRunner,
) -> Result<RunStatus> {
    let options = RunOptions::assemble(invocation)?;
    Ok(delegate(invocation, &options, runner).await)
}

/// Like [`orchestrate`], but the runner is only built once inputs are valid
///
/// Runner construction (config loading) never masks an input error.
pub async fn orchestrate_with<R, F>(
    invocation: &InvocationConfig,
    build_runner: F,
) -> Result<RunStatus>
where
    R: CollectionRunner,
    F: FnOnce() -> Result<R>,
{
    let options = RunOptions::assemble(invocation)?;
    let runner = build_runner()?;
    Ok(delegate(invocation, &options, &runner).await)
}

async fn delegate(
    invocation: &InvocationConfig,
    options: &RunOptions,
    runner: &dyn CollectionRunner,
) -> RunStatus {
    tracing::info!(
        runner = runner.name(),
        collection = %invocation.collection_path.display(),
        env = %invocation.environment_path.display(),
        data = %invocation.data_path.display(),
        "Running collection"
    );

    let outcome = runner.run(options).await;
    let status = RunStatus::from_outcome(&outcome);

    tracing::debug!(?status, "Collection run finished");
    status
}
