//! newman runner
//!
//! Drives the `newman` CLI as a child process. The parsed collection and
//! environment are written to a scratch directory because newman only takes
//! paths, and the JSON reporter is enabled alongside the console reporter so
//! the run summary can be read back after the child exits.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use serde_json::Value;
use tokio::process::Command;

use crate::common::config::RunnerConfig;
use crate::common::{Error, Result};
use crate::orchestrator::RunOptions;

use super::{CollectionRunner, RunOutcome, RunSummary};

/// Reporter used only to recover the run summary
const SUMMARY_REPORTER: &str = "json";

/// Runs collections through the `newman` command-line program
#[derive(Debug, Clone)]
pub struct NewmanRunner {
    program: PathBuf,
    extra_args: Vec<String>,
}

impl NewmanRunner {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            extra_args: Vec::new(),
        }
    }

    pub fn from_config(config: &RunnerConfig) -> Self {
        Self {
            program: config.program.clone(),
            extra_args: config.args.clone(),
        }
    }

    /// Locate the runner executable
    ///
    /// Bare names are searched in PATH; anything with a path separator is
    /// checked as-is.
    fn resolve_program(&self) -> Result<PathBuf> {
        which::which(&self.program).map_err(|_| {
            Error::RunnerNotFound(self.program.display().to_string())
        })
    }

    async fn execute(&self, options: &RunOptions) -> Result<RunOutcome> {
        let program = self.resolve_program()?;

        let workdir = tempfile::tempdir()?;
        let collection_file =
            write_document(workdir.path(), "collection.json", &options.collection)?;
        let environment_file = options
            .environment
            .as_ref()
            .map(|environment| write_document(workdir.path(), "environment.json", environment))
            .transpose()?;
        let summary_file = workdir.path().join("summary.json");

        let args = build_args(
            options,
            &collection_file,
            environment_file.as_deref(),
            &summary_file,
            &self.extra_args,
        );

        tracing::debug!(program = %program.display(), ?args, "Spawning newman");

        let status = Command::new(&program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| {
                Error::Internal(format!("Failed to spawn '{}': {}", program.display(), e))
            })?;

        tracing::debug!(?status, "newman exited");

        // newman exits non-zero on assertion failures too, so the summary
        // decides the outcome whenever one was written.
        if !summary_file.exists() {
            return Ok(RunOutcome::failed(format!(
                "newman exited with {} without producing a run summary",
                status
            )));
        }

        let content = std::fs::read_to_string(&summary_file)
            .map_err(|e| Error::file_read(&summary_file, e))?;
        let summary = RunSummary::from_json(&content)?;

        Ok(RunOutcome::from_summary(summary))
    }
}

#[async_trait]
impl CollectionRunner for NewmanRunner {
    fn name(&self) -> &str {
        "newman"
    }

    async fn run(&self, options: &RunOptions) -> RunOutcome {
        match self.execute(options).await {
            Ok(outcome) => outcome,
            Err(e) => RunOutcome::failed(e.to_string()),
        }
    }
}

fn write_document(dir: &Path, name: &str, document: &Value) -> Result<PathBuf> {
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_vec(document)?)?;
    Ok(path)
}

/// Build the `newman run` argument list
fn build_args(
    options: &RunOptions,
    collection_file: &Path,
    environment_file: Option<&Path>,
    summary_file: &Path,
    extra_args: &[String],
) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["run".into(), collection_file.into()];

    if let Some(environment_file) = environment_file {
        args.push("-e".into());
        args.push(environment_file.into());
    }

    if let Some(data) = &options.iteration_data {
        args.push("-d".into());
        args.push(data.into());
    }

    args.push("--reporters".into());
    args.push(format!("{},{}", options.reporter.as_str(), SUMMARY_REPORTER).into());
    args.push("--reporter-json-export".into());
    args.push(summary_file.into());

    args.extend(extra_args.iter().map(OsString::from));
    args
}
