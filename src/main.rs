//! Collection Runner - run API request collections from CI
//!
//! Exit codes: 0 success, 1 collection missing, 2 run error,
//! 3 assertion failures, 4 unreadable or malformed input.

use clap::Parser;
use collection_runner::commands::RunArgs;
use collection_runner::common::config::Config;
use collection_runner::common::logging;
use collection_runner::orchestrator::orchestrate_with;
use collection_runner::{InvocationConfig, NewmanRunner, Result, RunStatus};

#[derive(Parser)]
#[command(name = "collection-runner", about = "Run an API collection through newman")]
#[command(version, long_about = None)]
struct Cli {
    #[command(flatten)]
    run: RunArgs,
}

#[tokio::main]
async fn main() {
    logging::init_cli();

    let cli = Cli::parse();
    let invocation = InvocationConfig::from(cli.run);

    let code = match run(&invocation).await {
        Ok(status) => {
            status.report();
            status.exit_code()
        }
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code()
        }
    };

    std::process::exit(code);
}

async fn run(invocation: &InvocationConfig) -> Result<RunStatus> {
    orchestrate_with(invocation, || {
        let config = Config::load()?;
        Ok(NewmanRunner::from_config(&config.runner))
    })
    .await
}
