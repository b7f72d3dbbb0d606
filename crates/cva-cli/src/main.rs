//! CVA - Create Vite App
//!
//! Scaffolds a Vite + React project, wires in Tailwind CSS with an
//! application template, and installs dependencies.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use cva_core::materialize::{Materializer, Outcome};
use cva_core::process::ProcessRunner;
use cva_core::CvaError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod output;
mod progress;

use cli::Cli;

/// Initialize tracing on stderr so diagnostics never interleave with the
/// child processes' output on stdout.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "cva=debug,cva_core=debug"
    } else {
        "cva=warn,cva_core=warn"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        report_error(&err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let request = cli.into_request();
    tracing::debug!(cwd = %cwd.display(), ?request, "starting materialization");

    let runner = ProcessRunner;
    let prompter = progress::TermPrompter;
    let reporter = progress::SpinnerReporter::new();
    let materializer = Materializer::new(&runner, &prompter, &reporter);

    match materializer.run(&request, &cwd).await? {
        Outcome::Created(target) => output::print_success(&target),
        Outcome::Cancelled => output::print_cancelled(),
    }
    Ok(())
}

/// Input errors get their own presentation; anything that escaped a
/// pipeline stage is reported with the fixed failure prefix.
fn report_error(err: &anyhow::Error) {
    match err.downcast_ref::<CvaError>() {
        Some(CvaError::InvalidName { name, validation }) => {
            output::print_validation_failure(name, validation);
        }
        Some(CvaError::TargetExists(path)) => {
            eprintln!(
                "{} target directory already exists: {}",
                "Error:".red().bold(),
                path.display()
            );
        }
        _ => {
            eprintln!("{} {err:#}", "Error creating project:".red().bold());
        }
    }
}
