mod cli;
mod error;
mod logging;
mod output;
mod progress;

use clap::Parser;
use neowatch_core::{NeoWatch, ProgressSink};
use std::process::ExitCode;

use crate::cli::Cli;
use crate::error::CliError;
use crate::output::Report;
use crate::progress::{SilentProgress, StderrProgress};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run() -> Result<ExitCode, CliError> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_level);

    let config = cli.feed_config()?;
    tracing::debug!(?config, "resolved feed configuration");

    let progress: Box<dyn ProgressSink> = if cli.no_progress {
        Box::new(SilentProgress)
    } else {
        Box::new(StderrProgress)
    };

    let app = NeoWatch::new(config);
    let window = app.load(progress.as_ref()).await?;

    let asteroids = if cli.summary_only {
        None
    } else {
        Some(app.view(cli.view).await)
    };
    let report = Report {
        view: cli.view,
        dates: window.dates.clone(),
        days_loaded: window.days_loaded,
        summary: app.summary().await,
        asteroids,
    };
    output::render(&report, cli.format, cli.pretty)?;

    Ok(ExitCode::SUCCESS)
}
