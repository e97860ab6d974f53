//! Jobtrack CLI
//!
//! Command-line client for the job application tracker API.

mod commands;
mod config;
mod confirm;
mod controller;
#[cfg(test)]
mod fake_remote;
mod id_resolver;
mod render;
mod shell;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "jobtrack")]
#[command(about = "Job Application Tracker", long_about = None)]
struct Cli {
    /// Tracker API URL
    #[arg(long, env = "JOBTRACK_API_URL", default_value = "http://localhost:8000")]
    api_url: String,

    /// Prefix shown before salary amounts
    #[arg(long, env = "JOBTRACK_CURRENCY", default_value = "RM")]
    currency: String,

    /// Do not ask before deleting
    #[arg(short, long)]
    yes: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so tables and JSON on stdout stay clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jobtrack_cli=info,jobtrack_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config {
        api_url: cli.api_url,
        currency: cli.currency,
        assume_yes: cli.yes,
    };
    config.validate()?;

    handle_command(cli.command, &config).await
}
