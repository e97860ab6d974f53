//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod job;

pub use job::DraftArgs;

use anyhow::{Result, bail};
use clap::Subcommand;
use colored::*;
use jobtrack_client::TrackerClient;

use crate::config::Config;
use crate::confirm::{AlwaysConfirm, ConfirmPort, StdinConfirm};
use crate::controller::{ActionOutcome, TrackerController};
use crate::shell;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// List all job applications
    List {
        /// Print raw JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show one job application in full
    Show {
        /// Job ID or unambiguous prefix
        id: String,

        /// Print raw JSON instead of the detail view
        #[arg(long)]
        json: bool,
    },
    /// Add a job application
    Add {
        #[command(flatten)]
        fields: DraftArgs,
    },
    /// Edit a job application; omitted fields keep their current value
    Edit {
        /// Job ID or unambiguous prefix
        id: String,

        #[command(flatten)]
        fields: DraftArgs,
    },
    /// Delete a job application
    Delete {
        /// Job ID or unambiguous prefix
        id: String,
    },
    /// Count applications per status
    Summary,
    /// Check that the tracker API is reachable
    Ping,
    /// Interactive session: browse, edit and submit from one prompt
    Shell,
}

/// Handle a CLI command
///
/// Every command except `ping` builds a controller, which loads the job
/// list once before the command runs.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    let client = TrackerClient::new(&config.api_url);
    let open = || TrackerController::init(client.clone(), confirm_port(config));

    match command {
        Commands::List { json } => job::list_jobs(&open().await, json),
        Commands::Show { id, json } => job::show_job(&open().await, &id, json, &config.currency),
        Commands::Add { fields } => {
            job::add_job(&mut open().await, &fields, &config.currency).await
        }
        Commands::Edit { id, fields } => {
            job::edit_job(&mut open().await, &id, &fields, &config.currency).await
        }
        Commands::Delete { id } => job::delete_job(&mut open().await, &id).await,
        Commands::Summary => job::summary(&open().await),
        Commands::Shell => shell::run(open().await, &config.currency).await,
        Commands::Ping => ping(&client).await,
    }
}

fn confirm_port(config: &Config) -> Box<dyn ConfirmPort> {
    if config.assume_yes {
        Box::new(AlwaysConfirm)
    } else {
        Box::new(StdinConfirm)
    }
}

async fn ping(client: &TrackerClient) -> Result<()> {
    let message = client.welcome().await?;
    println!("{} {} ({})", "✓".green(), message, client.base_url().dimmed());
    Ok(())
}

/// Print what an action did, or turn its failure into an error
pub fn report(outcome: ActionOutcome) -> Result<()> {
    match outcome {
        ActionOutcome::Created(id) => {
            println!("{} Created job {}", "✓".green(), id.to_string().cyan())
        }
        ActionOutcome::Updated(id) => {
            println!("{} Updated job {}", "✓".green(), id.to_string().cyan())
        }
        ActionOutcome::Deleted(id) => {
            println!("{} Deleted job {}", "✓".green(), id.to_string().cyan())
        }
        ActionOutcome::Refreshed(count) => {
            println!("{} Loaded {} job(s)", "✓".green(), count)
        }
        ActionOutcome::Declined => println!("{}", "Cancelled.".yellow()),
        ActionOutcome::Rejected(err) => bail!("Invalid job: {err}"),
        ActionOutcome::Failed => bail!("Request failed; see the log for details"),
    }
    Ok(())
}
