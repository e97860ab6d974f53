//! Interactive session
//!
//! A prompt loop over a single controller: the job table, one form session
//! and the detail view all live for the whole session. Each line is parsed
//! with clap and handled to completion before the next one is read. Errors
//! are printed and the session carries on.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use jobtrack_client::RemoteCollection;
use jobtrack_core::draft::DraftField;
use jobtrack_core::view::JobDetail;
use std::io::{self, BufRead, Write};

use crate::commands::report;
use crate::confirm::ConfirmPort;
use crate::controller::TrackerController;
use crate::id_resolver::resolve_job_id;
use crate::render::{print_draft, print_job_details, print_job_table, print_summary, short_id};

#[derive(Parser, Debug)]
#[command(no_binary_name = true, name = "jobtrack shell")]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug, PartialEq)]
enum ShellCommand {
    /// Show the job table
    #[command(alias = "ls")]
    List,
    /// Show one job in full
    Show {
        /// Job ID or unambiguous prefix
        id: String,
    },
    /// Start a new, empty draft
    New,
    /// Load a job into the draft for editing
    Edit {
        /// Job ID or unambiguous prefix
        id: String,
    },
    /// Set a draft field; no value clears it
    Set {
        /// company, position, status, dateApplied, salary, jobUrl or remarks
        field: String,
        /// Only used to check for a value; the text itself is taken from
        /// the raw line so its spacing survives
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Show the current draft
    Draft,
    /// Create or update from the current draft
    Submit,
    /// Discard the draft and leave edit mode
    Cancel,
    /// Delete a job
    #[command(alias = "rm")]
    Delete {
        /// Job ID or unambiguous prefix
        id: String,
    },
    /// Reload the job list from the API
    Refresh,
    /// Count applications per status
    Summary,
    /// Leave the session
    #[command(alias = "exit")]
    Quit,
}

enum Flow {
    Continue,
    Quit,
}

/// Run the prompt loop until `quit` or end of input
pub async fn run<R: RemoteCollection, C: ConfirmPort>(
    mut controller: TrackerController<R, C>,
    currency: &str,
) -> Result<()> {
    println!("{}", "Job Application Tracker".bold());
    println!("{}", "Type 'help' for commands.".dimmed());
    println!();
    print_job_table(controller.entries());

    loop {
        print_prompt(&controller)?;

        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        if read == 0 {
            println!();
            break;
        }

        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            continue;
        }

        let command = match ShellLine::try_parse_from(words) {
            Ok(parsed) => parsed.command,
            Err(err) => {
                let _ = err.print();
                continue;
            }
        };

        match execute(&mut controller, command, &line, currency).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(err) => eprintln!("{} {:#}", "✗".red(), err),
        }
    }

    Ok(())
}

fn print_prompt<R: RemoteCollection, C: ConfirmPort>(
    controller: &TrackerController<R, C>,
) -> Result<()> {
    let mode = match controller.editing_id() {
        Some(id) => format!("edit {}", short_id(id)),
        None => "new".to_string(),
    };
    print!("jobtrack [{}]> ", mode.cyan());
    io::stdout().flush().context("Failed to flush stdout")
}

async fn execute<R: RemoteCollection, C: ConfirmPort>(
    controller: &mut TrackerController<R, C>,
    command: ShellCommand,
    line: &str,
    currency: &str,
) -> Result<Flow> {
    match command {
        ShellCommand::List => print_job_table(controller.entries()),
        ShellCommand::Show { id } => {
            let id = resolve_job_id(controller.entries(), &id)?;
            if let Some(entry) = controller.entry(&id) {
                print_job_details(&JobDetail::new(entry, currency));
            }
        }
        ShellCommand::New => {
            controller.begin_create();
            print_draft(controller.draft(), None);
        }
        ShellCommand::Edit { id } => {
            let id = resolve_job_id(controller.entries(), &id)?;
            controller.begin_edit(&id);
            print_draft(controller.draft(), controller.editing_id());
        }
        ShellCommand::Set { field, value } => {
            let field: DraftField = field.parse()?;
            let value = if value.is_empty() { "" } else { rest_after(line, 2) };
            controller.update_field(field, value)?;
            println!("  {:<12} {}", field.name(), controller.draft().get(field));
        }
        ShellCommand::Draft => print_draft(controller.draft(), controller.editing_id()),
        ShellCommand::Submit => {
            let outcome = controller.submit().await;
            let changed = outcome.is_success();
            report(outcome)?;
            if changed {
                print_job_table(controller.entries());
            }
        }
        ShellCommand::Cancel => {
            controller.cancel();
            println!("{}", "Draft cleared.".dimmed());
        }
        ShellCommand::Delete { id } => {
            let id = resolve_job_id(controller.entries(), &id)?;
            report(controller.delete(&id).await)?;
        }
        ShellCommand::Refresh => {
            report(controller.refresh().await)?;
            print_job_table(controller.entries());
        }
        ShellCommand::Summary => print_summary(&controller.summary()),
        ShellCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

/// Everything after the first `words` words, with inner spacing untouched
fn rest_after(line: &str, words: usize) -> &str {
    let mut rest = line.trim_start();
    for _ in 0..words {
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        rest = rest[end..].trim_start();
    }
    rest.trim_end()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobtrack_core::domain::job::{JobEntry, JobId, JobStatus};

    use crate::confirm::AlwaysConfirm;
    use crate::fake_remote::{Call, FakeRemote, stored};

    fn parse(line: &str) -> Result<ShellCommand, clap::Error> {
        ShellLine::try_parse_from(line.split_whitespace()).map(|parsed| parsed.command)
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse("list").unwrap(), ShellCommand::List);
        assert_eq!(parse("ls").unwrap(), ShellCommand::List);
        assert_eq!(parse("exit").unwrap(), ShellCommand::Quit);
        assert_eq!(
            parse("edit 65a1").unwrap(),
            ShellCommand::Edit {
                id: "65a1".to_string()
            }
        );
    }

    #[test]
    fn test_parse_set_keeps_every_word() {
        assert_eq!(
            parse("set remarks called back, follow-up friday").unwrap(),
            ShellCommand::Set {
                field: "remarks".to_string(),
                value: ["called", "back,", "follow-up", "friday"]
                    .map(String::from)
                    .to_vec(),
            }
        );
    }

    #[test]
    fn test_parse_set_without_value_clears() {
        assert_eq!(
            parse("set salary").unwrap(),
            ShellCommand::Set {
                field: "salary".to_string(),
                value: vec![],
            }
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(parse("launch").is_err());
        assert!(parse("show").is_err());
    }

    async fn shell_with(jobs: Vec<JobEntry>) -> TrackerController<FakeRemote, AlwaysConfirm> {
        TrackerController::init(FakeRemote::with_jobs(jobs), AlwaysConfirm).await
    }

    async fn run_line(
        controller: &mut TrackerController<FakeRemote, AlwaysConfirm>,
        line: &str,
    ) -> Result<Flow> {
        let command = parse(line)?;
        execute(controller, command, line, "RM").await
    }

    #[test]
    fn test_rest_after_keeps_inner_spacing() {
        assert_eq!(rest_after("set remarks a  b\n", 2), "a  b");
        assert_eq!(rest_after("  set   remarks   spaced  out  ", 2), "spaced  out");
        assert_eq!(rest_after("set salary", 2), "");
    }

    #[tokio::test]
    async fn test_set_and_submit_creates_job() {
        let mut controller = shell_with(vec![]).await;

        for line in [
            "new",
            "set company Acme",
            "set position Senior  Engineer",
            "set date 2024-01-15",
            "set remarks called back,  follow-up friday",
            "submit",
        ] {
            assert!(matches!(run_line(&mut controller, line).await.unwrap(), Flow::Continue));
        }

        let payload = controller.remote().last_payload().unwrap();
        assert_eq!(payload.position, "Senior  Engineer");
        assert_eq!(payload.remarks.as_deref(), Some("called back,  follow-up friday"));
        assert_eq!(payload.salary, None);

        assert_eq!(controller.entries().len(), 1);
        assert!(controller.draft().is_empty());
    }

    #[tokio::test]
    async fn test_edit_then_clear_salary_updates_job() {
        let mut controller = shell_with(vec![stored("65a1f0c2", "Acme")]).await;

        run_line(&mut controller, "edit 65a1").await.unwrap();
        run_line(&mut controller, "set salary").await.unwrap();
        run_line(&mut controller, "set status Offered").await.unwrap();
        run_line(&mut controller, "submit").await.unwrap();

        let Some(Call::Update(id, payload)) = controller.remote().calls().pop() else {
            panic!("expected an update call");
        };
        assert_eq!(id, JobId::from("65a1f0c2"));
        assert_eq!(payload.salary, None);
        assert_eq!(payload.status, JobStatus::Offered);
        assert_eq!(payload.remarks.as_deref(), Some("via referral"));
        assert_eq!(controller.editing_id(), None);
    }

    #[tokio::test]
    async fn test_invalid_submit_keeps_draft() {
        let mut controller = shell_with(vec![]).await;

        run_line(&mut controller, "set company Acme").await.unwrap();
        assert!(run_line(&mut controller, "submit").await.is_err());

        assert_eq!(controller.draft().company, "Acme");
        assert_eq!(controller.remote().calls(), vec![Call::List]);
    }

    #[tokio::test]
    async fn test_quit_ends_session() {
        let mut controller = shell_with(vec![]).await;
        assert!(matches!(run_line(&mut controller, "exit").await.unwrap(), Flow::Quit));
    }
}
