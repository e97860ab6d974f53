//! Job command handlers
//!
//! One-shot versions of the tracker actions: each handler runs a single
//! action through the controller and prints the result.

use anyhow::{Context, Result};
use clap::Args;
use jobtrack_client::RemoteCollection;
use jobtrack_core::draft::DraftField;
use jobtrack_core::view::JobDetail;

use super::report;
use crate::confirm::ConfirmPort;
use crate::controller::{ActionOutcome, TrackerController};
use crate::id_resolver::resolve_job_id;
use crate::render::{print_job_details, print_job_table, print_summary};

/// Draft fields settable from the command line
///
/// Pass an empty string (e.g. `--salary ""`) to clear an optional field.
#[derive(Args, Debug, Default)]
pub struct DraftArgs {
    /// Company name
    #[arg(long)]
    pub company: Option<String>,

    /// Position title
    #[arg(long)]
    pub position: Option<String>,

    /// applied, interviewing, offered or rejected
    #[arg(long)]
    pub status: Option<String>,

    /// Application date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// Salary amount
    #[arg(long)]
    pub salary: Option<String>,

    /// Posting URL (http:// or https://)
    #[arg(long)]
    pub url: Option<String>,

    /// Free-form remarks
    #[arg(long)]
    pub remarks: Option<String>,
}

impl DraftArgs {
    fn values(&self) -> [(DraftField, Option<&String>); 7] {
        [
            (DraftField::Company, self.company.as_ref()),
            (DraftField::Position, self.position.as_ref()),
            (DraftField::Status, self.status.as_ref()),
            (DraftField::DateApplied, self.date.as_ref()),
            (DraftField::Salary, self.salary.as_ref()),
            (DraftField::JobUrl, self.url.as_ref()),
            (DraftField::Remarks, self.remarks.as_ref()),
        ]
    }

    /// Copy every given value into the controller's draft
    pub fn apply<R: RemoteCollection, C: ConfirmPort>(
        &self,
        controller: &mut TrackerController<R, C>,
    ) -> Result<()> {
        for (field, value) in self.values() {
            if let Some(value) = value {
                controller
                    .update_field(field, value.as_str())
                    .with_context(|| format!("Invalid value for {field}"))?;
            }
        }
        Ok(())
    }
}

pub fn list_jobs<R: RemoteCollection, C: ConfirmPort>(
    controller: &TrackerController<R, C>,
    json: bool,
) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(controller.entries().as_slice())?;
        println!("{out}");
    } else {
        print_job_table(controller.entries());
    }
    Ok(())
}

pub fn show_job<R: RemoteCollection, C: ConfirmPort>(
    controller: &TrackerController<R, C>,
    id: &str,
    json: bool,
    currency: &str,
) -> Result<()> {
    let id = resolve_job_id(controller.entries(), id)?;
    let entry = controller
        .entry(&id)
        .with_context(|| format!("Job {id} disappeared from the list"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(entry)?);
    } else {
        print_job_details(&JobDetail::new(entry, currency));
    }
    Ok(())
}

pub async fn add_job<R: RemoteCollection, C: ConfirmPort>(
    controller: &mut TrackerController<R, C>,
    fields: &DraftArgs,
    currency: &str,
) -> Result<()> {
    controller.begin_create();
    fields.apply(controller)?;

    let outcome = controller.submit().await;
    print_result(controller, outcome, currency)
}

pub async fn edit_job<R: RemoteCollection, C: ConfirmPort>(
    controller: &mut TrackerController<R, C>,
    id: &str,
    fields: &DraftArgs,
    currency: &str,
) -> Result<()> {
    let id = resolve_job_id(controller.entries(), id)?;
    controller.begin_edit(&id);
    fields.apply(controller)?;

    let outcome = controller.submit().await;
    print_result(controller, outcome, currency)
}

pub async fn delete_job<R: RemoteCollection, C: ConfirmPort>(
    controller: &mut TrackerController<R, C>,
    id: &str,
) -> Result<()> {
    let id = resolve_job_id(controller.entries(), id)?;
    report(controller.delete(&id).await)
}

pub fn summary<R: RemoteCollection, C: ConfirmPort>(
    controller: &TrackerController<R, C>,
) -> Result<()> {
    print_summary(&controller.summary());
    Ok(())
}

/// Report the outcome and, on success, show the stored entry
fn print_result<R: RemoteCollection, C: ConfirmPort>(
    controller: &TrackerController<R, C>,
    outcome: ActionOutcome,
    currency: &str,
) -> Result<()> {
    let stored = match &outcome {
        ActionOutcome::Created(id) | ActionOutcome::Updated(id) => controller.entry(id).cloned(),
        _ => None,
    };
    report(outcome)?;

    if let Some(entry) = stored {
        println!();
        print_job_details(&JobDetail::new(&entry, currency));
    }
    Ok(())
}
