//! Terminal rendering
//!
//! Read-only printing of the entry store, the detail overlay, the summary
//! and the current draft.

use colored::*;
use jobtrack_core::domain::job::{JobId, JobStatus};
use jobtrack_core::draft::{DraftField, FormDraft};
use jobtrack_core::store::EntryStore;
use jobtrack_core::view::{JobDetail, NOT_AVAILABLE, Summary};

/// Characters of the id shown in the table
const SHORT_ID_LEN: usize = 8;

/// Print the job table, one row per stored entry
pub fn print_job_table(store: &EntryStore) {
    if store.is_empty() {
        println!("{}", "No jobs added yet.".yellow());
        return;
    }

    println!(
        "{}",
        format!(
            "{:<10} {:<20} {:<20} {:<14} {:<12} {}",
            "ID", "Company", "Position", "Status", "Applied", "Link"
        )
        .bold()
    );
    println!("{}", "─".repeat(84).dimmed());

    for job in store.iter() {
        let status = format!("{:<14}", job.status.as_str());
        let link = match job.job_url.as_deref() {
            Some(url) if !url.is_empty() => url.underline().to_string(),
            _ => NOT_AVAILABLE.dimmed().to_string(),
        };
        println!(
            "{} {:<20.20} {:<20.20} {} {:<12} {}",
            format!("{:<10}", short_id(&job.id)).cyan(),
            job.company,
            job.position,
            colorize_status(job.status, &status),
            job.date_portion(),
            link
        );
    }

    println!();
    println!("{}", format!("{} job(s)", store.len()).dimmed());
}

/// Print the detail overlay for one entry
pub fn print_job_details(detail: &JobDetail) {
    println!("{}", "Job Details:".bold());
    println!("  ID:           {}", detail.id.to_string().cyan());
    println!("  Company:      {}", detail.company);
    println!("  Position:     {}", detail.position);
    println!(
        "  Status:       {}",
        colorize_status(detail.status, detail.status.as_str())
    );
    println!("  Salary:       {}", detail.salary);
    println!("  Date Applied: {}", detail.date_applied);
    println!("  Job URL:      {}", detail.job_url);
    println!("  Remarks:      {}", detail.remarks);
}

pub fn print_summary(summary: &Summary) {
    println!(
        "{}",
        format!("Total applications: {}", summary.total).bold()
    );
    for (status, count) in &summary.by_status {
        let label = format!("{:<14}", status.label());
        println!("  {} {}", colorize_status(*status, &label), count);
    }
}

/// Print the draft and which mode the form session is in
pub fn print_draft(draft: &FormDraft, editing: Option<&JobId>) {
    match editing {
        Some(id) => println!("{} {}", "Editing job".bold(), id.to_string().cyan()),
        None => println!("{}", "New job".bold()),
    }
    for field in DraftField::ALL {
        let value = draft.get(field);
        let shown = if value.is_empty() {
            "(empty)".dimmed().to_string()
        } else {
            value
        };
        println!("  {:<12} {}", field.name(), shown);
    }
}

pub fn short_id(id: &JobId) -> &str {
    let s = id.as_str();
    match s.char_indices().nth(SHORT_ID_LEN) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

fn colorize_status(status: JobStatus, text: &str) -> ColoredString {
    match status {
        JobStatus::Applied => text.blue(),
        JobStatus::Interviewing => text.yellow(),
        JobStatus::Offered => text.green(),
        JobStatus::Rejected => text.red(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_id() {
        assert_eq!(short_id(&JobId::from("65a1f0c2e4b0a1b2c3d4e5f6")), "65a1f0c2");
        assert_eq!(short_id(&JobId::from("abc")), "abc");
    }
}
