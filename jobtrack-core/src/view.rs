//! Presentation view models
//!
//! Read-only projections of stored entries. Nothing here mutates the entry
//! store or the form session.

use crate::domain::job::{JobEntry, JobId, JobStatus};
use crate::store::EntryStore;

pub const NOT_AVAILABLE: &str = "N/A";

/// Everything the detail overlay shows for one entry
#[derive(Debug, Clone, PartialEq)]
pub struct JobDetail {
    pub id: JobId,
    pub company: String,
    pub position: String,
    pub status: JobStatus,
    pub salary: String,
    pub date_applied: String,
    pub job_url: String,
    pub remarks: String,
}

impl JobDetail {
    pub fn new(entry: &JobEntry, currency: &str) -> Self {
        Self {
            id: entry.id.clone(),
            company: entry.company.clone(),
            position: entry.position.clone(),
            status: entry.status,
            salary: entry
                .salary
                .map(|amount| format_salary(amount, currency))
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            date_applied: entry.date_portion().to_string(),
            job_url: or_not_available(entry.job_url.as_deref()),
            remarks: or_not_available(entry.remarks.as_deref()),
        }
    }
}

fn or_not_available(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// `RM75,000`, `RM1,234.5`: currency prefix, thousands grouping, at most
/// three fraction digits
pub fn format_salary(amount: f64, currency: &str) -> String {
    format!("{currency}{}", group_thousands(amount))
}

fn group_thousands(amount: f64) -> String {
    let text = format!("{:.3}", amount.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit);
    }

    let sign = if amount < 0.0 && (grouped != "0" || !frac_part.is_empty()) {
        "-"
    } else {
        ""
    };
    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}

/// Application counts, in total and per status
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total: usize,
    pub by_status: Vec<(JobStatus, usize)>,
}

impl Summary {
    pub fn from_store(store: &EntryStore) -> Self {
        let by_status = JobStatus::ALL
            .into_iter()
            .map(|status| (status, store.iter().filter(|e| e.status == status).count()))
            .collect();
        Self {
            total: store.len(),
            by_status,
        }
    }

    pub fn count(&self, status: JobStatus) -> usize {
        self.by_status
            .iter()
            .find(|(s, _)| *s == status)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }
}
