//! Job entry domain types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Server-assigned identifier of a job entry
///
/// Opaque to the client: it is only compared, displayed and echoed back
/// in request paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for JobId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for JobId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A job application as persisted by the tracker API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobEntry {
    pub id: JobId,
    pub company: String,
    pub position: String,
    #[serde(default)]
    pub status: JobStatus,
    /// ISO-8601 instant exactly as the server returned it
    pub date_applied: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl JobEntry {
    /// Calendar-date portion of `date_applied` (everything before the `T`)
    pub fn date_portion(&self) -> &str {
        self.date_applied
            .split_once('T')
            .map(|(date, _)| date)
            .unwrap_or(&self.date_applied)
    }

    /// The application date, if the server value carries a parseable date
    pub fn applied_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date_portion(), "%Y-%m-%d").ok()
    }
}

/// Application status
///
/// Written lowercase; read case-insensitively, since older entries were
/// stored exactly as typed (`Applied`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum JobStatus {
    #[default]
    Applied,
    Interviewing,
    Offered,
    Rejected,
}

impl JobStatus {
    pub const ALL: [JobStatus; 4] = [
        JobStatus::Applied,
        JobStatus::Interviewing,
        JobStatus::Offered,
        JobStatus::Rejected,
    ];

    /// Lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Applied => "applied",
            JobStatus::Interviewing => "interviewing",
            JobStatus::Offered => "offered",
            JobStatus::Rejected => "rejected",
        }
    }

    /// Capitalized name used in forms
    pub fn label(&self) -> &'static str {
        match self {
            JobStatus::Applied => "Applied",
            JobStatus::Interviewing => "Interviewing",
            JobStatus::Offered => "Offered",
            JobStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a status name is not one of the four known values
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status '{0}' (expected applied, interviewing, offered or rejected)")]
pub struct UnknownStatus(pub String);

impl FromStr for JobStatus {
    type Err = UnknownStatus;

    /// Case-insensitive: forms submit `Applied`, the API speaks `applied`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        JobStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

impl TryFrom<String> for JobStatus {
    type Error = UnknownStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
