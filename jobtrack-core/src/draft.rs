//! Form drafts
//!
//! A [`FormDraft`] is the editable, text-based copy of a job entry. It keeps
//! salary as raw text and the application date without a time component,
//! and only becomes a [`JobPayload`] when submitted.

use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::domain::job::{JobEntry, JobStatus, UnknownStatus};
use crate::dto::job::{JobPayload, widen_date};

/// Errors raised while editing or submitting a draft
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DraftError {
    #[error("unknown field '{0}'")]
    UnknownField(String),

    #[error(transparent)]
    InvalidStatus(#[from] UnknownStatus),

    #[error("{0} is required")]
    MissingField(DraftField),

    #[error("invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("invalid salary '{0}'")]
    InvalidSalary(String),

    #[error("salary must not be negative")]
    NegativeSalary,

    #[error("invalid URL '{0}' (must start with http:// or https://)")]
    InvalidUrl(String),
}

/// Editable draft fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Company,
    Position,
    Status,
    DateApplied,
    Salary,
    JobUrl,
    Remarks,
}

impl DraftField {
    pub const ALL: [DraftField; 7] = [
        DraftField::Company,
        DraftField::Position,
        DraftField::Status,
        DraftField::DateApplied,
        DraftField::Salary,
        DraftField::JobUrl,
        DraftField::Remarks,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DraftField::Company => "company",
            DraftField::Position => "position",
            DraftField::Status => "status",
            DraftField::DateApplied => "dateApplied",
            DraftField::Salary => "salary",
            DraftField::JobUrl => "jobUrl",
            DraftField::Remarks => "remarks",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DraftField {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "company" => Ok(DraftField::Company),
            "position" => Ok(DraftField::Position),
            "status" => Ok(DraftField::Status),
            "dateApplied" | "date_applied" | "date" => Ok(DraftField::DateApplied),
            "salary" => Ok(DraftField::Salary),
            "jobUrl" | "job_url" | "url" => Ok(DraftField::JobUrl),
            "remarks" => Ok(DraftField::Remarks),
            other => Err(DraftError::UnknownField(other.to_string())),
        }
    }
}

/// Working copy of a job entry being created or edited
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormDraft {
    pub company: String,
    pub position: String,
    pub status: JobStatus,
    /// `YYYY-MM-DD`, no time component
    pub date_applied: String,
    /// Raw text; empty means no salary
    pub salary: String,
    pub job_url: String,
    pub remarks: String,
}

impl FormDraft {
    /// Seed a draft from an existing entry
    pub fn from_entry(entry: &JobEntry) -> Self {
        Self {
            company: entry.company.clone(),
            position: entry.position.clone(),
            status: entry.status,
            date_applied: entry.date_portion().to_string(),
            salary: entry.salary.map(|s| s.to_string()).unwrap_or_default(),
            job_url: entry.job_url.clone().unwrap_or_default(),
            remarks: entry.remarks.clone().unwrap_or_default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn get(&self, field: DraftField) -> String {
        match field {
            DraftField::Company => self.company.clone(),
            DraftField::Position => self.position.clone(),
            DraftField::Status => self.status.to_string(),
            DraftField::DateApplied => self.date_applied.clone(),
            DraftField::Salary => self.salary.clone(),
            DraftField::JobUrl => self.job_url.clone(),
            DraftField::Remarks => self.remarks.clone(),
        }
    }

    /// Return a copy of this draft with one field replaced
    ///
    /// Only the status is interpreted here; every other field is stored as
    /// typed and checked on submit.
    pub fn with_field(&self, field: DraftField, value: impl Into<String>) -> Result<Self, DraftError> {
        let value = value.into();
        let mut next = self.clone();
        match field {
            DraftField::Company => next.company = value,
            DraftField::Position => next.position = value,
            DraftField::Status => next.status = value.parse()?,
            DraftField::DateApplied => next.date_applied = value,
            DraftField::Salary => next.salary = value,
            DraftField::JobUrl => next.job_url = value,
            DraftField::Remarks => next.remarks = value,
        }
        Ok(next)
    }

    /// Check the input constraints without building a payload
    pub fn validate(&self) -> Result<(), DraftError> {
        self.to_payload().map(|_| ())
    }

    /// Map the draft to a create/update request body
    ///
    /// Empty optional fields become absent, and the date is widened to UTC
    /// midnight of the given day.
    pub fn to_payload(&self) -> Result<JobPayload, DraftError> {
        require(DraftField::Company, &self.company)?;
        require(DraftField::Position, &self.position)?;
        require(DraftField::DateApplied, &self.date_applied)?;

        let date = NaiveDate::parse_from_str(self.date_applied.trim(), "%Y-%m-%d")
            .map_err(|_| DraftError::InvalidDate(self.date_applied.clone()))?;

        Ok(JobPayload {
            company: self.company.clone(),
            position: self.position.clone(),
            status: self.status,
            date_applied: widen_date(date),
            salary: parse_salary(&self.salary)?,
            job_url: parse_url(&self.job_url)?,
            remarks: non_empty(&self.remarks),
        })
    }
}

fn require(field: DraftField, value: &str) -> Result<(), DraftError> {
    if value.trim().is_empty() {
        return Err(DraftError::MissingField(field));
    }
    Ok(())
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn parse_salary(raw: &str) -> Result<Option<f64>, DraftError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let amount: f64 = trimmed
        .parse()
        .map_err(|_| DraftError::InvalidSalary(raw.to_string()))?;
    if !amount.is_finite() {
        return Err(DraftError::InvalidSalary(raw.to_string()));
    }
    if amount < 0.0 {
        return Err(DraftError::NegativeSalary);
    }
    Ok(Some(amount))
}

fn parse_url(raw: &str) -> Result<Option<String>, DraftError> {
    if raw.is_empty() {
        return Ok(None);
    }

    let rest = raw
        .strip_prefix("https://")
        .or_else(|| raw.strip_prefix("http://"));
    match rest {
        Some(rest) if !rest.is_empty() => Ok(Some(raw.to_string())),
        _ => Err(DraftError::InvalidUrl(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::job::JobId;

    fn acme_draft() -> FormDraft {
        FormDraft {
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            status: JobStatus::Applied,
            date_applied: "2024-01-15".to_string(),
            ..FormDraft::default()
        }
    }

    fn stored_entry() -> JobEntry {
        JobEntry {
            id: JobId::from("65a1f0c2e4b0a1b2c3d4e5f6"),
            company: "Globex".to_string(),
            position: "SRE".to_string(),
            status: JobStatus::Interviewing,
            date_applied: "2024-03-02T00:00:00".to_string(),
            salary: Some(98000.0),
            job_url: Some("https://globex.example/careers/7".to_string()),
            remarks: None,
        }
    }

    #[test]
    fn test_empty_optionals_map_to_absent() {
        let payload = acme_draft().to_payload().unwrap();

        assert_eq!(payload.salary, None);
        assert_eq!(payload.job_url, None);
        assert_eq!(payload.remarks, None);

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "company": "Acme",
                "position": "Engineer",
                "status": "applied",
                "date_applied": "2024-01-15T00:00:00.000Z",
            })
        );
    }

    #[test]
    fn test_zero_salary_is_kept() {
        let draft = acme_draft().with_field(DraftField::Salary, "0").unwrap();
        assert_eq!(draft.to_payload().unwrap().salary, Some(0.0));
    }

    #[test]
    fn test_from_entry_round_trips_to_payload() {
        let entry = stored_entry();
        let draft = FormDraft::from_entry(&entry);

        assert_eq!(draft.date_applied, "2024-03-02");
        assert_eq!(draft.salary, "98000");
        assert_eq!(draft.remarks, "");

        let payload = draft.to_payload().unwrap();
        assert_eq!(payload.company, entry.company);
        assert_eq!(payload.position, entry.position);
        assert_eq!(payload.status, entry.status);
        assert_eq!(payload.salary, entry.salary);
        assert_eq!(payload.job_url, entry.job_url);
        assert_eq!(payload.remarks, entry.remarks);
        assert_eq!(
            crate::dto::job::iso_instant::format(&payload.date_applied),
            "2024-03-02T00:00:00.000Z"
        );
    }

    #[test]
    fn test_with_field_leaves_original_untouched() {
        let draft = acme_draft();
        let next = draft.with_field(DraftField::Company, "Initech").unwrap();

        assert_eq!(draft.company, "Acme");
        assert_eq!(next.company, "Initech");
        assert_eq!(next.position, draft.position);
    }

    #[test]
    fn test_status_field_is_parsed() {
        let draft = acme_draft().with_field(DraftField::Status, "Offered").unwrap();
        assert_eq!(draft.status, JobStatus::Offered);

        let err = acme_draft().with_field(DraftField::Status, "ghosted").unwrap_err();
        assert!(matches!(err, DraftError::InvalidStatus(_)));
    }

    #[test]
    fn test_field_names() {
        assert_eq!("dateApplied".parse::<DraftField>(), Ok(DraftField::DateApplied));
        assert_eq!("job_url".parse::<DraftField>(), Ok(DraftField::JobUrl));
        assert!(matches!(
            "id".parse::<DraftField>(),
            Err(DraftError::UnknownField(_))
        ));
        for field in DraftField::ALL {
            assert_eq!(field.name().parse::<DraftField>(), Ok(field));
        }
    }

    #[test]
    fn test_required_fields() {
        let draft = acme_draft().with_field(DraftField::Company, "  ").unwrap();
        assert_eq!(
            draft.validate(),
            Err(DraftError::MissingField(DraftField::Company))
        );

        let draft = acme_draft().with_field(DraftField::DateApplied, "").unwrap();
        assert_eq!(
            draft.validate(),
            Err(DraftError::MissingField(DraftField::DateApplied))
        );

        let draft = acme_draft().with_field(DraftField::DateApplied, "15/01/2024").unwrap();
        assert!(matches!(draft.validate(), Err(DraftError::InvalidDate(_))));
    }

    #[test]
    fn test_salary_constraints() {
        let draft = acme_draft().with_field(DraftField::Salary, "-1").unwrap();
        assert_eq!(draft.validate(), Err(DraftError::NegativeSalary));

        let draft = acme_draft().with_field(DraftField::Salary, "lots").unwrap();
        assert!(matches!(draft.validate(), Err(DraftError::InvalidSalary(_))));

        let draft = acme_draft().with_field(DraftField::Salary, "5500.75").unwrap();
        assert_eq!(draft.to_payload().unwrap().salary, Some(5500.75));
    }

    #[test]
    fn test_url_pattern() {
        let draft = acme_draft().with_field(DraftField::JobUrl, "ftp://acme.example").unwrap();
        assert!(matches!(draft.validate(), Err(DraftError::InvalidUrl(_))));

        let draft = acme_draft().with_field(DraftField::JobUrl, "https://").unwrap();
        assert!(matches!(draft.validate(), Err(DraftError::InvalidUrl(_))));

        let draft = acme_draft().with_field(DraftField::JobUrl, "http://acme.example/1").unwrap();
        assert_eq!(
            draft.to_payload().unwrap().job_url.as_deref(),
            Some("http://acme.example/1")
        );
    }

    #[test]
    fn test_default_draft_is_empty() {
        assert!(FormDraft::default().is_empty());
        assert!(!acme_draft().is_empty());
        assert_eq!(FormDraft::default().status, JobStatus::Applied);
    }
}
