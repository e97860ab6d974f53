//! In-memory remote collection for controller and command tests

use async_trait::async_trait;
use jobtrack_client::{ClientError, RemoteCollection, Result};
use jobtrack_core::domain::job::{JobEntry, JobId, JobStatus};
use jobtrack_core::dto::job::{JobPayload, iso_instant};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::confirm::ConfirmPort;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List,
    Create(JobPayload),
    Update(JobId, JobPayload),
    Delete(JobId),
}

/// Ids are `job-<n>`, companies come back uppercased
#[derive(Default)]
pub struct FakeRemote {
    jobs: Mutex<Vec<JobEntry>>,
    calls: Mutex<Vec<Call>>,
    fail: AtomicBool,
}

impl FakeRemote {
    pub fn with_jobs(jobs: Vec<JobEntry>) -> Self {
        Self {
            jobs: Mutex::new(jobs),
            ..Self::default()
        }
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Add a job on the server side only, as another client would
    pub fn push_job(&self, entry: JobEntry) {
        self.jobs.lock().unwrap().push(entry);
    }

    /// The most recent create or update payload
    pub fn last_payload(&self) -> Option<JobPayload> {
        self.calls().into_iter().rev().find_map(|call| match call {
            Call::Create(payload) | Call::Update(_, payload) => Some(payload),
            _ => None,
        })
    }

    fn record(&self, call: Call) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        if self.fail.load(Ordering::SeqCst) {
            return Err(ClientError::api_error(500, "Error creating job: boom"));
        }
        Ok(())
    }

    fn persist(id: JobId, payload: &JobPayload) -> JobEntry {
        JobEntry {
            id,
            company: payload.company.to_uppercase(),
            position: payload.position.clone(),
            status: payload.status,
            date_applied: iso_instant::format(&payload.date_applied),
            salary: payload.salary,
            job_url: payload.job_url.clone(),
            remarks: payload.remarks.clone(),
        }
    }
}

#[async_trait]
impl RemoteCollection for FakeRemote {
    async fn list(&self) -> Result<Vec<JobEntry>> {
        self.record(Call::List)?;
        Ok(self.jobs.lock().unwrap().clone())
    }

    async fn create(&self, payload: &JobPayload) -> Result<JobEntry> {
        self.record(Call::Create(payload.clone()))?;
        let mut jobs = self.jobs.lock().unwrap();
        let entry = Self::persist(JobId::new(format!("job-{}", jobs.len() + 1)), payload);
        jobs.push(entry.clone());
        Ok(entry)
    }

    async fn update(&self, id: &JobId, payload: &JobPayload) -> Result<JobEntry> {
        self.record(Call::Update(id.clone(), payload.clone()))?;
        let mut jobs = self.jobs.lock().unwrap();
        let Some(slot) = jobs.iter_mut().find(|j| &j.id == id) else {
            return Err(ClientError::api_error(404, r#"{"detail":"Job not found"}"#));
        };
        *slot = Self::persist(id.clone(), payload);
        Ok(slot.clone())
    }

    async fn delete(&self, id: &JobId) -> Result<()> {
        self.record(Call::Delete(id.clone()))?;
        self.jobs.lock().unwrap().retain(|j| &j.id != id);
        Ok(())
    }
}

pub struct NeverConfirm;

impl ConfirmPort for NeverConfirm {
    fn confirm(&mut self, _prompt: &str) -> bool {
        false
    }
}

pub fn stored(id: &str, company: &str) -> JobEntry {
    JobEntry {
        id: JobId::from(id),
        company: company.to_string(),
        position: "Engineer".to_string(),
        status: JobStatus::Applied,
        date_applied: "2024-01-15T00:00:00".to_string(),
        salary: Some(6000.0),
        job_url: Some("https://acme.example/jobs/1".to_string()),
        remarks: Some("via referral".to_string()),
    }
}
