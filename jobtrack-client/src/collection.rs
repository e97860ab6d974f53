//! Remote collection abstraction
//!
//! The four collection operations the tracker controller depends on, as a
//! trait so the controller can run against an in-memory fake in tests.

use async_trait::async_trait;
use jobtrack_core::domain::job::{JobEntry, JobId};
use jobtrack_core::dto::job::JobPayload;

use crate::TrackerClient;
use crate::error::Result;

/// Stateless access to the authoritative job collection
#[async_trait]
pub trait RemoteCollection: Send + Sync {
    /// All persisted entries, in server order
    async fn list(&self) -> Result<Vec<JobEntry>>;

    /// Persist a new entry; returns it with its server-assigned id
    async fn create(&self, payload: &JobPayload) -> Result<JobEntry>;

    /// Overwrite entry `id`; returns the entry as persisted
    async fn update(&self, id: &JobId, payload: &JobPayload) -> Result<JobEntry>;

    /// Delete entry `id`
    async fn delete(&self, id: &JobId) -> Result<()>;
}

#[async_trait]
impl RemoteCollection for TrackerClient {
    async fn list(&self) -> Result<Vec<JobEntry>> {
        self.list_jobs().await
    }

    async fn create(&self, payload: &JobPayload) -> Result<JobEntry> {
        self.create_job(payload).await
    }

    async fn update(&self, id: &JobId, payload: &JobPayload) -> Result<JobEntry> {
        self.update_job(id, payload).await
    }

    async fn delete(&self, id: &JobId) -> Result<()> {
        self.delete_job(id).await
    }
}
