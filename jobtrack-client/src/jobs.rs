//! Job-related API endpoints

use jobtrack_core::domain::job::{JobEntry, JobId};
use jobtrack_core::dto::job::JobPayload;
use serde::Deserialize;
use tracing::debug;

use crate::TrackerClient;
use crate::error::Result;

/// Body of `GET /`
#[derive(Debug, Deserialize)]
struct Welcome {
    message: String,
}

impl TrackerClient {
    // =============================================================================
    // Job Collection
    // =============================================================================

    /// List every persisted job entry, in server order
    pub async fn list_jobs(&self) -> Result<Vec<JobEntry>> {
        let url = format!("{}/jobs/", self.base_url);
        debug!(%url, "GET");
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Create a job entry
    ///
    /// # Returns
    /// The persisted entry, carrying its server-assigned id
    ///
    /// # Example
    /// ```no_run
    /// # use jobtrack_client::TrackerClient;
    /// # use jobtrack_core::draft::FormDraft;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = TrackerClient::new("http://localhost:8000");
    /// let draft = FormDraft {
    ///     company: "Acme".to_string(),
    ///     position: "Engineer".to_string(),
    ///     date_applied: "2024-01-15".to_string(),
    ///     ..FormDraft::default()
    /// };
    /// let job = client.create_job(&draft.to_payload()?).await?;
    /// println!("created {}", job.id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_job(&self, payload: &JobPayload) -> Result<JobEntry> {
        let url = format!("{}/jobs/", self.base_url);
        debug!(%url, ?payload, "POST");
        let response = self.client.post(&url).json(payload).send().await?;

        self.handle_response(response).await
    }

    /// Replace the fields of an existing job entry
    ///
    /// # Returns
    /// The entry as persisted after the update
    pub async fn update_job(&self, id: &JobId, payload: &JobPayload) -> Result<JobEntry> {
        let url = format!("{}/jobs/{}", self.base_url, id);
        debug!(%url, ?payload, "PUT");
        let response = self.client.put(&url).json(payload).send().await?;

        self.handle_response(response).await
    }

    /// Delete a job entry
    pub async fn delete_job(&self, id: &JobId) -> Result<()> {
        let url = format!("{}/jobs/{}", self.base_url, id);
        debug!(%url, "DELETE");
        let response = self.client.delete(&url).send().await?;

        self.handle_empty_response(response).await
    }

    // =============================================================================
    // Connectivity
    // =============================================================================

    /// Fetch the API's welcome message
    pub async fn welcome(&self) -> Result<String> {
        let url = format!("{}/", self.base_url);
        let response = self.client.get(&url).send().await?;

        let welcome: Welcome = self.handle_response(response).await?;
        Ok(welcome.message)
    }
}
