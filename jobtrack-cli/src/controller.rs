//! Tracker controller
//!
//! Owns the [`TrackerState`] and is the only place that combines it with the
//! remote collection. Every user action runs to completion here and reports
//! an [`ActionOutcome`]; remote failures are logged and swallowed at this
//! boundary so the store and the form session are never left half-updated.

use jobtrack_client::{ClientError, RemoteCollection};
use jobtrack_core::domain::job::{JobEntry, JobId};
use jobtrack_core::draft::{DraftError, DraftField, FormDraft};
use jobtrack_core::state::{Submission, TrackerState};
use jobtrack_core::store::EntryStore;
use jobtrack_core::view::Summary;
use tracing::{debug, error, info, warn};

use crate::confirm::ConfirmPort;

const DELETE_PROMPT: &str = "Are you sure you want to delete this job application?";

/// Result of one user action
#[derive(Debug)]
pub enum ActionOutcome {
    Created(JobId),
    Updated(JobId),
    Deleted(JobId),
    /// Store reloaded with this many entries
    Refreshed(usize),
    /// The user answered no to the confirmation prompt
    Declined,
    /// The draft failed local validation; nothing was sent
    Rejected(DraftError),
    /// The remote call failed; already logged
    Failed,
}

impl ActionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            ActionOutcome::Created(_)
                | ActionOutcome::Updated(_)
                | ActionOutcome::Deleted(_)
                | ActionOutcome::Refreshed(_)
        )
    }
}

pub struct TrackerController<R, C> {
    remote: R,
    confirm: C,
    state: TrackerState,
}

impl<R: RemoteCollection, C: ConfirmPort> TrackerController<R, C> {
    /// Build the controller and populate the store from `list()`
    ///
    /// A failed initial load is logged and leaves the store empty.
    pub async fn init(remote: R, confirm: C) -> Self {
        let mut controller = Self {
            remote,
            confirm,
            state: TrackerState::new(),
        };
        controller.refresh().await;
        controller
    }

    pub fn entries(&self) -> &EntryStore {
        &self.state.entries
    }

    pub fn draft(&self) -> &FormDraft {
        &self.state.draft
    }

    pub fn editing_id(&self) -> Option<&JobId> {
        self.state.editing_id.as_ref()
    }

    pub fn entry(&self, id: &JobId) -> Option<&JobEntry> {
        self.state.entries.get(id)
    }

    pub fn summary(&self) -> Summary {
        Summary::from_store(&self.state.entries)
    }

    #[cfg(test)]
    pub fn remote(&self) -> &R {
        &self.remote
    }

    // =============================================================================
    // Form Session
    // =============================================================================

    pub fn begin_create(&mut self) {
        self.state.begin_create();
    }

    /// Start editing `id`; false if it is not in the store
    pub fn begin_edit(&mut self, id: &JobId) -> bool {
        let found = self.state.begin_edit(id);
        if !found {
            warn!(%id, "Cannot edit unknown job");
        }
        found
    }

    pub fn update_field(&mut self, field: DraftField, value: impl Into<String>) -> Result<(), DraftError> {
        self.state.update_field(field, value)
    }

    pub fn cancel(&mut self) {
        self.state.cancel();
    }

    /// Send the current draft as a create or an update
    ///
    /// On success the store takes the server's entry and the session resets.
    /// On any failure the draft stays as it was so it can be resubmitted.
    pub async fn submit(&mut self) -> ActionOutcome {
        let submission = match self.state.prepare_submit() {
            Ok(submission) => submission,
            Err(err) => {
                warn!(error = %err, "Draft rejected");
                return ActionOutcome::Rejected(err);
            }
        };
        debug!(?submission, "Submitting payload");

        match submission {
            Submission::Create(payload) => match self.remote.create(&payload).await {
                Ok(entry) => {
                    let id = entry.id.clone();
                    self.state.apply_created(entry);
                    info!(%id, "Job created");
                    ActionOutcome::Created(id)
                }
                Err(err) => {
                    log_failure("create", &err);
                    ActionOutcome::Failed
                }
            },
            Submission::Update(id, payload) => match self.remote.update(&id, &payload).await {
                Ok(entry) => {
                    if !self.state.apply_updated(&id, entry) {
                        warn!(%id, "Updated job was no longer in the local list");
                    }
                    info!(%id, "Job updated");
                    ActionOutcome::Updated(id)
                }
                Err(err) => {
                    log_failure("update", &err);
                    ActionOutcome::Failed
                }
            },
        }
    }

    // =============================================================================
    // List Actions
    // =============================================================================

    /// Ask for confirmation, then delete `id` remotely and locally
    pub async fn delete(&mut self, id: &JobId) -> ActionOutcome {
        if !self.confirm.confirm(DELETE_PROMPT) {
            debug!(%id, "Delete declined");
            return ActionOutcome::Declined;
        }

        match self.remote.delete(id).await {
            Ok(()) => {
                self.state.apply_deleted(id);
                info!(%id, "Job deleted");
                ActionOutcome::Deleted(id.clone())
            }
            Err(err) => {
                log_failure("delete", &err);
                ActionOutcome::Failed
            }
        }
    }

    /// Reload the whole store from `list()`
    pub async fn refresh(&mut self) -> ActionOutcome {
        match self.remote.list().await {
            Ok(entries) => {
                let dropped = self.state.entries.load(entries);
                if dropped > 0 {
                    warn!(dropped, "List response contained duplicate ids");
                }
                let count = self.state.entries.len();
                debug!(count, "Fetched jobs");
                ActionOutcome::Refreshed(count)
            }
            Err(err) => {
                log_failure("list", &err);
                ActionOutcome::Failed
            }
        }
    }
}

fn log_failure(action: &str, err: &ClientError) {
    match (err.status(), err.body()) {
        (Some(status), body) => error!(
            action,
            status,
            body = body.unwrap_or_default(),
            "Request failed: {err}"
        ),
        (None, Some(body)) => error!(action, body, "Request failed: {err}"),
        (None, None) => error!(action, "Request failed: {err}"),
    }
}
