//! Tracker state container
//!
//! Holds the three pieces of client state (entry store, form draft and
//! session pointer) and the transitions between them. Nothing here talks to
//! the network: callers ask for a [`Submission`], send it, and feed the
//! server's answer back through `apply_created` / `apply_updated` /
//! `apply_deleted`.

use crate::domain::job::{JobEntry, JobId};
use crate::draft::{DraftError, DraftField, FormDraft};
use crate::dto::job::JobPayload;
use crate::store::EntryStore;

/// Request derived from the current draft and session pointer
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Create(JobPayload),
    Update(JobId, JobPayload),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackerState {
    pub entries: EntryStore,
    pub draft: FormDraft,
    /// `None` in create mode, otherwise the id of the entry being edited
    pub editing_id: Option<JobId>,
}

impl TrackerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Start a fresh create session
    pub fn begin_create(&mut self) {
        self.reset_session();
    }

    /// Seed the draft from the stored entry `id`
    ///
    /// Returns false and changes nothing if the entry is not in the store.
    pub fn begin_edit(&mut self, id: &JobId) -> bool {
        let Some(entry) = self.entries.get(id) else {
            return false;
        };
        self.draft = FormDraft::from_entry(entry);
        self.editing_id = Some(id.clone());
        true
    }

    pub fn update_field(&mut self, field: DraftField, value: impl Into<String>) -> Result<(), DraftError> {
        self.draft = self.draft.with_field(field, value)?;
        Ok(())
    }

    pub fn cancel(&mut self) {
        self.reset_session();
    }

    /// Build the request the current session would submit
    pub fn prepare_submit(&self) -> Result<Submission, DraftError> {
        let payload = self.draft.to_payload()?;
        Ok(match &self.editing_id {
            Some(id) => Submission::Update(id.clone(), payload),
            None => Submission::Create(payload),
        })
    }

    /// Record a successful create and reset the session
    pub fn apply_created(&mut self, entry: JobEntry) {
        self.entries.insert(entry);
        self.reset_session();
    }

    /// Record a successful update with the server's representation and reset the session
    ///
    /// Returns false if `id` was no longer in the store.
    pub fn apply_updated(&mut self, id: &JobId, entry: JobEntry) -> bool {
        let replaced = self.entries.replace(id, entry);
        self.reset_session();
        replaced
    }

    /// Record a successful delete; the form session is untouched
    pub fn apply_deleted(&mut self, id: &JobId) -> Option<JobEntry> {
        self.entries.remove(id)
    }

    fn reset_session(&mut self) {
        self.draft = FormDraft::default();
        self.editing_id = None;
    }
}
