//! Entry store
//!
//! In-memory, ordered cache of the entries last returned by the tracker API.
//! Ids are unique within the store; order is insertion order and only
//! matters for display.

use crate::domain::job::{JobEntry, JobId};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryStore {
    entries: Vec<JobEntry>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection with a list response
    ///
    /// Later duplicates of an id already seen are dropped. Returns how many
    /// were dropped.
    pub fn load(&mut self, entries: Vec<JobEntry>) -> usize {
        let received = entries.len();
        let mut kept: Vec<JobEntry> = Vec::with_capacity(received);
        for entry in entries {
            if !kept.iter().any(|e| e.id == entry.id) {
                kept.push(entry);
            }
        }
        let dropped = received - kept.len();
        self.entries = kept;
        dropped
    }

    /// Append a newly created entry
    ///
    /// An entry whose id is already present replaces the existing one in place.
    pub fn insert(&mut self, entry: JobEntry) {
        match self.position(&entry.id) {
            Some(idx) => self.entries[idx] = entry,
            None => self.entries.push(entry),
        }
    }

    /// Substitute the entry matching `id`; returns false if no entry matched
    pub fn replace(&mut self, id: &JobId, entry: JobEntry) -> bool {
        match self.position(id) {
            Some(idx) => {
                self.entries[idx] = entry;
                true
            }
            None => false,
        }
    }

    /// Remove the entry matching `id`, if any
    pub fn remove(&mut self, id: &JobId) -> Option<JobEntry> {
        self.position(id).map(|idx| self.entries.remove(idx))
    }

    pub fn get(&self, id: &JobId) -> Option<&JobEntry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    pub fn contains(&self, id: &JobId) -> bool {
        self.position(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &JobEntry> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[JobEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, id: &JobId) -> Option<usize> {
        self.entries.iter().position(|e| &e.id == id)
    }
}
