//! ID resolver module
//!
//! Lets users type a short, unambiguous prefix instead of a full job id.
//! Resolution runs against the already-loaded entry store, never the network.

use anyhow::{Result, anyhow};
use jobtrack_core::domain::job::JobId;
use jobtrack_core::store::EntryStore;

/// Resolve a job ID or prefix to a stored job's full ID
///
/// An exact match always wins; otherwise the input is matched
/// case-insensitively as a prefix.
///
/// # Errors
/// Returns an error if:
/// - The input is empty
/// - No job matches the prefix
/// - Multiple jobs match the prefix (ambiguous)
pub fn resolve_job_id(store: &EntryStore, input: &str) -> Result<JobId> {
    let input = input.trim();
    if input.is_empty() {
        return Err(anyhow!("Job ID cannot be empty"));
    }

    let exact = JobId::from(input);
    if store.contains(&exact) {
        return Ok(exact);
    }

    let prefix = input.to_lowercase();
    let matches: Vec<&JobId> = store
        .iter()
        .map(|job| &job.id)
        .filter(|id| id.as_str().to_lowercase().starts_with(&prefix))
        .collect();

    match matches.as_slice() {
        [] => Err(anyhow!("No job found with ID starting with '{}'", input)),
        [id] => Ok((*id).clone()),
        many => {
            let ids: Vec<&str> = many.iter().map(|id| id.as_str()).collect();
            Err(anyhow!(
                "Ambiguous prefix '{}' matches multiple jobs: {}",
                input,
                ids.join(", ")
            ))
        }
    }
}
