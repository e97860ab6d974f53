//! Core domain types
//!
//! These types mirror the entries persisted by the tracker API. The client
//! never mints them itself; every `JobEntry` it holds came back from a
//! list, create or update response.

pub mod job;
