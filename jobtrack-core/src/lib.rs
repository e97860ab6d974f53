//! Jobtrack Core
//!
//! Core types and client-side state for the job application tracker.
//!
//! This crate contains:
//! - Domain types: the server-owned job entry and its status
//! - DTOs: the create/update payload sent to the tracker API
//! - Form drafts, the entry store and the tracker state container
//! - Presentation view models (detail overlay, summary)

pub mod domain;
pub mod draft;
pub mod dto;
pub mod state;
pub mod store;
pub mod view;
