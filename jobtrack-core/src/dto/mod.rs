//! Data Transfer Objects sent to the tracker API

pub mod job;
