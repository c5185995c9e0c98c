//! Incident Desk: an in-memory record-keeping service for security
//! incidents, exposed as a small JSON API with a static browser UI.
//!
//! The authoritative state lives in [`state::IncidentStore`], a lock-guarded
//! in-memory collection. Everything else is transport plumbing around it.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
