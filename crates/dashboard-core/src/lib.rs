//! Shared types for the bike sharing dashboard.
//!
//! Holds the record and view models, the error taxonomy, CLI settings and
//! number/date formatting helpers used by every other crate in the
//! workspace.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
