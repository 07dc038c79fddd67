//! Runtime layer for the bike sharing dashboard.
//!
//! Owns the immutable dashboard context, turns a date selection into a
//! [`context::ViewModel`], tracks the per-session selection driven by user
//! input, and formats the headless report.

pub mod context;
pub mod report;
pub mod session;

pub use dashboard_core as core;
pub use dashboard_data as data;
