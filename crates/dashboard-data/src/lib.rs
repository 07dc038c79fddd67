//! Data layer for the bike sharing dashboard.
//!
//! Loads the hourly and daily CSV datasets into immutable, date-ordered
//! record sets, narrows them to a date range and derives the aggregated
//! views shown by the dashboard.

pub mod aggregator;
pub mod dataset;
pub mod filter;
pub mod reader;

pub use dashboard_core as core;
