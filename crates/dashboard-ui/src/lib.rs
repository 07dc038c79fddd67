//! Terminal UI layer for the bike sharing dashboard.
//!
//! Provides themes, the header / range / proportion components, the four
//! charts, the full-screen dashboard layout, and the interactive event loop
//! built on top of [`ratatui`].

pub mod app;
pub mod charts;
pub mod components;
pub mod dashboard_view;
pub mod themes;

pub use dashboard_core as core;
