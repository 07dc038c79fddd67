use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

use crate::models::ChartScope;

/// Default file name of the hourly dataset.
pub const DEFAULT_HOURLY_FILE: &str = "hour_df.csv";

/// Default file name of the daily dataset.
pub const DEFAULT_DAILY_FILE: &str = "day_df.csv";

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Interactive dashboard for the bike sharing dataset
#[derive(Parser, Debug, Clone)]
#[command(
    name = "bike-dashboard",
    about = "Interactive dashboard for hourly and daily bike rental data",
    version
)]
pub struct Settings {
    /// Directory holding the hourly and daily CSV files
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Hourly dataset file (name inside the data dir, or a path)
    #[arg(long, default_value = DEFAULT_HOURLY_FILE)]
    pub hourly_file: PathBuf,

    /// Daily dataset file (name inside the data dir, or a path)
    #[arg(long, default_value = DEFAULT_DAILY_FILE)]
    pub daily_file: PathBuf,

    /// View mode
    #[arg(long, default_value = "dashboard", value_parser = ["dashboard", "report"])]
    pub view: String,

    /// First day of the selected range (YYYY-MM-DD, defaults to the first day in the data)
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Last day of the selected range (YYYY-MM-DD, defaults to the last day in the data)
    #[arg(long)]
    pub end: Option<NaiveDate>,

    /// Year code used by the monthly chart (0 = 2011, 1 = 2012)
    #[arg(long, default_value = "0", value_parser = clap::value_parser!(u8).range(0..=1))]
    pub year: u8,

    /// Records feeding the weather, working-day and hourly charts
    #[arg(long, default_value = "full", value_parser = ["full", "selection"])]
    pub chart_scope: String,

    /// Display theme
    #[arg(long, default_value = "auto", value_parser = ["light", "dark", "classic", "auto"])]
    pub theme: String,

    /// Report output format
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    pub format: String,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse the process arguments and apply the `--debug` override.
    pub fn load() -> Self {
        Self::resolve(Settings::parse())
    }

    /// Same as [`Settings::load`] but from an explicit argument list.
    pub fn load_from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::resolve(Settings::parse_from(args))
    }

    /// The parsed chart scope. The CLI value parser only admits valid names.
    pub fn chart_scope(&self) -> ChartScope {
        self.chart_scope.parse().unwrap_or_default()
    }

    /// `true` when the headless report was requested.
    pub fn is_report(&self) -> bool {
        self.view == "report"
    }

    /// Full paths of the hourly and daily files relative to `dir`.
    ///
    /// Absolute file arguments are returned unchanged.
    pub fn data_files_in(&self, dir: &std::path::Path) -> (PathBuf, PathBuf) {
        (dir.join(&self.hourly_file), dir.join(&self.daily_file))
    }

    /// `--debug` overrides the log level.
    fn resolve(mut settings: Settings) -> Settings {
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
