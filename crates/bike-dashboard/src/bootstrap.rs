use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use dashboard_core::error::DashboardError;
use dashboard_core::settings::Settings;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Sub-directory of the platform data directory searched for the dataset.
pub const APP_DIR_NAME: &str = "bike-dashboard";

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Where log output is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    /// No subscriber; keeps the alternate screen clean.
    Off,
    Stderr,
    File(PathBuf),
}

/// A log file always wins; otherwise the report logs to stderr and the
/// interactive dashboard logs nowhere.
pub fn log_destination(settings: &Settings) -> LogDestination {
    match &settings.log_file {
        Some(path) => LogDestination::File(path.clone()),
        None if settings.is_report() => LogDestination::Stderr,
        None => LogDestination::Off,
    }
}

/// Map Python-style level names onto `EnvFilter` directives.
pub fn normalise_level(log_level: &str) -> String {
    match log_level.to_uppercase().as_str() {
        "DEBUG" => "debug".to_string(),
        "INFO" => "info".to_string(),
        "WARNING" | "WARN" => "warn".to_string(),
        "ERROR" | "CRITICAL" => "error".to_string(),
        _ => log_level.to_lowercase(),
    }
}

/// Initialise the global `tracing` subscriber.
///
/// Falls back to `"info"` if the level string is not a valid filter.
pub fn setup_logging(log_level: &str, destination: LogDestination) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_new(normalise_level(log_level)).unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match destination {
        LogDestination::Off => {}
        LogDestination::Stderr => {
            let layer = fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_writer(std::io::stderr);
            registry.with(layer).try_init()?;
        }
        LogDestination::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            let layer = fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file));
            registry.with(layer).try_init()?;
        }
    }

    Ok(())
}

// ── Data-dir discovery ─────────────────────────────────────────────────────────

/// Directories searched for the dataset when `--data-dir` is absent, in
/// order: the working directory, `./data`, then the platform data directory.
pub fn data_dir_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from("."), PathBuf::from("data")];
    if let Some(data) = dirs::data_dir() {
        candidates.push(data.join(APP_DIR_NAME));
    }
    candidates
}

/// First candidate directory that holds `hourly_file`.
pub fn find_data_dir(candidates: &[PathBuf], hourly_file: &Path) -> Option<PathBuf> {
    candidates
        .iter()
        .find(|dir| dir.join(hourly_file).is_file())
        .cloned()
}

/// Resolve the directory the dataset is loaded from.
pub fn discover_data_dir(settings: &Settings) -> Result<PathBuf, DashboardError> {
    if let Some(dir) = &settings.data_dir {
        return Ok(dir.clone());
    }
    let candidates = data_dir_candidates();
    match find_data_dir(&candidates, &settings.hourly_file) {
        Some(dir) => {
            tracing::debug!(dir = %dir.display(), "data directory discovered");
            Ok(dir)
        }
        None => Err(DashboardError::DataNotFound(settings.hourly_file.clone())),
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
