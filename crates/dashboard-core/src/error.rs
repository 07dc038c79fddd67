use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the bike sharing dashboard.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// A data file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required column is absent from the file's header row.
    #[error("Missing column '{column}' in {path}")]
    MissingColumn { path: PathBuf, column: String },

    /// A data row could not be converted into a record.
    #[error("Malformed row at {path}:{line}: {message}")]
    MalformedRow {
        path: PathBuf,
        line: u64,
        message: String,
    },

    /// No directory holding the dataset files could be located.
    #[error("Data files not found: {0}")]
    DataNotFound(PathBuf),

    /// A date string did not match `YYYY-MM-DD`.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// A JSON document could not be produced.
    #[error("Failed to serialize JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    /// Low-level CSV reader failure that is not tied to a single row.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the dashboard crates.
pub type Result<T> = std::result::Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_file_read() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = DashboardError::FileRead {
            path: PathBuf::from("/data/hour_df.csv"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to read file"));
        assert!(msg.contains("/data/hour_df.csv"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_error_display_missing_column() {
        let err = DashboardError::MissingColumn {
            path: PathBuf::from("day_df.csv"),
            column: "cnt".to_string(),
        };
        assert_eq!(err.to_string(), "Missing column 'cnt' in day_df.csv");
    }

    #[test]
    fn test_error_display_malformed_row() {
        let err = DashboardError::MalformedRow {
            path: PathBuf::from("hour_df.csv"),
            line: 12,
            message: "invalid digit".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed row at hour_df.csv:12: invalid digit"
        );
    }

    #[test]
    fn test_error_display_data_not_found() {
        let err = DashboardError::DataNotFound(PathBuf::from("/missing/dir"));
        assert_eq!(err.to_string(), "Data files not found: /missing/dir");
    }

    #[test]
    fn test_error_display_invalid_date() {
        let err = DashboardError::InvalidDate("2011-13-01".to_string());
        assert_eq!(err.to_string(), "Invalid date: 2011-13-01");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: DashboardError = io_err.into();
        assert!(matches!(err, DashboardError::Io(_)));
        assert!(err.to_string().contains("denied"));
    }
}
