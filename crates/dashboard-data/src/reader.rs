//! CSV loading for the hourly and daily bike rental datasets.
//!
//! Reads `hour_df.csv` / `day_df.csv`, matches columns by header name and
//! converts every row into a typed record. Any problem is reported as a load
//! error; there is no partial result.

use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info};

use dashboard_core::error::{DashboardError, Result};
use dashboard_core::models::{parse_record_date, DailyRecord, HourlyRecord, WeatherCategory};

use crate::dataset::{DailySet, HourlySet};

/// Columns that must be present in the hourly file.
pub const HOURLY_COLUMNS: [&str; 7] = [
    "dteday",
    "yr",
    "mnth",
    "hr",
    "weathersit",
    "workingday",
    "cnt",
];

/// Columns that must be present in the daily file.
pub const DAILY_COLUMNS: [&str; 6] = ["dteday", "yr", "mnth", "weathersit", "workingday", "cnt"];

// ── Raw rows ──────────────────────────────────────────────────────────────────

/// Hourly row exactly as found in the file; converted by [`hourly_from_raw`].
#[derive(Debug, Deserialize)]
struct RawHourlyRow {
    dteday: String,
    yr: String,
    mnth: String,
    hr: String,
    weathersit: String,
    workingday: String,
    cnt: String,
}

#[derive(Debug, Deserialize)]
struct RawDailyRow {
    dteday: String,
    yr: String,
    mnth: String,
    weathersit: String,
    workingday: String,
    cnt: String,
}

// ── DataStore ─────────────────────────────────────────────────────────────────

/// Stateless loader for the two datasets.
pub struct DataStore;

impl DataStore {
    /// Load both datasets.
    ///
    /// Fails when either file is missing, unreadable, lacks a required column
    /// or contains a row that cannot be parsed.
    pub fn load(hourly_path: &Path, daily_path: &Path) -> Result<(HourlySet, DailySet)> {
        let hourly = Self::load_hourly(hourly_path)?;
        let daily = Self::load_daily(daily_path)?;

        info!(
            hourly_records = hourly.len(),
            daily_records = daily.len(),
            "datasets loaded"
        );
        if let Some(bounds) = hourly.bounds() {
            info!("hourly data covers {}", bounds);
        }

        Ok((hourly, daily))
    }

    /// Load and index the hourly dataset.
    pub fn load_hourly(path: &Path) -> Result<HourlySet> {
        let records = read_rows(path, &HOURLY_COLUMNS, hourly_from_raw)?;
        Ok(HourlySet::from_records(records))
    }

    /// Load the daily dataset.
    pub fn load_daily(path: &Path) -> Result<DailySet> {
        let records = read_rows(path, &DAILY_COLUMNS, daily_from_raw)?;
        Ok(DailySet::from_records(records))
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Read every row of `path` as `R`, then convert it with `convert`.
///
/// The header row is checked for `required` columns first so that a missing
/// column is reported by name rather than as a per-row failure.
fn read_rows<R, T>(
    path: &Path,
    required: &[&str],
    convert: impl Fn(R) -> std::result::Result<T, String>,
) -> Result<Vec<T>>
where
    R: DeserializeOwned,
{
    let file = File::open(path).map_err(|source| DashboardError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(file);
    let headers = rdr.headers()?.clone();

    if let Some(missing) = required
        .iter()
        .find(|column| !headers.iter().any(|h| h == **column))
    {
        return Err(DashboardError::MissingColumn {
            path: path.to_path_buf(),
            column: missing.to_string(),
        });
    }

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|e| {
            let line = e.position().map(|p| p.line()).unwrap_or(0);
            malformed(path, line, e.to_string())
        })?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let raw: R = record
            .deserialize(Some(&headers))
            .map_err(|e| malformed(path, line, e.to_string()))?;
        let row = convert(raw).map_err(|message| malformed(path, line, message))?;
        rows.push(row);
    }

    debug!("File {}: {} rows read", path.display(), rows.len());
    Ok(rows)
}

fn malformed(path: &Path, line: u64, message: String) -> DashboardError {
    DashboardError::MalformedRow {
        path: path.to_path_buf(),
        line,
        message,
    }
}

fn hourly_from_raw(raw: RawHourlyRow) -> std::result::Result<HourlyRecord, String> {
    let hour = parse_int::<u32>("hr", &raw.hr)?;
    if hour > 23 {
        return Err(format!("hr out of range: {hour}"));
    }
    Ok(HourlyRecord {
        date: parse_record_date(&raw.dteday).map_err(|e| e.to_string())?,
        hour,
        count: parse_int("cnt", &raw.cnt)?,
        weather: parse_weather(&raw.weathersit)?,
        working_day: parse_flag("workingday", &raw.workingday)?,
        year: parse_year_code(&raw.yr)?,
        month: parse_month(&raw.mnth)?,
    })
}

fn daily_from_raw(raw: RawDailyRow) -> std::result::Result<DailyRecord, String> {
    Ok(DailyRecord {
        date: parse_record_date(&raw.dteday).map_err(|e| e.to_string())?,
        count: parse_int("cnt", &raw.cnt)?,
        weather: parse_weather(&raw.weathersit)?,
        working_day: parse_flag("workingday", &raw.workingday)?,
        year: parse_year_code(&raw.yr)?,
        month: parse_month(&raw.mnth)?,
    })
}

fn parse_int<T: std::str::FromStr>(column: &str, raw: &str) -> std::result::Result<T, String> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| format!("{column}: not a non-negative integer: '{raw}'"))
}

/// `0`/`1` or `true`/`false`.
fn parse_flag(column: &str, raw: &str) -> std::result::Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        _ => Err(format!("{column}: expected 0/1 or true/false, got '{raw}'")),
    }
}

fn parse_weather(raw: &str) -> std::result::Result<WeatherCategory, String> {
    WeatherCategory::parse(raw).ok_or_else(|| format!("weathersit: unknown category '{raw}'"))
}

/// Year code `0`/`1`; the calendar years `2011`/`2012` are accepted too.
fn parse_year_code(raw: &str) -> std::result::Result<u8, String> {
    match raw.trim() {
        "0" | "2011" => Ok(0),
        "1" | "2012" => Ok(1),
        other => Err(format!("yr: expected 0 or 1, got '{other}'")),
    }
}

/// Month number `1..=12`, or an English month name / abbreviation.
fn parse_month(raw: &str) -> std::result::Result<u32, String> {
    let trimmed = raw.trim();
    if let Ok(month) = trimmed.parse::<u32>() {
        return if (1..=12).contains(&month) {
            Ok(month)
        } else {
            Err(format!("mnth out of range: {month}"))
        };
    }
    (1..=12)
        .find(|m| {
            dashboard_core::formatting::month_name(*m).is_some_and(|name| {
                name.eq_ignore_ascii_case(trimmed)
                    || (trimmed.len() == 3 && name[..3].eq_ignore_ascii_case(trimmed))
            })
        })
        .ok_or_else(|| format!("mnth: unknown month '{trimmed}'"))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
