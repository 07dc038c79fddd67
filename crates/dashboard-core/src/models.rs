use std::collections::BTreeMap;
use std::fmt;
use std::ops::AddAssign;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};

// ── WeatherCategory ───────────────────────────────────────────────────────────

/// Weather situation code attached to every record.
///
/// | code | meaning             |
/// |------|---------------------|
/// | 1    | Clear               |
/// | 2    | Mist / Cloudy       |
/// | 3    | Light Snow / Rain   |
/// | 4    | Heavy Rain / Snow   |
///
/// Codes outside that table are kept as-is and labelled `"Code N"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WeatherCategory(pub u8);

impl WeatherCategory {
    pub const CLEAR: WeatherCategory = WeatherCategory(1);
    pub const MIST: WeatherCategory = WeatherCategory(2);
    pub const LIGHT_PRECIPITATION: WeatherCategory = WeatherCategory(3);
    pub const HEAVY_PRECIPITATION: WeatherCategory = WeatherCategory(4);

    const LABELS: [(&'static str, u8); 4] = [
        ("Clear", 1),
        ("Mist/Cloudy", 2),
        ("Light Snow/Rain", 3),
        ("Heavy Rain/Snow", 4),
    ];

    /// Raw numeric code.
    pub fn code(self) -> u8 {
        self.0
    }

    /// Human-readable label.
    pub fn label(self) -> String {
        Self::LABELS
            .iter()
            .find(|(_, code)| *code == self.0)
            .map(|(label, _)| label.to_string())
            .unwrap_or_else(|| format!("Code {}", self.0))
    }

    /// Parse either an integer code or one of the known labels
    /// (case-insensitive).
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if let Ok(code) = trimmed.parse::<u8>() {
            return Some(WeatherCategory(code));
        }
        Self::LABELS
            .iter()
            .find(|(label, _)| label.eq_ignore_ascii_case(trimmed))
            .map(|(_, code)| WeatherCategory(*code))
    }
}

impl fmt::Display for WeatherCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

// ── Records ───────────────────────────────────────────────────────────────────

/// One hourly observation from `hour_df.csv`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HourlyRecord {
    /// Calendar date (the lookup index).
    pub date: NaiveDate,
    /// Hour of day, `0..=23`.
    pub hour: u32,
    /// Number of rentals in this hour.
    pub count: u64,
    pub weather: WeatherCategory,
    /// `true` on business days, `false` on weekends and holidays.
    pub working_day: bool,
    /// Year code: 0 = 2011, 1 = 2012.
    pub year: u8,
    /// Month, `1..=12`.
    pub month: u32,
}

/// One daily observation from `day_df.csv`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub count: u64,
    pub weather: WeatherCategory,
    pub working_day: bool,
    /// Year code: 0 = 2011, 1 = 2012.
    pub year: u8,
    pub month: u32,
}

/// Calendar year encoded by a dataset year code.
pub fn calendar_year(year_code: u8) -> i32 {
    2011 + i32::from(year_code)
}

/// Parse a `dteday` value.
///
/// Accepts `YYYY-MM-DD` and `YYYY-MM-DD HH:MM:SS` (the time part is
/// dropped, matching a date index).
pub fn parse_record_date(raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S")
        .map(|dt| dt.date())
        .map_err(|_| DashboardError::InvalidDate(trimmed.to_string()))
}

// ── DateRange ─────────────────────────────────────────────────────────────────

/// Inclusive pair of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// `true` when `date` lies within `[start, end]`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// `true` when `start > end`.
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    /// Number of calendar days covered, counting both ends.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days().abs() + 1
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

// ── ChartScope ────────────────────────────────────────────────────────────────

/// Which hourly records feed the weather, working-day and hourly charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartScope {
    /// The whole hourly table; only the total metric follows the range.
    #[default]
    Full,
    /// The records inside the selected range.
    Selection,
}

impl ChartScope {
    pub fn as_str(self) -> &'static str {
        match self {
            ChartScope::Full => "full",
            ChartScope::Selection => "selection",
        }
    }

    /// The other scope.
    pub fn toggled(self) -> Self {
        match self {
            ChartScope::Full => ChartScope::Selection,
            ChartScope::Selection => ChartScope::Full,
        }
    }
}

impl FromStr for ChartScope {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "full" => Ok(ChartScope::Full),
            "selection" => Ok(ChartScope::Selection),
            other => Err(DashboardError::Config(format!(
                "unknown chart scope: {other}"
            ))),
        }
    }
}

impl fmt::Display for ChartScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── AggregatedView ────────────────────────────────────────────────────────────

/// Ordered mapping from a grouping key to a numeric summary.
///
/// Keys iterate in their natural order. Only keys that occurred in the input
/// are present; nothing is zero-filled.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedView<K: Ord, V> {
    buckets: BTreeMap<K, V>,
}

impl<K: Ord, V> Default for AggregatedView<K, V> {
    fn default() -> Self {
        Self {
            buckets: BTreeMap::new(),
        }
    }
}

impl<K: Ord, V> AggregatedView<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `value` to the bucket for `key`, creating it when absent.
    pub fn accumulate(&mut self, key: K, value: V)
    where
        V: AddAssign + Default,
    {
        *self.buckets.entry(key).or_default() += value;
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.buckets.get(key)
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.buckets.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.buckets.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.buckets.values()
    }

    /// Sum of every bucket's value.
    pub fn total(&self) -> V
    where
        V: Copy + std::iter::Sum<V>,
    {
        self.buckets.values().copied().sum()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for AggregatedView<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            buckets: iter.into_iter().collect(),
        }
    }
}

impl<K: Ord, V> IntoIterator for AggregatedView<K, V> {
    type Item = (K, V);
    type IntoIter = std::collections::btree_map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.into_iter()
    }
}
