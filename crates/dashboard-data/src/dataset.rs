//! Immutable, date-indexed record sets.

use chrono::NaiveDate;
use dashboard_core::models::{DailyRecord, DateRange, HourlyRecord};

// ── HourlySet ─────────────────────────────────────────────────────────────────

/// Hourly records ordered by date.
///
/// Records sharing a date keep their original relative order, so the hours of
/// a day stay in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HourlySet {
    records: Vec<HourlyRecord>,
}

impl HourlySet {
    /// Build a set, ordering `records` by date.
    pub fn from_records(mut records: Vec<HourlyRecord>) -> Self {
        records.sort_by_key(|r| r.date);
        Self { records }
    }

    pub fn records(&self) -> &[HourlyRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HourlyRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest date in the set.
    pub fn min_date(&self) -> Option<NaiveDate> {
        self.records.first().map(|r| r.date)
    }

    /// Latest date in the set.
    pub fn max_date(&self) -> Option<NaiveDate> {
        self.records.last().map(|r| r.date)
    }

    /// `[min_date, max_date]`, or `None` for an empty set.
    pub fn bounds(&self) -> Option<DateRange> {
        Some(DateRange::new(self.min_date()?, self.max_date()?))
    }

    /// Records whose date lies in `[start, end]`, located by binary search
    /// over the date index.
    pub fn between(&self, start: NaiveDate, end: NaiveDate) -> &[HourlyRecord] {
        if start > end {
            return &[];
        }
        let lo = self.records.partition_point(|r| r.date < start);
        let hi = self.records.partition_point(|r| r.date <= end);
        &self.records[lo..hi]
    }
}

impl<'a> IntoIterator for &'a HourlySet {
    type Item = &'a HourlyRecord;
    type IntoIter = std::slice::Iter<'a, HourlyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// ── DailySet ──────────────────────────────────────────────────────────────────

/// Daily records ordered by date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailySet {
    records: Vec<DailyRecord>,
}

impl DailySet {
    pub fn from_records(mut records: Vec<DailyRecord>) -> Self {
        records.sort_by_key(|r| r.date);
        Self { records }
    }

    pub fn records(&self) -> &[DailyRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DailyRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records carrying the given year code.
    pub fn for_year(&self, year: u8) -> impl Iterator<Item = &DailyRecord> {
        self.records.iter().filter(move |r| r.year == year)
    }
}

impl<'a> IntoIterator for &'a DailySet {
    type Item = &'a DailyRecord;
    type IntoIter = std::slice::Iter<'a, DailyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
