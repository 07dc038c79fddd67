//! Rental aggregation over the hourly and daily datasets.
//!
//! Every operation is a pure group-by over its input: row order does not
//! matter, empty input gives an empty view, and only keys that occur in the
//! input show up in the output.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use dashboard_core::models::{AggregatedView, WeatherCategory};

use crate::dataset::{DailySet, HourlySet};

/// Hours in a day; upper bound on the size of [`RentalAggregator::mean_by_hour`].
pub const HOURS_PER_DAY: u32 = 24;

// ── RentalAggregator ──────────────────────────────────────────────────────────

/// Stateless helper that groups rental counts by key.
pub struct RentalAggregator;

impl RentalAggregator {
    /// Sum of every record's rental count.
    pub fn total_rentals(hourly: &HourlySet) -> u64 {
        hourly.iter().map(|r| r.count).sum()
    }

    /// Rentals per calendar day.
    pub fn daily_totals(hourly: &HourlySet) -> AggregatedView<NaiveDate, u64> {
        let mut view = AggregatedView::new();
        for record in hourly {
            view.accumulate(record.date, record.count);
        }
        view
    }

    /// Rentals per month (1–12) for the daily records of `year`.
    pub fn monthly_totals_for_year(daily: &DailySet, year: u8) -> AggregatedView<u32, u64> {
        let mut view = AggregatedView::new();
        for record in daily.for_year(year) {
            view.accumulate(record.month, record.count);
        }
        view
    }

    /// Rentals per weather category.
    pub fn totals_by_weather(hourly: &HourlySet) -> AggregatedView<WeatherCategory, u64> {
        let mut view = AggregatedView::new();
        for record in hourly {
            view.accumulate(record.weather, record.count);
        }
        view
    }

    /// Rentals on working days (`true`) versus weekends and holidays (`false`).
    pub fn totals_by_working_day(hourly: &HourlySet) -> AggregatedView<bool, u64> {
        let mut view = AggregatedView::new();
        for record in hourly {
            view.accumulate(record.working_day, record.count);
        }
        view
    }

    /// Mean rentals per hour of day (0–23) across all records.
    pub fn mean_by_hour(hourly: &HourlySet) -> AggregatedView<u32, f64> {
        // hour -> (sum, samples)
        let mut sums: BTreeMap<u32, (u64, u64)> = BTreeMap::new();
        for record in hourly {
            let slot = sums.entry(record.hour).or_default();
            slot.0 += record.count;
            slot.1 += 1;
        }

        sums.into_iter()
            .map(|(hour, (sum, samples))| (hour, sum as f64 / samples as f64))
            .collect()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_core::models::{DailyRecord, HourlyRecord};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_record(
        day: u32,
        hour: u32,
        count: u64,
        weather: u8,
        working_day: bool,
    ) -> HourlyRecord {
        HourlyRecord {
            date: date(2011, 1, day),
            hour,
            count,
            weather: WeatherCategory(weather),
            working_day,
            year: 0,
            month: 1,
        }
    }

    /// The three-record reference scenario.
    fn scenario() -> HourlySet {
        HourlySet::from_records(vec![
            make_record(1, 0, 5, 1, true),
            make_record(1, 1, 3, 1, true),
            make_record(2, 0, 10, 2, false),
        ])
    }

    /// A few days with every hour and varying weather.
    fn busy_week() -> HourlySet {
        let mut records = Vec::new();
        for day in 1..=7u32 {
            for hour in 0..HOURS_PER_DAY {
                let count = u64::from(day * 10 + hour);
                let weather = (hour % 3 + 1) as u8;
                records.push(make_record(day, hour, count, weather, day % 7 > 1));
            }
        }
        HourlySet::from_records(records)
    }

    // ── Reference scenario ────────────────────────────────────────────────────

    #[test]
    fn test_scenario_daily_totals() {
        let view = RentalAggregator::daily_totals(&scenario());
        assert_eq!(view.len(), 2);
        assert_eq!(view.get(&date(2011, 1, 1)), Some(&8));
        assert_eq!(view.get(&date(2011, 1, 2)), Some(&10));
    }

    #[test]
    fn test_scenario_totals_by_weather() {
        let view = RentalAggregator::totals_by_weather(&scenario());
        assert_eq!(view.len(), 2);
        assert_eq!(view.get(&WeatherCategory(1)), Some(&8));
        assert_eq!(view.get(&WeatherCategory(2)), Some(&10));
    }

    #[test]
    fn test_scenario_totals_by_working_day() {
        let view = RentalAggregator::totals_by_working_day(&scenario());
        assert_eq!(view.len(), 2);
        assert_eq!(view.get(&true), Some(&8));
        assert_eq!(view.get(&false), Some(&10));
    }

    #[test]
    fn test_scenario_mean_by_hour() {
        let view = RentalAggregator::mean_by_hour(&scenario());
        assert_eq!(view.len(), 2);
        assert!((view.get(&0).unwrap() - 7.5).abs() < 1e-9);
        assert!((view.get(&1).unwrap() - 3.0).abs() < 1e-9);
    }

    // ── Properties ────────────────────────────────────────────────────────────

    #[test]
    fn test_daily_totals_conserve_total() {
        let set = busy_week();
        let view = RentalAggregator::daily_totals(&set);
        assert_eq!(view.len(), 7);
        assert_eq!(view.total(), RentalAggregator::total_rentals(&set));
    }

    #[test]
    fn test_working_day_partition() {
        let set = busy_week();
        let view = RentalAggregator::totals_by_working_day(&set);
        assert_eq!(view.len(), 2);
        assert_eq!(view.total(), RentalAggregator::total_rentals(&set));
    }

    #[test]
    fn test_weather_totals_sum_to_total() {
        let set = busy_week();
        let view = RentalAggregator::totals_by_weather(&set);
        assert_eq!(view.len(), 3);
        assert_eq!(view.total(), RentalAggregator::total_rentals(&set));
    }

    #[test]
    fn test_mean_by_hour_keys_and_values() {
        let set = busy_week();
        let view = RentalAggregator::mean_by_hour(&set);

        assert_eq!(view.len(), HOURS_PER_DAY as usize);
        assert!(view.keys().all(|h| *h < HOURS_PER_DAY));

        for (hour, mean) in view.iter() {
            let samples: Vec<u64> = set
                .iter()
                .filter(|r| r.hour == *hour)
                .map(|r| r.count)
                .collect();
            let expected = samples.iter().sum::<u64>() as f64 / samples.len() as f64;
            assert!((mean - expected).abs() < 1e-9, "hour {hour}: {mean} != {expected}");
        }
    }

    #[test]
    fn test_order_insensitive() {
        let set = busy_week();
        let mut reversed: Vec<HourlyRecord> = set.records().to_vec();
        reversed.reverse();
        let shuffled = HourlySet::from_records(reversed);

        assert_eq!(
            RentalAggregator::totals_by_weather(&set),
            RentalAggregator::totals_by_weather(&shuffled)
        );
        assert_eq!(
            RentalAggregator::mean_by_hour(&set),
            RentalAggregator::mean_by_hour(&shuffled)
        );
    }

    #[test]
    fn test_missing_keys_not_zero_filled() {
        let set = HourlySet::from_records(vec![make_record(1, 8, 4, 3, true)]);
        let weather = RentalAggregator::totals_by_weather(&set);
        assert_eq!(weather.len(), 1);
        assert!(weather.get(&WeatherCategory(1)).is_none());

        let working = RentalAggregator::totals_by_working_day(&set);
        assert_eq!(working.len(), 1);
        assert!(working.get(&false).is_none());

        let hourly = RentalAggregator::mean_by_hour(&set);
        assert_eq!(hourly.keys().copied().collect::<Vec<_>>(), vec![8]);
    }

    // ── Empty input ───────────────────────────────────────────────────────────

    #[test]
    fn test_empty_input_yields_empty_views() {
        let hourly = HourlySet::default();
        let daily = DailySet::default();

        assert!(RentalAggregator::daily_totals(&hourly).is_empty());
        assert!(RentalAggregator::monthly_totals_for_year(&daily, 0).is_empty());
        assert!(RentalAggregator::totals_by_weather(&hourly).is_empty());
        assert!(RentalAggregator::totals_by_working_day(&hourly).is_empty());
        assert!(RentalAggregator::mean_by_hour(&hourly).is_empty());
        assert_eq!(RentalAggregator::total_rentals(&hourly), 0);
    }

    // ── monthly_totals_for_year ───────────────────────────────────────────────

    #[test]
    fn test_monthly_totals_filters_year() {
        let rec = |year: u8, month: u32, day: u32, count: u64| DailyRecord {
            date: date(2011 + i32::from(year), month, day),
            count,
            weather: WeatherCategory::CLEAR,
            working_day: true,
            year,
            month,
        };
        let daily = DailySet::from_records(vec![
            rec(0, 1, 1, 100),
            rec(0, 1, 2, 50),
            rec(0, 3, 1, 70),
            rec(1, 1, 1, 999),
        ]);

        let view = RentalAggregator::monthly_totals_for_year(&daily, 0);
        assert_eq!(view.keys().copied().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(view.get(&1), Some(&150));
        assert_eq!(view.get(&3), Some(&70));
        assert!(view.get(&2).is_none());

        let next_year = RentalAggregator::monthly_totals_for_year(&daily, 1);
        assert_eq!(next_year.get(&1), Some(&999));
    }
}
