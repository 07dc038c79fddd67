//! Headless rendering of a [`ViewModel`] as plain text or JSON.

use std::fmt::Write as _;

use dashboard_core::error::Result;
use dashboard_core::formatting::{
    format_count, format_number, hour_label, month_name, percentage, working_day_label,
};
use dashboard_core::models::{calendar_year, AggregatedView};
use serde::Serialize;

use crate::context::ViewModel;

const LABEL_WIDTH: usize = 16;

/// One labelled value of an aggregated view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry<V> {
    pub key: String,
    pub value: V,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRange {
    pub start: String,
    pub end: String,
}

/// Serializable form of a [`ViewModel`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub range: Option<ReportRange>,
    pub range_adjusted: bool,
    pub days_selected: i64,
    pub chart_scope: String,
    pub monthly_year: i32,
    pub total_rentals: u64,
    pub daily_totals: Vec<ReportEntry<u64>>,
    pub monthly_totals: Vec<ReportEntry<u64>>,
    pub weather_totals: Vec<ReportEntry<u64>>,
    pub working_day_totals: Vec<ReportEntry<u64>>,
    pub hourly_means: Vec<ReportEntry<f64>>,
}

impl From<&ViewModel> for Report {
    fn from(view: &ViewModel) -> Self {
        Self {
            range: view.range.map(|r| ReportRange {
                start: r.start.format("%Y-%m-%d").to_string(),
                end: r.end.format("%Y-%m-%d").to_string(),
            }),
            range_adjusted: view.range_adjusted,
            days_selected: view.selected_days(),
            chart_scope: view.scope.as_str().to_string(),
            monthly_year: calendar_year(view.monthly_year),
            total_rentals: view.total_rentals,
            daily_totals: entries(&view.daily_totals, |d| d.format("%Y-%m-%d").to_string()),
            monthly_totals: entries(&view.monthly_totals, |m| month_key(*m)),
            weather_totals: entries(&view.weather_totals, |w| w.label()),
            working_day_totals: entries(&view.working_day_totals, |w| {
                working_day_label(*w).to_string()
            }),
            hourly_means: entries(&view.hourly_means, |h| hour_label(*h)),
        }
    }
}

fn entries<K: Ord, V: Copy>(
    view: &AggregatedView<K, V>,
    label: impl Fn(&K) -> String,
) -> Vec<ReportEntry<V>> {
    view.iter()
        .map(|(k, v)| ReportEntry {
            key: label(k),
            value: *v,
        })
        .collect()
}

fn month_key(month: u32) -> String {
    month_name(month)
        .map(str::to_string)
        .unwrap_or_else(|| month.to_string())
}

/// Pretty-printed JSON report.
pub fn to_json(view: &ViewModel) -> Result<String> {
    Ok(serde_json::to_string_pretty(&Report::from(view))?)
}

/// Aligned plain-text report.
pub fn to_text(view: &ViewModel) -> String {
    let mut out = String::new();
    let title = "BIKE SHARING DASHBOARD";
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "=".repeat(title.len()));

    let range = match view.range {
        Some(r) if view.range_adjusted => format!("{r} (adjusted to data)"),
        Some(r) => r.to_string(),
        None => "no data".to_string(),
    };
    let _ = writeln!(out, "{:<LABEL_WIDTH$}{range}", "Range:");
    let _ = writeln!(out, "{:<LABEL_WIDTH$}{}", "Days selected:", view.selected_days());
    let _ = writeln!(out, "{:<LABEL_WIDTH$}{}", "Chart scope:", view.scope);
    let _ = writeln!(
        out,
        "{:<LABEL_WIDTH$}{}",
        "Total rentals:",
        format_count(view.total_rentals)
    );

    section(&mut out, &format!("Monthly rentals ({})", calendar_year(view.monthly_year)));
    for (month, total) in view.monthly_totals.iter() {
        row(&mut out, &month_key(*month), &format_count(*total));
    }

    section(&mut out, "Rentals by weather condition");
    for (weather, total) in view.weather_totals.iter() {
        row(&mut out, &weather.label(), &format_count(*total));
    }

    section(&mut out, "Working day vs holiday");
    let whole = view.working_day_totals.total() as f64;
    for (working_day, total) in view.working_day_totals.iter() {
        let share = percentage(*total as f64, whole, 1);
        row(
            &mut out,
            working_day_label(*working_day),
            &format!("{}  ({}%)", format_count(*total), format_number(share, 1)),
        );
    }

    section(&mut out, "Average rentals by hour");
    for (hour, mean) in view.hourly_means.iter() {
        row(&mut out, &hour_label(*hour), &format_number(*mean, 2));
    }

    out
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "-".repeat(title.chars().count()));
}

fn row(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "  {label:<LABEL_WIDTH$}{value:>14}");
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{render, DashboardContext};
    use chrono::NaiveDate;
    use dashboard_core::models::{DailyRecord, HourlyRecord, WeatherCategory};
    use dashboard_data::dataset::{DailySet, HourlySet};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2011, 1, d).unwrap()
    }

    fn make_view() -> ViewModel {
        let hourly =
            |day: u32, hour: u32, count: u64, weather: u8, working_day: bool| HourlyRecord {
                date: date(day),
                hour,
                count,
                weather: WeatherCategory(weather),
                working_day,
                year: 0,
                month: 1,
            };
        let ctx = DashboardContext::new(
            HourlySet::from_records(vec![
                hourly(1, 0, 500, 1, true),
                hourly(1, 1, 300, 1, true),
                hourly(2, 0, 1000, 2, false),
            ]),
            DailySet::from_records(vec![DailyRecord {
                date: date(1),
                count: 1800,
                weather: WeatherCategory::CLEAR,
                working_day: true,
                year: 0,
                month: 1,
            }]),
        );
        render(&ctx, ctx.bounds().unwrap())
    }

    #[test]
    fn test_text_report_sections() {
        let text = to_text(&make_view());

        assert!(text.starts_with("BIKE SHARING DASHBOARD\n"));
        assert!(text.contains("2011-01-01 - 2011-01-02"));
        assert!(text.contains("Total rentals:  1,800"));
        assert!(text.contains("Monthly rentals (2011)"));
        assert!(text.contains("January"));
        assert!(text.contains("Clear"));
        assert!(text.contains("Mist/Cloudy"));
        assert!(text.contains("Holiday"));
        assert!(text.contains("(55.6%)"));
        assert!(text.contains("(44.4%)"));
        assert!(text.contains("750.00"));
    }

    #[test]
    fn test_text_report_empty_view() {
        let ctx = DashboardContext::new(HourlySet::default(), DailySet::default());
        let view = ViewModel::unselected(&ctx, Default::default());
        let text = to_text(&view);
        assert!(text.contains("no data"));
        assert!(text.contains("Total rentals:  0"));
    }

    #[test]
    fn test_days_selected_counts_calendar_days() {
        let record = |day: u32| HourlyRecord {
            date: date(day),
            hour: 8,
            count: 10,
            weather: WeatherCategory::CLEAR,
            working_day: true,
            year: 0,
            month: 1,
        };
        let ctx = DashboardContext::new(
            HourlySet::from_records(vec![record(1), record(10)]),
            DailySet::default(),
        );
        let view = render(&ctx, ctx.bounds().unwrap());

        assert!(to_text(&view).contains("Days selected:  10\n"));
        assert_eq!(Report::from(&view).days_selected, 10);
    }

    #[test]
    fn test_report_entries_keep_key_order() {
        let report = Report::from(&make_view());
        let hours: Vec<&str> = report.hourly_means.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(hours, vec!["00", "01"]);

        let split: Vec<&str> = report
            .working_day_totals
            .iter()
            .map(|e| e.key.as_str())
            .collect();
        assert_eq!(split, vec!["Holiday", "Working day"]);
        assert_eq!(report.daily_totals[0].key, "2011-01-01");
        assert_eq!(report.monthly_year, 2011);
    }

    #[test]
    fn test_json_report() {
        let json = to_json(&make_view()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["total_rentals"], 1800);
        assert_eq!(value["chart_scope"], "full");
        assert_eq!(value["range"]["start"], "2011-01-01");
        assert_eq!(value["weather_totals"][0]["key"], "Clear");
        assert_eq!(value["weather_totals"][0]["value"], 800);
        assert_eq!(value["monthly_totals"][0]["key"], "January");
        assert_eq!(value["monthly_totals"][0]["value"], 1800);
    }
}
