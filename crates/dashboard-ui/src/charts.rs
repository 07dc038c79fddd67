//! The four dashboard charts.
//!
//! Each chart has a pure data-preparation helper (tested directly) and a
//! `render_*` function drawing it into a bordered block. Empty views fall
//! back to [`render_no_data`].

use ratatui::{
    layout::Rect,
    style::Modifier,
    symbols,
    text::{Line, Span, Text},
    widgets::{Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use dashboard_core::formatting::{format_number, short_month_name};
use dashboard_core::models::{AggregatedView, WeatherCategory};

use crate::components::proportion_bar::WorkingDayBar;
use crate::themes::Theme;

/// Last hour on the hourly chart's x axis.
const LAST_HOUR: f64 = 23.0;

// ── Data preparation ─────────────────────────────────────────────────────────

/// Short count for bar captions: `950`, `9.5k`, `98k`, `1.2M`.
pub fn compact_count(count: u64) -> String {
    let value = count as f64;
    if count < 1_000 {
        count.to_string()
    } else if count < 10_000 {
        format!("{:.1}k", value / 1_000.0)
    } else if count < 1_000_000 {
        format!("{:.0}k", value / 1_000.0)
    } else {
        format!("{:.1}M", value / 1_000_000.0)
    }
}

/// Bar height for a log10 axis. Heights are scaled by 100 so that small
/// differences stay visible; zero maps to zero.
pub fn log_height(count: u64) -> u64 {
    ((count as f64 + 1.0).log10() * 100.0).round() as u64
}

/// Short bar label for a weather category.
pub fn weather_short_label(weather: WeatherCategory) -> String {
    match weather {
        WeatherCategory::CLEAR => "Clear".to_string(),
        WeatherCategory::MIST => "Mist".to_string(),
        WeatherCategory::LIGHT_PRECIPITATION => "Light".to_string(),
        WeatherCategory::HEAVY_PRECIPITATION => "Heavy".to_string(),
        other => format!("#{}", other.code()),
    }
}

/// `(label, total)` per month, labelled `Jan`–`Dec`.
pub fn monthly_bars(totals: &AggregatedView<u32, u64>) -> Vec<(String, u64)> {
    totals
        .iter()
        .map(|(month, total)| (short_month_name(*month), *total))
        .collect()
}

/// `(category, log height, raw total)` per weather category.
pub fn weather_bars(
    totals: &AggregatedView<WeatherCategory, u64>,
) -> Vec<(WeatherCategory, u64, u64)> {
    totals
        .iter()
        .map(|(weather, total)| (*weather, log_height(*total), *total))
        .collect()
}

/// `(hour, mean)` points for the line chart.
pub fn hourly_points(means: &AggregatedView<u32, f64>) -> Vec<(f64, f64)> {
    means
        .iter()
        .map(|(hour, mean)| (f64::from(*hour), *mean))
        .collect()
}

/// Upper y bound leaving some headroom above the highest point.
pub fn y_upper_bound(points: &[(f64, f64)]) -> f64 {
    let max = points.iter().map(|(_, y)| *y).fold(0.0, f64::max);
    if max <= 0.0 {
        1.0
    } else {
        (max + max / 10.0).ceil()
    }
}

/// Widest bar that fits `bars` bars with 1-column gaps inside `area`.
fn bar_width(area: Rect, bars: usize, max: u16) -> u16 {
    let bars = bars.max(1) as u16;
    let inner = area.width.saturating_sub(2);
    (inner.saturating_sub(bars - 1) / bars).clamp(1, max)
}

fn chart_block<'a>(title: &str, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme.chart_border)
        .title(Line::from(Span::styled(format!(" {title} "), theme.chart_title)))
}

// ── Rendering ────────────────────────────────────────────────────────────────

/// Bar chart of rentals per month of `calendar_year`.
pub fn render_monthly_chart(
    frame: &mut Frame,
    area: Rect,
    totals: &AggregatedView<u32, u64>,
    calendar_year: i32,
    theme: &Theme,
) {
    let title = format!("Monthly rentals {calendar_year}");
    if totals.is_empty() {
        render_no_data(frame, area, &title, theme);
        return;
    }

    let data = monthly_bars(totals);
    let bars: Vec<Bar> = data
        .iter()
        .map(|(label, total)| {
            Bar::default()
                .value(*total)
                .label(Line::from(label.clone()))
                .text_value(compact_count(*total))
                .style(theme.bar)
                .value_style(theme.bar_value)
        })
        .collect();

    let chart = BarChart::default()
        .block(chart_block(&title, theme))
        .bar_width(bar_width(area, bars.len(), 7))
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(chart, area);
}

/// Bar chart of rentals per weather category on a log10 scale. Bar captions
/// show the raw totals.
pub fn render_weather_chart(
    frame: &mut Frame,
    area: Rect,
    totals: &AggregatedView<WeatherCategory, u64>,
    theme: &Theme,
) {
    let title = "Rentals by weather (log scale)";
    if totals.is_empty() {
        render_no_data(frame, area, title, theme);
        return;
    }

    let bars: Vec<Bar> = weather_bars(totals)
        .into_iter()
        .map(|(weather, height, raw)| {
            let style = theme.weather_style(weather);
            Bar::default()
                .value(height)
                .label(Line::from(weather_short_label(weather)))
                .text_value(compact_count(raw))
                .style(style)
                .value_style(style.add_modifier(Modifier::REVERSED))
        })
        .collect();

    let chart = BarChart::default()
        .block(chart_block(title, theme))
        .bar_width(bar_width(area, bars.len(), 12))
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(chart, area);
}

/// Proportion bar of holiday versus working-day rentals.
pub fn render_working_day_chart(
    frame: &mut Frame,
    area: Rect,
    totals: &AggregatedView<bool, u64>,
    theme: &Theme,
) {
    let title = "Holiday vs working day";
    if totals.is_empty() {
        render_no_data(frame, area, title, theme);
        return;
    }

    let width = area.width.saturating_sub(4).max(1);
    let bar = WorkingDayBar::new(totals, theme).with_width(width);
    let mut lines = vec![Line::from("")];
    lines.extend(bar.to_lines());

    let paragraph = Paragraph::new(Text::from(lines)).block(chart_block(title, theme));
    frame.render_widget(paragraph, area);
}

/// Line chart of mean rentals per hour of day.
pub fn render_hourly_chart(
    frame: &mut Frame,
    area: Rect,
    means: &AggregatedView<u32, f64>,
    theme: &Theme,
) {
    let title = "Average rentals by hour";
    if means.is_empty() {
        render_no_data(frame, area, title, theme);
        return;
    }

    let points = hourly_points(means);
    let upper = y_upper_bound(&points);

    let datasets = vec![Dataset::default()
        .name("mean rentals")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(theme.line)
        .data(&points)];

    let x_labels: Vec<String> = ["0", "6", "12", "18", "23"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let y_labels = vec![
        "0".to_string(),
        format_number(upper / 2.0, 0),
        format_number(upper, 0),
    ];

    let chart = Chart::new(datasets)
        .block(chart_block(title, theme))
        .x_axis(
            Axis::default()
                .title("Hour")
                .style(theme.axis)
                .bounds([0.0, LAST_HOUR])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Rentals")
                .style(theme.axis)
                .bounds([0.0, upper])
                .labels(y_labels),
        );
    frame.render_widget(chart, area);
}

/// Placeholder panel for a chart with nothing to show.
pub fn render_no_data(frame: &mut Frame, area: Rect, title: &str, theme: &Theme) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled("No data", theme.warning)),
        Line::from(Span::styled("Widen the date range or press 'r'", theme.dim)),
    ];
    frame.render_widget(
        Paragraph::new(Text::from(text)).block(chart_block(title, theme)),
        area,
    );
}

// ── Tests ─────────────────────────────────────────────────────────────────────
