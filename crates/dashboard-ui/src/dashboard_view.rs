//! Full-screen dashboard layout.
//!
//! ```text
//! header (4 lines)
//! total rentals metric
//! start / end selector
//! ┌ monthly ──────┐┌ weather ──────┐
//! └───────────────┘└───────────────┘
//! ┌ working day ──┐┌ hourly ───────┐
//! └───────────────┘└───────────────┘
//! key help
//! ```

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use dashboard_core::formatting::format_count;
use dashboard_core::models::calendar_year;
use dashboard_runtime::session::DashboardSession;

use crate::charts;
use crate::components::header::Header;
use crate::components::range_line::RangeLine;
use crate::themes::Theme;

/// `(key, action)` pairs shown in the footer.
pub const KEY_HELP: [(&str, &str); 8] = [
    ("Tab", "start/end"),
    ("←/→", "±1 day"),
    ("↑/↓", "±7 days"),
    ("PgUp/PgDn", "±30 days"),
    ("Home/End", "first/last day"),
    ("r", "reset"),
    ("s", "chart scope"),
    ("q", "quit"),
];

/// Draw the whole dashboard for `session` into `area`.
pub fn render_dashboard(frame: &mut Frame, area: Rect, session: &DashboardSession, theme: &Theme) {
    let view = session.view();
    if session.context().hourly().is_empty() {
        render_no_data(frame, area, theme);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(area);

    let header = Header::new(view.range, view.scope, theme);
    frame.render_widget(Paragraph::new(Text::from(header.to_lines())), rows[0]);

    frame.render_widget(Paragraph::new(metric_line(session, theme)), rows[1]);

    let range_line = RangeLine::new(view.range, session.editing(), view.range_adjusted, theme);
    frame.render_widget(Paragraph::new(range_line.to_line()), rows[2]);

    let grid = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[3]);
    let top = split_columns(grid[0]);
    let bottom = split_columns(grid[1]);

    charts::render_monthly_chart(
        frame,
        top[0],
        &view.monthly_totals,
        calendar_year(view.monthly_year),
        theme,
    );
    charts::render_weather_chart(frame, top[1], &view.weather_totals, theme);
    charts::render_working_day_chart(frame, bottom[0], &view.working_day_totals, theme);
    charts::render_hourly_chart(frame, bottom[1], &view.hourly_means, theme);

    frame.render_widget(Paragraph::new(help_line(theme)), rows[4]);
}

fn split_columns(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area)
}

/// `Total rentals: 3,292,679  (731 days)`
pub fn metric_line<'a>(session: &DashboardSession, theme: &Theme) -> Line<'a> {
    let view = session.view();
    Line::from(vec![
        Span::styled("Total rentals: ", theme.label),
        Span::styled(format_count(view.total_rentals), theme.value),
        Span::styled(format!("  ({} days)", view.selected_days()), theme.dim),
    ])
}

pub fn help_line<'a>(theme: &Theme) -> Line<'a> {
    let mut spans = Vec::with_capacity(KEY_HELP.len() * 2);
    for (key, action) in KEY_HELP {
        spans.push(Span::styled(key, theme.help_key));
        spans.push(Span::styled(format!(" {action}  "), theme.dim));
    }
    Line::from(spans)
}

/// Shown when the hourly table has no rows at all.
pub fn render_no_data(frame: &mut Frame, area: Rect, theme: &Theme) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled("No rental data loaded", theme.warning)),
        Line::from(""),
        Line::from(Span::styled(
            "Check that the hourly CSV file has data rows.",
            theme.dim,
        )),
        Line::from(Span::styled("Press 'q' or Ctrl+C to exit", theme.dim)),
    ];
    frame.render_widget(
        Paragraph::new(Text::from(text)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Bike Sharing Dashboard "),
        ),
        area,
    );
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use dashboard_core::models::{ChartScope, DailyRecord, HourlyRecord, WeatherCategory};
    use dashboard_runtime::context::DashboardContext;
    use dashboard_runtime::data::dataset::{DailySet, HourlySet};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn make_session() -> DashboardSession {
        let mut hourly = Vec::new();
        for day in 1..=28u32 {
            for hour in 0..24u32 {
                hourly.push(HourlyRecord {
                    date: NaiveDate::from_ymd_opt(2011, 2, day).unwrap(),
                    hour,
                    count: u64::from(hour * 3 + day),
                    weather: WeatherCategory((hour % 3 + 1) as u8),
                    working_day: day % 7 > 1,
                    year: 0,
                    month: 2,
                });
            }
        }
        let daily = vec![DailyRecord {
            date: NaiveDate::from_ymd_opt(2011, 2, 1).unwrap(),
            count: 1_500,
            weather: WeatherCategory::CLEAR,
            working_day: true,
            year: 0,
            month: 2,
        }];
        let ctx = DashboardContext::new(
            HourlySet::from_records(hourly),
            DailySet::from_records(daily),
        );
        DashboardSession::new(ctx, None, None, ChartScope::Full)
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_dashboard_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        let theme = Theme::dark();
        let session = make_session();

        terminal
            .draw(|frame| render_dashboard(frame, frame.area(), &session, &theme))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("BIKE SHARING DASHBOARD"));
        assert!(text.contains("Total rentals:"));
        assert!(text.contains("2011-02-01"));
        assert!(text.contains("Monthly rentals 2011"));
        assert!(text.contains("Average rentals by hour"));
    }

    #[test]
    fn test_render_dashboard_small_terminal_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(30, 10)).unwrap();
        let theme = Theme::classic();
        let session = make_session();

        terminal
            .draw(|frame| render_dashboard(frame, frame.area(), &session, &theme))
            .unwrap();
    }

    #[test]
    fn test_render_dashboard_without_data() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let theme = Theme::dark();
        let ctx = DashboardContext::new(HourlySet::default(), DailySet::default());
        let session = DashboardSession::new(ctx, None, None, ChartScope::Full);

        terminal
            .draw(|frame| render_dashboard(frame, frame.area(), &session, &theme))
            .unwrap();
        assert!(buffer_text(&terminal).contains("No rental data loaded"));
    }

    #[test]
    fn test_metric_line() {
        let theme = Theme::dark();
        let session = make_session();
        let text: String = metric_line(&session, &theme)
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert!(text.starts_with("Total rentals: "));
        assert!(text.ends_with("(28 days)"));
    }

    #[test]
    fn test_metric_line_counts_days_without_rentals() {
        let theme = Theme::dark();
        let record = |day: u32| HourlyRecord {
            date: NaiveDate::from_ymd_opt(2011, 1, day).unwrap(),
            hour: 9,
            count: 4,
            weather: WeatherCategory::CLEAR,
            working_day: true,
            year: 0,
            month: 1,
        };
        let ctx = DashboardContext::new(
            HourlySet::from_records(vec![record(1), record(10)]),
            DailySet::default(),
        );
        let session = DashboardSession::new(ctx, None, None, ChartScope::Full);
        let text: String = metric_line(&session, &theme)
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert!(text.ends_with("(10 days)"), "metric was: {text}");
    }

    #[test]
    fn test_help_line_lists_every_key() {
        let theme = Theme::dark();
        let line = help_line(&theme);
        assert_eq!(line.spans.len(), KEY_HELP.len() * 2);
    }
}
