use crate::themes::Theme;
use dashboard_core::formatting::{format_count, percentage, working_day_label};
use dashboard_core::models::AggregatedView;
use ratatui::text::{Line, Span};

/// Character used for every bar segment.
pub const SEGMENT_CHAR: char = '\u{2588}'; // █  FULL BLOCK

// ── WorkingDayBar ────────────────────────────────────────────────────────────

/// A proportional two-colour bar splitting rentals between holidays and
/// working days.
///
/// Each side is a contiguous coloured segment whose width is proportional to
/// its share of the total. A legend line with counts and percentages follows.
pub struct WorkingDayBar<'a> {
    /// `(working_day, rentals, percentage)` in key order (holiday first).
    pub segments: Vec<(bool, u64, f64)>,
    pub theme: &'a Theme,
    /// Total width of the bar in terminal columns.
    pub width: u16,
}

impl<'a> WorkingDayBar<'a> {
    pub fn new(totals: &AggregatedView<bool, u64>, theme: &'a Theme) -> Self {
        let whole = totals.total() as f64;
        let segments = totals
            .iter()
            .map(|(working_day, count)| {
                (*working_day, *count, percentage(*count as f64, whole, 1))
            })
            .collect();
        Self {
            segments,
            theme,
            width: 50,
        }
    }

    pub fn with_width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    /// Segment widths in columns. Rounding drift goes to the last segment so
    /// that the bar always spans exactly `width` columns.
    pub fn segment_widths(&self) -> Vec<usize> {
        let width = usize::from(self.width);
        let mut widths: Vec<usize> = self
            .segments
            .iter()
            .map(|(_, _, pct)| ((pct / 100.0) * width as f64).round() as usize)
            .collect();
        let used: usize = widths.iter().sum();
        if let Some(last) = widths.last_mut() {
            if used > width {
                *last = last.saturating_sub(used - width);
            } else {
                *last += width - used;
            }
        }
        widths
    }

    /// The bar itself.
    pub fn bar_line(&self) -> Line<'a> {
        let spans: Vec<Span<'a>> = self
            .segments
            .iter()
            .zip(self.segment_widths())
            .filter(|(_, chars)| *chars > 0)
            .map(|((working_day, _, _), chars)| {
                Span::styled(
                    SEGMENT_CHAR.to_string().repeat(chars),
                    self.theme.working_day_style(*working_day),
                )
            })
            .collect();
        Line::from(spans)
    }

    /// One legend entry per side: `■ Holiday 1,234 (30.4%)`.
    pub fn legend_line(&self) -> Line<'a> {
        let mut spans: Vec<Span<'a>> = Vec::new();
        for (working_day, count, pct) in &self.segments {
            let style = self.theme.working_day_style(*working_day);
            spans.push(Span::styled("■ ", style));
            spans.push(Span::styled(
                format!(
                    "{}: {} ({:.1}%)  ",
                    working_day_label(*working_day),
                    format_count(*count),
                    pct
                ),
                style,
            ));
        }
        Line::from(spans)
    }

    pub fn to_lines(&self) -> Vec<Line<'a>> {
        vec![self.bar_line(), Line::from(""), self.legend_line()]
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
