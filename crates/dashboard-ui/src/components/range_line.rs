use crate::themes::Theme;
use dashboard_core::models::DateRange;
use dashboard_runtime::session::Bound;
use ratatui::text::{Line, Span};

/// Date range selector: `Start: 2011-01-01   End: 2012-12-31`, with the bound
/// currently moved by the arrow keys highlighted.
pub struct RangeLine<'a> {
    pub range: Option<DateRange>,
    pub editing: Bound,
    /// The last request was clamped to the data bounds.
    pub adjusted: bool,
    pub theme: &'a Theme,
}

impl<'a> RangeLine<'a> {
    pub fn new(range: Option<DateRange>, editing: Bound, adjusted: bool, theme: &'a Theme) -> Self {
        Self {
            range,
            editing,
            adjusted,
            theme,
        }
    }

    pub fn to_line(&self) -> Line<'a> {
        let Some(range) = self.range else {
            return Line::from(Span::styled("Date range: no data loaded", self.theme.dim));
        };

        let bound_style = |bound: Bound| {
            if bound == self.editing {
                self.theme.selected_bound
            } else {
                self.theme.value
            }
        };

        let mut spans = vec![
            Span::styled("Start: ", self.theme.label),
            Span::styled(
                format!(" {} ", range.start.format("%Y-%m-%d")),
                bound_style(Bound::Start),
            ),
            Span::styled("   End: ", self.theme.label),
            Span::styled(
                format!(" {} ", range.end.format("%Y-%m-%d")),
                bound_style(Bound::End),
            ),
        ];
        if self.adjusted {
            spans.push(Span::styled("  (clamped to data)", self.theme.warning));
        }
        Line::from(spans)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
