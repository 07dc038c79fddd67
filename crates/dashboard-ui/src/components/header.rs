use crate::themes::Theme;
use dashboard_core::models::{ChartScope, DateRange};
use ratatui::text::{Line, Span};

/// Decorative sparkle string placed either side of the application title.
pub const SPARKLES: &str = "✦ ✧ ✦ ✧";

/// Width of the `=` separator under the title.
pub const SEPARATOR_WIDTH: usize = 60;

/// Dashboard header rendering four lines:
///
/// 1. Application title with sparkle decorations (ALL CAPS).
/// 2. A 60-column `=` separator.
/// 3. Applied range and chart scope in `[ range | scope ]` format.
/// 4. An empty line.
pub struct Header<'a> {
    /// Applied date range, `None` when no data is loaded.
    pub range: Option<DateRange>,
    pub scope: ChartScope,
    pub theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(range: Option<DateRange>, scope: ChartScope, theme: &'a Theme) -> Self {
        Self {
            range,
            scope,
            theme,
        }
    }

    /// Render the header as exactly four lines.
    pub fn to_lines(&self) -> Vec<Line<'a>> {
        let separator = "=".repeat(SEPARATOR_WIDTH);
        let range = match self.range {
            Some(range) => range.to_string(),
            None => "no data".to_string(),
        };

        vec![
            Line::from(vec![
                Span::styled(SPARKLES, self.theme.header_sparkle),
                Span::styled(" BIKE SHARING DASHBOARD ", self.theme.header),
                Span::styled(SPARKLES, self.theme.header_sparkle),
            ]),
            Line::from(Span::styled(separator, self.theme.separator)),
            Line::from(vec![
                Span::styled("[ ", self.theme.label),
                Span::styled(range, self.theme.value),
                Span::styled(" | ", self.theme.label),
                Span::styled(self.scope.as_str(), self.theme.value),
                Span::styled(" ]", self.theme.label),
            ]),
            Line::from(""),
        ]
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
