use dashboard_core::models::WeatherCategory;
use ratatui::style::{Color, Modifier, Style};

/// Terminal background type detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackgroundType {
    Dark,
    Light,
    Unknown,
}

/// Detect terminal background type from the `COLORFGBG` environment variable.
///
/// The variable has the format `"foreground;background"`.  Background values
/// 0–6 are considered dark; 7–15 are considered light.  If the variable is
/// absent or unparseable, `BackgroundType::Dark` is returned.
pub fn detect_background() -> BackgroundType {
    if let Ok(val) = std::env::var("COLORFGBG") {
        if let Some(bg) = val.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                return if bg_num <= 6 {
                    BackgroundType::Dark
                } else {
                    BackgroundType::Light
                };
            }
        }
    }
    BackgroundType::Dark
}

/// Every style used by the dashboard widgets.
#[derive(Debug, Clone)]
pub struct Theme {
    // ── Header ───────────────────────────────────────────────────────────────
    pub header: Style,
    pub header_sparkle: Style,
    pub separator: Style,

    // ── Text ─────────────────────────────────────────────────────────────────
    pub text: Style,
    pub dim: Style,
    pub label: Style,
    pub value: Style,
    pub warning: Style,

    // ── Range selection ──────────────────────────────────────────────────────
    /// The bound currently moved by the arrow keys.
    pub selected_bound: Style,
    pub help_key: Style,

    // ── Charts ───────────────────────────────────────────────────────────────
    pub chart_border: Style,
    pub chart_title: Style,
    pub axis: Style,
    /// Monthly bars.
    pub bar: Style,
    pub bar_value: Style,
    /// Hourly mean line.
    pub line: Style,

    // ── Weather ──────────────────────────────────────────────────────────────
    pub weather_clear: Style,
    pub weather_mist: Style,
    pub weather_light: Style,
    pub weather_heavy: Style,
    pub weather_unknown: Style,

    // ── Working day split ────────────────────────────────────────────────────
    pub holiday: Style,
    pub working_day: Style,
}

impl Theme {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Dark-background terminal theme (default).
    pub fn dark() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            header_sparkle: Style::default().fg(Color::Yellow),
            separator: Style::default().fg(Color::DarkGray),

            text: Style::default().fg(Color::White),
            dim: Style::default().fg(Color::DarkGray),
            label: Style::default().fg(Color::Gray),
            value: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            warning: Style::default().fg(Color::Yellow),

            selected_bound: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            help_key: Style::default().fg(Color::Cyan),

            chart_border: Style::default().fg(Color::DarkGray),
            chart_title: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            axis: Style::default().fg(Color::Gray),
            bar: Style::default().fg(Color::Cyan),
            bar_value: Style::default().fg(Color::Black).bg(Color::Cyan),
            line: Style::default().fg(Color::Yellow),

            weather_clear: Style::default().fg(Color::Yellow),
            weather_mist: Style::default().fg(Color::Gray),
            weather_light: Style::default().fg(Color::Cyan),
            weather_heavy: Style::default().fg(Color::Blue),
            weather_unknown: Style::default().fg(Color::DarkGray),

            holiday: Style::default().fg(Color::Magenta),
            working_day: Style::default().fg(Color::Green),
        }
    }

    /// Light-background terminal theme.
    ///
    /// Uses dark colours for text and saturated accents so that content
    /// remains legible against a white/light-grey terminal canvas.
    pub fn light() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            header_sparkle: Style::default().fg(Color::Magenta),
            separator: Style::default().fg(Color::Gray),

            text: Style::default().fg(Color::Black),
            dim: Style::default().fg(Color::Gray),
            label: Style::default().fg(Color::DarkGray),
            value: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            warning: Style::default().fg(Color::Red),

            selected_bound: Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            help_key: Style::default().fg(Color::Blue),

            chart_border: Style::default().fg(Color::Gray),
            chart_title: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            axis: Style::default().fg(Color::DarkGray),
            bar: Style::default().fg(Color::Blue),
            bar_value: Style::default().fg(Color::White).bg(Color::Blue),
            line: Style::default().fg(Color::Red),

            weather_clear: Style::default().fg(Color::Yellow),
            weather_mist: Style::default().fg(Color::DarkGray),
            weather_light: Style::default().fg(Color::Cyan),
            weather_heavy: Style::default().fg(Color::Blue),
            weather_unknown: Style::default().fg(Color::Gray),

            holiday: Style::default().fg(Color::Magenta),
            working_day: Style::default().fg(Color::Green),
        }
    }

    /// Classic terminal theme using only the basic 8-colour ANSI palette.
    ///
    /// Avoids bold modifiers to maximise compatibility with minimal terminal
    /// emulators.
    pub fn classic() -> Self {
        Self {
            header: Style::default().fg(Color::Cyan),
            header_sparkle: Style::default().fg(Color::White),
            separator: Style::default().fg(Color::DarkGray),

            text: Style::default().fg(Color::White),
            dim: Style::default().fg(Color::DarkGray),
            label: Style::default().fg(Color::Gray),
            value: Style::default().fg(Color::White),
            warning: Style::default().fg(Color::Yellow),

            selected_bound: Style::default().fg(Color::Black).bg(Color::White),
            help_key: Style::default().fg(Color::Cyan),

            chart_border: Style::default().fg(Color::DarkGray),
            chart_title: Style::default().fg(Color::Cyan),
            axis: Style::default().fg(Color::Gray),
            bar: Style::default().fg(Color::Green),
            bar_value: Style::default().fg(Color::Black).bg(Color::Green),
            line: Style::default().fg(Color::Yellow),

            weather_clear: Style::default().fg(Color::Yellow),
            weather_mist: Style::default().fg(Color::White),
            weather_light: Style::default().fg(Color::Cyan),
            weather_heavy: Style::default().fg(Color::Blue),
            weather_unknown: Style::default().fg(Color::DarkGray),

            holiday: Style::default().fg(Color::Magenta),
            working_day: Style::default().fg(Color::Green),
        }
    }

    /// Choose a theme automatically based on the detected terminal background.
    pub fn auto_detect() -> Self {
        match detect_background() {
            BackgroundType::Light => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Construct a theme by name.  Falls back to `auto_detect` for unknown
    /// names.
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            "dark" => Self::dark(),
            "classic" => Self::classic(),
            _ => Self::auto_detect(),
        }
    }

    // ── Style helpers ────────────────────────────────────────────────────────

    /// Bar colour for a weather category.
    pub fn weather_style(&self, weather: WeatherCategory) -> Style {
        match weather {
            WeatherCategory::CLEAR => self.weather_clear,
            WeatherCategory::MIST => self.weather_mist,
            WeatherCategory::LIGHT_PRECIPITATION => self.weather_light,
            WeatherCategory::HEAVY_PRECIPITATION => self.weather_heavy,
            _ => self.weather_unknown,
        }
    }

    /// Segment colour for one side of the working-day split.
    pub fn working_day_style(&self, working_day: bool) -> Style {
        if working_day {
            self.working_day
        } else {
            self.holiday
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── Theme construction ───────────────────────────────────────────────────

    #[test]
    fn test_dark_theme_creation() {
        let t = Theme::dark();
        assert_eq!(t.header.fg, Some(Color::Cyan));
        assert_eq!(t.bar.fg, Some(Color::Cyan));
        assert_eq!(t.line.fg, Some(Color::Yellow));
        assert_eq!(t.working_day.fg, Some(Color::Green));
        assert_eq!(t.holiday.fg, Some(Color::Magenta));
    }

    #[test]
    fn test_light_theme_creation() {
        let t = Theme::light();
        assert_eq!(t.header.fg, Some(Color::Blue));
        assert_eq!(t.text.fg, Some(Color::Black));
        assert_eq!(t.bar.fg, Some(Color::Blue));
    }

    #[test]
    fn test_classic_theme_has_no_bold() {
        let t = Theme::classic();
        assert!(!t.header.add_modifier.contains(Modifier::BOLD));
        assert!(!t.value.add_modifier.contains(Modifier::BOLD));
        assert!(!t.selected_bound.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Theme::from_name("dark").header.fg, Some(Color::Cyan));
        assert_eq!(Theme::from_name("light").header.fg, Some(Color::Blue));
        assert_eq!(Theme::from_name("classic").bar.fg, Some(Color::Green));
    }

    #[test]
    fn test_from_name_unknown_falls_back() {
        let t = Theme::from_name("does-not-exist");
        assert!(t.header.fg.is_some());
    }

    // ── Style helpers ────────────────────────────────────────────────────────

    #[test]
    fn test_weather_style() {
        let t = Theme::dark();
        assert_eq!(t.weather_style(WeatherCategory::CLEAR).fg, Some(Color::Yellow));
        assert_eq!(t.weather_style(WeatherCategory::MIST).fg, Some(Color::Gray));
        assert_eq!(
            t.weather_style(WeatherCategory::LIGHT_PRECIPITATION).fg,
            Some(Color::Cyan)
        );
        assert_eq!(
            t.weather_style(WeatherCategory::HEAVY_PRECIPITATION).fg,
            Some(Color::Blue)
        );
        assert_eq!(t.weather_style(WeatherCategory(9)).fg, Some(Color::DarkGray));
    }

    #[test]
    fn test_working_day_style() {
        let t = Theme::dark();
        assert_eq!(t.working_day_style(true), t.working_day);
        assert_eq!(t.working_day_style(false), t.holiday);
    }
}
