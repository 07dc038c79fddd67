//! Application state and TUI event loop for the bike sharing dashboard.
//!
//! [`App`] owns the theme and one [`DashboardSession`]. Key presses are
//! translated into session operations by [`App::handle_key`]; every change
//! re-renders the session's view.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};

use dashboard_runtime::session::DashboardSession;

use crate::dashboard_view;
use crate::themes::Theme;

/// Days moved by the arrow, up/down and page keys.
pub const DAY_STEP: i64 = 1;
pub const WEEK_STEP: i64 = 7;
pub const MONTH_STEP: i64 = 30;

// ── App ───────────────────────────────────────────────────────────────────────

pub struct App {
    pub theme: Theme,
    pub session: DashboardSession,
    /// Set to `true` to break out of the event loop on the next iteration.
    pub should_quit: bool,
}

impl App {
    pub fn new(theme_name: &str, session: DashboardSession) -> Self {
        Self {
            theme: Theme::from_name(theme_name),
            session,
            should_quit: false,
        }
    }

    // ── Public event loop ─────────────────────────────────────────────────────

    /// Run the dashboard until `q`, `Q` or `Ctrl+C`.
    ///
    /// Uses `crossterm::event::poll` with a 250 ms timeout so the loop stays on
    /// the current thread. The terminal is restored even when drawing fails.
    pub async fn run(mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let tick_rate = Duration::from_millis(250);

        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    // ── Input ─────────────────────────────────────────────────────────────────

    /// Apply one key press to the session.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Tab | KeyCode::BackTab => self.session.toggle_bound(),
            KeyCode::Left => self.session.shift(-DAY_STEP),
            KeyCode::Right => self.session.shift(DAY_STEP),
            KeyCode::Down => self.session.shift(-WEEK_STEP),
            KeyCode::Up => self.session.shift(WEEK_STEP),
            KeyCode::PageDown => self.session.shift(-MONTH_STEP),
            KeyCode::PageUp => self.session.shift(MONTH_STEP),
            KeyCode::Home => self.session.jump_to_first(),
            KeyCode::End => self.session.jump_to_last(),
            KeyCode::Char('r') | KeyCode::Char('R') => self.session.reset(),
            KeyCode::Char('s') | KeyCode::Char('S') => self.session.toggle_scope(),
            _ => {}
        }
    }

    // ── Private helpers ───────────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        dashboard_view::render_dashboard(frame, area, &self.session, &self.theme);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
