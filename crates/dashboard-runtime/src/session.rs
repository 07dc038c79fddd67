//! Per-user dashboard session.
//!
//! A session owns a handle to the shared [`DashboardContext`], the current
//! selection and the most recently rendered [`ViewModel`]. Every mutation
//! re-renders, so `view()` always reflects the latest input.

use chrono::{Duration, NaiveDate};
use dashboard_core::models::{ChartScope, DateRange};
use tracing::debug;

use crate::context::{render_with_scope, DashboardContext, ViewModel};

/// Which end of the selection the range controls move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Bound {
    #[default]
    Start,
    End,
}

impl Bound {
    pub fn toggled(self) -> Self {
        match self {
            Bound::Start => Bound::End,
            Bound::End => Bound::Start,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Bound::Start => "start",
            Bound::End => "end",
        }
    }
}

/// Interactive state for one viewer of the dashboard.
#[derive(Debug, Clone)]
pub struct DashboardSession {
    context: DashboardContext,
    selection: Option<DateRange>,
    editing: Bound,
    scope: ChartScope,
    view: ViewModel,
}

impl DashboardSession {
    /// Start a session. Missing bounds default to the dataset's own bounds.
    pub fn new(
        context: DashboardContext,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        scope: ChartScope,
    ) -> Self {
        let bounds = context.bounds();
        let requested = match (
            start.or(bounds.map(|b| b.start)),
            end.or(bounds.map(|b| b.end)),
        ) {
            (Some(s), Some(e)) => Some(DateRange::new(s, e)),
            _ => None,
        };

        let view = ViewModel::unselected(&context, scope);
        let mut session = Self {
            context,
            selection: None,
            editing: Bound::default(),
            scope,
            view,
        };
        if let Some(requested) = requested {
            session.apply(requested);
        }
        session
    }

    pub fn view(&self) -> &ViewModel {
        &self.view
    }

    pub fn context(&self) -> &DashboardContext {
        &self.context
    }

    /// Range currently applied, `None` without hourly data.
    pub fn selection(&self) -> Option<DateRange> {
        self.selection
    }

    pub fn editing(&self) -> Bound {
        self.editing
    }

    pub fn scope(&self) -> ChartScope {
        self.scope
    }

    pub fn toggle_bound(&mut self) {
        self.editing = self.editing.toggled();
    }

    pub fn toggle_scope(&mut self) {
        self.scope = self.scope.toggled();
        if let Some(current) = self.selection {
            self.apply(current);
        } else {
            self.view = ViewModel::unselected(&self.context, self.scope);
        }
    }

    /// Move the bound being edited by `days`. The other bound never moves.
    pub fn shift(&mut self, days: i64) {
        let Some(current) = self.selection else {
            return;
        };
        let edited = match self.editing {
            Bound::Start => current.start,
            Bound::End => current.end,
        };
        let moved = Duration::try_days(days)
            .and_then(|delta| edited.checked_add_signed(delta))
            .unwrap_or(edited);
        self.set_bound(current, moved);
    }

    /// Move the edited bound to the first day of the data.
    pub fn jump_to_first(&mut self) {
        if let (Some(current), Some(bounds)) = (self.selection, self.context.bounds()) {
            self.set_bound(current, bounds.start);
        }
    }

    /// Move the edited bound to the last day of the data.
    pub fn jump_to_last(&mut self) {
        if let (Some(current), Some(bounds)) = (self.selection, self.context.bounds()) {
            self.set_bound(current, bounds.end);
        }
    }

    /// Select the whole dataset again.
    pub fn reset(&mut self) {
        if let Some(bounds) = self.context.bounds() {
            self.apply(bounds);
        }
    }

    fn set_bound(&mut self, current: DateRange, date: NaiveDate) {
        let requested = match self.editing {
            Bound::Start => DateRange::new(date.min(current.end), current.end),
            Bound::End => DateRange::new(current.start, date.max(current.start)),
        };
        self.apply(requested);
    }

    fn apply(&mut self, requested: DateRange) {
        self.view = render_with_scope(&self.context, requested, self.scope);
        self.selection = self.view.range;
        debug!(
            editing = self.editing.label(),
            selection = ?self.selection,
            "selection updated"
        );
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
