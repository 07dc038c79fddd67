//! Immutable dashboard context and the pure `render` step.
//!
//! The two datasets are loaded once and held behind [`Arc`] so that any
//! number of sessions can read them without synchronisation. [`render`]
//! derives a complete [`ViewModel`] from the context and a requested date
//! range; it has no side effects and can be called on every interaction.

use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use dashboard_core::error::Result;
use dashboard_core::models::{AggregatedView, ChartScope, DateRange, WeatherCategory};
use dashboard_data::aggregator::RentalAggregator;
use dashboard_data::dataset::{DailySet, HourlySet};
use dashboard_data::filter;
use dashboard_data::reader::DataStore;

// ── DashboardContext ──────────────────────────────────────────────────────────

/// Read-only tables shared by every dashboard session.
#[derive(Debug, Clone)]
pub struct DashboardContext {
    hourly: Arc<HourlySet>,
    daily: Arc<DailySet>,
    /// Year code plotted by the monthly chart.
    monthly_year: u8,
}

impl DashboardContext {
    /// Wrap already-loaded tables. The monthly chart defaults to year code 0.
    pub fn new(hourly: HourlySet, daily: DailySet) -> Self {
        Self {
            hourly: Arc::new(hourly),
            daily: Arc::new(daily),
            monthly_year: 0,
        }
    }

    /// Load both CSV files and build the context.
    pub fn load(hourly_path: &Path, daily_path: &Path) -> Result<Self> {
        let (hourly, daily) = DataStore::load(hourly_path, daily_path)?;
        Ok(Self::new(hourly, daily))
    }

    /// Select the year code plotted by the monthly chart.
    pub fn with_monthly_year(mut self, year: u8) -> Self {
        self.monthly_year = year;
        self
    }

    pub fn hourly(&self) -> &HourlySet {
        &self.hourly
    }

    pub fn daily(&self) -> &DailySet {
        &self.daily
    }

    pub fn monthly_year(&self) -> u8 {
        self.monthly_year
    }

    /// Date span of the hourly table.
    pub fn bounds(&self) -> Option<DateRange> {
        self.hourly.bounds()
    }
}

// ── ViewModel ─────────────────────────────────────────────────────────────────

/// Everything the presentation layer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    /// Range actually applied, `None` when there is no hourly data.
    pub range: Option<DateRange>,
    /// `true` when the requested range had to be clamped or swapped.
    pub range_adjusted: bool,
    pub scope: ChartScope,
    /// Year code of `monthly_totals`.
    pub monthly_year: u8,
    /// Total rentals inside the applied range.
    pub total_rentals: u64,
    /// Rentals per day inside the applied range.
    pub daily_totals: AggregatedView<NaiveDate, u64>,
    pub monthly_totals: AggregatedView<u32, u64>,
    pub weather_totals: AggregatedView<WeatherCategory, u64>,
    pub working_day_totals: AggregatedView<bool, u64>,
    pub hourly_means: AggregatedView<u32, f64>,
}

impl ViewModel {
    /// View of a context with no selection: only the range-independent
    /// charts are populated.
    pub fn unselected(context: &DashboardContext, scope: ChartScope) -> Self {
        let empty = HourlySet::default();
        build_view(context, None, false, &empty, scope)
    }

    /// Calendar days in the applied range, including days without rentals.
    pub fn selected_days(&self) -> i64 {
        self.range.map_or(0, |range| range.days())
    }
}

// ── render ────────────────────────────────────────────────────────────────────

/// Derive the view for `requested` with the default chart scope.
pub fn render(context: &DashboardContext, requested: DateRange) -> ViewModel {
    render_with_scope(context, requested, ChartScope::default())
}

/// Derive the view for `requested`.
///
/// The range is fitted to the data bounds first; the total metric and daily
/// totals always come from the fitted selection. With [`ChartScope::Full`]
/// the weather, working-day and hourly charts use the whole hourly table,
/// with [`ChartScope::Selection`] they use the selection too.
pub fn render_with_scope(
    context: &DashboardContext,
    requested: DateRange,
    scope: ChartScope,
) -> ViewModel {
    match filter::filter_resolved(context.hourly(), requested) {
        Some((resolved, selected)) => build_view(
            context,
            Some(resolved.range),
            resolved.adjusted,
            &selected,
            scope,
        ),
        None => ViewModel::unselected(context, scope),
    }
}

fn build_view(
    context: &DashboardContext,
    range: Option<DateRange>,
    range_adjusted: bool,
    selected: &HourlySet,
    scope: ChartScope,
) -> ViewModel {
    let daily_totals = RentalAggregator::daily_totals(selected);
    let total_rentals = daily_totals.total();

    let chart_source = match scope {
        ChartScope::Full => context.hourly(),
        ChartScope::Selection => selected,
    };

    tracing::debug!(
        records = selected.len(),
        total_rentals,
        scope = %scope,
        "view rendered"
    );

    ViewModel {
        range,
        range_adjusted,
        scope,
        monthly_year: context.monthly_year(),
        total_rentals,
        daily_totals,
        monthly_totals: RentalAggregator::monthly_totals_for_year(
            context.daily(),
            context.monthly_year(),
        ),
        weather_totals: RentalAggregator::totals_by_weather(chart_source),
        working_day_totals: RentalAggregator::totals_by_working_day(chart_source),
        hourly_means: RentalAggregator::mean_by_hour(chart_source),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
