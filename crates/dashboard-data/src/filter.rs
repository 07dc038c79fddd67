//! Date-range selection over the hourly dataset.
//!
//! Out-of-domain selections never fail: each bound is clamped into the
//! dataset's `[min, max]` date span and an inverted pair is swapped.

use dashboard_core::models::DateRange;
use tracing::debug;

use crate::dataset::HourlySet;

/// A requested range after it has been fitted to the dataset bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRange {
    /// The range actually applied.
    pub range: DateRange,
    /// `true` when the request had to be swapped or clamped.
    pub adjusted: bool,
}

/// Fit `requested` to the bounds of `hourly`.
///
/// Returns `None` only when `hourly` is empty (there are no bounds to fit to).
pub fn resolve(hourly: &HourlySet, requested: DateRange) -> Option<ResolvedRange> {
    let bounds = hourly.bounds()?;

    let (start, end) = if requested.is_inverted() {
        (requested.end, requested.start)
    } else {
        (requested.start, requested.end)
    };
    let range = DateRange::new(
        start.clamp(bounds.start, bounds.end),
        end.clamp(bounds.start, bounds.end),
    );
    let adjusted = range != requested;

    if adjusted {
        debug!(
            requested = %requested,
            applied = %range,
            "date range adjusted to dataset bounds"
        );
    }

    Some(ResolvedRange { range, adjusted })
}

/// Records of `hourly` whose date lies in the resolved `range`, inclusive.
pub fn filter(hourly: &HourlySet, range: DateRange) -> HourlySet {
    filter_resolved(hourly, range)
        .map(|(_, selected)| selected)
        .unwrap_or_default()
}

/// Like [`filter`], but also returns the range that was actually applied.
///
/// Returns `None` when `hourly` is empty.
pub fn filter_resolved(
    hourly: &HourlySet,
    range: DateRange,
) -> Option<(ResolvedRange, HourlySet)> {
    let resolved = resolve(hourly, range)?;
    let selected = HourlySet::from_records(
        hourly
            .between(resolved.range.start, resolved.range.end)
            .to_vec(),
    );
    Some((resolved, selected))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
