//! Calendar-dated, serializable views of timelines and snapshots.
//!
//! The tree itself stays in fractional Julian Dates; only here do spans
//! become civil dates and rounded durations. Each level reports in its
//! natural unit: Mahadashas in years, Antardashas in months,
//! Pratyantardashas in days.

use serde::Serialize;

use hora_time::jd_to_calendar;

use crate::vimshottari::types::{
    DAYS_PER_MONTH, DAYS_PER_YEAR, DashaLevel, DashaPeriod, DashaSnapshot, DashaTimeline,
};

/// One period rendered for presentation.
#[derive(Debug, Clone, Serialize)]
pub struct PeriodNode {
    pub ruler: &'static str,
    pub level: &'static str,
    /// Civil start date, `YYYY-MM-DD`.
    pub start: String,
    /// Civil end date, `YYYY-MM-DD`.
    pub end: String,
    pub duration: f64,
    /// Unit of `duration`: `years`, `months` or `days` by level.
    pub unit: &'static str,
    pub children: Vec<PeriodNode>,
}

/// A full timeline rendered as nested nodes.
#[derive(Debug, Clone, Serialize)]
pub struct TimelineReport {
    /// Civil birth date, `YYYY-MM-DD`.
    pub birth: String,
    /// Moon's sidereal longitude at birth, degrees in [0, 360).
    pub moon_longitude: f64,
    pub periods: Vec<PeriodNode>,
}

/// An active chain rendered as flat nodes, outermost first.
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotReport {
    /// Civil query date, `YYYY-MM-DD`.
    pub query: String,
    pub active: Vec<PeriodNode>,
}

/// Civil date of a Julian Date, `YYYY-MM-DD`.
pub fn date_string(jd: f64) -> String {
    let (year, month, day_frac) = jd_to_calendar(jd);
    format!("{:04}-{:02}-{:02}", year, month, day_frac.floor() as u32)
}

/// A period's duration in the unit natural to its level.
pub fn natural_duration(period: &DashaPeriod) -> (f64, &'static str) {
    let days = period.duration_days();
    match period.level {
        DashaLevel::Mahadasha => (days / DAYS_PER_YEAR, "years"),
        DashaLevel::Antardasha => (days / DAYS_PER_MONTH, "months"),
        DashaLevel::Pratyantardasha => (days, "days"),
    }
}

fn leaf_node(period: &DashaPeriod) -> PeriodNode {
    let (duration, unit) = natural_duration(period);
    PeriodNode {
        ruler: period.graha.name(),
        level: period.level.name(),
        start: date_string(period.start_jd),
        end: date_string(period.end_jd),
        duration,
        unit,
        children: Vec::new(),
    }
}

fn node_with_children(
    timeline: &DashaTimeline,
    level_idx: usize,
    period_idx: usize,
) -> PeriodNode {
    let mut node = leaf_node(&timeline.levels[level_idx][period_idx]);
    if let Some(next_level) = timeline.levels.get(level_idx + 1) {
        node.children = next_level
            .iter()
            .enumerate()
            .filter(|(_, child)| child.parent_idx == period_idx as u32)
            .map(|(child_idx, _)| node_with_children(timeline, level_idx + 1, child_idx))
            .collect();
    }
    node
}

/// Render a timeline as nested calendar-dated nodes.
pub fn timeline_report(timeline: &DashaTimeline) -> TimelineReport {
    let periods = timeline
        .levels
        .first()
        .map(|level0| (0..level0.len()).map(|i| node_with_children(timeline, 0, i)).collect())
        .unwrap_or_default();

    TimelineReport {
        birth: date_string(timeline.birth_jd),
        moon_longitude: timeline.moon_longitude,
        periods,
    }
}

/// Render an active chain as flat calendar-dated nodes.
pub fn snapshot_report(snapshot: &DashaSnapshot) -> SnapshotReport {
    SnapshotReport {
        query: date_string(snapshot.query_jd),
        active: snapshot.periods.iter().map(leaf_node).collect(),
    }
}
