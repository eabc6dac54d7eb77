//! Active-period queries.
//!
//! A snapshot answers "which Mahadasha, Antardasha and Pratyantardasha
//! hold this instant". [`snapshot_at`] drills down lazily, materializing
//! only the children along the active path, so asking about one instant
//! never builds the 729-period bottom level.

use log::debug;

use hora_time::UtcTime;

use crate::error::DashaError;
use crate::vimshottari::tree::{children_of, mahadasha_level};
use crate::vimshottari::types::{DashaPeriod, DashaSnapshot, DashaTimeline, TimelineConfig};

/// Index of the period containing `query_jd`, if any.
///
/// Spans are half-open, so an instant exactly on a boundary belongs to
/// the later period.
pub fn find_active_period(periods: &[DashaPeriod], query_jd: f64) -> Option<usize> {
    periods.iter().position(|p| p.contains(query_jd))
}

/// Active chain at an instant, from an already built timeline.
///
/// Returns an empty chain when the instant falls outside the horizon.
pub fn snapshot_from_timeline(timeline: &DashaTimeline, query_jd: f64) -> DashaSnapshot {
    let mut periods = Vec::with_capacity(timeline.levels.len());
    for level in &timeline.levels {
        match find_active_period(level, query_jd) {
            Some(idx) => periods.push(level[idx]),
            None => break,
        }
    }
    DashaSnapshot { query_jd, periods }
}

/// Active chain at an instant, computed directly from birth inputs.
///
/// Produces exactly the periods a full [`super::tree::build_timeline`]
/// call would contain along the active path, without materializing the
/// rest of the tree. Fails when the instant lies before birth or past
/// the configured horizon.
pub fn snapshot_at(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    config: &TimelineConfig,
    query_jd: f64,
) -> Result<DashaSnapshot, DashaError> {
    config.validate()?;
    if !query_jd.is_finite() {
        return Err(DashaError::InvalidInput("query instant must be finite"));
    }

    let level0 = mahadasha_level(birth_jd, moon_sidereal_lon, config.cycles)?;
    let Some(idx) = find_active_period(&level0, query_jd) else {
        return Err(DashaError::InvalidInput("query instant is outside the dasha horizon"));
    };

    let mut active = vec![level0[idx]];
    let mut current = level0[idx];
    // Index of `current` within its full level, so drilled children carry
    // the same parent_idx a fully built tree would record.
    let mut full_idx = idx;

    for _ in 1..config.depth {
        let children = children_of(&current, full_idx as u32)?;
        let Some(pos) = children.iter().position(|c| c.contains(query_jd)) else {
            break;
        };
        current = children[pos];
        full_idx = full_idx * 9 + pos;
        active.push(current);
    }

    debug!("snapshot at jd {query_jd:.6}: {} active levels", active.len());
    Ok(DashaSnapshot { query_jd, periods: active })
}

/// Active chain for civil birth and query instants.
pub fn snapshot_for_birth(
    birth: &UtcTime,
    moon_sidereal_lon: f64,
    config: &TimelineConfig,
    query: &UtcTime,
) -> Result<DashaSnapshot, DashaError> {
    birth.validate()?;
    query.validate()?;
    snapshot_at(birth.to_jd(), moon_sidereal_lon, config, query.to_jd())
}
