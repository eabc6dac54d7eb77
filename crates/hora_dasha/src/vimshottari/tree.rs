//! Period-tree construction.
//!
//! Level 0 chains Mahadashas forward from the birth instant, opening with
//! the balance of the birth lord. Every deeper level tiles each parent
//! with nine children in proportional shares, the first child ruled by
//! the parent's own graha. Spans are chained cursor-style so siblings
//! are contiguous by construction, and the last child of every parent is
//! snapped onto the parent's end so no rounding drift can accumulate.

use log::{debug, trace};

use hora_time::UtcTime;

use crate::error::DashaError;
use crate::util::normalize_360;
use crate::vimshottari::balance::birth_balance;
use crate::vimshottari::data::{
    TOTAL_CYCLE_YEARS, VIMSHOTTARI_GRAHAS, canonical_position, graha_years,
};
use crate::vimshottari::sequence::rotate_from;
use crate::vimshottari::types::{
    DAY_TOLERANCE, DashaLevel, DashaPeriod, DashaTimeline, MAX_PERIODS_PER_LEVEL, TimelineConfig,
    add_years,
};

/// Build the Mahadasha chain for a birth.
///
/// The first entry carries only the balance of the birth lord's period;
/// every following entry carries its ruler's full weight. `cycles` whole
/// 120-year cycles are materialized, nine entries each.
pub fn mahadasha_level(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    cycles: u8,
) -> Result<Vec<DashaPeriod>, DashaError> {
    if !birth_jd.is_finite() {
        return Err(DashaError::InvalidInput("birth instant must be finite"));
    }
    if cycles < 1 {
        return Err(DashaError::InvalidInput("cycle count must be at least 1"));
    }

    let bal = birth_balance(moon_sidereal_lon)?;
    trace!(
        "birth lord {} with {:.6}y balance ({} fraction {:.6})",
        bal.lord.name(),
        bal.balance_years,
        bal.nakshatra.name(),
        bal.fraction
    );

    let start_pos = canonical_position(bal.lord);
    let total_entries = 9 * cycles as usize;
    let mut periods = Vec::with_capacity(total_entries);
    let mut cursor = birth_jd;

    for i in 0..total_entries {
        let graha = VIMSHOTTARI_GRAHAS[(start_pos + i) % 9];
        let years = if i == 0 { bal.balance_years } else { graha_years(graha) };
        let end_jd = add_years(cursor, years);
        periods.push(DashaPeriod {
            graha,
            start_jd: cursor,
            end_jd,
            level: DashaLevel::Mahadasha,
            order: (i as u16) + 1,
            parent_idx: 0,
        });
        cursor = end_jd;
    }

    Ok(periods)
}

/// Tile one parent period with its nine children.
///
/// Children follow the cycle order rotated to start from the parent's
/// own ruler, each holding `weight / 120` of the parent span. Returns an
/// empty vector for a parent already at the deepest level.
pub fn children_of(parent: &DashaPeriod, parent_idx: u32) -> Result<Vec<DashaPeriod>, DashaError> {
    let duration = parent.duration_days();
    if !duration.is_finite() || duration <= 0.0 {
        return Err(DashaError::InvalidInput("parent period must have a positive span"));
    }
    let Some(child_level) = parent.level.child_level() else {
        return Ok(Vec::new());
    };

    let seq = rotate_from(parent.graha);
    let mut children = Vec::with_capacity(seq.len());
    let mut cursor = parent.start_jd;

    for (i, graha) in seq.iter().enumerate() {
        let share = graha_years(*graha) / TOTAL_CYCLE_YEARS;
        let end_jd = cursor + duration * share;
        children.push(DashaPeriod {
            graha: *graha,
            start_jd: cursor,
            end_jd,
            level: child_level,
            order: (i as u16) + 1,
            parent_idx,
        });
        cursor = end_jd;
    }

    snap_last_child_end(&mut children, parent.end_jd);
    Ok(children)
}

/// Force the last child's end onto the parent's end.
///
/// The nine shares sum to the parent span only up to rounding; the final
/// sibling absorbs the residue so children tile the parent exactly.
pub fn snap_last_child_end(children: &mut [DashaPeriod], parent_end_jd: f64) {
    if let Some(last) = children.last_mut() {
        last.end_jd = parent_end_jd;
    }
}

/// Generate the complete child level below a slice of parents.
///
/// Children are appended in parent order, so the children of parent `p`
/// carry `parent_idx == p`.
pub fn complete_level(parents: &[DashaPeriod]) -> Result<Vec<DashaPeriod>, DashaError> {
    if parents.len() * 9 > MAX_PERIODS_PER_LEVEL {
        return Err(DashaError::InvalidInput("dasha level would exceed MAX_PERIODS_PER_LEVEL"));
    }

    let mut level = Vec::with_capacity(parents.len() * 9);
    for (pidx, parent) in parents.iter().enumerate() {
        let children = children_of(parent, pidx as u32)?;
        level.extend(children);
    }
    Ok(level)
}

/// Build the full period tree for a birth.
pub fn build_timeline(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    config: &TimelineConfig,
) -> Result<DashaTimeline, DashaError> {
    config.validate()?;

    let mut levels = Vec::with_capacity(config.depth as usize);
    levels.push(mahadasha_level(birth_jd, moon_sidereal_lon, config.cycles)?);

    for _ in 1..config.depth {
        let parents = &levels[levels.len() - 1];
        let children = complete_level(parents)?;
        levels.push(children);
    }

    debug!(
        "built vimshottari timeline: depth {}, level sizes {:?}",
        levels.len(),
        levels.iter().map(Vec::len).collect::<Vec<_>>()
    );

    Ok(DashaTimeline {
        birth_jd,
        moon_longitude: normalize_360(moon_sidereal_lon),
        levels,
    })
}

/// Build the full period tree from a civil birth instant.
pub fn timeline_for_birth(
    birth: &UtcTime,
    moon_sidereal_lon: f64,
    config: &TimelineConfig,
) -> Result<DashaTimeline, DashaError> {
    birth.validate()?;
    build_timeline(birth.to_jd(), moon_sidereal_lon, config)
}

/// Check the structural invariants of a built timeline.
///
/// Siblings must chain without gaps and every parent must be tiled by
/// exactly nine children whose joint span matches the parent within
/// [`DAY_TOLERANCE`]. Construction makes a breach unreachable; this is
/// the diagnostic used by tests and debugging sessions.
pub fn verify_tiling(timeline: &DashaTimeline) -> Result<(), DashaError> {
    for (level_idx, level) in timeline.levels.iter().enumerate() {
        for pair in level.windows(2) {
            if pair[1].parent_idx == pair[0].parent_idx && pair[1].start_jd != pair[0].end_jd {
                return Err(DashaError::InvariantViolation(format!(
                    "level {level_idx}: gap between consecutive siblings at order {}",
                    pair[0].order
                )));
            }
        }
    }

    for level_idx in 1..timeline.levels.len() {
        let parents = &timeline.levels[level_idx - 1];
        let children = &timeline.levels[level_idx];

        for (pidx, parent) in parents.iter().enumerate() {
            let kids: Vec<&DashaPeriod> =
                children.iter().filter(|c| c.parent_idx == pidx as u32).collect();

            if kids.len() != 9 {
                return Err(DashaError::InvariantViolation(format!(
                    "level {level_idx} parent {pidx}: expected 9 children, found {}",
                    kids.len()
                )));
            }

            let first = kids[0];
            let last = kids[kids.len() - 1];
            if first.start_jd != parent.start_jd || last.end_jd != parent.end_jd {
                return Err(DashaError::InvariantViolation(format!(
                    "level {level_idx} parent {pidx}: children span [{:.6}, {:.6}) \
                     but parent spans [{:.6}, {:.6})",
                    first.start_jd, last.end_jd, parent.start_jd, parent.end_jd
                )));
            }

            let sum: f64 = kids.iter().map(|c| c.duration_days()).sum();
            if (sum - parent.duration_days()).abs() > DAY_TOLERANCE {
                return Err(DashaError::InvariantViolation(format!(
                    "level {level_idx} parent {pidx}: child durations sum to {sum:.6} days, \
                     parent spans {:.6}",
                    parent.duration_days()
                )));
            }
        }
    }

    Ok(())
}
