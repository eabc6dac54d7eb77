//! Core types for dasha timelines.

use crate::error::DashaError;
use crate::graha::Graha;

/// Days per dasha year. All period arithmetic at every level uses this
/// single constant; mixing calendar-exact years into the tree would break
/// exact tiling.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Days per dasha month, one twelfth of a dasha year.
pub const DAYS_PER_MONTH: f64 = DAYS_PER_YEAR / 12.0;

/// Hard cap on the number of periods materialized at any one level.
pub const MAX_PERIODS_PER_LEVEL: usize = 100_000;

/// Tolerance in days when verifying that children tile their parent.
pub const DAY_TOLERANCE: f64 = 1.0;

/// Advance a Julian Date by a span of dasha years.
pub fn add_years(jd: f64, years: f64) -> f64 {
    jd + years * DAYS_PER_YEAR
}

/// Depth levels of the period tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum DashaLevel {
    Mahadasha = 0,
    Antardasha = 1,
    Pratyantardasha = 2,
}

impl DashaLevel {
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Mahadasha),
            1 => Some(Self::Antardasha),
            2 => Some(Self::Pratyantardasha),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
            Self::Pratyantardasha => "Pratyantardasha",
        }
    }

    /// The level one step deeper, or `None` at the deepest level.
    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Mahadasha => Some(Self::Antardasha),
            Self::Antardasha => Some(Self::Pratyantardasha),
            Self::Pratyantardasha => None,
        }
    }
}

/// One period in the tree: a ruler holding a half-open span
/// `[start_jd, end_jd)` at some level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashaPeriod {
    pub graha: Graha,
    pub start_jd: f64,
    pub end_jd: f64,
    pub level: DashaLevel,
    /// One-based position among the siblings of this period.
    pub order: u16,
    /// Index of the parent within the level above. Zero for Mahadashas.
    pub parent_idx: u32,
}

impl DashaPeriod {
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    pub fn duration_years(&self) -> f64 {
        self.duration_days() / DAYS_PER_YEAR
    }

    /// Whether `jd` falls inside this period's half-open span.
    pub fn contains(&self, jd: f64) -> bool {
        self.start_jd <= jd && jd < self.end_jd
    }
}

/// Parameters controlling timeline construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineConfig {
    /// Number of levels to materialize, 1..=3.
    pub depth: u8,
    /// Number of 120-year cycles to chain, at least 1.
    pub cycles: u8,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self { depth: 3, cycles: 1 }
    }
}

impl TimelineConfig {
    pub fn validate(&self) -> Result<(), DashaError> {
        if self.depth < 1 || self.depth > 3 {
            return Err(DashaError::InvalidInput("depth must be between 1 and 3"));
        }
        if self.cycles < 1 {
            return Err(DashaError::InvalidInput("cycle count must be at least 1"));
        }
        Ok(())
    }
}

/// A fully materialized period tree.
///
/// `levels[0]` holds the Mahadasha chain; each deeper level holds the
/// children of every period in the level above, in parent order.
#[derive(Debug, Clone, PartialEq)]
pub struct DashaTimeline {
    pub birth_jd: f64,
    /// Moon's sidereal longitude at birth, degrees.
    pub moon_longitude: f64,
    pub levels: Vec<Vec<DashaPeriod>>,
}

/// The chain of periods active at one instant, outermost first.
#[derive(Debug, Clone, PartialEq)]
pub struct DashaSnapshot {
    pub query_jd: f64,
    pub periods: Vec<DashaPeriod>,
}
