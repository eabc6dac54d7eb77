//! The Vimshottari dasha system: a 120-year cycle of nine graha periods,
//! keyed to the Moon's nakshatra at birth.
//!
//! Construction works in layers:
//! - [`data`] holds the canonical ruler sequence, period weights, and the
//!   nakshatra-to-lord table
//! - [`balance`] turns the Moon's longitude into the opening balance of
//!   the first Mahadasha
//! - [`sequence`] rotates the canonical ruler order to start from a seed
//! - [`tree`] chains Mahadashas and tiles each period with sub-periods
//! - [`query`] finds the active period chain at an instant

pub mod balance;
pub mod data;
pub mod query;
pub mod sequence;
pub mod tree;
pub mod types;

pub use balance::{BirthBalance, birth_balance};
pub use data::{
    NAKSHATRA_LORDS, TOTAL_CYCLE_YEARS, VIMSHOTTARI_GRAHAS, VIMSHOTTARI_YEARS, canonical_position,
    graha_years, nakshatra_lord,
};
pub use query::{find_active_period, snapshot_at, snapshot_for_birth, snapshot_from_timeline};
pub use sequence::rotate_from;
pub use tree::{
    build_timeline, children_of, complete_level, mahadasha_level, snap_last_child_end,
    timeline_for_birth, verify_tiling,
};
pub use types::{
    DAYS_PER_MONTH, DAYS_PER_YEAR, DAY_TOLERANCE, DashaLevel, DashaPeriod, DashaSnapshot,
    DashaTimeline, MAX_PERIODS_PER_LEVEL, TimelineConfig, add_years,
};
