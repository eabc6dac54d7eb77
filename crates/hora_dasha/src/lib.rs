//! Vimshottari dasha timelines from birth inputs.
//!
//! This crate provides:
//! - Nakshatra location (segment, pada, fractional progress) from the
//!   Moon's sidereal longitude
//! - The 120-year Vimshottari weight table and canonical ruler sequence
//! - Hierarchical period trees (Mahadasha -> Antardasha -> Pratyantardasha)
//!   where each level tiles its parent exactly
//! - Snapshot queries for the active period chain at any instant
//! - A serializable, calendar-dated report layer
//!
//! The Moon's sidereal longitude itself comes from an ephemeris outside
//! this crate; everything here is pure arithmetic over that one float and
//! a birth instant.

pub mod error;
pub mod graha;
pub mod nakshatra;
pub mod report;
pub mod util;
pub mod vimshottari;

pub use error::DashaError;
pub use graha::{ALL_GRAHAS, Graha};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, PADA_SPAN, nakshatra_from_longitude,
};
pub use report::{
    PeriodNode, SnapshotReport, TimelineReport, date_string, natural_duration, snapshot_report,
    timeline_report,
};
pub use util::normalize_360;
