//! Civil-calendar plumbing for dasha timelines.
//!
//! This crate provides:
//! - Julian Date <-> proleptic Gregorian calendar conversions
//! - `UtcTime`, the civil instant type used at library boundaries
//!
//! All conversions are pure arithmetic over `f64` Julian Dates. Timezone
//! resolution and leap seconds are the caller's concern.

pub mod error;
pub mod julian;
pub mod utc_time;

pub use error::TimeError;
pub use julian::{J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar};
pub use utc_time::UtcTime;
