//! Civil UTC instant.

use std::fmt::{Display, Formatter};

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar};

/// A civil instant in UTC, split into calendar fields.
///
/// The struct itself performs no range checks; call [`UtcTime::validate`]
/// before trusting externally supplied values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self { year, month, day, hour, minute, second }
    }

    /// Check that every field lies in its calendar range.
    ///
    /// Leap days are accepted for leap years only. Leap seconds are not
    /// modeled, so `second` must stay below 60.
    pub fn validate(&self) -> Result<(), TimeError> {
        if self.month < 1 || self.month > 12 {
            return Err(TimeError::InvalidDate("month must be 1-12"));
        }
        if self.day < 1 || self.day > days_in_month(self.year, self.month) {
            return Err(TimeError::InvalidDate("day out of range for month"));
        }
        if self.hour > 23 {
            return Err(TimeError::InvalidDate("hour must be 0-23"));
        }
        if self.minute > 59 {
            return Err(TimeError::InvalidDate("minute must be 0-59"));
        }
        if !self.second.is_finite() || self.second < 0.0 || self.second >= 60.0 {
            return Err(TimeError::InvalidDate("second must be in [0, 60)"));
        }
        Ok(())
    }

    /// Julian Date of this instant.
    pub fn to_jd(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / SECONDS_PER_DAY;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Civil fields of a Julian Date.
    pub fn from_jd(jd: f64) -> Self {
        let (year, month, day_frac) = jd_to_calendar(jd);
        let day = day_frac.floor();
        let mut total_seconds = (day_frac - day) * SECONDS_PER_DAY;
        // Guard against -0.0 and float dust just below a day boundary.
        if total_seconds < 0.0 {
            total_seconds = 0.0;
        }
        let hour = (total_seconds / 3600.0).floor();
        let minute = ((total_seconds - hour * 3600.0) / 60.0).floor();
        let second = total_seconds - hour * 3600.0 - minute * 60.0;
        Self {
            year,
            month,
            day: day as u32,
            hour: hour as u32,
            minute: minute as u32,
            second,
        }
    }
}

impl Display for UtcTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let whole = self.second.floor();
        if (self.second - whole).abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole as u32
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}
