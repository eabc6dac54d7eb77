//! Error types for dasha computations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use hora_time::TimeError;

/// Errors surfaced by timeline construction and queries.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum DashaError {
    /// A caller-supplied value is outside the accepted domain.
    InvalidInput(&'static str),
    /// An internal consistency check failed. Periods at every level must
    /// tile their parent span exactly; this variant reports a breach.
    InvariantViolation(String),
    /// A civil date at the boundary failed validation.
    Time(TimeError),
}

impl Display for DashaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::InvariantViolation(msg) => write!(f, "invariant violation: {msg}"),
            Self::Time(err) => write!(f, "time error: {err}"),
        }
    }
}

impl Error for DashaError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TimeError> for DashaError {
    fn from(err: TimeError) -> Self {
        Self::Time(err)
    }
}
