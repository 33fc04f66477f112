use std::fmt::Display;

use chrono::DateTime;
use chrono::Utc;

/// Format used to print timestamps in reports.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// UTC date time that automatically sets the current time when created.
///
/// Displayed with second precision and without timezone suffix, e.g. `2024-05-01 12:30:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Deref)]
pub struct DateTimeNow(#[deref] DateTime<Utc>);

impl Default for DateTimeNow {
    fn default() -> Self {
        Self(Utc::now())
    }
}

impl Display for DateTimeNow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(DATE_TIME_FORMAT))
    }
}

// -----------------------------------------------------------------------------
// Conversions: Other -> Self
// -----------------------------------------------------------------------------
impl From<DateTime<Utc>> for DateTimeNow {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}
