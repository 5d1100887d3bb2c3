//! Error types for civil-time validation, corrections and calendar lookups.

use thiserror::Error;

/// Errors from birth-moment validation, time corrections, or lunar conversion.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Year/month/day do not form a valid proleptic Gregorian date.
    #[error("invalid civil date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Hour or minute outside 0-23 / 0-59.
    #[error("invalid clock time {hour:02}:{minute:02}")]
    InvalidTime { hour: u32, minute: u32 },
    /// Longitude outside [-180, 180] or not finite.
    #[error("longitude {0} outside [-180, 180]")]
    InvalidLongitude(f64),
    /// Latitude outside [-90, 90] or not finite.
    #[error("latitude {0} outside [-90, 90]")]
    InvalidLatitude(f64),
    /// Explicit standard-meridian override outside [-180, 180] or not finite.
    #[error("standard meridian {0} outside [-180, 180]")]
    InvalidMeridian(f64),
    /// Timezone identifier not in the built-in meridian table.
    #[error("unknown timezone identifier: {0}")]
    UnknownTimezone(String),
    /// A corrected instant fell outside the representable calendar.
    #[error("corrected instant outside the representable calendar")]
    OutOfRange,
    /// Lunar year outside the supported conversion window.
    #[error("lunar year {0} outside supported range 1899-2050")]
    LunarYearOutOfRange(i32),
    /// A leap month was requested for a month that is not leap in that year.
    #[error("lunar year {year} has no leap month {month}")]
    UnsupportedLeapMonth { year: i32, month: u32 },
    /// Lunar month/day outside the month structure of that year.
    #[error("invalid lunar date {year}-{month:02}-{day:02} (leap: {is_leap})")]
    InvalidLunarDate {
        year: i32,
        month: u32,
        day: u32,
        is_leap: bool,
    },
}
