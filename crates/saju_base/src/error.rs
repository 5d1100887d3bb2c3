//! Error types for sexagenary cycle arithmetic.

use saju_time::TimeError;
use thiserror::Error;

/// Errors from pillar derivation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum BaseError {
    /// Civil-time validation or correction failed.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// Hour outside 0–23.
    #[error("hour {0} outside 0-23")]
    InvalidHour(u32),
    /// Stem and branch of different polarity never pair in the cycle.
    #[error("stem {stem} and branch {branch} do not form a sexagenary pillar")]
    MismatchedPolarity { stem: &'static str, branch: &'static str },
    /// No solar-term boundaries could be produced for a year.
    #[error("solar-term boundaries unavailable for {0}")]
    SolarTermUnavailable(i32),
    /// A shifted instant left the representable calendar.
    #[error("instant outside the representable calendar")]
    OutOfRange,
}
