//! Julian Day arithmetic on the proleptic Gregorian calendar.
//!
//! Integer Julian Day Numbers drive the sexagenary day count; fractional
//! Julian Dates drive the solar and lunar series. No Julian-calendar switch
//! is applied before 1582: every date is proleptic Gregorian.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

/// Julian Date of the J2000.0 epoch.
pub const J2000_JD: f64 = 2_451_545.0;

/// Days per Julian millennium (VSOP87 time unit).
pub const DAYS_PER_MILLENNIUM: f64 = 365_250.0;

/// Minutes per civil day.
pub const MINUTES_PER_DAY: i64 = 1_440;

/// JDN of 0001-01-01 is 1_721_426; chrono counts that day as 1.
const JDN_CE_OFFSET: i64 = 1_721_425;

/// Julian Day Number (noon-based integer day) of a proleptic Gregorian date.
pub fn julian_day_number(year: i32, month: u32, day: u32) -> i64 {
    let a = (14 - month as i64) / 12;
    let y = year as i64 + 4800 - a;
    let m = month as i64 + 12 * a - 3;
    day as i64 + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32_045
}

/// Julian Day Number of a chrono date.
pub fn jdn_of(date: NaiveDate) -> i64 {
    date.num_days_from_ce() as i64 + JDN_CE_OFFSET
}

/// Calendar date of a Julian Day Number, if chrono can represent it.
pub fn date_from_jdn(jdn: i64) -> Option<NaiveDate> {
    let days = i32::try_from(jdn - JDN_CE_OFFSET).ok()?;
    NaiveDate::from_num_days_from_ce_opt(days)
}

/// Julian Date (midnight-based fraction) of a calendar date with fractional day.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    julian_day_number(year, month, 1) as f64 - 0.5 + (day_frac - 1.0)
}

/// Inverse of [`calendar_to_jd`]: `(year, month, day_with_fraction)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let shifted = jd + 0.5;
    let jdn = shifted.floor() as i64;
    let frac = shifted - jdn as f64;
    let (year, month, day) = calendar_from_jdn(jdn);
    (year, month, day as f64 + frac)
}

/// Fliegel–Van Flandern inverse of [`julian_day_number`].
pub fn calendar_from_jdn(jdn: i64) -> (i32, u32, u32) {
    let l = jdn + 68_569;
    let n = (4 * l).div_euclid(146_097);
    let l = l - (146_097 * n + 3).div_euclid(4);
    let i = (4_000 * (l + 1)).div_euclid(1_461_001);
    let l = l - (1_461 * i).div_euclid(4) + 31;
    let j = (80 * l).div_euclid(2_447);
    let day = l - (2_447 * j).div_euclid(80);
    let l = j.div_euclid(11);
    let month = j + 2 - 12 * l;
    let year = 100 * (n - 49) + i + l;
    (year as i32, month as u32, day as u32)
}

/// Julian Date of a civil clock reading (the clock's own time scale).
pub fn naive_to_jd(dt: &NaiveDateTime) -> f64 {
    let day_minutes = dt.hour() as f64 * 60.0 + dt.minute() as f64 + dt.second() as f64 / 60.0;
    jdn_of(dt.date()) as f64 - 0.5 + day_minutes / MINUTES_PER_DAY as f64
}

/// Civil clock reading of a Julian Date, rounded to the nearest minute.
pub fn jd_to_naive_minute(jd: f64) -> Option<NaiveDateTime> {
    let total_minutes = ((jd + 0.5) * MINUTES_PER_DAY as f64).round() as i64;
    let jdn = total_minutes.div_euclid(MINUTES_PER_DAY);
    let minute_of_day = total_minutes.rem_euclid(MINUTES_PER_DAY) as u32;
    date_from_jdn(jdn)?.and_hms_opt(minute_of_day / 60, minute_of_day % 60, 0)
}

/// Espenak–Meeus decimal year (`y + (m - 0.5) / 12`) of a Julian Date.
pub fn decimal_year(jd: f64) -> f64 {
    let (year, month, _) = jd_to_calendar(jd);
    year as f64 + (month as f64 - 0.5) / 12.0
}
