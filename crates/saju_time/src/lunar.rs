//! Korean lunisolar calendar conversion, lunar years 1899–2050.
//!
//! Computed from true new moons and principal solar terms on UTC+9 civil
//! days:
//! - a lunar month starts on the civil day of its new moon;
//! - the month containing the winter solstice is month 11;
//! - when two consecutive month-11 starts are 13 lunations apart, the first
//!   month after month 11 that contains no principal term (solar longitude a
//!   multiple of 30°) is a leap month, repeating the preceding number.
//!
//! A "sui" runs from one month 11 to the next. Months 11 and 12 of sui `N`
//! belong to lunar year `N − 1`; months 1–10 belong to year `N`.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{date_from_jdn, jdn_of};
use crate::moon::{nearest_lunation, new_moon_jde};
use crate::solar_term::BOUNDARY_UTC_OFFSET_MINUTES;
use crate::sun::{jde_to_civil_jd, solar_longitude_crossing_jde};

pub const LUNAR_FIRST_YEAR: i32 = 1899;
pub const LUNAR_LAST_YEAR: i32 = 2050;

const WINTER_SOLSTICE_DEG: f64 = 270.0;

/// A date on the Korean lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LunarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub is_leap: bool,
}

impl LunarDate {
    pub fn new(year: i32, month: u32, day: u32, is_leap: bool) -> Self {
        Self {
            year,
            month,
            day,
            is_leap,
        }
    }
}

/// One month of a lunar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LunarMonth {
    pub month: u32,
    pub is_leap: bool,
    /// Civil date of day 1.
    pub first_day: NaiveDate,
    /// 29 or 30.
    pub length: u32,
}

#[derive(Debug, Clone, Copy)]
struct MonthSpan {
    month: u32,
    is_leap: bool,
    start_jdn: i64,
    end_jdn: i64,
}

/// JDN of the UTC+9 civil day containing `jde`.
fn kst_day(jde: f64) -> i64 {
    (jde_to_civil_jd(jde, BOUNDARY_UTC_OFFSET_MINUTES) + 0.5).floor() as i64
}

/// Lunation whose new moon falls on or before civil day `jdn`.
fn lunation_on_or_before(jdn: i64) -> i64 {
    let mut k = nearest_lunation(jdn as f64);
    while kst_day(new_moon_jde(k)) > jdn {
        k -= 1;
    }
    while kst_day(new_moon_jde(k + 1)) <= jdn {
        k += 1;
    }
    k
}

/// Months 11 (of year `n − 1`) through the month before the next month 11.
fn sui_months(n: i32) -> Vec<MonthSpan> {
    let k0 = lunation_on_or_before(kst_day(solar_longitude_crossing_jde(
        n - 1,
        WINTER_SOLSTICE_DEG,
    )));
    let k1 = lunation_on_or_before(kst_day(solar_longitude_crossing_jde(
        n,
        WINTER_SOLSTICE_DEG,
    )));
    let starts: Vec<i64> = (k0..=k1).map(|k| kst_day(new_moon_jde(k))).collect();

    let principal_days: Vec<i64> = [n - 1, n]
        .into_iter()
        .flat_map(|year| {
            (0..12).map(move |i| kst_day(solar_longitude_crossing_jde(year, 30.0 * i as f64)))
        })
        .collect();

    let leap_needed = k1 - k0 == 13;
    let mut leap_done = false;
    let mut number = 11;
    let mut months = Vec::with_capacity(13);
    for (i, pair) in starts.windows(2).enumerate() {
        let (start, end) = (pair[0], pair[1]);
        let is_leap = if i == 0 {
            false
        } else {
            let has_principal = principal_days.iter().any(|&d| start <= d && d < end);
            if leap_needed && !leap_done && !has_principal {
                leap_done = true;
                true
            } else {
                number = number % 12 + 1;
                false
            }
        };
        months.push(MonthSpan {
            month: number,
            is_leap,
            start_jdn: start,
            end_jdn: end,
        });
    }
    months
}

fn check_year(year: i32) -> Result<(), TimeError> {
    if (LUNAR_FIRST_YEAR..=LUNAR_LAST_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(TimeError::LunarYearOutOfRange(year))
    }
}

fn year_spans(year: i32) -> Vec<MonthSpan> {
    let head = sui_months(year).into_iter().filter(|m| m.month <= 10);
    let tail = sui_months(year + 1).into_iter().filter(|m| m.month >= 11);
    head.chain(tail).collect()
}

/// Months of lunar `year`, in order, leap month included.
pub fn lunar_year_months(year: i32) -> Result<Vec<LunarMonth>, TimeError> {
    check_year(year)?;
    year_spans(year)
        .into_iter()
        .map(|span| {
            Ok(LunarMonth {
                month: span.month,
                is_leap: span.is_leap,
                first_day: date_from_jdn(span.start_jdn).ok_or(TimeError::OutOfRange)?,
                length: (span.end_jdn - span.start_jdn) as u32,
            })
        })
        .collect()
}

/// Leap month number of lunar `year`, if any.
pub fn leap_month_of(year: i32) -> Result<Option<u32>, TimeError> {
    check_year(year)?;
    Ok(year_spans(year)
        .into_iter()
        .find(|m| m.is_leap)
        .map(|m| m.month))
}

/// Length (29 or 30) of a lunar month.
pub fn lunar_month_length(year: i32, month: u32, is_leap: bool) -> Result<u32, TimeError> {
    let span = find_span(year, month, is_leap)?;
    Ok((span.end_jdn - span.start_jdn) as u32)
}

fn find_span(year: i32, month: u32, is_leap: bool) -> Result<MonthSpan, TimeError> {
    check_year(year)?;
    if !(1..=12).contains(&month) {
        return Err(TimeError::InvalidLunarDate {
            year,
            month,
            day: 1,
            is_leap,
        });
    }
    year_spans(year)
        .into_iter()
        .find(|m| m.month == month && m.is_leap == is_leap)
        .ok_or(TimeError::UnsupportedLeapMonth { year, month })
}

/// Civil (Gregorian) date of a lunar date.
pub fn lunar_to_solar(date: LunarDate) -> Result<NaiveDate, TimeError> {
    let span = find_span(date.year, date.month, date.is_leap)?;
    let length = (span.end_jdn - span.start_jdn) as u32;
    if date.day == 0 || date.day > length {
        return Err(TimeError::InvalidLunarDate {
            year: date.year,
            month: date.month,
            day: date.day,
            is_leap: date.is_leap,
        });
    }
    date_from_jdn(span.start_jdn + date.day as i64 - 1).ok_or(TimeError::OutOfRange)
}

/// Lunar date of a civil (Gregorian) date.
pub fn solar_to_lunar(date: NaiveDate) -> Result<LunarDate, TimeError> {
    let jdn = jdn_of(date);
    let civil_year = date.year();
    for year in [civil_year - 1, civil_year] {
        if check_year(year).is_err() {
            continue;
        }
        if let Some(span) = year_spans(year)
            .into_iter()
            .find(|m| m.start_jdn <= jdn && jdn < m.end_jdn)
        {
            return Ok(LunarDate {
                year,
                month: span.month,
                day: (jdn - span.start_jdn + 1) as u32,
                is_leap: span.is_leap,
            });
        }
    }
    Err(TimeError::LunarYearOutOfRange(civil_year))
}
