//! Golden-value tests for Korean lunisolar conversion.
//!
//! Seollal dates and leap months from the KASI almanac.

use chrono::NaiveDate;
use saju_time::{LunarDate, TimeError, leap_month_of, lunar_to_solar, solar_to_lunar};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn seollal_dates() {
    let cases = [
        (1900, ymd(1900, 1, 31)),
        (1950, ymd(1950, 2, 17)),
        (1987, ymd(1987, 1, 29)),
        (1988, ymd(1988, 2, 18)),
        (1995, ymd(1995, 1, 31)),
        (1997, ymd(1997, 2, 8)),
        (2012, ymd(2012, 1, 23)),
        (2014, ymd(2014, 1, 31)),
        (2017, ymd(2017, 1, 28)),
        (2020, ymd(2020, 1, 25)),
        (2023, ymd(2023, 1, 22)),
        (2024, ymd(2024, 2, 10)),
        (2025, ymd(2025, 1, 29)),
    ];
    for (year, expected) in cases {
        assert_eq!(
            lunar_to_solar(LunarDate::new(year, 1, 1, false)),
            Ok(expected),
            "{year}"
        );
        assert_eq!(solar_to_lunar(expected), Ok(LunarDate::new(year, 1, 1, false)));
    }
}

#[test]
fn leap_months() {
    let cases = [
        (1900, 8, None),
        (1987, 6, Some(ymd(1987, 7, 26))),
        (1995, 8, None),
        (2012, 3, Some(ymd(2012, 4, 21))),
        (2014, 9, None),
        (2017, 5, Some(ymd(2017, 6, 24))),
        (2020, 4, Some(ymd(2020, 5, 23))),
        (2023, 2, Some(ymd(2023, 3, 22))),
        (2025, 6, Some(ymd(2025, 7, 25))),
    ];
    for (year, month, first_day) in cases {
        assert_eq!(leap_month_of(year), Ok(Some(month)), "{year}");
        if let Some(first_day) = first_day {
            assert_eq!(lunar_to_solar(LunarDate::new(year, month, 1, true)), Ok(first_day));
        }
    }
}

#[test]
fn common_years_have_no_leap_month() {
    for year in [1988, 2021, 2022, 2024] {
        assert_eq!(leap_month_of(year), Ok(None), "{year}");
        assert!(matches!(
            lunar_to_solar(LunarDate::new(year, 5, 1, true)),
            Err(TimeError::UnsupportedLeapMonth { .. })
        ));
    }
}

#[test]
fn leap_day_round_trips() {
    let date = ymd(2020, 6, 1);
    let lunar = solar_to_lunar(date).unwrap();
    assert_eq!(lunar, LunarDate::new(2020, 4, 10, true));
    assert_eq!(lunar_to_solar(lunar), Ok(date));
}
