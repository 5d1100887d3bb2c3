//! Korean daylight-saving history (gazetted periods, local wall clock).
//!
//! Each period is `[start, end)` on the DST wall clock. Starts are 00:00
//! unless noted; the 1987–1988 periods began at 02:00 and ended at 03:00.

use chrono::{Datelike, NaiveDateTime, Timelike};

/// Offset applied during every Korean DST period, minutes.
pub const KOREAN_DST_OFFSET_MINUTES: i64 = 60;

/// `(month, day, hour)` wall-clock instant within a given year.
type Mdh = (u32, u32, u32);

/// `(year, start, end)`.
#[rustfmt::skip]
const KOREAN_DST_PERIODS: [(i32, Mdh, Mdh); 12] = [
    (1948, (6, 1, 0),  (9, 13, 0)),
    (1949, (4, 3, 0),  (9, 11, 0)),
    (1950, (4, 1, 0),  (9, 10, 0)),
    (1951, (5, 6, 0),  (9, 9, 0)),
    (1955, (5, 5, 0),  (9, 9, 0)),
    (1956, (5, 20, 0), (9, 30, 0)),
    (1957, (5, 5, 0),  (9, 22, 0)),
    (1958, (5, 4, 0),  (9, 21, 0)),
    (1959, (5, 3, 0),  (9, 20, 0)),
    (1960, (5, 1, 0),  (9, 18, 0)),
    (1987, (5, 10, 2), (10, 11, 3)),
    (1988, (5, 8, 2),  (10, 9, 3)),
];

/// Whether a Korean local wall-clock reading falls inside a DST period.
pub fn is_korean_dst(local: &NaiveDateTime) -> bool {
    let key = (local.month(), local.day(), local.hour());
    KOREAN_DST_PERIODS
        .iter()
        .any(|&(year, start, end)| year == local.year() && start <= key && key < end)
}

/// DST offset (minutes) to remove from a Korean wall-clock reading.
pub fn korean_dst_offset_minutes(local: &NaiveDateTime) -> i64 {
    if is_korean_dst(local) {
        KOREAN_DST_OFFSET_MINUTES
    } else {
        0
    }
}

/// Number of gazetted periods.
pub fn korean_dst_period_count() -> usize {
    KOREAN_DST_PERIODS.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn twelve_periods() {
        assert_eq!(korean_dst_period_count(), 12);
    }

    #[test]
    fn summer_1988_is_dst() {
        assert!(is_korean_dst(&at(1988, 7, 15, 14, 30)));
        assert_eq!(korean_dst_offset_minutes(&at(1988, 7, 15, 14, 30)), 60);
    }

    #[test]
    fn boundaries_1987() {
        assert!(!is_korean_dst(&at(1987, 5, 10, 1, 59)));
        assert!(is_korean_dst(&at(1987, 5, 10, 2, 0)));
        assert!(is_korean_dst(&at(1987, 10, 11, 2, 59)));
        assert!(!is_korean_dst(&at(1987, 10, 11, 3, 0)));
    }

    #[test]
    fn gap_years_are_standard() {
        assert!(!is_korean_dst(&at(1952, 7, 1, 12, 0)));
        assert!(!is_korean_dst(&at(1989, 7, 1, 12, 0)));
        assert!(!is_korean_dst(&at(2024, 7, 1, 12, 0)));
    }

    #[test]
    fn end_day_is_exclusive() {
        assert!(is_korean_dst(&at(1960, 9, 17, 23, 59)));
        assert!(!is_korean_dst(&at(1960, 9, 18, 0, 0)));
    }
}
