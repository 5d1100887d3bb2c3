//! Golden-value tests for the solar-term boundary table and fallback.
//!
//! Almanac instants are KASI-published Korean Standard Time values.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use saju_time::{
    AlgorithmicSolarTerms, BoundarySource, SolarTerm, SolarTermCalendar, SolarTermSource,
    TABLE_FIRST_YEAR, TABLE_LAST_YEAR, TabulatedSolarTerms, fallback_tolerance_minutes,
    sun_apparent_longitude_deg,
};

fn at(y: i32, m: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, mi, 0)
        .unwrap()
}

#[test]
fn every_table_year_has_12_increasing_boundaries() {
    for year in TABLE_FIRST_YEAR..=TABLE_LAST_YEAR {
        let yb = TabulatedSolarTerms.boundaries_for_year(year).unwrap();
        let all = yb.chronological();
        for pair in all.windows(2) {
            assert!(pair[0].instant < pair[1].instant, "{year}");
            let gap = pair[1].solar_longitude_deg() - pair[0].solar_longitude_deg();
            assert_eq!(gap.rem_euclid(360.0), 30.0, "{year}");
        }
        assert_eq!(
            TabulatedSolarTerms.ipchun_of(year).map(|b| b.saju_month_index()),
            Some(1)
        );
        assert_eq!(yb.by_month_index(1), Some(yb.ipchun()));
        assert_eq!(yb.ipchun().year(), year);
    }
}

#[test]
fn known_ipchun_instants() {
    let cases = [
        (2021, at(2021, 2, 3, 23, 59)),
        (2023, at(2023, 2, 4, 11, 43)),
        (2024, at(2024, 2, 4, 17, 27)),
    ];
    for (year, expected) in cases {
        let got = TabulatedSolarTerms.ipchun_of(year).unwrap().instant;
        assert_eq!(got, expected, "{year}");
    }
}

#[test]
fn sohan_2024() {
    let yb = TabulatedSolarTerms.boundaries_for_year(2024).unwrap();
    assert_eq!(yb.by_month_index(12).unwrap().instant, at(2024, 1, 6, 5, 49));
}

#[test]
fn strict_after_at_ipchun_2021() {
    let cal = SolarTermCalendar::new();
    let boundary = at(2021, 2, 3, 23, 59);
    assert_eq!(cal.saju_month_index_at(boundary), Some(12));
    assert_eq!(cal.saju_month_index_at(boundary + Duration::minutes(1)), Some(1));
    assert_eq!(cal.saju_month_index_at_parts(2021, 2, 3, 23, 59), Some(12));
    assert_eq!(cal.saju_month_index_at_parts(2021, 2, 4, 0, 0), Some(1));
}

#[test]
fn every_boundary_is_strict_after() {
    let cal = SolarTermCalendar::new();
    for year in [1900, 1955, 1988, 2021, 2050] {
        let yb = cal.boundaries_for_year(year).unwrap();
        for b in yb.chronological() {
            let prev = if b.saju_month_index() == 1 { 12 } else { b.saju_month_index() - 1 };
            assert_eq!(cal.saju_month_index_at(b.instant), Some(prev));
            assert_eq!(
                cal.saju_month_index_at(b.instant + Duration::minutes(1)),
                Some(b.saju_month_index())
            );
        }
    }
}

#[test]
fn fallback_agrees_with_table() {
    let algo = AlgorithmicSolarTerms::default();
    for year in TABLE_FIRST_YEAR..=TABLE_LAST_YEAR {
        let table = TabulatedSolarTerms.boundaries_for_year(year).unwrap();
        let computed = algo.boundaries_for_year(year).unwrap();
        let tolerance = fallback_tolerance_minutes(year);
        for (t, c) in table.chronological().iter().zip(computed.chronological()) {
            let diff = (t.instant - c.instant).num_minutes().abs();
            assert!(diff <= tolerance, "{year} {:?}: {diff} min", t.term);
        }
    }
}

#[test]
fn fallback_far_outside_table() {
    let cal = SolarTermCalendar::new();
    for year in [1600, 1850, 2100, 2500, 3000] {
        let yb = cal.boundaries_for_year(year).unwrap();
        assert_eq!(yb.source, BoundarySource::Algorithmic);
        let all = yb.chronological();
        for pair in all.windows(2) {
            assert!(pair[0].instant < pair[1].instant, "{year}");
            let days = (pair[1].instant - pair[0].instant).num_days();
            assert!((28..=33).contains(&days), "{year}: {days}");
        }
        assert_eq!(all[0].term, SolarTerm::Sohan);
    }
}

#[test]
fn fallback_crossings_hit_their_longitudes() {
    use saju_time::sun::solar_longitude_crossing_jde;
    for term in saju_time::ALL_SOLAR_TERMS {
        let jde = solar_longitude_crossing_jde(2100, term.solar_longitude_deg());
        let lon = sun_apparent_longitude_deg(jde);
        let gap = (lon - term.solar_longitude_deg() + 180.0).rem_euclid(360.0) - 180.0;
        assert!(gap.abs() < 1e-6, "{:?}", term);
    }
}
