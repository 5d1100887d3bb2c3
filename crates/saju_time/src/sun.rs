//! Apparent geocentric solar longitude from a truncated VSOP87D Earth series.
//!
//! Heliocentric Earth longitude/radius from the VSOP87D periodic terms as
//! abridged by Meeus (Astronomical Algorithms, 2nd ed., Appendix III), then:
//! geocentric flip (+180°), FK5 frame correction (−0.09033″), nutation in
//! longitude (four-term IAU 1980 abridgement) and annual aberration
//! (−20.4898″ / R). Accuracy is about one arcsecond over 1900–2100, i.e.
//! well under a minute of solar-term time.
//!
//! Amplitudes are in 1e-8 rad (L) and 1e-8 AU (R); each row is `[A, B, C]`
//! for `A·cos(B + C·τ)`, τ in Julian millennia of TT from J2000.0.

use crate::delta_t::delta_t_seconds;
use crate::julian::{DAYS_PER_MILLENNIUM, J2000_JD, calendar_to_jd, decimal_year};

/// Mean tropical year in days, used for Newton step sizing.
const TROPICAL_YEAR_DAYS: f64 = 365.2422;

/// Solar longitude (deg) reached around civil Jan 1, seeds crossing searches.
const JAN1_SOLAR_LONGITUDE_DEG: f64 = 280.0;

/// Convergence tolerance for crossing searches, degrees.
const CROSSING_TOLERANCE_DEG: f64 = 1e-9;

const MAX_CROSSING_ITERATIONS: usize = 50;

#[rustfmt::skip]
static EARTH_L0: [[f64; 3]; 64] = [
    [175347046.0, 0.0, 0.0],
    [3341656.0, 4.6692568, 6283.07585],
    [34894.0, 4.6261, 12566.1517],
    [3497.0, 2.7441, 5753.3849],
    [3418.0, 2.8289, 3.5231],
    [3136.0, 3.6277, 77713.7715],
    [2676.0, 4.4181, 7860.4194],
    [2343.0, 6.1352, 3930.2097],
    [1324.0, 0.7425, 11506.7698],
    [1273.0, 2.0371, 529.691],
    [1199.0, 1.1096, 1577.3435],
    [990.0, 5.233, 5884.927],
    [902.0, 2.045, 26.298],
    [857.0, 3.508, 398.149],
    [780.0, 1.179, 5223.694],
    [753.0, 2.533, 5507.553],
    [505.0, 4.583, 18849.228],
    [492.0, 4.205, 775.523],
    [357.0, 2.92, 0.067],
    [317.0, 5.849, 11790.629],
    [284.0, 1.899, 796.298],
    [271.0, 0.315, 10977.079],
    [243.0, 0.345, 5486.778],
    [206.0, 4.806, 2544.314],
    [205.0, 1.869, 5573.143],
    [202.0, 2.458, 6069.777],
    [156.0, 0.833, 213.299],
    [132.0, 3.411, 2942.463],
    [126.0, 1.083, 20.775],
    [115.0, 0.645, 0.98],
    [103.0, 0.636, 4694.003],
    [102.0, 0.976, 15720.839],
    [102.0, 4.267, 7.114],
    [99.0, 6.21, 2146.17],
    [98.0, 0.68, 155.42],
    [86.0, 5.98, 161000.69],
    [85.0, 1.3, 6275.96],
    [85.0, 3.67, 71430.7],
    [80.0, 1.81, 17260.15],
    [79.0, 3.04, 12036.46],
    [75.0, 1.76, 5088.63],
    [74.0, 3.5, 3154.69],
    [74.0, 4.68, 801.82],
    [70.0, 0.83, 9437.76],
    [62.0, 3.98, 8827.39],
    [61.0, 1.82, 7084.9],
    [57.0, 2.78, 6286.6],
    [56.0, 4.39, 14143.5],
    [56.0, 3.47, 6279.55],
    [52.0, 0.19, 12139.55],
    [52.0, 1.33, 1748.02],
    [51.0, 0.28, 5856.48],
    [49.0, 0.49, 1194.45],
    [41.0, 5.37, 8429.24],
    [41.0, 2.4, 19651.05],
    [39.0, 6.17, 10447.39],
    [37.0, 6.04, 10213.29],
    [37.0, 2.57, 1059.38],
    [36.0, 1.71, 2352.87],
    [36.0, 1.78, 6812.77],
    [33.0, 0.59, 17789.85],
    [30.0, 0.44, 83996.85],
    [30.0, 2.74, 1349.87],
    [25.0, 3.16, 4690.48],
];

#[rustfmt::skip]
static EARTH_L1: [[f64; 3]; 34] = [
    [628331966747.0, 0.0, 0.0],
    [206059.0, 2.678235, 6283.07585],
    [4303.0, 2.6351, 12566.1517],
    [425.0, 1.59, 3.523],
    [119.0, 5.796, 26.298],
    [109.0, 2.966, 1577.344],
    [93.0, 2.59, 18849.23],
    [72.0, 1.14, 529.69],
    [68.0, 1.87, 398.15],
    [67.0, 4.41, 5507.55],
    [59.0, 2.89, 5223.69],
    [56.0, 2.17, 155.42],
    [45.0, 0.4, 796.3],
    [36.0, 0.47, 775.52],
    [29.0, 2.65, 7.11],
    [21.0, 5.34, 0.98],
    [19.0, 1.85, 5486.78],
    [19.0, 4.97, 213.3],
    [17.0, 2.99, 6275.96],
    [16.0, 0.03, 2544.31],
    [16.0, 1.43, 2146.17],
    [15.0, 1.21, 10977.08],
    [12.0, 2.83, 1748.02],
    [12.0, 3.26, 5088.63],
    [12.0, 5.27, 1194.45],
    [12.0, 2.08, 4694.0],
    [11.0, 0.77, 553.57],
    [10.0, 1.3, 6286.6],
    [10.0, 4.24, 1349.87],
    [9.0, 2.7, 242.73],
    [9.0, 5.64, 951.72],
    [8.0, 5.3, 2352.87],
    [6.0, 2.65, 9437.76],
    [6.0, 4.67, 4690.48],
];

#[rustfmt::skip]
static EARTH_L2: [[f64; 3]; 20] = [
    [52919.0, 0.0, 0.0],
    [8720.0, 1.0721, 6283.0758],
    [309.0, 0.867, 12566.152],
    [27.0, 0.05, 3.52],
    [16.0, 5.19, 26.3],
    [16.0, 3.68, 155.42],
    [10.0, 0.76, 18849.23],
    [9.0, 2.06, 77713.77],
    [7.0, 0.83, 775.52],
    [5.0, 4.66, 1577.34],
    [4.0, 1.03, 7.11],
    [4.0, 3.44, 5573.14],
    [3.0, 5.14, 796.3],
    [3.0, 6.05, 5507.55],
    [3.0, 1.19, 242.73],
    [3.0, 6.12, 529.69],
    [3.0, 0.31, 398.15],
    [3.0, 2.28, 553.57],
    [2.0, 4.38, 5223.69],
    [2.0, 3.75, 0.98],
];

#[rustfmt::skip]
static EARTH_L3: [[f64; 3]; 7] = [
    [289.0, 5.844, 6283.076],
    [35.0, 0.0, 0.0],
    [17.0, 5.49, 12566.15],
    [3.0, 5.2, 155.42],
    [1.0, 4.72, 3.52],
    [1.0, 5.3, 18849.23],
    [1.0, 5.97, 242.73],
];

#[rustfmt::skip]
static EARTH_L4: [[f64; 3]; 3] = [
    [114.0, 3.142, 0.0],
    [8.0, 4.13, 6283.08],
    [1.0, 3.84, 12566.15],
];

#[rustfmt::skip]
static EARTH_L5: [[f64; 3]; 1] = [
    [1.0, 3.14, 0.0],
];

#[rustfmt::skip]
static EARTH_R0: [[f64; 3]; 40] = [
    [100013989.0, 0.0, 0.0],
    [1670700.0, 3.0984635, 6283.07585],
    [13956.0, 3.05525, 12566.1517],
    [3084.0, 5.1985, 77713.7715],
    [1628.0, 1.1739, 5753.3849],
    [1576.0, 2.8469, 7860.4194],
    [925.0, 5.453, 11506.77],
    [542.0, 4.564, 3930.21],
    [472.0, 3.661, 5884.927],
    [346.0, 0.964, 5507.553],
    [329.0, 5.9, 5223.694],
    [307.0, 0.299, 5573.143],
    [243.0, 4.273, 11790.629],
    [212.0, 5.847, 1577.344],
    [186.0, 5.022, 10977.079],
    [175.0, 3.012, 18849.228],
    [110.0, 5.055, 5486.778],
    [98.0, 0.89, 6069.78],
    [86.0, 5.69, 15720.84],
    [86.0, 1.27, 161000.69],
    [65.0, 0.27, 17260.15],
    [63.0, 0.92, 529.69],
    [57.0, 2.01, 83996.85],
    [56.0, 5.24, 71430.7],
    [49.0, 3.25, 2544.31],
    [47.0, 2.58, 775.52],
    [45.0, 5.54, 9437.76],
    [43.0, 6.01, 6275.96],
    [39.0, 5.36, 4694.0],
    [38.0, 2.39, 8827.39],
    [37.0, 0.83, 19651.05],
    [37.0, 4.9, 12139.55],
    [36.0, 1.67, 12036.46],
    [35.0, 1.84, 2942.46],
    [33.0, 0.24, 7084.9],
    [32.0, 0.18, 5088.63],
    [32.0, 1.78, 398.15],
    [28.0, 1.21, 6286.6],
    [28.0, 1.9, 6279.55],
    [26.0, 4.59, 10447.39],
];

#[rustfmt::skip]
static EARTH_R1: [[f64; 3]; 10] = [
    [103019.0, 1.10749, 6283.07585],
    [1721.0, 1.0644, 12566.1517],
    [702.0, 3.142, 0.0],
    [32.0, 1.02, 18849.23],
    [31.0, 2.84, 5507.55],
    [25.0, 1.32, 5223.69],
    [18.0, 1.42, 1577.34],
    [10.0, 5.91, 10977.08],
    [9.0, 1.42, 6275.96],
    [9.0, 0.27, 5486.78],
];

#[rustfmt::skip]
static EARTH_R2: [[f64; 3]; 6] = [
    [4359.0, 5.7846, 6283.0758],
    [124.0, 5.579, 12566.152],
    [12.0, 3.14, 0.0],
    [9.0, 3.63, 77713.77],
    [6.0, 1.87, 5573.14],
    [3.0, 5.47, 18849.23],
];

#[rustfmt::skip]
static EARTH_R3: [[f64; 3]; 2] = [
    [145.0, 4.273, 6283.076],
    [7.0, 3.92, 12566.15],
];

#[rustfmt::skip]
static EARTH_R4: [[f64; 3]; 1] = [
    [4.0, 2.56, 6283.08],
];

fn series(terms: &[[f64; 3]], tau: f64) -> f64 {
    terms
        .iter()
        .map(|[a, b, c]| a * (b + c * tau).cos())
        .sum()
}

fn power_series(groups: &[&[[f64; 3]]], tau: f64) -> f64 {
    let mut total = 0.0;
    let mut tau_pow = 1.0;
    for terms in groups {
        total += series(terms, tau) * tau_pow;
        tau_pow *= tau;
    }
    total / 1e8
}

/// Heliocentric ecliptic longitude (rad, unreduced) and radius (AU) of Earth.
pub fn earth_heliocentric(jde: f64) -> (f64, f64) {
    let tau = (jde - J2000_JD) / DAYS_PER_MILLENNIUM;
    let l = power_series(
        &[&EARTH_L0, &EARTH_L1, &EARTH_L2, &EARTH_L3, &EARTH_L4, &EARTH_L5],
        tau,
    );
    let r = power_series(&[&EARTH_R0, &EARTH_R1, &EARTH_R2, &EARTH_R3, &EARTH_R4], tau);
    (l, r)
}

/// Nutation in longitude (arcsec), abridged IAU 1980 series.
pub fn nutation_longitude_arcsec(t_centuries: f64) -> f64 {
    let t = t_centuries;
    let omega = (125.04452 - 1934.136261 * t).to_radians();
    let sun_mean = (280.4665 + 36000.7698 * t).to_radians();
    let moon_mean = (218.3165 + 481267.8813 * t).to_radians();
    -17.20 * omega.sin() - 1.32 * (2.0 * sun_mean).sin() - 0.23 * (2.0 * moon_mean).sin()
        + 0.21 * (2.0 * omega).sin()
}

/// Apparent geocentric solar longitude in degrees [0, 360) at JDE (TT).
pub fn sun_apparent_longitude_deg(jde: f64) -> f64 {
    let (l, r) = earth_heliocentric(jde);
    let t = (jde - J2000_JD) / 36_525.0;
    let mut theta = l.to_degrees() + 180.0;
    theta -= 0.09033 / 3600.0;
    theta += nutation_longitude_arcsec(t) / 3600.0;
    theta -= 20.4898 / 3600.0 / r;
    theta.rem_euclid(360.0)
}

/// Signed difference `target − current` folded into [−180, 180).
fn longitude_gap(target_deg: f64, current_deg: f64) -> f64 {
    (target_deg - current_deg + 180.0).rem_euclid(360.0) - 180.0
}

/// JDE (TT) at which the apparent solar longitude crosses `target_deg`,
/// searched near its expected date within civil `year`.
pub fn solar_longitude_crossing_jde(year: i32, target_deg: f64) -> f64 {
    let offset_days =
        (target_deg - JAN1_SOLAR_LONGITUDE_DEG).rem_euclid(360.0) / 360.0 * TROPICAL_YEAR_DAYS;
    let mut jde = calendar_to_jd(year, 1, 1.0) + offset_days - 1.0;
    for _ in 0..MAX_CROSSING_ITERATIONS {
        let gap = longitude_gap(target_deg, sun_apparent_longitude_deg(jde));
        if gap.abs() < CROSSING_TOLERANCE_DEG {
            break;
        }
        jde += gap * TROPICAL_YEAR_DAYS / 360.0;
    }
    jde
}

/// Convert a JDE (TT) instant to a Julian Date on a civil clock `utc_offset_minutes` east of UTC.
pub fn jde_to_civil_jd(jde: f64, utc_offset_minutes: i32) -> f64 {
    let ut = jde - delta_t_seconds(decimal_year(jde)) / 86_400.0;
    ut + utc_offset_minutes as f64 / 1_440.0
}

/// Inverse of [`jde_to_civil_jd`].
pub fn civil_jd_to_jde(civil_jd: f64, utc_offset_minutes: i32) -> f64 {
    let ut = civil_jd - utc_offset_minutes as f64 / 1_440.0;
    ut + delta_t_seconds(decimal_year(ut)) / 86_400.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::jd_to_naive_minute;
    use chrono::{Datelike, Timelike};

    #[test]
    fn earth_radius_near_one_au() {
        let (_, r) = earth_heliocentric(J2000_JD);
        assert!((r - 0.9833).abs() < 0.001, "r = {r}");
    }

    #[test]
    fn sun_longitude_j2000() {
        // Apparent longitude at 2000-01-01 12:00 TT is about 280.37 deg.
        let lon = sun_apparent_longitude_deg(J2000_JD);
        assert!((lon - 280.37).abs() < 0.02, "lon = {lon}");
    }

    #[test]
    fn march_equinox_2000() {
        // 2000-03-20 07:35 UT
        let jde = solar_longitude_crossing_jde(2000, 0.0);
        let utc = jd_to_naive_minute(jde_to_civil_jd(jde, 0)).unwrap();
        assert_eq!((utc.month(), utc.day(), utc.hour()), (3, 20, 7));
        assert!((utc.minute() as i32 - 35).abs() <= 1, "{utc}");
    }

    #[test]
    fn crossing_hits_target() {
        for target in [15.0, 135.0, 285.0, 315.0] {
            let jde = solar_longitude_crossing_jde(2024, target);
            let lon = sun_apparent_longitude_deg(jde);
            assert!(longitude_gap(target, lon).abs() < 1e-6, "{target}: {lon}");
        }
    }

    #[test]
    fn civil_round_trip() {
        let jde = 2_460_000.25;
        let back = civil_jd_to_jde(jde_to_civil_jd(jde, 540), 540);
        assert!((back - jde).abs() < 1e-7);
    }

    #[test]
    fn gap_folds() {
        assert!((longitude_gap(5.0, 355.0) - 10.0).abs() < 1e-12);
        assert!((longitude_gap(355.0, 5.0) + 10.0).abs() < 1e-12);
    }
}
