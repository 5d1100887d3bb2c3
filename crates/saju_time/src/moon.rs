//! Mean and true new-moon instants (Meeus, Astronomical Algorithms ch. 49).
//!
//! Lunation number `k` counts from the new moon of 2000-01-06 (`k = 0`).
//! The periodic corrections bring the result to within a few seconds of
//! the true conjunction over 1800–2200.

/// Mean synodic month, days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_861;

/// JDE of mean new moon `k = 0`.
const NEW_MOON_EPOCH_JDE: f64 = 2_451_550.097_66;

#[rustfmt::skip]
const PLANETARY_ARGUMENTS: [(f64, f64, f64); 14] = [
    // (A0, A1 per lunation, coefficient)
    (299.77, 0.107408,  0.000325),
    (251.88, 0.016321,  0.000165),
    (251.83, 26.651886, 0.000164),
    (349.42, 36.412478, 0.000126),
    (84.66,  18.206239, 0.000110),
    (141.74, 53.303771, 0.000062),
    (207.14, 2.453732,  0.000060),
    (154.84, 7.306860,  0.000056),
    (34.52,  27.261239, 0.000047),
    (207.19, 0.121824,  0.000042),
    (291.34, 1.844379,  0.000040),
    (161.72, 24.198154, 0.000037),
    (239.56, 25.513099, 0.000035),
    (331.55, 3.592518,  0.000023),
];

/// JDE (TT) of true new moon for lunation `k`.
pub fn new_moon_jde(k: i64) -> f64 {
    let k = k as f64;
    let t = k / 1236.85;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let mean = NEW_MOON_EPOCH_JDE + SYNODIC_MONTH_DAYS * k + 0.000_154_37 * t2
        - 0.000_000_150 * t3
        + 0.000_000_000_73 * t4;

    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t2;
    let m = (2.5534 + 29.105_356_70 * k - 0.000_001_4 * t2 - 0.000_000_11 * t3).to_radians();
    let mp = (201.5643 + 385.816_935_28 * k + 0.010_758_2 * t2 + 0.000_012_38 * t3
        - 0.000_000_058 * t4)
        .to_radians();
    let f = (160.7108 + 390.670_502_84 * k - 0.001_611_8 * t2 - 0.000_002_27 * t3
        + 0.000_000_011 * t4)
        .to_radians();
    let om = (124.7746 - 1.563_755_88 * k + 0.002_067_2 * t2 + 0.000_002_15 * t3).to_radians();

    let periodic = -0.40720 * mp.sin()
        + 0.17241 * e * m.sin()
        + 0.01608 * (2.0 * mp).sin()
        + 0.01039 * (2.0 * f).sin()
        + 0.00739 * e * (mp - m).sin()
        - 0.00514 * e * (mp + m).sin()
        + 0.00208 * e * e * (2.0 * m).sin()
        - 0.00111 * (mp - 2.0 * f).sin()
        - 0.00057 * (mp + 2.0 * f).sin()
        + 0.00056 * e * (2.0 * mp + m).sin()
        - 0.00042 * (3.0 * mp).sin()
        + 0.00042 * e * (m + 2.0 * f).sin()
        + 0.00038 * e * (m - 2.0 * f).sin()
        - 0.00024 * e * (2.0 * mp - m).sin()
        - 0.00017 * om.sin()
        - 0.00007 * (mp + 2.0 * m).sin()
        + 0.00004 * (2.0 * mp - 2.0 * f).sin()
        + 0.00004 * (3.0 * m).sin()
        + 0.00003 * (mp + m - 2.0 * f).sin()
        + 0.00003 * (2.0 * mp + 2.0 * f).sin()
        - 0.00003 * (mp + m + 2.0 * f).sin()
        + 0.00003 * (mp - m + 2.0 * f).sin()
        - 0.00002 * (mp - m - 2.0 * f).sin()
        - 0.00002 * (3.0 * mp + m).sin()
        + 0.00002 * (4.0 * mp).sin();

    let planetary: f64 = PLANETARY_ARGUMENTS
        .iter()
        .enumerate()
        .map(|(i, &(a0, a1, coeff))| {
            let mut arg = a0 + a1 * k;
            if i == 0 {
                arg -= 0.009_173 * t2;
            }
            coeff * arg.to_radians().sin()
        })
        .sum();

    mean + periodic + planetary
}

/// Lunation number whose mean new moon is nearest `jd`.
pub fn nearest_lunation(jd: f64) -> i64 {
    ((jd - NEW_MOON_EPOCH_JDE) / SYNODIC_MONTH_DAYS).round() as i64
}
