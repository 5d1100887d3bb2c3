//! Civil birth moment → true (apparent local) solar time.
//!
//! Corrections are applied in a fixed order:
//! 1. Korean DST removal (wall clock → standard time).
//! 2. Longitude correction `round((λ − λ_std) × 4)` minutes.
//! 3. Optional equation of time, rounded to the minute.
//!
//! Every correction is reported, including zeros.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dst::korean_dst_offset_minutes;
use crate::error::TimeError;
use crate::timezone::timezone_info;

/// Seoul City Hall, degrees east.
pub const SEOUL_LONGITUDE_DEG: f64 = 126.978;

/// Seoul City Hall, degrees north.
pub const SEOUL_LATITUDE_DEG: f64 = 37.5665;

/// Civil birth moment as read from a wall clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthMoment {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    /// Timezone identifier, e.g. `"Asia/Seoul"`.
    pub timezone: String,
    /// Degrees east, [-180, 180].
    pub longitude: f64,
    /// Degrees north, [-90, 90].
    pub latitude: f64,
}

impl BirthMoment {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        timezone: impl Into<String>,
        longitude: f64,
        latitude: f64,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            timezone: timezone.into(),
            longitude,
            latitude,
        }
    }

    /// Birth in Seoul (Asia/Seoul, City Hall coordinates).
    pub fn seoul(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        Self::new(
            year,
            month,
            day,
            hour,
            minute,
            "Asia/Seoul",
            SEOUL_LONGITUDE_DEG,
            SEOUL_LATITUDE_DEG,
        )
    }

    /// Range-check every field.
    pub fn validate(&self) -> Result<(), TimeError> {
        if self.hour > 23 || self.minute > 59 {
            return Err(TimeError::InvalidTime {
                hour: self.hour,
                minute: self.minute,
            });
        }
        if NaiveDate::from_ymd_opt(self.year, self.month, self.day).is_none() {
            return Err(TimeError::InvalidDate {
                year: self.year,
                month: self.month,
                day: self.day,
            });
        }
        if !self.longitude.is_finite() || self.longitude.abs() > 180.0 {
            return Err(TimeError::InvalidLongitude(self.longitude));
        }
        if !self.latitude.is_finite() || self.latitude.abs() > 90.0 {
            return Err(TimeError::InvalidLatitude(self.latitude));
        }
        Ok(())
    }

    /// Wall-clock reading as a chrono value.
    pub fn civil_datetime(&self) -> Result<NaiveDateTime, TimeError> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .ok_or(TimeError::InvalidDate {
                year: self.year,
                month: self.month,
                day: self.day,
            })?
            .and_hms_opt(self.hour, self.minute, 0)
            .ok_or(TimeError::InvalidTime {
                hour: self.hour,
                minute: self.minute,
            })
    }
}

/// Which corrections to apply.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentOptions {
    pub apply_dst_history: bool,
    pub apply_longitude_correction: bool,
    pub include_equation_of_time: bool,
    /// Standard meridian to use instead of the timezone's, degrees east.
    pub lmt_baseline_override: Option<f64>,
}

impl Default for AdjustmentOptions {
    fn default() -> Self {
        Self {
            apply_dst_history: true,
            apply_longitude_correction: true,
            include_equation_of_time: false,
            lmt_baseline_override: None,
        }
    }
}

/// Birth moment after all corrections, with each correction broken out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AdjustedMoment {
    /// Original wall-clock reading.
    pub civil: NaiveDateTime,
    /// After DST removal.
    pub standard: NaiveDateTime,
    /// After longitude and equation-of-time corrections.
    pub adjusted: NaiveDateTime,
    /// DST removed (positive magnitude; subtracted).
    pub dst_correction_minutes: i64,
    /// Added to standard time.
    pub longitude_correction_minutes: i64,
    /// Added last.
    pub equation_of_time_minutes: i64,
    /// Meridian the longitude correction was taken against.
    pub standard_meridian_deg: f64,
    /// Standard UTC offset of the birth timezone, minutes east.
    pub utc_offset_minutes: i32,
}

impl AdjustedMoment {
    /// Net shift from civil to adjusted, minutes.
    pub fn total_correction_minutes(&self) -> i64 {
        -self.dst_correction_minutes + self.longitude_correction_minutes + self.equation_of_time_minutes
    }

    pub fn standard_hour(&self) -> u32 {
        self.standard.hour()
    }

    pub fn standard_minute(&self) -> u32 {
        self.standard.minute()
    }
}

/// Equation of time (minutes, rounded) for a day of year (1-based).
///
/// `9.87·sin 2B − 7.53·cos B − 1.5·sin B`, `B = 2π(N − 81)/364`.
pub fn equation_of_time_minutes(day_of_year: u32) -> i64 {
    let b = 2.0 * std::f64::consts::PI * (day_of_year as f64 - 81.0) / 364.0;
    (9.87 * (2.0 * b).sin() - 7.53 * b.cos() - 1.5 * b.sin()).round() as i64
}

/// Longitude correction (minutes, rounded): 4 minutes per degree east of the meridian.
pub fn longitude_correction_minutes(longitude_deg: f64, standard_meridian_deg: f64) -> i64 {
    ((longitude_deg - standard_meridian_deg) * 4.0).round() as i64
}

fn shift(dt: NaiveDateTime, minutes: i64) -> Result<NaiveDateTime, TimeError> {
    dt.checked_add_signed(Duration::minutes(minutes))
        .ok_or(TimeError::OutOfRange)
}

/// Applies DST, longitude and equation-of-time corrections.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrueSolarTimeAdjuster {
    options: AdjustmentOptions,
}

impl TrueSolarTimeAdjuster {
    pub fn new(options: AdjustmentOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &AdjustmentOptions {
        &self.options
    }

    /// Correct `birth`. Unknown timezones are accepted only with a meridian
    /// override, in which case the UTC offset is taken from the meridian.
    pub fn adjust(&self, birth: &BirthMoment) -> Result<AdjustedMoment, TimeError> {
        birth.validate()?;
        let civil = birth.civil_datetime()?;

        if let Some(m) = self.options.lmt_baseline_override {
            if !m.is_finite() || m.abs() > 180.0 {
                return Err(TimeError::InvalidMeridian(m));
            }
        }

        let (meridian, utc_offset_minutes, korean_dst) =
            match (timezone_info(&birth.timezone), self.options.lmt_baseline_override) {
                (Some(tz), over) => (
                    over.unwrap_or(tz.standard_meridian_deg),
                    tz.utc_offset_minutes,
                    tz.korean_dst_history,
                ),
                (None, Some(m)) => (m, (m * 4.0).round() as i32, false),
                (None, None) => return Err(TimeError::UnknownTimezone(birth.timezone.clone())),
            };

        let dst = if self.options.apply_dst_history && korean_dst {
            korean_dst_offset_minutes(&civil)
        } else {
            0
        };
        let standard = shift(civil, -dst)?;

        let longitude = if self.options.apply_longitude_correction {
            longitude_correction_minutes(birth.longitude, meridian)
        } else {
            0
        };
        let mean_solar = shift(standard, longitude)?;

        let eot = if self.options.include_equation_of_time {
            equation_of_time_minutes(standard.ordinal())
        } else {
            0
        };
        let adjusted = shift(mean_solar, eot)?;

        debug!(
            %civil,
            %adjusted,
            dst,
            longitude,
            eot,
            meridian,
            "true solar time adjusted"
        );

        Ok(AdjustedMoment {
            civil,
            standard,
            adjusted,
            dst_correction_minutes: dst,
            longitude_correction_minutes: longitude,
            equation_of_time_minutes: eot,
            standard_meridian_deg: meridian,
            utc_offset_minutes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seoul_longitude_correction() {
        assert_eq!(longitude_correction_minutes(SEOUL_LONGITUDE_DEG, 135.0), -32);
        assert_eq!(longitude_correction_minutes(SEOUL_LONGITUDE_DEG, 120.0), 28);
        assert_eq!(longitude_correction_minutes(135.0, 135.0), 0);
    }

    #[test]
    fn equation_of_time_shape() {
        // Early November peak ≈ +16, mid-February trough ≈ −14.
        assert!((15..=17).contains(&equation_of_time_minutes(307)));
        assert!((-15..=-13).contains(&equation_of_time_minutes(45)));
        assert_eq!(equation_of_time_minutes(197), -6);
    }

    #[test]
    fn validate_rejects_bad_fields() {
        let mut b = BirthMoment::seoul(2024, 2, 30, 12, 0);
        assert!(matches!(b.validate(), Err(TimeError::InvalidDate { .. })));
        b.day = 29;
        b.hour = 24;
        assert!(matches!(b.validate(), Err(TimeError::InvalidTime { .. })));
        b.hour = 12;
        b.longitude = 181.0;
        assert!(matches!(b.validate(), Err(TimeError::InvalidLongitude(_))));
        b.longitude = 127.0;
        b.latitude = f64::NAN;
        assert!(matches!(b.validate(), Err(TimeError::InvalidLatitude(_))));
    }

    #[test]
    fn unknown_timezone_needs_override() {
        let birth = BirthMoment::new(2000, 1, 1, 12, 0, "Nowhere/Else", 100.0, 0.0);
        let plain = TrueSolarTimeAdjuster::default().adjust(&birth);
        assert_eq!(plain, Err(TimeError::UnknownTimezone("Nowhere/Else".into())));

        let adjuster = TrueSolarTimeAdjuster::new(AdjustmentOptions {
            lmt_baseline_override: Some(105.0),
            ..AdjustmentOptions::default()
        });
        let adj = adjuster.adjust(&birth).unwrap();
        assert_eq!(adj.longitude_correction_minutes, -20);
        assert_eq!(adj.utc_offset_minutes, 420);
    }

    #[test]
    fn override_out_of_range() {
        let adjuster = TrueSolarTimeAdjuster::new(AdjustmentOptions {
            lmt_baseline_override: Some(200.0),
            ..AdjustmentOptions::default()
        });
        let err = adjuster.adjust(&BirthMoment::seoul(2000, 1, 1, 0, 0)).unwrap_err();
        assert_eq!(err, TimeError::InvalidMeridian(200.0));
    }

    #[test]
    fn longitude_toggle_reports_zero() {
        let adjuster = TrueSolarTimeAdjuster::new(AdjustmentOptions {
            apply_longitude_correction: false,
            ..AdjustmentOptions::default()
        });
        let adj = adjuster.adjust(&BirthMoment::seoul(2000, 6, 1, 10, 0)).unwrap();
        assert_eq!(adj.longitude_correction_minutes, 0);
        assert_eq!(adj.adjusted, adj.civil);
    }

    #[test]
    fn correction_crosses_midnight() {
        let adj = TrueSolarTimeAdjuster::default()
            .adjust(&BirthMoment::seoul(2000, 1, 1, 0, 10))
            .unwrap();
        assert_eq!(adj.adjusted.to_string(), "1999-12-31 23:38:00");
        assert_eq!(adj.total_correction_minutes(), -32);
    }
}
