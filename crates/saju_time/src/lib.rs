//! Civil time, solar terms and the Korean lunisolar calendar.
//!
//! This crate provides:
//! - Julian Day arithmetic and a ΔT model
//! - Apparent solar longitude (truncated VSOP87) and sectional-term crossings
//! - The 1900–2050 solar-term boundary table with an algorithmic fallback
//! - True-solar-time correction (Korean DST history, longitude, equation of time)
//! - Lunar ↔ solar date conversion, lunar years 1899–2050

pub mod delta_t;
pub mod dst;
pub mod error;
pub mod julian;
pub mod lunar;
pub mod moon;
pub mod solar_term;
pub mod solar_term_table;
pub mod sun;
pub mod timezone;
pub mod true_solar_time;

pub use delta_t::delta_t_seconds;
pub use dst::{KOREAN_DST_OFFSET_MINUTES, is_korean_dst, korean_dst_offset_minutes};
pub use error::TimeError;
pub use julian::{date_from_jdn, jdn_of, julian_day_number};
pub use lunar::{
    LUNAR_FIRST_YEAR, LUNAR_LAST_YEAR, LunarDate, LunarMonth, leap_month_of, lunar_month_length,
    lunar_to_solar, lunar_year_months, solar_to_lunar,
};
pub use solar_term::{
    ALL_SOLAR_TERMS, AlgorithmicSolarTerms, BOUNDARY_UTC_OFFSET_MINUTES, BoundarySource,
    SolarTerm, SolarTermBoundary, SolarTermCalendar, SolarTermSource, TabulatedSolarTerms,
    YearBoundaries, fallback_tolerance_minutes,
};
pub use solar_term_table::{TABLE_FIRST_YEAR, TABLE_LAST_YEAR};
pub use sun::sun_apparent_longitude_deg;
pub use timezone::{TimezoneInfo, timezone_info};
pub use true_solar_time::{
    AdjustedMoment, AdjustmentOptions, BirthMoment, TrueSolarTimeAdjuster,
    equation_of_time_minutes, longitude_correction_minutes,
};
