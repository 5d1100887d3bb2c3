//! Sexagenary cycle arithmetic: year, month, day and hour pillars.
//!
//! - Year: `(effective_year − 1984) mod 60`, 1984 = Gap-Ja. A moment at or
//!   before Ipchun belongs to the previous year.
//! - Month: saju month index (strict-after) picks the branch; five-tiger rule
//!   picks the stem.
//! - Day: `(JDN + 49) mod 60`.
//! - Hour: branch `⌊(h + 1) / 2⌋ mod 12`; five-rat rule picks the stem.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use tracing::debug;

use saju_time::{BOUNDARY_UTC_OFFSET_MINUTES, BoundarySource, SolarTermCalendar, SolarTermSource};

use crate::error::BaseError;
use crate::ganji::{Cheongan, Jiji};
use crate::pillar::{Pillar, PillarSet};

/// Epoch year of the 60-cycle (Gap-Ja).
pub const CYCLE_EPOCH_YEAR: i32 = 1984;

/// Offset such that `(JDN + 49) mod 60` is the day's cycle index.
pub const DAY_CYCLE_OFFSET: i64 = 49;

/// When the late-night hour rolls the day pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayCutMode {
    /// Day changes at 00:00.
    #[default]
    Midnight,
    /// 23:00–24:00 already belongs to the next day.
    Hour23,
    /// 23:30–24:00 already belongs to the next day.
    Hour2330,
    /// Day never rolls; the late Ja hour takes its stem from the next day.
    Split,
}

impl DayCutMode {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Midnight => "midnight",
            Self::Hour23 => "hour23",
            Self::Hour2330 => "hour2330",
            Self::Split => "split",
        }
    }

    /// Whether the clock reading moves the day pillar to the next date.
    pub const fn rolls_day(self, hour: u32, minute: u32) -> bool {
        match self {
            Self::Midnight | Self::Split => false,
            Self::Hour23 => hour == 23,
            Self::Hour2330 => hour == 23 && minute >= 30,
        }
    }
}

// ---------------------------------------------------------------------------
// Stem rules
// ---------------------------------------------------------------------------

/// Five-tiger rule: stem of month 1 (In) keyed by year stem.
/// Gap/Gi→Byeong, Eul/Gyeong→Mu, Byeong/Sin→Gyeong, Jeong/Im→Im, Mu/Gye→Gap.
pub const fn five_tiger_start(year_stem: Cheongan) -> Cheongan {
    Cheongan::from_index((year_stem.index() % 5) * 2 + 2)
}

/// Five-rat rule: stem of the Ja hour keyed by day stem.
/// Gap/Gi→Gap, Eul/Gyeong→Byeong, Byeong/Sin→Mu, Jeong/Im→Gyeong, Mu/Gye→Im.
pub const fn five_rat_start(day_stem: Cheongan) -> Cheongan {
    Cheongan::from_index((day_stem.index() % 5) * 2)
}

/// Year pillar of an effective (Ipchun-based) year.
pub fn year_pillar_of(effective_year: i32) -> Pillar {
    Pillar::from_sexagenary_index((effective_year - CYCLE_EPOCH_YEAR).rem_euclid(60) as u8)
}

/// Month pillar from year stem and saju month index (1–12).
pub fn month_pillar_of(year_stem: Cheongan, month_index: u8) -> Pillar {
    let m = (month_index.clamp(1, 12) - 1) % 12;
    Pillar {
        stem: five_tiger_start(year_stem).offset(m),
        branch: Jiji::from_saju_month_index(m + 1),
    }
}

/// Day pillar of a proleptic Gregorian date.
pub fn day_pillar_of(date: NaiveDate) -> Pillar {
    let jdn = saju_time::jdn_of(date);
    Pillar::from_sexagenary_index((jdn + DAY_CYCLE_OFFSET).rem_euclid(60) as u8)
}

/// Hour branch of a clock hour (0–23).
pub fn hour_branch_of(hour: u32) -> Result<Jiji, BaseError> {
    if hour > 23 {
        return Err(BaseError::InvalidHour(hour));
    }
    Ok(Jiji::from_index((((hour + 1) / 2) % 12) as u8))
}

/// Hour pillar from clock hour and the day stem supplying the five-rat start.
pub fn hour_pillar_of(hour: u32, day_stem: Cheongan) -> Result<Pillar, BaseError> {
    let branch = hour_branch_of(hour)?;
    Ok(Pillar {
        stem: five_rat_start(day_stem).offset(branch.index()),
        branch,
    })
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Pillars plus the intermediate decisions that produced them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PillarDerivation {
    pub pillars: PillarSet,
    /// Year whose Ipchun opened the year pillar.
    pub effective_year: i32,
    /// Saju month index (1–12).
    pub saju_month_index: u8,
    /// Date the day pillar was taken from (after day cut).
    pub day_pillar_date: NaiveDate,
    /// Whether the day cut rolled the date forward.
    pub day_rolled: bool,
    /// Whether the hour stem came from the following day (split mode).
    pub hour_stem_from_next_day: bool,
    /// Moment compared with solar-term boundaries (UTC+9 clock).
    pub term_moment: NaiveDateTime,
    /// Boundary source serving the comparison year.
    pub boundary_source: BoundarySource,
}

/// Converts an adjusted moment into four pillars.
#[derive(Debug, Clone)]
pub struct SexagenaryEngine<S: SolarTermSource = SolarTermCalendar> {
    source: S,
    day_cut: DayCutMode,
}

impl SexagenaryEngine<SolarTermCalendar> {
    pub fn new(day_cut: DayCutMode) -> Self {
        Self::with_source(SolarTermCalendar::new(), day_cut)
    }
}

impl<S: SolarTermSource> SexagenaryEngine<S> {
    pub fn with_source(source: S, day_cut: DayCutMode) -> Self {
        Self { source, day_cut }
    }

    pub fn day_cut(&self) -> DayCutMode {
        self.day_cut
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Year pillar and effective year of a moment on the boundary clock.
    pub fn year_pillar(&self, term_moment: NaiveDateTime) -> Result<(Pillar, i32), BaseError> {
        let year = term_moment.year();
        let ipchun = self
            .source
            .ipchun_of(year)
            .ok_or(BaseError::SolarTermUnavailable(year))?;
        let effective = if term_moment <= ipchun.instant {
            year - 1
        } else {
            year
        };
        Ok((year_pillar_of(effective), effective))
    }

    /// Month pillar and saju month index of a moment on the boundary clock.
    pub fn month_pillar(
        &self,
        term_moment: NaiveDateTime,
        year_stem: Cheongan,
    ) -> Result<(Pillar, u8), BaseError> {
        let index = self
            .source
            .saju_month_index_at(term_moment)
            .ok_or(BaseError::SolarTermUnavailable(term_moment.year()))?;
        Ok((month_pillar_of(year_stem, index), index))
    }

    /// Date feeding the day pillar under the configured day cut.
    pub fn day_pillar_date(&self, adjusted: NaiveDateTime) -> Result<(NaiveDate, bool), BaseError> {
        let date = adjusted.date();
        if self.day_cut.rolls_day(adjusted.hour(), adjusted.minute()) {
            let next = date.succ_opt().ok_or(BaseError::OutOfRange)?;
            Ok((next, true))
        } else {
            Ok((date, false))
        }
    }

    /// Four pillars of an adjusted (true solar time) moment.
    ///
    /// `utc_offset_minutes` is the birth zone's standard offset; the
    /// solar-term comparison is shifted onto the UTC+9 boundary clock.
    pub fn four_pillars(
        &self,
        adjusted: NaiveDateTime,
        utc_offset_minutes: i32,
    ) -> Result<PillarDerivation, BaseError> {
        let shift = i64::from(BOUNDARY_UTC_OFFSET_MINUTES - utc_offset_minutes);
        let term_moment = adjusted
            .checked_add_signed(Duration::minutes(shift))
            .ok_or(BaseError::OutOfRange)?;

        let (year, effective_year) = self.year_pillar(term_moment)?;
        let (month, saju_month_index) = self.month_pillar(term_moment, year.stem)?;

        let (day_date, day_rolled) = self.day_pillar_date(adjusted)?;
        let day = day_pillar_of(day_date);

        let hour_stem_from_next_day = self.day_cut == DayCutMode::Split && adjusted.hour() == 23;
        let hour_stem_day = if hour_stem_from_next_day {
            let next = day_date.succ_opt().ok_or(BaseError::OutOfRange)?;
            day_pillar_of(next).stem
        } else {
            day.stem
        };
        let hour = hour_pillar_of(adjusted.hour(), hour_stem_day)?;

        let boundary_source = self
            .source
            .boundaries_for_year(term_moment.year())
            .map(|b| b.source)
            .ok_or(BaseError::SolarTermUnavailable(term_moment.year()))?;

        debug!(
            %adjusted,
            %term_moment,
            effective_year,
            saju_month_index,
            day_cut = self.day_cut.name(),
            "pillars derived"
        );

        Ok(PillarDerivation {
            pillars: PillarSet {
                year,
                month,
                day,
                hour,
            },
            effective_year,
            saju_month_index,
            day_pillar_date: day_date,
            day_rolled,
            hour_stem_from_next_day,
            term_moment,
            boundary_source,
        })
    }
}
