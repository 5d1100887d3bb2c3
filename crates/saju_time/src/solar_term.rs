//! Sectional solar terms (jeolgi) and the saju month boundaries they define.
//!
//! The 12 sectional terms sit at apparent solar longitudes 315°, 345°, 15°,
//! …, 285° (30° apart, offset 15° from the principal terms). Each one opens a
//! saju month: Ipchun opens month 1 (In), Sohan opens month 12 (Chuk).
//!
//! Boundary comparison is strict-after: a moment exactly equal to a boundary
//! still belongs to the previous saju month.
//!
//! Two sources implement [`SolarTermSource`]: the precomputed 1900–2050 table
//! and the algorithmic series. [`SolarTermCalendar`] picks between them by
//! year.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;
use tracing::debug;

use crate::julian::jd_to_naive_minute;
use crate::solar_term_table::{TABLE_FIRST_YEAR, TABLE_LAST_YEAR, table_row};
use crate::sun::{jde_to_civil_jd, solar_longitude_crossing_jde};

/// Clock on which boundary instants are expressed (UTC+9, Korean Standard Time).
pub const BOUNDARY_UTC_OFFSET_MINUTES: i32 = 540;

/// Fallback/table agreement bound for years from 1920 on, minutes.
pub const FALLBACK_TOLERANCE_MINUTES: i64 = 2;

/// Fallback/table agreement bound before 1920, minutes (ΔT models diverge).
pub const FALLBACK_TOLERANCE_EARLY_MINUTES: i64 = 60;

/// Last year to which the wider early tolerance applies.
pub const EARLY_TOLERANCE_LAST_YEAR: i32 = 1919;

/// Agreement bound between the fallback and the table for `year`.
pub fn fallback_tolerance_minutes(year: i32) -> i64 {
    if year <= EARLY_TOLERANCE_LAST_YEAR {
        FALLBACK_TOLERANCE_EARLY_MINUTES
    } else {
        FALLBACK_TOLERANCE_MINUTES
    }
}

// ---------------------------------------------------------------------------
// SolarTerm
// ---------------------------------------------------------------------------

/// The 12 sectional terms, in civil-year order (Sohan first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[allow(missing_docs)]
pub enum SolarTerm {
    Sohan,
    Ipchun,
    Gyeongchip,
    Cheongmyeong,
    Ipha,
    Mangjong,
    Soseo,
    Ipchu,
    Baengno,
    Hallo,
    Ipdong,
    Daeseol,
}

/// All sectional terms in civil-year order.
pub const ALL_SOLAR_TERMS: [SolarTerm; 12] = [
    SolarTerm::Sohan,
    SolarTerm::Ipchun,
    SolarTerm::Gyeongchip,
    SolarTerm::Cheongmyeong,
    SolarTerm::Ipha,
    SolarTerm::Mangjong,
    SolarTerm::Soseo,
    SolarTerm::Ipchu,
    SolarTerm::Baengno,
    SolarTerm::Hallo,
    SolarTerm::Ipdong,
    SolarTerm::Daeseol,
];

const SOLAR_TERM_NAMES: [&str; 12] = [
    "Sohan",
    "Ipchun",
    "Gyeongchip",
    "Cheongmyeong",
    "Ipha",
    "Mangjong",
    "Soseo",
    "Ipchu",
    "Baengno",
    "Hallo",
    "Ipdong",
    "Daeseol",
];

const SOLAR_TERM_HANJA: [&str; 12] = [
    "小寒", "立春", "驚蟄", "淸明", "立夏", "芒種", "小暑", "立秋", "白露", "寒露", "立冬", "大雪",
];

impl SolarTerm {
    /// 0-based civil-order index (Sohan=0 .. Daeseol=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Romanized Korean name.
    pub fn name(self) -> &'static str {
        SOLAR_TERM_NAMES[self.index() as usize]
    }

    /// Hanja name.
    pub fn hanja(self) -> &'static str {
        SOLAR_TERM_HANJA[self.index() as usize]
    }

    /// Apparent solar longitude of the crossing, degrees.
    pub fn solar_longitude_deg(self) -> f64 {
        (285.0 + 30.0 * self.index() as f64).rem_euclid(360.0)
    }

    /// Saju month this term opens (Ipchun=1 .. Daeseol=11, Sohan=12).
    pub const fn saju_month_index(self) -> u8 {
        match self {
            Self::Sohan => 12,
            other => other.index(),
        }
    }

    /// Earthly-branch index (Ja=0 .. Hae=11) of the month this term opens.
    pub const fn branch_index(self) -> u8 {
        (self.saju_month_index() + 1) % 12
    }

    /// Term opening saju month `month_index` (1–12).
    pub fn from_saju_month_index(month_index: u8) -> Option<Self> {
        match month_index {
            12 => Some(Self::Sohan),
            1..=11 => Some(ALL_SOLAR_TERMS[month_index as usize]),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Boundaries
// ---------------------------------------------------------------------------

/// One sectional-term crossing on the Korean Standard Time clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SolarTermBoundary {
    /// Which term.
    pub term: SolarTerm,
    /// Crossing instant, minute resolution, UTC+9.
    pub instant: NaiveDateTime,
}

impl SolarTermBoundary {
    /// Civil year of the crossing on the UTC+9 clock.
    pub fn year(&self) -> i32 {
        self.instant.year()
    }

    /// Civil month, 1–12.
    pub fn month(&self) -> u32 {
        self.instant.month()
    }

    /// Day of month.
    pub fn day(&self) -> u32 {
        self.instant.day()
    }

    /// Hour, 0–23.
    pub fn hour(&self) -> u32 {
        self.instant.hour()
    }

    /// Minute, 0–59.
    pub fn minute(&self) -> u32 {
        self.instant.minute()
    }

    /// Apparent solar longitude at the crossing, degrees.
    pub fn solar_longitude_deg(&self) -> f64 {
        self.term.solar_longitude_deg()
    }

    /// Saju month opened by this boundary (Ipchun opens month 1).
    pub fn saju_month_index(&self) -> u8 {
        self.term.saju_month_index()
    }

    /// Index of the month branch opened by this boundary.
    pub fn branch_index(&self) -> u8 {
        self.term.branch_index()
    }
}

/// Where a year's boundaries came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BoundarySource {
    /// Precomputed 1900–2050 table.
    Table,
    /// Solar-longitude series evaluated on demand.
    Algorithmic,
}

impl BoundarySource {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Algorithmic => "algorithmic",
        }
    }
}

/// The 12 boundaries falling in one civil year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearBoundaries {
    pub year: i32,
    pub source: BoundarySource,
    boundaries: [SolarTermBoundary; 12],
}

impl YearBoundaries {
    /// Boundaries in chronological (civil) order.
    pub fn chronological(&self) -> &[SolarTermBoundary; 12] {
        &self.boundaries
    }

    /// Boundary opening saju month `month_index` (1–12).
    pub fn by_month_index(&self, month_index: u8) -> Option<&SolarTermBoundary> {
        let term = SolarTerm::from_saju_month_index(month_index)?;
        self.boundaries.get(term.index() as usize)
    }

    /// Ipchun boundary (saju month 1).
    pub fn ipchun(&self) -> &SolarTermBoundary {
        &self.boundaries[SolarTerm::Ipchun.index() as usize]
    }

    /// Ordered map `saju month index → boundary`.
    pub fn to_month_map(&self) -> BTreeMap<u8, SolarTermBoundary> {
        self.boundaries
            .iter()
            .map(|b| (b.saju_month_index(), *b))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Source trait
// ---------------------------------------------------------------------------

/// Lookup of sectional-term boundaries on the UTC+9 clock.
pub trait SolarTermSource {
    /// The 12 boundaries of civil `year`, or `None` if this source cannot
    /// produce them.
    fn boundaries_for_year(&self, year: i32) -> Option<YearBoundaries>;

    /// Ipchun instant of `year`.
    fn ipchun_of(&self, year: i32) -> Option<SolarTermBoundary> {
        self.boundaries_for_year(year).map(|b| *b.ipchun())
    }

    /// Latest boundary strictly before `moment`.
    fn previous_boundary_before(&self, moment: NaiveDateTime) -> Option<SolarTermBoundary> {
        surrounding_boundaries(self, moment.year())
            .into_iter()
            .rev()
            .find(|b| b.instant < moment)
    }

    /// Latest boundary at or before `moment`.
    fn previous_boundary_at_or_before(&self, moment: NaiveDateTime) -> Option<SolarTermBoundary> {
        surrounding_boundaries(self, moment.year())
            .into_iter()
            .rev()
            .find(|b| b.instant <= moment)
    }

    /// Earliest boundary strictly after `moment`.
    fn next_boundary_after(&self, moment: NaiveDateTime) -> Option<SolarTermBoundary> {
        surrounding_boundaries(self, moment.year())
            .into_iter()
            .find(|b| b.instant > moment)
    }

    /// Saju month (1–12) governing `moment`, strict-after.
    fn saju_month_index_at(&self, moment: NaiveDateTime) -> Option<u8> {
        self.previous_boundary_before(moment)
            .map(|b| b.saju_month_index())
    }

    /// [`Self::saju_month_index_at`] from clock fields; `None` for an invalid
    /// date or time.
    fn saju_month_index_at_parts(
        &self,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    ) -> Option<u8> {
        let moment = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, 0)?;
        self.saju_month_index_at(moment)
    }
}

/// Boundaries of `year − 1 ..= year + 1`, chronological.
fn surrounding_boundaries<S: SolarTermSource + ?Sized>(
    source: &S,
    year: i32,
) -> Vec<SolarTermBoundary> {
    (year - 1..=year + 1)
        .filter_map(|y| source.boundaries_for_year(y))
        .flat_map(|yb| yb.boundaries)
        .collect()
}

// ---------------------------------------------------------------------------
// Implementations
// ---------------------------------------------------------------------------

/// Precomputed table, 1900–2050.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabulatedSolarTerms;

impl TabulatedSolarTerms {
    pub fn covers(&self, year: i32) -> bool {
        (TABLE_FIRST_YEAR..=TABLE_LAST_YEAR).contains(&year)
    }
}

impl SolarTermSource for TabulatedSolarTerms {
    fn boundaries_for_year(&self, year: i32) -> Option<YearBoundaries> {
        let row = table_row(year)?;
        let mut boundaries = Vec::with_capacity(12);
        for (term, &(month, day, hour, minute)) in ALL_SOLAR_TERMS.iter().zip(row.iter()) {
            let instant = NaiveDate::from_ymd_opt(year, month as u32, day as u32)?
                .and_hms_opt(hour as u32, minute as u32, 0)?;
            boundaries.push(SolarTermBoundary {
                term: *term,
                instant,
            });
        }
        Some(YearBoundaries {
            year,
            source: BoundarySource::Table,
            boundaries: boundaries.try_into().ok()?,
        })
    }
}

/// Solar-longitude series with ΔT, valid (approximately) for any year.
#[derive(Debug, Clone, Copy)]
pub struct AlgorithmicSolarTerms {
    /// Clock the instants are expressed on, minutes east of UTC.
    pub utc_offset_minutes: i32,
}

impl Default for AlgorithmicSolarTerms {
    fn default() -> Self {
        Self {
            utc_offset_minutes: BOUNDARY_UTC_OFFSET_MINUTES,
        }
    }
}

impl AlgorithmicSolarTerms {
    /// Crossing instant of `term` in civil `year`, minute resolution.
    pub fn crossing(&self, year: i32, term: SolarTerm) -> Option<NaiveDateTime> {
        let jde = solar_longitude_crossing_jde(year, term.solar_longitude_deg());
        jd_to_naive_minute(jde_to_civil_jd(jde, self.utc_offset_minutes))
    }
}

impl SolarTermSource for AlgorithmicSolarTerms {
    fn boundaries_for_year(&self, year: i32) -> Option<YearBoundaries> {
        let mut boundaries = Vec::with_capacity(12);
        for term in ALL_SOLAR_TERMS {
            boundaries.push(SolarTermBoundary {
                term,
                instant: self.crossing(year, term)?,
            });
        }
        Some(YearBoundaries {
            year,
            source: BoundarySource::Algorithmic,
            boundaries: boundaries.try_into().ok()?,
        })
    }
}

/// Table inside 1900–2050, algorithmic series outside.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolarTermCalendar {
    table: TabulatedSolarTerms,
    fallback: AlgorithmicSolarTerms,
}

impl SolarTermCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Which source serves `year`.
    pub fn source_for_year(&self, year: i32) -> BoundarySource {
        if self.table.covers(year) {
            BoundarySource::Table
        } else {
            BoundarySource::Algorithmic
        }
    }
}

impl SolarTermSource for SolarTermCalendar {
    fn boundaries_for_year(&self, year: i32) -> Option<YearBoundaries> {
        match self.source_for_year(year) {
            BoundarySource::Table => self.table.boundaries_for_year(year),
            BoundarySource::Algorithmic => {
                debug!(year, "solar-term table miss, using algorithmic series");
                self.fallback.boundaries_for_year(year)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn term_longitudes_and_months() {
        assert_eq!(SolarTerm::Ipchun.solar_longitude_deg(), 315.0);
        assert_eq!(SolarTerm::Cheongmyeong.solar_longitude_deg(), 15.0);
        assert_eq!(SolarTerm::Sohan.solar_longitude_deg(), 285.0);
        assert_eq!(SolarTerm::Ipchun.saju_month_index(), 1);
        assert_eq!(SolarTerm::Daeseol.saju_month_index(), 11);
        assert_eq!(SolarTerm::Sohan.saju_month_index(), 12);
        assert_eq!(SolarTerm::Ipchun.branch_index(), 2);
        assert_eq!(SolarTerm::Daeseol.branch_index(), 0);
        assert_eq!(SolarTerm::Sohan.branch_index(), 1);
    }

    #[test]
    fn month_index_round_trip() {
        for m in 1..=12 {
            let term = SolarTerm::from_saju_month_index(m).unwrap();
            assert_eq!(term.saju_month_index(), m);
        }
        assert!(SolarTerm::from_saju_month_index(0).is_none());
        assert!(SolarTerm::from_saju_month_index(13).is_none());
    }

    #[test]
    fn ipchun_2021_from_table() {
        let ipchun = TabulatedSolarTerms.ipchun_of(2021).unwrap();
        assert_eq!(ipchun.instant, at(2021, 2, 3, 23, 59));
    }

    #[test]
    fn strict_after_rule() {
        let cal = SolarTermCalendar::new();
        assert_eq!(cal.saju_month_index_at(at(2021, 2, 3, 23, 59)), Some(12));
        assert_eq!(cal.saju_month_index_at(at(2021, 2, 4, 0, 0)), Some(1));
        assert_eq!(
            cal.previous_boundary_at_or_before(at(2021, 2, 3, 23, 59))
                .map(|b| b.term),
            Some(SolarTerm::Ipchun)
        );
        assert_eq!(
            cal.next_boundary_after(at(2021, 2, 3, 23, 59))
                .map(|b| b.term),
            Some(SolarTerm::Gyeongchip)
        );
    }

    #[test]
    fn early_january_is_month_11_or_12() {
        let cal = SolarTermCalendar::new();
        assert_eq!(cal.saju_month_index_at_parts(2024, 1, 1, 0, 0), Some(11));
        assert_eq!(cal.saju_month_index_at_parts(2024, 1, 6, 12, 0), Some(12));
        assert_eq!(cal.saju_month_index_at_parts(2024, 2, 30, 0, 0), None);
    }

    #[test]
    fn calendar_selects_source() {
        let cal = SolarTermCalendar::new();
        assert_eq!(cal.source_for_year(1950), BoundarySource::Table);
        assert_eq!(cal.source_for_year(1850), BoundarySource::Algorithmic);
        assert_eq!(
            cal.boundaries_for_year(2100).unwrap().source,
            BoundarySource::Algorithmic
        );
    }

    #[test]
    fn month_map_is_keyed_1_to_12() {
        let map = TabulatedSolarTerms.boundaries_for_year(2000).unwrap().to_month_map();
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), (1..=12).collect::<Vec<u8>>());
        assert_eq!(map[&1].term, SolarTerm::Ipchun);
    }

    #[test]
    fn tolerance_switches_at_1920() {
        assert_eq!(fallback_tolerance_minutes(1919), 60);
        assert_eq!(fallback_tolerance_minutes(1920), 2);
    }
}
