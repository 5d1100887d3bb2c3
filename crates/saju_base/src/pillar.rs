//! Pillars (stem + branch) and the four-pillar set.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::BaseError;
use crate::ganji::{Cheongan, Jiji};

/// One sexagenary pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pillar {
    pub stem: Cheongan,
    pub branch: Jiji,
}

impl Pillar {
    /// Pair a stem and branch; they must share polarity.
    pub fn new(stem: Cheongan, branch: Jiji) -> Result<Self, BaseError> {
        if stem.index() % 2 != branch.index() % 2 {
            return Err(BaseError::MismatchedPolarity {
                stem: stem.name(),
                branch: branch.name(),
            });
        }
        Ok(Self { stem, branch })
    }

    /// Pillar at position `i mod 60` of the cycle (0 = Gap-Ja).
    pub const fn from_sexagenary_index(i: u8) -> Self {
        let i = i % 60;
        Self {
            stem: Cheongan::from_index(i % 10),
            branch: Jiji::from_index(i % 12),
        }
    }

    /// Position in the 60-cycle (0 = Gap-Ja .. 59 = Gye-Hae).
    pub const fn sexagenary_index(self) -> u8 {
        let s = self.stem.index() as i16;
        let b = self.branch.index() as i16;
        (6 * s - 5 * b).rem_euclid(60) as u8
    }

    /// `"Gap-Ja"`.
    pub fn name(self) -> String {
        format!("{}-{}", self.stem.name(), self.branch.name())
    }

    /// `"甲子"`.
    pub fn hanja(self) -> String {
        format!("{}{}", self.stem.hanja(), self.branch.hanja())
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.stem.name(), self.branch.name())
    }
}

/// Position of a pillar in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

/// Chart order: year, month, day, hour.
pub const ALL_POSITIONS: [PillarPosition; 4] = [
    PillarPosition::Year,
    PillarPosition::Month,
    PillarPosition::Day,
    PillarPosition::Hour,
];

impl PillarPosition {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
        }
    }

    /// Neighbours in chart order (year–month, month–day, day–hour).
    pub const fn is_adjacent(self, other: Self) -> bool {
        self.index().abs_diff(other.index()) == 1
    }
}

/// The four pillars of one chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PillarSet {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl PillarSet {
    pub fn get(&self, position: PillarPosition) -> Pillar {
        match position {
            PillarPosition::Year => self.year,
            PillarPosition::Month => self.month,
            PillarPosition::Day => self.day,
            PillarPosition::Hour => self.hour,
        }
    }

    /// Day stem (the day master).
    pub fn day_master(&self) -> Cheongan {
        self.day.stem
    }

    /// Month branch (the month command).
    pub fn month_branch(&self) -> Jiji {
        self.month.branch
    }

    /// All four stems in chart order.
    pub fn stems(&self) -> [(PillarPosition, Cheongan); 4] {
        ALL_POSITIONS.map(|p| (p, self.get(p).stem))
    }

    /// All four branches in chart order.
    pub fn branches(&self) -> [(PillarPosition, Jiji); 4] {
        ALL_POSITIONS.map(|p| (p, self.get(p).branch))
    }

    /// Year, month and hour stems.
    pub fn non_day_stems(&self) -> [(PillarPosition, Cheongan); 3] {
        [
            (PillarPosition::Year, self.year.stem),
            (PillarPosition::Month, self.month.stem),
            (PillarPosition::Hour, self.hour.stem),
        ]
    }
}

impl fmt::Display for PillarSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip() {
        for i in 0..60 {
            assert_eq!(Pillar::from_sexagenary_index(i).sexagenary_index(), i);
        }
    }

    #[test]
    fn named_pillars() {
        assert_eq!(Pillar::from_sexagenary_index(0).name(), "Gap-Ja");
        assert_eq!(Pillar::from_sexagenary_index(54).hanja(), "戊午");
        assert_eq!(Pillar::from_sexagenary_index(59).to_string(), "Gye-Hae");
    }

    #[test]
    fn polarity_mismatch_rejected() {
        assert!(Pillar::new(Cheongan::Gap, Jiji::Chuk).is_err());
        assert!(Pillar::new(Cheongan::Gap, Jiji::In).is_ok());
    }

    #[test]
    fn adjacency() {
        assert!(PillarPosition::Year.is_adjacent(PillarPosition::Month));
        assert!(PillarPosition::Hour.is_adjacent(PillarPosition::Day));
        assert!(!PillarPosition::Year.is_adjacent(PillarPosition::Day));
        assert!(!PillarPosition::Day.is_adjacent(PillarPosition::Day));
    }
}
