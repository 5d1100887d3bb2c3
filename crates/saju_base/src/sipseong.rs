//! Ten relationships (sipseong) between the day master and another stem.

use serde::{Deserialize, Serialize};

use crate::ganji::{Cheongan, Ohaeng};

/// The ten relationship types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sipseong {
    Bigyeon,
    Geopjae,
    Siksin,
    Sanggwan,
    Pyeonjae,
    Jeongjae,
    Pyeongwan,
    Jeonggwan,
    Pyeonin,
    Jeongin,
}

pub const ALL_SIPSEONG: [Sipseong; 10] = [
    Sipseong::Bigyeon,
    Sipseong::Geopjae,
    Sipseong::Siksin,
    Sipseong::Sanggwan,
    Sipseong::Pyeonjae,
    Sipseong::Jeongjae,
    Sipseong::Pyeongwan,
    Sipseong::Jeonggwan,
    Sipseong::Pyeonin,
    Sipseong::Jeongin,
];

/// Pairs of sipseong sharing an elemental relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SipseongGroup {
    /// Same element (companions).
    Bigeop,
    /// Element the day master generates (output).
    Siksang,
    /// Element the day master controls (wealth).
    Jaeseong,
    /// Element controlling the day master (authority).
    Gwanseong,
    /// Element generating the day master (resource).
    Inseong,
}

impl SipseongGroup {
    /// Element of this group relative to a day-master element.
    pub const fn element_for(self, day_master: Ohaeng) -> Ohaeng {
        match self {
            Self::Bigeop => day_master,
            Self::Siksang => day_master.generates(),
            Self::Jaeseong => day_master.controls(),
            Self::Gwanseong => day_master.controlled_by(),
            Self::Inseong => day_master.generated_by(),
        }
    }

    /// Group an element falls in relative to a day-master element.
    pub fn of_element(day_master: Ohaeng, element: Ohaeng) -> Self {
        let diff = (element.index() + 5 - day_master.index()) % 5;
        match diff {
            0 => Self::Bigeop,
            1 => Self::Siksang,
            2 => Self::Jaeseong,
            3 => Self::Gwanseong,
            _ => Self::Inseong,
        }
    }

    /// Whether this group strengthens the day master.
    pub const fn supports_day_master(self) -> bool {
        matches!(self, Self::Bigeop | Self::Inseong)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Bigeop => "bigeop",
            Self::Siksang => "siksang",
            Self::Jaeseong => "jaeseong",
            Self::Gwanseong => "gwanseong",
            Self::Inseong => "inseong",
        }
    }
}

impl Sipseong {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bigyeon => "Bigyeon",
            Self::Geopjae => "Geopjae",
            Self::Siksin => "Siksin",
            Self::Sanggwan => "Sanggwan",
            Self::Pyeonjae => "Pyeonjae",
            Self::Jeongjae => "Jeongjae",
            Self::Pyeongwan => "Pyeongwan",
            Self::Jeonggwan => "Jeonggwan",
            Self::Pyeonin => "Pyeonin",
            Self::Jeongin => "Jeongin",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Bigyeon => "比肩",
            Self::Geopjae => "劫財",
            Self::Siksin => "食神",
            Self::Sanggwan => "傷官",
            Self::Pyeonjae => "偏財",
            Self::Jeongjae => "正財",
            Self::Pyeongwan => "偏官",
            Self::Jeonggwan => "正官",
            Self::Pyeonin => "偏印",
            Self::Jeongin => "正印",
        }
    }

    pub const fn group(self) -> SipseongGroup {
        match self {
            Self::Bigyeon | Self::Geopjae => SipseongGroup::Bigeop,
            Self::Siksin | Self::Sanggwan => SipseongGroup::Siksang,
            Self::Pyeonjae | Self::Jeongjae => SipseongGroup::Jaeseong,
            Self::Pyeongwan | Self::Jeonggwan => SipseongGroup::Gwanseong,
            Self::Pyeonin | Self::Jeongin => SipseongGroup::Inseong,
        }
    }
}

/// Relationship of `other` to `day_master`. Same polarity gives the "pyeon"
/// (indirect) member of each pair.
pub fn sipseong_of(day_master: Cheongan, other: Cheongan) -> Sipseong {
    let same_polarity = day_master.polarity() == other.polarity();
    match (
        SipseongGroup::of_element(day_master.element(), other.element()),
        same_polarity,
    ) {
        (SipseongGroup::Bigeop, true) => Sipseong::Bigyeon,
        (SipseongGroup::Bigeop, false) => Sipseong::Geopjae,
        (SipseongGroup::Siksang, true) => Sipseong::Siksin,
        (SipseongGroup::Siksang, false) => Sipseong::Sanggwan,
        (SipseongGroup::Jaeseong, true) => Sipseong::Pyeonjae,
        (SipseongGroup::Jaeseong, false) => Sipseong::Jeongjae,
        (SipseongGroup::Gwanseong, true) => Sipseong::Pyeongwan,
        (SipseongGroup::Gwanseong, false) => Sipseong::Jeonggwan,
        (SipseongGroup::Inseong, true) => Sipseong::Pyeonin,
        (SipseongGroup::Inseong, false) => Sipseong::Jeongin,
    }
}

/// Favorability of a sipseong for a given strength state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Favorability {
    Favorable,
    Unfavorable,
}

/// Strong day masters want drain and control; weak ones want support.
pub const fn favorability(sipseong: Sipseong, strong_side: bool) -> Favorability {
    let supports = sipseong.group().supports_day_master();
    if supports != strong_side {
        Favorability::Favorable
    } else {
        Favorability::Unfavorable
    }
}
