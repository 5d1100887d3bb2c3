//! Five elements (ohaeng), polarity, heavenly stems and earthly branches.
//!
//! Generation cycle: Wood → Fire → Earth → Metal → Water → Wood.
//! Control cycle: Wood → Earth → Water → Fire → Metal → Wood.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Ohaeng
// ---------------------------------------------------------------------------

/// The five elements, in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Ohaeng {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in generation order (index 0 = Wood).
pub const ALL_OHAENG: [Ohaeng; 5] = [
    Ohaeng::Wood,
    Ohaeng::Fire,
    Ohaeng::Earth,
    Ohaeng::Metal,
    Ohaeng::Water,
];

impl Ohaeng {
    /// 0-based index in generation order.
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_index(i: u8) -> Self {
        ALL_OHAENG[(i % 5) as usize]
    }

    /// Korean name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Mok",
            Self::Fire => "Hwa",
            Self::Earth => "To",
            Self::Metal => "Geum",
            Self::Water => "Su",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// Element this one generates.
    pub const fn generates(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Element that generates this one.
    pub const fn generated_by(self) -> Self {
        Self::from_index(self.index() + 4)
    }

    /// Element this one controls.
    pub const fn controls(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// Element that controls this one.
    pub const fn controlled_by(self) -> Self {
        Self::from_index(self.index() + 3)
    }
}

impl fmt::Display for Ohaeng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Yin/yang polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Eumyang {
    Yang,
    Yin,
}

// ---------------------------------------------------------------------------
// Cheongan (heavenly stems)
// ---------------------------------------------------------------------------

/// The 10 heavenly stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Cheongan {
    Gap,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

/// All 10 stems in cycle order (index 0 = Gap).
pub const ALL_CHEONGAN: [Cheongan; 10] = [
    Cheongan::Gap,
    Cheongan::Eul,
    Cheongan::Byeong,
    Cheongan::Jeong,
    Cheongan::Mu,
    Cheongan::Gi,
    Cheongan::Gyeong,
    Cheongan::Sin,
    Cheongan::Im,
    Cheongan::Gye,
];

const CHEONGAN_NAMES: [&str; 10] = [
    "Gap", "Eul", "Byeong", "Jeong", "Mu", "Gi", "Gyeong", "Sin", "Im", "Gye",
];

const CHEONGAN_HANJA: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

impl Cheongan {
    /// 0-based index (Gap=0 .. Gye=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Stem at `i mod 10`.
    pub const fn from_index(i: u8) -> Self {
        ALL_CHEONGAN[(i % 10) as usize]
    }

    pub fn name(self) -> &'static str {
        CHEONGAN_NAMES[self.index() as usize]
    }

    pub fn hanja(self) -> &'static str {
        CHEONGAN_HANJA[self.index() as usize]
    }

    /// Gap/Eul Wood, Byeong/Jeong Fire, Mu/Gi Earth, Gyeong/Sin Metal, Im/Gye Water.
    pub const fn element(self) -> Ohaeng {
        Ohaeng::from_index(self.index() / 2)
    }

    pub const fn polarity(self) -> Eumyang {
        if self.index() % 2 == 0 {
            Eumyang::Yang
        } else {
            Eumyang::Yin
        }
    }

    /// Stem `n` steps forward in the cycle.
    pub const fn offset(self, n: u8) -> Self {
        Self::from_index(self.index() + n % 10)
    }
}

impl fmt::Display for Cheongan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Jiji (earthly branches)
// ---------------------------------------------------------------------------

/// The 12 earthly branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Jiji {
    Ja,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Sin,
    Yu,
    Sul,
    Hae,
}

/// All 12 branches in cycle order (index 0 = Ja).
pub const ALL_JIJI: [Jiji; 12] = [
    Jiji::Ja,
    Jiji::Chuk,
    Jiji::In,
    Jiji::Myo,
    Jiji::Jin,
    Jiji::Sa,
    Jiji::O,
    Jiji::Mi,
    Jiji::Sin,
    Jiji::Yu,
    Jiji::Sul,
    Jiji::Hae,
];

const JIJI_NAMES: [&str; 12] = [
    "Ja", "Chuk", "In", "Myo", "Jin", "Sa", "O", "Mi", "Sin", "Yu", "Sul", "Hae",
];

const JIJI_HANJA: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

#[rustfmt::skip]
const JIJI_ELEMENTS: [Ohaeng; 12] = [
    Ohaeng::Water, Ohaeng::Earth, Ohaeng::Wood, Ohaeng::Wood,
    Ohaeng::Earth, Ohaeng::Fire,  Ohaeng::Fire, Ohaeng::Earth,
    Ohaeng::Metal, Ohaeng::Metal, Ohaeng::Earth, Ohaeng::Water,
];

impl Jiji {
    /// 0-based index (Ja=0 .. Hae=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Branch at `i mod 12`.
    pub const fn from_index(i: u8) -> Self {
        ALL_JIJI[(i % 12) as usize]
    }

    pub fn name(self) -> &'static str {
        JIJI_NAMES[self.index() as usize]
    }

    pub fn hanja(self) -> &'static str {
        JIJI_HANJA[self.index() as usize]
    }

    /// Surface element of the branch.
    pub const fn element(self) -> Ohaeng {
        JIJI_ELEMENTS[self.index() as usize]
    }

    /// Cycle polarity (even index yang).
    pub const fn polarity(self) -> Eumyang {
        if self.index() % 2 == 0 {
            Eumyang::Yang
        } else {
            Eumyang::Yin
        }
    }

    /// Saju month this branch governs (In=1 .. Ja=11, Chuk=12).
    pub const fn saju_month_index(self) -> u8 {
        (self.index() + 10) % 12 + 1
    }

    /// Branch of saju month `month_index` (1–12).
    pub const fn from_saju_month_index(month_index: u8) -> Self {
        Self::from_index(month_index + 1)
    }

    /// Branch directly opposite (clash partner).
    pub const fn opposite(self) -> Self {
        Self::from_index(self.index() + 6)
    }
}

impl fmt::Display for Jiji {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_and_control_cycles() {
        assert_eq!(Ohaeng::Wood.generates(), Ohaeng::Fire);
        assert_eq!(Ohaeng::Water.generates(), Ohaeng::Wood);
        assert_eq!(Ohaeng::Wood.generated_by(), Ohaeng::Water);
        assert_eq!(Ohaeng::Wood.controls(), Ohaeng::Earth);
        assert_eq!(Ohaeng::Fire.controls(), Ohaeng::Metal);
        assert_eq!(Ohaeng::Wood.controlled_by(), Ohaeng::Metal);
        for e in ALL_OHAENG {
            assert_eq!(e.generates().generated_by(), e);
            assert_eq!(e.controls().controlled_by(), e);
        }
    }

    #[test]
    fn stem_elements_and_polarity() {
        assert_eq!(Cheongan::Gap.element(), Ohaeng::Wood);
        assert_eq!(Cheongan::Gi.element(), Ohaeng::Earth);
        assert_eq!(Cheongan::Gye.element(), Ohaeng::Water);
        assert_eq!(Cheongan::Byeong.polarity(), Eumyang::Yang);
        assert_eq!(Cheongan::Sin.polarity(), Eumyang::Yin);
    }

    #[test]
    fn stem_offset_wraps() {
        assert_eq!(Cheongan::Im.offset(3), Cheongan::Eul);
        assert_eq!(Cheongan::Gap.offset(10), Cheongan::Gap);
    }

    #[test]
    fn branch_months() {
        assert_eq!(Jiji::In.saju_month_index(), 1);
        assert_eq!(Jiji::Ja.saju_month_index(), 11);
        assert_eq!(Jiji::Chuk.saju_month_index(), 12);
        for b in ALL_JIJI {
            assert_eq!(Jiji::from_saju_month_index(b.saju_month_index()), b);
        }
    }

    #[test]
    fn branch_elements() {
        assert_eq!(Jiji::Ja.element(), Ohaeng::Water);
        assert_eq!(Jiji::Mi.element(), Ohaeng::Earth);
        assert_eq!(Jiji::Yu.element(), Ohaeng::Metal);
        assert_eq!(Jiji::Ja.opposite(), Jiji::O);
    }
}
