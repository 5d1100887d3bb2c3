//! Seasons of the month branch and the seasonal strength of each element.

use serde::{Deserialize, Serialize};

use crate::ganji::{Jiji, Ohaeng};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// Element in command during the season.
    pub const fn element(self) -> Ohaeng {
        match self {
            Self::Spring => Ohaeng::Wood,
            Self::Summer => Ohaeng::Fire,
            Self::Autumn => Ohaeng::Metal,
            Self::Winter => Ohaeng::Water,
        }
    }
}

/// In/Myo/Jin spring, Sa/O/Mi summer, Sin/Yu/Sul autumn, Hae/Ja/Chuk winter.
pub const fn season_of(branch: Jiji) -> Season {
    match branch {
        Jiji::In | Jiji::Myo | Jiji::Jin => Season::Spring,
        Jiji::Sa | Jiji::O | Jiji::Mi => Season::Summer,
        Jiji::Sin | Jiji::Yu | Jiji::Sul => Season::Autumn,
        Jiji::Hae | Jiji::Ja | Jiji::Chuk => Season::Winter,
    }
}

/// Branches forming an element's seasonal group (the four storage
/// branches for Earth).
pub const fn seasonal_branches(element: Ohaeng) -> &'static [Jiji] {
    match element {
        Ohaeng::Wood => &[Jiji::In, Jiji::Myo, Jiji::Jin],
        Ohaeng::Fire => &[Jiji::Sa, Jiji::O, Jiji::Mi],
        Ohaeng::Earth => &[Jiji::Jin, Jiji::Sul, Jiji::Chuk, Jiji::Mi],
        Ohaeng::Metal => &[Jiji::Sin, Jiji::Yu, Jiji::Sul],
        Ohaeng::Water => &[Jiji::Hae, Jiji::Ja, Jiji::Chuk],
    }
}

/// Wang-sang-hyu-su-sa: an element's vigour in the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SeasonalState {
    /// In command.
    Wang,
    /// Generated by the commander.
    Sang,
    /// Generates the commander.
    Hyu,
    /// Controls the commander.
    Su,
    /// Controlled by the commander.
    Sa,
}

impl SeasonalState {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wang => "wang",
            Self::Sang => "sang",
            Self::Hyu => "hyu",
            Self::Su => "su",
            Self::Sa => "sa",
        }
    }

    /// Wang and sang count as the month supporting the element.
    pub const fn is_thriving(self) -> bool {
        matches!(self, Self::Wang | Self::Sang)
    }
}

/// State of `element` in the month of `month_branch`, judged against the
/// branch's own element (Earth for the four storage months).
pub fn seasonal_state(element: Ohaeng, month_branch: Jiji) -> SeasonalState {
    let commander = month_branch.element();
    if element == commander {
        SeasonalState::Wang
    } else if commander.generates() == element {
        SeasonalState::Sang
    } else if element.generates() == commander {
        SeasonalState::Hyu
    } else if element.controls() == commander {
        SeasonalState::Su
    } else {
        SeasonalState::Sa
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seasons() {
        assert_eq!(season_of(Jiji::In), Season::Spring);
        assert_eq!(season_of(Jiji::Ja), Season::Winter);
        assert_eq!(season_of(Jiji::Mi).element(), Ohaeng::Fire);
    }

    #[test]
    fn states_in_spring() {
        assert_eq!(seasonal_state(Ohaeng::Wood, Jiji::Myo), SeasonalState::Wang);
        assert_eq!(seasonal_state(Ohaeng::Fire, Jiji::Myo), SeasonalState::Sang);
        assert_eq!(seasonal_state(Ohaeng::Water, Jiji::Myo), SeasonalState::Hyu);
        assert_eq!(seasonal_state(Ohaeng::Metal, Jiji::Myo), SeasonalState::Su);
        assert_eq!(seasonal_state(Ohaeng::Earth, Jiji::Myo), SeasonalState::Sa);
    }

    #[test]
    fn earth_has_four_branches() {
        assert_eq!(seasonal_branches(Ohaeng::Earth).len(), 4);
        assert!(seasonal_branches(Ohaeng::Water).contains(&Jiji::Chuk));
    }
}
