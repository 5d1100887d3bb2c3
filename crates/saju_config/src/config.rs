//! The immutable option bag read by every pipeline stage.

use serde::{Deserialize, Serialize};

use saju_base::{DayCutMode, HiddenStemVariant};
use saju_time::AdjustmentOptions;

use crate::error::ConfigError;

/// How the naegyeok stage picks the commanding hidden stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GyeokgukPriority {
    /// Primary, then secondary, then tertiary, whichever is revealed.
    #[default]
    RevealedFirst,
    /// Always the primary hidden stem.
    PrimaryOnly,
}

/// Which recommendation wins when eokbu and johu differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YongshinPriority {
    JohuFirst,
    #[default]
    EokbuFirst,
    /// Higher confidence wins; ties go to eokbu.
    HigherConfidence,
}

/// How readily stem combinations transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationStrictness {
    Strict,
    #[default]
    Moderate,
    Lenient,
}

/// Every school-dependent option of one chart computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationConfig {
    // time
    pub day_cut_mode: DayCutMode,
    pub apply_dst_history: bool,
    pub apply_longitude_correction: bool,
    pub include_equation_of_time: bool,
    pub lmt_baseline_override: Option<f64>,

    // strength
    pub hidden_stem_variant: HiddenStemVariant,
    pub strength_threshold: f64,
    pub month_command_weight: f64,
    pub day_branch_weight: f64,
    pub branch_weight: f64,
    pub stem_weight: f64,

    // gyeokguk
    pub gyeokguk_priority: GyeokgukPriority,
    pub enable_hwagyeok: bool,
    pub hwagyeok_requires_day_master: bool,
    pub enable_jonggyeok: bool,
    pub jong_strong_threshold: f64,
    pub jong_weak_threshold: f64,
    pub enable_ilhaeng: bool,
    pub ilhaeng_min_branches: u8,

    // yongshin
    pub yongshin_priority: YongshinPriority,
    pub enable_tonggwan: bool,

    // relations and tracing
    pub relation_strictness: RelationStrictness,
    pub record_alternatives: bool,
}

impl Default for CalculationConfig {
    fn default() -> Self {
        Self {
            day_cut_mode: DayCutMode::Midnight,
            apply_dst_history: true,
            apply_longitude_correction: true,
            include_equation_of_time: false,
            lmt_baseline_override: None,

            hidden_stem_variant: HiddenStemVariant::Standard,
            strength_threshold: 50.0,
            month_command_weight: 3.0,
            day_branch_weight: 1.5,
            branch_weight: 1.0,
            stem_weight: 1.0,

            gyeokguk_priority: GyeokgukPriority::RevealedFirst,
            enable_hwagyeok: true,
            hwagyeok_requires_day_master: true,
            enable_jonggyeok: true,
            jong_strong_threshold: 85.0,
            jong_weak_threshold: 15.0,
            enable_ilhaeng: true,
            ilhaeng_min_branches: 3,

            yongshin_priority: YongshinPriority::EokbuFirst,
            enable_tonggwan: true,

            relation_strictness: RelationStrictness::Moderate,
            record_alternatives: true,
        }
    }
}

fn check_weight(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidWeight { name, value })
    }
}

fn check_threshold(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ThresholdOutOfRange { name, value })
    }
}

impl CalculationConfig {
    /// Reject option combinations no stage can evaluate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_weight("month_command_weight", self.month_command_weight)?;
        check_weight("day_branch_weight", self.day_branch_weight)?;
        check_weight("branch_weight", self.branch_weight)?;
        check_weight("stem_weight", self.stem_weight)?;
        if self.month_command_weight + self.day_branch_weight + self.branch_weight + self.stem_weight
            <= 0.0
        {
            return Err(ConfigError::AllWeightsZero);
        }

        check_threshold("strength_threshold", self.strength_threshold)?;
        check_threshold("jong_strong_threshold", self.jong_strong_threshold)?;
        check_threshold("jong_weak_threshold", self.jong_weak_threshold)?;
        if self.jong_weak_threshold >= self.jong_strong_threshold {
            return Err(ConfigError::InvertedJongThresholds {
                weak: self.jong_weak_threshold,
                strong: self.jong_strong_threshold,
            });
        }

        if let Some(m) = self.lmt_baseline_override {
            if !m.is_finite() || m.abs() > 180.0 {
                return Err(ConfigError::InvalidMeridian(m));
            }
        }

        if !(2..=4).contains(&self.ilhaeng_min_branches) {
            return Err(ConfigError::IlhaengMinOutOfRange(self.ilhaeng_min_branches));
        }
        Ok(())
    }

    /// Options for the true-solar-time stage.
    pub fn adjustment_options(&self) -> AdjustmentOptions {
        AdjustmentOptions {
            apply_dst_history: self.apply_dst_history,
            apply_longitude_correction: self.apply_longitude_correction,
            include_equation_of_time: self.include_equation_of_time,
            lmt_baseline_override: self.lmt_baseline_override,
        }
    }
}
