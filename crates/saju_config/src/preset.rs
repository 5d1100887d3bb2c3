//! School presets as overlay diffs on the default configuration.

use serde::{Deserialize, Serialize};
use tracing::debug;

use saju_base::{DayCutMode, HiddenStemVariant};

use crate::config::{CalculationConfig, GyeokgukPriority, RelationStrictness, YongshinPriority};
use crate::error::ConfigError;

/// Partial configuration: only the named fields change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigOverlay {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_cut_mode: Option<DayCutMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_dst_history: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_longitude_correction: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_equation_of_time: Option<bool>,
    /// `Some(None)` clears an override; `Some(Some(m))` sets one.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "double_option"
    )]
    pub lmt_baseline_override: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_stem_variant: Option<HiddenStemVariant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month_command_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_branch_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stem_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gyeokguk_priority: Option<GyeokgukPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_hwagyeok: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hwagyeok_requires_day_master: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_jonggyeok: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jong_strong_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jong_weak_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_ilhaeng: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ilhaeng_min_branches: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yongshin_priority: Option<YongshinPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_tonggwan: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relation_strictness: Option<RelationStrictness>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_alternatives: Option<bool>,
}

/// Distinguishes an absent field from an explicit `null`.
mod double_option {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<Option<f64>>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(inner) => inner.serialize(s),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Option<f64>>, D::Error> {
        Option::<f64>::deserialize(d).map(Some)
    }
}

macro_rules! overlay_fields {
    ($self:ident, $base:ident, $($field:ident),+ $(,)?) => {
        $(
            if let Some(v) = $self.$field {
                $base.$field = v;
            }
        )+
    };
}

impl ConfigOverlay {
    /// `base` with every named field replaced.
    pub fn apply(&self, base: &CalculationConfig) -> CalculationConfig {
        let mut out = base.clone();
        overlay_fields!(
            self,
            out,
            day_cut_mode,
            apply_dst_history,
            apply_longitude_correction,
            include_equation_of_time,
            lmt_baseline_override,
            hidden_stem_variant,
            strength_threshold,
            month_command_weight,
            day_branch_weight,
            branch_weight,
            stem_weight,
            gyeokguk_priority,
            enable_hwagyeok,
            hwagyeok_requires_day_master,
            enable_jonggyeok,
            jong_strong_threshold,
            jong_weak_threshold,
            enable_ilhaeng,
            ilhaeng_min_branches,
            yongshin_priority,
            enable_tonggwan,
            relation_strictness,
            record_alternatives,
        );
        out
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// ---------------------------------------------------------------------------
// Presets
// ---------------------------------------------------------------------------

/// Named school presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchoolPreset {
    /// Contemporary Korean practice; identical to the default config.
    #[default]
    KoreanMainstream,
    /// Ziping-style: 23:00 day cut, Chinese hidden-stem weights, climate first.
    TraditionalChinese,
    /// Equation of time on, split late-Ja hour, confidence-driven resolution.
    ModernIntegrated,
}

pub const ALL_PRESETS: [SchoolPreset; 3] = [
    SchoolPreset::KoreanMainstream,
    SchoolPreset::TraditionalChinese,
    SchoolPreset::ModernIntegrated,
];

impl SchoolPreset {
    pub const fn id(self) -> &'static str {
        match self {
            Self::KoreanMainstream => "korean-mainstream",
            Self::TraditionalChinese => "traditional-chinese",
            Self::ModernIntegrated => "modern-integrated",
        }
    }

    pub fn from_id(id: &str) -> Result<Self, ConfigError> {
        ALL_PRESETS
            .into_iter()
            .find(|p| p.id() == id)
            .ok_or_else(|| ConfigError::UnknownPreset(id.to_string()))
    }

    /// The preset's diff against the default.
    pub fn overlay(self) -> ConfigOverlay {
        match self {
            Self::KoreanMainstream => ConfigOverlay::default(),
            Self::TraditionalChinese => ConfigOverlay {
                day_cut_mode: Some(DayCutMode::Hour23),
                hidden_stem_variant: Some(HiddenStemVariant::ChineseCommon),
                yongshin_priority: Some(YongshinPriority::JohuFirst),
                relation_strictness: Some(RelationStrictness::Strict),
                enable_ilhaeng: Some(false),
                ..ConfigOverlay::default()
            },
            Self::ModernIntegrated => ConfigOverlay {
                day_cut_mode: Some(DayCutMode::Split),
                include_equation_of_time: Some(true),
                yongshin_priority: Some(YongshinPriority::HigherConfidence),
                relation_strictness: Some(RelationStrictness::Lenient),
                hwagyeok_requires_day_master: Some(false),
                jong_strong_threshold: Some(80.0),
                jong_weak_threshold: Some(20.0),
                ..ConfigOverlay::default()
            },
        }
    }

    /// Default config with this preset's overlay applied.
    pub fn config(self) -> CalculationConfig {
        self.overlay().apply(&CalculationConfig::default())
    }
}

// ---------------------------------------------------------------------------
// JSON documents
// ---------------------------------------------------------------------------

/// `{"preset": "...", "overrides": {...}}`; both keys optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigDocument {
    pub preset: Option<String>,
    pub overrides: ConfigOverlay,
}

impl ConfigDocument {
    /// Resolve to a validated configuration.
    pub fn resolve(&self) -> Result<CalculationConfig, ConfigError> {
        let preset = match &self.preset {
            Some(id) => SchoolPreset::from_id(id)?,
            None => SchoolPreset::default(),
        };
        let config = self.overrides.apply(&preset.config());
        config.validate()?;
        debug!(
            preset = preset.id(),
            overridden = !self.overrides.is_empty(),
            "configuration resolved"
        );
        Ok(config)
    }
}

impl CalculationConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let doc: ConfigDocument = serde_json::from_str(text)?;
        doc.resolve()
    }

    /// Validated configuration of a named preset.
    pub fn from_preset_id(id: &str) -> Result<Self, ConfigError> {
        let config = SchoolPreset::from_id(id)?.config();
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_ids_round_trip() {
        for p in ALL_PRESETS {
            assert_eq!(SchoolPreset::from_id(p.id()).unwrap(), p);
        }
        assert!(matches!(
            SchoolPreset::from_id("western"),
            Err(ConfigError::UnknownPreset(_))
        ));
    }

    #[test]
    fn mainstream_equals_default() {
        assert_eq!(SchoolPreset::KoreanMainstream.config(), CalculationConfig::default());
        assert!(SchoolPreset::KoreanMainstream.overlay().is_empty());
    }

    #[test]
    fn every_preset_validates() {
        for p in ALL_PRESETS {
            assert!(p.config().validate().is_ok(), "{}", p.id());
        }
    }

    #[test]
    fn overlay_only_touches_named_fields() {
        let overlay = ConfigOverlay {
            strength_threshold: Some(55.0),
            ..ConfigOverlay::default()
        };
        let base = CalculationConfig::default();
        let out = overlay.apply(&base);
        assert_eq!(out.strength_threshold, 55.0);
        assert_eq!(
            CalculationConfig {
                strength_threshold: base.strength_threshold,
                ..out
            },
            base
        );
    }

    #[test]
    fn override_can_clear_meridian() {
        let base = CalculationConfig {
            lmt_baseline_override: Some(120.0),
            ..CalculationConfig::default()
        };
        let cleared = ConfigOverlay {
            lmt_baseline_override: Some(None),
            ..ConfigOverlay::default()
        };
        assert_eq!(cleared.apply(&base).lmt_baseline_override, None);
        assert_eq!(ConfigOverlay::default().apply(&base).lmt_baseline_override, Some(120.0));
    }
}
