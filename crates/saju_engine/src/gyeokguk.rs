//! Chart pattern (gyeokguk) determination.
//!
//! Stages run in classical priority: transformation (hwagyeok), following
//! (jonggyeok), single-element (ilhaeng), then the ordinary month-command
//! patterns (naegyeok). The first stage that fixes a pattern wins.

use serde::Serialize;

use saju_base::{
    Cheongan, Eumyang, HiddenStemRole, Ohaeng, PillarPosition, Sipseong, SipseongGroup,
    primary_hidden_stem, sipseong_of, touchul_candidates,
};
use saju_config::{CalculationConfig, GyeokgukPriority};

use crate::formation::{self, FormationAssessment};
use crate::profile::ElementProfile;
use crate::relation::{RelationKind, RelationResult, RelationState};
use crate::strength::StrengthResult;
use crate::trace::{CalculationTracer, TraceCategory, TraceEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GyeokgukCategory {
    Naegyeok,
    Jonggyeok,
    Hwagyeok,
    Ilhaeng,
}

impl GyeokgukCategory {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Naegyeok => "naegyeok",
            Self::Jonggyeok => "jonggyeok",
            Self::Hwagyeok => "hwagyeok",
            Self::Ilhaeng => "ilhaeng",
        }
    }

    /// Categories that override ordinary balancing.
    pub const fn is_special(self) -> bool {
        !matches!(self, Self::Naegyeok)
    }
}

/// The 27 pattern types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GyeokgukType {
    // naegyeok
    Jeonggwan,
    Pyeongwan,
    Jeongjae,
    Pyeonjae,
    Siksin,
    Sanggwan,
    Jeongin,
    Pyeonin,
    Geonrok,
    Yangin,
    Wolgeop,
    // jonggyeok
    JongWang,
    JongGang,
    JongA,
    JongJae,
    JongSal,
    JongSe,
    // hwagyeok
    HwaTo,
    HwaGeum,
    HwaSu,
    HwaMok,
    HwaHwa,
    // ilhaeng
    Gokjik,
    Yeomsang,
    Gasaek,
    Jonghyeok,
    Yunha,
}

pub const ALL_GYEOKGUK: [GyeokgukType; 27] = {
    use GyeokgukType::*;
    [
        Jeonggwan, Pyeongwan, Jeongjae, Pyeonjae, Siksin, Sanggwan, Jeongin, Pyeonin, Geonrok,
        Yangin, Wolgeop, JongWang, JongGang, JongA, JongJae, JongSal, JongSe, HwaTo, HwaGeum,
        HwaSu, HwaMok, HwaHwa, Gokjik, Yeomsang, Gasaek, Jonghyeok, Yunha,
    ]
};

impl GyeokgukType {
    pub const fn category(self) -> GyeokgukCategory {
        use GyeokgukType::*;
        match self {
            Jeonggwan | Pyeongwan | Jeongjae | Pyeonjae | Siksin | Sanggwan | Jeongin
            | Pyeonin | Geonrok | Yangin | Wolgeop => GyeokgukCategory::Naegyeok,
            JongWang | JongGang | JongA | JongJae | JongSal | JongSe => {
                GyeokgukCategory::Jonggyeok
            }
            HwaTo | HwaGeum | HwaSu | HwaMok | HwaHwa => GyeokgukCategory::Hwagyeok,
            Gokjik | Yeomsang | Gasaek | Jonghyeok | Yunha => GyeokgukCategory::Ilhaeng,
        }
    }

    pub const fn name(self) -> &'static str {
        use GyeokgukType::*;
        match self {
            Jeonggwan => "Jeonggwan-gyeok",
            Pyeongwan => "Pyeongwan-gyeok",
            Jeongjae => "Jeongjae-gyeok",
            Pyeonjae => "Pyeonjae-gyeok",
            Siksin => "Siksin-gyeok",
            Sanggwan => "Sanggwan-gyeok",
            Jeongin => "Jeongin-gyeok",
            Pyeonin => "Pyeonin-gyeok",
            Geonrok => "Geonrok-gyeok",
            Yangin => "Yangin-gyeok",
            Wolgeop => "Wolgeop-gyeok",
            JongWang => "Jongwang-gyeok",
            JongGang => "Jonggang-gyeok",
            JongA => "Jonga-gyeok",
            JongJae => "Jongjae-gyeok",
            JongSal => "Jongsal-gyeok",
            JongSe => "Jongse-gyeok",
            HwaTo => "Hwato-gyeok",
            HwaGeum => "Hwageum-gyeok",
            HwaSu => "Hwasu-gyeok",
            HwaMok => "Hwamok-gyeok",
            HwaHwa => "Hwahwa-gyeok",
            Gokjik => "Gokjik-gyeok",
            Yeomsang => "Yeomsang-gyeok",
            Gasaek => "Gasaek-gyeok",
            Jonghyeok => "Jonghyeok-gyeok",
            Yunha => "Yunha-gyeok",
        }
    }

    pub const fn hanja(self) -> &'static str {
        use GyeokgukType::*;
        match self {
            Jeonggwan => "正官格",
            Pyeongwan => "七殺格",
            Jeongjae => "正財格",
            Pyeonjae => "偏財格",
            Siksin => "食神格",
            Sanggwan => "傷官格",
            Jeongin => "正印格",
            Pyeonin => "偏印格",
            Geonrok => "建祿格",
            Yangin => "羊刃格",
            Wolgeop => "月劫格",
            JongWang => "從旺格",
            JongGang => "從強格",
            JongA => "從兒格",
            JongJae => "從財格",
            JongSal => "從殺格",
            JongSe => "從勢格",
            HwaTo => "化土格",
            HwaGeum => "化金格",
            HwaSu => "化水格",
            HwaMok => "化木格",
            HwaHwa => "化火格",
            Gokjik => "曲直格",
            Yeomsang => "炎上格",
            Gasaek => "稼穡格",
            Jonghyeok => "從革格",
            Yunha => "潤下格",
        }
    }

    /// Ordinary pattern of a commanding stem's relationship. Bigyeon is
    /// Geonrok; Geopjae is Yangin for yang day masters and Wolgeop for yin.
    pub const fn from_sipseong(sipseong: Sipseong, day_master: Eumyang) -> Self {
        match sipseong {
            Sipseong::Bigyeon => Self::Geonrok,
            Sipseong::Geopjae => match day_master {
                Eumyang::Yang => Self::Yangin,
                Eumyang::Yin => Self::Wolgeop,
            },
            Sipseong::Siksin => Self::Siksin,
            Sipseong::Sanggwan => Self::Sanggwan,
            Sipseong::Pyeonjae => Self::Pyeonjae,
            Sipseong::Jeongjae => Self::Jeongjae,
            Sipseong::Pyeongwan => Self::Pyeongwan,
            Sipseong::Jeonggwan => Self::Jeonggwan,
            Sipseong::Pyeonin => Self::Pyeonin,
            Sipseong::Jeongin => Self::Jeongin,
        }
    }

    pub const fn hwagyeok_of(element: Ohaeng) -> Self {
        match element {
            Ohaeng::Earth => Self::HwaTo,
            Ohaeng::Metal => Self::HwaGeum,
            Ohaeng::Water => Self::HwaSu,
            Ohaeng::Wood => Self::HwaMok,
            Ohaeng::Fire => Self::HwaHwa,
        }
    }

    pub const fn ilhaeng_of(element: Ohaeng) -> Self {
        match element {
            Ohaeng::Wood => Self::Gokjik,
            Ohaeng::Fire => Self::Yeomsang,
            Ohaeng::Earth => Self::Gasaek,
            Ohaeng::Metal => Self::Jonghyeok,
            Ohaeng::Water => Self::Yunha,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GyeokgukResult {
    pub gyeokguk_type: GyeokgukType,
    pub category: GyeokgukCategory,
    /// In [0, 1].
    pub confidence: f64,
    pub formation: FormationAssessment,
    /// Month hidden stem the ordinary pattern was taken from.
    pub commanding_stem: Option<Cheongan>,
    /// Element a transformation produced, for hwagyeok.
    pub transformed_element: Option<Ohaeng>,
    pub reasoning: Vec<String>,
}

// ---------------------------------------------------------------------------
// Stages
// ---------------------------------------------------------------------------

const JONG_CONFIDENCE: f64 = 0.85;
const JONGSE_CONFIDENCE: f64 = 0.70;
const DOMINANT_SHARE: f64 = 0.5;

const TOUCHUL_PRIMARY: f64 = 1.0;
const TOUCHUL_SECONDARY: f64 = 0.90;
const TOUCHUL_STRUCTURAL: f64 = 0.75;

struct Fixed {
    gyeokguk_type: GyeokgukType,
    confidence: f64,
    commanding_stem: Option<Cheongan>,
    transformed_element: Option<Ohaeng>,
    reasoning: String,
}

fn transformed_pair(relations: &[RelationResult], require_day: bool) -> Option<&RelationResult> {
    relations.iter().find(|r| {
        r.kind == RelationKind::StemCombination
            && r.state == RelationState::Transformed
            && (!require_day || r.involves(PillarPosition::Day))
    })
}

fn hwagyeok_stage(
    relations: &[RelationResult],
    config: &CalculationConfig,
    tracer: &mut CalculationTracer,
) -> Option<Fixed> {
    if !config.enable_hwagyeok {
        tracer.record(
            TraceEntry::new("gyeokguk.hwagyeok", TraceCategory::Gyeokguk, "skipped")
                .reasoning("transformation patterns disabled")
                .config_key("enable_hwagyeok"),
        );
        return None;
    }
    let require_day = config.hwagyeok_requires_day_master;
    let found = transformed_pair(relations, require_day);
    let other = transformed_pair(relations, !require_day);
    let describe = |r: Option<&RelationResult>| match r.and_then(|r| r.element) {
        Some(e) => GyeokgukType::hwagyeok_of(e).name().to_string(),
        None => "no transformation".to_string(),
    };
    let alt_school = if require_day { "any_pair" } else { "day_master_pair" };

    let mut entry = TraceEntry::new("gyeokguk.hwagyeok", TraceCategory::Gyeokguk, describe(found))
        .rule("化氣格: 合而化")
        .config_key("hwagyeok_requires_day_master")
        .alternative(alt_school, describe(other));

    let fixed = match found.and_then(|r| r.element.map(|e| (r, e))) {
        Some((r, element)) => {
            let reasoning = format!(
                "{} and {} stems combine and transform into {}",
                r.positions[0].name(),
                r.positions[1].name(),
                element
            );
            entry = entry.reasoning(reasoning.clone()).confidence(r.confidence);
            Some(Fixed {
                gyeokguk_type: GyeokgukType::hwagyeok_of(element),
                confidence: r.confidence,
                commanding_stem: None,
                transformed_element: Some(element),
                reasoning,
            })
        }
        None => {
            entry = entry.reasoning("no qualifying transformed stem combination");
            None
        }
    };
    tracer.record(entry);
    fixed
}

fn jong_stage(
    strength: &StrengthResult,
    profile: &ElementProfile,
    config: &CalculationConfig,
    tracer: &mut CalculationTracer,
) -> Option<Fixed> {
    if !config.enable_jonggyeok {
        tracer.record(
            TraceEntry::new("gyeokguk.jonggyeok", TraceCategory::Gyeokguk, "skipped")
                .reasoning("following patterns disabled")
                .config_key("enable_jonggyeok"),
        );
        return None;
    }
    let score = strength.score;
    let dm = profile.day_master_element();

    let outcome: Result<(GyeokgukType, String), String> = if score >= config.jong_strong_threshold {
        if profile.is_present(SipseongGroup::Gwanseong) {
            Err(format!("score {score:.1} is extreme but authority is present"))
        } else if profile.presence(dm) >= profile.group_presence(SipseongGroup::Inseong) {
            Ok((GyeokgukType::JongWang, format!("score {score:.1}, companions dominate, no authority")))
        } else {
            Ok((GyeokgukType::JongGang, format!("score {score:.1}, resource dominates, no authority")))
        }
    } else if score <= config.jong_weak_threshold {
        let self_support = profile.rooted
            || profile.revealed_group(SipseongGroup::Bigeop)
            || profile.revealed_group(SipseongGroup::Inseong);
        if self_support {
            Err(format!("score {score:.1} is extreme but the day master has support"))
        } else {
            let output = profile.group_presence(SipseongGroup::Siksang);
            let wealth = profile.group_presence(SipseongGroup::Jaeseong);
            let authority = profile.group_presence(SipseongGroup::Gwanseong);
            let total = output + wealth + authority;
            let dominant = |x: f64| total > 0.0 && x / total >= DOMINANT_SHARE;
            let t = if dominant(output) && !profile.is_present(SipseongGroup::Inseong) {
                GyeokgukType::JongA
            } else if dominant(wealth) {
                GyeokgukType::JongJae
            } else if dominant(authority) {
                GyeokgukType::JongSal
            } else {
                GyeokgukType::JongSe
            };
            Ok((
                t,
                format!(
                    "score {score:.1}, rootless; output {output:.2} wealth {wealth:.2} authority {authority:.2}"
                ),
            ))
        }
    } else {
        Err(format!(
            "score {score:.1} within ({:.0}, {:.0})",
            config.jong_weak_threshold, config.jong_strong_threshold
        ))
    };

    match outcome {
        Ok((t, reasoning)) => {
            let confidence = if t == GyeokgukType::JongSe {
                JONGSE_CONFIDENCE
            } else {
                JONG_CONFIDENCE
            };
            tracer.record(
                TraceEntry::new("gyeokguk.jonggyeok", TraceCategory::Gyeokguk, t.name())
                    .reasoning(reasoning.clone())
                    .rule("從格: 棄命從勢")
                    .config_key("jong_strong_threshold")
                    .confidence(confidence),
            );
            Some(Fixed {
                gyeokguk_type: t,
                confidence,
                commanding_stem: None,
                transformed_element: None,
                reasoning,
            })
        }
        Err(reasoning) => {
            tracer.record(
                TraceEntry::new("gyeokguk.jonggyeok", TraceCategory::Gyeokguk, "not following")
                    .reasoning(reasoning)
                    .config_key("jong_strong_threshold"),
            );
            None
        }
    }
}

fn ilhaeng_stage(
    profile: &ElementProfile,
    config: &CalculationConfig,
    tracer: &mut CalculationTracer,
) -> Option<Fixed> {
    if !config.enable_ilhaeng {
        tracer.record(
            TraceEntry::new("gyeokguk.ilhaeng", TraceCategory::Gyeokguk, "skipped")
                .reasoning("single-element patterns disabled")
                .config_key("enable_ilhaeng"),
        );
        return None;
    }
    let dm = profile.day_master_element();
    let count = profile.seasonal_group_count;
    let controlled = profile.revealed_element(dm.controlled_by());
    let entry = TraceEntry::new("gyeokguk.ilhaeng", TraceCategory::Gyeokguk, "")
        .rule("一行得氣格")
        .config_key("ilhaeng_min_branches");

    if count >= config.ilhaeng_min_branches && !controlled {
        let t = GyeokgukType::ilhaeng_of(dm);
        let confidence = ilhaeng_confidence(count - config.ilhaeng_min_branches);
        let reasoning = format!("{count} branches in the {dm} seasonal group, no stem controls {dm}");
        tracer.record(
            TraceEntry {
                decision: t.name().to_string(),
                ..entry
            }
            .reasoning(reasoning.clone())
            .confidence(confidence),
        );
        Some(Fixed {
            gyeokguk_type: t,
            confidence,
            commanding_stem: None,
            transformed_element: None,
            reasoning,
        })
    } else {
        let reasoning = if controlled {
            format!("a revealed stem controls {dm}")
        } else {
            format!(
                "{count} of {} required branches in the {dm} seasonal group",
                config.ilhaeng_min_branches
            )
        };
        tracer.record(
            TraceEntry {
                decision: "not single-element".to_string(),
                ..entry
            }
            .reasoning(reasoning),
        );
        None
    }
}

/// Commanding stem and confidence under a touchul priority mode.
fn touchul(profile: &ElementProfile, priority: GyeokgukPriority) -> (Cheongan, f64, &'static str) {
    let revealed = |s: Cheongan| profile.revealed.iter().any(|r| r.stem == s);
    let primary = primary_hidden_stem(profile.month_branch);
    match priority {
        GyeokgukPriority::PrimaryOnly => {
            if revealed(primary) {
                (primary, TOUCHUL_PRIMARY, "primary revealed")
            } else {
                (primary, TOUCHUL_STRUCTURAL, "primary used structurally")
            }
        }
        GyeokgukPriority::RevealedFirst => {
            let hit = touchul_candidates(profile.month_branch)
                .into_iter()
                .find(|h| revealed(h.stem));
            match hit {
                Some(h) if h.role == HiddenStemRole::Jeonggi => {
                    (h.stem, TOUCHUL_PRIMARY, "primary revealed")
                }
                Some(h) => (h.stem, TOUCHUL_SECONDARY, "secondary hidden stem revealed"),
                None => (primary, TOUCHUL_STRUCTURAL, "nothing revealed, primary used structurally"),
            }
        }
    }
}

fn naegyeok_stage(
    profile: &ElementProfile,
    config: &CalculationConfig,
    tracer: &mut CalculationTracer,
) -> Fixed {
    let (stem, confidence, how) = touchul(profile, config.gyeokguk_priority);
    let t = GyeokgukType::from_sipseong(
        sipseong_of(profile.day_master, stem),
        profile.day_master.polarity(),
    );
    let reasoning = format!(
        "month command {}: {stem} ({how}) is {} to {}",
        profile.month_branch,
        sipseong_of(profile.day_master, stem).name(),
        profile.day_master
    );

    let (alt_priority, alt_school) = match config.gyeokguk_priority {
        GyeokgukPriority::RevealedFirst => (GyeokgukPriority::PrimaryOnly, "primary_only"),
        GyeokgukPriority::PrimaryOnly => (GyeokgukPriority::RevealedFirst, "revealed_first"),
    };
    let (alt_stem, _, _) = touchul(profile, alt_priority);
    let alt = GyeokgukType::from_sipseong(
        sipseong_of(profile.day_master, alt_stem),
        profile.day_master.polarity(),
    );

    tracer.record(
        TraceEntry::new("gyeokguk.naegyeok", TraceCategory::Gyeokguk, t.name())
            .reasoning(reasoning.clone())
            .rule("月令透出 取格")
            .config_key("gyeokguk_priority")
            .alternative(alt_school, alt.name())
            .confidence(confidence),
    );
    Fixed {
        gyeokguk_type: t,
        confidence,
        commanding_stem: Some(stem),
        transformed_element: None,
        reasoning,
    }
}

/// 0.80 at the minimum branch count, 0.05 per extra branch, at most 0.95.
fn ilhaeng_confidence(extra: u8) -> f64 {
    f64::from((80 + 5 * u16::from(extra)).min(95)) / 100.0
}

/// Fix the chart's pattern and assess its formation.
pub fn determine(
    strength: &StrengthResult,
    profile: &ElementProfile,
    relations: &[RelationResult],
    config: &CalculationConfig,
    tracer: &mut CalculationTracer,
) -> GyeokgukResult {
    let mut reasoning = Vec::new();
    let fixed = match hwagyeok_stage(relations, config, tracer) {
        Some(f) => f,
        None => match jong_stage(strength, profile, config, tracer) {
            Some(f) => f,
            None => match ilhaeng_stage(profile, config, tracer) {
                Some(f) => f,
                None => naegyeok_stage(profile, config, tracer),
            },
        },
    };
    reasoning.push(fixed.reasoning);

    let formation = formation::assess(fixed.gyeokguk_type, profile);
    reasoning.push(format!("formation {}", formation.quality.name()));
    tracer.record(
        TraceEntry::new(
            "formation.quality",
            TraceCategory::Formation,
            formation.quality.name(),
        )
        .reasoning(formation.summary())
        .rule("成格 破格 救應"),
    );

    GyeokgukResult {
        gyeokguk_type: fixed.gyeokguk_type,
        category: fixed.gyeokguk_type.category(),
        confidence: fixed.confidence,
        formation,
        commanding_stem: fixed.commanding_stem,
        transformed_element: fixed.transformed_element,
        reasoning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_base::ALL_SIPSEONG;
    use std::collections::HashSet;

    #[test]
    fn twenty_seven_distinct_types() {
        let names: HashSet<_> = ALL_GYEOKGUK.iter().map(|t| t.name()).collect();
        assert_eq!(names.len(), 27);
        let count = |c| ALL_GYEOKGUK.iter().filter(|t| t.category() == c).count();
        assert_eq!(count(GyeokgukCategory::Naegyeok), 11);
        assert_eq!(count(GyeokgukCategory::Jonggyeok), 6);
        assert_eq!(count(GyeokgukCategory::Hwagyeok), 5);
        assert_eq!(count(GyeokgukCategory::Ilhaeng), 5);
    }

    #[test]
    fn sipseong_mapping() {
        assert_eq!(
            GyeokgukType::from_sipseong(Sipseong::Bigyeon, Eumyang::Yin),
            GyeokgukType::Geonrok
        );
        assert_eq!(
            GyeokgukType::from_sipseong(Sipseong::Geopjae, Eumyang::Yang),
            GyeokgukType::Yangin
        );
        assert_eq!(
            GyeokgukType::from_sipseong(Sipseong::Geopjae, Eumyang::Yin),
            GyeokgukType::Wolgeop
        );
        for s in ALL_SIPSEONG {
            let t = GyeokgukType::from_sipseong(s, Eumyang::Yang);
            assert_eq!(t.category(), GyeokgukCategory::Naegyeok);
        }
    }

    #[test]
    fn ilhaeng_confidence_steps_exactly() {
        assert_eq!(ilhaeng_confidence(0), 0.80);
        assert_eq!(ilhaeng_confidence(1), 0.85);
        assert_eq!(ilhaeng_confidence(2), 0.90);
        assert_eq!(ilhaeng_confidence(4), 0.95);
    }

    #[test]
    fn element_keyed_types() {
        assert_eq!(GyeokgukType::hwagyeok_of(Ohaeng::Earth), GyeokgukType::HwaTo);
        assert_eq!(GyeokgukType::ilhaeng_of(Ohaeng::Water), GyeokgukType::Yunha);
        assert!(GyeokgukCategory::Ilhaeng.is_special());
        assert!(!GyeokgukCategory::Naegyeok.is_special());
    }
}
