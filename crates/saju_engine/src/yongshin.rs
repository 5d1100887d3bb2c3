//! Balancing element (yongshin) resolution.
//!
//! Eokbu balances the day master's strength, johu balances the season's
//! climate, tonggwan mediates two clashing elements, and the special
//! patterns carry their own recommendation. The resolver combines them into
//! one final element.

use serde::Serialize;

use saju_base::{ALL_OHAENG, Jiji, Ohaeng, SipseongGroup};
use saju_config::{CalculationConfig, YongshinPriority};

use crate::gyeokguk::{GyeokgukCategory, GyeokgukResult, GyeokgukType};
use crate::profile::ElementProfile;
use crate::strength::StrengthResult;
use crate::trace::{CalculationTracer, TraceCategory, TraceEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum YongshinMethod {
    Eokbu,
    Johu,
    Tonggwan,
    Special,
}

impl YongshinMethod {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Eokbu => "eokbu",
            Self::Johu => "johu",
            Self::Tonggwan => "tonggwan",
            Self::Special => "special",
        }
    }
}

/// How far the eokbu and johu recommendations overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Agreement {
    Full,
    Partial,
    Disagree,
}

impl Agreement {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Full => "FULL",
            Self::Partial => "PARTIAL",
            Self::Disagree => "DISAGREE",
        }
    }

    /// Final confidence when the choice rests on agreement alone.
    pub const fn confidence(self) -> f64 {
        match self {
            Self::Full => 0.95,
            Self::Partial => 0.80,
            Self::Disagree => 0.60,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub method: YongshinMethod,
    pub primary: Ohaeng,
    pub secondary: Option<Ohaeng>,
    pub confidence: f64,
    pub reasoning: String,
}

impl Recommendation {
    fn contains(&self, e: Ohaeng) -> bool {
        self.primary == e || self.secondary == Some(e)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YongshinResult {
    pub final_yongshin: Ohaeng,
    /// Element generating the yongshin; `None` when the chart has none of it.
    pub final_heesin: Option<Ohaeng>,
    /// Element controlling the yongshin.
    pub gisin: Ohaeng,
    /// Element generating the gisin.
    pub gusin: Ohaeng,
    pub agreement: Agreement,
    /// Method whose recommendation decided the final element.
    pub decided_by: YongshinMethod,
    /// In [0, 1].
    pub final_confidence: f64,
    pub recommendations: Vec<Recommendation>,
}

impl YongshinResult {
    pub fn recommendation(&self, method: YongshinMethod) -> Option<&Recommendation> {
        self.recommendations.iter().find(|r| r.method == method)
    }
}

// ---------------------------------------------------------------------------
// Recommenders
// ---------------------------------------------------------------------------

const EOKBU_CONFIDENCE: [f64; 3] = [0.60, 0.75, 0.85];
const TONGGWAN_MIN_PRESENCE: f64 = 2.0;
const TONGGWAN_CONFIDENCE: f64 = 0.70;
const JOHU_SATURATION: f64 = 2.0;
const JOHU_SATURATION_PENALTY: f64 = 0.2;
const SPECIAL_AGREEMENT_BONUS: f64 = 0.05;

/// Support or drain the day master depending on which side it falls.
pub fn recommend_eokbu(strength: &StrengthResult, profile: &ElementProfile) -> Recommendation {
    let g = |group: SipseongGroup| profile.group_element(group);
    let (primary, secondary, reasoning) = if strength.is_strong_side() {
        let companions = profile.group_presence(SipseongGroup::Bigeop);
        let resource = profile.group_presence(SipseongGroup::Inseong);
        if resource > companions {
            (
                g(SipseongGroup::Jaeseong),
                g(SipseongGroup::Siksang),
                format!("strong through resource ({resource:.2}): wealth breaks it"),
            )
        } else {
            (
                g(SipseongGroup::Gwanseong),
                g(SipseongGroup::Siksang),
                format!("strong through companions ({companions:.2}): authority restrains"),
            )
        }
    } else {
        let output = profile.group_presence(SipseongGroup::Siksang);
        let wealth = profile.group_presence(SipseongGroup::Jaeseong);
        let authority = profile.group_presence(SipseongGroup::Gwanseong);
        if wealth >= output && wealth >= authority {
            (
                g(SipseongGroup::Bigeop),
                g(SipseongGroup::Inseong),
                format!("weak under wealth ({wealth:.2}): companions share the load"),
            )
        } else {
            (
                g(SipseongGroup::Inseong),
                g(SipseongGroup::Bigeop),
                format!(
                    "weak under output {output:.2} / authority {authority:.2}: resource supports"
                ),
            )
        }
    };
    Recommendation {
        method: YongshinMethod::Eokbu,
        primary,
        secondary: Some(secondary),
        confidence: EOKBU_CONFIDENCE[strength.level.extremity() as usize],
        reasoning,
    }
}

/// Climate need of each month branch: (primary, secondary, confidence).
#[rustfmt::skip]
static JOHU_TABLE: [(Ohaeng, Ohaeng, f64); 12] = {
    use Ohaeng::*;
    [
        /* Ja   */ (Fire,  Wood,  0.90),
        /* Chuk */ (Fire,  Wood,  0.90),
        /* In   */ (Fire,  Water, 0.60),
        /* Myo  */ (Fire,  Water, 0.50),
        /* Jin  */ (Water, Fire,  0.50),
        /* Sa   */ (Water, Metal, 0.80),
        /* O    */ (Water, Metal, 0.90),
        /* Mi   */ (Water, Metal, 0.90),
        /* Sin  */ (Water, Fire,  0.50),
        /* Yu   */ (Fire,  Water, 0.50),
        /* Sul  */ (Water, Metal, 0.60),
        /* Hae  */ (Fire,  Wood,  0.80),
    ]
};

/// Warm a cold month, moisten a hot one.
pub fn recommend_johu(month_branch: Jiji, profile: &ElementProfile) -> Recommendation {
    let (primary, secondary, base) = JOHU_TABLE[month_branch.index() as usize];
    let presence = profile.presence(primary);
    let saturated = presence >= JOHU_SATURATION;
    let confidence = if saturated {
        (base - JOHU_SATURATION_PENALTY).max(0.1)
    } else {
        base
    };
    let reasoning = if saturated {
        format!("{month_branch} month needs {primary}, already present ({presence:.2})")
    } else {
        format!("{month_branch} month needs {primary}")
    };
    Recommendation {
        method: YongshinMethod::Johu,
        primary,
        secondary: Some(secondary),
        confidence,
        reasoning,
    }
}

/// Element bridging the heaviest controlling pair, if both sides are heavy.
pub fn find_tonggwan(profile: &ElementProfile) -> Option<Recommendation> {
    let mut best: Option<(Ohaeng, Ohaeng, f64)> = None;
    for a in ALL_OHAENG {
        let b = a.controls();
        let weight = profile.presence(a).min(profile.presence(b));
        if weight >= TONGGWAN_MIN_PRESENCE && best.is_none_or(|(_, _, w)| weight > w) {
            best = Some((a, b, weight));
        }
    }
    best.map(|(a, b, weight)| Recommendation {
        method: YongshinMethod::Tonggwan,
        primary: a.generates(),
        secondary: None,
        confidence: TONGGWAN_CONFIDENCE,
        reasoning: format!("{a} attacks {b} ({weight:.2} each side); {} bridges them", a.generates()),
    })
}

/// Dedicated recommendation of a special pattern.
pub fn special_recommendation(gyeokguk: &GyeokgukResult, profile: &ElementProfile) -> Option<Recommendation> {
    let dm = profile.day_master_element();
    let g = |group: SipseongGroup| profile.group_element(group);
    let (primary, secondary, confidence) = match gyeokguk.category {
        GyeokgukCategory::Naegyeok => return None,
        GyeokgukCategory::Hwagyeok => {
            let e = gyeokguk.transformed_element?;
            (e, e.generated_by(), 0.85)
        }
        GyeokgukCategory::Ilhaeng => (dm, dm.generates(), 0.80),
        GyeokgukCategory::Jonggyeok => match gyeokguk.gyeokguk_type {
            GyeokgukType::JongWang => (dm, dm.generated_by(), 0.80),
            GyeokgukType::JongGang => (dm.generated_by(), dm, 0.80),
            GyeokgukType::JongA => (g(SipseongGroup::Siksang), g(SipseongGroup::Jaeseong), 0.80),
            GyeokgukType::JongJae => (g(SipseongGroup::Jaeseong), g(SipseongGroup::Siksang), 0.80),
            GyeokgukType::JongSal => (g(SipseongGroup::Gwanseong), g(SipseongGroup::Jaeseong), 0.80),
            _ => {
                let heaviest = [
                    SipseongGroup::Siksang,
                    SipseongGroup::Jaeseong,
                    SipseongGroup::Gwanseong,
                ]
                .into_iter()
                .max_by(|x, y| profile.group_presence(*x).total_cmp(&profile.group_presence(*y)))
                .unwrap_or(SipseongGroup::Jaeseong);
                let secondary = if heaviest == SipseongGroup::Jaeseong {
                    SipseongGroup::Siksang
                } else {
                    SipseongGroup::Jaeseong
                };
                (g(heaviest), g(secondary), 0.70)
            }
        },
    };
    Some(Recommendation {
        method: YongshinMethod::Special,
        primary,
        secondary: Some(secondary),
        confidence,
        reasoning: format!("{} follows its own dominant element", gyeokguk.gyeokguk_type.name()),
    })
}

pub fn classify_agreement(eokbu: &Recommendation, johu: &Recommendation) -> Agreement {
    if eokbu.primary == johu.primary {
        Agreement::Full
    } else if johu.contains(eokbu.primary)
        || eokbu.contains(johu.primary)
        || eokbu.secondary.is_some_and(|s| johu.secondary == Some(s))
    {
        Agreement::Partial
    } else {
        Agreement::Disagree
    }
}

fn by_priority<'a>(
    priority: YongshinPriority,
    eokbu: &'a Recommendation,
    johu: &'a Recommendation,
) -> &'a Recommendation {
    match priority {
        YongshinPriority::EokbuFirst => eokbu,
        YongshinPriority::JohuFirst => johu,
        YongshinPriority::HigherConfidence => {
            if johu.confidence > eokbu.confidence {
                johu
            } else {
                eokbu
            }
        }
    }
}

const PRIORITY_MODES: [(YongshinPriority, &str); 3] = [
    (YongshinPriority::JohuFirst, "johu_first"),
    (YongshinPriority::EokbuFirst, "eokbu_first"),
    (YongshinPriority::HigherConfidence, "higher_confidence"),
];

fn record(tracer: &mut CalculationTracer, step: &str, r: &Recommendation, rule: &str) {
    let decision = match r.secondary {
        Some(s) => format!("{} (then {s})", r.primary),
        None => r.primary.to_string(),
    };
    tracer.record(
        TraceEntry::new(step, TraceCategory::Yongshin, decision)
            .reasoning(r.reasoning.clone())
            .rule(rule)
            .confidence(r.confidence),
    );
}

/// Combine every recommender into the final balancing element.
pub fn resolve(
    strength: &StrengthResult,
    gyeokguk: &GyeokgukResult,
    profile: &ElementProfile,
    config: &CalculationConfig,
    tracer: &mut CalculationTracer,
) -> YongshinResult {
    let eokbu = recommend_eokbu(strength, profile);
    record(tracer, "yongshin.eokbu", &eokbu, "抑扶: 强者抑之 弱者扶之");
    let johu = recommend_johu(profile.month_branch, profile);
    record(tracer, "yongshin.johu", &johu, "調候: 寒則暖之 熱則寒之");

    let agreement = classify_agreement(&eokbu, &johu);
    tracer.record(
        TraceEntry::new("yongshin.agreement", TraceCategory::Yongshin, agreement.name()).reasoning(
            format!("eokbu {} vs johu {}", eokbu.primary, johu.primary),
        ),
    );

    let tonggwan = if config.enable_tonggwan {
        let t = find_tonggwan(profile);
        match &t {
            Some(r) => record(tracer, "yongshin.tonggwan", r, "通關: 兩神相戰 以通之"),
            None => tracer.record(
                TraceEntry::new("yongshin.tonggwan", TraceCategory::Yongshin, "none")
                    .reasoning("no two heavy elements in a controlling relation")
                    .config_key("enable_tonggwan"),
            ),
        }
        t
    } else {
        tracer.record(
            TraceEntry::new("yongshin.tonggwan", TraceCategory::Yongshin, "skipped")
                .reasoning("mediation disabled")
                .config_key("enable_tonggwan"),
        );
        None
    };

    let special = special_recommendation(gyeokguk, profile);
    if let Some(s) = &special {
        record(tracer, "yongshin.special", s, "特殊格: 順其勢");
    }

    let (final_yongshin, decided_by, final_confidence, reasoning) = if let Some(s) = &special {
        let agreeing = u8::from(s.primary == eokbu.primary) + u8::from(s.primary == johu.primary);
        let bonus = SPECIAL_AGREEMENT_BONUS * f64::from(agreeing);
        (
            s.primary,
            YongshinMethod::Special,
            (s.confidence + bonus).min(1.0),
            format!("{} overrides balancing", gyeokguk.category.name()),
        )
    } else if let (Agreement::Disagree, Some(t)) = (agreement, &tonggwan) {
        (
            t.primary,
            YongshinMethod::Tonggwan,
            t.confidence,
            "eokbu and johu disagree; the mediating element wins".to_string(),
        )
    } else {
        let chosen = by_priority(config.yongshin_priority, &eokbu, &johu);
        (
            chosen.primary,
            chosen.method,
            agreement.confidence(),
            format!("{} agreement, {} chosen by priority", agreement.name(), chosen.method.name()),
        )
    };

    let mut entry = TraceEntry::new(
        "yongshin.final",
        TraceCategory::Yongshin,
        final_yongshin.to_string(),
    )
    .reasoning(reasoning)
    .rule("用神: 抑扶 調候 通關")
    .config_key("yongshin_priority")
    .confidence(final_confidence);
    if decided_by != YongshinMethod::Special && decided_by != YongshinMethod::Tonggwan {
        for (mode, label) in PRIORITY_MODES {
            if mode != config.yongshin_priority {
                entry = entry.alternative(label, by_priority(mode, &eokbu, &johu).primary.to_string());
            }
        }
    }
    tracer.record(entry);

    let heesin = final_yongshin.generated_by();
    let final_heesin = (!profile.is_absent(heesin)).then_some(heesin);
    let gisin = final_yongshin.controlled_by();
    let gusin = gisin.generated_by();

    let mut recommendations = vec![eokbu, johu];
    recommendations.extend(tonggwan);
    recommendations.extend(special);

    YongshinResult {
        final_yongshin,
        final_heesin,
        gisin,
        gusin,
        agreement,
        decided_by,
        final_confidence,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(method: YongshinMethod, primary: Ohaeng, secondary: Ohaeng, confidence: f64) -> Recommendation {
        Recommendation {
            method,
            primary,
            secondary: Some(secondary),
            confidence,
            reasoning: String::new(),
        }
    }

    #[test]
    fn agreement_classes() {
        use Ohaeng::*;
        let e = rec(YongshinMethod::Eokbu, Fire, Wood, 0.75);
        assert_eq!(classify_agreement(&e, &rec(YongshinMethod::Johu, Fire, Earth, 0.9)), Agreement::Full);
        assert_eq!(classify_agreement(&e, &rec(YongshinMethod::Johu, Water, Fire, 0.9)), Agreement::Partial);
        assert_eq!(classify_agreement(&e, &rec(YongshinMethod::Johu, Wood, Water, 0.9)), Agreement::Partial);
        assert_eq!(classify_agreement(&e, &rec(YongshinMethod::Johu, Water, Metal, 0.9)), Agreement::Disagree);
    }

    #[test]
    fn priority_modes() {
        use Ohaeng::*;
        let e = rec(YongshinMethod::Eokbu, Fire, Wood, 0.75);
        let j = rec(YongshinMethod::Johu, Water, Metal, 0.9);
        assert_eq!(by_priority(YongshinPriority::EokbuFirst, &e, &j).primary, Fire);
        assert_eq!(by_priority(YongshinPriority::JohuFirst, &e, &j).primary, Water);
        assert_eq!(by_priority(YongshinPriority::HigherConfidence, &e, &j).primary, Water);
        let tie = rec(YongshinMethod::Johu, Water, Metal, 0.75);
        assert_eq!(by_priority(YongshinPriority::HigherConfidence, &e, &tie).primary, Fire);
    }

    #[test]
    fn johu_table_is_seasonal() {
        for b in [Jiji::Hae, Jiji::Ja, Jiji::Chuk] {
            assert_eq!(JOHU_TABLE[b.index() as usize].0, Ohaeng::Fire);
        }
        for b in [Jiji::Sa, Jiji::O, Jiji::Mi] {
            assert_eq!(JOHU_TABLE[b.index() as usize].0, Ohaeng::Water);
        }
    }

    #[test]
    fn agreement_confidences() {
        assert_eq!(Agreement::Full.confidence(), 0.95);
        assert_eq!(Agreement::Partial.confidence(), 0.80);
        assert_eq!(Agreement::Disagree.confidence(), 0.60);
    }
}
