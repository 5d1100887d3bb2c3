//! Formation quality of a fixed pattern (seong-gyeok / pa-gyeok).
//!
//! Each pattern type maps to a static rule: a support predicate plus a list
//! of breaking conditions, each with the rescues that can offset it. All
//! predicates read the chart through [`ElementProfile`].

use serde::Serialize;

use saju_base::{Sipseong, SipseongGroup};

use crate::gyeokguk::GyeokgukType;
use crate::profile::ElementProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FormationQuality {
    WellFormed,
    Broken,
    Rescued,
    NotAssessed,
}

impl FormationQuality {
    pub const fn name(self) -> &'static str {
        match self {
            Self::WellFormed => "WELL_FORMED",
            Self::Broken => "BROKEN",
            Self::Rescued => "RESCUED",
            Self::NotAssessed => "NOT_ASSESSED",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormationAssessment {
    pub quality: FormationQuality,
    pub support_holds: bool,
    /// Labels of every breaking factor found.
    pub breaking: Vec<String>,
    /// Labels of the rescues that offset them.
    pub rescues: Vec<String>,
}

impl FormationAssessment {
    pub fn summary(&self) -> String {
        if self.quality == FormationQuality::NotAssessed {
            return "no formation table for this pattern".to_string();
        }
        let mut s = format!("support {}", if self.support_holds { "holds" } else { "missing" });
        if !self.breaking.is_empty() {
            s.push_str(&format!("; breaking: {}", self.breaking.join(", ")));
        }
        if !self.rescues.is_empty() {
            s.push_str(&format!("; rescued by: {}", self.rescues.join(", ")));
        }
        s
    }
}

// ---------------------------------------------------------------------------
// Rule tables
// ---------------------------------------------------------------------------

type Predicate = fn(&ElementProfile) -> bool;

pub struct Rescue {
    pub label: &'static str,
    pub applies: Predicate,
}

pub struct Breaking {
    pub label: &'static str,
    pub applies: Predicate,
    pub rescues: &'static [Rescue],
}

pub struct FormationRule {
    pub support_label: &'static str,
    pub support: Predicate,
    pub breaking: &'static [Breaking],
}

fn month_clashed(p: &ElementProfile) -> bool {
    p.month_clashed
}
fn rooted(p: &ElementProfile) -> bool {
    p.rooted
}
fn sanggwan_revealed(p: &ElementProfile) -> bool {
    p.revealed_sipseong(Sipseong::Sanggwan)
}
fn siksin_revealed(p: &ElementProfile) -> bool {
    p.revealed_sipseong(Sipseong::Siksin)
}
fn pyeonin_revealed(p: &ElementProfile) -> bool {
    p.revealed_sipseong(Sipseong::Pyeonin)
}
fn pyeongwan_revealed(p: &ElementProfile) -> bool {
    p.revealed_sipseong(Sipseong::Pyeongwan)
}
fn jeonggwan_revealed(p: &ElementProfile) -> bool {
    p.revealed_sipseong(Sipseong::Jeonggwan)
}
fn bigeop_revealed(p: &ElementProfile) -> bool {
    p.revealed_group(SipseongGroup::Bigeop)
}
fn siksang_revealed(p: &ElementProfile) -> bool {
    p.revealed_group(SipseongGroup::Siksang)
}
fn jaeseong_revealed(p: &ElementProfile) -> bool {
    p.revealed_group(SipseongGroup::Jaeseong)
}
fn gwanseong_revealed(p: &ElementProfile) -> bool {
    p.revealed_group(SipseongGroup::Gwanseong)
}
fn inseong_revealed(p: &ElementProfile) -> bool {
    p.revealed_group(SipseongGroup::Inseong)
}
fn siksang_present(p: &ElementProfile) -> bool {
    p.is_present(SipseongGroup::Siksang)
}
fn jaeseong_present(p: &ElementProfile) -> bool {
    p.is_present(SipseongGroup::Jaeseong)
}
fn gwanseong_present(p: &ElementProfile) -> bool {
    p.is_present(SipseongGroup::Gwanseong)
}
fn wealth_or_resource_present(p: &ElementProfile) -> bool {
    jaeseong_present(p) || p.is_present(SipseongGroup::Inseong)
}
fn rooted_or_output_present(p: &ElementProfile) -> bool {
    rooted(p) || siksang_present(p)
}
fn rooted_or_wealth_present(p: &ElementProfile) -> bool {
    rooted(p) || jaeseong_present(p)
}
fn wealth_without_output(p: &ElementProfile) -> bool {
    jaeseong_revealed(p) && !siksang_revealed(p)
}
fn usable_god_revealed(p: &ElementProfile) -> bool {
    jaeseong_revealed(p) || gwanseong_revealed(p) || siksang_revealed(p)
}
fn resource_excess(p: &ElementProfile) -> bool {
    p.revealed_count(SipseongGroup::Inseong) >= 2
}
fn companions_contest_wealth(p: &ElementProfile) -> bool {
    bigeop_revealed(p) && jaeseong_revealed(p) && !gwanseong_revealed(p)
}
fn output_meets_authority(p: &ElementProfile) -> bool {
    siksang_revealed(p) && gwanseong_revealed(p)
}
fn transformation_seasonal(p: &ElementProfile) -> bool {
    p.transformed_element.is_some_and(|e| p.month_supports(e))
}
fn transformation_controlled(p: &ElementProfile) -> bool {
    p.transformed_element
        .is_some_and(|e| p.revealed_element(e.controlled_by()))
}
fn controller_restrained(p: &ElementProfile) -> bool {
    p.transformed_element
        .is_some_and(|e| p.revealed_element(e.controlled_by().controlled_by()))
}
fn month_in_group(p: &ElementProfile) -> bool {
    p.month_in_seasonal_group()
}

const MONTH_CLASH: Breaking = Breaking {
    label: "月令被沖 month command clashed",
    applies: month_clashed,
    rescues: &[],
};

const PAE_IN: Rescue = Rescue {
    label: "佩印 resource restrains output",
    applies: inseong_revealed,
};

const WEALTH_CONTROLS_OWL: Rescue = Rescue {
    label: "偏財制梟 wealth restrains the owl",
    applies: jaeseong_revealed,
};

const OUTPUT_BRIDGE: Rescue = Rescue {
    label: "食傷通關 output bridges the conflict",
    applies: siksang_revealed,
};

static JEONGGWAN: FormationRule = FormationRule {
    support_label: "財印輔官 wealth or resource assists the officer",
    support: wealth_or_resource_present,
    breaking: &[
        Breaking {
            label: "傷官見官 output meets the officer",
            applies: sanggwan_revealed,
            rescues: &[PAE_IN],
        },
        Breaking {
            label: "官殺混雜 officer mixed with killing",
            applies: pyeongwan_revealed,
            rescues: &[Rescue {
                label: "食神制殺 food god restrains killing",
                applies: siksin_revealed,
            }],
        },
        MONTH_CLASH,
    ],
};

static PYEONGWAN: FormationRule = FormationRule {
    support_label: "身强任殺 rooted day master bears killing",
    support: rooted,
    breaking: &[
        Breaking {
            label: "財滋弱殺 wealth feeds unrestrained killing",
            applies: wealth_without_output,
            rescues: &[Rescue {
                label: "殺印相生 resource transforms killing",
                applies: inseong_revealed,
            }],
        },
        Breaking {
            label: "官殺混雜 killing mixed with officer",
            applies: jeonggwan_revealed,
            rescues: &[],
        },
        MONTH_CLASH,
    ],
};

static JAE: FormationRule = FormationRule {
    support_label: "身强任財 或 食傷生財 day master bears wealth or output feeds it",
    support: rooted_or_output_present,
    breaking: &[
        Breaking {
            label: "比劫奪財 companions rob wealth",
            applies: bigeop_revealed,
            rescues: &[Rescue {
                label: "官星制劫 officer restrains companions",
                applies: gwanseong_revealed,
            }],
        },
        MONTH_CLASH,
    ],
};

static SIKSIN: FormationRule = FormationRule {
    support_label: "食神生財 food god produces wealth",
    support: rooted_or_wealth_present,
    breaking: &[
        Breaking {
            label: "梟神奪食 owl seizes the food god",
            applies: pyeonin_revealed,
            rescues: &[WEALTH_CONTROLS_OWL],
        },
        MONTH_CLASH,
    ],
};

static SANGGWAN: FormationRule = FormationRule {
    support_label: "傷官生財 或 佩印 output flows to wealth or wears resource",
    support: wealth_or_resource_present,
    breaking: &[
        Breaking {
            label: "傷官見官 output meets the officer",
            applies: jeonggwan_revealed,
            rescues: &[Rescue {
                label: "財星通關 wealth bridges output and officer",
                applies: jaeseong_revealed,
            }],
        },
        MONTH_CLASH,
    ],
};

static JEONGIN: FormationRule = FormationRule {
    support_label: "官印相生 officer feeds resource",
    support: gwanseong_present,
    breaking: &[
        Breaking {
            label: "貪財壞印 wealth breaks resource",
            applies: jaeseong_revealed,
            rescues: &[Rescue {
                label: "比劫護印 companions guard resource",
                applies: bigeop_revealed,
            }],
        },
        MONTH_CLASH,
    ],
};

static PYEONIN: FormationRule = FormationRule {
    support_label: "殺印相生 killing feeds resource",
    support: gwanseong_present,
    breaking: &[
        Breaking {
            label: "梟神奪食 owl seizes the food god",
            applies: siksin_revealed,
            rescues: &[WEALTH_CONTROLS_OWL],
        },
        MONTH_CLASH,
    ],
};

static ROK_GEOP: FormationRule = FormationRule {
    support_label: "財官食傷 透出 a usable god is revealed",
    support: usable_god_revealed,
    breaking: &[
        Breaking {
            label: "印綬太過 resource in excess",
            applies: resource_excess,
            rescues: &[Rescue {
                label: "財星制印 wealth restrains resource",
                applies: jaeseong_revealed,
            }],
        },
        Breaking {
            label: "群劫爭財 companions contest wealth",
            applies: companions_contest_wealth,
            rescues: &[OUTPUT_BRIDGE],
        },
        MONTH_CLASH,
    ],
};

static YANGIN: FormationRule = FormationRule {
    support_label: "官殺制刃 authority restrains the blade",
    support: gwanseong_revealed,
    breaking: &[
        Breaking {
            label: "食傷制官殺 output attacks the restraining authority",
            applies: output_meets_authority,
            rescues: &[PAE_IN],
        },
        Breaking {
            label: "羊刃逢沖 blade clashed",
            applies: month_clashed,
            rescues: &[],
        },
    ],
};

static JONG_WANG: FormationRule = FormationRule {
    support_label: "身旺有根 rooted dominant self",
    support: rooted,
    breaking: &[
        Breaking {
            label: "官殺透出 authority revealed",
            applies: gwanseong_revealed,
            rescues: &[],
        },
        Breaking {
            label: "財星透出 wealth revealed",
            applies: jaeseong_revealed,
            rescues: &[OUTPUT_BRIDGE],
        },
    ],
};

static JONG_A: FormationRule = FormationRule {
    support_label: "兒又生財 output flows on to wealth",
    support: jaeseong_present,
    breaking: &[
        Breaking {
            label: "印星奪食 resource attacks output",
            applies: inseong_revealed,
            rescues: &[Rescue {
                label: "財星制印 wealth restrains resource",
                applies: jaeseong_revealed,
            }],
        },
        Breaking {
            label: "官殺透出 authority revealed",
            applies: gwanseong_revealed,
            rescues: &[],
        },
    ],
};

static JONG_JAE: FormationRule = FormationRule {
    support_label: "食傷生財 output feeds wealth",
    support: siksang_present,
    breaking: &[
        Breaking {
            label: "比劫奪財 companions rob wealth",
            applies: bigeop_revealed,
            rescues: &[OUTPUT_BRIDGE],
        },
        Breaking {
            label: "印星透出 resource revealed",
            applies: inseong_revealed,
            rescues: &[],
        },
    ],
};

static JONG_SAL: FormationRule = FormationRule {
    support_label: "財滋殺 wealth feeds killing",
    support: jaeseong_present,
    breaking: &[
        Breaking {
            label: "食傷制殺 output attacks killing",
            applies: siksang_revealed,
            rescues: &[Rescue {
                label: "財星通關 wealth bridges output and killing",
                applies: jaeseong_revealed,
            }],
        },
        Breaking {
            label: "比劫透出 companions revealed",
            applies: bigeop_revealed,
            rescues: &[],
        },
    ],
};

static HWAGYEOK: FormationRule = FormationRule {
    support_label: "化神得令 month command supports the transformation",
    support: transformation_seasonal,
    breaking: &[
        Breaking {
            label: "化神被剋 transformed element attacked",
            applies: transformation_controlled,
            rescues: &[Rescue {
                label: "剋神受制 attacker restrained",
                applies: controller_restrained,
            }],
        },
        MONTH_CLASH,
    ],
};

static ILHAENG: FormationRule = FormationRule {
    support_label: "月令同氣 month command in the element's season",
    support: month_in_group,
    breaking: &[
        Breaking {
            label: "官殺暗藏 authority hidden in the branches",
            applies: gwanseong_present,
            rescues: &[Rescue {
                label: "殺印相生 resource transforms authority",
                applies: inseong_revealed,
            }],
        },
        MONTH_CLASH,
    ],
};

/// Rule table of a pattern; `None` for types no school assesses.
pub fn formation_rule(t: GyeokgukType) -> Option<&'static FormationRule> {
    use GyeokgukType::*;
    match t {
        Jeonggwan => Some(&JEONGGWAN),
        Pyeongwan => Some(&PYEONGWAN),
        Jeongjae | Pyeonjae => Some(&JAE),
        Siksin => Some(&SIKSIN),
        Sanggwan => Some(&SANGGWAN),
        Jeongin => Some(&JEONGIN),
        Pyeonin => Some(&PYEONIN),
        Geonrok | Wolgeop => Some(&ROK_GEOP),
        Yangin => Some(&YANGIN),
        JongWang => Some(&JONG_WANG),
        JongA => Some(&JONG_A),
        JongJae => Some(&JONG_JAE),
        JongSal => Some(&JONG_SAL),
        JongGang | JongSe => None,
        HwaTo | HwaGeum | HwaSu | HwaMok | HwaHwa => Some(&HWAGYEOK),
        Gokjik | Yeomsang | Gasaek | Jonghyeok | Yunha => Some(&ILHAENG),
    }
}

/// Evaluate a pattern's rule table. Missing support is itself a breaking
/// factor that no rescue offsets.
pub fn assess(t: GyeokgukType, profile: &ElementProfile) -> FormationAssessment {
    let Some(rule) = formation_rule(t) else {
        return FormationAssessment {
            quality: FormationQuality::NotAssessed,
            support_holds: false,
            breaking: Vec::new(),
            rescues: Vec::new(),
        };
    };

    let support_holds = (rule.support)(profile);
    let mut breaking = Vec::new();
    let mut rescues = Vec::new();
    let mut unrescued = 0usize;
    if !support_holds {
        breaking.push(format!("無助 support missing: {}", rule.support_label));
        unrescued += 1;
    }
    for b in rule.breaking.iter().filter(|b| (b.applies)(profile)) {
        breaking.push(b.label.to_string());
        match b.rescues.iter().find(|r| (r.applies)(profile)) {
            Some(r) => rescues.push(r.label.to_string()),
            None => unrescued += 1,
        }
    }

    let quality = if breaking.is_empty() {
        FormationQuality::WellFormed
    } else if unrescued == 0 {
        FormationQuality::Rescued
    } else {
        FormationQuality::Broken
    };
    FormationAssessment {
        quality,
        support_holds,
        breaking,
        rescues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gyeokguk::ALL_GYEOKGUK;
    use crate::relation::{BasicRelationEvaluator, RelationEvaluator};
    use saju_base::{Cheongan, HiddenStemVariant, Jiji, Pillar, PillarSet};
    use saju_config::RelationStrictness;

    fn profile(p: [(Cheongan, Jiji); 4]) -> ElementProfile {
        let [y, m, d, h] = p.map(|(s, b)| Pillar::new(s, b).unwrap());
        let set = PillarSet {
            year: y,
            month: m,
            day: d,
            hour: h,
        };
        let relations = BasicRelationEvaluator.evaluate(&set, RelationStrictness::Moderate);
        ElementProfile::build(&set, HiddenStemVariant::Standard, &relations)
    }

    #[test]
    fn only_jonggang_and_jongse_unassessed() {
        for t in ALL_GYEOKGUK {
            let has_table = formation_rule(t).is_some();
            let expected = !matches!(t, GyeokgukType::JongGang | GyeokgukType::JongSe);
            assert_eq!(has_table, expected, "{t:?}");
        }
    }

    #[test]
    fn jeonggwan_well_formed() {
        use Cheongan::*;
        use Jiji::*;
        let p = profile([(Gye, Hae), (Sin, Yu), (Gap, Ja), (Gi, Sa)]);
        let a = assess(GyeokgukType::Jeonggwan, &p);
        assert_eq!(a.quality, FormationQuality::WellFormed);
        assert!(a.breaking.is_empty());
    }

    #[test]
    fn output_meeting_officer_rescued_by_resource() {
        use Cheongan::*;
        use Jiji::*;
        let p = profile([(Gye, Hae), (Sin, Yu), (Gap, Ja), (Jeong, Mi)]);
        let a = assess(GyeokgukType::Jeonggwan, &p);
        assert_eq!(a.quality, FormationQuality::Rescued);
        assert_eq!(a.breaking.len(), 1);
        assert!(a.breaking[0].starts_with("傷官見官"));
        assert!(a.rescues[0].starts_with("佩印"));
    }

    #[test]
    fn unrescued_factors_break() {
        use Cheongan::*;
        use Jiji::*;
        let p = profile([(Gyeong, O), (Sin, Yu), (Gap, Ja), (Jeong, Mi)]);
        let a = assess(GyeokgukType::Jeonggwan, &p);
        assert_eq!(a.quality, FormationQuality::Broken);
        assert_eq!(a.breaking.len(), 2);
        assert!(a.rescues.is_empty());
    }

    #[test]
    fn missing_support_breaks() {
        use Cheongan::*;
        use Jiji::*;
        // Gap day master with no metal or water anywhere: Jeongin lacks officer support.
        let p = profile([(Byeong, O), (Byeong, O), (Gap, O), (Byeong, O)]);
        let a = assess(GyeokgukType::Jeongin, &p);
        assert!(!a.support_holds);
        assert_eq!(a.quality, FormationQuality::Broken);
    }

    #[test]
    fn unassessed_has_no_factors() {
        use Cheongan::*;
        use Jiji::*;
        let p = profile([(Gye, Hae), (Sin, Yu), (Gap, Ja), (Gi, Sa)]);
        let a = assess(GyeokgukType::JongSe, &p);
        assert_eq!(a.quality, FormationQuality::NotAssessed);
        assert!(a.breaking.is_empty() && a.rescues.is_empty());
    }
}
