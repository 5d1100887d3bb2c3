//! Day-master strength (eokbu balance).

use serde::Serialize;

use saju_base::{
    ALL_SIPSEONG, Cheongan, Favorability, HiddenStemVariant, Jiji, Ohaeng, PillarSet,
    SeasonalState, Sipseong, SipseongGroup, favorability, hidden_stems, primary_hidden_stem,
    seasonal_state,
};
use saju_config::CalculationConfig;

use crate::trace::{CalculationTracer, TraceCategory, TraceEntry};

/// Six ordered bands, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthLevel {
    VeryStrong,
    Strong,
    SlightlyStrong,
    SlightlyWeak,
    Weak,
    VeryWeak,
}

impl StrengthLevel {
    pub const fn name(self) -> &'static str {
        match self {
            Self::VeryStrong => "very_strong",
            Self::Strong => "strong",
            Self::SlightlyStrong => "slightly_strong",
            Self::SlightlyWeak => "slightly_weak",
            Self::Weak => "weak",
            Self::VeryWeak => "very_weak",
        }
    }

    pub const fn is_strong_side(self) -> bool {
        matches!(self, Self::VeryStrong | Self::Strong | Self::SlightlyStrong)
    }

    /// 0 at the threshold bands, 2 at the extremes.
    pub const fn extremity(self) -> u8 {
        match self {
            Self::SlightlyStrong | Self::SlightlyWeak => 0,
            Self::Strong | Self::Weak => 1,
            Self::VeryStrong | Self::VeryWeak => 2,
        }
    }
}

/// Highest normalized score.
pub const MAX_SCORE: f64 = 100.0;

/// Band of `score` for threshold `t`; cut points scale with the distance
/// from `t` to either end of the range.
pub fn classify(score: f64, t: f64) -> StrengthLevel {
    if score >= t + 0.4 * (MAX_SCORE - t) {
        StrengthLevel::VeryStrong
    } else if score >= t + 0.2 * (MAX_SCORE - t) {
        StrengthLevel::Strong
    } else if score >= t {
        StrengthLevel::SlightlyStrong
    } else if score >= t - 0.2 * t {
        StrengthLevel::SlightlyWeak
    } else if score >= t - 0.4 * t {
        StrengthLevel::Weak
    } else {
        StrengthLevel::VeryWeak
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrengthResult {
    pub day_master: Cheongan,
    pub day_master_element: Ohaeng,
    pub level: StrengthLevel,
    /// 0–100 share of the theoretical maximum.
    pub score: f64,
    pub support: f64,
    pub oppose: f64,
    pub threshold: f64,
    /// Month command supports the day master.
    pub deuk_ryeong: bool,
    /// Day branch supports the day master.
    pub deuk_ji: bool,
    /// Most non-day stems support the day master.
    pub deuk_se: bool,
    pub seasonal_state: SeasonalState,
    pub rationale: Vec<String>,
}

impl StrengthResult {
    pub fn is_strong_side(&self) -> bool {
        self.level.is_strong_side()
    }

    pub fn favorability(&self, sipseong: Sipseong) -> Favorability {
        favorability(sipseong, self.is_strong_side())
    }

    /// Favorability of all ten relationships in this chart's state.
    pub fn favorability_table(&self) -> [(Sipseong, Favorability); 10] {
        ALL_SIPSEONG.map(|s| (s, self.favorability(s)))
    }
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
struct Tally {
    support: f64,
    oppose: f64,
    max: f64,
}

impl Tally {
    fn add(&mut self, day_master: Ohaeng, element: Ohaeng, weight: f64) {
        if SipseongGroup::of_element(day_master, element).supports_day_master() {
            self.support += weight;
        } else {
            self.oppose += weight;
        }
        self.max += weight;
    }

    fn add_branch(&mut self, day_master: Ohaeng, branch: Jiji, variant: HiddenStemVariant, weight: f64) {
        for h in hidden_stems(branch, variant) {
            self.add(day_master, h.stem.element(), h.weight * weight);
        }
    }

    fn score(&self) -> f64 {
        if self.max > 0.0 {
            MAX_SCORE * self.support / self.max
        } else {
            0.0
        }
    }
}

fn tally(pillars: &PillarSet, config: &CalculationConfig, variant: HiddenStemVariant) -> Tally {
    let dm = pillars.day_master().element();
    let mut t = Tally {
        support: 0.0,
        oppose: 0.0,
        max: 0.0,
    };
    t.add_branch(dm, pillars.month.branch, variant, config.month_command_weight);
    t.add_branch(dm, pillars.day.branch, variant, config.day_branch_weight);
    t.add_branch(dm, pillars.year.branch, variant, config.branch_weight);
    t.add_branch(dm, pillars.hour.branch, variant, config.branch_weight);
    for (_, stem) in pillars.non_day_stems() {
        t.add(dm, stem.element(), config.stem_weight);
    }
    t
}

fn supports(day_master: Ohaeng, element: Ohaeng) -> bool {
    SipseongGroup::of_element(day_master, element).supports_day_master()
}

const VARIANTS: [(HiddenStemVariant, &str); 3] = [
    (HiddenStemVariant::Standard, "standard"),
    (HiddenStemVariant::ChineseCommon, "chinese_common"),
    (HiddenStemVariant::PrimaryOnly, "primary_only"),
];

/// Weighted support against opposition, banded by the configured threshold.
pub fn analyze(
    pillars: &PillarSet,
    config: &CalculationConfig,
    tracer: &mut CalculationTracer,
) -> StrengthResult {
    let day_master = pillars.day_master();
    let dm = day_master.element();
    let t = tally(pillars, config, config.hidden_stem_variant);
    let score = t.score();
    let level = classify(score, config.strength_threshold);

    let deuk_ryeong = supports(dm, primary_hidden_stem(pillars.month.branch).element());
    let deuk_ji = supports(dm, primary_hidden_stem(pillars.day.branch).element());
    let deuk_se = pillars
        .non_day_stems()
        .iter()
        .filter(|(_, s)| supports(dm, s.element()))
        .count()
        >= 2;
    let state = seasonal_state(dm, pillars.month.branch);

    let yes_no = |b: bool| if b { "yes" } else { "no" };
    let rationale = vec![
        format!(
            "deuk-ryeong {}: month command {} ({}), day master {} is {}",
            yes_no(deuk_ryeong),
            pillars.month.branch,
            primary_hidden_stem(pillars.month.branch).element(),
            dm,
            state.name()
        ),
        format!("deuk-ji {}: day branch {}", yes_no(deuk_ji), pillars.day.branch),
        format!("deuk-se {}: stems {} {} {}", yes_no(deuk_se), pillars.year.stem, pillars.month.stem, pillars.hour.stem),
        format!(
            "support {:.2} vs oppose {:.2} -> score {:.1} against threshold {:.1}",
            t.support, t.oppose, score, config.strength_threshold
        ),
    ];

    let mut entry = TraceEntry::new(
        "strength.score",
        TraceCategory::Strength,
        format!("score {score:.1}"),
    )
    .reasoning(format!(
        "support {:.2} / total {:.2} over month command, branches and stems",
        t.support, t.max
    ))
    .rule("扶抑: 得令 得地 得勢")
    .config_key("hidden_stem_variant");
    for (variant, label) in VARIANTS {
        if variant != config.hidden_stem_variant {
            let alt = tally(pillars, config, variant).score();
            entry = entry.alternative(label, format!("score {alt:.1}"));
        }
    }
    tracer.record(entry);

    let margin = (score - config.strength_threshold).abs();
    tracer.record(
        TraceEntry::new("strength.level", TraceCategory::Strength, level.name())
            .reasoning(rationale.join("; "))
            .config_key("strength_threshold")
            .confidence(0.6 + 0.4 * (margin / 20.0).min(1.0)),
    );

    StrengthResult {
        day_master,
        day_master_element: dm,
        level,
        score,
        support: t.support,
        oppose: t.oppose,
        threshold: config.strength_threshold,
        deuk_ryeong,
        deuk_ji,
        deuk_se,
        seasonal_state: state,
        rationale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_base::Pillar;

    fn chart(p: [(Cheongan, Jiji); 4]) -> PillarSet {
        let [y, m, d, h] = p.map(|(s, b)| Pillar::new(s, b).unwrap());
        PillarSet {
            year: y,
            month: m,
            day: d,
            hour: h,
        }
    }

    #[test]
    fn bands_at_default_threshold() {
        assert_eq!(classify(70.0, 50.0), StrengthLevel::VeryStrong);
        assert_eq!(classify(69.9, 50.0), StrengthLevel::Strong);
        assert_eq!(classify(60.0, 50.0), StrengthLevel::Strong);
        assert_eq!(classify(50.0, 50.0), StrengthLevel::SlightlyStrong);
        assert_eq!(classify(40.0, 50.0), StrengthLevel::SlightlyWeak);
        assert_eq!(classify(30.0, 50.0), StrengthLevel::Weak);
        assert_eq!(classify(29.9, 50.0), StrengthLevel::VeryWeak);
    }

    #[test]
    fn bands_follow_threshold() {
        // t = 60: strong from 68, very strong from 76
        assert_eq!(classify(68.0, 60.0), StrengthLevel::Strong);
        assert_eq!(classify(76.0, 60.0), StrengthLevel::VeryStrong);
        assert_eq!(classify(48.0, 60.0), StrengthLevel::SlightlyWeak);
        assert_eq!(classify(47.9, 60.0), StrengthLevel::Weak);
    }

    #[test]
    fn level_is_monotonic_in_score() {
        let mut prev = StrengthLevel::VeryWeak;
        for i in 0..=100 {
            let level = classify(f64::from(i), 50.0);
            assert!(level <= prev);
            prev = level;
        }
    }

    #[test]
    fn wood_in_spring_is_strong() {
        use Cheongan::*;
        use Jiji::*;
        let set = chart([(Im, In), (Jeong, Myo), (Gap, In), (Gye, Hae)]);
        let mut tracer = CalculationTracer::new(true);
        let r = analyze(&set, &CalculationConfig::default(), &mut tracer);
        assert!(r.is_strong_side());
        assert!(r.deuk_ryeong && r.deuk_ji && r.deuk_se);
        assert_eq!(r.seasonal_state, SeasonalState::Wang);
        assert!((r.support + r.oppose - 9.5).abs() < 1e-9);
        assert_eq!(tracer.len(), 2);
        assert_eq!(tracer.entries()[0].alternatives.len(), 2);
    }

    #[test]
    fn wood_in_autumn_is_weak() {
        use Cheongan::*;
        use Jiji::*;
        let set = chart([(Gyeong, Jiji::Sin), (Eul, Yu), (Gap, Sul), (Byeong, Jiji::Sin)]);
        let mut tracer = CalculationTracer::new(false);
        let r = analyze(&set, &CalculationConfig::default(), &mut tracer);
        assert!(!r.is_strong_side());
        assert!(!r.deuk_ryeong);
        assert_eq!(r.seasonal_state, SeasonalState::Sa);
        assert_eq!(r.favorability(Sipseong::Jeongin), Favorability::Favorable);
    }

    #[test]
    fn favorability_table_flips_with_state() {
        use Cheongan::*;
        use Jiji::*;
        let strong = chart([(Im, In), (Jeong, Myo), (Gap, In), (Gye, Hae)]);
        let weak = chart([(Gyeong, Jiji::Sin), (Eul, Yu), (Gap, Sul), (Byeong, Jiji::Sin)]);
        let cfg = CalculationConfig::default();
        let mut tracer = CalculationTracer::new(false);
        let a = analyze(&strong, &cfg, &mut tracer).favorability_table();
        let b = analyze(&weak, &cfg, &mut tracer).favorability_table();
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.0, y.0);
            assert_ne!(x.1, y.1);
        }
    }
}
