//! Stem combinations and branch clashes between pillars.

use serde::Serialize;

use saju_base::{ALL_POSITIONS, Cheongan, Jiji, Ohaeng, PillarPosition, PillarSet};
use saju_config::RelationStrictness;

use crate::trace::{CalculationTracer, TraceCategory, TraceEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    /// Cheongan-hap: two stems five apart bind.
    StemCombination,
    /// Jiji-chung: opposite branches clash.
    BranchClash,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationState {
    /// The pair binds and changes into the combined element.
    Transformed,
    /// The pair binds but keeps its own elements.
    Combined,
    /// A clash in effect.
    Active,
}

impl RelationKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::StemCombination => "stem combination",
            Self::BranchClash => "branch clash",
        }
    }
}

impl RelationState {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Transformed => "transformed",
            Self::Combined => "combined",
            Self::Active => "active",
        }
    }
}

/// One detected relation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RelationResult {
    pub kind: RelationKind,
    pub positions: [PillarPosition; 2],
    pub state: RelationState,
    /// Combined element of a stem pair; `None` for clashes.
    pub element: Option<Ohaeng>,
    pub confidence: f64,
}

impl RelationResult {
    pub fn involves(&self, position: PillarPosition) -> bool {
        self.positions.contains(&position)
    }
}

/// Relation detection seam. The pipeline only needs the results.
pub trait RelationEvaluator {
    fn evaluate(&self, pillars: &PillarSet, strictness: RelationStrictness) -> Vec<RelationResult>;
}

/// Element a stem pair combines into, if the two stems combine at all.
pub fn stem_combination(a: Cheongan, b: Cheongan) -> Option<Ohaeng> {
    if a.index().abs_diff(b.index()) != 5 {
        return None;
    }
    // Gap-Gi earth, Eul-Gyeong metal, Byeong-Sin water, Jeong-Im wood, Mu-Gye fire
    Some(match a.index().min(b.index()) {
        0 => Ohaeng::Earth,
        1 => Ohaeng::Metal,
        2 => Ohaeng::Water,
        3 => Ohaeng::Wood,
        _ => Ohaeng::Fire,
    })
}

pub fn is_branch_clash(a: Jiji, b: Jiji) -> bool {
    a.opposite() == b
}

/// Five stem combinations and six branch clashes.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicRelationEvaluator;

const CLASH_ADJACENT_CONFIDENCE: f64 = 0.9;
const CLASH_DISTANT_CONFIDENCE: f64 = 0.6;
const COMBINED_CONFIDENCE: f64 = 0.6;

impl BasicRelationEvaluator {
    fn stem_relation(
        pillars: &PillarSet,
        pa: PillarPosition,
        pb: PillarPosition,
        strictness: RelationStrictness,
    ) -> Option<RelationResult> {
        let (a, b) = (pillars.get(pa).stem, pillars.get(pb).stem);
        let element = stem_combination(a, b)?;
        let adjacent = pa.is_adjacent(pb);
        if !adjacent && strictness != RelationStrictness::Lenient {
            return None;
        }

        let month = pillars.month_branch().element();
        let month_same = month == element;
        let month_supports = month_same || month.generates() == element;

        let transformed = match strictness {
            RelationStrictness::Strict => {
                let stems = pillars.stems();
                let jealous = stems.iter().filter(|(_, s)| *s == a || *s == b).count() > 2;
                let controlled = stems
                    .iter()
                    .filter(|(p, _)| *p != pa && *p != pb)
                    .any(|(_, s)| s.element().controls() == element);
                month_same && !jealous && !controlled
            }
            RelationStrictness::Moderate | RelationStrictness::Lenient => month_supports,
        };

        let (state, confidence) = if transformed {
            let base = match strictness {
                RelationStrictness::Strict => 0.9,
                _ if month_same => 0.85,
                _ => 0.75,
            };
            let confidence = if adjacent { base } else { base - 0.1 };
            (RelationState::Transformed, confidence)
        } else {
            (RelationState::Combined, COMBINED_CONFIDENCE)
        };
        Some(RelationResult {
            kind: RelationKind::StemCombination,
            positions: [pa, pb],
            state,
            element: Some(element),
            confidence,
        })
    }

    fn branch_relation(
        pillars: &PillarSet,
        pa: PillarPosition,
        pb: PillarPosition,
        strictness: RelationStrictness,
    ) -> Option<RelationResult> {
        if !is_branch_clash(pillars.get(pa).branch, pillars.get(pb).branch) {
            return None;
        }
        let adjacent = pa.is_adjacent(pb);
        let confidence = match (adjacent, strictness) {
            (true, _) => CLASH_ADJACENT_CONFIDENCE,
            (false, RelationStrictness::Strict) => return None,
            (false, _) => CLASH_DISTANT_CONFIDENCE,
        };
        Some(RelationResult {
            kind: RelationKind::BranchClash,
            positions: [pa, pb],
            state: RelationState::Active,
            element: None,
            confidence,
        })
    }
}

impl RelationEvaluator for BasicRelationEvaluator {
    fn evaluate(&self, pillars: &PillarSet, strictness: RelationStrictness) -> Vec<RelationResult> {
        let mut out = Vec::new();
        for (i, &pa) in ALL_POSITIONS.iter().enumerate() {
            for &pb in &ALL_POSITIONS[i + 1..] {
                out.extend(Self::stem_relation(pillars, pa, pb, strictness));
                out.extend(Self::branch_relation(pillars, pa, pb, strictness));
            }
        }
        out
    }
}

/// One trace entry per detected relation, or a single "none" entry.
pub fn trace_relations(
    results: &[RelationResult],
    strictness: RelationStrictness,
    tracer: &mut CalculationTracer,
) {
    if results.is_empty() {
        tracer.record(
            TraceEntry::new("relation.none", TraceCategory::Relation, "no relations")
                .config_key("relation_strictness"),
        );
        return;
    }
    for r in results {
        let [a, b] = r.positions;
        let step = match r.kind {
            RelationKind::StemCombination => format!("relation.stem.{}_{}", a.name(), b.name()),
            RelationKind::BranchClash => format!("relation.branch.{}_{}", a.name(), b.name()),
        };
        let decision = match r.element {
            Some(e) => format!("{} {} ({e})", r.kind.name(), r.state.name()),
            None => format!("{} {}", r.kind.name(), r.state.name()),
        };
        let rule = match r.kind {
            RelationKind::StemCombination => "天干合",
            RelationKind::BranchClash => "地支沖",
        };
        tracer.record(
            TraceEntry::new(step, TraceCategory::Relation, decision)
                .reasoning(format!(
                    "{} and {} pillars under {strictness:?} strictness",
                    a.name(),
                    b.name()
                ))
                .rule(rule)
                .config_key("relation_strictness")
                .confidence(r.confidence),
        );
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

    fn stem_results(set: &PillarSet, s: RelationStrictness) -> Vec<RelationResult> {
        BasicRelationEvaluator
            .evaluate(set, s)
            .into_iter()
            .filter(|r| r.kind == RelationKind::StemCombination)
            .collect()
    }

    #[test]
    fn combination_elements() {
        use Cheongan::*;
        assert_eq!(stem_combination(Gap, Gi), Some(Ohaeng::Earth));
        assert_eq!(stem_combination(Gyeong, Eul), Some(Ohaeng::Metal));
        assert_eq!(stem_combination(Byeong, Sin), Some(Ohaeng::Water));
        assert_eq!(stem_combination(Im, Jeong), Some(Ohaeng::Wood));
        assert_eq!(stem_combination(Mu, Gye), Some(Ohaeng::Fire));
        assert_eq!(stem_combination(Gap, Gyeong), None);
    }

    #[test]
    fn strict_transforms_in_earth_month() {
        use Cheongan::*;
        use Jiji::*;
        let set = chart([(Byeong, O), (Gi, Chuk), (Gap, Ja), (Byeong, In)]);
        let r = stem_results(&set, RelationStrictness::Strict);
        assert_eq!(r.len(), 1);
        assert_eq!(r[0].state, RelationState::Transformed);
        assert_eq!(r[0].element, Some(Ohaeng::Earth));
        assert_eq!(r[0].positions, [PillarPosition::Month, PillarPosition::Day]);
    }

    #[test]
    fn generating_month_needs_moderate() {
        use Cheongan::*;
        use Jiji::*;
        let set = chart([(Byeong, O), (Gi, Sa), (Gap, Ja), (Byeong, In)]);
        assert_eq!(
            stem_results(&set, RelationStrictness::Strict)[0].state,
            RelationState::Combined
        );
        assert_eq!(
            stem_results(&set, RelationStrictness::Moderate)[0].state,
            RelationState::Transformed
        );
    }

    #[test]
    fn strict_rejects_jealous_and_controlled() {
        use Cheongan::*;
        use Jiji::*;
        let jealous = chart([(Gap, Sul), (Gi, Chuk), (Gap, Ja), (Byeong, In)]);
        assert!(
            stem_results(&jealous, RelationStrictness::Strict)
                .iter()
                .all(|r| r.state == RelationState::Combined)
        );
        let controlled = chart([(Byeong, O), (Gi, Chuk), (Gap, Ja), (Eul, Hae)]);
        assert_eq!(
            stem_results(&controlled, RelationStrictness::Strict)[0].state,
            RelationState::Combined
        );
        assert_eq!(
            stem_results(&controlled, RelationStrictness::Moderate)[0].state,
            RelationState::Transformed
        );
    }

    #[test]
    fn distant_pairs_only_when_lenient() {
        use Cheongan::*;
        use Jiji::*;
        let set = chart([(Gi, Myo), (Byeong, O), (Gap, Ja), (Byeong, In)]);
        assert!(stem_results(&set, RelationStrictness::Moderate).is_empty());
        let r = stem_results(&set, RelationStrictness::Lenient);
        assert_eq!(r.len(), 1);
        assert_eq!(r[0].state, RelationState::Transformed);
        assert!(r[0].confidence < 0.8);
    }

    #[test]
    fn clashes_by_distance() {
        use Cheongan::*;
        use Jiji::*;
        // Ja (day) against O (year) is distant.
        let set = chart([(Byeong, O), (Gi, Chuk), (Gap, Ja), (Byeong, In)]);
        let clashes = |s| {
            BasicRelationEvaluator
                .evaluate(&set, s)
                .into_iter()
                .filter(|r| r.kind == RelationKind::BranchClash)
                .collect::<Vec<_>>()
        };
        assert!(clashes(RelationStrictness::Strict).is_empty());
        let moderate = clashes(RelationStrictness::Moderate);
        assert_eq!(moderate.len(), 1);
        assert_eq!(moderate[0].confidence, CLASH_DISTANT_CONFIDENCE);
        assert!(moderate[0].involves(PillarPosition::Year));
    }

    #[test]
    fn traces_each_relation() {
        use Cheongan::*;
        use Jiji::*;
        let set = chart([(Byeong, O), (Gi, Chuk), (Gap, Ja), (Byeong, In)]);
        let results = BasicRelationEvaluator.evaluate(&set, RelationStrictness::Moderate);
        let mut tracer = CalculationTracer::new(false);
        trace_relations(&results, RelationStrictness::Moderate, &mut tracer);
        assert_eq!(tracer.len(), results.len());
        let stem = tracer.find("relation.stem.month_day").unwrap();
        assert_eq!(stem.decision, "stem combination transformed (To)");
        assert!(tracer.find("relation.branch.year_day").is_some());

        let quiet = chart([(Gap, Ja), (Byeong, In), (Gap, Ja), (Byeong, In)]);
        let mut tracer = CalculationTracer::new(false);
        trace_relations(
            &BasicRelationEvaluator.evaluate(&quiet, RelationStrictness::Strict),
            RelationStrictness::Strict,
            &mut tracer,
        );
        assert!(tracer.find("relation.none").is_some());
    }
}
