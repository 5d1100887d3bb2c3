//! Golden charts through strength, gyeokguk and yongshin.

use saju_base::{Cheongan, Jiji, Ohaeng, Pillar, PillarSet};
use saju_config::{CalculationConfig, GyeokgukPriority, SchoolPreset, YongshinPriority};
use saju_engine::{
    Agreement, BasicRelationEvaluator, CalculationTracer, ElementProfile, FormationQuality,
    GyeokgukCategory, GyeokgukResult, GyeokgukType, RelationEvaluator, StrengthResult,
    TraceCategory, YongshinMethod, YongshinResult, analyze, determine, resolve,
};

use Cheongan::*;
use Jiji::*;

struct Outcome {
    strength: StrengthResult,
    gyeokguk: GyeokgukResult,
    yongshin: YongshinResult,
    tracer: CalculationTracer,
}

fn run(p: [(Cheongan, Jiji); 4], config: &CalculationConfig) -> Outcome {
    let [year, month, day, hour] = p.map(|(s, b)| Pillar::new(s, b).unwrap());
    let pillars = PillarSet {
        year,
        month,
        day,
        hour,
    };
    let mut tracer = CalculationTracer::new(config.record_alternatives);
    let relations = BasicRelationEvaluator.evaluate(&pillars, config.relation_strictness);
    let profile = ElementProfile::build(&pillars, config.hidden_stem_variant, &relations);
    let strength = analyze(&pillars, config, &mut tracer);
    let gyeokguk = determine(&strength, &profile, &relations, config, &mut tracer);
    let yongshin = resolve(&strength, &gyeokguk, &profile, config, &mut tracer);
    Outcome {
        strength,
        gyeokguk,
        yongshin,
        tracer,
    }
}

fn default_run(p: [(Cheongan, Jiji); 4]) -> Outcome {
    run(p, &CalculationConfig::default())
}

// ---------------------------------------------------------------------------
// Naegyeok and touchul
// ---------------------------------------------------------------------------

#[test]
fn revealed_primary_wins_with_full_confidence() {
    let o = default_run([(Gye, Hae), (Sin, Yu), (Gap, Ja), (Gi, Sa)]);
    assert_eq!(o.gyeokguk.gyeokguk_type, GyeokgukType::Jeonggwan);
    assert_eq!(o.gyeokguk.category, GyeokgukCategory::Naegyeok);
    assert_eq!(o.gyeokguk.commanding_stem, Some(Sin));
    assert_eq!(o.gyeokguk.confidence, 1.0);
    assert_eq!(o.gyeokguk.formation.quality, FormationQuality::WellFormed);
}

#[test]
fn primary_beats_revealed_secondary() {
    // Gap, Byeong and Mu of In are all revealed.
    let o = default_run([(Gap, Ja), (Byeong, In), (Gyeong, O), (Mu, In)]);
    assert_eq!(o.gyeokguk.gyeokguk_type, GyeokgukType::Pyeonjae);
    assert_eq!(o.gyeokguk.commanding_stem, Some(Gap));
    assert_eq!(o.gyeokguk.confidence, 1.0);
}

#[test]
fn revealed_secondary_scores_lower() {
    let chart = [(Gyeong, Jiji::Sin), (Byeong, In), (Gye, Yu), (Gyeong, Jiji::Sin)];
    let o = default_run(chart);
    assert_eq!(o.gyeokguk.gyeokguk_type, GyeokgukType::Jeongjae);
    assert_eq!(o.gyeokguk.commanding_stem, Some(Byeong));
    assert_eq!(o.gyeokguk.confidence, 0.90);

    let primary_only = CalculationConfig {
        gyeokguk_priority: GyeokgukPriority::PrimaryOnly,
        ..CalculationConfig::default()
    };
    let o = run(chart, &primary_only);
    assert_eq!(o.gyeokguk.gyeokguk_type, GyeokgukType::Sanggwan);
    assert_eq!(o.gyeokguk.commanding_stem, Some(Gap));
    assert_eq!(o.gyeokguk.confidence, 0.75);
}

#[test]
fn unrevealed_month_uses_primary_structurally() {
    let o = default_run([(Byeong, Sul), (Byeong, Ja), (Mu, Sul), (Jeong, Sa)]);
    assert_eq!(o.gyeokguk.gyeokguk_type, GyeokgukType::Jeongjae);
    assert_eq!(o.gyeokguk.commanding_stem, Some(Gye));
    assert_eq!(o.gyeokguk.confidence, 0.75);
}

#[test]
fn geopjae_month_is_yangin_for_yang_day_master() {
    let o = default_run([(Gyeong, Jiji::Sin), (Eul, Myo), (Gap, O), (Gyeong, O)]);
    assert_eq!(o.gyeokguk.gyeokguk_type, GyeokgukType::Yangin);
    assert_eq!(o.gyeokguk.formation.quality, FormationQuality::WellFormed);
}

// ---------------------------------------------------------------------------
// Special patterns
// ---------------------------------------------------------------------------

#[test]
fn day_master_combination_transforms() {
    let chart = [(Byeong, O), (Gi, Chuk), (Gap, Ja), (Byeong, In)];
    let o = default_run(chart);
    assert_eq!(o.gyeokguk.gyeokguk_type, GyeokgukType::HwaTo);
    assert_eq!(o.gyeokguk.transformed_element, Some(Ohaeng::Earth));
    assert_eq!(o.gyeokguk.formation.quality, FormationQuality::WellFormed);
    assert_eq!(o.yongshin.decided_by, YongshinMethod::Special);
    assert_eq!(o.yongshin.final_yongshin, Ohaeng::Earth);
    assert_eq!(o.yongshin.final_confidence, 0.85);

    let strict = run(chart, &SchoolPreset::TraditionalChinese.config());
    assert_eq!(strict.gyeokguk.gyeokguk_type, GyeokgukType::HwaTo);
    assert_eq!(strict.gyeokguk.confidence, 0.9);

    let disabled = CalculationConfig {
        enable_hwagyeok: false,
        ..CalculationConfig::default()
    };
    let o = run(chart, &disabled);
    assert_eq!(o.gyeokguk.gyeokguk_type, GyeokgukType::Jeongjae);
}

#[test]
fn rootless_day_master_follows_wealth() {
    let o = default_run([(Mu, Sul), (Gi, Chuk), (Eul, Chuk), (Mu, Sul)]);
    assert!(o.strength.score <= 15.0);
    assert_eq!(o.gyeokguk.gyeokguk_type, GyeokgukType::JongJae);
    assert_eq!(o.gyeokguk.category, GyeokgukCategory::Jonggyeok);
    assert_eq!(o.gyeokguk.formation.quality, FormationQuality::WellFormed);
    assert_eq!(o.yongshin.final_yongshin, Ohaeng::Earth);
    assert_eq!(o.yongshin.final_heesin, Some(Ohaeng::Fire));
    assert_eq!(o.yongshin.gisin, Ohaeng::Wood);
    assert_eq!(o.yongshin.gusin, Ohaeng::Water);
}

#[test]
fn water_season_chart_is_yunha() {
    let chart = [(Gye, Hae), (Im, Ja), (Im, Ja), (Sin, Chuk)];
    let o = default_run(chart);
    // Extreme, but earth hidden in Hae and Chuk blocks following.
    assert!(o.strength.score >= 85.0);
    assert_eq!(o.gyeokguk.gyeokguk_type, GyeokgukType::Yunha);
    assert_eq!(o.gyeokguk.confidence, 0.85);
    assert_eq!(o.gyeokguk.formation.quality, FormationQuality::Rescued);
    assert_eq!(o.yongshin.final_yongshin, Ohaeng::Water);
    assert_eq!(o.yongshin.final_confidence, 0.8);
    assert_eq!(o.yongshin.final_heesin, Some(Ohaeng::Metal));

    let no_ilhaeng = CalculationConfig {
        enable_ilhaeng: false,
        ..CalculationConfig::default()
    };
    let o = run(chart, &no_ilhaeng);
    assert_eq!(o.gyeokguk.gyeokguk_type, GyeokgukType::Yangin);
    assert_eq!(o.gyeokguk.confidence, 1.0);
}

// ---------------------------------------------------------------------------
// Yongshin resolution
// ---------------------------------------------------------------------------

#[test]
fn full_agreement() {
    let o = default_run([(Gyeong, Jiji::Sin), (Byeong, In), (Gye, Yu), (Gyeong, Jiji::Sin)]);
    assert!(o.strength.is_strong_side());
    assert_eq!(o.yongshin.agreement, Agreement::Full);
    assert_eq!(o.yongshin.final_yongshin, Ohaeng::Fire);
    assert_eq!(o.yongshin.final_confidence, 0.95);
}

#[test]
fn partial_agreement_ignores_mediator() {
    let o = default_run([(Gyeong, Jiji::Sin), (Eul, Myo), (Gap, O), (Gyeong, O)]);
    assert_eq!(o.yongshin.agreement, Agreement::Partial);
    assert!(o.yongshin.recommendation(YongshinMethod::Tonggwan).is_some());
    assert_eq!(o.yongshin.decided_by, YongshinMethod::Eokbu);
    assert_eq!(o.yongshin.final_yongshin, Ohaeng::Water);
    assert_eq!(o.yongshin.final_confidence, 0.80);
}

#[test]
fn disagreement_follows_priority_mode() {
    let chart = [(Byeong, Sul), (Byeong, Ja), (Mu, Sul), (Jeong, Sa)];
    let o = default_run(chart);
    assert_eq!(o.yongshin.agreement, Agreement::Disagree);
    assert_eq!(o.yongshin.final_yongshin, Ohaeng::Water);
    assert_eq!(o.yongshin.final_confidence, 0.60);

    for (priority, expected) in [
        (YongshinPriority::JohuFirst, Ohaeng::Fire),
        (YongshinPriority::HigherConfidence, Ohaeng::Fire),
    ] {
        let cfg = CalculationConfig {
            yongshin_priority: priority,
            ..CalculationConfig::default()
        };
        assert_eq!(run(chart, &cfg).yongshin.final_yongshin, expected, "{priority:?}");
    }
}

#[test]
fn mediator_wins_disagreement() {
    let chart = [(Mu, Ja), (Im, Ja), (Gyeong, Jin), (Gi, Myo)];
    let o = default_run(chart);
    assert_eq!(o.gyeokguk.gyeokguk_type, GyeokgukType::Siksin);
    assert_eq!(o.yongshin.agreement, Agreement::Disagree);
    assert_eq!(o.yongshin.decided_by, YongshinMethod::Tonggwan);
    assert_eq!(o.yongshin.final_yongshin, Ohaeng::Metal);
    assert_eq!(o.yongshin.final_heesin, Some(Ohaeng::Earth));

    let no_tonggwan = CalculationConfig {
        enable_tonggwan: false,
        ..CalculationConfig::default()
    };
    let o = run(chart, &no_tonggwan);
    assert_eq!(o.yongshin.final_yongshin, Ohaeng::Earth);
    // No fire anywhere in the chart.
    assert_eq!(o.yongshin.final_heesin, None);
    assert_eq!(o.yongshin.gisin, Ohaeng::Wood);
    assert_eq!(o.yongshin.gusin, Ohaeng::Water);
}

// ---------------------------------------------------------------------------
// Invariants
// ---------------------------------------------------------------------------

const CHARTS: [[(Cheongan, Jiji); 4]; 7] = [
    [(Gye, Hae), (Sin, Yu), (Gap, Ja), (Gi, Sa)],
    [(Gyeong, Jiji::Sin), (Byeong, In), (Gye, Yu), (Gyeong, Jiji::Sin)],
    [(Byeong, Sul), (Byeong, Ja), (Mu, Sul), (Jeong, Sa)],
    [(Byeong, O), (Gi, Chuk), (Gap, Ja), (Byeong, In)],
    [(Mu, Sul), (Gi, Chuk), (Eul, Chuk), (Mu, Sul)],
    [(Gye, Hae), (Im, Ja), (Im, Ja), (Sin, Chuk)],
    [(Mu, Ja), (Im, Ja), (Gyeong, Jin), (Gi, Myo)],
];

#[test]
fn confidences_in_unit_interval() {
    for chart in CHARTS {
        let o = default_run(chart);
        for c in [o.gyeokguk.confidence, o.yongshin.final_confidence] {
            assert!((0.0..=1.0).contains(&c), "{chart:?}");
        }
        assert!(o.tracer.entries().iter().all(|e| (0.0..=1.0).contains(&e.confidence)));
    }
}

#[test]
fn derived_elements_follow_the_cycles() {
    for chart in CHARTS {
        let y = default_run(chart).yongshin;
        assert_eq!(y.gisin.controls(), y.final_yongshin);
        assert_eq!(y.gusin.generates(), y.gisin);
        if let Some(h) = y.final_heesin {
            assert_eq!(h.generates(), y.final_yongshin);
        }
    }
}

#[test]
fn every_stage_traces() {
    for chart in CHARTS {
        let t = default_run(chart).tracer;
        for c in [
            TraceCategory::Strength,
            TraceCategory::Gyeokguk,
            TraceCategory::Formation,
            TraceCategory::Yongshin,
        ] {
            assert!(t.by_category(c).count() >= 1, "{c:?}");
        }
        assert!(t.find("yongshin.final").is_some());
    }
}
