//! End-to-end chart computation through the facade.

use saju_rs::*;

fn no_longitude() -> CalculationConfig {
    CalculationConfig {
        apply_longitude_correction: false,
        ..CalculationConfig::default()
    }
}

fn pillar_names(chart: &SajuChart) -> [String; 4] {
    let p = chart.pillars();
    [p.year.name(), p.month.name(), p.day.name(), p.hour.name()]
}

#[test]
fn seollal_2024_chart() {
    let chart = compute_chart(
        &BirthMoment::seoul(2024, 2, 10, 14, 30),
        &CalculationConfig::default(),
    )
    .unwrap();
    assert_eq!(
        pillar_names(&chart),
        ["Gap-Jin", "Byeong-In", "Gap-Jin", "Sin-Mi"]
    );
    assert_eq!(chart.adjusted.longitude_correction_minutes, -32);
    assert_eq!(chart.strength.day_master, Cheongan::Gap);
}

#[test]
fn ipchun_switches_year_on_the_minute() {
    let cfg = no_longitude();
    let before = compute_chart(&BirthMoment::seoul(2021, 2, 3, 23, 59), &cfg).unwrap();
    let after = compute_chart(&BirthMoment::seoul(2021, 2, 4, 0, 0), &cfg).unwrap();
    assert_eq!(before.pillars().year.name(), "Gyeong-Ja");
    assert_eq!(before.pillars().month.name(), "Gi-Chuk");
    assert_eq!(after.pillars().year.name(), "Sin-Chuk");
    assert_eq!(after.pillars().month.name(), "Gyeong-In");
}

#[test]
fn lunar_input_matches_solar_input() {
    let birth = birth_from_lunar(
        LunarDate::new(2024, 1, 1, false),
        14,
        30,
        "Asia/Seoul",
        126.978,
        37.5665,
    )
    .unwrap();
    assert_eq!((birth.year, birth.month, birth.day), (2024, 2, 10));

    let cfg = CalculationConfig::default();
    let lunar = compute_chart(&birth, &cfg).unwrap();
    let solar = compute_chart(&BirthMoment::seoul(2024, 2, 10, 14, 30), &cfg).unwrap();
    assert_eq!(lunar.pillars(), solar.pillars());
}

#[test]
fn missing_leap_month_rejected() {
    let err = birth_from_lunar(
        LunarDate::new(2024, 1, 1, true),
        12,
        0,
        "Asia/Seoul",
        126.978,
        37.5665,
    )
    .unwrap_err();
    assert!(matches!(err, SajuError::Time(_)));
}

#[test]
fn invalid_birth_rejected() {
    let cfg = CalculationConfig::default();
    for birth in [
        BirthMoment::seoul(2023, 2, 29, 12, 0),
        BirthMoment::seoul(2023, 3, 1, 24, 0),
        BirthMoment::new(2023, 3, 1, 12, 0, "Asia/Seoul", 200.0, 37.5),
        BirthMoment::new(2023, 3, 1, 12, 0, "Asia/Seoul", 127.0, -91.0),
    ] {
        assert!(
            matches!(compute_chart(&birth, &cfg), Err(SajuError::Time(_))),
            "{birth:?}"
        );
    }
}

#[test]
fn presets_by_id() {
    let birth = BirthMoment::seoul(1990, 5, 5, 23, 40);
    for preset in ALL_PRESETS {
        let chart = compute_chart_with_preset(&birth, preset.id()).unwrap();
        assert_eq!(chart.config, preset.config());
    }
    assert!(matches!(
        compute_chart_with_preset(&birth, "western-tropical"),
        Err(SajuError::Config(_))
    ));
}

#[test]
fn day_cut_changes_only_late_night_day_pillar() {
    let birth = BirthMoment::seoul(2024, 2, 10, 23, 50);
    let midnight = compute_chart(&birth, &no_longitude()).unwrap();
    let hour23 = compute_chart(
        &birth,
        &CalculationConfig {
            day_cut_mode: DayCutMode::Hour23,
            ..no_longitude()
        },
    )
    .unwrap();
    assert_eq!(midnight.pillars().year, hour23.pillars().year);
    assert_eq!(midnight.pillars().month, hour23.pillars().month);
    assert_ne!(midnight.pillars().day, hour23.pillars().day);
    assert_eq!(hour23.pillars().day.name(), "Eul-Sa");
}

#[test]
fn trace_covers_every_stage_in_order() {
    let chart = compute_chart(
        &BirthMoment::seoul(1988, 7, 15, 14, 30),
        &CalculationConfig::default(),
    )
    .unwrap();
    let order = [
        TraceCategory::TimeCorrection,
        TraceCategory::SolarTerm,
        TraceCategory::Pillar,
        TraceCategory::Relation,
        TraceCategory::Strength,
        TraceCategory::Gyeokguk,
        TraceCategory::Formation,
        TraceCategory::Yongshin,
    ];
    let firsts: Vec<usize> = order
        .iter()
        .map(|c| {
            chart
                .trace
                .iter()
                .position(|e| e.category == *c)
                .unwrap_or_else(|| panic!("no {c:?} entry"))
        })
        .collect();
    assert!(firsts.windows(2).all(|w| w[0] < w[1]), "{firsts:?}");
    assert!(chart.trace.iter().all(|e| (0.0..=1.0).contains(&e.confidence)));
}

#[test]
fn alternatives_follow_config() {
    let birth = BirthMoment::seoul(1988, 7, 15, 14, 30);
    let with = compute_chart(&birth, &CalculationConfig::default()).unwrap();
    assert!(with.trace.iter().any(|e| !e.alternatives.is_empty()));

    let without = compute_chart(
        &birth,
        &CalculationConfig {
            record_alternatives: false,
            ..CalculationConfig::default()
        },
    )
    .unwrap();
    assert!(without.trace.iter().all(|e| e.alternatives.is_empty()));
}

#[test]
fn result_invariants() {
    let cfg = CalculationConfig::default();
    let births = [
        (1955, 3, 21, 6),
        (1979, 11, 2, 18),
        (2001, 9, 11, 9),
        (2033, 12, 31, 23),
    ];
    for (y, m, d, h) in births {
        let chart = compute_chart(&BirthMoment::seoul(y, m, d, h, 0), &cfg).unwrap();
        let s = &chart.strength;
        assert!((0.0..=100.0).contains(&s.score));
        assert_eq!(s.is_strong_side(), s.level.is_strong_side());
        assert_eq!(chart.gyeokguk.category, chart.gyeokguk.gyeokguk_type.category());
        let yong = &chart.yongshin;
        assert_eq!(yong.gisin.controls(), yong.final_yongshin);
        let p = chart.pillars();
        for p in [p.year, p.month, p.day, p.hour] {
            assert_eq!(p.stem.index() % 2, p.branch.index() % 2);
        }
    }
}

#[test]
fn custom_evaluator_is_used() {
    struct NoRelations;
    impl RelationEvaluator for NoRelations {
        fn evaluate(&self, _: &PillarSet, _: RelationStrictness) -> Vec<RelationResult> {
            Vec::new()
        }
    }
    let birth = BirthMoment::seoul(1988, 7, 15, 14, 30);
    let chart =
        compute_chart_with_evaluator(&birth, &CalculationConfig::default(), &NoRelations).unwrap();
    assert!(chart.relations.is_empty());
    assert!(chart.trace.iter().any(|e| e.step_id == "relation.none"));
}

#[test]
fn chart_serializes_to_json() {
    let chart = compute_chart(
        &BirthMoment::seoul(2024, 2, 10, 14, 30),
        &CalculationConfig::default(),
    )
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&chart.to_json().unwrap()).unwrap();
    assert!(value["trace"].as_array().is_some_and(|t| !t.is_empty()));
    assert!(value["yongshin"]["final_yongshin"].is_string());
    assert!(value["gyeokguk"]["formation"]["quality"].is_string());
}
