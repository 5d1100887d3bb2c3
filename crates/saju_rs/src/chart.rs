//! One-call chart computation over the whole pipeline.

use chrono::Datelike;
use serde::Serialize;
use tracing::{debug, info_span};

use saju_base::{PillarDerivation, PillarSet};
use saju_config::CalculationConfig;
use saju_engine::{
    BasicRelationEvaluator, CalculationTracer, ElementProfile, GyeokgukResult, PillarCalculator,
    RelationEvaluator, RelationResult, StrengthResult, TraceEntry, YongshinResult, analyze,
    determine, resolve, trace_relations,
};
use saju_time::{AdjustedMoment, BirthMoment, LunarDate, TimeError, lunar_to_solar, timezone_info};

use crate::error::SajuError;

/// Everything one request produces, trace included.
#[derive(Debug, Clone, Serialize)]
pub struct SajuChart {
    pub birth: BirthMoment,
    pub config: CalculationConfig,
    pub adjusted: AdjustedMoment,
    pub derivation: PillarDerivation,
    pub relations: Vec<RelationResult>,
    pub strength: StrengthResult,
    pub gyeokguk: GyeokgukResult,
    pub yongshin: YongshinResult,
    pub trace: Vec<TraceEntry>,
}

impl SajuChart {
    pub fn pillars(&self) -> &PillarSet {
        &self.derivation.pillars
    }

    pub fn to_json(&self) -> Result<String, SajuError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Compute a chart with the basic relation evaluator.
pub fn compute_chart(
    birth: &BirthMoment,
    config: &CalculationConfig,
) -> Result<SajuChart, SajuError> {
    compute_chart_with_evaluator(birth, config, &BasicRelationEvaluator)
}

/// Compute a chart under a named school preset.
pub fn compute_chart_with_preset(
    birth: &BirthMoment,
    preset_id: &str,
) -> Result<SajuChart, SajuError> {
    let config = CalculationConfig::from_preset_id(preset_id)?;
    compute_chart(birth, &config)
}

/// Compute a chart with a caller-supplied relation evaluator.
///
/// Input and configuration are validated before anything is computed.
pub fn compute_chart_with_evaluator<E: RelationEvaluator + ?Sized>(
    birth: &BirthMoment,
    config: &CalculationConfig,
    evaluator: &E,
) -> Result<SajuChart, SajuError> {
    validate_request(birth, config)?;

    let _span = info_span!(
        "compute_chart",
        date = %format_args!("{:04}-{:02}-{:02}", birth.year, birth.month, birth.day),
        timezone = %birth.timezone,
    )
    .entered();

    let mut tracer = CalculationTracer::new(config.record_alternatives);

    let chart = PillarCalculator::new(config).calculate(birth, &mut tracer)?;
    let pillars = chart.derivation.pillars;

    let relations = evaluator.evaluate(&pillars, config.relation_strictness);
    trace_relations(&relations, config.relation_strictness, &mut tracer);
    let profile = ElementProfile::build(&pillars, config.hidden_stem_variant, &relations);

    let strength = analyze(&pillars, config, &mut tracer);
    let gyeokguk = determine(&strength, &profile, &relations, config, &mut tracer);
    let yongshin = resolve(&strength, &gyeokguk, &profile, config, &mut tracer);

    debug!(
        pillars = %pillars,
        gyeokguk = gyeokguk.gyeokguk_type.name(),
        yongshin = %yongshin.final_yongshin,
        trace_len = tracer.len(),
        "chart computed"
    );

    Ok(SajuChart {
        birth: birth.clone(),
        config: config.clone(),
        adjusted: chart.adjusted,
        derivation: chart.derivation,
        relations,
        strength,
        gyeokguk,
        yongshin,
        trace: tracer.into_entries(),
    })
}

/// Birth moment from a lunar calendar date.
pub fn birth_from_lunar(
    date: LunarDate,
    hour: u32,
    minute: u32,
    timezone: &str,
    longitude: f64,
    latitude: f64,
) -> Result<BirthMoment, SajuError> {
    let solar = lunar_to_solar(date)?;
    let birth = BirthMoment::new(
        solar.year(),
        solar.month(),
        solar.day(),
        hour,
        minute,
        timezone,
        longitude,
        latitude,
    );
    birth.validate()?;
    Ok(birth)
}

fn validate_request(birth: &BirthMoment, config: &CalculationConfig) -> Result<(), SajuError> {
    birth.validate()?;
    config.validate()?;
    // An explicit meridian stands in for an unknown zone.
    if config.lmt_baseline_override.is_none() && timezone_info(&birth.timezone).is_none() {
        return Err(TimeError::UnknownTimezone(birth.timezone.clone()).into());
    }
    Ok(())
}
