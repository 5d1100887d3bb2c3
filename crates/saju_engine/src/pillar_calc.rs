//! Birth moment to four pillars, with every time decision traced.

use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;

use saju_base::{DayCutMode, PillarDerivation, SexagenaryEngine, day_pillar_of};
use saju_config::CalculationConfig;
use saju_time::{
    AdjustedMoment, BirthMoment, SolarTermCalendar, SolarTermSource, TrueSolarTimeAdjuster,
};

use crate::error::EngineError;
use crate::trace::{CalculationTracer, TraceCategory, TraceEntry};

const DAY_CUT_MODES: [DayCutMode; 4] = [
    DayCutMode::Midnight,
    DayCutMode::Hour23,
    DayCutMode::Hour2330,
    DayCutMode::Split,
];

/// Corrected moment plus the pillars derived from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PillarChart {
    pub adjusted: AdjustedMoment,
    pub derivation: PillarDerivation,
}

/// True-solar-time adjuster feeding the sexagenary engine.
#[derive(Debug, Clone)]
pub struct PillarCalculator<S: SolarTermSource = SolarTermCalendar> {
    adjuster: TrueSolarTimeAdjuster,
    engine: SexagenaryEngine<S>,
}

impl PillarCalculator<SolarTermCalendar> {
    pub fn new(config: &CalculationConfig) -> Self {
        Self::with_source(SolarTermCalendar::new(), config)
    }
}

impl<S: SolarTermSource> PillarCalculator<S> {
    pub fn with_source(source: S, config: &CalculationConfig) -> Self {
        Self {
            adjuster: TrueSolarTimeAdjuster::new(config.adjustment_options()),
            engine: SexagenaryEngine::with_source(source, config.day_cut_mode),
        }
    }

    pub fn engine(&self) -> &SexagenaryEngine<S> {
        &self.engine
    }

    pub fn calculate(
        &self,
        birth: &BirthMoment,
        tracer: &mut CalculationTracer,
    ) -> Result<PillarChart, EngineError> {
        let adjusted = self.adjuster.adjust(birth)?;
        trace_corrections(&adjusted, self.adjuster.options().include_equation_of_time, tracer);

        let derivation = self
            .engine
            .four_pillars(adjusted.adjusted, adjusted.utc_offset_minutes)?;
        self.trace_boundaries(&derivation, tracer);
        self.trace_pillars(&adjusted, &derivation, tracer);

        Ok(PillarChart {
            adjusted,
            derivation,
        })
    }

    fn trace_boundaries(&self, d: &PillarDerivation, tracer: &mut CalculationTracer) {
        let source = self.engine.source();
        let describe = |b: Option<saju_time::SolarTermBoundary>| match b {
            Some(b) => format!("{} {}", b.term.name(), b.instant.format("%Y-%m-%d %H:%M")),
            None => "unavailable".to_string(),
        };
        let previous = describe(source.previous_boundary_at_or_before(d.term_moment));
        let next = describe(source.next_boundary_after(d.term_moment));
        tracer.record(
            TraceEntry::new(
                "solar_term.boundary",
                TraceCategory::SolarTerm,
                format!("month index {}", d.saju_month_index),
            )
            .reasoning(format!(
                "{} on the UTC+9 clock lies after {previous} and before {next}; boundaries from {}",
                d.term_moment.format("%Y-%m-%d %H:%M"),
                d.boundary_source.name()
            ))
            .rule("節入 strict-after"),
        );
    }

    fn trace_pillars(
        &self,
        adjusted: &AdjustedMoment,
        d: &PillarDerivation,
        tracer: &mut CalculationTracer,
    ) {
        let p = &d.pillars;
        tracer.record(
            TraceEntry::new("pillar.year", TraceCategory::Pillar, p.year.name())
                .reasoning(format!("effective year {} (Ipchun opens the year)", d.effective_year))
                .rule("立春 歲首"),
        );
        tracer.record(
            TraceEntry::new("pillar.month", TraceCategory::Pillar, p.month.name())
                .reasoning(format!(
                    "saju month {} under year stem {}",
                    d.saju_month_index, p.year.stem
                ))
                .rule("五虎遁"),
        );

        let mut day = TraceEntry::new("pillar.day", TraceCategory::Pillar, p.day.name())
            .reasoning(format!(
                "date {}{}",
                d.day_pillar_date,
                if d.day_rolled { " (rolled by day cut)" } else { "" }
            ))
            .config_key("day_cut_mode");
        for mode in DAY_CUT_MODES {
            if mode != self.engine.day_cut() {
                if let Some(alt) = day_pillar_under(mode, adjusted.adjusted) {
                    day = day.alternative(mode.name(), alt);
                }
            }
        }
        tracer.record(day);

        tracer.record(
            TraceEntry::new("pillar.hour", TraceCategory::Pillar, p.hour.name())
                .reasoning(if d.hour_stem_from_next_day {
                    format!("late Ja hour, stem from the day after {}", d.day_pillar_date)
                } else {
                    format!("hour {} under day stem {}", adjusted.adjusted.hour(), p.day.stem)
                })
                .rule("五鼠遁")
                .config_key("day_cut_mode"),
        );
    }
}

fn day_pillar_under(mode: DayCutMode, adjusted: NaiveDateTime) -> Option<String> {
    let date = adjusted.date();
    let date = if mode.rolls_day(adjusted.hour(), adjusted.minute()) {
        date.succ_opt()?
    } else {
        date
    };
    Some(day_pillar_of(date).name())
}

fn trace_corrections(a: &AdjustedMoment, eot_enabled: bool, tracer: &mut CalculationTracer) {
    tracer.record(
        TraceEntry::new(
            "time.dst",
            TraceCategory::TimeCorrection,
            format!("{} min", a.dst_correction_minutes),
        )
        .reasoning(format!("civil {} -> standard {}", a.civil, a.standard))
        .config_key("apply_dst_history"),
    );
    tracer.record(
        TraceEntry::new(
            "time.longitude",
            TraceCategory::TimeCorrection,
            format!("{} min", a.longitude_correction_minutes),
        )
        .reasoning(format!("standard meridian {:.1}°", a.standard_meridian_deg))
        .rule("地方平時: 4 min per degree")
        .config_key("apply_longitude_correction"),
    );
    let eot = TraceEntry::new(
        "time.equation_of_time",
        TraceCategory::TimeCorrection,
        format!("{} min", a.equation_of_time_minutes),
    )
    .config_key("include_equation_of_time");
    tracer.record(if eot_enabled {
        eot.reasoning(format!("adjusted {}", a.adjusted))
    } else {
        eot.reasoning("disabled")
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traces_each_time_step() {
        let cfg = CalculationConfig::default();
        let mut tracer = CalculationTracer::new(true);
        let chart = PillarCalculator::new(&cfg)
            .calculate(&BirthMoment::seoul(2024, 2, 10, 14, 30), &mut tracer)
            .unwrap();
        assert_eq!(chart.derivation.pillars.day.name(), "Gap-Jin");
        for step in [
            "time.dst",
            "time.longitude",
            "time.equation_of_time",
            "solar_term.boundary",
            "pillar.year",
            "pillar.month",
            "pillar.day",
            "pillar.hour",
        ] {
            assert!(tracer.find(step).is_some(), "{step}");
        }
        assert_eq!(tracer.find("pillar.day").unwrap().alternatives.len(), 3);
    }

    #[test]
    fn late_hour_alternatives_differ() {
        let cfg = CalculationConfig {
            apply_longitude_correction: false,
            ..CalculationConfig::default()
        };
        let mut tracer = CalculationTracer::new(true);
        PillarCalculator::new(&cfg)
            .calculate(&BirthMoment::seoul(2024, 2, 10, 23, 40), &mut tracer)
            .unwrap();
        let day = tracer.find("pillar.day").unwrap();
        assert_eq!(day.decision, "Gap-Jin");
        let hour23 = day.alternatives.iter().find(|a| a.school == "hour23").unwrap();
        assert_eq!(hour23.decision, "Eul-Sa");
    }
}
