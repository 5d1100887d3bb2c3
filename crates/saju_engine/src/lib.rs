//! Classification pipeline for four-pillar charts.
//!
//! This crate provides:
//! - The pillar calculator (true solar time into the sexagenary engine)
//! - Stem-combination and branch-clash evaluation
//! - Day-master strength analysis
//! - Gyeokguk determination with data-driven formation assessment
//! - Yongshin resolution (eokbu, johu, tonggwan, special patterns)
//! - The per-request calculation tracer

pub mod error;
pub mod formation;
pub mod gyeokguk;
pub mod pillar_calc;
pub mod profile;
pub mod relation;
pub mod strength;
pub mod trace;
pub mod yongshin;

pub use error::EngineError;
pub use formation::{FormationAssessment, FormationQuality, assess, formation_rule};
pub use gyeokguk::{ALL_GYEOKGUK, GyeokgukCategory, GyeokgukResult, GyeokgukType, determine};
pub use pillar_calc::{PillarCalculator, PillarChart};
pub use profile::{ElementProfile, RevealedStem};
pub use relation::{
    BasicRelationEvaluator, RelationEvaluator, RelationKind, RelationResult, RelationState,
    is_branch_clash, stem_combination, trace_relations,
};
pub use strength::{StrengthLevel, StrengthResult, analyze, classify};
pub use trace::{AlternativeDecision, CalculationTracer, TraceCategory, TraceEntry};
pub use yongshin::{
    Agreement, Recommendation, YongshinMethod, YongshinResult, classify_agreement, resolve,
};
