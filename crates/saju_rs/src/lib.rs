//! Convenience facade for the saju chart engine.
//!
//! Validates a birth moment and configuration, then runs the whole pipeline
//! (true solar time, pillars, relations, strength, gyeokguk, yongshin) with
//! one tracer and returns a serializable [`SajuChart`].
//!
//! # Quick start
//!
//! ```rust,ignore
//! use saju_rs::*;
//!
//! let birth = BirthMoment::seoul(1990, 5, 5, 14, 30);
//! let chart = compute_chart_with_preset(&birth, "korean-mainstream").unwrap();
//! println!("{} -> {}", chart.pillars(), chart.gyeokguk.gyeokguk_type.name());
//! println!("{}", chart.to_json().unwrap());
//! ```

pub mod chart;
pub mod error;

pub use chart::{
    SajuChart, birth_from_lunar, compute_chart, compute_chart_with_evaluator,
    compute_chart_with_preset,
};
pub use error::SajuError;

// Re-export the input and result types so callers need only this crate.
pub use saju_base::{
    Cheongan, DayCutMode, HiddenStemVariant, Jiji, Ohaeng, Pillar, PillarPosition, PillarSet,
    Sipseong,
};
pub use saju_config::{
    ALL_PRESETS, CalculationConfig, ConfigDocument, ConfigOverlay, GyeokgukPriority,
    RelationStrictness, SchoolPreset, YongshinPriority,
};
pub use saju_engine::{
    Agreement, FormationQuality, GyeokgukCategory, GyeokgukResult, GyeokgukType,
    RelationEvaluator, RelationResult, StrengthLevel, StrengthResult, TraceCategory, TraceEntry,
    YongshinMethod, YongshinResult,
};
pub use saju_time::{AdjustedMoment, BirthMoment, LunarDate};
