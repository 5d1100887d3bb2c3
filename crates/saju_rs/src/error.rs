//! Error type for the chart facade.

use saju_base::BaseError;
use saju_config::ConfigError;
use saju_engine::EngineError;
use saju_time::TimeError;
use thiserror::Error;

/// Every way a chart request can fail.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SajuError {
    #[error("invalid birth input: {0}")]
    Time(#[from] TimeError),

    #[error("pillar derivation failed: {0}")]
    Base(#[from] BaseError),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("chart pipeline failed: {0}")]
    Engine(#[from] EngineError),

    #[error("chart serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
