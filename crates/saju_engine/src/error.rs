//! Error types for the classification pipeline.

use saju_base::BaseError;
use saju_config::ConfigError;
use saju_time::TimeError;
use thiserror::Error;

/// Errors raised before or during chart classification.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EngineError {
    #[error("time error: {0}")]
    Time(#[from] TimeError),

    #[error("pillar error: {0}")]
    Base(#[from] BaseError),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
