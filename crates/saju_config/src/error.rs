//! Configuration errors.

use thiserror::Error;

/// Errors from configuration validation, preset lookup or JSON parsing.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("weight `{name}` must be finite and non-negative, got {value}")]
    InvalidWeight { name: &'static str, value: f64 },

    #[error("at least one positional weight must be positive")]
    AllWeightsZero,

    #[error("threshold `{name}` must lie in 0-100, got {value}")]
    ThresholdOutOfRange { name: &'static str, value: f64 },

    #[error("jong weak threshold {weak} must be below strong threshold {strong}")]
    InvertedJongThresholds { weak: f64, strong: f64 },

    #[error("meridian override {0} outside [-180, 180]")]
    InvalidMeridian(f64),

    #[error("ilhaeng minimum branch count {0} outside 2-4")]
    IlhaengMinOutOfRange(u8),

    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    #[error("config JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
