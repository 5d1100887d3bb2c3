//! Calculation configuration, school presets and JSON configuration documents.

pub mod config;
pub mod error;
pub mod preset;

pub use config::{CalculationConfig, GyeokgukPriority, RelationStrictness, YongshinPriority};
pub use error::ConfigError;
pub use preset::{ALL_PRESETS, ConfigDocument, ConfigOverlay, SchoolPreset};
