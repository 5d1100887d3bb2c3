//! Sexagenary building blocks for four-pillar charts.
//!
//! This crate provides:
//! - Five elements, heavenly stems and earthly branches
//! - Pillars and the four-pillar set
//! - Hidden-stem tables with selectable weight allocation
//! - Ten-relationship (sipseong) classification and favorability
//! - Seasonal element states
//! - The sexagenary engine turning an adjusted moment into pillars

pub mod error;
pub mod ganji;
pub mod hidden_stem;
pub mod pillar;
pub mod season;
pub mod sexagenary;
pub mod sipseong;

pub use error::BaseError;
pub use ganji::{ALL_CHEONGAN, ALL_JIJI, ALL_OHAENG, Cheongan, Eumyang, Jiji, Ohaeng};
pub use hidden_stem::{
    HiddenStem, HiddenStemRole, HiddenStemVariant, hidden_stems, primary_hidden_stem,
    touchul_candidates,
};
pub use pillar::{ALL_POSITIONS, Pillar, PillarPosition, PillarSet};
pub use season::{Season, SeasonalState, season_of, seasonal_branches, seasonal_state};
pub use sexagenary::{
    DayCutMode, PillarDerivation, SexagenaryEngine, day_pillar_of, five_rat_start,
    five_tiger_start, hour_pillar_of, month_pillar_of, year_pillar_of,
};
pub use sipseong::{
    ALL_SIPSEONG, Favorability, Sipseong, SipseongGroup, favorability, sipseong_of,
};
