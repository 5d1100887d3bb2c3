//! Hidden stems (jijanggan) of each branch and their weight allocation.
//!
//! Roles: yeogi (residual qi of the previous season), junggi (middle qi),
//! jeonggi (main qi). Weights within a branch always sum to 1.

use serde::{Deserialize, Serialize};

use crate::ganji::{Cheongan, Jiji};

/// Allocation scheme for a branch's weight over its hidden stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HiddenStemVariant {
    /// Korean day-ratio table (days out of 30).
    #[default]
    Standard,
    /// Common Chinese 0.6 / 0.3 / 0.1 split (single-stem Ja, Myo, Yu).
    ChineseCommon,
    /// Main qi only.
    PrimaryOnly,
}

/// Role of a hidden stem inside its branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HiddenStemRole {
    Yeogi,
    Junggi,
    Jeonggi,
}

impl HiddenStemRole {
    /// Touchul priority rank (0 = primary).
    pub const fn priority(self) -> u8 {
        match self {
            Self::Jeonggi => 0,
            Self::Junggi => 1,
            Self::Yeogi => 2,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Yeogi => "yeogi",
            Self::Junggi => "junggi",
            Self::Jeonggi => "jeonggi",
        }
    }
}

/// A stem hidden in a branch, with its share of the branch's weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HiddenStem {
    pub stem: Cheongan,
    pub role: HiddenStemRole,
    pub weight: f64,
}

type Row = &'static [(Cheongan, HiddenStemRole, f64)];

use Cheongan::*;
use HiddenStemRole::*;

#[rustfmt::skip]
static STANDARD: [Row; 12] = [
    /* Ja   */ &[(Im, Yeogi, 10.0), (Gye, Jeonggi, 20.0)],
    /* Chuk */ &[(Gye, Yeogi, 9.0), (Sin, Junggi, 3.0), (Gi, Jeonggi, 18.0)],
    /* In   */ &[(Mu, Yeogi, 7.0), (Byeong, Junggi, 7.0), (Gap, Jeonggi, 16.0)],
    /* Myo  */ &[(Gap, Yeogi, 10.0), (Eul, Jeonggi, 20.0)],
    /* Jin  */ &[(Eul, Yeogi, 9.0), (Gye, Junggi, 3.0), (Mu, Jeonggi, 18.0)],
    /* Sa   */ &[(Mu, Yeogi, 7.0), (Gyeong, Junggi, 7.0), (Byeong, Jeonggi, 16.0)],
    /* O    */ &[(Byeong, Yeogi, 10.0), (Gi, Junggi, 9.0), (Jeong, Jeonggi, 11.0)],
    /* Mi   */ &[(Jeong, Yeogi, 9.0), (Eul, Junggi, 3.0), (Gi, Jeonggi, 18.0)],
    /* Sin  */ &[(Mu, Yeogi, 7.0), (Im, Junggi, 7.0), (Gyeong, Jeonggi, 16.0)],
    /* Yu   */ &[(Gyeong, Yeogi, 10.0), (Sin, Jeonggi, 20.0)],
    /* Sul  */ &[(Sin, Yeogi, 9.0), (Jeong, Junggi, 3.0), (Mu, Jeonggi, 18.0)],
    /* Hae  */ &[(Mu, Yeogi, 7.0), (Gap, Junggi, 7.0), (Im, Jeonggi, 16.0)],
];

#[rustfmt::skip]
static CHINESE_COMMON: [Row; 12] = [
    /* Ja   */ &[(Gye, Jeonggi, 1.0)],
    /* Chuk */ &[(Gye, Yeogi, 0.3), (Sin, Junggi, 0.1), (Gi, Jeonggi, 0.6)],
    /* In   */ &[(Mu, Yeogi, 0.1), (Byeong, Junggi, 0.3), (Gap, Jeonggi, 0.6)],
    /* Myo  */ &[(Eul, Jeonggi, 1.0)],
    /* Jin  */ &[(Eul, Yeogi, 0.3), (Gye, Junggi, 0.1), (Mu, Jeonggi, 0.6)],
    /* Sa   */ &[(Mu, Yeogi, 0.1), (Gyeong, Junggi, 0.3), (Byeong, Jeonggi, 0.6)],
    /* O    */ &[(Gi, Junggi, 0.3), (Jeong, Jeonggi, 0.7)],
    /* Mi   */ &[(Jeong, Yeogi, 0.3), (Eul, Junggi, 0.1), (Gi, Jeonggi, 0.6)],
    /* Sin  */ &[(Mu, Yeogi, 0.1), (Im, Junggi, 0.3), (Gyeong, Jeonggi, 0.6)],
    /* Yu   */ &[(Sin, Jeonggi, 1.0)],
    /* Sul  */ &[(Sin, Yeogi, 0.3), (Jeong, Junggi, 0.1), (Mu, Jeonggi, 0.6)],
    /* Hae  */ &[(Gap, Junggi, 0.3), (Im, Jeonggi, 0.7)],
];

/// Hidden stems of `branch` under `variant`, in yeogi → jeonggi order.
pub fn hidden_stems(branch: Jiji, variant: HiddenStemVariant) -> Vec<HiddenStem> {
    let idx = branch.index() as usize;
    match variant {
        HiddenStemVariant::Standard => normalized(STANDARD[idx]),
        HiddenStemVariant::ChineseCommon => normalized(CHINESE_COMMON[idx]),
        HiddenStemVariant::PrimaryOnly => vec![HiddenStem {
            stem: primary_hidden_stem(branch),
            role: Jeonggi,
            weight: 1.0,
        }],
    }
}

fn normalized(row: Row) -> Vec<HiddenStem> {
    let total: f64 = row.iter().map(|&(_, _, w)| w).sum();
    row.iter()
        .map(|&(stem, role, w)| HiddenStem {
            stem,
            role,
            weight: w / total,
        })
        .collect()
}

/// Main-qi stem of `branch` (same under every variant).
pub fn primary_hidden_stem(branch: Jiji) -> Cheongan {
    STANDARD[branch.index() as usize]
        .iter()
        .find(|&&(_, role, _)| role == Jeonggi)
        .map(|&(stem, _, _)| stem)
        .unwrap_or(Gap)
}

/// Hidden stems of `branch` ordered by touchul priority (jeonggi, junggi, yeogi).
/// Always uses the full Korean table so that every candidate is considered.
pub fn touchul_candidates(branch: Jiji) -> Vec<HiddenStem> {
    let mut stems = normalized(STANDARD[branch.index() as usize]);
    stems.sort_by_key(|h| h.role.priority());
    stems
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ganji::ALL_JIJI;

    const VARIANTS: [HiddenStemVariant; 3] = [
        HiddenStemVariant::Standard,
        HiddenStemVariant::ChineseCommon,
        HiddenStemVariant::PrimaryOnly,
    ];

    #[test]
    fn weights_sum_to_one() {
        for variant in VARIANTS {
            for branch in ALL_JIJI {
                let sum: f64 = hidden_stems(branch, variant).iter().map(|h| h.weight).sum();
                assert!((sum - 1.0).abs() < 1e-12, "{branch:?} {variant:?}");
            }
        }
    }

    #[test]
    fn standard_rows_span_thirty_days() {
        for row in STANDARD.iter() {
            let days: f64 = row.iter().map(|&(_, _, d)| d).sum();
            assert_eq!(days, 30.0);
        }
    }

    #[test]
    fn primary_is_shared_by_all_variants() {
        for branch in ALL_JIJI {
            let primary = primary_hidden_stem(branch);
            for variant in VARIANTS {
                assert!(
                    hidden_stems(branch, variant)
                        .iter()
                        .any(|h| h.stem == primary && h.role == Jeonggi)
                );
            }
        }
    }

    #[test]
    fn primary_of_month_branches() {
        assert_eq!(primary_hidden_stem(Jiji::In), Gap);
        assert_eq!(primary_hidden_stem(Jiji::O), Jeong);
        assert_eq!(primary_hidden_stem(Jiji::Hae), Im);
        assert_eq!(primary_hidden_stem(Jiji::Chuk), Gi);
    }

    #[test]
    fn chinese_common_single_stems() {
        assert_eq!(hidden_stems(Jiji::Ja, HiddenStemVariant::ChineseCommon).len(), 1);
        assert_eq!(hidden_stems(Jiji::Myo, HiddenStemVariant::ChineseCommon)[0].stem, Eul);
        assert_eq!(hidden_stems(Jiji::Yu, HiddenStemVariant::ChineseCommon)[0].stem, Sin);
    }

    #[test]
    fn touchul_order() {
        let c = touchul_candidates(Jiji::In);
        let roles: Vec<_> = c.iter().map(|h| h.role).collect();
        assert_eq!(roles, vec![Jeonggi, Junggi, Yeogi]);
        assert_eq!(c[0].stem, Gap);
        assert_eq!(c[1].stem, Byeong);
    }
}
