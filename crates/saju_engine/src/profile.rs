//! Precomputed element and sipseong presence of one chart.
//!
//! Every rule table (formation, special patterns, yongshin) reads the chart
//! through this profile rather than through the raw pillars.

use serde::Serialize;

use saju_base::{
    Cheongan, HiddenStemVariant, Jiji, Ohaeng, PillarPosition, PillarSet, Sipseong,
    SipseongGroup, hidden_stems, seasonal_branches, sipseong_of,
};

use crate::relation::{RelationKind, RelationResult, RelationState};

/// A non-day stem and what it is to the day master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RevealedStem {
    pub position: PillarPosition,
    pub stem: Cheongan,
    pub sipseong: Sipseong,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementProfile {
    pub day_master: Cheongan,
    pub month_branch: Jiji,
    /// Year, month and hour stems.
    pub revealed: [RevealedStem; 3],
    /// Stem count per element, day master included.
    pub stem_count: [u8; 5],
    /// Hidden-stem weight per element, one unit per branch.
    pub hidden_weight: [f64; 5],
    /// The day master's element appears among some branch's hidden stems.
    pub rooted: bool,
    /// An active clash hits the month branch.
    pub month_clashed: bool,
    /// Element of the first transformed stem combination.
    pub transformed_element: Option<Ohaeng>,
    /// Chart branches in the day master element's seasonal group.
    pub seasonal_group_count: u8,
}

fn idx(e: Ohaeng) -> usize {
    e.index() as usize
}

impl ElementProfile {
    pub fn build(
        pillars: &PillarSet,
        variant: HiddenStemVariant,
        relations: &[RelationResult],
    ) -> Self {
        let day_master = pillars.day_master();
        let dm_element = day_master.element();

        let revealed = pillars.non_day_stems().map(|(position, stem)| RevealedStem {
            position,
            stem,
            sipseong: sipseong_of(day_master, stem),
        });

        let mut stem_count = [0u8; 5];
        for (_, s) in pillars.stems() {
            stem_count[idx(s.element())] += 1;
        }

        let mut hidden_weight = [0.0; 5];
        let mut rooted = false;
        for (_, b) in pillars.branches() {
            for h in hidden_stems(b, variant) {
                hidden_weight[idx(h.stem.element())] += h.weight;
            }
            rooted |= hidden_stems(b, HiddenStemVariant::Standard)
                .iter()
                .any(|h| h.stem.element() == dm_element);
        }

        let month_clashed = relations.iter().any(|r| {
            r.kind == RelationKind::BranchClash
                && r.state == RelationState::Active
                && r.involves(PillarPosition::Month)
        });
        let transformed_element = relations
            .iter()
            .find(|r| r.kind == RelationKind::StemCombination && r.state == RelationState::Transformed)
            .and_then(|r| r.element);

        let group = seasonal_branches(dm_element);
        let seasonal_group_count = pillars
            .branches()
            .iter()
            .filter(|(_, b)| group.contains(b))
            .count() as u8;

        Self {
            day_master,
            month_branch: pillars.month_branch(),
            revealed,
            stem_count,
            hidden_weight,
            rooted,
            month_clashed,
            transformed_element,
            seasonal_group_count,
        }
    }

    pub fn day_master_element(&self) -> Ohaeng {
        self.day_master.element()
    }

    pub fn group_element(&self, group: SipseongGroup) -> Ohaeng {
        group.element_for(self.day_master_element())
    }

    /// Stems plus hidden weight of an element anywhere in the chart.
    pub fn presence(&self, element: Ohaeng) -> f64 {
        f64::from(self.stem_count[idx(element)]) + self.hidden_weight[idx(element)]
    }

    pub fn is_absent(&self, element: Ohaeng) -> bool {
        self.presence(element) <= 0.0
    }

    pub fn group_presence(&self, group: SipseongGroup) -> f64 {
        let p = self.presence(self.group_element(group));
        // The day master itself is not a companion.
        if group == SipseongGroup::Bigeop { p - 1.0 } else { p }
    }

    pub fn is_present(&self, group: SipseongGroup) -> bool {
        self.group_presence(group) > 0.0
    }

    pub fn revealed_sipseong(&self, sipseong: Sipseong) -> bool {
        self.revealed.iter().any(|r| r.sipseong == sipseong)
    }

    pub fn revealed_count(&self, group: SipseongGroup) -> usize {
        self.revealed.iter().filter(|r| r.sipseong.group() == group).count()
    }

    pub fn revealed_group(&self, group: SipseongGroup) -> bool {
        self.revealed_count(group) > 0
    }

    /// Whether any non-day stem has the given element.
    pub fn revealed_element(&self, element: Ohaeng) -> bool {
        self.revealed.iter().any(|r| r.stem.element() == element)
    }

    /// Month branch is in the day master element's seasonal group.
    pub fn month_in_seasonal_group(&self) -> bool {
        seasonal_branches(self.day_master_element()).contains(&self.month_branch)
    }

    /// Month command is the element itself or generates it.
    pub fn month_supports(&self, element: Ohaeng) -> bool {
        let m = self.month_branch.element();
        m == element || m.generates() == element
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_base::Pillar;

    fn chart(p: [(Cheongan, Jiji); 4]) -> PillarSet {
        let [y, m, d, h] = p.map(|(s, b)| Pillar::new(s, b).unwrap());
        PillarSet {
            year: y,
            month: m,
            day: d,
            hour: h,
        }
    }

    #[test]
    fn presence_counts_stems_and_hidden() {
        use Cheongan::*;
        use Jiji::*;
        let set = chart([(Byeong, O), (Gi, Chuk), (Gap, Ja), (Byeong, In)]);
        let p = ElementProfile::build(&set, HiddenStemVariant::Standard, &[]);
        assert_eq!(p.stem_count[idx(Ohaeng::Fire)], 2);
        let total: f64 = p.hidden_weight.iter().sum();
        assert!((total - 4.0).abs() < 1e-9);
        assert!(p.rooted);
        assert!(p.revealed_sipseong(Sipseong::Siksin));
        assert!(p.revealed_sipseong(Sipseong::Jeongjae));
        assert!(!p.revealed_group(SipseongGroup::Gwanseong));
    }

    #[test]
    fn companions_exclude_day_master() {
        use Cheongan::*;
        use Jiji::*;
        // No metal outside the day stem, no water at all.
        let set = chart([(Byeong, O), (Byeong, O), (Gyeong, O), (Byeong, O)]);
        let p = ElementProfile::build(&set, HiddenStemVariant::Standard, &[]);
        assert_eq!(p.group_presence(SipseongGroup::Bigeop), 0.0);
        assert!(!p.rooted);
        assert!(p.is_absent(Ohaeng::Water));
    }
}
