//! Trait templates and breakpoints.

use serde::{Deserialize, Serialize};

use super::params::EffectParams;

super::string_id!(
    /// Catalog id of a trait, e.g. `Yordle`.
    TraitId,
    "Trait"
);

/// One breakpoint of a trait.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TraitTier {
    pub min_units: u32,
    #[serde(default)]
    pub effects: EffectParams,
}

/// Immutable trait definition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TraitTemplate {
    pub id: TraitId,
    pub name: String,
    /// Ascending by `min_units`.
    #[serde(default)]
    pub tiers: Vec<TraitTier>,
}

impl TraitTemplate {
    /// Create a trait with plain breakpoints.
    pub fn new(id: impl Into<String>, name: impl Into<String>, breakpoints: &[u32]) -> Self {
        let mut tiers: Vec<TraitTier> = breakpoints
            .iter()
            .map(|&min_units| TraitTier {
                min_units,
                effects: EffectParams::default(),
            })
            .collect();
        tiers.sort_by_key(|t| t.min_units);
        Self {
            id: TraitId::new(id),
            name: name.into(),
            tiers,
        }
    }

    /// Index of the highest tier reached with `count` distinct units.
    #[must_use]
    pub fn tier_for(&self, count: u32) -> Option<usize> {
        self.tiers.iter().rposition(|t| t.min_units <= count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_for_breakpoints() {
        let yordle = TraitTemplate::new("Yordle", "Yordle", &[2, 4, 6]);
        assert_eq!(yordle.tier_for(0), None);
        assert_eq!(yordle.tier_for(1), None);
        assert_eq!(yordle.tier_for(2), Some(0));
        assert_eq!(yordle.tier_for(5), Some(1));
        assert_eq!(yordle.tier_for(9), Some(2));
    }

    #[test]
    fn test_breakpoints_are_sorted() {
        let t = TraitTemplate::new("X", "X", &[4, 2]);
        assert_eq!(t.tiers[0].min_units, 2);
    }
}
