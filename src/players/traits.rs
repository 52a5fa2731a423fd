//! Trait tallies for a player's board.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, ChampionId, TraitId};

use super::player::Player;

/// How many distinct champions of a trait are fielded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitCount {
    pub id: TraitId,
    pub units: u32,
    /// Highest breakpoint reached, if any.
    pub tier: Option<usize>,
}

impl TraitCount {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.tier.is_some()
    }
}

impl Player {
    /// Recount traits from the board.
    ///
    /// Duplicates of one champion count once. Traits missing from the
    /// catalog are still tallied but never activate.
    pub fn update_active_traits(&mut self, catalog: &Catalog) {
        let mut seen: FxHashSet<&ChampionId> = FxHashSet::default();
        let mut counts: FxHashMap<&TraitId, u32> = FxHashMap::default();
        for champion in self.board.champions() {
            if !seen.insert(champion.id()) {
                continue;
            }
            for trait_id in &champion.template().traits {
                *counts.entry(trait_id).or_default() += 1;
            }
        }

        let mut traits: Vec<TraitCount> = counts
            .into_iter()
            .map(|(id, units)| TraitCount {
                tier: catalog
                    .trait_template(id.as_str())
                    .and_then(|t| t.tier_for(units)),
                id: id.clone(),
                units,
            })
            .collect();
        traits.sort_by(|a, b| b.units.cmp(&a.units).then_with(|| a.id.cmp(&b.id)));
        self.traits = traits;
    }

    /// Traits at or above their first breakpoint.
    pub fn active_traits(&self) -> impl Iterator<Item = &TraitCount> {
        self.traits.iter().filter(|t| t.is_active())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::catalog::sample_catalog;
    use crate::core::{Hex, MatchConfig, PlayerId};
    use crate::units::Champion;

    fn place(player: &mut Player, catalog: &Catalog, id: &str, col: usize) {
        let template = Arc::clone(catalog.champion(id).unwrap());
        player
            .board
            .place(Hex::new(0, col), Champion::new(template, 1))
            .unwrap();
    }

    #[test]
    fn test_traits_count_distinct_champions() {
        let catalog = sample_catalog();
        let mut player = Player::new(PlayerId::new(0), Arc::new(MatchConfig::default()));
        place(&mut player, &catalog, "TFT16_Poppy", 0);
        place(&mut player, &catalog, "TFT16_Poppy", 1);
        player.update_active_traits(&catalog);
        let yordle = player.traits.iter().find(|t| t.id.as_str() == "Yordle").unwrap();
        assert_eq!(yordle.units, 1);
        assert!(!yordle.is_active());

        place(&mut player, &catalog, "TFT16_Lulu", 2);
        player.update_active_traits(&catalog);
        let yordle = player.traits.iter().find(|t| t.id.as_str() == "Yordle").unwrap();
        assert_eq!(yordle.units, 2);
        assert_eq!(yordle.tier, Some(0));
        assert_eq!(player.active_traits().count(), 1);
    }

    #[test]
    fn test_bench_units_do_not_count() {
        let catalog = sample_catalog();
        let mut player = Player::new(PlayerId::new(0), Arc::new(MatchConfig::default()));
        let template = Arc::clone(catalog.champion("TFT16_Teemo").unwrap());
        player.bench.push(Champion::new(template, 1)).unwrap();
        player.update_active_traits(&catalog);
        assert!(player.traits.is_empty());
    }
}
