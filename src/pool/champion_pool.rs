//! Counted pool of champion copies with odds-weighted shop sampling.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{Catalog, ChampionId};
use crate::core::{GameRng, MatchConfig};

/// Stock of one champion.
///
/// Invariant: `available + acquired == max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolEntry {
    pub cost: u8,
    pub available: u32,
    pub acquired: u32,
    pub max: u32,
}

/// Shared counted resource of champion copies.
///
/// ```
/// use std::sync::Arc;
/// use rust_autobattler::catalog::sample_catalog;
/// use rust_autobattler::core::MatchConfig;
/// use rust_autobattler::pool::ChampionPool;
///
/// let mut pool = ChampionPool::new(Arc::new(sample_catalog()), &MatchConfig::default());
/// assert_eq!(pool.available("TFT16_Garen"), 29);
/// assert!(pool.acquire("TFT16_Garen"));
/// assert_eq!(pool.acquired("TFT16_Garen"), 1);
/// assert!(pool.release("TFT16_Garen"));
/// assert!(!pool.release("TFT16_Garen"));
/// ```
#[derive(Clone, Debug)]
pub struct ChampionPool {
    catalog: Arc<Catalog>,
    entries: FxHashMap<ChampionId, PoolEntry>,
    /// Ids per cost tier (index 0 = cost 1), sorted.
    by_cost: Vec<Vec<ChampionId>>,
    total_minted: u32,
}

impl ChampionPool {
    /// Mint every catalog champion at its tier's configured copy count.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, config: &MatchConfig) -> Self {
        let mut entries = FxHashMap::default();
        let mut by_cost: Vec<Vec<ChampionId>> = Vec::new();
        let mut total_minted = 0;

        for template in catalog.champions() {
            let max = config.pool_copies_for(template.cost);
            entries.insert(
                template.id.clone(),
                PoolEntry {
                    cost: template.cost,
                    available: max,
                    acquired: 0,
                    max,
                },
            );
            total_minted += max;

            let tier = usize::from(template.cost.max(1)) - 1;
            if by_cost.len() <= tier {
                by_cost.resize_with(tier + 1, Vec::new);
            }
            // catalog.champions() is id-ordered, so each tier stays sorted
            by_cost[tier].push(template.id.clone());
        }

        Self {
            catalog,
            entries,
            by_cost,
            total_minted,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    #[must_use]
    pub fn entry(&self, id: &str) -> Option<&PoolEntry> {
        self.entries.get(id)
    }

    /// Copies left. Unknown ids have none.
    #[must_use]
    pub fn available(&self, id: &str) -> u32 {
        self.entries.get(id).map_or(0, |e| e.available)
    }

    #[must_use]
    pub fn is_available(&self, id: &str) -> bool {
        self.available(id) > 0
    }

    /// Copies currently held by players.
    #[must_use]
    pub fn acquired(&self, id: &str) -> u32 {
        self.entries.get(id).map_or(0, |e| e.acquired)
    }

    #[must_use]
    pub fn max_copies(&self, id: &str) -> u32 {
        self.entries.get(id).map_or(0, |e| e.max)
    }

    /// Take one copy. `false` if none are left or the id is unknown.
    pub fn acquire(&mut self, id: &str) -> bool {
        match self.entries.get_mut(id) {
            Some(entry) if entry.available > 0 => {
                entry.available -= 1;
                entry.acquired += 1;
                true
            }
            _ => false,
        }
    }

    /// Return one copy. `false` if the pool is already full for this id.
    pub fn release(&mut self, id: &str) -> bool {
        match self.entries.get_mut(id) {
            Some(entry) if entry.available < entry.max && entry.acquired > 0 => {
                entry.available += 1;
                entry.acquired -= 1;
                true
            }
            _ => false,
        }
    }

    /// Return up to `count` copies; the number actually returned.
    pub fn release_many(&mut self, id: &str, count: u32) -> u32 {
        let mut returned = 0;
        while returned < count && self.release(id) {
            returned += 1;
        }
        returned
    }

    /// Roll `size` shop slots for a player at `level`.
    ///
    /// Each slot draws a cost tier from `odds`, then picks uniformly among
    /// that tier's champions with stock. An empty tier steps down toward
    /// cost 1; a slot with no candidates anywhere is `None`. Nothing is
    /// acquired.
    pub fn sample_shop(
        &self,
        level: u32,
        size: usize,
        odds: &[f64],
        rng: &mut GameRng,
    ) -> Vec<Option<ChampionId>> {
        let shop: Vec<Option<ChampionId>> = (0..size)
            .map(|_| {
                let tier = rng.choose_weighted(odds)?;
                (0..=tier).rev().find_map(|t| {
                    let candidates: Vec<&ChampionId> = self
                        .by_cost
                        .get(t)?
                        .iter()
                        .filter(|id| self.is_available(id.as_str()))
                        .collect();
                    rng.choose(&candidates).map(|id| (*id).clone())
                })
            })
            .collect();
        debug!(level, filled = shop.iter().flatten().count(), size, "rolled shop");
        shop
    }

    /// Copies available per cost tier (index 0 = cost 1).
    #[must_use]
    pub fn counts_by_tier(&self) -> Vec<u32> {
        self.by_cost
            .iter()
            .map(|ids| ids.iter().map(|id| self.available(id.as_str())).sum())
            .collect()
    }

    #[must_use]
    pub fn total_available(&self) -> u32 {
        self.entries.values().map(|e| e.available).sum()
    }

    #[must_use]
    pub fn total_acquired(&self) -> u32 {
        self.entries.values().map(|e| e.acquired).sum()
    }

    #[must_use]
    pub fn total_minted(&self) -> u32 {
        self.total_minted
    }

    /// Put every copy back.
    pub fn reset(&mut self) {
        for entry in self.entries.values_mut() {
            entry.available = entry.max;
            entry.acquired = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{sample_catalog, ChampionTemplate};

    fn pool() -> ChampionPool {
        ChampionPool::new(Arc::new(sample_catalog()), &MatchConfig::default())
    }

    #[test]
    fn test_minted_per_cost_tier() {
        let pool = pool();
        assert_eq!(pool.max_copies("TFT16_Garen"), 29);
        assert_eq!(pool.max_copies("TFT16_Vi"), 22);
        assert_eq!(pool.max_copies("TFT16_Rumble"), 18);
        assert_eq!(pool.max_copies("TFT16_Jinx"), 12);
        assert_eq!(pool.max_copies("TFT16_Azir"), 10);
        assert_eq!(pool.total_minted(), pool.total_available());
    }

    #[test]
    fn test_last_copy_contention() {
        let catalog = Catalog::builder()
            .champion(ChampionTemplate::new("Solo", "Solo", 1))
            .build();
        let mut config = MatchConfig::default();
        config.pool_copies = vec![1];
        let mut pool = ChampionPool::new(Arc::new(catalog), &config);

        assert!(pool.acquire("Solo"));
        assert!(!pool.acquire("Solo"));
        assert_eq!(pool.available("Solo"), 0);
    }

    #[test]
    fn test_unknown_id() {
        let mut pool = pool();
        assert_eq!(pool.available("Nobody"), 0);
        assert!(!pool.acquire("Nobody"));
        assert!(!pool.release("Nobody"));
    }

    #[test]
    fn test_release_many_stops_at_max() {
        let mut pool = pool();
        for _ in 0..3 {
            pool.acquire("TFT16_Vi");
        }
        assert_eq!(pool.release_many("TFT16_Vi", 9), 3);
        assert_eq!(pool.available("TFT16_Vi"), 22);
    }

    #[test]
    fn test_level_one_shop_only_one_costs() {
        let pool = pool();
        let config = MatchConfig::default();
        let mut rng = GameRng::new(5);
        for _ in 0..20 {
            let shop = pool.sample_shop(1, 5, config.shop_odds_for(1), &mut rng);
            assert_eq!(shop.len(), 5);
            for id in shop.iter().flatten() {
                assert_eq!(pool.entry(id.as_str()).unwrap().cost, 1);
            }
        }
    }

    #[test]
    fn test_sampling_does_not_acquire() {
        let pool = pool();
        let before = pool.total_available();
        let mut rng = GameRng::new(1);
        let _ = pool.sample_shop(9, 5, MatchConfig::default().shop_odds_for(9), &mut rng);
        assert_eq!(pool.total_available(), before);
    }

    #[test]
    fn test_empty_tier_steps_down() {
        let mut pool = pool();
        for id in ["TFT16_Azir", "TFT16_Galio"] {
            while pool.acquire(id) {}
        }
        let odds = [0.0, 0.0, 0.0, 0.0, 1.0];
        let mut rng = GameRng::new(3);
        let shop = pool.sample_shop(11, 5, &odds, &mut rng);
        for id in shop.iter().flatten() {
            assert_eq!(pool.entry(id.as_str()).unwrap().cost, 4);
        }
        assert!(shop.iter().all(Option::is_some));
    }

    #[test]
    fn test_exhausted_pool_gives_empty_slots() {
        let catalog = Catalog::builder()
            .champion(ChampionTemplate::new("Solo", "Solo", 1))
            .build();
        let mut pool = ChampionPool::new(Arc::new(catalog), &MatchConfig::default());
        while pool.acquire("Solo") {}
        let mut rng = GameRng::new(3);
        let shop = pool.sample_shop(1, 5, &[1.0], &mut rng);
        assert!(shop.iter().all(Option::is_none));
    }

    #[test]
    fn test_reset_restores_stock() {
        let mut pool = pool();
        pool.acquire("TFT16_Garen");
        pool.acquire("TFT16_Ahri");
        pool.reset();
        assert_eq!(pool.total_acquired(), 0);
        assert_eq!(pool.total_available(), pool.total_minted());
    }

    #[test]
    fn test_counts_by_tier() {
        let pool = pool();
        let counts = pool.counts_by_tier();
        assert_eq!(counts[0], 29 * pool.catalog().champions_by_cost(1).count() as u32);
    }
}
