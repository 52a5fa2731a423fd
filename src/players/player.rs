//! The `Player` value.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::{AugmentDescriptor, ChampionId, ItemId};
use crate::core::{MatchConfig, PlayerId};
use crate::units::{Bench, Board, Champion};

use super::traits::TraitCount;

/// Running counters for one player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub gold_spent: u32,
    pub gold_earned: u32,
    pub damage_taken: u32,
    pub damage_dealt: u32,
    pub rounds_survived: u32,
    pub wins: u32,
    pub losses: u32,
    pub win_streak: u32,
    pub loss_streak: u32,
    pub champions_bought: u32,
    pub champions_sold: u32,
    /// Round in which health reached zero.
    pub eliminated_round: Option<u32>,
    /// 1 for the first player eliminated, 2 for the next, ...
    pub elimination_order: Option<u32>,
}

/// One competitor's full state.
#[derive(Clone, Debug)]
pub struct Player {
    pub id: PlayerId,
    pub gold: u32,
    pub level: u32,
    /// Total XP; never reset on level-up.
    pub xp: u32,
    pub health: u32,
    pub alive: bool,
    pub shop: Vec<Option<ChampionId>>,
    pub board: Board,
    pub bench: Bench,
    pub item_bench: Vec<ItemId>,
    pub augments: Vec<AugmentDescriptor>,
    pub free_rerolls: u32,
    pub traits: Vec<TraitCount>,
    pub stats: PlayerStats,
    pub(crate) config: Arc<MatchConfig>,
}

impl Player {
    #[must_use]
    pub fn new(id: PlayerId, config: Arc<MatchConfig>) -> Self {
        Self {
            id,
            gold: config.starting_gold,
            level: config.starting_level,
            xp: config.xp_for_level(config.starting_level).unwrap_or(0),
            health: config.starting_health,
            alive: true,
            shop: vec![None; config.shop_size],
            board: Board::new(config.board_rows, config.board_cols),
            bench: Bench::new(config.bench_size),
            item_bench: Vec::new(),
            augments: Vec::new(),
            free_rerolls: 0,
            traits: Vec::new(),
            stats: PlayerStats::default(),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Board cap at the current level.
    #[must_use]
    pub fn max_board_units(&self) -> usize {
        self.config.max_units(self.level)
    }

    /// Board units, then bench units.
    pub fn champions(&self) -> impl Iterator<Item = &Champion> {
        self.board.champions().chain(self.bench.champions())
    }

    pub fn champions_mut(&mut self) -> impl Iterator<Item = &mut Champion> {
        self.board.champions_mut().chain(self.bench.champions_mut())
    }

    #[must_use]
    pub fn unit_count(&self) -> usize {
        self.board.count() + self.bench.count()
    }

    /// Pool copies represented by everything this player owns of `id`.
    #[must_use]
    pub fn base_copies_of(&self, id: &str) -> u32 {
        self.champions()
            .filter(|c| c.id().as_str() == id)
            .map(Champion::base_copies)
            .sum()
    }

    /// Add an item to the item bench. `false` if it is full.
    pub fn receive_item(&mut self, item: ItemId) -> bool {
        if self.item_bench.len() >= self.config.item_bench_size {
            return false;
        }
        self.item_bench.push(item);
        true
    }

    #[must_use]
    pub fn has_augment(&self, id: &str) -> bool {
        self.augments.iter().any(|a| a.id.as_str() == id)
    }

    /// Record an augment. Hooks are fired by the caller.
    pub fn select_augment(&mut self, augment: AugmentDescriptor) {
        self.augments.push(augment);
    }

    /// Fresh HP and mana for every board unit.
    pub fn reset_for_combat(&mut self) {
        for champion in self.board.champions_mut() {
            champion.reset_for_combat();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_starting_state() {
        let config = Arc::new(MatchConfig::default());
        let player = Player::new(PlayerId::new(2), Arc::clone(&config));
        assert_eq!(player.gold, 0);
        assert_eq!(player.level, 1);
        assert_eq!(player.xp, 0);
        assert_eq!(player.health, 100);
        assert!(player.is_alive());
        assert_eq!(player.shop.len(), 5);
        assert_eq!(player.bench.size(), 9);
        assert_eq!(player.board.rows() * player.board.cols(), 28);
        assert_eq!(player.max_board_units(), 1);
    }

    #[test]
    fn test_starting_level_seeds_xp() {
        let mut config = MatchConfig::default();
        config.starting_level = 3;
        let player = Player::new(PlayerId::new(0), Arc::new(config));
        assert_eq!(player.xp, 6);
    }

    #[test]
    fn test_item_bench_capacity() {
        let mut config = MatchConfig::default();
        config.item_bench_size = 1;
        let mut player = Player::new(PlayerId::new(0), Arc::new(config));
        assert!(player.receive_item(ItemId::new("TFT_Item_BFSword")));
        assert!(!player.receive_item(ItemId::new("TFT_Item_ChainVest")));
        assert_eq!(player.item_bench.len(), 1);
    }
}
