//! Match configuration.
//!
//! `MatchConfig` carries every rule table the simulator consults: economy,
//! leveling, shop odds, pool sizes, round damage, special-round schedules,
//! combat weights, and feature flags. The core reads it; callers own it.
//!
//! ## Presets
//!
//! - [`MatchConfig::default`]: standard 8-player ruleset, every feature on
//! - [`MatchConfig::mvp`]: bare economy and combat, no items/traits/augments/carousel
//! - [`MatchConfig::training`]: items, traits and carousel, no augments
//! - [`MatchConfig::full`]: everything on, longer planning turns
//! - [`MatchConfig::fast`]: 4 players, 20 rounds, for tests and smoke runs
//!
//! ```
//! use rust_autobattler::core::MatchConfig;
//!
//! let config = MatchConfig::fast().with_players(2);
//! assert_eq!(config.players, 2);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::position::Layout;

/// Number of cost tiers in the shop odds table.
pub const COST_TIERS: usize = 6;

/// Copies per champion when the tier has no configured pool size.
pub const DEFAULT_POOL_COPIES: u32 = 10;

/// Which optional subsystems are active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlags {
    pub items: bool,
    pub traits: bool,
    pub augments: bool,
    pub carousel: bool,
}

impl FeatureFlags {
    #[must_use]
    pub const fn all() -> Self {
        Self {
            items: true,
            traits: true,
            augments: true,
            carousel: true,
        }
    }

    #[must_use]
    pub const fn none() -> Self {
        Self {
            items: false,
            traits: false,
            augments: false,
            carousel: false,
        }
    }
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self::all()
    }
}

/// Weights of the statistical combat power model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CombatWeights {
    pub hp: f64,
    pub attack_damage: f64,
    pub ability_power: f64,
    pub armor: f64,
    pub magic_resist: f64,
    pub attack_speed: f64,
    /// Per unit, times its cost tier.
    pub cost: f64,
    /// Per equipped item.
    pub item: f64,
    /// Per unit on the team.
    pub team_size: f64,
    /// Standard deviation of the noise added to the win probability.
    pub noise_std: f64,
    pub min_win_probability: f64,
    pub max_win_probability: f64,
}

impl Default for CombatWeights {
    fn default() -> Self {
        Self {
            hp: 0.5,
            attack_damage: 2.0,
            ability_power: 0.3,
            armor: 2.0,
            magic_resist: 2.0,
            attack_speed: 100.0,
            cost: 150.0,
            item: 200.0,
            team_size: 100.0,
            noise_std: 0.1,
            min_win_probability: 0.1,
            max_win_probability: 0.9,
        }
    }
}

/// Every rule table of a match.
///
/// Tables indexed by level or cost are 0-based: entry 0 is level 1 / cost 1.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub players: usize,
    /// The match ends after the round in which the counter exceeds this.
    pub max_rounds: u32,
    /// Actions per player per planning phase, `pass` included.
    pub max_actions_per_round: u32,

    pub starting_gold: u32,
    pub starting_health: u32,
    pub starting_level: u32,
    pub max_level: u32,

    pub round_gold: u32,
    pub interest_cap: u32,
    /// Gold held per point of interest.
    pub interest_step: u32,
    pub xp_cost: u32,
    pub xp_per_purchase: u32,
    pub refresh_cost: u32,

    pub shop_size: usize,
    pub bench_size: usize,
    pub board_rows: usize,
    pub board_cols: usize,
    pub item_bench_size: usize,
    pub max_items_per_champion: usize,

    /// Total XP required to reach each level.
    pub xp_to_level: Vec<u32>,
    pub max_units_by_level: Vec<usize>,
    /// Per level, probability of each cost tier.
    pub shop_odds: Vec<Vec<f64>>,
    /// Copies of each champion per cost tier.
    pub pool_copies: Vec<u32>,
    /// `(first_round, base_damage)` brackets, ascending.
    pub round_damage: Vec<(u32, u32)>,

    pub carousel_rounds: Vec<u32>,
    pub minion_rounds: Vec<u32>,
    /// Minion rounds that drop an item component.
    pub minion_loot_rounds: Vec<u32>,
    pub augment_rounds: Vec<u32>,
    pub augment_offer_size: usize,

    pub combat: CombatWeights,
    /// Reward by final placement, 1st first.
    pub placement_rewards: Vec<f64>,
    pub features: FeatureFlags,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            players: 8,
            max_rounds: 48,
            max_actions_per_round: 20,
            starting_gold: 0,
            starting_health: 100,
            starting_level: 1,
            max_level: 11,
            round_gold: 5,
            interest_cap: 5,
            interest_step: 10,
            xp_cost: 4,
            xp_per_purchase: 4,
            refresh_cost: 2,
            shop_size: 5,
            bench_size: 9,
            board_rows: 4,
            board_cols: 7,
            item_bench_size: 10,
            max_items_per_champion: 3,
            xp_to_level: vec![0, 2, 6, 10, 20, 36, 56, 80, 108, 136, 99_999],
            max_units_by_level: (1..=11).collect(),
            shop_odds: vec![
                vec![1.00, 0.00, 0.00, 0.00, 0.00, 0.00],
                vec![1.00, 0.00, 0.00, 0.00, 0.00, 0.00],
                vec![0.75, 0.25, 0.00, 0.00, 0.00, 0.00],
                vec![0.55, 0.30, 0.15, 0.00, 0.00, 0.00],
                vec![0.45, 0.33, 0.20, 0.02, 0.00, 0.00],
                vec![0.30, 0.40, 0.25, 0.05, 0.00, 0.00],
                vec![0.19, 0.30, 0.35, 0.15, 0.01, 0.00],
                vec![0.16, 0.20, 0.35, 0.25, 0.04, 0.00],
                vec![0.09, 0.15, 0.30, 0.30, 0.16, 0.00],
                vec![0.05, 0.10, 0.20, 0.40, 0.25, 0.00],
                vec![0.01, 0.02, 0.12, 0.50, 0.35, 0.00],
            ],
            pool_copies: vec![29, 22, 18, 12, 10, 9, 8, 7],
            round_damage: vec![(1, 0), (4, 2), (7, 3), (10, 4), (14, 5), (18, 6), (22, 7)],
            carousel_rounds: vec![9, 18, 27, 36],
            minion_rounds: vec![1, 2, 3],
            minion_loot_rounds: vec![2, 3],
            augment_rounds: vec![10, 20, 29],
            augment_offer_size: 3,
            combat: CombatWeights::default(),
            placement_rewards: vec![40.0, 35.0, 30.0, 25.0, 20.0, 15.0, 10.0, 5.0],
            features: FeatureFlags::all(),
        }
    }
}

impl MatchConfig {
    /// Bare economy and combat.
    #[must_use]
    pub fn mvp() -> Self {
        Self {
            max_actions_per_round: 15,
            features: FeatureFlags::none(),
            ..Self::default()
        }
    }

    /// Items, traits and carousel; no augments.
    #[must_use]
    pub fn training() -> Self {
        Self {
            features: FeatureFlags {
                augments: false,
                ..FeatureFlags::all()
            },
            ..Self::default()
        }
    }

    /// Every feature, longer planning turns.
    #[must_use]
    pub fn full() -> Self {
        Self {
            max_actions_per_round: 25,
            ..Self::default()
        }
    }

    /// Small and short.
    #[must_use]
    pub fn fast() -> Self {
        Self {
            players: 4,
            max_actions_per_round: 10,
            max_rounds: 20,
            features: FeatureFlags::none(),
            ..Self::default()
        }
    }

    /// Set the player count.
    #[must_use]
    pub fn with_players(mut self, players: usize) -> Self {
        self.players = players;
        self
    }

    #[must_use]
    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    #[must_use]
    pub fn with_features(mut self, features: FeatureFlags) -> Self {
        self.features = features;
        self
    }

    #[must_use]
    pub fn with_max_actions(mut self, max_actions: u32) -> Self {
        self.max_actions_per_round = max_actions;
        self
    }

    #[must_use]
    pub fn with_starting_gold(mut self, gold: u32) -> Self {
        self.starting_gold = gold;
        self
    }

    #[must_use]
    pub fn with_combat_noise(mut self, std_dev: f64) -> Self {
        self.combat.noise_std = std_dev;
        self
    }

    /// Board and bench dimensions.
    #[must_use]
    pub fn layout(&self) -> Layout {
        Layout::new(self.board_rows, self.board_cols, self.bench_size)
    }

    /// Total XP needed to reach `level`, if the table defines it.
    #[must_use]
    pub fn xp_for_level(&self, level: u32) -> Option<u32> {
        let idx = level.checked_sub(1)? as usize;
        self.xp_to_level.get(idx).copied()
    }

    /// Board unit cap at `level`.
    ///
    /// Levels past the table use its last entry.
    #[must_use]
    pub fn max_units(&self, level: u32) -> usize {
        let idx = level.saturating_sub(1) as usize;
        self.max_units_by_level
            .get(idx)
            .or_else(|| self.max_units_by_level.last())
            .copied()
            .unwrap_or(level as usize)
    }

    /// Cost-tier probabilities at `level`, clamped to the table.
    #[must_use]
    pub fn shop_odds_for(&self, level: u32) -> &[f64] {
        let idx = (level.saturating_sub(1) as usize).min(self.shop_odds.len().saturating_sub(1));
        self.shop_odds.get(idx).map_or(&[], |row| row.as_slice())
    }

    /// Pool copies per champion of `cost`.
    #[must_use]
    pub fn pool_copies_for(&self, cost: u8) -> u32 {
        (cost as usize)
            .checked_sub(1)
            .and_then(|idx| self.pool_copies.get(idx))
            .copied()
            .unwrap_or(DEFAULT_POOL_COPIES)
    }

    /// Base damage dealt by a winning team in `round`.
    ///
    /// Rounds past the last bracket use its value.
    #[must_use]
    pub fn base_damage(&self, round: u32) -> u32 {
        self.round_damage
            .iter()
            .rev()
            .find(|(first, _)| *first <= round)
            .map_or(0, |(_, damage)| *damage)
    }

    #[must_use]
    pub fn is_carousel_round(&self, round: u32) -> bool {
        self.carousel_rounds.contains(&round)
    }

    #[must_use]
    pub fn is_minion_round(&self, round: u32) -> bool {
        self.minion_rounds.contains(&round)
    }

    #[must_use]
    pub fn is_minion_loot_round(&self, round: u32) -> bool {
        self.minion_loot_rounds.contains(&round)
    }

    #[must_use]
    pub fn is_augment_round(&self, round: u32) -> bool {
        self.features.augments && self.augment_rounds.contains(&round)
    }

    /// Stage of `round`: one more than the carousels already passed.
    #[must_use]
    pub fn stage_for_round(&self, round: u32) -> u32 {
        1 + self.carousel_rounds.iter().filter(|c| **c < round).count() as u32
    }

    /// Reward for finishing at `placement` (1-based). Zero past the table.
    #[must_use]
    pub fn placement_reward(&self, placement: usize) -> f64 {
        placement
            .checked_sub(1)
            .and_then(|idx| self.placement_rewards.get(idx))
            .copied()
            .unwrap_or(0.0)
    }

    /// Check structural sanity.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(2..=8).contains(&self.players) {
            return Err(ConfigError::PlayerCount(self.players));
        }
        let levels = self.max_level as usize;
        for (table, actual) in [
            ("xp_to_level", self.xp_to_level.len()),
            ("max_units_by_level", self.max_units_by_level.len()),
            ("shop_odds", self.shop_odds.len()),
        ] {
            if actual < levels {
                return Err(ConfigError::TableLength {
                    table,
                    expected: levels,
                    actual,
                });
            }
        }
        if let Some(row) = self.shop_odds.iter().find(|row| row.iter().sum::<f64>() <= 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "shop_odds",
                reason: format!("row {row:?} has no positive weight"),
            });
        }
        if self.xp_to_level.windows(2).any(|w| w[0] > w[1]) {
            return Err(ConfigError::InvalidValue {
                field: "xp_to_level",
                reason: "thresholds must be non-decreasing".into(),
            });
        }
        if self.round_damage.windows(2).any(|w| w[0].0 >= w[1].0) {
            return Err(ConfigError::InvalidValue {
                field: "round_damage",
                reason: "brackets must be strictly ascending".into(),
            });
        }
        if self.board_rows == 0 || self.board_cols == 0 {
            return Err(ConfigError::InvalidValue {
                field: "board",
                reason: "board needs at least one cell".into(),
            });
        }
        if self.starting_level == 0 || self.starting_level > self.max_level {
            return Err(ConfigError::InvalidValue {
                field: "starting_level",
                reason: format!("must be within 1..={}", self.max_level),
            });
        }
        Ok(())
    }
}
