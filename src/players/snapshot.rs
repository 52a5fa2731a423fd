//! Serializable views of a player.
//!
//! Snapshots hold raw values only (ids, counts, flat positions). Turning
//! them into tensors is the job of the agent-side encoder.

use serde::{Deserialize, Serialize};

use crate::core::{Layout, Location};
use crate::units::Champion;

use super::player::Player;
use super::traits::TraitCount;

/// One unit as seen by an observer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnitSnapshot {
    pub id: String,
    pub name: String,
    pub cost: u8,
    pub stars: u8,
    /// Flat position index.
    pub position: usize,
    pub items: Vec<String>,
    pub max_hp: f64,
    pub attack_damage: f64,
    pub range: u32,
    pub shield: f64,
    pub fires_missiles: bool,
}

impl UnitSnapshot {
    fn new(champion: &Champion, position: usize) -> Self {
        Self {
            id: champion.id().as_str().to_string(),
            name: champion.name().to_string(),
            cost: champion.cost(),
            stars: champion.stars(),
            position,
            items: champion.items().iter().map(|i| i.as_str().to_string()).collect(),
            max_hp: champion.stats.max_hp,
            attack_damage: champion.stats.attack_damage,
            range: champion.stats.range,
            shield: champion.shield,
            fires_missiles: champion.fires_missiles,
        }
    }
}

/// Everything the acting player may see about themselves.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub player: u8,
    pub gold: u32,
    pub level: u32,
    pub xp: u32,
    pub health: u32,
    pub alive: bool,
    pub max_board_units: usize,
    pub free_rerolls: u32,
    pub win_streak: u32,
    pub loss_streak: u32,
    pub shop: Vec<Option<String>>,
    pub board: Vec<UnitSnapshot>,
    pub bench: Vec<UnitSnapshot>,
    pub item_bench: Vec<String>,
    pub augments: Vec<String>,
    pub traits: Vec<TraitCount>,
}

/// Public information about another player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OpponentSnapshot {
    pub player: u8,
    pub health: u32,
    pub alive: bool,
    pub level: u32,
    pub board: Vec<UnitSnapshot>,
}

impl Player {
    fn board_snapshots(&self, layout: &Layout) -> Vec<UnitSnapshot> {
        self.board
            .occupied()
            .filter_map(|(hex, c)| {
                let position = layout.index_of(Location::Board(hex))?;
                Some(UnitSnapshot::new(c, position))
            })
            .collect()
    }

    #[must_use]
    pub fn snapshot(&self) -> PlayerSnapshot {
        let layout = self.config.layout();
        let bench = self
            .bench
            .occupied()
            .filter_map(|(slot, c)| {
                let position = layout.index_of(Location::Bench(slot))?;
                Some(UnitSnapshot::new(c, position))
            })
            .collect();
        PlayerSnapshot {
            player: self.id.0,
            gold: self.gold,
            level: self.level,
            xp: self.xp,
            health: self.health,
            alive: self.alive,
            max_board_units: self.max_board_units(),
            free_rerolls: self.free_rerolls,
            win_streak: self.stats.win_streak,
            loss_streak: self.stats.loss_streak,
            shop: self
                .shop
                .iter()
                .map(|slot| slot.as_ref().map(|id| id.as_str().to_string()))
                .collect(),
            board: self.board_snapshots(&layout),
            bench,
            item_bench: self.item_bench.iter().map(|i| i.as_str().to_string()).collect(),
            augments: self.augments.iter().map(|a| a.id.as_str().to_string()).collect(),
            traits: self.traits.clone(),
        }
    }

    #[must_use]
    pub fn opponent_snapshot(&self) -> OpponentSnapshot {
        OpponentSnapshot {
            player: self.id.0,
            health: self.health,
            alive: self.alive,
            level: self.level,
            board: self.board_snapshots(&self.config.layout()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::catalog::sample_catalog;
    use crate::core::{Hex, MatchConfig, PlayerId};

    #[test]
    fn test_snapshot_uses_flat_positions() {
        let catalog = sample_catalog();
        let mut player = Player::new(PlayerId::new(3), Arc::new(MatchConfig::default()));
        let garen = Arc::clone(catalog.champion("TFT16_Garen").unwrap());
        player.board.place(Hex::new(1, 2), Champion::new(Arc::clone(&garen), 2)).unwrap();
        player.bench.push(Champion::new(garen, 1)).unwrap();

        let snap = player.snapshot();
        assert_eq!(snap.player, 3);
        assert_eq!(snap.board[0].position, 9);
        assert_eq!(snap.board[0].stars, 2);
        assert_eq!(snap.bench[0].position, 28);
        assert_eq!(snap.shop.len(), 5);

        let opp = player.opponent_snapshot();
        assert_eq!(opp.board.len(), 1);
        assert_eq!(opp.health, 100);
    }

    #[test]
    fn test_snapshot_serializes() {
        let player = Player::new(PlayerId::new(0), Arc::new(MatchConfig::default()));
        let json = serde_json::to_string(&player.snapshot()).unwrap();
        assert!(json.contains("\"gold\":0"));
    }
}
