//! Combat records and final standings.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use crate::core::{MatchConfig, PlayerId, PlayerMap};
use crate::players::Player;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombatResultKind {
    Duel,
    Ghost,
    Minion,
}

/// One resolved fight, logged in the order fights happen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CombatRecord {
    pub round: u32,
    pub kind: CombatResultKind,
    pub player: PlayerId,
    /// `None` for ghost and minion fights.
    pub opponent: Option<PlayerId>,
    /// `None` on a draw.
    pub winner: Option<PlayerId>,
    pub damage: u32,
}

/// Final standing of one player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub player: PlayerId,
    /// 1 is best. Every surviving player is 1.
    pub placement: usize,
    pub reward: f64,
    pub rounds_survived: u32,
    pub health: u32,
}

/// Outcome of a finished match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    pub rounds_played: u32,
    /// Best placement first.
    pub placements: Vec<Placement>,
    /// The sole survivor, if exactly one player is left.
    pub winner: Option<PlayerId>,
}

impl GameSummary {
    #[must_use]
    pub fn placement_of(&self, player: PlayerId) -> Option<&Placement> {
        self.placements.iter().find(|p| p.player == player)
    }
}

/// Rank every player.
///
/// Survivors tie for first. Eliminated players follow, longest survival
/// first; between equal survival, the one eliminated later ranks higher.
#[must_use]
pub fn compute_placements(players: &PlayerMap<Player>, config: &MatchConfig) -> Vec<Placement> {
    let mut alive: Vec<&Player> = players.values().filter(|p| p.is_alive()).collect();
    alive.sort_by_key(|p| p.id);
    let mut eliminated: Vec<&Player> = players.values().filter(|p| !p.is_alive()).collect();
    eliminated.sort_by_key(|p| {
        (
            Reverse(p.stats.rounds_survived),
            Reverse(p.stats.elimination_order.unwrap_or(0)),
            p.id,
        )
    });

    let entry = |player: &Player, placement: usize| Placement {
        player: player.id,
        placement,
        reward: config.placement_reward(placement),
        rounds_survived: player.stats.rounds_survived,
        health: player.health,
    };

    let first_eliminated = alive.len() + 1;
    alive
        .iter()
        .map(|p| entry(p, 1))
        .chain(
            eliminated
                .iter()
                .enumerate()
                .map(|(i, p)| entry(p, first_eliminated + i)),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn players(n: usize) -> PlayerMap<Player> {
        let config = Arc::new(MatchConfig::default());
        PlayerMap::new(n, |id| Player::new(id, Arc::clone(&config)))
    }

    fn eliminate(player: &mut Player, survived: u32, order: u32) {
        player.alive = false;
        player.health = 0;
        player.stats.rounds_survived = survived;
        player.stats.elimination_order = Some(order);
    }

    #[test]
    fn test_survivors_tie_for_first() {
        let mut map = players(4);
        eliminate(&mut map[PlayerId::new(1)], 12, 2);
        eliminate(&mut map[PlayerId::new(3)], 10, 1);
        let placements = compute_placements(&map, &MatchConfig::default());

        let of = |i: u8| placements.iter().find(|p| p.player == PlayerId::new(i)).unwrap().placement;
        assert_eq!(of(0), 1);
        assert_eq!(of(2), 1);
        assert_eq!(of(1), 3);
        assert_eq!(of(3), 4);
    }

    #[test]
    fn test_same_round_eliminations_rank_by_order() {
        let mut map = players(3);
        eliminate(&mut map[PlayerId::new(0)], 15, 1);
        eliminate(&mut map[PlayerId::new(1)], 15, 2);
        let placements = compute_placements(&map, &MatchConfig::default());
        assert_eq!(placements[0].player, PlayerId::new(2));
        assert_eq!(placements[1].player, PlayerId::new(1));
        assert_eq!(placements[1].placement, 2);
        assert_eq!(placements[2].player, PlayerId::new(0));
        assert_eq!(placements[2].reward, 30.0);
    }
}
