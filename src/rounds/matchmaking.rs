//! Random pairing with anti-repeat preference.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{GameRng, PlayerId, PlayerMap};

/// How many past opponents a player avoids.
pub const RECENT_OPPONENT_MEMORY: usize = 3;

/// One fight of a combat round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pairing {
    Duel(PlayerId, PlayerId),
    /// The odd player out. Counts as a win with no damage either way.
    Ghost(PlayerId),
}

impl Pairing {
    /// Whether `player` takes part.
    #[must_use]
    pub fn involves(&self, player: PlayerId) -> bool {
        match *self {
            Pairing::Duel(a, b) => a == player || b == player,
            Pairing::Ghost(a) => a == player,
        }
    }
}

/// Remembers each player's most recent opponents.
#[derive(Clone, Debug)]
pub struct Matchmaker {
    recent: PlayerMap<SmallVec<[PlayerId; RECENT_OPPONENT_MEMORY]>>,
}

impl Matchmaker {
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            recent: PlayerMap::with_default(player_count),
        }
    }

    /// Most recent opponents, oldest first.
    #[must_use]
    pub fn recent_opponents(&self, player: PlayerId) -> &[PlayerId] {
        self.recent.get(player).map(|r| r.as_slice()).unwrap_or_default()
    }

    /// Pair every player in `alive`.
    ///
    /// Players are shuffled, then each takes the first remaining candidate
    /// outside its recent-opponent memory, or the first remaining
    /// candidate if there is none. An odd player out gets a ghost.
    pub fn pair(&mut self, alive: &[PlayerId], rng: &mut GameRng) -> Vec<Pairing> {
        let mut queue: Vec<PlayerId> = alive.to_vec();
        rng.shuffle(&mut queue);
        queue.reverse();

        let mut pairings = Vec::with_capacity(queue.len().div_ceil(2));
        while let Some(first) = queue.pop() {
            if queue.is_empty() {
                pairings.push(Pairing::Ghost(first));
                break;
            }
            let recent = self.recent_opponents(first);
            // queue is reversed, so the front of the shuffled order is the back
            let pick = queue
                .iter()
                .rposition(|c| !recent.contains(c))
                .unwrap_or(queue.len() - 1);
            let second = queue.remove(pick);
            self.record(first, second);
            pairings.push(Pairing::Duel(first, second));
        }
        pairings
    }

    /// Remember a fight for both sides.
    pub fn record(&mut self, a: PlayerId, b: PlayerId) {
        for (player, opponent) in [(a, b), (b, a)] {
            if let Some(recent) = self.recent.get_mut(player) {
                if recent.len() == RECENT_OPPONENT_MEMORY {
                    recent.remove(0);
                }
                recent.push(opponent);
            }
        }
    }

    pub fn clear(&mut self) {
        for (_, recent) in self.recent.iter_mut() {
            recent.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_count_pairs_everyone_once() {
        let mut mm = Matchmaker::new(8);
        let alive: Vec<PlayerId> = PlayerId::all(8).collect();
        let pairings = mm.pair(&alive, &mut GameRng::new(4));
        assert_eq!(pairings.len(), 4);
        for p in &alive {
            assert_eq!(pairings.iter().filter(|x| x.involves(*p)).count(), 1);
        }
        assert!(pairings.iter().all(|p| matches!(p, Pairing::Duel(..))));
    }

    #[test]
    fn test_odd_count_gets_ghost() {
        let mut mm = Matchmaker::new(8);
        let alive: Vec<PlayerId> = PlayerId::all(7).collect();
        let pairings = mm.pair(&alive, &mut GameRng::new(4));
        assert_eq!(pairings.len(), 4);
        assert_eq!(
            pairings.iter().filter(|p| matches!(p, Pairing::Ghost(_))).count(),
            1
        );
    }

    #[test]
    fn test_memory_is_bounded() {
        let mut mm = Matchmaker::new(8);
        let me = PlayerId::new(0);
        for i in 1..=5 {
            mm.record(me, PlayerId::new(i));
        }
        assert_eq!(
            mm.recent_opponents(me),
            &[PlayerId::new(3), PlayerId::new(4), PlayerId::new(5)]
        );
        assert_eq!(mm.recent_opponents(PlayerId::new(5)), &[me]);
    }

    #[test]
    fn test_avoids_recent_opponents_when_possible() {
        let mut mm = Matchmaker::new(4);
        let alive: Vec<PlayerId> = PlayerId::all(4).collect();
        let mut rng = GameRng::new(9);
        // with four players, each round's duels avoid the previous pairing
        // whenever an unseen candidate remains
        let first = mm.pair(&alive, &mut rng);
        let second = mm.pair(&alive, &mut rng);
        for pairing in &second {
            assert!(!first.contains(pairing));
        }
    }

    #[test]
    fn test_two_players_always_meet() {
        let mut mm = Matchmaker::new(2);
        let alive: Vec<PlayerId> = PlayerId::all(2).collect();
        let mut rng = GameRng::new(1);
        for _ in 0..5 {
            let pairings = mm.pair(&alive, &mut rng);
            assert_eq!(pairings.len(), 1);
            assert!(matches!(pairings[0], Pairing::Duel(..)));
        }
    }
}
