//! One pairwise fight.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GameRng, MatchConfig};
use crate::units::Champion;

use super::power::team_power;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombatWinner {
    TeamA,
    TeamB,
    Draw,
}

/// Result of one fight.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CombatOutcome {
    pub winner: CombatWinner,
    /// Health the loser loses. Zero on a draw.
    pub damage: u32,
    /// Noisy, clamped win probability used for team A.
    pub win_probability: f64,
    pub power_a: f64,
    pub power_b: f64,
}

/// Resolves fights with the weights and damage table of a match config.
///
/// ```
/// use rust_autobattler::combat::{CombatSimulator, CombatWinner};
/// use rust_autobattler::core::{GameRng, MatchConfig};
///
/// let config = MatchConfig::default();
/// let sim = CombatSimulator::new(&config);
/// let outcome = sim.resolve(&[], &[], 5, &mut GameRng::new(0));
/// assert_eq!(outcome.winner, CombatWinner::Draw);
/// assert_eq!(outcome.damage, 0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct CombatSimulator<'a> {
    config: &'a MatchConfig,
}

impl<'a> CombatSimulator<'a> {
    #[must_use]
    pub fn new(config: &'a MatchConfig) -> Self {
        Self { config }
    }

    /// Fight `team_a` against `team_b` in `round`.
    ///
    /// The same teams, round and RNG state always give the same outcome.
    pub fn resolve(
        &self,
        team_a: &[&Champion],
        team_b: &[&Champion],
        round: u32,
        rng: &mut GameRng,
    ) -> CombatOutcome {
        let weights = &self.config.combat;
        let power_a = team_power(team_a, weights);
        let power_b = team_power(team_b, weights);

        let (winner, win_probability) = match (team_a.is_empty(), team_b.is_empty()) {
            (true, true) => (CombatWinner::Draw, 0.5),
            (false, true) => (CombatWinner::TeamA, 1.0),
            (true, false) => (CombatWinner::TeamB, 0.0),
            (false, false) => {
                let total = power_a + power_b;
                let base = if total > 0.0 { power_a / total } else { 0.5 };
                let noisy = base + rng.gen_gaussian(0.0, weights.noise_std);
                let p = noisy.clamp(weights.min_win_probability, weights.max_win_probability);
                let winner = if rng.gen_f64() < p {
                    CombatWinner::TeamA
                } else {
                    CombatWinner::TeamB
                };
                (winner, p)
            }
        };

        let damage = match winner {
            CombatWinner::TeamA => self.damage(round, team_a),
            CombatWinner::TeamB => self.damage(round, team_b),
            CombatWinner::Draw => 0,
        };
        debug!(round, power_a, power_b, ?winner, damage, "combat resolved");

        CombatOutcome {
            winner,
            damage,
            win_probability,
            power_a,
            power_b,
        }
    }

    /// Base damage for the round plus one per star of each surviving winner.
    #[must_use]
    pub fn damage(&self, round: u32, winners: &[&Champion]) -> u32 {
        let stars: u32 = winners
            .iter()
            .filter(|c| c.alive)
            .map(|c| u32::from(c.stars()))
            .sum();
        self.config.base_damage(round) + stars
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::catalog::{sample_catalog, Catalog};

    fn unit(catalog: &Catalog, id: &str, stars: u8) -> Champion {
        Champion::new(Arc::clone(catalog.champion(id).unwrap()), stars)
    }

    #[test]
    fn test_empty_versus_team_is_automatic_win() {
        let catalog = sample_catalog();
        let config = MatchConfig::default();
        let sim = CombatSimulator::new(&config);
        let a = unit(&catalog, "TFT16_Garen", 2);
        let b = unit(&catalog, "TFT16_Vi", 1);
        let outcome = sim.resolve(&[], &[&a, &b], 10, &mut GameRng::new(1));
        assert_eq!(outcome.winner, CombatWinner::TeamB);
        assert_eq!(outcome.damage, config.base_damage(10) + 3);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let catalog = sample_catalog();
        let config = MatchConfig::default();
        let sim = CombatSimulator::new(&config);
        let a = unit(&catalog, "TFT16_Garen", 1);
        let b = unit(&catalog, "TFT16_Jinx", 1);
        let first = sim.resolve(&[&a], &[&b], 12, &mut GameRng::new(77));
        let second = sim.resolve(&[&a], &[&b], 12, &mut GameRng::new(77));
        assert_eq!(first, second);
    }

    #[test]
    fn test_win_probability_is_clamped() {
        let catalog = sample_catalog();
        let config = MatchConfig::default();
        let sim = CombatSimulator::new(&config);
        let weak = unit(&catalog, "TFT16_Lulu", 1);
        let strong: Vec<Champion> = (0..8).map(|_| unit(&catalog, "TFT16_Galio", 4)).collect();
        let strong_refs: Vec<&Champion> = strong.iter().collect();
        let mut rng = GameRng::new(3);
        let mut weak_wins = 0;
        for _ in 0..400 {
            let outcome = sim.resolve(&[&weak], &strong_refs, 20, &mut rng);
            assert!(outcome.win_probability >= 0.1 && outcome.win_probability <= 0.9);
            if outcome.winner == CombatWinner::TeamA {
                weak_wins += 1;
            }
        }
        // the floor keeps upsets possible
        assert!(weak_wins > 10);
    }

    #[test]
    fn test_dead_units_add_no_damage() {
        let catalog = sample_catalog();
        let config = MatchConfig::default();
        let sim = CombatSimulator::new(&config);
        let alive = unit(&catalog, "TFT16_Garen", 3);
        let mut dead = unit(&catalog, "TFT16_Garen", 3);
        dead.alive = false;
        assert_eq!(sim.damage(10, &[&alive, &dead]), config.base_damage(10) + 3);
    }
}
