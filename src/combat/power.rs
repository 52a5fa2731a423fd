//! Power score model.

use crate::core::CombatWeights;
use crate::units::Champion;

/// Weighted stat sum of one unit.
///
/// Shields count like extra HP. A unit firing missiles gets its attack
/// speed term twice.
#[must_use]
pub fn champion_power(champion: &Champion, weights: &CombatWeights) -> f64 {
    let stats = &champion.stats;
    let mut attack_speed = stats.attack_speed * weights.attack_speed;
    if champion.fires_missiles {
        attack_speed *= 2.0;
    }
    (stats.max_hp + champion.shield) * weights.hp
        + stats.attack_damage * weights.attack_damage
        + stats.ability_power * weights.ability_power
        + stats.armor * weights.armor
        + stats.magic_resist * weights.magic_resist
        + attack_speed
        + f64::from(champion.cost()) * weights.cost
        + champion.items().len() as f64 * weights.item
}

/// Sum of unit powers plus a per-unit team size bonus.
#[must_use]
pub fn team_power(team: &[&Champion], weights: &CombatWeights) -> f64 {
    let units: f64 = team.iter().map(|c| champion_power(c, weights)).sum();
    units + team.len() as f64 * weights.team_size
}
