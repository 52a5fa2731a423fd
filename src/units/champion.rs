//! Champion instances.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::catalog::{BaseStats, ChampionId, ChampionTemplate, ItemId};
use crate::core::{ActionError, Hex};

/// Highest star level.
pub const MAX_STARS: u8 = 4;

/// Mutable combat stats.
///
/// Recomputed from the template by [`Champion::reset_live_stats`]; augment
/// passives add their bonuses on top after each reset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LiveStats {
    pub max_hp: f64,
    pub current_hp: f64,
    pub attack_damage: f64,
    pub ability_power: f64,
    pub armor: f64,
    pub magic_resist: f64,
    pub attack_speed: f64,
    pub range: u32,
    pub crit_chance: f64,
    pub crit_multiplier: f64,
    pub mana: f64,
    pub max_mana: f64,
}

impl LiveStats {
    /// Star-scaled stats for a template. Only HP and AD scale.
    #[must_use]
    pub fn from_template(stats: &BaseStats, stars: u8) -> Self {
        let multiplier = Champion::star_multiplier(stars);
        let max_hp = stats.hp_or_default() * multiplier;
        Self {
            max_hp,
            current_hp: max_hp,
            attack_damage: stats.attack_damage_or_default() * multiplier,
            ability_power: BaseStats::BASE_ABILITY_POWER,
            armor: stats.armor_or_default(),
            magic_resist: stats.magic_resist_or_default(),
            attack_speed: stats.attack_speed_or_default(),
            range: stats.range_or_default(),
            crit_chance: stats.crit_chance_or_default(),
            crit_multiplier: stats.crit_multiplier_or_default(),
            mana: stats.initial_mana_or_default(),
            max_mana: stats.mana_or_default(),
        }
    }
}

/// One owned unit.
#[derive(Clone, Debug)]
pub struct Champion {
    template: Arc<ChampionTemplate>,
    stars: u8,
    items: SmallVec<[ItemId; 3]>,
    pub stats: LiveStats,
    /// Set while the unit sits on a board cell.
    pub position: Option<Hex>,
    pub alive: bool,
    pub stunned: bool,
    pub channeling: bool,
    /// Flat shield granted by augment passives.
    pub shield: f64,
    /// Missile barrage flag granted by augment passives.
    pub fires_missiles: bool,
}

impl Champion {
    /// New instance at `stars` (clamped to 1..=4).
    #[must_use]
    pub fn new(template: Arc<ChampionTemplate>, stars: u8) -> Self {
        let stars = stars.clamp(1, MAX_STARS);
        let stats = LiveStats::from_template(&template.stats, stars);
        Self {
            template,
            stars,
            items: SmallVec::new(),
            stats,
            position: None,
            alive: true,
            stunned: false,
            channeling: false,
            shield: 0.0,
            fires_missiles: false,
        }
    }

    /// HP and AD multiplier for a star level.
    #[must_use]
    pub fn star_multiplier(stars: u8) -> f64 {
        match stars {
            0 | 1 => 1.0,
            2 => 1.8,
            3 => 3.24,
            _ => 5.832,
        }
    }

    #[must_use]
    pub fn template(&self) -> &Arc<ChampionTemplate> {
        &self.template
    }

    #[must_use]
    pub fn id(&self) -> &ChampionId {
        &self.template.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.template.name
    }

    #[must_use]
    pub fn cost(&self) -> u8 {
        self.template.cost
    }

    #[must_use]
    pub fn stars(&self) -> u8 {
        self.stars
    }

    #[must_use]
    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    /// Pool copies this unit stands for: `3^(stars-1)`.
    #[must_use]
    pub fn base_copies(&self) -> u32 {
        3u32.pow(u32::from(self.stars) - 1)
    }

    /// Same champion at the same star level.
    #[must_use]
    pub fn matches(&self, id: &ChampionId, stars: u8) -> bool {
        self.stars == stars && self.template.id == *id
    }

    /// Restore star-scaled template stats.
    pub fn reset_live_stats(&mut self) {
        self.stats = LiveStats::from_template(&self.template.stats, self.stars);
    }

    /// Clear flags set by augment passives.
    pub fn clear_augment_flags(&mut self) {
        self.shield = 0.0;
        self.fires_missiles = false;
    }

    /// Full HP, starting mana, no status effects.
    pub fn reset_for_combat(&mut self) {
        self.stats.current_hp = self.stats.max_hp;
        self.stats.mana = self.template.stats.initial_mana_or_default();
        self.alive = true;
        self.stunned = false;
        self.channeling = false;
    }

    /// Raise star level by one and rescale stats. `false` at max stars.
    pub fn upgrade_star(&mut self) -> bool {
        if self.stars >= MAX_STARS {
            return false;
        }
        self.stars += 1;
        self.reset_live_stats();
        true
    }

    /// Equip an item.
    pub fn add_item(&mut self, item: ItemId, max_items: usize) -> Result<(), ActionError> {
        if self.items.len() >= max_items {
            return Err(ActionError::ItemSlotsFull(self.items.len()));
        }
        self.items.push(item);
        Ok(())
    }

    /// Unequip the item at `index`.
    pub fn remove_item(&mut self, index: usize) -> Option<ItemId> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Take every equipped item off.
    pub fn take_items(&mut self) -> SmallVec<[ItemId; 3]> {
        std::mem::take(&mut self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_catalog;

    fn rumble(stars: u8) -> Champion {
        let catalog = sample_catalog();
        Champion::new(Arc::clone(catalog.champion("TFT16_Rumble").unwrap()), stars)
    }

    #[test]
    fn test_star_scaling_hp_and_ad_only() {
        let one = rumble(1);
        let two = rumble(2);
        assert_eq!(one.stats.max_hp, 800.0);
        assert!((two.stats.max_hp - 800.0 * 1.8).abs() < 1e-9);
        assert!((two.stats.attack_damage - 60.0 * 1.8).abs() < 1e-9);
        assert_eq!(two.stats.armor, one.stats.armor);
        assert_eq!(two.stats.attack_speed, one.stats.attack_speed);
    }

    #[test]
    fn test_base_copies() {
        assert_eq!(rumble(1).base_copies(), 1);
        assert_eq!(rumble(2).base_copies(), 3);
        assert_eq!(rumble(3).base_copies(), 9);
        assert_eq!(rumble(4).base_copies(), 27);
    }

    #[test]
    fn test_upgrade_caps_at_four() {
        let mut unit = rumble(3);
        assert!(unit.upgrade_star());
        assert_eq!(unit.stars(), 4);
        assert!(!unit.upgrade_star());
        assert!((unit.stats.max_hp - 800.0 * 5.832).abs() < 1e-9);
    }

    #[test]
    fn test_stars_clamped_on_construction() {
        assert_eq!(rumble(0).stars(), 1);
        assert_eq!(rumble(9).stars(), 4);
    }

    #[test]
    fn test_reset_live_stats_drops_bonuses() {
        let mut unit = rumble(1);
        unit.stats.range += 7;
        unit.stats.attack_damage += 50.0;
        unit.reset_live_stats();
        assert_eq!(unit.stats.range, 1);
        assert_eq!(unit.stats.attack_damage, 60.0);
    }

    #[test]
    fn test_items_capped() {
        let mut unit = rumble(1);
        for _ in 0..3 {
            unit.add_item(ItemId::new("TFT_Item_BFSword"), 3).unwrap();
        }
        assert_eq!(
            unit.add_item(ItemId::new("TFT_Item_BFSword"), 3),
            Err(ActionError::ItemSlotsFull(3))
        );
        assert_eq!(unit.remove_item(0), Some(ItemId::new("TFT_Item_BFSword")));
        assert_eq!(unit.remove_item(5), None);
        assert_eq!(unit.items().len(), 2);
    }

    #[test]
    fn test_reset_for_combat() {
        let mut unit = rumble(1);
        unit.stats.current_hp = 10.0;
        unit.alive = false;
        unit.stunned = true;
        unit.reset_for_combat();
        assert_eq!(unit.stats.current_hp, unit.stats.max_hp);
        assert!(unit.alive);
        assert!(!unit.stunned);
    }
}
