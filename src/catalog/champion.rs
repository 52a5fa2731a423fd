//! Champion templates.

use serde::{Deserialize, Serialize};

use super::params::EffectParams;
use super::traits::TraitId;

super::string_id!(
    /// Catalog id of a champion, e.g. `TFT16_Rumble`.
    ChampionId,
    "Champion"
);

/// Template stats. Any field may be missing from source data.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseStats {
    pub hp: Option<f64>,
    pub attack_damage: Option<f64>,
    pub armor: Option<f64>,
    pub magic_resist: Option<f64>,
    pub attack_speed: Option<f64>,
    pub range: Option<u32>,
    pub crit_chance: Option<f64>,
    pub crit_multiplier: Option<f64>,
    pub initial_mana: Option<f64>,
    pub mana: Option<f64>,
}

impl BaseStats {
    pub const DEFAULT_HP: f64 = 500.0;
    pub const DEFAULT_ATTACK_DAMAGE: f64 = 40.0;
    pub const DEFAULT_ARMOR: f64 = 20.0;
    pub const DEFAULT_MAGIC_RESIST: f64 = 20.0;
    pub const DEFAULT_ATTACK_SPEED: f64 = 0.6;
    pub const DEFAULT_RANGE: u32 = 1;
    pub const DEFAULT_CRIT_CHANCE: f64 = 0.25;
    pub const DEFAULT_CRIT_MULTIPLIER: f64 = 1.4;
    pub const DEFAULT_MANA: f64 = 100.0;
    pub const BASE_ABILITY_POWER: f64 = 100.0;

    #[must_use]
    pub fn hp_or_default(&self) -> f64 {
        self.hp.unwrap_or(Self::DEFAULT_HP)
    }

    #[must_use]
    pub fn attack_damage_or_default(&self) -> f64 {
        self.attack_damage.unwrap_or(Self::DEFAULT_ATTACK_DAMAGE)
    }

    #[must_use]
    pub fn armor_or_default(&self) -> f64 {
        self.armor.unwrap_or(Self::DEFAULT_ARMOR)
    }

    #[must_use]
    pub fn magic_resist_or_default(&self) -> f64 {
        self.magic_resist.unwrap_or(Self::DEFAULT_MAGIC_RESIST)
    }

    #[must_use]
    pub fn attack_speed_or_default(&self) -> f64 {
        self.attack_speed.unwrap_or(Self::DEFAULT_ATTACK_SPEED)
    }

    #[must_use]
    pub fn range_or_default(&self) -> u32 {
        self.range.unwrap_or(Self::DEFAULT_RANGE)
    }

    #[must_use]
    pub fn crit_chance_or_default(&self) -> f64 {
        self.crit_chance.unwrap_or(Self::DEFAULT_CRIT_CHANCE)
    }

    #[must_use]
    pub fn crit_multiplier_or_default(&self) -> f64 {
        self.crit_multiplier.unwrap_or(Self::DEFAULT_CRIT_MULTIPLIER)
    }

    #[must_use]
    pub fn initial_mana_or_default(&self) -> f64 {
        self.initial_mana.unwrap_or(0.0)
    }

    #[must_use]
    pub fn mana_or_default(&self) -> f64 {
        self.mana.unwrap_or(Self::DEFAULT_MANA)
    }
}

/// A champion's ability as described by the catalog.
///
/// The statistical combat model does not cast abilities; the descriptor is
/// carried for observation encoders and future effect code.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbilityDescriptor {
    pub name: String,
    pub description: String,
    pub params: EffectParams,
}

/// Immutable champion definition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChampionTemplate {
    pub id: ChampionId,
    pub name: String,
    /// Cost tier, 1 to 6.
    pub cost: u8,
    #[serde(default)]
    pub stats: BaseStats,
    #[serde(default)]
    pub traits: Vec<TraitId>,
    #[serde(default)]
    pub ability: Option<AbilityDescriptor>,
}

impl ChampionTemplate {
    pub fn new(id: impl Into<String>, name: impl Into<String>, cost: u8) -> Self {
        Self {
            id: ChampionId::new(id),
            name: name.into(),
            cost,
            stats: BaseStats::default(),
            traits: Vec::new(),
            ability: None,
        }
    }

    #[must_use]
    pub fn with_stats(mut self, stats: BaseStats) -> Self {
        self.stats = stats;
        self
    }

    #[must_use]
    pub fn with_trait(mut self, trait_id: impl Into<String>) -> Self {
        self.traits.push(TraitId::new(trait_id));
        self
    }

    #[must_use]
    pub fn with_ability(mut self, ability: AbilityDescriptor) -> Self {
        self.ability = Some(ability);
        self
    }

    #[must_use]
    pub fn has_trait(&self, trait_id: &str) -> bool {
        self.traits.iter().any(|t| t.as_str() == trait_id)
    }
}
