//! A small built-in roster.
//!
//! Enough champions in every cost tier for full matches, a handful of
//! traits, item components with two completed recipes, and a few catalog
//! augments (some handled by built-in augment modules, some not). Used by
//! tests, benchmarks, and callers that have no data files at hand.

use super::augment::AugmentDescriptor;
use super::champion::{AbilityDescriptor, BaseStats, ChampionTemplate};
use super::item::ItemTemplate;
use super::params::EffectParams;
use super::registry::Catalog;
use super::traits::TraitTemplate;

fn stats(hp: f64, attack_damage: f64, armor: f64, attack_speed: f64, range: u32) -> BaseStats {
    BaseStats {
        hp: Some(hp),
        attack_damage: Some(attack_damage),
        armor: Some(armor),
        magic_resist: Some(armor),
        attack_speed: Some(attack_speed),
        range: Some(range),
        crit_chance: Some(0.25),
        crit_multiplier: Some(1.4),
        initial_mana: Some(0.0),
        mana: Some(60.0),
    }
}

fn champion(name: &str, cost: u8, base: BaseStats, traits: &[&str]) -> ChampionTemplate {
    let mut template = ChampionTemplate::new(format!("TFT16_{name}"), name, cost).with_stats(base);
    for t in traits {
        template = template.with_trait(*t);
    }
    template
}

/// Build the sample catalog.
///
/// ```
/// use rust_autobattler::catalog::sample_catalog;
///
/// let catalog = sample_catalog();
/// assert!(catalog.champion_by_name("Rumble").is_some());
/// assert!(catalog.champions_by_cost(5).count() > 0);
/// ```
#[must_use]
pub fn sample_catalog() -> Catalog {
    let champions = [
        champion("Garen", 1, stats(650.0, 55.0, 40.0, 0.6, 1), &["Defender", "Demacia"]),
        champion("Nasus", 1, stats(650.0, 50.0, 40.0, 0.6, 1), &["Bruiser"]),
        champion("Poppy", 1, stats(600.0, 50.0, 45.0, 0.6, 1), &["Yordle", "Defender"]),
        champion("Lulu", 1, stats(450.0, 40.0, 15.0, 0.65, 4), &["Yordle", "Sorcerer"]),
        champion("Jarvan", 1, stats(600.0, 55.0, 40.0, 0.6, 1), &["Demacia", "Bruiser"]),
        champion("Vi", 2, stats(700.0, 60.0, 40.0, 0.65, 1), &["Bruiser"]),
        champion("Sion", 2, stats(750.0, 60.0, 45.0, 0.6, 1), &["Defender"]),
        champion("Teemo", 2, stats(500.0, 45.0, 20.0, 0.7, 4), &["Yordle", "Sorcerer"]),
        champion("Sona", 2, stats(500.0, 40.0, 20.0, 0.65, 4), &["Demacia", "Sorcerer"]),
        champion("Rumble", 3, stats(800.0, 60.0, 45.0, 0.65, 1), &["Yordle", "Bruiser"]),
        champion("Ahri", 3, stats(600.0, 45.0, 25.0, 0.75, 4), &["Sorcerer"]),
        champion("Darius", 3, stats(850.0, 70.0, 50.0, 0.65, 1), &["Bruiser"]),
        champion("Jinx", 4, stats(700.0, 70.0, 30.0, 0.8, 4), &["Sorcerer"]),
        champion("Sejuani", 4, stats(1000.0, 70.0, 60.0, 0.6, 1), &["Defender"]),
        champion("Kennen", 4, stats(800.0, 60.0, 45.0, 0.7, 2), &["Yordle"]),
        champion("Azir", 5, stats(900.0, 65.0, 40.0, 0.75, 4), &["Sorcerer"]),
        champion("Galio", 5, stats(1200.0, 80.0, 70.0, 0.6, 1), &["Demacia", "Defender"]),
    ];

    let components = [
        ("TFT_Item_BFSword", "B.F. Sword", "AD", 10.0),
        ("TFT_Item_RecurveBow", "Recurve Bow", "AS", 10.0),
        ("TFT_Item_NeedlesslyLargeRod", "Needlessly Large Rod", "AP", 10.0),
        ("TFT_Item_TearOfTheGoddess", "Tear of the Goddess", "Mana", 15.0),
        ("TFT_Item_ChainVest", "Chain Vest", "Armor", 20.0),
        ("TFT_Item_NegatronCloak", "Negatron Cloak", "MR", 20.0),
        ("TFT_Item_GiantsBelt", "Giant's Belt", "Health", 150.0),
        ("TFT_Item_SparringGloves", "Sparring Gloves", "CritChance", 20.0),
    ];

    let mut builder = Catalog::builder();

    for template in champions {
        let ability = AbilityDescriptor {
            name: format!("{} ability", template.name),
            description: String::new(),
            params: EffectParams::new().with("Damage", 200 * i64::from(template.cost)),
        };
        builder = builder.champion(template.with_ability(ability));
    }

    for (id, name, stat, amount) in components {
        builder = builder.item(
            ItemTemplate::new(id, name).with_effects(EffectParams::new().with(stat, amount)),
        );
    }
    builder = builder
        .item(
            ItemTemplate::new("TFT_Item_Deathblade", "Deathblade")
                .with_recipe("TFT_Item_BFSword", "TFT_Item_BFSword"),
        )
        .item(
            ItemTemplate::new("TFT_Item_InfinityEdge", "Infinity Edge")
                .with_recipe("TFT_Item_BFSword", "TFT_Item_SparringGloves"),
        );

    builder = builder
        .trait_template(TraitTemplate::new("Bruiser", "Bruiser", &[2, 4, 6]))
        .trait_template(TraitTemplate::new("Defender", "Defender", &[2, 4, 6]))
        .trait_template(TraitTemplate::new("Demacia", "Demacia", &[3, 5]))
        .trait_template(TraitTemplate::new("Sorcerer", "Sorcerer", &[2, 4]))
        .trait_template(TraitTemplate::new("Yordle", "Yordle", &[2, 4, 6]));

    builder
        .augment(
            AugmentDescriptor::new("TFT16_Augment_RumbleCarry", "Artillery Barrage")
                .with_description(
                    "Gain a Rumble. Your strongest Rumble gains Range and fires missiles.",
                )
                .with_effects(EffectParams::new().with("MaxRange", 7)),
        )
        // Superseded by the built-in descriptor of the same id.
        .augment(
            AugmentDescriptor::new("TFT16_Augment_Epoch", "Epoch")
                .with_effects(EffectParams::new().with("XPAmount", 1)),
        )
        .augment(
            AugmentDescriptor::new("TFT_Augment_PandorasItems", "Pandora's Items").with_tier(2),
        )
        .augment(
            AugmentDescriptor::new("TFT_Augment_CyberneticImplants", "Cybernetic Implants")
                .with_tier(2)
                .with_effects(EffectParams::new().with("Health", 200).with("AD", 15)),
        )
        .build()
}
