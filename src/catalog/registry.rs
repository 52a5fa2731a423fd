//! The template catalog.
//!
//! `Catalog` is built once, then only read. Iteration order is by id so
//! that anything seeded from the catalog (the pool, shop sampling) is
//! reproducible across runs.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::augment::{AugmentDescriptor, AugmentId};
use super::champion::{ChampionId, ChampionTemplate};
use super::item::{ItemId, ItemTemplate};
use super::traits::{TraitId, TraitTemplate};

/// Serializable catalog contents, as produced by an external data loader.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogData {
    pub champions: Vec<ChampionTemplate>,
    pub items: Vec<ItemTemplate>,
    pub traits: Vec<TraitTemplate>,
    pub augments: Vec<AugmentDescriptor>,
}

/// Read-only lookup of champion, item, trait and augment templates.
///
/// ## Example
///
/// ```
/// use rust_autobattler::catalog::{Catalog, ChampionTemplate};
///
/// let catalog = Catalog::builder()
///     .champion(ChampionTemplate::new("TFT16_Garen", "Garen", 1).with_trait("Defender"))
///     .build();
///
/// assert_eq!(catalog.champion("TFT16_Garen").map(|c| c.cost), Some(1));
/// assert!(catalog.champion_by_name("Garen").is_some());
/// assert!(catalog.champion("TFT16_Nobody").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    champions: FxHashMap<ChampionId, Arc<ChampionTemplate>>,
    champion_names: FxHashMap<String, ChampionId>,
    champion_order: Vec<ChampionId>,
    items: FxHashMap<ItemId, Arc<ItemTemplate>>,
    item_names: FxHashMap<String, ItemId>,
    item_order: Vec<ItemId>,
    traits: FxHashMap<TraitId, TraitTemplate>,
    augments: FxHashMap<AugmentId, AugmentDescriptor>,
    augment_order: Vec<AugmentId>,
}

impl Catalog {
    #[must_use]
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Build from loader output. Later duplicates replace earlier ones.
    #[must_use]
    pub fn from_data(data: CatalogData) -> Self {
        let mut builder = Self::builder();
        builder.data = data;
        builder.build()
    }

    // === Champions ===

    #[must_use]
    pub fn champion(&self, id: &str) -> Option<&Arc<ChampionTemplate>> {
        self.champions.get(id)
    }

    #[must_use]
    pub fn champion_by_name(&self, name: &str) -> Option<&Arc<ChampionTemplate>> {
        self.champion_names
            .get(name)
            .and_then(|id| self.champions.get(id))
    }

    /// Resolve either an id or a display name.
    #[must_use]
    pub fn find_champion(&self, key: &str) -> Option<&Arc<ChampionTemplate>> {
        self.champion(key).or_else(|| self.champion_by_name(key))
    }

    /// All champions, ordered by id.
    pub fn champions(&self) -> impl Iterator<Item = &Arc<ChampionTemplate>> {
        self.champion_order
            .iter()
            .filter_map(|id| self.champions.get(id))
    }

    /// Champions of one cost tier, ordered by id.
    pub fn champions_by_cost(&self, cost: u8) -> impl Iterator<Item = &Arc<ChampionTemplate>> {
        self.champions().filter(move |c| c.cost == cost)
    }

    /// Champions carrying a trait, ordered by id.
    pub fn champions_with_trait<'a>(
        &'a self,
        trait_id: &'a str,
    ) -> impl Iterator<Item = &'a Arc<ChampionTemplate>> + 'a {
        self.champions().filter(move |c| c.has_trait(trait_id))
    }

    #[must_use]
    pub fn champion_count(&self) -> usize {
        self.champions.len()
    }

    // === Items ===

    #[must_use]
    pub fn item(&self, id: &str) -> Option<&Arc<ItemTemplate>> {
        self.items.get(id)
    }

    #[must_use]
    pub fn item_by_name(&self, name: &str) -> Option<&Arc<ItemTemplate>> {
        self.item_names.get(name).and_then(|id| self.items.get(id))
    }

    /// Basic components, ordered by id.
    #[must_use]
    pub fn item_components(&self) -> Vec<ItemId> {
        self.item_order
            .iter()
            .filter(|id| self.items.get(*id).is_some_and(|item| item.is_component()))
            .cloned()
            .collect()
    }

    // === Traits ===

    #[must_use]
    pub fn trait_template(&self, id: &str) -> Option<&TraitTemplate> {
        self.traits.get(id)
    }

    // === Augments ===

    #[must_use]
    pub fn augment(&self, id: &str) -> Option<&AugmentDescriptor> {
        self.augments.get(id)
    }

    /// All catalog augments, ordered by id.
    pub fn augments(&self) -> impl Iterator<Item = &AugmentDescriptor> {
        self.augment_order
            .iter()
            .filter_map(|id| self.augments.get(id))
    }
}

/// Incremental catalog construction.
#[derive(Clone, Debug, Default)]
pub struct CatalogBuilder {
    data: CatalogData,
}

impl CatalogBuilder {
    #[must_use]
    pub fn champion(mut self, template: ChampionTemplate) -> Self {
        self.data.champions.push(template);
        self
    }

    #[must_use]
    pub fn item(mut self, template: ItemTemplate) -> Self {
        self.data.items.push(template);
        self
    }

    #[must_use]
    pub fn trait_template(mut self, template: TraitTemplate) -> Self {
        self.data.traits.push(template);
        self
    }

    #[must_use]
    pub fn augment(mut self, descriptor: AugmentDescriptor) -> Self {
        self.data.augments.push(descriptor);
        self
    }

    #[must_use]
    pub fn build(self) -> Catalog {
        let mut catalog = Catalog::default();

        for template in self.data.champions {
            catalog
                .champion_names
                .insert(template.name.clone(), template.id.clone());
            catalog
                .champions
                .insert(template.id.clone(), Arc::new(template));
        }
        for template in self.data.items {
            catalog
                .item_names
                .insert(template.name.clone(), template.id.clone());
            catalog.items.insert(template.id.clone(), Arc::new(template));
        }
        for template in self.data.traits {
            catalog.traits.insert(template.id.clone(), template);
        }
        for descriptor in self.data.augments {
            catalog.augments.insert(descriptor.id.clone(), descriptor);
        }

        catalog.champion_order = catalog.champions.keys().cloned().collect();
        catalog.champion_order.sort();
        catalog.item_order = catalog.items.keys().cloned().collect();
        catalog.item_order.sort();
        catalog.augment_order = catalog.augments.keys().cloned().collect();
        catalog.augment_order.sort();

        catalog
    }
}
