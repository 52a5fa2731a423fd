//! Item templates.

use serde::{Deserialize, Serialize};

use super::params::EffectParams;

super::string_id!(
    /// Catalog id of an item, e.g. `TFT_Item_BFSword`.
    ItemId,
    "Item"
);

/// Immutable item definition.
///
/// Components have an empty recipe; completed items list the two
/// components they combine from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemTemplate {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub composition: Vec<ItemId>,
    #[serde(default)]
    pub effects: EffectParams,
    #[serde(default)]
    pub unique: bool,
}

impl ItemTemplate {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(id),
            name: name.into(),
            composition: Vec::new(),
            effects: EffectParams::default(),
            unique: false,
        }
    }

    #[must_use]
    pub fn with_recipe(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.composition = vec![ItemId::new(first), ItemId::new(second)];
        self
    }

    #[must_use]
    pub fn with_effects(mut self, effects: EffectParams) -> Self {
        self.effects = effects;
        self
    }

    /// Whether this is a basic component.
    #[must_use]
    pub fn is_component(&self) -> bool {
        self.composition.is_empty()
    }
}
