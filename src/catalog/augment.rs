//! Augment descriptors.

use serde::{Deserialize, Serialize};

use super::params::EffectParams;

super::string_id!(
    /// Catalog id of an augment, e.g. `TFT16_Augment_Epoch`.
    AugmentId,
    "Augment"
);

/// Immutable augment definition.
///
/// Comes either from the catalog or from a built-in augment module that
/// supplies its own descriptor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AugmentDescriptor {
    pub id: AugmentId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tier: Option<u8>,
    #[serde(default)]
    pub effects: EffectParams,
}

impl AugmentDescriptor {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: AugmentId::new(id),
            name: name.into(),
            description: String::new(),
            tier: None,
            effects: EffectParams::default(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_tier(mut self, tier: u8) -> Self {
        self.tier = Some(tier);
        self
    }

    #[must_use]
    pub fn with_effects(mut self, effects: EffectParams) -> Self {
        self.effects = effects;
        self
    }
}
