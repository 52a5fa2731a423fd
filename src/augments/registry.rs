//! Id-keyed augment dispatch.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::catalog::{AugmentDescriptor, AugmentId, Catalog};

use super::effects;
use super::hooks::{AugmentModule, HookContext, HookEvent};
use super::result::AugmentResult;

/// Merged hook tables of every known augment.
///
/// ```
/// use rust_autobattler::augments::AugmentRegistry;
/// use rust_autobattler::catalog::sample_catalog;
///
/// let registry = AugmentRegistry::builtin();
/// let offers = registry.eligible_augments(20, &sample_catalog());
/// assert!(offers.iter().any(|a| a.id.as_str() == "TFT16_Augment_EpochPlus"));
/// assert!(!offers.iter().any(|a| a.id.as_str() == "TFT16_Augment_Epoch"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct AugmentRegistry {
    modules: FxHashMap<AugmentId, AugmentModule>,
    /// Registration order.
    order: Vec<AugmentId>,
}

impl AugmentRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every built-in augment module.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for module in effects::builtin_modules() {
            registry.register(module);
        }
        registry
    }

    /// Add a module. A later module with the same id replaces the earlier one.
    pub fn register(&mut self, module: AugmentModule) {
        let id = AugmentId::new(module.id.clone());
        if self.modules.insert(id.clone(), module).is_none() {
            self.order.push(id);
        }
    }

    #[must_use]
    pub fn module(&self, id: &str) -> Option<&AugmentModule> {
        self.modules.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.modules.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Run one hook of one augment.
    pub fn apply_hook(
        &self,
        ctx: &mut HookContext<'_>,
        augment: &AugmentDescriptor,
        event: HookEvent,
    ) -> AugmentResult {
        let Some(hook) = self
            .modules
            .get(augment.id.as_str())
            .and_then(|module| module.hooks.get(event))
        else {
            return AugmentResult::neutral();
        };
        let result = hook(ctx, &augment.effects);
        debug!(
            player = %ctx.player.id,
            augment = %augment.id,
            %event,
            success = result.success,
            "augment hook"
        );
        result
    }

    /// Run `event` for every augment the player holds, in pick order.
    pub fn apply_all(
        &self,
        ctx: &mut HookContext<'_>,
        event: HookEvent,
    ) -> Vec<(AugmentId, AugmentResult)> {
        let held = ctx.player.augments.clone();
        held.iter()
            .map(|augment| (augment.id.clone(), self.apply_hook(ctx, augment, event)))
            .collect()
    }

    /// Reset every owned unit, then run every held passive.
    pub fn apply_all_passives(&self, ctx: &mut HookContext<'_>) -> Vec<(AugmentId, AugmentResult)> {
        for champion in ctx.player.champions_mut() {
            champion.reset_live_stats();
            champion.clear_augment_flags();
        }
        self.apply_all(ctx, HookEvent::Passive)
    }

    /// Augments that may be offered in `round`.
    ///
    /// Synthetic descriptors come first, in registration order, and shadow
    /// catalog records with the same id. Catalog records follow in id
    /// order. Either kind is dropped when its module restricts it to other
    /// rounds.
    #[must_use]
    pub fn eligible_augments(&self, round: u32, catalog: &Catalog) -> Vec<AugmentDescriptor> {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut offers = Vec::new();

        for id in &self.order {
            let Some(module) = self.modules.get(id) else {
                continue;
            };
            if let Some(descriptor) = &module.descriptor {
                seen.insert(id.as_str());
                if module.is_eligible(round) {
                    offers.push(descriptor.clone());
                }
            }
        }

        for descriptor in catalog.augments() {
            if !seen.insert(descriptor.id.as_str()) {
                continue;
            }
            let eligible = self
                .modules
                .get(descriptor.id.as_str())
                .map_or(true, |m| m.is_eligible(round));
            if eligible {
                offers.push(descriptor.clone());
            }
        }
        offers
    }

    /// Descriptor for an id: synthetic first, then catalog.
    #[must_use]
    pub fn descriptor(&self, id: &str, catalog: &Catalog) -> Option<AugmentDescriptor> {
        self.modules
            .get(id)
            .and_then(|m| m.descriptor.clone())
            .or_else(|| catalog.augment(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::catalog::sample_catalog;
    use crate::core::{GameRng, MatchConfig, PlayerId};
    use crate::players::Player;
    use crate::pool::ChampionPool;

    #[test]
    fn test_builtin_modules_registered() {
        let registry = AugmentRegistry::builtin();
        for id in [
            "TFT16_Augment_RumbleCarry",
            "TFT16_Augment_Exiles2",
            "TFT16_Augment_Epoch",
            "TFT16_Augment_EpochPlus",
        ] {
            assert!(registry.contains(id), "{id} missing");
        }
    }

    #[test]
    fn test_unknown_augment_is_neutral() {
        let registry = AugmentRegistry::builtin();
        let config = Arc::new(MatchConfig::default());
        let mut pool = ChampionPool::new(Arc::new(sample_catalog()), &config);
        let mut player = Player::new(PlayerId::new(0), config);
        let mut rng = GameRng::new(0);
        let mut ctx = HookContext::new(&mut player, &mut pool, &mut rng, 1);

        let unknown = AugmentDescriptor::new("Nope", "Nope");
        let result = registry.apply_hook(&mut ctx, &unknown, HookEvent::OnSelect);
        assert_eq!(result, AugmentResult::neutral());
    }

    #[test]
    fn test_synthetic_shadows_catalog() {
        let registry = AugmentRegistry::builtin();
        let catalog = sample_catalog();
        let offers = registry.eligible_augments(10, &catalog);
        let epochs: Vec<_> = offers
            .iter()
            .filter(|a| a.id.as_str() == "TFT16_Augment_Epoch")
            .collect();
        assert_eq!(epochs.len(), 1);
        assert_eq!(epochs[0].effects.i64_or("XPAmount", 0), 4);
    }

    #[test]
    fn test_eligibility_by_round() {
        let registry = AugmentRegistry::builtin();
        let catalog = sample_catalog();
        let ids = |round| -> Vec<String> {
            registry
                .eligible_augments(round, &catalog)
                .into_iter()
                .map(|a| a.id.as_str().to_string())
                .collect()
        };
        let r10 = ids(10);
        assert!(r10.contains(&"TFT16_Augment_Epoch".to_string()));
        assert!(!r10.contains(&"TFT16_Augment_Exiles2".to_string()));
        assert!(r10.contains(&"TFT16_Augment_RumbleCarry".to_string()));
        let r29 = ids(29);
        assert!(r29.contains(&"TFT16_Augment_Exiles2".to_string()));
        assert!(!r29.contains(&"TFT16_Augment_EpochPlus".to_string()));
        // catalog-only augments are offered in any round
        assert!(r29.contains(&"TFT_Augment_PandorasItems".to_string()));
    }
}
