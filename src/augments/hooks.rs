//! Hook signatures and per-augment tables.

use serde::{Deserialize, Serialize};

use crate::catalog::{AugmentDescriptor, EffectParams};
use crate::core::GameRng;
use crate::players::Player;
use crate::pool::ChampionPool;

use super::result::AugmentResult;

/// Lifecycle points at which augment hooks run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HookEvent {
    /// Once, when the augment is picked.
    OnSelect,
    /// Before every combat phase, after stats are reset.
    Passive,
    /// After planning setup each round.
    OnRoundStart,
    /// When a new stage begins.
    OnStageStart,
    /// After combat damage, for players still alive.
    OnCombatEnd,
}

impl HookEvent {
    pub const ALL: [HookEvent; 5] = [
        HookEvent::OnSelect,
        HookEvent::Passive,
        HookEvent::OnRoundStart,
        HookEvent::OnStageStart,
        HookEvent::OnCombatEnd,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            HookEvent::OnSelect => "on_select",
            HookEvent::Passive => "passive",
            HookEvent::OnRoundStart => "on_round_start",
            HookEvent::OnStageStart => "on_stage_start",
            HookEvent::OnCombatEnd => "on_combat_end",
        }
    }
}

impl std::fmt::Display for HookEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// What a hook may touch.
pub struct HookContext<'a> {
    pub player: &'a mut Player,
    pub pool: &'a mut ChampionPool,
    pub rng: &'a mut GameRng,
    pub round: u32,
}

impl<'a> HookContext<'a> {
    pub fn new(
        player: &'a mut Player,
        pool: &'a mut ChampionPool,
        rng: &'a mut GameRng,
        round: u32,
    ) -> Self {
        Self {
            player,
            pool,
            rng,
            round,
        }
    }
}

/// A hook body. Receives the effect parameters of the held augment.
pub type HookFn = fn(&mut HookContext<'_>, &EffectParams) -> AugmentResult;

/// Hooks implemented by one augment.
#[derive(Clone, Copy, Default)]
pub struct HookTable {
    pub on_select: Option<HookFn>,
    pub passive: Option<HookFn>,
    pub on_round_start: Option<HookFn>,
    pub on_stage_start: Option<HookFn>,
    pub on_combat_end: Option<HookFn>,
}

impl HookTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hook for an event (builder pattern).
    #[must_use]
    pub fn with(mut self, event: HookEvent, hook: HookFn) -> Self {
        *self.slot_mut(event) = Some(hook);
        self
    }

    #[must_use]
    pub fn get(&self, event: HookEvent) -> Option<HookFn> {
        match event {
            HookEvent::OnSelect => self.on_select,
            HookEvent::Passive => self.passive,
            HookEvent::OnRoundStart => self.on_round_start,
            HookEvent::OnStageStart => self.on_stage_start,
            HookEvent::OnCombatEnd => self.on_combat_end,
        }
    }

    fn slot_mut(&mut self, event: HookEvent) -> &mut Option<HookFn> {
        match event {
            HookEvent::OnSelect => &mut self.on_select,
            HookEvent::Passive => &mut self.passive,
            HookEvent::OnRoundStart => &mut self.on_round_start,
            HookEvent::OnStageStart => &mut self.on_stage_start,
            HookEvent::OnCombatEnd => &mut self.on_combat_end,
        }
    }

    /// Events with a hook, in lifecycle order.
    pub fn events(&self) -> impl Iterator<Item = HookEvent> + '_ {
        HookEvent::ALL.into_iter().filter(|e| self.get(*e).is_some())
    }
}

impl std::fmt::Debug for HookTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.events()).finish()
    }
}

/// One augment's full behaviour.
#[derive(Clone, Debug)]
pub struct AugmentModule {
    pub id: String,
    /// Used when the catalog has no record of this augment, and shadows
    /// the catalog record when it does.
    pub descriptor: Option<AugmentDescriptor>,
    /// Rounds in which the augment may be offered. `None` means any.
    pub eligible_rounds: Option<Vec<u32>>,
    pub hooks: HookTable,
}

impl AugmentModule {
    pub fn new(id: impl Into<String>, hooks: HookTable) -> Self {
        Self {
            id: id.into(),
            descriptor: None,
            eligible_rounds: None,
            hooks,
        }
    }

    #[must_use]
    pub fn with_descriptor(mut self, descriptor: AugmentDescriptor) -> Self {
        self.descriptor = Some(descriptor);
        self
    }

    #[must_use]
    pub fn with_eligible_rounds(mut self, rounds: &[u32]) -> Self {
        self.eligible_rounds = Some(rounds.to_vec());
        self
    }

    /// Whether this augment may be offered in `round`.
    #[must_use]
    pub fn is_eligible(&self, round: u32) -> bool {
        self.eligible_rounds
            .as_ref()
            .map_or(true, |rounds| rounds.contains(&round))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_: &mut HookContext<'_>, _: &EffectParams) -> AugmentResult {
        AugmentResult::neutral()
    }

    #[test]
    fn test_hook_table_lookup() {
        let table = HookTable::new()
            .with(HookEvent::OnSelect, noop)
            .with(HookEvent::Passive, noop);
        assert!(table.get(HookEvent::OnSelect).is_some());
        assert!(table.get(HookEvent::OnCombatEnd).is_none());
        let events: Vec<_> = table.events().collect();
        assert_eq!(events, vec![HookEvent::OnSelect, HookEvent::Passive]);
    }

    #[test]
    fn test_eligibility() {
        let anytime = AugmentModule::new("A", HookTable::new());
        assert!(anytime.is_eligible(1));
        let late = AugmentModule::new("B", HookTable::new()).with_eligible_rounds(&[20, 29]);
        assert!(late.is_eligible(29));
        assert!(!late.is_eligible(10));
    }
}
