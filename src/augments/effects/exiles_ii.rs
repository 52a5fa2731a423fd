//! Exiles II: units with no adjacent ally start combat shielded.

use crate::catalog::{AugmentDescriptor, EffectParams};
use crate::core::Hex;

use super::super::hooks::{AugmentModule, HookContext, HookEvent, HookTable};
use super::super::result::AugmentResult;

pub const ID: &str = "TFT16_Augment_Exiles2";

#[must_use]
pub fn module() -> AugmentModule {
    let descriptor = AugmentDescriptor::new(ID, "Exiles II")
        .with_description("Units that start combat with no adjacent allies gain a 30% max HP shield for 10 seconds.")
        .with_tier(2)
        .with_effects(
            EffectParams::new()
                .with("ShieldPercent", 0.30)
                .with("Duration", 10),
        );
    AugmentModule::new(ID, HookTable::new().with(HookEvent::Passive, passive))
        .with_descriptor(descriptor)
        .with_eligible_rounds(&[20, 29])
}

fn passive(ctx: &mut HookContext<'_>, params: &EffectParams) -> AugmentResult {
    let percent = params.f64_or("ShieldPercent", 0.30);
    let board = &mut ctx.player.board;
    for champion in board.champions_mut() {
        champion.shield = 0.0;
    }

    let isolated: Vec<Hex> = board
        .occupied()
        .map(|(hex, _)| hex)
        .filter(|hex| !board.has_adjacent_unit(*hex))
        .collect();

    let mut result = AugmentResult::neutral();
    for hex in isolated {
        if let Some(champion) = board.get_mut(hex) {
            champion.shield = champion.stats.max_hp * percent;
            result.affected_champions.push(champion.id().as_str().to_string());
        }
    }
    result
}
