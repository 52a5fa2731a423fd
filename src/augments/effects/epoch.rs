//! Epoch: XP and free rerolls now and at every new stage.

use crate::catalog::{AugmentDescriptor, EffectParams};

use super::super::helpers::epoch_apply;
use super::super::hooks::{AugmentModule, HookEvent, HookTable};

pub const ID: &str = "TFT16_Augment_Epoch";

#[must_use]
pub fn module() -> AugmentModule {
    let descriptor = AugmentDescriptor::new(ID, "Epoch")
        .with_description("Gain 4 XP and 3 free rerolls now and at the start of each stage.")
        .with_tier(1)
        .with_effects(
            EffectParams::new()
                .with("XPAmount", 4)
                .with("RerollCount", 3),
        );
    AugmentModule::new(
        ID,
        HookTable::new()
            .with(HookEvent::OnSelect, epoch_apply)
            .with(HookEvent::OnStageStart, epoch_apply),
    )
    .with_descriptor(descriptor)
    .with_eligible_rounds(&[10])
}
