//! Epoch+: the later, larger Epoch.

use crate::catalog::{AugmentDescriptor, EffectParams};

use super::super::helpers::epoch_apply;
use super::super::hooks::{AugmentModule, HookEvent, HookTable};

pub const ID: &str = "TFT16_Augment_EpochPlus";

#[must_use]
pub fn module() -> AugmentModule {
    let descriptor = AugmentDescriptor::new(ID, "Epoch+")
        .with_description("Gain 8 XP and 3 free rerolls now and at the start of each stage.")
        .with_tier(2)
        .with_effects(
            EffectParams::new()
                .with("XPAmount", 8)
                .with("RerollCount", 3),
        );
    AugmentModule::new(
        ID,
        HookTable::new()
            .with(HookEvent::OnSelect, epoch_apply)
            .with(HookEvent::OnStageStart, epoch_apply),
    )
    .with_descriptor(descriptor)
    .with_eligible_rounds(&[20])
}
