//! Artillery Barrage: a free Rumble, and the best Rumble fires missiles
//! with extra range.

use std::cmp::Ordering;

use crate::catalog::EffectParams;
use crate::units::Champion;

use super::super::helpers::{grant, owned_by_id};
use super::super::hooks::{AugmentModule, HookContext, HookEvent, HookTable};
use super::super::result::AugmentResult;

pub const ID: &str = "TFT16_Augment_RumbleCarry";
const CARRY: &str = "Rumble";
const DEFAULT_BONUS_RANGE: i64 = 7;

/// No synthetic descriptor: the catalog record supplies the parameters.
#[must_use]
pub fn module() -> AugmentModule {
    AugmentModule::new(
        ID,
        HookTable::new()
            .with(HookEvent::OnSelect, on_select)
            .with(HookEvent::Passive, passive),
    )
}

fn on_select(ctx: &mut HookContext<'_>, _params: &EffectParams) -> AugmentResult {
    grant(ctx, CARRY)
}

fn passive(ctx: &mut HookContext<'_>, params: &EffectParams) -> AugmentResult {
    let bonus = u32::try_from(params.i64_or("MaxRange", DEFAULT_BONUS_RANGE).max(0)).unwrap_or(0);
    let Some(carry_id) = ctx
        .pool
        .catalog()
        .find_champion(CARRY)
        .map(|t| t.id.clone())
    else {
        return AugmentResult::failure("Rumble is not in the catalog");
    };

    let mut rumbles = owned_by_id(ctx, carry_id.as_str());
    if rumbles.is_empty() {
        return AugmentResult::failure("no Rumble owned");
    }
    for rumble in &mut rumbles {
        rumble.stats.range = rumble.template().stats.range_or_default();
        rumble.fires_missiles = false;
    }

    let mut best = 0;
    for i in 1..rumbles.len() {
        if carry_rank(&*rumbles[i], &*rumbles[best]) == Ordering::Greater {
            best = i;
        }
    }
    let carry = &mut rumbles[best];
    carry.stats.range += bonus;
    carry.fires_missiles = true;

    AugmentResult {
        affected_champions: vec![carry_id.as_str().to_string()],
        ..AugmentResult::neutral()
    }
}

/// Board before bench, then stars, then current HP.
fn carry_rank(a: &Champion, b: &Champion) -> Ordering {
    (a.position.is_some(), a.stars())
        .cmp(&(b.position.is_some(), b.stars()))
        .then_with(|| a.stats.current_hp.total_cmp(&b.stats.current_hp))
}
