//! Building blocks shared by augment bodies.

use crate::catalog::EffectParams;
use crate::units::Champion;

use super::hooks::HookContext;
use super::result::AugmentResult;

/// Grant `XPAmount` XP and `RerollCount` free rerolls.
pub fn epoch_apply(ctx: &mut HookContext<'_>, params: &EffectParams) -> AugmentResult {
    let xp = non_negative(params.i64_or("XPAmount", 0));
    let rerolls = non_negative(params.i64_or("RerollCount", 0));
    ctx.player.gain_xp(xp);
    ctx.player.free_rerolls += rerolls;
    AugmentResult {
        xp_delta: xp,
        rerolls_granted: rerolls,
        ..AugmentResult::neutral()
    }
}

/// Give the player a free champion, by id or display name.
pub fn grant(ctx: &mut HookContext<'_>, champion: &str) -> AugmentResult {
    match ctx.player.grant_champion(champion, ctx.pool) {
        Ok(outcome) => AugmentResult {
            grants: vec![outcome.champion.as_str().to_string()],
            ..AugmentResult::neutral()
        },
        Err(err) => AugmentResult::failure(format!("could not grant {champion}: {err}")),
    }
}

/// Every owned unit matching `id`, board first.
pub fn owned_by_id<'a>(ctx: &'a mut HookContext<'_>, id: &str) -> Vec<&'a mut Champion> {
    ctx.player
        .champions_mut()
        .filter(|c| c.id().as_str() == id)
        .collect()
}

fn non_negative(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}
