//! Augment selection and hook dispatch inside real matches.

mod common;

use std::sync::Arc;

use rust_autobattler::augments::{AugmentModule, AugmentRegistry, AugmentResult, HookContext, HookEvent, HookTable};
use rust_autobattler::catalog::{sample_catalog, AugmentDescriptor, Catalog, EffectParams};
use rust_autobattler::core::{MatchConfig, PlayerId};
use rust_autobattler::engine::MatchEngine;
use rust_autobattler::rounds::GameRound;

use common::{assert_pool_conserved, play_passive};

/// Sample champions and items, no catalog augments.
fn catalog_without_augments() -> Catalog {
    let sample = sample_catalog();
    let mut builder = Catalog::builder();
    for champion in sample.champions() {
        builder = builder.champion((**champion).clone());
    }
    builder.build()
}

fn stipend(ctx: &mut HookContext<'_>, params: &EffectParams) -> AugmentResult {
    let gold = params.i64_or("Gold", 0).max(0);
    ctx.player.gold += gold as u32;
    AugmentResult {
        gold_delta: gold,
        ..AugmentResult::neutral()
    }
}

fn stipend_module() -> AugmentModule {
    AugmentModule::new(
        "Test_Augment_Stipend",
        HookTable::new().with(HookEvent::OnRoundStart, stipend),
    )
    .with_descriptor(
        AugmentDescriptor::new("Test_Augment_Stipend", "Stipend")
            .with_effects(EffectParams::new().with("Gold", 2)),
    )
    .with_eligible_rounds(&[3])
}

/// Epoch is the only augment offered in round 10 here; it pays out on pick
/// and again when stage 3 begins in round 19, the last round played.
#[test]
fn test_epoch_pays_on_pick_and_on_stage_start() {
    let mut engine = MatchEngine::new(
        Arc::new(catalog_without_augments()),
        MatchConfig::default().with_players(2).with_max_rounds(18),
        Arc::new(AugmentRegistry::builtin()),
    )
    .unwrap();
    engine.reset(11);
    let summary = play_passive(&mut engine);
    assert_eq!(summary.rounds_played, 19);

    let game = engine.game().unwrap();
    for player in game.players().values() {
        assert_eq!(player.augments.len(), 1);
        assert!(player.has_augment("TFT16_Augment_Epoch"));
        assert_eq!(player.free_rerolls, 6);
    }
    assert_pool_conserved(game);
}

/// A module registered from outside the crate runs like a built-in one.
#[test]
fn test_custom_module_hooks_fire() {
    let mut registry = AugmentRegistry::new();
    registry.register(stipend_module());
    let config = MatchConfig::default()
        .with_players(3)
        .with_max_rounds(6);
    let config = MatchConfig {
        augment_rounds: vec![3],
        ..config
    };
    let mut game = GameRound::new(
        Arc::new(catalog_without_augments()),
        Arc::new(config),
        Arc::new(registry),
        5,
    );

    for _ in 0..2 {
        game.advance_round();
        assert!(game.start_planning().is_empty());
    }
    game.advance_round();
    game.start_planning();
    let picks = game.run_augment_selection();
    assert_eq!(picks.len(), 3);
    assert!(picks.iter().all(|(_, id, result)| id.as_str() == "Test_Augment_Stipend" && result.is_noop()));

    game.advance_round();
    let before: Vec<u32> = game.players().values().map(|p| p.gold).collect();
    let reports = game.start_planning();
    assert_eq!(reports.len(), 3);
    for ((_, _, result), player) in reports.iter().zip(game.players().values()) {
        assert_eq!(result.gold_delta, 2);
        assert!(player.gold >= before[player.id.index()] + 2);
    }
}

/// Artillery Barrage grants a Rumble on pick; its passive makes the best
/// Rumble fire missiles, recomputed from scratch every combat.
#[test]
fn test_artillery_barrage_carry_selection() {
    let catalog = Arc::new(sample_catalog());
    let config = Arc::new(MatchConfig::default());
    let registry = AugmentRegistry::builtin();
    let mut pool = rust_autobattler::pool::ChampionPool::new(Arc::clone(&catalog), &config);
    let mut player = rust_autobattler::players::Player::new(PlayerId::new(0), Arc::clone(&config));
    let mut rng = rust_autobattler::core::GameRng::new(1);
    let augment = registry
        .descriptor("TFT16_Augment_RumbleCarry", &catalog)
        .unwrap();
    player.select_augment(augment.clone());

    let mut ctx = HookContext::new(&mut player, &mut pool, &mut rng, 10);
    let picked = registry.apply_hook(&mut ctx, &augment, HookEvent::OnSelect);
    assert_eq!(picked.grants, vec!["TFT16_Rumble".to_string()]);
    registry.apply_all_passives(&mut ctx);
    registry.apply_all_passives(&mut ctx);

    let rumble = player.champions().next().unwrap();
    assert!(rumble.fires_missiles);
    assert_eq!(rumble.stats.range, 1 + 7);
    assert_eq!(pool.acquired("TFT16_Rumble"), 1);
}
