//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use rust_autobattler::augments::AugmentRegistry;
use rust_autobattler::catalog::sample_catalog;
use rust_autobattler::core::{Action, GameRng, MatchConfig};
use rust_autobattler::engine::{MatchEngine, RunResult};
use rust_autobattler::rounds::{GameRound, GameSummary};

/// Upper bound on decisions in any test match.
pub const DECISION_LIMIT: usize = 50_000;

pub fn engine(config: MatchConfig) -> MatchEngine {
    MatchEngine::new(
        Arc::new(sample_catalog()),
        config,
        Arc::new(AugmentRegistry::builtin()),
    )
    .expect("valid config")
}

/// Play to the end, passing at every decision.
pub fn play_passive(engine: &mut MatchEngine) -> GameSummary {
    play_with(engine, |_, _| Action::Pass)
}

/// Play to the end with a seeded uniformly random legal-action agent.
pub fn play_random(engine: &mut MatchEngine, agent_seed: u64) -> GameSummary {
    let mut rng = GameRng::new(agent_seed);
    play_with(engine, move |engine, player| {
        let legal = engine
            .action_mask(player)
            .expect("mask")
            .legal_actions();
        rng.choose(&legal).copied().unwrap_or(Action::Pass)
    })
}

/// Play to the end, asking `agent` for every action.
pub fn play_with(
    engine: &mut MatchEngine,
    mut agent: impl FnMut(&MatchEngine, rust_autobattler::core::PlayerId) -> Action,
) -> GameSummary {
    for _ in 0..DECISION_LIMIT {
        match engine.run_until_decision_point().expect("run") {
            RunResult::Decision(decision) => {
                let action = agent(engine, decision.player);
                engine.apply_action(decision.player, action).expect("apply");
            }
            RunResult::GameOver(summary) => return summary,
        }
    }
    panic!("match did not finish within {DECISION_LIMIT} decisions");
}

/// Copies held by players plus copies left in the pool equal copies minted.
pub fn assert_pool_conserved(game: &GameRound) {
    let owned: u32 = game
        .players()
        .values()
        .flat_map(|p| p.champions())
        .map(|c| c.base_copies())
        .sum();
    let pool = game.pool();
    assert_eq!(pool.total_acquired(), owned, "acquired copies differ from owned copies");
    assert_eq!(
        pool.total_available() + owned,
        pool.total_minted(),
        "copies were created or destroyed"
    );
}

/// No board holds more units than its owner's level allows.
pub fn assert_boards_within_cap(game: &GameRound) {
    for player in game.players().values() {
        assert!(
            player.board.count() <= player.max_board_units(),
            "{} has {} units on board, cap {}",
            player.id,
            player.board.count(),
            player.max_board_units()
        );
        assert!(player.board.is_consistent());
    }
}
