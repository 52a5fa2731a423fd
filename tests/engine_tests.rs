//! Full-match tests driven through the decision-point protocol.

mod common;

use rust_autobattler::core::{Action, EngineError, FeatureFlags, MatchConfig, PlayerId};
use rust_autobattler::engine::RunResult;
use rust_autobattler::rounds::{CombatResultKind, RoundType};

use common::{assert_boards_within_cap, assert_pool_conserved, engine, play_passive, play_random, play_with};

const BENCH0: usize = 28;

/// With empty boards every duel is a draw, so everyone survives until the
/// round counter passes the limit.
#[test]
fn test_passive_match_reaches_round_limit() {
    let mut engine = engine(MatchConfig::fast());
    engine.reset(42);
    let summary = play_passive(&mut engine);

    assert_eq!(summary.rounds_played, 21);
    assert_eq!(summary.placements.len(), 4);
    assert!(summary.placements.iter().all(|p| p.placement == 1));
    assert!(summary.placements.iter().all(|p| p.health == 100));
    assert_eq!(summary.winner, None);
    assert!(engine.is_over());
}

/// Every player count from 2 to 8 finishes.
#[test]
fn test_match_finishes_for_all_player_counts() {
    for players in 2..=8 {
        let mut engine = engine(MatchConfig::fast().with_players(players).with_max_rounds(12));
        engine.reset(players as u64);
        let summary = play_random(&mut engine, 7);
        assert_eq!(summary.placements.len(), players);
        let best = summary.placements.iter().map(|p| p.placement).min();
        assert_eq!(best, Some(1));
    }
}

/// The same seeds and agent give the same match.
#[test]
fn test_match_is_deterministic() {
    let run = || {
        let mut engine = engine(MatchConfig::fast());
        engine.reset(1234);
        let summary = play_random(&mut engine, 99);
        (summary, engine.history(), engine.combat_log())
    };
    let (summary_a, history_a, log_a) = run();
    let (summary_b, history_b, log_b) = run();
    assert_eq!(summary_a, summary_b);
    assert_eq!(history_a, history_b);
    assert_eq!(log_a, log_b);
}

/// A player who fields their starter unit wins every duel against empty boards.
#[test]
fn test_fielded_unit_beats_empty_boards() {
    let mut engine = engine(MatchConfig::fast());
    engine.reset(5);
    let me = PlayerId::new(0);
    let summary = play_with(&mut engine, |engine, player| {
        let game = engine.game().expect("game");
        let p = game.player(player).expect("player");
        if player == me && p.board.count() == 0 && p.unit_at_position(BENCH0).is_some() {
            Action::MoveChampion { from: BENCH0, to: 0 }
        } else {
            Action::Pass
        }
    });

    let game = engine.game().unwrap();
    let stats = &game.player(me).unwrap().stats;
    assert_eq!(stats.losses, 0);
    assert!(stats.wins > 0);
    assert_eq!(summary.placement_of(me).unwrap().health, 100);

    let duels_lost_by_others = engine
        .combat_log()
        .iter()
        .filter(|r| r.kind == CombatResultKind::Duel && r.winner == Some(me))
        .count() as u32;
    assert_eq!(duels_lost_by_others, stats.wins);
    let others_damage: u32 = PlayerId::all(4)
        .filter(|p| *p != me)
        .map(|p| game.player(p).unwrap().stats.damage_taken)
        .sum();
    assert_eq!(others_damage, stats.damage_dealt);
}

/// Round 1 hands every player one 1-cost unit.
#[test]
fn test_starter_units_granted() {
    let mut engine = engine(MatchConfig::fast());
    engine.reset(3);
    engine.run_until_decision_point().unwrap();
    let game = engine.game().unwrap();
    for player in game.players().values() {
        assert_eq!(player.unit_count(), 1);
        assert!(player.champions().all(|c| c.cost() == 1));
    }
    assert_pool_conserved(game);
}

/// Decisions go round the table in seat order within a round.
#[test]
fn test_turn_order_is_seat_order() {
    let mut engine = engine(MatchConfig::fast());
    engine.reset(8);
    let mut order = Vec::new();
    for _ in 0..4 {
        let decision = engine.run_until_decision_point().unwrap().decision().cloned().unwrap();
        assert_eq!(decision.round, 1);
        order.push(decision.player);
        engine.apply_action(decision.player, Action::Pass).unwrap();
    }
    assert_eq!(order, PlayerId::all(4).collect::<Vec<_>>());
    let next = engine.run_until_decision_point().unwrap();
    assert_eq!(next.decision().unwrap().round, 2);
    assert_eq!(next.decision().unwrap().player, PlayerId::new(0));
}

/// The action budget ends a turn even without `pass`.
#[test]
fn test_action_budget_ends_turn() {
    let mut engine = engine(MatchConfig::fast().with_max_actions(3));
    engine.reset(2);
    engine.run_until_decision_point().unwrap();
    let me = PlayerId::new(0);
    for i in 0..3 {
        let outcome = engine.apply_action(me, Action::BuyXp).unwrap();
        assert_eq!(outcome.turn_over, i == 2);
    }
    assert_eq!(engine.awaiting(), None);
    let next = engine.run_until_decision_point().unwrap();
    assert_eq!(next.decision().unwrap().player, PlayerId::new(1));
    assert_eq!(next.decision().unwrap().actions_remaining, 3);
}

#[test]
fn test_protocol_errors_after_game_over() {
    let mut engine = engine(MatchConfig::fast().with_max_rounds(2));
    engine.reset(1);
    play_passive(&mut engine);
    let run = engine.run_until_decision_point().unwrap();
    assert!(run.is_game_over());
    assert_eq!(
        engine.apply_action(PlayerId::new(0), Action::Pass).unwrap_err(),
        EngineError::GameOver
    );
    let mask = engine.action_mask(PlayerId::new(0)).unwrap();
    assert!(mask.legal_actions().is_empty());
}

/// Reset discards the previous match entirely.
#[test]
fn test_reset_starts_over() {
    let mut engine = engine(MatchConfig::fast());
    engine.reset(10);
    play_random(&mut engine, 1);
    assert!(engine.is_over());

    engine.reset(10);
    assert!(!engine.is_over());
    assert!(engine.history().is_empty());
    let run = engine.run_until_decision_point().unwrap();
    assert_eq!(run.decision().unwrap().round, 1);
}

/// Pool conservation and the board cap hold at every decision of a random match.
#[test]
fn test_invariants_hold_throughout_random_match() {
    let mut engine = engine(MatchConfig::default().with_players(4).with_max_rounds(15).with_starting_gold(20));
    engine.reset(77);
    let mut rng = rust_autobattler::core::GameRng::new(3);
    loop {
        match engine.run_until_decision_point().unwrap() {
            RunResult::Decision(d) => {
                let game = engine.game().unwrap();
                assert_pool_conserved(game);
                assert_boards_within_cap(game);
                let legal = engine.action_mask(d.player).unwrap().legal_actions();
                let action = rng.choose(&legal).copied().unwrap_or(Action::Pass);
                let outcome = engine.apply_action(d.player, action).unwrap();
                assert!(outcome.succeeded(), "masked action {action} failed: {:?}", outcome.result);
            }
            RunResult::GameOver(_) => break,
        }
    }
    assert_pool_conserved(engine.game().unwrap());
}

/// Carousel rounds skip planning decisions and hand out one item each.
#[test]
fn test_carousel_round_grants_items() {
    let features = FeatureFlags {
        carousel: true,
        ..FeatureFlags::none()
    };
    let mut engine = engine(MatchConfig::fast().with_features(features).with_max_rounds(10));
    engine.reset(6);
    let mut rounds_with_decisions = Vec::new();
    let mut items_before_carousel = Vec::new();
    loop {
        match engine.run_until_decision_point().unwrap() {
            RunResult::Decision(d) => {
                if rounds_with_decisions.last() != Some(&d.round) {
                    rounds_with_decisions.push(d.round);
                }
                if d.round == 8 && d.player == PlayerId::new(0) {
                    let game = engine.game().unwrap();
                    items_before_carousel = game.players().values().map(|p| p.item_bench.len()).collect();
                }
                engine.apply_action(d.player, Action::Pass).unwrap();
            }
            RunResult::GameOver(_) => break,
        }
    }
    assert!(!rounds_with_decisions.contains(&9));
    assert!(rounds_with_decisions.contains(&10));
    assert_eq!(RoundType::for_round(9, engine.config()), RoundType::Carousel);

    let game = engine.game().unwrap();
    for (before, player) in items_before_carousel.iter().zip(game.players().values()) {
        assert_eq!(player.item_bench.len(), before + 1);
    }
    assert_pool_conserved(game);
}

#[test]
fn test_observation_hides_nothing_it_should_show() {
    let mut engine = engine(MatchConfig::fast());
    engine.reset(4);
    engine.run_until_decision_point().unwrap();
    let obs = engine.observe(PlayerId::new(1)).unwrap();
    assert_eq!(obs.round, 1);
    assert_eq!(obs.awaiting, Some(PlayerId::new(0)));
    assert_eq!(obs.player.player, 1);
    assert_eq!(obs.opponents.len(), 3);
    assert_eq!(obs.pool_by_tier.len(), 5);
    let json = serde_json::to_string(&obs).unwrap();
    assert!(json.contains("\"round\":1"));
}
