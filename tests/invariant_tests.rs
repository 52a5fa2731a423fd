//! Property tests for roster and pool invariants.

mod common;

use std::sync::Arc;

use proptest::prelude::*;

use rust_autobattler::catalog::{sample_catalog, ChampionId};
use rust_autobattler::core::{Action, GameRng, MatchConfig, PlayerId};
use rust_autobattler::engine::RunResult;
use rust_autobattler::players::Player;
use rust_autobattler::pool::ChampionPool;
use rust_autobattler::units::MAX_STARS;

use common::{assert_boards_within_cap, assert_pool_conserved, engine};

const ONE_COSTS: [&str; 5] = ["TFT16_Garen", "TFT16_Nasus", "TFT16_Poppy", "TFT16_Lulu", "TFT16_Jarvan"];

fn setup() -> (Player, ChampionPool) {
    let config = Arc::new(MatchConfig::default());
    let pool = ChampionPool::new(Arc::new(sample_catalog()), &config);
    let mut player = Player::new(PlayerId::new(0), config);
    player.gold = 1_000;
    (player, pool)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Buying and selling never creates or destroys copies, and no three
    /// copies of one champion at one star level are left unmerged.
    #[test]
    fn prop_buys_and_sells_conserve_copies(
        ops in prop::collection::vec((0usize..ONE_COSTS.len(), any::<bool>(), 0usize..37), 1..80)
    ) {
        let (mut player, mut pool) = setup();
        for (pick, sell, position) in ops {
            if sell {
                let _ = player.sell_champion(position, &mut pool);
            } else {
                player.shop[0] = Some(ChampionId::new(ONE_COSTS[pick]));
                let _ = player.buy_champion_from_shop(0, &mut pool);
            }

            let owned: u32 = player.champions().map(|c| c.base_copies()).sum();
            prop_assert_eq!(owned, pool.total_acquired());
            prop_assert_eq!(pool.total_available() + owned, pool.total_minted());

            for id in ONE_COSTS {
                let id = ChampionId::new(id);
                for stars in 1..MAX_STARS {
                    let copies = player.champions().filter(|c| c.matches(&id, stars)).count();
                    prop_assert!(copies < 3, "{} copies of {} at {} stars", copies, id, stars);
                }
            }
        }
    }

    /// Arbitrary move sequences keep the board within its cap and every
    /// unit's stored position in sync with its cell.
    #[test]
    fn prop_moves_respect_board_cap(
        level in 1u32..=9,
        moves in prop::collection::vec((0usize..37, 0usize..37), 1..60)
    ) {
        let (mut player, mut pool) = setup();
        player.level = level;
        for id in ONE_COSTS.iter().chain(["TFT16_Vi", "TFT16_Sion", "TFT16_Teemo"].iter()) {
            player.shop[0] = Some(ChampionId::new(*id));
            player.buy_champion_from_shop(0, &mut pool).unwrap();
        }
        let units = player.unit_count();
        for (from, to) in moves {
            let _ = player.move_champion(from, to);
            prop_assert!(player.board.count() <= player.max_board_units());
            prop_assert!(player.board.is_consistent());
            prop_assert_eq!(player.unit_count(), units);
        }
    }

    /// Whole matches under a random agent keep every invariant at every
    /// decision, and masked actions always succeed.
    #[test]
    fn prop_random_matches_keep_invariants(seed in any::<u64>(), agent_seed in any::<u64>()) {
        let config = MatchConfig::default().with_players(3).with_max_rounds(8).with_starting_gold(30);
        let mut engine = engine(config);
        engine.reset(seed);
        let mut rng = GameRng::new(agent_seed);
        let mut decisions = 0;
        loop {
            match engine.run_until_decision_point().unwrap() {
                RunResult::Decision(d) => {
                    decisions += 1;
                    prop_assert!(decisions < common::DECISION_LIMIT);
                    let game = engine.game().unwrap();
                    assert_pool_conserved(game);
                    assert_boards_within_cap(game);
                    let legal = engine.action_mask(d.player).unwrap().legal_actions();
                    let action = rng.choose(&legal).copied().unwrap_or(Action::Pass);
                    let outcome = engine.apply_action(d.player, action).unwrap();
                    prop_assert!(outcome.succeeded());
                }
                RunResult::GameOver(summary) => {
                    prop_assert_eq!(summary.placements.len(), 3);
                    break;
                }
            }
        }
    }
}
