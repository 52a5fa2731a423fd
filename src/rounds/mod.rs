//! Round orchestration.
//!
//! [`GameRound`] owns everything a match mutates (players, pool, RNG,
//! matchmaking memory, combat log) and exposes one method per phase. The
//! scheduler in [`engine`](crate::engine) decides when each phase runs;
//! this module decides what it does.
//!
//! A round is exactly one of three kinds, chosen from the round number
//! alone: carousel, minion, or player-vs-player combat.
//!
//! ## Key Types
//!
//! - `RoundType`: carousel / minion / combat
//! - `Matchmaker` / `Pairing`: anti-repeat random pairing with a ghost
//!   slot for odd counts
//! - `GameRound`: per-match state and phase logic
//! - `CombatRecord`, `Placement`, `GameSummary`: results

pub mod game_round;
pub mod matchmaking;
pub mod results;
pub mod round_type;

pub use game_round::GameRound;
pub use matchmaking::{Matchmaker, Pairing, RECENT_OPPONENT_MEMORY};
pub use results::{compute_placements, CombatRecord, CombatResultKind, GameSummary, Placement};
pub use round_type::RoundType;
