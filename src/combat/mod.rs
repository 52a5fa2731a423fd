//! Statistical combat resolution.
//!
//! A fight is not simulated tick by tick. Each side is reduced to a scalar
//! power score, the scores give a win probability, and one draw from the
//! match RNG picks the winner.
//!
//! ## Key Types
//!
//! - `CombatSimulator`: resolves one pairing
//! - `CombatOutcome` / `CombatWinner`: the result and the damage it deals

pub mod power;
pub mod simulator;

pub use power::{champion_power, team_power};
pub use simulator::{CombatOutcome, CombatSimulator, CombatWinner};
