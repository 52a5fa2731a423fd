//! Per-player state and actions.
//!
//! A [`Player`] owns its economy (gold, level, XP, health), its roster
//! (board, bench, item bench), its shop, and its augments. The shared
//! [`ChampionPool`](crate::pool::ChampionPool) is passed into every action
//! that moves copies in or out, so two players can never touch it at once.
//!
//! Every action returns `Result<_, ActionError>` and leaves the player
//! untouched on `Err`.
//!
//! ## Key Types
//!
//! - `Player`: one competitor
//! - `PlayerStats`: counters for reward shaping and logs
//! - `BuyOutcome`: what a purchase turned into (upgrade, auto-sell)
//! - `TraitCount`: trait tally of the board
//! - `PlayerSnapshot` / `OpponentSnapshot`: raw state for observation encoders

pub mod economy;
pub mod player;
pub mod roster;
pub mod snapshot;
pub mod traits;

pub use player::{Player, PlayerStats};
pub use roster::BuyOutcome;
pub use snapshot::{OpponentSnapshot, PlayerSnapshot, UnitSnapshot};
pub use traits::TraitCount;
