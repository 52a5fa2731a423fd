//! Core match types: players, RNG, configuration, errors, positions, actions.
//!
//! Everything here is independent of the catalog and of any particular
//! roster. Higher layers (`pool`, `players`, `rounds`, `engine`) build on
//! these primitives.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod position;
pub mod rng;

pub use action::{Action, ActionRecord};
pub use config::{CombatWeights, FeatureFlags, MatchConfig};
pub use error::{ActionError, ConfigError, EngineError};
pub use player::{PlayerId, PlayerMap};
pub use position::{Hex, Layout, Location};
pub use rng::GameRng;
