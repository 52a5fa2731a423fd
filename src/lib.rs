//! # rust-autobattler
//!
//! An event-driven auto-battler match simulator for RL training.
//!
//! ## Design Principles
//!
//! 1. **Data-Driven**: Champions, items, traits and augments come from a
//!    [`Catalog`] built at startup. Rule tables live in [`MatchConfig`].
//!
//! 2. **N-Player First**: Every per-player table is a [`PlayerMap`] sized
//!    by the configured player count (2 to 8).
//!
//! 3. **Deterministic**: One seeded [`GameRng`] drives shops, pairings,
//!    combat and augment offers. The same seed and actions replay the
//!    same match.
//!
//! ## Architecture
//!
//! - **Discrete events**: The [`engine`] pops timed events and pauses at
//!   each planning decision, so an agent drives the match one action at a
//!   time.
//!
//! - **Shared pool**: Every purchase, sale and upgrade moves copies
//!   between the [`ChampionPool`] and player rosters. Copies are never
//!   created or destroyed.
//!
//! - **Statistical combat**: Fights resolve from team power plus seeded
//!   noise, not a tick simulation.
//!
//! ## Modules
//!
//! - `core`: Player ids, RNG, configuration, positions, actions, errors
//! - `catalog`: Read-only templates and effect parameters
//! - `units`: Champion instances, board and bench
//! - `pool`: The shared champion pool
//! - `players`: Player state, economy, roster actions, traits, snapshots
//! - `combat`: Power model and the statistical combat simulator
//! - `augments`: Augment hook registry and built-in augment effects
//! - `rounds`: Round types, matchmaking, phases and placements
//! - `engine`: Event scheduler, decision points and action masks

pub mod core;
pub mod catalog;
pub mod units;
pub mod pool;
pub mod players;
pub mod combat;
pub mod augments;
pub mod rounds;
pub mod engine;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, ActionError, ConfigError, EngineError,
    PlayerId, PlayerMap,
    GameRng,
    MatchConfig, FeatureFlags, CombatWeights,
    Hex, Layout, Location,
};

pub use crate::catalog::{
    Catalog, CatalogBuilder, CatalogData,
    ChampionId, ChampionTemplate, ItemId, ItemTemplate,
    TraitId, TraitTemplate, AugmentId, AugmentDescriptor,
    EffectParams, ParamValue,
};

pub use crate::units::{Champion, Board, Bench};

pub use crate::pool::ChampionPool;

pub use crate::players::{Player, PlayerSnapshot, OpponentSnapshot, TraitCount};

pub use crate::combat::{CombatSimulator, CombatOutcome, CombatWinner};

pub use crate::augments::{AugmentRegistry, AugmentModule, AugmentResult, HookEvent};

pub use crate::rounds::{GameRound, RoundType, GameSummary, Placement, CombatRecord};

pub use crate::engine::{
    MatchEngine, Observation, RunResult, DecisionPoint, ActionOutcome, ActionMask,
    EventEngine, EventQueue, Event, EventKind,
};
