//! Discrete-event match driver.
//!
//! A match is a sequence of timed [`Event`]s popped from an [`EventQueue`]
//! and dispatched to per-kind handlers. The scheduler pauses whenever a
//! player must choose a planning action; the caller supplies the action
//! through [`MatchEngine::apply_action`] and resumes with
//! [`MatchEngine::run_until_decision_point`].
//!
//! ## Phase order
//!
//! `StartPlanning` → (`AugmentSelection`) → `PlayerActionRequired` per
//! living player → `EndPlanning` → `StartCombat` → `EndCombat` →
//! `EndRound`, with carousel rounds going straight from `StartPlanning`
//! through `Carousel` to `EndRound`. `GameEnd` follows the last round.

pub mod decision;
pub mod event;
pub mod mask;
pub mod match_engine;
pub mod scheduler;

pub use decision::{ActionOutcome, DecisionPoint, RunResult};
pub use event::{Event, EventKind};
pub use mask::ActionMask;
pub use match_engine::{MatchEngine, Observation, COMBAT_DURATION, PHASE_STEP};
pub use scheduler::{EventEngine, EventQueue, Handler};
