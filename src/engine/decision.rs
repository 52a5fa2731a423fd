//! What the engine hands back to its caller.

use serde::{Deserialize, Serialize};

use crate::core::{Action, ActionError, PlayerId};
use crate::rounds::GameSummary;

/// The engine is waiting for `player` to act.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecisionPoint {
    pub player: PlayerId,
    pub round: u32,
    pub stage: u32,
    /// Scheduler time of the decision.
    pub time: f64,
    /// Actions this player has taken in the current planning turn.
    pub actions_taken: u32,
    /// Actions left before the turn ends on its own.
    pub actions_remaining: u32,
}

/// Where [`run_until_decision_point`](super::MatchEngine::run_until_decision_point) stopped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RunResult {
    Decision(DecisionPoint),
    GameOver(GameSummary),
}

impl RunResult {
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self, RunResult::GameOver(_))
    }

    #[must_use]
    pub fn decision(&self) -> Option<&DecisionPoint> {
        match self {
            RunResult::Decision(d) => Some(d),
            RunResult::GameOver(_) => None,
        }
    }
}

/// Result of one applied action.
///
/// A rejected action is not a protocol error: `result` carries the reason
/// and the player's state is unchanged. It still uses up one of the
/// turn's actions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionOutcome {
    pub player: PlayerId,
    pub action: Action,
    pub result: Result<(), ActionError>,
    /// The player's planning turn ended with this action.
    pub turn_over: bool,
}

impl ActionOutcome {
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.result.is_ok()
    }
}
