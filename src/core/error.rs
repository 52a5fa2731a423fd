//! Error types for the match simulator.
//!
//! Three classes, each mapped to its own enum:
//!
//! - [`ActionError`]: a precondition of a player action did not hold.
//!   Never fatal; the player's state is unchanged.
//! - [`EngineError`]: the caller broke the decision-point protocol.
//! - [`ConfigError`]: a [`MatchConfig`](super::MatchConfig) is structurally unusable.
//!
//! Missing catalog data is not an error at all: lookups return `None` and
//! stats fall back to defaults.

use thiserror::Error;

use super::player::PlayerId;

/// Why a player action was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("not enough gold: need {needed}, have {available}")]
    InsufficientGold { needed: u32, available: u32 },

    #[error("already at max level {0}")]
    MaxLevel(u32),

    #[error("shop slot {0} out of range")]
    InvalidShopSlot(usize),

    #[error("shop slot {0} is empty")]
    EmptyShopSlot(usize),

    #[error("unknown champion: {0}")]
    UnknownChampion(String),

    #[error("no copies of {0} left in the pool")]
    PoolExhausted(String),

    #[error("position {0} out of range")]
    InvalidPosition(usize),

    #[error("no unit at position {0}")]
    EmptyPosition(usize),

    #[error("position {0} is occupied")]
    DestinationOccupied(usize),

    #[error("board is full: {max} units allowed at this level")]
    BoardFull { max: usize },

    #[error("bench is full")]
    BenchFull,

    #[error("source and destination are the same position")]
    SamePosition,

    #[error("item slot {0} is empty or out of range")]
    InvalidItemSlot(usize),

    #[error("unit already holds {0} items")]
    ItemSlotsFull(usize),

    #[error("items are disabled in this match")]
    ItemsDisabled,
}

/// Protocol violations between the match engine and its caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("match has not been reset")]
    NotReset,

    #[error("{0} is not seated in this match")]
    UnknownPlayer(PlayerId),

    #[error("expected an action from {expected}, got one from {got}")]
    NotAwaitingPlayer { expected: PlayerId, got: PlayerId },

    #[error("no decision is pending")]
    NoPendingDecision,

    #[error("unknown action `{name}` with {arity} argument(s)")]
    UnknownAction { name: String, arity: usize },

    #[error("no handler registered for event kind {0}")]
    NoHandler(String),

    #[error("match is over")]
    GameOver,
}

/// A configuration that cannot drive a match.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("player count must be between 2 and 8, got {0}")]
    PlayerCount(usize),

    #[error("table `{table}` needs {expected} entries, has {actual}")]
    TableLength {
        table: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_error_messages() {
        let err = ActionError::InsufficientGold { needed: 4, available: 0 };
        assert_eq!(err.to_string(), "not enough gold: need 4, have 0");
        assert_eq!(ActionError::MaxLevel(11).to_string(), "already at max level 11");
    }

    #[test]
    fn test_engine_error_names_players() {
        let err = EngineError::NotAwaitingPlayer {
            expected: PlayerId::new(1),
            got: PlayerId::new(4),
        };
        assert_eq!(
            err.to_string(),
            "expected an action from Player 1, got one from Player 4"
        );
    }
}
