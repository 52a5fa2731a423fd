//! Agent action vocabulary.
//!
//! Positions in actions are flat indices (see [`Layout`](super::Layout)).
//! Agents that speak strings use [`Action::parse`]; an unknown name or a
//! wrong argument count is a protocol error, not a failed action.

use serde::{Deserialize, Serialize};

use super::error::EngineError;
use super::player::PlayerId;

/// One planning-phase action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// End this player's planning turn.
    Pass,
    BuyXp,
    RefreshShop,
    BuyChampion { slot: usize },
    SellChampion { position: usize },
    MoveChampion { from: usize, to: usize },
    /// Equip the item in `item_slot` of the item bench onto the unit at `position`.
    PlaceItem { item_slot: usize, position: usize },
}

impl Action {
    /// Wire name of this action.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Action::Pass => "pass",
            Action::BuyXp => "buy_xp",
            Action::RefreshShop => "refresh_shop",
            Action::BuyChampion { .. } => "buy_champion",
            Action::SellChampion { .. } => "sell_champion",
            Action::MoveChampion { .. } => "move_champion",
            Action::PlaceItem { .. } => "place_item",
        }
    }

    /// Build an action from its wire name and integer arguments.
    ///
    /// ```
    /// use rust_autobattler::core::Action;
    ///
    /// assert_eq!(Action::parse("buy_champion", &[2]).unwrap(), Action::BuyChampion { slot: 2 });
    /// assert!(Action::parse("cast_spell", &[]).is_err());
    /// ```
    pub fn parse(name: &str, args: &[usize]) -> Result<Self, EngineError> {
        let action = match (name, args) {
            ("pass", []) => Action::Pass,
            ("buy_xp", []) => Action::BuyXp,
            ("refresh_shop", []) => Action::RefreshShop,
            ("buy_champion", [slot]) => Action::BuyChampion { slot: *slot },
            ("sell_champion", [position]) => Action::SellChampion { position: *position },
            ("move_champion", [from, to]) => Action::MoveChampion { from: *from, to: *to },
            ("place_item", [item_slot, position]) => Action::PlaceItem {
                item_slot: *item_slot,
                position: *position,
            },
            _ => {
                return Err(EngineError::UnknownAction {
                    name: name.to_string(),
                    arity: args.len(),
                })
            }
        };
        Ok(action)
    }

    /// Integer arguments, in [`parse`](Self::parse) order.
    #[must_use]
    pub fn args(&self) -> Vec<usize> {
        match *self {
            Action::Pass | Action::BuyXp | Action::RefreshShop => Vec::new(),
            Action::BuyChampion { slot } => vec![slot],
            Action::SellChampion { position } => vec![position],
            Action::MoveChampion { from, to } => vec![from, to],
            Action::PlaceItem { item_slot, position } => vec![item_slot, position],
        }
    }

    /// Whether this action ends the player's turn.
    #[must_use]
    pub fn ends_turn(&self) -> bool {
        matches!(self, Action::Pass)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::BuyChampion { slot } => write!(f, "buy_champion({slot})"),
            Action::SellChampion { position } => write!(f, "sell_champion({position})"),
            Action::MoveChampion { from, to } => write!(f, "move_champion({from}, {to})"),
            Action::PlaceItem { item_slot, position } => {
                write!(f, "place_item({item_slot}, {position})")
            }
            other => f.write_str(other.name()),
        }
    }
}

/// An applied action, kept in the match history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub player: PlayerId,
    pub action: Action,
    pub round: u32,
    /// Index of this action within the player's planning turn.
    pub sequence: u32,
    pub success: bool,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: Action, round: u32, sequence: u32, success: bool) -> Self {
        Self {
            player,
            action,
            round,
            sequence,
            success,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_actions() {
        assert_eq!(Action::parse("pass", &[]), Ok(Action::Pass));
        assert_eq!(Action::parse("buy_xp", &[]), Ok(Action::BuyXp));
        assert_eq!(Action::parse("refresh_shop", &[]), Ok(Action::RefreshShop));
        assert_eq!(
            Action::parse("sell_champion", &[30]),
            Ok(Action::SellChampion { position: 30 })
        );
        assert_eq!(
            Action::parse("move_champion", &[28, 3]),
            Ok(Action::MoveChampion { from: 28, to: 3 })
        );
        assert_eq!(
            Action::parse("place_item", &[0, 3]),
            Ok(Action::PlaceItem { item_slot: 0, position: 3 })
        );
    }

    #[test]
    fn test_parse_rejects_wrong_arity() {
        let err = Action::parse("buy_champion", &[]).unwrap_err();
        assert_eq!(
            err,
            EngineError::UnknownAction {
                name: "buy_champion".into(),
                arity: 0
            }
        );
        assert!(Action::parse("pass", &[1]).is_err());
    }

    #[test]
    fn test_name_roundtrips_through_parse() {
        let action = Action::MoveChampion { from: 1, to: 2 };
        assert_eq!(Action::parse(action.name(), &[1, 2]), Ok(action));
        assert_eq!(action.to_string(), "move_champion(1, 2)");
    }

    #[test]
    fn test_only_pass_ends_turn() {
        assert!(Action::Pass.ends_turn());
        assert!(!Action::BuyXp.ends_turn());
    }
}
