//! Which actions would succeed right now.

use serde::{Deserialize, Serialize};

use crate::core::Action;
use crate::players::Player;
use crate::pool::ChampionPool;

/// Per-player validity of every action in the action space.
///
/// Booleans only; encoders turn this into whatever tensor layout they
/// need. Position vectors are indexed by flat position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionMask {
    pub pass: bool,
    pub buy_xp: bool,
    pub refresh_shop: bool,
    /// Per shop slot.
    pub buy_champion: Vec<bool>,
    pub sell_champion: Vec<bool>,
    pub move_from: Vec<bool>,
    pub move_to: Vec<bool>,
    /// Per item bench slot: the item can go on at least one unit.
    pub place_item: Vec<bool>,
    board_cells: usize,
    board_has_room: bool,
    /// Per position: a unit that can take another item.
    item_room: Vec<bool>,
}

impl ActionMask {
    /// Mask for a player who may not act at all.
    #[must_use]
    pub fn none(total_positions: usize, shop_size: usize) -> Self {
        Self {
            pass: false,
            buy_xp: false,
            refresh_shop: false,
            buy_champion: vec![false; shop_size],
            sell_champion: vec![false; total_positions],
            move_from: vec![false; total_positions],
            move_to: vec![false; total_positions],
            place_item: Vec::new(),
            board_cells: 0,
            board_has_room: false,
            item_room: vec![false; total_positions],
        }
    }

    #[must_use]
    pub fn for_player(player: &Player, pool: &ChampionPool) -> Self {
        let config = player.config();
        let layout = config.layout();
        let positions = layout.total_positions();

        let buy_champion = player
            .shop
            .iter()
            .map(|slot| {
                slot.as_ref().is_some_and(|id| {
                    pool.entry(id.as_str())
                        .is_some_and(|e| e.available > 0 && player.gold >= u32::from(e.cost))
                })
            })
            .collect();

        let occupied: Vec<bool> = (0..positions)
            .map(|i| {
                layout
                    .location(i)
                    .is_some_and(|loc| player.unit_at(loc).is_some())
            })
            .collect();
        let empty: Vec<bool> = occupied.iter().map(|o| !o).collect();

        let max_items = config.max_items_per_champion;
        let item_room: Vec<bool> = (0..positions)
            .map(|i| {
                config.features.items
                    && layout
                        .location(i)
                        .and_then(|loc| player.unit_at(loc))
                        .is_some_and(|c| c.items().len() < max_items)
            })
            .collect();
        let can_equip = item_room.iter().any(|room| *room);
        let place_item = vec![can_equip; player.item_bench.len()];

        Self {
            pass: true,
            buy_xp: player.level < config.max_level && player.gold >= config.xp_cost,
            refresh_shop: player.free_rerolls > 0 || player.gold >= config.refresh_cost,
            buy_champion,
            sell_champion: occupied.clone(),
            move_from: occupied,
            move_to: empty,
            place_item,
            board_cells: layout.board_cells(),
            board_has_room: player.board.count() < player.max_board_units(),
            item_room,
        }
    }

    /// Whether `action` would pass its preconditions.
    #[must_use]
    pub fn allows(&self, action: &Action) -> bool {
        let at = |mask: &[bool], i: usize| mask.get(i).copied().unwrap_or(false);
        match *action {
            Action::Pass => self.pass,
            Action::BuyXp => self.buy_xp,
            Action::RefreshShop => self.refresh_shop,
            Action::BuyChampion { slot } => at(&self.buy_champion, slot),
            Action::SellChampion { position } => at(&self.sell_champion, position),
            Action::MoveChampion { from, to } => {
                let onto_board = from >= self.board_cells && to < self.board_cells;
                from != to
                    && at(&self.move_from, from)
                    && at(&self.move_to, to)
                    && (!onto_board || self.board_has_room)
            }
            Action::PlaceItem { item_slot, position } => {
                at(&self.place_item, item_slot) && at(&self.item_room, position)
            }
        }
    }

    /// Every allowed action, enumerated.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();
        if self.pass {
            actions.push(Action::Pass);
        }
        if self.buy_xp {
            actions.push(Action::BuyXp);
        }
        if self.refresh_shop {
            actions.push(Action::RefreshShop);
        }
        for (slot, ok) in self.buy_champion.iter().enumerate() {
            if *ok {
                actions.push(Action::BuyChampion { slot });
            }
        }
        for (position, ok) in self.sell_champion.iter().enumerate() {
            if *ok {
                actions.push(Action::SellChampion { position });
            }
        }
        for from in (0..self.move_from.len()).filter(|i| self.move_from[*i]) {
            for to in 0..self.move_to.len() {
                let action = Action::MoveChampion { from, to };
                if self.allows(&action) {
                    actions.push(action);
                }
            }
        }
        for item_slot in 0..self.place_item.len() {
            for position in 0..self.sell_champion.len() {
                let action = Action::PlaceItem { item_slot, position };
                if self.allows(&action) {
                    actions.push(action);
                }
            }
        }
        actions
    }
}
