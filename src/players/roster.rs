//! Buying, selling, moving and equipping units.
//!
//! Three same-champion, same-star units consolidate into one unit a star
//! higher. The consolidation cascades (three 2-stars become a 3-star) and
//! stops at four stars. When a board copy takes part it is the one kept,
//! so upgrades happen in place on the board.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::catalog::{ChampionId, ChampionTemplate, ItemId};
use crate::core::{Action, ActionError, GameRng, Location};
use crate::pool::ChampionPool;
use crate::units::{Champion, MAX_STARS};

use super::player::Player;

/// Result of a purchase or grant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyOutcome {
    pub champion: ChampionId,
    /// Where the copy ended up. `None` when it was auto-sold.
    pub location: Option<Location>,
    /// Star level of the unit holding the copy.
    pub stars: u8,
    pub upgraded: bool,
    pub auto_sold: bool,
}

impl Player {
    /// Unit at a location.
    #[must_use]
    pub fn unit_at(&self, location: Location) -> Option<&Champion> {
        match location {
            Location::Board(hex) => self.board.get(hex),
            Location::Bench(slot) => self.bench.get(slot),
        }
    }

    pub fn unit_at_mut(&mut self, location: Location) -> Option<&mut Champion> {
        match location {
            Location::Board(hex) => self.board.get_mut(hex),
            Location::Bench(slot) => self.bench.get_mut(slot),
        }
    }

    /// Unit at a flat position index.
    #[must_use]
    pub fn unit_at_position(&self, position: usize) -> Option<&Champion> {
        self.config
            .layout()
            .location(position)
            .and_then(|loc| self.unit_at(loc))
    }

    fn take_unit(&mut self, location: Location) -> Option<Champion> {
        match location {
            Location::Board(hex) => self.board.remove(hex),
            Location::Bench(slot) => self.bench.remove(slot),
        }
    }

    fn put_unit(&mut self, location: Location, champion: Champion) -> Result<(), Champion> {
        match location {
            Location::Board(hex) => self.board.place(hex, champion),
            Location::Bench(slot) => self.bench.place(slot, champion),
        }
    }

    /// Locations of every `id` unit at `stars`, board first.
    fn find_copies(&self, id: &ChampionId, stars: u8) -> Vec<Location> {
        let board = self
            .board
            .occupied()
            .filter(|(_, c)| c.matches(id, stars))
            .map(|(hex, _)| Location::Board(hex));
        let bench = self
            .bench
            .occupied()
            .filter(|(_, c)| c.matches(id, stars))
            .map(|(slot, _)| Location::Bench(slot));
        board.chain(bench).collect()
    }

    /// Run one planning action. `Pass` does nothing here.
    pub fn perform(
        &mut self,
        action: Action,
        pool: &mut ChampionPool,
        rng: &mut GameRng,
    ) -> Result<(), ActionError> {
        match action {
            Action::Pass => Ok(()),
            Action::BuyXp => self.buy_xp(),
            Action::RefreshShop => self.refresh_shop(pool, rng).map(|_| ()),
            Action::BuyChampion { slot } => self.buy_champion_from_shop(slot, pool).map(|_| ()),
            Action::SellChampion { position } => self.sell_champion(position, pool).map(|_| ()),
            Action::MoveChampion { from, to } => self.move_champion(from, to),
            Action::PlaceItem { item_slot, position } => self.place_item(item_slot, position),
        }
    }

    /// Buy the champion offered in `slot`.
    ///
    /// The pool is checked again here: another player may have taken the
    /// last copy since this shop was rolled. If the copy neither completes
    /// an upgrade nor fits on the bench it is sold straight back.
    pub fn buy_champion_from_shop(
        &mut self,
        slot: usize,
        pool: &mut ChampionPool,
    ) -> Result<BuyOutcome, ActionError> {
        let id = self
            .shop
            .get(slot)
            .ok_or(ActionError::InvalidShopSlot(slot))?
            .clone()
            .ok_or(ActionError::EmptyShopSlot(slot))?;
        let template = pool
            .catalog()
            .champion(id.as_str())
            .cloned()
            .ok_or_else(|| ActionError::UnknownChampion(id.to_string()))?;
        let cost = u32::from(template.cost);
        if self.gold < cost {
            return Err(ActionError::InsufficientGold {
                needed: cost,
                available: self.gold,
            });
        }
        if !pool.acquire(id.as_str()) {
            return Err(ActionError::PoolExhausted(id.to_string()));
        }

        self.spend(cost)?;
        self.shop[slot] = None;
        self.stats.champions_bought += 1;

        let outcome = match self.add_with_upgrade(Champion::new(template, 1)) {
            Ok((location, stars, upgraded)) => BuyOutcome {
                champion: id,
                location: Some(location),
                stars,
                upgraded,
                auto_sold: false,
            },
            Err(unit) => {
                self.liquidate(unit, pool);
                BuyOutcome {
                    champion: id,
                    location: None,
                    stars: 1,
                    upgraded: false,
                    auto_sold: true,
                }
            }
        };
        debug!(player = %self.id, champion = %outcome.champion, stars = outcome.stars, "bought");
        Ok(outcome)
    }

    /// Give a free unit, resolved by id or display name, drawn from the pool.
    ///
    /// Fails without side effects when the champion is unknown, out of
    /// stock, or there is no room for it.
    pub fn grant_champion(
        &mut self,
        key: &str,
        pool: &mut ChampionPool,
    ) -> Result<BuyOutcome, ActionError> {
        let template: Arc<ChampionTemplate> = pool
            .catalog()
            .find_champion(key)
            .cloned()
            .ok_or_else(|| ActionError::UnknownChampion(key.to_string()))?;
        let id = template.id.clone();
        if !pool.acquire(id.as_str()) {
            return Err(ActionError::PoolExhausted(id.to_string()));
        }
        match self.add_with_upgrade(Champion::new(template, 1)) {
            Ok((location, stars, upgraded)) => Ok(BuyOutcome {
                champion: id,
                location: Some(location),
                stars,
                upgraded,
                auto_sold: false,
            }),
            Err(unit) => {
                pool.release_many(id.as_str(), unit.base_copies());
                Err(ActionError::BenchFull)
            }
        }
    }

    /// Place a new unit, consolidating copies first.
    ///
    /// Returns where the copy ended up, that unit's stars, and whether an
    /// upgrade happened. Hands the unit back if there is no room.
    fn add_with_upgrade(&mut self, unit: Champion) -> Result<(Location, u8, bool), Champion> {
        let id = unit.id().clone();
        let stars = unit.stars();
        let copies = self.find_copies(&id, stars);
        if copies.len() < 2 || stars >= MAX_STARS {
            return self
                .bench
                .push(unit)
                .map(|slot| (Location::Bench(slot), stars, false));
        }

        let mut absorbed = unit;
        let keeper = copies[0];
        let mut spare_items: SmallVec<[ItemId; 6]> = absorbed.take_items().into_iter().collect();
        if let Some(mut consumed) = self.take_unit(copies[copies.len() - 1]) {
            spare_items.extend(consumed.take_items());
        }
        let stars = self.upgrade_in_place(keeper, spare_items);
        Ok((keeper, stars, true))
    }

    /// Upgrade the unit at `keeper`, then keep consolidating while three
    /// copies of its new star level exist. Returns its final stars.
    fn upgrade_in_place(&mut self, keeper: Location, mut spare_items: SmallVec<[ItemId; 6]>) -> u8 {
        let max_items = self.config.max_items_per_champion;
        loop {
            let Some(unit) = self.unit_at_mut(keeper) else {
                return 0;
            };
            unit.upgrade_star();
            let mut overflow = Vec::new();
            for item in spare_items.drain(..) {
                if unit.add_item(item.clone(), max_items).is_err() {
                    overflow.push(item);
                }
            }
            let id = unit.id().clone();
            let stars = unit.stars();
            self.stash_items(overflow);

            if stars >= MAX_STARS {
                return stars;
            }
            let others: Vec<Location> = self
                .find_copies(&id, stars)
                .into_iter()
                .filter(|loc| *loc != keeper)
                .collect();
            if others.len() < 2 {
                return stars;
            }
            for loc in others.iter().rev().take(2) {
                if let Some(mut consumed) = self.take_unit(*loc) {
                    spare_items.extend(consumed.take_items());
                }
            }
        }
    }

    /// Move loose items to the item bench. Items past its capacity are lost.
    fn stash_items(&mut self, items: impl IntoIterator<Item = ItemId>) {
        for item in items {
            if !self.receive_item(item.clone()) {
                debug!(player = %self.id, item = %item, "item bench full, item dropped");
            }
        }
    }

    /// Return a unit's copies to the pool and credit its base cost.
    fn liquidate(&mut self, mut unit: Champion, pool: &mut ChampionPool) -> u32 {
        pool.release_many(unit.id().as_str(), unit.base_copies());
        self.stash_items(unit.take_items());
        let value = u32::from(unit.cost());
        self.earn(value);
        self.stats.champions_sold += 1;
        value
    }

    /// Sell the unit at a flat position. Returns the gold credited.
    ///
    /// Sell value is the base cost regardless of star level; all
    /// `3^(stars-1)` copies go back to the pool.
    pub fn sell_champion(
        &mut self,
        position: usize,
        pool: &mut ChampionPool,
    ) -> Result<u32, ActionError> {
        let location = self
            .config
            .layout()
            .location(position)
            .ok_or(ActionError::InvalidPosition(position))?;
        let unit = self
            .take_unit(location)
            .ok_or(ActionError::EmptyPosition(position))?;
        Ok(self.liquidate(unit, pool))
    }

    /// Move a unit to an empty position.
    ///
    /// The board cap applies only when a unit comes up from the bench.
    pub fn move_champion(&mut self, from: usize, to: usize) -> Result<(), ActionError> {
        let layout = self.config.layout();
        let source = layout
            .location(from)
            .ok_or(ActionError::InvalidPosition(from))?;
        let destination = layout.location(to).ok_or(ActionError::InvalidPosition(to))?;
        if from == to {
            return Err(ActionError::SamePosition);
        }
        if self.unit_at(source).is_none() {
            return Err(ActionError::EmptyPosition(from));
        }
        if self.unit_at(destination).is_some() {
            return Err(ActionError::DestinationOccupied(to));
        }
        let max = self.max_board_units();
        if !source.is_board() && destination.is_board() && self.board.count() >= max {
            return Err(ActionError::BoardFull { max });
        }

        let unit = self
            .take_unit(source)
            .ok_or(ActionError::EmptyPosition(from))?;
        if let Err(unit) = self.put_unit(destination, unit) {
            // destination was checked empty; restore the source regardless
            let _ = self.put_unit(source, unit);
            return Err(ActionError::DestinationOccupied(to));
        }
        Ok(())
    }

    /// Equip an item from the item bench onto a unit.
    pub fn place_item(&mut self, item_slot: usize, position: usize) -> Result<(), ActionError> {
        if !self.config.features.items {
            return Err(ActionError::ItemsDisabled);
        }
        let item = self
            .item_bench
            .get(item_slot)
            .cloned()
            .ok_or(ActionError::InvalidItemSlot(item_slot))?;
        let location = self
            .config
            .layout()
            .location(position)
            .ok_or(ActionError::InvalidPosition(position))?;
        let max_items = self.config.max_items_per_champion;
        let unit = self
            .unit_at_mut(location)
            .ok_or(ActionError::EmptyPosition(position))?;
        unit.add_item(item, max_items)?;
        self.item_bench.remove(item_slot);
        Ok(())
    }
}
