//! Gold, XP, levels, shop rerolls and health.

use tracing::debug;

use crate::core::{ActionError, GameRng};
use crate::pool::ChampionPool;

use super::player::Player;

impl Player {
    /// Spend gold on a fixed amount of XP.
    pub fn buy_xp(&mut self) -> Result<(), ActionError> {
        if self.level >= self.config.max_level {
            return Err(ActionError::MaxLevel(self.level));
        }
        let cost = self.config.xp_cost;
        self.spend(cost)?;
        self.gain_xp(self.config.xp_per_purchase);
        Ok(())
    }

    /// Add XP and apply any level-ups; returns levels gained.
    pub fn gain_xp(&mut self, amount: u32) -> u32 {
        self.xp = self.xp.saturating_add(amount);
        self.check_level_up()
    }

    /// Raise the level while total XP meets the next threshold.
    pub fn check_level_up(&mut self) -> u32 {
        let mut gained = 0;
        while self.level < self.config.max_level {
            match self.config.xp_for_level(self.level + 1) {
                Some(needed) if self.xp >= needed => {
                    self.level += 1;
                    gained += 1;
                }
                _ => break,
            }
        }
        if gained > 0 {
            debug!(player = %self.id, level = self.level, xp = self.xp, "level up");
        }
        gained
    }

    /// Interest owed on current gold.
    #[must_use]
    pub fn interest(&self) -> u32 {
        let step = self.config.interest_step.max(1);
        (self.gold / step).min(self.config.interest_cap)
    }

    /// Credit interest; returns the amount.
    pub fn gain_interest(&mut self) -> u32 {
        let interest = self.interest();
        self.earn(interest);
        interest
    }

    /// Flat round gold, then interest on the new total. Returns the sum.
    pub fn grant_round_income(&mut self) -> u32 {
        let flat = self.config.round_gold;
        self.earn(flat);
        flat + self.gain_interest()
    }

    /// Reroll the shop, using a free reroll before gold.
    ///
    /// Returns `true` if a free reroll was consumed.
    pub fn refresh_shop(
        &mut self,
        pool: &ChampionPool,
        rng: &mut GameRng,
    ) -> Result<bool, ActionError> {
        let free = self.free_rerolls > 0;
        if free {
            self.free_rerolls -= 1;
        } else {
            let cost = self.config.refresh_cost;
            self.spend(cost)?;
        }
        self.regenerate_shop(pool, rng);
        Ok(free)
    }

    /// Roll a new shop at the current level. Costs nothing.
    pub fn regenerate_shop(&mut self, pool: &ChampionPool, rng: &mut GameRng) {
        let odds = self.config.shop_odds_for(self.level).to_vec();
        self.shop = pool.sample_shop(self.level, self.config.shop_size, &odds, rng);
    }

    /// Lose health. Returns `true` if this eliminated the player.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        if !self.alive {
            return false;
        }
        let dealt = amount.min(self.health);
        self.health -= dealt;
        self.stats.damage_taken += dealt;
        if self.health == 0 {
            self.alive = false;
            return true;
        }
        false
    }

    /// Restore health, capped at starting health. No effect once eliminated.
    pub fn heal(&mut self, amount: u32) {
        if self.alive {
            self.health = self
                .health
                .saturating_add(amount)
                .min(self.config.starting_health);
        }
    }

    pub(crate) fn spend(&mut self, amount: u32) -> Result<(), ActionError> {
        if self.gold < amount {
            return Err(ActionError::InsufficientGold {
                needed: amount,
                available: self.gold,
            });
        }
        self.gold -= amount;
        self.stats.gold_spent += amount;
        Ok(())
    }

    pub(crate) fn earn(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
        self.stats.gold_earned += amount;
    }
}
