//! Per-match state and the logic of every round phase.

use std::sync::Arc;

use im::Vector;
use tracing::{debug, info, warn};

use crate::augments::{AugmentRegistry, AugmentResult, HookContext, HookEvent};
use crate::catalog::{AugmentId, Catalog, ChampionId};
use crate::combat::{CombatSimulator, CombatWinner};
use crate::core::{GameRng, MatchConfig, PlayerId, PlayerMap};
use crate::players::Player;
use crate::pool::ChampionPool;
use crate::units::Champion;

use super::matchmaking::{Matchmaker, Pairing};
use super::results::{compute_placements, CombatRecord, CombatResultKind, GameSummary, Placement};
use super::round_type::RoundType;

/// Result of one hook call during a phase.
pub type HookReport = (PlayerId, AugmentId, AugmentResult);

/// Everything one match mutates.
///
/// Cloning a `GameRound` forks the match: the combat log is a persistent
/// vector, so clones share history until they diverge.
#[derive(Clone, Debug)]
pub struct GameRound {
    catalog: Arc<Catalog>,
    config: Arc<MatchConfig>,
    registry: Arc<AugmentRegistry>,
    players: PlayerMap<Player>,
    pool: ChampionPool,
    /// Pairings, starter units, augment offers and loot.
    rng: GameRng,
    /// Shop regeneration and rerolls.
    shop_rng: GameRng,
    combat_rng: GameRng,
    matchmaker: Matchmaker,
    /// 0 until the first round starts.
    round: u32,
    stage: u32,
    eliminations: u32,
    combat_log: Vector<CombatRecord>,
}

impl GameRound {
    /// Seat `config.players` players with a full pool.
    #[must_use]
    pub fn new(
        catalog: Arc<Catalog>,
        config: Arc<MatchConfig>,
        registry: Arc<AugmentRegistry>,
        seed: u64,
    ) -> Self {
        let players = PlayerMap::new(config.players, |id| Player::new(id, Arc::clone(&config)));
        let pool = ChampionPool::new(Arc::clone(&catalog), &config);
        let rng = GameRng::new(seed);
        Self {
            matchmaker: Matchmaker::new(config.players),
            catalog,
            registry,
            players,
            pool,
            shop_rng: rng.for_context("shop"),
            combat_rng: rng.for_context("combat"),
            rng,
            round: 0,
            stage: 1,
            eliminations: 0,
            combat_log: Vector::new(),
            config,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn stage(&self) -> u32 {
        self.stage
    }

    #[must_use]
    pub fn round_type(&self) -> RoundType {
        RoundType::for_round(self.round, &self.config)
    }

    #[must_use]
    pub fn config(&self) -> &Arc<MatchConfig> {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    #[must_use]
    pub fn registry(&self) -> &Arc<AugmentRegistry> {
        &self.registry
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(id)
    }

    /// A player together with the shared pool and the shop stream, for
    /// running that player's actions.
    pub fn player_with_pool(
        &mut self,
        id: PlayerId,
    ) -> Option<(&mut Player, &mut ChampionPool, &mut GameRng)> {
        let player = self.players.get_mut(id)?;
        Some((player, &mut self.pool, &mut self.shop_rng))
    }

    #[must_use]
    pub fn pool(&self) -> &ChampionPool {
        &self.pool
    }

    #[must_use]
    pub fn combat_log(&self) -> &Vector<CombatRecord> {
        &self.combat_log
    }

    #[must_use]
    pub fn matchmaker(&self) -> &Matchmaker {
        &self.matchmaker
    }

    /// Living players in seat order.
    #[must_use]
    pub fn alive_players(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .filter(|(_, p)| p.is_alive())
            .map(|(id, _)| id)
            .collect()
    }

    #[must_use]
    pub fn first_alive_player(&self) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|(_, p)| p.is_alive())
            .map(|(id, _)| id)
    }

    /// Next living player seated after `after`.
    #[must_use]
    pub fn next_alive_player(&self, after: PlayerId) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|(id, p)| *id > after && p.is_alive())
            .map(|(id, _)| id)
    }

    // === Phases ===

    /// Move to the next round. Fires `on_stage_start` when the stage goes up.
    ///
    /// Returns `true` on a stage change.
    pub fn advance_round(&mut self) -> bool {
        self.round += 1;
        let stage = self.config.stage_for_round(self.round);
        let changed = stage > self.stage;
        self.stage = stage;
        info!(round = self.round, stage, kind = %self.round_type(), "round start");
        if changed {
            info!(round = self.round, stage, "new stage");
            self.fire_for_alive(HookEvent::OnStageStart);
        }
        changed
    }

    /// Shops, income and survival counters for every living player.
    ///
    /// Round 1 also hands each living player a random 1-cost unit drawn
    /// from the pool. `on_round_start` hooks run last.
    pub fn start_planning(&mut self) -> Vec<HookReport> {
        for (_, player) in self.players.iter_mut() {
            if !player.is_alive() {
                continue;
            }
            player.regenerate_shop(&self.pool, &mut self.shop_rng);
            let income = player.grant_round_income();
            player.stats.rounds_survived += 1;
            debug!(player = %player.id, income, gold = player.gold, "planning setup");
        }
        if self.round == 1 {
            self.grant_starter_units();
        }
        self.refresh_traits();
        self.fire_for_alive(HookEvent::OnRoundStart)
    }

    fn grant_starter_units(&mut self) {
        for (_, player) in self.players.iter_mut() {
            if !player.is_alive() {
                continue;
            }
            let candidates: Vec<ChampionId> = self
                .catalog
                .champions_by_cost(1)
                .filter(|t| self.pool.is_available(t.id.as_str()))
                .map(|t| t.id.clone())
                .collect();
            let Some(id) = self.rng.choose(&candidates) else {
                warn!(player = %player.id, "no 1-cost champion left for the starter unit");
                continue;
            };
            if let Err(err) = player.grant_champion(id.as_str(), &mut self.pool) {
                warn!(player = %player.id, %err, "starter unit not granted");
            }
        }
    }

    /// Offer each living player eligible augments and pick one for them.
    pub fn run_augment_selection(&mut self) -> Vec<HookReport> {
        let eligible = self.registry.eligible_augments(self.round, &self.catalog);
        if eligible.is_empty() {
            warn!(round = self.round, "no eligible augments");
            return Vec::new();
        }

        let mut reports = Vec::new();
        for (id, player) in self.players.iter_mut() {
            if !player.is_alive() {
                continue;
            }
            let candidates: Vec<_> = eligible
                .iter()
                .filter(|a| !player.has_augment(a.id.as_str()))
                .cloned()
                .collect();
            let offer = self.rng.sample_distinct(&candidates, self.config.augment_offer_size);
            let Some(pick) = self.rng.choose(&offer).cloned() else {
                continue;
            };
            info!(player = %id, augment = %pick.id, offered = offer.len(), "augment selected");
            player.select_augment(pick.clone());
            let mut ctx = HookContext::new(player, &mut self.pool, &mut self.rng, self.round);
            let result = self.registry.apply_hook(&mut ctx, &pick, HookEvent::OnSelect);
            reports.push((id, pick.id, result));
        }
        reports
    }

    /// One random item component for every living player.
    pub fn run_carousel(&mut self) {
        let components = self.catalog.item_components();
        if components.is_empty() {
            warn!(round = self.round, "carousel skipped: catalog has no item components");
            return;
        }
        for (_, player) in self.players.iter_mut() {
            if !player.is_alive() {
                continue;
            }
            if let Some(item) = self.rng.choose(&components) {
                if !player.receive_item(item.clone()) {
                    debug!(player = %player.id, "item bench full; carousel item lost");
                }
            }
        }
    }

    /// Recount traits and restore combat stats before fighting.
    pub fn end_planning(&mut self) {
        self.refresh_traits();
        for (_, player) in self.players.iter_mut() {
            if player.is_alive() {
                player.reset_for_combat();
            }
        }
    }

    /// Resolve this round's combat according to its kind.
    ///
    /// Passives run before any fight; `on_combat_end` runs for the
    /// survivors after damage.
    pub fn run_combat_phase(&mut self) -> Vec<CombatRecord> {
        let records = match self.round_type() {
            RoundType::Carousel => {
                self.run_carousel();
                return Vec::new();
            }
            RoundType::Minion => {
                self.apply_passives();
                self.run_minion_round()
            }
            RoundType::Combat => {
                self.apply_passives();
                self.run_pvp_round()
            }
        };
        self.fire_for_alive(HookEvent::OnCombatEnd);
        self.combat_log.extend(records.iter().cloned());
        records
    }

    /// Reset then reapply every living player's passives.
    pub fn apply_passives(&mut self) -> Vec<HookReport> {
        let mut reports = Vec::new();
        for (id, player) in self.players.iter_mut() {
            if !player.is_alive() {
                continue;
            }
            let mut ctx = HookContext::new(player, &mut self.pool, &mut self.rng, self.round);
            for (augment, result) in self.registry.apply_all_passives(&mut ctx) {
                reports.push((id, augment, result));
            }
        }
        reports
    }

    fn run_minion_round(&mut self) -> Vec<CombatRecord> {
        let loot = self.config.features.items && self.config.is_minion_loot_round(self.round);
        let components = if loot {
            self.catalog.item_components()
        } else {
            Vec::new()
        };

        let mut records = Vec::new();
        for (id, player) in self.players.iter_mut() {
            if !player.is_alive() {
                continue;
            }
            if let Some(item) = self.rng.choose(&components) {
                player.receive_item(item.clone());
            }
            records.push(CombatRecord {
                round: self.round,
                kind: CombatResultKind::Minion,
                player: id,
                opponent: None,
                winner: Some(id),
                damage: 0,
            });
        }
        records
    }

    fn run_pvp_round(&mut self) -> Vec<CombatRecord> {
        let alive = self.alive_players();
        let pairings = self.matchmaker.pair(&alive, &mut self.rng);
        pairings
            .into_iter()
            .map(|pairing| match pairing {
                Pairing::Duel(a, b) => self.resolve_duel(a, b),
                Pairing::Ghost(player) => CombatRecord {
                    round: self.round,
                    kind: CombatResultKind::Ghost,
                    player,
                    opponent: None,
                    winner: Some(player),
                    damage: 0,
                },
            })
            .collect()
    }

    fn resolve_duel(&mut self, a: PlayerId, b: PlayerId) -> CombatRecord {
        let outcome = {
            let team_a: Vec<&Champion> = self.players[a].board.champions().collect();
            let team_b: Vec<&Champion> = self.players[b].board.champions().collect();
            CombatSimulator::new(&self.config).resolve(&team_a, &team_b, self.round, &mut self.combat_rng)
        };

        let winner = match outcome.winner {
            CombatWinner::TeamA => Some((a, b)),
            CombatWinner::TeamB => Some((b, a)),
            CombatWinner::Draw => None,
        };
        if let Some((won, lost)) = winner {
            let damage = outcome.damage;
            let winner_stats = &mut self.players[won].stats;
            winner_stats.wins += 1;
            winner_stats.win_streak += 1;
            winner_stats.loss_streak = 0;
            winner_stats.damage_dealt += damage;

            let loser = &mut self.players[lost];
            loser.stats.losses += 1;
            loser.stats.loss_streak += 1;
            loser.stats.win_streak = 0;
            if loser.take_damage(damage) {
                self.mark_eliminated(lost);
            }
        }

        CombatRecord {
            round: self.round,
            kind: CombatResultKind::Duel,
            player: a,
            opponent: Some(b),
            winner: winner.map(|(won, _)| won),
            damage: outcome.damage,
        }
    }

    fn mark_eliminated(&mut self, id: PlayerId) {
        self.eliminations += 1;
        let order = self.eliminations;
        let round = self.round;
        if let Some(player) = self.players.get_mut(id) {
            player.stats.eliminated_round = Some(round);
            player.stats.elimination_order = Some(order);
        }
        info!(player = %id, round, order, "player eliminated");
    }

    fn refresh_traits(&mut self) {
        if !self.config.features.traits {
            return;
        }
        for (_, player) in self.players.iter_mut() {
            if player.is_alive() {
                player.update_active_traits(&self.catalog);
            }
        }
    }

    fn fire_for_alive(&mut self, event: HookEvent) -> Vec<HookReport> {
        let mut reports = Vec::new();
        for (id, player) in self.players.iter_mut() {
            if !player.is_alive() || player.augments.is_empty() {
                continue;
            }
            let mut ctx = HookContext::new(player, &mut self.pool, &mut self.rng, self.round);
            for (augment, result) in self.registry.apply_all(&mut ctx, event) {
                reports.push((id, augment, result));
            }
        }
        reports
    }

    // === Results ===

    /// At most one player left, or the round counter has passed `max_rounds`.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.alive_players().len() <= 1 || self.round > self.config.max_rounds
    }

    #[must_use]
    pub fn placements(&self) -> Vec<Placement> {
        compute_placements(&self.players, &self.config)
    }

    #[must_use]
    pub fn summary(&self) -> GameSummary {
        let alive = self.alive_players();
        GameSummary {
            rounds_played: self.round,
            placements: self.placements(),
            winner: (alive.len() == 1).then(|| alive[0]),
        }
    }
}
