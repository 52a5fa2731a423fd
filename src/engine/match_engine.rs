//! The match: scheduler, round state and the decision-point protocol.

use std::sync::Arc;

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::augments::AugmentRegistry;
use crate::catalog::Catalog;
use crate::core::{Action, ActionRecord, ConfigError, EngineError, MatchConfig, PlayerId};
use crate::players::{OpponentSnapshot, PlayerSnapshot};
use crate::rounds::{CombatRecord, GameRound, GameSummary, RoundType};

use super::decision::{ActionOutcome, DecisionPoint, RunResult};
use super::event::{Event, EventKind};
use super::mask::ActionMask;
use super::scheduler::{EventEngine, EventQueue};

/// Gap between consecutive phases.
pub const PHASE_STEP: f64 = 0.1;
/// Scheduler time a combat phase takes.
pub const COMBAT_DURATION: f64 = 1.0;

/// Everything the scheduler's handlers mutate.
#[derive(Clone, Debug)]
struct MatchState {
    round: GameRound,
    awaiting: Option<PlayerId>,
    actions_taken: u32,
    finished: bool,
    history: Vector<ActionRecord>,
}

/// What one player may observe at a decision point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub round: u32,
    pub stage: u32,
    pub round_type: RoundType,
    pub time: f64,
    pub awaiting: Option<PlayerId>,
    pub player: PlayerSnapshot,
    pub opponents: Vec<OpponentSnapshot>,
    /// Pool stock per cost tier.
    pub pool_by_tier: Vec<u32>,
}

/// One match, driven one decision point at a time.
///
/// ```
/// use std::sync::Arc;
/// use rust_autobattler::augments::AugmentRegistry;
/// use rust_autobattler::catalog::sample_catalog;
/// use rust_autobattler::core::{Action, MatchConfig};
/// use rust_autobattler::engine::{MatchEngine, RunResult};
///
/// let mut engine = MatchEngine::new(
///     Arc::new(sample_catalog()),
///     MatchConfig::fast(),
///     Arc::new(AugmentRegistry::builtin()),
/// )
/// .unwrap();
/// engine.reset(7);
/// loop {
///     match engine.run_until_decision_point().unwrap() {
///         RunResult::Decision(d) => {
///             engine.apply_action(d.player, Action::Pass).unwrap();
///         }
///         RunResult::GameOver(summary) => {
///             assert_eq!(summary.placements.len(), 4);
///             break;
///         }
///     }
/// }
/// ```
#[derive(Clone, Debug)]
pub struct MatchEngine {
    catalog: Arc<Catalog>,
    config: Arc<MatchConfig>,
    registry: Arc<AugmentRegistry>,
    scheduler: EventEngine<MatchState>,
    state: Option<MatchState>,
}

impl MatchEngine {
    /// Build an engine. The match starts at [`reset`](Self::reset).
    pub fn new(
        catalog: Arc<Catalog>,
        config: MatchConfig,
        registry: Arc<AugmentRegistry>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            catalog,
            config: Arc::new(config),
            registry,
            scheduler: Self::build_scheduler(),
            state: None,
        })
    }

    fn build_scheduler() -> EventEngine<MatchState> {
        EventEngine::new()
            .on(EventKind::StartPlanning, on_start_planning)
            .on(EventKind::AugmentSelection, on_augment_selection)
            .on(EventKind::PlayerActionRequired, on_player_action_required)
            .on(EventKind::EndPlanning, on_end_planning)
            .on(EventKind::Carousel, on_carousel)
            .on(EventKind::StartCombat, on_start_combat)
            .on(EventKind::EndCombat, on_end_combat)
            .on(EventKind::EndRound, on_end_round)
            .on(EventKind::GameEnd, on_game_end)
    }

    /// Start a fresh match from `seed`. Any match in progress is discarded.
    pub fn reset(&mut self, seed: u64) {
        self.scheduler.reset();
        let round = GameRound::new(
            Arc::clone(&self.catalog),
            Arc::clone(&self.config),
            Arc::clone(&self.registry),
            seed,
        );
        self.state = Some(MatchState {
            round,
            awaiting: None,
            actions_taken: 0,
            finished: false,
            history: Vector::new(),
        });
        self.scheduler
            .queue_mut()
            .schedule(EventKind::StartPlanning, 0.0, None);
        info!(seed, players = self.config.players, "match reset");
    }

    /// Process events until a player must act or the match ends.
    ///
    /// While a decision is pending this returns that same decision again
    /// without processing anything.
    pub fn run_until_decision_point(&mut self) -> Result<RunResult, EngineError> {
        let state = self.state.as_mut().ok_or(EngineError::NotReset)?;
        loop {
            if state.finished {
                return Ok(RunResult::GameOver(state.round.summary()));
            }
            if let Some(player) = state.awaiting {
                let time = self.scheduler.queue().now();
                return Ok(RunResult::Decision(decision_for(
                    state,
                    player,
                    time,
                    self.config.max_actions_per_round,
                )));
            }
            if self.scheduler.step(state)?.is_none() {
                state.finished = true;
            }
        }
    }

    /// Apply one action for the player at the pending decision point.
    ///
    /// The turn passes on after `pass` or once the player has used
    /// `max_actions_per_round` actions, successful or not.
    pub fn apply_action(
        &mut self,
        player: PlayerId,
        action: Action,
    ) -> Result<ActionOutcome, EngineError> {
        let state = self.state.as_mut().ok_or(EngineError::NotReset)?;
        if state.finished {
            return Err(EngineError::GameOver);
        }
        if !state.round.players().contains(player) {
            return Err(EngineError::UnknownPlayer(player));
        }
        let expected = state.awaiting.ok_or(EngineError::NoPendingDecision)?;
        if expected != player {
            return Err(EngineError::NotAwaitingPlayer {
                expected,
                got: player,
            });
        }

        let catalog = Arc::clone(&self.catalog);
        let (acting, pool, rng) = state
            .round
            .player_with_pool(player)
            .ok_or(EngineError::UnknownPlayer(player))?;
        let result = acting.perform(action, pool, rng);
        if result.is_ok() && self.config.features.traits {
            acting.update_active_traits(&catalog);
        }

        let round = state.round.round();
        state
            .history
            .push_back(ActionRecord::new(player, action, round, state.actions_taken, result.is_ok()));
        state.actions_taken += 1;
        debug!(player = %player, %action, ok = result.is_ok(), "action");

        let turn_over =
            action.ends_turn() || state.actions_taken >= self.config.max_actions_per_round;
        if turn_over {
            state.awaiting = None;
            state.actions_taken = 0;
            let queue = self.scheduler.queue_mut();
            match state.round.next_alive_player(player) {
                Some(next) => queue.schedule(EventKind::PlayerActionRequired, 0.0, Some(next)),
                None => queue.schedule(EventKind::EndPlanning, PHASE_STEP, None),
            }
        }

        Ok(ActionOutcome {
            player,
            action,
            result,
            turn_over,
        })
    }

    /// [`apply_action`](Self::apply_action) with a wire-format action.
    pub fn apply_named(
        &mut self,
        player: PlayerId,
        name: &str,
        args: &[usize],
    ) -> Result<ActionOutcome, EngineError> {
        let action = Action::parse(name, args)?;
        self.apply_action(player, action)
    }

    /// Raw observation for `player`.
    pub fn observe(&self, player: PlayerId) -> Result<Observation, EngineError> {
        let state = self.state.as_ref().ok_or(EngineError::NotReset)?;
        let round = &state.round;
        let me = round.player(player).ok_or(EngineError::UnknownPlayer(player))?;
        Ok(Observation {
            round: round.round(),
            stage: round.stage(),
            round_type: round.round_type(),
            time: self.scheduler.queue().now(),
            awaiting: state.awaiting,
            player: me.snapshot(),
            opponents: round
                .players()
                .iter()
                .filter(|(id, _)| *id != player)
                .map(|(_, p)| p.opponent_snapshot())
                .collect(),
            pool_by_tier: round.pool().counts_by_tier(),
        })
    }

    /// Valid actions for `player`; all false unless it is their turn.
    pub fn action_mask(&self, player: PlayerId) -> Result<ActionMask, EngineError> {
        let state = self.state.as_ref().ok_or(EngineError::NotReset)?;
        let me = state
            .round
            .player(player)
            .ok_or(EngineError::UnknownPlayer(player))?;
        if state.finished || state.awaiting != Some(player) {
            return Ok(ActionMask::none(
                self.config.layout().total_positions(),
                self.config.shop_size,
            ));
        }
        Ok(ActionMask::for_player(me, state.round.pool()))
    }

    // === Accessors ===

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

    /// Round state of the current match.
    #[must_use]
    pub fn game(&self) -> Option<&GameRound> {
        self.state.as_ref().map(|s| &s.round)
    }

    /// Mutable round state, for scripted setups and tests.
    pub fn game_mut(&mut self) -> Option<&mut GameRound> {
        self.state.as_mut().map(|s| &mut s.round)
    }

    #[must_use]
    pub fn awaiting(&self) -> Option<PlayerId> {
        self.state.as_ref().and_then(|s| s.awaiting)
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.as_ref().is_some_and(|s| s.finished)
    }

    /// Every applied action, oldest first.
    #[must_use]
    pub fn history(&self) -> Vector<ActionRecord> {
        self.state
            .as_ref()
            .map(|s| s.history.clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn combat_log(&self) -> Vector<CombatRecord> {
        self.state
            .as_ref()
            .map(|s| s.round.combat_log().clone())
            .unwrap_or_default()
    }

    /// Standings so far, or final standings once the match is over.
    #[must_use]
    pub fn summary(&self) -> Option<GameSummary> {
        self.state.as_ref().map(|s| s.round.summary())
    }

    #[must_use]
    pub fn time(&self) -> f64 {
        self.scheduler.queue().now()
    }

    #[must_use]
    pub fn events_processed(&self) -> u64 {
        self.scheduler.processed()
    }
}

fn decision_for(state: &MatchState, player: PlayerId, time: f64, max_actions: u32) -> DecisionPoint {
    DecisionPoint {
        player,
        round: state.round.round(),
        stage: state.round.stage(),
        time,
        actions_taken: state.actions_taken,
        actions_remaining: max_actions.saturating_sub(state.actions_taken),
    }
}

fn schedule_first_decision(round: &GameRound, queue: &mut EventQueue) {
    match round.first_alive_player() {
        Some(player) => queue.schedule(EventKind::PlayerActionRequired, PHASE_STEP, Some(player)),
        None => queue.schedule(EventKind::GameEnd, 0.0, None),
    }
}

// === Handlers ===

fn on_start_planning(
    state: &mut MatchState,
    _event: &Event,
    queue: &mut EventQueue,
) -> Result<(), EngineError> {
    let round = &mut state.round;
    round.advance_round();
    if round.round_type() == RoundType::Carousel {
        queue.schedule(EventKind::Carousel, PHASE_STEP, None);
        return Ok(());
    }
    round.start_planning();
    if round.config().is_augment_round(round.round()) {
        queue.schedule(EventKind::AugmentSelection, PHASE_STEP, None);
    } else {
        schedule_first_decision(round, queue);
    }
    Ok(())
}

fn on_augment_selection(
    state: &mut MatchState,
    _event: &Event,
    queue: &mut EventQueue,
) -> Result<(), EngineError> {
    state.round.run_augment_selection();
    schedule_first_decision(&state.round, queue);
    Ok(())
}

fn on_player_action_required(
    state: &mut MatchState,
    event: &Event,
    queue: &mut EventQueue,
) -> Result<(), EngineError> {
    let target = event
        .target
        .filter(|p| state.round.player(*p).is_some_and(|p| p.is_alive()));
    match target {
        Some(player) => {
            state.awaiting = Some(player);
            state.actions_taken = 0;
        }
        None => queue.schedule(EventKind::EndPlanning, PHASE_STEP, None),
    }
    Ok(())
}

fn on_end_planning(
    state: &mut MatchState,
    _event: &Event,
    queue: &mut EventQueue,
) -> Result<(), EngineError> {
    state.round.end_planning();
    queue.schedule(EventKind::StartCombat, PHASE_STEP, None);
    Ok(())
}

fn on_carousel(
    state: &mut MatchState,
    _event: &Event,
    queue: &mut EventQueue,
) -> Result<(), EngineError> {
    state.round.run_carousel();
    queue.schedule(EventKind::EndRound, PHASE_STEP, None);
    Ok(())
}

fn on_start_combat(
    state: &mut MatchState,
    _event: &Event,
    queue: &mut EventQueue,
) -> Result<(), EngineError> {
    let records = state.round.run_combat_phase();
    debug!(round = state.round.round(), fights = records.len(), "combat phase");
    queue.schedule(EventKind::EndCombat, COMBAT_DURATION, None);
    Ok(())
}

fn on_end_combat(
    _state: &mut MatchState,
    _event: &Event,
    queue: &mut EventQueue,
) -> Result<(), EngineError> {
    queue.schedule(EventKind::EndRound, PHASE_STEP, None);
    Ok(())
}

fn on_end_round(
    state: &mut MatchState,
    _event: &Event,
    queue: &mut EventQueue,
) -> Result<(), EngineError> {
    let next = if state.round.is_game_over() {
        EventKind::GameEnd
    } else {
        EventKind::StartPlanning
    };
    queue.schedule(next, PHASE_STEP, None);
    Ok(())
}

fn on_game_end(
    state: &mut MatchState,
    _event: &Event,
    _queue: &mut EventQueue,
) -> Result<(), EngineError> {
    state.finished = true;
    state.awaiting = None;
    let summary = state.round.summary();
    info!(
        rounds = summary.rounds_played,
        winner = ?summary.winner,
        "match over"
    );
    Ok(())
}
