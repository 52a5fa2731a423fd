//! Scheduled events.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Every event the match scheduler knows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    StartPlanning,
    AugmentSelection,
    /// A decision point: `target` must act before anything else runs.
    PlayerActionRequired,
    EndPlanning,
    Carousel,
    StartCombat,
    EndCombat,
    EndRound,
    GameEnd,
}

impl EventKind {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            EventKind::StartPlanning => "start_planning",
            EventKind::AugmentSelection => "augment_selection",
            EventKind::PlayerActionRequired => "player_action_required",
            EventKind::EndPlanning => "end_planning",
            EventKind::Carousel => "carousel",
            EventKind::StartCombat => "start_combat",
            EventKind::EndCombat => "end_combat",
            EventKind::EndRound => "end_round",
            EventKind::GameEnd => "game_end",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One queued event.
///
/// Ordered by time, then by scheduling sequence, so events at equal times
/// run in the order they were scheduled.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Event {
    pub time: f64,
    pub seq: u64,
    pub kind: EventKind,
    pub target: Option<PlayerId>,
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Event {}

impl PartialOrd for Event {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Event {
    fn cmp(&self, other: &Self) -> Ordering {
        self.time
            .total_cmp(&other.time)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}
