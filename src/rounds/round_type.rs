//! Round kinds.

use serde::{Deserialize, Serialize};

use crate::core::MatchConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundType {
    /// Everyone receives an item component; no fights.
    Carousel,
    /// Everyone beats the neutral wave; no damage.
    Minion,
    /// Player-vs-player fights.
    Combat,
}

impl RoundType {
    /// Kind of `round` under `config`.
    ///
    /// Carousel rounds play as combat rounds when the carousel feature is
    /// off.
    #[must_use]
    pub fn for_round(round: u32, config: &MatchConfig) -> Self {
        if config.features.carousel && config.is_carousel_round(round) {
            RoundType::Carousel
        } else if config.is_minion_round(round) {
            RoundType::Minion
        } else {
            RoundType::Combat
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            RoundType::Carousel => "carousel",
            RoundType::Minion => "minion",
            RoundType::Combat => "combat",
        }
    }
}

impl std::fmt::Display for RoundType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
