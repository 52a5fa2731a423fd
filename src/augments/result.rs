//! What a hook did.

use serde::{Deserialize, Serialize};

/// Report from one hook invocation.
///
/// The hook has already applied its changes to the player; the deltas are
/// informational (logging, reward shaping).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AugmentResult {
    pub success: bool,
    /// Champion ids granted.
    pub grants: Vec<String>,
    pub gold_delta: i64,
    pub xp_delta: u32,
    pub rerolls_granted: u32,
    /// Champion ids whose live stats or flags changed.
    pub affected_champions: Vec<String>,
    pub message: Option<String>,
}

impl Default for AugmentResult {
    fn default() -> Self {
        Self::neutral()
    }
}

impl AugmentResult {
    /// Success with no effect.
    #[must_use]
    pub fn neutral() -> Self {
        Self {
            success: true,
            grants: Vec::new(),
            gold_delta: 0,
            xp_delta: 0,
            rerolls_granted: 0,
            affected_champions: Vec::new(),
            message: None,
        }
    }

    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            ..Self::neutral()
        }
    }

    /// Fold another result into this one. Fails if either failed.
    pub fn merge(&mut self, other: AugmentResult) {
        self.success &= other.success;
        self.grants.extend(other.grants);
        self.gold_delta += other.gold_delta;
        self.xp_delta += other.xp_delta;
        self.rerolls_granted += other.rerolls_granted;
        self.affected_champions.extend(other.affected_champions);
        if self.message.is_none() {
            self.message = other.message;
        }
    }

    /// Whether the hook changed anything.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.grants.is_empty()
            && self.gold_delta == 0
            && self.xp_delta == 0
            && self.rerolls_granted == 0
            && self.affected_champions.is_empty()
    }
}
