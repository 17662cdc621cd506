//! Game progress
//!
//! Tracks how many rules have been revealed. The host owns the value and
//! hands it back to the engine on every input event.

use thiserror::Error;

use crate::rules::RULE_COUNT;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressError {
    #[error("Unlocked rule count {value} is outside 1..={max}")]
    OutOfRange { value: usize, max: usize },
}

/// Number of unlocked rules, always within `1..=RULE_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Progress {
    unlocked: usize,
}

impl Progress {
    /// Restores progress from a stored unlocked count.
    ///
    /// # Errors
    ///
    /// Returns [`ProgressError::OutOfRange`] if `unlocked` is zero or greater
    /// than the number of rules.
    pub fn new(unlocked: usize) -> Result<Self, ProgressError> {
        if !(1..=RULE_COUNT).contains(&unlocked) {
            return Err(ProgressError::OutOfRange {
                value: unlocked,
                max: RULE_COUNT,
            });
        }
        Ok(Self { unlocked })
    }

    /// How many rules are currently unlocked.
    pub fn unlocked(self) -> usize {
        self.unlocked
    }

    /// Whether every rule has been revealed.
    pub fn is_complete(self) -> bool {
        self.unlocked == RULE_COUNT
    }

    /// Reveals one more rule, saturating at the last one.
    pub(crate) fn advance(self) -> Self {
        Self {
            unlocked: (self.unlocked + 1).min(RULE_COUNT),
        }
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self { unlocked: 1 }
    }
}
