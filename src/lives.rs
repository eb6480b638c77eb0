//! Per-side life counters that persist across matches.

use crate::common::Side;

/// Remaining lives for X and O, clamped at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct LifeTracker {
    starting: u32,
    remaining: [u32; 2],
}

impl LifeTracker {
    /// Both sides start with `starting` lives.
    pub fn new(starting: u32) -> Self {
        Self {
            starting,
            remaining: [starting; 2],
        }
    }

    /// Take one life from `side`. Returns `true` only when this loss brought
    /// the counter from a positive value down to zero.
    pub fn report_loss(&mut self, side: Side) -> bool {
        let lives = &mut self.remaining[side.slot()];
        if *lives == 0 {
            return false;
        }
        *lives -= 1;
        *lives == 0
    }

    pub fn lives_of(&self, side: Side) -> u32 {
        self.remaining[side.slot()]
    }

    /// Restore both counters to the starting value.
    pub fn reset(&mut self) {
        self.remaining = [self.starting; 2];
    }

    pub fn starting(&self) -> u32 {
        self.starting
    }

    /// Returns `true` when either side has run out of lives.
    pub fn is_depleted(&self) -> bool {
        self.remaining.iter().any(|&l| l == 0)
    }
}

impl Default for LifeTracker {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_STARTING_LIVES)
    }
}
