//! Game configuration.
//!
//! A single `PigConfig` is threaded through the engine and into the computer
//! player's hold policy, so the winning score lives in exactly one place.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Score that ends an untimed game.
pub const WINNING_SCORE: u32 = 100;

/// Faces on the game die.
pub const DIE_SIDES: u32 = 6;

/// Largest turn score the computer player chases before holding.
pub const HOLD_CAP: u32 = 25;

/// Length of a timed game, in seconds.
pub const TIME_LIMIT_SECS: u64 = 60;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PigConfig {
    /// First total to reach this score wins.
    pub winning_score: u32,

    /// Faces on each player's die.
    pub die_sides: u32,

    /// Turn score at which the computer holds, unless fewer points are
    /// needed to win.
    pub hold_cap: u32,

    /// Wall-clock budget for timed games.
    pub time_limit: Duration,
}

impl Default for PigConfig {
    fn default() -> Self {
        Self {
            winning_score: WINNING_SCORE,
            die_sides: DIE_SIDES,
            hold_cap: HOLD_CAP,
            time_limit: Duration::from_secs(TIME_LIMIT_SECS),
        }
    }
}

impl PigConfig {
    /// Create the standard configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the winning score.
    #[must_use]
    pub fn with_winning_score(mut self, score: u32) -> Self {
        assert!(score > 0, "Winning score must be positive");
        self.winning_score = score;
        self
    }

    /// Set the number of die faces.
    #[must_use]
    pub fn with_die_sides(mut self, sides: u32) -> Self {
        assert!(sides > 1, "A Pig die needs at least 2 sides");
        self.die_sides = sides;
        self
    }

    /// Set the computer player's hold cap.
    #[must_use]
    pub fn with_hold_cap(mut self, cap: u32) -> Self {
        assert!(cap > 0, "Hold cap must be positive");
        self.hold_cap = cap;
        self
    }

    /// Set the time limit for timed games.
    #[must_use]
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }

    /// Check whether a banked total wins the game.
    #[must_use]
    pub fn is_winning(&self, total: u32) -> bool {
        total >= self.winning_score
    }

    /// Points still needed to reach the winning score.
    #[must_use]
    pub fn points_needed(&self, total: u32) -> u32 {
        self.winning_score.saturating_sub(total)
    }
}
