//! Computer player: hold once the turn is worth enough.

use super::{Decision, PlayerKind, Strategy, TurnView};
use crate::console::Console;
use crate::core::PigConfig;
use crate::error::Result;

/// Turn score at which the computer holds.
///
/// `min(hold_cap, winning_score - total_score)`: chase `hold_cap` points per
/// turn, but stop as soon as the turn would win the game. At least 1 while
/// `total_score < winning_score`.
///
/// ```
/// use pig::core::PigConfig;
/// use pig::players::hold_threshold;
///
/// let config = PigConfig::default();
/// assert_eq!(hold_threshold(&config, 0), 25);
/// assert_eq!(hold_threshold(&config, 90), 10);
/// assert_eq!(hold_threshold(&config, 99), 1);
/// ```
#[must_use]
pub fn hold_threshold(config: &PigConfig, total_score: u32) -> u32 {
    config.hold_cap.min(config.points_needed(total_score))
}

/// The computer's threshold policy.
///
/// Always opens a turn with a roll, then holds once the turn score reaches
/// `hold_threshold`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThresholdStrategy;

impl ThresholdStrategy {
    /// Create the threshold policy.
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for ThresholdStrategy {
    fn kind(&self) -> PlayerKind {
        PlayerKind::Computer
    }

    fn decide(&mut self, view: &TurnView<'_>, _console: &mut dyn Console) -> Result<Decision> {
        if view.rolls == 0 {
            return Ok(Decision::Roll);
        }

        if view.turn_score >= hold_threshold(view.config, view.total_score) {
            Ok(Decision::Hold)
        } else {
            Ok(Decision::Roll)
        }
    }
}
