//! Per-player score state and the shared turn loop.

use tracing::{debug, instrument};

use super::{Decision, HumanStrategy, PlayerKind, Strategy, ThresholdStrategy, TurnView};
use crate::console::Console;
use crate::core::{Die, PigConfig};
use crate::error::Result;

/// How a turn ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The player held and banked the turn score.
    Held {
        /// Points added to the total.
        banked: u32,
    },
    /// The player rolled a 1 and lost the turn score.
    Busted {
        /// Turn score lost to the bust.
        forfeited: u32,
    },
}

impl TurnOutcome {
    /// Points added to the total by this turn.
    #[must_use]
    pub fn banked(self) -> u32 {
        match self {
            TurnOutcome::Held { banked } => banked,
            TurnOutcome::Busted { .. } => 0,
        }
    }

    /// Check if the turn ended in a bust.
    #[must_use]
    pub fn is_bust(self) -> bool {
        matches!(self, TurnOutcome::Busted { .. })
    }
}

/// Everything that happened during one turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnSummary {
    /// How the turn ended.
    pub outcome: TurnOutcome,
    /// Every face rolled, in order.
    pub rolls: Vec<u32>,
}

/// A player: name, scores, an owned die and a strategy.
///
/// `total_score` only grows, only at the end of a turn, and only by the turn
/// score at the moment of a hold.
#[derive(Debug)]
pub struct Player {
    name: String,
    total_score: u32,
    turn_score: u32,
    die: Die,
    strategy: Box<dyn Strategy>,
}

impl Player {
    /// Create a player with the given strategy.
    pub fn new(name: impl Into<String>, die: Die, strategy: Box<dyn Strategy>) -> Self {
        Self {
            name: name.into(),
            total_score: 0,
            turn_score: 0,
            die,
            strategy,
        }
    }

    /// Create an interactive player.
    pub fn human(name: impl Into<String>, die: Die) -> Self {
        Self::new(name, die, Box::new(HumanStrategy::new()))
    }

    /// Create a computer player using the threshold policy.
    pub fn computer(name: impl Into<String>, die: Die) -> Self {
        Self::new(name, die, Box::new(ThresholdStrategy::new()))
    }

    /// Start from a banked total other than 0 (handicaps, resumed games).
    #[must_use]
    pub fn with_total_score(mut self, total: u32) -> Self {
        self.total_score = total;
        self
    }

    /// Player name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Banked score.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.total_score
    }

    /// Unbanked score of the turn in progress (0 between turns).
    #[must_use]
    pub fn turn_score(&self) -> u32 {
        self.turn_score
    }

    /// Which kind of player this is.
    #[must_use]
    pub fn kind(&self) -> PlayerKind {
        self.strategy.kind()
    }

    /// The score report line, `"{name} has {total} points"`.
    #[must_use]
    pub fn score_line(&self) -> String {
        format!("{} has {} points", self.name, self.total_score)
    }

    /// Write the score report line to the console.
    pub fn show_score(&self, console: &mut dyn Console) -> Result<()> {
        console.say(&self.score_line())?;
        Ok(())
    }

    /// Play one turn.
    ///
    /// Before each roll the strategy chooses to roll or hold. A 1 ends the
    /// turn and forfeits the turn score; a hold banks it.
    #[instrument(skip_all, fields(player = %self.name, total = self.total_score))]
    pub fn execute_turn(
        &mut self,
        config: &PigConfig,
        console: &mut dyn Console,
    ) -> Result<TurnSummary> {
        self.turn_score = 0;
        let mut rolls = Vec::new();
        let label = match self.kind() {
            PlayerKind::Human => self.name.clone(),
            PlayerKind::Computer => format!("Computer {}", self.name),
        };

        loop {
            let view = TurnView {
                name: &self.name,
                total_score: self.total_score,
                turn_score: self.turn_score,
                rolls: rolls.len(),
                config,
            };

            match self.strategy.decide(&view, console)? {
                Decision::Hold => {
                    let banked = self.turn_score;
                    self.total_score += banked;
                    self.turn_score = 0;
                    debug!(banked, total = self.total_score, "held");
                    console.say(&format!("{label} holds and banks {banked} points."))?;
                    return Ok(TurnSummary {
                        outcome: TurnOutcome::Held { banked },
                        rolls,
                    });
                }
                Decision::Roll => {
                    let value = self.die.roll();
                    rolls.push(value);

                    if value == 1 {
                        let forfeited = self.turn_score;
                        self.turn_score = 0;
                        debug!(forfeited, "busted");
                        console.say(&format!("{label} rolled a 1! 0 points this turn."))?;
                        return Ok(TurnSummary {
                            outcome: TurnOutcome::Busted { forfeited },
                            rolls,
                        });
                    }

                    self.turn_score += value;
                    debug!(roll = value, turn_score = self.turn_score, "rolled");
                    console.say(&format!(
                        "{label} rolled a {value}. Current turn score {}",
                        self.turn_score
                    ))?;
                }
            }
        }
    }
}
