//! Players and the strategies that drive their turns.
//!
//! A `Player` owns its score, its die and a `Strategy`. The turn loop in
//! `Player::execute_turn` is shared by every player and enforces the rules
//! (a 1 busts the turn, a hold banks it); the strategy only answers
//! "roll or hold?" before each roll.
//!
//! - `HumanStrategy`: asks the console
//! - `ThresholdStrategy`: holds once the turn score reaches
//!   `min(hold_cap, winning_score - total_score)`

mod computer;
mod factory;
mod human;
mod player;

pub use computer::{hold_threshold, ThresholdStrategy};
pub use factory::PlayerFactory;
pub use human::HumanStrategy;
pub use player::{Player, TurnOutcome, TurnSummary};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::console::Console;
use crate::core::PigConfig;
use crate::error::{PigError, Result};

/// Which kind of player controls a seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// Choices come from the console.
    Human,
    /// Choices come from the threshold policy.
    Computer,
}

impl PlayerKind {
    /// The name used on the command line and in the factory.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PlayerKind::Human => "human",
            PlayerKind::Computer => "computer",
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayerKind {
    type Err = PigError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "human" => Ok(PlayerKind::Human),
            "computer" => Ok(PlayerKind::Computer),
            other => Err(PigError::InvalidKind(other.to_string())),
        }
    }
}

/// A choice made before each roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Roll the die again.
    Roll,
    /// End the turn and bank the turn score.
    Hold,
}

/// What a strategy may look at when deciding.
#[derive(Clone, Copy, Debug)]
pub struct TurnView<'a> {
    /// Name of the deciding player.
    pub name: &'a str,
    /// Banked score before this turn.
    pub total_score: u32,
    /// Unbanked points accumulated this turn.
    pub turn_score: u32,
    /// Rolls made so far this turn.
    pub rolls: usize,
    /// Rules of the game being played.
    pub config: &'a PigConfig,
}

/// Roll-or-hold policy for a player.
pub trait Strategy: fmt::Debug {
    /// The kind of player this strategy implements.
    fn kind(&self) -> PlayerKind;

    /// Decide whether to roll again or hold.
    ///
    /// Called before every roll, including the first roll of a turn.
    fn decide(&mut self, view: &TurnView<'_>, console: &mut dyn Console) -> Result<Decision>;
}
