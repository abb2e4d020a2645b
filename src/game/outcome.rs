//! Game results and turn history.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::players::TurnOutcome;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Equal scores when time ran out.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// The winning seat, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}

/// What ended the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ending {
    /// A player reached the winning score.
    ScoreReached,
    /// The time limit ran out and scores were compared.
    TimeExpired,
}

/// Final report of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// Who won.
    pub result: GameResult,
    /// Why the game ended.
    pub ending: Ending,
    /// Banked totals, indexed by seat.
    pub scores: [u32; 2],
    /// Turns played.
    pub turns: usize,
}

impl GameOutcome {
    /// Final total of a seat.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> u32 {
        self.scores[player.index()]
    }
}

/// One completed turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnRecord {
    /// Seat that played the turn.
    pub player: PlayerId,
    /// How the turn ended.
    pub outcome: TurnOutcome,
    /// Faces rolled, in order.
    pub rolls: Vec<u32>,
    /// The player's total after the turn.
    pub total_after: u32,
}
