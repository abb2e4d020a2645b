//! Game engine: turn alternation, win condition and optional time limit.

mod clock;
mod engine;
mod outcome;

pub use clock::{Clock, ManualClock, SystemClock, TimeBoundary};
pub use engine::{Game, GameStatus};
pub use outcome::{Ending, GameOutcome, GameResult, TurnRecord};
