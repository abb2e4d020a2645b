//! # pig
//!
//! The dice game Pig for two players, human or computer.
//!
//! On your turn you roll one die as often as you like. Every roll adds to
//! your turn score, except a 1, which wipes the turn score and ends your
//! turn. Hold to bank the turn score into your total. First to the winning
//! score (100) wins; a timed game instead ends after 60 seconds and the
//! higher total wins.
//!
//! ## Design Principles
//!
//! 1. **One Turn Loop**: Human and computer players share
//!    `Player::execute_turn`. They differ only in their `Strategy`, which
//!    answers "roll or hold?" before each roll.
//!
//! 2. **One Configuration**: `PigConfig` is threaded into the engine and into
//!    the computer's hold threshold, so both agree on the winning score.
//!
//! 3. **Reproducible**: Dice draw from forked `GameRng` streams, so a seed
//!    reproduces an entire game.
//!
//! ## Example
//!
//! ```
//! use pig::console::SilentConsole;
//! use pig::core::PigConfig;
//! use pig::game::Game;
//! use pig::players::{PlayerFactory, PlayerKind};
//!
//! let config = PigConfig::default();
//! let mut factory = PlayerFactory::new(config.clone(), 42);
//! let p1 = factory.create("Player 1", PlayerKind::Computer);
//! let p2 = factory.create("Player 2", PlayerKind::Computer);
//!
//! let mut game = Game::new(p1, p2, config);
//! let outcome = game.play(&mut SilentConsole).unwrap();
//! assert!(outcome.scores.iter().any(|&s| s >= 100));
//! ```
//!
//! ## Modules
//!
//! - `core`: Seats, dice, RNG, configuration
//! - `console`: Line-based input and output
//! - `players`: Players, strategies, factory
//! - `game`: Engine, time limit, outcomes
//! - `error`: Error type

pub mod console;
pub mod core;
pub mod error;
pub mod game;
pub mod players;

// Re-export commonly used types
pub use crate::core::{Die, GameRng, PigConfig, PlayerId};

pub use crate::console::{Console, ScriptedConsole, SilentConsole, TextConsole};

pub use crate::error::{PigError, Result};

pub use crate::game::{
    Clock, Ending, Game, GameOutcome, GameResult, GameStatus, ManualClock, SystemClock,
    TimeBoundary, TurnRecord,
};

pub use crate::players::{
    hold_threshold, Decision, HumanStrategy, Player, PlayerFactory, PlayerKind, Strategy,
    ThresholdStrategy, TurnOutcome, TurnSummary, TurnView,
};
