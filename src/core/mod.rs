//! Core types: seats, dice, RNG, configuration.
//!
//! These are the leaves everything else is built from. None of them know
//! about turns or consoles.

pub mod config;
pub mod die;
pub mod player;
pub mod rng;

pub use config::{PigConfig, DIE_SIDES, HOLD_CAP, TIME_LIMIT_SECS, WINNING_SCORE};
pub use die::Die;
pub use player::PlayerId;
pub use rng::GameRng;
