//! Error types for the game.

use thiserror::Error;

/// Errors raised while setting up or playing a game.
#[derive(Error, Debug)]
pub enum PigError {
    /// A player kind other than `human` or `computer` was requested.
    #[error("Invalid player type: {0}")]
    InvalidKind(String),

    /// The console ran out of input in the middle of an interactive turn.
    #[error("Input closed during {player}'s turn")]
    InputClosed {
        /// Name of the player whose turn was interrupted.
        player: String,
    },

    /// Reading from or writing to the console failed.
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for game operations.
pub type Result<T> = std::result::Result<T, PigError>;
