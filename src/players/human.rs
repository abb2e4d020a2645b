//! Interactive player: every decision is typed at the console.

use tracing::debug;

use super::{Decision, PlayerKind, Strategy, TurnView};
use crate::console::Console;
use crate::error::{PigError, Result};

const PROMPT: &str = "Press r to roll, h to hold and bank your score: ";
const INVALID: &str = "Invalid input. Please enter 'r' or 'h'.";

/// Strategy that asks the console before every roll.
///
/// Accepts `r`/`roll` and `h`/`hold` in any case. Anything else is rejected
/// and the prompt repeats.
#[derive(Clone, Copy, Debug, Default)]
pub struct HumanStrategy;

impl HumanStrategy {
    /// Create an interactive strategy.
    pub fn new() -> Self {
        Self
    }

    /// Parse one line of input into a decision.
    #[must_use]
    pub fn parse(input: &str) -> Option<Decision> {
        match input.trim().to_ascii_lowercase().as_str() {
            "r" | "roll" => Some(Decision::Roll),
            "h" | "hold" => Some(Decision::Hold),
            _ => None,
        }
    }
}

impl Strategy for HumanStrategy {
    fn kind(&self) -> PlayerKind {
        PlayerKind::Human
    }

    fn decide(&mut self, view: &TurnView<'_>, console: &mut dyn Console) -> Result<Decision> {
        loop {
            let Some(line) = console.read_line(PROMPT)? else {
                return Err(PigError::InputClosed {
                    player: view.name.to_string(),
                });
            };

            match Self::parse(&line) {
                Some(decision) => return Ok(decision),
                None => {
                    debug!(player = view.name, input = %line, "rejected input");
                    console.say(INVALID)?;
                }
            }
        }
    }
}
