//! Console with canned input and captured output.

use std::collections::VecDeque;
use std::io;

use super::Console;

/// Console that replays scripted input lines and records everything said.
///
/// ```
/// use pig::console::{Console, ScriptedConsole};
///
/// let mut console = ScriptedConsole::new(["r", "h"]);
/// assert_eq!(console.read_line("> ").unwrap().as_deref(), Some("r"));
/// console.say("hello").unwrap();
/// assert_eq!(console.lines(), ["hello"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: Vec<String>,
    prompts: usize,
}

impl ScriptedConsole {
    /// Create a console that will answer prompts with `input`, in order.
    pub fn new<I, S>(input: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: input.into_iter().map(Into::into).collect(),
            output: Vec::new(),
            prompts: 0,
        }
    }

    /// Lines written so far.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.output
    }

    /// Number of prompts shown.
    #[must_use]
    pub fn prompts(&self) -> usize {
        self.prompts
    }

    /// Input lines not yet consumed.
    #[must_use]
    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }

    /// Check whether any output line equals `line`.
    #[must_use]
    pub fn said(&self, line: &str) -> bool {
        self.output.iter().any(|l| l == line)
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        self.prompts += 1;
        Ok(self.input.pop_front())
    }

    fn say(&mut self, line: &str) -> io::Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }
}
