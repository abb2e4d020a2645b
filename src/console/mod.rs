//! Line-based console I/O.
//!
//! The game never touches stdin/stdout directly. Interactive players read
//! their roll/hold choices through a `Console`, and every status line the
//! engine reports is written to one.
//!
//! - `TextConsole`: any `BufRead` + `Write` pair (stdin/stdout in the binary)
//! - `ScriptedConsole`: canned input, captured output (tests)
//! - `SilentConsole`: no input, discarded output (simulations)

mod scripted;

pub use scripted::ScriptedConsole;

use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Source of player input and sink for game messages.
pub trait Console {
    /// Show `prompt` and read one line of input, without the line terminator.
    ///
    /// Returns `Ok(None)` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Write one line of output.
    fn say(&mut self, line: &str) -> io::Result<()>;
}

/// Console over a reader/writer pair.
#[derive(Debug)]
pub struct TextConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TextConsole<R, W> {
    /// Create a console reading from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl TextConsole<StdinLock<'static>, Stdout> {
    /// Console over the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for TextConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }
}

/// Console with no input that discards all output.
///
/// Suitable for games between computer players only.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentConsole;

impl Console for SilentConsole {
    fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        Ok(None)
    }

    fn say(&mut self, _line: &str) -> io::Result<()> {
        Ok(())
    }
}
