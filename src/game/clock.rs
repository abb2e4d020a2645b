//! Wall-clock limits for timed games.
//!
//! The limit is polled by the engine between turns; nothing interrupts a
//! turn in progress, so a slow human turn can overrun the limit.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of the current time.
pub trait Clock: fmt::Debug {
    /// The current instant.
    fn now(&self) -> Instant;
}

/// The real monotonic clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same time, so a test can keep one handle and give the
/// other to the engine.
///
/// ```
/// use std::time::Duration;
/// use pig::game::{Clock, ManualClock};
///
/// let clock = ManualClock::new();
/// let handle = clock.clone();
/// let before = clock.now();
/// handle.advance(Duration::from_secs(5));
/// assert_eq!(clock.now() - before, Duration::from_secs(5));
/// ```
#[derive(Clone, Debug)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    /// Create a clock frozen at the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    /// Move time forward.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// A time limit measured from when play starts.
#[derive(Debug)]
pub struct TimeBoundary {
    limit: Duration,
    started: Option<Instant>,
    clock: Box<dyn Clock>,
}

impl TimeBoundary {
    /// Create a limit measured on the system clock.
    #[must_use]
    pub fn new(limit: Duration) -> Self {
        Self::with_clock(limit, SystemClock)
    }

    /// Create a limit measured on `clock`.
    pub fn with_clock(limit: Duration, clock: impl Clock + 'static) -> Self {
        Self {
            limit,
            started: None,
            clock: Box::new(clock),
        }
    }

    /// The configured limit.
    #[must_use]
    pub fn limit(&self) -> Duration {
        self.limit
    }

    /// Start timing. Does nothing if already started.
    pub fn start(&mut self) {
        if self.started.is_none() {
            self.started = Some(self.clock.now());
        }
    }

    /// Check whether timing has started.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started.is_some()
    }

    /// Time since start, zero before start.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started
            .map(|start| self.clock.now().saturating_duration_since(start))
            .unwrap_or_default()
    }

    /// Check whether the limit has been reached. Never true before start.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.is_started() && self.elapsed() >= self.limit
    }
}
