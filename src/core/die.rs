//! A single die.
//!
//! A `Die` is either fair (backed by its own `GameRng` stream) or loaded
//! (replays a fixed sequence of faces). Loaded dice make turn traces
//! reproducible without depending on the RNG algorithm.

use super::rng::GameRng;

/// Where a die's faces come from.
#[derive(Clone, Debug)]
enum Faces {
    Fair(GameRng),
    Loaded { rolls: Vec<u32>, next: usize },
}

/// A die with `sides` faces numbered `1..=sides`.
#[derive(Clone, Debug)]
pub struct Die {
    sides: u32,
    faces: Faces,
}

impl Die {
    /// Create a fair die drawing from `rng`.
    #[must_use]
    pub fn new(sides: u32, rng: GameRng) -> Self {
        assert!(sides > 0, "A die needs at least 1 side");
        Self {
            sides,
            faces: Faces::Fair(rng),
        }
    }

    /// Create a fair six-sided die.
    #[must_use]
    pub fn six_sided(rng: GameRng) -> Self {
        Self::new(6, rng)
    }

    /// Create a loaded die that replays `rolls`, starting over when exhausted.
    ///
    /// ```
    /// use pig::core::Die;
    ///
    /// let mut die = Die::loaded(6, [4, 1]);
    /// assert_eq!(die.roll(), 4);
    /// assert_eq!(die.roll(), 1);
    /// assert_eq!(die.roll(), 4);
    /// ```
    #[must_use]
    pub fn loaded(sides: u32, rolls: impl IntoIterator<Item = u32>) -> Self {
        assert!(sides > 0, "A die needs at least 1 side");
        let rolls: Vec<u32> = rolls.into_iter().collect();
        assert!(!rolls.is_empty(), "A loaded die needs at least one roll");
        assert!(
            rolls.iter().all(|r| (1..=sides).contains(r)),
            "Loaded rolls must be between 1 and {sides}"
        );
        Self {
            sides,
            faces: Faces::Loaded { rolls, next: 0 },
        }
    }

    /// Number of faces.
    #[must_use]
    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// Roll the die.
    pub fn roll(&mut self) -> u32 {
        match &mut self.faces {
            Faces::Fair(rng) => rng.roll(self.sides),
            Faces::Loaded { rolls, next } => {
                let value = rolls[*next];
                *next = (*next + 1) % rolls.len();
                value
            }
        }
    }
}
