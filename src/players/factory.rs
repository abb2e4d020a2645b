//! Player construction from a requested kind.

use tracing::debug;

use super::{Player, PlayerKind};
use crate::core::{Die, GameRng, PigConfig};
use crate::error::Result;

/// Builds players, each with its own die.
///
/// Every die draws from a stream forked off one seeded `GameRng`, so a
/// single seed reproduces every roll of a game.
///
/// ```
/// use pig::core::PigConfig;
/// use pig::players::{PlayerFactory, PlayerKind};
///
/// let mut factory = PlayerFactory::new(PigConfig::default(), 42);
/// let p1 = factory.create_player("Player 1", "human").unwrap();
/// let p2 = factory.create("Player 2", PlayerKind::Computer);
/// assert_eq!(p1.kind(), PlayerKind::Human);
/// assert_eq!(p2.kind(), PlayerKind::Computer);
///
/// assert!(factory.create_player("Player 3", "robot").is_err());
/// ```
#[derive(Debug)]
pub struct PlayerFactory {
    die_sides: u32,
    rng: GameRng,
}

impl PlayerFactory {
    /// Create a factory whose dice derive from `seed`.
    #[must_use]
    pub fn new(config: PigConfig, seed: u64) -> Self {
        Self::with_rng(config, GameRng::new(seed))
    }

    /// Create a factory seeded from the operating system.
    #[must_use]
    pub fn from_entropy(config: PigConfig) -> Self {
        Self::with_rng(config, GameRng::from_entropy())
    }

    fn with_rng(config: PigConfig, rng: GameRng) -> Self {
        Self {
            die_sides: config.die_sides,
            rng,
        }
    }

    /// Seed every die of this factory derives from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Create a player from a kind name, `"human"` or `"computer"`.
    ///
    /// # Errors
    ///
    /// Returns `PigError::InvalidKind` for any other kind.
    pub fn create_player(&mut self, name: &str, kind: &str) -> Result<Player> {
        let kind: PlayerKind = kind.parse()?;
        Ok(self.create(name, kind))
    }

    /// Create a player of a known kind.
    pub fn create(&mut self, name: &str, kind: PlayerKind) -> Player {
        debug!(name, %kind, "creating player");
        let die = Die::new(self.die_sides, self.rng.fork());
        match kind {
            PlayerKind::Human => Player::human(name, die),
            PlayerKind::Computer => Player::computer(name, die),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::SilentConsole;
    use crate::error::PigError;

    #[test]
    fn test_create_player_kinds() {
        let mut factory = PlayerFactory::new(PigConfig::default(), 1);

        let human = factory.create_player("Ada", "human").unwrap();
        assert_eq!(human.name(), "Ada");
        assert_eq!(human.kind(), PlayerKind::Human);
        assert_eq!(human.total(), 0);

        let computer = factory.create_player("HAL", "computer").unwrap();
        assert_eq!(computer.kind(), PlayerKind::Computer);
    }

    #[test]
    fn test_invalid_kind() {
        let mut factory = PlayerFactory::new(PigConfig::default(), 1);
        let err = factory.create_player("Ada", "Human ").unwrap_err();
        assert!(matches!(err, PigError::InvalidKind(ref k) if k == "Human "));
    }

    #[test]
    fn test_same_seed_same_players() {
        let config = PigConfig::default();
        let mut a = PlayerFactory::new(config.clone(), 7);
        let mut b = PlayerFactory::new(config.clone(), 7);

        let mut pa = a.create("HAL", PlayerKind::Computer);
        let mut pb = b.create("HAL", PlayerKind::Computer);

        for _ in 0..10 {
            let ta = pa.execute_turn(&config, &mut SilentConsole).unwrap();
            let tb = pb.execute_turn(&config, &mut SilentConsole).unwrap();
            assert_eq!(ta, tb);
        }
        assert_eq!(a.seed(), 7);
    }

    #[test]
    fn test_players_get_independent_dice() {
        let config = PigConfig::default();
        let mut factory = PlayerFactory::new(config.clone(), 11);
        let mut p1 = factory.create("One", PlayerKind::Computer);
        let mut p2 = factory.create("Two", PlayerKind::Computer);

        let rolls1: Vec<u32> = (0..10)
            .flat_map(|_| p1.execute_turn(&config, &mut SilentConsole).unwrap().rolls)
            .collect();
        let rolls2: Vec<u32> = (0..10)
            .flat_map(|_| p2.execute_turn(&config, &mut SilentConsole).unwrap().rolls)
            .collect();

        assert_ne!(rolls1, rolls2);
    }
}
