//! The turn-by-turn game engine.
//!
//! `Game` alternates turns between two players until one reaches the winning
//! score. Given a `TimeBoundary` it becomes a timed game: the limit is
//! checked before the win condition at the top of every iteration, and an
//! expired limit is settled by comparing totals.

use std::cmp::Ordering;

use tracing::{info, instrument};

use super::clock::TimeBoundary;
use super::outcome::{Ending, GameOutcome, GameResult, TurnRecord};
use crate::console::Console;
use crate::core::{PigConfig, PlayerId};
use crate::error::Result;
use crate::players::Player;

/// Where the game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Turns are still being played.
    InProgress,
    /// A player reached the winning score.
    Won(PlayerId),
    /// Time ran out; the result came from comparing totals.
    TimedOut(GameResult),
}

/// A game of Pig between two players.
#[derive(Debug)]
pub struct Game {
    players: [Player; 2],
    config: PigConfig,
    current: PlayerId,
    winner: Option<PlayerId>,
    boundary: Option<TimeBoundary>,
    history: Vec<TurnRecord>,
    status: GameStatus,
    outcome: Option<GameOutcome>,
}

impl Game {
    /// Create an untimed game. `player1` moves first.
    pub fn new(player1: Player, player2: Player, config: PigConfig) -> Self {
        Self {
            players: [player1, player2],
            config,
            current: PlayerId::FIRST,
            winner: None,
            boundary: None,
            history: Vec::new(),
            status: GameStatus::InProgress,
            outcome: None,
        }
    }

    /// Create a game limited to `config.time_limit` of wall-clock time.
    pub fn timed(player1: Player, player2: Player, config: PigConfig) -> Self {
        let boundary = TimeBoundary::new(config.time_limit);
        Self::new(player1, player2, config).with_time_boundary(boundary)
    }

    /// Attach a time limit.
    #[must_use]
    pub fn with_time_boundary(mut self, boundary: TimeBoundary) -> Self {
        self.boundary = Some(boundary);
        self
    }

    /// Game rules.
    #[must_use]
    pub fn config(&self) -> &PigConfig {
        &self.config
    }

    /// A player by seat.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Both players in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Seat to move next.
    #[must_use]
    pub fn current(&self) -> PlayerId {
        self.current
    }

    /// Seat recorded by the last successful `check_winner`.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Turns played so far.
    #[must_use]
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// Check whether a time limit applies.
    #[must_use]
    pub fn is_timed(&self) -> bool {
        self.boundary.is_some()
    }

    /// The final outcome, once the game has ended.
    #[must_use]
    pub fn outcome(&self) -> Option<&GameOutcome> {
        self.outcome.as_ref()
    }

    /// Where the game stands.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check whether any player has reached the winning score.
    ///
    /// Records the first such player in seat order as the winner.
    pub fn check_winner(&mut self) -> bool {
        let winner = PlayerId::both()
            .find(|&id| self.config.is_winning(self.player(id).total()));
        if winner.is_some() {
            self.winner = winner;
        }
        winner.is_some()
    }

    /// Check whether the time limit has run out. Always false when untimed.
    #[must_use]
    pub fn check_time(&self) -> bool {
        self.boundary.as_ref().is_some_and(TimeBoundary::is_expired)
    }

    /// Start the clock of a timed game. Does nothing if already started.
    pub fn start(&mut self) {
        if let Some(boundary) = &mut self.boundary {
            boundary.start();
        }
    }

    /// Play the game to the end.
    #[instrument(skip_all, fields(timed = self.is_timed()))]
    pub fn play(&mut self, console: &mut dyn Console) -> Result<GameOutcome> {
        info!(
            player1 = self.players[0].name(),
            player2 = self.players[1].name(),
            winning_score = self.config.winning_score,
            "game started"
        );
        loop {
            if let Some(outcome) = self.step(console)? {
                return Ok(outcome);
            }
        }
    }

    /// Advance the game by one iteration.
    ///
    /// Checks the time limit, then the winning score; if either fired the
    /// result is reported and returned. Otherwise the current player plays
    /// one turn and `None` is returned. Once the game has ended, returns the
    /// same outcome without reporting again.
    pub fn step(&mut self, console: &mut dyn Console) -> Result<Option<GameOutcome>> {
        if let Some(outcome) = &self.outcome {
            return Ok(Some(outcome.clone()));
        }

        self.start();

        if self.check_time() {
            let result = self.compare_totals();
            self.report_time_up(result, console)?;
            return Ok(Some(self.finish_timed_out(result)));
        }

        if self.check_winner() {
            if let Some(winner) = self.winner {
                let player = self.player(winner);
                console.say(&format!("{} wins!", player.name()))?;
                player.show_score(console)?;
                return Ok(Some(self.finish_won(winner)));
            }
        }

        self.play_turn(console)?;
        Ok(None)
    }

    /// Play one turn for the current player, then pass the die.
    fn play_turn(&mut self, console: &mut dyn Console) -> Result<()> {
        let seat = self.current;
        let player = &mut self.players[seat.index()];

        console.say(&format!("It's {}'s turn...", player.name()))?;
        let turn = player.execute_turn(&self.config, console)?;
        player.show_score(console)?;

        self.history.push(TurnRecord {
            player: seat,
            outcome: turn.outcome,
            rolls: turn.rolls,
            total_after: player.total(),
        });
        self.current = seat.other();

        console.say("")?;
        console.say(&"=".repeat(40))?;

        Ok(())
    }

    fn compare_totals(&self) -> GameResult {
        let first = self.player(PlayerId::FIRST).total();
        let second = self.player(PlayerId::SECOND).total();
        match first.cmp(&second) {
            Ordering::Greater => GameResult::Winner(PlayerId::FIRST),
            Ordering::Less => GameResult::Winner(PlayerId::SECOND),
            Ordering::Equal => GameResult::Draw,
        }
    }

    fn report_time_up(&self, result: GameResult, console: &mut dyn Console) -> Result<()> {
        console.say("Time's up!")?;
        match result {
            GameResult::Winner(id) => {
                console.say(&format!("{} wins!", self.player(id).name()))?;
            }
            GameResult::Draw => console.say("It's a tie!")?,
        }
        Ok(())
    }

    fn finish_won(&mut self, winner: PlayerId) -> GameOutcome {
        let result = GameResult::Winner(winner);
        self.finish(GameStatus::Won(winner), result, Ending::ScoreReached)
    }

    fn finish_timed_out(&mut self, result: GameResult) -> GameOutcome {
        self.finish(GameStatus::TimedOut(result), result, Ending::TimeExpired)
    }

    fn finish(
        &mut self,
        status: GameStatus,
        result: GameResult,
        ending: Ending,
    ) -> GameOutcome {
        let outcome = GameOutcome {
            result,
            ending,
            scores: [self.players[0].total(), self.players[1].total()],
            turns: self.history.len(),
        };
        info!(
            ?result,
            ?ending,
            scores = ?outcome.scores,
            turns = outcome.turns,
            "game over"
        );
        self.status = status;
        self.outcome = Some(outcome.clone());
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::core::Die;
    use crate::game::ManualClock;
    use std::time::Duration;

    fn computer(name: &str, rolls: &[u32]) -> Player {
        Player::computer(name, Die::loaded(6, rolls.iter().copied()))
    }

    fn game(p1: Player, p2: Player) -> Game {
        Game::new(p1, p2, PigConfig::default())
    }

    fn timed_game(p1: Player, p2: Player, limit_secs: u64, clock: &ManualClock) -> Game {
        let boundary = TimeBoundary::with_clock(Duration::from_secs(limit_secs), clock.clone());
        game(p1, p2).with_time_boundary(boundary)
    }

    // =========================================================================
    // Turn order and win check
    // =========================================================================

    #[test]
    fn test_initial_state() {
        let game = game(computer("A", &[2]), computer("B", &[2]));
        assert_eq!(game.current(), PlayerId::FIRST);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.winner(), None);
        assert!(!game.is_timed());
        assert!(!game.check_time());
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = game(computer("A", &[1]), computer("B", &[1]));
        let mut console = ScriptedConsole::default();

        for expected in [PlayerId::FIRST, PlayerId::SECOND, PlayerId::FIRST] {
            assert!(game.step(&mut console).unwrap().is_none());
            assert_eq!(game.history().last().unwrap().player, expected);
        }
        assert_eq!(game.current(), PlayerId::SECOND);
        assert!(console.said("It's A's turn..."));
        assert!(console.said("B has 0 points"));
    }

    #[test]
    fn test_check_winner_prefers_first_seat() {
        let p1 = computer("A", &[2]).with_total_score(100);
        let p2 = computer("B", &[2]).with_total_score(120);
        let mut game = game(p1, p2);

        assert!(game.check_winner());
        assert_eq!(game.winner(), Some(PlayerId::FIRST));
    }

    #[test]
    fn test_check_winner_below_score() {
        let p1 = computer("A", &[2]).with_total_score(99);
        let p2 = computer("B", &[2]).with_total_score(100);
        let mut game1 = game(p1, p2);

        assert!(game1.check_winner());
        assert_eq!(game1.winner(), Some(PlayerId::SECOND));

        let mut game2 = game(computer("A", &[2]), computer("B", &[2]));
        assert!(!game2.check_winner());
        assert_eq!(game2.winner(), None);
    }

    #[test]
    fn test_win_at_99_fires_before_next_turn() {
        let p1 = computer("A", &[2]).with_total_score(99);
        let mut game = game(p1, computer("B", &[6]));
        let mut console = ScriptedConsole::default();

        let outcome = game.play(&mut console).unwrap();

        assert_eq!(outcome.result, GameResult::Winner(PlayerId::FIRST));
        assert_eq!(outcome.ending, Ending::ScoreReached);
        assert_eq!(outcome.turns, 1);
        assert_eq!(outcome.scores, [101, 0]);
        assert_eq!(game.status(), GameStatus::Won(PlayerId::FIRST));
        assert!(console.said("A wins!"));
        assert!(console.said("A has 101 points"));
    }

    #[test]
    fn test_step_after_finish_does_not_report_again() {
        let p1 = computer("A", &[2]).with_total_score(100);
        let mut game = game(p1, computer("B", &[2]));
        let mut console = ScriptedConsole::default();

        let first = game.step(&mut console).unwrap();
        let lines = console.lines().len();
        let second = game.step(&mut console).unwrap();

        assert_eq!(first, second);
        assert_eq!(console.lines().len(), lines);
    }

    #[test]
    fn test_finished_game_plays_no_more_turns() {
        let p1 = computer("A", &[6, 6, 6, 6, 6]).with_total_score(80);
        let mut game = game(p1, computer("B", &[6]));
        let mut console = ScriptedConsole::default();

        let outcome = game.play(&mut console).unwrap();
        let totals = [game.players()[0].total(), game.players()[1].total()];

        for _ in 0..3 {
            assert_eq!(game.step(&mut console).unwrap().as_ref(), Some(&outcome));
        }
        assert_eq!(game.history().len(), outcome.turns);
        assert_eq!(game.players()[0].total(), totals[0]);
        assert_eq!(game.players()[1].total(), totals[1]);
        assert_eq!(game.current(), PlayerId::SECOND);
    }

    // =========================================================================
    // Timed games
    // =========================================================================

    #[test]
    fn test_timed_game_compares_totals() {
        let clock = ManualClock::new();
        let p2 = computer("B", &[6, 6, 6, 6, 6]);
        let mut game = timed_game(computer("A", &[5, 1]), p2, 60, &clock);
        let mut console = ScriptedConsole::default();

        // A busts, B banks 30
        assert!(game.step(&mut console).unwrap().is_none());
        assert!(game.step(&mut console).unwrap().is_none());

        clock.advance(Duration::from_secs(60));
        let outcome = game.step(&mut console).unwrap().unwrap();

        assert_eq!(outcome.result, GameResult::Winner(PlayerId::SECOND));
        assert_eq!(outcome.ending, Ending::TimeExpired);
        assert_eq!(
            game.status(),
            GameStatus::TimedOut(GameResult::Winner(PlayerId::SECOND))
        );
        assert!(console.said("Time's up!"));
        assert!(console.said("B wins!"));
    }

    #[test]
    fn test_timed_game_tie() {
        let clock = ManualClock::new();
        let mut game = timed_game(computer("A", &[1]), computer("B", &[1]), 1, &clock);
        let mut console = ScriptedConsole::default();

        game.start();
        clock.advance(Duration::from_secs(1));
        let outcome = game.play(&mut console).unwrap();

        assert_eq!(outcome.result, GameResult::Draw);
        assert_eq!(outcome.ending, Ending::TimeExpired);
        assert_eq!(outcome.turns, 0);
        assert_eq!(game.status(), GameStatus::TimedOut(GameResult::Draw));
        assert!(console.said("It's a tie!"));
    }

    #[test]
    fn test_score_win_in_timed_game_is_won_status() {
        let clock = ManualClock::new();
        let p1 = computer("A", &[2]).with_total_score(100);
        let p2 = computer("B", &[2]).with_total_score(100);
        let mut game = timed_game(p1, p2, 60, &clock);

        let outcome = game.play(&mut ScriptedConsole::default()).unwrap();

        // Equal totals on a score win still go to the first seat, never a draw
        assert_eq!(outcome.result, GameResult::Winner(PlayerId::FIRST));
        assert_eq!(outcome.ending, Ending::ScoreReached);
        assert_eq!(game.status(), GameStatus::Won(PlayerId::FIRST));
    }

    #[test]
    fn test_time_checked_before_win() {
        let clock = ManualClock::new();
        let p1 = computer("A", &[2]).with_total_score(99);
        let p2 = computer("B", &[2]).with_total_score(40);
        let mut game = timed_game(p1, p2, 10, &clock);
        let mut console = ScriptedConsole::default();

        // A reaches 101 and time runs out during the same turn
        game.step(&mut console).unwrap();
        clock.advance(Duration::from_secs(10));
        let outcome = game.step(&mut console).unwrap().unwrap();

        assert_eq!(outcome.ending, Ending::TimeExpired);
        assert_eq!(outcome.result, GameResult::Winner(PlayerId::FIRST));
        assert_eq!(game.status(), GameStatus::TimedOut(outcome.result));
        assert_eq!(game.winner(), None);
        assert!(console.said("Time's up!"));
    }
}
