//! Turn loop driving two strategies over one board

use std::{thread, time::Duration};

use tracing::{debug, instrument};

use crate::{
    Error, Result,
    ports::{GameObserver, Strategy},
    tictactoe::{Board, GameOutcome, Mark, Move},
};

/// Plays games to completion, reporting each move to its observers.
///
/// # Examples
///
/// ```
/// use noughts::{
///     pipeline::GameRunner,
///     strategies::MinimaxStrategy,
///     tictactoe::{Board, GameOutcome},
/// };
///
/// let mut runner = GameRunner::new();
/// let mut x = MinimaxStrategy::exhaustive("X");
/// let mut o = MinimaxStrategy::exhaustive("O");
/// let mut board = Board::new();
///
/// let outcome = runner.play(&mut board, &mut x, &mut o)?;
/// assert_eq!(outcome, GameOutcome::Tie);
/// # Ok::<(), noughts::Error>(())
/// ```
#[derive(Default)]
pub struct GameRunner {
    observers: Vec<Box<dyn GameObserver>>,
    move_delay: Option<Duration>,
}

impl GameRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an observer to the runner
    pub fn with_observer(mut self, observer: Box<dyn GameObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Pause between moves so a person can follow an AI game
    pub fn with_move_delay(mut self, delay: Duration) -> Self {
        self.move_delay = (!delay.is_zero()).then_some(delay);
        self
    }

    /// Play `board` to the end, X moves by `x` and O moves by `o`.
    ///
    /// Play resumes with [`Board::next_mark`], so a loaded game continues
    /// with the right player. A board that is already terminal returns its
    /// outcome without notifying any observer.
    ///
    /// # Errors
    ///
    /// Fails if a strategy fails, proposes a square the board rejects, or an
    /// observer fails.
    #[instrument(skip_all, fields(x = x.name(), o = o.name(), start = %board.encode()))]
    pub fn play(
        &mut self,
        board: &mut Board,
        x: &mut dyn Strategy,
        o: &mut dyn Strategy,
    ) -> Result<GameOutcome> {
        if let Some(outcome) = GameOutcome::from_board(board) {
            return Ok(outcome);
        }

        for observer in &mut self.observers {
            observer.on_game_start(board)?;
        }

        let mut turn = board.next_mark();
        let outcome = loop {
            let strategy: &mut dyn Strategy = match turn {
                Mark::X => &mut *x,
                Mark::O => &mut *o,
            };

            let index = strategy.choose_move(board, turn)?;
            if !board.apply_move(index, turn) {
                return Err(Error::RejectedMove {
                    index,
                    strategy: strategy.name().to_string(),
                });
            }
            debug!(mark = %turn, index, "move applied");

            let mv = Move { index, mark: turn };
            for observer in &mut self.observers {
                observer.on_move(board, mv)?;
            }

            if let Some(outcome) = GameOutcome::from_board(board) {
                break outcome;
            }
            if let Some(delay) = self.move_delay {
                thread::sleep(delay);
            }
            turn = turn.opponent();
        };

        for observer in &mut self.observers {
            observer.on_game_end(board, outcome)?;
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::strategies::{MinimaxStrategy, RandomStrategy};

    /// Always proposes the same square
    struct Stubborn(usize);

    impl Strategy for Stubborn {
        fn choose_move(&mut self, _board: &Board, _mark: Mark) -> Result<usize> {
            Ok(self.0)
        }

        fn name(&self) -> &str {
            "stubborn"
        }
    }

    #[derive(Default)]
    struct Events(Arc<Mutex<Vec<String>>>);

    impl GameObserver for Events {
        fn on_game_start(&mut self, board: &Board) -> Result<()> {
            self.0.lock().unwrap().push(format!("start {}", board.encode()));
            Ok(())
        }

        fn on_move(&mut self, _board: &Board, mv: Move) -> Result<()> {
            self.0.lock().unwrap().push(format!("{} {}", mv.mark, mv.index));
            Ok(())
        }

        fn on_game_end(&mut self, _board: &Board, outcome: GameOutcome) -> Result<()> {
            self.0.lock().unwrap().push(format!("end {outcome}"));
            Ok(())
        }
    }

    #[test]
    fn test_minimax_self_play_ties() {
        let mut runner = GameRunner::new();
        let mut board = Board::new();
        let mut x = MinimaxStrategy::exhaustive("X");
        let mut o = MinimaxStrategy::exhaustive("O");

        let outcome = runner.play(&mut board, &mut x, &mut o).unwrap();
        assert_eq!(outcome, GameOutcome::Tie);
        assert!(board.is_tie());
        assert_eq!(board.move_history().len(), 9);
    }

    #[test]
    fn test_resumes_with_next_mark() {
        let mut runner = GameRunner::new();
        // X to move and X wins at 2 immediately.
        let mut board: Board = "XX.OO....".parse().unwrap();
        let mut x = MinimaxStrategy::with_seed("X", 1);
        let mut o = Stubborn(99);

        let outcome = runner.play(&mut board, &mut x, &mut o).unwrap();
        assert_eq!(outcome, GameOutcome::Win(Mark::X));
        assert_eq!(board.move_history().last().unwrap().index, 2);
    }

    #[test]
    fn test_rejected_move_is_an_error() {
        let mut runner = GameRunner::new();
        let mut board: Board = "X........".parse().unwrap();
        let mut x = RandomStrategy::with_seed("X", 1);
        let mut o = Stubborn(0);

        let result = runner.play(&mut board, &mut x, &mut o);
        assert!(matches!(
            result,
            Err(Error::RejectedMove { index: 0, ref strategy }) if strategy == "stubborn"
        ));
    }

    #[test]
    fn test_terminal_board_returns_outcome() {
        let events = Events::default();
        let log = Arc::clone(&events.0);
        let mut runner = GameRunner::new().with_observer(Box::new(events));
        let mut board: Board = "XXXOO....".parse().unwrap();

        let outcome = runner
            .play(&mut board, &mut Stubborn(5), &mut Stubborn(6))
            .unwrap();
        assert_eq!(outcome, GameOutcome::Win(Mark::X));
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_observer_event_sequence() {
        let events = Events::default();
        let log = Arc::clone(&events.0);
        let mut runner = GameRunner::new().with_observer(Box::new(events));
        let mut board: Board = "XX.OO....".parse().unwrap();

        runner
            .play(&mut board, &mut Stubborn(2), &mut Stubborn(5))
            .unwrap();
        assert_eq!(
            *log.lock().unwrap(),
            vec!["start XX.OO....", "X 2", "end X wins"]
        );
    }
}
