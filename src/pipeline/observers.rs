//! Observers for the game runner
//!
//! Console output for interactive play and structured tracing events for
//! everything else.

use std::io::{self, Stdout, Write};

use tracing::info;

use crate::{
    Error, Result,
    ports::GameObserver,
    tictactoe::{Board, GameOutcome, Move},
};

/// Prints the game the way a terminal player sees it.
///
/// The square guide before the first move, then after each move
/// `"X makes a move to square 4"` and the board, then `"X wins!"` or
/// `"It's a tie!"`.
pub struct ConsoleObserver<W> {
    out: W,
}

impl ConsoleObserver<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the writer, mainly for tests
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{text}").map_err(|source| Error::Io {
            operation: "write game output".to_string(),
            source,
        })
    }
}

impl<W: Write + Send> GameObserver for ConsoleObserver<W> {
    fn on_game_start(&mut self, board: &Board) -> Result<()> {
        self.emit(&Board::render_numbers())?;
        if !board.is_initial() {
            self.emit(&board.to_string())?;
        }
        Ok(())
    }

    fn on_move(&mut self, board: &Board, mv: Move) -> Result<()> {
        self.emit(&format!("{} makes a move to square {}", mv.mark, mv.index))?;
        self.emit(&board.to_string())?;
        self.emit("")
    }

    fn on_game_end(&mut self, _board: &Board, outcome: GameOutcome) -> Result<()> {
        match outcome {
            GameOutcome::Win(mark) => self.emit(&format!("{mark} wins!")),
            GameOutcome::Tie => self.emit("It's a tie!"),
        }
    }
}

/// Emits one `info!` event per game and per move
#[derive(Debug, Default)]
pub struct TracingObserver {
    games: usize,
}

impl TracingObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameObserver for TracingObserver {
    fn on_game_start(&mut self, board: &Board) -> Result<()> {
        self.games += 1;
        info!(game = self.games, board = %board.encode(), "game started");
        Ok(())
    }

    fn on_move(&mut self, board: &Board, mv: Move) -> Result<()> {
        info!(game = self.games, mark = %mv.mark, index = mv.index, board = %board.encode(), "move");
        Ok(())
    }

    fn on_game_end(&mut self, board: &Board, outcome: GameOutcome) -> Result<()> {
        info!(
            game = self.games,
            %outcome,
            moves = board.move_history().len(),
            "game finished"
        );
        Ok(())
    }
}
