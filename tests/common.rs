//! Common helpers for the noughts test suite.

#![allow(dead_code)]

use noughts::{
    pipeline::GameRunner,
    ports::Strategy,
    tictactoe::{Board, GameOutcome},
};

/// Parse a nine-cell board such as `"XX.OO...."`.
pub fn board(cells: &str) -> Board {
    cells
        .parse()
        .unwrap_or_else(|e| panic!("bad test board {cells:?}: {e}"))
}

/// Play a fresh game to the end without observers.
pub fn play_out(x: &mut dyn Strategy, o: &mut dyn Strategy) -> (Board, GameOutcome) {
    let mut board = Board::new();
    let outcome = GameRunner::new()
        .play(&mut board, x, o)
        .expect("game should finish");
    (board, outcome)
}
