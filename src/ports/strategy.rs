//! Strategy port - how a player picks its next square

use crate::{
    Result,
    tictactoe::{Board, Mark},
};

/// A player strategy: human input, uniform random, or minimax search.
///
/// Implementations are picked at setup time (see
/// [`StrategyKind`](crate::strategies::StrategyKind)) and driven by the
/// [`GameRunner`](crate::pipeline::GameRunner).
///
/// # Examples
///
/// ```
/// use noughts::{
///     ports::Strategy,
///     tictactoe::{Board, Mark},
/// };
///
/// struct FirstFree;
///
/// impl Strategy for FirstFree {
///     fn choose_move(&mut self, board: &Board, _mark: Mark) -> noughts::Result<usize> {
///         board
///             .available_moves()
///             .first()
///             .copied()
///             .ok_or(noughts::Error::NoValidMoves)
///     }
///
///     fn name(&self) -> &str {
///         "first-free"
///     }
/// }
///
/// let mut strategy = FirstFree;
/// assert_eq!(strategy.choose_move(&Board::new(), Mark::X)?, 0);
/// # Ok::<(), noughts::Error>(())
/// ```
pub trait Strategy: Send {
    /// Pick a square for `mark` to play on `board`.
    ///
    /// The returned index must be a member of `board.available_moves()`.
    ///
    /// # Errors
    ///
    /// Returns an error if the board has no available move, or if the
    /// strategy's input source fails (human play).
    fn choose_move(&mut self, board: &Board, mark: Mark) -> Result<usize>;

    /// Name used in logs and error messages.
    fn name(&self) -> &str;
}
