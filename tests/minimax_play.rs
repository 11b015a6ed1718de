//! Minimax behaviour in complete games.

mod common;

use common::{board, play_out};
use noughts::{
    ports::Strategy,
    strategies::{MinimaxStrategy, RandomStrategy, SearchResult, minimax},
    tictactoe::{Board, GameOutcome, Mark},
};

#[test]
fn test_exhaustive_self_play_ties_in_nine_moves() {
    let mut x = MinimaxStrategy::exhaustive("X");
    let mut o = MinimaxStrategy::exhaustive("O");

    let (b, outcome) = play_out(&mut x, &mut o);
    assert_eq!(outcome, GameOutcome::Tie);
    assert!(b.is_tie());
    assert_eq!(b.move_history().len(), 9);
}

#[test]
fn test_self_play_ties_from_every_opening() {
    for seed in 0..9 {
        let mut x = MinimaxStrategy::with_seed("X", seed);
        let mut o = MinimaxStrategy::with_seed("O", seed + 100);

        let (_, outcome) = play_out(&mut x, &mut o);
        assert_eq!(outcome, GameOutcome::Tie, "seed {seed}");
    }
}

#[test]
fn test_takes_the_top_row() {
    let mut strategy = MinimaxStrategy::with_seed("smart", 0);
    assert_eq!(strategy.choose_move(&board("XX.OO...."), Mark::X).unwrap(), 2);
}

#[test]
fn test_lost_position_picks_lowest_square() {
    let mut strategy = MinimaxStrategy::with_seed("smart", 0);
    assert_eq!(strategy.choose_move(&board("XOXOXO..."), Mark::O).unwrap(), 6);
}

#[test]
fn test_prefers_faster_win() {
    // Winning now outscores any slower win.
    let mut b = board("XX..O..O.");
    let result = minimax(&mut b, Mark::X, Mark::X);
    assert_eq!(result, SearchResult { index: Some(2), score: 5 });
}

#[test]
fn test_choice_is_deterministic_off_the_empty_board() {
    let positions = ["X........", "X...O....", "XO..X....", "XOXOXO..."];
    for cells in positions {
        let b = board(cells);
        let mark = b.next_mark();
        let mut first = MinimaxStrategy::with_seed("a", 1);
        let mut second = MinimaxStrategy::with_seed("b", 2);
        assert_eq!(
            first.choose_move(&b, mark).unwrap(),
            second.choose_move(&b, mark).unwrap(),
            "{cells}"
        );
    }
}

#[test]
fn test_never_loses_to_random_as_x() {
    for seed in 0..20 {
        let mut x = MinimaxStrategy::with_seed("smart", seed);
        let mut o = RandomStrategy::with_seed("random", seed);
        let (_, outcome) = play_out(&mut x, &mut o);
        assert_ne!(outcome, GameOutcome::Win(Mark::O), "seed {seed}");
    }
}

#[test]
fn test_never_loses_to_random_as_o() {
    for seed in 0..20 {
        let mut x = RandomStrategy::with_seed("random", seed);
        let mut o = MinimaxStrategy::with_seed("smart", seed);
        let (_, outcome) = play_out(&mut x, &mut o);
        assert_ne!(outcome, GameOutcome::Win(Mark::X), "seed {seed}");
    }
}

#[test]
fn test_search_leaves_caller_board_alone() {
    let b = board("XO..X....");
    let before = b.clone();
    let strategy = MinimaxStrategy::with_seed("smart", 0);
    strategy.evaluate(&b, Mark::O).unwrap();
    assert_eq!(b, before);

    let mut scratch = Board::new();
    minimax(&mut scratch, Mark::X, Mark::X);
    assert_eq!(scratch, Board::new());
}
