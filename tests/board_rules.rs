//! Rules of the game-state engine: win detection, move application, undo
//! and snapshot validation.

mod common;

use common::board;
use noughts::{
    Error,
    tictactoe::{Board, BoardSnapshot, Cell, Mark, WINNING_LINES},
};
use rand::{Rng, SeedableRng, rngs::StdRng};

#[test]
fn test_every_line_wins_for_both_marks() {
    for line in WINNING_LINES {
        for mark in [Mark::X, Mark::O] {
            let mut b = Board::new();
            for &index in &line {
                assert!(b.apply_move(index, mark));
            }

            for &index in &line {
                assert!(
                    b.check_win(index, mark),
                    "{mark} on {line:?} should win through {index}"
                );
            }
            assert!(!b.check_win(line[0], mark.opponent()));
            assert_eq!(b.last_winner(), Some(mark));
        }
    }
}

#[test]
fn test_broken_lines_do_not_win() {
    for line in WINNING_LINES {
        let mut b = Board::new();
        b.apply_move(line[0], Mark::X);
        b.apply_move(line[1], Mark::X);
        b.apply_move(line[2], Mark::O);

        for &index in &line {
            assert!(!b.check_win(index, Mark::X), "{line:?} is blocked at {}", line[2]);
        }
        assert_eq!(b.last_winner(), None);
    }
}

#[test]
fn test_near_misses_across_line_types() {
    // Row, column and diagonal each one short.
    for cells in ["XX.OO....", "X..X..O.O", "X...X..O."] {
        let b = board(cells);
        assert_eq!(b.last_winner(), None, "{cells}");
        for index in 0..9 {
            assert!(!b.check_win(index, Mark::X), "{cells} through {index}");
        }
    }
}

#[test]
fn test_occupied_cell_is_never_overwritten() {
    let mut b = board("X...O....");
    let before = b.clone();

    for (index, mark) in [(0, Mark::O), (0, Mark::X), (4, Mark::X), (9, Mark::X)] {
        assert!(!b.apply_move(index, mark));
        assert_eq!(b, before);
    }
}

#[test]
fn test_apply_changes_exactly_one_cell() {
    let mut b = board("X...O....");
    let before = b.clone();

    assert!(b.apply_move(8, Mark::X));
    for index in 0..9 {
        if index == 8 {
            assert_eq!(b.get(index), Some(Cell::X));
        } else {
            assert_eq!(b.get(index), before.get(index));
        }
    }
    assert_eq!(b.move_history().len(), before.move_history().len() + 1);
}

#[test]
fn test_undo_then_redo_restores_random_games() {
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..50 {
        let mut b = Board::new();
        let mut mark = Mark::X;
        while !b.is_terminal() {
            let moves = b.available_moves();
            let index = moves[rng.random_range(0..moves.len())];

            let before = b.clone();
            assert!(b.apply_move(index, mark));
            let after = b.clone();

            b.undo_move(index);
            assert_eq!(b, before);
            assert!(b.apply_move(index, mark));
            assert_eq!(b, after);

            mark = mark.opponent();
        }
    }
}

#[test]
fn test_snapshot_roundtrip_preserves_board() {
    let b = board("XOX.O..X.");
    let restored = Board::from_snapshot(&b.export_state()).unwrap();
    assert_eq!(restored, b);
}

#[test]
fn test_corrupt_snapshots_leave_board_untouched() {
    let mut b = board("X...O....");
    let before = b.clone();

    let mut bad_history = b.export_state();
    bad_history.move_history.push((8, Mark::X));

    let mut bad_winner = b.export_state();
    bad_winner.current_winner = Some(Mark::O);

    let mut short = b.export_state();
    short.board.truncate(8);

    let mut duplicate = b.export_state();
    duplicate.move_history = vec![(0, Mark::X), (0, Mark::X)];

    assert!(matches!(
        b.import_state(&bad_history),
        Err(Error::InconsistentHistory { .. })
    ));
    assert!(matches!(
        b.import_state(&bad_winner),
        Err(Error::InconsistentWinner { mark: Mark::O })
    ));
    assert!(matches!(
        b.import_state(&short),
        Err(Error::InvalidCellCount { got: 8 })
    ));
    assert!(matches!(
        b.import_state(&duplicate),
        Err(Error::InconsistentHistory { .. })
    ));
    assert_eq!(b, before);
}

#[test]
fn test_snapshot_without_winner_takes_it_from_cells() {
    let snapshot = BoardSnapshot {
        board: board("OOOXX.X..").cells().to_vec(),
        current_winner: None,
        move_history: vec![
            (3, Mark::X),
            (0, Mark::O),
            (4, Mark::X),
            (1, Mark::O),
            (6, Mark::X),
            (2, Mark::O),
        ],
    };

    let b = Board::from_snapshot(&snapshot).unwrap();
    assert_eq!(b.last_winner(), Some(Mark::O));
    assert!(b.is_terminal());
}

#[test]
fn test_next_mark_follows_history() {
    let mut b = Board::new();
    assert_eq!(b.next_mark(), Mark::X);
    b.apply_move(4, Mark::X);
    assert_eq!(b.next_mark(), Mark::O);
    b.apply_move(0, Mark::O);
    assert_eq!(b.next_mark(), Mark::X);
}
