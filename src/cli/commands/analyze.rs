//! Analyze command - inspect a position
//!
//! Prints the occupied squares, immediate wins and blocks, and the minimax
//! score of every legal move for the side to play.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    adapters::SaveFormat,
    cli::output::{format_squares, print_kv, print_section, print_subsection},
    strategies::{MinimaxStrategy, minimax},
    tictactoe::{Board, GameOutcome, LineAnalyzer, Mark},
};

#[derive(Parser, Debug)]
#[command(about = "Analyze a saved game or a position")]
pub struct AnalyzeArgs {
    /// Save file to analyze
    #[arg(required_unless_present = "board", conflicts_with = "board")]
    pub path: Option<PathBuf>,

    /// Position as nine cells, e.g. "XX.OO...."
    #[arg(long)]
    pub board: Option<String>,

    /// Mark to analyze for (defaults to the side to move)
    #[arg(long)]
    pub mark: Option<Mark>,

    /// Save file format (defaults from the file extension)
    #[arg(long, value_enum)]
    pub format: Option<SaveFormat>,
}

/// Everything the analyze command reports about a position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionReport {
    pub mark: Mark,
    pub x_squares: Vec<usize>,
    pub o_squares: Vec<usize>,
    pub winning_moves: Vec<usize>,
    pub blocking_moves: Vec<usize>,
    pub outcome: Option<GameOutcome>,
    pub best: Option<(usize, i32)>,
    /// Score of each legal move, ascending by square
    pub move_scores: Vec<(usize, i32)>,
}

impl PositionReport {
    pub fn new(board: &Board, mark: Mark) -> crate::Result<Self> {
        let cells = board.cells();
        let (x_squares, o_squares) = LineAnalyzer::occupied(cells);
        let outcome = GameOutcome::from_board(board);

        let (best, move_scores) = if outcome.is_some() {
            (None, Vec::new())
        } else {
            let result = MinimaxStrategy::exhaustive("analyze").evaluate(board, mark)?;
            let best = result.index.map(|index| (index, result.score));
            (best, score_moves(board, mark))
        };

        Ok(Self {
            mark,
            x_squares,
            o_squares,
            winning_moves: LineAnalyzer::winning_moves(cells, mark),
            blocking_moves: LineAnalyzer::blocking_moves(cells, mark),
            outcome,
            best,
            move_scores,
        })
    }
}

fn score_moves(board: &Board, mark: Mark) -> Vec<(usize, i32)> {
    let mut scratch = board.clone();
    board
        .available_moves()
        .into_iter()
        .map(|index| {
            scratch.apply_move(index, mark);
            let score = minimax(&mut scratch, mark, mark.opponent()).score;
            scratch.undo_move(index);
            (index, score)
        })
        .collect()
}

fn describe(score: i32) -> &'static str {
    match score.signum() {
        1 => "win",
        -1 => "loss",
        _ => "tie",
    }
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = match (&args.board, &args.path) {
        (Some(cells), _) => cells
            .parse::<Board>()
            .with_context(|| format!("Invalid board '{cells}'"))?,
        (None, Some(path)) => args
            .format
            .unwrap_or_else(|| SaveFormat::from_path(path))
            .repository()
            .load(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        (None, None) => anyhow::bail!("Give a save file or --board"),
    };
    let mark = args.mark.unwrap_or_else(|| board.next_mark());
    let report = PositionReport::new(&board, mark)?;

    print_section("Position Analysis");
    println!("{board}");
    println!();
    print_kv("Encoded", &board.encode());
    print_kv("X squares", &format_squares(&report.x_squares));
    print_kv("O squares", &format_squares(&report.o_squares));
    print_kv("Empty squares", &format_squares(&board.available_moves()));

    if let Some(outcome) = report.outcome {
        print_kv("Result", &outcome.to_string());
        return Ok(());
    }

    print_kv("Analyzing for", &mark.to_string());
    print_kv("Winning moves", &format_squares(&report.winning_moves));
    print_kv("Blocking moves", &format_squares(&report.blocking_moves));
    if let Some((index, score)) = report.best {
        print_kv(
            "Best move",
            &format!("{index} (score {score}, {})", describe(score)),
        );
    }

    print_subsection("Move scores");
    for (index, score) in &report.move_scores {
        println!("  square {index}: {score:+} ({})", describe(*score));
    }
    Ok(())
}
