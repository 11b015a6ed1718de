//! History command - show a saved game

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    adapters::SaveFormat,
    cli::output::{print_kv, print_move_history, print_section},
    tictactoe::{Board, GameOutcome},
};

#[derive(Parser, Debug)]
#[command(about = "Show a saved game and its move history")]
pub struct HistoryArgs {
    /// Path to the save file
    pub path: PathBuf,

    /// Save file format (defaults from the file extension)
    #[arg(long, value_enum)]
    pub format: Option<SaveFormat>,
}

pub fn execute(args: HistoryArgs) -> Result<()> {
    let format = args
        .format
        .unwrap_or_else(|| SaveFormat::from_path(&args.path));
    let board = format
        .repository()
        .load(&args.path)
        .with_context(|| format!("Failed to load {}", args.path.display()))?;

    print_section(&format!("Saved game: {}", args.path.display()));
    println!("{board}");
    print_kv("Status", &status(&board));
    print_move_history(&board);
    Ok(())
}

/// `"X wins"`, `"Tie"` or `"O to move"`
pub fn status(board: &Board) -> String {
    match GameOutcome::from_board(board) {
        Some(outcome) => outcome.to_string(),
        None => format!("{} to move", board.next_mark()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status() {
        assert_eq!(status(&Board::new()), "X to move");
        assert_eq!(status(&"X........".parse().unwrap()), "O to move");
        assert_eq!(status(&"OOOXX.X..".parse().unwrap()), "O wins");
        assert_eq!(status(&"XOXXOOOXX".parse().unwrap()), "Tie");
    }
}
