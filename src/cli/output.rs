//! Output formatting and progress bars for CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::{Error, Result, tictactoe::Board};

/// Create a progress bar for an AI-only series
pub fn create_series_progress(total_games: u64) -> Result<ProgressBar> {
    let style = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
        .map_err(|e| Error::ProgressBarTemplate {
            message: e.to_string(),
        })?
        .progress_chars("=>-");

    let pb = ProgressBar::new(total_games);
    pb.set_style(style);
    Ok(pb)
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// `"0, 4, 8"`, or `"none"` for an empty list
pub fn format_squares(squares: &[usize]) -> String {
    if squares.is_empty() {
        return "none".to_string();
    }
    squares
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// The move history block shown after each game
pub fn move_history_lines(board: &Board) -> Vec<String> {
    if board.move_history().is_empty() {
        return vec!["No moves have been made yet.".to_string()];
    }
    let mut lines = vec!["\n--- Move History ---".to_string()];
    lines.extend(board.move_history().iter().map(|m| m.to_string()));
    lines
}

pub fn print_move_history(board: &Board) {
    for line in move_history_lines(board) {
        println!("{line}");
    }
}
