//! Play command - interactive multi-game session

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;

use crate::{
    adapters::SaveFormat,
    cli::{
        config::{DEFAULT_MOVE_DELAY_MS, DEFAULT_SAVE_FILE, PlayConfig},
        output::print_move_history,
        prompt::Prompter,
    },
    pipeline::{ConsoleObserver, GameRunner, SessionStats},
    ports::{GameRepository, LineSource},
    strategies::StrategyKind,
    tictactoe::{Board, Mark},
};

#[derive(Parser, Debug)]
#[command(about = "Play games at the terminal")]
pub struct PlayArgs {
    /// Strategy for X (human, random, smart); asked each round if omitted
    #[arg(long)]
    pub x: Option<StrategyKind>,

    /// Strategy for O (human, random, smart); asked each round if omitted
    #[arg(long)]
    pub o: Option<StrategyKind>,

    /// File used by the save and load prompts
    #[arg(long, default_value = DEFAULT_SAVE_FILE)]
    pub save_file: PathBuf,

    /// Save file format (defaults from the file extension)
    #[arg(long, value_enum)]
    pub format: Option<SaveFormat>,

    /// Pause after each move, in milliseconds
    #[arg(long, default_value_t = DEFAULT_MOVE_DELAY_MS)]
    pub delay_ms: u64,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

impl From<PlayArgs> for PlayConfig {
    fn from(args: PlayArgs) -> Self {
        let format = args
            .format
            .unwrap_or_else(|| SaveFormat::from_path(&args.save_file));
        Self {
            x: args.x,
            o: args.o,
            save_file: args.save_file,
            format,
            move_delay: std::time::Duration::from_millis(args.delay_ms),
            seed: args.seed,
        }
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = PlayConfig::from(args);
    let repo = config.format.repository();
    let mut prompter = Prompter::stdio();
    let mut stats = SessionStats::new();

    for round in 0.. {
        println!("\n--- New Game ---");
        let x_kind = choose_kind(&mut prompter, config.x, Mark::X)?;
        let o_kind = choose_kind(&mut prompter, config.o, Mark::O)?;
        let (x_seed, o_seed) = config.round_seeds(round);
        let mut x = x_kind.into_strategy(format!("Player X ({x_kind})"), x_seed);
        let mut o = o_kind.into_strategy(format!("Player O ({o_kind})"), o_seed);

        let mut board = Board::new();
        if prompter.confirm("Load saved game? (yes/no): ")? {
            board = load_board(repo.as_ref(), &config);
            println!("{board}");
            print_move_history(&board);
        }

        let mut runner = GameRunner::new()
            .with_observer(Box::new(ConsoleObserver::stdout()))
            .with_move_delay(config.move_delay);
        let outcome = runner
            .play(&mut board, x.as_mut(), o.as_mut())
            .context("Game aborted")?;
        stats.record(outcome, board.move_history().to_vec());

        println!("\n--- Game Results ---");
        println!("X Wins: {}", stats.x_wins);
        println!("O Wins: {}", stats.o_wins);
        println!("Ties: {}", stats.ties);
        print_move_history(&board);

        if prompter.confirm("Save this game? (yes/no): ")? {
            match repo.save(&board, &config.save_file) {
                Ok(()) => println!("Game saved to {}", config.save_file.display()),
                Err(e) => {
                    warn!(path = %config.save_file.display(), error = %e, "save failed");
                    println!("Error saving game to {}", config.save_file.display());
                }
            }
        }

        if !prompter.ask_yes_no("Do you want to play again? (yes/no): ")? {
            break;
        }
    }

    print_game_history(&stats);
    Ok(())
}

fn choose_kind<R, W>(
    prompter: &mut Prompter<R, W>,
    preset: Option<StrategyKind>,
    mark: Mark,
) -> Result<StrategyKind>
where
    R: LineSource,
    W: std::io::Write,
{
    match preset {
        Some(kind) => Ok(kind),
        None => Ok(prompter.ask_strategy_kind(mark)?),
    }
}

fn load_board(repo: &dyn GameRepository, config: &PlayConfig) -> Board {
    let path = &config.save_file;
    match repo.load(path) {
        Ok(board) => {
            println!("Game loaded from {}", path.display());
            board
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not load saved game");
            println!("Could not load {} ({e}). Starting a new game.", path.display());
            Board::new()
        }
    }
}

fn print_game_history(stats: &SessionStats) {
    if stats.total() == 0 {
        println!("No game history available.");
        return;
    }
    println!("\n--- Game History ---");
    for line in stats.summary_lines() {
        println!("{line}");
    }
}
