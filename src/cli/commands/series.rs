//! Series command - AI-only games with tallies

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;

use crate::{
    cli::{
        config::{DEFAULT_SERIES_GAMES, SeriesConfig},
        output::{create_series_progress, print_kv, print_section},
    },
    export::SessionCsvExporter,
    pipeline::{MatchSeries, SessionStats},
    strategies::StrategyKind,
};

#[derive(Parser, Debug)]
#[command(about = "Play a series of games between two AI strategies")]
pub struct SeriesArgs {
    /// Strategy for X (random or smart)
    #[arg(long)]
    pub x: StrategyKind,

    /// Strategy for O (random or smart)
    #[arg(long)]
    pub o: StrategyKind,

    /// Number of games
    #[arg(long, short = 'g', default_value_t = DEFAULT_SERIES_GAMES)]
    pub games: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Export per-game results to CSV
    #[arg(long)]
    pub export: Option<PathBuf>,
}

impl From<SeriesArgs> for SeriesConfig {
    fn from(args: SeriesArgs) -> Self {
        Self {
            x: args.x,
            o: args.o,
            games: args.games,
            seed: args.seed,
            export: args.export,
        }
    }
}

pub fn execute(args: SeriesArgs) -> Result<()> {
    let config = SeriesConfig::from(args);
    let stats = run(&config, true)?;

    print_section("Series Results");
    print_kv("X", &config.x.to_string());
    print_kv("O", &config.o.to_string());
    print_kv("X wins", &stats.x_wins.to_string());
    print_kv("O wins", &stats.o_wins.to_string());
    print_kv("Ties", &stats.ties.to_string());
    println!("\n{}", stats.overview());

    if let Some(path) = &config.export {
        let rows = SessionCsvExporter::write(&stats, path)?;
        println!("Exported {rows} games to {}", path.display());
    }
    Ok(())
}

/// Play the configured series; `progress` shows a progress bar
pub fn run(config: &SeriesConfig, progress: bool) -> Result<SessionStats> {
    for (mark, kind) in [("X", config.x), ("O", config.o)] {
        if kind.is_interactive() {
            bail!("Player {mark} is '{kind}'; a series needs two AI strategies (random or smart)");
        }
    }

    let mut x = config
        .x
        .into_strategy(format!("{} X", config.x), config.seed);
    let mut o = config.o.into_strategy(
        format!("{} O", config.o),
        config.seed.map(|s| s.wrapping_add(1)),
    );

    let pb = if progress {
        Some(create_series_progress(config.games as u64)?)
    } else {
        None
    };

    let stats = MatchSeries::new(config.games).run(x.as_mut(), o.as_mut(), |_, stats| {
        if let Some(pb) = &pb {
            pb.set_message(format!(
                "X {} / O {} / tie {}",
                stats.x_wins, stats.o_wins, stats.ties
            ));
            pb.inc(1);
        }
    })?;

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
    Ok(stats)
}
