//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Move a fleet of trains from START to END in as few turns as possible.
#[derive(Debug, Parser)]
#[command(name = "metro-rush", version)]
pub struct Args {
    /// Network description file.
    #[arg(value_name = "FILENAME")]
    pub filename: PathBuf,

    /// 1: every train on the shortest path.  2: trains spread over disjoint paths.
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub algo: u8,

    /// Also write per-turn positions and a run summary as CSV into DIR.
    #[arg(long, value_name = "DIR")]
    pub csv: Option<PathBuf>,

    /// Give up after N turns instead of the computed limit.
    #[arg(long, value_name = "N")]
    pub max_turns: Option<u64>,

    /// Print only the total number of turns.
    #[arg(short, long)]
    pub quiet: bool,
}
