//! Command-line dice roller for tabletop games.
//!
//! The engine lives in `bones-core`; this layer parses options, drives
//! the repeat and repeat-until-target loops, and formats the output.

mod output;
mod run;

use std::path::PathBuf;
use std::process;

use bones_core::ResultMode;
use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(name = "bones", about = "Roll some dice", version)]
struct Cli {
    /// Dice to roll, given as pairs of a count and a die type (a side
    /// count, "nwod", "fudge", or "fate")
    dice: Vec<String>,

    /// Repeat the described rolls N times
    #[arg(short = 'r', long = "repeat", value_name = "N")]
    repeats: Option<u32>,

    /// Repeat the rolls until the combined tally reaches T (forces tally
    /// mode); use --repeat to cap the attempts
    #[arg(short = 'u', long = "repeat-until", value_name = "T")]
    target: Option<i64>,

    /// Every die rolling at or above T adds 1 to the tally
    #[arg(short = 't', long = "tally-above", value_name = "T")]
    success: Option<i32>,

    /// Any die rolling at or above T is counted and rolled again
    #[arg(short = 'e', long = "roll-again", value_name = "T")]
    explode: Option<i32>,

    /// Force spread or tally reporting for every set
    #[arg(short = 'm', long = "mode", value_enum)]
    mode: Option<ModeArg>,

    /// Print the total across all dice of each repetition
    #[arg(short = 's', long = "sum")]
    aggregate: bool,

    /// NWoD: re-roll each initial die that misses the success threshold
    #[arg(short = 'o', long = "rote")]
    rote: bool,

    /// NWoD: each die rolling 1 cancels the highest success die, or
    /// counts as a negative tally
    #[arg(short = 'b', long = "botch")]
    botch: bool,

    /// Seed the RNG for reproducible rolls
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Look up each reported value in FILE (value N gives line N)
    #[arg(long, value_name = "FILE")]
    table: Option<PathBuf>,

    /// Emit results as JSON instead of formatted text
    #[arg(long)]
    json: bool,

    /// Show the raw die faces for each repetition
    #[arg(long)]
    debug: bool,
}

/// Result mode as a command-line value.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Report every individual face.
    Spread,
    /// Report one aggregated number.
    Tally,
}

impl From<ModeArg> for ResultMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Spread => Self::Spread,
            ModeArg::Tally => Self::Tally,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if cli.dice.len() % 2 != 0 {
        eprintln!("error: rolls and faces must be paired");
        process::exit(1);
    }

    if let Err(e) = run::run(&cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
