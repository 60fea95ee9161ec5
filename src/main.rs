//! Twenty48 CLI - terminal front end for the sliding-tile merge engine.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

/// Twenty48 - a deterministic sliding-tile merge game
#[derive(Parser, Debug)]
#[command(name = "twenty48")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play an interactive game in the terminal
    Play {
        /// Board size (minimum 3)
        #[arg(short, long, default_value = "4")]
        size: usize,

        /// Random seed (default: random)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Run batches of random-policy games and aggregate statistics
    Sim {
        /// Number of games to run (default: 1000)
        #[arg(short, long, default_value = "1000")]
        games: u64,

        /// Board size (minimum 3)
        #[arg(short, long, default_value = "4")]
        size: usize,

        /// Starting seed (increments for each game)
        #[arg(long)]
        seed: Option<u64>,

        /// Parallel threads (default: CPU count)
        #[arg(short = 'j', long)]
        threads: Option<usize>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::SimFormat,

        /// Show progress bar
        #[arg(short, long)]
        progress: bool,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.command {
        Commands::Play { size, seed } => cli::play::execute(size, seed),

        Commands::Sim {
            games,
            size,
            seed,
            threads,
            format,
            progress,
        } => cli::sim::execute(games, size, seed, threads, format, progress),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
