//! Sim command implementation - batch random-policy games.

// Aggregation uses intentional casts for statistics
#![allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]

use super::{CliError, SimFormat};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use twenty48::{Board, Direction, WIN_TILE};

/// Outcome of one simulated game.
#[derive(Debug, Clone, Copy)]
struct GameOutcome {
    won: bool,
    max_tile: u32,
    moves: u32,
}

/// Aggregate statistics over a batch of games.
#[derive(Debug, Serialize)]
struct SimSummary {
    games: u64,
    board_size: usize,
    seed: u64,
    wins: u64,
    losses: u64,
    win_rate: f64,
    mean_moves: f64,
    max_tile_counts: BTreeMap<u32, u64>,
}

/// Execute the sim command.
///
/// # Errors
///
/// Returns an error if the board size is invalid or the thread pool
/// cannot be built.
pub(crate) fn execute(
    games: u64,
    size: usize,
    seed: Option<u64>,
    threads: Option<usize>,
    format: SimFormat,
    progress: bool,
) -> Result<(), CliError> {
    // Validate the size once up front rather than once per game.
    let _ = Board::new(size)?;

    let seed = super::seed_or_entropy(seed);

    if let Some(threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .map_err(|e| CliError::new(format!("Failed to build thread pool: {e}")))?;
    }

    let bar = if progress {
        let bar = ProgressBar::new(games);
        bar.set_style(
            ProgressStyle::with_template("{bar:40} {pos}/{len} games ({eta})")
                .map_err(|e| CliError::new(e.to_string()))?,
        );
        Some(bar)
    } else {
        None
    };

    let outcomes: Result<Vec<GameOutcome>, CliError> = (0..games)
        .into_par_iter()
        .map(|game| {
            let outcome = play_random_game(seed.wrapping_add(game), size)?;
            if let Some(bar) = &bar {
                bar.inc(1);
            }
            Ok(outcome)
        })
        .collect();
    let outcomes = outcomes?;

    if let Some(bar) = &bar {
        bar.finish_and_clear();
    }

    let summary = summarize(&outcomes, games, size, seed);

    match format {
        SimFormat::Text => print_text(&summary),
        SimFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
    }

    Ok(())
}

/// Play one game to completion with a uniformly random legal-move policy.
fn play_random_game(seed: u64, size: usize) -> Result<GameOutcome, CliError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new(size)?;
    board.add_random_tile(&mut rng);

    let mut moves = 0u32;
    loop {
        if board.max_value() >= WIN_TILE {
            return Ok(GameOutcome {
                won: true,
                max_tile: board.max_value(),
                moves,
            });
        }

        let legal: Vec<Direction> = Direction::ALL
            .iter()
            .copied()
            .filter(|&dir| board.merge(dir) != board)
            .collect();
        if legal.is_empty() {
            return Ok(GameOutcome {
                won: false,
                max_tile: board.max_value(),
                moves,
            });
        }

        board = board.merge(legal[rng.gen_range(0..legal.len())]);
        board.add_random_tile(&mut rng);
        moves += 1;
    }
}

fn summarize(outcomes: &[GameOutcome], games: u64, board_size: usize, seed: u64) -> SimSummary {
    let wins = outcomes.iter().filter(|o| o.won).count() as u64;
    let total_moves: u64 = outcomes.iter().map(|o| u64::from(o.moves)).sum();

    let mut max_tile_counts = BTreeMap::new();
    for outcome in outcomes {
        *max_tile_counts.entry(outcome.max_tile).or_insert(0u64) += 1;
    }

    let mean_moves = if games == 0 {
        0.0
    } else {
        total_moves as f64 / games as f64
    };
    let win_rate = if games == 0 {
        0.0
    } else {
        wins as f64 / games as f64
    };

    SimSummary {
        games,
        board_size,
        seed,
        wins,
        losses: games - wins,
        win_rate,
        mean_moves,
        max_tile_counts,
    }
}

fn print_text(summary: &SimSummary) {
    println!(
        "Simulated {} games on a {}x{} board (base seed {})",
        summary.games, summary.board_size, summary.board_size, summary.seed
    );
    println!();
    println!("Wins (reached {WIN_TILE}): {}", summary.wins);
    println!("Losses: {}", summary.losses);
    println!("Win rate: {:.2}%", summary.win_rate * 100.0);
    println!("Mean moves per game: {:.1}", summary.mean_moves);
    println!();
    println!("Best tile distribution:");
    for (tile, count) in &summary.max_tile_counts {
        println!("  {tile:>6}: {count}");
    }
}
