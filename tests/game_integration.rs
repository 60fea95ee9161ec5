//! Full-game integration tests.
//!
//! These drive complete random-policy games through the public API,
//! checking the engine invariants and conservation laws after every step.
//! Run with: cargo test --release game_integration

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use twenty48::game::check_invariants;
use twenty48::{Board, Direction, WIN_TILE};

fn nonzero_count(board: &Board) -> usize {
    board.tiles().iter().filter(|&&v| v != 0).count()
}

fn tile_sum(board: &Board) -> u64 {
    board.tiles().iter().map(|&v| u64::from(v)).sum()
}

/// Play one game with a uniformly random legal-move policy, asserting the
/// engine's laws at every step. Returns the move count and final board.
fn play_random_game(seed: u64, size: usize) -> (u32, Board) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new(size).unwrap();
    board.add_random_tile(&mut rng);

    let mut moves = 0u32;
    loop {
        let violations = check_invariants(&board);
        assert!(
            violations.is_empty(),
            "invariants violated at move {moves}: {violations:?}"
        );

        if board.max_value() >= WIN_TILE {
            return (moves, board);
        }

        let legal: Vec<Direction> = Direction::ALL
            .iter()
            .copied()
            .filter(|&dir| board.merge(dir) != board)
            .collect();
        if legal.is_empty() {
            return (moves, board);
        }

        let next = board.merge(legal[rng.gen_range(0..legal.len())]);
        assert_ne!(next, board, "a legal move must change the board");
        assert!(nonzero_count(&next) <= nonzero_count(&board));
        assert_eq!(tile_sum(&next), tile_sum(&board));

        board = next;
        board.add_random_tile(&mut rng);
        moves += 1;
    }
}

#[test]
fn test_games_terminate_across_seeds() {
    for seed in 0..25 {
        let (moves, board) = play_random_game(seed, 4);
        assert!(moves > 0, "seed {seed} ended with no legal moves");

        // A finished game is either won or stuck with a full board.
        if board.max_value() < WIN_TILE {
            assert!(!board.has_empty_space());
            assert!(!board.future_moves_possible());
        }
    }
}

#[test]
fn test_games_on_other_sizes() {
    for &size in &[3usize, 5, 6] {
        let (_, board) = play_random_game(7, size);
        assert_eq!(board.size(), size);
        assert!(check_invariants(&board).is_empty());
    }
}

#[test]
fn test_same_seed_same_game() {
    let (moves_a, board_a) = play_random_game(1234, 4);
    let (moves_b, board_b) = play_random_game(1234, 4);
    assert_eq!(moves_a, moves_b);
    assert_eq!(board_a, board_b);
}

#[test]
fn test_stuck_board_is_fixed_point_for_all_merges() {
    // Full board, no equal neighbors: every merge is a no-op.
    let board = Board::from_tiles(
        3,
        vec![
            2, 4, 2, //
            4, 2, 4, //
            2, 4, 2,
        ],
    )
    .unwrap();

    assert!(!board.has_empty_space());
    assert!(!board.future_moves_possible());
    for direction in Direction::ALL {
        assert_eq!(board.merge(direction), board);
    }

    // Spawning onto the full board changes nothing either.
    let mut spawned = board.clone();
    let mut rng = StdRng::seed_from_u64(0);
    spawned.add_random_tile(&mut rng);
    assert_eq!(spawned, board);
}
