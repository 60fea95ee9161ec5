#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rand::SeedableRng;
use rand::rngs::StdRng;
use twenty48::game::check_invariants;
use twenty48::{Board, Direction};

/// Structured input for board-move fuzzing.
#[derive(Arbitrary, Debug)]
struct MovesInput {
    /// Board size selector.
    size: u8,
    /// RNG seed for tile spawning.
    seed: u64,
    /// Encoded move sequence.
    moves: Vec<u8>,
}

fuzz_target!(|input: MovesInput| {
    let size = 3 + usize::from(input.size % 4);
    let mut rng = StdRng::seed_from_u64(input.seed);

    let mut board = match Board::new(size) {
        Ok(board) => board,
        Err(_) => return,
    };
    board.add_random_tile(&mut rng);

    let sum = |b: &Board| -> u64 { b.tiles().iter().map(|&v| u64::from(v)).sum() };
    let nonzero = |b: &Board| b.tiles().iter().filter(|&&v| v != 0).count();

    for &encoded in input.moves.iter().take(512) {
        let direction = match encoded % 4 {
            0 => Direction::Up,
            1 => Direction::Down,
            2 => Direction::Left,
            _ => Direction::Right,
        };

        let next = board.merge(direction);

        // Conservation: merging never adds tiles or changes the value sum.
        assert_eq!(sum(&next), sum(&board));
        assert!(nonzero(&next) <= nonzero(&board));

        // The driver contract: spawn only after an effective move.
        if next != board {
            board = next;
            board.add_random_tile(&mut rng);
        }

        let violations = check_invariants(&board);
        assert!(violations.is_empty(), "invariants violated: {violations:?}");
    }
});
