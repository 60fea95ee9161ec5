//! Game layer: the tile grid and its merge operations.
//!
//! - `grid` holds the pure line and rotation primitives.
//! - `board` composes them into the four directional moves plus random
//!   spawning and terminal-state checks.
//! - `invariants` holds bug-detector checks used by fuzzing and tests.

mod board;
mod grid;
mod invariants;

pub use board::{Board, Direction, WIN_TILE};
pub use grid::{merge_line, rotate_clockwise, shift_nonzero_left};
pub use invariants::{InvariantViolation, check_invariants};
