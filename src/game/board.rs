//! The playing board and its directional merge operations.

use crate::error::{BoardError, BoardResult};
use crate::game::grid;
use rand::Rng;
use std::fmt;

/// The tile value that ends a game in a win.
pub const WIN_TILE: u32 = 2048;

/// A direction to slide and merge tiles in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward the top row.
    Up,
    /// Toward the bottom row.
    Down,
    /// Toward the first column.
    Left,
    /// Toward the last column.
    Right,
}

impl Direction {
    /// All four directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

/// A square board of merge-game tiles.
///
/// Tiles are stored row-major; 0 is an empty cell and every nonzero cell
/// holds a power of two. Merge operations return a new board and leave the
/// receiver untouched; [`Board::add_random_tile`] is the only in-place
/// mutation. Equality is structural (same size, same row-major values),
/// which is what drivers use to detect no-op moves.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    tiles: Vec<u32>,
}

impl Board {
    /// Minimum playable board size.
    pub const MIN_SIZE: usize = 3;

    /// Create an empty board of the given size.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::SizeTooSmall`] if `size` is below
    /// [`Board::MIN_SIZE`].
    pub fn new(size: usize) -> BoardResult<Self> {
        if size < Self::MIN_SIZE {
            return Err(BoardError::SizeTooSmall { size });
        }
        Ok(Self {
            size,
            tiles: vec![0; size * size],
        })
    }

    /// Reconstruct a board from a row-major tile buffer.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::SizeTooSmall`] if `size` is below
    /// [`Board::MIN_SIZE`], and [`BoardError::NotSquare`] if the buffer is
    /// not exactly `size * size` cells.
    pub fn from_tiles(size: usize, tiles: Vec<u32>) -> BoardResult<Self> {
        if size < Self::MIN_SIZE {
            return Err(BoardError::SizeTooSmall { size });
        }
        if tiles.len() != size * size {
            return Err(BoardError::NotSquare {
                size,
                len: tiles.len(),
            });
        }
        Ok(Self { size, tiles })
    }

    /// Rebuild with a transformed tile buffer of the same dimensions.
    fn with_tiles(&self, tiles: Vec<u32>) -> Self {
        debug_assert_eq!(tiles.len(), self.size * self.size);
        Self {
            size: self.size,
            tiles,
        }
    }

    /// Side length of the board.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// The raw tile buffer in row-major order.
    #[must_use]
    #[inline]
    pub fn tiles(&self) -> &[u32] {
        &self.tiles
    }

    /// The tile at `(row, col)`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        if row < self.size && col < self.size {
            Some(self.tiles[row * self.size + col])
        } else {
            None
        }
    }

    /// Iterate over the rows of the board, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.tiles.chunks(self.size)
    }

    /// The largest tile on the board (0 when the board is empty).
    #[must_use]
    pub fn max_value(&self) -> u32 {
        self.tiles.iter().copied().max().unwrap_or(0)
    }

    /// Whether at least one cell is empty.
    #[must_use]
    pub fn has_empty_space(&self) -> bool {
        self.tiles.contains(&0)
    }

    /// Place one random tile in a uniformly chosen empty cell.
    ///
    /// The new tile is 4 with probability 0.1 and 2 otherwise. Does nothing
    /// when the board is full. This is the only operation that mutates a
    /// board in place; pass a seeded RNG for reproducible games.
    pub fn add_random_tile<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let empty: Vec<usize> = self
            .tiles
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile == 0)
            .map(|(cell, _)| cell)
            .collect();
        if empty.is_empty() {
            return;
        }

        let cell = empty[rng.gen_range(0..empty.len())];
        self.tiles[cell] = if rng.gen_range(0..10) < 9 { 2 } else { 4 };
    }

    /// Rotate the whole board clockwise by `turns` quarter-turns.
    fn rotated(&self, turns: usize) -> Self {
        let mut tiles = self.tiles.clone();
        for _ in 0..turns % 4 {
            tiles = grid::rotate_clockwise(&tiles, self.size);
        }
        self.with_tiles(tiles)
    }

    /// Slide and merge every row toward the first column.
    #[must_use]
    pub fn merge_left(&self) -> Self {
        let mut tiles = Vec::with_capacity(self.tiles.len());
        for row in self.rows() {
            tiles.extend(grid::merge_line(row));
        }
        self.with_tiles(tiles)
    }

    /// Slide and merge every column toward the top row.
    #[must_use]
    pub fn merge_up(&self) -> Self {
        self.rotated(3).merge_left().rotated(1)
    }

    /// Slide and merge every row toward the last column.
    #[must_use]
    pub fn merge_right(&self) -> Self {
        self.rotated(2).merge_left().rotated(2)
    }

    /// Slide and merge every column toward the bottom row.
    #[must_use]
    pub fn merge_down(&self) -> Self {
        self.rotated(1).merge_left().rotated(3)
    }

    /// Slide and merge in the given direction.
    ///
    /// Every direction is the left-merge conjugated by whole-board
    /// rotations; the turn counts before and after always sum to a full
    /// rotation, preserving orientation.
    #[must_use]
    pub fn merge(&self, direction: Direction) -> Self {
        match direction {
            Direction::Up => self.merge_up(),
            Direction::Down => self.merge_down(),
            Direction::Left => self.merge_left(),
            Direction::Right => self.merge_right(),
        }
    }

    /// Whether any of the four directional merges would change the board.
    ///
    /// False exactly when all four merges are no-ops; together with a full
    /// board this is the loss condition.
    #[must_use]
    pub fn future_moves_possible(&self) -> bool {
        Direction::ALL.iter().any(|&dir| self.merge(dir) != *self)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (col, &tile) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, "|")?;
                }
                if tile == 0 {
                    write!(f, "{:>6}", ".")?;
                } else {
                    write!(f, "{tile:>6}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
