//! Error types for board construction.

use std::fmt;

/// Errors raised when a board is constructed from invalid arguments.
///
/// These surface programmer errors immediately; every other engine
/// operation is total over well-formed boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Requested board size is below the minimum playable size.
    SizeTooSmall {
        /// The rejected size.
        size: usize,
    },
    /// A backing tile buffer does not form a square grid of the given size.
    NotSquare {
        /// Expected side length.
        size: usize,
        /// Actual buffer length.
        len: usize,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::SizeTooSmall { size } => {
                write!(
                    f,
                    "board size {size} is too small (minimum {})",
                    crate::game::Board::MIN_SIZE
                )
            }
            BoardError::NotSquare { size, len } => {
                write!(
                    f,
                    "tile buffer of {len} cells does not form a {size}x{size} grid"
                )
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Result type for board construction.
pub type BoardResult<T> = Result<T, BoardError>;
