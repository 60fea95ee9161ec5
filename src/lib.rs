// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Twenty48: a deterministic sliding-tile merge engine.
//!
//! This crate implements the board logic of the 2048-style merge game:
//! - Pure grid transforms (rotation, line merging)
//! - Directional moves composed from rotation + left-merge
//! - Terminal-state detection (win tile reached, no moves left)
//! - Random tile spawning through an injected RNG
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │      CLI drivers (play, sim)        │
//! ├─────────────────────────────────────┤
//! │   Board (moves, spawn, terminal)    │
//! ├─────────────────────────────────────┤
//! │   Grid primitives (rotate, merge)   │
//! └─────────────────────────────────────┘
//! ```

pub mod error;
pub mod game;

pub use error::{BoardError, BoardResult};

// Re-export key game types at crate root for convenience
pub use game::{Board, Direction, WIN_TILE};
