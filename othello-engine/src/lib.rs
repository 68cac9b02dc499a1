//! `othello-engine` is a small, strict Othello rules engine for UIs, CLIs, and agents.
//!
//! This package implements two levels of abstraction:
//!
//!  - [`Board`] is the playing surface: an 8x8 grid of [`Cell`]s framed by a ring of
//!    boundary sentinels. It holds state but knows nothing about the rules.
//!  - [`Game`] is the rules engine. It owns the board, the per-color piece index and
//!    the two [`Player`] records, and is the only thing that mutates them.
//!    Every rejected operation leaves the game untouched.
//!
//! The engine does not track whose turn it is and never forces a pass: the game ends
//! only when neither color has a legal move.

pub mod test_utils;

mod board;
mod color;
mod game;
mod location;
mod player;
mod ray;
mod utils;

pub use board::*;
pub use color::*;
pub use game::*;
pub use location::*;
pub use player::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
