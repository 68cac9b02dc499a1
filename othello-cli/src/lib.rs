//! A terminal front end for `othello-engine`.
//!
//! The engine never forces a pass, so passing is decided here: when the color to move
//! has no legal moves but the game is not over, the turn goes to the other color.

mod play;

pub use play::play;
