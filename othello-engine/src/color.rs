//! The two piece colors, and a container holding one value per color.

use derive_more::{Display, Error};
use std::ops::{Index, IndexMut};

/// One of the two sides in a game.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// Both colors, black first.
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    /// The single-character mark used when printing a board.
    pub fn mark(self) -> char {
        match self {
            Color::Black => 'X',
            Color::White => 'O',
        }
    }
}

impl Default for Color {
    /// Gets the color that conventionally moves first (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Color {
    type Output = Self;

    /// Gets the opponent's color.
    fn not(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "invalid color: {:?}", token)]
pub struct ParseColorError {
    pub token: String,
}

/// Parse a color token: "black" / "white", their initials, or the board marks "X" / "O".
/// Case-insensitive, surrounding whitespace ignored.
impl std::str::FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" | "b" | "x" => Ok(Color::Black),
            "white" | "w" | "o" => Ok(Color::White),
            _ => Err(ParseColorError {
                token: s.to_string(),
            }),
        }
    }
}

/// Holds one `T` per color, indexed by [`Color`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ByColor<T> {
    pub black: T,
    pub white: T,
}

impl<T> ByColor<T> {
    pub fn new(black: T, white: T) -> Self {
        Self { black, white }
    }

    /// Build both slots from a function of the color.
    pub fn from_fn<F: FnMut(Color) -> T>(mut f: F) -> Self {
        Self {
            black: f(Color::Black),
            white: f(Color::White),
        }
    }
}

impl<T> Index<Color> for ByColor<T> {
    type Output = T;

    fn index(&self, color: Color) -> &T {
        match color {
            Color::Black => &self.black,
            Color::White => &self.white,
        }
    }
}

impl<T> IndexMut<Color> for ByColor<T> {
    fn index_mut(&mut self, color: Color) -> &mut T {
        match color {
            Color::Black => &mut self.black,
            Color::White => &mut self.white,
        }
    }
}
