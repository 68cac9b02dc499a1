//! Code for working with [`Location`]s, [`Direction`]s and [`MoveList`]s on the Othello board.

use crate::{EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error};
use std::collections::btree_set::{self, BTreeSet};
use std::convert::TryFrom;
use std::fmt::{self, Formatter, Write};
use std::iter::FromIterator;

/// A location inside the playable 8x8 area, as zero-based row and column.
/// Boundary coordinates cannot be represented.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(u8, u8)", into = "(u8, u8)"))]
pub struct Location {
    row: u8,
    col: u8,
}

/// One of the eight compass directions. North is towards row 0.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The (row, column) unit step for this direction.
    #[inline]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }
}

impl Location {
    /// Convert from zero-based row and column coordinates.
    /// Returns None if either coordinate is off the board.
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row >= EDGE_LENGTH || col >= EDGE_LENGTH {
            None
        } else {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        }
    }

    /// Like [`Location::from_coords`], for coordinates that may be negative.
    pub fn from_signed(row: isize, col: isize) -> Option<Self> {
        if row < 0 || col < 0 {
            None
        } else {
            Self::from_coords(row as usize, col as usize)
        }
    }

    /// Convert from a row-major square index: 0 is the upper left, 63 the lower right.
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= NUM_SPACES {
            None
        } else {
            Self::from_coords(index / EDGE_LENGTH, index % EDGE_LENGTH)
        }
    }

    /// Convert into a row-major square index.
    #[inline]
    pub fn to_index(self) -> usize {
        self.row() * EDGE_LENGTH + self.col()
    }

    /// Get the row and column coordinates.
    #[inline]
    pub fn to_coords(self) -> (usize, usize) {
        (self.row(), self.col())
    }

    #[inline]
    pub fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// The neighboring location one step in `direction`, if it is on the board.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (d_row, d_col) = direction.delta();
        Self::from_signed(self.row as isize + d_row, self.col as isize + d_col)
    }

    /// Every location on the board, in row-major order.
    pub fn all() -> impl Iterator<Item = Location> {
        (0..NUM_SPACES).filter_map(Self::from_index)
    }
}

/// Convert this [`Location`] into string notation ("A4").
impl fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let row_str = "12345678".chars().nth(self.row()).ok_or(fmt::Error)?;
        let col_str = "ABCDEFGH".chars().nth(self.col()).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "invalid location")]
pub struct ParseLocationError;

/// Build a [`Location`] from 1-indexed string notation ("A4" is row 3, column 0).
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let col_str = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let col = "ABCDEFGH".find(col_str).ok_or(ParseLocationError)?;
        let row = chars
            .next()
            .ok_or(ParseLocationError)?
            .to_digit(10)
            .ok_or(ParseLocationError)? as usize;

        if row == 0 || chars.next() != None {
            return Err(ParseLocationError);
        }

        Self::from_coords(row - 1, col).ok_or(ParseLocationError)
    }
}

impl TryFrom<(u8, u8)> for Location {
    type Error = ParseLocationError;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        Self::from_coords(row as usize, col as usize).ok_or(ParseLocationError)
    }
}

impl From<Location> for (u8, u8) {
    fn from(loc: Location) -> Self {
        (loc.row, loc.col)
    }
}

/// A set of legal moves, iterated in row-major order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MoveList(BTreeSet<Location>);

impl MoveList {
    /// Returns whether `loc` is in this list.
    pub fn contains(&self, loc: Location) -> bool {
        self.0.contains(&loc)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Location> + '_ {
        self.0.iter().copied()
    }

    /// Insert a move, returning false if it was already present.
    pub(crate) fn insert(&mut self, loc: Location) -> bool {
        self.0.insert(loc)
    }
}

impl FromIterator<Location> for MoveList {
    fn from_iter<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for MoveList {
    type Item = Location;
    type IntoIter = btree_set::IntoIter<Location>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for MoveList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let string = self
            .iter()
            .map(|mv| mv.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        f.write_fmt(format_args!("[{}]", string))
    }
}
