//! The playing surface: a grid of [`Cell`]s with a sentinel frame.
//!
//! The 8x8 interior is stored inside a 10x10 grid whose outer ring is permanently
//! [`Cell::Boundary`]. Directional scans step until they hit a non-opponent cell,
//! and the frame guarantees they stop before leaving the grid.
//! The board holds state only; the rules live in [`crate::Game`].

use crate::color::Color;
use crate::location::Location;
use crate::{utils, EDGE_LENGTH};
use derive_more::{Display, Error};
use std::fmt;
use std::ops::Index;

/// Edge length of the backing grid, including the frame.
const FRAMED_EDGE: usize = EDGE_LENGTH + 2;

/// Starting pieces for Black, as (row, column).
pub const BLACK_START: [(usize, usize); 2] = [(3, 3), (4, 4)];

/// Starting pieces for White, as (row, column).
pub const WHITE_START: [(usize, usize); 2] = [(3, 4), (4, 3)];

/// The state of a single square.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    Empty,
    Boundary,
    Occupied(Color),
}

impl Cell {
    /// The single-character mark used when printing a board.
    pub fn mark(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Boundary => '*',
            Cell::Occupied(color) => color.mark(),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    #[display(fmt = "({}, {}) is not an interior square", row, col)]
    OutOfBounds { row: isize, col: isize },
    #[display(fmt = "boundary markers cannot be written to the board")]
    BoundaryWrite,
}

/// The framed grid of cells.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    grid: [[Cell; FRAMED_EDGE]; FRAMED_EDGE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Build the starting position: boundary ring, empty interior, four center pieces.
    pub fn new() -> Self {
        let mut grid = [[Cell::Boundary; FRAMED_EDGE]; FRAMED_EDGE];
        for row in grid.iter_mut().skip(1).take(EDGE_LENGTH) {
            for cell in row.iter_mut().skip(1).take(EDGE_LENGTH) {
                *cell = Cell::Empty;
            }
        }

        let mut board = Self { grid };
        for &(row, col) in BLACK_START.iter() {
            board.grid[row + 1][col + 1] = Cell::Occupied(Color::Black);
        }
        for &(row, col) in WHITE_START.iter() {
            board.grid[row + 1][col + 1] = Cell::Occupied(Color::White);
        }
        board
    }

    /// Get the cell at zero-based interior coordinates.
    /// Anything outside the interior reads as [`Cell::Boundary`].
    #[inline]
    pub fn get(&self, row: isize, col: isize) -> Cell {
        let (framed_row, framed_col) = (row + 1, col + 1);
        if framed_row < 0
            || framed_col < 0
            || framed_row >= FRAMED_EDGE as isize
            || framed_col >= FRAMED_EDGE as isize
        {
            return Cell::Boundary;
        }
        self.grid[framed_row as usize][framed_col as usize]
    }

    /// Overwrite the cell at zero-based interior coordinates.
    /// The frame cannot be written, and no boundary marker can be written into the interior.
    pub fn set(&mut self, row: isize, col: isize, cell: Cell) -> Result<(), BoardError> {
        let loc = Location::from_signed(row, col).ok_or(BoardError::OutOfBounds { row, col })?;
        if cell == Cell::Boundary {
            return Err(BoardError::BoundaryWrite);
        }
        self.put(loc, cell);
        Ok(())
    }

    /// Write an interior cell. Locations are always interior, so this cannot fail.
    #[inline]
    pub(crate) fn put(&mut self, loc: Location, cell: Cell) {
        self.grid[loc.row() + 1][loc.col() + 1] = cell;
    }

    /// Iterate over every interior location and its cell, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Location, Cell)> + '_ {
        Location::all().map(move |loc| (loc, self[loc]))
    }

    /// Count interior cells in the given state.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells().filter(|&(_, c)| c == cell).count()
    }

    /// Copy out the interior for external rendering.
    pub fn snapshot(&self) -> BoardSnapshot {
        let mut cells = [[Cell::Empty; EDGE_LENGTH]; EDGE_LENGTH];
        for (loc, cell) in self.cells() {
            cells[loc.row()][loc.col()] = cell;
        }
        BoardSnapshot { cells }
    }
}

impl Index<Location> for Board {
    type Output = Cell;

    fn index(&self, loc: Location) -> &Cell {
        &self.grid[loc.row() + 1][loc.col() + 1]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(self.cells().map(|(_, cell)| cell.mark()), f)
    }
}

/// A read-only copy of the 8x8 interior.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardSnapshot {
    cells: [[Cell; EDGE_LENGTH]; EDGE_LENGTH],
}

impl BoardSnapshot {
    /// The interior rows, top to bottom.
    pub fn rows(&self) -> &[[Cell; EDGE_LENGTH]; EDGE_LENGTH] {
        &self.cells
    }

    /// Count the pieces of one color.
    pub fn count(&self, color: Color) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Occupied(color))
            .count()
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_empty()).count()
    }
}

impl Index<Location> for BoardSnapshot {
    type Output = Cell;

    fn index(&self, loc: Location) -> &Cell {
        &self.cells[loc.row()][loc.col()]
    }
}

impl fmt::Display for BoardSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(self.cells.iter().flatten().map(|cell| cell.mark()), f)
    }
}
