//! Directional ray scans, shared by legal-move search and capture resolution.
//!
//! A ray starts at an anchor (a piece of the mover's opponent), walks over consecutive
//! opponent pieces, and stops at the first cell that is not the opponent's.
//! The two searches differ only in which stopping cell counts as success:
//!
//!  - legality: an empty cell, which becomes the landing square of a legal move;
//!  - capture: a cell of the mover's color, which closes the run so it flips.

use crate::board::{Board, Cell};
use crate::color::Color;
use crate::location::{Direction, Location};
use crate::EDGE_LENGTH;
use arrayvec::ArrayVec;

/// Opponent pieces walked over by a single ray, nearest the anchor first.
pub(crate) type Run = ArrayVec<Location, EDGE_LENGTH>;

/// The cell a ray stopped on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RayEnd {
    /// Hit the frame.
    Boundary,
    /// Hit an empty square.
    Empty(Location),
    /// Hit a piece of the mover's color.
    Mover,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Ray {
    pub run: Run,
    pub end: RayEnd,
}

/// Walk from `anchor` in `direction`, collecting opponent pieces until something else is hit.
/// Every ray is bounded by the frame, so this takes at most `EDGE_LENGTH` steps.
pub(crate) fn cast(board: &Board, anchor: Location, direction: Direction, mover: Color) -> Ray {
    let opponent = !mover;
    let (d_row, d_col) = direction.delta();
    let (mut row, mut col) = (anchor.row() as isize, anchor.col() as isize);
    let mut run = Run::new();

    loop {
        // The frame ends every ray, so pieces and empties are always interior.
        let end = match (board.get(row, col), Location::from_signed(row, col)) {
            (Cell::Boundary, _) => RayEnd::Boundary,
            (Cell::Occupied(color), Some(loc)) if color == opponent => {
                run.push(loc);
                row += d_row;
                col += d_col;
                continue;
            }
            (Cell::Occupied(_), Some(_)) => RayEnd::Mover,
            (Cell::Empty, Some(loc)) => RayEnd::Empty(loc),
            (cell, None) => unreachable!("{:?} outside the interior at ({}, {})", cell, row, col),
        };

        return Ray { run, end };
    }
}

/// The landing square of a legal move for `mover` along this ray, if there is one.
pub(crate) fn landing(
    board: &Board,
    anchor: Location,
    direction: Direction,
    mover: Color,
) -> Option<Location> {
    match cast(board, anchor, direction, mover) {
        Ray {
            ref run,
            end: RayEnd::Empty(loc),
        } if !run.is_empty() => Some(loc),
        _ => None,
    }
}

/// The opponent pieces `mover` captures along this ray, if the ray is closed by one of
/// `mover`'s pieces.
pub(crate) fn captures(
    board: &Board,
    anchor: Location,
    direction: Direction,
    mover: Color,
) -> Option<Run> {
    let ray = cast(board, anchor, direction, mover);
    match ray.end {
        RayEnd::Mover if !ray.run.is_empty() => Some(ray.run),
        _ => None,
    }
}
