//! Miscellaneous project utilities.

use crate::EDGE_LENGTH;
use std::fmt::{self, Formatter};
use std::iter::Iterator;

/// Format one mark per interior cell into a labelled grid, rows top to bottom.
/// `marks` must yield exactly 64 items.
pub fn format_grid<T: IntoIterator<Item = char>>(marks: T, f: &mut Formatter) -> fmt::Result {
    let mut marks = marks.into_iter();
    write!(f, "  A B C D E F G H")?;

    for row in 0..EDGE_LENGTH {
        write!(f, "\n{}", row + 1)?;
        for _ in 0..EDGE_LENGTH {
            write!(f, " {}", marks.next().ok_or(fmt::Error)?)?;
        }
    }

    match marks.next() {
        None => Ok(()),
        _ => Err(fmt::Error),
    }
}
