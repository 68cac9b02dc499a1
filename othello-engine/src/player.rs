use crate::color::Color;

/// Pieces each color owns before the first move.
pub const STARTING_PIECES: u8 = 2;

/// A color's seat at the table: who sits there, and how many pieces they own.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Player {
    color: Color,
    name: Option<String>,
    pieces: u8,
}

impl Player {
    /// An empty seat for `color`, holding the starting pieces.
    pub(crate) fn unregistered(color: Color) -> Self {
        Self {
            color,
            name: None,
            pieces: STARTING_PIECES,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// The display name, or None if no one has registered for this color.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_registered(&self) -> bool {
        self.name.is_some()
    }

    /// The number of pieces of this color on the board.
    pub fn pieces(&self) -> u8 {
        self.pieces
    }

    pub(crate) fn register(&mut self, name: String) {
        self.name = Some(name);
    }

    pub(crate) fn gain(&mut self) {
        self.pieces += 1;
    }

    pub(crate) fn lose(&mut self) {
        self.pieces -= 1;
    }
}
