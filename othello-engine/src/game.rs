//! Implements game-level Othello logic.
//!
//! [`Game`] is the only authority on legality and the only mutator of the board,
//! the per-color piece index and the piece counts. Operations validate first and
//! mutate second, so a rejected call never changes anything.

use crate::board::{Board, BoardSnapshot, Cell};
use crate::color::{ByColor, Color, ParseColorError};
use crate::location::{Direction, Location, MoveList};
use crate::player::Player;
use crate::ray;
use derive_more::{Display, Error};
use std::collections::BTreeSet;
use std::fmt;
use tracing::{debug, info};

/// How a finished game was decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Winner(Color),
    Tie,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(color) => write!(f, "{} wins", color),
            Outcome::Tie => f.write_str("Tie"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum GameError {
    #[display(fmt = "invalid color: {}", token)]
    InvalidColor { token: String },
    #[display(fmt = "{} is already played by {}", color, name)]
    DuplicatePlayerRegistration { color: Color, name: String },
    #[display(fmt = "illegal move {} (legal moves: {})", location, legal)]
    IllegalMove { location: Location, legal: MoveList },
    #[display(fmt = "the game is over")]
    MoveAfterGameOver,
}

impl From<ParseColorError> for GameError {
    fn from(err: ParseColorError) -> Self {
        GameError::InvalidColor { token: err.token }
    }
}

/// What an accepted move did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveReport {
    /// The board after the move.
    pub board: BoardSnapshot,
    /// Every captured location, grouped by direction and nearest the move first.
    pub flipped: Vec<Location>,
    /// Set if this move ended the game.
    pub outcome: Option<Outcome>,
}

/// Final tallies, printed the way a referee would announce them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSummary {
    pub scores: ByColor<u8>,
    pub names: ByColor<Option<String>>,
    pub outcome: Outcome,
}

impl fmt::Display for GameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Game is ended white piece: {} black piece: {}",
            self.scores.white, self.scores.black
        )?;
        match self.outcome {
            Outcome::Tie => f.write_str("It's a tie"),
            Outcome::Winner(color) => {
                let name = self.names[color].as_deref().unwrap_or("");
                match color {
                    Color::Black => write!(f, "Winner is black player: {}", name),
                    Color::White => write!(f, "Winner is white player: {}", name),
                }
            }
        }
    }
}

/// The complete state of an Othello game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    board: Board,
    positions: ByColor<BTreeSet<Location>>,
    players: ByColor<Player>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Set up the starting position with both player seats empty.
    pub fn new() -> Self {
        let board = Board::new();
        let positions = ByColor::from_fn(|color| {
            board
                .cells()
                .filter(|&(_, cell)| cell == Cell::Occupied(color))
                .map(|(loc, _)| loc)
                .collect()
        });

        Self {
            board,
            positions,
            players: ByColor::from_fn(Player::unregistered),
        }
    }

    /// Seat a named player at `color`.
    pub fn register_player<S: Into<String>>(&mut self, color: Color, name: S) -> Result<(), GameError> {
        let player = &mut self.players[color];
        if let Some(existing) = player.name() {
            return Err(GameError::DuplicatePlayerRegistration {
                color,
                name: existing.to_string(),
            });
        }

        let name = name.into();
        debug!(%color, %name, "registered player");
        player.register(name);
        Ok(())
    }

    /// Get the set of legal moves for `color`. Does not depend on whose turn it is.
    ///
    /// Search is rooted at `color`'s own pieces: each adjacent opponent piece anchors a
    /// ray pointing away from ours, and the empty square that ends the run is a move.
    pub fn legal_moves(&self, color: Color) -> MoveList {
        let opponent = !color;
        let mut moves = MoveList::default();

        for &own in &self.positions[color] {
            for direction in Direction::ALL.iter().copied() {
                let anchor = match own.step(direction) {
                    Some(anchor) if self.positions[opponent].contains(&anchor) => anchor,
                    _ => continue,
                };

                if let Some(landing) = ray::landing(&self.board, anchor, direction, color) {
                    moves.insert(landing);
                }
            }
        }

        moves
    }

    /// Validate and play a move for `color`.
    ///
    /// Fails without touching the game if nobody is registered for `color`, if the game
    /// is already over, or if `location` is not one of [`Game::legal_moves`].
    pub fn submit_move(&mut self, color: Color, location: Location) -> Result<MoveReport, GameError> {
        if !self.players[color].is_registered() {
            return Err(GameError::InvalidColor {
                token: color.to_string(),
            });
        }

        if self.is_game_over() {
            return Err(GameError::MoveAfterGameOver);
        }

        let legal = self.legal_moves(color);
        if !legal.contains(location) {
            debug!(%color, %location, %legal, "rejected illegal move");
            return Err(GameError::IllegalMove { location, legal });
        }

        let flipped = self.apply_move(color, location);
        debug!(%color, %location, flipped = flipped.len(), "applied move");

        let outcome = if self.is_game_over() {
            let outcome = self.winner();
            let (black, white) = self.scores();
            info!(%outcome, black, white, "game over");
            Some(outcome)
        } else {
            None
        };

        Ok(MoveReport {
            board: self.board_snapshot(),
            flipped,
            outcome,
        })
    }

    /// Place a piece and flip every run it closes. Returns the flipped locations.
    /// `location` must be one of `color`'s legal moves.
    pub(crate) fn apply_move(&mut self, color: Color, location: Location) -> Vec<Location> {
        let opponent = !color;

        self.board.put(location, Cell::Occupied(color));
        self.positions[color].insert(location);
        self.players[color].gain();

        let mut flipped = Vec::new();
        for direction in Direction::ALL.iter().copied() {
            let anchor = match location.step(direction) {
                Some(anchor) if self.positions[opponent].contains(&anchor) => anchor,
                _ => continue,
            };

            if let Some(run) = ray::captures(&self.board, anchor, direction, color) {
                flipped.extend(run);
            }
        }

        for &loc in &flipped {
            self.board.put(loc, Cell::Occupied(color));
            self.positions[opponent].remove(&loc);
            self.positions[color].insert(loc);
            self.players[opponent].lose();
            self.players[color].gain();
        }

        flipped
    }

    /// True once neither color has a legal move.
    pub fn is_game_over(&self) -> bool {
        Color::ALL
            .iter()
            .all(|&color| self.legal_moves(color).is_empty())
    }

    /// Compare piece counts. Meaningful at any time, final once the game is over.
    pub fn winner(&self) -> Outcome {
        let (black, white) = self.scores();
        if black > white {
            Outcome::Winner(Color::Black)
        } else if white > black {
            Outcome::Winner(Color::White)
        } else {
            Outcome::Tie
        }
    }

    /// Piece counts as (black, white).
    pub fn scores(&self) -> (u8, u8) {
        (
            self.players[Color::Black].pieces(),
            self.players[Color::White].pieces(),
        )
    }

    pub fn player(&self, color: Color) -> &Player {
        &self.players[color]
    }

    /// The locations `color` occupies, in row-major order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = Location> + '_ {
        self.positions[color].iter().copied()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    /// Scores, names and the current outcome.
    pub fn summary(&self) -> GameSummary {
        let (black, white) = self.scores();
        GameSummary {
            scores: ByColor::new(black, white),
            names: ByColor::from_fn(|color| self.players[color].name().map(str::to_string)),
            outcome: self.winner(),
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (black, white) = self.scores();
        writeln!(f, "{}", self.board)?;
        write!(f, "Black (X): {}  White (O): {}", black, white)
    }
}
