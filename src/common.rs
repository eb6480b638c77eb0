//! Common types for Noughts and Crosses: cell marks, sides and errors.

use core::fmt;

use crate::bitboard::BitBoardError;

/// Content of a single board cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    /// The side owning this mark, or `None` for an empty cell.
    pub fn side(self) -> Option<Side> {
        match self {
            Mark::Empty => None,
            Mark::X => Some(Side::X),
            Mark::O => Some(Side::O),
        }
    }

    /// Glyph used when printing boards. Empty cells print as `-`.
    pub fn symbol(self) -> char {
        match self {
            Mark::Empty => '-',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl From<Side> for Mark {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Mark::X,
            Side::O => Mark::O,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    X,
    O,
}

impl Side {
    /// Both sides, X first.
    pub const ALL: [Side; 2] = [Side::X, Side::O];

    /// The other side.
    pub fn opponent(self) -> Side {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }

    /// Stable slot for per-side arrays.
    pub(crate) fn slot(self) -> usize {
        match self {
            Side::X => 0,
            Side::O => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Mark::from(*self))
    }
}

/// Errors returned by board, opponent and match operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Cell index is outside `0..9`.
    InvalidIndex,
    /// Target cell already holds a mark.
    Occupied,
    /// The match is not waiting for a human move.
    NotAwaitingHuman,
    /// The opponent was asked to move on a full board.
    Exhausted,
    /// Configuration rejected at construction.
    InvalidConfig(&'static str),
}

impl GameError {
    /// True for rejected human input: the caller may ignore it and carry on.
    pub fn is_invalid_move(&self) -> bool {
        matches!(
            self,
            GameError::InvalidIndex | GameError::Occupied | GameError::NotAwaitingHuman
        )
    }
}

impl From<BitBoardError> for GameError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::IndexOutOfBounds { .. } => GameError::InvalidIndex,
        }
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidIndex => write!(f, "Cell index is out of range"),
            GameError::Occupied => write!(f, "Cell is already taken"),
            GameError::NotAwaitingHuman => write!(f, "Not waiting for a move from a human player"),
            GameError::Exhausted => write!(f, "No empty cell left for the opponent"),
            GameError::InvalidConfig(why) => write!(f, "Invalid configuration: {}", why),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
