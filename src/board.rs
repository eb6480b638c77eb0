//! Game board state, stored as one `BitBoard` per side.

use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::{GameError, Mark, Side};
use crate::config::{BOARD_SIDE, CELL_COUNT};

/// Occupancy set of one side: bit `i` is cell `i` in row-major order.
pub type Cells = BitBoard<u16, BOARD_SIDE>;

/// Plain snapshot of the nine cells, used for notifications and fixtures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardState {
    pub cells: [Mark; CELL_COUNT],
}

/// The 3×3 grid. The X and O sets never overlap.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Board {
    xs: Cells,
    os: Cells,
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board {
            xs: Cells::new(),
            os: Cells::new(),
        }
    }

    /// Write `side` into cell `index`, replacing whatever was there.
    ///
    /// No emptiness check is made; callers that care must use
    /// [`Board::is_empty`] first.
    pub fn set(&mut self, index: usize, side: Side) -> Result<(), GameError> {
        let (own, other) = self.sets_mut(side);
        other.unset(index)?;
        own.set(index)?;
        Ok(())
    }

    /// Mark held by cell `index`.
    pub fn get(&self, index: usize) -> Result<Mark, GameError> {
        if self.xs.get(index)? {
            Ok(Mark::X)
        } else if self.os.get(index)? {
            Ok(Mark::O)
        } else {
            Ok(Mark::Empty)
        }
    }

    /// Returns `true` when cell `index` holds no mark.
    pub fn is_empty(&self, index: usize) -> Result<bool, GameError> {
        Ok(self.get(index)? == Mark::Empty)
    }

    /// Overwrite all nine cells with `side`.
    pub fn fill_all(&mut self, side: Side) {
        let (own, other) = self.sets_mut(side);
        own.fill();
        other.clear_all();
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.xs.clear_all();
        self.os.clear_all();
    }

    /// Cells held by `side`.
    pub fn occupancy(&self, side: Side) -> Cells {
        match side {
            Side::X => self.xs,
            Side::O => self.os,
        }
    }

    /// Indices of empty cells in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> {
        (!(self.xs | self.os)).iter_set_bits()
    }

    pub fn empty_count(&self) -> usize {
        CELL_COUNT - (self.xs | self.os).count_ones()
    }

    pub fn is_full(&self) -> bool {
        (self.xs | self.os).is_full()
    }

    /// All nine marks in row-major order.
    pub fn cells(&self) -> [Mark; CELL_COUNT] {
        core::array::from_fn(|i| {
            if self.xs.get(i).unwrap_or(false) {
                Mark::X
            } else if self.os.get(i).unwrap_or(false) {
                Mark::O
            } else {
                Mark::Empty
            }
        })
    }

    fn sets_mut(&mut self, side: Side) -> (&mut Cells, &mut Cells) {
        match side {
            Side::X => (&mut self.xs, &mut self.os),
            Side::O => (&mut self.os, &mut self.xs),
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board [")?;
        for (i, mark) in self.cells().iter().enumerate() {
            if i > 0 && i % BOARD_SIDE == 0 {
                write!(f, "|")?;
            }
            write!(f, "{}", mark)?;
        }
        write!(f, "]")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells = self.cells();
        for row in 0..BOARD_SIDE {
            for col in 0..BOARD_SIDE {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cells[row * BOARD_SIDE + col])?;
            }
            if row + 1 < BOARD_SIDE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl From<&Board> for BoardState {
    fn from(b: &Board) -> Self {
        BoardState { cells: b.cells() }
    }
}

impl From<BoardState> for Board {
    fn from(state: BoardState) -> Self {
        let mut board = Board::new();
        for (i, mark) in state.cells.iter().enumerate() {
            if let Some(side) = mark.side() {
                // indices come from a fixed-size array, always in range
                let _ = board.set(i, side);
            }
        }
        board
    }
}

impl From<[Mark; CELL_COUNT]> for Board {
    fn from(cells: [Mark; CELL_COUNT]) -> Self {
        Board::from(BoardState { cells })
    }
}
