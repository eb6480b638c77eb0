//! Win detection over the eight fixed lines of the board.

use crate::board::{Board, Cells};
use crate::common::Side;

/// Three cell indices forming a row, column or diagonal.
pub type Line = [usize; 3];

/// Every winning line, in scan order: rows, columns, then both diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// A completed line and the side holding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Win {
    pub side: Side,
    pub line: Line,
}

impl Win {
    /// Last cell of the winning line.
    pub fn end(&self) -> usize {
        self.line[2]
    }
}

/// Occupancy mask of a line.
pub(crate) fn line_mask(line: &Line) -> Cells {
    // LINES only holds indices below 9
    Cells::from_cells(line.iter().copied()).unwrap_or_default()
}

/// Returns the first completed line in [`LINES`] order, if any.
pub fn evaluate(board: &Board) -> Option<Win> {
    let xs = board.occupancy(Side::X);
    let os = board.occupancy(Side::O);
    LINES.iter().find_map(|line| {
        let mask = line_mask(line);
        if xs.contains_all(mask) {
            Some(Win { side: Side::X, line: *line })
        } else if os.contains_all(mask) {
            Some(Win { side: Side::O, line: *line })
        } else {
            None
        }
    })
}

/// A full board with no completed line.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && evaluate(board).is_none()
}
