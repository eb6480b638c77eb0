// Rule-based move selection for the scripted opponent.
// Uses no_std and avoids heap allocations.

use crate::{
    board::Board,
    common::{GameError, Side},
    config::CELL_COUNT,
    win::{line_mask, LINES},
};
use rand::Rng;

/// First line, in scan order, where `side` holds two cells and the third is
/// empty. Returns the empty cell.
pub fn completing_cell(board: &Board, side: Side) -> Option<usize> {
    let own = board.occupancy(side);
    let taken = own | board.occupancy(side.opponent());
    LINES.iter().find_map(|line| {
        let mask = line_mask(line);
        if (own & mask).count_ones() != 2 || (taken & mask).count_ones() != 2 {
            return None;
        }
        line.iter()
            .copied()
            .find(|&i| board.is_empty(i).unwrap_or(false))
    })
}

/// Pick a cell uniformly among the empty ones.
pub fn random_empty<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<usize, GameError> {
    let mut empties = [0usize; CELL_COUNT];
    let mut n = 0;
    for i in board.empty_cells() {
        empties[n] = i;
        n += 1;
    }
    if n == 0 {
        return Err(GameError::Exhausted);
    }
    Ok(empties[rng.random_range(0..n)])
}

/// Choose the opponent's move for `own`: complete a line of its own if it
/// can, otherwise block the other side's line, otherwise play at random.
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    own: Side,
    rng: &mut R,
) -> Result<usize, GameError> {
    if board.is_full() {
        return Err(GameError::Exhausted);
    }
    if let Some(cell) = completing_cell(board, own) {
        log::debug!("opponent {} completes a line at {}", own, cell);
        return Ok(cell);
    }
    if let Some(cell) = completing_cell(board, own.opponent()) {
        log::debug!("opponent {} blocks at {}", own, cell);
        return Ok(cell);
    }
    random_empty(board, rng)
}
