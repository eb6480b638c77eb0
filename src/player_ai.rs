use crate::{
    ai,
    board::Board,
    common::{GameError, Side},
};
use rand::rngs::SmallRng;

use crate::player::Player;

/// Scripted opponent using the win, block, random rule set.
#[derive(Debug, Default, Clone, Copy)]
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for AiPlayer {
    fn select_cell(
        &mut self,
        rng: &mut SmallRng,
        board: &Board,
        side: Side,
    ) -> Result<Option<usize>, GameError> {
        ai::choose_move(board, side, rng).map(Some)
    }
}
