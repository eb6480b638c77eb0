use crate::{
    board::Board,
    common::{GameError, Side},
};
use rand::rngs::SmallRng;

/// Whoever moves for a side: a person at the keyboard or a scripted opponent.
pub trait Player {
    /// Choose a cell for `side` on `board`. `Ok(None)` means the move has to
    /// come from outside, through the presentation layer.
    fn select_cell(
        &mut self,
        rng: &mut SmallRng,
        board: &Board,
        side: Side,
    ) -> Result<Option<usize>, GameError>;

    /// Whether this seat takes its moves from user input.
    fn is_interactive(&self) -> bool {
        false
    }
}

/// Seat driven by the presentation layer.
#[derive(Debug, Default, Clone, Copy)]
pub struct HumanPlayer;

impl HumanPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for HumanPlayer {
    fn select_cell(
        &mut self,
        _rng: &mut SmallRng,
        _board: &Board,
        _side: Side,
    ) -> Result<Option<usize>, GameError> {
        Ok(None)
    }

    fn is_interactive(&self) -> bool {
        true
    }
}
