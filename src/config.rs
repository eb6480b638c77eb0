use crate::common::{GameError, Side};
use crate::game::Mode;

pub const BOARD_SIDE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;
pub const DEFAULT_STARTING_LIVES: u32 = 5;
pub const DEFAULT_STARTING_TURN: Side = Side::O;
pub const DEFAULT_OPPONENT_DELAY_MS: u64 = 165;

/// Tunables for a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(default))]
pub struct GameConfig {
    /// Lives each side starts with, restored once a side runs out.
    pub starting_lives: u32,
    /// Side to move after every reset. In opponent mode this is the human.
    pub starting_turn: Side,
    /// Upper bound of the cosmetic pause after an opponent move; 0 disables it.
    pub opponent_delay_ms: u64,
    /// Overwrite every cell with the winner's mark when a line completes.
    pub fill_board_on_win: bool,
    /// Mode the first match starts in.
    pub mode: Mode,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_lives: DEFAULT_STARTING_LIVES,
            starting_turn: DEFAULT_STARTING_TURN,
            opponent_delay_ms: DEFAULT_OPPONENT_DELAY_MS,
            fill_board_on_win: true,
            mode: Mode::HumanVsOpponent,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.starting_lives == 0 {
            return Err(GameError::InvalidConfig("starting_lives must be at least 1"));
        }
        Ok(())
    }
}
