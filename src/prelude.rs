//! Commonly used types and utilities for ease of import.

pub use crate::{
    ai::choose_move, evaluate, AiPlayer, Board, GameConfig, GameError, HumanPlayer, LifeTracker,
    Mark, MatchController, MatchObserver, Mode, MoveOutcome, Phase, Player, Side, Win,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, render_board, TerminalObserver};
