//! Notifications sent from a match to the presentation layer.

use alloc::vec::Vec;

use crate::board::{Board, BoardState};
use crate::common::Side;

/// Receives state changes from a [`MatchController`](crate::MatchController).
///
/// Every method defaults to doing nothing, so observers only implement the
/// notifications they render.
pub trait MatchObserver {
    /// The board changed: a mark was placed, the board was filled after a win,
    /// or it was cleared.
    fn board_changed(&mut self, _board: &Board) {}

    /// The side to move changed.
    fn turn_changed(&mut self, _turn: Side) {}

    /// `side` now has `remaining` lives.
    fn life_changed(&mut self, _side: Side, _remaining: u32) {}

    /// `winner` completed a line.
    fn match_finished(&mut self, _winner: Side) {}

    /// The board filled up without a completed line.
    fn match_drawn(&mut self) {}

    /// `loser` ran out of lives.
    fn game_over(&mut self, _loser: Side) {}
}

/// Null observer.
impl MatchObserver for () {}

/// Recorded form of a [`MatchObserver`] callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchEvent {
    BoardChanged(BoardState),
    TurnChanged(Side),
    LifeChanged { side: Side, remaining: u32 },
    MatchFinished { winner: Side },
    MatchDrawn,
    GameOver { loser: Side },
}

/// Observer that keeps every event in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct EventLog {
    events: Vec<MatchEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[MatchEvent] {
        &self.events
    }

    /// Drop everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Winners of finished matches, oldest first.
    pub fn winners(&self) -> impl Iterator<Item = Side> + '_ {
        self.events.iter().filter_map(|e| match e {
            MatchEvent::MatchFinished { winner } => Some(*winner),
            _ => None,
        })
    }

    /// Sides that ran out of lives, oldest first.
    pub fn game_overs(&self) -> impl Iterator<Item = Side> + '_ {
        self.events.iter().filter_map(|e| match e {
            MatchEvent::GameOver { loser } => Some(*loser),
            _ => None,
        })
    }

    pub fn draws(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, MatchEvent::MatchDrawn))
            .count()
    }
}

impl MatchObserver for EventLog {
    fn board_changed(&mut self, board: &Board) {
        self.events.push(MatchEvent::BoardChanged(BoardState::from(board)));
    }

    fn turn_changed(&mut self, turn: Side) {
        self.events.push(MatchEvent::TurnChanged(turn));
    }

    fn life_changed(&mut self, side: Side, remaining: u32) {
        self.events.push(MatchEvent::LifeChanged { side, remaining });
    }

    fn match_finished(&mut self, winner: Side) {
        self.events.push(MatchEvent::MatchFinished { winner });
    }

    fn match_drawn(&mut self) {
        self.events.push(MatchEvent::MatchDrawn);
    }

    fn game_over(&mut self, loser: Side) {
        self.events.push(MatchEvent::GameOver { loser });
    }
}

/// Observer that only counts results. Its size does not grow with the number
/// of matches played.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchTally {
    wins: [usize; 2],
    draws: usize,
    game_overs: usize,
}

impl MatchTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wins(&self, side: Side) -> usize {
        self.wins[side.slot()]
    }

    pub fn draws(&self) -> usize {
        self.draws
    }

    pub fn game_overs(&self) -> usize {
        self.game_overs
    }

    /// Finished matches, won or drawn.
    pub fn matches(&self) -> usize {
        self.wins.iter().sum::<usize>() + self.draws
    }
}

impl MatchObserver for MatchTally {
    fn match_finished(&mut self, winner: Side) {
        self.wins[winner.slot()] += 1;
    }

    fn match_drawn(&mut self) {
        self.draws += 1;
    }

    fn game_over(&mut self, _loser: Side) {
        self.game_overs += 1;
    }
}
