use alloc::boxed::Box;
use core::time::Duration;

use rand::{rngs::SmallRng, Rng};

use crate::{
    board::{Board, BoardState},
    common::{GameError, Side},
    config::{GameConfig, CELL_COUNT},
    events::MatchObserver,
    lives::LifeTracker,
    player::{HumanPlayer, Player},
    player_ai::AiPlayer,
    win::{self, Win},
};

/// Who occupies the second seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    HumanVsHuman,
    HumanVsOpponent,
}

impl Mode {
    pub fn toggled(self) -> Mode {
        match self {
            Mode::HumanVsHuman => Mode::HumanVsOpponent,
            Mode::HumanVsOpponent => Mode::HumanVsHuman,
        }
    }
}

/// Where the current match stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingHumanMove,
    /// Entered while a completed line is being scored.
    ResolvingWin,
    /// Entered while the scripted opponent plays its reply.
    AwaitingOpponentMove,
    /// The match ended in a win or a draw; only `reset` moves on from here.
    Idle,
}

/// Result of a human move, after any opponent reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The match goes on and waits for the next human move.
    Continue,
    Won(Win),
    Drawn,
}

/// Serializable snapshot of a match in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchState {
    pub board: BoardState,
    pub turn: Side,
    pub mode: Mode,
    pub lives: LifeTracker,
}

/// Drives turn order, win and draw resolution, lives and resets for a
/// sequence of matches.
pub struct MatchController<O: MatchObserver = ()> {
    config: GameConfig,
    board: Board,
    turn: Side,
    phase: Phase,
    mode: Mode,
    lives: LifeTracker,
    seats: [Box<dyn Player>; 2],
    observer: O,
}

impl<O: MatchObserver> MatchController<O> {
    /// Validate `config` and start the first match.
    ///
    /// `lives` is kept across matches; pass `LifeTracker::new(config.starting_lives)`
    /// for a fresh session. A tracker with a different starting value, or
    /// with more lives left than it started with, is rejected.
    pub fn new(config: GameConfig, lives: LifeTracker, observer: O) -> Result<Self, GameError> {
        config.validate()?;
        check_lives(&config, &lives)?;
        let mut ctl = Self {
            config,
            board: Board::new(),
            turn: config.starting_turn,
            phase: Phase::AwaitingHumanMove,
            mode: config.mode,
            lives,
            seats: seats_for(config.mode, config.starting_turn),
            observer,
        };
        ctl.start_match();
        Ok(ctl)
    }

    /// Resume a match from a snapshot.
    ///
    /// A finished board (completed line or no empty cell) resumes in
    /// [`Phase::Idle`]. Otherwise, in opponent mode, the snapshot must have the
    /// human to move.
    pub fn from_state(
        config: GameConfig,
        state: MatchState,
        observer: O,
    ) -> Result<Self, GameError> {
        config.validate()?;
        check_lives(&config, &state.lives)?;
        let seats = seats_for(state.mode, config.starting_turn);
        let board = Board::from(state.board);
        let phase = if win::evaluate(&board).is_some() || board.is_full() {
            Phase::Idle
        } else {
            Phase::AwaitingHumanMove
        };
        if phase == Phase::AwaitingHumanMove && !seats[state.turn.slot()].is_interactive() {
            return Err(GameError::InvalidConfig("restored turn belongs to the opponent"));
        }
        Ok(Self {
            config,
            board,
            turn: state.turn,
            phase,
            mode: state.mode,
            lives: state.lives,
            seats,
            observer,
        })
    }

    /// Snapshot of the current match.
    pub fn state(&self) -> MatchState {
        MatchState {
            board: BoardState::from(&self.board),
            turn: self.turn,
            mode: self.mode,
            lives: self.lives,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn lives(&self) -> &LifeTracker {
        &self.lives
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Put `player` in the seat for `side`. The seat holds until the next
    /// mode change.
    pub fn set_seat(&mut self, side: Side, player: Box<dyn Player>) {
        self.seats[side.slot()] = player;
    }

    /// Whether the seat for `side` waits for user input.
    pub fn is_interactive(&self, side: Side) -> bool {
        self.seats[side.slot()].is_interactive()
    }

    /// Apply a human move at `index`, then let non-interactive seats reply
    /// until a human is to move again or the match ends.
    ///
    /// A rejected move leaves the match untouched.
    pub fn on_cell_selected(
        &mut self,
        index: usize,
        rng: &mut SmallRng,
    ) -> Result<MoveOutcome, GameError> {
        if let Err(e) = self.check_human_move(index) {
            log::debug!("rejected move at {}: {}", index, e);
            return Err(e);
        }
        let outcome = self.apply(index)?;
        if outcome != MoveOutcome::Continue {
            return Ok(outcome);
        }
        self.run_seats(rng)
    }

    /// Start a new match. Lives are restored only once a side has run out.
    pub fn reset(&mut self) {
        if self.lives.is_depleted() {
            self.lives.reset();
            for side in Side::ALL {
                self.observer.life_changed(side, self.lives.lives_of(side));
            }
            log::info!("lives restored to {}", self.lives.starting());
        }
        self.start_match();
        log::info!("match reset, {} to move", self.turn);
    }

    /// Switch mode and start a fresh match. Lives are left as they are.
    pub fn set_mode(&mut self, mode: Mode) {
        if mode == self.mode {
            return;
        }
        self.mode = mode;
        self.seats = seats_for(mode, self.config.starting_turn);
        log::info!("mode changed to {:?}", mode);
        self.start_match();
    }

    /// Flip between the two modes and return the new one.
    pub fn on_mode_toggled(&mut self) -> Mode {
        let next = self.mode.toggled();
        self.set_mode(next);
        next
    }

    /// Cosmetic pause to show after an opponent reply. The core never sleeps;
    /// front-ends decide whether to honour it.
    pub fn opponent_delay<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        if self.mode == Mode::HumanVsHuman || self.config.opponent_delay_ms == 0 {
            return Duration::ZERO;
        }
        Duration::from_millis(rng.random_range(0..self.config.opponent_delay_ms))
    }

    fn check_human_move(&self, index: usize) -> Result<(), GameError> {
        if self.phase != Phase::AwaitingHumanMove || !self.is_interactive(self.turn) {
            return Err(GameError::NotAwaitingHuman);
        }
        if index >= CELL_COUNT {
            return Err(GameError::InvalidIndex);
        }
        if !self.board.is_empty(index)? {
            return Err(GameError::Occupied);
        }
        Ok(())
    }

    fn run_seats(&mut self, rng: &mut SmallRng) -> Result<MoveOutcome, GameError> {
        // one mark per pass, so a full board ends this within CELL_COUNT passes
        for _ in 0..CELL_COUNT {
            if self.is_interactive(self.turn) {
                break;
            }
            self.phase = Phase::AwaitingOpponentMove;
            log::debug!("phase -> {:?}", self.phase);
            match self.seat_move(rng) {
                Ok(None) => break,
                Ok(Some(MoveOutcome::Continue)) => {}
                Ok(Some(outcome)) => return Ok(outcome),
                Err(e) => {
                    // the human mark stays committed; only reset moves on
                    self.phase = Phase::Idle;
                    log::error!("{} seat failed: {}", self.turn, e);
                    return Err(e);
                }
            }
        }
        self.phase = Phase::AwaitingHumanMove;
        Ok(MoveOutcome::Continue)
    }

    /// Ask the seat on turn for a cell and apply it. `Ok(None)` when the seat
    /// waits for input.
    fn seat_move(&mut self, rng: &mut SmallRng) -> Result<Option<MoveOutcome>, GameError> {
        let seat = &mut self.seats[self.turn.slot()];
        let Some(index) = seat.select_cell(rng, &self.board, self.turn)? else {
            return Ok(None);
        };
        if !self.board.is_empty(index)? {
            return Err(GameError::Occupied);
        }
        self.apply(index).map(Some)
    }

    /// Place the active side's mark at `index` and resolve the result.
    fn apply(&mut self, index: usize) -> Result<MoveOutcome, GameError> {
        let side = self.turn;
        self.board.set(index, side)?;
        log::debug!("{} plays {}", side, index);
        self.observer.board_changed(&self.board);

        if let Some(win) = win::evaluate(&self.board) {
            self.resolve_win(win);
            self.toggle_turn();
            self.phase = Phase::Idle;
            return Ok(MoveOutcome::Won(win));
        }

        self.toggle_turn();
        if self.board.is_full() {
            self.phase = Phase::Idle;
            log::info!("match drawn");
            self.observer.match_drawn();
            return Ok(MoveOutcome::Drawn);
        }
        Ok(MoveOutcome::Continue)
    }

    fn resolve_win(&mut self, win: Win) {
        self.phase = Phase::ResolvingWin;
        log::debug!("phase -> {:?}", self.phase);
        if self.config.fill_board_on_win {
            self.board.fill_all(win.side);
            self.observer.board_changed(&self.board);
        }

        let loser = win.side.opponent();
        let zero_lives = self.lives.report_loss(loser);
        self.observer.life_changed(loser, self.lives.lives_of(loser));
        log::info!(
            "{} wins on {:?}, {} has {} lives left",
            win.side,
            win.line,
            loser,
            self.lives.lives_of(loser)
        );
        self.observer.match_finished(win.side);
        if zero_lives {
            log::warn!("{} is out of lives", loser);
            self.observer.game_over(loser);
        }
    }

    fn toggle_turn(&mut self) {
        self.turn = self.turn.opponent();
        self.observer.turn_changed(self.turn);
    }

    fn start_match(&mut self) {
        self.board.clear();
        self.turn = self.config.starting_turn;
        self.phase = Phase::AwaitingHumanMove;
        self.observer.board_changed(&self.board);
        self.observer.turn_changed(self.turn);
    }
}

fn check_lives(config: &GameConfig, lives: &LifeTracker) -> Result<(), GameError> {
    if lives.starting() != config.starting_lives {
        return Err(GameError::InvalidConfig("lives must start at config.starting_lives"));
    }
    if Side::ALL.iter().any(|&side| lives.lives_of(side) > lives.starting()) {
        return Err(GameError::InvalidConfig("remaining lives exceed the starting value"));
    }
    Ok(())
}

/// The human always holds `human`; the other seat depends on `mode`.
fn seats_for(mode: Mode, human: Side) -> [Box<dyn Player>; 2] {
    let mut seats: [Box<dyn Player>; 2] =
        [Box::new(HumanPlayer::new()), Box::new(HumanPlayer::new())];
    if mode == Mode::HumanVsOpponent {
        seats[human.opponent().slot()] = Box::new(AiPlayer::new());
    }
    seats
}
