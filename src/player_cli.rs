#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use crate::{
    board::Board,
    common::Side,
    config::{BOARD_SIDE, CELL_COUNT},
    events::MatchObserver,
};

/// A line of terminal input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliCommand {
    Cell(usize),
    Reset,
    ToggleMode,
    Help,
    Quit,
}

/// Column-letter, row-number label for a cell, e.g. `B2` for the centre.
pub fn cell_label(index: usize) -> String {
    let col = (b'A' + (index % BOARD_SIDE) as u8) as char;
    std::format!("{}{}", col, index / BOARD_SIDE + 1)
}

/// Parse `1`-`9` (keypad order, row-major) or `A1`-`C3`.
pub fn parse_cell(input: &str) -> Option<usize> {
    let input = input.trim();
    if let Ok(n) = input.parse::<usize>() {
        return (1..=CELL_COUNT).contains(&n).then(|| n - 1);
    }
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row: usize = chars.as_str().parse().ok()?;
    if col >= BOARD_SIDE || row == 0 || row > BOARD_SIDE {
        return None;
    }
    Some((row - 1) * BOARD_SIDE + col)
}

pub fn parse_command(input: &str) -> Option<CliCommand> {
    match input.trim().to_ascii_lowercase().as_str() {
        "r" | "reset" => Some(CliCommand::Reset),
        "m" | "mode" => Some(CliCommand::ToggleMode),
        "h" | "help" | "?" => Some(CliCommand::Help),
        "q" | "quit" | "exit" => Some(CliCommand::Quit),
        other => parse_cell(other).map(CliCommand::Cell),
    }
}

/// Render the board with column letters and row numbers.
pub fn render_board(board: &Board) -> String {
    let cells = board.cells();
    let mut out = String::from("   ");
    for c in 0..BOARD_SIDE {
        out.push(' ');
        out.push((b'A' + c as u8) as char);
    }
    out.push('\n');
    for r in 0..BOARD_SIDE {
        out.push_str(&std::format!("{:2} ", r + 1));
        for c in 0..BOARD_SIDE {
            out.push(' ');
            out.push(cells[r * BOARD_SIDE + c].symbol());
        }
        out.push('\n');
    }
    out
}

pub fn print_help() {
    std::println!("Commands:");
    std::println!("  1-9 or A1-C3   place your mark");
    std::println!("  r, reset       start a new match");
    std::println!("  m, mode        switch between AI and two-player mode");
    std::println!("  h, help        show this help");
    std::println!("  q, quit        leave the game");
}

/// Prompt and read one line from stdin. `Ok(None)` on end of input.
pub fn read_line(prompt: &str) -> io::Result<Option<String>> {
    std::print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Prints match notifications to stdout. Board redraws are left to the
/// caller so an opponent reply can be shown after its pause.
#[derive(Debug, Default)]
pub struct TerminalObserver {
    board_dirty: bool,
}

impl TerminalObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the board changed since the last call.
    pub fn take_board_dirty(&mut self) -> bool {
        std::mem::take(&mut self.board_dirty)
    }
}

impl MatchObserver for TerminalObserver {
    fn board_changed(&mut self, _board: &Board) {
        self.board_dirty = true;
    }

    fn life_changed(&mut self, side: Side, remaining: u32) {
        std::println!("{} lives = {}", side, remaining);
    }

    fn match_finished(&mut self, winner: Side) {
        std::println!("{} wins! Type r to play again.", winner);
    }

    fn match_drawn(&mut self) {
        std::println!("Draw. Type r to play again.");
    }

    fn game_over(&mut self, loser: Side) {
        std::println!("\n*** HA, HA you died {} ***\n", loser);
        std::println!("Reset to restore everyone's lives.");
    }
}
