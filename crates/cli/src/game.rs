//! Game state for the checkers CLI.
//!
//! A thin wrapper around the core `GameState` that adds colored terminal
//! display.

use checkers_core::{
    constants::BOARD_SIZE,
    error::RulesError,
    game_state::{self, DrawReason, GameStatus},
    move_list::MoveList,
    piece::Piece,
    rules::{MoveOutcome, MoveRecord, Rules},
    side::Side,
    square::Square,
};
use colored::{ColoredString, Colorize};

pub struct GameState {
    core: game_state::GameState,
}

impl GameState {
    /// Creates a game that starts from `rules`.
    pub fn from_rules(rules: Rules) -> Self {
        Self {
            core: game_state::GameState::from_rules(rules),
        }
    }

    pub fn rules(&self) -> &Rules {
        self.core.rules()
    }

    pub fn status(&self) -> GameStatus {
        self.core.status()
    }

    /// Applies a sequence of hops given as squares, all or nothing.
    ///
    /// Unlike a complete turn, the sequence may stop inside a jump chain.
    pub fn make_moves(&mut self, squares: &[Square]) -> Result<MoveOutcome, RulesError> {
        let mut applied = 0;
        let mut outcome = MoveOutcome::TurnComplete;
        for pair in squares.windows(2) {
            match self.core.make_move(pair[0], pair[1]) {
                Ok(o) => {
                    outcome = o;
                    applied += 1;
                }
                Err(err) => {
                    for _ in 0..applied {
                        self.core.undo();
                    }
                    return Err(err);
                }
            }
        }
        Ok(outcome)
    }

    /// Takes back the most recent turn, or the open part of a chain.
    pub fn undo(&mut self) -> bool {
        self.core.undo_turn()
    }

    pub fn last_move(&self) -> Option<MoveRecord> {
        self.core.last_move()
    }

    /// Returns all complete turns for the side to move.
    pub fn turns(&self) -> MoveList {
        MoveList::new(self.core.rules())
    }

    /// Returns a human readable description of a finished game.
    pub fn result_text(&self) -> Option<String> {
        match self.core.status() {
            GameStatus::InProgress => None,
            GameStatus::Won(side) => Some(format!("{side} wins!")),
            GameStatus::Draw(DrawReason::Repetition) => {
                Some("Draw by threefold repetition".to_string())
            }
            GameStatus::Draw(DrawReason::NoCapture) => {
                Some("Draw: too many turns without a capture".to_string())
            }
        }
    }

    /// Prints a colored representation of the board to the terminal.
    ///
    /// Destinations of the piece that must keep jumping are marked with a dot.
    pub fn print(&self) {
        let rules = self.core.rules();
        let board = rules.board();
        let side_to_move = rules.current_turn();
        let last_move = self.core.last_move();
        let targets = rules
            .selected()
            .and_then(|sq| rules.legal_moves(sq).ok())
            .unwrap_or_default();

        println!("      a   b   c   d   e   f   g   h");
        println!("    ┌───┬───┬───┬───┬───┬───┬───┬───┐");

        for rank in 0..BOARD_SIZE as i8 {
            print!("  {} │", rank + 1);

            for file in 0..BOARD_SIZE as i8 {
                let sq = Square::new(file, rank);
                let occupant = board.get(sq).ok().flatten();
                let is_last_move = last_move.is_some_and(|record| record.to == sq);

                let symbol = match occupant {
                    Some(piece) if is_last_move => piece_symbol(piece).on_bright_black(),
                    Some(piece) => piece_symbol(piece),
                    None if targets.contains(&sq) => " · ".bright_cyan(),
                    None => "   ".black(),
                };
                print!("{symbol}│");
            }

            let (dark_count, light_count) = self.core.get_score();
            match rank {
                2 => {
                    let player_info = match side_to_move {
                        Side::Dark => "Dark to move".bright_red(),
                        Side::Light => "Light to move".bright_yellow(),
                    };
                    println!("   {player_info}");
                }
                3 => println!("   Dark:  {}", format!("{dark_count:2}").bright_red()),
                4 => println!("   Light: {}", format!("{light_count:2}").bright_yellow()),
                5 => match rules.selected() {
                    Some(sq) => println!("   {}", format!("Continue jumping from {sq}").bright_cyan()),
                    None if rules.must_capture() => println!("   {}", "Capture is mandatory".bright_cyan()),
                    None => println!(),
                },
                6 => match self.result_text() {
                    Some(text) => println!("   {}", text.bright_green()),
                    None => println!(),
                },
                7 => {
                    if self.core.is_game_over() {
                        println!("   {}", "*** Game Over ***".bright_red());
                    } else {
                        println!();
                    }
                }
                _ => println!(),
            }

            if rank < BOARD_SIZE as i8 - 1 {
                println!("    ├───┼───┼───┼───┼───┼───┼───┼───┤");
            }
        }

        println!("    └───┴───┴───┴───┴───┴───┴───┴───┘");
    }
}

fn piece_symbol(piece: Piece) -> ColoredString {
    let text = format!(" {} ", piece.to_char());
    match piece.side() {
        Side::Dark => text.bright_red(),
        Side::Light => text.bright_yellow(),
    }
}
