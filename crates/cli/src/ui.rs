//! Interactive command loop for two human players.

use checkers_core::{
    game_state::GameStatus,
    rules::{MoveOutcome, Rules},
    square::{Square, SquareError},
};
use colored::Colorize;
use rustyline::{DefaultEditor, error::ReadlineError};

use crate::game::GameState;

const HELP: &str = "\
Commands:
  <from> <to>      move or jump, e.g. `c6 d5` or `c6-d5`
  <a>-<b>-<c>...   several hops of one jump chain, e.g. `a8-c6-e4`
  moves <sq>       list destinations of the piece on <sq>
  movable          list pieces that can move
  turns            list complete turns
  undo, u          take back the last turn
  new, n           restart from the starting position
  board, b         print the board
  quit, q          leave";

/// Main REPL loop.
///
/// `initial` is the position the game starts from and returns to on `new`.
pub fn ui_loop(initial: Rules) -> Result<(), ReadlineError> {
    let mut rl = DefaultEditor::new()?;
    let mut game = GameState::from_rules(initial.clone());

    game.print();
    println!();

    loop {
        let readline = rl.readline("> ");
        match readline {
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                let mut parts = line.split_whitespace();
                let Some(cmd) = parts.next() else {
                    continue;
                };
                println!();

                match cmd {
                    "new" | "n" => {
                        game = GameState::from_rules(initial.clone());
                        game.print();
                    }
                    "undo" | "u" => {
                        if game.undo() {
                            game.print();
                        } else {
                            println!("Cannot undo.");
                        }
                    }
                    "board" | "b" => game.print(),
                    "moves" => match parts.next().map(str::parse::<Square>) {
                        Some(Ok(sq)) => match game.rules().legal_moves(sq) {
                            Ok(moves) => println!("{}", join_squares(&moves)),
                            Err(err) => print_error(&err.to_string()),
                        },
                        Some(Err(err)) => print_error(&err.to_string()),
                        None => print_error("Usage: moves <square>"),
                    },
                    "movable" => println!("{}", join_squares(&game.rules().movable_pieces())),
                    "turns" => {
                        for turn in game.turns().iter() {
                            println!("{turn}");
                        }
                    }
                    "help" | "h" => println!("{HELP}"),
                    "quit" | "q" => break,
                    _ => {
                        let line = line.trim();
                        match parse_squares(line) {
                            Ok(squares) if squares.len() >= 2 => play(&mut game, &squares),
                            Ok(_) => print_error(&format!("Unknown command: {line}")),
                            Err(_) if !looks_like_move(cmd) => {
                                print_error(&format!("Unknown command: {line}"))
                            }
                            Err(err) => print_error(&err.to_string()),
                        }
                    }
                }
                println!();
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                println!("Error: {err:?}");
                break;
            }
        }
    }
    Ok(())
}

/// Applies the hops typed by the user and reports the result.
fn play(game: &mut GameState, squares: &[Square]) {
    if game.status() != GameStatus::InProgress {
        print_error("The game is over. Use `new` or `undo`.");
        return;
    }

    match game.make_moves(squares) {
        Ok(outcome) => {
            game.print();
            if outcome == MoveOutcome::ChainContinues {
                if let Some(sq) = game.rules().selected() {
                    println!("{}", format!("Jump again from {sq}").bright_cyan());
                }
            }
        }
        Err(err) => print_error(&err.to_string()),
    }
}

/// Splits a move such as `c6 d5`, `c6-d5` or `a8xc6xe4` into squares.
fn parse_squares(text: &str) -> Result<Vec<Square>, SquareError> {
    text.split(|c: char| c.is_whitespace() || c == '-' || c == 'x')
        .filter(|part| !part.is_empty())
        .map(str::parse::<Square>)
        .collect()
}

fn looks_like_move(cmd: &str) -> bool {
    cmd.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
        && cmd.chars().nth(1).is_some_and(|c| c.is_ascii_digit())
}

fn join_squares(squares: &[Square]) -> String {
    if squares.is_empty() {
        return "(none)".to_string();
    }
    squares
        .iter()
        .map(Square::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_error(message: &str) {
    eprintln!("{}", message.bright_red());
}
