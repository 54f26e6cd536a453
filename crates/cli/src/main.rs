mod game;
mod perft;
mod ui;

use checkers_core::board::{Board, BoardParseError};
use checkers_core::rules::Rules;
use checkers_core::side::Side;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TurnArg {
    Dark,
    Light,
}

impl From<TurnArg> for Side {
    fn from(turn: TurnArg) -> Side {
        match turn {
            TurnArg::Dark => Side::Dark,
            TurnArg::Light => Side::Light,
        }
    }
}

#[derive(Parser, Debug, Clone)]
struct PositionParams {
    /// Starting position: 64 characters from a1 to h8, rank by rank
    /// (d/D dark man/king, l/L light man/king, - empty)
    #[arg(long, value_name = "BOARD")]
    board: Option<String>,

    /// Side to move in the starting position
    #[arg(long, value_enum, default_value = "dark")]
    turn: TurnArg,
}

impl PositionParams {
    fn to_rules(&self) -> Result<Rules, BoardParseError> {
        let board = match &self.board {
            Some(text) => Board::from_string(text)?,
            None => Board::new(),
        };
        Ok(Rules::from_board(board, self.turn.into()))
    }
}

#[derive(Parser, Debug)]
#[command(name = "checkers", version, about = "Checkers rules engine")]
struct Cli {
    #[command(subcommand)]
    command: Option<SubCommands>,

    #[command(flatten)]
    position: PositionParams,
}

#[derive(Debug, Subcommand)]
enum SubCommands {
    /// Count the leaves of the game tree up to a depth in complete turns
    Perft {
        #[arg()]
        depth: u32,

        #[command(flatten)]
        position: PositionParams,
    },
}

fn main() {
    let args = Cli::parse();
    match args.command {
        Some(SubCommands::Perft { depth, position }) => {
            let rules = load_position(&position);
            perft::run(&rules, depth);
        }
        None => {
            let rules = load_position(&args.position);
            ui::ui_loop(rules).unwrap_or_else(|err| {
                eprintln!("Failed to initialize UI: {err}");
            });
        }
    }
}

fn load_position(position: &PositionParams) -> Rules {
    position.to_rules().unwrap_or_else(|err| {
        eprintln!("Invalid --board: {err}");
        std::process::exit(1);
    })
}
