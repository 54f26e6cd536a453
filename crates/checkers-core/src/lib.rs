pub mod board;
pub mod constants;
mod direction;
pub mod error;
pub mod game_state;
pub mod move_list;
pub mod perft;
pub mod piece;
pub mod rules;
pub mod side;
pub mod square;
