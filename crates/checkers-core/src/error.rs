//! Error types for the rules engine.
//!
//! Every rejected call is an expected outcome: the caller is handed one of
//! these errors and the engine state is left exactly as it was.

use std::error::Error;
use std::fmt;

use crate::side::Side;
use crate::square::Square;

/// Errors reported by board accessors and the rules engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// A coordinate outside the board was supplied
    OutOfBounds(Square),
    /// The source square holds no piece
    EmptySquare(Square),
    /// The piece on the source square does not belong to the side to move
    WrongTurn { square: Square, side: Side },
    /// The destination is not legal for the source under the current rules
    IllegalMove { from: Square, to: Square },
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RulesError::OutOfBounds(sq) => write!(f, "Square {sq} is off the board"),
            RulesError::EmptySquare(sq) => write!(f, "No piece on {sq}"),
            RulesError::WrongTurn { square, side } => {
                write!(f, "Piece on {square} belongs to {side}, who is not to move")
            }
            RulesError::IllegalMove { from, to } => write!(f, "Illegal move: {from}-{to}"),
        }
    }
}

impl Error for RulesError {}

/// Convenience type alias for Results with RulesError.
pub type Result<T> = std::result::Result<T, RulesError>;
