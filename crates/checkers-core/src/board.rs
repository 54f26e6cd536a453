//! Checkers board representation.

use std::fmt;

use crate::constants::{BOARD_SIZE, BOARD_SQUARES, STARTING_ROWS};
use crate::error::{Result, RulesError};
use crate::piece::Piece;
use crate::side::Side;
use crate::square::Square;

/// Character used for an empty square in the text form of a board.
const EMPTY_CHAR: char = '-';

/// An `N x N` grid where every cell holds at most one piece.
///
/// The board only stores pieces; it knows nothing about legality. All
/// mutation during a game goes through the rules engine.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Cells indexed as `cells[rank][file]`.
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    /// Creates a board with the standard starting position.
    ///
    /// Light fills the first three ranks and Dark the last three, on the
    /// squares where `(rank % 2 == 0) == (file % 2 == 1)`.
    fn default() -> Self {
        let mut board = Board::empty();
        for sq in Square::iter().filter(|sq| is_playable(*sq)) {
            let rank = sq.rank() as usize;
            let occupant = if rank < STARTING_ROWS {
                Some(Piece::man(Side::Light))
            } else if rank >= BOARD_SIZE - STARTING_ROWS {
                Some(Piece::man(Side::Dark))
            } else {
                None
            };
            board.cells[rank][sq.file() as usize] = occupant;
        }
        board
    }
}

/// Checks whether pieces can stand on the square in a regular game.
#[inline]
fn is_playable(sq: Square) -> bool {
    (sq.rank() % 2 == 0) == (sq.file() % 2 == 1)
}

/// Error type for parsing a board from its text form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardParseError {
    /// The string does not contain exactly one character per square
    InvalidLength(usize),
    /// The string contains a character that is neither a piece nor empty
    InvalidChar(char),
}

impl fmt::Display for BoardParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardParseError::InvalidLength(len) => {
                write!(f, "Invalid board length {len}: expected {BOARD_SQUARES}")
            }
            BoardParseError::InvalidChar(c) => write!(f, "Invalid board character '{c}'"),
        }
    }
}

impl std::error::Error for BoardParseError {}

impl Board {
    /// Creates a new `Board` with the standard starting position.
    pub fn new() -> Board {
        Default::default()
    }

    /// Creates a board with no pieces on it.
    pub fn empty() -> Board {
        Board {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Creates a `Board` from a string representation.
    ///
    /// The string holds one character per square, rank 1 first and file a
    /// first within a rank (the order of [`Square::iter`]). Whitespace is
    /// ignored. Characters are interpreted as:
    /// - `d` / `D` for a dark man / king
    /// - `l` / `L` for a light man / king
    /// - `-` for an empty square
    ///
    /// # Errors
    ///
    /// Returns `BoardParseError` if the string has the wrong number of
    /// squares or an unknown character.
    pub fn from_string(board_string: &str) -> std::result::Result<Board, BoardParseError> {
        let chars: Vec<char> = board_string
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        if chars.len() != BOARD_SQUARES {
            return Err(BoardParseError::InvalidLength(chars.len()));
        }

        let mut board = Board::empty();
        for (sq, c) in Square::iter().zip(chars) {
            let occupant = match c {
                EMPTY_CHAR => None,
                _ => Some(Piece::from_char(c).ok_or(BoardParseError::InvalidChar(c))?),
            };
            board.cells[sq.rank() as usize][sq.file() as usize] = occupant;
        }
        Ok(board)
    }

    /// Returns the board dimension.
    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Gets the occupant of a square.
    ///
    /// # Errors
    ///
    /// Returns `RulesError::OutOfBounds` if the square is off the board.
    #[inline]
    pub fn get(&self, sq: Square) -> Result<Option<Piece>> {
        if !sq.is_on_board() {
            return Err(RulesError::OutOfBounds(sq));
        }
        Ok(self.cells[sq.rank() as usize][sq.file() as usize])
    }

    /// Overwrites the occupant of a square.
    ///
    /// # Errors
    ///
    /// Returns `RulesError::OutOfBounds` if the square is off the board.
    #[inline]
    pub fn set(&mut self, sq: Square, occupant: Option<Piece>) -> Result<()> {
        if !sq.is_on_board() {
            return Err(RulesError::OutOfBounds(sq));
        }
        self.cells[sq.rank() as usize][sq.file() as usize] = occupant;
        Ok(())
    }

    /// Checks whether an on-board square is empty.
    ///
    /// Off-board squares are reported as not empty.
    #[inline]
    pub fn is_empty_square(&self, sq: Square) -> bool {
        matches!(self.get(sq), Ok(None))
    }

    /// Iterates over the pieces of one side together with their squares.
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(move |sq| {
            self.cells[sq.rank() as usize][sq.file() as usize]
                .filter(|piece| piece.side() == side)
                .map(|piece| (sq, piece))
        })
    }

    /// Returns the number of pieces a side has on the board.
    pub fn count(&self, side: Side) -> u32 {
        self.pieces(side).count() as u32
    }

    /// Returns the number of kings a side has on the board.
    pub fn king_count(&self, side: Side) -> u32 {
        self.pieces(side).filter(|(_, piece)| piece.is_king()).count() as u32
    }

    /// Calculates a hash of the current board position.
    ///
    /// # Returns
    /// A 64-bit hash value representing the current board position.
    #[inline]
    pub fn hash(&self) -> u64 {
        use rapidhash::v3;
        let mut words = [0u64; 3];
        for (i, sq) in Square::iter().enumerate() {
            if let Some(piece) = self.cells[sq.rank() as usize][sq.file() as usize] {
                let plane = match piece.side() {
                    Side::Dark => 0,
                    Side::Light => 1,
                };
                words[plane] |= 1u64 << i;
                if piece.is_king() {
                    words[2] |= 1u64 << i;
                }
            }
        }
        let mut bytes = [0u8; 24];
        for (chunk, word) in bytes.chunks_exact_mut(8).zip(words) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        v3::rapidhash_v3_nano_inline::<true, false>(&bytes, &v3::DEFAULT_RAPID_SECRETS)
    }

    /// Converts the board to its text form, one rank per line.
    pub fn to_string_as_board(&self) -> String {
        let mut s = String::with_capacity(BOARD_SQUARES + BOARD_SIZE);
        for (i, sq) in Square::iter().enumerate() {
            if i > 0 && i % BOARD_SIZE == 0 {
                s.push('\n');
            }
            let c = self.cells[sq.rank() as usize][sq.file() as usize]
                .map_or(EMPTY_CHAR, Piece::to_char);
            s.push(c);
        }
        s
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_as_board())
    }
}
