use std::fmt;
use std::str::FromStr;

use crate::constants::BOARD_SIZE;

/// A board coordinate as a `(file, rank)` pair.
///
/// Files are labeled a-h and ranks 1-8 in text form; internally both are
/// zero-based, so `a1` is `(0, 0)`:
///
/// ```text
///     a  b  c  d  e  f  g  h
/// 1  00 10 20 30 40 50 60 70
/// 2  01 11 21 31 41 51 61 71
/// ...
/// 8  07 17 27 37 47 57 67 77
/// ```
///
/// A `Square` is a plain value and may lie outside the board; board
/// accessors reject such squares with `RulesError::OutOfBounds`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    file: i8,
    rank: i8,
}

impl Square {
    /// Creates a square from file and rank coordinates without bounds checking.
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Square {
        Square { file, rank }
    }

    #[inline]
    pub fn file(self) -> i8 {
        self.file
    }

    #[inline]
    pub fn rank(self) -> i8 {
        self.rank
    }

    /// Checks whether both coordinates lie in `[0, BOARD_SIZE)`.
    #[inline]
    pub fn is_on_board(self) -> bool {
        let n = BOARD_SIZE as i8;
        (0..n).contains(&self.file) && (0..n).contains(&self.rank)
    }

    /// Shifts the square by the given file and rank deltas.
    ///
    /// # Returns
    ///
    /// `Some(Square)` if the shifted square is on the board, `None` otherwise.
    #[inline]
    pub fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Square> {
        let sq = Square::new(self.file + file_delta, self.rank + rank_delta);
        sq.is_on_board().then_some(sq)
    }

    /// Returns the square halfway between `self` and `other`.
    #[inline]
    pub fn midpoint(self, other: Square) -> Square {
        Square::new((self.file + other.file) / 2, (self.rank + other.rank) / 2)
    }

    /// Returns an iterator over all board squares, rank by rank from `a1`.
    pub fn iter() -> impl Iterator<Item = Square> {
        let n = BOARD_SIZE as i8;
        (0..n).flat_map(move |rank| (0..n).map(move |file| Square::new(file, rank)))
    }
}

/// Error type for square-related operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Invalid square string format (must be 2 characters)
    InvalidFormat,
    /// Invalid file character (must be a-h or A-H)
    InvalidFile(char),
    /// Invalid rank character (must be 1-8)
    InvalidRank(char),
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidFormat => write!(
                f,
                "Invalid square format: must be 2 characters (e.g., 'c3')"
            ),
            SquareError::InvalidFile(c) => write!(f, "Invalid file '{c}': must be a-h or A-H"),
            SquareError::InvalidRank(c) => write!(f, "Invalid rank '{c}': must be 1-8"),
        }
    }
}

impl std::error::Error for SquareError {}

impl FromStr for Square {
    type Err = SquareError;

    /// Parses a square in algebraic notation (e.g., "c3").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        let &[file_char, rank_char] = chars.as_slice() else {
            return Err(SquareError::InvalidFormat);
        };

        let file = file_char.to_ascii_lowercase();
        if !('a'..='h').contains(&file) {
            return Err(SquareError::InvalidFile(file_char));
        }
        if !('1'..='8').contains(&rank_char) {
            return Err(SquareError::InvalidRank(rank_char));
        }

        Ok(Square::new(
            (file as u8 - b'a') as i8,
            (rank_char as u8 - b'1') as i8,
        ))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_on_board() {
            return write!(f, "({}, {})", self.file, self.rank);
        }

        let file = self.file as u8 + b'a';
        let rank = self.rank as u8 + b'1';
        write!(f, "{}{}", file as char, rank as char)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_on_board() {
        assert!(Square::new(0, 0).is_on_board());
        assert!(Square::new(7, 7).is_on_board());
        assert!(!Square::new(-1, 0).is_on_board());
        assert!(!Square::new(0, 8).is_on_board());
    }

    #[test]
    fn test_offset() {
        let sq = Square::new(2, 5);
        assert_eq!(sq.offset(1, -1), Some(Square::new(3, 4)));
        assert_eq!(sq.offset(-2, 2), Some(Square::new(0, 7)));
        assert_eq!(sq.offset(-3, 0), None);
        assert_eq!(Square::new(7, 7).offset(1, 1), None);
    }

    #[test]
    fn test_midpoint() {
        assert_eq!(Square::new(2, 5).midpoint(Square::new(4, 3)), Square::new(3, 4));
        assert_eq!(Square::new(4, 3).midpoint(Square::new(2, 5)), Square::new(3, 4));
    }

    #[test]
    fn test_iter() {
        let squares: Vec<Square> = Square::iter().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], Square::new(0, 0));
        assert_eq!(squares[1], Square::new(1, 0));
        assert_eq!(squares[63], Square::new(7, 7));
    }

    #[test]
    fn test_square_from_str() {
        assert_eq!("a1".parse::<Square>().unwrap(), Square::new(0, 0));
        assert_eq!("h8".parse::<Square>().unwrap(), Square::new(7, 7));
        assert_eq!("C6".parse::<Square>().unwrap(), Square::new(2, 5));
        assert_eq!(" d4 ".parse::<Square>().unwrap(), Square::new(3, 3));

        assert_eq!("".parse::<Square>(), Err(SquareError::InvalidFormat));
        assert_eq!("abc".parse::<Square>(), Err(SquareError::InvalidFormat));
        assert_eq!("z1".parse::<Square>(), Err(SquareError::InvalidFile('z')));
        assert_eq!("a0".parse::<Square>(), Err(SquareError::InvalidRank('0')));
        assert_eq!("a9".parse::<Square>(), Err(SquareError::InvalidRank('9')));
    }

    #[test]
    fn test_display() {
        assert_eq!(Square::new(0, 0).to_string(), "a1");
        assert_eq!(Square::new(2, 5).to_string(), "c6");
        assert_eq!(Square::new(7, 7).to_string(), "h8");
        assert_eq!(Square::new(8, -1).to_string(), "(8, -1)");
    }

    #[test]
    fn test_display_parse_roundtrip() {
        for sq in Square::iter() {
            assert_eq!(sq.to_string().parse::<Square>().unwrap(), sq);
        }
    }

    #[test]
    fn test_square_error_display() {
        assert_eq!(
            SquareError::InvalidFile('z').to_string(),
            "Invalid file 'z': must be a-h or A-H"
        );
        assert_eq!(
            SquareError::InvalidRank('9').to_string(),
            "Invalid rank '9': must be 1-8"
        );
    }
}
