//! Movement directions relative to the side that owns a piece.

use crate::piece::Piece;
use crate::side::Side;

/// Vertical direction of travel, relative to the owner of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward the opponent's edge.
    Forward,
    /// Toward the owner's own edge. Only kings may travel backward.
    Backward,
}

/// File deltas of the two diagonals in each vertical direction.
pub const FILE_DELTAS: [i8; 2] = [-1, 1];

const MAN_DIRECTIONS: &[Direction] = &[Direction::Forward];
const KING_DIRECTIONS: &[Direction] = &[Direction::Forward, Direction::Backward];

impl Direction {
    /// Maps the direction to a signed rank delta for the given side.
    #[inline]
    pub fn rank_delta(self, side: Side) -> i8 {
        match self {
            Direction::Forward => side.forward(),
            Direction::Backward => -side.forward(),
        }
    }

    /// Returns the directions a piece may travel in.
    #[inline]
    pub fn permitted(piece: Piece) -> &'static [Direction] {
        if piece.is_king() {
            KING_DIRECTIONS
        } else {
            MAN_DIRECTIONS
        }
    }

    /// Iterates over the `(file_delta, rank_delta)` unit steps a piece may take,
    /// in the order forward-left, forward-right, backward-left, backward-right.
    pub fn unit_steps(piece: Piece) -> impl Iterator<Item = (i8, i8)> {
        let side = piece.side();
        Self::permitted(piece).iter().flat_map(move |dir| {
            let rank_delta = dir.rank_delta(side);
            FILE_DELTAS
                .iter()
                .map(move |&file_delta| (file_delta, rank_delta))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_delta() {
        assert_eq!(Direction::Forward.rank_delta(Side::Dark), -1);
        assert_eq!(Direction::Backward.rank_delta(Side::Dark), 1);
        assert_eq!(Direction::Forward.rank_delta(Side::Light), 1);
        assert_eq!(Direction::Backward.rank_delta(Side::Light), -1);
    }

    #[test]
    fn test_man_steps_forward_only() {
        let steps: Vec<_> = Direction::unit_steps(Piece::man(Side::Dark)).collect();
        assert_eq!(steps, vec![(-1, -1), (1, -1)]);

        let steps: Vec<_> = Direction::unit_steps(Piece::man(Side::Light)).collect();
        assert_eq!(steps, vec![(-1, 1), (1, 1)]);
    }

    #[test]
    fn test_king_steps_both_ways() {
        let steps: Vec<_> = Direction::unit_steps(Piece::king(Side::Light)).collect();
        assert_eq!(steps, vec![(-1, 1), (1, 1), (-1, -1), (1, -1)]);
    }
}
