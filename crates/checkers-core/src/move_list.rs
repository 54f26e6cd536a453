//! Turn-level move generation.
//!
//! A single call to [`Rules::apply_move`] covers one hop. A search component
//! instead needs every complete turn: a simple move, or a whole jump chain
//! from the first capture to the point where the turn passes. `MoveList`
//! expands chains by replaying hops on cloned engines, so it shares every
//! rule with the engine, including promotion in the middle of a chain.

use std::fmt;
use std::slice;

use crate::rules::{MoveOutcome, Rules};
use crate::square::Square;

/// One complete turn for the side to move.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Turn {
    /// Square the moving piece starts from.
    pub from: Square,
    /// Landing squares in order. Holds one square for a simple move and one
    /// square per capture for a jump chain.
    pub path: Vec<Square>,
    /// Squares of the captured pieces, in capture order.
    pub captures: Vec<Square>,
}

impl Turn {
    /// Returns the square the moving piece ends on.
    #[inline]
    pub fn to(&self) -> Square {
        self.path.last().copied().unwrap_or(self.from)
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        !self.captures.is_empty()
    }

    /// Iterates over the hops of the turn as `(from, to)` pairs.
    pub fn hops(&self) -> impl Iterator<Item = (Square, Square)> + '_ {
        std::iter::once(self.from)
            .chain(self.path.iter().copied())
            .zip(self.path.iter().copied())
    }
}

impl fmt::Display for Turn {
    /// Formats the turn as `c6-d5` for a simple move and `a8xc6xe4` for a
    /// jump chain.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}", self.from)?;
        for sq in &self.path {
            write!(f, "{sep}{sq}")?;
        }
        Ok(())
    }
}

/// Container for all complete turns available to the side to move.
#[derive(Clone, Debug)]
pub struct MoveList {
    /// Each turn together with the position it leads to.
    entries: Vec<(Turn, Rules)>,
}

impl MoveList {
    /// Generates all complete turns for the side to move.
    ///
    /// When a chain is already open, only continuations of the chained
    /// piece are generated. The list is empty once the game is over.
    pub fn new(rules: &Rules) -> MoveList {
        let mut entries = Vec::new();
        for from in rules.movable_pieces() {
            let start = Turn {
                from,
                path: Vec::new(),
                captures: Vec::new(),
            };
            expand(rules, from, start, &mut entries);
        }
        MoveList { entries }
    }

    /// Returns the number of turns.
    #[inline]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the first turn, if any.
    #[inline]
    pub fn first(&self) -> Option<&Turn> {
        self.entries.first().map(|(turn, _)| turn)
    }

    /// Returns an iterator over the turns.
    pub fn iter(&self) -> impl Iterator<Item = &Turn> {
        self.entries.iter().map(|(turn, _)| turn)
    }

    /// Returns an iterator over each turn and the position after it.
    pub fn successors(&self) -> slice::Iter<'_, (Turn, Rules)> {
        self.entries.iter()
    }
}

/// Extends `partial` with every legal hop from `at`, recursing while the
/// chain stays open.
fn expand(rules: &Rules, at: Square, partial: Turn, out: &mut Vec<(Turn, Rules)>) {
    let Ok(destinations) = rules.legal_moves(at) else {
        return;
    };

    for to in destinations {
        let mut next = rules.clone();
        let Ok(record) = next.apply_move(at, to) else {
            continue;
        };

        let mut turn = partial.clone();
        turn.path.push(to);
        turn.captures.extend(record.captured);

        match record.outcome {
            MoveOutcome::ChainContinues => expand(&next, to, turn, out),
            MoveOutcome::TurnComplete => out.push((turn, next)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::piece::Piece;
    use crate::side::Side;

    fn sq(file: i8, rank: i8) -> Square {
        Square::new(file, rank)
    }

    #[test]
    fn test_move_list_new() {
        let rules = Rules::new();
        let move_list = MoveList::new(&rules);
        assert_eq!(move_list.count(), 7);
        assert!(move_list.iter().all(|turn| !turn.is_capture()));
        assert!(move_list.iter().all(|turn| turn.path.len() == 1));
    }

    #[test]
    fn test_move_list_expands_chains() {
        // The only capture for Dark takes b7 and then d5.
        let board = Board::from_string(
            "\
            -------l\
            --------\
            --------\
            --------\
            ---l----\
            --------\
            -l------\
            d-------",
        )
        .unwrap();
        let rules = Rules::from_board(board, Side::Dark);
        let move_list = MoveList::new(&rules);

        assert_eq!(move_list.count(), 1);
        let turn = move_list.first().unwrap();
        assert_eq!(turn.from, sq(0, 7));
        assert_eq!(turn.path, vec![sq(2, 5), sq(4, 3)]);
        assert_eq!(turn.captures, vec![sq(1, 6), sq(3, 4)]);
        assert_eq!(turn.to(), sq(4, 3));
        assert_eq!(turn.to_string(), "a8xc6xe4");

        let (_, after) = move_list.successors().next().unwrap();
        assert_eq!(after.current_turn(), Side::Light);
        assert_eq!(after.board().count(Side::Light), 1);
    }

    #[test]
    fn test_move_list_branching_chain() {
        // After taking d4 the king can continue toward g3 or g7.
        let mut board = Board::empty();
        board.set(sq(2, 2), Some(Piece::king(Side::Dark))).unwrap();
        board.set(sq(3, 3), Some(Piece::man(Side::Light))).unwrap();
        board.set(sq(5, 5), Some(Piece::man(Side::Light))).unwrap();
        board.set(sq(5, 3), Some(Piece::man(Side::Light))).unwrap();
        let rules = Rules::from_board(board, Side::Dark);

        let move_list = MoveList::new(&rules);
        assert_eq!(move_list.count(), 2);
        let mut ends: Vec<Square> = move_list.iter().map(Turn::to).collect();
        ends.sort_by_key(|s| (s.file(), s.rank()));
        assert_eq!(ends, vec![sq(6, 2), sq(6, 6)]);
        assert!(move_list.iter().all(|turn| turn.captures.len() == 2));
        assert!(move_list.iter().all(|turn| turn.path[0] == sq(4, 4)));
    }

    #[test]
    fn test_move_list_mid_chain() {
        let board = Board::from_string(
            "\
            -------l\
            --------\
            --------\
            --------\
            ---l----\
            --------\
            -l------\
            d-------",
        )
        .unwrap();
        let mut rules = Rules::from_board(board, Side::Dark);
        rules.apply_move(sq(0, 7), sq(2, 5)).unwrap();

        let move_list = MoveList::new(&rules);
        assert_eq!(move_list.count(), 1);
        assert_eq!(move_list.first().unwrap().from, sq(2, 5));
        assert_eq!(move_list.first().unwrap().path, vec![sq(4, 3)]);
    }

    #[test]
    fn test_move_list_no_moves() {
        let mut board = Board::empty();
        board.set(sq(0, 2), Some(Piece::man(Side::Dark))).unwrap();
        board.set(sq(1, 1), Some(Piece::man(Side::Light))).unwrap();
        board.set(sq(2, 0), Some(Piece::man(Side::Light))).unwrap();
        let rules = Rules::from_board(board, Side::Dark);

        let move_list = MoveList::new(&rules);
        assert!(move_list.is_empty());
        assert!(move_list.first().is_none());
    }

    #[test]
    fn test_turn_hops() {
        let turn = Turn {
            from: sq(0, 7),
            path: vec![sq(2, 5), sq(4, 3)],
            captures: vec![sq(1, 6), sq(3, 4)],
        };
        let hops: Vec<_> = turn.hops().collect();
        assert_eq!(hops, vec![(sq(0, 7), sq(2, 5)), (sq(2, 5), sq(4, 3))]);
    }

    #[test]
    fn test_turn_display_simple() {
        let turn = Turn {
            from: sq(2, 5),
            path: vec![sq(3, 4)],
            captures: Vec::new(),
        };
        assert_eq!(turn.to_string(), "c6-d5");
    }
}
