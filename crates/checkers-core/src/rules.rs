//! The rules engine for checkers.
//!
//! `Rules` wraps a [`Board`] and is the only component that decides which
//! moves are legal. It tracks the side to move and a single explicit
//! [`Phase`] that captures the interacting turn-level rules:
//!
//! - mandatory capture: when any piece of the side to move can jump, no piece
//!   of that side may make a simple move;
//! - chain continuation: after a jump that leaves the same piece with further
//!   jumps, that piece must keep jumping before the turn passes;
//! - termination: the side to move loses when it has no legal move.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::constants::MAX_DESTINATIONS;
use crate::direction::Direction;
use crate::error::{Result, RulesError};
use crate::piece::Piece;
use crate::side::Side;
use crate::square::Square;

/// Set of destination squares reachable by one piece.
pub type Destinations = ArrayVec<Square, MAX_DESTINATIONS>;

/// Turn-level state of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// The side to move has no jump anywhere; simple moves are allowed.
    Idle,
    /// At least one piece of the side to move can jump, so only jumps are
    /// legal. Any piece that has a jump may be selected.
    AwaitingSelection,
    /// The piece on this square has just jumped and must jump again.
    ChainJump(Square),
    /// The side to move has no legal move. Holds the winner.
    Terminal(Side),
}

/// Whether the moving side has to continue after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    /// The piece jumped and can jump again; the same side moves from the
    /// landing square.
    ChainContinues,
    /// The turn has passed to the other side.
    TurnComplete,
}

/// Description of one applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    /// Side that made the move.
    pub side: Side,
    /// Square of the captured piece, for a jump.
    pub captured: Option<Square>,
    /// Whether the move crowned the piece.
    pub promoted: bool,
    pub outcome: MoveOutcome,
}

impl MoveRecord {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// The checkers rules engine.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rules {
    board: Board,
    turn: Side,
    phase: Phase,
}

impl Default for Rules {
    fn default() -> Self {
        Self::new()
    }
}

impl Rules {
    /// Creates an engine in the starting position with Dark to move.
    pub fn new() -> Rules {
        Self::from_board(Board::new(), Side::Dark)
    }

    /// Creates an engine from an arbitrary position.
    ///
    /// The capture obligation and the terminal check are evaluated for
    /// `turn` immediately, exactly as after a completed move.
    pub fn from_board(board: Board, turn: Side) -> Rules {
        let mut rules = Rules {
            board,
            turn,
            phase: Phase::Idle,
        };
        rules.phase = rules.turn_start_phase();
        rules
    }

    /// Returns a read-only view of the board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    #[inline]
    pub fn current_turn(&self) -> Side {
        self.turn
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Gets the occupant of a square.
    ///
    /// # Errors
    ///
    /// Returns `RulesError::OutOfBounds` if the square is off the board.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Result<Option<Piece>> {
        self.board.get(sq)
    }

    /// Checks whether the side to move is obliged to capture.
    #[inline]
    pub fn must_capture(&self) -> bool {
        matches!(self.phase, Phase::AwaitingSelection | Phase::ChainJump(_))
    }

    /// Checks whether a piece is in the middle of a jump chain.
    #[inline]
    pub fn in_chain(&self) -> bool {
        matches!(self.phase, Phase::ChainJump(_))
    }

    /// Returns the square of the piece that must continue jumping, if any.
    #[inline]
    pub fn selected(&self) -> Option<Square> {
        match self.phase {
            Phase::ChainJump(sq) => Some(sq),
            _ => None,
        }
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::Terminal(_))
    }

    /// Returns the winner once the game is over.
    #[inline]
    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            Phase::Terminal(winner) => Some(winner),
            _ => None,
        }
    }

    /// Returns the non-capturing destinations of the piece on `sq`.
    ///
    /// The set is empty while a capture is mandatory for the side to move,
    /// including during a jump chain.
    ///
    /// # Errors
    ///
    /// * `OutOfBounds` if `sq` is off the board
    /// * `EmptySquare` if `sq` holds no piece
    /// * `WrongTurn` if the piece does not belong to the side to move
    pub fn legal_simple_moves(&self, sq: Square) -> Result<Destinations> {
        let piece = self.piece_to_move(sq)?;
        match self.phase {
            Phase::Idle => Ok(self.steps_from(sq, piece)),
            _ => Ok(Destinations::new()),
        }
    }

    /// Returns the jump destinations of the piece on `sq`.
    ///
    /// Jumps are reported whether or not a capture is currently mandatory.
    /// The set is empty for a piece of the side not to move and while another
    /// piece is mid-chain.
    ///
    /// # Errors
    ///
    /// * `OutOfBounds` if `sq` is off the board
    /// * `EmptySquare` if `sq` holds no piece
    pub fn legal_jumps(&self, sq: Square) -> Result<Destinations> {
        let piece = self.occupant(sq)?;
        if piece.side() != self.turn {
            return Ok(Destinations::new());
        }
        match self.phase {
            Phase::ChainJump(selected) if selected != sq => Ok(Destinations::new()),
            _ => Ok(self.jumps_from(sq, piece)),
        }
    }

    /// Returns every destination the piece on `sq` may move to.
    ///
    /// Mandatory capture is side-wide: when any piece of the side to move can
    /// jump, only jumps are returned, so a piece without a jump of its own
    /// gets an empty set.
    ///
    /// # Errors
    ///
    /// Same as [`Rules::legal_simple_moves`], except that while a capture is
    /// mandatory the result is [`Rules::legal_jumps`], which is empty rather
    /// than `WrongTurn` for a piece of the side not to move.
    pub fn legal_moves(&self, sq: Square) -> Result<Destinations> {
        if self.must_capture() {
            return self.legal_jumps(sq);
        }

        let mut moves = self.legal_simple_moves(sq)?;
        moves.extend(self.legal_jumps(sq)?);
        Ok(moves)
    }

    /// Returns the squares of all pieces of the side to move that have at
    /// least one legal move.
    pub fn movable_pieces(&self) -> Vec<Square> {
        if let Phase::ChainJump(sq) = self.phase {
            return vec![sq];
        }

        self.board
            .pieces(self.turn)
            .map(|(sq, _)| sq)
            .filter(|&sq| self.legal_moves(sq).is_ok_and(|moves| !moves.is_empty()))
            .collect()
    }

    /// Applies a move for the side to move.
    ///
    /// The piece is moved, a jumped piece is removed, a man reaching its
    /// promotion rank is crowned, and then either the chain stays open (the
    /// move was a jump and the piece can jump again from `to`) or the turn
    /// passes and the capture obligation and terminal check are recomputed
    /// for the new side to move. Promotion happens before the chain check, so
    /// a freshly crowned king continues with king jumps.
    ///
    /// # Errors
    ///
    /// * `OutOfBounds` if either square is off the board
    /// * `EmptySquare` if `from` holds no piece
    /// * `WrongTurn` if the piece does not belong to the side to move
    /// * `IllegalMove` if `to` is not in [`Rules::legal_moves`] for `from`
    ///
    /// On error the engine is left unchanged.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<MoveRecord> {
        self.board.get(to)?;
        let mut piece = self.piece_to_move(from)?;
        if !self.legal_moves(from)?.contains(&to) {
            return Err(RulesError::IllegalMove { from, to });
        }

        self.board.set(from, None)?;

        let captured = if (to.rank() - from.rank()).abs() == 2 {
            let mid = from.midpoint(to);
            self.board.set(mid, None)?;
            Some(mid)
        } else {
            None
        };

        let promoted = !piece.is_king() && to.rank() == piece.side().promotion_rank();
        if promoted {
            piece.promote();
        }
        self.board.set(to, Some(piece))?;

        let outcome = if captured.is_some() && !self.jumps_from(to, piece).is_empty() {
            self.phase = Phase::ChainJump(to);
            MoveOutcome::ChainContinues
        } else {
            self.turn = self.turn.opposite();
            self.phase = self.turn_start_phase();
            MoveOutcome::TurnComplete
        };

        Ok(MoveRecord {
            from,
            to,
            side: piece.side(),
            captured,
            promoted,
            outcome,
        })
    }

    /// Looks up the piece on `sq`.
    fn occupant(&self, sq: Square) -> Result<Piece> {
        self.board.get(sq)?.ok_or(RulesError::EmptySquare(sq))
    }

    /// Looks up the piece on `sq` and checks that it belongs to the side to move.
    fn piece_to_move(&self, sq: Square) -> Result<Piece> {
        let piece = self.occupant(sq)?;
        if piece.side() != self.turn {
            return Err(RulesError::WrongTurn {
                square: sq,
                side: piece.side(),
            });
        }
        Ok(piece)
    }

    /// Empty diagonal neighbours in the piece's permitted directions.
    fn steps_from(&self, sq: Square, piece: Piece) -> Destinations {
        Direction::unit_steps(piece)
            .filter_map(|(file_delta, rank_delta)| sq.offset(file_delta, rank_delta))
            .filter(|&dest| self.board.is_empty_square(dest))
            .collect()
    }

    /// Empty landing squares two diagonals away, across an enemy piece, in the
    /// piece's permitted directions.
    fn jumps_from(&self, sq: Square, piece: Piece) -> Destinations {
        Direction::unit_steps(piece)
            .filter_map(|(file_delta, rank_delta)| {
                let over = sq.offset(file_delta, rank_delta)?;
                let landing = sq.offset(2 * file_delta, 2 * rank_delta)?;
                let victim = self.board.get(over).ok()??;
                (victim.side() != piece.side() && self.board.is_empty_square(landing))
                    .then_some(landing)
            })
            .collect()
    }

    /// Computes the phase for the side to move at the start of its turn.
    ///
    /// Jumps are searched first; the side is only terminal when no piece has
    /// a jump or a step.
    fn turn_start_phase(&self) -> Phase {
        let mut has_step = false;
        for (sq, piece) in self.board.pieces(self.turn) {
            if !self.jumps_from(sq, piece).is_empty() {
                return Phase::AwaitingSelection;
            }
            has_step = has_step || !self.steps_from(sq, piece).is_empty();
        }

        if has_step {
            Phase::Idle
        } else {
            Phase::Terminal(self.turn.opposite())
        }
    }
}
