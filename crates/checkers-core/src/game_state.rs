//! Game state management for checkers.
//!
//! `GameState` sits on top of the rules engine and adds what a played game
//! needs beyond the rules of a single position: a hop-by-hop history with
//! undo, whole-turn application, and the draw rules that depend on earlier
//! positions.

use crate::board::Board;
use crate::constants::{NO_CAPTURE_DRAW, REPETITION_DRAW};
use crate::error::{Result, RulesError};
use crate::move_list::Turn;
use crate::rules::{MoveOutcome, MoveRecord, Rules};
use crate::side::Side;
use crate::square::Square;

/// Why a game ended in a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawReason {
    /// The same position with the same side to move occurred too often.
    Repetition,
    /// Too many consecutive turns passed without a capture.
    NoCapture,
}

/// Result of a game at the current point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Side),
    Draw(DrawReason),
}

/// Limits for the draw rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawRules {
    /// Number of occurrences of a turn-start position that draws the game.
    pub repetition: usize,
    /// Number of consecutive completed turns without a capture that draws
    /// the game.
    pub no_capture: usize,
}

impl Default for DrawRules {
    fn default() -> Self {
        DrawRules {
            repetition: REPETITION_DRAW,
            no_capture: NO_CAPTURE_DRAW,
        }
    }
}

/// Represents the state of a checkers game.
#[derive(Clone, Debug)]
pub struct GameState {
    /// The current position.
    rules: Rules,
    /// One entry per hop: (record, position before the hop).
    history: Vec<(MoveRecord, Rules)>,
    draw_rules: DrawRules,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates a new game in the initial position with Dark to move.
    pub fn new() -> Self {
        Self::from_rules(Rules::new())
    }

    /// Creates a game that continues from an existing position.
    pub fn from_rules(rules: Rules) -> Self {
        Self {
            rules,
            history: Vec::new(),
            draw_rules: DrawRules::default(),
        }
    }

    /// Replaces the draw limits.
    pub fn with_draw_rules(mut self, draw_rules: DrawRules) -> Self {
        self.draw_rules = draw_rules;
        self
    }

    /// Returns the current position.
    #[inline]
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    #[inline]
    pub fn board(&self) -> &Board {
        self.rules.board()
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.rules.current_turn()
    }

    /// Applies a single hop and records it.
    ///
    /// # Errors
    ///
    /// Returns the engine's error if the move is not legal; nothing is
    /// recorded in that case.
    pub fn make_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome> {
        let before = self.rules.clone();
        let record = self.rules.apply_move(from, to)?;
        self.history.push((record, before));
        Ok(record.outcome)
    }

    /// Applies every hop of a complete turn.
    ///
    /// Either the whole turn is applied or the game is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns `IllegalMove` if the turn has no hops or leaves a jump chain
    /// open, or the engine's error for the first hop that fails.
    pub fn play_turn(&mut self, turn: &Turn) -> Result<()> {
        let saved_len = self.history.len();
        let saved_rules = self.rules.clone();

        let result = self.apply_hops(turn);
        if result.is_err() {
            self.history.truncate(saved_len);
            self.rules = saved_rules;
        }
        result
    }

    fn apply_hops(&mut self, turn: &Turn) -> Result<()> {
        let mut outcome = None;
        for (from, to) in turn.hops() {
            outcome = Some(self.make_move(from, to)?);
        }

        match outcome {
            Some(MoveOutcome::TurnComplete) => Ok(()),
            _ => Err(RulesError::IllegalMove {
                from: turn.from,
                to: turn.to(),
            }),
        }
    }

    /// Undoes the last hop.
    ///
    /// # Returns
    ///
    /// `true` if a hop was undone, `false` if the history is empty.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some((_, before)) => {
                self.rules = before;
                true
            }
            None => false,
        }
    }

    /// Undoes hops back to the start of the most recent turn.
    ///
    /// Mid-chain, this takes back the hops of the open chain.
    pub fn undo_turn(&mut self) -> bool {
        if !self.undo() {
            return false;
        }
        while self.rules.in_chain() && self.undo() {}
        true
    }

    /// Returns the hop history as (record, position before the hop).
    pub fn move_history(&self) -> &[(MoveRecord, Rules)] {
        &self.history
    }

    /// Returns the last hop played.
    pub fn last_move(&self) -> Option<MoveRecord> {
        self.history.last().map(|(record, _)| *record)
    }

    /// Counts the consecutive completed turns at the end of the history that
    /// captured nothing.
    pub fn turns_without_capture(&self) -> usize {
        self.history
            .iter()
            .rev()
            .take_while(|(record, _)| !record.is_capture())
            .filter(|(record, _)| record.outcome == MoveOutcome::TurnComplete)
            .count()
    }

    /// Counts how often the current position has stood at the start of a
    /// turn, the current occurrence included.
    ///
    /// Positions inside a jump chain are not turn starts and count as zero.
    pub fn repetitions(&self) -> usize {
        if self.rules.in_chain() {
            return 0;
        }

        let board = self.rules.board();
        let side = self.rules.current_turn();
        let hash = board.hash();

        let earlier = self
            .history
            .iter()
            .map(|(_, before)| before)
            .filter(|before| !before.in_chain() && before.current_turn() == side)
            .filter(|before| before.board().hash() == hash && before.board() == board)
            .count();
        earlier + 1
    }

    /// Returns the status of the game.
    ///
    /// A win is reported as soon as the side to move has no legal move. The
    /// draw rules are checked afterwards, repetition first.
    pub fn status(&self) -> GameStatus {
        if let Some(winner) = self.rules.winner() {
            return GameStatus::Won(winner);
        }
        if self.repetitions() >= self.draw_rules.repetition {
            return GameStatus::Draw(DrawReason::Repetition);
        }
        if self.turns_without_capture() >= self.draw_rules.no_capture {
            return GameStatus::Draw(DrawReason::NoCapture);
        }
        GameStatus::InProgress
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.status() != GameStatus::InProgress
    }

    /// Returns the piece count for both sides as `(dark, light)`.
    pub fn get_score(&self) -> (u32, u32) {
        let board = self.rules.board();
        (board.count(Side::Dark), board.count(Side::Light))
    }
}
