use std::fmt;

use crate::constants::BOARD_SIZE;

/// One of the two players.
///
/// `Dark` moves first and advances toward rank 0; `Light` advances toward
/// the last rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Dark,
    Light,
}

impl Side {
    /// Returns the other side.
    #[inline]
    pub fn opposite(self) -> Side {
        match self {
            Side::Dark => Side::Light,
            Side::Light => Side::Dark,
        }
    }

    /// Rank delta of one forward step for this side.
    #[inline]
    pub fn forward(self) -> i8 {
        match self {
            Side::Dark => -1,
            Side::Light => 1,
        }
    }

    /// The rank on which a man of this side is promoted.
    #[inline]
    pub fn promotion_rank(self) -> i8 {
        match self {
            Side::Dark => 0,
            Side::Light => BOARD_SIZE as i8 - 1,
        }
    }

    /// Converts the side to its character representation.
    ///
    /// # Returns
    ///
    /// * `'d'` for `Side::Dark`
    /// * `'l'` for `Side::Light`
    pub fn to_char(self) -> char {
        match self {
            Side::Dark => 'd',
            Side::Light => 'l',
        }
    }

    /// Iterates over both sides, `Dark` first.
    pub fn iter() -> impl Iterator<Item = Side> {
        [Side::Dark, Side::Light].into_iter()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Dark => write!(f, "Dark"),
            Side::Light => write!(f, "Light"),
        }
    }
}
