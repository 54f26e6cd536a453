use crate::side::Side;

/// A single checker.
///
/// The side of a piece is fixed at creation. `is_king` starts out false and
/// can only be set by [`Piece::promote`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    side: Side,
    is_king: bool,
}

impl Piece {
    /// Creates an unpromoted piece (a man).
    pub fn man(side: Side) -> Piece {
        Piece {
            side,
            is_king: false,
        }
    }

    /// Creates a king.
    pub fn king(side: Side) -> Piece {
        Piece {
            side,
            is_king: true,
        }
    }

    #[inline]
    pub fn side(self) -> Side {
        self.side
    }

    #[inline]
    pub fn is_king(self) -> bool {
        self.is_king
    }

    /// Crowns the piece. Promotion is one-way.
    #[inline]
    pub fn promote(&mut self) {
        self.is_king = true;
    }

    /// Converts the piece to its character representation.
    ///
    /// Men use the lowercase side character, kings the uppercase one.
    pub fn to_char(self) -> char {
        let c = self.side.to_char();
        if self.is_king { c.to_ascii_uppercase() } else { c }
    }

    /// Parses a piece from its character representation.
    ///
    /// # Returns
    ///
    /// `Some(Piece)` for `d`, `D`, `l` or `L`, `None` otherwise.
    pub fn from_char(c: char) -> Option<Piece> {
        match c {
            'd' => Some(Piece::man(Side::Dark)),
            'D' => Some(Piece::king(Side::Dark)),
            'l' => Some(Piece::man(Side::Light)),
            'L' => Some(Piece::king(Side::Light)),
            _ => None,
        }
    }
}
