//! Move representation.

use std::fmt;

use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A move: origin square, destination square, and an optional promotion kind.
///
/// Immutable once constructed. Whether a move captures is not recorded here;
/// it is a property of the board the move is applied to (the destination is
/// occupied), and [`Board::apply`](crate::Board::apply) returns the captured
/// piece so the move can be reverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    source: Square,
    dest: Square,
    promotion: Option<PieceKind>,
}

impl Move {
    /// Create a non-promoting move.
    #[inline]
    pub const fn new(source: Square, dest: Square) -> Move {
        Move {
            source,
            dest,
            promotion: None,
        }
    }

    /// Create a promoting move.
    ///
    /// # Panics
    ///
    /// Debug-asserts that `kind` is a valid promotion target (not a pawn
    /// or king).
    #[inline]
    pub const fn new_promotion(source: Square, dest: Square, kind: PieceKind) -> Move {
        debug_assert!(!matches!(kind, PieceKind::Pawn | PieceKind::King));
        Move {
            source,
            dest,
            promotion: Some(kind),
        }
    }

    /// Return the origin square.
    #[inline]
    pub const fn source(self) -> Square {
        self.source
    }

    /// Return the destination square.
    #[inline]
    pub const fn dest(self) -> Square {
        self.dest
    }

    /// Return the promotion kind, or `None` for a non-promoting move.
    #[inline]
    pub const fn promotion(self) -> Option<PieceKind> {
        self.promotion
    }

    /// Return `true` if this move promotes a pawn.
    #[inline]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }
}

impl fmt::Display for Move {
    /// Coordinate notation: "e2e3", or "e7e8q" with a promotion suffix.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.source, self.dest)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.fen_char())?;
        }
        Ok(())
    }
}
