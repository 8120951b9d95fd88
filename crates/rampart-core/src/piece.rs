//! A colored chess piece.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// A piece on the board: a kind together with its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
}

impl Piece {
    /// Total number of distinct pieces (6 kinds x 2 colors).
    pub const COUNT: usize = PieceKind::COUNT * Color::COUNT;

    /// Create a piece of the given kind and color.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece { kind, color }
    }

    /// Return the kind of this piece.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    /// Return the color of this piece.
    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    /// Return a unique index in 0..12 (White pieces 0..6, Black pieces 6..12).
    ///
    /// Used to address per-piece key tables.
    #[inline]
    pub const fn index(self) -> usize {
        self.color.index() * PieceKind::COUNT + self.kind.index()
    }

    /// Return the FEN character: uppercase for White, lowercase for Black.
    #[inline]
    pub const fn fen_char(self) -> char {
        match self.color {
            Color::White => self.kind.fen_char().to_ascii_uppercase(),
            Color::Black => self.kind.fen_char(),
        }
    }

    /// Parse a FEN character into a piece (uppercase White, lowercase Black).
    pub fn from_fen_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_fen_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(kind, color))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}
