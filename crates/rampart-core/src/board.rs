//! Mailbox board representation.

use std::fmt;

use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Back-rank piece order, a-file to h-file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// A chess position: 64 squares of piece-or-empty, plus the side to move.
///
/// The board is `Copy` so callers can branch on a position by value; the
/// search mutates a single copy in place through
/// [`apply`](Board::apply)/[`revert`](Board::revert). No castling,
/// en-passant or move-counter state exists in this rule set, so the two
/// fields here are the entire position.
///
/// A king may be transiently absent during speculative search (a line in
/// quiescence captured it). Every routine that looks for a king tolerates
/// that state.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; Square::COUNT],
    side_to_move: Color,
}

impl Board {
    /// Create an empty board with White to move.
    pub const fn empty() -> Board {
        Board {
            squares: [None; Square::COUNT],
            side_to_move: Color::White,
        }
    }

    /// Create the standard starting position.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for file in 0..8u8 {
            let kind = BACK_RANK[file as usize];
            board.place(Square::from_coords(0, file), Piece::new(kind, Color::White));
            board.place(
                Square::from_coords(1, file),
                Piece::new(PieceKind::Pawn, Color::White),
            );
            board.place(
                Square::from_coords(6, file),
                Piece::new(PieceKind::Pawn, Color::Black),
            );
            board.place(Square::from_coords(7, file), Piece::new(kind, Color::Black));
        }
        board
    }

    /// Return the piece on `sq`, or `None` if the square is empty.
    #[inline]
    pub const fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Put `piece` on `sq`, replacing any previous occupant.
    #[inline]
    pub fn place(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.index()] = Some(piece);
    }

    /// Remove and return the piece on `sq`.
    #[inline]
    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    /// Return the side to move.
    #[inline]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Set the side to move.
    #[inline]
    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    /// Locate the king of the given color.
    ///
    /// Returns `None` when that king is not on the board, which callers
    /// treat as a lost position already.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| {
            self.piece_at(sq)
                .is_some_and(|p| p.kind() == PieceKind::King && p.color() == color)
        })
    }

    /// Return a wrapper that pretty-prints this board as an 8x8 grid.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl fmt::Display for Board {
    /// Piece placement and side to move in FEN notation, e.g.
    /// `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0u8..8).rev() {
            let mut empty_count = 0u8;
            for file in 0u8..8 {
                match self.piece_at(Square::from_coords(rank, file)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        write!(f, "{}", piece.fen_char())?;
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }
            if rank > 0 {
                write!(f, "/")?;
            }
        }
        write!(f, " {}", self.side_to_move)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for rank in (0u8..8).rev() {
            write!(f, "{}  ", rank + 1)?;
            for file in 0u8..8 {
                let c = match board.piece_at(Square::from_coords(rank, file)) {
                    Some(piece) => piece.fen_char(),
                    None => '.',
                };
                if file < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
