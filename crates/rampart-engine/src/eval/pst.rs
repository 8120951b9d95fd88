//! Piece-square tables.
//!
//! Static positional bonuses for pawns and knights, indexed by LERF square
//! from White's point of view. Black pieces read the table through a
//! vertical mirror (`index ^ 56`), so one table serves both colors.

use rampart_core::{Board, Color, PieceKind, Square};

/// Pawn table. Rewards central pawns and advancement; the near-promotion
/// rank 7 is worth half a rook.
#[rustfmt::skip]
pub const PAWN_PST: [i32; Square::COUNT] = [
    // Rank 1 (indices 0-7)
      0,   0,   0,   0,   0,   0,   0,   0,
    // Rank 2 (indices 8-15)
      5,  10,  10, -20, -20,  10,  10,   5,
    // Rank 3 (indices 16-23)
      5,  -5, -10,   0,   0, -10,  -5,   5,
    // Rank 4 (indices 24-31)
      0,   0,   0,  20,  20,   0,   0,   0,
    // Rank 5 (indices 32-39)
      5,   5,  10,  25,  25,  10,   5,   5,
    // Rank 6 (indices 40-47)
     10,  10,  20,  30,  30,  20,  10,  10,
    // Rank 7 (indices 48-55)
     50,  50,  50,  50,  50,  50,  50,  50,
    // Rank 8 (indices 56-63)
      0,   0,   0,   0,   0,   0,   0,   0,
];

/// Knight table. Centralized knights gain, rim and corner knights pay.
#[rustfmt::skip]
pub const KNIGHT_PST: [i32; Square::COUNT] = [
    // Rank 1 (indices 0-7)
    -50, -40, -30, -30, -30, -30, -40, -50,
    // Rank 2 (indices 8-15)
    -40, -20,   0,   5,   5,   0, -20, -40,
    // Rank 3 (indices 16-23)
    -30,   5,  10,  15,  15,  10,   5, -30,
    // Rank 4 (indices 24-31)
    -30,   0,  15,  20,  20,  15,   0, -30,
    // Rank 5 (indices 32-39)
    -30,   5,  15,  20,  20,  15,   5, -30,
    // Rank 6 (indices 40-47)
    -30,   0,  10,  15,  15,  10,   0, -30,
    // Rank 7 (indices 48-55)
    -40, -20,   0,   0,   0,   0, -20, -40,
    // Rank 8 (indices 56-63)
    -50, -40, -30, -30, -30, -30, -40, -50,
];

/// Positional value of `kind` on `sq` for `color`.
///
/// White reads the table at the square's own index; Black reads it at the
/// vertically mirrored index (`index ^ 56`), so e5 for Black scores like
/// e4 for White. Kinds without a table score zero.
#[inline]
pub fn pst_value(kind: PieceKind, sq: Square, color: Color) -> i32 {
    let table = match kind {
        PieceKind::Pawn => &PAWN_PST,
        PieceKind::Knight => &KNIGHT_PST,
        _ => return 0,
    };
    let index = match color {
        Color::White => sq.index(),
        Color::Black => sq.index() ^ 56,
    };
    table[index]
}

/// Evaluate piece placement from White's perspective.
///
/// Sums [`pst_value`] over every piece on the board, adding White pieces
/// and subtracting Black pieces.
pub fn positional(board: &Board) -> i32 {
    let mut score = 0;

    for sq in Square::all() {
        if let Some(piece) = board.piece_at(sq) {
            score += pst_value(piece.kind(), sq, piece.color()) * piece.color().sign();
        }
    }

    score
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
