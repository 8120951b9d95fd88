//! Material balance evaluation.
//!
//! Counts weighted piece material for each side. All scores are returned
//! from White's perspective (positive = White ahead).

use rampart_core::{Board, PieceKind, Square};

/// Base material values in centipawns, indexed by [`PieceKind::index()`].
///
/// | Piece  | Value  |
/// |--------|--------|
/// | Pawn   |    100 |
/// | Knight |    320 |
/// | Bishop |    330 |
/// | Rook   |    500 |
/// | Queen  |    900 |
/// | King   | 20_000 |
///
/// The king entry outweighs every other piece combined, so any line in
/// which the king is lost evaluates as decisively lost.
pub const MATERIAL_VALUE: [i32; PieceKind::COUNT] = [
    100,    // Pawn
    320,    // Knight
    330,    // Bishop
    500,    // Rook
    900,    // Queen
    20_000, // King
];

/// Material value of a single piece kind.
#[inline]
pub fn material_value(kind: PieceKind) -> i32 {
    MATERIAL_VALUE[kind.index()]
}

/// Evaluate material balance from White's perspective.
///
/// Sums [`MATERIAL_VALUE`] over every piece on the board, adding White
/// pieces and subtracting Black pieces. Returns a positive score when
/// White has more material, negative when Black does.
pub fn material(board: &Board) -> i32 {
    let mut score = 0;

    for sq in Square::all() {
        if let Some(piece) = board.piece_at(sq) {
            score += material_value(piece.kind()) * piece.color().sign();
        }
    }

    score
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use rampart_core::{Board, PieceKind};

    use super::{MATERIAL_VALUE, material, material_value};

    #[test]
    fn starting_position_is_zero() {
        // Both sides have identical material, so the balance is zero.
        let board = Board::starting_position();
        assert_eq!(material(&board), 0);
    }

    #[test]
    fn missing_black_queen_gives_queen_advantage() {
        // Black is missing the queen on d8.
        let board = "rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1"
            .parse::<Board>()
            .unwrap();
        assert_eq!(material(&board), material_value(PieceKind::Queen));
    }

    #[test]
    fn extra_white_rook() {
        // FEN: remove one Black rook (a8).
        let board = "1nbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1"
            .parse::<Board>()
            .unwrap();
        assert_eq!(material(&board), material_value(PieceKind::Rook));
    }

    #[test]
    fn score_is_negated_when_black_is_ahead() {
        // White is missing the queen on d1: White minus Black = -queen.
        let board = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNB1KBNR w - - 0 1"
            .parse::<Board>()
            .unwrap();
        assert_eq!(material(&board), -material_value(PieceKind::Queen));
    }

    #[test]
    fn kings_cancel_each_other() {
        // Two lone kings: huge king values on both sides cancel to zero.
        let board = "4k3/8/8/8/8/8/8/4K3 w - - 0 1".parse::<Board>().unwrap();
        assert_eq!(material(&board), 0);
    }

    #[test]
    fn material_value_table_ordering() {
        assert_eq!(MATERIAL_VALUE[PieceKind::Pawn.index()], 100);
        assert_eq!(MATERIAL_VALUE[PieceKind::Queen.index()], 900);
        assert!(
            material_value(PieceKind::King) > 2 * material_value(PieceKind::Queen) * 9,
            "king must outweigh any realistic material sum"
        );
    }
}
