//! Check detection.

use crate::board::Board;
use crate::color::Color;

use super::generate_pseudo_legal_for;

/// Return `true` if `color`'s king is attacked by the opponent.
///
/// Detection runs the opponent's pseudo-legal generation and scans for a
/// move landing on the king square. A board with no king of `color` also
/// counts as in check, so lines where the king was captured score as lost
/// without a special case.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = board.king_square(color) else {
        return true;
    };
    generate_pseudo_legal_for(board, color.flip())
        .as_slice()
        .iter()
        .any(|mv| mv.dest() == king_sq)
}
