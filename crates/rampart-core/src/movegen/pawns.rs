//! Pawn move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::MoveList;

/// Push the move from `source` to `dest`, fanning it out into the four
/// promotion choices when `dest` lies on the mover's promotion rank.
fn push_pawn_move(source: Square, dest: Square, color: Color, list: &mut MoveList) {
    if dest.rank() == color.promotion_rank() {
        for kind in PieceKind::PROMOTIONS {
            list.push(Move::new_promotion(source, dest, kind));
        }
    } else {
        list.push(Move::new(source, dest));
    }
}

/// Generate moves for the pawn on `source`: a single push onto an empty
/// square plus the two diagonal captures. This rule set has no double
/// push and no en passant.
pub(super) fn gen_pawn(board: &Board, source: Square, color: Color, list: &mut MoveList) {
    let forward = color.pawn_direction();

    if let Some(dest) = source.offset(forward, 0)
        && board.piece_at(dest).is_none()
    {
        push_pawn_move(source, dest, color, list);
    }

    for file_delta in [-1, 1] {
        if let Some(dest) = source.offset(forward, file_delta)
            && board.piece_at(dest).is_some_and(|p| p.color() != color)
        {
            push_pawn_move(source, dest, color, list);
        }
    }
}
