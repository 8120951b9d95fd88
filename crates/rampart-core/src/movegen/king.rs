//! King move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::square::Square;

use super::MoveList;

/// The eight king steps as (rank, file) deltas.
const KING_STEPS: [(i8, i8); 8] = [
    (1, -1),
    (1, 0),
    (1, 1),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// Generate moves for the king on `source`. Castling does not exist in
/// this rule set, so these are the eight single steps only.
pub(super) fn gen_king(board: &Board, source: Square, color: Color, list: &mut MoveList) {
    for (rank_delta, file_delta) in KING_STEPS {
        let Some(dest) = source.offset(rank_delta, file_delta) else {
            continue;
        };
        if board.piece_at(dest).is_none_or(|p| p.color() != color) {
            list.push(Move::new(source, dest));
        }
    }
}
