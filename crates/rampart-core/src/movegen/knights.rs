//! Knight move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::square::Square;

use super::MoveList;

/// The eight knight jumps as (rank, file) deltas.
const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
    (-2, 1),
    (-2, -1),
];

/// Generate moves for the knight on `source`.
pub(super) fn gen_knight(board: &Board, source: Square, color: Color, list: &mut MoveList) {
    for (rank_delta, file_delta) in KNIGHT_JUMPS {
        let Some(dest) = source.offset(rank_delta, file_delta) else {
            continue;
        };
        if board.piece_at(dest).is_none_or(|p| p.color() != color) {
            list.push(Move::new(source, dest));
        }
    }
}
