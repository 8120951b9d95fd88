//! Sliding piece move generation for bishops, rooks and queens.

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::square::Square;

use super::MoveList;

/// Diagonal ray directions as (rank, file) deltas.
pub(super) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Orthogonal ray directions as (rank, file) deltas.
pub(super) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Generate moves for the slider on `source` along each of `directions`,
/// walking every ray until it leaves the board or hits a piece. An enemy
/// piece ends the ray with a capture; a friendly piece ends it without
/// one. Queens are generated as a bishop ray set plus a rook ray set.
pub(super) fn gen_slider(
    board: &Board,
    source: Square,
    color: Color,
    directions: &[(i8, i8)],
    list: &mut MoveList,
) {
    for &(rank_delta, file_delta) in directions {
        let mut sq = source;
        while let Some(dest) = sq.offset(rank_delta, file_delta) {
            match board.piece_at(dest) {
                None => list.push(Move::new(source, dest)),
                Some(piece) => {
                    if piece.color() != color {
                        list.push(Move::new(source, dest));
                    }
                    break;
                }
            }
            sq = dest;
        }
    }
}
