//! Move ordering.
//!
//! Sorts captures to the front of the move list, most valuable victim
//! first, so alpha-beta cuts off as early as possible. Quiet moves keep
//! their generation order behind the captures.

use std::cmp::Reverse;

use rampart_core::{Board, Move, MoveList, PieceKind};

use crate::eval::material_value;

/// Score floor for captures. Every capture outranks every quiet move.
const CAPTURE_BASE: i32 = 1_000_000;

/// Ordering score for a single move (higher sorts earlier).
///
/// Captures score `CAPTURE_BASE + 10 * victim - attacker`: the victim
/// value dominates and the cheapest attacker wins ties, which is the
/// classic MVV-LVA rule. Quiet moves all score zero.
fn move_score(board: &Board, mv: Move) -> i32 {
    match board.piece_at(mv.dest()) {
        Some(victim) => {
            let attacker = board
                .piece_at(mv.source())
                .map(|p| p.kind())
                .unwrap_or(PieceKind::Pawn);
            CAPTURE_BASE + 10 * material_value(victim.kind()) - material_value(attacker)
        }
        None => 0,
    }
}

/// Sort `moves` in place, best ordering score first.
///
/// The sort is stable, so moves with equal scores (all quiets in
/// particular) stay in the order the generator produced them.
pub fn order_moves(board: &Board, moves: &mut MoveList) {
    moves
        .as_mut_slice()
        .sort_by_key(|&mv| Reverse(move_score(board, mv)));
}
