//! Negamax alpha-beta search with quiescence.

use rampart_core::{Board, MoveList, generate_legal_moves, generate_pseudo_legal, is_in_check};

use crate::eval::evaluate;
use crate::search::control::Deadline;
use crate::search::ordering::order_moves;
use crate::search::tt::{Bound, TranspositionTable, TtEntry};
use crate::search::zobrist::ZobristHasher;

/// Sentinel larger in magnitude than any reachable score.
pub const INF: i32 = 1_000_000;

/// Score of a checkmate delivered at the root. Mates found deeper in the
/// tree score `MATE_SCORE - ply`, so nearer mates win comparisons.
pub const MATE_SCORE: i32 = 100_000;

/// Scores at or beyond this magnitude announce a forced mate.
pub const MATE_THRESHOLD: i32 = 99_000;

/// Longest capture chain quiescence will follow before falling back to
/// the static evaluation.
pub const QUIESCENCE_PLY_LIMIT: u32 = 16;

/// Per-search state threaded through the recursion.
pub(super) struct SearchContext<'a> {
    /// Nodes entered so far; alpha-beta and quiescence both count.
    pub nodes: u64,
    /// Cached results, keyed by position hash and remaining depth.
    pub tt: &'a mut TranspositionTable,
    /// Key table for position hashing.
    pub zobrist: &'a ZobristHasher,
    /// Wall-clock cutoff polled at every node.
    pub deadline: Deadline,
    /// Gate for all transposition-table traffic.
    pub tt_enabled: bool,
}

/// Negamax alpha-beta over the legal move tree.
///
/// Returns the score of `board` from the side to move's perspective,
/// searched `depth` plies deep with quiescence below that. `ply` is the
/// distance from the root and shapes mate scores. Once the deadline has
/// passed every entry returns the static evaluation, so the stack
/// unwinds quickly and the driver can discard the interrupted depth.
pub(super) fn alpha_beta(
    board: &mut Board,
    depth: u32,
    ply: u32,
    mut alpha: i32,
    mut beta: i32,
    ctx: &mut SearchContext<'_>,
) -> i32 {
    ctx.nodes += 1;

    if ctx.deadline.expired() {
        return evaluate(board);
    }

    if depth == 0 {
        return quiescence(board, 0, alpha, beta, ctx);
    }

    let original_alpha = alpha;
    let hash = if ctx.tt_enabled {
        ctx.zobrist.hash(board)
    } else {
        0
    };

    if ctx.tt_enabled && let Some(entry) = ctx.tt.probe(hash, depth) {
        match entry.bound {
            Bound::Exact => return entry.score,
            Bound::LowerBound => alpha = alpha.max(entry.score),
            Bound::UpperBound => beta = beta.min(entry.score),
        }
        if alpha >= beta {
            return entry.score;
        }
    }

    let mut moves = generate_legal_moves(board);
    if moves.is_empty() {
        return if is_in_check(board, board.side_to_move()) {
            -(MATE_SCORE - ply as i32)
        } else {
            0
        };
    }

    order_moves(board, &mut moves);

    let mut best_score = -INF;
    for &mv in &moves {
        let score = -board.with_move(mv, |b| alpha_beta(b, depth - 1, ply + 1, -beta, -alpha, ctx));

        if score > best_score {
            best_score = score;
        }
        if score > alpha {
            alpha = score;
        }
        if alpha >= beta {
            break;
        }
    }

    if ctx.tt_enabled {
        let bound = if best_score <= original_alpha {
            Bound::UpperBound
        } else if best_score >= beta {
            Bound::LowerBound
        } else {
            Bound::Exact
        };
        ctx.tt.store(
            hash,
            TtEntry {
                score: best_score,
                depth,
                bound,
            },
        );
    }

    best_score
}

/// Quiescence search: play out captures until the position is quiet.
///
/// The side to move may stand pat on the static evaluation or try any
/// pseudo-legal capture; captures that leave the mover's own king in
/// check are skipped after they are applied. `ply` counts from the
/// quiescence entry point and the chain is cut at
/// [`QUIESCENCE_PLY_LIMIT`]. Fail-hard: returns at most `beta`.
pub(super) fn quiescence(
    board: &mut Board,
    ply: u32,
    mut alpha: i32,
    beta: i32,
    ctx: &mut SearchContext<'_>,
) -> i32 {
    ctx.nodes += 1;

    if ctx.deadline.expired() || ply >= QUIESCENCE_PLY_LIMIT {
        return evaluate(board);
    }

    let stand_pat = evaluate(board);
    if stand_pat >= beta {
        return beta;
    }
    if stand_pat > alpha {
        alpha = stand_pat;
    }

    let mut captures = capture_moves(board);
    order_moves(board, &mut captures);

    let us = board.side_to_move();
    for &mv in &captures {
        let score = board.with_move(mv, |b| {
            if is_in_check(b, us) {
                None
            } else {
                Some(-quiescence(b, ply + 1, -beta, -alpha, ctx))
            }
        });
        let Some(score) = score else {
            continue;
        };

        if score >= beta {
            return beta;
        }
        if score > alpha {
            alpha = score;
        }
    }

    alpha
}

/// Pseudo-legal captures for the side to move.
fn capture_moves(board: &Board) -> MoveList {
    let mut captures = MoveList::new();
    for &mv in &generate_pseudo_legal(board) {
        if board.piece_at(mv.dest()).is_some() {
            captures.push(mv);
        }
    }
    captures
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
