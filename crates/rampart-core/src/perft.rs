//! Perft (performance test) for move generation correctness verification.

use crate::board::Board;
use crate::movegen::generate_legal_moves;

/// Count the number of leaf nodes at the given depth.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number
/// of legal moves (bulk-counting: no recursive apply). Deeper levels walk
/// the tree on a scratch copy through [`Board::with_move`], so the
/// apply/revert pair gets exercised on every interior node.
pub fn perft(board: &Board, depth: u32) -> u64 {
    let mut scratch = *board;
    perft_inner(&mut scratch, depth)
}

fn perft_inner(board: &mut Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_legal_moves(board);

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for &mv in &moves {
        nodes += board.with_move(mv, |b| perft_inner(b, depth - 1));
    }
    nodes
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns a vector of `(move, node_count)` pairs sorted alphabetically.
pub fn divide(board: &Board, depth: u32) -> Vec<(String, u64)> {
    let mut scratch = *board;
    let moves = generate_legal_moves(&scratch);
    let mut results: Vec<(String, u64)> = moves
        .as_slice()
        .iter()
        .map(|&mv| {
            let count = scratch.with_move(mv, |b| {
                if depth <= 1 { 1 } else { perft_inner(b, depth - 1) }
            });
            (mv.to_string(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
