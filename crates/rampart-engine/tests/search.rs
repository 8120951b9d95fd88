//! Integration tests for the search driver.
//!
//! Exercises the public API end to end: legal move selection, mate and
//! stalemate handling, time budgets and node accounting.

use std::time::Duration;

use rampart_core::{Board, generate_legal_moves};
use rampart_engine::{MATE_SCORE, MATE_THRESHOLD, SearchResult, Searcher};

const BACKRANK_MATE_FEN: &str = "6k1/5ppp/8/8/8/8/8/R3K3 w - - 0 1";

const STALEMATE_FEN: &str = "k7/2K5/1Q6/8/8/8/8/8 b - - 0 1";

const CHECKMATED_FEN: &str = "7k/6Q1/5K2/8/8/8/8/8 b - - 0 1";

const ENDGAME_FEN: &str = "8/8/8/3k4/8/3K4/4P3/8 w - - 0 1";

/// Helper: search `fen` at `depth` with an effectively unlimited budget.
fn search(fen: &str, depth: u32) -> SearchResult {
    let board: Board = fen.parse().unwrap_or_else(|_| panic!("invalid FEN: {fen}"));
    Searcher::new().find_best_move(&board, depth, Duration::from_secs(3600))
}

// ---------------------------------------------------------------------------
// Basic correctness
// ---------------------------------------------------------------------------

#[test]
fn startpos_returns_legal_move() {
    let board = Board::starting_position();
    let result = Searcher::new().find_best_move(&board, 4, Duration::from_secs(3600));
    let best = result.best_move.expect("startpos search should return a move");
    assert!(
        generate_legal_moves(&board).as_slice().contains(&best),
        "search returned illegal move {best} from the starting position"
    );
}

#[test]
fn finds_back_rank_mate_in_one() {
    let result = search(BACKRANK_MATE_FEN, 2);
    let best = result.best_move.expect("mate position should yield a move");
    assert_eq!(best.to_string(), "a1a8", "should find the back-rank mate");
    assert!(
        result.score > MATE_THRESHOLD,
        "score {} should indicate mate",
        result.score
    );
}

#[test]
fn various_positions_return_legal_moves() {
    let positions = [
        ("pawn wall", "4k3/pppppppp/8/8/8/8/PPPPPPPP/4K3 w - - 0 1"),
        ("minor-piece tactics", "4k3/2r5/8/3n4/2P5/8/1B6/4K3 w - - 0 1"),
        ("king and pawn endgame", ENDGAME_FEN),
    ];

    for (name, fen) in positions {
        let board: Board = fen.parse().unwrap_or_else(|_| panic!("invalid FEN for {name}"));
        let result = search(fen, 4);
        let best = result
            .best_move
            .unwrap_or_else(|| panic!("search on {name} ({fen}) returned no move"));
        assert!(
            generate_legal_moves(&board).as_slice().contains(&best),
            "illegal move {best} on {name}"
        );
    }
}

// ---------------------------------------------------------------------------
// Terminal positions
// ---------------------------------------------------------------------------

#[test]
fn stalemate_scores_zero_with_no_move() {
    let result = search(STALEMATE_FEN, 4);
    assert_eq!(result.best_move, None, "stalemate has no move to report");
    assert_eq!(result.score, 0, "stalemate is a draw");
    assert_eq!(result.depth, 0, "no iteration runs on a terminal position");
}

#[test]
fn checkmated_side_reports_the_mate_score() {
    let result = search(CHECKMATED_FEN, 4);
    assert_eq!(result.best_move, None);
    assert_eq!(
        result.score, -MATE_SCORE,
        "a checkmated root scores the full mate value"
    );
}

// ---------------------------------------------------------------------------
// Time budgets
// ---------------------------------------------------------------------------

#[test]
fn zero_budget_always_yields_a_move() {
    let board = Board::starting_position();
    let result = Searcher::new().find_best_move(&board, 8, Duration::ZERO);
    assert!(
        result.best_move.is_some(),
        "depth 1 is mandatory even with no time"
    );
    assert_eq!(result.depth, 1, "an expired budget stops after depth 1");
}

#[test]
fn short_budget_stops_a_deep_search_early() {
    let board = Board::starting_position();
    let result = Searcher::new().find_best_move(&board, 64, Duration::from_millis(50));
    assert!(result.best_move.is_some());
    assert!(
        (1..64).contains(&result.depth),
        "50 ms cannot complete depth 64, got depth {}",
        result.depth
    );
}

// ---------------------------------------------------------------------------
// Node accounting and determinism
// ---------------------------------------------------------------------------

#[test]
fn deeper_searches_visit_more_nodes() {
    let shallow = search(ENDGAME_FEN, 1);
    let deep = search(ENDGAME_FEN, 4);
    assert!(shallow.nodes > 0, "depth 1 should visit at least one node");
    assert!(
        deep.nodes > shallow.nodes,
        "depth 4 ({}) should outwork depth 1 ({})",
        deep.nodes,
        shallow.nodes
    );
}

#[test]
fn independent_searchers_agree() {
    let first = search(ENDGAME_FEN, 4);
    let second = search(ENDGAME_FEN, 4);
    assert_eq!(first.best_move, second.best_move);
    assert_eq!(first.score, second.score);
    assert_eq!(first.nodes, second.nodes);
}
