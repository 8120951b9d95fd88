//! Search algorithms and move ordering.

pub mod control;
pub mod negamax;
pub mod ordering;
pub mod tt;
pub mod zobrist;

use std::time::Duration;

use rampart_core::{Board, Move, generate_legal_moves, is_in_check};
use tracing::debug;

use control::Deadline;
use negamax::{INF, MATE_SCORE, SearchContext, alpha_beta};
use ordering::order_moves;
use tt::TranspositionTable;
use zobrist::{DEFAULT_SEED, ZobristHasher};

/// Result of a completed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found at the highest completed depth, or `None` when
    /// the root position has no legal moves.
    pub best_move: Option<Move>,
    /// Evaluation score in centipawns from the root side's perspective.
    pub score: i32,
    /// Deepest fully completed iteration.
    pub depth: u32,
    /// Total nodes visited, quiescence included.
    pub nodes: u64,
}

/// Iterative-deepening searcher with transposition table.
pub struct Searcher {
    tt: TranspositionTable,
    zobrist: ZobristHasher,
    tt_enabled: bool,
}

impl Searcher {
    /// Create a searcher with the default Zobrist seed.
    pub fn new() -> Searcher {
        Searcher::with_seed(DEFAULT_SEED)
    }

    /// Create a searcher whose hash keys are derived from `seed`.
    pub fn with_seed(seed: u64) -> Searcher {
        Searcher {
            tt: TranspositionTable::new(),
            zobrist: ZobristHasher::new(seed),
            tt_enabled: true,
        }
    }

    /// Enable or disable the transposition table.
    ///
    /// The table is a cache: toggling it changes how much work the
    /// search does, never which move or score it settles on.
    pub fn set_table_enabled(&mut self, enabled: bool) {
        self.tt_enabled = enabled;
    }

    /// Search `board` with iterative deepening up to `max_depth` plies,
    /// stopping once `budget` wall-clock time has elapsed.
    ///
    /// Depth 1 always runs to completion, so the result carries a legal
    /// move whenever one exists no matter how small the budget. Deeper
    /// iterations are discarded wholesale when the deadline interrupts
    /// them; only fully trusted depths are reported. A `max_depth` of 0
    /// is treated as 1.
    pub fn find_best_move(
        &mut self,
        board: &Board,
        max_depth: u32,
        budget: Duration,
    ) -> SearchResult {
        let max_depth = max_depth.max(1);

        self.tt.clear();
        let deadline = Deadline::after(budget);
        let mut scratch = *board;

        if generate_legal_moves(&scratch).is_empty() {
            let score = if is_in_check(&scratch, scratch.side_to_move()) {
                -MATE_SCORE
            } else {
                0
            };
            return SearchResult {
                best_move: None,
                score,
                depth: 0,
                nodes: 0,
            };
        }

        let mut ctx = SearchContext {
            nodes: 0,
            tt: &mut self.tt,
            zobrist: &self.zobrist,
            deadline,
            tt_enabled: self.tt_enabled,
        };

        let mut completed_move = None;
        let mut completed_score = -INF;
        let mut completed_depth = 0;

        for depth in 1..=max_depth {
            // Depth 1 is exempt from the deadline so a move always
            // comes back; deeper iterations may be cut off.
            let interruptible = depth > 1;
            if interruptible && ctx.deadline.expired() {
                break;
            }

            let Some((mv, score)) = root_search(&mut scratch, depth, interruptible, &mut ctx)
            else {
                debug!(depth, "root scan interrupted, discarding depth");
                break;
            };
            if interruptible && ctx.deadline.expired() {
                // The scan finished but ran past the deadline: inner
                // nodes degraded to static evaluations, so the scores
                // cannot be trusted.
                debug!(depth, "finished past the deadline, discarding depth");
                break;
            }

            completed_move = Some(mv);
            completed_score = score;
            completed_depth = depth;
            debug!(depth, score, nodes = ctx.nodes, best = %mv, "iteration complete");
        }

        debug_assert!(
            scratch == *board,
            "scratch board must unwind to the root position"
        );

        SearchResult {
            best_move: completed_move,
            score: completed_score,
            depth: completed_depth,
            nodes: ctx.nodes,
        }
    }
}

/// Scan the ordered root moves at `depth` with a full window.
///
/// Returns the best move and its score, or `None` when the deadline
/// interrupts the scan partway; a partial scan could adopt a move the
/// remaining candidates would have beaten. The caller guarantees at
/// least one legal move exists.
fn root_search(
    board: &mut Board,
    depth: u32,
    interruptible: bool,
    ctx: &mut SearchContext<'_>,
) -> Option<(Move, i32)> {
    let mut moves = generate_legal_moves(board);
    debug_assert!(
        !moves.is_empty(),
        "terminal positions are handled before the root scan"
    );
    order_moves(board, &mut moves);

    let mut alpha = -INF;
    let mut best: Option<(Move, i32)> = None;

    for &mv in &moves {
        if interruptible && ctx.deadline.expired() {
            return None;
        }

        let score = -board.with_move(mv, |b| alpha_beta(b, depth - 1, 1, -INF, -alpha, ctx));

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
        if score > alpha {
            alpha = score;
        }
    }

    best
}

impl std::fmt::Debug for Searcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Searcher")
            .field("tt", &self.tt)
            .field("tt_enabled", &self.tt_enabled)
            .finish_non_exhaustive()
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}
