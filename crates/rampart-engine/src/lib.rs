//! Search and evaluation for rampart.

pub mod eval;
pub mod search;

pub use eval::evaluate;
pub use search::control::Deadline;
pub use search::negamax::{INF, MATE_SCORE, MATE_THRESHOLD, QUIESCENCE_PLY_LIMIT};
pub use search::ordering::order_moves;
pub use search::tt::{Bound, TranspositionTable, TtEntry};
pub use search::zobrist::{DEFAULT_SEED, ZobristHasher};
pub use search::{SearchResult, Searcher};
