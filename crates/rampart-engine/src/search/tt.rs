//! Transposition table.
//!
//! Caches search results keyed by position hash and search depth, so a
//! position reached twice at the same remaining depth is scored once.
//! The table is unbounded and cleared at the start of every search.

use std::collections::HashMap;

/// How a stored score relates to the true score of the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The score is exact: the search completed inside the window.
    Exact,
    /// The score is a lower bound: the search failed high (beta cutoff).
    LowerBound,
    /// The score is an upper bound: the search failed low (no move
    /// raised alpha).
    UpperBound,
}

/// Table key: a position hash together with the remaining search depth.
///
/// Keeping depth in the key means shallow and deep visits of the same
/// position live side by side instead of evicting each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct TtKey {
    key: u64,
    depth: u32,
}

/// A cached search result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TtEntry {
    /// Score from the perspective of the side to move.
    pub score: i32,
    /// Remaining depth the score was searched to.
    pub depth: u32,
    /// How [`TtEntry::score`] relates to the true score.
    pub bound: Bound,
}

/// Unbounded map from (position, depth) to cached search results.
#[derive(Debug, Default)]
pub struct TranspositionTable {
    entries: HashMap<TtKey, TtEntry>,
}

impl TranspositionTable {
    /// Create an empty table.
    pub fn new() -> TranspositionTable {
        TranspositionTable {
            entries: HashMap::new(),
        }
    }

    /// Look up the entry stored for `key` at exactly `depth`.
    pub fn probe(&self, key: u64, depth: u32) -> Option<TtEntry> {
        self.entries
            .get(&TtKey { key, depth })
            .filter(|entry| entry.depth >= depth)
            .copied()
    }

    /// Store `entry` for `key`, overwriting any previous entry at the
    /// same depth.
    pub fn store(&mut self, key: u64, entry: TtEntry) {
        let slot = TtKey {
            key,
            depth: entry.depth,
        };
        self.entries.insert(slot, entry);
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
