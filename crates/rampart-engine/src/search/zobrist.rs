//! Zobrist hashing keys for position deduplication.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rampart_core::{Board, Color, Piece, Square};

/// Seed for the default key table. Fixed so hashes are reproducible
/// across runs and searchers.
pub const DEFAULT_SEED: u64 = 0xDEAD_BEAF_1234_5678;

/// Table of random keys for Zobrist position hashing.
///
/// One key per (square, piece) pair, drawn from a seeded PRNG so that
/// equal seeds produce equal tables. Two boards with the same piece
/// placement and the same side to move always hash identically, which is
/// what lets the transposition table recognize repeated positions.
pub struct ZobristHasher {
    keys: [[u64; Piece::COUNT]; Square::COUNT],
}

impl ZobristHasher {
    /// Build the key table from `seed`.
    pub fn new(seed: u64) -> ZobristHasher {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut keys = [[0u64; Piece::COUNT]; Square::COUNT];
        for square_keys in &mut keys {
            for key in square_keys.iter_mut() {
                *key = rng.next_u64();
            }
        }
        ZobristHasher { keys }
    }

    /// Hash `board`: XOR of the keys for every occupied square, with the
    /// whole hash complemented when Black is the side to move.
    pub fn hash(&self, board: &Board) -> u64 {
        let mut hash = 0u64;

        for sq in Square::all() {
            if let Some(piece) = board.piece_at(sq) {
                hash ^= self.keys[sq.index()][piece.index()];
            }
        }

        match board.side_to_move() {
            Color::White => hash,
            Color::Black => !hash,
        }
    }
}

impl Default for ZobristHasher {
    fn default() -> Self {
        ZobristHasher::new(DEFAULT_SEED)
    }
}

#[cfg(test)]
mod tests {
    use rampart_core::{Board, Move, Square};

    use super::{DEFAULT_SEED, ZobristHasher};

    #[test]
    fn same_seed_reproduces_the_hash() {
        let a = ZobristHasher::new(42);
        let b = ZobristHasher::new(42);
        let board = Board::starting_position();
        assert_eq!(a.hash(&board), b.hash(&board));
    }

    #[test]
    fn different_seeds_produce_different_tables() {
        let a = ZobristHasher::new(1);
        let b = ZobristHasher::new(2);
        let board = Board::starting_position();
        assert_ne!(a.hash(&board), b.hash(&board));
    }

    #[test]
    fn default_uses_the_fixed_seed() {
        let explicit = ZobristHasher::new(DEFAULT_SEED);
        let default = ZobristHasher::default();
        let board = Board::starting_position();
        assert_eq!(explicit.hash(&board), default.hash(&board));
    }

    #[test]
    fn black_to_move_complements_the_hash() {
        let hasher = ZobristHasher::default();
        let white: Board = "4k3/8/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
        let black: Board = "4k3/8/8/8/8/8/8/4K3 b - - 0 1".parse().unwrap();
        assert_eq!(hasher.hash(&black), !hasher.hash(&white));
    }

    #[test]
    fn moving_a_piece_changes_the_hash() {
        let hasher = ZobristHasher::default();
        let mut board = Board::starting_position();
        let before = hasher.hash(&board);
        board.apply(Move::new(Square::E2, Square::E3));
        assert_ne!(hasher.hash(&board), before);
    }

    #[test]
    fn transpositions_hash_identically() {
        let hasher = ZobristHasher::default();

        // Knights reach c3, f6 and f3 through two different move orders;
        // the final positions are identical, Black to move in both.
        let mut first = Board::starting_position();
        first.apply(Move::new(Square::B1, Square::C3));
        first.apply(Move::new(Square::G8, Square::F6));
        first.apply(Move::new(Square::G1, Square::F3));

        let mut second = Board::starting_position();
        second.apply(Move::new(Square::G1, Square::F3));
        second.apply(Move::new(Square::G8, Square::F6));
        second.apply(Move::new(Square::B1, Square::C3));

        assert_eq!(first, second, "both move orders reach the same position");
        assert_eq!(hasher.hash(&first), hasher.hash(&second));
    }

    #[test]
    fn all_keys_are_unique() {
        let hasher = ZobristHasher::default();
        let mut all_keys: Vec<u64> = hasher.keys.iter().flatten().copied().collect();
        let count = all_keys.len();
        all_keys.sort();
        all_keys.dedup();
        assert_eq!(all_keys.len(), count, "some Zobrist keys collide");
    }
}
