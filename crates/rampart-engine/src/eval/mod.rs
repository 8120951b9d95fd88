//! Evaluation module for the rampart engine.

pub mod material;
pub mod pst;

use rampart_core::Board;

pub use material::{MATERIAL_VALUE, material, material_value};
pub use pst::{positional, pst_value};

/// Evaluate `board` from the side to move's perspective, in centipawns.
///
/// Combines material balance and piece placement, both computed from
/// White's perspective, then flips the sign for Black. A positive score
/// always means the player about to move is better, which is the form
/// negamax expects.
pub fn evaluate(board: &Board) -> i32 {
    let score = material(board) + positional(board);
    score * board.side_to_move().sign()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
