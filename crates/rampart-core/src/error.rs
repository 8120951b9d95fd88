//! Error types for position parsing.

use thiserror::Error;

/// Errors produced while parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    /// The string has fewer than the two required fields
    /// (piece placement and side to move).
    #[error("expected at least 2 FEN fields, found {0}")]
    WrongFieldCount(usize),

    /// The piece placement field does not contain exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {0}")]
    WrongRankCount(usize),

    /// A rank in the piece placement field does not describe exactly
    /// 8 squares.
    #[error("rank {rank} describes {squares} squares, expected 8")]
    BadRankLength { rank: usize, squares: usize },

    /// The piece placement field contains a character that is neither
    /// a piece letter nor a digit 1-8.
    #[error("invalid character '{0}' in piece placement")]
    InvalidPieceChar(char),

    /// The side-to-move field is not `w` or `b`.
    #[error("invalid side to move '{0}', expected 'w' or 'b'")]
    InvalidColor(String),
}
