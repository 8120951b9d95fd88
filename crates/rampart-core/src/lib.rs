//! Core chess types for a simplified rule set: board representation, move
//! generation, and make/undo.
//!
//! The rules modeled here differ from standard chess: pawns have no double
//! push and no en passant, and castling does not exist. Promotion (to queen,
//! rook, bishop or knight) and check/checkmate/stalemate work as usual.

mod board;
mod chess_move;
mod color;
mod error;
mod fen;
mod make_move;
mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod square;

pub use board::{Board, PrettyBoard};
pub use chess_move::Move;
pub use color::Color;
pub use error::FenError;
pub use fen::STARTING_FEN;
pub use movegen::{
    MoveList, generate_legal_moves, generate_pseudo_legal, generate_pseudo_legal_for, is_in_check,
};
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use square::Square;
