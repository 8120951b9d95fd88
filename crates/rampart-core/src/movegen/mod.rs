//! Pseudo-legal and legal move generation.

mod check;
mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

pub use self::check::is_in_check;
use self::king::gen_king;
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS, gen_slider};

/// Stack-allocated buffer for generated moves.
///
/// Capacity 256 comfortably covers any position this rule set can reach.
pub struct MoveList {
    moves: [Move; 256],
    len: u16,
}

impl MoveList {
    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList {
            moves: [Move::new(Square::A1, Square::A1); 256],
            len: 0,
        }
    }

    /// Push a move onto the list.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        debug_assert!((self.len as usize) < 256);
        self.moves[self.len as usize] = mv;
        self.len += 1;
    }

    /// Return the number of moves in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Return `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len as usize]
    }

    /// Return a mutable slice of the moves, for in-place reordering.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Move] {
        &mut self.moves[..self.len as usize]
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Generate all pseudo-legal moves for the side to move.
///
/// Pseudo-legal means the move obeys piece movement and capture rules but
/// may leave the mover's own king in check.
pub fn generate_pseudo_legal(board: &Board) -> MoveList {
    generate_pseudo_legal_for(board, board.side_to_move())
}

/// Generate all pseudo-legal moves for `color`, regardless of whose turn
/// it is. Check detection runs this for the opponent of the side to move.
pub fn generate_pseudo_legal_for(board: &Board, color: Color) -> MoveList {
    let mut list = MoveList::new();
    for source in Square::all() {
        let Some(piece) = board.piece_at(source) else {
            continue;
        };
        if piece.color() != color {
            continue;
        }
        match piece.kind() {
            PieceKind::Pawn => gen_pawn(board, source, color, &mut list),
            PieceKind::Knight => gen_knight(board, source, color, &mut list),
            PieceKind::Bishop => gen_slider(board, source, color, &BISHOP_DIRECTIONS, &mut list),
            PieceKind::Rook => gen_slider(board, source, color, &ROOK_DIRECTIONS, &mut list),
            PieceKind::Queen => {
                gen_slider(board, source, color, &BISHOP_DIRECTIONS, &mut list);
                gen_slider(board, source, color, &ROOK_DIRECTIONS, &mut list);
            }
            PieceKind::King => gen_king(board, source, color, &mut list),
        }
    }
    list
}

/// Generate all legal moves for the current position.
///
/// A pseudo-legal move is legal when the mover's king is not in check
/// after it is played. Each candidate is tried on a scratch copy of the
/// board.
pub fn generate_legal_moves(board: &Board) -> MoveList {
    let us = board.side_to_move();
    let mut list = MoveList::new();
    for &mv in &generate_pseudo_legal(board) {
        let mut scratch = *board;
        scratch.apply(mv);
        if !is_in_check(&scratch, us) {
            list.push(mv);
        }
    }
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::square::Square;

    fn legal(fen: &str) -> MoveList {
        let board: Board = fen.parse().unwrap();
        generate_legal_moves(&board)
    }

    #[test]
    fn move_list_push_and_index() {
        let mut list = MoveList::new();
        assert!(list.is_empty());

        list.push(Move::new(Square::E2, Square::E3));
        list.push(Move::new(Square::G1, Square::F3));
        assert_eq!(list.len(), 2);
        assert_eq!(list[1], Move::new(Square::G1, Square::F3));

        let collected: Vec<Move> = list.into_iter().copied().collect();
        assert_eq!(collected, list.as_slice());
    }

    #[test]
    fn starting_position_12_moves() {
        // Without the double pawn push: 8 single pushes + 4 knight moves.
        let board = Board::starting_position();
        let moves = generate_legal_moves(&board);
        assert_eq!(
            moves.len(),
            12,
            "starting position should have 12 legal moves, got {}",
            moves.len()
        );
    }

    #[test]
    fn no_double_pawn_push() {
        let board = Board::starting_position();
        let moves = generate_legal_moves(&board);
        assert!(
            !moves.as_slice().contains(&Move::new(Square::E2, Square::E4)),
            "double pawn pushes do not exist in this rule set"
        );
    }

    #[test]
    fn legal_moves_are_a_subset_of_pseudo_legal() {
        let fens = [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1",
            "4r2k/8/8/8/8/8/4N3/4K3 w - - 0 1",
            "4k3/8/8/3q4/4P3/8/8/4K3 b - - 0 1",
            "3rk3/4P3/8/8/8/8/8/4K3 w - - 0 1",
        ];
        for fen in fens {
            let board: Board = fen.parse().unwrap();
            let pseudo = generate_pseudo_legal(&board);
            let legal = generate_legal_moves(&board);
            for mv in legal.as_slice() {
                assert!(
                    pseudo.as_slice().contains(mv),
                    "legal move {mv} missing from pseudo-legal set for '{fen}'"
                );
            }
            assert!(legal.len() <= pseudo.len());
        }
    }

    #[test]
    fn legal_moves_never_leave_own_king_in_check() {
        let fens = [
            "4r2k/8/8/8/8/8/4N3/4K3 w - - 0 1",
            "4k3/8/8/8/8/8/3p4/4K3 w - - 0 1",
            "r3k3/8/8/8/8/8/8/R3K3 b - - 0 1",
        ];
        for fen in fens {
            let board: Board = fen.parse().unwrap();
            let us = board.side_to_move();
            for &mv in &generate_legal_moves(&board) {
                let mut scratch = board;
                scratch.apply(mv);
                assert!(
                    !is_in_check(&scratch, us),
                    "move {mv} leaves the king in check for '{fen}'"
                );
            }
        }
    }

    #[test]
    fn pinned_knight_zero_moves() {
        // King on e1, knight on e2, rook on e8 pins it along the e-file.
        let moves = legal("4r2k/8/8/8/8/8/4N3/4K3 w - - 0 1");
        let knight_moves = moves
            .as_slice()
            .iter()
            .filter(|m| m.source() == Square::E2)
            .count();
        assert_eq!(knight_moves, 0, "pinned knight should have 0 moves");
    }

    #[test]
    fn check_must_be_answered() {
        // Black rook e8 checks the king on e1. The king steps off the
        // e-file (d1, d2, f1, f2) or the rook blocks on e2.
        let moves = legal("4r2k/8/8/8/8/8/R7/4K3 w - - 0 1");
        assert_eq!(moves.len(), 5, "4 king steps plus the rook block");
        assert!(
            moves.as_slice().contains(&Move::new(Square::A2, Square::E2)),
            "rook must be able to block on e2"
        );
        assert!(
            !moves.as_slice().contains(&Move::new(Square::A2, Square::A3)),
            "rook moves that ignore the check are illegal"
        );
    }

    #[test]
    fn promotion_generates_exactly_4_moves() {
        // White pawn on a7 with an empty a8.
        let moves = legal("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        let promotions: Vec<_> = moves.as_slice().iter().filter(|m| m.is_promotion()).collect();
        assert_eq!(
            promotions.len(),
            4,
            "a lone promotion push should generate 4 moves (Q/R/B/N)"
        );
        for mv in &promotions {
            assert_eq!(mv.source(), Square::A7);
            assert_eq!(mv.dest(), Square::A8);
        }
    }

    #[test]
    fn promotion_capture_also_fans_out() {
        // White pawn a7, black rook b8: 4 push promotions + 4 capture
        // promotions.
        let moves = legal("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        let promotions = moves.as_slice().iter().filter(|m| m.is_promotion()).count();
        assert_eq!(promotions, 8);
    }

    #[test]
    fn blocked_pawn_has_no_push() {
        // White pawn e4 blocked by a black pawn on e5.
        let board: Board = "4k3/8/8/4p3/4P3/8/8/4K3 w - - 0 1".parse().unwrap();
        let moves = generate_pseudo_legal(&board);
        let pawn_moves = moves
            .as_slice()
            .iter()
            .filter(|m| m.source() == Square::E4)
            .count();
        assert_eq!(pawn_moves, 0, "blocked pawn with no capture has no moves");
    }
}
