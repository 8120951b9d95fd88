//! Move execution and reversal.

use crate::board::Board;
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

impl Board {
    /// Apply `mv` in place and return the captured piece, if any.
    ///
    /// The move is trusted: `source` must hold a piece of the side to move.
    /// Feed the returned capture back into [`revert`](Board::revert) to
    /// restore the position exactly.
    pub fn apply(&mut self, mv: Move) -> Option<Piece> {
        let mover = self.side_to_move();
        debug_assert!(
            self.piece_at(mv.source()).is_some_and(|p| p.color() == mover),
            "apply expects a piece of the side to move on {}",
            mv.source()
        );

        let captured = self.piece_at(mv.dest());
        if let Some(moving) = self.remove(mv.source()) {
            let placed = match mv.promotion() {
                Some(kind) => Piece::new(kind, moving.color()),
                None => moving,
            };
            self.place(mv.dest(), placed);
        }
        self.set_side_to_move(mover.flip());
        captured
    }

    /// Undo a move previously applied with [`apply`](Board::apply).
    ///
    /// `captured` must be the value the matching `apply` call returned, and
    /// moves must be reverted in reverse order of application.
    pub fn revert(&mut self, mv: Move, captured: Option<Piece>) {
        let mover = self.side_to_move().flip();
        self.set_side_to_move(mover);
        debug_assert!(
            self.piece_at(mv.dest()).is_some_and(|p| p.color() == mover),
            "revert expects the moved piece on {}",
            mv.dest()
        );

        if let Some(moved) = self.remove(mv.dest()) {
            // A promotion put a new piece on the board; the pawn returns.
            let restored = match mv.promotion() {
                Some(_) => Piece::new(PieceKind::Pawn, moved.color()),
                None => moved,
            };
            self.place(mv.source(), restored);
        }
        if let Some(piece) = captured {
            self.place(mv.dest(), piece);
        }
    }

    /// Run `f` against the position after `mv`, then restore `self`.
    ///
    /// Pairs every `apply` with its `revert` so callers cannot leave the
    /// board mid-line on an early return.
    pub fn with_move<R>(&mut self, mv: Move, f: impl FnOnce(&mut Board) -> R) -> R {
        let captured = self.apply(mv);
        let result = f(self);
        self.revert(mv, captured);
        result
    }
}
