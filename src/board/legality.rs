//! Self-check detection by hypothetical replay.
//!
//! A move is legal when, after playing it on a scratch copy of the board, no
//! opposing piece has a pseudo-legal move landing on the mover's king. The
//! copy is a plain value clone and is dropped as soon as the scan finishes.

use super::{Board, Color, Move, MoveFilter};

impl Board {
    /// Returns true if applying `mv` would leave its mover's king capturable.
    ///
    /// A move whose origin is empty, or that leaves the board, exposes
    /// nothing and returns false.
    #[must_use]
    pub fn would_expose_own_king(&self, mv: &Move) -> bool {
        if !mv.to().is_on_board() {
            return false;
        }
        let Some(piece) = self.piece_at(mv.from()) else {
            return false;
        };

        let mut scratch = self.clone();
        scratch.apply_move_unchecked(mv);
        scratch.is_king_attacked(piece.color())
    }

    /// Returns true if some opposing piece has a pseudo-legal move landing on
    /// the king of `color`.
    ///
    /// Opponent moves are generated unfiltered, so this never recurses into
    /// the legality check.
    #[must_use]
    pub fn is_king_attacked(&self, color: Color) -> bool {
        self.pieces(color.opponent()).any(|(sq, _)| {
            self.generate_moves(sq, MoveFilter::PseudoLegal)
                .iter()
                .any(|reply| self.piece_at(reply.to()).is_some_and(|p| p.is_king()))
        })
    }
}
