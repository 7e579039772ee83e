use super::movegen::CastleSide;
use super::{Board, Color, Move, MoveError, Piece, Square, BOARD_SIZE};

impl Board {
    /// Returns true if `mv` is among the current legal moves of the piece on
    /// its origin square.
    #[must_use]
    pub fn is_legal_candidate(&self, mv: &Move) -> bool {
        self.legal_moves(mv.from()).contains(mv)
    }

    /// Apply a legal move.
    ///
    /// The move is validated first; on error the board is left untouched.
    /// This does not mark a double-advanced pawn as en-passant eligible, see
    /// [`Board::play`] for the full sequence.
    pub fn apply_move(&mut self, mv: &Move) -> Result<(), MoveError> {
        for square in [mv.from(), mv.to()] {
            if !square.is_on_board() {
                return Err(MoveError::OffBoard { square });
            }
        }
        if self.piece_at(mv.from()).is_none() {
            return Err(MoveError::EmptySquare { square: mv.from() });
        }
        if !self.is_legal_candidate(mv) {
            return Err(MoveError::IllegalMove {
                from: mv.from(),
                to: mv.to(),
            });
        }
        self.apply_move_unchecked(mv);
        Ok(())
    }

    /// Apply a legal move, then mark the mover en-passant eligible if it was
    /// a pawn's two-square advance.
    pub fn play(&mut self, mv: &Move) -> Result<(), MoveError> {
        self.apply_move(mv)?;
        let moved_pawn = self.piece_at(mv.to()).is_some_and(|p| p.is_pawn());
        if moved_pawn && mv.row_delta().abs() == 2 {
            self.mark_en_passant_eligible(mv.to());
        }
        Ok(())
    }

    /// Apply `mv` without checking it against the generated move list.
    ///
    /// Handles en-passant removal, promotion and the rook leg of castling.
    pub(crate) fn apply_move_unchecked(&mut self, mv: &Move) {
        let (from, to) = (mv.from(), mv.to());
        // Needed to tell an en-passant capture from a normal diagonal capture.
        let destination_was_empty = self.is_empty(to);

        let Some(mut piece) = self.clear(from) else {
            return;
        };
        piece.mark_moved();
        self.place(to, piece);

        if piece.is_pawn() {
            if mv.col_delta() != 0 && destination_was_empty {
                let bypassed = Square(from.row(), to.col());
                let _captured = self.clear(bypassed);
                #[cfg(feature = "logging")]
                log::debug!("en passant {mv}: removed {:?} from {bypassed}", _captured);
            } else {
                self.check_promotion(piece.color(), to);
            }
        }

        if piece.is_king() && Board::is_castling_move(from, to) {
            let side = CastleSide::from_delta(mv.col_delta());
            if let Some(rook_move) = Board::castling_rook_move(from, side) {
                if self.piece_at(rook_move.from()).is_some_and(|p| p.is_rook()) {
                    #[cfg(feature = "logging")]
                    log::debug!("castling {mv}: rook leg {rook_move}");
                    self.apply_move_unchecked(&rook_move);
                }
            }
        }

        self.expire_en_passant(piece.color().opponent());
        self.last_move = Some(*mv);

        #[cfg(feature = "logging")]
        log::debug!("applied {mv} for {}", piece.color());
    }

    /// Replace the occupant of `to` with a fresh Queen of `color` when `to`
    /// is on either terminal row.
    pub fn check_promotion(&mut self, color: Color, to: Square) {
        if !to.is_on_board() {
            return;
        }
        if to.row() == 0 || to.row() == BOARD_SIZE - 1 {
            self.place(to, Piece::queen(color));
            #[cfg(feature = "logging")]
            log::debug!("promoted {color} pawn on {to}");
        }
    }

    /// A king move spanning two columns is castling.
    #[inline]
    #[must_use]
    pub fn is_castling_move(from: Square, to: Square) -> bool {
        from.col().abs_diff(to.col()) == 2
    }

    /// Make the pawn on `sq` the only en-passant eligible pawn on the board.
    ///
    /// No effect if `sq` does not hold a pawn.
    pub fn mark_en_passant_eligible(&mut self, sq: Square) {
        if !self.piece_at(sq).is_some_and(|p| p.is_pawn()) {
            return;
        }
        for cell in self.cells.iter_mut().flatten() {
            if let Some(piece) = cell.piece_mut() {
                piece.set_en_passant(false);
            }
        }
        if let Some(pawn) = self.cell_mut(sq).piece_mut() {
            pawn.set_en_passant(true);
        }
        #[cfg(feature = "logging")]
        log::debug!("pawn on {sq} is en passant eligible");
    }

    /// Clear the en-passant flag on every pawn of `color`; their window
    /// closes once the other side has moved.
    pub(crate) fn expire_en_passant(&mut self, color: Color) {
        for cell in self.cells.iter_mut().flatten() {
            if let Some(piece) = cell.piece_mut().filter(|p| p.color() == color) {
                piece.set_en_passant(false);
            }
        }
    }
}
