use super::super::{Board, Move, MoveList, Piece, Square, BOARD_SIZE};
use super::{MoveFilter, ALL_DIRECTIONS};

/// The side of the board a castling move heads towards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CastleSide {
    Queenside,
    Kingside,
}

impl CastleSide {
    pub(crate) const BOTH: [CastleSide; 2] = [CastleSide::Queenside, CastleSide::Kingside];

    /// Column step from the king towards the rook.
    pub(crate) const fn sign(self) -> isize {
        match self {
            CastleSide::Queenside => -1,
            CastleSide::Kingside => 1,
        }
    }

    pub(crate) const fn rook_col(self) -> usize {
        match self {
            CastleSide::Queenside => 0,
            CastleSide::Kingside => BOARD_SIZE - 1,
        }
    }

    /// Side implied by a king move's column delta.
    pub(crate) const fn from_delta(col_delta: isize) -> CastleSide {
        if col_delta < 0 {
            CastleSide::Queenside
        } else {
            CastleSide::Kingside
        }
    }
}

impl Board {
    pub(crate) fn generate_king_moves(
        &self,
        from: Square,
        king: Piece,
        filter: MoveFilter,
        moves: &mut MoveList,
    ) {
        for (d_row, d_col) in ALL_DIRECTIONS {
            let Some(to) = from.offset(d_row, d_col) else {
                continue;
            };
            let target = self.cell(to);
            if target.is_empty_or_enemy(king.color()) {
                self.push_candidate(Move::new(from, to, target.piece()), filter, moves);
            }
        }

        if king.has_moved() {
            return;
        }
        for side in CastleSide::BOTH {
            let Some((king_move, rook_move)) = self.castling_pair(from, king, side) else {
                continue;
            };
            // Each side is judged on its own king and rook legs.
            if self.accepts(&king_move, filter) && self.accepts(&rook_move, filter) {
                moves.push(king_move);
            }
        }
    }

    /// The rook leg paired with a castling king move from `king_from`.
    pub(crate) fn castling_rook_move(king_from: Square, side: CastleSide) -> Option<Move> {
        let rook_from = Square(king_from.row(), side.rook_col());
        let rook_to = king_from.offset(0, side.sign())?;
        Some(Move::quiet(rook_from, rook_to))
    }

    /// The (king, rook) move pair for castling towards `side`, if the king
    /// and that side's rook are unmoved and every cell between them is empty.
    fn castling_pair(&self, from: Square, king: Piece, side: CastleSide) -> Option<(Move, Move)> {
        let rook_sq = Square(from.row(), side.rook_col());
        let rook = self.piece_at(rook_sq)?;
        if !rook.is_rook() || rook.has_moved() || rook.color() != king.color() {
            return None;
        }

        let (low, high) = if rook_sq.col() < from.col() {
            (rook_sq.col(), from.col())
        } else {
            (from.col(), rook_sq.col())
        };
        // The king's two-square step must land strictly short of the rook.
        if high - low < 3 {
            return None;
        }
        if (low + 1..high).any(|col| self.cell(Square(from.row(), col)).has_piece()) {
            return None;
        }

        let king_to = from.offset(0, 2 * side.sign())?;
        let rook_move = Board::castling_rook_move(from, side)?;
        Some((Move::quiet(from, king_to), rook_move))
    }
}
