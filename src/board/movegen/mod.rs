mod kings;
mod knights;
mod pawns;
mod sliders;

pub(crate) use kings::CastleSide;

use super::{Board, Color, Move, MoveList, PieceKind, Square};

pub(crate) const DIAGONALS: [(isize, isize); 4] = [(-1, 1), (-1, -1), (1, 1), (1, -1)];
pub(crate) const ORTHOGONALS: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];
pub(crate) const ALL_DIRECTIONS: [(isize, isize); 8] = [
    (-1, 1),
    (-1, -1),
    (1, 1),
    (1, -1),
    (-1, 0),
    (0, 1),
    (1, 0),
    (0, -1),
];

/// Whether generated candidates are checked against self-check exposure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveFilter {
    /// Keep only moves that do not leave the mover's king capturable.
    Legal,
    /// Keep every move that follows the piece's movement rules.
    ///
    /// Used by the legality oracle's own scan, which must not recurse.
    PseudoLegal,
}

impl Board {
    /// Generate moves for the piece standing on `from`.
    ///
    /// Returns an empty list when `from` is empty or off the board. The result is computed
    /// from scratch on every call; nothing is cached between calls.
    #[must_use]
    pub fn generate_moves(&self, from: Square, filter: MoveFilter) -> MoveList {
        let mut moves = MoveList::new();
        let Some(piece) = self.piece_at(from) else {
            return moves;
        };

        match piece.kind() {
            PieceKind::Pawn { .. } => self.generate_pawn_moves(from, piece, filter, &mut moves),
            PieceKind::Knight => self.generate_knight_moves(from, piece, filter, &mut moves),
            PieceKind::Bishop => {
                self.generate_sliding_moves(from, piece, &DIAGONALS, filter, &mut moves)
            }
            PieceKind::Rook => {
                self.generate_sliding_moves(from, piece, &ORTHOGONALS, filter, &mut moves)
            }
            PieceKind::Queen => {
                self.generate_sliding_moves(from, piece, &ALL_DIRECTIONS, filter, &mut moves)
            }
            PieceKind::King => self.generate_king_moves(from, piece, filter, &mut moves),
        }
        moves
    }

    /// Legal moves for the piece on `from`.
    #[must_use]
    pub fn legal_moves(&self, from: Square) -> MoveList {
        self.generate_moves(from, MoveFilter::Legal)
    }

    /// Legal moves for every piece of `color`, in row-major piece order.
    ///
    /// An empty result is what the caller inspects to detect checkmate or
    /// stalemate; this crate does not decide either.
    #[must_use]
    pub fn all_legal_moves(&self, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        for (sq, _) in self.pieces(color) {
            moves.extend(self.legal_moves(sq));
        }
        moves
    }

    /// Push `mv` unless filtering is on and it would expose the mover's king.
    fn push_candidate(&self, mv: Move, filter: MoveFilter, moves: &mut MoveList) {
        if self.accepts(&mv, filter) {
            moves.push(mv);
        }
    }

    fn accepts(&self, mv: &Move, filter: MoveFilter) -> bool {
        match filter {
            MoveFilter::PseudoLegal => true,
            MoveFilter::Legal => {
                let exposed = self.would_expose_own_king(mv);
                #[cfg(feature = "logging")]
                if exposed {
                    log::trace!("rejecting {mv}: exposes own king");
                }
                !exposed
            }
        }
    }
}
