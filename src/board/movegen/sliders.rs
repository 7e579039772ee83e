use super::super::{Board, Move, MoveList, Piece, Square};
use super::MoveFilter;

impl Board {
    /// Walk each ray until the edge, an own piece (exclusive) or an enemy
    /// piece (inclusive).
    pub(crate) fn generate_sliding_moves(
        &self,
        from: Square,
        slider: Piece,
        directions: &[(isize, isize)],
        filter: MoveFilter,
        moves: &mut MoveList,
    ) {
        let color = slider.color();
        for &(d_row, d_col) in directions {
            let mut current = from;
            while let Some(to) = current.offset(d_row, d_col) {
                let target = self.cell(to);
                if target.has_own_piece(color) {
                    break;
                }
                self.push_candidate(Move::new(from, to, target.piece()), filter, moves);
                if target.has_enemy_piece(color) {
                    break;
                }
                current = to;
            }
        }
    }
}
