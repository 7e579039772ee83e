use super::super::{Board, Move, MoveList, Piece, Square};
use super::MoveFilter;

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
    (-1, 2),
    (-1, -2),
    (1, 2),
    (1, -2),
];

impl Board {
    pub(crate) fn generate_knight_moves(
        &self,
        from: Square,
        knight: Piece,
        filter: MoveFilter,
        moves: &mut MoveList,
    ) {
        for (d_row, d_col) in KNIGHT_OFFSETS {
            let Some(to) = from.offset(d_row, d_col) else {
                continue;
            };
            let target = self.cell(to);
            if target.is_empty_or_enemy(knight.color()) {
                self.push_candidate(Move::new(from, to, target.piece()), filter, moves);
            }
        }
    }
}
