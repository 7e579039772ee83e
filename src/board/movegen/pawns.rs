use super::super::{Board, Move, MoveList, Piece, Square};
use super::MoveFilter;

impl Board {
    pub(crate) fn generate_pawn_moves(
        &self,
        from: Square,
        pawn: Piece,
        filter: MoveFilter,
        moves: &mut MoveList,
    ) {
        let color = pawn.color();
        let dir = color.pawn_direction();
        let steps = if pawn.has_moved() { 1 } else { 2 };

        // Forward pushes stop at the first occupied square or the edge.
        for step in 1..=steps {
            let Some(to) = from.offset(dir * step, 0) else {
                break;
            };
            if !self.cell(to).is_empty() {
                break;
            }
            self.push_candidate(Move::quiet(from, to), filter, moves);
        }

        for d_col in [-1, 1] {
            if let Some(to) = from.offset(dir, d_col) {
                let target = self.cell(to);
                if target.has_enemy_piece(color) {
                    self.push_candidate(Move::new(from, to, target.piece()), filter, moves);
                }
            }
        }

        if from.row() != color.en_passant_row() {
            return;
        }
        for d_col in [-1, 1] {
            let Some(beside) = from.offset(0, d_col) else {
                continue;
            };
            let Some(victim) = self.piece_at(beside) else {
                continue;
            };
            if victim.color() == color || !victim.is_en_passant_eligible() {
                continue;
            }
            // The landing square is the one the victim passed over, so it must be empty.
            if let Some(to) = from.offset(dir, d_col).filter(|to| self.is_empty(*to)) {
                // The snapshot records the bypassed pawn, not the empty landing square.
                self.push_candidate(Move::new(from, to, Some(victim)), filter, moves);
            }
        }
    }
}
