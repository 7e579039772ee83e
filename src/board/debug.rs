use std::fmt;

use super::{Board, Square, BOARD_SIZE};

/// Text diagram, row 0 at the top; White uppercase, Black lowercase.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            write!(f, "{} ", BOARD_SIZE - row)?;
            for col in 0..BOARD_SIZE {
                let ch = self.piece_at(Square(row, col)).map_or('.', |p| p.symbol());
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
