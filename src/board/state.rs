use once_cell::sync::Lazy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Cell, Color, Move, Piece, Square, BOARD_SIZE};

/// Back rank order, a-file to h-file.
pub(crate) const BACK_RANK: [fn(Color) -> Piece; BOARD_SIZE] = [
    Piece::rook,
    Piece::knight,
    Piece::bishop,
    Piece::queen,
    Piece::king,
    Piece::bishop,
    Piece::knight,
    Piece::rook,
];

static STARTING_POSITION: Lazy<Board> = Lazy::new(|| {
    let mut board = Board::empty();
    for color in Color::BOTH {
        for (col, make) in BACK_RANK.iter().enumerate() {
            board.place(Square(color.back_row(), col), make(color));
            board.place(Square(color.pawn_start_row(), col), Piece::pawn(color));
        }
    }
    board
});

/// The 8x8 grid of cells plus the most recently applied move.
///
/// Every piece lives by value inside its cell, so `clone` produces a fully
/// independent position; the legality oracle relies on this.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    pub(crate) last_move: Option<Move>,
}

impl Board {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        STARTING_POSITION.clone()
    }

    /// A board with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        let mut cells = [[Cell::new(Square(0, 0), None); BOARD_SIZE]; BOARD_SIZE];
        for sq in Square::all() {
            cells[sq.row()][sq.col()] = Cell::new(sq, None);
        }
        Board {
            cells,
            last_move: None,
        }
    }

    /// # Panics
    ///
    /// Panics if `sq` is off the board.
    #[inline]
    #[must_use]
    pub fn cell(&self, sq: Square) -> &Cell {
        &self.cells[sq.row()][sq.col()]
    }

    #[inline]
    pub(crate) fn cell_mut(&mut self, sq: Square) -> &mut Cell {
        &mut self.cells[sq.row()][sq.col()]
    }

    /// The piece on `sq`; `None` when empty or off the board.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        if !sq.is_on_board() {
            return None;
        }
        self.cell(sq).piece()
    }

    /// # Panics
    ///
    /// Panics if `sq` is off the board.
    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.cell(sq).is_empty()
    }

    /// The most recently applied move, `None` before the first move.
    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Put a piece on a square, replacing any occupant.
    pub(crate) fn place(&mut self, sq: Square, piece: Piece) {
        self.cell_mut(sq).set(piece);
    }

    pub(crate) fn clear(&mut self, sq: Square) -> Option<Piece> {
        self.cell_mut(sq).take()
    }

    /// Squares holding a piece of `color`, in row-major order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| {
            self.piece_at(sq)
                .filter(|p| p.color() == color)
                .map(|p| (sq, p))
        })
    }

    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|(_, p)| p.is_king())
            .map(|(sq, _)| sq)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
