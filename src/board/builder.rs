//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece, including pieces that count as
//! already moved and a pawn that is en-passant eligible.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(7, 4), Piece::king(Color::White))
//!     .piece(Square(0, 4), Piece::king(Color::Black))
//!     .piece(Square(6, 0), Piece::pawn(Color::White))
//!     .build();
//! assert_eq!(board.legal_moves(Square(7, 4)).len(), 5);
//! ```

use super::state::BACK_RANK;
use super::{Board, Color, Piece, Square, BOARD_SIZE};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Piece)>,
    en_passant: Option<Square>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            en_passant: None,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        for color in Color::BOTH {
            for (col, make) in BACK_RANK.iter().enumerate() {
                builder
                    .pieces
                    .push((Square(color.back_row(), col), make(color)));
            }
            for col in 0..BOARD_SIZE {
                builder
                    .pieces
                    .push((Square(color.pawn_start_row(), col), Piece::pawn(color)));
            }
        }
        builder
    }

    /// Place a piece on the board, replacing any piece already there.
    #[must_use]
    pub fn piece(mut self, square: Square, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, piece));
        self
    }

    /// Place a piece that counts as having moved already.
    #[must_use]
    pub fn moved_piece(self, square: Square, piece: Piece) -> Self {
        self.piece(square, piece.with_moved(true))
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        if self.en_passant == Some(square) {
            self.en_passant = None;
        }
        self
    }

    /// Mark the pawn on `square` as en-passant eligible.
    ///
    /// Ignored at build time if no pawn ends up on that square.
    #[must_use]
    pub const fn en_passant(mut self, square: Square) -> Self {
        self.en_passant = Some(square);
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (square, piece) in self.pieces {
            board.place(square, piece);
        }
        if let Some(square) = self.en_passant {
            board.mark_en_passant_eligible(square);
        }
        board
    }
}
