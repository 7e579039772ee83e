//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let board = Board::new();
//! assert_eq!(board.all_legal_moves(Color::White).len(), 20);
//! ```

pub use super::{
    Board, BoardBuilder, Cell, Color, Move, MoveError, MoveFilter, MoveList, Piece, PieceKind,
    Square, SquareError,
};
