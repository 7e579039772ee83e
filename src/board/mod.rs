//! Chess board representation and move legality.
//!
//! The board is an 8x8 grid of cells owning their pieces by value. Moves are
//! generated per piece, filtered by replaying each candidate on a scratch
//! copy and probing for a counter-capture of the mover's king, and applied
//! with the special rules (castling, en passant, promotion) in place.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Square};
//!
//! let mut board = Board::new();
//! let moves = board.legal_moves(Square(6, 4));
//! assert_eq!(moves.len(), 2);
//! board.play(&moves[1]).unwrap();
//! assert!(board.piece_at(Square(4, 4)).is_some());
//! ```

mod builder;
mod cell;
mod debug;
mod error;
mod legality;
mod make_move;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use cell::Cell;
pub use error::{MoveError, SquareError};
pub use movegen::MoveFilter;
pub use state::Board;
pub use types::{Color, Move, MoveList, Piece, PieceKind, Square, BOARD_SIZE};
