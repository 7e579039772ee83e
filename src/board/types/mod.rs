//! Core chess types.
//!
//! This module contains the value types the board is built from:
//! - `Color`, `PieceKind` and `Piece` - pieces and their per-kind state
//! - `Square` - a (row, col) coordinate with range checks
//! - `Move` and `MoveList` - move representation

mod moves;
mod piece;
mod square;

pub use moves::{Move, MoveList};
pub use piece::{Color, Piece, PieceKind};
pub use square::{Square, BOARD_SIZE};
