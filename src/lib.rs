pub mod board;

pub use board::{Board, Color, Move, MoveFilter, Piece, PieceKind, Square};
