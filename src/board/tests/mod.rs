//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-kind move generation
//! - `make_move.rs` - Move application and special moves
//! - `legality.rs` - Self-check filtering
//! - `edge_cases.rs` - Special positions and edge cases
//! - `proptest.rs` - Property-based tests

mod proptest;

use crate::board::{Board, Move, Square};

/// Legal move of the piece on `from` landing on `to`.
fn find_move(board: &Board, from: Square, to: Square) -> Move {
    board
        .legal_moves(from)
        .find_to(to)
        .unwrap_or_else(|| panic!("Expected move {from}{to} not found"))
}

/// Sorted destinations of the legal moves of the piece on `from`.
fn destinations(board: &Board, from: Square) -> Vec<Square> {
    let mut squares = board.legal_moves(from).destinations();
    squares.sort_by_key(|sq| (sq.row(), sq.col()));
    squares
}
