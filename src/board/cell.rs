//! A single board cell and its occupancy predicates.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Piece, Square};

/// A board cell: a fixed square holding zero or one piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    square: Square,
    piece: Option<Piece>,
}

impl Cell {
    #[must_use]
    pub const fn new(square: Square, piece: Option<Piece>) -> Self {
        Cell { square, piece }
    }

    #[inline]
    #[must_use]
    pub const fn square(&self) -> Square {
        self.square
    }

    #[inline]
    #[must_use]
    pub const fn piece(&self) -> Option<Piece> {
        self.piece
    }

    pub(crate) fn piece_mut(&mut self) -> Option<&mut Piece> {
        self.piece.as_mut()
    }

    /// Put `piece` here, overwriting any occupant.
    pub(crate) fn set(&mut self, piece: Piece) {
        self.piece = Some(piece);
    }

    /// Remove and return the occupant.
    pub(crate) fn take(&mut self) -> Option<Piece> {
        self.piece.take()
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.piece.is_none()
    }

    #[inline]
    #[must_use]
    pub const fn has_piece(&self) -> bool {
        self.piece.is_some()
    }

    /// Occupied by a piece of the color opposing `color`.
    #[inline]
    #[must_use]
    pub fn has_enemy_piece(&self, color: Color) -> bool {
        self.piece.is_some_and(|p| p.color() != color)
    }

    /// Occupied by a piece of `color`.
    #[inline]
    #[must_use]
    pub fn has_own_piece(&self, color: Color) -> bool {
        self.piece.is_some_and(|p| p.color() == color)
    }

    #[inline]
    #[must_use]
    pub fn is_empty_or_enemy(&self, color: Color) -> bool {
        self.is_empty() || self.has_enemy_piece(color)
    }
}
