//! Square coordinates and range checks.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Number of rows (and columns) on the board.
pub const BOARD_SIZE: usize = 8;

/// A square on the board, represented as (row, col).
///
/// Row 0 is Black's back rank and row 7 is White's back rank; column 0 is
/// the a-file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (row, col)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Square(row, col))
        } else {
            None
        }
    }

    /// Returns true if (row, col) lies on the board.
    #[inline]
    #[must_use]
    pub const fn in_range(row: isize, col: isize) -> bool {
        row >= 0 && row < BOARD_SIZE as isize && col >= 0 && col < BOARD_SIZE as isize
    }

    /// Returns true if both coordinates lie on the board.
    #[inline]
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.0 < BOARD_SIZE && self.1 < BOARD_SIZE
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    /// The square `d_row` rows and `d_col` columns away, if it is on the board.
    #[inline]
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Square> {
        let row = self.0 as isize + d_row;
        let col = self.1 as isize + d_col;
        if Square::in_range(row, col) {
            Some(Square(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Iterate all 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_on_board() {
            return write!(f, "({}, {})", self.0, self.1);
        }
        write!(f, "{}{}", (self.1 as u8 + b'a') as char, BOARD_SIZE - self.0)
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Square::new(row, col).ok_or(SquareError::OutOfRange { row, col })
    }
}
