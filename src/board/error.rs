//! Error types for chess board operations.

use std::fmt;

use super::Square;

/// Error type for out-of-range coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row or column outside 0-7
    OutOfRange { row: usize, col: usize },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::OutOfRange { row, col } => {
                write!(f, "Square ({row}, {col}) out of bounds (must be 0-7)")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for rejected move applications
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The origin or destination lies off the board
    OffBoard { square: Square },
    /// No piece stands on the origin square
    EmptySquare { square: Square },
    /// The move is not among the piece's current legal moves
    IllegalMove { from: Square, to: Square },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OffBoard { square } => {
                write!(f, "Square {square} is off the board")
            }
            MoveError::EmptySquare { square } => {
                write!(f, "No piece on {square}")
            }
            MoveError::IllegalMove { from, to } => {
                write!(f, "Illegal move '{from}{to}'")
            }
        }
    }
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_error_out_of_range() {
        let err = SquareError::OutOfRange { row: 9, col: 2 };
        assert!(err.to_string().contains('9'));
        assert!(err.to_string().contains('2'));
    }

    #[test]
    fn test_move_error_empty_square() {
        let err = MoveError::EmptySquare {
            square: Square(4, 4),
        };
        assert!(err.to_string().contains("e4"));
    }

    #[test]
    fn test_move_error_illegal_move() {
        let err = MoveError::IllegalMove {
            from: Square(6, 4),
            to: Square(3, 4),
        };
        assert!(err.to_string().contains("e2e5"));
    }

    #[test]
    fn test_move_error_off_board() {
        let err = MoveError::OffBoard {
            square: Square(8, 0),
        };
        assert_eq!(err.to_string(), "Square (8, 0) is off the board");
    }

    #[test]
    fn test_error_clone() {
        let err = MoveError::EmptySquare {
            square: Square(0, 0),
        };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
