//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors, White first
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Back rank row for this color (7 for White, 0 for Black)
    #[inline]
    #[must_use]
    pub const fn back_row(self) -> usize {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Pawn forward direction in rows (-1 for White, +1 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_direction(self) -> isize {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Pawn starting row (6 for White, 1 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_start_row(self) -> usize {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row a pawn of this color must stand on to capture en passant
    /// (3 for White, 4 for Black).
    #[inline]
    #[must_use]
    pub const fn en_passant_row(self) -> usize {
        match self {
            Color::White => 3,
            Color::Black => 4,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Piece kinds, carrying the state only some kinds need.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    /// `en_passant` is set only right after this pawn's two-square advance.
    Pawn { en_passant: bool },
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// A pawn that is not en-passant eligible.
    pub const PAWN: PieceKind = PieceKind::Pawn { en_passant: false };

    /// Convert kind to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn { .. } => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

/// A piece standing on the board.
///
/// Pieces are plain values; the board owns them by value inside its cells,
/// so cloning a board yields a fully independent position.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    color: Color,
    kind: PieceKind,
    moved: bool,
}

impl Piece {
    #[must_use]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Piece {
            color,
            kind,
            moved: false,
        }
    }

    #[must_use]
    pub const fn pawn(color: Color) -> Self {
        Piece::new(color, PieceKind::PAWN)
    }

    #[must_use]
    pub const fn knight(color: Color) -> Self {
        Piece::new(color, PieceKind::Knight)
    }

    #[must_use]
    pub const fn bishop(color: Color) -> Self {
        Piece::new(color, PieceKind::Bishop)
    }

    #[must_use]
    pub const fn rook(color: Color) -> Self {
        Piece::new(color, PieceKind::Rook)
    }

    #[must_use]
    pub const fn queen(color: Color) -> Self {
        Piece::new(color, PieceKind::Queen)
    }

    #[must_use]
    pub const fn king(color: Color) -> Self {
        Piece::new(color, PieceKind::King)
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }

    #[inline]
    #[must_use]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    /// Whether this piece has been moved at least once. Never reset.
    #[inline]
    #[must_use]
    pub const fn has_moved(self) -> bool {
        self.moved
    }

    pub(crate) fn mark_moved(&mut self) {
        self.moved = true;
    }

    /// Same piece with the moved flag forced to `moved`, for position setup.
    #[must_use]
    pub fn with_moved(mut self, moved: bool) -> Self {
        self.moved = moved;
        self
    }

    #[inline]
    #[must_use]
    pub const fn is_pawn(self) -> bool {
        matches!(self.kind, PieceKind::Pawn { .. })
    }

    #[inline]
    #[must_use]
    pub const fn is_rook(self) -> bool {
        matches!(self.kind, PieceKind::Rook)
    }

    #[inline]
    #[must_use]
    pub const fn is_king(self) -> bool {
        matches!(self.kind, PieceKind::King)
    }

    /// Pawn movement direction in rows; `None` for every other kind.
    #[inline]
    #[must_use]
    pub const fn direction(self) -> Option<isize> {
        match self.kind {
            PieceKind::Pawn { .. } => Some(self.color.pawn_direction()),
            _ => None,
        }
    }

    /// True only for a pawn whose en-passant flag is set.
    #[inline]
    #[must_use]
    pub const fn is_en_passant_eligible(self) -> bool {
        matches!(self.kind, PieceKind::Pawn { en_passant: true })
    }

    /// Set the en-passant flag. No effect on non-pawns.
    pub(crate) fn set_en_passant(&mut self, eligible: bool) {
        if let PieceKind::Pawn { en_passant } = &mut self.kind {
            *en_passant = eligible;
        }
    }

    /// Diagram character, uppercase for White
    #[must_use]
    pub fn symbol(self) -> char {
        let c = self.kind.to_char();
        if self.color == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
