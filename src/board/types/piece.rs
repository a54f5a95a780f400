//! Piece and army types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Piece type tag, as written in move notation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// All piece kinds
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Parse a notation symbol (`P`, `R`, `N`, `B`, `Q`, `K`). Case-sensitive.
    #[must_use]
    pub const fn from_symbol(c: char) -> Option<PieceKind> {
        match c {
            'P' => Some(PieceKind::Pawn),
            'R' => Some(PieceKind::Rook),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Uppercase notation symbol
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Rook => 'R',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Returns true if a pawn may promote to this kind
    #[inline]
    #[must_use]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
        )
    }

    /// Returns true if this piece moves along lines (Bishop, Rook, Queen)
    #[inline]
    #[must_use]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Promotion choices in order of typical preference (queen first)
pub(crate) const PROMOTION_PIECES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// One of the two sides.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Army {
    White,
    Black,
}

impl Army {
    /// Both armies, White first
    pub const BOTH: [Army; 2] = [Army::White, Army::Black];

    /// Returns the other army
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Army {
        match self {
            Army::White => Army::Black,
            Army::Black => Army::White,
        }
    }

    /// Rank holding this army's king and rooks at the start (1 or 8)
    #[inline]
    #[must_use]
    pub const fn home_rank(self) -> u8 {
        match self {
            Army::White => 1,
            Army::Black => 8,
        }
    }

    /// Pawn forward direction (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Army::White => 1,
            Army::Black => -1,
        }
    }

    /// Pawn starting rank (2 for White, 7 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_start_rank(self) -> u8 {
        match self {
            Army::White => 2,
            Army::Black => 7,
        }
    }

    /// Pawn promotion rank (8 for White, 1 for Black)
    #[inline]
    #[must_use]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Army::White => 8,
            Army::Black => 1,
        }
    }

    /// Rank a pawn must stand on to capture en passant (5 for White, 4 for Black)
    #[inline]
    #[must_use]
    pub const fn en_passant_rank(self) -> u8 {
        match self {
            Army::White => 5,
            Army::Black => 4,
        }
    }
}

impl fmt::Display for Army {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Army::White => write!(f, "White"),
            Army::Black => write!(f, "Black"),
        }
    }
}

/// A piece on the board. Each variant carries the army it belongs to;
/// the square it stands on is implied by the board slot.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    Pawn(Army),
    Rook(Army),
    Knight(Army),
    Bishop(Army),
    Queen(Army),
    King(Army),
}

impl Piece {
    #[must_use]
    pub const fn new(kind: PieceKind, army: Army) -> Piece {
        match kind {
            PieceKind::Pawn => Piece::Pawn(army),
            PieceKind::Rook => Piece::Rook(army),
            PieceKind::Knight => Piece::Knight(army),
            PieceKind::Bishop => Piece::Bishop(army),
            PieceKind::Queen => Piece::Queen(army),
            PieceKind::King => Piece::King(army),
        }
    }

    #[inline]
    #[must_use]
    pub const fn kind(self) -> PieceKind {
        match self {
            Piece::Pawn(_) => PieceKind::Pawn,
            Piece::Rook(_) => PieceKind::Rook,
            Piece::Knight(_) => PieceKind::Knight,
            Piece::Bishop(_) => PieceKind::Bishop,
            Piece::Queen(_) => PieceKind::Queen,
            Piece::King(_) => PieceKind::King,
        }
    }

    #[inline]
    #[must_use]
    pub const fn army(self) -> Army {
        match self {
            Piece::Pawn(army)
            | Piece::Rook(army)
            | Piece::Knight(army)
            | Piece::Bishop(army)
            | Piece::Queen(army)
            | Piece::King(army) => army,
        }
    }

    /// Layout character: uppercase for White, lowercase for Black.
    #[must_use]
    pub fn to_layout_char(self) -> char {
        let c = self.kind().symbol();
        match self.army() {
            Army::White => c,
            Army::Black => c.to_ascii_lowercase(),
        }
    }

    /// Parse a layout character (`PRNBQK` White, `prnbqk` Black).
    #[must_use]
    pub fn from_layout_char(c: char) -> Option<Piece> {
        let army = if c.is_ascii_uppercase() {
            Army::White
        } else {
            Army::Black
        };
        PieceKind::from_symbol(c.to_ascii_uppercase()).map(|kind| Piece::new(kind, army))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_layout_char())
    }
}
