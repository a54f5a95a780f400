//! Resolved move type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Army, PieceKind};
use super::position::Position;

/// Determines the extra board updates a move performs when applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    Normal,
    Castle,
    EnPassant,
}

/// Which rook a castle uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    /// `O-O`, king to the g-file
    Short,
    /// `O-O-O`, king to the c-file
    Long,
}

impl CastleSide {
    /// File the king lands on
    #[inline]
    #[must_use]
    pub const fn king_file(self) -> char {
        match self {
            CastleSide::Short => 'g',
            CastleSide::Long => 'c',
        }
    }

    /// Corner file the rook starts from
    #[inline]
    #[must_use]
    pub const fn rook_file(self) -> char {
        match self {
            CastleSide::Short => 'h',
            CastleSide::Long => 'a',
        }
    }

    /// File the rook lands on, next to the king
    #[inline]
    #[must_use]
    pub const fn rook_target_file(self) -> char {
        match self {
            CastleSide::Short => 'f',
            CastleSide::Long => 'd',
        }
    }

    /// Castle side for a king destination file, if it is one.
    #[must_use]
    pub const fn from_king_file(file: char) -> Option<Self> {
        match file {
            'g' => Some(CastleSide::Short),
            'c' => Some(CastleSide::Long),
            _ => None,
        }
    }

    #[must_use]
    pub const fn notation(self) -> &'static str {
        match self {
            CastleSide::Short => "O-O",
            CastleSide::Long => "O-O-O",
        }
    }
}

/// Home square of an army's king (e1 / e8).
#[must_use]
pub const fn king_home(army: Army) -> Position {
    Position::from_index((army.home_rank() as usize - 1) * 8 + 4)
}

/// Corner square of the rook used by a castle.
#[must_use]
pub const fn rook_home(army: Army, side: CastleSide) -> Position {
    let file = side.rook_file() as usize - 'a' as usize;
    Position::from_index((army.home_rank() as usize - 1) * 8 + file)
}

/// A fully qualified move.
///
/// Values of this type are produced by move resolution against a specific
/// board and history; only such moves may be applied to a board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    symbol: PieceKind,
    from: Position,
    to: Position,
    capture: bool,
    promotion: Option<PieceKind>,
    kind: MoveKind,
}

impl Move {
    /// Create a non-capturing normal move
    #[must_use]
    pub const fn new(symbol: PieceKind, from: Position, to: Position) -> Self {
        Move {
            symbol,
            from,
            to,
            capture: false,
            promotion: None,
            kind: MoveKind::Normal,
        }
    }

    /// Create a castle for `army` on `side`
    #[must_use]
    pub fn castle(army: Army, side: CastleSide) -> Self {
        let from = king_home(army);
        let file = side.king_file() as usize - 'a' as usize;
        let to = Position::from_index(from.index() - 4 + file);
        Move::new(PieceKind::King, from, to).with_kind(MoveKind::Castle)
    }

    #[must_use]
    pub const fn with_capture(mut self, capture: bool) -> Self {
        self.capture = capture;
        self
    }

    #[must_use]
    pub const fn with_promotion(mut self, promotion: Option<PieceKind>) -> Self {
        self.promotion = promotion;
        self
    }

    #[must_use]
    pub const fn with_kind(mut self, kind: MoveKind) -> Self {
        self.kind = kind;
        self
    }

    /// Piece type that moves
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> PieceKind {
        self.symbol
    }

    #[inline]
    #[must_use]
    pub const fn from(self) -> Position {
        self.from
    }

    #[inline]
    #[must_use]
    pub const fn to(self) -> Position {
        self.to
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.capture
    }

    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<PieceKind> {
        self.promotion
    }

    #[inline]
    #[must_use]
    pub const fn kind(self) -> MoveKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn is_castle(self) -> bool {
        matches!(self.kind, MoveKind::Castle)
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        matches!(self.kind, MoveKind::EnPassant)
    }

    #[inline]
    #[must_use]
    pub const fn is_pawn_move(self) -> bool {
        matches!(self.symbol, PieceKind::Pawn)
    }

    /// Returns true for a pawn advancing two ranks
    #[must_use]
    pub const fn is_double_pawn_push(self) -> bool {
        self.is_pawn_move()
            && self.from.file_index() == self.to.file_index()
            && (self.to.rank_index() - self.from.rank_index()).abs() == 2
    }

    /// Castle side, for castles.
    #[must_use]
    pub const fn castle_side(self) -> Option<CastleSide> {
        if self.is_castle() {
            CastleSide::from_king_file(self.to.file())
        } else {
            None
        }
    }

    /// Field-wise change in (file, rank) from origin to destination
    #[inline]
    #[must_use]
    pub(crate) const fn delta(self) -> (i8, i8) {
        (
            self.to.file_index() - self.from.file_index(),
            self.to.rank_index() - self.from.rank_index(),
        )
    }
}

impl fmt::Display for Move {
    /// Canonical notation: castles as `O-O`/`O-O-O`, everything else with
    /// the full origin square, e.g. `Pe2e4`, `Pf4xg5`, `Pg7g8=Q`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(side) = self.castle_side() {
            return write!(f, "{}", side.notation());
        }
        write!(f, "{}{}", self.symbol, self.from)?;
        if self.capture {
            write!(f, "x")?;
        }
        write!(f, "{}", self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "={promo}")?;
        }
        Ok(())
    }
}
