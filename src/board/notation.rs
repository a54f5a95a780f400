//! Move notation parsing.
//!
//! Accepted grammar (case-sensitive):
//!
//! ```text
//! normal := piece? fromFile? fromRank? 'x'? toFile toRank ('=' promoPiece)?
//! castle := "O-O" | "O-O-O"
//! ```
//!
//! The piece defaults to a pawn. Origin file and rank may each be left
//! out; resolution against a game fills them in.
//!
//! # Examples
//! ```
//! use chess_rules::board::{extract_move, Army, PieceKind};
//!
//! let mv = extract_move("Nbd7", Army::Black).unwrap();
//! assert_eq!(mv.symbol(), PieceKind::Knight);
//! assert!(!mv.is_from_file_optional());
//! assert!(mv.is_from_rank_optional());
//! ```

use std::fmt;

use super::error::NotationError;
use super::{king_home, Army, CastleSide, PieceKind, Position};

/// A coordinate that notation may or may not name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Partial<T> {
    Known(T),
    Unspecified,
}

impl<T: Copy + PartialEq> Partial<T> {
    #[inline]
    #[must_use]
    pub fn is_unspecified(&self) -> bool {
        matches!(self, Partial::Unspecified)
    }

    #[inline]
    #[must_use]
    pub fn known(&self) -> Option<T> {
        match self {
            Partial::Known(value) => Some(*value),
            Partial::Unspecified => None,
        }
    }

    /// Unspecified matches everything.
    #[inline]
    #[must_use]
    pub fn admits(&self, value: T) -> bool {
        match self {
            Partial::Known(known) => *known == value,
            Partial::Unspecified => true,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Partial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Partial::Known(value) => write!(f, "{value}"),
            Partial::Unspecified => Ok(()),
        }
    }
}

/// A move as written, before it is resolved against a game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractedMove {
    notation: String,
    symbol: PieceKind,
    from_file: Partial<char>,
    from_rank: Partial<u8>,
    to: Position,
    capture: bool,
    promotion: Option<PieceKind>,
    castle: Option<CastleSide>,
}

impl ExtractedMove {
    /// Text the move was parsed from
    #[must_use]
    pub fn notation(&self) -> &str {
        &self.notation
    }

    #[must_use]
    pub fn symbol(&self) -> PieceKind {
        self.symbol
    }

    #[must_use]
    pub fn from_file(&self) -> Partial<char> {
        self.from_file
    }

    #[must_use]
    pub fn from_rank(&self) -> Partial<u8> {
        self.from_rank
    }

    #[must_use]
    pub fn to(&self) -> Position {
        self.to
    }

    #[must_use]
    pub fn is_capture(&self) -> bool {
        self.capture
    }

    #[must_use]
    pub fn promotion(&self) -> Option<PieceKind> {
        self.promotion
    }

    /// Castle side for `O-O` / `O-O-O`.
    #[must_use]
    pub fn castle(&self) -> Option<CastleSide> {
        self.castle
    }

    #[must_use]
    pub fn is_from_file_optional(&self) -> bool {
        self.from_file.is_unspecified()
    }

    #[must_use]
    pub fn is_from_rank_optional(&self) -> bool {
        self.from_rank.is_unspecified()
    }

    /// Every origin square consistent with the named file and rank.
    pub fn candidate_origins(&self) -> impl Iterator<Item = Position> + '_ {
        Position::all()
            .filter(|pos| self.from_file.admits(pos.file()) && self.from_rank.admits(pos.rank()))
    }
}

/// Parse move notation for the army about to move.
///
/// The army only matters for castles, whose origin and destination depend
/// on the mover's home rank.
pub fn extract_move(notation: &str, army: Army) -> Result<ExtractedMove, NotationError> {
    if notation.is_empty() {
        return Err(NotationError::Empty);
    }
    if let Some(side) = parse_castle(notation) {
        let from = king_home(army);
        let to = Position::new(side.king_file(), army.home_rank())
            .map_err(|_| malformed(notation))?;
        return Ok(ExtractedMove {
            notation: notation.to_string(),
            symbol: PieceKind::King,
            from_file: Partial::Known(from.file()),
            from_rank: Partial::Known(from.rank()),
            to,
            capture: false,
            promotion: None,
            castle: Some(side),
        });
    }

    let chars: Vec<char> = notation.chars().collect();
    let mut rest = chars.as_slice();

    let mut promotion = None;
    if let [head @ .., '=', promo] = rest {
        promotion = Some(PieceKind::from_symbol(*promo).ok_or_else(|| malformed(notation))?);
        rest = head;
    }

    let [head @ .., file, rank] = rest else {
        return Err(malformed(notation));
    };
    let to = parse_square(*file, *rank).ok_or_else(|| malformed(notation))?;
    rest = head;

    let mut capture = false;
    if let [head @ .., 'x'] = rest {
        capture = true;
        rest = head;
    }

    let mut prefix = rest.iter().copied().peekable();
    let symbol = match prefix.next_if(char::is_ascii_uppercase) {
        Some(c) => PieceKind::from_symbol(c).ok_or_else(|| malformed(notation))?,
        None => PieceKind::Pawn,
    };
    let from_file = match prefix.next_if(|c| ('a'..='h').contains(c)) {
        Some(c) => Partial::Known(c),
        None => Partial::Unspecified,
    };
    let from_rank = match prefix.next_if(|c| ('1'..='8').contains(c)) {
        Some(c) => Partial::Known(c as u8 - b'0'),
        None => Partial::Unspecified,
    };
    if prefix.next().is_some() {
        return Err(malformed(notation));
    }

    Ok(ExtractedMove {
        notation: notation.to_string(),
        symbol,
        from_file,
        from_rank,
        to,
        capture,
        promotion,
        castle: None,
    })
}

fn parse_castle(notation: &str) -> Option<CastleSide> {
    match notation {
        "O-O" => Some(CastleSide::Short),
        "O-O-O" => Some(CastleSide::Long),
        _ => None,
    }
}

fn parse_square(file: char, rank: char) -> Option<Position> {
    let rank = rank.to_digit(10)?;
    Position::new(file, u8::try_from(rank).ok()?).ok()
}

fn malformed(notation: &str) -> NotationError {
    NotationError::Malformed {
        notation: notation.to_string(),
    }
}
