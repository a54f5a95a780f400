//! Board coordinates.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::PositionError;

/// A square on the board: file `'a'..='h'` and rank `1..=8`.
///
/// Stored as zero-based indices; both are always in range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    file: u8,
    rank: u8,
}

impl Position {
    /// Create a position from a file letter and a 1-based rank.
    pub fn new(file: char, rank: u8) -> Result<Self, PositionError> {
        if !('a'..='h').contains(&file) {
            return Err(PositionError::FileOutOfRange { file });
        }
        if !(1..=8).contains(&rank) {
            return Err(PositionError::RankOutOfRange { rank });
        }
        Ok(Position {
            file: file as u8 - b'a',
            rank: rank - 1,
        })
    }

    /// Create a position from zero-based file and rank indices.
    #[inline]
    #[must_use]
    pub const fn from_coords(file: i8, rank: i8) -> Option<Self> {
        if file >= 0 && file < 8 && rank >= 0 && rank < 8 {
            Some(Position {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    /// Create a position from its index (a1=0, b1=1, ..., h8=63).
    #[inline]
    #[must_use]
    pub(crate) const fn from_index(idx: usize) -> Self {
        debug_assert!(idx < 64);
        Position {
            file: (idx % 8) as u8,
            rank: (idx / 8) as u8,
        }
    }

    /// Index into a 64-slot array (a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    /// File letter `'a'..='h'`
    #[inline]
    #[must_use]
    pub const fn file(self) -> char {
        (b'a' + self.file) as char
    }

    /// Rank number `1..=8`
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank + 1
    }

    /// Zero-based file (0 = a)
    #[inline]
    #[must_use]
    pub const fn file_index(self) -> i8 {
        self.file as i8
    }

    /// Zero-based rank (0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank_index(self) -> i8 {
        self.rank as i8
    }

    /// The position `df` files and `dr` ranks away, if still on the board.
    #[inline]
    #[must_use]
    pub const fn offset(self, df: i8, dr: i8) -> Option<Self> {
        Position::from_coords(self.file_index() + df, self.rank_index() + dr)
    }

    /// All 64 positions, a1 first.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..64).map(Position::from_index)
    }

    /// The eight (or fewer, at the edge) surrounding positions.
    pub fn neighbours(self) -> impl Iterator<Item = Position> {
        const STEPS: [(i8, i8); 8] = [
            (-1, -1),
            (-1, 0),
            (-1, 1),
            (0, -1),
            (0, 1),
            (1, -1),
            (1, 0),
            (1, 1),
        ];
        STEPS
            .into_iter()
            .filter_map(move |(df, dr)| self.offset(df, dr))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.index().cmp(&other.index())
    }
}

impl TryFrom<(char, u8)> for Position {
    type Error = PositionError;

    fn try_from((file, rank): (char, u8)) -> Result<Self, Self::Error> {
        Position::new(file, rank)
    }
}

impl FromStr for Position {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PositionError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let rank = rank.to_digit(10).ok_or_else(invalid)? as u8;
        Position::new(file, rank).map_err(|_| invalid())
    }
}
