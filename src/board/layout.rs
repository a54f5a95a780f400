//! Flat 64-character board layout.
//!
//! One character per square, rank 8 down to rank 1 and file a to h within
//! each rank. Uppercase letters are White pieces, lowercase Black, and a
//! space marks an empty square.
//!
//! # Example
//! ```
//! use chess_rules::board::Board;
//!
//! let layout = Board::starting().to_layout();
//! assert!(layout.starts_with("rnbqkbnrpppppppp"));
//! assert_eq!(Board::from_layout(&layout).unwrap(), Board::starting());
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::LayoutError;
use super::{Board, Piece, Position};

/// Number of characters in a board layout
pub const LAYOUT_LEN: usize = 64;

/// Position of the `i`-th layout character (rank 8 first).
fn layout_position(i: usize) -> Position {
    let rank = 7 - i / 8;
    let file = i % 8;
    Position::from_index(rank * 8 + file)
}

impl Board {
    /// Parse a board from its 64-character layout.
    pub fn from_layout(layout: &str) -> Result<Self, LayoutError> {
        let len = layout.chars().count();
        if len != LAYOUT_LEN {
            return Err(LayoutError::InvalidLength { len });
        }

        let mut board = Board::empty();
        for (index, c) in layout.chars().enumerate() {
            if c == ' ' {
                continue;
            }
            let piece =
                Piece::from_layout_char(c).ok_or(LayoutError::InvalidPiece { char: c, index })?;
            board.squares[layout_position(index).index()] = Some(piece);
        }
        Ok(board)
    }

    /// Render the board as its 64-character layout.
    #[must_use]
    pub fn to_layout(&self) -> String {
        (0..LAYOUT_LEN)
            .map(|i| self.get(layout_position(i)).map_or(' ', Piece::to_layout_char))
            .collect()
    }
}

impl FromStr for Board {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_layout(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_layout())
    }
}
