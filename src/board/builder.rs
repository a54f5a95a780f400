//! Fluent builder for constructing boards.
//!
//! Allows creating positions piece by piece rather than writing out a
//! 64-character layout.
//!
//! # Example
//! ```
//! use chess_rules::board::{Army, BoardBuilder, Piece};
//!
//! let board = BoardBuilder::new()
//!     .piece("e1", Piece::King(Army::White))
//!     .piece("e8", Piece::King(Army::Black))
//!     .piece("a2", Piece::Pawn(Army::White))
//!     .build()
//!     .unwrap();
//! assert_eq!(board.pieces().count(), 3);
//! ```

use super::error::PositionError;
use super::{Board, Piece, Position};

/// A fluent builder for `Board` values.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(String, Option<Piece>)>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a builder for an empty board.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let pieces = Board::starting()
            .pieces()
            .map(|(pos, piece)| (pos.to_string(), Some(piece)))
            .collect();
        BoardBuilder { pieces }
    }

    /// Place a piece on a square given in algebraic form (`"e4"`),
    /// replacing any earlier placement there.
    #[must_use]
    pub fn piece(mut self, square: &str, piece: Piece) -> Self {
        self.pieces.push((square.to_string(), Some(piece)));
        self
    }

    /// Empty a square.
    #[must_use]
    pub fn clear(mut self, square: &str) -> Self {
        self.pieces.push((square.to_string(), None));
        self
    }

    /// Build the board, failing on the first invalid square name.
    pub fn build(self) -> Result<Board, PositionError> {
        self.pieces
            .into_iter()
            .try_fold(Board::empty(), |board, (square, piece)| {
                let pos: Position = square.parse()?;
                Ok(match piece {
                    Some(piece) => board.place(pos, piece),
                    None => board.remove(pos),
                })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Army;

    #[test]
    fn test_starting_position_builder() {
        let board = BoardBuilder::starting_position().build().unwrap();
        assert_eq!(board, Board::starting());
    }

    #[test]
    fn test_later_placements_win() {
        let board = BoardBuilder::new()
            .piece("d4", Piece::Rook(Army::White))
            .piece("d4", Piece::Bishop(Army::Black))
            .build()
            .unwrap();
        assert_eq!(
            board.get("d4".parse().unwrap()),
            Some(Piece::Bishop(Army::Black))
        );
    }

    #[test]
    fn test_clear() {
        let board = BoardBuilder::starting_position()
            .clear("b1")
            .clear("c1")
            .build()
            .unwrap();
        assert_eq!(board.pieces().count(), 30);
    }

    #[test]
    fn test_invalid_square() {
        let result = BoardBuilder::new()
            .piece("z9", Piece::King(Army::White))
            .build();
        assert!(matches!(result, Err(PositionError::InvalidNotation { .. })));
    }
}
