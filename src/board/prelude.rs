//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let game = Game::new().play("e4").unwrap();
//! assert_eq!(game.turn(), Army::Black);
//! ```

pub use super::{
    extract_move, Army, Board, BoardBuilder, CastleSide, LayoutError, Move, MoveError, MoveKind,
    NotationError, Piece, PieceKind, Position, PositionError,
};
pub use crate::game::{Game, GameState};
