//! Board representation and per-piece movement rules.
//!
//! The board is an immutable 64-slot value: placing, removing and applying
//! a move all return a new board. Piece legality here is purely geometric;
//! king safety and history-dependent rules live in [`crate::game`].
//!
//! # Example
//! ```
//! use chess_rules::board::{Army, Board, Move, Piece, PieceKind, Position};
//!
//! let board = Board::starting();
//! let e2: Position = "e2".parse().unwrap();
//! let e4: Position = "e4".parse().unwrap();
//! let next = board.apply_move(&Move::new(PieceKind::Pawn, e2, e4));
//! assert_eq!(next.get(e4), Some(Piece::Pawn(Army::White)));
//! assert_eq!(next.get(e2), None);
//! ```

mod attacks;
mod builder;
mod error;
mod layout;
mod make_move;
mod movement;
mod notation;
pub mod prelude;
mod state;
mod types;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{LayoutError, MoveError, NotationError, PositionError};
pub use layout::LAYOUT_LEN;
pub use movement::{is_capture_consistent, is_diagonal_path_clear, is_straight_path_clear};
pub use notation::{extract_move, ExtractedMove, Partial};
pub use state::Board;
pub use types::{
    king_home, rook_home, Army, CastleSide, Move, MoveKind, Piece, PieceKind, Position,
};

pub(crate) use make_move::en_passant_victim;
pub(crate) use types::PROMOTION_PIECES;
