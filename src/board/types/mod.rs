//! Core chess types.
//!
//! - `Piece`, `PieceKind` and `Army` - pieces and sides
//! - `Position` - board coordinate
//! - `Move`, `MoveKind` and `CastleSide` - resolved moves

mod moves;
mod piece;
mod position;

pub use moves::{king_home, rook_home, CastleSide, Move, MoveKind};
pub use piece::{Army, Piece, PieceKind};
pub use position::Position;

pub(crate) use piece::PROMOTION_PIECES;
