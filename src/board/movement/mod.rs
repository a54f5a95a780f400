//! Geometric move legality, one rule per piece.
//!
//! These predicates look only at the origin, the destination and board
//! occupancy. Whether a move leaves the mover's own king attacked is
//! decided on top of them during move resolution.

mod kings;
mod knights;
mod pawns;
mod sliders;

pub use sliders::{is_diagonal_path_clear, is_straight_path_clear};

use super::{Army, Board, Move, Piece};

/// The move's capture flag and promotion agree with the board.
///
/// The capture flag must be set exactly when the destination holds an
/// enemy piece. A pawn landing on its last rank must name a promotion
/// (queen, rook, bishop or knight) and no other move may name one.
#[must_use]
pub fn is_capture_consistent(board: &Board, mv: &Move, army: Army) -> bool {
    let captures = board
        .get(mv.to())
        .is_some_and(|occupant| occupant.army() != army);
    if mv.is_capture() != captures {
        return false;
    }
    let reaches_last_rank = mv.is_pawn_move() && mv.to().rank() == army.promotion_rank();
    match mv.promotion() {
        Some(kind) => reaches_last_rank && kind.is_promotion_target(),
        None => !reaches_last_rank,
    }
}

impl Piece {
    /// Can this piece make `mv` on `board`, judged by geometry and
    /// occupancy alone?
    ///
    /// A destination held by the mover's own army is never valid.
    #[must_use]
    pub fn is_valid_move(&self, board: &Board, mv: &Move) -> bool {
        if mv.from() == mv.to() {
            return false;
        }
        if board
            .get(mv.to())
            .is_some_and(|occupant| occupant.army() == self.army())
        {
            return false;
        }

        match *self {
            Piece::Pawn(army) => pawns::is_valid_pawn_move(board, mv, army),
            Piece::Rook(_) => is_straight_path_clear(board, mv.from(), mv.to()),
            Piece::Bishop(_) => is_diagonal_path_clear(board, mv.from(), mv.to()),
            Piece::Queen(_) => {
                is_straight_path_clear(board, mv.from(), mv.to())
                    || is_diagonal_path_clear(board, mv.from(), mv.to())
            }
            Piece::Knight(_) => knights::is_valid_knight_move(mv),
            Piece::King(_) => kings::is_valid_king_move(mv),
        }
    }

    /// En passant geometry: a pawn stepping diagonally forward from its
    /// fifth rank onto an empty square with an enemy pawn behind it.
    #[must_use]
    pub fn is_valid_en_passant(&self, board: &Board, mv: &Move) -> bool {
        match *self {
            Piece::Pawn(army) => pawns::is_valid_en_passant(board, mv, army),
            _ => false,
        }
    }

    /// Castle geometry: king from its home square to the c- or g-file with
    /// an own rook in that corner and nothing in between.
    #[must_use]
    pub fn is_valid_castle(&self, board: &Board, mv: &Move) -> bool {
        match *self {
            Piece::King(army) => kings::is_valid_castle(board, mv, army),
            _ => false,
        }
    }
}
