//! Attacker enumeration.
//!
//! A square is attacked by an army when one of its pieces could capture a
//! piece standing there with an ordinary move. King safety of the attacker
//! is ignored, since these routines are what king safety is built on.

use super::{Army, Board, Move, Piece, PieceKind, Position};

impl Board {
    /// Squares of `army` pieces that attack `target`.
    ///
    /// The target is judged as if it held an enemy of `army`, so an empty
    /// square is attacked by a pawn that could capture onto it and a square
    /// holding one of `army`'s own pieces counts as defended.
    #[must_use]
    pub fn attackers(&self, target: Position, army: Army) -> Vec<Position> {
        let probe = self.place(target, Piece::King(army.opposite()));
        let attackers: Vec<Position> = self
            .pieces_of(army)
            .filter(|(from, _)| *from != target)
            .filter(|(from, piece)| {
                let mv = attack_move(*piece, *from, target, army);
                piece.is_valid_move(&probe, &mv)
            })
            .map(|(from, _)| from)
            .collect();

        #[cfg(feature = "logging")]
        if attackers.len() > 2 {
            log::warn!(
                "{} {army} pieces attack {target}; not reachable by legal play",
                attackers.len()
            );
        }

        attackers
    }

    /// Is `target` attacked by any piece of `army`?
    #[must_use]
    pub fn is_attacked(&self, target: Position, army: Army) -> bool {
        let probe = self.place(target, Piece::King(army.opposite()));
        self.pieces_of(army)
            .filter(|(from, _)| *from != target)
            .any(|(from, piece)| {
                piece.is_valid_move(&probe, &attack_move(piece, from, target, army))
            })
    }

    /// Is `army`'s king attacked? A board without that king is never in check.
    #[must_use]
    pub fn is_king_in_check(&self, army: Army) -> bool {
        self.king_position(army)
            .is_some_and(|king| self.is_attacked(king, army.opposite()))
    }
}

/// The capturing move a piece would make onto `target`.
fn attack_move(piece: Piece, from: Position, target: Position, army: Army) -> Move {
    let promotion = (piece.kind() == PieceKind::Pawn && target.rank() == army.promotion_rank())
        .then_some(PieceKind::Queen);
    Move::new(piece.kind(), from, target)
        .with_capture(true)
        .with_promotion(promotion)
}
