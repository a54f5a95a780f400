use super::{rook_home, Army, Board, Move, MoveKind, Piece, Position};

impl Board {
    /// Apply a resolved move and return the resulting board.
    ///
    /// The piece on the origin moves to the destination, becoming the
    /// promotion piece if one is named. Castles also bring the rook next to
    /// the king; en passant also lifts the pawn behind the destination.
    ///
    /// # Panics
    /// Panics if the origin square is empty. Moves must come from
    /// resolution, which never produces such a move.
    #[must_use]
    pub fn apply_move(&self, mv: &Move) -> Board {
        let Some(piece) = self.get(mv.from()) else {
            panic!("apply_move: no piece on {} for move {mv}", mv.from());
        };
        let army = piece.army();
        let placed = mv
            .promotion()
            .map_or(piece, |kind| Piece::new(kind, army));

        let mut next = self.remove(mv.from()).place(mv.to(), placed);

        match mv.kind() {
            MoveKind::Normal => {}
            MoveKind::Castle => {
                if let Some(side) = mv.castle_side() {
                    let rook_from = rook_home(army, side);
                    let rook_to = rook_from
                        .offset(side.rook_target_file() as i8 - side.rook_file() as i8, 0)
                        .unwrap_or(rook_from);
                    if let Some(rook) = next.get(rook_from) {
                        next = next.remove(rook_from).place(rook_to, rook);
                    }
                }
            }
            MoveKind::EnPassant => {
                if let Some(captured) = en_passant_victim(mv.to(), army) {
                    next = next.remove(captured);
                }
            }
        }

        #[cfg(feature = "logging")]
        log::trace!("applied {mv}: {next}");

        next
    }
}

/// Square of the pawn taken by an en passant capture landing on `to`.
pub(crate) fn en_passant_victim(to: Position, attacker: Army) -> Option<Position> {
    to.offset(0, -attacker.pawn_direction())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{CastleSide, PieceKind};

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn test_normal_move() {
        let board = Board::starting();
        let mv = Move::new(PieceKind::Pawn, pos("e2"), pos("e4"));
        let next = board.apply_move(&mv);
        assert_eq!(next.get(pos("e4")), Some(Piece::Pawn(Army::White)));
        assert_eq!(next.get(pos("e2")), None);
        // the original is untouched
        assert_eq!(board.get(pos("e2")), Some(Piece::Pawn(Army::White)));
    }

    #[test]
    fn test_capture_replaces_occupant() {
        let board = Board::empty()
            .place(pos("d4"), Piece::Bishop(Army::White))
            .place(pos("g7"), Piece::Rook(Army::Black));
        let mv = Move::new(PieceKind::Bishop, pos("d4"), pos("g7")).with_capture(true);
        let next = board.apply_move(&mv);
        assert_eq!(next.get(pos("g7")), Some(Piece::Bishop(Army::White)));
        assert_eq!(next.pieces().count(), 1);
    }

    #[test]
    fn test_promotion() {
        let board = Board::empty().place(pos("b2"), Piece::Pawn(Army::Black));
        let mv = Move::new(PieceKind::Pawn, pos("b2"), pos("b1"))
            .with_promotion(Some(PieceKind::Knight));
        let next = board.apply_move(&mv);
        assert_eq!(next.get(pos("b1")), Some(Piece::Knight(Army::Black)));
    }

    #[test]
    fn test_castle_short_moves_rook() {
        let board = Board::empty()
            .place(pos("e1"), Piece::King(Army::White))
            .place(pos("h1"), Piece::Rook(Army::White));
        let next = board.apply_move(&Move::castle(Army::White, CastleSide::Short));
        assert_eq!(next.get(pos("g1")), Some(Piece::King(Army::White)));
        assert_eq!(next.get(pos("f1")), Some(Piece::Rook(Army::White)));
        assert_eq!(next.get(pos("h1")), None);
        assert_eq!(next.get(pos("e1")), None);
    }

    #[test]
    fn test_castle_long_moves_rook() {
        let board = Board::empty()
            .place(pos("e8"), Piece::King(Army::Black))
            .place(pos("a8"), Piece::Rook(Army::Black));
        let next = board.apply_move(&Move::castle(Army::Black, CastleSide::Long));
        assert_eq!(next.get(pos("c8")), Some(Piece::King(Army::Black)));
        assert_eq!(next.get(pos("d8")), Some(Piece::Rook(Army::Black)));
        assert_eq!(next.get(pos("a8")), None);
    }

    #[test]
    fn test_en_passant_removes_pawn_behind() {
        let white = Board::empty()
            .place(pos("e5"), Piece::Pawn(Army::White))
            .place(pos("d5"), Piece::Pawn(Army::Black));
        let mv = Move::new(PieceKind::Pawn, pos("e5"), pos("d6"))
            .with_capture(true)
            .with_kind(MoveKind::EnPassant);
        let next = white.apply_move(&mv);
        assert_eq!(next.get(pos("d6")), Some(Piece::Pawn(Army::White)));
        assert_eq!(next.get(pos("d5")), None);

        let black = Board::empty()
            .place(pos("c4"), Piece::Pawn(Army::Black))
            .place(pos("b4"), Piece::Pawn(Army::White));
        let mv = Move::new(PieceKind::Pawn, pos("c4"), pos("b3"))
            .with_capture(true)
            .with_kind(MoveKind::EnPassant);
        let next = black.apply_move(&mv);
        assert_eq!(next.get(pos("b3")), Some(Piece::Pawn(Army::Black)));
        assert_eq!(next.get(pos("b4")), None);
    }

    #[test]
    #[should_panic(expected = "no piece on e4")]
    fn test_empty_origin_panics() {
        let mv = Move::new(PieceKind::Pawn, pos("e4"), pos("e5"));
        let _ = Board::starting().apply_move(&mv);
    }
}
