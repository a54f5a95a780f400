use super::super::make_move::en_passant_victim;
use super::super::{Army, Board, Move, Piece};

pub(super) fn is_valid_pawn_move(board: &Board, mv: &Move, army: Army) -> bool {
    let dir = army.pawn_direction();
    let (df, dr) = mv.delta();
    let target = board.get(mv.to());

    match (df.abs(), dr) {
        (0, r) if r == dir => target.is_none(),
        (0, r) if r == 2 * dir => {
            mv.from().rank() == army.pawn_start_rank()
                && target.is_none()
                && mv
                    .from()
                    .offset(0, dir)
                    .is_some_and(|between| !board.is_occupied(between))
        }
        (1, r) if r == dir => target.is_some_and(|piece| piece.army() != army),
        _ => false,
    }
}

pub(super) fn is_valid_en_passant(board: &Board, mv: &Move, army: Army) -> bool {
    let (df, dr) = mv.delta();
    if df.abs() != 1 || dr != army.pawn_direction() {
        return false;
    }
    if mv.from().rank() != army.en_passant_rank() || board.is_occupied(mv.to()) {
        return false;
    }
    en_passant_victim(mv.to(), army)
        .and_then(|behind| board.get(behind))
        .is_some_and(|piece| piece == Piece::Pawn(army.opposite()))
}
