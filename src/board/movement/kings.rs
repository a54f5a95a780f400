use super::super::{king_home, rook_home, Army, Board, CastleSide, Move, Piece, Position};

pub(super) fn is_valid_king_move(mv: &Move) -> bool {
    let (df, dr) = mv.delta();
    df.abs() <= 1 && dr.abs() <= 1 && (df, dr) != (0, 0)
}

pub(super) fn is_valid_castle(board: &Board, mv: &Move, army: Army) -> bool {
    if mv.from() != king_home(army) || mv.to().rank() != army.home_rank() {
        return false;
    }
    let Some(side) = CastleSide::from_king_file(mv.to().file()) else {
        return false;
    };
    let rook = rook_home(army, side);
    if board.get(rook) != Some(Piece::Rook(army)) {
        return false;
    }

    let step: i8 = if rook.file_index() > mv.from().file_index() {
        1
    } else {
        -1
    };
    let mut current: Option<Position> = mv.from().offset(step, 0);
    while let Some(pos) = current {
        if pos == rook {
            return true;
        }
        if board.is_occupied(pos) {
            return false;
        }
        current = pos.offset(step, 0);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PieceKind;

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    fn king_move(from: &str, to: &str) -> Move {
        Move::new(PieceKind::King, pos(from), pos(to))
    }

    #[test]
    fn test_king_steps() {
        assert!(is_valid_king_move(&king_move("e4", "e5")));
        assert!(is_valid_king_move(&king_move("e4", "d3")));
        assert!(!is_valid_king_move(&king_move("e4", "e6")));
        assert!(!is_valid_king_move(&king_move("e1", "g1")));
    }

    #[test]
    fn test_castle_geometry() {
        let board: Board = format!("{}R   K  R", " ".repeat(56)).parse().unwrap();
        assert!(is_valid_castle(&board, &king_move("e1", "g1"), Army::White));
        assert!(is_valid_castle(&board, &king_move("e1", "c1"), Army::White));
        assert!(!is_valid_castle(&board, &king_move("e1", "f1"), Army::White));
        assert!(!is_valid_castle(&board, &king_move("e1", "g2"), Army::White));
    }

    #[test]
    fn test_castle_blocked_by_piece_between() {
        // b1 knight blocks the long castle but not the short one
        let board: Board = format!("{}RN  K  R", " ".repeat(56)).parse().unwrap();
        assert!(!is_valid_castle(&board, &king_move("e1", "c1"), Army::White));
        assert!(is_valid_castle(&board, &king_move("e1", "g1"), Army::White));
    }

    #[test]
    fn test_castle_needs_own_rook() {
        let board: Board = format!("{}r   K   ", " ".repeat(56)).parse().unwrap();
        assert!(!is_valid_castle(&board, &king_move("e1", "c1"), Army::White));
        assert!(!is_valid_castle(&board, &king_move("e1", "g1"), Army::White));
    }

    #[test]
    fn test_black_castle() {
        let board: Board = format!("r   k  r{}", " ".repeat(56)).parse().unwrap();
        assert!(is_valid_castle(&board, &king_move("e8", "g8"), Army::Black));
        assert!(is_valid_castle(&board, &king_move("e8", "c8"), Army::Black));
        assert!(!is_valid_castle(&board, &king_move("e8", "g8"), Army::White));
    }
}
