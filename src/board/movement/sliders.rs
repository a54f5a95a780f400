use super::super::{Board, Position};

/// Walk from `from` towards `to` one step at a time and report whether
/// every square strictly between them is empty.
fn is_path_clear(board: &Board, from: Position, to: Position) -> bool {
    let df = (to.file_index() - from.file_index()).signum();
    let dr = (to.rank_index() - from.rank_index()).signum();
    let mut current = from.offset(df, dr);
    while let Some(pos) = current {
        if pos == to {
            return true;
        }
        if board.is_occupied(pos) {
            return false;
        }
        current = pos.offset(df, dr);
    }
    false
}

/// `from` and `to` share a rank or a file and nothing stands between them.
#[must_use]
pub fn is_straight_path_clear(board: &Board, from: Position, to: Position) -> bool {
    let same_file = from.file_index() == to.file_index();
    let same_rank = from.rank_index() == to.rank_index();
    from != to && (same_file || same_rank) && is_path_clear(board, from, to)
}

/// `from` and `to` share a diagonal and nothing stands between them.
#[must_use]
pub fn is_diagonal_path_clear(board: &Board, from: Position, to: Position) -> bool {
    let df = (to.file_index() - from.file_index()).abs();
    let dr = (to.rank_index() - from.rank_index()).abs();
    df != 0 && df == dr && is_path_clear(board, from, to)
}
