use super::super::Move;

pub(super) fn is_valid_knight_move(mv: &Move) -> bool {
    let (df, dr) = mv.delta();
    matches!((df.abs(), dr.abs()), (1, 2) | (2, 1))
}
