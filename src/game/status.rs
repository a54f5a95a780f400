//! Check and end-state classification.

use std::fmt;
use std::iter::successors;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::history::RepetitionTable;
use super::Game;
use crate::board::{en_passant_victim, Army, PieceKind, Position};

/// Half-moves without a capture or pawn move that end the game.
pub const FIFTY_MOVE_PLIES: usize = 100;

/// Outcome of classifying the current position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameState {
    NoCheck,
    /// The army's king is attacked
    Check(Army),
    /// The army's king is attacked and cannot be saved
    Checkmate(Army),
    /// The army is to move, not in check, and has no legal move
    Stalemate(Army),
    FiftyMoveRule,
    ThreeFold,
    /// Neither side has mating material
    DeadPosition,
}

impl GameState {
    /// Does this state end the game?
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameState::NoCheck | GameState::Check(_))
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameState::NoCheck => write!(f, "no check"),
            GameState::Check(army) => write!(f, "{army} is in check"),
            GameState::Checkmate(army) => write!(f, "{army} is checkmated"),
            GameState::Stalemate(army) => write!(f, "{army} is stalemated"),
            GameState::FiftyMoveRule => write!(f, "draw by the fifty-move rule"),
            GameState::ThreeFold => write!(f, "draw by threefold repetition"),
            GameState::DeadPosition => write!(f, "draw by insufficient material"),
        }
    }
}

impl Game {
    /// Classify the current position.
    ///
    /// Checkmate is reported before stalemate, then the fifty-move rule,
    /// threefold repetition, dead position and finally plain check.
    #[must_use]
    pub fn state(&self) -> GameState {
        let state = self.classify();

        #[cfg(feature = "logging")]
        log::trace!("after {} moves: {state}", self.moves().len());

        state
    }

    fn classify(&self) -> GameState {
        let order = [self.turn(), self.turn().opposite()];
        if let Some(army) = order.into_iter().find(|army| self.is_checkmate(*army)) {
            return GameState::Checkmate(army);
        }
        if let Some(army) = order.into_iter().find(|army| self.is_stalemate(*army)) {
            return GameState::Stalemate(army);
        }
        if self.is_tied_by_fifty_move_rule() {
            return GameState::FiftyMoveRule;
        }
        if self.is_tied_by_three_fold() {
            return GameState::ThreeFold;
        }
        if self.is_dead_position() {
            return GameState::DeadPosition;
        }
        match order.into_iter().find(|army| self.is_king_in_check(*army)) {
            Some(army) => GameState::Check(army),
            None => GameState::NoCheck,
        }
    }

    #[must_use]
    pub fn is_king_in_check(&self, army: Army) -> bool {
        self.board().is_king_in_check(army)
    }

    /// The king is attacked, no ally can capture or block the attacker,
    /// and the king has nowhere to go.
    #[must_use]
    pub fn is_checkmate(&self, army: Army) -> bool {
        let board = self.board();
        let Some(king) = board.king_position(army) else {
            return false;
        };
        let attackers = board.attackers(king, army.opposite());
        !attackers.is_empty()
            && !self.can_king_move(king, army)
            && !self.is_protectable(king, &attackers, army)
    }

    /// The army is to move, is not in check and has no legal move.
    #[must_use]
    pub fn is_stalemate(&self, army: Army) -> bool {
        army == self.turn() && !self.is_king_in_check(army) && !self.has_available_moves(army)
    }

    #[must_use]
    pub fn is_tied_by_fifty_move_rule(&self) -> bool {
        let moves = self.moves();
        moves.len() >= FIFTY_MOVE_PLIES
            && moves[moves.len() - FIFTY_MOVE_PLIES..]
                .iter()
                .all(|mv| !mv.is_capture() && !mv.is_pawn_move())
    }

    /// Some placement has occurred three times.
    #[must_use]
    pub fn is_tied_by_three_fold(&self) -> bool {
        let table: RepetitionTable = self.positions().iter().collect();
        table.max() >= 3
    }

    #[must_use]
    pub fn is_dead_position(&self) -> bool {
        self.board().is_insufficient_material()
    }

    /// Some adjacent square is free of own pieces and safe once the king
    /// has left its current square.
    fn can_king_move(&self, king: Position, army: Army) -> bool {
        let board = self.board();
        let lifted = board.remove(king);
        king.neighbours().any(|to| {
            board.get(to).map_or(true, |piece| piece.army() != army)
                && !lifted.is_attacked(to, army.opposite())
        })
    }

    /// A single attacker can be captured, or its line to the king blocked,
    /// by a king-safe move of some other piece.
    fn is_protectable(&self, king: Position, attackers: &[Position], army: Army) -> bool {
        let [attacker] = attackers else {
            return false;
        };
        let board = self.board();
        let Some(threat) = board.get(*attacker) else {
            return false;
        };

        let mut targets = vec![*attacker];
        if threat.kind().is_slider() {
            targets.extend(squares_between(*attacker, king));
        }
        // a pawn that just double-stepped into check can be taken en passant
        let en_passant_landing = self
            .moves()
            .last()
            .filter(|last| last.is_double_pawn_push() && last.to() == *attacker)
            .and_then(|_| attacker.offset(0, army.pawn_direction()))
            .filter(|landing| en_passant_victim(*landing, army) == Some(*attacker));

        board
            .pieces_of(army)
            .filter(|(_, piece)| piece.kind() != PieceKind::King)
            .any(|(from, piece)| {
                targets
                    .iter()
                    .any(|to| self.moves_onto(piece, from, *to).next().is_some())
                    || en_passant_landing.is_some_and(|landing| {
                        self.moves_onto(piece, from, landing)
                            .any(|mv| mv.is_en_passant())
                    })
            })
    }
}

/// Squares strictly between two squares on a shared line, nearest `from`
/// first. Empty when the squares are not aligned.
fn squares_between(from: Position, to: Position) -> Vec<Position> {
    let df = to.file_index() - from.file_index();
    let dr = to.rank_index() - from.rank_index();
    if !(df == 0 || dr == 0 || df.abs() == dr.abs()) {
        return Vec::new();
    }
    let (sf, sr) = (df.signum(), dr.signum());
    successors(from.offset(sf, sr), |pos| pos.offset(sf, sr))
        .take_while(|pos| *pos != to)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn test_squares_between() {
        assert_eq!(squares_between(pos("a1"), pos("d4")), vec![pos("b2"), pos("c3")]);
        assert_eq!(squares_between(pos("h8"), pos("h5")), vec![pos("h7"), pos("h6")]);
        assert!(squares_between(pos("e4"), pos("e5")).is_empty());
        assert!(squares_between(pos("b1"), pos("c3")).is_empty());
    }

    #[test]
    fn test_terminal_states() {
        assert!(!GameState::NoCheck.is_terminal());
        assert!(!GameState::Check(Army::White).is_terminal());
        assert!(GameState::Checkmate(Army::Black).is_terminal());
        assert!(GameState::DeadPosition.is_terminal());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            GameState::Checkmate(Army::White).to_string(),
            "White is checkmated"
        );
        assert_eq!(GameState::ThreeFold.to_string(), "draw by threefold repetition");
    }
}
