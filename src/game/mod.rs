//! Game record, move resolution and end-state detection.
//!
//! A [`Game`] is a start board plus the ordered list of moves played from
//! it. It is a value: playing a move returns a new game and leaves the old
//! one untouched, so callers can keep earlier states around for undo or
//! look-ahead without copying anything themselves.
//!
//! # Example
//! ```
//! use chess_rules::board::Army;
//! use chess_rules::game::{Game, GameState};
//!
//! let game = Game::new().play_all("f3 e5 g4 Qh4").unwrap();
//! assert_eq!(game.state(), GameState::Checkmate(Army::White));
//! ```

mod history;
mod resolve;
mod status;

#[cfg(test)]
mod tests;

pub use status::GameState;

use crate::board::{Army, Board, Move, MoveError};

/// A game: the start position and every move played since.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    moves: Vec<Move>,
    // positions[i] is the board after i moves; positions[0] is the start
    positions: Vec<Board>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A new game from the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Self::with_start(Board::starting())
    }

    /// A new game from an arbitrary position, White to move.
    #[must_use]
    pub fn with_start(start: Board) -> Self {
        Game {
            moves: Vec::new(),
            positions: vec![start],
        }
    }

    /// Rebuild a game from a stored move list.
    ///
    /// Every move is re-resolved from its canonical notation, so a list
    /// that does not describe a legal game is rejected at the first bad
    /// move.
    pub fn replay(start: Board, moves: &[Move]) -> Result<Game, MoveError> {
        moves
            .iter()
            .try_fold(Game::with_start(start), |game, mv| game.replay_move(mv))
    }

    /// Play a stored move after checking it is still the legal move its
    /// canonical notation names.
    pub fn replay_move(&self, mv: &Move) -> Result<Game, MoveError> {
        let notation = mv.to_string();
        let resolved = self.resolve(&notation)?;
        if resolved != *mv {
            return Err(MoveError::Illegal { notation });
        }
        Ok(self.make_move(resolved))
    }

    /// The board before any move was played.
    #[inline]
    #[must_use]
    pub fn start(&self) -> &Board {
        &self.positions[0]
    }

    /// The current board.
    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.positions[self.moves.len()]
    }

    #[inline]
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Every board the game has passed through, start first.
    #[inline]
    #[must_use]
    pub fn positions(&self) -> &[Board] {
        &self.positions
    }

    /// Army to move: White after an even number of moves.
    #[inline]
    #[must_use]
    pub fn turn(&self) -> Army {
        if self.moves.len() % 2 == 0 {
            Army::White
        } else {
            Army::Black
        }
    }

    /// Append an already resolved move.
    ///
    /// No legality checks happen here; use [`Game::play`] for notation
    /// from the outside world.
    #[must_use]
    pub fn make_move(&self, mv: Move) -> Game {
        let next = self.board().apply_move(&mv);
        let mut game = self.clone();
        game.moves.push(mv);
        game.positions.push(next);
        game
    }

    /// Resolve `notation` for the side to move and play it.
    pub fn play(&self, notation: &str) -> Result<Game, MoveError> {
        let mv = self.resolve(notation).map_err(|err| {
            #[cfg(feature = "logging")]
            log::debug!("{} rejected: {err}", self.turn());
            err
        })?;

        #[cfg(feature = "logging")]
        log::debug!("{} plays {mv}", self.turn());

        Ok(self.make_move(mv))
    }

    /// Play a whitespace-separated sequence of moves.
    pub fn play_all(&self, notations: &str) -> Result<Game, MoveError> {
        notations
            .split_whitespace()
            .try_fold(self.clone(), |game, notation| game.play(notation))
    }
}
