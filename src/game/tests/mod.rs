//! Game module tests.
//!
//! Tests are organized into separate files by category:
//! - `resolution.rs` - Notation resolution and its errors
//! - `special_moves.rs` - Castling, en passant and promotion
//! - `draw.rs` - Draw detection (50-move, repetition, insufficient material)
//! - `edge_cases.rs` - Check, mate and stalemate positions
//! - `proptest.rs` - Property-based tests

mod draw;
mod proptest;

use crate::board::{Board, Position};
use crate::game::Game;

pub(super) fn pos(s: &str) -> Position {
    s.parse().unwrap()
}

/// Board from rank strings given top (rank 8) first, each padded to 8.
pub(super) fn board(ranks: [&str; 8]) -> Board {
    let layout: String = ranks.iter().map(|rank| format!("{rank:<8}")).collect();
    Board::from_layout(&layout).unwrap()
}

pub(super) fn play(game: &Game, notations: &str) -> Game {
    game.play_all(notations)
        .unwrap_or_else(|err| panic!("{notations}: {err}"))
}
