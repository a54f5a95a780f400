//! Draw detection tests.

use super::{board, play};
use crate::board::Army;
use crate::game::{Game, GameState};

const SHUFFLE: &str = "Nb1c3 Nb8c6 Nc3b1 Nc6b8";

fn shuffles(count: usize) -> String {
    vec![SHUFFLE; count].join(" ")
}

#[test]
fn test_fifty_move_rule() {
    let game = play(&Game::new(), &shuffles(25));
    assert_eq!(game.moves().len(), 100);
    assert!(game.is_tied_by_fifty_move_rule());
    // repetition also holds; the fifty-move rule is reported first
    assert!(game.is_tied_by_three_fold());
    assert_eq!(game.state(), GameState::FiftyMoveRule);
}

#[test]
fn test_fifty_move_rule_needs_a_hundred_plies() {
    let game = play(&Game::new(), &shuffles(24));
    assert!(!game.is_tied_by_fifty_move_rule());
    assert_eq!(game.state(), GameState::ThreeFold);
}

#[test]
fn test_pawn_move_resets_the_window() {
    let notations = format!("{} a3 a6 {}", shuffles(12), shuffles(13));
    let game = play(&Game::new(), &notations);
    assert_eq!(game.moves().len(), 102);
    assert!(!game.is_tied_by_fifty_move_rule());
}

#[test]
fn test_threefold_repetition() {
    let once = play(&Game::new(), "Nf3 Nf6 Ng1 Ng8");
    assert!(!once.is_tied_by_three_fold());
    assert_eq!(once.state(), GameState::NoCheck);

    let twice = play(&once, "Nf3 Nf6 Ng1 Ng8");
    assert!(twice.is_tied_by_three_fold());
    assert_eq!(twice.state(), GameState::ThreeFold);
}

#[test]
fn test_threefold_needs_identical_placement() {
    let game = play(&Game::new(), "Nf3 Nf6 Ng1 Ng8 Nc3 Nc6 Nb1 Nb8");
    // the start placement occurs three times
    assert!(game.is_tied_by_three_fold());
    let game = play(&Game::new(), "Nf3 Nf6 Ng1 Ng8 e3 Nc6 Nf3 Nb8");
    assert!(!game.is_tied_by_three_fold());
}

#[test]
fn test_bare_kings() {
    let game = Game::with_start(board(["k", "", "", "", "", "", "", "       K"]));
    assert!(game.is_dead_position());
    assert_eq!(game.state(), GameState::DeadPosition);
}

#[test]
fn test_single_minor_piece() {
    let game = Game::with_start(board(["k", "", "", "   n", "", "", "", "       K"]));
    assert_eq!(game.state(), GameState::DeadPosition);
}

#[test]
fn test_bishops_on_one_colour() {
    // c8 and f5 are both light squares
    let same = Game::with_start(board(["k b", "", "", "     B", "", "", "", "       K"]));
    assert!(same.is_dead_position());
    // c8 and e5 differ
    let opposite = Game::with_start(board(["k b", "", "", "    B", "", "", "", "       K"]));
    assert!(!opposite.is_dead_position());
}

#[test]
fn test_two_knights_are_not_dead() {
    let game = Game::with_start(board(["k", "", "", "  NN", "", "", "", "       K"]));
    assert!(!game.is_dead_position());
    assert_eq!(game.state(), GameState::NoCheck);
}

#[test]
fn test_capture_into_dead_position() {
    let game = Game::with_start(board(["       k", "", "", "", "", "", "", "Kr"]));
    assert_eq!(game.state(), GameState::Check(Army::White));
    let game = play(&game, "Kxb1");
    assert_eq!(game.state(), GameState::DeadPosition);
}
