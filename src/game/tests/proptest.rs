//! Property-based tests using proptest.

use crate::board::{is_capture_consistent, Army, Board, Move, PieceKind, Position};
use crate::game::Game;
use proptest::prelude::*;

/// Strategy to generate a random playout length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `num_moves` random legal moves, stopping early when the side
/// to move has none.
fn random_playout(seed: u64, num_moves: usize) -> Vec<Game> {
    use rand::prelude::*;

    let mut rng = StdRng::seed_from_u64(seed);
    let mut games = vec![Game::new()];
    for _ in 0..num_moves {
        let Some(game) = games.last() else { break };
        let moves = game.legal_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        let next = game.make_move(mv);
        games.push(next);
    }
    games
}

/// Attack test built directly from piece geometry.
fn has_capturing_piece(board: &Board, target: Position, army: Army) -> bool {
    board.pieces_of(army).any(|(from, piece)| {
        let promotion = (piece.kind() == PieceKind::Pawn && target.rank() == army.promotion_rank())
            .then_some(PieceKind::Queen);
        let mv = Move::new(piece.kind(), from, target)
            .with_capture(true)
            .with_promotion(promotion);
        piece.is_valid_move(board, &mv) && is_capture_consistent(board, &mv, army)
    })
}

proptest! {
    /// Property: the layout string round-trips every reachable board
    #[test]
    fn prop_layout_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        for game in random_playout(seed, num_moves) {
            let layout = game.board().to_layout();
            prop_assert_eq!(layout.chars().count(), 64);
            prop_assert_eq!(Board::from_layout(&layout).unwrap(), *game.board());
        }
    }

    /// Property: White moves exactly when the history length is even
    #[test]
    fn prop_turn_alternation(seed in seed_strategy(), num_moves in move_count_strategy()) {
        for game in random_playout(seed, num_moves) {
            let expected = if game.moves().len() % 2 == 0 { Army::White } else { Army::Black };
            prop_assert_eq!(game.turn(), expected);
        }
    }

    /// Property: resolution is pure and canonical notation resolves to itself
    #[test]
    fn prop_resolution_is_pure(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let games = random_playout(seed, num_moves);
        let Some(game) = games.last() else { return Ok(()) };
        let before = game.clone();
        for mv in game.legal_moves() {
            let notation = mv.to_string();
            prop_assert_eq!(game.resolve(&notation), Ok(mv));
            prop_assert_eq!(game.resolve(&notation), Ok(mv));
        }
        let first = game.resolve("Ke4");
        prop_assert_eq!(game.resolve("Ke4"), first);
        prop_assert_eq!(game, &before);
    }

    /// Property: a piece is attacked exactly when some enemy can capture it
    /// by geometry alone
    #[test]
    fn prop_attacker_symmetry(seed in seed_strategy(), num_moves in move_count_strategy()) {
        for game in random_playout(seed, num_moves) {
            let board = game.board();
            for army in Army::BOTH {
                for (target, _) in board.pieces_of(army.opposite()) {
                    prop_assert_eq!(
                        board.is_attacked(target, army),
                        has_capturing_piece(board, target, army),
                        "{} on {}", army, target
                    );
                    prop_assert_eq!(
                        board.attackers(target, army).is_empty(),
                        !board.is_attacked(target, army)
                    );
                }
            }
        }
    }

    /// Property: checkmate implies check and no legal move
    #[test]
    fn prop_checkmate_invariant(seed in seed_strategy(), num_moves in move_count_strategy()) {
        for game in random_playout(seed, num_moves) {
            for army in Army::BOTH {
                if game.is_checkmate(army) {
                    prop_assert!(game.is_king_in_check(army));
                    prop_assert!(!game.has_available_moves(army));
                }
            }
            if game.legal_moves().is_empty() {
                prop_assert!(game.state().is_terminal());
            }
        }
    }
}
