use std::env;
use std::process::ExitCode;

use chess_rules::game::Game;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: game_status <move1> <move2> ...");
        return ExitCode::FAILURE;
    }

    let mut game = Game::new();
    for notation in args.iter().skip(1) {
        match game.play(notation) {
            Ok(next) => game = next,
            Err(err) => {
                eprintln!("move {}: {err}", game.moves().len() + 1);
                return ExitCode::FAILURE;
            }
        }
    }

    let legal_moves = game.legal_moves();
    println!("layout: [{}]", game.board().to_layout());
    println!("{:#?}", game.board());
    println!("side_to_move: {}", game.turn());
    println!("state: {}", game.state());
    println!("legal_moves: {}", legal_moves.len());
    for mv in legal_moves.iter() {
        println!("{mv}");
    }
    ExitCode::SUCCESS
}
