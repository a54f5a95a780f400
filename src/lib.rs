pub mod board;
pub mod game;
pub mod store;

pub use board::{Army, Board, Move, Piece, PieceKind, Position};
pub use game::{Game, GameState};
pub use store::{load_game, GameStore, MemoryStore, StoreError};
