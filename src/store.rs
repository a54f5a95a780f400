//! Move-list persistence seam.
//!
//! A [`GameStore`] keeps the ordered list of resolved moves for named
//! games. How the list is stored is up to the implementation; the engine
//! only hands over resolved moves and replays what it gets back.
//!
//! # Example
//! ```
//! use chess_rules::game::Game;
//! use chess_rules::store::{load_game, GameStore, MemoryStore};
//!
//! let store = MemoryStore::new();
//! store.create_game("club").unwrap();
//! let game = Game::new();
//! let mv = game.resolve("e4").unwrap();
//! store.post_move("club", mv).unwrap();
//!
//! let loaded = load_game(&store, "club").unwrap();
//! assert_eq!(loaded.moves(), &[mv]);
//! ```

use std::collections::HashMap;
use std::fmt;

use parking_lot::RwLock;

use crate::board::{Move, MoveError};
use crate::game::Game;

/// Error type for store operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// `create_game` on a name already in use
    GameExists { name: String },
    /// No game with this name
    UnknownGame { name: String },
    /// A stored move does not replay
    CorruptHistory {
        name: String,
        index: usize,
        source: MoveError,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::GameExists { name } => write!(f, "Game '{name}' already exists"),
            StoreError::UnknownGame { name } => write!(f, "Unknown game '{name}'"),
            StoreError::CorruptHistory {
                name,
                index,
                source,
            } => write!(f, "Game '{name}': stored move {index} does not replay: {source}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::CorruptHistory { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Storage of per-game move lists.
pub trait GameStore {
    fn game_exists(&self, name: &str) -> bool;

    /// Start an empty move list. Fails if the name is taken.
    fn create_game(&self, name: &str) -> Result<(), StoreError>;

    /// Every move of the game, oldest first.
    fn all_moves(&self, name: &str) -> Result<Vec<Move>, StoreError>;

    /// Append a resolved move.
    fn post_move(&self, name: &str, mv: Move) -> Result<(), StoreError>;
}

/// In-process store. One writer at a time appends to a game.
#[derive(Debug, Default)]
pub struct MemoryStore {
    games: RwLock<HashMap<String, Vec<Move>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        MemoryStore {
            games: RwLock::new(HashMap::new()),
        }
    }

    /// Names of all stored games, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.games.read().keys().cloned().collect();
        names.sort();
        names
    }
}

impl GameStore for MemoryStore {
    fn game_exists(&self, name: &str) -> bool {
        self.games.read().contains_key(name)
    }

    fn create_game(&self, name: &str) -> Result<(), StoreError> {
        let mut games = self.games.write();
        if games.contains_key(name) {
            return Err(StoreError::GameExists {
                name: name.to_string(),
            });
        }
        games.insert(name.to_string(), Vec::new());

        #[cfg(feature = "logging")]
        log::debug!("created game '{name}'");

        Ok(())
    }

    fn all_moves(&self, name: &str) -> Result<Vec<Move>, StoreError> {
        self.games
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| unknown(name))
    }

    fn post_move(&self, name: &str, mv: Move) -> Result<(), StoreError> {
        let mut games = self.games.write();
        let moves = games.get_mut(name).ok_or_else(|| unknown(name))?;
        moves.push(mv);
        Ok(())
    }
}

fn unknown(name: &str) -> StoreError {
    StoreError::UnknownGame {
        name: name.to_string(),
    }
}

/// Rebuild a stored game from the standard starting position.
pub fn load_game<S: GameStore + ?Sized>(store: &S, name: &str) -> Result<Game, StoreError> {
    let moves = store.all_moves(name)?;
    moves
        .iter()
        .enumerate()
        .try_fold(Game::new(), |game, (index, mv)| {
            game.replay_move(mv)
                .map_err(|source| StoreError::CorruptHistory {
                    name: name.to_string(),
                    index,
                    source,
                })
        })
}
