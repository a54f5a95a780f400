use std::collections::HashMap;

use crate::board::Board;

/// Occurrence counts of piece placements across a game.
///
/// Placements are compared square by square; castling rights and en
/// passant availability are not part of the key.
#[derive(Clone, Debug, Default)]
pub(crate) struct RepetitionTable {
    counts: HashMap<Board, u32>,
}

impl RepetitionTable {
    pub(crate) fn new() -> Self {
        RepetitionTable {
            counts: HashMap::new(),
        }
    }

    pub(crate) fn get(&self, board: &Board) -> u32 {
        self.counts.get(board).copied().unwrap_or(0)
    }

    pub(crate) fn increment(&mut self, board: Board) -> u32 {
        let next = self.get(&board).saturating_add(1);
        self.counts.insert(board, next);
        next
    }

    /// Highest occurrence count of any placement.
    pub(crate) fn max(&self) -> u32 {
        self.counts.values().copied().max().unwrap_or(0)
    }
}

impl<'a> FromIterator<&'a Board> for RepetitionTable {
    fn from_iter<I: IntoIterator<Item = &'a Board>>(iter: I) -> Self {
        let mut table = RepetitionTable::new();
        for board in iter {
            table.increment(*board);
        }
        table
    }
}
