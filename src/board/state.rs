use std::fmt;

use once_cell::sync::Lazy;

use super::{Army, Piece, PieceKind, Position};

static STARTING: Lazy<Board> = Lazy::new(|| {
    let back_rank = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];
    let mut board = Board::empty();
    for (file, kind) in back_rank.into_iter().enumerate() {
        let file = file as i8;
        for army in Army::BOTH {
            let home = army.home_rank() as i8 - 1;
            let pawns = army.pawn_start_rank() as i8 - 1;
            if let (Some(back), Some(front)) = (
                Position::from_coords(file, home),
                Position::from_coords(file, pawns),
            ) {
                board.squares[back.index()] = Some(Piece::new(kind, army));
                board.squares[front.index()] = Some(Piece::Pawn(army));
            }
        }
    }
    board
});

/// Immutable 64-square board.
///
/// Every transform returns a new value; a board is never changed in place
/// once handed out. Boards are small `Copy` values, so keeping one per
/// half-move in a game history is cheap.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) squares: [Option<Piece>; 64],
}

impl Board {
    /// A board with no pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// The standard starting position.
    #[must_use]
    pub fn starting() -> Self {
        *STARTING
    }

    /// Piece standing on `pos`, if any.
    #[inline]
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Piece> {
        self.squares[pos.index()]
    }

    #[inline]
    #[must_use]
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.squares[pos.index()].is_some()
    }

    /// New board with `piece` on `pos`; all other squares unchanged.
    #[must_use]
    pub fn place(&self, pos: Position, piece: Piece) -> Board {
        let mut next = *self;
        next.squares[pos.index()] = Some(piece);
        next
    }

    /// New board with `pos` emptied.
    #[must_use]
    pub fn remove(&self, pos: Position) -> Board {
        let mut next = *self;
        next.squares[pos.index()] = None;
        next
    }

    /// All occupied squares, a1 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |pos| self.get(pos).map(|piece| (pos, piece)))
    }

    /// Occupied squares belonging to `army`.
    pub fn pieces_of(&self, army: Army) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.army() == army)
    }

    /// Square of `army`'s king. Synthetic boards may have none.
    #[must_use]
    pub fn king_position(&self, army: Army) -> Option<Position> {
        self.pieces_of(army)
            .find(|(_, piece)| *piece == Piece::King(army))
            .map(|(pos, _)| pos)
    }

    /// Neither side has enough material left to ever deliver mate.
    ///
    /// Covers bare kings, a single minor piece, and bishops that all stand
    /// on squares of one colour.
    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        let mut knights = 0;
        let mut bishops = 0;
        let mut light_bishops = 0;

        for (pos, piece) in self.pieces() {
            match piece.kind() {
                PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
                PieceKind::Knight => knights += 1,
                PieceKind::Bishop => {
                    bishops += 1;
                    if (pos.file_index() + pos.rank_index()) % 2 == 1 {
                        light_bishops += 1;
                    }
                }
                PieceKind::King => {}
            }
        }

        let minors = knights + bishops;
        if minors <= 1 {
            return true;
        }
        knights == 0 && (light_bishops == 0 || light_bishops == bishops)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layout = self.to_layout();
        let rows: Vec<&str> = (0..8).map(|r| &layout[r * 8..r * 8 + 8]).collect();
        f.debug_tuple("Board").field(&rows).finish()
    }
}
