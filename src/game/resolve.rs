//! Turning notation into a fully qualified legal move.
//!
//! Resolution tries every origin square the notation admits. A candidate
//! survives if the piece there matches the symbol and the side to move, the
//! move is geometrically valid for it (including castling and en passant
//! with their history conditions), its capture and promotion flags agree
//! with the board, and it does not leave the mover's king attacked.

use super::Game;
use crate::board::{
    en_passant_victim, extract_move, is_capture_consistent, king_home, rook_home, Army,
    ExtractedMove, Move, MoveError, MoveKind, Piece, PieceKind, Position, PROMOTION_PIECES,
};

impl Game {
    /// Resolve `notation` for the side to move.
    pub fn resolve(&self, notation: &str) -> Result<Move, MoveError> {
        let extracted = extract_move(notation, self.turn())?;
        self.resolve_extracted(&extracted)
    }

    /// Resolve an already parsed move for the side to move.
    ///
    /// Exactly one legal candidate must remain. When none does and the
    /// notation names its origin square outright, the error says what is
    /// wrong with that square.
    pub fn resolve_extracted(&self, extracted: &ExtractedMove) -> Result<Move, MoveError> {
        let army = self.turn();
        let board = self.board();

        let legal: Vec<Move> = extracted
            .candidate_origins()
            .filter_map(|from| {
                let piece = board.get(from)?;
                if piece.kind() != extracted.symbol() || piece.army() != army {
                    return None;
                }
                let base = Move::new(extracted.symbol(), from, extracted.to())
                    .with_capture(extracted.is_capture())
                    .with_promotion(extracted.promotion());
                if extracted.castle().is_some() {
                    let castle = base.with_kind(MoveKind::Castle);
                    return self.is_castle_allowed(piece, &castle).then_some(castle);
                }
                self.qualify(piece, base)
            })
            .filter(|mv| self.is_king_safe(mv, army))
            .collect();

        match legal.as_slice() {
            [mv] => Ok(*mv),
            [] => Err(self.explain_rejection(extracted, army)),
            many if extracted.is_from_file_optional() || extracted.is_from_rank_optional() => {
                Err(MoveError::Ambiguous {
                    notation: extracted.notation().to_string(),
                    candidates: many.len(),
                })
            }
            _ => Err(MoveError::Illegal {
                notation: extracted.notation().to_string(),
            }),
        }
    }

    /// Every legal move of the piece on `from`, for that piece's army.
    ///
    /// Promotions appear once per promotion piece. An empty square has no
    /// moves.
    #[must_use]
    pub fn available_moves(&self, from: Position) -> Vec<Move> {
        let Some(piece) = self.board().get(from) else {
            return Vec::new();
        };
        Position::all()
            .flat_map(|to| self.moves_onto(piece, from, to))
            .collect()
    }

    /// Every legal move of the side to move.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        let army = self.turn();
        self.board()
            .pieces_of(army)
            .flat_map(|(from, _)| self.available_moves(from))
            .collect()
    }

    /// Does `army` have at least one legal move?
    #[must_use]
    pub fn has_available_moves(&self, army: Army) -> bool {
        let board = self.board();
        board.pieces_of(army).any(|(from, piece)| {
            Position::all().any(|to| self.moves_onto(piece, from, to).next().is_some())
        })
    }

    /// Legal moves of `piece` from `from` landing on `to`.
    pub(super) fn moves_onto(
        &self,
        piece: Piece,
        from: Position,
        to: Position,
    ) -> impl Iterator<Item = Move> + '_ {
        let army = piece.army();
        let board = self.board();
        let occupant = board.get(to);
        // en passant lands on an empty square but still captures
        let capture_flags: &[bool] = if piece.kind() == PieceKind::Pawn && occupant.is_none() {
            &[false, true]
        } else if occupant.is_some_and(|other| other.army() != army) {
            &[true]
        } else {
            &[false]
        };
        let promotions: &[Option<PieceKind>] =
            if piece.kind() == PieceKind::Pawn && to.rank() == army.promotion_rank() {
                &PROMOTION_OPTIONS
            } else {
                &[None]
            };

        capture_flags
            .iter()
            .flat_map(move |&capture| {
                promotions.iter().map(move |&promotion| {
                    Move::new(piece.kind(), from, to)
                        .with_capture(capture)
                        .with_promotion(promotion)
                })
            })
            .filter_map(move |base| self.qualify(piece, base))
            .filter(move |mv| self.is_king_safe(mv, army))
    }

    /// Classify a candidate as en passant, castle or normal move, or
    /// reject it.
    fn qualify(&self, piece: Piece, base: Move) -> Option<Move> {
        let board = self.board();

        let en_passant = base.with_kind(MoveKind::EnPassant);
        if self.is_en_passant_allowed(piece, &en_passant) {
            return Some(en_passant);
        }
        let castle = base.with_kind(MoveKind::Castle);
        if self.is_castle_allowed(piece, &castle) {
            return Some(castle);
        }
        (piece.is_valid_move(board, &base) && is_capture_consistent(board, &base, piece.army()))
            .then_some(base)
    }

    /// En passant needs the capture flag and an enemy pawn that has just
    /// advanced two squares past the destination.
    fn is_en_passant_allowed(&self, piece: Piece, mv: &Move) -> bool {
        if !mv.is_capture() || mv.promotion().is_some() {
            return false;
        }
        if !piece.is_valid_en_passant(self.board(), mv) {
            return false;
        }
        let Some(last) = self.moves().last() else {
            return false;
        };
        last.is_double_pawn_push() && Some(last.to()) == en_passant_victim(mv.to(), piece.army())
    }

    /// Castling needs the geometry, an unmoved king and rook, a king that
    /// is not in check and an unattacked square for the king to cross.
    fn is_castle_allowed(&self, piece: Piece, mv: &Move) -> bool {
        if mv.is_capture() || mv.promotion().is_some() {
            return false;
        }
        let board = self.board();
        if !piece.is_valid_castle(board, mv) {
            return false;
        }
        let army = piece.army();
        let Some(side) = mv.castle_side() else {
            return false;
        };
        let king = king_home(army);
        let rook = rook_home(army, side);
        if self
            .moves()
            .iter()
            .any(|prior| prior.from() == king || prior.from() == rook)
        {
            return false;
        }
        if board.is_king_in_check(army) {
            return false;
        }
        let step = if mv.to().file_index() > king.file_index() {
            1
        } else {
            -1
        };
        king.offset(step, 0)
            .is_some_and(|transit| !board.is_attacked(transit, army.opposite()))
    }

    /// After the move, the mover's king is not attacked.
    pub(super) fn is_king_safe(&self, mv: &Move, army: Army) -> bool {
        !self.board().apply_move(mv).is_king_in_check(army)
    }

    /// Best explanation for notation that matched no legal move.
    fn explain_rejection(&self, extracted: &ExtractedMove, army: Army) -> MoveError {
        let notation = extracted.notation().to_string();
        if extracted.castle().is_some() {
            return MoveError::Illegal { notation };
        }
        let (Some(file), Some(rank)) = (extracted.from_file().known(), extracted.from_rank().known())
        else {
            return MoveError::Illegal { notation };
        };
        let Ok(from) = Position::new(file, rank) else {
            return MoveError::Illegal { notation };
        };
        match self.board().get(from) {
            None => MoveError::NoPieceAtOrigin { notation, from },
            Some(piece) if piece.kind() != extracted.symbol() => MoveError::WrongPiece {
                notation,
                from,
                expected: extracted.symbol(),
                found: piece.kind(),
            },
            Some(piece) if piece.army() != army => MoveError::NotYourTurn {
                notation,
                turn: army,
            },
            Some(_) => MoveError::Illegal { notation },
        }
    }
}

const PROMOTION_OPTIONS: [Option<PieceKind>; 4] = [
    Some(PROMOTION_PIECES[0]),
    Some(PROMOTION_PIECES[1]),
    Some(PROMOTION_PIECES[2]),
    Some(PROMOTION_PIECES[3]),
];
