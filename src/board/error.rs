//! Error types for board, notation and move operations.

use std::fmt;

use super::{Army, PieceKind, Position};

/// Error type for position construction failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// File outside `a..=h`
    FileOutOfRange { file: char },
    /// Rank outside `1..=8`
    RankOutOfRange { rank: u8 },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::FileOutOfRange { file } => {
                write!(f, "File '{file}' out of range (must be a-h)")
            }
            PositionError::RankOutOfRange { rank } => {
                write!(f, "Rank {rank} out of range (must be 1-8)")
            }
            PositionError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for PositionError {}

/// Error type for board layout parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Layout must be exactly 64 characters
    InvalidLength { len: usize },
    /// Character that is neither a piece letter nor a space
    InvalidPiece { char: char, index: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::InvalidLength { len } => {
                write!(f, "Board layout must be 64 characters, found {len}")
            }
            LayoutError::InvalidPiece { char, index } => {
                write!(f, "Invalid piece character '{char}' at index {index}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// Error type for notation that does not match the move grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// Empty notation string
    Empty,
    /// Notation does not match the grammar
    Malformed { notation: String },
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::Empty => write!(f, "Empty move notation"),
            NotationError::Malformed { notation } => {
                write!(f, "Badly formatted move '{notation}'")
            }
        }
    }
}

impl std::error::Error for NotationError {}

/// Error type for well-formed moves that cannot be played
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The notation itself is malformed
    Notation(NotationError),
    /// Several pieces could make the move; the origin must be narrowed down
    Ambiguous { notation: String, candidates: usize },
    /// The named origin square is empty
    NoPieceAtOrigin { notation: String, from: Position },
    /// The named origin holds a different kind of piece
    WrongPiece {
        notation: String,
        from: Position,
        expected: PieceKind,
        found: PieceKind,
    },
    /// The named origin holds a piece of the army not on move
    NotYourTurn { notation: String, turn: Army },
    /// No legal move matches the notation
    Illegal { notation: String },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::Notation(err) => write!(f, "{err}"),
            MoveError::Ambiguous {
                notation,
                candidates,
            } => {
                write!(
                    f,
                    "Ambiguous move '{notation}' ({candidates} pieces can make it), \
                     try specifying origin file/rank"
                )
            }
            MoveError::NoPieceAtOrigin { notation, from } => {
                write!(f, "Illegal move '{notation}': no piece on {from}")
            }
            MoveError::WrongPiece {
                notation,
                from,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Illegal move '{notation}': {from} holds {found}, not {expected}"
                )
            }
            MoveError::NotYourTurn { notation, turn } => {
                write!(f, "Illegal move '{notation}': it is {turn}'s turn")
            }
            MoveError::Illegal { notation } => write!(f, "Illegal move '{notation}'"),
        }
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::Notation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NotationError> for MoveError {
    fn from(err: NotationError) -> Self {
        MoveError::Notation(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_error_messages() {
        let err = PositionError::FileOutOfRange { file: 'z' };
        assert!(err.to_string().contains("'z'"));
        let err = PositionError::RankOutOfRange { rank: 9 };
        assert!(err.to_string().contains('9'));
    }

    #[test]
    fn test_layout_error_messages() {
        let err = LayoutError::InvalidLength { len: 63 };
        assert!(err.to_string().contains("63"));
        let err = LayoutError::InvalidPiece {
            char: 'x',
            index: 12,
        };
        assert!(err.to_string().contains("'x'"));
        assert!(err.to_string().contains("12"));
    }

    #[test]
    fn test_notation_error_messages() {
        assert!(NotationError::Empty.to_string().contains("Empty"));
        let err = NotationError::Malformed {
            notation: "Zz9".to_string(),
        };
        assert!(err.to_string().contains("Zz9"));
    }

    #[test]
    fn test_ambiguous_suggests_disambiguation() {
        let err = MoveError::Ambiguous {
            notation: "Nd2".to_string(),
            candidates: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("Nd2"));
        assert!(msg.contains("origin file/rank"));
    }

    #[test]
    fn test_illegal_does_not_suggest_disambiguation() {
        let err = MoveError::Illegal {
            notation: "Pe2e5".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Pe2e5"));
        assert!(!msg.contains("origin"));
    }

    #[test]
    fn test_notation_error_converts() {
        let err: MoveError = NotationError::Empty.into();
        assert_eq!(err, MoveError::Notation(NotationError::Empty));
        assert!(std::error::Error::source(&err).is_some());
    }
}
