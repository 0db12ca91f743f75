use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoError {
    NotOnBoard,
    Occupied,
    Suicide,
    KoViolation,
    EmptyHistory,
    NotInProgress,
    InvalidBoardSize(u8),
}

impl fmt::Display for GoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoError::NotOnBoard => write!(f, "not on board"),
            GoError::Occupied => write!(f, "occupied"),
            GoError::Suicide => write!(f, "suicide"),
            GoError::KoViolation => write!(f, "ko violation"),
            GoError::EmptyHistory => write!(f, "nothing to undo"),
            GoError::NotInProgress => write!(f, "game not in progress"),
            GoError::InvalidBoardSize(n) => write!(f, "invalid board size {n}, expected 9, 13 or 19"),
        }
    }
}

impl std::error::Error for GoError {}
