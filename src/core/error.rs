//! Error types for board construction and move application.

/// A move that cannot be applied to a board.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("location {location} is off the board (expected 0..9)")]
    OutOfRange { location: usize },

    #[error("location {location} is already occupied")]
    Occupied { location: usize },
}

/// A board description that does not describe a reachable position.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseBoardError {
    #[error("expected 9 cells, found {0}")]
    Length(usize),

    #[error("invalid cell character {0:?}")]
    InvalidChar(char),

    #[error("mark counts X={x} O={o} differ by more than one")]
    MarkCount { x: usize, o: usize },

    #[error("{turn} cannot move with X={x} O={o}")]
    WrongTurn {
        turn: crate::core::Mark,
        x: usize,
        o: usize,
    },

    #[error("last move {location} is not a mark of the side that just moved")]
    LastMove { location: usize },
}
