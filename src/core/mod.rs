//! Core value types: marks, cells, the board, errors, RNG.
//!
//! Everything here is pure data. Search and orchestration live in
//! `search` and `session`.

pub mod board;
pub mod error;
pub mod mark;
pub mod rng;

pub use board::{Board, Moves, BOARD_SIZE};
pub use error::{BoardError, ParseBoardError};
pub use mark::{Cell, Mark, MarkMap};
pub use rng::{GameRng, GameRngState};
