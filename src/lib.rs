//! # ttt-engine
//!
//! A pure Tic-Tac-Toe engine with a minimax AI at three difficulty levels.
//!
//! ## Design Principles
//!
//! 1. **Values, not objects**: `Board` is an immutable `Copy` value. Every
//!    move returns a new board.
//!
//! 2. **Explicit absence**: "no move" is `None`, never a sentinel index.
//!    Illegal moves are `Err(BoardError)`, never a silent overwrite.
//!
//! 3. **Synchronous and pure**: no I/O, no threads, no timers. Pacing and
//!    presentation belong to the caller.
//!
//! ## Architecture
//!
//! - **Exhaustive search**: the whole game tree is small enough to search
//!   from any position; alpha-beta pruning only saves time.
//!
//! - **Depth-adjusted scoring**: wins score `10 - depth`, so the AI wins
//!   as fast as possible and loses as slowly as possible.
//!
//! ## Modules
//!
//! - `core`: Marks, cells, the board, errors, RNG
//! - `rules`: Winning lines, outcomes, reachable positions
//! - `search`: Minimax/alpha-beta, difficulty policies, the `Engine`
//! - `session`: Human-vs-AI sessions, scoreboard, self-play

pub mod core;
pub mod rules;
pub mod search;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardError, Cell, GameRng, GameRngState, Mark, MarkMap, Moves, ParseBoardError,
    BOARD_SIZE,
};

pub use crate::rules::{reachable_positions, Outcome, WIN_LINES};

pub use crate::search::{
    Difficulty, Engine, Minimax, MinimaxPolicy, MovePolicy, OnePlyPolicy, RandomPolicy,
    ScoredMove, Scoring, SearchConfig, SearchStats,
};

pub use crate::session::{play_out, Scoreboard, Session, SessionConfig, SessionError};
