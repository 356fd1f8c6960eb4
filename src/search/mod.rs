//! Move search for the AI player.
//!
//! ## Overview
//!
//! - **Minimax**: exhaustive search with depth-adjusted scoring (fastest
//!   win, slowest loss), optionally alpha-beta pruned
//! - **Policies**: Easy (random), Medium (one-ply win/block), Hard (search)
//! - **Engine**: owns config, RNG and searcher; the public entry point
//!
//! ## Usage
//!
//! ```rust
//! use ttt_engine::core::Board;
//! use ttt_engine::search::{Difficulty, Engine, SearchConfig};
//!
//! let mut engine = Engine::new(SearchConfig::default().with_seed(7));
//! let board: Board = "XX.|OO.|...".parse().unwrap();
//!
//! assert_eq!(engine.best_move(&board, Difficulty::Hard), Some(2));
//! assert_eq!(engine.best_move(&board, Difficulty::Medium), Some(2));
//! ```
//!
//! Ties between equally scored moves go to the lowest cell index.

pub mod config;
pub mod engine;
pub mod minimax;
pub mod policy;
pub mod stats;

pub use config::{Scoring, SearchConfig};
pub use engine::Engine;
pub use minimax::{Minimax, ScoredMove};
pub use policy::{
    Difficulty, MinimaxPolicy, MovePolicy, OnePlyPolicy, ParseDifficultyError, RandomPolicy,
};
pub use stats::SearchStats;
