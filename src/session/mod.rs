//! Game orchestration on top of the engine.
//!
//! - **Session**: human vs AI, turn checks, running scoreboard
//! - **play_out**: engine vs engine to the end of the game
//!
//! ## Usage
//!
//! ```rust
//! use ttt_engine::search::Difficulty;
//! use ttt_engine::session::{Session, SessionConfig};
//!
//! let mut session = Session::new(SessionConfig::new().with_difficulty(Difficulty::Hard));
//!
//! session.play_human(4).unwrap();
//! while session.is_ai_turn() {
//!     session.play_ai().unwrap();
//! }
//! assert_eq!(session.history().len(), 2);
//! ```

pub mod config;
pub mod game;
pub mod scoreboard;

pub use config::SessionConfig;
pub use game::{play_out, Session, SessionError};
pub use scoreboard::Scoreboard;
