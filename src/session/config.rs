//! Session configuration.

use serde::{Deserialize, Serialize};

use crate::core::Mark;
use crate::search::{Difficulty, SearchConfig};

/// Settings for a human-vs-AI session.
///
/// Settings a front end persists (sound, haptics, ...) stay with the
/// front end; only what changes engine behaviour lives here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// AI strength.
    pub difficulty: Difficulty,

    /// The human's mark in the first game. `X` always moves first.
    pub human_mark: Mark,

    /// Swap marks after every game so each side takes turns opening.
    pub alternate_first: bool,

    /// Search settings, including the RNG seed.
    pub search: SearchConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Hard,
            human_mark: Mark::X,
            alternate_first: false,
            search: SearchConfig::default(),
        }
    }
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_human_mark(mut self, mark: Mark) -> Self {
        self.human_mark = mark;
        self
    }

    pub fn with_alternate_first(mut self, alternate: bool) -> Self {
        self.alternate_first = alternate;
        self
    }

    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    /// Shorthand for `search.seed`.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.search.seed = seed;
        self
    }
}
