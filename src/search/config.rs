//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// How terminal positions are scored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scoring {
    /// `±(10 - depth)`: prefer the fastest win and the slowest loss.
    #[default]
    DepthAdjusted,
    /// `±1` regardless of depth.
    Flat,
}

impl Scoring {
    /// Score of a win (positive) or loss (negative) found `depth` plies
    /// below the root.
    #[must_use]
    pub fn win_score(self, depth: u32) -> i32 {
        match self {
            Scoring::DepthAdjusted => WIN_BASE - depth as i32,
            Scoring::Flat => 1,
        }
    }
}

/// Base value for depth-adjusted scoring. Games last at most 9 plies, so
/// every win keeps a positive score.
pub const WIN_BASE: i32 = 10;

/// Search configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Use alpha-beta pruning (default: true).
    /// Only changes how many nodes are visited, never the chosen move.
    pub alpha_beta: bool,

    /// Terminal scoring convention.
    pub scoring: Scoring,

    /// Random seed for the Easy policy and Medium's fallback.
    /// Same seed produces the same move sequence.
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            alpha_beta: true,
            scoring: Scoring::DepthAdjusted,
            seed: 42,
        }
    }
}

impl SearchConfig {
    /// Enable or disable alpha-beta pruning.
    pub fn with_alpha_beta(mut self, enabled: bool) -> Self {
        self.alpha_beta = enabled;
        self
    }

    /// Set the scoring convention.
    pub fn with_scoring(mut self, scoring: Scoring) -> Self {
        self.scoring = scoring;
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
