//! The move-selection entry point.

use tracing::debug;

use crate::core::{Board, GameRng, GameRngState};

use super::config::SearchConfig;
use super::minimax::{Minimax, ScoredMove};
use super::policy::{Difficulty, MovePolicy};
use super::stats::SearchStats;

/// Main search context.
///
/// Owns the configuration, the RNG used by the random policies, and the
/// minimax searcher. All of it is synchronous; a caller that wants an
/// artificial "thinking" delay schedules the call itself.
#[derive(Clone, Debug)]
pub struct Engine {
    config: SearchConfig,
    rng: GameRng,
    minimax: Minimax,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl Engine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            rng: GameRng::new(config.seed),
            minimax: Minimax::new(config.clone()),
            config,
        }
    }

    /// Choose a move for the side to move at the given difficulty.
    ///
    /// Returns `None` when there is nothing to play: the board is full or
    /// already won.
    pub fn best_move(&mut self, board: &Board, difficulty: Difficulty) -> Option<usize> {
        self.best_move_with(board, difficulty.policy())
            .inspect(|location| debug!(%difficulty, location, "engine chose move"))
    }

    /// Choose a move with a custom policy.
    pub fn best_move_with(&mut self, board: &Board, policy: &dyn MovePolicy) -> Option<usize> {
        if board.is_terminal() {
            debug!(outcome = ?board.outcome(), "no move on a finished board");
            return None;
        }
        policy.choose(board, &mut self.rng, &mut self.minimax)
    }

    /// Full search result, including the score.
    pub fn find_best_move(&mut self, board: &Board) -> Option<ScoredMove> {
        self.minimax.find_best_move(board)
    }

    /// Exact scores for every legal move.
    pub fn score_moves(&mut self, board: &Board) -> Vec<ScoredMove> {
        self.minimax.score_moves(board)
    }

    /// Statistics of the last `find_best_move` or `score_moves` call.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        self.minimax.stats()
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Snapshot of the RNG, to replay the same random choices later.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    pub fn restore_rng(&mut self, state: &GameRngState) {
        self.rng = GameRng::from_state(state);
    }

    /// Independent engine for a parallel or repeated game.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self {
            config: self.config.clone(),
            rng: self.rng.fork(),
            minimax: Minimax::new(self.config.clone()),
        }
    }
}
