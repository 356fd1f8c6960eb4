//! Exhaustive minimax search with optional alpha-beta pruning.
//!
//! Scores are always from the point of view of the `original` mark (the
//! side to move at the root). The recursion alternates between a
//! maximizing ply (original to move) and a minimizing ply (opponent to
//! move). Depth bounds itself: every ply fills one cell, so no search is
//! more than 9 plies deep.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Board, Mark};

use super::config::SearchConfig;
use super::stats::SearchStats;

/// A root move with its exact minimax score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoredMove {
    /// Cell index, `0..9`.
    pub location: usize,
    /// Minimax value for the side that played it.
    pub score: i32,
}

/// Minimax searcher.
///
/// Holds the configuration and the statistics of the last top-level
/// search. Searching is otherwise stateless.
#[derive(Clone, Debug, Default)]
pub struct Minimax {
    config: SearchConfig,
    stats: SearchStats,
}

impl Minimax {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    /// Plain minimax value of `board` for `original`.
    ///
    /// `maximizing` is true when `original` is to move on `board`;
    /// `depth` is the ply distance from the root.
    pub fn evaluate(&mut self, board: &Board, maximizing: bool, original: Mark, depth: u32) -> i32 {
        self.stats.visit(depth);

        if let Some(score) = self.terminal_score(board, original, depth) {
            return score;
        }

        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for location in board.legal_moves() {
            let Ok(child) = board.play(location) else {
                continue;
            };
            let score = self.evaluate(&child, !maximizing, original, depth + 1);
            best = if maximizing { best.max(score) } else { best.min(score) };
        }
        best
    }

    /// Alpha-beta pruned minimax value of `board` for `original`.
    ///
    /// `alpha` is the score the maximizer can already guarantee, `beta`
    /// the score the minimizer can. Siblings are skipped once
    /// `beta <= alpha`. With the full window `(i32::MIN, i32::MAX)` the
    /// result equals `evaluate`.
    pub fn evaluate_pruned(
        &mut self,
        board: &Board,
        maximizing: bool,
        original: Mark,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.stats.visit(depth);

        if let Some(score) = self.terminal_score(board, original, depth) {
            return score;
        }

        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for location in board.legal_moves() {
            let Ok(child) = board.play(location) else {
                continue;
            };
            let score = self.evaluate_pruned(&child, !maximizing, original, depth + 1, alpha, beta);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }
        best
    }

    /// Exact score of every legal move, ascending by location.
    ///
    /// Each root child is searched with a full window, so pruning only
    /// happens below the root and every score is exact. A finished board
    /// has nothing to score. Resets `stats` first.
    pub fn score_moves(&mut self, board: &Board) -> Vec<ScoredMove> {
        let start = Instant::now();
        self.stats.reset();

        if board.is_terminal() {
            return Vec::new();
        }

        let original = board.turn();
        let moves = board
            .legal_moves()
            .into_iter()
            .filter_map(|location| {
                let child = board.play(location).ok()?;
                let score = if self.config.alpha_beta {
                    self.evaluate_pruned(&child, false, original, 1, i32::MIN, i32::MAX)
                } else {
                    self.evaluate(&child, false, original, 1)
                };
                Some(ScoredMove { location, score })
            })
            .collect();

        self.stats.time_us = start.elapsed().as_micros() as u64;
        moves
    }

    /// Best move for the side to move.
    ///
    /// Keeps the strictly greatest score, so ties go to the lowest
    /// location. Returns `None` on a won or full board.
    pub fn find_best_move(&mut self, board: &Board) -> Option<ScoredMove> {
        let mut best: Option<ScoredMove> = None;
        for candidate in self.score_moves(board) {
            if best.map_or(true, |b| candidate.score > b.score) {
                best = Some(candidate);
            }
        }

        debug!(
            turn = %board.turn(),
            best = ?best,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            time_us = self.stats.time_us,
            "minimax search finished"
        );

        best
    }

    /// Statistics of the last `score_moves` or `find_best_move` call.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn terminal_score(&self, board: &Board, original: Mark, depth: u32) -> Option<i32> {
        if let Some(winner) = board.winner() {
            let score = self.config.scoring.win_score(depth);
            return Some(if winner == original { score } else { -score });
        }
        if board.is_draw() {
            return Some(0);
        }
        None
    }
}
