//! Move-selection policies, one per difficulty level.
//!
//! Policies are trait-based so callers can plug in their own:
//! - `RandomPolicy`: uniform over legal moves (Easy)
//! - `OnePlyPolicy`: win, else block, else random (Medium)
//! - `MinimaxPolicy`: full search (Hard)

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Board, GameRng};

use super::minimax::Minimax;

// =============================================================================
// Difficulty
// =============================================================================

/// AI strength. Carries no state; only selects a policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    #[default]
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// The policy implementing this difficulty.
    #[must_use]
    pub fn policy(self) -> &'static dyn MovePolicy {
        match self {
            Difficulty::Easy => &RandomPolicy,
            Difficulty::Medium => &OnePlyPolicy,
            Difficulty::Hard => &MinimaxPolicy,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

/// Unknown difficulty name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown difficulty {0:?} (expected easy, medium or hard)")]
pub struct ParseDifficultyError(pub String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

// =============================================================================
// Move Policy
// =============================================================================

/// Policy for choosing a move on a non-terminal board.
pub trait MovePolicy: Send + Sync {
    /// Pick a legal move for the side to move.
    ///
    /// Returns `None` only when the board has no legal moves.
    fn choose(&self, board: &Board, rng: &mut GameRng, minimax: &mut Minimax) -> Option<usize>;
}

/// Uniform random choice among legal moves.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomPolicy;

impl MovePolicy for RandomPolicy {
    fn choose(&self, board: &Board, rng: &mut GameRng, _minimax: &mut Minimax) -> Option<usize> {
        let choice = rng.choose(&board.legal_moves());
        trace!(?choice, "random move");
        choice
    }
}

/// One-ply lookahead: take a win, else block the opponent's win, else
/// play randomly. Forks are not seen.
#[derive(Clone, Copy, Debug, Default)]
pub struct OnePlyPolicy;

impl MovePolicy for OnePlyPolicy {
    fn choose(&self, board: &Board, rng: &mut GameRng, minimax: &mut Minimax) -> Option<usize> {
        if let Some(&win) = board.winning_moves(board.turn()).first() {
            trace!(location = win, "taking immediate win");
            return Some(win);
        }

        if let Some(&block) = board.winning_moves(board.opponent()).first() {
            trace!(location = block, "blocking opponent win");
            return Some(block);
        }

        RandomPolicy.choose(board, rng, minimax)
    }
}

/// Full minimax search, random only if the search finds nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct MinimaxPolicy;

impl MovePolicy for MinimaxPolicy {
    fn choose(&self, board: &Board, rng: &mut GameRng, minimax: &mut Minimax) -> Option<usize> {
        match minimax.find_best_move(board) {
            Some(best) => Some(best.location),
            None => RandomPolicy.choose(board, rng, minimax),
        }
    }
}
