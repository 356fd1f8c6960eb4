//! Winning lines and game outcomes.

use serde::{Deserialize, Serialize};

use crate::core::{Cell, Mark};

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Three in a row for this mark.
    Winner(Mark),
    /// Full board, no line.
    Draw,
}

impl Outcome {
    /// Check if a mark won.
    #[must_use]
    pub fn is_winner(&self, mark: Mark) -> bool {
        matches!(self, Outcome::Winner(m) if *m == mark)
    }

    /// The winning mark, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Winner(m) => Some(*m),
            Outcome::Draw => None,
        }
    }
}

/// Find the first completed line on a set of cells.
///
/// Lines are scanned in `WIN_LINES` order.
#[must_use]
pub fn completed_line(cells: &[Cell; 9]) -> Option<[usize; 3]> {
    WIN_LINES.iter().copied().find(|&[a, b, c]| {
        !cells[a].is_empty() && cells[a] == cells[b] && cells[b] == cells[c]
    })
}
