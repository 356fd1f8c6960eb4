//! Enumeration of every position reachable from the empty board.
//!
//! The full game tree is tiny (5,478 distinct positions), so tests and
//! benchmarks can check properties over all of them.

use rustc_hash::FxHashSet;

use crate::core::{Board, Cell};

/// Every distinct position reachable by legal play, terminal ones included.
///
/// Positions are deduplicated by cell contents; the first board reached
/// in depth-first, ascending-move order is kept (its `last_move` reflects
/// that path). Play stops at terminal positions.
#[must_use]
pub fn reachable_positions() -> Vec<Board> {
    let mut seen: FxHashSet<[Cell; 9]> = FxHashSet::default();
    let mut out = Vec::new();
    let mut stack = vec![Board::new()];

    while let Some(board) = stack.pop() {
        if !seen.insert(*board.cells()) {
            continue;
        }
        out.push(board);

        if board.is_terminal() {
            continue;
        }

        // Reverse so the lowest index is explored first.
        for &location in board.legal_moves().iter().rev() {
            if let Ok(child) = board.play(location) {
                stack.push(child);
            }
        }
    }

    out
}
