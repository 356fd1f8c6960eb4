//! The 3x3 board value.
//!
//! A `Board` is an immutable, `Copy` value: every move produces a new
//! board and the old one is left untouched. Cells are stored row-major,
//! so index `i` is row `i / 3`, column `i % 3`.
//!
//! ```
//! use ttt_engine::core::{Board, Mark};
//!
//! let board = Board::new();
//! let next = board.play(4).unwrap();
//!
//! assert_eq!(next.turn(), Mark::O);
//! assert_eq!(next.last_move(), Some(4));
//! assert_eq!(board.legal_moves().len(), 9);
//! assert_eq!(next.legal_moves().len(), 8);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

use super::error::{BoardError, ParseBoardError};
use super::mark::{Cell, Mark};
use crate::rules::{completed_line, Outcome, WIN_LINES};

/// Number of cells on the board.
pub const BOARD_SIZE: usize = 9;

/// Legal move list. Never exceeds 9 entries, so it stays on the stack.
pub type Moves = SmallVec<[usize; BOARD_SIZE]>;

/// A Tic-Tac-Toe position.
///
/// Deserialising runs the same checks as `from_cells` and `with_turn`,
/// and requires `last_move` to hold a mark of the side that just moved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
    turn: Mark,
    last_move: Option<usize>,
}

/// Unchecked wire form of a `Board`.
#[derive(Deserialize)]
struct BoardRepr {
    cells: [Cell; BOARD_SIZE],
    turn: Mark,
    last_move: Option<usize>,
}

impl TryFrom<BoardRepr> for Board {
    type Error = ParseBoardError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        let mut board = Self::from_cells(repr.cells)?;
        if board.turn != repr.turn {
            board = board.with_turn(repr.turn)?;
        }

        if let Some(location) = repr.last_move {
            let mover = Cell::from(board.turn.opponent());
            if board.cells.get(location) != Some(&mover) {
                return Err(ParseBoardError::LastMove { location });
            }
            board.last_move = Some(location);
        }

        Ok(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The empty board with `X` to move.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
            turn: Mark::X,
            last_move: None,
        }
    }

    /// Build a board from raw cells, inferring the side to move.
    ///
    /// Equal counts give `X` to move; otherwise the side with fewer marks
    /// moves. Set-up positions where `O` opened are accepted this way.
    /// Counts that differ by more than one are rejected. The result has
    /// no `last_move`.
    pub fn from_cells(cells: [Cell; BOARD_SIZE]) -> Result<Self, ParseBoardError> {
        let x = cells.iter().filter(|&&c| c == Cell::X).count();
        let o = cells.iter().filter(|&&c| c == Cell::O).count();

        let turn = match x.abs_diff(o) {
            0 => Mark::X,
            1 if x > o => Mark::O,
            1 => Mark::X,
            _ => return Err(ParseBoardError::MarkCount { x, o }),
        };

        Ok(Self {
            cells,
            turn,
            last_move: None,
        })
    }

    /// The same position with `turn` to move.
    ///
    /// Only meaningful when the counts are equal (either side may have
    /// opened). The mover may never be ahead on marks.
    pub fn with_turn(&self, turn: Mark) -> Result<Self, ParseBoardError> {
        let x = self.count(Mark::X);
        let o = self.count(Mark::O);

        if self.count(turn) > self.count(turn.opponent()) {
            return Err(ParseBoardError::WrongTurn { turn, x, o });
        }

        Ok(Self { turn, ..*self })
    }

    /// Place the current mark at `location`.
    ///
    /// Returns a new board with the turn flipped and `last_move` set.
    /// Rejects off-board and occupied locations.
    pub fn play(&self, location: usize) -> Result<Self, BoardError> {
        let cell = self
            .cells
            .get(location)
            .ok_or(BoardError::OutOfRange { location })?;
        if !cell.is_empty() {
            return Err(BoardError::Occupied { location });
        }

        let mut cells = self.cells;
        cells[location] = Cell::from(self.turn);

        Ok(Self {
            cells,
            turn: self.turn.opponent(),
            last_move: Some(location),
        })
    }

    /// Empty cell indices in ascending order.
    #[must_use]
    pub fn legal_moves(&self) -> Moves {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(i, _)| i)
            .collect()
    }

    /// True iff some line holds three equal marks.
    #[must_use]
    pub fn is_win(&self) -> bool {
        completed_line(&self.cells).is_some()
    }

    /// True iff the board is full with no winning line.
    #[must_use]
    pub fn is_draw(&self) -> bool {
        !self.is_win() && self.empty_count() == 0
    }

    /// True for a win or a draw.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.is_win() || self.empty_count() == 0
    }

    /// The mark owning a completed line, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        completed_line(&self.cells).and_then(|[a, _, _]| self.cells[a].mark())
    }

    /// The completed line, for callers that highlight it.
    #[must_use]
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        completed_line(&self.cells)
    }

    /// `Some` once the game is over.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        if let Some(mark) = self.winner() {
            Some(Outcome::Winner(mark))
        } else if self.empty_count() == 0 {
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    /// Empty cells that would complete a line for `mark`, ascending.
    #[must_use]
    pub fn winning_moves(&self, mark: Mark) -> Moves {
        let target = Cell::from(mark);
        let mut moves = Moves::new();

        for location in self.legal_moves() {
            let completes = WIN_LINES
                .iter()
                .filter(|line| line.contains(&location))
                .any(|line| {
                    line.iter()
                        .all(|&i| i == location || self.cells[i] == target)
                });
            if completes {
                moves.push(location);
            }
        }

        moves
    }

    #[must_use]
    pub fn cell(&self, location: usize) -> Option<Cell> {
        self.cells.get(location).copied()
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.cells
    }

    /// The mark to move next.
    #[must_use]
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// The mark that is not to move (the one that moved last).
    #[must_use]
    pub fn opponent(&self) -> Mark {
        self.turn.opponent()
    }

    #[must_use]
    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        let target = Cell::from(mark);
        self.cells.iter().filter(|&&c| c == target).count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "{}{}{}", chunk[0], chunk[1], chunk[2])?;
        }
        Ok(())
    }
}

/// Parse 9 cells: `X`/`x`, `O`/`o`, and `.`, `-` or `_` for empty.
///
/// Whitespace, `|` and `/` are ignored, so `"XX.|OO.|..."` and the
/// `Display` output both parse. The side to move is inferred.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells: SmallVec<[Cell; BOARD_SIZE]> = SmallVec::new();

        for ch in s.chars() {
            let cell = match ch {
                'X' | 'x' => Cell::X,
                'O' | 'o' => Cell::O,
                '.' | '-' | '_' => Cell::Empty,
                c if c.is_whitespace() || c == '|' || c == '/' => continue,
                c => return Err(ParseBoardError::InvalidChar(c)),
            };
            cells.push(cell);
        }

        let cells: [Cell; BOARD_SIZE] = cells
            .as_slice()
            .try_into()
            .map_err(|_| ParseBoardError::Length(cells.len()))?;

        Self::from_cells(cells)
    }
}
